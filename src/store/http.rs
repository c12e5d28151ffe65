//! REST implementation of the message store

use crate::board::{Draft, Message, MessageId};
use crate::store::error::{StoreError, StoreResult};
use crate::store::MessageStore;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use url::Url;

const COLLECTION: &str = "messages";

/// Message store backed by a JSON collection resource
#[derive(Debug, Clone)]
pub struct HttpMessageStore {
    client: Client,
    base_url: Url,
}

impl HttpMessageStore {
    /// Create a store rooted at `base_url` (e.g. `http://localhost:3000`)
    pub fn new(base_url: &str, timeout: Duration) -> StoreResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| StoreError::config_error(format!("invalid base url {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(StoreError::config_error(format!(
                "base url {} cannot hold a path",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::config_error(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/messages`
    pub fn collection_url(&self) -> Url {
        self.url_with(&[COLLECTION])
    }

    /// `{base}/messages/{id}`, with the id percent-encoded as one segment
    pub fn item_url(&self, id: &MessageId) -> Url {
        self.url_with(&[COLLECTION, &id.to_string()])
    }

    fn url_with(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Turn a non-success status into the matching store error
    async fn check(response: Response, resource: &str) -> StoreResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let details = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::NOT_FOUND => StoreError::not_found(resource),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                StoreError::validation(status.as_u16(), details)
            }
            _ => StoreError::network(format!("server returned {} for {}", status, resource)),
        })
    }
}

#[async_trait]
impl MessageStore for HttpMessageStore {
    async fn list(&self) -> StoreResult<Vec<Message>> {
        let url = self.collection_url();
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let response = Self::check(response, COLLECTION).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, draft: &Draft) -> StoreResult<Message> {
        let url = self.collection_url();
        tracing::debug!("POST {}", url);

        let response = self.client.post(url).json(draft).send().await?;
        let response = Self::check(response, COLLECTION).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: &MessageId, draft: &Draft) -> StoreResult<Message> {
        let url = self.item_url(id);
        tracing::debug!("PUT {}", url);

        let resource = format!("{}/{}", COLLECTION, id);
        let response = self.client.put(url).json(draft).send().await?;
        let response = Self::check(response, &resource).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: &MessageId) -> StoreResult<()> {
        let url = self.item_url(id);
        tracing::debug!("DELETE {}", url);

        let resource = format!("{}/{}", COLLECTION, id);
        let response = self.client.delete(url).send().await?;
        Self::check(response, &resource).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(base: &str) -> HttpMessageStore {
        HttpMessageStore::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_collection_url() {
        assert_eq!(
            store("http://localhost:3000").collection_url().as_str(),
            "http://localhost:3000/messages"
        );
        assert_eq!(
            store("http://example.com/api/").collection_url().as_str(),
            "http://example.com/api/messages"
        );
    }

    #[test]
    fn test_item_url_encodes_text_ids() {
        let store = store("http://localhost:3000");
        assert_eq!(
            store.item_url(&MessageId::from(2)).as_str(),
            "http://localhost:3000/messages/2"
        );
        assert_eq!(
            store.item_url(&MessageId::from("a b/c")).as_str(),
            "http://localhost:3000/messages/a%20b%2Fc"
        );
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        assert!(matches!(
            HttpMessageStore::new("not a url", Duration::from_secs(1)),
            Err(StoreError::Configuration { .. })
        ));
        assert!(matches!(
            HttpMessageStore::new("mailto:someone@example.com", Duration::from_secs(1)),
            Err(StoreError::Configuration { .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // port 9 (discard) is closed on test machines
        let store = HttpMessageStore::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let result = store.list().await;
        assert!(matches!(result, Err(StoreError::Network { .. })));
    }
}
