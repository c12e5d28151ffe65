/// Command system for TEA pattern
///
/// Commands represent side effects requested by `update`. The executor runs
/// them on the tokio runtime and posts their outcome back to the event loop
/// as messages, which are folded in the order they arrive.
use crate::board::{Draft, MessageId, SubmitRequest};
use crate::store::MessageStore;
use crate::tea::message::{Msg, StoreMsg};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Command that can be executed to perform side effects
#[derive(Debug)]
pub enum Command {
    /// No operation - used when no side effects are needed
    None,

    /// Batch multiple commands
    Batch(Vec<Command>),

    /// Remote store call
    Store(StoreCommand),

    /// Deliver a message after a delay
    Schedule { delay: Duration, msg: Msg },
}

/// Remote store operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    List,
    Create(Draft),
    Update(MessageId, Draft),
    Delete(MessageId),
}

impl From<SubmitRequest> for StoreCommand {
    fn from(request: SubmitRequest) -> Self {
        match request {
            SubmitRequest::Create(draft) => StoreCommand::Create(draft),
            SubmitRequest::Update(id, draft) => StoreCommand::Update(id, draft),
        }
    }
}

impl Command {
    pub fn store(command: StoreCommand) -> Self {
        Command::Store(command)
    }

    pub fn schedule(delay: Duration, msg: Msg) -> Self {
        Command::Schedule { delay, msg }
    }

    /// Flatten nested batches, dropping no-ops
    pub fn flatten(self) -> Vec<Command> {
        match self {
            Command::None => Vec::new(),
            Command::Batch(commands) => commands.into_iter().flat_map(Command::flatten).collect(),
            other => vec![other],
        }
    }
}

/// Runs commands and feeds their results back as messages.
///
/// Cancelling the executor aborts the wait on every in-flight store call and
/// timer; their late completions are dropped instead of being delivered.
pub struct CommandExecutor {
    store: Arc<dyn MessageStore>,
    sender: mpsc::UnboundedSender<Msg>,
    cancel: CancellationToken,
}

impl CommandExecutor {
    pub fn new(store: Arc<dyn MessageStore>, sender: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            store,
            sender,
            cancel: CancellationToken::new(),
        }
    }

    /// Spawn the work for a command. Must be called within a tokio runtime.
    pub fn execute(&self, command: Command) {
        for command in command.flatten() {
            match command {
                Command::Store(store_command) => self.spawn_store(store_command),
                Command::Schedule { delay, msg } => self.spawn_timer(delay, msg),
                Command::None | Command::Batch(_) => {}
            }
        }
    }

    /// Cancel everything in flight and ignore late completions
    pub fn shutdown(&self) {
        if !self.cancel.is_cancelled() {
            tracing::debug!("Command executor shutting down");
            self.cancel.cancel();
        }
    }

    pub fn is_shut_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    fn spawn_store(&self, command: StoreCommand) {
        if self.cancel.is_cancelled() {
            tracing::debug!("Dropping {:?}: executor is shut down", command);
            return;
        }
        tracing::debug!("Dispatching store command {:?}", command);

        let store = Arc::clone(&self.store);
        let sender = self.sender.clone();
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            let label = format!("{:?}", command);
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("Store call {} cancelled", label);
                }
                msg = run_store_command(store.as_ref(), command) => {
                    if cancel.is_cancelled() {
                        tracing::debug!("Ignoring late completion of {}", label);
                    } else if sender.send(msg).is_err() {
                        tracing::debug!("Event loop gone, dropping completion of {}", label);
                    }
                }
            }
        });
    }

    fn spawn_timer(&self, delay: Duration, msg: Msg) {
        if self.cancel.is_cancelled() {
            return;
        }
        let sender = self.sender.clone();
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    if !cancel.is_cancelled() && sender.send(msg).is_err() {
                        tracing::debug!("Event loop gone, dropping scheduled message");
                    }
                }
            }
        });
    }
}

/// Perform one store call and wrap its outcome as a message
pub async fn run_store_command(store: &dyn MessageStore, command: StoreCommand) -> Msg {
    let msg = match command {
        StoreCommand::List => StoreMsg::Loaded(store.list().await),
        StoreCommand::Create(draft) => StoreMsg::Created(store.create(&draft).await),
        StoreCommand::Update(id, draft) => {
            let result = store.update(&id, &draft).await;
            StoreMsg::Updated { id, result }
        }
        StoreCommand::Delete(id) => {
            let result = store.delete(&id).await;
            StoreMsg::Deleted { id, result }
        }
    };
    Msg::Store(msg)
}
