//! Entry/exit lifecycle for items in the visible page
//!
//! Purely presentational: tracking an item here never affects the
//! collection. Items leaving the page keep a snapshot of their value so they
//! can still be drawn while they fade out.

use std::time::Duration;
use tokio::time::Instant;

pub const ENTER_DURATION: Duration = Duration::from_millis(300);
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Entering,
    Present,
    Exiting,
    /// Not tracked (never seen, or exit animation finished)
    Removed,
}

#[derive(Debug, Clone)]
pub struct TrackedItem<K, V> {
    pub key: K,
    pub value: V,
    pub phase: TransitionPhase,
    since: Instant,
}

impl<K, V> TrackedItem<K, V> {
    /// Fraction of the current enter/exit animation that has run, in `0.0..=1.0`
    pub fn progress(&self, now: Instant, duration: Duration) -> f64 {
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.since);
        (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
    }
}

#[derive(Debug, Clone)]
pub struct TransitionController<K, V> {
    items: Vec<TrackedItem<K, V>>,
    enter_duration: Duration,
    exit_duration: Duration,
}

impl<K, V> Default for TransitionController<K, V> {
    fn default() -> Self {
        Self::new(ENTER_DURATION, EXIT_DURATION)
    }
}

impl<K, V> TransitionController<K, V> {
    pub fn new(enter_duration: Duration, exit_duration: Duration) -> Self {
        Self {
            items: Vec::new(),
            enter_duration,
            exit_duration,
        }
    }

    pub fn enter_duration(&self) -> Duration {
        self.enter_duration
    }

    pub fn exit_duration(&self) -> Duration {
        self.exit_duration
    }

    /// Tracked items in render order, exiting ones included
    pub fn items(&self) -> &[TrackedItem<K, V>] {
        &self.items
    }

    pub fn render_order(&self) -> Vec<&K> {
        self.items.iter().map(|item| &item.key).collect()
    }

    /// No animation is running
    pub fn is_idle(&self) -> bool {
        self.items
            .iter()
            .all(|item| item.phase == TransitionPhase::Present)
    }

    /// Advance timed phases. Returns true if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        let mut changed = false;

        for item in &mut self.items {
            if item.phase == TransitionPhase::Entering
                && now.saturating_duration_since(item.since) >= self.enter_duration
            {
                item.phase = TransitionPhase::Present;
                item.since = now;
                changed = true;
            }
        }

        let exit_duration = self.exit_duration;
        self.items.retain(|item| {
            item.phase != TransitionPhase::Exiting
                || now.saturating_duration_since(item.since) < exit_duration
        });

        changed || self.items.len() != before
    }
}

impl<K: PartialEq, V> TransitionController<K, V> {
    pub fn phase(&self, key: &K) -> TransitionPhase {
        self.items
            .iter()
            .find(|item| &item.key == key)
            .map(|item| item.phase)
            .unwrap_or(TransitionPhase::Removed)
    }

    /// Reconcile tracking with the items currently visible.
    ///
    /// New keys start `Entering`, keys that disappeared start `Exiting`, and
    /// exiting keys that come back restart at `Entering`. Visible items take
    /// the order given; exiting items stay near their previous position.
    pub fn sync<I>(&mut self, visible: I, now: Instant)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut previous: Vec<Option<TrackedItem<K, V>>> =
            std::mem::take(&mut self.items).into_iter().map(Some).collect();
        let mut next = Vec::with_capacity(previous.len());

        for (key, value) in visible {
            let existing = previous
                .iter_mut()
                .find(|slot| matches!(slot, Some(item) if item.key == key))
                .and_then(Option::take);

            match existing {
                Some(mut item) => {
                    if item.phase == TransitionPhase::Exiting {
                        item.phase = TransitionPhase::Entering;
                        item.since = now;
                    }
                    item.value = value;
                    next.push(item);
                }
                None => next.push(TrackedItem {
                    key,
                    value,
                    phase: TransitionPhase::Entering,
                    since: now,
                }),
            }
        }

        for (index, slot) in previous.into_iter().enumerate() {
            let Some(mut item) = slot else { continue };
            if item.phase != TransitionPhase::Exiting {
                item.phase = TransitionPhase::Exiting;
                item.since = now;
            }
            let at = index.min(next.len());
            next.insert(at, item);
        }

        self.items = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn visible(keys: &[u32]) -> Vec<(u32, String)> {
        keys.iter().map(|k| (*k, format!("item {}", k))).collect()
    }

    #[test]
    fn test_new_items_enter_then_become_present() {
        let t0 = Instant::now();
        let mut transitions = TransitionController::default();
        transitions.sync(visible(&[1, 2]), t0);
        assert_eq!(transitions.phase(&1), TransitionPhase::Entering);

        transitions.tick(t0 + ms(299));
        assert_eq!(transitions.phase(&1), TransitionPhase::Entering);

        assert!(transitions.tick(t0 + ms(300)));
        assert_eq!(transitions.phase(&1), TransitionPhase::Present);
        assert!(transitions.is_idle());
    }

    #[test]
    fn test_exit_lasts_exit_duration_then_removed() {
        let t0 = Instant::now();
        let mut transitions = TransitionController::default();
        transitions.sync(visible(&[1, 2]), t0);
        transitions.tick(t0 + ms(300));

        transitions.sync(visible(&[1]), t0 + ms(400));
        assert_eq!(transitions.phase(&2), TransitionPhase::Exiting);
        assert_eq!(transitions.items().len(), 2);

        transitions.tick(t0 + ms(699));
        assert_eq!(transitions.phase(&2), TransitionPhase::Exiting);

        transitions.tick(t0 + ms(700));
        assert_eq!(transitions.phase(&2), TransitionPhase::Removed);
        assert_eq!(transitions.items().len(), 1);
    }

    #[test]
    fn test_reappearing_item_restarts_at_entering() {
        let t0 = Instant::now();
        let mut transitions = TransitionController::default();
        transitions.sync(visible(&[1]), t0);
        transitions.tick(t0 + ms(300));
        transitions.sync(visible(&[]), t0 + ms(310));
        assert_eq!(transitions.phase(&1), TransitionPhase::Exiting);

        transitions.sync(visible(&[1]), t0 + ms(350));
        assert_eq!(transitions.phase(&1), TransitionPhase::Entering);

        transitions.tick(t0 + ms(700));
        assert_eq!(transitions.phase(&1), TransitionPhase::Present);
    }

    #[test]
    fn test_exiting_item_keeps_its_position_and_snapshot() {
        let t0 = Instant::now();
        let mut transitions = TransitionController::default();
        transitions.sync(visible(&[1, 2, 3]), t0);
        transitions.sync(visible(&[1, 3]), t0 + ms(10));

        assert_eq!(transitions.render_order(), vec![&1, &2, &3]);
        assert_eq!(transitions.items()[1].value, "item 2");
    }

    #[test]
    fn test_present_items_pick_up_new_values() {
        let t0 = Instant::now();
        let mut transitions = TransitionController::default();
        transitions.sync(vec![(1u32, "old".to_string())], t0);
        transitions.sync(vec![(1u32, "new".to_string())], t0 + ms(5));
        assert_eq!(transitions.items()[0].value, "new");
        assert_eq!(transitions.phase(&1), TransitionPhase::Entering);
    }

    #[test]
    fn test_progress() {
        let t0 = Instant::now();
        let mut transitions: TransitionController<u32, String> = TransitionController::default();
        transitions.sync(visible(&[1]), t0);
        let item = &transitions.items()[0];
        assert_eq!(item.progress(t0, ENTER_DURATION), 0.0);
        assert!((item.progress(t0 + ms(150), ENTER_DURATION) - 0.5).abs() < 1e-9);
        assert_eq!(item.progress(t0 + ms(900), ENTER_DURATION), 1.0);
    }
}
