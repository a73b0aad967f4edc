//! Cancelable one-shot timers for the lesson, fired by polling with a clock.
//!
//! Entries are ordered by deadline, then by scheduling order. Every entry is
//! tagged with the slide that owns it so a whole slide can be torn down at
//! once.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};

use lesson_core::model::{SlideId, TimerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    QuizFeedback,
    AutoplayTick,
}

/// A timer that reached its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredTimer {
    pub id: TimerId,
    pub owner: SlideId,
    pub kind: TimerKind,
    pub deadline: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    owner: SlideId,
    kind: TimerKind,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    by_deadline: BTreeMap<(DateTime<Utc>, TimerId), Entry>,
    deadlines: HashMap<TimerId, DateTime<Utc>>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(
        &mut self,
        owner: SlideId,
        kind: TimerKind,
        deadline: DateTime<Utc>,
    ) -> TimerId {
        let id = TimerId::new(self.next_id);
        self.next_id += 1;
        self.by_deadline.insert((deadline, id), Entry { owner, kind });
        self.deadlines.insert(id, deadline);
        tracing::debug!(timer = %id, owner = %owner, ?kind, %deadline, "timer scheduled");
        id
    }

    /// Returns `false` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let Some(deadline) = self.deadlines.remove(&id) else {
            return false;
        };
        self.by_deadline.remove(&(deadline, id));
        tracing::debug!(timer = %id, "timer cancelled");
        true
    }

    /// Cancel every timer owned by `owner`; returns how many were removed.
    pub fn cancel_owner(&mut self, owner: SlideId) -> usize {
        let ids: Vec<TimerId> = self
            .by_deadline
            .iter()
            .filter(|(_, entry)| entry.owner == owner)
            .map(|((_, id), _)| *id)
            .collect();
        for id in &ids {
            self.cancel(*id);
        }
        ids.len()
    }

    /// Remove and return the earliest timer due at `now`, if any.
    pub fn pop_due(&mut self, now: DateTime<Utc>) -> Option<FiredTimer> {
        let (&(deadline, id), _) = self.by_deadline.first_key_value()?;
        if deadline > now {
            return None;
        }
        let entry = self.by_deadline.remove(&(deadline, id))?;
        self.deadlines.remove(&id);
        Some(FiredTimer {
            id,
            owner: entry.owner,
            kind: entry.kind,
            deadline,
        })
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.by_deadline.keys().next().map(|(deadline, _)| *deadline)
    }

    #[must_use]
    pub fn contains(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use lesson_core::time::fixed_now;

    #[test]
    fn fires_in_deadline_then_schedule_order() {
        let mut queue = TimerQueue::new();
        let now = fixed_now();
        let owner = SlideId::new(1);
        let late = queue.schedule(owner, TimerKind::AutoplayTick, now + Duration::seconds(2));
        let first = queue.schedule(owner, TimerKind::QuizFeedback, now + Duration::seconds(1));
        let second = queue.schedule(owner, TimerKind::AutoplayTick, now + Duration::seconds(1));

        let later = now + Duration::seconds(5);
        let order: Vec<TimerId> = std::iter::from_fn(|| queue.pop_due(later))
            .map(|fired| fired.id)
            .collect();
        assert_eq!(order, vec![first, second, late]);
        assert!(queue.is_empty());
    }

    #[test]
    fn nothing_fires_before_deadline() {
        let mut queue = TimerQueue::new();
        let now = fixed_now();
        queue.schedule(SlideId::new(1), TimerKind::QuizFeedback, now + Duration::milliseconds(1500));

        assert_eq!(queue.pop_due(now + Duration::milliseconds(1499)), None);
        let fired = queue.pop_due(now + Duration::milliseconds(1500)).unwrap();
        assert_eq!(fired.kind, TimerKind::QuizFeedback);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut queue = TimerQueue::new();
        let now = fixed_now();
        let id = queue.schedule(SlideId::new(1), TimerKind::QuizFeedback, now);
        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        assert_eq!(queue.pop_due(now + Duration::hours(1)), None);
    }

    #[test]
    fn cancel_owner_leaves_other_slides_alone() {
        let mut queue = TimerQueue::new();
        let now = fixed_now();
        let gone = SlideId::new(1);
        let kept = SlideId::new(2);
        queue.schedule(gone, TimerKind::AutoplayTick, now);
        queue.schedule(gone, TimerKind::QuizFeedback, now);
        let survivor = queue.schedule(kept, TimerKind::AutoplayTick, now);

        assert_eq!(queue.cancel_owner(gone), 2);
        assert_eq!(queue.len(), 1);
        assert!(queue.contains(survivor));
        assert_eq!(queue.next_deadline(), Some(now));
    }
}
