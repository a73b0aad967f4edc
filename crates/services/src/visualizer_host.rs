use chrono::{DateTime, Duration, Utc};

use lesson_core::divisor::{DivisorError, GridLayout};
use lesson_core::model::{SlideId, TimerId};
use lesson_core::visualizer::{
    AutoplayStep, DivisorVisualizer, VisualizerMode, VisualizerSnapshot,
};

use crate::error::SettingsError;
use crate::settings::check_delay;
use crate::timer::{FiredTimer, TimerKind, TimerQueue};

/// Owns a `DivisorVisualizer` and its repeating autoplay ticker.
#[derive(Debug)]
pub struct VisualizerHost {
    slide: SlideId,
    visualizer: DivisorVisualizer,
    interval: Duration,
    ticker: Option<TimerId>,
}

impl VisualizerHost {
    /// Wrap `visualizer` and, in autoplay mode, schedule its first tick.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if `interval` is not positive or longer than
    /// an hour.
    pub fn start(
        slide: SlideId,
        visualizer: DivisorVisualizer,
        interval: Duration,
        timers: &mut TimerQueue,
        now: DateTime<Utc>,
    ) -> Result<Self, SettingsError> {
        check_delay("autoplay_interval", interval)?;
        let mut host = Self {
            slide,
            visualizer,
            interval,
            ticker: None,
        };
        host.arm(timers, now);
        Ok(host)
    }

    fn arm(&mut self, timers: &mut TimerQueue, from: DateTime<Utc>) {
        if !self.visualizer.is_autoplay() {
            return;
        }
        match from.checked_add_signed(self.interval) {
            Some(deadline) => {
                self.ticker = Some(timers.schedule(self.slide, TimerKind::AutoplayTick, deadline));
            }
            None => tracing::warn!(slide = %self.slide, %from, "autoplay deadline out of range; ticker stopped"),
        }
    }

    #[must_use]
    pub fn visualizer(&self) -> &DivisorVisualizer {
        &self.visualizer
    }

    #[must_use]
    pub fn ticker(&self) -> Option<TimerId> {
        self.ticker
    }

    /// Turn autoplay on or off. Either way the demonstration starts over.
    pub fn set_autoplay(&mut self, enabled: bool, timers: &mut TimerQueue, now: DateTime<Utc>) {
        let mode = if enabled {
            VisualizerMode::Autoplay
        } else {
            VisualizerMode::Manual
        };
        if !self.visualizer.set_mode(mode) {
            return;
        }
        if let Some(id) = self.ticker.take() {
            timers.cancel(id);
        }
        tracing::debug!(slide = %self.slide, enabled, "autoplay toggled");
        self.arm(timers, now);
    }

    /// # Errors
    ///
    /// See `DivisorVisualizer::set_columns`.
    pub fn set_columns(&mut self, columns: u32) -> Result<GridLayout, DivisorError> {
        self.visualizer.set_columns(columns)
    }

    /// Handle a fired timer: step once and re-arm from the fired deadline.
    pub fn on_timer(&mut self, fired: FiredTimer, timers: &mut TimerQueue) -> Option<AutoplayStep> {
        if fired.owner != self.slide || self.ticker != Some(fired.id) {
            tracing::debug!(timer = %fired.id, slide = %self.slide, "ignoring foreign timer");
            return None;
        }
        self.ticker = None;
        let step = self.visualizer.step()?;
        self.arm(timers, fired.deadline);
        Some(step)
    }

    /// Stop the ticker.
    pub fn dispose(&mut self, timers: &mut TimerQueue) {
        if let Some(id) = self.ticker.take() {
            timers.cancel(id);
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> VisualizerSnapshot {
        self.visualizer.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_core::divisor::ExplanationCategory;
    use lesson_core::time::fixed_now;

    fn host(timers: &mut TimerQueue, mode: VisualizerMode) -> VisualizerHost {
        let visualizer = DivisorVisualizer::new(4, mode).unwrap();
        VisualizerHost::start(
            SlideId::new(1),
            visualizer,
            Duration::milliseconds(2500),
            timers,
            fixed_now(),
        )
        .unwrap()
    }

    fn fire_all(host: &mut VisualizerHost, timers: &mut TimerQueue, at: DateTime<Utc>) -> Vec<u32> {
        let mut seen = Vec::new();
        while let Some(fired) = timers.pop_due(at) {
            if let Some(step) = host.on_timer(fired, timers) {
                seen.push(step.columns);
            }
        }
        seen
    }

    #[test]
    fn ticks_every_interval_and_wraps() {
        let mut timers = TimerQueue::new();
        let mut host = host(&mut timers, VisualizerMode::Autoplay);
        assert_eq!(timers.next_deadline(), Some(fixed_now() + Duration::milliseconds(2500)));

        let seen = fire_all(&mut host, &mut timers, fixed_now() + Duration::milliseconds(10_000));
        assert_eq!(seen, vec![1, 2, 4, 1]);
        assert_eq!(timers.len(), 1);
        assert_eq!(
            host.snapshot().explanation,
            Some(ExplanationCategory::FirstStep)
        );
    }

    #[test]
    fn manual_mode_schedules_nothing() {
        let mut timers = TimerQueue::new();
        let mut host = host(&mut timers, VisualizerMode::Manual);
        assert!(timers.is_empty());
        assert!(host.set_columns(2).unwrap().is_exact);
    }

    #[test]
    fn disabling_autoplay_stops_ticker() {
        let mut timers = TimerQueue::new();
        let mut host = host(&mut timers, VisualizerMode::Autoplay);
        host.set_autoplay(false, &mut timers, fixed_now());
        assert!(timers.is_empty());
        assert_eq!(host.snapshot().columns, 1);

        host.set_autoplay(true, &mut timers, fixed_now() + Duration::seconds(1));
        assert_eq!(
            timers.next_deadline(),
            Some(fixed_now() + Duration::milliseconds(3500))
        );
    }

    #[test]
    fn dispose_stops_ticker() {
        let mut timers = TimerQueue::new();
        let mut host = host(&mut timers, VisualizerMode::Autoplay);
        host.dispose(&mut timers);
        assert!(timers.is_empty());
        assert!(fire_all(&mut host, &mut timers, fixed_now() + Duration::hours(1)).is_empty());
    }

    #[test]
    fn out_of_range_interval_is_rejected() {
        let mut timers = TimerQueue::new();
        for interval in [Duration::MAX, Duration::zero(), Duration::milliseconds(-1)] {
            let visualizer = DivisorVisualizer::new(4, VisualizerMode::Autoplay).unwrap();
            let err = VisualizerHost::start(SlideId::new(1), visualizer, interval, &mut timers, fixed_now())
                .unwrap_err();
            assert!(matches!(err, SettingsError::ZeroDelay { .. } | SettingsError::DelayTooLong { .. }));
        }
        assert!(timers.is_empty());
    }

    #[test]
    fn ticker_stops_at_the_calendar_end() {
        let mut timers = TimerQueue::new();
        let visualizer = DivisorVisualizer::new(4, VisualizerMode::Autoplay).unwrap();
        let host = VisualizerHost::start(
            SlideId::new(1),
            visualizer,
            Duration::milliseconds(2500),
            &mut timers,
            DateTime::<Utc>::MAX_UTC,
        )
        .unwrap();
        assert_eq!(host.ticker(), None);
        assert!(timers.is_empty());
    }

    #[test]
    fn timer_from_other_slide_is_ignored() {
        let mut timers = TimerQueue::new();
        let mut host = host(&mut timers, VisualizerMode::Autoplay);
        let mine = host.ticker().unwrap();

        let stray = FiredTimer {
            id: mine,
            owner: SlideId::new(99),
            kind: TimerKind::AutoplayTick,
            deadline: fixed_now() + Duration::milliseconds(2500),
        };
        assert_eq!(host.on_timer(stray, &mut timers), None);
        assert_eq!(host.snapshot().columns, 1);
        assert_eq!(host.snapshot().explanation, None);
        assert_eq!(host.ticker(), Some(mine));
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn superseded_ticker_is_ignored() {
        let mut timers = TimerQueue::new();
        let mut host = host(&mut timers, VisualizerMode::Autoplay);
        let old = host.ticker().unwrap();
        host.set_autoplay(false, &mut timers, fixed_now());
        host.set_autoplay(true, &mut timers, fixed_now());
        let current = host.ticker().unwrap();
        assert_ne!(old, current);

        let stale = FiredTimer {
            id: old,
            owner: SlideId::new(1),
            kind: TimerKind::AutoplayTick,
            deadline: fixed_now() + Duration::milliseconds(2500),
        };
        assert_eq!(host.on_timer(stale, &mut timers), None);
        assert_eq!(host.snapshot().columns, 1);
        assert_eq!(host.snapshot().explanation, None);
        assert_eq!(host.ticker(), Some(current));
        assert_eq!(timers.len(), 1);
    }
}
