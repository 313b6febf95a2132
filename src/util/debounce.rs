use std::time::Duration;

/// Coalesces bursts of triggers into a single delayed value.
///
/// Time is passed in explicitly (seconds, as reported by `egui::InputState::time`),
/// so the caller drives the clock from its frame loop.
#[derive(Debug, Clone)]
pub struct Debounced<T> {
    delay: f64,
    pending: Option<(f64, T)>,
}

impl<T> Debounced<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay: delay.as_secs_f64(),
            pending: None,
        }
    }

    /// Cancels any pending value and schedules `value` for `now + delay`
    pub fn trigger(&mut self, now: f64, value: T) {
        self.pending = Some((now + self.delay, value));
    }

    /// Takes the pending value once its deadline has passed
    pub fn poll(&mut self, now: f64) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.pending.take().map(|(_, value)| value),
            _ => None,
        }
    }

    /// Time left until the pending value fires, if any
    pub fn remaining(&self, now: f64) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(deadline, _)| Duration::from_secs_f64((deadline - now).max(0.0)))
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debounced<T> {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_delay() {
        let mut debounced = Debounced::new(Duration::from_millis(100));
        debounced.trigger(1.0, 640.0);
        assert_eq!(debounced.poll(1.05), None);
        assert_eq!(debounced.poll(1.1), Some(640.0));
        assert_eq!(debounced.poll(2.0), None);
    }

    #[test]
    fn test_burst_coalesces_into_one() {
        let mut debounced = Debounced::default();
        let mut fired = Vec::new();
        // Ten resize events 20ms apart, polled every 10ms
        for step in 0..40 {
            let now = step as f64 * 0.01;
            if step % 2 == 0 && step < 20 {
                debounced.trigger(now, step);
            }
            if let Some(value) = debounced.poll(now) {
                fired.push(value);
            }
        }
        assert_eq!(fired, vec![18]);
    }

    #[test]
    fn test_cancel_and_remaining() {
        let mut debounced = Debounced::new(Duration::from_millis(100));
        assert_eq!(debounced.remaining(0.0), None);
        debounced.trigger(0.0, ());
        assert!(debounced.is_pending());
        let remaining = debounced.remaining(0.04).unwrap();
        assert!((remaining.as_secs_f64() - 0.06).abs() < 1e-9);
        debounced.cancel();
        assert!(!debounced.is_pending());
        assert_eq!(debounced.poll(10.0), None);
    }
}
