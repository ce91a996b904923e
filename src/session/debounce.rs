//! Single-deadline debouncer used for auto-save and status resets.

use tokio::time::{Duration, Instant};

/// Tracks one pending deadline; re-arming replaces it.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Push the deadline to `delay` from now, dropping any earlier one.
    pub fn arm(&mut self) {
        self.deadline = Instant::now().checked_add(self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

/// Sleep until `deadline`, or forever when there is none.
pub async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending::<()>().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_arm_sets_deadline_after_delay() {
        let mut debouncer = Debouncer::new(Duration::from_millis(1000));
        assert!(!debouncer.is_armed());

        let before = Instant::now();
        debouncer.arm();

        assert_eq!(debouncer.deadline(), Some(before + Duration::from_millis(1000)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_pushes_deadline_back() {
        let mut debouncer = Debouncer::new(Duration::from_millis(1000));
        debouncer.arm();
        let first = debouncer.deadline().unwrap();

        tokio::time::sleep(Duration::from_millis(400)).await;
        debouncer.arm();

        let second = debouncer.deadline().unwrap();
        assert_eq!(second.duration_since(first), Duration::from_millis(400));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_clears_deadline() {
        let mut debouncer = Debouncer::new(Duration::from_millis(1000));
        debouncer.arm();
        debouncer.cancel();
        assert!(debouncer.deadline().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_deadline() {
        let start = Instant::now();
        wait_for(Some(start + Duration::from_millis(250))).await;
        assert!(Instant::now() >= start + Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_none_never_fires() {
        let result =
            tokio::time::timeout(Duration::from_secs(3600), wait_for(None)).await;
        assert!(result.is_err());
    }
}
