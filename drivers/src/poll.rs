/// Time source for settle delays and polling loops.
///
/// `SystemClock` blocks the calling thread. Tests substitute a clock whose `sleep` only
/// advances `now`.
pub trait Clock: Send + Sync {
    fn now(&self) -> std::time::Instant;

    fn sleep(&self, duration: std::time::Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> std::time::Instant {
        std::time::Instant::now()
    }

    fn sleep(&self, duration: std::time::Duration) {
        std::thread::sleep(duration);
    }
}

pub struct Poller {
    clock: std::sync::Arc<dyn Clock>,
    interval: std::time::Duration,
    timeout: std::time::Duration,
    start: std::time::Instant,
}

impl Poller {
    pub fn new(
        clock: std::sync::Arc<dyn Clock>,
        interval: std::time::Duration,
        timeout: std::time::Duration,
    ) -> Self {
        let start = clock.now();
        Self {
            clock,
            interval,
            timeout,
            start,
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.clock.now().saturating_duration_since(self.start)
    }

    pub fn expired(&self) -> bool {
        self.elapsed() > self.timeout
    }

    pub fn wait(&self) {
        self.clock.sleep(self.interval);
    }
}
