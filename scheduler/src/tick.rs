use embassy_sync::{blocking_mutex::raw::RawMutex, signal::Signal};

/// Pending-tick indicator shared between the tick source and the scheduler.
///
/// The tick source only pends; the scheduler is the single consumer. Reading
/// and clearing happen under the signal's mutex, so a tick arriving in between
/// is neither lost nor counted twice. Ticks pended while one is still
/// pending coalesce into one.
pub struct TickFlag<M: RawMutex> {
    signal: Signal<M, ()>,
}

impl<M: RawMutex> TickFlag<M> {
    pub const fn new() -> Self {
        Self {
            signal: Signal::new(),
        }
    }

    pub fn pend(&self) {
        self.signal.signal(());
    }

    pub fn is_pending(&self) -> bool {
        self.signal.signaled()
    }

    /// Consumes a pending tick, returning whether there was one.
    pub fn take(&self) -> bool {
        self.signal.try_take().is_some()
    }

    /// Waits for the next tick and consumes it.
    pub async fn wait(&self) {
        self.signal.wait().await;
    }
}

impl<M: RawMutex> Default for TickFlag<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[test]
    fn take_consumes_a_single_pending_tick() {
        let flag = TickFlag::<NoopRawMutex>::new();

        assert!(!flag.take());
        flag.pend();
        assert!(flag.is_pending());
        assert!(flag.take());
        assert!(!flag.is_pending());
        assert!(!flag.take());
    }

    #[test]
    fn repeated_pends_coalesce() {
        let flag = TickFlag::<NoopRawMutex>::new();

        flag.pend();
        flag.pend();
        assert!(flag.take());
        assert!(!flag.take());
    }

    #[test]
    fn wait_returns_on_pending_tick_and_clears_it() {
        let flag = TickFlag::<NoopRawMutex>::new();

        flag.pend();
        embassy_futures::block_on(flag.wait());
        assert!(!flag.is_pending());
    }
}
