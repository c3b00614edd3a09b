use defmt::info;
use embassy_executor::SpawnToken;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Ticker};
use scheduler::TickFlag;

/// Pended once per base tick, consumed by the scheduler task.
pub static TICK_FLAG: TickFlag<CriticalSectionRawMutex> = TickFlag::new();

pub fn create_task(base_period_ms: u32) -> SpawnToken<impl Sized> {
    tick_task(Duration::from_millis(base_period_ms.into()))
}

#[embassy_executor::task]
pub async fn tick_task(period: Duration) {
    info!("Tick: every {} ms", period.as_millis());

    let mut ticker = Ticker::every(period);
    loop {
        ticker.next().await;
        TICK_FLAG.pend();
    }
}
