#![no_std]
#![no_main]

mod hardware;
mod scheduler_task;
mod tick_task;

use defmt::info;
use embassy_executor::Executor;
use looper::{Looper, Speaker};
use static_cell::StaticCell;

use defmt_rtt as _;
use panic_probe as _;

static EXECUTOR: StaticCell<Executor> = StaticCell::new();

#[cortex_m_rt::entry]
fn main() -> ! {
    let hardware = hardware::Hardware::get();

    #[cfg(feature = "store-flash")]
    let store = hardware::flash_store::FlashStore::new(hardware.flash);
    #[cfg(feature = "store-ram")]
    let store = looper::MemoryStore::new();

    let looper = Looper::new(
        hardware.buttons,
        Speaker::new(hardware.tone),
        hardware.leds,
        store,
    );

    let executor = EXECUTOR.init(embassy_executor::Executor::new());
    executor.run(|spawner| {
        info!("Looper starting");

        spawner
            .spawn(tick_task::create_task(scheduler_task::base_period_ms()))
            .unwrap();
        spawner.spawn(scheduler_task::create_task(looper)).unwrap();
    })
}
