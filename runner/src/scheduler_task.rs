use defmt::info;
use embassy_executor::SpawnToken;
use looper::{LOOP_LENGTH, Looper, LooperTask, Speaker, TaskPeriods, new_scheduler};
use scheduler::{Scheduler, reduce_periods};
use static_cell::StaticCell;

use crate::hardware::{buttons::ButtonBank, leds::LedBar, speaker::PwmTone};
use crate::tick_task::TICK_FLAG;

#[cfg(all(feature = "store-flash", feature = "store-ram"))]
compile_error!("feature \"store-flash\" and feature \"store-ram\" cannot be enabled at the same time");

#[cfg(not(any(feature = "store-flash", feature = "store-ram")))]
compile_error!("one of feature \"store-flash\" or feature \"store-ram\" must be enabled");

const TASK_PERIODS: TaskPeriods = TaskPeriods {
    buttons: 1,
    play: 5,
    record: 5,
};

#[cfg(feature = "store-flash")]
pub type Store = crate::hardware::flash_store::FlashStore<'static>;
#[cfg(feature = "store-ram")]
pub type Store = looper::MemoryStore<LOOP_LENGTH>;

pub type BoardLooper =
    Looper<ButtonBank<'static>, Speaker<PwmTone<'static>>, LedBar<'static>, Store, LOOP_LENGTH>;

pub struct SchedulerTaskState {
    scheduler: Scheduler<LooperTask, 3>,
    looper: BoardLooper,
}

impl SchedulerTaskState {
    pub fn new(looper: BoardLooper) -> Self {
        Self {
            scheduler: new_scheduler(TASK_PERIODS),
            looper,
        }
    }
}

pub static SCHEDULER_TASK_STATE: StaticCell<SchedulerTaskState> = StaticCell::new();

/// Tick period the tick task has to run at, in milliseconds.
pub fn base_period_ms() -> u32 {
    reduce_periods([TASK_PERIODS.buttons, TASK_PERIODS.play, TASK_PERIODS.record]).base
}

pub fn create_task(looper: BoardLooper) -> SpawnToken<impl Sized> {
    scheduler_task(SCHEDULER_TASK_STATE.init(SchedulerTaskState::new(looper)))
}

#[embassy_executor::task]
pub async fn scheduler_task(state: &'static mut SchedulerTaskState) {
    info!(
        "Scheduler: {} slot loop, base tick {} ms",
        LOOP_LENGTH,
        state.scheduler.base_period()
    );

    state.scheduler.run(&mut state.looper, &TICK_FLAG).await
}
