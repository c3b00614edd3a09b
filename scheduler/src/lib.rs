#![cfg_attr(not(test), no_std)]

pub mod period;
mod tick;

use defmt::{Format, info};
use embassy_sync::blocking_mutex::raw::RawMutex;

pub use period::{ReducedPeriods, gcd, reduce_periods};
pub use tick::TickFlag;

/// Something the scheduler can tick. `C` is the state shared by all tasks,
/// handed out mutably to one task at a time.
pub trait Task<C> {
    fn tick(&mut self, context: &mut C);
}

/// A task together with its timing bookkeeping, in base ticks.
///
/// `elapsed_time` stays within `0..=period`; the task fires on the pass where
/// the two are equal.
#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSlot<T> {
    task: T,
    period: u32,
    elapsed_time: u32,
}

impl<T> TaskSlot<T> {
    /// Starts fully elapsed so the task fires on the very first pass.
    pub fn new(task: T, period: u32) -> Self {
        assert!(period > 0);

        Self {
            task,
            period,
            elapsed_time: period,
        }
    }

    pub fn task(&self) -> &T {
        &self.task
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn elapsed_time(&self) -> u32 {
        self.elapsed_time
    }

    pub fn is_due(&self) -> bool {
        self.elapsed_time == self.period
    }

    /// Accounts for one base tick, ticking the task if it is due.
    /// Returns whether it fired.
    pub fn advance<C>(&mut self, context: &mut C) -> bool
    where
        T: Task<C>,
    {
        let fired = self.is_due();
        if fired {
            self.task.tick(context);
            self.elapsed_time = 0;
        }
        self.elapsed_time += 1;
        fired
    }
}

/// Cooperative scheduler over a fixed, ordered task table.
///
/// Every pass visits the tasks in registration order, so side effects of an
/// earlier task are visible to a later one due on the same tick.
pub struct Scheduler<T, const N: usize> {
    slots: [TaskSlot<T>; N],
    base_period: u32,
}

impl<T, const N: usize> Scheduler<T, N> {
    /// Builds the table from `(task, period)` pairs with periods in
    /// milliseconds. The base tick becomes their GCD.
    pub fn new(tasks: [(T, u32); N]) -> Self {
        let reduced = reduce_periods(tasks.each_ref().map(|(_, period)| *period));

        let mut index = 0;
        let slots = tasks.map(|(task, _)| {
            let slot = TaskSlot::new(task, reduced.periods[index]);
            index += 1;
            slot
        });

        info!(
            "Scheduler: {} tasks on a {} ms base tick",
            N, reduced.base
        );

        Self {
            slots,
            base_period: reduced.base,
        }
    }

    /// Period the tick source has to be configured with, in milliseconds.
    pub fn base_period(&self) -> u32 {
        self.base_period
    }

    pub fn slots(&self) -> &[TaskSlot<T>; N] {
        &self.slots
    }

    /// Runs one check-and-dispatch pass over every task.
    pub fn dispatch<C>(&mut self, context: &mut C)
    where
        T: Task<C>,
    {
        for slot in self.slots.iter_mut() {
            slot.advance(context);
        }
    }

    /// Dispatches, then blocks until the next tick is pending and consumes it.
    pub async fn run<C, M: RawMutex>(&mut self, context: &mut C, tick: &TickFlag<M>) -> !
    where
        T: Task<C>,
    {
        loop {
            self.dispatch(context);
            tick.wait().await;
        }
    }
}
