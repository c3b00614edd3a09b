use defmt::{Format, debug, info};

use crate::{
    io::{PersistentStore, ProgressDisplay},
    progress::{next_index, progress_mask},
    session::SharedSession,
};

#[derive(Format, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    #[default]
    Uninitialized,
    Init,
    Idle,
    Loop,
}

/// Records the current note into the loop buffer one slot per tick while the
/// record flag is set, and keeps the buffer in sync with the persistent store.
#[derive(Format, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RecordTask {
    state: RecordState,
    loop_index: usize,
}

impl RecordTask {
    pub const fn new() -> Self {
        Self {
            state: RecordState::Uninitialized,
            loop_index: 0,
        }
    }

    pub fn state(&self) -> RecordState {
        self.state
    }

    pub fn loop_index(&self) -> usize {
        self.loop_index
    }

    pub fn tick<D: ProgressDisplay, S: PersistentStore, const N: usize>(
        &mut self,
        session: &mut SharedSession<N>,
        display: &mut D,
        store: &mut S,
    ) {
        let recording = session.is_recording();

        let next = match self.state {
            RecordState::Uninitialized => RecordState::Init,
            RecordState::Init => {
                display.show(0);
                self.loop_index = 0;
                synchronize(session, store);
                RecordState::Idle
            }
            RecordState::Idle if recording => RecordState::Loop,
            RecordState::Idle => RecordState::Idle,
            RecordState::Loop => {
                display.show(progress_mask(self.loop_index, N));
                session.set_slot(self.loop_index, session.current_note);
                self.loop_index = next_index(self.loop_index, N);

                if recording {
                    RecordState::Loop
                } else {
                    // Every session ends with a full sync pass
                    RecordState::Init
                }
            }
        };

        if next != self.state {
            debug!("Record: {} -> {}", self.state, next);
        }
        self.state = next;
    }
}

/// Outcome of one [`synchronize`] pass.
#[derive(Format, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Unset slots filled from the store.
    pub loaded: usize,
    /// Set slots written to the store.
    pub saved: usize,
    /// Reads or writes the store refused.
    pub failed: usize,
}

/// Loads every unset slot from the store and writes every set slot to it.
///
/// A slot whose read fails stays unset and plays as silence; a failed write
/// keeps the in-memory note. Neither stops the pass.
pub fn synchronize<S: PersistentStore, const N: usize>(
    session: &mut SharedSession<N>,
    store: &mut S,
) -> SyncReport {
    let mut report = SyncReport::default();

    for (index, slot) in session.slots_mut().iter_mut().enumerate() {
        match *slot {
            None => match store.read_slot(index) {
                Ok(note) => {
                    *slot = Some(note);
                    report.loaded += 1;
                }
                Err(err) => {
                    debug!("Record: slot {} not loaded: {}", index, err);
                    report.failed += 1;
                }
            },
            Some(note) => match store.write_slot(index, note) {
                Ok(()) => report.saved += 1,
                Err(err) => {
                    debug!("Record: slot {} not saved: {}", index, err);
                    report.failed += 1;
                }
            },
        }
    }

    if let Err(err) = store.flush() {
        debug!("Record: store flush failed: {}", err);
        report.failed += 1;
    }

    info!("Record: synchronized {}", report);
    report
}

#[cfg(test)]
mod test;
