#![cfg_attr(not(test), no_std)]

pub mod buttons;
pub mod io;
pub mod note;
pub mod play;
pub mod progress;
pub mod record;
mod session;
pub mod speaker;
pub mod store;

use defmt::Format;
use scheduler::{Scheduler, Task};

pub use buttons::{ButtonsState, ButtonsTask};
pub use io::{
    AudioOutput, ButtonInput, ButtonMask, PersistentStore, ProgressDisplay, StoreError,
};
pub use note::{NOTE_FREQUENCIES, NoteIndex, Slot};
pub use play::{PlayState, PlayTask};
pub use record::{RecordState, RecordTask, SyncReport};
pub use session::SharedSession;
pub use speaker::{Speaker, ToneDriver};
pub use store::{ERASED_SLOT, MemoryStore};

/// Number of slots in a loop.
pub const LOOP_LENGTH: usize = 400;

/// Everything the looper tasks work on: the shared session plus the
/// collaborators for button input, audio, progress display and storage.
pub struct Looper<B, A, D, S, const N: usize> {
    pub session: SharedSession<N>,
    pub buttons: B,
    pub audio: A,
    pub display: D,
    pub store: S,
}

impl<B, A, D, S, const N: usize> Looper<B, A, D, S, N> {
    pub fn new(buttons: B, audio: A, display: D, store: S) -> Self {
        Self {
            session: SharedSession::new(),
            buttons,
            audio,
            display,
            store,
        }
    }
}

/// The three looper state machines, each with its task-local data.
#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LooperTask {
    Buttons(ButtonsTask),
    Play(PlayTask),
    Record(RecordTask),
}

impl<B, A, D, S, const N: usize> Task<Looper<B, A, D, S, N>> for LooperTask
where
    B: ButtonInput,
    A: AudioOutput,
    D: ProgressDisplay,
    S: PersistentStore,
{
    fn tick(&mut self, looper: &mut Looper<B, A, D, S, N>) {
        match self {
            LooperTask::Buttons(task) => {
                let pressed = looper.buttons.sample();
                task.tick(&mut looper.session, pressed, &mut looper.audio)
            }
            LooperTask::Play(task) => {
                task.tick(&looper.session, &mut looper.audio, &mut looper.display)
            }
            LooperTask::Record(task) => {
                task.tick(&mut looper.session, &mut looper.display, &mut looper.store)
            }
        }
    }
}

/// Desired task periods in milliseconds.
#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskPeriods {
    pub buttons: u32,
    pub play: u32,
    pub record: u32,
}

impl Default for TaskPeriods {
    fn default() -> Self {
        Self {
            buttons: 1,
            play: 5,
            record: 5,
        }
    }
}

/// Scheduler over buttons, play and record, in that order, so flag and note
/// changes from the buttons are seen by the loops on the same tick.
pub fn new_scheduler(periods: TaskPeriods) -> Scheduler<LooperTask, 3> {
    Scheduler::new([
        (LooperTask::Buttons(ButtonsTask::new()), periods.buttons),
        (LooperTask::Play(PlayTask::new()), periods.play),
        (LooperTask::Record(RecordTask::new()), periods.record),
    ])
}
