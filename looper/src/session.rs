use defmt::info;

use crate::note::{NoteIndex, Slot};

/// State shared by the button, play and record tasks.
///
/// Only one task touches it at a time: the scheduler hands it out in
/// dispatch order. `play` and `record` are never set together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedSession<const N: usize> {
    play: bool,
    record: bool,
    pub current_note: NoteIndex,
    notes: [Slot; N],
}

impl<const N: usize> SharedSession<N> {
    pub const fn new() -> Self {
        Self {
            play: false,
            record: false,
            current_note: NoteIndex::Silence,
            notes: [None; N],
        }
    }

    pub fn is_playing(&self) -> bool {
        self.play
    }

    pub fn is_recording(&self) -> bool {
        self.record
    }

    /// Flips the play flag, clearing record when play turns on.
    pub fn toggle_play(&mut self) {
        self.play = !self.play;
        if self.play {
            self.record = false;
        }
        info!("Session: play {}", self.play);
    }

    /// Flips the record flag, clearing play when record turns on.
    pub fn toggle_record(&mut self) {
        self.record = !self.record;
        if self.record {
            self.play = false;
        }
        info!("Session: record {}", self.record);
    }

    pub fn slot(&self, index: usize) -> Slot {
        self.notes[index]
    }

    pub fn set_slot(&mut self, index: usize, note: NoteIndex) {
        self.notes[index] = Some(note);
    }

    pub fn slots(&self) -> &[Slot; N] {
        &self.notes
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Slot; N] {
        &mut self.notes
    }
}

impl<const N: usize> Default for SharedSession<N> {
    fn default() -> Self {
        Self::new()
    }
}
