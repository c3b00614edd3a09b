use defmt::{Format, debug};

use crate::{
    io::{AudioOutput, ButtonMask},
    note::NoteIndex,
    session::SharedSession,
};

#[derive(Format, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonsState {
    #[default]
    Uninitialized,
    Init,
    Idle,
    Record,
    Play,
    Drum1,
    Drum2,
    Drum3,
    /// Reached with the new-note button. Holding it only jumps to `Drum3`;
    /// there is no new-note behaviour behind it yet.
    New,
}

/// Turns the sampled button levels into flag toggles and the current note.
///
/// Levels are read once per tick with no further debouncing. Masks with more
/// than one button, or a button other than the one being held, leave the
/// state as it is.
#[derive(Format, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ButtonsTask {
    state: ButtonsState,
}

impl ButtonsTask {
    pub const fn new() -> Self {
        Self {
            state: ButtonsState::Uninitialized,
        }
    }

    pub fn state(&self) -> ButtonsState {
        self.state
    }

    /// While not playing back, the speaker follows the current note every
    /// tick, so a held drum button sounds continuously.
    pub fn tick<A: AudioOutput, const N: usize>(
        &mut self,
        session: &mut SharedSession<N>,
        pressed: ButtonMask,
        audio: &mut A,
    ) {
        let next = transition(self.state, pressed, session);
        if next != self.state {
            debug!("Buttons: {} -> {}", self.state, next);
        }
        self.state = next;

        if !session.is_playing() {
            audio.set_frequency(session.current_note.frequency());
        }
    }
}

fn transition<const N: usize>(
    state: ButtonsState,
    pressed: ButtonMask,
    session: &mut SharedSession<N>,
) -> ButtonsState {
    use ButtonsState::*;

    match state {
        Uninitialized => Init,
        Init => Idle,
        Idle => match pressed {
            ButtonMask::NONE => Idle,
            ButtonMask::DRUM3 => press_drum(Drum3, NoteIndex::Drum3, session),
            ButtonMask::DRUM2 => press_drum(Drum2, NoteIndex::Drum2, session),
            ButtonMask::DRUM1 => press_drum(Drum1, NoteIndex::Drum1, session),
            ButtonMask::PLAY => Play,
            ButtonMask::RECORD => Record,
            ButtonMask::NEW_NOTE => New,
            _ => Idle,
        },
        Record => match pressed {
            ButtonMask::RECORD => Record,
            ButtonMask::NONE => {
                session.toggle_record();
                Idle
            }
            _ => Record,
        },
        Play => match pressed {
            ButtonMask::PLAY => Play,
            ButtonMask::NONE => {
                session.toggle_play();
                Idle
            }
            _ => Play,
        },
        Drum1 => hold_drum(Drum1, ButtonMask::DRUM1, NoteIndex::Drum1, pressed, session),
        Drum2 => hold_drum(Drum2, ButtonMask::DRUM2, NoteIndex::Drum2, pressed, session),
        Drum3 => hold_drum(Drum3, ButtonMask::DRUM3, NoteIndex::Drum3, pressed, session),
        New => match pressed {
            ButtonMask::NEW_NOTE => Drum3,
            ButtonMask::NONE => Idle,
            _ => New,
        },
    }
}

/// The note sounds from the tick the press is first seen.
fn press_drum<const N: usize>(
    state: ButtonsState,
    note: NoteIndex,
    session: &mut SharedSession<N>,
) -> ButtonsState {
    session.current_note = note;
    state
}

fn hold_drum<const N: usize>(
    state: ButtonsState,
    button: ButtonMask,
    note: NoteIndex,
    pressed: ButtonMask,
    session: &mut SharedSession<N>,
) -> ButtonsState {
    if pressed == button {
        session.current_note = note;
        state
    } else if pressed == ButtonMask::NONE {
        session.current_note = NoteIndex::Silence;
        ButtonsState::Idle
    } else {
        state
    }
}
