use defmt::{Format, debug};

use crate::{
    io::{AudioOutput, ProgressDisplay},
    note::slot_frequency,
    progress::{next_index, progress_mask},
    session::SharedSession,
};

#[derive(Format, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    #[default]
    Uninitialized,
    Init,
    Idle,
    Loop,
}

/// Plays the loop buffer back one slot per tick while the play flag is set.
#[derive(Format, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayTask {
    state: PlayState,
    loop_index: usize,
}

impl PlayTask {
    pub const fn new() -> Self {
        Self {
            state: PlayState::Uninitialized,
            loop_index: 0,
        }
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn loop_index(&self) -> usize {
        self.loop_index
    }

    pub fn tick<A: AudioOutput, D: ProgressDisplay, const N: usize>(
        &mut self,
        session: &SharedSession<N>,
        audio: &mut A,
        display: &mut D,
    ) {
        let playing = session.is_playing();

        let next = match self.state {
            PlayState::Uninitialized => PlayState::Init,
            PlayState::Init => {
                display.show(0);
                self.loop_index = 0;
                PlayState::Idle
            }
            PlayState::Idle if playing => PlayState::Loop,
            PlayState::Idle => PlayState::Idle,
            PlayState::Loop => {
                display.show(progress_mask(self.loop_index, N));
                audio.set_frequency(slot_frequency(session.slot(self.loop_index)));
                self.loop_index = next_index(self.loop_index, N);

                if playing {
                    PlayState::Loop
                } else {
                    // Back through Init so the next session starts from slot 0
                    audio.set_frequency(0.0);
                    PlayState::Init
                }
            }
        };

        if next != self.state {
            debug!("Play: {} -> {}", self.state, next);
        }
        self.state = next;
    }
}
