use defmt::Format;

/// Tone frequency of every [`NoteIndex`], in Hz, indexed by discriminant.
pub const NOTE_FREQUENCIES: [f32; 4] = [0.0, 293.66, 349.23, 493.88];

/// A sound the looper can hold in one slot.
#[derive(Format, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NoteIndex {
    #[default]
    Silence = 0,
    Drum1 = 1,
    Drum2 = 2,
    Drum3 = 3,
}

impl NoteIndex {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn frequency(self) -> f32 {
        NOTE_FREQUENCIES[self as usize]
    }
}

impl From<NoteIndex> for u8 {
    fn from(note: NoteIndex) -> Self {
        note.as_u8()
    }
}

impl TryFrom<u8> for NoteIndex {
    /// The byte that is not a note.
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Silence),
            1 => Ok(Self::Drum1),
            2 => Ok(Self::Drum2),
            3 => Ok(Self::Drum3),
            other => Err(other),
        }
    }
}

/// One loop position. `None` means not yet loaded from persistent storage.
pub type Slot = Option<NoteIndex>;

/// Unset slots sound like silence.
pub fn slot_frequency(slot: Slot) -> f32 {
    slot.map_or(0.0, NoteIndex::frequency)
}
