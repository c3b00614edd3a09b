use defmt::Format;

use crate::note::NoteIndex;

/// Buttons held down during one sample, one bit per button.
#[derive(Format, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ButtonMask(u8);

impl ButtonMask {
    pub const NONE: Self = Self(0x00);
    pub const DRUM3: Self = Self(0x01);
    pub const DRUM2: Self = Self(0x02);
    pub const DRUM1: Self = Self(0x04);
    pub const PLAY: Self = Self(0x08);
    pub const RECORD: Self = Self(0x10);
    pub const NEW_NOTE: Self = Self(0x20);

    /// Keeps the six button bits, dropping anything above.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0x3F)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl From<u8> for ButtonMask {
    fn from(bits: u8) -> Self {
        Self::from_bits(bits)
    }
}

pub trait ButtonInput {
    fn sample(&mut self) -> ButtonMask;
}

/// Tone output. `0.0` silences it.
pub trait AudioOutput {
    fn set_frequency(&mut self, hz: f32);
}

/// Bar of loop-progress segments, bit 0 first.
pub trait ProgressDisplay {
    fn show(&mut self, mask: u8);
}

#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Slot index beyond the store capacity.
    OutOfRange,
    /// The stored value is not a note, e.g. never written.
    Corrupt,
    /// The backing medium rejected the access.
    Io,
}

/// Non-volatile home of the loop buffer, one note per slot.
pub trait PersistentStore {
    fn read_slot(&mut self, index: usize) -> Result<NoteIndex, StoreError>;

    fn write_slot(&mut self, index: usize, note: NoteIndex) -> Result<(), StoreError>;

    /// Commits buffered writes. Stores that write through need not override it.
    fn flush(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}
