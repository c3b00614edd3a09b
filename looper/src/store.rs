use crate::{
    io::{PersistentStore, StoreError},
    note::NoteIndex,
};

/// Byte of a slot that was never written.
pub const ERASED_SLOT: u8 = 0xFF;

/// Volatile [`PersistentStore`], one byte per slot.
///
/// Fresh slots read back as [`StoreError::Corrupt`], like erased flash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStore<const N: usize> {
    cells: [u8; N],
}

impl<const N: usize> MemoryStore<N> {
    pub const fn new() -> Self {
        Self { cells: [ERASED_SLOT; N] }
    }

    pub fn with_notes(notes: [NoteIndex; N]) -> Self {
        Self {
            cells: notes.map(NoteIndex::as_u8),
        }
    }

    pub fn cells(&self) -> &[u8; N] {
        &self.cells
    }
}

impl<const N: usize> Default for MemoryStore<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PersistentStore for MemoryStore<N> {
    fn read_slot(&mut self, index: usize) -> Result<NoteIndex, StoreError> {
        let cell = *self.cells.get(index).ok_or(StoreError::OutOfRange)?;
        NoteIndex::try_from(cell).map_err(|_| StoreError::Corrupt)
    }

    fn write_slot(&mut self, index: usize, note: NoteIndex) -> Result<(), StoreError> {
        let cell = self.cells.get_mut(index).ok_or(StoreError::OutOfRange)?;
        *cell = note.as_u8();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_reads_back_corrupt() {
        let mut store = MemoryStore::<4>::new();

        assert_eq!(store.read_slot(0), Err(StoreError::Corrupt));
    }

    #[test]
    fn written_notes_read_back() {
        let mut store = MemoryStore::<4>::new();

        store.write_slot(2, NoteIndex::Drum3).unwrap();

        assert_eq!(store.read_slot(2), Ok(NoteIndex::Drum3));
        assert_eq!(store.cells(), &[ERASED_SLOT, ERASED_SLOT, 3, ERASED_SLOT]);
    }

    #[test]
    fn out_of_range_slots_are_rejected() {
        let mut store = MemoryStore::<4>::new();

        assert_eq!(store.read_slot(4), Err(StoreError::OutOfRange));
        assert_eq!(
            store.write_slot(4, NoteIndex::Drum1),
            Err(StoreError::OutOfRange)
        );
    }
}
