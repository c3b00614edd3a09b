use defmt::{info, warn};
use embassy_stm32::flash::{Blocking, Flash};
use looper::{ERASED_SLOT, LOOP_LENGTH, NoteIndex, PersistentStore, StoreError};

/// The loop lives in the last 128 KiB sector of the 1 MiB bank.
const SECTOR_SIZE: u32 = 128 * 1024;
const STORE_OFFSET: u32 = 7 * SECTOR_SIZE;

/// Flash words are programmed 32 bytes at a time.
const WRITE_SIZE: usize = 32;
const IMAGE_SIZE: usize = LOOP_LENGTH.div_ceil(WRITE_SIZE) * WRITE_SIZE;

/// [`PersistentStore`] in internal flash, one byte per slot.
///
/// Slots are served from a RAM image read at startup. Writes only touch the
/// image; `flush` erases and reprograms the sector, and only when a slot
/// actually changed.
pub struct FlashStore<'d> {
    flash: Flash<'d, Blocking>,
    image: [u8; IMAGE_SIZE],
    dirty: bool,
}

impl<'d> FlashStore<'d> {
    pub fn new(mut flash: Flash<'d, Blocking>) -> FlashStore<'d> {
        let mut image = [ERASED_SLOT; IMAGE_SIZE];
        if let Err(err) = flash.blocking_read(STORE_OFFSET, &mut image) {
            warn!("Flash store: reading the loop failed: {}", err);
            image = [ERASED_SLOT; IMAGE_SIZE];
        }

        FlashStore {
            flash,
            image,
            dirty: false,
        }
    }
}

impl PersistentStore for FlashStore<'_> {
    fn read_slot(&mut self, index: usize) -> Result<NoteIndex, StoreError> {
        if index >= LOOP_LENGTH {
            return Err(StoreError::OutOfRange);
        }
        NoteIndex::try_from(self.image[index]).map_err(|_| StoreError::Corrupt)
    }

    fn write_slot(&mut self, index: usize, note: NoteIndex) -> Result<(), StoreError> {
        if index >= LOOP_LENGTH {
            return Err(StoreError::OutOfRange);
        }
        if self.image[index] != note.as_u8() {
            self.image[index] = note.as_u8();
            self.dirty = true;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }

        info!("Flash store: committing loop");
        self.flash
            .blocking_erase(STORE_OFFSET, STORE_OFFSET + SECTOR_SIZE)
            .map_err(|err| {
                warn!("Flash store: erase failed: {}", err);
                StoreError::Io
            })?;
        self.flash
            .blocking_write(STORE_OFFSET, &self.image)
            .map_err(|err| {
                warn!("Flash store: write failed: {}", err);
                StoreError::Io
            })?;

        self.dirty = false;
        Ok(())
    }
}
