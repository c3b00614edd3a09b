use super::*;
use crate::io::StoreError;
use crate::note::NoteIndex;
use pretty_assertions::assert_eq;

const LENGTH: usize = 16;

/// Store that counts accesses and fails the slots listed in `broken`.
struct CountingStore {
    notes: [NoteIndex; LENGTH],
    broken: Vec<usize>,
    reads: usize,
    writes: usize,
    flushes: usize,
}

impl CountingStore {
    fn filled(note: NoteIndex) -> Self {
        Self {
            notes: [note; LENGTH],
            broken: Vec::new(),
            reads: 0,
            writes: 0,
            flushes: 0,
        }
    }
}

impl PersistentStore for CountingStore {
    fn read_slot(&mut self, index: usize) -> Result<NoteIndex, StoreError> {
        self.reads += 1;
        if self.broken.contains(&index) {
            return Err(StoreError::Io);
        }
        Ok(self.notes[index])
    }

    fn write_slot(&mut self, index: usize, note: NoteIndex) -> Result<(), StoreError> {
        self.writes += 1;
        if self.broken.contains(&index) {
            return Err(StoreError::Io);
        }
        self.notes[index] = note;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        self.flushes += 1;
        Ok(())
    }
}

#[derive(Default)]
struct Leds {
    shown: Vec<u8>,
}

impl ProgressDisplay for Leds {
    fn show(&mut self, mask: u8) {
        self.shown.push(mask);
    }
}

macro_rules! setup_record {
    ($task:ident, $session:ident, $leds:ident, $store:ident, $state:expr, $index:expr) => {
        #[allow(unused_mut)]
        let mut $task = RecordTask {
            state: $state,
            loop_index: $index,
        };
        #[allow(unused_mut)]
        let mut $session = SharedSession::<LENGTH>::new();
        #[allow(unused_mut)]
        let mut $leds = Leds::default();
        #[allow(unused_mut)]
        let mut $store = CountingStore::filled(NoteIndex::Drum1);
    };
}

#[test]
fn init_on_unloaded_buffer_only_reads() {
    setup_record!(task, session, leds, store, RecordState::Init, 9);

    task.tick(&mut session, &mut leds, &mut store);

    assert_eq!(task.state(), RecordState::Idle);
    assert_eq!(task.loop_index(), 0);
    assert_eq!(leds.shown, vec![0]);
    assert_eq!(store.reads, LENGTH);
    assert_eq!(store.writes, 0);
    assert_eq!(store.flushes, 1);
    assert!(session.slots().iter().all(|slot| *slot == Some(NoteIndex::Drum1)));
}

#[test]
fn uninitialized_defers_the_sync_pass() {
    setup_record!(task, session, leds, store, RecordState::Uninitialized, 0);

    task.tick(&mut session, &mut leds, &mut store);

    assert_eq!(task.state(), RecordState::Init);
    assert_eq!(store.reads, 0);
}

#[test]
fn synchronize_writes_set_slots_and_loads_the_rest() {
    let mut session = SharedSession::<LENGTH>::new();
    let mut store = CountingStore::filled(NoteIndex::Drum1);
    session.set_slot(0, NoteIndex::Drum3);
    session.set_slot(5, NoteIndex::Silence);

    let report = synchronize(&mut session, &mut store);

    assert_eq!(
        report,
        SyncReport {
            loaded: LENGTH - 2,
            saved: 2,
            failed: 0,
        }
    );
    assert_eq!(store.notes[0], NoteIndex::Drum3);
    assert_eq!(store.notes[5], NoteIndex::Silence);
    assert_eq!(session.slot(1), Some(NoteIndex::Drum1));
}

#[test]
fn failed_reads_leave_slots_unset() {
    let mut session = SharedSession::<LENGTH>::new();
    let mut store = CountingStore::filled(NoteIndex::Drum2);
    store.broken = vec![3, 4];

    let report = synchronize(&mut session, &mut store);

    assert_eq!(report.loaded, LENGTH - 2);
    assert_eq!(report.failed, 2);
    assert_eq!(session.slot(3), None);
    assert_eq!(session.slot(4), None);
    assert_eq!(session.slot(5), Some(NoteIndex::Drum2));
}

#[test]
fn failed_writes_keep_the_recorded_note() {
    let mut session = SharedSession::<LENGTH>::new();
    let mut store = CountingStore::filled(NoteIndex::Silence);
    store.broken = vec![2];
    session.set_slot(2, NoteIndex::Drum3);

    let report = synchronize(&mut session, &mut store);

    assert_eq!(report.failed, 1);
    assert_eq!(session.slot(2), Some(NoteIndex::Drum3));
    assert_eq!(store.notes[2], NoteIndex::Silence);
}

#[test]
fn idle_waits_for_the_record_flag() {
    setup_record!(task, session, leds, store, RecordState::Idle, 0);

    task.tick(&mut session, &mut leds, &mut store);
    assert_eq!(task.state(), RecordState::Idle);

    session.toggle_record();
    task.tick(&mut session, &mut leds, &mut store);
    assert_eq!(task.state(), RecordState::Loop);
}

#[test]
fn loop_writes_the_current_note_and_advances() {
    setup_record!(task, session, leds, store, RecordState::Loop, 0);
    session.toggle_record();

    session.current_note = NoteIndex::Drum2;
    task.tick(&mut session, &mut leds, &mut store);
    session.current_note = NoteIndex::Silence;
    task.tick(&mut session, &mut leds, &mut store);

    assert_eq!(task.state(), RecordState::Loop);
    assert_eq!(task.loop_index(), 2);
    assert_eq!(session.slot(0), Some(NoteIndex::Drum2));
    assert_eq!(session.slot(1), Some(NoteIndex::Silence));
    assert_eq!(session.slot(2), None);
    assert_eq!(store.writes, 0);
}

#[test]
fn loop_overwrites_on_every_lap() {
    setup_record!(task, session, leds, store, RecordState::Loop, 0);
    session.toggle_record();

    session.current_note = NoteIndex::Drum1;
    for _ in 0..LENGTH {
        task.tick(&mut session, &mut leds, &mut store);
    }
    assert_eq!(task.loop_index(), 0);

    session.current_note = NoteIndex::Drum3;
    task.tick(&mut session, &mut leds, &mut store);

    assert_eq!(session.slot(0), Some(NoteIndex::Drum3));
    assert_eq!(session.slot(1), Some(NoteIndex::Drum1));
}

#[test]
fn cleared_flag_records_last_slot_then_resyncs() {
    setup_record!(task, session, leds, store, RecordState::Loop, 4);
    session.current_note = NoteIndex::Drum3;

    task.tick(&mut session, &mut leds, &mut store);
    assert_eq!(task.state(), RecordState::Init);
    assert_eq!(session.slot(4), Some(NoteIndex::Drum3));

    task.tick(&mut session, &mut leds, &mut store);
    assert_eq!(task.state(), RecordState::Idle);
    assert_eq!(store.writes, 1);
    assert_eq!(store.reads, LENGTH - 1);
    assert_eq!(store.notes[4], NoteIndex::Drum3);
}
