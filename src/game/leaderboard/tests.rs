use std::cell::RefCell;

use super::*;

#[derive(Default)]
struct MemoryStore {
    entries: RefCell<Vec<LeaderboardEntry>>,
}

impl Store for MemoryStore {
    fn load(&self) -> Vec<LeaderboardEntry> {
        self.entries.borrow().clone()
    }

    fn save(&self, entries: &[LeaderboardEntry]) -> Result<()> {
        *self.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }
}

#[test]
fn keeps_at_most_ten_entries_sorted_descending() {
    let board = Leaderboard::new(MemoryStore::default());
    let scores = [5, 9, 3, 9, 7, 1, 8, 2, 6, 4, 10, 0];
    for (i, score) in scores.iter().enumerate() {
        board.record(&format!("p{}", i), *score).unwrap();
    }

    let entries = board.load();
    assert_eq!(entries.len(), MAX_ENTRIES);
    let ranked: Vec<u32> = entries.iter().map(|e| e.score).collect();
    assert_eq!(ranked, [10, 9, 9, 8, 7, 6, 5, 4, 3, 2]);
}

#[test]
fn ties_keep_recording_order() {
    let board = Leaderboard::new(MemoryStore::default());
    board.record("first", 9).unwrap();
    board.record("lower", 5).unwrap();
    board.record("second", 9).unwrap();

    let entries = board.load();
    assert_eq!(entries[0].name, "first");
    assert_eq!(entries[1].name, "second");
    assert_eq!(entries[2].name, "lower");
}

#[test]
fn remove_at_shifts_later_ranks_up() {
    let board = Leaderboard::new(MemoryStore::default());
    for score in &[50, 40, 30, 20, 10] {
        board.record("p", *score).unwrap();
    }

    let entries = board.remove_at(2).unwrap();
    assert_eq!(entries.len(), 4);
    let ranked: Vec<u32> = entries.iter().map(|e| e.score).collect();
    assert_eq!(ranked, [50, 40, 20, 10]);
}

#[test]
fn remove_at_out_of_range_is_a_noop() {
    let board = Leaderboard::new(MemoryStore::default());
    board.record("p", 1).unwrap();
    let entries = board.remove_at(5).unwrap();
    assert_eq!(entries.len(), 1);
}

#[test]
fn empty_names_fall_back_to_placeholder() {
    assert_eq!(sanitize_name(""), "player");
    assert_eq!(sanitize_name("   "), "player");
}

#[test]
fn long_names_are_truncated_to_eight_chars() {
    assert_eq!(sanitize_name("floverfan99"), "floverfa");
    assert_eq!(sanitize_name("플로버플로버플로버"), "플로버플로버플로");
}

#[test]
fn json_store_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leaderboard.json");

    let board = Leaderboard::new(JsonFileStore::new(path.clone()));
    board.record("saerom", 8).unwrap();
    board.record("hayoung", 9).unwrap();

    let reloaded = Leaderboard::new(JsonFileStore::new(path.clone()));
    let entries = reloaded.load();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "hayoung");
    assert_eq!(entries[0].score, 9);
    assert_eq!(entries[1].name, "saerom");

    reloaded.remove_at(0).unwrap();
    let after_removal = Leaderboard::new(JsonFileStore::new(path)).load();
    assert_eq!(after_removal.len(), 1);
    assert_eq!(after_removal[0].name, "saerom");
}

#[test]
fn missing_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("nope.json"));
    assert!(store.load().is_empty());
}

#[test]
fn corrupt_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leaderboard.json");
    fs::write(&path, "not json {").unwrap();

    let store = JsonFileStore::new(path);
    assert!(store.load().is_empty());
}
