use crate::diary_entry::{generate_id, DiaryEntry, EntryStatus};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed name of the persisted slot, one JSON array of entries.
pub const SLOT_FILE: &str = "diary_entries.json";

/// Owns every read and write of the diary collection. All mutations are
/// full read-modify-write cycles against the slot; the in-memory copy is
/// authoritative between writes.
pub struct DiaryStore {
    path: PathBuf,
    entries: Vec<DiaryEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiaryStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
}

impl DiaryStore {
    /// Loads the collection from the slot. A missing, unreadable, malformed
    /// or empty slot is treated as "no data yet": the seed set is
    /// materialized and persisted before returning, so the caller always
    /// gets a usable collection.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_slot(&path) {
            Some(entries) if !entries.is_empty() => entries,
            _ => {
                let seeded = seed_entries();
                write_slot(&path, &seeded);
                seeded
            }
        };
        DiaryStore { path, entries }
    }

    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    /// Appends a new entry and writes the whole collection back. Input is
    /// trusted: title validation happens in the form layer.
    pub fn add(
        &mut self,
        title: &str,
        date: Option<NaiveDate>,
        status: Option<EntryStatus>,
    ) -> DiaryEntry {
        let mut entry = DiaryEntry::new(title.to_string(), date, status);
        while self.entries.iter().any(|e| e.id == entry.id) {
            entry.id = generate_id();
        }
        self.entries.insert(0, entry.clone());
        write_slot(&self.path, &self.entries);
        entry
    }

    /// Removes at most one entry. Deleting an unknown id is not an error;
    /// the result says whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        write_slot(&self.path, &self.entries);
        self.entries.len() < before
    }

    pub fn stats(&self) -> DiaryStats {
        let completed = self
            .entries
            .iter()
            .filter(|e| e.status == EntryStatus::Completed)
            .count();
        let in_progress = self
            .entries
            .iter()
            .filter(|e| e.status == EntryStatus::InProgress)
            .count();
        DiaryStats {
            total: self.entries.len(),
            completed,
            in_progress,
        }
    }

    /// Share of completed entries as a whole percentage, 0 for an empty
    /// collection.
    pub fn progress_percent(&self) -> u16 {
        let stats = self.stats();
        if stats.total == 0 {
            return 0;
        }
        (stats.completed as f64 / stats.total as f64 * 100.0).round() as u16
    }

    /// Derived display order: newest date first, storage order for ties.
    /// Never persisted; storage order stays untouched.
    pub fn sorted_for_display(&self) -> Vec<DiaryEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }
}

fn read_slot(path: &Path) -> Option<Vec<DiaryEntry>> {
    let raw = fs::read_to_string(path).ok()?;
    serde_json::from_str(&raw).ok()
}

// Slot write failures are deliberately not surfaced: the in-memory
// collection stays authoritative and the next mutation rewrites the slot
// in full anyway.
fn write_slot(path: &Path, entries: &[DiaryEntry]) {
    if let Ok(serialized) = serde_json::to_string(entries) {
        let _ = fs::write(path, serialized);
    }
}

fn seed_entries() -> Vec<DiaryEntry> {
    [
        ("Верстка макета сайта", (2024, 12, 15), EntryStatus::Completed),
        ("JavaScript основы", (2024, 12, 10), EntryStatus::Completed),
        ("Работа с формами", (2024, 12, 5), EntryStatus::InProgress),
        ("Адаптивный дизайн", (2024, 12, 1), EntryStatus::InProgress),
    ]
    .into_iter()
    .map(|(title, (y, m, d), status)| DiaryEntry {
        id: generate_id(),
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        status,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static SCRATCH_COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn scratch_path() -> PathBuf {
        let n = SCRATCH_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "learning_diary_test_{}_{}.json",
            std::process::id(),
            n
        ));
        let _ = fs::remove_file(&path);
        path
    }

    fn ids(store: &DiaryStore) -> Vec<String> {
        store.entries().iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn seeds_exactly_four_entries_when_slot_is_missing() {
        let path = scratch_path();
        let store = DiaryStore::load(&path);
        let titles: Vec<&str> = store.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Верстка макета сайта",
                "JavaScript основы",
                "Работа с формами",
                "Адаптивный дизайн"
            ]
        );
        assert_eq!(store.stats().completed, 2);
        assert_eq!(store.stats().in_progress, 2);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn seeding_is_idempotent_across_reloads() {
        let path = scratch_path();
        let first = DiaryStore::load(&path);
        let second = DiaryStore::load(&path);
        assert_eq!(ids(&first), ids(&second));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_slot_content_reseeds() {
        let path = scratch_path();
        fs::write(&path, "definitely not json").unwrap();
        let store = DiaryStore::load(&path);
        assert_eq!(store.stats().total, 4);
        // The reseeded collection was persisted over the corrupt content.
        let reloaded = DiaryStore::load(&path);
        assert_eq!(ids(&store), ids(&reloaded));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn empty_slot_array_reseeds() {
        let path = scratch_path();
        fs::write(&path, "[]").unwrap();
        let store = DiaryStore::load(&path);
        assert_eq!(store.stats().total, 4);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn added_entries_never_share_an_id() {
        let path = scratch_path();
        let mut store = DiaryStore::load(&path);
        for i in 0..50 {
            store.add(&format!("Задача {i}"), None, None);
        }
        let mut all = ids(&store);
        all.sort();
        all.dedup();
        assert_eq!(all.len(), store.stats().total);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn add_then_delete_round_trips() {
        let path = scratch_path();
        let mut store = DiaryStore::load(&path);
        let before = ids(&store);
        let entry = store.add(
            "X",
            NaiveDate::from_ymd_opt(2025, 1, 1),
            Some(EntryStatus::Completed),
        );
        assert!(store.delete(&entry.id));
        assert_eq!(ids(&store), before);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn stats_always_balance() {
        let path = scratch_path();
        let mut store = DiaryStore::load(&path);
        store.add("Одна", None, Some(EntryStatus::Completed));
        store.add("Две", None, None);
        let stats = store.stats();
        assert_eq!(stats.completed + stats.in_progress, stats.total);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn display_order_is_date_descending() {
        let path = scratch_path();
        let mut store = DiaryStore::load(&path);
        for e in ids(&store) {
            store.delete(&e);
        }
        store.add("Первая", NaiveDate::from_ymd_opt(2024, 12, 1), None);
        store.add("Вторая", NaiveDate::from_ymd_opt(2024, 12, 15), None);
        store.add("Третья", NaiveDate::from_ymd_opt(2024, 12, 10), None);
        let dates: Vec<String> = store
            .sorted_for_display()
            .iter()
            .map(|e| e.date.to_string())
            .collect();
        assert_eq!(dates, ["2024-12-15", "2024-12-10", "2024-12-01"]);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn delete_of_unknown_id_is_a_no_op() {
        let path = scratch_path();
        let mut store = DiaryStore::load(&path);
        let total = store.stats().total;
        assert!(!store.delete("does-not-exist"));
        assert_eq!(store.stats().total, total);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn mutations_persist_across_reload() {
        let path = scratch_path();
        let entry = {
            let mut store = DiaryStore::load(&path);
            store.add("Сохраняется", NaiveDate::from_ymd_opt(2025, 2, 2), None)
        };
        let reloaded = DiaryStore::load(&path);
        assert!(reloaded.entries().iter().any(|e| e.id == entry.id));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn progress_percent_rounds_completed_share() {
        let path = scratch_path();
        let mut store = DiaryStore::load(&path);
        for e in ids(&store) {
            store.delete(&e);
        }
        assert_eq!(store.progress_percent(), 0);
        store.add("a", None, Some(EntryStatus::Completed));
        store.add("b", None, Some(EntryStatus::Completed));
        store.add("c", None, Some(EntryStatus::InProgress));
        assert_eq!(store.progress_percent(), 67);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn slot_wire_format_matches_the_original_layout() {
        let path = scratch_path();
        fs::write(
            &path,
            r#"[{"id":"abc123","title":"Из файла","date":"2024-11-20","status":"completed"}]"#,
        )
        .unwrap();
        let store = DiaryStore::load(&path);
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].id, "abc123");
        assert_eq!(store.entries()[0].status, EntryStatus::Completed);
        let _ = fs::remove_file(&path);
    }
}
