use chrono::{Local, NaiveDate};
use rand::RngExt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "in-progress")]
    InProgress,
}

impl EntryStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            EntryStatus::Completed => "✓",
            EntryStatus::InProgress => "⟳",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntryStatus::Completed => "Завершено",
            EntryStatus::InProgress => "В процессе",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub status: EntryStatus,
}

impl DiaryEntry {
    /// Date falls back to today, status to in-progress. Status is fixed at
    /// creation; there is no transition afterwards.
    pub fn new(title: String, date: Option<NaiveDate>, status: Option<EntryStatus>) -> Self {
        DiaryEntry {
            id: generate_id(),
            title,
            date: date.unwrap_or_else(|| Local::now().date_naive()),
            status: status.unwrap_or(EntryStatus::InProgress),
        }
    }
}

const BASE36_DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Collision-resistant id token: current milliseconds in base-36 plus a
/// random base-36 suffix.
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    let mut id = base36(Local::now().timestamp_millis().max(0) as u64);
    for _ in 0..8 {
        id.push(BASE36_DIGITS[rng.random_range(0..BASE36_DIGITS.len())] as char);
    }
    id
}

fn base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    digits.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_wire_names() {
        let json = serde_json::to_string(&EntryStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let status: EntryStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, EntryStatus::Completed);
    }

    #[test]
    fn new_entry_defaults_date_to_today_and_status_to_in_progress() {
        let entry = DiaryEntry::new("Задача".to_string(), None, None);
        assert_eq!(entry.date, Local::now().date_naive());
        assert_eq!(entry.status, EntryStatus::InProgress);
    }

    #[test]
    fn generated_ids_are_distinct() {
        let ids: Vec<String> = (0..100).map(|_| generate_id()).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn base36_encodes_known_values() {
        assert_eq!(base36(0), "0");
        assert_eq!(base36(35), "z");
        assert_eq!(base36(36), "10");
    }
}
