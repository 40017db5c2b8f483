//! Purpose: Derive dashboard statistics from the current record list.
//! Exports: `RosterStats`, `average_age`, `summarize`.
//! Invariants: Pure functions of the record list; recomputed per render, never stored.
use crate::core::record::StudentRecord;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RosterStats {
    pub total: usize,
    pub average_age: u32,
}

/// Rounded mean age, 0 for an empty list.
pub fn average_age(records: &[StudentRecord]) -> u32 {
    if records.is_empty() {
        return 0;
    }
    let sum: u64 = records.iter().map(|record| u64::from(record.age)).sum();
    let mean = sum as f64 / records.len() as f64;
    mean.round() as u32
}

pub fn summarize(records: &[StudentRecord]) -> RosterStats {
    RosterStats {
        total: records.len(),
        average_age: average_age(records),
    }
}

#[cfg(test)]
mod tests {
    use super::{average_age, summarize};
    use crate::core::record::StudentRecord;

    fn record(id: &str, age: u32) -> StudentRecord {
        StudentRecord {
            id: id.to_string(),
            name: format!("Student {id}"),
            age,
            registration: format!("R{id}"),
        }
    }

    #[test]
    fn average_age_of_empty_list_is_zero() {
        assert_eq!(average_age(&[]), 0);
    }

    #[test]
    fn average_age_rounds() {
        assert_eq!(average_age(&[record("1", 20), record("2", 30)]), 25);
        assert_eq!(average_age(&[record("1", 20), record("2", 21)]), 21);
        assert_eq!(average_age(&[record("1", 20), record("2", 21), record("3", 21)]), 21);
    }

    #[test]
    fn summarize_counts_and_averages() {
        let stats = summarize(&[record("1", 18), record("2", 22)]);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.average_age, 20);
    }
}
