//! Homework tracking.

pub mod model;

use chrono::NaiveDate;
use model::Homework;

/// Split assignments into (pending, completed), preserving order.
pub fn split_completed(homework: &[Homework]) -> (Vec<&Homework>, Vec<&Homework>) {
    homework.iter().partition(|hw| !hw.completed)
}

/// Whole days between today and the due date. Negative means overdue.
pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Priority;

    fn hw(id: &str, completed: bool) -> Homework {
        Homework {
            id: id.to_string(),
            subject: "Math".into(),
            task: "Chapter 5 exercises".into(),
            due_date: NaiveDate::from_ymd_opt(2026, 2, 11).unwrap(),
            priority: Priority::High,
            completed,
        }
    }

    #[test]
    fn test_split_completed_preserves_order() {
        let items = vec![hw("a", false), hw("b", true), hw("c", false)];
        let (pending, done) = split_completed(&items);
        assert_eq!(
            pending.iter().map(|h| h.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "c"]
        );
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, "b");
    }

    #[test]
    fn test_days_until() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        assert_eq!(days_until(NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(), today), 0);
        assert_eq!(days_until(NaiveDate::from_ymd_opt(2026, 2, 11).unwrap(), today), 1);
        assert_eq!(days_until(NaiveDate::from_ymd_opt(2026, 2, 7).unwrap(), today), -3);
    }

    #[test]
    fn test_priority_round_trip() {
        assert_eq!(Priority::from_str("HIGH"), Priority::High);
        assert_eq!(Priority::from_str("nonsense"), Priority::Medium);
        assert_eq!(Priority::Low.as_str(), "low");
    }
}
