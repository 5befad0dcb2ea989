//! Weekly class schedule.

pub mod model;

use model::{ClassSession, Weekday};

/// Group sessions by school day, Monday through Friday. Every day is
/// present in the result even when empty; within a day, input order is
/// preserved.
pub fn group_by_day(sessions: &[ClassSession]) -> Vec<(Weekday, Vec<&ClassSession>)> {
    Weekday::ALL
        .iter()
        .map(|&day| (day, sessions.iter().filter(|s| s.day == day).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Color;

    fn class(id: &str, day: Weekday) -> ClassSession {
        ClassSession {
            id: id.to_string(),
            day,
            name: "Math".into(),
            teacher: "Ms. Adams".into(),
            room: "Room 201".into(),
            time: "8:00 - 9:30".into(),
            color: Color::Blue,
        }
    }

    #[test]
    fn test_group_by_day_covers_all_days() {
        let sessions = vec![class("a", Weekday::Tuesday), class("b", Weekday::Tuesday)];
        let grouped = group_by_day(&sessions);
        assert_eq!(grouped.len(), 5);
        assert_eq!(grouped[0].0, Weekday::Monday);
        assert!(grouped[0].1.is_empty());
        assert_eq!(grouped[1].1.len(), 2);
        assert_eq!(grouped[1].1[0].id, "a");
    }

    #[test]
    fn test_weekday_parsing() {
        assert_eq!(Weekday::from_str("WED"), Some(Weekday::Wednesday));
        assert_eq!(Weekday::from_str("friday"), Some(Weekday::Friday));
        assert_eq!(Weekday::from_str("saturday"), None);
    }

    #[test]
    fn test_color_palette_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::from_str(color.as_str()), Some(color));
        }
        assert_eq!(Color::from_str("mauve"), None);
    }
}
