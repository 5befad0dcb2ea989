//! Class schedule domain models.

use serde::{Deserialize, Serialize};

/// One class in the weekly schedule. `time` is free text ("8:00 - 9:30");
/// no overlap or conflict validation is performed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: String,
    pub day: Weekday,
    pub name: String,
    pub teacher: String,
    pub room: String,
    pub time: String,
    pub color: Color,
}

/// Fields for a new class session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClassSession {
    pub day: Weekday,
    pub name: String,
    pub teacher: String,
    pub room: String,
    pub time: String,
    pub color: Color,
}

/// School days, Monday through Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All school days in board order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Parse from string (case-insensitive, accepts "mon".."fri" prefixes).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "monday" | "mon" => Some(Self::Monday),
            "tuesday" | "tue" => Some(Self::Tuesday),
            "wednesday" | "wed" => Some(Self::Wednesday),
            "thursday" | "thu" => Some(Self::Thursday),
            "friday" | "fri" => Some(Self::Friday),
            _ => None,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
        }
    }
}

/// Display tag for a class. Fixed palette of seven named colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Green,
    Purple,
    Yellow,
    Red,
    Orange,
    Pink,
}

impl Color {
    /// The whole palette.
    pub const ALL: [Color; 7] = [
        Color::Blue,
        Color::Green,
        Color::Purple,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Pink,
    ];

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "blue" => Some(Self::Blue),
            "green" => Some(Self::Green),
            "purple" => Some(Self::Purple),
            "yellow" => Some(Self::Yellow),
            "red" => Some(Self::Red),
            "orange" => Some(Self::Orange),
            "pink" => Some(Self::Pink),
            _ => None,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Pink => "pink",
        }
    }
}
