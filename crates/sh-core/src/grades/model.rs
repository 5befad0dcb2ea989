//! Grade domain models.

use serde::{Deserialize, Serialize};

/// A course (subject) that graded items belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
}

/// A graded item within a course. Score and weight are expected in 0–100
/// but never enforced; weights act as ratios, not forced percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: String,
    pub course_id: String,
    pub name: String,
    pub score: f64,
    pub weight: f64,
}

/// Fields for a new grade entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGrade {
    pub course_id: String,
    pub name: String,
    pub score: f64,
    pub weight: f64,
}

/// A course joined with its grade entries for presentation and aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseWithGrades {
    pub course: Course,
    pub grades: Vec<Grade>,
}
