//! Grade aggregation.
//!
//! Pure functions, no side effects. Degenerate inputs (no entries, zero
//! total weight, no courses) all resolve to 0.0 rather than an error.

pub mod model;

use std::fmt;

use model::{Course, CourseWithGrades, Grade};
use serde::{Deserialize, Serialize};

/// Weighted average of a course's grade entries.
///
/// `Σ(score·weight) / Σ(weight)`. Weights need not sum to 100; the
/// division normalizes them implicitly. Returns 0.0 for an empty set or a
/// zero total weight.
pub fn course_average(grades: &[Grade]) -> f64 {
    let total_weight = total_weight(grades);
    if total_weight == 0.0 {
        return 0.0;
    }
    let weighted_sum: f64 = grades.iter().map(|g| g.score * g.weight).sum();
    weighted_sum / total_weight
}

/// Sum of a course's grade weights, for the "N% of weight remaining"
/// advisory. Advisory only, never blocks anything.
pub fn total_weight(grades: &[Grade]) -> f64 {
    grades.iter().map(|g| g.weight).sum()
}

/// Unweighted arithmetic mean of per-course averages; 0.0 with no courses.
///
/// Each course counts equally regardless of how many graded items it
/// contains. Entries are weighted within a course, courses are not weighted
/// against each other — that asymmetry is intentional.
pub fn overall_average(courses: &[CourseWithGrades]) -> f64 {
    if courses.is_empty() {
        return 0.0;
    }
    let sum: f64 = courses.iter().map(|c| course_average(&c.grades)).sum();
    sum / courses.len() as f64
}

/// Join courses with their grade entries by `course_id`.
pub fn attach_grades(courses: Vec<Course>, grades: Vec<Grade>) -> Vec<CourseWithGrades> {
    courses
        .into_iter()
        .map(|course| {
            let grades = grades
                .iter()
                .filter(|g| g.course_id == course.id)
                .cloned()
                .collect();
            CourseWithGrades { course, grades }
        })
        .collect()
}

/// Letter grade bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Letter {
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    F,
}

impl Letter {
    /// Convert to display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a percentage to a letter grade. Thresholds are inclusive lower
/// bounds; an exactly-equal score takes the higher band.
pub fn letter_grade(score: f64) -> Letter {
    if score >= 93.0 {
        Letter::A
    } else if score >= 90.0 {
        Letter::AMinus
    } else if score >= 87.0 {
        Letter::BPlus
    } else if score >= 83.0 {
        Letter::B
    } else if score >= 80.0 {
        Letter::BMinus
    } else if score >= 77.0 {
        Letter::CPlus
    } else if score >= 73.0 {
        Letter::C
    } else if score >= 70.0 {
        Letter::CMinus
    } else if score >= 67.0 {
        Letter::DPlus
    } else if score >= 60.0 {
        Letter::D
    } else {
        Letter::F
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(score: f64, weight: f64) -> Grade {
        Grade {
            id: "g".into(),
            course_id: "c".into(),
            name: "Test".into(),
            score,
            weight,
        }
    }

    fn course(id: &str, grades: Vec<Grade>) -> CourseWithGrades {
        CourseWithGrades {
            course: Course {
                id: id.to_string(),
                name: format!("Course {}", id),
            },
            grades,
        }
    }

    #[test]
    fn test_course_average_empty_is_zero() {
        assert_eq!(course_average(&[]), 0.0);
    }

    #[test]
    fn test_course_average_zero_weight_guard() {
        assert_eq!(course_average(&[grade(100.0, 0.0)]), 0.0);
    }

    #[test]
    fn test_course_average_weighted() {
        let grades = vec![grade(80.0, 10.0), grade(90.0, 30.0)];
        // (80*10 + 90*30) / 40
        assert_eq!(course_average(&grades), 87.5);
    }

    #[test]
    fn test_weights_normalize_implicitly() {
        // Weights summing to 40 behave like ratios, not percentages.
        let partial = vec![grade(80.0, 10.0), grade(90.0, 30.0)];
        let full = vec![grade(80.0, 25.0), grade(90.0, 75.0)];
        assert_eq!(course_average(&partial), course_average(&full));
    }

    #[test]
    fn test_letter_grade_boundaries_inclusive() {
        assert_eq!(letter_grade(93.0), Letter::A);
        assert_eq!(letter_grade(92.999), Letter::AMinus);
        assert_eq!(letter_grade(90.0), Letter::AMinus);
        assert_eq!(letter_grade(87.0), Letter::BPlus);
        assert_eq!(letter_grade(83.0), Letter::B);
        assert_eq!(letter_grade(80.0), Letter::BMinus);
        assert_eq!(letter_grade(77.0), Letter::CPlus);
        assert_eq!(letter_grade(73.0), Letter::C);
        assert_eq!(letter_grade(70.0), Letter::CMinus);
        assert_eq!(letter_grade(67.0), Letter::DPlus);
        assert_eq!(letter_grade(60.0), Letter::D);
        assert_eq!(letter_grade(59.9), Letter::F);
    }

    #[test]
    fn test_overall_average_unweighted_by_course() {
        // One course with many entries, one with a single entry: each
        // course still counts once.
        let heavy = course(
            "1",
            vec![grade(90.0, 10.0), grade(90.0, 20.0), grade(90.0, 30.0)],
        );
        let light = course("2", vec![grade(70.0, 5.0)]);
        assert_eq!(overall_average(&[heavy, light]), 80.0);
    }

    #[test]
    fn test_overall_average_no_courses_is_zero() {
        assert_eq!(overall_average(&[]), 0.0);
    }

    #[test]
    fn test_overall_average_counts_gradeless_course_as_zero() {
        let graded = course("1", vec![grade(90.0, 50.0)]);
        let empty = course("2", vec![]);
        assert_eq!(overall_average(&[graded, empty]), 45.0);
    }

    #[test]
    fn test_total_weight() {
        let grades = vec![grade(85.0, 10.0), grade(92.0, 30.0)];
        assert_eq!(total_weight(&grades), 40.0);
        assert_eq!(total_weight(&[]), 0.0);
    }

    #[test]
    fn test_attach_grades_joins_by_course_id() {
        let courses = vec![
            Course { id: "1".into(), name: "Math".into() },
            Course { id: "2".into(), name: "History".into() },
        ];
        let mut g1 = grade(85.0, 10.0);
        g1.course_id = "1".into();
        let mut g2 = grade(90.0, 20.0);
        g2.course_id = "2".into();
        let mut g3 = grade(88.0, 10.0);
        g3.course_id = "1".into();

        let joined = attach_grades(courses, vec![g1, g2, g3]);
        assert_eq!(joined[0].grades.len(), 2);
        assert_eq!(joined[1].grades.len(), 1);
    }
}
