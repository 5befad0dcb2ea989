//! Data-access façade.
//!
//! One uniform contract over the four record collections, with two
//! implementations selected once at startup by configuration presence:
//! the in-memory [`demo::DemoStore`] and the remote store (sh-remote).
//! Views never branch on the mode at call sites.
//!
//! Live-mode writes do not mutate any local state; on success the caller
//! re-lists the affected collection so the view reflects server-assigned
//! fields (read-after-write, no optimistic merge). Demo-mode writes mutate
//! the in-memory mirror synchronously.

pub mod demo;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::grades::model::{Course, CourseWithGrades, Grade, NewGrade};
use crate::grades;
use crate::homework::model::{Homework, NewHomework};
use crate::schedule::model::{ClassSession, NewClassSession, Weekday};

/// Filter for homework listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeworkFilter {
    /// Keep only rows with this completion state.
    pub completed: Option<bool>,
    /// Cap the number of rows returned.
    pub limit: Option<usize>,
}

impl HomeworkFilter {
    /// Up to `limit` incomplete assignments — the dashboard's upcoming view.
    pub fn upcoming(limit: usize) -> Self {
        Self {
            completed: Some(false),
            limit: Some(limit),
        }
    }
}

/// The façade contract shared by the demo and remote stores.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// List homework. The remote store orders by due date ascending; the
    /// demo store guarantees insertion order only.
    async fn list_homework(&self, filter: HomeworkFilter) -> CoreResult<Vec<Homework>>;
    async fn add_homework(&self, new: NewHomework) -> CoreResult<()>;
    async fn set_homework_completed(&self, id: &str, completed: bool) -> CoreResult<()>;
    async fn delete_homework(&self, id: &str) -> CoreResult<()>;

    async fn list_courses(&self) -> CoreResult<Vec<Course>>;
    async fn add_course(&self, name: &str) -> CoreResult<()>;
    /// Delete a course and its grade entries.
    async fn delete_course(&self, id: &str) -> CoreResult<()>;

    async fn list_grades(&self, course_id: Option<&str>) -> CoreResult<Vec<Grade>>;
    async fn add_grade(&self, new: NewGrade) -> CoreResult<()>;
    async fn delete_grade(&self, id: &str) -> CoreResult<()>;

    async fn list_schedule(&self, day: Option<Weekday>) -> CoreResult<Vec<ClassSession>>;
    async fn add_class(&self, new: NewClassSession) -> CoreResult<()>;
    async fn delete_class(&self, id: &str) -> CoreResult<()>;

    /// Courses joined with their grade entries, for the grade sheet and
    /// the dashboard average.
    async fn list_courses_with_grades(&self) -> CoreResult<Vec<CourseWithGrades>> {
        let courses = self.list_courses().await?;
        let all_grades = self.list_grades(None).await?;
        Ok(grades::attach_grades(courses, all_grades))
    }
}
