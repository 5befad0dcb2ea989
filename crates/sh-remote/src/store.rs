//! Remote implementation of the data-access façade.
//!
//! Each operation delegates to the table API. Writes return `Ok(())`
//! without touching local state; callers honor the read-after-write
//! contract by re-listing the collection. Failures propagate as
//! `CoreError::Remote` and are swallowed at the view boundary (the view
//! keeps its last-known-good content, no retry).

use async_trait::async_trait;
use serde::Serialize;
use sh_core::error::CoreResult;
use sh_core::grades::model::{Course, Grade, NewGrade};
use sh_core::homework::model::{Homework, NewHomework, Priority};
use sh_core::schedule::model::{ClassSession, Color, NewClassSession, Weekday};
use sh_core::store::{HomeworkFilter, StudentStore};

use crate::client::RestClient;
use crate::query::Query;

const HOMEWORK_TABLE: &str = "homeworks";
const COURSES_TABLE: &str = "courses";
const GRADES_TABLE: &str = "grades";
const SCHEDULE_TABLE: &str = "schedule";

/// Remote store bound to the session active at startup.
pub struct RemoteStore {
    client: RestClient,
    token: Option<String>,
}

impl RemoteStore {
    /// Create a remote store. `token` is the access token of the signed-in
    /// user, if any; without it requests run under the anonymous role.
    pub fn new(client: RestClient, token: Option<String>) -> Self {
        Self { client, token }
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[derive(Serialize)]
struct HomeworkInsert<'a> {
    subject: &'a str,
    task: &'a str,
    due_date: chrono::NaiveDate,
    priority: Priority,
    completed: bool,
}

#[derive(Serialize)]
struct CompletedPatch {
    completed: bool,
}

#[derive(Serialize)]
struct CourseInsert<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct ClassInsert<'a> {
    day: Weekday,
    name: &'a str,
    teacher: &'a str,
    room: &'a str,
    time: &'a str,
    color: Color,
}

#[async_trait]
impl StudentStore for RemoteStore {
    async fn list_homework(&self, filter: HomeworkFilter) -> CoreResult<Vec<Homework>> {
        let mut query = Query::new().order_asc("due_date");
        if let Some(completed) = filter.completed {
            query = query.eq("completed", completed);
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }
        let rows = self
            .client
            .select(HOMEWORK_TABLE, &query, self.token())
            .await?;
        Ok(rows)
    }

    async fn add_homework(&self, new: NewHomework) -> CoreResult<()> {
        let row = HomeworkInsert {
            subject: &new.subject,
            task: &new.task,
            due_date: new.due_date,
            priority: new.priority,
            completed: false,
        };
        self.client
            .insert(HOMEWORK_TABLE, &row, self.token())
            .await?;
        Ok(())
    }

    async fn set_homework_completed(&self, id: &str, completed: bool) -> CoreResult<()> {
        self.client
            .update(
                HOMEWORK_TABLE,
                &Query::new().eq("id", id),
                &CompletedPatch { completed },
                self.token(),
            )
            .await?;
        Ok(())
    }

    async fn delete_homework(&self, id: &str) -> CoreResult<()> {
        self.client
            .delete(HOMEWORK_TABLE, &Query::new().eq("id", id), self.token())
            .await?;
        Ok(())
    }

    async fn list_courses(&self) -> CoreResult<Vec<Course>> {
        let rows = self
            .client
            .select(COURSES_TABLE, &Query::new(), self.token())
            .await?;
        Ok(rows)
    }

    async fn add_course(&self, name: &str) -> CoreResult<()> {
        self.client
            .insert(COURSES_TABLE, &CourseInsert { name }, self.token())
            .await?;
        Ok(())
    }

    async fn delete_course(&self, id: &str) -> CoreResult<()> {
        // Grades reference the course by id only; remove them first.
        self.client
            .delete(GRADES_TABLE, &Query::new().eq("course_id", id), self.token())
            .await?;
        self.client
            .delete(COURSES_TABLE, &Query::new().eq("id", id), self.token())
            .await?;
        Ok(())
    }

    async fn list_grades(&self, course_id: Option<&str>) -> CoreResult<Vec<Grade>> {
        let mut query = Query::new();
        if let Some(course_id) = course_id {
            query = query.eq("course_id", course_id);
        }
        let rows = self
            .client
            .select(GRADES_TABLE, &query, self.token())
            .await?;
        Ok(rows)
    }

    async fn add_grade(&self, new: NewGrade) -> CoreResult<()> {
        self.client
            .insert(GRADES_TABLE, &new, self.token())
            .await?;
        Ok(())
    }

    async fn delete_grade(&self, id: &str) -> CoreResult<()> {
        self.client
            .delete(GRADES_TABLE, &Query::new().eq("id", id), self.token())
            .await?;
        Ok(())
    }

    async fn list_schedule(&self, day: Option<Weekday>) -> CoreResult<Vec<ClassSession>> {
        let mut query = Query::new();
        if let Some(day) = day {
            query = query.eq("day", day.as_str());
        }
        let rows = self
            .client
            .select(SCHEDULE_TABLE, &query, self.token())
            .await?;
        Ok(rows)
    }

    async fn add_class(&self, new: NewClassSession) -> CoreResult<()> {
        let row = ClassInsert {
            day: new.day,
            name: &new.name,
            teacher: &new.teacher,
            room: &new.room,
            time: &new.time,
            color: new.color,
        };
        self.client
            .insert(SCHEDULE_TABLE, &row, self.token())
            .await?;
        Ok(())
    }

    async fn delete_class(&self, id: &str) -> CoreResult<()> {
        self.client
            .delete(SCHEDULE_TABLE, &Query::new().eq("id", id), self.token())
            .await?;
        Ok(())
    }
}
