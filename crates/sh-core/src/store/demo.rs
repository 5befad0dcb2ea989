//! In-memory demo store.
//!
//! Active when no remote store is configured. Data lives only in this
//! process: mutations are synchronous, ids are client-generated, nothing
//! survives a restart. Not a cache and not a sync queue — just a seeded
//! mirror so the app is usable without configuration.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::grades::model::{Course, Grade, NewGrade};
use crate::homework::model::{Homework, NewHomework, Priority};
use crate::schedule::model::{ClassSession, Color, NewClassSession, Weekday};
use crate::store::{HomeworkFilter, StudentStore};

#[derive(Debug, Default)]
struct DemoData {
    homework: Vec<Homework>,
    courses: Vec<Course>,
    grades: Vec<Grade>,
    schedule: Vec<ClassSession>,
}

/// The demo-mode store.
pub struct DemoStore {
    data: RwLock<DemoData>,
}

impl DemoStore {
    /// Store seeded with the demo dataset.
    pub fn new() -> Self {
        Self {
            data: RwLock::new(seed()),
        }
    }

    /// Empty store, for tests.
    pub fn empty() -> Self {
        Self {
            data: RwLock::new(DemoData::default()),
        }
    }
}

impl Default for DemoStore {
    fn default() -> Self {
        Self::new()
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[async_trait]
impl StudentStore for DemoStore {
    async fn list_homework(&self, filter: HomeworkFilter) -> CoreResult<Vec<Homework>> {
        let data = self.data.read().await;
        let mut rows: Vec<Homework> = data
            .homework
            .iter()
            .filter(|hw| filter.completed.map_or(true, |c| hw.completed == c))
            .cloned()
            .collect();
        if let Some(limit) = filter.limit {
            rows.truncate(limit);
        }
        Ok(rows)
    }

    async fn add_homework(&self, new: NewHomework) -> CoreResult<()> {
        let mut data = self.data.write().await;
        data.homework.push(Homework {
            id: new_id(),
            subject: new.subject,
            task: new.task,
            due_date: new.due_date,
            priority: new.priority,
            completed: false,
        });
        Ok(())
    }

    async fn set_homework_completed(&self, id: &str, completed: bool) -> CoreResult<()> {
        let mut data = self.data.write().await;
        if let Some(hw) = data.homework.iter_mut().find(|hw| hw.id == id) {
            hw.completed = completed;
        }
        Ok(())
    }

    async fn delete_homework(&self, id: &str) -> CoreResult<()> {
        // Deleting an unknown id is a no-op, not an error.
        let mut data = self.data.write().await;
        data.homework.retain(|hw| hw.id != id);
        Ok(())
    }

    async fn list_courses(&self) -> CoreResult<Vec<Course>> {
        Ok(self.data.read().await.courses.clone())
    }

    async fn add_course(&self, name: &str) -> CoreResult<()> {
        let mut data = self.data.write().await;
        data.courses.push(Course {
            id: new_id(),
            name: name.to_string(),
        });
        Ok(())
    }

    async fn delete_course(&self, id: &str) -> CoreResult<()> {
        let mut data = self.data.write().await;
        data.grades.retain(|g| g.course_id != id);
        data.courses.retain(|c| c.id != id);
        Ok(())
    }

    async fn list_grades(&self, course_id: Option<&str>) -> CoreResult<Vec<Grade>> {
        let data = self.data.read().await;
        Ok(data
            .grades
            .iter()
            .filter(|g| course_id.map_or(true, |c| g.course_id == c))
            .cloned()
            .collect())
    }

    async fn add_grade(&self, new: NewGrade) -> CoreResult<()> {
        let mut data = self.data.write().await;
        data.grades.push(Grade {
            id: new_id(),
            course_id: new.course_id,
            name: new.name,
            score: new.score,
            weight: new.weight,
        });
        Ok(())
    }

    async fn delete_grade(&self, id: &str) -> CoreResult<()> {
        let mut data = self.data.write().await;
        data.grades.retain(|g| g.id != id);
        Ok(())
    }

    async fn list_schedule(&self, day: Option<Weekday>) -> CoreResult<Vec<ClassSession>> {
        let data = self.data.read().await;
        Ok(data
            .schedule
            .iter()
            .filter(|s| day.map_or(true, |d| s.day == d))
            .cloned()
            .collect())
    }

    async fn add_class(&self, new: NewClassSession) -> CoreResult<()> {
        let mut data = self.data.write().await;
        data.schedule.push(ClassSession {
            id: new_id(),
            day: new.day,
            name: new.name,
            teacher: new.teacher,
            room: new.room,
            time: new.time,
            color: new.color,
        });
        Ok(())
    }

    async fn delete_class(&self, id: &str) -> CoreResult<()> {
        let mut data = self.data.write().await;
        data.schedule.retain(|s| s.id != id);
        Ok(())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn seed() -> DemoData {
    let math = Course { id: new_id(), name: "Mathematics".into() };
    let language = Course { id: new_id(), name: "Language Arts".into() };
    let science = Course { id: new_id(), name: "Science".into() };

    let grades = vec![
        Grade { id: new_id(), course_id: math.id.clone(), name: "Quiz 1".into(), score: 85.0, weight: 10.0 },
        Grade { id: new_id(), course_id: math.id.clone(), name: "Midterm".into(), score: 92.0, weight: 30.0 },
        Grade { id: new_id(), course_id: math.id.clone(), name: "Quiz 2".into(), score: 88.0, weight: 10.0 },
        Grade { id: new_id(), course_id: language.id.clone(), name: "Essay".into(), score: 90.0, weight: 20.0 },
        Grade { id: new_id(), course_id: language.id.clone(), name: "Spelling test".into(), score: 94.0, weight: 15.0 },
        Grade { id: new_id(), course_id: science.id.clone(), name: "Lab report".into(), score: 88.0, weight: 25.0 },
        Grade { id: new_id(), course_id: science.id.clone(), name: "Quiz".into(), score: 82.0, weight: 15.0 },
    ];

    let homework = vec![
        Homework {
            id: new_id(),
            subject: "Mathematics".into(),
            task: "Finish chapter 5 exercises".into(),
            due_date: date(2026, 2, 11),
            priority: Priority::High,
            completed: false,
        },
        Homework {
            id: new_id(),
            subject: "Language Arts".into(),
            task: "Write the essay draft".into(),
            due_date: date(2026, 2, 12),
            priority: Priority::High,
            completed: false,
        },
        Homework {
            id: new_id(),
            subject: "Science".into(),
            task: "Lab work - chemical reactions".into(),
            due_date: date(2026, 2, 14),
            priority: Priority::Medium,
            completed: false,
        },
        Homework {
            id: new_id(),
            subject: "History".into(),
            task: "Read chapter 12".into(),
            due_date: date(2026, 2, 10),
            priority: Priority::Low,
            completed: true,
        },
    ];

    let schedule = vec![
        class(Weekday::Monday, "Mathematics", "Ms. Adams", "Room 201", "8:00 - 9:30", Color::Blue),
        class(Weekday::Monday, "Language Arts", "Mr. Brooks", "Room 105", "9:45 - 11:15", Color::Green),
        class(Weekday::Monday, "Science", "Dr. Chen", "Lab 3", "12:00 - 13:30", Color::Yellow),
        class(Weekday::Tuesday, "History", "Mr. Diaz", "Room 308", "8:00 - 9:30", Color::Orange),
        class(Weekday::Tuesday, "Chemistry", "Ms. Evans", "Lab 2", "9:45 - 11:15", Color::Purple),
        class(Weekday::Wednesday, "Mathematics", "Ms. Adams", "Room 201", "8:00 - 9:30", Color::Blue),
        class(Weekday::Wednesday, "Physical Education", "Coach Flynn", "Gym", "9:45 - 11:15", Color::Red),
        class(Weekday::Thursday, "Language Arts", "Mr. Brooks", "Room 105", "8:00 - 9:30", Color::Green),
        class(Weekday::Thursday, "Science", "Dr. Chen", "Lab 3", "9:45 - 11:15", Color::Yellow),
        class(Weekday::Friday, "History", "Mr. Diaz", "Room 308", "8:00 - 9:30", Color::Orange),
        class(Weekday::Friday, "Art", "Ms. Garza", "Art studio", "9:45 - 11:15", Color::Pink),
    ];

    DemoData {
        homework,
        courses: vec![math, language, science],
        grades,
        schedule,
    }
}

fn class(day: Weekday, name: &str, teacher: &str, room: &str, time: &str, color: Color) -> ClassSession {
    ClassSession {
        id: new_id(),
        day,
        name: name.into(),
        teacher: teacher.into(),
        room: room.into(),
        time: time.into(),
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_hw(subject: &str) -> NewHomework {
        NewHomework {
            subject: subject.into(),
            task: "task".into(),
            due_date: date(2026, 3, 1),
            priority: Priority::Medium,
        }
    }

    #[tokio::test]
    async fn test_insert_appears_in_subsequent_list() {
        let store = DemoStore::empty();
        store.add_homework(new_hw("Math")).await.unwrap();
        let rows = store.list_homework(HomeworkFilter::default()).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].subject, "Math");
        assert!(!rows[0].completed);
        assert!(!rows[0].id.is_empty());
    }

    #[tokio::test]
    async fn test_generated_ids_are_unique() {
        let store = DemoStore::empty();
        store.add_homework(new_hw("a")).await.unwrap();
        store.add_homework(new_hw("b")).await.unwrap();
        let rows = store.list_homework(HomeworkFilter::default()).await.unwrap();
        assert_ne!(rows[0].id, rows[1].id);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let store = DemoStore::empty();
        store.add_homework(new_hw("a")).await.unwrap();
        store.add_homework(new_hw("b")).await.unwrap();
        let rows = store.list_homework(HomeworkFilter::default()).await.unwrap();

        store.delete_homework(&rows[0].id).await.unwrap();
        let remaining = store.list_homework(HomeworkFilter::default()).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].subject, "b");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let store = DemoStore::empty();
        store.add_homework(new_hw("a")).await.unwrap();
        store.delete_homework("no-such-id").await.unwrap();
        let rows = store.list_homework(HomeworkFilter::default()).await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_completed_and_filter() {
        let store = DemoStore::empty();
        store.add_homework(new_hw("a")).await.unwrap();
        store.add_homework(new_hw("b")).await.unwrap();
        let rows = store.list_homework(HomeworkFilter::default()).await.unwrap();

        store.set_homework_completed(&rows[0].id, true).await.unwrap();
        let pending = store
            .list_homework(HomeworkFilter { completed: Some(false), limit: None })
            .await
            .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, rows[1].id);
    }

    #[tokio::test]
    async fn test_upcoming_filter_limits() {
        let store = DemoStore::new();
        let upcoming = store.list_homework(HomeworkFilter::upcoming(3)).await.unwrap();
        assert!(upcoming.len() <= 3);
        assert!(upcoming.iter().all(|hw| !hw.completed));
    }

    #[tokio::test]
    async fn test_delete_course_cascades_to_grades() {
        let store = DemoStore::empty();
        store.add_course("Math").await.unwrap();
        store.add_course("History").await.unwrap();
        let courses = store.list_courses().await.unwrap();

        store
            .add_grade(NewGrade {
                course_id: courses[0].id.clone(),
                name: "Quiz".into(),
                score: 80.0,
                weight: 10.0,
            })
            .await
            .unwrap();
        store
            .add_grade(NewGrade {
                course_id: courses[1].id.clone(),
                name: "Quiz".into(),
                score: 90.0,
                weight: 10.0,
            })
            .await
            .unwrap();

        store.delete_course(&courses[0].id).await.unwrap();
        assert_eq!(store.list_courses().await.unwrap().len(), 1);
        let grades = store.list_grades(None).await.unwrap();
        assert_eq!(grades.len(), 1);
        assert_eq!(grades[0].course_id, courses[1].id);
    }

    #[tokio::test]
    async fn test_list_grades_filters_by_course() {
        let store = DemoStore::new();
        let courses = store.list_courses().await.unwrap();
        let grades = store.list_grades(Some(&courses[0].id)).await.unwrap();
        assert!(grades.iter().all(|g| g.course_id == courses[0].id));
        assert!(!grades.is_empty());
    }

    #[tokio::test]
    async fn test_courses_with_grades_join() {
        let store = DemoStore::new();
        let joined = store.list_courses_with_grades().await.unwrap();
        assert_eq!(joined.len(), 3);
        assert!(joined.iter().all(|c| !c.grades.is_empty()));
    }

    #[tokio::test]
    async fn test_schedule_day_filter() {
        let store = DemoStore::new();
        let monday = store.list_schedule(Some(Weekday::Monday)).await.unwrap();
        assert_eq!(monday.len(), 3);
        let all = store.list_schedule(None).await.unwrap();
        assert_eq!(all.len(), 11);
    }
}
