//! Student entity.

use chrono::{Local, NaiveDateTime};

use super::id::StudentId;
use super::subject::Subject;

/// A student that has not been persisted yet.
///
/// Has no identifier; one is assigned when the student is added through
/// [`SchoolRepository::add_student`](crate::adapter::outbound::sqlite::SchoolRepository::add_student).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub enrollment_date: NaiveDateTime,
}

impl NewStudent {
    /// Create a new student with an explicit enrollment date.
    pub fn new(name: impl Into<String>, enrollment_date: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            enrollment_date,
        }
    }

    /// Create a new student enrolled at the current local time.
    pub fn enrolled_now(name: impl Into<String>) -> Self {
        Self::new(name, Local::now().naive_local())
    }
}

/// A persisted student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: StudentId,
    pub name: String,
    pub enrollment_date: NaiveDateTime,
}

impl Student {
    /// Build a student from its stored parts.
    pub fn new(id: StudentId, name: impl Into<String>, enrollment_date: NaiveDateTime) -> Self {
        Self {
            id,
            name: name.into(),
            enrollment_date,
        }
    }

    /// Identifier assigned by the database.
    #[must_use]
    pub fn id(&self) -> StudentId {
        self.id
    }
}

/// A student together with every subject it is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentWithSubjects {
    pub student: Student,
    pub subjects: Vec<Subject>,
}
