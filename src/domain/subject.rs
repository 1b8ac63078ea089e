//! Subject entity.

use super::id::SubjectId;
use super::student::Student;

/// A subject that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubject {
    pub title: String,
    /// Advisory only. Enrollment never checks it.
    pub maximum_capacity: i32,
}

impl NewSubject {
    /// Create a new subject.
    pub fn new(title: impl Into<String>, maximum_capacity: i32) -> Self {
        Self {
            title: title.into(),
            maximum_capacity,
        }
    }
}

/// A persisted subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    id: SubjectId,
    pub title: String,
    pub maximum_capacity: i32,
}

impl Subject {
    /// Build a subject from its stored parts.
    pub fn new(id: SubjectId, title: impl Into<String>, maximum_capacity: i32) -> Self {
        Self {
            id,
            title: title.into(),
            maximum_capacity,
        }
    }

    /// Identifier assigned by the database.
    #[must_use]
    pub fn id(&self) -> SubjectId {
        self.id
    }
}

/// A subject with its enrolled students eagerly loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectWithStudents {
    pub subject: Subject,
    pub students: Vec<Student>,
}

impl SubjectWithStudents {
    /// Names of the enrolled students, in load order.
    pub fn student_names(&self) -> impl Iterator<Item = &str> {
        self.students.iter().map(|s| s.name.as_str())
    }
}
