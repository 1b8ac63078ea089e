//! Storage-agnostic domain types: students, subjects and their identifiers.

mod id;
mod student;
mod subject;

pub use id::{StudentId, SubjectId};
pub use student::{NewStudent, Student, StudentWithSubjects};
pub use subject::{NewSubject, Subject, SubjectWithStudents};
