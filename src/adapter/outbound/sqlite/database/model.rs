//! Database model types for Diesel ORM.
//!
//! Row types mirror the tables in [`schema`](super::schema) one to one and
//! convert into the domain types at the repository boundary.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::{student_subjects, students, subjects};
use crate::domain::{NewStudent, NewSubject, Student, StudentId, Subject, SubjectId};

/// Database row for a student (queryable).
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StudentRow {
    pub id: i32,
    pub name: String,
    pub enrollment_date: NaiveDateTime,
}

/// Database row for a student (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = students)]
pub struct NewStudentRow<'a> {
    pub name: &'a str,
    pub enrollment_date: NaiveDateTime,
}

/// Database row for a subject (queryable).
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = subjects)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SubjectRow {
    pub id: i32,
    pub title: String,
    pub maximum_capacity: i32,
}

/// Database row for a subject (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = subjects)]
pub struct NewSubjectRow<'a> {
    pub title: &'a str,
    pub maximum_capacity: i32,
}

/// Database row linking one student to one subject.
#[derive(
    Queryable, Selectable, Insertable, Identifiable, Associations, Debug, Clone, PartialEq, Eq,
)]
#[diesel(table_name = student_subjects)]
#[diesel(primary_key(student_id, subject_id))]
#[diesel(belongs_to(StudentRow, foreign_key = student_id))]
#[diesel(belongs_to(SubjectRow, foreign_key = subject_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EnrollmentRow {
    pub student_id: i32,
    pub subject_id: i32,
}

impl<'a> From<&'a NewStudent> for NewStudentRow<'a> {
    fn from(student: &'a NewStudent) -> Self {
        Self {
            name: &student.name,
            enrollment_date: student.enrollment_date,
        }
    }
}

impl<'a> From<&'a NewSubject> for NewSubjectRow<'a> {
    fn from(subject: &'a NewSubject) -> Self {
        Self {
            title: &subject.title,
            maximum_capacity: subject.maximum_capacity,
        }
    }
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student::new(StudentId::new(row.id), row.name, row.enrollment_date)
    }
}

impl From<SubjectRow> for Subject {
    fn from(row: SubjectRow) -> Self {
        Subject::new(SubjectId::new(row.id), row.title, row.maximum_capacity)
    }
}
