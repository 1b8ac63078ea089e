//! SQLite-backed school repository using Diesel.
//!
//! Every method is its own unit of work: it checks out the connection, runs
//! inside one transaction where it writes, and commits before returning.

use diesel::prelude::*;
use tracing::debug;

use super::context::SchoolContext;
use super::database::connection::{DbConnection, DbPool};
use super::database::model::{EnrollmentRow, NewStudentRow, NewSubjectRow, StudentRow, SubjectRow};
use super::database::schema::{student_subjects, students, subjects};
use crate::domain::{
    NewStudent, NewSubject, Student, StudentId, StudentWithSubjects, Subject, SubjectId,
    SubjectWithStudents,
};
use crate::error::{Error, Result};

#[derive(QueryableByName)]
struct LastInsertRowId {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    #[diesel(column_name = "id")]
    id: i32,
}

/// Create, read and associate students and subjects.
#[derive(Clone)]
pub struct SchoolRepository {
    pool: DbPool,
}

impl SchoolRepository {
    /// Create a repository over the given context.
    #[must_use]
    pub fn new(context: &SchoolContext) -> Self {
        Self {
            pool: context.pool().clone(),
        }
    }

    fn connection(&self) -> Result<DbConnection> {
        self.pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))
    }

    /// Insert a subject and return it with its generated identifier.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn add_subject(&self, subject: NewSubject) -> Result<Subject> {
        let row = NewSubjectRow::from(&subject);
        let mut conn = self.connection()?;

        let id = conn
            .transaction(|conn| {
                diesel::insert_into(subjects::table)
                    .values(&row)
                    .execute(conn)?;
                last_insert_rowid(conn)
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        debug!(id, title = %subject.title, "Added subject");
        Ok(Subject::new(
            SubjectId::new(id),
            subject.title,
            subject.maximum_capacity,
        ))
    }

    /// Insert a student and return it with its generated identifier.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn add_student(&self, student: NewStudent) -> Result<Student> {
        let row = NewStudentRow::from(&student);
        let mut conn = self.connection()?;

        let id = conn
            .transaction(|conn| {
                diesel::insert_into(students::table)
                    .values(&row)
                    .execute(conn)?;
                last_insert_rowid(conn)
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        debug!(id, name = %student.name, "Added student");
        Ok(Student::new(
            StudentId::new(id),
            student.name,
            student.enrollment_date,
        ))
    }

    /// Link a student to a subject.
    ///
    /// If either identifier does not exist, or the pair is already linked,
    /// nothing is written and `Ok(())` is returned.
    ///
    /// # Errors
    /// Returns an error only if the database itself fails.
    pub fn enroll_student_to_subject(
        &self,
        student_id: StudentId,
        subject_id: SubjectId,
    ) -> Result<()> {
        let mut conn = self.connection()?;

        let linked = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                let student = students::table
                    .find(student_id.get())
                    .select(students::id)
                    .first::<i32>(conn)
                    .optional()?;
                let subject = subjects::table
                    .find(subject_id.get())
                    .select(subjects::id)
                    .first::<i32>(conn)
                    .optional()?;

                match (student, subject) {
                    (Some(student_id), Some(subject_id)) => {
                        let inserted = diesel::insert_or_ignore_into(student_subjects::table)
                            .values(&EnrollmentRow {
                                student_id,
                                subject_id,
                            })
                            .execute(conn)?;
                        Ok(inserted > 0)
                    }
                    _ => Ok(false),
                }
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        debug!(%student_id, %subject_id, linked, "Enroll request processed");
        Ok(())
    }

    /// Every subject with its students eagerly loaded.
    ///
    /// # Errors
    /// Returns an error if a query fails.
    pub fn get_all_subjects(&self) -> Result<Vec<SubjectWithStudents>> {
        let mut conn = self.connection()?;

        let subject_rows: Vec<SubjectRow> = subjects::table
            .order_by(subjects::id)
            .select(SubjectRow::as_select())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        let enrolled = EnrollmentRow::belonging_to(&subject_rows)
            .inner_join(students::table)
            .order_by(students::id)
            .select((EnrollmentRow::as_select(), StudentRow::as_select()))
            .load::<(EnrollmentRow, StudentRow)>(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        let loaded = enrolled
            .grouped_by(&subject_rows)
            .into_iter()
            .zip(subject_rows)
            .map(|(pairs, subject)| SubjectWithStudents {
                subject: subject.into(),
                students: pairs.into_iter().map(|(_, row)| row.into()).collect(),
            })
            .collect();

        Ok(loaded)
    }

    /// Students enrolled in a subject, or `None` if the subject does not exist.
    ///
    /// # Errors
    /// Returns an error if a query fails.
    pub fn get_students_for_subject(&self, subject_id: SubjectId) -> Result<Option<Vec<Student>>> {
        let mut conn = self.connection()?;

        let subject: Option<SubjectRow> = subjects::table
            .find(subject_id.get())
            .select(SubjectRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        let Some(subject) = subject else {
            return Ok(None);
        };

        let rows: Vec<StudentRow> = EnrollmentRow::belonging_to(&subject)
            .inner_join(students::table)
            .order_by(students::id)
            .select(StudentRow::as_select())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(Some(rows.into_iter().map(Student::from).collect()))
    }

    /// A student with every subject it is enrolled in, or `None` if the
    /// student does not exist.
    ///
    /// # Errors
    /// Returns an error if a query fails.
    pub fn get_subjects_for_student(
        &self,
        student_id: StudentId,
    ) -> Result<Option<StudentWithSubjects>> {
        let mut conn = self.connection()?;

        let student: Option<StudentRow> = students::table
            .find(student_id.get())
            .select(StudentRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        let Some(student) = student else {
            return Ok(None);
        };

        let rows: Vec<SubjectRow> = EnrollmentRow::belonging_to(&student)
            .inner_join(subjects::table)
            .order_by(subjects::id)
            .select(SubjectRow::as_select())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(Some(StudentWithSubjects {
            student: student.into(),
            subjects: rows.into_iter().map(Subject::from).collect(),
        }))
    }

    /// Look up a student by identifier without its subjects.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn find_student(&self, student_id: StudentId) -> Result<Option<Student>> {
        let mut conn = self.connection()?;

        let row: Option<StudentRow> = students::table
            .find(student_id.get())
            .select(StudentRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(row.map(Student::from))
    }

    /// Look up a subject by identifier without its students.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn find_subject(&self, subject_id: SubjectId) -> Result<Option<Subject>> {
        let mut conn = self.connection()?;

        let row: Option<SubjectRow> = subjects::table
            .find(subject_id.get())
            .select(SubjectRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(row.map(Subject::from))
    }
}

fn last_insert_rowid(conn: &mut SqliteConnection) -> QueryResult<i32> {
    diesel::sql_query("SELECT last_insert_rowid() AS id")
        .get_result::<LastInsertRowId>(conn)
        .map(|row| row.id)
}
