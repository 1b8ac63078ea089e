//! Sample enrollment scenario.
//!
//! Creates one subject and two students, enrolls both, then writes every
//! subject followed by its students:
//!
//! ```text
//! Subject: Mathematics
//!  - Alice
//!  - Bob
//! ```

use std::io::Write;

use tracing::info;

use crate::adapter::outbound::sqlite::SchoolRepository;
use crate::domain::{NewStudent, NewSubject, SubjectWithStudents};
use crate::error::Result;

/// Populate the repository with the sample rows and write the report.
///
/// # Errors
/// Returns an error if any repository call or write fails.
pub fn run<W: Write>(repo: &SchoolRepository, out: &mut W) -> Result<()> {
    seed(repo)?;
    let subjects = repo.get_all_subjects()?;
    write_report(&subjects, out)
}

/// Insert Mathematics, Alice and Bob, and enroll both students.
///
/// # Errors
/// Returns an error if any repository call fails.
pub fn seed(repo: &SchoolRepository) -> Result<()> {
    let math = repo.add_subject(NewSubject::new("Mathematics", 30))?;

    let alice = repo.add_student(NewStudent::enrolled_now("Alice"))?;
    let bob = repo.add_student(NewStudent::enrolled_now("Bob"))?;

    repo.enroll_student_to_subject(alice.id(), math.id())?;
    repo.enroll_student_to_subject(bob.id(), math.id())?;

    info!(subject = %math.title, students = 2, "Sample data created");
    Ok(())
}

/// Write each subject title followed by its students' names.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_report<W: Write>(subjects: &[SubjectWithStudents], out: &mut W) -> Result<()> {
    for loaded in subjects {
        writeln!(out, "Subject: {}", loaded.subject.title)?;
        for name in loaded.student_names() {
            writeln!(out, " - {name}")?;
        }
    }
    out.flush()?;
    Ok(())
}
