//! School - students and subjects with a many-to-many enrollment, persisted
//! to SQLite through Diesel.
//!
//! # Architecture
//!
//! - **`domain`** - Storage-agnostic entities: [`domain::Student`],
//!   [`domain::Subject`] and their identifiers
//! - **`adapter::outbound::sqlite`** - Diesel schema, embedded migrations,
//!   the [`SchoolContext`](adapter::outbound::sqlite::SchoolContext) that owns
//!   the connection, and the
//!   [`SchoolRepository`](adapter::outbound::sqlite::SchoolRepository)
//! - **`application`** - The sample enrollment scenario
//! - **`adapter::inbound::cli`** - Command-line surface
//! - **`infrastructure`** - Configuration, logging and database bootstrap
//!
//! # Example
//!
//! ```no_run
//! use school::adapter::outbound::sqlite::{SchoolContext, SchoolRepository};
//! use school::domain::{NewStudent, NewSubject};
//!
//! # fn main() -> school::error::Result<()> {
//! let context = SchoolContext::open("School.db")?;
//! context.reset_and_create_schema()?;
//!
//! let repo = SchoolRepository::new(&context);
//! let math = repo.add_subject(NewSubject::new("Mathematics", 30))?;
//! let alice = repo.add_student(NewStudent::enrolled_now("Alice"))?;
//! repo.enroll_student_to_subject(alice.id(), math.id())?;
//!
//! for loaded in repo.get_all_subjects()? {
//!     println!("{}: {} students", loaded.subject.title, loaded.students.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
