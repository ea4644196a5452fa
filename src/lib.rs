//! # Campus - multi-role campus dashboard
//!
//! A terminal dashboard for a campus: administrators, department heads,
//! teachers and students each sign in to their own set of views.
//!
//! ## Features
//!
//! - **Notice Board**: Department, admin, academic and campus boards with search
//! - **Leave Requests**: Applications by students and teachers, approval by the department head
//! - **Exams**: Scheduling, running and grading, with letter grades for students
//! - **Study Materials**: Uploads by teachers, browsing by type and subject
//! - **Feedback**: Course ratings and comments from students
//! - **Attendance and Routine**: Per-course standing and the weekly timetable
//!
//! Every session starts from sample data and keeps its changes in memory only.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use campus::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod store;
