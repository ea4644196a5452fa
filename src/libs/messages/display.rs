//! Text of every [`Message`].
//!
//! Keeping all wording in one `match` lets call sites stay free of string
//! literals and makes the full set of CLI output reviewable in one place.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            // === CONFIG MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError(path) => format!("Failed to parse configuration file {}", path),
            Message::ConfigModuleAuth => "Authentication".to_string(),
            Message::ConfigModuleAttendance => "Attendance".to_string(),
            Message::ConfigModuleSession => "Session".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptLoginDelay => "Simulated login delay (ms)".to_string(),
            Message::PromptStoreDemoAccounts => "Store the demo accounts in the config file?".to_string(),
            Message::PromptGoodThreshold => "Minimum attendance for good standing (%)".to_string(),
            Message::PromptWarningThreshold => "Minimum attendance before danger (%)".to_string(),
            Message::PromptSeedSampleData => "Start sessions with sample data?".to_string(),
            Message::ThresholdOrder => "The warning threshold must not exceed the good threshold (max 100)".to_string(),

            // === LOGIN / SESSION MESSAGES ===
            Message::PromptRole => "Sign in as".to_string(),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::SigningIn => "Signing in...".to_string(),
            Message::LoginSuccess(role) => format!("Logged in as {}", role),
            Message::InvalidEmail => "Please enter a valid email address".to_string(),
            Message::PasswordTooShort(min) => format!("Password must be at least {} characters", min),
            Message::PromptNavigate => "Go to".to_string(),
            Message::MenuLogout => "Logout".to_string(),
            Message::LoggedOut => "You have been logged out".to_string(),
            Message::PageNotFound(path) => format!("Page not found: {}", path),
            Message::SampleDataDisabled => "Sample data is disabled; the session starts empty".to_string(),

            // === GENERAL MESSAGES ===
            Message::NothingFound(kind) => format!("No {} found", kind),
            Message::NothingFoundForSearch(kind, term) => {
                format!("No {} found for '{}'. Try a different search term", kind, term)
            }
            Message::RecordNotFound(kind, id) => format!("No {} with id '{}'", kind, id),
            Message::TransitionRefused(id, reason) => format!("Record '{}' left unchanged: {}", id, reason),
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::SelectAction => "Select an action".to_string(),
            Message::InvalidDate(value) => format!("Invalid date '{}', expected YYYY-MM-DD", value),
            Message::PromptRetry => "Edit the form and try again?".to_string(),

            // === DASHBOARD MESSAGES ===
            Message::DashboardHeader(role) => format!("{} Dashboard", role),
            Message::NavigationHeader => "Navigation".to_string(),

            // === NOTICE MESSAGES ===
            Message::NoticesHeader(board) => format!("{} Notices", board),
            Message::NoticePosted(title) => format!("Notice '{}' posted", title),
            Message::PromptBoard => "Board".to_string(),
            Message::PromptSearch => "Search (leave empty for all)".to_string(),
            Message::PromptNoticeTitle => "Title".to_string(),
            Message::PromptNoticeContent => "Content".to_string(),
            Message::PromptNoticeCategory => "Category".to_string(),
            Message::PromptPinNotice => "Pin this notice?".to_string(),
            Message::PromptHasAttachment => "Has an attachment?".to_string(),

            // === LEAVE MESSAGES ===
            Message::LeaveHeader(tab) => format!("Leave Requests: {}", tab),
            Message::LeaveSubmitted => "Leave application submitted".to_string(),
            Message::LeaveApproved(name) => format!("Leave request of {} approved", name),
            Message::LeaveRejected(name) => format!("Leave request of {} rejected", name),
            Message::PromptLeaveType => "Leave type".to_string(),
            Message::PromptFromDate => "From date (YYYY-MM-DD)".to_string(),
            Message::PromptToDate => "To date (YYYY-MM-DD)".to_string(),
            Message::PromptLeaveReason => "Reason".to_string(),
            Message::PromptAttachment => "Supporting document (file name, optional)".to_string(),
            Message::PromptSelectLeave => "Select a request".to_string(),
            Message::PromptRejectComment => "Comment (optional)".to_string(),

            // === MATERIAL MESSAGES ===
            Message::MaterialsHeader(tab) => format!("Study Materials: {}", tab),
            Message::MaterialUploaded(title) => format!("Material '{}' uploaded", title),
            Message::MaterialDeleted(title) => format!("Material '{}' deleted", title),
            Message::PromptMaterialTitle => "Title".to_string(),
            Message::PromptMaterialDescription => "Description".to_string(),
            Message::PromptMaterialType => "Type".to_string(),
            Message::PromptSubject => "Subject".to_string(),
            Message::PromptMaterialFile => "File path".to_string(),
            Message::FileNotReadable(path) => format!("Cannot read file '{}'", path),
            Message::ConfirmDeleteMaterial(title) => format!("Delete '{}'?", title),
            Message::PromptSelectMaterial => "Select a material".to_string(),

            // === EXAM MESSAGES ===
            Message::ExamsHeader(tab) => format!("Exams: {}", tab),
            Message::ExamScheduled(title) => format!("Exam '{}' scheduled", title),
            Message::ExamStarted(title) => format!("Exam '{}' is now in progress", title),
            Message::ExamCompleted(title) => format!("Exam '{}' completed", title),
            Message::ExamGraded(title, grade) => format!("Exam '{}' graded: {}", title, grade),
            Message::PromptExamCourse => "Course".to_string(),
            Message::PromptExamTitle => "Title".to_string(),
            Message::PromptExamDate => "Date (YYYY-MM-DD)".to_string(),
            Message::PromptExamTime => "Time".to_string(),
            Message::PromptExamDuration => "Duration".to_string(),
            Message::PromptExamLocation => "Location".to_string(),
            Message::PromptExamType => "Type".to_string(),
            Message::PromptExamNotes => "Notes (optional)".to_string(),
            Message::PromptSelectExam => "Select an exam".to_string(),
            Message::PromptMarks => "Marks obtained".to_string(),
            Message::PromptTotalMarks => "Total marks".to_string(),
            Message::AverageScore(percentage) => format!("Average score: {}%", percentage),

            // === FEEDBACK MESSAGES ===
            Message::FeedbackHeader => "Course Feedback".to_string(),
            Message::FeedbackSubmitted(course) => format!("Feedback for {} submitted", course),
            Message::AverageRating(rating) => format!("Average rating: {} / 5", rating),
            Message::PromptFeedbackCourse => "Select course".to_string(),
            Message::PromptRating => "Rating".to_string(),
            Message::PromptFeedbackComment => "Please share your experience with this course and instructor".to_string(),

            // === ATTENDANCE MESSAGES ===
            Message::AttendanceHeader => "Attendance".to_string(),
            Message::OverallAttendance(attended, total, percentage) => {
                format!("Overall attendance: {}% ({} of {} classes)", percentage, attended, total)
            }
            Message::AttendanceBelowThreshold(course) => {
                format!("{}: your attendance is below the required threshold", course)
            }
            Message::RecentAttendanceHeader => "Recent Attendance".to_string(),
            Message::MarkCounts(present, late, absent) => {
                format!("Present: {}  Late: {}  Absent: {}", present, late, absent)
            }

            // === ROUTINE MESSAGES ===
            Message::RoutineHeader(week) => format!("Class Routine: {}", week),
            Message::NoClassesScheduled => "No classes scheduled".to_string(),
        };
        write!(f, "{}", s)
    }
}
