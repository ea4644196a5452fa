/// Every user-facing line printed by the CLI.
///
/// Text lives in [`super::display`]; call sites only pick a variant and
/// pass its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIG MESSAGES ===
    ConfigSaved,
    ConfigParseError(String), // path
    ConfigModuleAuth,
    ConfigModuleAttendance,
    ConfigModuleSession,
    PromptSelectModules,
    PromptLoginDelay,
    PromptStoreDemoAccounts,
    PromptGoodThreshold,
    PromptWarningThreshold,
    PromptSeedSampleData,
    ThresholdOrder,

    // === LOGIN / SESSION MESSAGES ===
    PromptRole,
    PromptEmail,
    PromptPassword,
    SigningIn,
    LoginSuccess(String), // role label
    InvalidEmail,
    PasswordTooShort(usize),
    PromptNavigate,
    MenuLogout,
    LoggedOut,
    PageNotFound(String), // path
    SampleDataDisabled,

    // === GENERAL MESSAGES ===
    NothingFound(String),                  // record kind
    NothingFoundForSearch(String, String), // record kind, search term
    RecordNotFound(String, String),        // record kind, id
    TransitionRefused(String, String),     // id, reason
    OperationCancelled,
    SelectAction,
    InvalidDate(String),
    PromptRetry,

    // === DASHBOARD MESSAGES ===
    DashboardHeader(String), // role label
    NavigationHeader,

    // === NOTICE MESSAGES ===
    NoticesHeader(String), // board title
    NoticePosted(String),
    PromptBoard,
    PromptSearch,
    PromptNoticeTitle,
    PromptNoticeContent,
    PromptNoticeCategory,
    PromptPinNotice,
    PromptHasAttachment,

    // === LEAVE MESSAGES ===
    LeaveHeader(String), // tab
    LeaveSubmitted,
    LeaveApproved(String), // applicant
    LeaveRejected(String), // applicant
    PromptLeaveType,
    PromptFromDate,
    PromptToDate,
    PromptLeaveReason,
    PromptAttachment,
    PromptSelectLeave,
    PromptRejectComment,

    // === MATERIAL MESSAGES ===
    MaterialsHeader(String), // type tab
    MaterialUploaded(String),
    MaterialDeleted(String),
    PromptMaterialTitle,
    PromptMaterialDescription,
    PromptMaterialType,
    PromptSubject,
    PromptMaterialFile,
    FileNotReadable(String),
    ConfirmDeleteMaterial(String),
    PromptSelectMaterial,

    // === EXAM MESSAGES ===
    ExamsHeader(String), // tab
    ExamScheduled(String),
    ExamStarted(String),
    ExamCompleted(String),
    ExamGraded(String, String), // title, grade
    PromptExamCourse,
    PromptExamTitle,
    PromptExamDate,
    PromptExamTime,
    PromptExamDuration,
    PromptExamLocation,
    PromptExamType,
    PromptExamNotes,
    PromptSelectExam,
    PromptMarks,
    PromptTotalMarks,
    AverageScore(u32),

    // === FEEDBACK MESSAGES ===
    FeedbackHeader,
    FeedbackSubmitted(String), // course
    AverageRating(String),
    PromptFeedbackCourse,
    PromptRating,
    PromptFeedbackComment,

    // === ATTENDANCE MESSAGES ===
    AttendanceHeader,
    OverallAttendance(u32, u32, u32), // attended, total, percentage
    AttendanceBelowThreshold(String),
    RecentAttendanceHeader,
    MarkCounts(usize, usize, usize), // present, late, absent

    // === ROUTINE MESSAGES ===
    RoutineHeader(String), // week label
    NoClassesScheduled,
}
