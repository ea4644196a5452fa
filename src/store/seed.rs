//! Sample records used to seed a fresh session for each role.

use super::exams::{Exam, ExamResult, ExamType};
use super::feedback::{Course, Feedback};
use super::leaves::LeaveRequest;
use super::materials::{Material, MaterialType};
use super::notices::{Board, Notice};
use crate::libs::attendance::{ClassMark, CourseAttendance, DailyAttendance, Mark};
use crate::libs::config::Account;
use crate::libs::dashboard::CampusFigures;
use crate::libs::role::Role;
use crate::libs::routine::{ClassSession, DaySchedule, Routine};
use crate::libs::workflow::{ExamStatus, FeedbackStatus, LeaveStatus};
use chrono::{NaiveDate, NaiveDateTime, Weekday};

/// Department every sample user belongs to.
pub const DEPARTMENT: &str = "Computer Science";

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    day(y, m, d).and_hms_opt(h, min, 0).unwrap_or_default()
}

/// Login pairs for the four demo roles, used when the config lists none.
pub fn demo_accounts() -> Vec<Account> {
    Role::ALL
        .into_iter()
        .map(|role| Account {
            role,
            email: format!("{}@demo.com", role),
            password: format!("{}123", role),
        })
        .collect()
}

/// Institution-wide head counts shown on the admin and HOD dashboards.
pub fn campus_figures() -> CampusFigures {
    CampusFigures {
        departments: 12,
        department_heads: 10,
        teachers: 148,
        students: 1254,
        department_teachers: 24,
        department_students: 450,
        department_attendance: 92,
    }
}

#[allow(clippy::too_many_arguments)]
fn leave(
    id: &str,
    applicant: &str,
    reason: &str,
    leave_type: &str,
    from: NaiveDate,
    to: NaiveDate,
    status: LeaveStatus,
    applied_on: NaiveDate,
    has_attachment: bool,
) -> LeaveRequest {
    LeaveRequest {
        id: id.into(),
        applicant: applicant.into(),
        department: DEPARTMENT.into(),
        reason: reason.into(),
        leave_type: leave_type.into(),
        from_date: from,
        to_date: to,
        status,
        applied_on,
        has_attachment,
        comment: None,
    }
}

/// Requests awaiting the department head.
pub fn department_leave_requests() -> Vec<LeaveRequest> {
    vec![
        leave(
            "1",
            "Sarah Johnson",
            "Personal leave for family event",
            "Personal",
            day(2025, 4, 25),
            day(2025, 4, 27),
            LeaveStatus::Pending,
            day(2025, 4, 20),
            false,
        ),
        leave(
            "2",
            "Michael Chen",
            "Medical appointment",
            "Medical",
            day(2025, 4, 24),
            day(2025, 4, 28),
            LeaveStatus::Pending,
            day(2025, 4, 19),
            true,
        ),
        leave(
            "3",
            "Robert Smith",
            "Attending research conference",
            "Official",
            day(2025, 5, 1),
            day(2025, 5, 3),
            LeaveStatus::Pending,
            day(2025, 4, 18),
            true,
        ),
        leave(
            "4",
            "Emily Rodriguez",
            "Sick leave",
            "Medical",
            day(2025, 4, 22),
            day(2025, 4, 23),
            LeaveStatus::Approved,
            day(2025, 4, 21),
            true,
        ),
        leave(
            "5",
            "David Wilson",
            "Family emergency",
            "Personal",
            day(2025, 4, 15),
            day(2025, 4, 17),
            LeaveStatus::Rejected,
            day(2025, 4, 14),
            false,
        ),
    ]
}

/// A student's own past applications.
pub fn student_leave_history(applicant: &str) -> Vec<LeaveRequest> {
    let mut rejected = leave(
        "2",
        applicant,
        "Medical appointment",
        "Medical",
        day(2025, 2, 22),
        day(2025, 2, 23),
        LeaveStatus::Rejected,
        day(2025, 2, 20),
        false,
    );
    rejected.comment = Some("Insufficient supporting documents".into());

    vec![
        leave(
            "1",
            applicant,
            "Family function",
            "Personal",
            day(2025, 3, 15),
            day(2025, 3, 18),
            LeaveStatus::Approved,
            day(2025, 3, 10),
            false,
        ),
        rejected,
        leave(
            "3",
            applicant,
            "Attending a technical workshop",
            "Academic",
            day(2025, 1, 25),
            day(2025, 1, 27),
            LeaveStatus::Approved,
            day(2025, 1, 20),
            false,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn notice(id: &str, title: &str, content: &str, date: NaiveDateTime, category: &str, board: Board, is_pinned: bool, has_attachment: bool) -> Notice {
    Notice {
        id: id.into(),
        title: title.into(),
        content: content.into(),
        date,
        category: category.into(),
        board,
        is_pinned,
        is_new: false,
        has_attachment,
    }
}

pub fn notices() -> Vec<Notice> {
    let mut meeting = notice(
        "1",
        "Faculty Meeting",
        "All faculty members are requested to attend the monthly department meeting on Friday, April 28th at 3:00 PM in Room 301.",
        at(2025, 4, 22, 11, 30),
        "Meeting",
        Board::Department,
        true,
        false,
    );
    meeting.is_new = true;

    vec![
        meeting,
        notice(
            "2",
            "Project Submission Deadline",
            "Final year students must submit their project proposals by May 5th. Please use the provided template.",
            at(2025, 4, 20, 9, 15),
            "Academic",
            Board::Department,
            false,
            true,
        ),
        notice(
            "3",
            "Department Library Update",
            "The department library will be closed for renovation from May 10th to May 15th. Electronic resources will remain accessible.",
            at(2025, 4, 18, 14, 45),
            "Facility",
            Board::Department,
            false,
            false,
        ),
        notice(
            "4",
            "System Maintenance",
            "The system will be undergoing maintenance on Saturday, April 26th from 2:00 AM to 5:00 AM. During this time, the system will be unavailable.",
            at(2025, 4, 23, 10, 30),
            "System",
            Board::Admin,
            true,
            false,
        ),
        notice(
            "5",
            "New Department Approval Process",
            "We've updated the department approval process. Please review the new guidelines.",
            at(2025, 4, 21, 14, 15),
            "Administration",
            Board::Admin,
            false,
            true,
        ),
        notice(
            "6",
            "Midterm Exam Schedule",
            "The midterm examination schedule has been published. Please check the details for your courses.",
            at(2025, 4, 20, 14, 45),
            "Examination",
            Board::Academic,
            true,
            true,
        ),
        notice(
            "7",
            "Workshop on AI Development",
            "The Computer Science department is organizing a workshop on AI Development on May 2nd. All interested students can register.",
            at(2025, 4, 18, 9, 30),
            "Workshop",
            Board::Academic,
            false,
            false,
        ),
        notice(
            "8",
            "Campus Wi-Fi Upgrade",
            "Campus Wi-Fi infrastructure is being upgraded next week. Expect brief outages in different buildings.",
            at(2025, 4, 17, 16, 0),
            "Facility",
            Board::Campus,
            false,
            false,
        ),
        notice(
            "9",
            "Annual Sports Day",
            "The annual sports day will be held on May 8th. All students and faculty are encouraged to participate.",
            at(2025, 4, 15, 11, 20),
            "Event",
            Board::Campus,
            false,
            true,
        ),
    ]
}

fn material(id: &str, title: &str, description: &str, material_type: MaterialType, subject: &str, upload_date: NaiveDate) -> Material {
    Material {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        material_type,
        subject: subject.into(),
        uploaded_by: None,
        upload_date,
        file_size: None,
        download_count: 0,
    }
}

/// A teacher's own uploads, with sizes and download counters.
pub fn teacher_materials() -> Vec<Material> {
    [
        ("1", "Database Normalization", "Comprehensive guide to database normalization forms", MaterialType::Document, "Database Systems", day(2025, 4, 20), "2.4 MB", 45),
        ("2", "Recursion Examples", "Examples of recursion in programming with solutions", MaterialType::Notes, "Data Structures", day(2025, 4, 19), "1.2 MB", 32),
        ("3", "SQL Joins Tutorial", "Video tutorial explaining different types of SQL joins", MaterialType::Video, "Database Systems", day(2025, 4, 18), "45 MB", 28),
        ("4", "Algorithm Analysis", "Introduction to time and space complexity analysis", MaterialType::Document, "Algorithms", day(2025, 4, 17), "3.5 MB", 56),
        ("5", "Web Development Basics", "Introduction to HTML, CSS, and JavaScript", MaterialType::Notes, "Web Development", day(2025, 4, 16), "1.8 MB", 40),
    ]
    .into_iter()
    .map(|(id, title, description, kind, subject, date, size, downloads)| Material {
        file_size: Some(size.into()),
        download_count: downloads,
        ..material(id, title, description, kind, subject, date)
    })
    .collect()
}

/// Materials visible to students, attributed to their uploaders.
pub fn student_materials() -> Vec<Material> {
    [
        ("1", "Introduction to Data Structures", MaterialType::Notes, "Dr. Sarah Johnson", day(2025, 4, 20)),
        ("2", "Algorithm Analysis Video Lecture", MaterialType::Video, "Dr. Michael Chen", day(2025, 4, 19)),
        ("3", "Programming Fundamentals PDF", MaterialType::Document, "Prof. Robert Smith", day(2025, 4, 18)),
    ]
    .into_iter()
    .map(|(id, title, kind, by, date)| Material {
        uploaded_by: Some(by.into()),
        ..material(id, title, "", kind, "Computer Science", date)
    })
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn exam(
    id: &str,
    course: &str,
    title: &str,
    date: NaiveDate,
    time: &str,
    duration: &str,
    location: &str,
    exam_type: ExamType,
    status: ExamStatus,
) -> Exam {
    Exam {
        id: id.into(),
        course: course.into(),
        title: title.into(),
        date,
        time: time.into(),
        duration: duration.into(),
        location: location.into(),
        exam_type,
        status,
        notes: None,
        result: None,
    }
}

pub fn teacher_exams() -> Vec<Exam> {
    vec![
        exam(
            "1",
            "Database Systems",
            "Midterm Examination",
            day(2025, 5, 15),
            "10:00 AM",
            "2 hours",
            "Room 301",
            ExamType::Midterm,
            ExamStatus::Scheduled,
        ),
        exam(
            "2",
            "Data Structures",
            "Final Examination",
            day(2025, 6, 20),
            "01:00 PM",
            "3 hours",
            "Examination Hall",
            ExamType::Final,
            ExamStatus::Scheduled,
        ),
        exam("3", "Algorithms", "Quiz 1", day(2025, 4, 25), "11:00 AM", "45 minutes", "Room 103", ExamType::Quiz, ExamStatus::Ongoing),
        exam(
            "4",
            "Web Development",
            "Midterm Examination",
            day(2025, 4, 10),
            "09:00 AM",
            "2 hours",
            "Lab 102",
            ExamType::Midterm,
            ExamStatus::Completed,
        ),
        exam(
            "5",
            "Operating Systems",
            "Quiz 2",
            day(2025, 4, 5),
            "10:30 AM",
            "30 minutes",
            "Room 304",
            ExamType::Quiz,
            ExamStatus::Graded,
        ),
    ]
}

/// A student's exams; past ones carry their result.
pub fn student_exams() -> Vec<Exam> {
    let graded = |exam: Exam, marks: u32| Exam {
        result: ExamResult::compute(marks, 100).ok(),
        ..exam
    };

    vec![
        exam(
            "1",
            "Database Systems",
            "Midterm Examination",
            day(2025, 5, 2),
            "10:00 AM",
            "2 hours",
            "Room 301",
            ExamType::Midterm,
            ExamStatus::Scheduled,
        ),
        exam(
            "2",
            "Data Structures",
            "Midterm Examination",
            day(2025, 5, 4),
            "01:00 PM",
            "2 hours",
            "Room 205",
            ExamType::Midterm,
            ExamStatus::Scheduled,
        ),
        graded(
            exam(
                "3",
                "Algorithms",
                "First Assessment",
                day(2025, 4, 15),
                "11:00 AM",
                "1.5 hours",
                "Room 103",
                ExamType::Quiz,
                ExamStatus::Graded,
            ),
            85,
        ),
        graded(
            exam(
                "4",
                "Web Development",
                "Practical Test",
                day(2025, 4, 10),
                "09:00 AM",
                "3 hours",
                "Lab 102",
                ExamType::Midterm,
                ExamStatus::Graded,
            ),
            78,
        ),
        graded(
            exam(
                "5",
                "Operating Systems",
                "Quiz 1",
                day(2025, 4, 5),
                "10:30 AM",
                "45 minutes",
                "Room 304",
                ExamType::Quiz,
                ExamStatus::Graded,
            ),
            92,
        ),
    ]
}

/// Courses offered on the feedback form.
pub fn courses() -> Vec<Course> {
    [
        ("1", "Database Systems", "Prof. Johnson"),
        ("2", "Data Structures", "Prof. Williams"),
        ("3", "Algorithms", "Prof. Smith"),
        ("4", "Web Development", "Prof. Davis"),
        ("5", "Operating Systems", "Prof. Brown"),
    ]
    .into_iter()
    .map(|(id, name, teacher)| Course {
        id: id.into(),
        name: name.into(),
        teacher: teacher.into(),
    })
    .collect()
}

pub fn feedback_history() -> Vec<Feedback> {
    vec![
        Feedback {
            id: "1".into(),
            course: "Web Development".into(),
            teacher: "Prof. Davis".into(),
            rating: 5,
            comment: "The course materials were excellent and the professor explained complex concepts clearly. The practical exercises were very helpful.".into(),
            submitted_on: day(2025, 3, 20),
            status: FeedbackStatus::Reviewed,
            response: Some("Thank you for your positive feedback. I'm glad you found the practical exercises helpful.".into()),
        },
        Feedback {
            id: "2".into(),
            course: "Operating Systems".into(),
            teacher: "Prof. Brown".into(),
            rating: 4,
            comment: "Good course overall, but could use more practical examples.".into(),
            submitted_on: day(2025, 3, 15),
            status: FeedbackStatus::Submitted,
            response: None,
        },
    ]
}

pub fn course_attendance() -> Vec<CourseAttendance> {
    [
        ("1", "Database Systems", 24, 22),
        ("2", "Data Structures", 22, 18),
        ("3", "Algorithms", 20, 15),
        ("4", "Web Development", 18, 16),
        ("5", "Operating Systems", 16, 11),
    ]
    .into_iter()
    .map(|(id, name, total, attended)| CourseAttendance {
        id: id.into(),
        name: name.into(),
        total_classes: total,
        attended_classes: attended,
    })
    .collect()
}

fn mark(course: &str, time: &str, mark: Mark) -> ClassMark {
    ClassMark {
        course: course.into(),
        time: time.into(),
        mark,
    }
}

/// Recent days, newest first.
pub fn daily_attendance() -> Vec<DailyAttendance> {
    vec![
        DailyAttendance {
            date: day(2025, 4, 23),
            classes: vec![
                mark("Database Systems", "10:00 - 11:30", Mark::Present),
                mark("Data Structures", "13:00 - 14:30", Mark::Present),
                mark("Algorithms", "15:00 - 16:30", Mark::Late),
            ],
        },
        DailyAttendance {
            date: day(2025, 4, 22),
            classes: vec![
                mark("Web Development", "09:00 - 10:30", Mark::Present),
                mark("Operating Systems", "11:00 - 12:30", Mark::Absent),
            ],
        },
        DailyAttendance {
            date: day(2025, 4, 21),
            classes: vec![
                mark("Database Systems", "10:00 - 11:30", Mark::Present),
                mark("Algorithms", "15:00 - 16:30", Mark::Present),
            ],
        },
    ]
}

fn class(id: &str, subject: &str, time: &str, room: &str, teacher: &str) -> ClassSession {
    ClassSession {
        id: id.into(),
        subject: subject.into(),
        time: time.into(),
        room: room.into(),
        teacher: teacher.into(),
    }
}

fn database(id: &str) -> ClassSession {
    class(id, "Database Systems", "10:00 - 11:30", "Room 301", "Prof. Johnson")
}

fn data_structures(id: &str) -> ClassSession {
    class(id, "Data Structures", "13:00 - 14:30", "Room 205", "Prof. Williams")
}

fn algorithms(id: &str) -> ClassSession {
    class(id, "Algorithms", "15:00 - 16:30", "Room 103", "Prof. Smith")
}

fn web(id: &str) -> ClassSession {
    class(id, "Web Development", "09:00 - 10:30", "Lab 102", "Prof. Davis")
}

fn operating_systems(id: &str) -> ClassSession {
    class(id, "Operating Systems", "11:00 - 12:30", "Room 304", "Prof. Brown")
}

fn db_lab() -> ClassSession {
    class("11", "Database Systems Lab", "10:00 - 13:00", "Lab 201", "Prof. Johnson")
}

fn week(days: [Vec<ClassSession>; 7]) -> Vec<DaySchedule> {
    const DAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];
    DAYS.into_iter().zip(days).map(|(day, sessions)| DaySchedule { day, sessions }).collect()
}

pub fn routine() -> Routine {
    Routine {
        current: week([
            vec![database("1"), data_structures("2"), algorithms("3")],
            vec![web("4"), operating_systems("5")],
            vec![database("6"), data_structures("7"), algorithms("8")],
            vec![web("9"), operating_systems("10")],
            vec![db_lab(), class("12", "Soft Skills Workshop", "14:00 - 16:00", "Seminar Hall", "Prof. Garcia")],
            Vec::new(),
            Vec::new(),
        ]),
        next: week([
            vec![database("1"), data_structures("2")],
            vec![web("4"), operating_systems("5")],
            vec![database("6"), algorithms("8")],
            vec![web("9")],
            vec![db_lab(), class("13", "Special Lecture: AI in Education", "14:00 - 16:00", "Auditorium", "Guest Speaker")],
            Vec::new(),
            Vec::new(),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        fn unique<'a>(ids: impl Iterator<Item = &'a str>) -> bool {
            let mut seen = HashSet::new();
            ids.into_iter().all(|id| seen.insert(id))
        }
        assert!(unique(notices().iter().map(|n| n.id.as_str())));
        assert!(unique(department_leave_requests().iter().map(|l| l.id.as_str())));
        assert!(unique(teacher_exams().iter().map(|e| e.id.as_str())));
        assert!(unique(teacher_materials().iter().map(|m| m.id.as_str())));
    }

    #[test]
    fn student_results_match_grade_scale() {
        let grades: Vec<String> = student_exams().into_iter().filter_map(|e| e.result).map(|r| r.grade).collect();
        assert_eq!(grades, vec!["A", "B+", "A+"]);
    }

    #[test]
    fn demo_accounts_cover_every_role() {
        let accounts = demo_accounts();
        assert_eq!(accounts.len(), 4);
        assert!(accounts.iter().any(|a| a.email == "hod@demo.com" && a.password == "hod123"));
    }
}
