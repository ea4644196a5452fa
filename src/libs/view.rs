use super::attendance::{CourseAttendance, DailyAttendance};
use super::config::AttendanceConfig;
use super::dashboard::Stat;
use super::formatter::{format_date, format_date_range, format_relative, format_stars};
use super::role::NavItem;
use super::routine::DaySchedule;
use crate::libs::workflow::Status;
use crate::store::exams::Exam;
use crate::store::feedback::Feedback;
use crate::store::leaves::LeaveRequest;
use crate::store::materials::Material;
use crate::store::notices::Notice;
use anyhow::Result;
use chrono::{NaiveDateTime, Weekday};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn stats(stats: &[Stat]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "VALUE", ""]);
        for stat in stats {
            table.add_row(row![stat.title, stat.value, stat.description]);
        }
        table.printstd();

        Ok(())
    }

    pub fn nav(items: &[NavItem]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["PAGE", "PATH"]);
        for item in items {
            table.add_row(row![item.title, item.href]);
        }
        table.printstd();

        Ok(())
    }

    pub fn notices(notices: &[&Notice], now: &NaiveDateTime) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "CATEGORY", "POSTED", "", "CONTENT"]);
        for notice in notices {
            let mut flags = Vec::new();
            if notice.is_pinned {
                flags.push("📌");
            }
            if notice.is_new {
                flags.push("NEW");
            }
            if notice.has_attachment {
                flags.push("📎");
            }
            table.add_row(row![
                notice.id,
                notice.title,
                notice.category,
                format_relative(&notice.date, now),
                flags.join(" "),
                notice.content
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn leave_requests(requests: &[&LeaveRequest]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "APPLICANT", "TYPE", "DATES", "REASON", "STATUS", "APPLIED", "COMMENT"]);
        for request in requests {
            let reason = if request.has_attachment {
                format!("{} 📎", request.reason)
            } else {
                request.reason.clone()
            };
            table.add_row(row![
                request.id,
                request.applicant,
                request.leave_type,
                format_date_range(&request.from_date, &request.to_date),
                reason,
                request.status.label(),
                format_date(&request.applied_on),
                request.comment.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn materials(materials: &[&Material]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "TYPE", "SUBJECT", "UPLOADED", "SIZE", "DOWNLOADS"]);
        for material in materials {
            let uploaded = match &material.uploaded_by {
                Some(by) => format!("{} by {}", format_date(&material.upload_date), by),
                None => format_date(&material.upload_date),
            };
            table.add_row(row![
                material.id,
                material.title,
                material.material_type.label(),
                material.subject,
                uploaded,
                material.file_size.as_deref().unwrap_or("-"),
                material.download_count
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn exams(exams: &[&Exam]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "COURSE", "TITLE", "DATE", "TIME", "DURATION", "LOCATION", "TYPE", "STATUS", "RESULT"]);
        for exam in exams {
            let result = exam
                .result
                .as_ref()
                .map(|r| format!("{}/{} ({}%) {}", r.marks, r.total_marks, r.percentage, r.grade))
                .unwrap_or_default();
            table.add_row(row![
                exam.id,
                exam.course,
                exam.title,
                format_date(&exam.date),
                exam.time,
                exam.duration,
                exam.location,
                exam.exam_type,
                exam.status.label(),
                result
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn feedback(feedback: &[&Feedback]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "COURSE", "TEACHER", "RATING", "COMMENT", "SUBMITTED", "STATUS", "RESPONSE"]);
        for entry in feedback {
            table.add_row(row![
                entry.id,
                entry.course,
                entry.teacher,
                format!("{} {}", format_stars(entry.rating), entry.rating_label()),
                entry.comment,
                format_date(&entry.submitted_on),
                entry.status.label(),
                entry.response.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn attendance(courses: &[CourseAttendance], thresholds: &AttendanceConfig) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["COURSE", "ATTENDED", "TOTAL", "%", "STANDING"]);
        for course in courses {
            table.add_row(row![
                course.name,
                course.attended_classes,
                course.total_classes,
                course.percentage(),
                course.standing(thresholds).label()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn daily_attendance(days: &[DailyAttendance]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "DAY", "COURSE", "TIME", "STATUS"]);
        for day in days {
            for class in &day.classes {
                table.add_row(row![format_date(&day.date), day.weekday(), class.course, class.time, class.mark.label()]);
            }
        }
        table.printstd();

        Ok(())
    }

    /// Full week, free days included; `today` is marked.
    pub fn routine(days: &[DaySchedule], today: Option<Weekday>, free_day: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DAY", "SUBJECT", "TIME", "ROOM", "TEACHER"]);
        for day in days {
            let name = if Some(day.day) == today {
                format!("{} (Today)", day.name())
            } else {
                day.name().to_string()
            };
            if day.sessions.is_empty() {
                table.add_row(row![name, free_day, "", "", ""]);
                continue;
            }
            for (index, session) in day.sessions.iter().enumerate() {
                let label = if index == 0 { name.as_str() } else { "" };
                table.add_row(row![label, session.subject, session.time, session.room, session.teacher]);
            }
        }
        table.printstd();

        Ok(())
    }
}
