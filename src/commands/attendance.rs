use super::open_session;
use crate::{
    libs::{attendance, messages::Message, role::Role, session::Session, view::View},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let session = open_session(Role::Student)?;
    show(&session)
}

/// Per-course standing, the overall figure and the recent daily record.
pub fn show(session: &Session) -> Result<()> {
    msg_print!(Message::AttendanceHeader, true);
    if session.attendance.is_empty() {
        msg_info!(Message::NothingFound("attendance records".to_string()));
        return Ok(());
    }
    View::attendance(&session.attendance, &session.thresholds)?;

    let summary = attendance::summary(&session.attendance, &session.thresholds);
    msg_info!(Message::OverallAttendance(
        summary.attended_classes,
        summary.total_classes,
        summary.percentage
    ));
    for course in summary.at_risk {
        msg_warning!(Message::AttendanceBelowThreshold(course));
    }

    if !session.daily_attendance.is_empty() {
        msg_print!(Message::RecentAttendanceHeader, true);
        View::daily_attendance(&session.daily_attendance)?;
        let (present, late, absent) = attendance::mark_counts(&session.daily_attendance);
        msg_info!(Message::MarkCounts(present, late, absent));
    }
    Ok(())
}
