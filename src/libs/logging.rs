use crate::libs::messages::macros::is_debug_mode;
use std::env;
use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber when debug mode is on. Outside debug mode the
/// message macros print directly, so no subscriber is needed.
///
/// `RUST_LOG` wins when set; otherwise `CAMPUS_DEBUG` selects the level
/// (any non-level value means `debug`).
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = match env::var("RUST_LOG") {
        Ok(rust_log) => EnvFilter::new(rust_log),
        Err(_) => EnvFilter::new(debug_level(env::var("CAMPUS_DEBUG").ok().as_deref())),
    };

    // A subscriber may already be installed (tests); that is not an error here.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

fn debug_level(value: Option<&str>) -> &'static str {
    match value.map(|v| v.trim().to_lowercase()).as_deref() {
        Some("error") => "error",
        Some("warn") => "warn",
        Some("info") => "info",
        Some("trace") => "trace",
        _ => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_from_flag() {
        assert_eq!(debug_level(Some("1")), "debug");
        assert_eq!(debug_level(Some("TRACE")), "trace");
        assert_eq!(debug_level(None), "debug");
    }
}
