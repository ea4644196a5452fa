//! Core library modules.
//!
//! ## Features
//!
//! - **Domain core**: record traits, status workflows, the filter engine
//! - **Session**: roles and routes, login, per-session repositories
//! - **Campus views**: attendance, routine, dashboard summaries
//! - **Infrastructure**: configuration, data storage, messaging, logging
//! - **Presentation**: console tables and value formatting
//!
//! ## Usage
//!
//! ```rust
//! use campus::libs::config::Config;
//! use campus::libs::role::Role;
//! use campus::libs::session::Session;
//!
//! let mut session = Session::new(Role::Hod, &Config::default());
//! assert!(session.leaves.approve("2").is_applied());
//! ```

pub mod attendance;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod data_storage;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod record;
pub mod role;
pub mod routine;
pub mod session;
pub mod view;
pub mod workflow;
