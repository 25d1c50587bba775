//! Application constants and configuration

pub const APP_NAME: &str = "Reel Planner";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Overrides the configured base URL for one session
pub const API_URL_ENV: &str = "REEL_PLANNER_API_URL";

// Backend routes, relative to the base URL
pub const GENERATE_PATH: &[&str] = &["api", "generate-ideas"];
pub const SAVE_PATH: &[&str] = &["api", "save-idea"];
pub const SAVED_LIST_PATH: &[&str] = &["api", "get-saved-ideas"];
pub const DELETE_PATH: &[&str] = &["api", "delete-idea"];
pub const HEALTH_PATH: &[&str] = &["health"];

// User-facing messages
pub const MSG_EMPTY_NICHE: &str = "Please enter a niche";
pub const MSG_GENERATE_FAILED: &str = "Failed to fetch ideas";
pub const MSG_SAVED_LIST_FAILED: &str = "Failed to fetch saved ideas";
pub const MSG_SAVE_FAILED: &str = "Failed to save idea";
pub const MSG_DELETE_FAILED: &str = "Failed to delete idea";
pub const MSG_SAVED: &str = "Idea saved!";
pub const MSG_SAVE_ERROR: &str = "Error saving idea";
pub const MSG_DELETED: &str = "Idea deleted successfully";
pub const MSG_CONFIRM_DELETE: &str = "Are you sure you want to delete this idea?";
