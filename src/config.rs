//! Build-time Configuration
//!
//! The owner id and endpoint are baked in at compile time; a CSR bundle has
//! no process environment to read at runtime.

/// Base URL of the remote task store.
pub fn api_base() -> &'static str {
    option_env!("TODO_API_BASE").unwrap_or("https://jsonplaceholder.typicode.com")
}

/// Owner of the task list. Zero means unconfigured; the app then shows a
/// setup hint instead of loading anything.
pub fn user_id() -> u32 {
    match option_env!("TODO_USER_ID") {
        Some(raw) => raw.parse().unwrap_or(0),
        None => 0,
    }
}
