//! Middleware for the mindbridge server

mod logging;

pub use logging::log_requests;
