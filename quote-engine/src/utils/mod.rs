//! Utilities for the quote tool

pub mod logger;
pub mod request_file;

pub use logger::init_logger_with_file;
pub use request_file::{load_request, save_request};
