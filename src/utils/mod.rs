//! Utility modules for common functionality

pub mod logger;
pub mod io_utils;
