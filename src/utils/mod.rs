//! Utility modules: developer bench log capture, numeric conversions.
pub mod devlog;
pub mod num;
