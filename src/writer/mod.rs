//! Writer module - Filesystem side effects and progress reporting

pub mod materialize;
pub mod progress;
