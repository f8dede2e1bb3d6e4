//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Run data model (Document, Match, NormalizedEntry, reports)
//! - Error taxonomy
//! - Input acquisition
//! - Path normalization and containment
//! - Rendering of reports (text/jsonl/json)

pub mod error;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
