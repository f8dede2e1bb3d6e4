//! Extract module - Locates heading + fenced code block pairs
//!
//! Provides:
//! - heading: path headings vs prose headings
//! - fence: opening/closing fence lines
//! - scanner: line state machine producing matches in document order

pub mod fence;
pub mod heading;
pub mod scanner;
