//! Flows module - End-to-end runs composed from core, extract and writer

pub mod unpack;
