//! Shared types and pure logic for Noteify: wire contracts, prompt
//! construction, completion-response normalization, and CSV export.

pub mod entry;
pub mod error;
pub mod export;
pub mod prompt;
pub mod summary;
