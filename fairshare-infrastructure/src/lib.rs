#![warn(clippy::uninlined_format_args)]

pub mod document;
pub mod json_source;

pub use document::{GroupDocument, parse_group_document};
pub use json_source::JsonSnapshotSource;
