#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod ledger_processor;
pub mod model;
pub mod ports;

pub use error::SnapshotError;
pub use ledger_processor::{LedgerProcessor, LedgerResult};
pub use model::{GroupSnapshot, MemberPosition, PersonBalance};
pub use ports::{MemberDirectory, RecordSource};
