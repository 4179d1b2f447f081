#![warn(clippy::uninlined_format_args)]

pub mod currency;
pub mod ledger_presenter;
pub mod text_table;

pub use currency::CurrencyFormat;
pub use ledger_presenter::{LedgerPresenter, LedgerView, ViewerView};
pub use text_table::{Alignment, TextTableBuilder};
