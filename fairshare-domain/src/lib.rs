#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Expense, ExpenseId, ExpenseStatus, LineItem, MemberBalances, MemberId, Money, Settlement,
    SettlementId, SettlementStatus, Split, Transfer,
};
pub use services::{
    BalanceAccumulator, BalanceCalculator, DebtSimplifier, LifecycleError, RecordLifecycle,
    RecordValidator, ValidationError, balance_total,
};
