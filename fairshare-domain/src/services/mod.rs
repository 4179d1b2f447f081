pub mod balance_calculator;
pub mod debt_simplifier;
pub mod record_lifecycle;
pub mod record_validator;

pub use balance_calculator::{BalanceAccumulator, BalanceCalculator, balance_total};
pub use debt_simplifier::DebtSimplifier;
pub use record_lifecycle::{LifecycleError, RecordLifecycle};
pub use record_validator::{RecordValidator, ValidationError};
