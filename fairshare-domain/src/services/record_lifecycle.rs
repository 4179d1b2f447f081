//! State transitions of expense and settlement records.
//!
//! Every operation returns a new record value; callers hand the result to
//! whatever owns the record store. Inputs are never mutated.

use crate::model::{
    Expense, ExpenseId, ExpenseStatus, Settlement, SettlementId, SettlementStatus, Split, Transfer,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("expense {expense} is not itemized")]
    NotItemized { expense: ExpenseId },
    #[error("expense {expense} has {len} items, no item at index {index}")]
    ItemOutOfRange {
        expense: ExpenseId,
        index: usize,
        len: usize,
    },
}

pub struct RecordLifecycle;

impl RecordLifecycle {
    /// Flips the `settled` flag of one line item.
    ///
    /// The expense moves to history once every item is settled and back to the
    /// active ledger as soon as one item is reopened.
    pub fn toggle_item(expense: &Expense, index: usize) -> Result<Expense, LifecycleError> {
        let Split::Itemized { items } = &expense.split else {
            return Err(LifecycleError::NotItemized {
                expense: expense.id.clone(),
            });
        };
        if index >= items.len() {
            return Err(LifecycleError::ItemOutOfRange {
                expense: expense.id.clone(),
                index,
                len: items.len(),
            });
        }

        let items: Vec<_> = items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let mut item = item.clone();
                if idx == index {
                    item.settled = !item.settled;
                }
                item
            })
            .collect();
        let status = if items.iter().all(|item| item.settled) {
            ExpenseStatus::Settled
        } else {
            ExpenseStatus::Active
        };

        tracing::debug!(
            expense = %expense.id,
            item_index = index,
            status = ?status,
            "Line item toggled"
        );

        Ok(Expense {
            split: Split::Itemized { items },
            status,
            ..expense.clone()
        })
    }

    pub fn mark_settled(expense: &Expense) -> Expense {
        expense.clone().with_status(ExpenseStatus::Settled)
    }

    /// Ids of every expense already moved to history.
    pub fn clearable_history(expenses: &[Expense]) -> Vec<ExpenseId> {
        expenses
            .iter()
            .filter(|expense| !expense.is_active())
            .map(|expense| expense.id.clone())
            .collect()
    }

    /// Splits expenses into the active ledger and history, keeping order.
    pub fn partition(expenses: &[Expense]) -> (Vec<&Expense>, Vec<&Expense>) {
        expenses.iter().partition(|expense| expense.is_active())
    }

    /// Turns a plan entry into a settlement awaiting the recipient's confirmation.
    pub fn request_settlement(id: impl Into<SettlementId>, transfer: &Transfer) -> Settlement {
        Settlement::pending(
            id,
            transfer.from.clone(),
            transfer.to.clone(),
            transfer.amount,
        )
    }

    pub fn confirm(settlement: &Settlement) -> Settlement {
        Settlement {
            status: SettlementStatus::Confirmed,
            ..settlement.clone()
        }
    }
}
