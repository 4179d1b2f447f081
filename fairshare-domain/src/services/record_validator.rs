use crate::model::{Expense, ExpenseId, MemberId, Money, Settlement, SettlementId, Split};
use fxhash::FxHashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expense {expense} has a negative amount ({amount})")]
    NegativeAmount { expense: ExpenseId, amount: Money },
    #[error("expense {expense} is split between nobody")]
    NoParticipants { expense: ExpenseId },
    #[error("item {index} of expense {expense} is not assigned to anyone")]
    UnassignedItem { expense: ExpenseId, index: usize },
    #[error("item {index} of expense {expense} lists {member} more than once")]
    DuplicateAssignee {
        expense: ExpenseId,
        index: usize,
        member: MemberId,
    },
    #[error("items of expense {expense} add up to {items_total}, expected {amount}")]
    ItemTotalMismatch {
        expense: ExpenseId,
        items_total: Money,
        amount: Money,
    },
    #[error("settlement {settlement} must have a positive amount ({amount})")]
    NonPositiveSettlement {
        settlement: SettlementId,
        amount: Money,
    },
    #[error("settlement {settlement} pays {member} to themselves")]
    SelfSettlement {
        settlement: SettlementId,
        member: MemberId,
    },
}

/// Creation-time checks for new records.
///
/// The balance calculator never calls this; it trusts whatever it is given.
pub struct RecordValidator;

impl RecordValidator {
    pub fn validate_expense(expense: &Expense) -> Result<(), ValidationError> {
        if expense.amount < Money::ZERO {
            return Err(ValidationError::NegativeAmount {
                expense: expense.id.clone(),
                amount: expense.amount,
            });
        }

        match &expense.split {
            Split::Equal { participants } | Split::Subset { participants } => {
                if participants.is_empty() {
                    return Err(ValidationError::NoParticipants {
                        expense: expense.id.clone(),
                    });
                }
            }
            Split::Itemized { items } => {
                for (index, item) in items.iter().enumerate() {
                    if item.assigned_to.is_empty() {
                        return Err(ValidationError::UnassignedItem {
                            expense: expense.id.clone(),
                            index,
                        });
                    }
                    let mut seen = FxHashSet::default();
                    for member in &item.assigned_to {
                        if !seen.insert(member) {
                            return Err(ValidationError::DuplicateAssignee {
                                expense: expense.id.clone(),
                                index,
                                member: member.clone(),
                            });
                        }
                    }
                }

                let items_total: Money = items.iter().map(|item| item.amount).sum();
                if (items_total - expense.amount).abs() > Money::ITEM_TOTAL_TOLERANCE {
                    return Err(ValidationError::ItemTotalMismatch {
                        expense: expense.id.clone(),
                        items_total,
                        amount: expense.amount,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn validate_settlement(settlement: &Settlement) -> Result<(), ValidationError> {
        if settlement.amount <= Money::ZERO {
            return Err(ValidationError::NonPositiveSettlement {
                settlement: settlement.id.clone(),
                amount: settlement.amount,
            });
        }
        if settlement.from == settlement.to {
            return Err(ValidationError::SelfSettlement {
                settlement: settlement.id.clone(),
                member: settlement.from.clone(),
            });
        }
        Ok(())
    }
}
