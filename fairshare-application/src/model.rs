use fairshare_domain::{Expense, MemberId, Money, Settlement};
use indexmap::IndexSet;

/// Records of one group as delivered by a [`crate::RecordSource`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupSnapshot {
    pub roster: Vec<MemberId>,
    pub expenses: Vec<Expense>,
    pub settlements: Vec<Settlement>,
}

impl GroupSnapshot {
    /// Builds a snapshot, dropping repeated roster entries but keeping first-seen order.
    pub fn new(
        roster: impl IntoIterator<Item = MemberId>,
        expenses: Vec<Expense>,
        settlements: Vec<Settlement>,
    ) -> Self {
        let roster: IndexSet<MemberId> = roster.into_iter().collect();
        Self {
            roster: roster.into_iter().collect(),
            expenses,
            settlements,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonBalance {
    pub id: MemberId,
    pub balance: Money,
}

/// Where a single member stands against the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberPosition {
    Owes(Money),
    IsOwed(Money),
    Settled,
}

impl MemberPosition {
    pub fn from_balance(balance: Money) -> Self {
        if balance.is_debt() {
            Self::Owes(balance.abs())
        } else if balance.is_credit() {
            Self::IsOwed(balance)
        } else {
            Self::Settled
        }
    }
}
