use crate::model::{Expense, MemberBalances, MemberId, Money, Settlement, Split};

/// Folds expense and settlement records into per-member net balances.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Computes the net balance of every member.
    ///
    /// Positive balances are owed by the group, negative balances owe the group.
    /// Settled expenses and pending settlements are ignored. The result is a pure
    /// function of the inputs.
    pub fn compute(
        &self,
        members: &[MemberId],
        expenses: &[Expense],
        settlements: &[Settlement],
    ) -> MemberBalances {
        let mut accumulator = BalanceAccumulator::new(members);
        for expense in expenses {
            accumulator.apply_expense(expense);
        }
        for settlement in settlements {
            accumulator.apply_settlement(settlement);
        }
        accumulator.into_balances()
    }
}

pub struct BalanceAccumulator {
    balances: MemberBalances,
}

impl BalanceAccumulator {
    pub fn new(members: &[MemberId]) -> Self {
        let balances = members
            .iter()
            .cloned()
            .map(|member| (member, Money::ZERO))
            .collect();
        Self { balances }
    }

    pub fn apply_expense(&mut self, expense: &Expense) {
        if !expense.is_active() {
            return;
        }

        match &expense.split {
            Split::Itemized { items } => {
                let mut payer_credit = Money::ZERO;
                for (index, item) in items.iter().enumerate() {
                    if item.settled {
                        continue;
                    }
                    let Some(per_share) = item.amount.share(item.assigned_to.len()) else {
                        tracing::warn!(
                            expense = %expense.id,
                            item_index = index,
                            amount = %item.amount,
                            "Skipping line item without assignees"
                        );
                        continue;
                    };
                    for assignee in &item.assigned_to {
                        self.debit(assignee, per_share);
                    }
                    payer_credit += item.amount;
                }
                self.credit(&expense.payer, payer_credit);
            }
            Split::Equal { participants } | Split::Subset { participants } => {
                let Some(per_share) = expense.amount.share(participants.len()) else {
                    tracing::warn!(
                        expense = %expense.id,
                        amount = %expense.amount,
                        "Skipping split without participants"
                    );
                    return;
                };
                for participant in participants {
                    self.debit(participant, per_share);
                }
                self.credit(&expense.payer, expense.amount);
            }
        }
    }

    pub fn apply_settlement(&mut self, settlement: &Settlement) {
        if !settlement.is_confirmed() {
            return;
        }
        self.credit(&settlement.from, settlement.amount);
        self.debit(&settlement.to, settlement.amount);
    }

    pub fn into_balances(self) -> MemberBalances {
        self.balances
    }

    fn credit(&mut self, member: &MemberId, amount: Money) {
        *self.entry(member) += amount;
    }

    fn debit(&mut self, member: &MemberId, amount: Money) {
        *self.entry(member) -= amount;
    }

    fn entry(&mut self, member: &MemberId) -> &mut Money {
        if !self.balances.contains_key(member) {
            tracing::debug!(member = %member, "Member missing from roster; starting at zero");
        }
        self.balances.entry(member.clone()).or_insert(Money::ZERO)
    }
}

/// Sum of all balances. Zero within tolerance for a closed record set.
pub fn balance_total(balances: &MemberBalances) -> Money {
    balances.values().sum()
}
