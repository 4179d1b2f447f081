use crate::{
    error::SnapshotError,
    model::{GroupSnapshot, MemberPosition, PersonBalance},
    ports::RecordSource,
};
use fairshare_domain::{
    BalanceCalculator, DebtSimplifier, MemberId, Money, RecordValidator, Settlement,
    SettlementStatus, Transfer, ValidationError,
};

/// Derived view of one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerResult {
    /// Net balance per member, roster order first.
    pub balances: Vec<PersonBalance>,
    pub transfers: Vec<Transfer>,
    /// Sum of the amounts of every active expense.
    pub active_total: Money,
    pub all_settled: bool,
}

/// Recomputes ledger views from the latest snapshot of a [`RecordSource`].
///
/// Holds no state between calls; each refresh is a full recomputation.
#[derive(Clone, Copy)]
pub struct LedgerProcessor<'a> {
    source: &'a dyn RecordSource,
}

impl<'a> LedgerProcessor<'a> {
    pub fn new(source: &'a dyn RecordSource) -> Self {
        Self { source }
    }

    pub fn load(&self) -> Result<GroupSnapshot, SnapshotError> {
        self.source.snapshot()
    }

    pub fn refresh(&self) -> Result<LedgerResult, SnapshotError> {
        let snapshot = self.load()?;
        Ok(Self::evaluate(&snapshot))
    }

    pub fn evaluate(snapshot: &GroupSnapshot) -> LedgerResult {
        let balances =
            BalanceCalculator.compute(&snapshot.roster, &snapshot.expenses, &snapshot.settlements);
        let transfers = DebtSimplifier.simplify(&balances);
        let all_settled = DebtSimplifier::is_settled(&balances);
        let active_total = snapshot
            .expenses
            .iter()
            .filter(|expense| expense.is_active())
            .map(|expense| expense.amount)
            .sum();

        tracing::debug!(
            member_count = balances.len(),
            expense_count = snapshot.expenses.len(),
            settlement_count = snapshot.settlements.len(),
            transfer_count = transfers.len(),
            all_settled,
            "Ledger evaluated"
        );

        LedgerResult {
            balances: balances
                .into_iter()
                .map(|(id, balance)| PersonBalance { id, balance })
                .collect(),
            transfers,
            active_total,
            all_settled,
        }
    }

    /// Creation-time problems found in the snapshot's records.
    ///
    /// Evaluation does not depend on this; malformed records are still folded in
    /// on a best-effort basis.
    pub fn validation_issues(snapshot: &GroupSnapshot) -> Vec<ValidationError> {
        let expense_issues = snapshot
            .expenses
            .iter()
            .filter_map(|expense| RecordValidator::validate_expense(expense).err());
        let settlement_issues = snapshot
            .settlements
            .iter()
            .filter_map(|settlement| RecordValidator::validate_settlement(settlement).err());
        expense_issues.chain(settlement_issues).collect()
    }

    pub fn position_of(result: &LedgerResult, member: &MemberId) -> MemberPosition {
        result
            .balances
            .iter()
            .find(|person| &person.id == member)
            .map_or(MemberPosition::Settled, |person| {
                MemberPosition::from_balance(person.balance)
            })
    }

    /// Plan entries `member` is expected to pay.
    pub fn plan_for_payer<'r>(result: &'r LedgerResult, member: &MemberId) -> Vec<&'r Transfer> {
        result
            .transfers
            .iter()
            .filter(|transfer| &transfer.from == member)
            .collect()
    }

    /// Settlements waiting for `member` to acknowledge receipt.
    pub fn pending_for<'s>(snapshot: &'s GroupSnapshot, member: &MemberId) -> Vec<&'s Settlement> {
        snapshot
            .settlements
            .iter()
            .filter(|settlement| {
                settlement.status == SettlementStatus::Pending && &settlement.to == member
            })
            .collect()
    }
}
