use crate::model::{MemberBalances, MemberId, Money, Transfer};

const CENT: Money = Money::TOLERANCE;

/// Greedy settlement planner.
///
/// Matches the largest debts against the largest credits with a two-pointer
/// sweep. The result is not guaranteed to minimize total flow, but it is
/// deterministic and never exceeds `debtors + creditors - 1` transfers.
pub struct DebtSimplifier;

impl DebtSimplifier {
    /// Builds a transfer plan that zeroes every balance outside the tolerance.
    ///
    /// Participating balances are first apportioned to whole cents so that each
    /// moves by less than a cent and their sum is their exact total rounded to
    /// cents. The sweep then runs on those cent values, so every amount is a
    /// whole number of cents and residuals never accumulate per transfer.
    pub fn simplify(&self, balances: &MemberBalances) -> Vec<Transfer> {
        let mut debtors: Vec<(&MemberId, Money)> = balances
            .iter()
            .filter(|(_, balance)| balance.is_debt())
            .map(|(member, balance)| (member, *balance))
            .collect();
        let mut creditors: Vec<(&MemberId, Money)> = balances
            .iter()
            .filter(|(_, balance)| balance.is_credit())
            .map(|(member, balance)| (member, *balance))
            .collect();

        // Stable sorts: ties keep balance-map order.
        debtors.sort_by(|(_, lhs), (_, rhs)| lhs.cmp(rhs));
        creditors.sort_by(|(_, lhs), (_, rhs)| rhs.cmp(lhs));

        let exact: Vec<Money> = debtors
            .iter()
            .chain(&creditors)
            .map(|(_, balance)| *balance)
            .collect();
        let cents = apportion_cents(&exact);
        let (debts, credits) = cents.split_at(debtors.len());
        let mut debts: Vec<Money> = debts.iter().map(|debt| -*debt).collect();
        let mut credits = credits.to_vec();

        let max_transfers = (debtors.len() + creditors.len()).saturating_sub(1);
        let mut transfers = Vec::with_capacity(max_transfers);
        let (mut debtor_idx, mut creditor_idx) = (0, 0);

        while debtor_idx < debtors.len() && creditor_idx < creditors.len() {
            let debt = &mut debts[debtor_idx];
            let credit = &mut credits[creditor_idx];
            let amount = (*debt).min(*credit);

            transfers.push(Transfer {
                from: debtors[debtor_idx].0.clone(),
                to: creditors[creditor_idx].0.clone(),
                amount,
            });

            *debt -= amount;
            *credit -= amount;

            if debt.is_zero() {
                debtor_idx += 1;
            }
            if credit.is_zero() {
                creditor_idx += 1;
            }
        }

        tracing::debug!(
            debtor_count = debtors.len(),
            creditor_count = creditors.len(),
            transfer_count = transfers.len(),
            "Settlement plan built"
        );

        transfers
    }

    /// Balances left after every transfer of `plan` is executed.
    pub fn apply(balances: &MemberBalances, plan: &[Transfer]) -> MemberBalances {
        let mut residual = balances.clone();
        for transfer in plan {
            *residual.entry(transfer.from.clone()).or_insert(Money::ZERO) += transfer.amount;
            *residual.entry(transfer.to.clone()).or_insert(Money::ZERO) -= transfer.amount;
        }
        residual
    }

    /// Every balance is within tolerance of zero.
    pub fn is_settled(balances: &MemberBalances) -> bool {
        balances.values().all(|balance| balance.is_negligible())
    }
}

/// Largest-remainder rounding of `balances` to whole cents.
///
/// Every value is floored, then the cents missing from the rounded exact total
/// go one each to the largest remainders, earlier entries first on ties. Each
/// result is within one cent of its input and keeps its sign for inputs
/// outside the tolerance.
fn apportion_cents(balances: &[Money]) -> Vec<Money> {
    let mut cents: Vec<Money> = balances.iter().map(|balance| balance.floor_cents()).collect();
    let total: Money = balances.iter().copied().sum();
    let mut shortfall = total.round_cents() - cents.iter().copied().sum::<Money>();

    let mut by_remainder: Vec<usize> = (0..balances.len()).collect();
    by_remainder.sort_by(|&lhs, &rhs| {
        (balances[rhs] - cents[rhs]).cmp(&(balances[lhs] - cents[lhs]))
    });

    for idx in by_remainder {
        if shortfall < CENT || balances[idx] == cents[idx] {
            break;
        }
        cents[idx] += CENT;
        shortfall -= CENT;
    }
    cents
}
