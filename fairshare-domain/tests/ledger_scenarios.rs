use fairshare_domain::{
    BalanceCalculator, DebtSimplifier, Expense, LineItem, MemberBalances, MemberId, Money,
    RecordLifecycle, Settlement, Transfer,
};
use rstest::{fixture, rstest};

fn id(name: &str) -> MemberId {
    MemberId::from(name)
}

fn money(raw: &str) -> Money {
    raw.parse().expect("decimal")
}

fn transfer(from: &str, to: &str, amount: &str) -> Transfer {
    Transfer {
        from: id(from),
        to: id(to),
        amount: money(amount),
    }
}

fn assert_balances(balances: &MemberBalances, expected: &[(&str, &str)]) {
    for (member, amount) in expected {
        let actual = balances.get(&id(member)).copied().unwrap_or(Money::ZERO);
        assert!(
            actual.approx_eq(money(amount)),
            "balance mismatch for {member}: {actual} != {amount}"
        );
    }
}

#[fixture]
fn roster() -> Vec<MemberId> {
    vec![id("A"), id("B"), id("C")]
}

#[fixture]
fn dinner() -> Expense {
    Expense::itemized(
        "dinner",
        id("A"),
        money("90"),
        [
            LineItem::new("x", money("60"), [id("A"), id("B")]),
            LineItem::new("y", money("30"), [id("C")]),
        ],
    )
}

#[rstest]
fn equal_split_paid_by_one_member(roster: Vec<MemberId>) {
    let expenses = [Expense::equal("e1", id("A"), money("300"), roster.clone())];

    let balances = BalanceCalculator.compute(&roster, &expenses, &[]);
    assert_balances(&balances, &[("A", "200"), ("B", "-100"), ("C", "-100")]);

    let plan = DebtSimplifier.simplify(&balances);
    assert_eq!(
        plan,
        vec![transfer("B", "A", "100"), transfer("C", "A", "100")]
    );
}

#[rstest]
fn itemized_split_charges_each_item_to_its_assignees(roster: Vec<MemberId>, dinner: Expense) {
    let balances = BalanceCalculator.compute(&roster, &[dinner], &[]);

    assert_balances(&balances, &[("A", "60"), ("B", "-30"), ("C", "-30")]);
}

#[rstest]
fn settled_item_leaves_the_ledger(roster: Vec<MemberId>, dinner: Expense) {
    let dinner = RecordLifecycle::toggle_item(&dinner, 1).expect("toggle item y");

    let balances = BalanceCalculator.compute(&roster, &[dinner], &[]);

    assert_balances(&balances, &[("A", "30"), ("B", "-30"), ("C", "0")]);
}

#[rstest]
fn payer_among_assignees_owes_nothing_for_own_share(roster: Vec<MemberId>) {
    let expenses = [Expense::itemized(
        "e1",
        id("A"),
        money("40"),
        [
            LineItem::new("own", money("10"), [id("A")]),
            LineItem::new("shared", money("30"), [id("A"), id("B"), id("C")]),
        ],
    )];

    let balances = BalanceCalculator.compute(&roster, &expenses, &[]);

    assert_balances(&balances, &[("A", "20"), ("B", "-10"), ("C", "-10")]);
}

#[test]
fn confirmed_settlement_reduces_outstanding_debt() {
    let roster = [id("A"), id("B"), id("C")];
    let expenses = [
        Expense::subset("e1", id("C"), money("50"), [id("A")]),
        Expense::subset("e2", id("C"), money("50"), [id("B")]),
    ];
    let settlements = [
        Settlement::confirmed("s1", id("A"), id("C"), money("20")),
        Settlement::pending("s2", id("B"), id("C"), money("50")),
    ];

    let balances = BalanceCalculator.compute(&roster, &expenses, &settlements);
    assert_balances(&balances, &[("A", "-30"), ("B", "-50"), ("C", "80")]);

    let plan = DebtSimplifier.simplify(&balances);
    assert_eq!(plan, vec![transfer("B", "C", "50"), transfer("A", "C", "30")]);
}

#[rstest]
fn fully_settled_group_has_empty_plan(roster: Vec<MemberId>) {
    let expenses = [Expense::equal("e1", id("A"), money("90"), roster.clone())];
    let settlements = [
        Settlement::confirmed("s1", id("B"), id("A"), money("30")),
        Settlement::confirmed("s2", id("C"), id("A"), money("30")),
    ];

    let balances = BalanceCalculator.compute(&roster, &expenses, &settlements);

    assert!(DebtSimplifier::is_settled(&balances));
    assert!(DebtSimplifier.simplify(&balances).is_empty());
}

#[rstest]
fn acting_on_the_plan_settles_the_group(roster: Vec<MemberId>, dinner: Expense) {
    let expenses = [
        dinner,
        Expense::subset("e2", id("B"), money("25"), [id("C")]),
    ];
    let balances = BalanceCalculator.compute(&roster, &expenses, &[]);
    let plan = DebtSimplifier.simplify(&balances);

    let settlements: Vec<Settlement> = plan
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let requested = RecordLifecycle::request_settlement(format!("s{idx}").as_str(), entry);
            RecordLifecycle::confirm(&requested)
        })
        .collect();

    let after = BalanceCalculator.compute(&roster, &expenses, &settlements);
    assert!(DebtSimplifier::is_settled(&after));
}

#[rstest]
fn recomputation_is_idempotent(roster: Vec<MemberId>, dinner: Expense) {
    let expenses = [
        dinner,
        Expense::equal("e2", id("C"), money("10"), roster.clone()),
    ];

    let first = BalanceCalculator.compute(&roster, &expenses, &[]);
    let second = BalanceCalculator.compute(&roster, &expenses, &[]);

    assert_eq!(first, second);
    assert_eq!(
        DebtSimplifier.simplify(&first),
        DebtSimplifier.simplify(&second)
    );
}

#[test]
fn half_cent_shares_settle_to_within_a_cent() {
    let roster = vec![id("A"), id("B"), id("C"), id("D")];
    let expenses = [
        Expense::subset("e1", id("A"), money("2.01"), [id("A"), id("B")]),
        Expense::subset("e2", id("A"), money("2.01"), [id("A"), id("C")]),
        Expense::subset("e3", id("A"), money("2.01"), [id("A"), id("D")]),
    ];

    let balances = BalanceCalculator.compute(&roster, &expenses, &[]);
    assert_eq!(balances[&id("A")], money("3.015"));

    let plan = DebtSimplifier.simplify(&balances);
    assert_eq!(
        plan,
        vec![
            transfer("B", "A", "1.00"),
            transfer("C", "A", "1.00"),
            transfer("D", "A", "1.01"),
        ]
    );
    let residual = DebtSimplifier::apply(&balances, &plan);
    assert!(DebtSimplifier::is_settled(&residual), "{residual:?}");
}
