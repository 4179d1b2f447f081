use fairshare_application::{GroupSnapshot, LedgerProcessor};
use fairshare_domain::{Expense, MemberId, Money, Settlement};
use fairshare_presentation::{CurrencyFormat, LedgerPresenter};
use rstest::{fixture, rstest};
use std::collections::HashMap;

fn id(name: &str) -> MemberId {
    MemberId::from(name)
}

#[fixture]
fn snapshot() -> GroupSnapshot {
    let roster = [id("a"), id("b"), id("c")];
    GroupSnapshot::new(
        roster.clone(),
        vec![Expense::equal("e1", id("a"), Money::from_i64(90), roster)],
        vec![Settlement::pending("s1", id("c"), id("a"), Money::from_i64(30))],
    )
}

#[fixture]
fn directory() -> HashMap<MemberId, String> {
    HashMap::from([
        (id("a"), "Asha".to_string()),
        (id("b"), "Bilal".to_string()),
        (id("c"), "Chen".to_string()),
    ])
}

#[rstest]
fn debtor_sees_what_to_pay(snapshot: GroupSnapshot, directory: HashMap<MemberId, String>) {
    let result = LedgerProcessor::evaluate(&snapshot);

    let view = LedgerPresenter::render_viewer(
        &result,
        &snapshot,
        &id("b"),
        &CurrencyFormat::default(),
        &directory,
    );

    assert_eq!(view.position, "You owe ₹30.00");
    let payments = view.payments.as_deref().expect("payments");
    assert!(payments.contains("Bilal"));
    assert!(payments.contains("Asha"));
    assert!(payments.contains("₹30.00"));
    assert!(view.inbox.is_empty());
}

#[rstest]
fn creditor_sees_pending_confirmations(
    snapshot: GroupSnapshot,
    directory: HashMap<MemberId, String>,
) {
    let result = LedgerProcessor::evaluate(&snapshot);

    let view = LedgerPresenter::render_viewer(
        &result,
        &snapshot,
        &id("a"),
        &CurrencyFormat::new("$"),
        &directory,
    );

    assert_eq!(view.position, "You are owed $60.00");
    assert!(view.payments.is_none());
    assert_eq!(view.inbox, vec!["Chen says they paid you $30.00".to_string()]);
    assert!(view.to_text().contains("Pending confirmations"));
}

#[rstest]
fn full_report_lists_plan(snapshot: GroupSnapshot, directory: HashMap<MemberId, String>) {
    let result = LedgerProcessor::evaluate(&snapshot);

    let text =
        LedgerPresenter::render_with_members(&result, &CurrencyFormat::default(), &directory)
            .to_text();

    assert!(text.starts_with("Total spent: ₹90.00"));
    assert!(text.contains("Settlement plan"));
    assert!(text.contains("+₹60.00"));
    assert!(!text.contains("All settled up"));
}
