use crate::{
    currency::CurrencyFormat,
    text_table::{Alignment, TextTableBuilder},
};
use fairshare_application::{
    GroupSnapshot, LedgerProcessor, LedgerResult, MemberDirectory, MemberPosition, PersonBalance,
};
use fairshare_domain::{Expense, MemberId, RecordLifecycle, Transfer, ValidationError};
use fairshare_i18n as i18n;
use std::{borrow::Cow, fmt::Write};

pub struct LedgerPresenter;

pub struct LedgerView {
    pub total_spent: String,
    pub balance_table: String,
    /// `None` once every balance is within tolerance.
    pub transfer_table: Option<String>,
}

impl LedgerView {
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(&mut text, "{}: {}", i18n::TOTAL_SPENT, self.total_spent);
        let _ = writeln!(&mut text, "\n{}\n{}", i18n::BALANCES, self.balance_table);
        match &self.transfer_table {
            Some(table) => {
                let _ = write!(&mut text, "\n{}\n{table}", i18n::SETTLEMENT_PLAN);
            }
            None => {
                let _ = write!(&mut text, "\n{}", i18n::ALL_SETTLED);
            }
        }
        text
    }
}

/// What a single member sees: their standing, what they should pay, and
/// payments waiting for their confirmation.
pub struct ViewerView {
    pub position: String,
    pub payments: Option<String>,
    pub inbox: Vec<String>,
}

impl ViewerView {
    pub fn to_text(&self) -> String {
        let mut text = self.position.clone();
        if let Some(payments) = &self.payments {
            let _ = write!(&mut text, "\n\n{payments}");
        }
        if !self.inbox.is_empty() {
            let _ = write!(&mut text, "\n\n{}", i18n::PENDING_CONFIRMATIONS);
            for line in &self.inbox {
                let _ = write!(&mut text, "\n- {line}");
            }
        }
        text
    }
}

impl LedgerPresenter {
    pub fn render(result: &LedgerResult, format: &CurrencyFormat) -> LedgerView {
        Self::render_with_members(result, format, &EmptyMemberDirectory)
    }

    pub fn render_with_members(
        result: &LedgerResult,
        format: &CurrencyFormat,
        member_directory: &dyn MemberDirectory,
    ) -> LedgerView {
        let balance_table = Self::build_balance_table(&result.balances, format, member_directory);
        let transfer_table = (!result.transfers.is_empty()).then(|| {
            Self::build_transfer_table(result.transfers.iter(), format, member_directory)
        });

        LedgerView {
            total_spent: format.amount(result.active_total),
            balance_table,
            transfer_table,
        }
    }

    pub fn render_viewer(
        result: &LedgerResult,
        snapshot: &GroupSnapshot,
        viewer: &MemberId,
        format: &CurrencyFormat,
        member_directory: &dyn MemberDirectory,
    ) -> ViewerView {
        let position = match LedgerProcessor::position_of(result, viewer) {
            MemberPosition::Owes(amount) => i18n::you_owe(format.amount(amount)).to_string(),
            MemberPosition::IsOwed(amount) => i18n::you_are_owed(format.amount(amount)).to_string(),
            MemberPosition::Settled => i18n::you_are_settled::<String>().to_string(),
        };

        let outgoing = LedgerProcessor::plan_for_payer(result, viewer);
        let payments = (!outgoing.is_empty())
            .then(|| Self::build_transfer_table(outgoing, format, member_directory));

        let inbox = LedgerProcessor::pending_for(snapshot, viewer)
            .into_iter()
            .map(|settlement| {
                i18n::says_they_paid_you(
                    format_member_label(&settlement.from, member_directory),
                    format.amount(settlement.amount),
                )
                .to_string()
            })
            .collect();

        ViewerView {
            position,
            payments,
            inbox,
        }
    }

    /// Bullet list of record problems, `None` when there are none.
    pub fn render_issues(issues: &[ValidationError]) -> Option<String> {
        if issues.is_empty() {
            return None;
        }
        let mut text = String::from(i18n::RECORD_ISSUES);
        for issue in issues {
            let _ = write!(&mut text, "\n- {issue}");
        }
        Some(text)
    }

    /// Settled expenses under a heading, `None` while history is empty.
    pub fn render_history(
        expenses: &[Expense],
        format: &CurrencyFormat,
        member_directory: &dyn MemberDirectory,
    ) -> Option<String> {
        let (_, history) = RecordLifecycle::partition(expenses);
        if history.is_empty() {
            return None;
        }

        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::DESCRIPTION),
                Cow::Borrowed(i18n::PAID_BY),
                Cow::Borrowed(i18n::AMOUNT),
            ]);
        for expense in history {
            builder = builder.row([
                Cow::Borrowed(expense.description.as_str()),
                format_member_label(&expense.payer, member_directory),
                Cow::Owned(format.amount(expense.amount)),
            ]);
        }

        Some(format!("{}\n{}", i18n::HISTORY, builder.build()))
    }

    pub fn build_balance_table(
        person_balances: &[PersonBalance],
        format: &CurrencyFormat,
        member_directory: &dyn MemberDirectory,
    ) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed(i18n::MEMBER), Cow::Borrowed(i18n::BALANCE)]);

        for person in person_balances {
            builder = builder.row([
                format_member_label(&person.id, member_directory),
                Cow::Owned(format.signed(person.balance)),
            ]);
        }

        builder.build()
    }

    pub fn build_transfer_table<'t>(
        transfers: impl IntoIterator<Item = &'t Transfer>,
        format: &CurrencyFormat,
        member_directory: &dyn MemberDirectory,
    ) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::FROM),
                Cow::Borrowed(i18n::TO),
                Cow::Borrowed(i18n::AMOUNT),
            ]);

        for transfer in transfers {
            builder = builder.row([
                format_member_label(&transfer.from, member_directory),
                format_member_label(&transfer.to, member_directory),
                Cow::Owned(format.amount(transfer.amount)),
            ]);
        }

        builder.build()
    }
}

struct EmptyMemberDirectory;

impl MemberDirectory for EmptyMemberDirectory {
    fn display_name(&self, _member_id: &MemberId) -> Option<&str> {
        None
    }
}

fn format_member_label<'a>(
    member_id: &MemberId,
    member_directory: &'a dyn MemberDirectory,
) -> Cow<'a, str> {
    match member_directory.display_name(member_id) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(i18n::unknown_member(member_id.as_str())),
    }
}
