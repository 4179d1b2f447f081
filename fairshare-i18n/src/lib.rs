#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

use std::fmt::{self, Display};

#[cfg(feature = "ja")]
pub mod strings {
    pub const MEMBER: &str = "メンバー";
    pub const BALANCE: &str = "収支";
    pub const FROM: &str = "支払人";
    pub const TO: &str = "受取人";
    pub const AMOUNT: &str = "金額";
    pub const BALANCES: &str = "残高";
    pub const SETTLEMENT_PLAN: &str = "精算プラン";
    pub const ALL_SETTLED: &str = "全員精算済みです";
    pub const PENDING_CONFIRMATIONS: &str = "確認待ちの支払い";
    pub const TOTAL_SPENT: &str = "支出合計";
    pub const RECORD_ISSUES: &str = "記録の問題";
    pub const HISTORY: &str = "履歴";
    pub const DESCRIPTION: &str = "内容";
    pub const PAID_BY: &str = "支払者";
}

#[cfg(feature = "en")]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const BALANCE: &str = "Balance";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const BALANCES: &str = "Balances";
    pub const SETTLEMENT_PLAN: &str = "Settlement plan";
    pub const ALL_SETTLED: &str = "All settled up";
    pub const PENDING_CONFIRMATIONS: &str = "Pending confirmations";
    pub const TOTAL_SPENT: &str = "Total spent";
    pub const RECORD_ISSUES: &str = "Record issues";
    pub const HISTORY: &str = "History";
    pub const DESCRIPTION: &str = "Description";
    pub const PAID_BY: &str = "Paid by";
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const BALANCE: &str = "Balance";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const BALANCES: &str = "Balances";
    pub const SETTLEMENT_PLAN: &str = "Settlement plan";
    pub const ALL_SETTLED: &str = "All settled up";
    pub const PENDING_CONFIRMATIONS: &str = "Pending confirmations";
    pub const TOTAL_SPENT: &str = "Total spent";
    pub const RECORD_ISSUES: &str = "Record issues";
    pub const HISTORY: &str = "History";
    pub const DESCRIPTION: &str = "Description";
    pub const PAID_BY: &str = "Paid by";
}

pub use strings::*;

/// Placeholder label for a member without a display name.
pub fn unknown_member(id: &str) -> String {
    let short: String = id.chars().take(4).collect();
    unknown_member_label(&short)
}

#[cfg(feature = "ja")]
fn unknown_member_label(short: &str) -> String {
    format!("ユーザー {short}")
}

#[cfg(not(feature = "ja"))]
fn unknown_member_label(short: &str) -> String {
    format!("User {short}")
}

/// A member's standing against the group, already formatted as currency.
pub enum PositionMessage<A> {
    Owes(A),
    IsOwed(A),
    Settled,
}

pub struct PaymentClaimMessage<N, A> {
    from: N,
    amount: A,
}

pub fn you_owe<A: Display>(amount: A) -> PositionMessage<A> {
    PositionMessage::Owes(amount)
}

pub fn you_are_owed<A: Display>(amount: A) -> PositionMessage<A> {
    PositionMessage::IsOwed(amount)
}

pub fn you_are_settled<A: Display>() -> PositionMessage<A> {
    PositionMessage::Settled
}

pub fn says_they_paid_you<N: Display, A: Display>(from: N, amount: A) -> PaymentClaimMessage<N, A> {
    PaymentClaimMessage { from, amount }
}

#[cfg(feature = "ja")]
impl<A: Display> Display for PositionMessage<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Owes(amount) => write!(f, "あなたは {amount} 支払う必要があります"),
            Self::IsOwed(amount) => write!(f, "あなたは {amount} 受け取る予定です"),
            Self::Settled => f.write_str("あなたは精算済みです"),
        }
    }
}

#[cfg(not(feature = "ja"))]
impl<A: Display> Display for PositionMessage<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Owes(amount) => write!(f, "You owe {amount}"),
            Self::IsOwed(amount) => write!(f, "You are owed {amount}"),
            Self::Settled => f.write_str("You are all settled up"),
        }
    }
}

#[cfg(feature = "ja")]
impl<N: Display, A: Display> Display for PaymentClaimMessage<N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} さんから {} の支払い報告があります", self.from, self.amount)
    }
}

#[cfg(not(feature = "ja"))]
impl<N: Display, A: Display> Display for PaymentClaimMessage<N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} says they paid you {}", self.from, self.amount)
    }
}

#[cfg(all(test, not(feature = "ja")))]
mod tests {
    use super::*;

    #[test]
    fn unknown_member_uses_id_prefix() {
        assert_eq!(unknown_member("u7f3a9c"), "User u7f3");
        assert_eq!(unknown_member("ab"), "User ab");
    }

    #[test]
    fn messages_render_amounts() {
        assert_eq!(you_owe("₹12.50").to_string(), "You owe ₹12.50");
        assert_eq!(
            says_they_paid_you("Bilal", "₹30.00").to_string(),
            "Bilal says they paid you ₹30.00"
        );
        assert_eq!(
            you_are_settled::<&str>().to_string(),
            "You are all settled up"
        );
    }
}
