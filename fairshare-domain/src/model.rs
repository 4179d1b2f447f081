use arcstr::ArcStr;
use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

/// Opaque member identity. Equality is by value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub ArcStr);

impl MemberId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self(ArcStr::from(value))
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(pub ArcStr);

impl From<&str> for ExpenseId {
    fn from(value: &str) -> Self {
        Self(ArcStr::from(value))
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettlementId(pub ArcStr);

impl From<&str> for SettlementId {
    fn from(value: &str) -> Self {
        Self(ArcStr::from(value))
    }
}

impl fmt::Display for SettlementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decimal currency amount.
///
/// Arithmetic keeps full precision; rounding to cents only happens through
/// [`Money::round_cents`] and [`Money::floor_cents`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Zero/equality tolerance used throughout the ledger (0.01).
    pub const TOLERANCE: Self = Self(Decimal::from_parts(1, 0, 0, false, 2));

    /// Allowed gap between an itemized expense total and the sum of its items (0.1).
    pub const ITEM_TOTAL_TOLERANCE: Self = Self(Decimal::from_parts(1, 0, 0, false, 1));

    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Within [`Money::TOLERANCE`] of zero, bounds included.
    pub fn is_negligible(self) -> bool {
        self.0.abs() <= Self::TOLERANCE.0
    }

    /// Strictly below `-TOLERANCE`: the member owes the group.
    pub fn is_debt(self) -> bool {
        self.0 < -Self::TOLERANCE.0
    }

    /// Strictly above `TOLERANCE`: the group owes the member.
    pub fn is_credit(self) -> bool {
        self.0 > Self::TOLERANCE.0
    }

    /// Rounds half away from zero to two decimal places.
    pub fn round_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Rounds toward negative infinity to two decimal places.
    pub fn floor_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::ToNegativeInfinity),
        )
    }

    /// Equal share of `self` across `count` parts, `None` when `count` is zero.
    pub fn share(self, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        self.0.checked_div(Decimal::from(count)).map(Self)
    }

    pub fn approx_eq(self, other: Self) -> bool {
        (self - other).is_negligible()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Self)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Net balance per member, in roster order followed by first-seen order.
pub type MemberBalances = IndexMap<MemberId, Money>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    #[default]
    Active,
    #[serde(alias = "paid")]
    Settled,
}

/// One line of an itemized expense.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub description: String,
    pub amount: Money,
    pub assigned_to: Vec<MemberId>,
    #[serde(default, alias = "paid")]
    pub settled: bool,
}

impl LineItem {
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        assigned_to: impl IntoIterator<Item = MemberId>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            assigned_to: assigned_to.into_iter().collect(),
            settled: false,
        }
    }
}

/// How an expense is divided between members.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "splitMode", rename_all = "camelCase")]
pub enum Split {
    /// Whole roster at creation time.
    Equal {
        #[serde(alias = "splitAmong")]
        participants: Vec<MemberId>,
    },
    #[serde(alias = "select")]
    Subset {
        #[serde(alias = "splitAmong")]
        participants: Vec<MemberId>,
    },
    Itemized { items: Vec<LineItem> },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "payerId")]
    pub payer: MemberId,
    pub amount: Money,
    #[serde(flatten)]
    pub split: Split,
    #[serde(default)]
    pub status: ExpenseStatus,
}

impl Expense {
    pub fn new(id: impl Into<ExpenseId>, payer: MemberId, amount: Money, split: Split) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            payer,
            amount,
            split,
            status: ExpenseStatus::Active,
        }
    }

    pub fn equal(
        id: impl Into<ExpenseId>,
        payer: MemberId,
        amount: Money,
        participants: impl IntoIterator<Item = MemberId>,
    ) -> Self {
        let participants = participants.into_iter().collect();
        Self::new(id, payer, amount, Split::Equal { participants })
    }

    pub fn subset(
        id: impl Into<ExpenseId>,
        payer: MemberId,
        amount: Money,
        participants: impl IntoIterator<Item = MemberId>,
    ) -> Self {
        let participants = participants.into_iter().collect();
        Self::new(id, payer, amount, Split::Subset { participants })
    }

    pub fn itemized(
        id: impl Into<ExpenseId>,
        payer: MemberId,
        amount: Money,
        items: impl IntoIterator<Item = LineItem>,
    ) -> Self {
        let items = items.into_iter().collect();
        Self::new(id, payer, amount, Split::Itemized { items })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: ExpenseStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == ExpenseStatus::Active
    }

    pub fn items(&self) -> &[LineItem] {
        match &self.split {
            Split::Itemized { items } => items,
            Split::Equal { .. } | Split::Subset { .. } => &[],
        }
    }

    pub fn participants(&self) -> &[MemberId] {
        match &self.split {
            Split::Equal { participants } | Split::Subset { participants } => participants,
            Split::Itemized { .. } => &[],
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStatus {
    #[default]
    Pending,
    Confirmed,
}

/// Direct payment between two members, outside the expense pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub id: SettlementId,
    pub from: MemberId,
    pub to: MemberId,
    pub amount: Money,
    #[serde(default)]
    pub status: SettlementStatus,
}

impl Settlement {
    pub fn pending(
        id: impl Into<SettlementId>,
        from: MemberId,
        to: MemberId,
        amount: Money,
    ) -> Self {
        Self {
            id: id.into(),
            from,
            to,
            amount,
            status: SettlementStatus::Pending,
        }
    }

    pub fn confirmed(
        id: impl Into<SettlementId>,
        from: MemberId,
        to: MemberId,
        amount: Money,
    ) -> Self {
        Self {
            status: SettlementStatus::Confirmed,
            ..Self::pending(id, from, to, amount)
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == SettlementStatus::Confirmed
    }
}

/// One entry of a settlement plan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transfer {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: Money,
}
