use fairshare_domain::Money;

/// Renders amounts as `<symbol><value>` with two decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    symbol: String,
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn amount(&self, amount: Money) -> String {
        let rounded = amount.round_cents();
        let sign = if rounded < Money::ZERO { "-" } else { "" };
        format!("{sign}{}{:.2}", self.symbol, rounded.abs())
    }

    /// Like [`CurrencyFormat::amount`] but always carries a sign; zero reads as `+`.
    pub fn signed(&self, amount: Money) -> String {
        let rounded = amount.round_cents();
        let sign = if rounded < Money::ZERO { "-" } else { "+" };
        format!("{sign}{}{:.2}", self.symbol, rounded.abs())
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new("₹")
    }
}
