use fairshare_domain::MemberId;
use fairshare_presentation::CurrencyFormat;
use std::env;
use tracing_subscriber::EnvFilter;

const CURRENCY_VAR: &str = "FAIRSHARE_CURRENCY";
const VIEWER_VAR: &str = "FAIRSHARE_VIEWER";

/// Runtime settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub currency: CurrencyFormat,
    /// Member whose own position and confirmation inbox are printed.
    pub viewer: Option<MemberId>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let currency = non_empty(CURRENCY_VAR)
            .map(CurrencyFormat::new)
            .unwrap_or_default();
        let viewer = non_empty(VIEWER_VAR).map(|raw| MemberId::from(raw.trim()));

        Self { currency, viewer }
    }
}

/// Initialize logging on stderr, filtered by `RUST_LOG`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
