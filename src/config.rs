use crate::currency::ExchangeRates;

/// Local-storage key holding the saved profit history.
pub const STORAGE_KEY: &str = "surebet-profit-history";

/// Stake used when the investment field is empty or not a positive number.
pub const DEFAULT_STAKE: f64 = 100.0;

/// Pre-filled investment field.
pub const DEFAULT_INVESTMENT_INPUT: &str = "100";

/// How long the save button stays in its "saved" state.
pub const SAVED_FLASH_MS: u32 = 2_000;

const DEFAULT_RATES_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

/// Exchange-rate endpoint, overridable at build time with `SUREBET_RATES_URL`.
pub fn rates_url() -> &'static str {
    option_env!("SUREBET_RATES_URL").unwrap_or(DEFAULT_RATES_URL)
}

/// Rates shown until (or unless) the live fetch succeeds.
pub const DEFAULT_RATES: ExchangeRates = ExchangeRates {
    usd_cop: 4300.0,
    eur_cop: 4600.0,
    usd_eur: 0.93,
    eur_usd: 1.08,
    usd_mxn: 17.5,
    eur_mxn: 18.8,
};
