use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Cop,
    Mxn,
}

impl Currency {
    pub fn all() -> &'static [Self] {
        &[Self::Usd, Self::Eur, Self::Cop, Self::Mxn]
    }

    /// Inverse of the position in [`Currency::all`], used by `<select>` handlers.
    pub fn from_index(idx: i32) -> Self {
        usize::try_from(idx)
            .ok()
            .and_then(|i| Self::all().get(i).copied())
            .unwrap_or(Self::Usd)
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Cop => "COP",
            Self::Mxn => "MXN",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eur => "€",
            Self::Usd | Self::Cop | Self::Mxn => "$",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Self::Usd => "🇺🇸",
            Self::Eur => "🇪🇺",
            Self::Cop => "🇨🇴",
            Self::Mxn => "🇲🇽",
        }
    }

    /// Pesos are shown without cents.
    pub fn decimals(self) -> usize {
        match self {
            Self::Cop | Self::Mxn => 0,
            Self::Usd | Self::Eur => 2,
        }
    }

    pub fn label(self) -> String {
        format!("{} {}", self.flag(), self.code())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Cross rates between the supported currencies. Conversions pivot through USD.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExchangeRates {
    pub usd_cop: f64,
    pub eur_cop: f64,
    pub usd_eur: f64,
    pub eur_usd: f64,
    pub usd_mxn: f64,
    pub eur_mxn: f64,
}

impl ExchangeRates {
    pub fn convert(&self, amount: f64, from: Currency, to: Currency) -> f64 {
        if from == to {
            return amount;
        }
        let usd = match from {
            Currency::Usd => amount,
            Currency::Eur => amount * self.eur_usd,
            Currency::Cop => amount / self.usd_cop,
            Currency::Mxn => amount / self.usd_mxn,
        };
        match to {
            Currency::Usd => usd,
            Currency::Eur => usd * self.usd_eur,
            Currency::Cop => usd * self.usd_cop,
            Currency::Mxn => usd * self.usd_mxn,
        }
    }
}

impl Default for ExchangeRates {
    fn default() -> Self {
        crate::config::DEFAULT_RATES
    }
}

/// `$1,234.50`, `$4,300`, `-€3.10`.
pub fn format_amount(amount: f64, currency: Currency) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, currency.symbol(), group_thousands(amount.abs(), currency.decimals()))
}

/// Like [`format_amount`] but always carries a sign: `+€12.00`, `-$5`.
pub fn format_signed(amount: f64, currency: Currency) -> String {
    let sign = if amount >= 0.0 { "+" } else { "-" };
    format!("{}{}{}", sign, currency.symbol(), group_thousands(amount.abs(), currency.decimals()))
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
