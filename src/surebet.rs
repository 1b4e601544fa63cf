//! Two-way arbitrage: equalize the payout of both outcomes and report what is
//! left over.

use crate::config::DEFAULT_STAKE;
use crate::odds::OddsFormat;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calculation {
    pub quota1: f64,
    pub quota2: f64,
    /// Stake actually split, after falling back to the default.
    pub investment: f64,
    /// Sum of implied probabilities; below 1 means a surebet.
    pub margin: f64,
    pub is_surebet: bool,
    pub profit_percent: f64,
    pub stake1: f64,
    pub stake2: f64,
    pub profit: f64,
    pub total_return: f64,
}

impl Calculation {
    pub fn implied1(&self) -> f64 {
        1.0 / self.quota1
    }

    pub fn implied2(&self) -> f64 {
        1.0 / self.quota2
    }
}

/// Splits `investment` across two decimal odds so both outcomes pay the same.
///
/// Returns `None` unless both odds are finite and positive. An investment
/// that is not a positive number is replaced by [`DEFAULT_STAKE`].
pub fn calculate(quota1: f64, quota2: f64, investment: f64) -> Option<Calculation> {
    if !(quota1.is_finite() && quota1 > 0.0 && quota2.is_finite() && quota2 > 0.0) {
        return None;
    }
    let investment = if investment.is_finite() && investment > 0.0 { investment } else { DEFAULT_STAKE };

    let margin = 1.0 / quota1 + 1.0 / quota2;
    let stake1 = investment / quota1 / margin;
    let stake2 = investment / quota2 / margin;
    let total_return = stake1 * quota1;

    Some(Calculation {
        quota1,
        quota2,
        investment,
        margin,
        is_surebet: margin < 1.0,
        profit_percent: (1.0 / margin - 1.0) * 100.0,
        stake1,
        stake2,
        profit: total_return - investment,
        total_return,
    })
}

/// Raw text of the calculator form.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorInput<'a> {
    pub quota1: &'a str,
    pub quota2: &'a str,
    pub investment: &'a str,
    pub format: OddsFormat,
}

impl CalculatorInput<'_> {
    pub fn quota1(&self) -> Option<f64> {
        self.format.parse(self.quota1)
    }

    pub fn quota2(&self) -> Option<f64> {
        self.format.parse(self.quota2)
    }

    /// Investment with thousands separators stripped; `NaN` when unparseable.
    pub fn investment(&self) -> f64 {
        self.investment.trim().replace(',', "").parse::<f64>().unwrap_or(f64::NAN)
    }

    pub fn calculate(&self) -> Option<Calculation> {
        calculate(self.quota1()?, self.quota2()?, self.investment())
    }
}
