//! Saved profits and the period totals shown on the history tab.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::DEFAULT_STAKE;
use crate::currency::{Currency, ExchangeRates};
use crate::surebet::Calculation;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    /// Profit expressed in `currency`.
    pub profit: f64,
    pub profit_percent: f64,
    pub quota1: f64,
    pub quota2: f64,
    /// Older saves wrote `null` here when the stake field was left empty.
    #[serde(default = "default_stake", deserialize_with = "stake_or_default")]
    pub investment: f64,
    pub currency: Currency,
}

fn default_stake() -> f64 {
    DEFAULT_STAKE
}

/// Same fallback the calculator applies: anything but a positive number is the default stake.
fn stake_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let stake = Option::<f64>::deserialize(deserializer)?;
    Ok(stake.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(DEFAULT_STAKE))
}

impl ProfitRecord {
    /// Snapshot of `calc`, whose amounts are in `base`, with the profit
    /// converted to `currency`.
    pub fn from_calculation(
        calc: &Calculation,
        base: Currency,
        currency: Currency,
        rates: &ExchangeRates,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: now.timestamp_millis().to_string(),
            date: now,
            profit: rates.convert(calc.profit, base, currency),
            profit_percent: calc.profit_percent,
            quota1: calc.quota1,
            quota2: calc.quota2,
            investment: calc.investment,
            currency,
        }
    }

    /// Short local date, e.g. `07 Mar, 18:45`.
    pub fn display_date<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.date.with_timezone(tz).format("%d %b, %H:%M").to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Today,
    Week,
    Month,
    Total,
}

impl Period {
    pub fn all() -> &'static [Self] {
        &[Self::Today, Self::Week, Self::Month, Self::Total]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Week => "This week",
            Self::Month => "This month",
            Self::Total => "Total",
        }
    }

    /// Whether `date` falls in this period as seen from `now`'s time zone.
    /// Weeks start on Sunday and have no upper bound.
    pub fn contains<Tz: TimeZone>(self, date: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
        let local = date.with_timezone(&now.timezone()).naive_local();
        let today = now.date_naive();
        match self {
            Self::Today => local.date() == today,
            Self::Week => {
                let sunday = today - Duration::days(i64::from(now.weekday().num_days_from_sunday()));
                local >= sunday.and_hms_opt(0, 0, 0).unwrap_or_default()
            }
            Self::Month => local.year() == today.year() && local.month() == today.month(),
            Self::Total => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeriodTotal {
    pub period: Period,
    pub count: usize,
    /// Sum of profits converted to the display currency.
    pub total: f64,
}

/// Saved records in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfitLedger {
    records: Vec<ProfitRecord>,
}

impl ProfitLedger {
    pub fn records(&self) -> &[ProfitRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends `record`, renumbering its id if another record already uses it.
    pub fn add(&mut self, mut record: ProfitRecord) {
        if self.contains_id(&record.id) {
            let base = record.id.parse::<i64>().unwrap_or_default();
            let mut n = base.wrapping_add(1);
            while self.contains_id(&n.to_string()) {
                n = n.wrapping_add(1);
            }
            record.id = n.to_string();
        }
        self.records.push(record);
    }

    pub fn remove(&mut self, id: &str) {
        self.records.retain(|r| r.id != id);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn newest_first(&self) -> impl Iterator<Item = &ProfitRecord> {
        self.records.iter().rev()
    }

    pub fn total_for<Tz: TimeZone>(
        &self,
        period: Period,
        now: &DateTime<Tz>,
        display: Currency,
        rates: &ExchangeRates,
    ) -> PeriodTotal {
        let (count, total) = self
            .records
            .iter()
            .filter(|r| period.contains(&r.date, now))
            .fold((0, 0.0), |(n, sum), r| (n + 1, sum + rates.convert(r.profit, r.currency, display)));
        PeriodTotal { period, count, total }
    }

    /// Today, this week, this month and all-time totals, in that order.
    pub fn summary<Tz: TimeZone>(&self, now: &DateTime<Tz>, display: Currency, rates: &ExchangeRates) -> Vec<PeriodTotal> {
        Period::all()
            .iter()
            .map(|&p| self.total_for(p, now, display, rates))
            .collect()
    }

    /// Builds a ledger from stored JSON values, skipping entries that do not
    /// parse as records. Returns the ledger and how many entries were skipped.
    /// Duplicate ids are renumbered the same way [`ProfitLedger::add`] does.
    pub fn from_values(values: Vec<serde_json::Value>) -> (Self, usize) {
        let mut ledger = Self::default();
        let mut skipped = 0;
        for value in values {
            match serde_json::from_value::<ProfitRecord>(value) {
                Ok(record) => ledger.add(record),
                Err(_) => skipped += 1,
            }
        }
        (ledger, skipped)
    }

    /// Parses a stored blob. Anything other than a JSON array is an error.
    pub fn decode(json: &str) -> Result<(Self, usize), serde_json::Error> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
        Ok(Self::from_values(values))
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.records)
    }

    fn contains_id(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }
}
