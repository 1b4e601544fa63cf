//! Live exchange rates. One best-effort request at startup; the built-in
//! table stays in place if anything about it goes wrong.

use std::collections::HashMap;

use gloo::net::http::Request;
use serde::Deserialize;

use crate::currency::ExchangeRates;
use crate::error::RatesError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RatesStatus {
    #[default]
    Loading,
    Online,
    Offline,
}

impl RatesStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Loading => "...",
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            Self::Loading => "muted",
            Self::Online => "success",
            Self::Offline => "danger",
        }
    }
}

/// Badge state once the startup fetch has settled.
pub fn status_for<T>(outcome: &Result<T, RatesError>) -> RatesStatus {
    match outcome {
        Ok(_) => RatesStatus::Online,
        Err(_) => RatesStatus::Offline,
    }
}

/// Body of the USD-based latest-rates endpoint. Other fields are ignored.
#[derive(Debug, Deserialize)]
struct LatestRates {
    rates: HashMap<String, f64>,
}

/// Builds the cross-rate table from quotes of 1 USD in each currency.
pub fn from_usd_quotes(quotes: &HashMap<String, f64>) -> Result<ExchangeRates, RatesError> {
    let quote = |code: &'static str| -> Result<f64, RatesError> {
        let v = *quotes.get(code).ok_or(RatesError::Missing(code))?;
        if v.is_finite() && v > 0.0 {
            Ok(v)
        } else {
            Err(RatesError::Invalid(code))
        }
    };
    let cop = quote("COP")?;
    let eur = quote("EUR")?;
    let mxn = quote("MXN")?;

    Ok(ExchangeRates {
        usd_cop: cop,
        eur_cop: cop / eur,
        usd_eur: eur,
        eur_usd: 1.0 / eur,
        usd_mxn: mxn,
        eur_mxn: mxn / eur,
    })
}

pub async fn fetch_rates(url: &str) -> Result<ExchangeRates, RatesError> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(RatesError::Status(response.status()));
    }
    let body: LatestRates = response.json().await?;
    from_usd_quotes(&body.rates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quotes(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn derives_cross_rates() {
        let r = from_usd_quotes(&quotes(&[("USD", 1.0), ("COP", 4000.0), ("EUR", 0.8), ("MXN", 20.0)])).unwrap();
        assert_eq!(r.usd_cop, 4000.0);
        assert_eq!(r.usd_eur, 0.8);
        assert_eq!(r.usd_mxn, 20.0);
        assert!((r.eur_cop - 5000.0).abs() < 1e-9);
        assert!((r.eur_usd - 1.25).abs() < 1e-12);
        assert!((r.eur_mxn - 25.0).abs() < 1e-9);
    }

    #[test]
    fn missing_or_bad_quote_is_an_error() {
        let err = from_usd_quotes(&quotes(&[("COP", 4000.0), ("EUR", 0.8)])).unwrap_err();
        assert!(matches!(err, RatesError::Missing("MXN")));

        let err = from_usd_quotes(&quotes(&[("COP", 4000.0), ("EUR", 0.0), ("MXN", 20.0)])).unwrap_err();
        assert!(matches!(err, RatesError::Invalid("EUR")));
    }

    #[test]
    fn status_settles_from_loading() {
        assert_eq!(RatesStatus::default(), RatesStatus::Loading);
        assert_eq!(status_for(&Ok(ExchangeRates::default())), RatesStatus::Online);
        assert_eq!(status_for::<ExchangeRates>(&Err(RatesError::Status(503))), RatesStatus::Offline);
        assert_eq!(status_for::<ExchangeRates>(&Err(RatesError::Missing("COP"))), RatesStatus::Offline);
        assert_eq!(RatesStatus::Offline.label(), "Offline");
        assert_eq!(RatesStatus::Offline.indicator(), "danger");
    }

    #[test]
    fn response_body_parses() {
        let body = r#"{"base":"USD","date":"2024-05-01","time_last_updated":1714521601,
            "rates":{"USD":1,"COP":3900.5,"EUR":0.935,"MXN":17.02}}"#;
        let parsed: LatestRates = serde_json::from_str(body).unwrap();
        let r = from_usd_quotes(&parsed.rates).unwrap();
        assert_eq!(r.usd_cop, 3900.5);
        assert!((r.eur_usd * r.usd_eur - 1.0).abs() < 1e-12);
    }
}
