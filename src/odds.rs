//! Odds notation. Everything is normalized to decimal odds before the
//! arbitrage formula sees it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OddsFormat {
    Decimal,
    American,
    Fractional,
}

impl OddsFormat {
    pub fn all() -> &'static [(Self, &'static str)] {
        &[
            (Self::Decimal, "Decimal"),
            (Self::American, "American"),
            (Self::Fractional, "Fractional"),
        ]
    }

    pub fn from_index(idx: i32) -> Self {
        match idx {
            1 => Self::American,
            2 => Self::Fractional,
            _ => Self::Decimal,
        }
    }

    pub fn placeholder(self, example: f64) -> String {
        format!("e.g. {}", self.format(example))
    }

    /// Parses `s` in this notation into decimal odds.
    pub fn parse(self, s: &str) -> Option<f64> {
        let d = match self {
            Self::Decimal => s.trim().parse::<f64>().ok(),
            Self::American => parse_american(s),
            Self::Fractional => parse_fractional(s),
        }?;
        (d.is_finite() && d > 0.0).then_some(d)
    }

    pub fn format(self, d: f64) -> String {
        match self {
            Self::Decimal => format_decimal(d),
            Self::American => format_american(d),
            Self::Fractional => format_fractional(d),
        }
    }

    /// Rewrites `s` from `from` notation into `self`, or returns it untouched
    /// when it does not parse.
    pub fn convert_input(self, from: OddsFormat, s: &str) -> String {
        match from.parse(s) {
            Some(d) if d > 1.0 => self.format(d),
            _ => s.to_string(),
        }
    }
}

fn parse_american(s: &str) -> Option<f64> {
    let s = s.trim().replace(',', "");
    let n = s.strip_prefix('+').unwrap_or(&s).parse::<i64>().ok()?;
    match n {
        n if n >= 100 => Some(1.0 + n as f64 / 100.0),
        n if n <= -100 => Some(1.0 + 100.0 / -(n as f64)),
        _ => None,
    }
}

fn parse_fractional(s: &str) -> Option<f64> {
    let (num, den) = s.trim().split_once('/')?;
    let num = num.trim().parse::<f64>().ok()?;
    let den = den.trim().parse::<f64>().ok()?;
    if den <= 0.0 || num < 0.0 {
        return None;
    }
    Some(1.0 + num / den)
}

fn format_decimal(d: f64) -> String {
    format!("{:.3}", d)
}

fn format_american(d: f64) -> String {
    if d <= 1.0 {
        return "—".into();
    }
    let b = d - 1.0;
    if d >= 2.0 {
        format!("+{}", (b * 100.0).round() as i64)
    } else {
        format!("-{}", (100.0 / b).round() as i64)
    }
}

fn format_fractional(d: f64) -> String {
    if d <= 1.0 {
        return "—".into();
    }
    let (num, den) = approx_fraction(d - 1.0, 1_000, 100);
    format!("{}/{}", num, den)
}

/// Continued-fraction approximation of `x` with denominator at most `max_den`.
fn approx_fraction(x: f64, max_den: i64, max_iter: u32) -> (i64, i64) {
    let mut x = x;
    let mut a = x.floor();
    let (mut h0, mut k0): (i64, i64) = (1, 0);
    let (mut h1, mut k1): (i64, i64) = (a as i64, 1);
    for _ in 0..max_iter {
        let frac = x - a;
        if frac.abs() < 1e-9 {
            break;
        }
        x = 1.0 / frac;
        a = x.floor();
        let h2 = h0 + (a as i64) * h1;
        let k2 = k0 + (a as i64) * k1;
        if k2 > max_den {
            break;
        }
        (h0, k0, h1, k1) = (h1, k1, h2, k2);
    }
    (h1, k1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn parses_each_notation_to_decimal() {
        assert!(close(OddsFormat::Decimal.parse(" 2.10 ").unwrap(), 2.10));
        assert!(close(OddsFormat::American.parse("+110").unwrap(), 2.10));
        assert!(close(OddsFormat::American.parse("-150").unwrap(), 1.0 + 100.0 / 150.0));
        assert!(close(OddsFormat::Fractional.parse("11/10").unwrap(), 2.10));
    }

    #[test]
    fn rejects_garbage_and_non_positive() {
        assert_eq!(OddsFormat::Decimal.parse(""), None);
        assert_eq!(OddsFormat::Decimal.parse("abc"), None);
        assert_eq!(OddsFormat::Decimal.parse("0"), None);
        assert_eq!(OddsFormat::Decimal.parse("-2"), None);
        assert_eq!(OddsFormat::Decimal.parse("NaN"), None);
        assert_eq!(OddsFormat::American.parse("50"), None);
        // Huge negative lines collapse to even money instead of overflowing.
        assert_eq!(OddsFormat::American.parse(&i64::MIN.to_string()), Some(1.0));
        assert_eq!(OddsFormat::Fractional.parse("3/0"), None);
        assert_eq!(OddsFormat::Fractional.parse("3"), None);
    }

    #[test]
    fn formats_decimal_odds() {
        assert_eq!(OddsFormat::Decimal.format(2.1), "2.100");
        assert_eq!(OddsFormat::American.format(2.1), "+110");
        assert_eq!(OddsFormat::American.format(1.5), "-200");
        assert_eq!(OddsFormat::Fractional.format(2.1), "11/10");
        assert_eq!(OddsFormat::Fractional.format(3.0), "2/1");
        assert_eq!(OddsFormat::American.format(1.0), "—");
    }

    #[test]
    fn switching_format_rewrites_valid_input_only() {
        assert_eq!(OddsFormat::American.convert_input(OddsFormat::Decimal, "2.5"), "+150");
        assert_eq!(OddsFormat::Decimal.convert_input(OddsFormat::Fractional, "6/4"), "2.500");
        assert_eq!(OddsFormat::Fractional.convert_input(OddsFormat::Decimal, "2.x"), "2.x");
        assert_eq!(OddsFormat::American.convert_input(OddsFormat::Decimal, ""), "");
    }
}
