//! Number formatting helpers for the report

/// Marker rendered in place of any value the backend could not compute
pub const NOT_AVAILABLE: &str = "N/A";

/// Sign of a moving-average distance; `None` means indeterminate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

/// Rendered distance from a moving average
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffDisplay {
    pub diff: String,
    pub pct: String,
    pub polarity: Option<Polarity>,
}

/// Fixed-point text with `decimals` fraction digits, ties rounded away from
/// zero. A negative input keeps its `-` even when it rounds to zero.
pub fn fixed(value: f64, decimals: u8) -> String {
    let factor = f64::from(10u32.pow(u32::from(decimals)));
    let magnitude = (value.abs() * factor).round() / factor;
    let digits = format!("{magnitude:.prec$}", prec = usize::from(decimals));
    if value < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Price with a `$` prefix and exactly two decimals; thousands grouped from 1000 up.
pub fn fmt_price(value: f64) -> String {
    if value >= 1000.0 {
        format!("${}", group_thousands(&fixed(value, 2)))
    } else {
        format!("${}", fixed(value, 2))
    }
}

/// Volume as `x.xxB`, `x.xxM`, or a plain grouped number below one million.
pub fn fmt_volume(value: f64) -> String {
    if value >= 1e9 {
        format!("{}B", fixed(value / 1e9, 2))
    } else if value >= 1e6 {
        format!("{}M", fixed(value / 1e6, 2))
    } else {
        // Up to three fraction digits, trailing zeros dropped
        let text = fixed(value, 3);
        let trimmed = text.trim_end_matches('0').trim_end_matches('.');
        group_thousands(trimmed)
    }
}

/// Distance `(diff, pct)` from a moving average.
///
/// If either side is absent both render as `N/A`. Otherwise the sign of
/// `diff` decides both prefixes; zero counts as positive.
pub fn fmt_diff(diff: Option<f64>, pct: Option<f64>) -> DiffDisplay {
    let (Some(diff), Some(pct)) = (diff, pct) else {
        return DiffDisplay {
            diff: NOT_AVAILABLE.to_string(),
            pct: NOT_AVAILABLE.to_string(),
            polarity: None,
        };
    };

    let polarity = if diff >= 0.0 {
        Polarity::Positive
    } else {
        Polarity::Negative
    };
    let sign = sign_char(polarity);

    DiffDisplay {
        diff: format!("{sign}${}", fixed(diff.abs(), 2)),
        pct: format!("{sign}{}%", fixed(pct.abs(), 2)),
        polarity: Some(polarity),
    }
}

/// `Above`/`Below` label for a moving-average row
pub fn position_label(polarity: Option<Polarity>) -> &'static str {
    match polarity {
        Some(Polarity::Positive) => "Above",
        Some(Polarity::Negative) => "Below",
        None => NOT_AVAILABLE,
    }
}

/// Volume relative to the 20-day average
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeLevel {
    /// ratio >= 1.5
    Elevated,
    /// ratio <= 0.5
    Depressed,
    Normal,
}

/// Volume ratio signal shown next to the volume figures
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeSignal {
    pub ratio: f64,
    pub level: VolumeLevel,
    /// e.g. `+25% vs avg`
    pub label: String,
}

/// `ratio = volume / avg` with a zero average treated as a ratio of 1
pub fn volume_signal(volume: f64, avg_volume_20d: f64) -> VolumeSignal {
    let ratio = if avg_volume_20d > 0.0 {
        volume / avg_volume_20d
    } else {
        1.0
    };

    let level = if ratio >= 1.5 {
        VolumeLevel::Elevated
    } else if ratio <= 0.5 {
        VolumeLevel::Depressed
    } else {
        VolumeLevel::Normal
    };

    let deviation = fixed((ratio - 1.0) * 100.0, 0);
    // A tiny shortfall rounds to "-0"; it still reads as no deviation
    let deviation = if deviation == "-0" { "0".to_string() } else { deviation };
    let sign = if deviation.starts_with('-') { "" } else { "+" };

    VolumeSignal {
        ratio,
        level,
        label: format!("{sign}{deviation}% vs avg"),
    }
}

/// Colour tier of the relative-strength rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsTier {
    Strong,
    Moderate,
    Weak,
    Unrated,
}

pub fn rs_tier(rating: Option<i64>) -> RsTier {
    match rating {
        None => RsTier::Unrated,
        Some(r) if r >= 70 => RsTier::Strong,
        Some(r) if r >= 40 => RsTier::Moderate,
        Some(_) => RsTier::Weak,
    }
}

pub(crate) fn sign_char(polarity: Polarity) -> char {
    match polarity {
        Polarity::Positive => '+',
        Polarity::Negative => '-',
    }
}

/// Insert `,` separators into the integer part of a plain decimal string
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_price() {
        assert_eq!(fmt_price(189.844), "$189.84");
        assert_eq!(fmt_price(5.0), "$5.00");
        assert_eq!(fmt_price(999.99), "$999.99");
        assert_eq!(fmt_price(1000.0), "$1,000.00");
        assert_eq!(fmt_price(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn test_fmt_volume() {
        assert_eq!(fmt_volume(1_500_000_000.0), "1.50B");
        assert_eq!(fmt_volume(2_300_000.0), "2.30M");
        assert_eq!(fmt_volume(1_000_000.0), "1.00M");
        assert_eq!(fmt_volume(500.0), "500");
        assert_eq!(fmt_volume(0.0), "0");
        assert_eq!(fmt_volume(12_345.0), "12,345");
        assert_eq!(fmt_volume(999_999.0), "999,999");
        assert_eq!(fmt_volume(1_234.5), "1,234.5");
    }

    #[test]
    fn test_fmt_diff_absent() {
        let expected = DiffDisplay {
            diff: "N/A".to_string(),
            pct: "N/A".to_string(),
            polarity: None,
        };
        assert_eq!(fmt_diff(None, None), expected);
        assert_eq!(fmt_diff(Some(1.0), None), expected);
        assert_eq!(fmt_diff(None, Some(1.0)), expected);
    }

    #[test]
    fn test_fmt_diff_signed() {
        let up = fmt_diff(Some(2.5), Some(1.1));
        assert_eq!(up.diff, "+$2.50");
        assert_eq!(up.pct, "+1.10%");
        assert_eq!(up.polarity, Some(Polarity::Positive));

        let down = fmt_diff(Some(-2.16), Some(-1.13));
        assert_eq!(down.diff, "-$2.16");
        assert_eq!(down.pct, "-1.13%");
        assert_eq!(down.polarity, Some(Polarity::Negative));

        let flat = fmt_diff(Some(0.0), Some(0.0));
        assert_eq!(flat.diff, "+$0.00");
        assert_eq!(flat.polarity, Some(Polarity::Positive));
    }

    #[test]
    fn test_position_label() {
        assert_eq!(position_label(Some(Polarity::Positive)), "Above");
        assert_eq!(position_label(Some(Polarity::Negative)), "Below");
        assert_eq!(position_label(None), "N/A");
    }

    #[test]
    fn test_volume_signal_zero_average() {
        let signal = volume_signal(500.0, 0.0);
        assert!((signal.ratio - 1.0).abs() < f64::EPSILON);
        assert_eq!(signal.level, VolumeLevel::Normal);
        assert_eq!(signal.label, "+0% vs avg");
    }

    #[test]
    fn test_volume_signal_levels() {
        let high = volume_signal(3_000_000.0, 2_000_000.0);
        assert_eq!(high.level, VolumeLevel::Elevated);
        assert_eq!(high.label, "+50% vs avg");

        let low = volume_signal(1_000_000.0, 2_000_000.0);
        assert_eq!(low.level, VolumeLevel::Depressed);
        assert_eq!(low.label, "-50% vs avg");

        let normal = volume_signal(52_300_000.0, 60_120_000.0);
        assert_eq!(normal.level, VolumeLevel::Normal);
        assert_eq!(normal.label, "-13% vs avg");
    }

    #[test]
    fn test_halves_round_away_from_zero() {
        assert_eq!(fixed(2.125, 2), "2.13");
        assert_eq!(fixed(-2.125, 2), "-2.13");
        assert_eq!(fixed(12.5, 0), "13");
        assert_eq!(fixed(-12.5, 0), "-13");
        assert_eq!(fixed(0.0625, 3), "0.063");
        assert_eq!(fixed(-0.001, 2), "-0.00");

        assert_eq!(fmt_price(2.125), "$2.13");
        assert_eq!(fmt_price(1_000.125), "$1,000.13");
        assert_eq!(fmt_volume(2_125_000.0), "2.13M");
        assert_eq!(fmt_volume(1_000.0625), "1,000.063");

        let eighth = fmt_diff(Some(0.125), Some(0.625));
        assert_eq!(eighth.diff, "+$0.13");
        assert_eq!(eighth.pct, "+0.63%");

        assert_eq!(volume_signal(1125.0, 1000.0).label, "+13% vs avg");
        assert_eq!(volume_signal(875.0, 1000.0).label, "-13% vs avg");
    }

    #[test]
    fn test_volume_signal_tiny_negative_deviation_is_zero() {
        let signal = volume_signal(999.0, 1000.0);
        assert_eq!(signal.label, "+0% vs avg");
    }

    #[test]
    fn test_rs_tier() {
        assert_eq!(rs_tier(None), RsTier::Unrated);
        assert_eq!(rs_tier(Some(99)), RsTier::Strong);
        assert_eq!(rs_tier(Some(70)), RsTier::Strong);
        assert_eq!(rs_tier(Some(69)), RsTier::Moderate);
        assert_eq!(rs_tier(Some(40)), RsTier::Moderate);
        assert_eq!(rs_tier(Some(39)), RsTier::Weak);
        assert_eq!(rs_tier(Some(0)), RsTier::Weak);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456.78"), "123,456.78");
        assert_eq!(group_thousands("-1234567"), "-1,234,567");
    }
}
