//! Human-readable duration formatting
//!
//! Produces the same text as Go's `time.Duration.String()`:
//!
//! - `0s` for zero
//! - sub-second values use the largest fitting unit: `750ns`, `1.5µs`, `250ms`
//! - everything else is `[<h>h][<m>m]<s>[.<frac>]s`, minutes shown
//!   whenever hours are: `1h0m0s`, `2m3.5s`, `45s`
//! - negative values carry a leading `-`

use chrono::TimeDelta;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Formats a duration the way Go prints `time.Duration`.
///
/// Durations too large for nanosecond precision (about 292 years) are
/// clamped.
pub fn format_duration(delta: TimeDelta) -> String {
    let nanos = delta
        .num_nanoseconds()
        .unwrap_or(if delta < TimeDelta::zero() { i64::MIN } else { i64::MAX });
    format_nanos(nanos)
}

fn format_nanos(nanos: i64) -> String {
    if nanos == 0 {
        return "0s".to_string();
    }

    let sign = if nanos < 0 { "-" } else { "" };
    let u = nanos.unsigned_abs();

    if u < NANOS_PER_SEC {
        let (divisor, unit) = if u < NANOS_PER_MICRO {
            (1, "ns")
        } else if u < NANOS_PER_MILLI {
            (NANOS_PER_MICRO, "µs")
        } else {
            (NANOS_PER_MILLI, "ms")
        };
        return format!("{}{}{}", sign, decimal(u, divisor), unit);
    }

    let total_secs = u / NANOS_PER_SEC;
    let frac = u % NANOS_PER_SEC;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    let mut out = String::from(sign);
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    out.push_str(&decimal(seconds * NANOS_PER_SEC + frac, NANOS_PER_SEC));
    out.push('s');
    out
}

/// Renders `value / divisor` with trailing fractional zeros trimmed
fn decimal(value: u64, divisor: u64) -> String {
    let whole = value / divisor;
    let rem = value % divisor;
    if rem == 0 {
        return whole.to_string();
    }
    let width = divisor.ilog10() as usize;
    let frac = format!("{:0width$}", rem, width = width);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: i64) -> TimeDelta {
        TimeDelta::milliseconds(v)
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_duration(TimeDelta::zero()), "0s");
    }

    #[test]
    fn test_whole_units() {
        assert_eq!(format_duration(TimeDelta::seconds(45)), "45s");
        assert_eq!(format_duration(TimeDelta::seconds(61)), "1m1s");
        assert_eq!(format_duration(TimeDelta::hours(1)), "1h0m0s");
        assert_eq!(
            format_duration(TimeDelta::seconds(3 * 3600 + 2 * 60 + 1)),
            "3h2m1s"
        );
        assert_eq!(format_duration(TimeDelta::hours(49)), "49h0m0s");
    }

    #[test]
    fn test_fractional_seconds() {
        assert_eq!(format_duration(ms(1500)), "1.5s");
        assert_eq!(format_duration(ms(123_456)), "2m3.456s");
        assert_eq!(format_duration(ms(3_600_001)), "1h0m0.001s");
    }

    #[test]
    fn test_sub_second_units() {
        assert_eq!(format_duration(ms(250)), "250ms");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.5ms");
        assert_eq!(format_duration(TimeDelta::microseconds(7)), "7µs");
        assert_eq!(format_duration(TimeDelta::nanoseconds(1500)), "1.5µs");
        assert_eq!(format_duration(TimeDelta::nanoseconds(750)), "750ns");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_duration(ms(-1500)), "-1.5s");
        assert_eq!(format_duration(TimeDelta::hours(-2)), "-2h0m0s");
    }
}
