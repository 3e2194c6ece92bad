use chrono::{DateTime, Datelike, SecondsFormat, TimeZone, Timelike, Utc};

/// Interpret an epoch-millisecond instant as a UTC timestamp.
///
/// Returns `None` for instants chrono cannot represent (around ±262,000
/// years from 1970, so never in practical usage).
pub fn from_unix_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

/// Render a timestamp as strict ISO-8601 UTC with millisecond precision
/// and a literal `Z` suffix, e.g. `2018-03-18T23:38:05.134Z`.
///
/// The layout is fixed-width, so the digits are written straight into a
/// stack buffer instead of going through a format string.
pub fn encode_timestamp(ts: DateTime<Utc>, out: &mut String) {
    let year = ts.year();
    if !(0..=9999).contains(&year) {
        // The wire format carries a four digit year. chrono can represent
        // more, let it format the oddballs.
        out.push_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true));
        return;
    }

    let mut buf = [0u8; 24];
    write_4_digits(year as u32, &mut buf[0..4]);
    buf[4] = b'-';
    write_2_digits(ts.month(), &mut buf[5..7]);
    buf[7] = b'-';
    write_2_digits(ts.day(), &mut buf[8..10]);
    buf[10] = b'T';
    write_2_digits(ts.hour(), &mut buf[11..13]);
    buf[13] = b':';
    write_2_digits(ts.minute(), &mut buf[14..16]);
    buf[16] = b':';
    write_2_digits(ts.second(), &mut buf[17..19]);
    buf[19] = b'.';
    // chrono reports leap seconds as subsec millis >= 1000
    write_3_digits(ts.timestamp_subsec_millis().min(999), &mut buf[20..23]);
    buf[23] = b'Z';

    // every byte written above is ASCII
    out.push_str(unsafe { std::str::from_utf8_unchecked(&buf) });
}

#[inline]
fn write_2_digits(value: u32, out: &mut [u8]) {
    out[0] = b'0' + (value / 10) as u8;
    out[1] = b'0' + (value % 10) as u8;
}

#[inline]
fn write_3_digits(value: u32, out: &mut [u8]) {
    out[0] = b'0' + (value / 100) as u8;
    out[1] = b'0' + (value / 10 % 10) as u8;
    out[2] = b'0' + (value % 10) as u8;
}

#[inline]
fn write_4_digits(value: u32, out: &mut [u8]) {
    out[0] = b'0' + (value / 1000) as u8;
    out[1] = b'0' + (value / 100 % 10) as u8;
    out[2] = b'0' + (value / 10 % 10) as u8;
    out[3] = b'0' + (value % 10) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(millis: i64) -> String {
        let mut out = String::new();
        encode_timestamp(from_unix_millis(millis).unwrap(), &mut out);
        out
    }

    #[test]
    fn timestamp() {
        assert_eq!(encode(1521416285134), "2018-03-18T23:38:05.134Z");
    }

    #[test]
    fn zero_padding() {
        assert_eq!(encode(0), "1970-01-01T00:00:00.000Z");
        assert_eq!(encode(1), "1970-01-01T00:00:00.001Z");
        assert_eq!(encode(1041379205007), "2003-01-01T00:00:05.007Z");
    }

    #[test]
    fn compare() {
        for millis in [0, 999, 1521416285134, 1069539255003, 1700000000001] {
            let ts = from_unix_millis(millis).unwrap();
            let mut own = String::new();
            encode_timestamp(ts, &mut own);
            let want = ts.to_rfc3339_opts(SecondsFormat::Millis, true);
            assert_eq!(own, want, "millis: {millis}");
        }
    }
}
