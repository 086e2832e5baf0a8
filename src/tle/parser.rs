//! TLE parsing utilities

use chrono::{DateTime, Utc};

use crate::tle::types::TleSet;

/// Parse the TLE epoch field (line 1, columns 19-32, YYDDD.DDDDDDDD) to UTC.
pub fn parse_tle_epoch_to_utc(line1: &str) -> Option<DateTime<Utc>> {
    let field = line1.get(18..32)?.trim();
    let (yyddd, frac) = match field.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (field, "0"),
    };
    if yyddd.len() < 3 {
        return None;
    }
    let (yy_str, ddd_str) = yyddd.split_at(yyddd.len() - 3);
    let yy: i32 = yy_str.parse().ok()?;
    let ddd: u32 = ddd_str.parse().ok()?;
    // Two-digit year pivot per the TLE convention: 57-99 -> 1900s.
    let year = if yy >= 57 { 1900 + yy } else { 2000 + yy };
    let date = chrono::NaiveDate::from_yo_opt(year, ddd)?;
    let day_fraction: f64 = format!("0.{}", frac).parse().ok()?;
    let nanos = (day_fraction * 86_400.0 * 1.0e9).round() as i64;
    let naive = date.and_hms_opt(0, 0, 0)? + chrono::Duration::nanoseconds(nanos);
    Some(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

/// Split a plaintext feed into triplets, stopping at `cap` sets.
///
/// The feed repeats groups of three lines (name, line 1, line 2). A group
/// whose line pair is missing or malformed is skipped and consumption
/// continues with the next group; excess entries past the cap are ignored,
/// not queued.
pub fn parse_feed(body: &str, cap: usize) -> Vec<TleSet> {
    let lines: Vec<&str> = body
        .lines()
        .map(|raw| raw.trim_matches(|c| c == '\u{feff}' || c == '\r' || c == ' '))
        .filter(|line| !line.is_empty())
        .collect();

    let mut sets = Vec::new();
    let mut i = 0;
    while i < lines.len() && sets.len() < cap {
        let name = lines[i];
        let line1 = lines.get(i + 1).copied();
        let line2 = lines.get(i + 2).copied();
        if let (Some(line1), Some(line2)) = (line1, line2) {
            if looks_like_pair(line1, line2) {
                sets.push(TleSet {
                    name: name.to_string(),
                    line1: line1.to_string(),
                    line2: line2.to_string(),
                });
            }
        }
        i += 3;
    }
    sets
}

/// Shape check only; full validation happens when the registry builds the
/// propagation model.
fn looks_like_pair(line1: &str, line2: &str) -> bool {
    line1.starts_with('1') && line2.starts_with('2') && line1.len() >= 32 && line2.len() >= 32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tle::mock_data::{ISS_LINE1, ISS_LINE2};

    fn feed_of(count: usize) -> String {
        let mut body = String::new();
        for i in 0..count {
            body.push_str(&format!("SAT-{}\n{}\n{}\n", i, ISS_LINE1, ISS_LINE2));
        }
        body
    }

    #[test]
    fn parses_the_iss_epoch() {
        let epoch = parse_tle_epoch_to_utc(ISS_LINE1).expect("epoch parses");
        // 24226.56250000 -> 2024, day 226, 13:30 UTC.
        assert_eq!(epoch.format("%Y-%m-%d %H:%M").to_string(), "2024-08-13 13:30");
    }

    #[test]
    fn epoch_pivot_covers_last_century() {
        let line1 = "1 00005U 58002B   00179.78495062  .00000023  00000-3  28098-4 0  4753";
        let epoch = parse_tle_epoch_to_utc(line1).expect("epoch parses");
        assert_eq!(epoch.format("%Y").to_string(), "2000");

        let line1_1900s = "1 00005U 58002B   58179.78495062  .00000023  00000-3  28098-4 0  4753";
        let epoch = parse_tle_epoch_to_utc(line1_1900s).expect("epoch parses");
        assert_eq!(epoch.format("%Y").to_string(), "1958");
    }

    #[test]
    fn rejects_short_lines() {
        assert!(parse_tle_epoch_to_utc("too short").is_none());
    }

    #[test]
    fn splits_triplets_in_feed_order() {
        let sets = parse_feed(&feed_of(3), 50);
        assert_eq!(sets.len(), 3);
        let names: Vec<&str> = sets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["SAT-0", "SAT-1", "SAT-2"]);
        assert_eq!(sets[0].line1, ISS_LINE1);
    }

    #[test]
    fn cap_truncates_a_longer_feed() {
        let sets = parse_feed(&feed_of(10), 4);
        assert_eq!(sets.len(), 4);
        assert_eq!(sets.last().unwrap().name, "SAT-3");
    }

    #[test]
    fn malformed_middle_triplet_is_skipped() {
        let mut body = String::new();
        body.push_str(&format!("GOOD-0\n{}\n{}\n", ISS_LINE1, ISS_LINE2));
        body.push_str("BROKEN\n1 not-a-line\n2 short\n");
        body.push_str(&format!("GOOD-1\n{}\n{}\n", ISS_LINE1, ISS_LINE2));
        let sets = parse_feed(&body, 50);
        let names: Vec<&str> = sets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["GOOD-0", "GOOD-1"]);
    }

    #[test]
    fn truncated_trailing_group_is_dropped() {
        let mut body = feed_of(2);
        body.push_str("DANGLING NAME\n");
        body.push_str(ISS_LINE1);
        body.push('\n');
        let sets = parse_feed(&body, 50);
        assert_eq!(sets.len(), 2);
    }

    #[test]
    fn tolerates_bom_and_crlf() {
        let body = format!("\u{feff}SAT-0\r\n{}\r\n{}\r\n", ISS_LINE1, ISS_LINE2);
        let sets = parse_feed(&body, 50);
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].name, "SAT-0");
    }
}
