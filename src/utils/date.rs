use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Resolve an optional `--date` argument, defaulting to today.
pub fn resolve_date(arg: Option<&str>) -> Option<NaiveDate> {
    match arg {
        Some(s) => parse_date(s),
        None => Some(today()),
    }
}

/// The selected date with three days on either side.
pub fn week_strip(selected: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| selected + Duration::days(i as i64 - 3))
}

pub fn short_weekday(d: &NaiveDate) -> String {
    d.format("%a").to_string()
}

pub fn month_last_day(year: i32, month: u32) -> Option<u32> {
    let first_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    first_next.pred_opt().map(|d| d.day())
}

/// Parse a period expression into an inclusive date range.
///
/// Accepted: `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and `start:end` ranges made of
/// two expressions in the same format.
pub fn parse_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();
        if start.len() != end.len() {
            return Err(format!("start and end must have the same format: {}", p));
        }
        let (d1, _) = parse_period(start)?;
        let (_, d2) = parse_period(end)?;
        return Ok((d1, d2));
    }

    let invalid = || format!("Invalid period: {}", p);

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{}-01", p), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            let last = month_last_day(d1.year(), d1.month()).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(d1.year(), d1.month(), last).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(invalid)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}
