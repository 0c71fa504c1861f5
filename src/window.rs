use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};
use clap::ValueEnum;

// Calendar-day windows. Every bound is a local date; git receives them as
// `<since> 00:00:00` .. `<until> 23:59:59`.

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum TimePreset {
  Today,
  Yesterday,
  ThisWeek,
  LastWeek,
  ThisMonth,
  LastMonth,
}

impl TimePreset {
  /// Comma-separated preset names, for error messages.
  pub fn valid_names() -> String {
    Self::value_variants()
      .iter()
      .filter_map(|p| p.to_possible_value())
      .map(|v| v.get_name().to_string())
      .collect::<Vec<_>>()
      .join(", ")
  }

  pub fn parse(raw: &str) -> Option<Self> {
    <Self as ValueEnum>::from_str(raw.trim(), false).ok()
  }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DateWindow {
  pub since: NaiveDate,
  pub until: NaiveDate,
}

pub fn monday_of(day: NaiveDate) -> NaiveDate {
  day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
  day.with_day(1).unwrap_or(day)
}

/// Default window when no dates are given: this week's Monday through today.
pub fn default_window(now: DateTime<Local>) -> DateWindow {
  let today = now.date_naive();
  DateWindow { since: monday_of(today), until: today }
}

pub fn preset_window(preset: TimePreset, now: DateTime<Local>) -> DateWindow {
  let today = now.date_naive();
  match preset {
    TimePreset::Today => DateWindow { since: today, until: today },
    TimePreset::Yesterday => {
      let y = today - Duration::days(1);
      DateWindow { since: y, until: y }
    }
    TimePreset::ThisWeek => DateWindow { since: monday_of(today), until: today },
    TimePreset::LastWeek => {
      let start = monday_of(today) - Duration::days(7);
      DateWindow { since: start, until: start + Duration::days(6) }
    }
    TimePreset::ThisMonth => DateWindow { since: first_of_month(today), until: today },
    TimePreset::LastMonth => {
      let this_first = first_of_month(today);
      let last_day = this_first - Duration::days(1);
      DateWindow { since: first_of_month(last_day), until: last_day }
    }
  }
}

/// Parse a `--now-override` string into a local DateTime.
/// Accepts RFC3339 (e.g. 2025-08-15T12:00:00Z) or a naive local timestamp
/// formatted as `%Y-%m-%dT%H:%M:%S`.
pub fn parse_now_override(s: Option<&str>) -> Option<DateTime<Local>> {
  s.and_then(|raw| {
    chrono::DateTime::parse_from_rfc3339(raw)
      .ok()
      .map(|dt| dt.with_timezone(&Local))
      .or_else(|| {
        chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
          .ok()
          .and_then(|ndt| ndt.and_local_timezone(Local).single())
      })
  })
}
