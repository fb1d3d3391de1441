use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "month-view",
    version,
    about = "Month calendar with upcoming events and per-day details"
)]
pub struct Args {
    /// Month to open on, as YYYY-MM. Defaults to the current month.
    #[arg(long, value_parser = parse_month)]
    pub month: Option<NaiveDate>,

    /// Theme preset: default, dracula, gruvbox or nord.
    #[arg(long)]
    pub theme: Option<String>,

    /// Theme file. Defaults to <config dir>/month-view/theme.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log file. Defaults to <cache dir>/month-view/month-view.log.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// `YYYY-MM` to the first day of that month.
fn parse_month(s: &str) -> Result<NaiveDate, String> {
    let (year, month) = s
        .split_once('-')
        .ok_or_else(|| format!("expected YYYY-MM, got: {s}"))?;
    let year: i32 = year
        .parse()
        .map_err(|_| format!("invalid year in {s}"))?;
    let month: u32 = month
        .parse()
        .map_err(|_| format!("invalid month in {s}"))?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| format!("no such month: {s}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["month-view"]).unwrap();
        assert_eq!(args.month, None);
        assert_eq!(args.theme, None);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_month_and_verbosity() {
        let args = Args::try_parse_from(["month-view", "--month", "2025-06", "-vv"]).unwrap();
        assert_eq!(args.month, NaiveDate::from_ymd_opt(2025, 6, 1));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_rejects_bad_month() {
        assert!(Args::try_parse_from(["month-view", "--month", "2025-13"]).is_err());
        assert!(Args::try_parse_from(["month-view", "--month", "June"]).is_err());
    }
}
