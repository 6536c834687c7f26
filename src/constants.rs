//! Application constants and configuration

pub const APP_NAME: &str = "PocketTrack";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Records file, kept next to settings.json in the app data directory
pub const DATA_FILE_NAME: &str = "money_data.json";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
/// Overrides the records file location when set
pub const DATA_FILE_ENV: &str = "POCKET_TRACK_DATA";

/// Timestamp format stored on every record (local time)
pub const RECORD_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const MONTH_FORMAT: &str = "%Y-%m";

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Stationery",
    "Snacks",
    "Transport",
    "Entertainment",
    "Shopping",
    "Other",
];
pub const INCOME_CATEGORIES: &[&str] = &[
    "Red Packet",
    "Reward",
    "Allowance",
    "Part-time",
    "Interest",
    "Other",
];

/// Number of most recent days shown on the trend charts
pub const TREND_DAYS: usize = 7;

/// Fraction of the monthly budget at which the sidebar turns amber
pub const BUDGET_WARN_RATIO: f64 = 0.8;

pub const CURRENCY: &str = "¥";
