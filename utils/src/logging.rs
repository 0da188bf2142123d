use std::fmt::Arguments;
use std::io;

use chrono::{SecondsFormat, Utc};
use log::{LevelFilter, Record};

const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Parse a `LOG_LEVEL` value. Anything unset or unrecognized means `Warn`.
pub fn log_level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}

fn format_record(out: fern::FormatCallback, message: &Arguments, record: &Record) {
    out.finish(format_args!(
        "{} {:<5} {}: {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        record.level(),
        record.target(),
        message
    ))
}

/// Route `log` output to stderr. Stdout is reserved for the adapter's JSON result.
pub fn setup_logging() -> Result<(), fern::InitError> {
    let level = log_level_from(std::env::var(LOG_LEVEL_VAR).ok().as_deref());

    fern::Dispatch::new()
        .level(level)
        .format(format_record)
        .chain(io::stderr())
        .apply()?;

    Ok(())
}
