mod hash;
mod logging;
mod string_utils;
mod time;
mod versioning;

pub use hash::sha256_hex;
pub use logging::{log_level_from, setup_logging};
pub use string_utils::parse_csv_set;
pub use time::{format_timestamp, get_timestamp, Clock, FixedClock, SystemClock};
pub use versioning::{parse_format_version, version_in_range};
