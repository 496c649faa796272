pub mod date;
pub mod formatting;
pub mod ids;
pub mod table;
pub mod time;

pub use formatting::{short_id, truncate};
pub use ids::resolve_by_prefix;
pub use time::{format_fractional_hour, fractional_hour_to_clock_string, parse_clock_string};
