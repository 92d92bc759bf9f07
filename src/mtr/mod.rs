//! MTR domain layer: upstream schedule client, static reference tables,
//! and human-readable formatting.

pub mod client;
pub mod format;
pub mod stations;

pub use client::{FetchError, MtrClient, DEFAULT_API_URL, DEFAULT_FETCH_TIMEOUT};
pub use format::format_train_schedule;
pub use stations::{resolve_line_code, resolve_station_code, LINES, STATION_NAMES};
