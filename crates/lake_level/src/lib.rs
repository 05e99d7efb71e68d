//! Lake levels scraped from the Groupe E "niveau des lacs" pages.
//!
//! The site has no API. [`get_levels`] reads the overview table for every lake
//! and, for lakes with a dedicated page, merges in the full daily min/max
//! history.
mod decode;
mod error;
mod extract;
mod fetch;
mod levels;
mod parse;
mod sources;
mod types;

pub use decode::{decode_page, DecodeError};
pub use error::LevelError;
pub use extract::{parse_detail, parse_summary, Summary};
pub use fetch::{FailureKind, FetchError, FetchOutput, FetchSettings, PageFetcher, ReqwestFetcher};
pub use levels::{get_levels, get_levels_blocking, get_levels_from};
pub use parse::{clean_lake_name, parse_date, parse_level, try_parse_level, DateParseError, DATE_FORMAT};
pub use sources::LakeSources;
pub use types::{lakes_to_json, Lake, Lakes, Measurement, DAY_KEY_FORMAT};
