//! League domain logic
//!
//! - `compute`: movie valuation, team cost/value and division ranking
//! - `types`: standings, rosters and other report types
//! - `http`: box-office gross feed client

pub mod compute;
pub mod http;
pub mod types;
