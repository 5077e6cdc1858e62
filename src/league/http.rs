//! Box-office gross feed client
//!
//! A feed serves one JSON document per movie at `{base_url}/{identifier}`:
//!
//! ```json
//! { "date": "2013-07-05", "gross": 8000 }
//! ```

use chrono::NaiveDate;
use reqwest::{header::ACCEPT, Client};
use serde::{Deserialize, Serialize};

use crate::{
    storage::models::{MovieExternalId, NewGrossUpdate},
    Result,
};


/// One gross figure as served by a feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedGross {
    pub date: NaiveDate,
    pub gross: i64,
}

impl FeedGross {
    /// Turn a feed response into an update recorded under `external.source`.
    pub fn into_update(self, external: &MovieExternalId) -> NewGrossUpdate {
        NewGrossUpdate {
            movie_id: external.movie_id,
            date: self.date,
            gross: self.gross,
            source: external.source.clone(),
        }
    }
}

/// URL of one movie's document in the feed.
pub fn feed_url(base_url: &str, identifier: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        identifier.trim_start_matches('/')
    )
}

/// Parse a feed response body.
pub fn parse_feed_gross(body: &str) -> Result<FeedGross> {
    Ok(serde_json::from_str(body)?)
}

pub fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .user_agent(concat!("movie-league/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Fetch the current gross for one movie.
pub async fn fetch_gross(client: &Client, base_url: &str, identifier: &str) -> Result<FeedGross> {
    let url = feed_url(base_url, identifier);

    let body = client
        .get(&url)
        .header(ACCEPT, "application/json")
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    parse_feed_gross(&body)
}
