//! Client for the public-holiday source.
//!
//! Thin pass-through: holiday objects are returned exactly as the upstream
//! serves them, with no caching, deduplication, or added tagging.

use futures::future::try_join_all;
use serde_json::Value;

use crate::errors::AppError;

/// Countries whose holidays are combined into every lookup.
pub const COUNTRY_CODES: [&str; 3] = ["US", "GB", "DE"];

/// HTTP client for the holiday source (Nager.Date v3 API shape).
pub struct HolidayClient {
    client: reqwest::Client,
    base_url: String,
}

impl HolidayClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    /// Fetch holidays for all configured countries and flatten the results
    /// in country order.
    ///
    /// The per-country requests run concurrently and join fail-fast: if any
    /// one fails, the whole lookup fails and partial results are discarded.
    pub async fn holidays_for_year(&self, year: &str) -> Result<Vec<Value>, AppError> {
        let fetches = COUNTRY_CODES
            .iter()
            .map(|code| self.fetch_country(year, code));

        let per_country = try_join_all(fetches).await?;
        Ok(per_country.into_iter().flatten().collect())
    }

    async fn fetch_country(&self, year: &str, code: &str) -> Result<Vec<Value>, AppError> {
        let url = format!("{}/PublicHolidays/{}/{}", self.base_url, year, code);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            tracing::error!(
                country = %code,
                status = %response.status(),
                "Holiday source returned an error status"
            );
            return Err(AppError::Upstream(
                "Failed to fetch holidays from upstream source".to_string(),
            ));
        }

        Ok(response.json().await?)
    }
}
