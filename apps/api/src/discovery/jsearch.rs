//! JSearch (RapidAPI) client and the mapping from its schema to `JobListing`.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::discovery::contact::synthesize_hr_email;
use crate::llm_client::prompts::truncate_chars;
use crate::models::job::{JobListing, ListingStatus};

pub const JSEARCH_API_URL: &str = "https://jsearch.p.rapidapi.com";
const JSEARCH_HOST: &str = "jsearch.p.rapidapi.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Listings taken from one search.
pub const MAX_RESULTS: usize = 3;
/// Characters of each job description kept on the listing.
pub const JOB_DESCRIPTION_BUDGET: usize = 800;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<SearchItem>,
}

/// The subset of a JSearch result the assistant uses. Every field may be
/// missing or null.
#[derive(Debug, Default, Deserialize)]
pub struct SearchItem {
    pub employer_name: Option<String>,
    pub job_title: Option<String>,
    pub job_city: Option<String>,
    pub job_description: Option<String>,
    pub job_apply_link: Option<String>,
    pub employer_website: Option<String>,
}

#[derive(Clone)]
pub struct JobSearchClient {
    client: Client,
    base_url: String,
}

impl JobSearchClient {
    pub fn new() -> Result<Self, SearchError> {
        Self::with_base_url(JSEARCH_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, SearchError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            base_url: base_url.into(),
        })
    }

    /// One query for `"{role} in {location}"`, first page, postings from the last week.
    pub async fn search(
        &self,
        role: &str,
        location: &str,
        api_key: &str,
        limit: usize,
    ) -> Result<Vec<JobListing>, SearchError> {
        let query = format!("{role} in {location}");
        debug!("JSearch query: {query:?}");

        let response: SearchResponse = self
            .client
            .get(format!("{}/search", self.base_url))
            .header("x-rapidapi-host", JSEARCH_HOST)
            .header("x-rapidapi-key", api_key)
            .query(&[
                ("query", query.as_str()),
                ("page", "1"),
                ("num_pages", "1"),
                ("date_posted", "week"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response
            .data
            .into_iter()
            .take(limit)
            .map(|item| map_search_item(item, role, location))
            .collect())
    }
}

/// Maps one search result, filling gaps from the requested role/location.
pub fn map_search_item(item: SearchItem, role: &str, location: &str) -> JobListing {
    let company = non_blank(item.employer_name).unwrap_or_else(|| "Unknown Company".to_string());
    let hr_email = synthesize_hr_email(&company, item.employer_website.as_deref());
    let description = item.job_description.unwrap_or_default();

    JobListing {
        role: non_blank(item.job_title).unwrap_or_else(|| role.to_string()),
        location: non_blank(item.job_city).unwrap_or_else(|| location.to_string()),
        hr_email,
        job_description: truncate_chars(&description, JOB_DESCRIPTION_BUDGET).to_string(),
        apply_link: item.job_apply_link.unwrap_or_default(),
        status: ListingStatus::Found,
        company,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
