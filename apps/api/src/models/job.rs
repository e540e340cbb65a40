use serde::{Deserialize, Serialize};

/// Where a listing came from. Serialized with the labels shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingStatus {
    #[serde(rename = "Found")]
    Found,
    #[serde(rename = "Found (Simulated)")]
    Simulated,
}

/// Whether a discovery run returned authentic listings or demo data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscoveryMode {
    Real,
    Simulated,
}

/// A single job listing. Created by discovery and never mutated afterwards.
///
/// `hr_email` is always non-empty (synthesized when the listing has none).
/// `job_description` is already cut to the discovery budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub company: String,
    pub role: String,
    pub location: String,
    pub hr_email: String,
    pub job_description: String,
    #[serde(default)]
    pub apply_link: String,
    pub status: ListingStatus,
}
