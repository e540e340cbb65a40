//! Job Discovery: real listings from JSearch, or simulated ones when no
//! search key is configured or the search comes back empty.

pub mod contact;
pub mod handlers;
pub mod jsearch;
pub mod simulated;

use rand::Rng;
use tracing::{info, warn};

use crate::discovery::jsearch::{JobSearchClient, MAX_RESULTS};
use crate::discovery::simulated::simulate_job_discovery;
use crate::models::job::{DiscoveryMode, JobListing};

/// Finds up to `MAX_RESULTS` listings for `role` in `location`.
///
/// A blank or missing `api_key` skips the search entirely. Search failures are
/// logged and treated as "no results", so the caller always gets listings and
/// a mode telling it whether they are authentic.
pub async fn discover_jobs<R: Rng + ?Sized>(
    search: &JobSearchClient,
    role: &str,
    location: &str,
    api_key: Option<&str>,
    rng: &mut R,
) -> (Vec<JobListing>, DiscoveryMode) {
    if let Some(key) = api_key.map(str::trim).filter(|k| !k.is_empty()) {
        match search.search(role, location, key, MAX_RESULTS).await {
            Ok(jobs) if !jobs.is_empty() => {
                info!(
                    "JSearch returned {} listings for {role:?} in {location:?}",
                    jobs.len()
                );
                return (jobs, DiscoveryMode::Real);
            }
            Ok(_) => info!("JSearch returned no listings, simulating"),
            Err(e) => warn!("JSearch API error: {e}"),
        }
    }

    (
        simulate_job_discovery(role, location, rng),
        DiscoveryMode::Simulated,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::ListingStatus;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[tokio::test]
    async fn test_no_key_simulates_three_listings() {
        let search = JobSearchClient::new().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let (jobs, mode) =
            discover_jobs(&search, "Python Developer", "Ahmedabad", None, &mut rng).await;

        assert_eq!(mode, DiscoveryMode::Simulated);
        assert_eq!(jobs.len(), 3);
        for job in &jobs {
            assert!(job.hr_email.starts_with("hr@"));
            assert!(job.hr_email.ends_with(".com"));
            assert_eq!(job.status, ListingStatus::Simulated);
        }
    }

    #[tokio::test]
    async fn test_blank_key_is_treated_as_missing() {
        let search = JobSearchClient::new().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let (jobs, mode) =
            discover_jobs(&search, "Rust Engineer", "Pune", Some("   "), &mut rng).await;

        assert_eq!(mode, DiscoveryMode::Simulated);
        assert_eq!(jobs.len(), 3);
    }

    #[tokio::test]
    async fn test_same_seed_selects_same_companies() {
        let search = JobSearchClient::new().unwrap();

        let (first, _) = discover_jobs(
            &search,
            "QA Engineer",
            "Remote",
            None,
            &mut StdRng::seed_from_u64(42),
        )
        .await;
        let (second, _) = discover_jobs(
            &search,
            "QA Engineer",
            "Remote",
            None,
            &mut StdRng::seed_from_u64(42),
        )
        .await;

        let companies = |jobs: &[JobListing]| {
            jobs.iter().map(|j| j.company.clone()).collect::<Vec<_>>()
        };
        assert_eq!(companies(&first), companies(&second));
    }
}
