use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Candidate, JobSeekerProfile, Opportunity};

/// Request to rank jobs for a job seeker
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendJobsRequest {
    #[serde(default)]
    pub profile: Option<JobSeekerProfile>,
    #[serde(default)]
    pub jobs: Vec<Opportunity>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Request to rank candidates for a job posting
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendCandidatesRequest {
    #[serde(default)]
    pub job: Option<Opportunity>,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}
