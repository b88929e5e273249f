use serde::{Deserialize, Serialize};
use crate::models::domain::{Candidate, Opportunity, Ranked};

/// Response for the job recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendJobsResponse {
    pub recommendations: Vec<Ranked<Opportunity>>,
    pub user_profile: ProfileCompleteness,
}

/// How much of the job seeker profile the scorer could use
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCompleteness {
    pub has_complete_profile: bool,
    pub missing_fields: Vec<String>,
}

/// Response for the candidate recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendCandidatesResponse {
    pub job_title: Option<String>,
    pub candidates: Vec<Ranked<Candidate>>,
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
