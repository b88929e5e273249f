// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Candidate, Factor, FactorContribution, FactorEvidence, JobSeekerProfile, LocationMatch,
    MatchResult, Opportunity, Ranked, ScoringWeights,
};
pub use requests::{RecommendCandidatesRequest, RecommendJobsRequest};
pub use responses::{
    ErrorResponse, HealthResponse, ProfileCompleteness, RecommendCandidatesResponse,
    RecommendJobsResponse,
};
