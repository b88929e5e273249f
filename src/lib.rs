//! Job Board Match - recommendation scoring for the job board
//!
//! This library ranks jobs against a job seeker profile and candidates
//! against a job posting using a deterministic weighted-factor scorer.
//! It performs no I/O: callers supply the anchor and the records to rank.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{Matcher, SkillMatcher, SkillMatching};
pub use error::MatchError;
pub use models::{
    Candidate, Factor, FactorContribution, JobSeekerProfile, MatchResult, Opportunity, Ranked,
    ScoringWeights,
};
