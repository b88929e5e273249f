// Core algorithm exports
pub mod matcher;
pub mod scoring;
pub mod skills;

pub use matcher::Matcher;
pub use scoring::{location_match, score_candidate_for_job, score_job_for_seeker};
pub use skills::{
    match_skills, ContainmentMatcher, ExactMatcher, SkillMatcher, SkillMatching, SkillOverlap,
    TokenMatcher,
};
