use std::sync::Arc;
use validator::Validate;

use crate::core::scoring::{score_candidate_for_job, score_job_for_seeker};
use crate::core::skills::{SkillMatcher, SkillMatching};
use crate::error::MatchError;
use crate::models::{Candidate, JobSeekerProfile, MatchResult, Opportunity, Ranked, ScoringWeights};

const WEIGHT_TOTAL: f64 = 100.0;
const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Scores and ranks records against a single anchor
///
/// # Ranking
/// 1. Validate the anchor and the limit (nothing is scored on failure)
/// 2. Score every record against the anchor
/// 3. Stable sort by score, descending (ties keep input order)
/// 4. Truncate to the limit
///
/// Holds no per-request state; clone it freely across workers.
#[derive(Debug, Clone)]
pub struct Matcher {
    job_seeker_weights: ScoringWeights,
    employer_weights: ScoringWeights,
    skills: Arc<dyn SkillMatcher>,
}

impl Matcher {
    /// Build a matcher, rejecting weight sets that do not sum to 100
    pub fn new(
        job_seeker_weights: ScoringWeights,
        employer_weights: ScoringWeights,
        skill_matching: SkillMatching,
    ) -> Result<Self, MatchError> {
        validate_weights("job_seeker", &job_seeker_weights)?;
        validate_weights("employer", &employer_weights)?;

        Ok(Self {
            job_seeker_weights,
            employer_weights,
            skills: skill_matching.matcher(),
        })
    }

    pub fn with_default_weights() -> Self {
        Self {
            job_seeker_weights: ScoringWeights::job_seeker(),
            employer_weights: ScoringWeights::employer(),
            skills: SkillMatching::default().matcher(),
        }
    }

    /// Swap the skill matching strategy
    pub fn with_skill_matcher(mut self, skills: Arc<dyn SkillMatcher>) -> Self {
        self.skills = skills;
        self
    }

    pub fn job_seeker_weights(&self) -> &ScoringWeights {
        &self.job_seeker_weights
    }

    pub fn employer_weights(&self) -> &ScoringWeights {
        &self.employer_weights
    }

    /// Score one job for a job seeker
    pub fn score_job(&self, profile: &JobSeekerProfile, job: &Opportunity) -> MatchResult {
        score_job_for_seeker(profile, job, &self.job_seeker_weights, self.skills.as_ref())
    }

    /// Score one candidate for a job posting
    pub fn score_candidate(&self, candidate: &Candidate, job: &Opportunity) -> MatchResult {
        score_candidate_for_job(candidate, job, &self.employer_weights, self.skills.as_ref())
    }

    /// Rank jobs for a job seeker
    ///
    /// # Arguments
    /// * `profile` - The job seeker, `None` when the caller could not load it
    /// * `jobs` - Jobs already filtered for eligibility
    /// * `limit` - Maximum number of jobs to return, at least 1
    ///
    /// # Returns
    /// At most `limit` decorated copies of `jobs`, best match first
    pub fn rank_jobs(
        &self,
        profile: Option<&JobSeekerProfile>,
        jobs: &[Opportunity],
        limit: usize,
    ) -> Result<Vec<Ranked<Opportunity>>, MatchError> {
        let profile = profile
            .ok_or_else(|| MatchError::InvalidInput("job seeker profile is required".to_string()))?;
        profile.validate()?;
        check_limit(limit)?;

        let ranked = rank_by(jobs, limit, |job| self.score_job(profile, job));

        tracing::debug!(
            "Ranked {} of {} jobs (top score: {:?})",
            ranked.len(),
            jobs.len(),
            ranked.first().map(|r| r.match_score)
        );

        Ok(ranked)
    }

    /// Rank candidates for a job posting
    ///
    /// Same contract as [`Matcher::rank_jobs`] with the job as the anchor.
    pub fn rank_candidates(
        &self,
        job: Option<&Opportunity>,
        candidates: &[Candidate],
        limit: usize,
    ) -> Result<Vec<Ranked<Candidate>>, MatchError> {
        let job = job.ok_or_else(|| MatchError::InvalidInput("job posting is required".to_string()))?;
        job.validate()?;
        check_limit(limit)?;

        let ranked = rank_by(candidates, limit, |candidate| self.score_candidate(candidate, job));

        tracing::debug!(
            "Ranked {} of {} candidates (top score: {:?})",
            ranked.len(),
            candidates.len(),
            ranked.first().map(|r| r.match_score)
        );

        Ok(ranked)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Score everything, keep the best `limit`, and only clone what is kept
fn rank_by<T, F>(records: &[T], limit: usize, score: F) -> Vec<Ranked<T>>
where
    T: Clone,
    F: Fn(&T) -> MatchResult,
{
    let mut scored: Vec<(usize, MatchResult)> = records
        .iter()
        .enumerate()
        .map(|(index, record)| (index, score(record)))
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.1.total_score.cmp(&a.1.total_score));
    scored.truncate(limit);

    scored
        .into_iter()
        .map(|(index, result)| Ranked::new(records[index].clone(), result))
        .collect()
}

fn check_limit(limit: usize) -> Result<(), MatchError> {
    if limit == 0 {
        return Err(MatchError::InvalidInput("limit must be at least 1".to_string()));
    }
    Ok(())
}

fn validate_weights(variant: &str, weights: &ScoringWeights) -> Result<(), MatchError> {
    let all = [
        weights.skills,
        weights.experience,
        weights.location,
        weights.salary_or_language,
        weights.category,
    ];

    if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(MatchError::InvalidWeights(format!(
            "{} weights must be finite and non-negative: {:?}",
            variant, weights
        )));
    }

    let total = weights.total();
    if (total - WEIGHT_TOTAL).abs() > WEIGHT_TOLERANCE {
        return Err(MatchError::InvalidWeights(format!(
            "{} weights sum to {}, expected {}",
            variant, total, WEIGHT_TOTAL
        )));
    }

    Ok(())
}
