use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

/// Job seeker profile, the anchor when recommending jobs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_profile_salary"))]
pub struct JobSeekerProfile {
    #[serde(default)]
    #[validate(custom(function = "validate_no_blank_entries"))]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub desired_salary_min: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub desired_salary_max: Option<f64>,
    #[serde(default)]
    pub salary_currency: Option<String>,
    #[serde(default)]
    pub preferred_categories: Option<Vec<String>>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
}

impl JobSeekerProfile {
    /// Profile fields that feed a scoring factor but are not filled in
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !has_entries(&self.skills) {
            missing.push("skills");
        }
        if self.experience_years.is_none() {
            missing.push("experience_years");
        }
        if !has_text(&self.city) && !has_text(&self.country) {
            missing.push("location");
        }
        if !self.desired_salary_min.is_some_and(|min| min > 0.0) {
            missing.push("desired_salary_min");
        }
        if !has_entries(&self.preferred_categories) {
            missing.push("preferred_categories");
        }
        missing
    }
}

/// Job posting, the anchor when recommending candidates
///
/// Columns the scorer does not read (company name, logo, saved flag, ...)
/// are kept in `extra` and serialized back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_job_salary"))]
pub struct Opportunity {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_no_blank_entries"))]
    pub skills_required: Option<Vec<String>>,
    #[serde(default)]
    pub experience_years_min: Option<u32>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_remote: bool,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub salary_min: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub salary_currency: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_no_blank_entries"))]
    pub languages_required: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Job seeker as seen from the employer side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub desired_salary_min: Option<f64>,
    #[serde(default)]
    pub desired_salary_max: Option<f64>,
    #[serde(default)]
    pub preferred_categories: Option<Vec<String>>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub open_to_remote: bool,
    #[serde(default)]
    pub current_position: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Scoring dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Factor {
    Skills,
    Experience,
    Location,
    Salary,
    Category,
    Languages,
}

/// Which rung of the location chain matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationMatch {
    SameCity,
    SameCountry,
    Remote,
    None,
}

/// Raw evidence behind a factor score, tagged with the factor name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "factor", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum FactorEvidence {
    Skills {
        matched: Vec<String>,
        required: usize,
    },
    Experience {
        years: u32,
        required_years: u32,
        delta: i64,
    },
    Location {
        #[serde(rename = "type")]
        kind: LocationMatch,
    },
    Salary {
        ratio: f64,
    },
    Category {
        category: String,
    },
    Languages {
        matched: Vec<String>,
    },
}

impl FactorEvidence {
    pub fn factor(&self) -> Factor {
        match self {
            FactorEvidence::Skills { .. } => Factor::Skills,
            FactorEvidence::Experience { .. } => Factor::Experience,
            FactorEvidence::Location { .. } => Factor::Location,
            FactorEvidence::Salary { .. } => Factor::Salary,
            FactorEvidence::Category { .. } => Factor::Category,
            FactorEvidence::Languages { .. } => Factor::Languages,
        }
    }
}

/// Points one factor contributed to a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorContribution {
    #[serde(flatten)]
    pub evidence: FactorEvidence,
    pub score: f64,
}

impl FactorContribution {
    pub fn new(evidence: FactorEvidence, score: f64) -> Self {
        Self { evidence, score }
    }

    pub fn factor(&self) -> Factor {
        self.evidence.factor()
    }
}

/// Outcome of scoring one anchor against one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub total_score: u32,
    pub match_percentage: u32,
    pub factors: Vec<FactorContribution>,
}

impl MatchResult {
    /// Total is the rounded sum of the factor scores; the percentage mirrors it.
    pub fn from_factors(factors: Vec<FactorContribution>) -> Self {
        let sum: f64 = factors.iter().map(|f| f.score).sum();
        let total_score = sum.round().max(0.0) as u32;

        Self {
            total_score,
            match_percentage: total_score,
            factors,
        }
    }

    pub fn factor(&self, factor: Factor) -> Option<&FactorContribution> {
        self.factors.iter().find(|f| f.factor() == factor)
    }
}

/// A record decorated with its match against the anchor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranked<T> {
    #[serde(flatten)]
    pub record: T,
    #[serde(rename = "matchScore")]
    pub match_score: u32,
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u32,
    #[serde(rename = "matchFactors")]
    pub match_factors: Vec<FactorContribution>,
}

impl<T> Ranked<T> {
    pub fn new(record: T, result: MatchResult) -> Self {
        Self {
            record,
            match_score: result.total_score,
            match_percentage: result.match_percentage,
            match_factors: result.factors,
        }
    }
}

/// Factor weights in points; a variant's weights sum to 100
///
/// `salary_or_language` is the salary weight for the job seeker variant
/// and the languages weight for the employer variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub salary_or_language: f64,
    pub category: f64,
}

impl ScoringWeights {
    /// Weights for ranking jobs against a job seeker
    pub fn job_seeker() -> Self {
        Self {
            skills: 40.0,
            experience: 20.0,
            location: 15.0,
            salary_or_language: 15.0,
            category: 10.0,
        }
    }

    /// Weights for ranking candidates against a job posting
    pub fn employer() -> Self {
        Self {
            skills: 50.0,
            experience: 25.0,
            location: 15.0,
            salary_or_language: 10.0,
            category: 0.0,
        }
    }

    pub fn total(&self) -> f64 {
        self.skills + self.experience + self.location + self.salary_or_language + self.category
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn has_entries(values: &Option<Vec<String>>) -> bool {
    values.as_deref().is_some_and(|v| v.iter().any(|v| !v.trim().is_empty()))
}

/// Nullable columns arrive as `null`; read them as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[allow(clippy::ptr_arg)]
fn validate_no_blank_entries(values: &Vec<String>) -> Result<(), ValidationError> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(ValidationError::new("blank_entry"));
    }
    Ok(())
}

fn validate_salary_range(min: Option<f64>, max: Option<f64>) -> Result<(), ValidationError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(ValidationError::new("inverted_salary_range")),
        _ => Ok(()),
    }
}

fn validate_profile_salary(profile: &JobSeekerProfile) -> Result<(), ValidationError> {
    validate_salary_range(profile.desired_salary_min, profile.desired_salary_max)
}

fn validate_job_salary(job: &Opportunity) -> Result<(), ValidationError> {
    validate_salary_range(job.salary_min, job.salary_max)
}
