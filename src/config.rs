use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{Matcher, SkillMatching};
use crate::error::MatchError;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub matching: MatchingSettings,
    pub scoring: ScoringSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            workers: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatchingSettings {
    pub default_job_limit: usize,
    pub default_candidate_limit: usize,
    pub max_limit: usize,
    pub max_candidates: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_job_limit: 10,
            default_candidate_limit: 20,
            max_limit: 100,
            max_candidates: 200,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringSettings {
    pub skill_matching: SkillMatching,
    pub job_seeker: WeightsConfig,
    pub employer: WeightsConfig,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            skill_matching: SkillMatching::default(),
            job_seeker: ScoringWeights::job_seeker().into(),
            employer: ScoringWeights::employer().into(),
        }
    }
}

/// Weights for one variant, all five keys required when the table is given
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WeightsConfig {
    pub skills_weight: f64,
    pub experience_weight: f64,
    pub location_weight: f64,
    pub salary_or_language_weight: f64,
    pub category_weight: f64,
}

impl From<ScoringWeights> for WeightsConfig {
    fn from(weights: ScoringWeights) -> Self {
        Self {
            skills_weight: weights.skills,
            experience_weight: weights.experience,
            location_weight: weights.location,
            salary_or_language_weight: weights.salary_or_language,
            category_weight: weights.category,
        }
    }
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(config: WeightsConfig) -> Self {
        Self {
            skills: config.skills_weight,
            experience: config.experience_weight,
            location: config.location_weight,
            salary_or_language: config.salary_or_language_weight,
            category: config.category_weight,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with JOBMATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., JOBMATCH__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Build the matcher described by the scoring section
    pub fn matcher(&self) -> Result<Matcher, MatchError> {
        Matcher::new(
            self.scoring.job_seeker.into(),
            self.scoring.employer.into(),
            self.scoring.skill_matching,
        )
    }
}

fn environment() -> Environment {
    Environment::with_prefix("JOBMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
