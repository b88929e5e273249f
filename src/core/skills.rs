use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Decides whether an offered skill covers a required one
///
/// Both arguments arrive normalized (trimmed, lower case, non-empty).
pub trait SkillMatcher: Send + Sync + fmt::Debug {
    fn matches(&self, required: &str, offered: &str) -> bool;
}

/// Either skill contains the other as a substring ("react" ~ "react native",
/// but also "java" ~ "javascript")
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainmentMatcher;

impl SkillMatcher for ContainmentMatcher {
    #[inline]
    fn matches(&self, required: &str, offered: &str) -> bool {
        offered.contains(required) || required.contains(offered)
    }
}

/// Containment on whole words: every word of the shorter skill must appear
/// in the longer one, so "node" ~ "node.js" while "java" !~ "javascript"
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenMatcher;

impl SkillMatcher for TokenMatcher {
    fn matches(&self, required: &str, offered: &str) -> bool {
        let required_tokens: HashSet<&str> = tokens(required).collect();
        let offered_tokens: HashSet<&str> = tokens(offered).collect();

        if required_tokens.is_empty() || offered_tokens.is_empty() {
            return false;
        }

        required_tokens.is_subset(&offered_tokens) || offered_tokens.is_subset(&required_tokens)
    }
}

/// Skills must be identical after normalization
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl SkillMatcher for ExactMatcher {
    #[inline]
    fn matches(&self, required: &str, offered: &str) -> bool {
        required == offered
    }
}

/// Skill matching strategy selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillMatching {
    #[default]
    Containment,
    Token,
    Exact,
}

impl SkillMatching {
    pub fn matcher(self) -> Arc<dyn SkillMatcher> {
        match self {
            SkillMatching::Containment => Arc::new(ContainmentMatcher),
            SkillMatching::Token => Arc::new(TokenMatcher),
            SkillMatching::Exact => Arc::new(ExactMatcher),
        }
    }
}

/// Required skills covered by the offered ones
#[derive(Debug, Clone, PartialEq)]
pub struct SkillOverlap {
    pub matched: Vec<String>,
    pub required: usize,
}

impl SkillOverlap {
    /// Share of required skills that matched (0-1)
    pub fn ratio(&self) -> f64 {
        if self.required == 0 {
            return 0.0;
        }
        self.matched.len() as f64 / self.required as f64
    }
}

/// Lower-cases and trims a free-text value
#[inline]
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalizes a list, dropping blank entries
pub fn normalize_all(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| normalize(v))
        .filter(|v| !v.is_empty())
        .collect()
}

/// Matches each required skill against the offered set
///
/// Duplicated required skills count once per occurrence; blank entries are
/// ignored on both sides.
pub fn match_skills(
    matcher: &dyn SkillMatcher,
    required: &[String],
    offered: &[String],
) -> SkillOverlap {
    let required = normalize_all(required);
    let offered = normalize_all(offered);

    let matched: Vec<String> = required
        .iter()
        .filter(|req| offered.iter().any(|off| matcher.matches(req, off)))
        .cloned()
        .collect();

    SkillOverlap {
        matched,
        required: required.len(),
    }
}

fn tokens(skill: &str) -> impl Iterator<Item = &str> {
    skill
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|t| !t.is_empty())
}
