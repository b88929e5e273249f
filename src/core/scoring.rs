use crate::core::skills::{match_skills, normalize, normalize_all, SkillMatcher};
use crate::models::{
    Candidate, FactorContribution, FactorEvidence, JobSeekerProfile, LocationMatch, MatchResult,
    Opportunity, ScoringWeights,
};

/// Score a job (0-100) for a job seeker
///
/// Scoring formula with default weights:
/// score = (
///     skills     40 * matched / required    # only when the job lists skills
///   + experience 20 | 15 | 10 | 0           # by years above the minimum
///   + location   15 city | 10 country | 15 remote | 0
///   + salary     15 | 12 | 8 | 0            # by offered max / desired min
///   + category   10 | 0                     # job category is preferred
/// )
///
/// Factors without data on both sides are skipped. Factors that award
/// nothing are left out of the result as well.
pub fn score_job_for_seeker(
    profile: &JobSeekerProfile,
    job: &Opportunity,
    weights: &ScoringWeights,
    skills: &dyn SkillMatcher,
) -> MatchResult {
    let mut factors = Vec::with_capacity(5);

    if weights.skills > 0.0 {
        factors.extend(skills_factor(
            skills,
            job.skills_required.as_deref(),
            profile.skills.as_deref(),
            weights.skills,
        ));
    }

    if weights.experience > 0.0 {
        if let (Some(years), Some(required_years)) = (profile.experience_years, job.experience_years_min) {
            let delta = i64::from(years) - i64::from(required_years);
            let score = seeker_experience_points(delta, weights.experience);
            factors.push(FactorContribution::new(
                FactorEvidence::Experience { years, required_years, delta },
                score,
            ));
        }
    }

    if weights.location > 0.0 {
        let kind = location_match(
            profile.city.as_deref(),
            profile.country.as_deref(),
            job.city.as_deref(),
            job.country.as_deref(),
            job.is_remote,
        );
        factors.extend(location_factor(kind, weights.location));
    }

    if weights.salary_or_language > 0.0 {
        factors.extend(salary_factor(profile, job, weights.salary_or_language));
    }

    if weights.category > 0.0 {
        factors.extend(category_factor(
            job.category.as_deref(),
            profile.preferred_categories.as_deref(),
            weights.category,
        ));
    }

    MatchResult::from_factors(factors)
}

/// Score a candidate (0-100) for a job posting
///
/// Scoring formula with default weights:
/// score = (
///     skills     50 * matched / required
///   + experience 25 | 20 | 15 | 0
///   + location   15 city | 10 country | 15 both remote | 0
///   + languages  10 | 0                     # all required languages spoken
/// )
///
/// A non-zero category weight adds the same category factor as the job
/// seeker variant, using the candidate's preferred categories.
pub fn score_candidate_for_job(
    candidate: &Candidate,
    job: &Opportunity,
    weights: &ScoringWeights,
    skills: &dyn SkillMatcher,
) -> MatchResult {
    let mut factors = Vec::with_capacity(5);

    if weights.skills > 0.0 {
        factors.extend(skills_factor(
            skills,
            job.skills_required.as_deref(),
            candidate.skills.as_deref(),
            weights.skills,
        ));
    }

    if weights.experience > 0.0 {
        if let (Some(years), Some(required_years)) = (candidate.experience_years, job.experience_years_min) {
            let delta = i64::from(years) - i64::from(required_years);
            let score = employer_experience_points(delta, weights.experience);
            factors.push(FactorContribution::new(
                FactorEvidence::Experience { years, required_years, delta },
                score,
            ));
        }
    }

    if weights.location > 0.0 {
        let kind = location_match(
            candidate.city.as_deref(),
            candidate.country.as_deref(),
            job.city.as_deref(),
            job.country.as_deref(),
            candidate.open_to_remote && job.is_remote,
        );
        factors.extend(location_factor(kind, weights.location));
    }

    if weights.salary_or_language > 0.0 {
        factors.extend(languages_factor(
            job.languages_required.as_deref(),
            candidate.languages.as_deref(),
            weights.salary_or_language,
        ));
    }

    if weights.category > 0.0 {
        factors.extend(category_factor(
            job.category.as_deref(),
            candidate.preferred_categories.as_deref(),
            weights.category,
        ));
    }

    MatchResult::from_factors(factors)
}

/// Tier points expressed against the default weight, rescaled to `weight`
#[inline]
fn share(weight: f64, points: f64, of: f64) -> f64 {
    weight * points / of
}

/// Both lists must hold at least one non-blank skill
fn skills_factor(
    matcher: &dyn SkillMatcher,
    required: Option<&[String]>,
    offered: Option<&[String]>,
    weight: f64,
) -> Option<FactorContribution> {
    let offered = offered.filter(|skills| skills.iter().any(|s| !s.trim().is_empty()))?;
    let overlap = match_skills(matcher, required?, offered);
    if overlap.required == 0 {
        return None;
    }

    let score = overlap.ratio() * weight;
    Some(FactorContribution::new(
        FactorEvidence::Skills {
            matched: overlap.matched,
            required: overlap.required,
        },
        score,
    ))
}

/// 0..=2 years over the minimum is ideal, up to 5 is acceptable,
/// one year short is tolerated
#[inline]
fn seeker_experience_points(delta: i64, weight: f64) -> f64 {
    match delta {
        0..=2 => weight,
        3..=5 => share(weight, 15.0, 20.0),
        -1 => share(weight, 10.0, 20.0),
        _ => 0.0,
    }
}

/// Employers accept any surplus of experience at a small discount
#[inline]
fn employer_experience_points(delta: i64, weight: f64) -> f64 {
    match delta {
        0..=3 => weight,
        d if d > 3 => share(weight, 20.0, 25.0),
        -1 => share(weight, 15.0, 25.0),
        _ => 0.0,
    }
}

/// First match wins: city, then country, then remote
pub fn location_match(
    seeker_city: Option<&str>,
    seeker_country: Option<&str>,
    job_city: Option<&str>,
    job_country: Option<&str>,
    remote: bool,
) -> LocationMatch {
    if same_text(seeker_city, job_city) {
        LocationMatch::SameCity
    } else if same_text(seeker_country, job_country) {
        LocationMatch::SameCountry
    } else if remote {
        LocationMatch::Remote
    } else {
        LocationMatch::None
    }
}

fn location_factor(kind: LocationMatch, weight: f64) -> Option<FactorContribution> {
    match kind {
        LocationMatch::None => None,
        kind => Some(FactorContribution::new(
            FactorEvidence::Location { kind },
            location_points(kind, weight),
        )),
    }
}

#[inline]
fn location_points(kind: LocationMatch, weight: f64) -> f64 {
    match kind {
        LocationMatch::SameCity | LocationMatch::Remote => weight,
        LocationMatch::SameCountry => share(weight, 10.0, 15.0),
        LocationMatch::None => 0.0,
    }
}

fn salary_factor(
    profile: &JobSeekerProfile,
    job: &Opportunity,
    weight: f64,
) -> Option<FactorContribution> {
    let desired_min = profile.desired_salary_min.filter(|min| *min > 0.0)?;
    let offered_max = job.salary_max?;

    let wanted = profile.salary_currency.as_deref().filter(|c| !c.trim().is_empty());
    let offered = job.salary_currency.as_deref().filter(|c| !c.trim().is_empty());
    if wanted.is_some() && offered.is_some() && !same_text(wanted, offered) {
        return None;
    }

    let ratio = offered_max / desired_min;
    let score = if (1.0..=1.3).contains(&ratio) {
        weight
    } else if ratio > 1.3 {
        share(weight, 12.0, 15.0)
    } else if ratio >= 0.8 {
        share(weight, 8.0, 15.0)
    } else {
        0.0
    };

    Some(FactorContribution::new(FactorEvidence::Salary { ratio }, score))
}

/// Listed only when the job's category is among the preferred ones
fn category_factor(
    category: Option<&str>,
    preferred: Option<&[String]>,
    weight: f64,
) -> Option<FactorContribution> {
    let category = category.map(str::trim).filter(|c| !c.is_empty())?;
    let wanted = normalize(category);
    if !normalize_all(preferred?).iter().any(|p| *p == wanted) {
        return None;
    }

    Some(FactorContribution::new(
        FactorEvidence::Category {
            category: category.to_string(),
        },
        weight,
    ))
}

/// All-or-nothing: every required language must be spoken
///
/// Both lists must be present. An explicitly empty requirement list is
/// satisfied by any candidate.
fn languages_factor(
    required: Option<&[String]>,
    spoken: Option<&[String]>,
    weight: f64,
) -> Option<FactorContribution> {
    let spoken = normalize_all(spoken?);
    let mut matched = Vec::new();
    for lang in required?.iter().map(|lang| lang.trim()).filter(|lang| !lang.is_empty()) {
        if !spoken.contains(&normalize(lang)) {
            return None;
        }
        matched.push(lang.to_string());
    }

    Some(FactorContribution::new(FactorEvidence::Languages { matched }, weight))
}

#[inline]
fn same_text(a: Option<&str>, b: Option<&str>) -> bool {
    match (a.map(str::trim), b.map(str::trim)) {
        (Some(a), Some(b)) if !a.is_empty() => a.to_lowercase() == b.to_lowercase(),
        _ => false,
    }
}
