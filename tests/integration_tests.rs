// Integration tests for Job Board Match

use jobboard_match::models::{Candidate, Factor, JobSeekerProfile, Opportunity, Ranked};
use jobboard_match::{MatchError, Matcher};
use serde_json::Value;

const SKILLS: &[&str] = &[
    "javascript", "react", "node", "python", "sql", "rust", "go", "docker", "kubernetes", "java",
];
const CITIES: &[&str] = &["Almaty", "Astana", "Shymkent", "Bishkek"];
const COUNTRIES: &[&str] = &["Kazakhstan", "Kazakhstan", "Kazakhstan", "Kyrgyzstan"];
const CATEGORIES: &[&str] = &["IT", "Finance", "Design"];
const LANGUAGES: &[&str] = &["English", "Russian", "Kazakh"];

fn pick(values: &[&str], seed: usize, count: usize) -> Option<Vec<String>> {
    Some(
        (0..count)
            .map(|i| values[(seed * 7 + i * 3) % values.len()].to_string())
            .collect(),
    )
}

fn create_test_job(id: usize) -> Opportunity {
    Opportunity {
        id: Some(Value::from(id as u64)),
        title: Some(format!("Job {}", id)),
        skills_required: pick(SKILLS, id, id % 4),
        experience_years_min: if id % 5 == 0 { None } else { Some((id % 7) as u32) },
        city: Some(CITIES[id % CITIES.len()].to_string()),
        country: Some(COUNTRIES[id % COUNTRIES.len()].to_string()),
        is_remote: id % 3 == 0,
        salary_min: None,
        salary_max: if id % 2 == 0 { Some(800.0 + (id * 50) as f64) } else { None },
        salary_currency: None,
        category: Some(CATEGORIES[id % CATEGORIES.len()].to_string()),
        languages_required: pick(LANGUAGES, id, id % 3),
        ..Default::default()
    }
}

fn create_test_candidate(id: usize) -> Candidate {
    Candidate {
        id: Some(Value::from(id as u64)),
        skills: pick(SKILLS, id + 1, 1 + id % 5),
        experience_years: if id % 4 == 0 { None } else { Some((id % 9) as u32) },
        city: Some(CITIES[(id + 1) % CITIES.len()].to_string()),
        country: Some(COUNTRIES[(id + 1) % COUNTRIES.len()].to_string()),
        open_to_remote: id % 2 == 0,
        languages: pick(LANGUAGES, id + 2, 1 + id % 3),
        ..Default::default()
    }
}

fn create_test_profile() -> JobSeekerProfile {
    JobSeekerProfile {
        skills: Some(vec!["javascript".to_string(), "react".to_string(), "sql".to_string()]),
        experience_years: Some(3),
        city: Some("Almaty".to_string()),
        country: Some("Kazakhstan".to_string()),
        desired_salary_min: Some(1000.0),
        desired_salary_max: Some(1500.0),
        preferred_categories: Some(vec!["IT".to_string()]),
        languages: Some(vec!["Russian".to_string()]),
        ..Default::default()
    }
}

fn assert_sorted<T>(ranked: &[Ranked<T>]) {
    for pair in ranked.windows(2) {
        assert!(
            pair[0].match_score >= pair[1].match_score,
            "{} ranked above {}",
            pair[0].match_score,
            pair[1].match_score
        );
    }
}

#[test]
fn test_integration_job_seeker_example() {
    let matcher = Matcher::default();
    let profile = JobSeekerProfile {
        skills: Some(vec!["javascript".to_string(), "react".to_string()]),
        experience_years: Some(3),
        city: Some("Almaty".to_string()),
        ..Default::default()
    };
    let job = Opportunity {
        skills_required: Some(vec!["javascript".to_string(), "node".to_string()]),
        experience_years_min: Some(2),
        city: Some("Almaty".to_string()),
        ..Default::default()
    };

    let result = matcher.score_job(&profile, &job);
    assert_eq!(result.total_score, 55);
    assert_eq!(result.match_percentage, 55);
}

#[test]
fn test_integration_employer_example() {
    let matcher = Matcher::default();
    let candidate: Candidate = serde_json::from_value(serde_json::json!({
        "skills": ["python"],
        "experience_years": 5,
        "languages": ["English"]
    }))
    .unwrap();
    let job: Opportunity = serde_json::from_value(serde_json::json!({
        "skills_required": ["python", "sql"],
        "experience_years_min": 5,
        "languages_required": ["English", "Russian"]
    }))
    .unwrap();

    let result = matcher.score_candidate(&candidate, &job);
    assert_eq!(result.total_score, 50);
}

#[test]
fn test_integration_end_to_end_job_ranking() {
    let matcher = Matcher::default();
    let profile = create_test_profile();
    let jobs: Vec<Opportunity> = (0..100).map(create_test_job).collect();

    let ranked = matcher.rank_jobs(Some(&profile), &jobs, 10).unwrap();

    assert_eq!(ranked.len(), 10);
    assert_sorted(&ranked);

    // The best job beats or ties every job left out
    let cutoff = ranked.last().unwrap().match_score;
    let kept: Vec<&Value> = ranked.iter().filter_map(|r| r.record.id.as_ref()).collect();
    for job in &jobs {
        if !kept.contains(&job.id.as_ref().unwrap()) {
            assert!(matcher.score_job(&profile, job).total_score <= cutoff);
        }
    }
}

#[test]
fn test_integration_end_to_end_candidate_ranking() {
    let matcher = Matcher::default();
    let job = create_test_job(12);
    let candidates: Vec<Candidate> = (0..200).map(create_test_candidate).collect();

    let ranked = matcher.rank_candidates(Some(&job), &candidates, 20).unwrap();

    assert_eq!(ranked.len(), 20);
    assert_sorted(&ranked);
}

#[test]
fn test_limit_respected() {
    let matcher = Matcher::default();
    let profile = create_test_profile();

    for count in [0, 1, 5, 30] {
        let jobs: Vec<Opportunity> = (0..count).map(create_test_job).collect();
        for limit in [1, 5, 10, 50] {
            let ranked = matcher.rank_jobs(Some(&profile), &jobs, limit).unwrap();
            assert_eq!(ranked.len(), limit.min(count));
        }
    }
}

#[test]
fn test_scores_bounded_and_sum_invariant() {
    let matcher = Matcher::default();
    let profile = create_test_profile();

    for i in 0..200 {
        let job = create_test_job(i);
        let candidate = create_test_candidate(i);

        for result in [matcher.score_job(&profile, &job), matcher.score_candidate(&candidate, &job)] {
            let sum: f64 = result.factors.iter().map(|f| f.score).sum();
            assert!(result.total_score <= 100, "score {} out of range", result.total_score);
            assert_eq!(result.total_score, sum.round() as u32);
            assert_eq!(result.match_percentage, result.total_score);
        }
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let matcher = Matcher::default();
    let profile = create_test_profile();

    for i in 0..50 {
        let job = create_test_job(i);
        assert_eq!(matcher.score_job(&profile, &job), matcher.score_job(&profile, &job));

        let candidate = create_test_candidate(i);
        assert_eq!(
            matcher.score_candidate(&candidate, &job),
            matcher.score_candidate(&candidate, &job)
        );
    }

    let jobs: Vec<Opportunity> = (0..50).map(create_test_job).collect();
    assert_eq!(
        matcher.rank_jobs(Some(&profile), &jobs, 10).unwrap(),
        matcher.rank_jobs(Some(&profile), &jobs, 10).unwrap()
    );
}

#[test]
fn test_skills_monotonic_in_overlap() {
    let matcher = Matcher::default();
    let job = Opportunity {
        skills_required: Some(SKILLS.iter().take(5).map(|s| s.to_string()).collect()),
        ..Default::default()
    };

    let mut previous = -1.0;
    for overlap in 0..=5 {
        let profile = JobSeekerProfile {
            skills: Some(SKILLS.iter().take(overlap).map(|s| s.to_string()).collect()),
            ..Default::default()
        };
        let score = matcher
            .score_job(&profile, &job)
            .factor(Factor::Skills)
            .map_or(0.0, |f| f.score);

        assert!(score >= previous, "overlap {} scored {} < {}", overlap, score, previous);
        previous = score;
    }
    assert_eq!(previous, 40.0);
}

#[test]
fn test_missing_experience_is_omitted_not_an_error() {
    let matcher = Matcher::default();
    let job = create_test_job(1);
    let candidate = Candidate {
        experience_years: None,
        ..create_test_candidate(1)
    };

    let result = matcher.score_candidate(&candidate, &job);
    assert!(result.factor(Factor::Experience).is_none());

    let ranked = matcher.rank_candidates(Some(&job), &[candidate], 5).unwrap();
    assert_eq!(ranked.len(), 1);
}

#[test]
fn test_empty_candidate_set() {
    let matcher = Matcher::default();

    for limit in [1, 10, 100] {
        assert!(matcher.rank_jobs(Some(&create_test_profile()), &[], limit).unwrap().is_empty());
        assert!(matcher.rank_candidates(Some(&create_test_job(1)), &[], limit).unwrap().is_empty());
    }
}

#[test]
fn test_whole_batch_rejected_for_invalid_anchor() {
    let matcher = Matcher::default();
    let jobs: Vec<Opportunity> = (0..10).map(create_test_job).collect();
    let mut profile = create_test_profile();
    profile.skills.get_or_insert_with(Vec::new).push(String::new());

    let err = matcher.rank_jobs(Some(&profile), &jobs, 5).unwrap_err();
    assert!(matches!(err, MatchError::InvalidInput(_)));
}

#[test]
fn test_ranked_records_keep_pass_through_columns() {
    let matcher = Matcher::default();
    let mut job = create_test_job(3);
    job.extra.insert("company_name".to_string(), Value::from("Kaspi"));
    job.extra.insert("is_saved".to_string(), Value::from(true));

    let ranked = matcher.rank_jobs(Some(&create_test_profile()), &[job], 1).unwrap();
    let json = serde_json::to_value(&ranked[0]).unwrap();

    assert_eq!(json["company_name"], "Kaspi");
    assert_eq!(json["is_saved"], true);
    assert_eq!(json["matchScore"], json["matchPercentage"]);
    assert!(json["matchFactors"].is_array());
}

#[test]
fn test_null_columns_skip_factors_without_failing_the_batch() {
    let matcher = Matcher::default();
    let job: Opportunity = serde_json::from_value(serde_json::json!({
        "id": 1,
        "skills_required": ["python", "sql"],
        "experience_years_min": 2,
        "languages_required": null,
        "is_remote": null
    }))
    .unwrap();
    let candidates: Vec<Candidate> = serde_json::from_value(serde_json::json!([
        { "id": 10, "skills": null, "languages": null, "open_to_remote": null, "experience_years": 2 },
        { "id": 11, "skills": ["python"], "languages": ["English"], "experience_years": null }
    ]))
    .unwrap();

    let ranked = matcher.rank_candidates(Some(&job), &candidates, 5).unwrap();

    // Experience alone and half the skills alone both earn 25; the tie keeps input order
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].record.id, Some(Value::from(10)));
    assert_eq!(ranked[0].match_score, 25);
    assert_eq!(ranked[1].match_score, 25);
    for entry in &ranked {
        assert!(entry.match_factors.iter().all(|f| f.factor() != Factor::Languages));
    }
    assert!(ranked[0].match_factors.iter().all(|f| f.factor() != Factor::Skills));
}
