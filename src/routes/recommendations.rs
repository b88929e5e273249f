use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::models::{
    ErrorResponse, HealthResponse, ProfileCompleteness, RecommendCandidatesRequest,
    RecommendCandidatesResponse, RecommendJobsRequest, RecommendJobsResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommendations/jobs", web::post().to(recommend_jobs))
        .route("/recommendations/candidates", web::post().to(recommend_candidates));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommend jobs for a job seeker
///
/// POST /api/v1/recommendations/jobs
///
/// Request body:
/// ```json
/// {
///   "profile": { "skills": ["rust"], "experience_years": 3, "city": "Almaty" },
///   "jobs": [{ "id": 1, "skills_required": ["rust"], "experience_years_min": 2 }],
///   "limit": 10
/// }
/// ```
async fn recommend_jobs(
    state: web::Data<AppState>,
    req: web::Json<RecommendJobsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend_jobs request: {}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    if let Some(response) = check_batch_size(&state.matching, req.jobs.len()) {
        return response;
    }

    let limit = capped_limit(&state.matching, req.limit, state.matching.default_job_limit);

    tracing::info!("Ranking {} jobs, limit: {}", req.jobs.len(), limit);

    let recommendations = match state.matcher.rank_jobs(req.profile.as_ref(), &req.jobs, limit) {
        Ok(ranked) => ranked,
        Err(e) => {
            tracing::warn!("Rejected job recommendation request: {}", e);
            return bad_request("Invalid input", e.to_string());
        }
    };

    let missing_fields: Vec<String> = req
        .profile
        .as_ref()
        .map(|profile| profile.missing_fields().into_iter().map(str::to_string).collect())
        .unwrap_or_default();

    tracing::info!(
        "Returning {} job recommendations (missing profile fields: {:?})",
        recommendations.len(),
        missing_fields
    );

    HttpResponse::Ok().json(RecommendJobsResponse {
        recommendations,
        user_profile: ProfileCompleteness {
            has_complete_profile: missing_fields.is_empty(),
            missing_fields,
        },
    })
}

/// Recommend candidates for a job posting
///
/// POST /api/v1/recommendations/candidates
///
/// Request body:
/// ```json
/// {
///   "job": { "title": "Data Engineer", "skills_required": ["python", "sql"] },
///   "candidates": [{ "id": 42, "skills": ["python"], "languages": ["English"] }],
///   "limit": 20
/// }
/// ```
async fn recommend_candidates(
    state: web::Data<AppState>,
    req: web::Json<RecommendCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend_candidates request: {}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    if let Some(response) = check_batch_size(&state.matching, req.candidates.len()) {
        return response;
    }

    let limit = capped_limit(&state.matching, req.limit, state.matching.default_candidate_limit);

    tracing::info!("Ranking {} candidates, limit: {}", req.candidates.len(), limit);

    let candidates = match state.matcher.rank_candidates(req.job.as_ref(), &req.candidates, limit) {
        Ok(ranked) => ranked,
        Err(e) => {
            tracing::warn!("Rejected candidate recommendation request: {}", e);
            return bad_request("Invalid input", e.to_string());
        }
    };

    tracing::info!(
        "Returning {} candidates (from {} candidates)",
        candidates.len(),
        req.candidates.len()
    );

    HttpResponse::Ok().json(RecommendCandidatesResponse {
        job_title: req.job.as_ref().and_then(|job| job.title.clone()),
        candidates,
        total_candidates: req.candidates.len(),
    })
}

/// Requested limit, falling back to the default and capped at the maximum
fn capped_limit(settings: &MatchingSettings, requested: Option<usize>, default: usize) -> usize {
    requested.unwrap_or(default).min(settings.max_limit)
}

fn check_batch_size(settings: &MatchingSettings, count: usize) -> Option<HttpResponse> {
    if count > settings.max_candidates {
        tracing::info!("Rejected batch of {} records (max {})", count, settings.max_candidates);
        return Some(bad_request(
            "Too many records",
            format!("At most {} records can be ranked per request", settings.max_candidates),
        ));
    }
    None
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}
