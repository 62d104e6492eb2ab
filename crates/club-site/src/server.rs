/// HTTP surface of the club directory.
///
/// Routes:
/// - `GET /api/clubs[?year=N]`: whole catalog, or the real clubs open to year N
/// - `GET /api/clubs/featured`: first six real clubs
/// - `GET /api/clubs/{id}`: one club with its derived presentation data
/// - `POST /api/join`: acknowledge a join request without storing it
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use club_common::api::{JoinAck, JoinSubmission};
use club_common::catalog::Catalog;
use club_common::category::{category_for, ClubCategory};
use club_common::model::ClubRecord;
use club_common::{summary, tint};

use crate::error::ApiError;

const FEATURED_COUNT: usize = 6;

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
}

pub fn router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/clubs", get(list_clubs))
        .route("/api/clubs/featured", get(featured_clubs))
        .route("/api/clubs/{id}", get(get_club))
        .route("/api/join", post(join))
        .with_state(AppState { catalog })
}

#[derive(Debug, Deserialize)]
struct ClubsQuery {
    year: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClubDetail {
    club: ClubRecord,
    category: ClubCategory,
    category_label: &'static str,
    personalization_title: &'static str,
    tint_hex: &'static str,
    tint_gradient: String,
    short_description: String,
    highlights: Vec<String>,
}

impl ClubDetail {
    fn new(club: &ClubRecord) -> Self {
        let category = category_for(&club.id);
        let tagline = Some(club.tagline.as_str());
        Self {
            category,
            category_label: category.label(),
            personalization_title: category.personalization_title(),
            tint_hex: tint::tint_hex(&club.id),
            tint_gradient: tint::gradient_css(tint::tint_rgb(&club.id), false),
            short_description: summary::short_description(&club.description),
            highlights: summary::what_we_do_bullets(&club.description, tagline),
            club: club.clone(),
        }
    }
}

async fn health() -> &'static str {
    "ok"
}

/// Unfiltered listings keep the trailing placeholder; year filters never include it.
async fn list_clubs(
    State(state): State<AppState>,
    Query(query): Query<ClubsQuery>,
) -> Json<Vec<ClubRecord>> {
    let clubs = match query.year {
        Some(year) => state.catalog.for_year(year).into_iter().cloned().collect(),
        None => state.catalog.records().to_vec(),
    };
    Json(clubs)
}

async fn featured_clubs(State(state): State<AppState>) -> Json<Vec<ClubRecord>> {
    Json(
        state
            .catalog
            .featured(FEATURED_COUNT)
            .into_iter()
            .cloned()
            .collect(),
    )
}

async fn get_club(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ClubDetail>, ApiError> {
    let club = state.catalog.get(&id).ok_or(ApiError::NotFound)?;
    Ok(Json(ClubDetail::new(club)))
}

async fn join(body: String) -> Result<Json<JoinAck>, ApiError> {
    let submission: JoinSubmission =
        serde_json::from_str(&body).map_err(|_| ApiError::InvalidBody)?;
    submission
        .validate()
        .map_err(|_| ApiError::MissingFields)?;

    info!(
        club_id = submission.club_id.as_deref().unwrap_or_default(),
        student_id = submission.student_id.as_deref().unwrap_or_default(),
        role = submission.role.as_deref(),
        answers = submission.answers.as_ref().map_or(0, |a| a.len()),
        "join submission received"
    );
    Ok(Json(JoinAck::received()))
}
