use axum::Json;
use axum::extract::{Path, Query, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use tracing::debug;

use crate::client::dto::Payload;
use crate::db::repository;
use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/courses", get(list_courses))
        .route("/api/courses/{id}", get(get_course).put(save_course))
        .route("/api/lessons", get(search_lessons))
        .route_layer(middleware::from_fn_with_state(state.clone(), delay_response));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
}

async fn delay_response(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if !state.response_delay.is_zero() {
        tokio::time::sleep(state.response_delay).await;
    }
    next.run(request).await
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list_courses(State(state): State<AppState>) -> Json<Payload<Vec<Course>>> {
    let courses = repository::fetch_courses(&state.db).await;
    debug!("listing {} courses", courses.len());
    Json(Payload::new(courses))
}

async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Course>, AppError> {
    let course = repository::fetch_course(&state.db, id)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(course))
}

async fn save_course(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(changes): Json<CourseChanges>,
) -> Result<Json<Course>, AppError> {
    let course = repository::update_course(&state.db, id, changes)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(course))
}

async fn search_lessons(
    State(state): State<AppState>,
    Query(query): Query<LessonQuery>,
) -> Result<Json<Payload<Vec<Lesson>>>, AppError> {
    let lessons = repository::search_lessons(&state.db, &query)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(Json(Payload::new(lessons)))
}
