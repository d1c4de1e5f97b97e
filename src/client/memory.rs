use async_trait::async_trait;
use axum::http::StatusCode;

use crate::client::CoursesService;
use crate::db::{Db, repository};
use crate::error::{ErrorResponse, ServiceError};
use crate::models::{Course, CourseChanges, Lesson, LessonQuery};

/// Answers from an in-process store with the same semantics as the HTTP API.
#[derive(Clone)]
pub struct InMemoryCoursesService {
    db: Db,
}

impl InMemoryCoursesService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

fn not_found_body() -> String {
    serde_json::to_string(&ErrorResponse {
        error: StatusCode::NOT_FOUND.to_string(),
        message: "Not Found".to_string(),
    })
    .unwrap_or_default()
}

fn missing() -> ServiceError {
    ServiceError::Transport {
        status: StatusCode::NOT_FOUND.as_u16(),
        body: not_found_body(),
    }
}

#[async_trait]
impl CoursesService for InMemoryCoursesService {
    async fn find_all_courses(&self) -> Result<Vec<Course>, ServiceError> {
        Ok(repository::fetch_courses(&self.db).await)
    }

    async fn find_course_by_id(&self, id: u32) -> Result<Course, ServiceError> {
        repository::fetch_course(&self.db, id)
            .await
            .ok_or_else(|| ServiceError::NotFound { body: not_found_body() })
    }

    async fn save_course(&self, id: u32, changes: &CourseChanges) -> Result<Course, ServiceError> {
        repository::update_course(&self.db, id, changes.clone())
            .await
            .ok_or_else(missing)
    }

    async fn find_lessons(&self, query: &LessonQuery) -> Result<Vec<Lesson>, ServiceError> {
        repository::search_lessons(&self.db, query)
            .await
            .ok_or_else(missing)
    }
}
