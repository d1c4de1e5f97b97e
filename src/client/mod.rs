pub mod dto;
pub mod memory;

use std::env;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::{AppError, ServiceError};
use crate::models::{Course, CourseChanges, Lesson, LessonQuery};

pub use memory::InMemoryCoursesService;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:9000";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: Url,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::Config(format!("invalid base url {}: {}", base_url, e)))?;
        Ok(Self { base_url })
    }

    pub fn new_from_env() -> Result<Self, AppError> {
        Self::parse(env::var("COURSES_API_URL").ok().as_deref())
    }

    fn parse(base_url: Option<&str>) -> Result<Self, AppError> {
        Self::new(base_url.unwrap_or(DEFAULT_API_URL))
    }
}

/// Access to the course catalog. Every call is a single request that
/// resolves to exactly one value or one error.
#[async_trait]
pub trait CoursesService: Send + Sync {
    async fn find_all_courses(&self) -> Result<Vec<Course>, ServiceError>;
    async fn find_course_by_id(&self, id: u32) -> Result<Course, ServiceError>;
    async fn save_course(&self, id: u32, changes: &CourseChanges) -> Result<Course, ServiceError>;
    async fn find_lessons(&self, query: &LessonQuery) -> Result<Vec<Lesson>, ServiceError>;
}

pub struct HttpCoursesService {
    client: Client,
    config: ClientConfig,
}

impl HttpCoursesService {
    pub fn new(config: ClientConfig) -> Result<Self, ServiceError> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> Url {
        let mut url = self.config.base_url.clone();
        let joined = format!("{}{}", url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ServiceError> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("courses API error {}: {}", status, body);
            return Err(ServiceError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let body_text = response.text().await?;
        serde_json::from_str::<T>(&body_text).map_err(|e| {
            error!("Failed to parse courses API response: {}", e);
            ServiceError::Decode(e)
        })
    }
}

#[async_trait]
impl CoursesService for HttpCoursesService {
    async fn find_all_courses(&self) -> Result<Vec<Course>, ServiceError> {
        let url = self.url("/api/courses");
        debug!("GET {}", url);

        let res: dto::Payload<Vec<Course>> = self.send(self.client.get(url)).await?;
        Ok(res.payload)
    }

    async fn find_course_by_id(&self, id: u32) -> Result<Course, ServiceError> {
        let url = self.url(&format!("/api/courses/{}", id));
        debug!("GET {}", url);

        self.send(self.client.get(url)).await.map_err(|e| match e {
            ServiceError::Transport { status, body } => ServiceError::from_status(status, body),
            other => other,
        })
    }

    async fn save_course(&self, id: u32, changes: &CourseChanges) -> Result<Course, ServiceError> {
        let url = self.url(&format!("/api/courses/{}", id));
        debug!("PUT {}", url);

        self.send(self.client.put(url).json(changes)).await
    }

    async fn find_lessons(&self, query: &LessonQuery) -> Result<Vec<Lesson>, ServiceError> {
        let mut url = self.url("/api/lessons");
        url.query_pairs_mut().extend_pairs(query.to_pairs());
        debug!("GET {}", url);

        let res: dto::Payload<Vec<Lesson>> = self.send(self.client.get(url)).await?;
        Ok(res.payload)
    }
}
