use std::sync::Arc;

use tracing::debug;

use crate::client::CoursesService;
use crate::error::ServiceError;
use crate::models::{Lesson, LessonQuery, SortOrder};

/// Paging state for the lessons of one course.
pub struct LessonsPager {
    courses: Arc<dyn CoursesService>,
    query: LessonQuery,
}

impl LessonsPager {
    pub fn new(courses: Arc<dyn CoursesService>, course_id: u32) -> Self {
        Self {
            courses,
            query: LessonQuery::new(course_id),
        }
    }

    pub fn query(&self) -> &LessonQuery {
        &self.query
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.query.page_size = page_size;
        self.query.page_number = 0;
    }

    /// A new filter starts again from the first page.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.query.filter = filter.into();
        self.query.page_number = 0;
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.query.sort_order = sort_order;
        self.query.page_number = 0;
    }

    pub fn next_page(&mut self) {
        self.query.page_number = self.query.page_number.saturating_add(1);
    }

    pub fn previous_page(&mut self) {
        self.query.page_number = self.query.page_number.saturating_sub(1);
    }

    pub fn go_to_page(&mut self, page_number: u32) {
        self.query.page_number = page_number;
    }

    pub async fn load(&self) -> Result<Vec<Lesson>, ServiceError> {
        debug!("loading lessons {:?}", self.query);
        self.courses.find_lessons(&self.query).await
    }
}
