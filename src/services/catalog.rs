use std::sync::Arc;

use tracing::info;

use crate::client::CoursesService;
use crate::error::ServiceError;
use crate::models::{Category, Course};
use crate::sort::sort_courses_by_seq_no;

/// Courses split by category, each list in seqNo order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseTabs {
    pub beginner: Vec<Course>,
    pub advanced: Vec<Course>,
}

impl CourseTabs {
    pub fn from_courses(courses: &[Course]) -> Self {
        let sorted = sort_courses_by_seq_no(courses);
        Self {
            beginner: filter_by_category(&sorted, Category::Beginner),
            advanced: filter_by_category(&sorted, Category::Advanced),
        }
    }

    /// Categories with at least one course, beginner first.
    pub fn visible_tabs(&self) -> Vec<Category> {
        let mut tabs = Vec::with_capacity(2);
        if !self.beginner.is_empty() {
            tabs.push(Category::Beginner);
        }
        if !self.advanced.is_empty() {
            tabs.push(Category::Advanced);
        }
        tabs
    }

    pub fn courses(&self, category: Category) -> &[Course] {
        match category {
            Category::Beginner => &self.beginner,
            Category::Advanced => &self.advanced,
        }
    }
}

pub fn filter_by_category(courses: &[Course], category: Category) -> Vec<Course> {
    courses
        .iter()
        .filter(|c| c.category == category)
        .cloned()
        .collect()
}

pub struct CatalogService {
    courses: Arc<dyn CoursesService>,
}

impl CatalogService {
    pub fn new(courses: Arc<dyn CoursesService>) -> Self {
        Self { courses }
    }

    pub async fn load_tabs(&self) -> Result<CourseTabs, ServiceError> {
        let courses = self.courses.find_all_courses().await?;
        let tabs = CourseTabs::from_courses(&courses);
        info!(
            "Loaded catalog: {} beginner, {} advanced",
            tabs.beginner.len(),
            tabs.advanced.len()
        );
        Ok(tabs)
    }
}
