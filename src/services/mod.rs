pub mod catalog;
pub mod debounce;
pub mod lessons;

pub use catalog::{CatalogService, CourseTabs, filter_by_category};
pub use debounce::debounce_filter;
pub use lessons::LessonsPager;
