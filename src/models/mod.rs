pub mod course;
pub mod lesson;

pub use course::{Category, Course, CourseChanges, CourseTitles};
pub use lesson::{Lesson, LessonQuery, SortOrder};
