use tracing::debug;

use crate::db::Db;
use crate::models::{Course, CourseChanges, Lesson, LessonQuery, SortOrder};

pub async fn fetch_courses(db: &Db) -> Vec<Course> {
    let data = db.read().await;
    data.courses.values().cloned().collect()
}

pub async fn fetch_course(db: &Db, id: u32) -> Option<Course> {
    let data = db.read().await;
    data.courses.get(&id).cloned()
}

/// Merges `changes` into the stored course and returns the result.
/// `None` if no course has this id.
pub async fn update_course(db: &Db, id: u32, changes: CourseChanges) -> Option<Course> {
    let mut data = db.write().await;
    let current = data.courses.get_mut(&id)?;
    current.apply(changes);
    debug!("updated course {}", id);
    Some(current.clone())
}

/// One page of the lessons of `query.course_id`. `None` if the course does not exist.
pub async fn search_lessons(db: &Db, query: &LessonQuery) -> Option<Vec<Lesson>> {
    let data = db.read().await;
    if !data.courses.contains_key(&query.course_id) {
        return None;
    }

    let mut lessons: Vec<Lesson> = data
        .lessons
        .values()
        .filter(|l| l.course_id == query.course_id)
        .filter(|l| query.filter.is_empty() || l.description.contains(&query.filter))
        .cloned()
        .collect();

    lessons.sort_by_key(|l| l.seq_no);
    if query.sort_order == SortOrder::Desc {
        lessons.reverse();
    }

    Some(
        lessons
            .into_iter()
            .skip(query.offset())
            .take(query.page_size as usize)
            .collect(),
    )
}
