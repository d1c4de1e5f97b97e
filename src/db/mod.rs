pub mod repository;
pub mod seed;

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Course, Lesson};

/// Shared handle to the course data store.
pub type Db = Arc<RwLock<Dataset>>;

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub courses: BTreeMap<u32, Course>,
    pub lessons: BTreeMap<u32, Lesson>,
}

impl Dataset {
    pub fn new(courses: Vec<Course>, lessons: Vec<Lesson>) -> Self {
        Self {
            courses: courses.into_iter().map(|c| (c.id, c)).collect(),
            lessons: lessons.into_iter().map(|l| (l.id, l)).collect(),
        }
    }

    pub fn into_db(self) -> Db {
        Arc::new(RwLock::new(self))
    }
}

/// A store seeded with the standard course catalog.
pub fn seeded() -> Db {
    seed::dataset().into_db()
}
