use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: u32,
    pub description: String,
    pub duration: String,
    pub seq_no: i32,
    pub course_id: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("invalid sortOrder: {}", other)),
        }
    }
}

/// Parameters of a lesson search. Serializes to the `/api/lessons` query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonQuery {
    pub course_id: u32,
    #[serde(default)]
    pub filter: String,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default)]
    pub page_number: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl LessonQuery {
    pub fn new(course_id: u32) -> Self {
        Self {
            course_id,
            filter: String::new(),
            sort_order: SortOrder::Asc,
            page_number: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn page(mut self, page_number: u32, page_size: u32) -> Self {
        self.page_number = page_number;
        self.page_size = page_size;
        self
    }

    /// Index of the first lesson on the requested page.
    pub fn offset(&self) -> usize {
        self.page_number as usize * self.page_size as usize
    }

    /// Query pairs in the order the API documents them. Every parameter is
    /// always present, defaults included.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("courseId", self.course_id.to_string()),
            ("filter", self.filter.clone()),
            ("sortOrder", self.sort_order.to_string()),
            ("pageNumber", self.page_number.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }
}
