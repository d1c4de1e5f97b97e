use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Beginner,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseTitles {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u32,
    pub titles: CourseTitles,
    pub icon_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_list_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_image_url: Option<String>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons_count: Option<u32>,
    pub seq_no: i32,
}

/// Partial update of a [`Course`]. Absent fields are left untouched on save;
/// a present `titles` replaces the stored titles as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titles: Option<CourseTitles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_list_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq_no: Option<i32>,
}

impl CourseChanges {
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            titles: Some(CourseTitles {
                description: description.into(),
                long_description: None,
            }),
            ..Default::default()
        }
    }
}

impl Course {
    /// Applies the top-level fields present in `changes`. Nested objects are
    /// not merged: new `titles` drop a long description they do not repeat.
    pub fn apply(&mut self, changes: CourseChanges) {
        if let Some(titles) = changes.titles {
            self.titles = titles;
        }
        if let Some(icon_url) = changes.icon_url {
            self.icon_url = icon_url;
        }
        if let Some(course_list_icon) = changes.course_list_icon {
            self.course_list_icon = Some(course_list_icon);
        }
        if let Some(uploaded_image_url) = changes.uploaded_image_url {
            self.uploaded_image_url = Some(uploaded_image_url);
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(lessons_count) = changes.lessons_count {
            self.lessons_count = Some(lessons_count);
        }
        if let Some(seq_no) = changes.seq_no {
            self.seq_no = seq_no;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> Course {
        Course {
            id: 12,
            titles: CourseTitles {
                description: "Angular Testing Course".to_string(),
                long_description: Some("In-depth guide".to_string()),
            },
            icon_url: "icon.png".to_string(),
            course_list_icon: None,
            uploaded_image_url: None,
            category: Category::Beginner,
            lessons_count: Some(10),
            seq_no: 0,
        }
    }

    #[test]
    fn apply_replaces_titles_as_a_whole() {
        let mut c = course();
        c.apply(CourseChanges::with_description("Testing Course"));

        assert_eq!(c.titles.description, "Testing Course");
        assert_eq!(c.titles.long_description, None);
        assert_eq!(c.id, 12);
        assert_eq!(c.icon_url, "icon.png");
        assert_eq!(c.lessons_count, Some(10));
    }

    #[test]
    fn apply_leaves_absent_fields_untouched() {
        let mut c = course();
        c.apply(CourseChanges {
            seq_no: Some(7),
            ..Default::default()
        });

        assert_eq!(c.seq_no, 7);
        assert_eq!(c.titles.long_description.as_deref(), Some("In-depth guide"));
        assert_eq!(c.category, Category::Beginner);
    }

    #[test]
    fn titles_without_long_description_deserialize() {
        let changes: CourseChanges =
            serde_json::from_str(r#"{"titles":{"description":"Testing Course"}}"#).unwrap();
        assert_eq!(changes, CourseChanges::with_description("Testing Course"));
    }

    #[test]
    fn changes_serialize_without_absent_fields() {
        let json = serde_json::to_value(CourseChanges::with_description("Testing Course")).unwrap();
        assert_eq!(json, serde_json::json!({ "titles": { "description": "Testing Course" } }));
    }

    #[test]
    fn course_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(course()).unwrap();
        assert_eq!(json["seqNo"], 0);
        assert_eq!(json["iconUrl"], "icon.png");
        assert_eq!(json["category"], "BEGINNER");
        assert_eq!(json["titles"]["longDescription"], "In-depth guide");
    }
}
