//! The standard catalog: twelve courses and their lessons.

use crate::db::Dataset;
use crate::models::{Category, Course, CourseTitles, Lesson};

const ICON_BASE: &str = "https://s3-us-west-1.amazonaws.com/angular-university/course-images";

// (id, description, long description, icon slug, category, seqNo)
const COURSES: [(u32, &str, &str, &str, Category, i32); 12] = [
    (
        1,
        "Serverless Angular with Firebase Course",
        "Serveless Angular with Firestore, Firebase Storage & Hosting, Firebase Cloud Functions & AngularFire",
        "serverless-angular-small",
        Category::Advanced,
        4,
    ),
    (
        2,
        "Angular Core Deep Dive",
        "A detailed walk-through of the most important part of Angular - the Core and Common modules",
        "angular-core-in-depth-small",
        Category::Beginner,
        1,
    ),
    (
        3,
        "RxJs In Practice Course",
        "Understand the RxJs Observable pattern, learn the RxJs Operators via practical examples",
        "rxjs-in-practice-course",
        Category::Beginner,
        3,
    ),
    (
        4,
        "NgRx (with NgRx Data) - The Complete Guide",
        "Learn the modern Ngrx Ecosystem, including NgRx Data, Store, Effects, Router Store, Ngrx Entity, and Dev Tools.",
        "ngrx-v2",
        Category::Beginner,
        5,
    ),
    (
        5,
        "Angular for Beginners",
        "Establish a solid layer of fundamentals, learn what's under the hood of Angular",
        "angular2-for-beginners-small-v2",
        Category::Beginner,
        6,
    ),
    (
        6,
        "Angular Security Course - Web Security Fundamentals",
        "Learn Web Security Fundamentals and apply them to defend an Angular / Node Application from multiple types of attacks.",
        "security-cover-small-v2",
        Category::Advanced,
        2,
    ),
    (
        7,
        "Angular PWA - Progressive Web Apps Course",
        "Learn Angular Progressive Web Applications, build the future of the Web Today.",
        "angular-pwa-course",
        Category::Advanced,
        7,
    ),
    (
        8,
        "Angular Advanced Library Laboratory: Build Your Own Library",
        "Learn Advanced Angular functionality typically used in Library Development. Advanced Components, Directives, Testing, Npm",
        "advanced_angular-small-v3",
        Category::Advanced,
        8,
    ),
    (
        9,
        "The Complete Typescript Course",
        "Complete Guide to Typescript From Scratch: Learn the language in-depth and use it to build a Node REST API.",
        "typescript-2-small",
        Category::Beginner,
        9,
    ),
    (
        10,
        "Rxjs and Reactive Patterns Angular Architecture Course",
        "Learn the core RxJs Observable Pattern as well and many other Design Patterns for building Reactive Angular Applications.",
        "blue-logo-small",
        Category::Beginner,
        10,
    ),
    (
        11,
        "Angular Material Course",
        "Build Applications with the official Angular Widget Library",
        "material_design",
        Category::Beginner,
        11,
    ),
    (
        12,
        "Angular Testing Course",
        "In-depth guide to Unit Testing and E2E Testing of Angular Applications",
        "angular-testing-small",
        Category::Beginner,
        0,
    ),
];

// (description, duration) in seqNo order
const TESTING_LESSONS: [(&str, &str); 10] = [
    ("Angular Testing Course - Helicopter View", "2:19"),
    ("Setting Up the Angular Testing Development Environment", "3:44"),
    ("Jasmine Fundamentals - Test Suites, Specs and Matchers", "4:51"),
    ("Jasmine Spies - Mocking Dependencies", "5:20"),
    ("Testing Angular Services with the TestBed", "6:10"),
    ("Mocking HTTP Requests in Angular Service Tests", "5:02"),
    ("Testing HTTP Error Handling", "3:58"),
    ("Angular Component Testing - DOM Assertions", "7:05"),
    ("Testing Asynchronous Code with fakeAsync", "6:33"),
    ("Introduction to Cypress End To End Testing", "4:40"),
];

const GENERIC_LESSONS: [(&str, &str); 3] = [
    ("Course Overview", "2:05"),
    ("Setting Up the Development Environment", "4:12"),
    ("Building the First Feature", "7:48"),
];

pub fn courses() -> Vec<Course> {
    COURSES
        .iter()
        .map(|&(id, description, long_description, icon, category, seq_no)| Course {
            id,
            titles: CourseTitles {
                description: description.to_string(),
                long_description: Some(long_description.to_string()),
            },
            icon_url: format!("{}/{}.png", ICON_BASE, icon),
            course_list_icon: None,
            uploaded_image_url: None,
            category,
            lessons_count: Some(lessons_for(id).len() as u32),
            seq_no,
        })
        .collect()
}

fn lessons_for(course_id: u32) -> &'static [(&'static str, &'static str)] {
    if course_id == 12 {
        &TESTING_LESSONS
    } else {
        &GENERIC_LESSONS
    }
}

pub fn lessons() -> Vec<Lesson> {
    let mut next_id = 1;
    let mut lessons = Vec::new();

    // Course 12 first so its lessons get ids 1..=10.
    let mut order: Vec<u32> = COURSES.iter().map(|c| c.0).collect();
    order.sort_by_key(|&id| (id != 12, id));

    for course_id in order {
        for (seq_no, (description, duration)) in lessons_for(course_id).iter().enumerate() {
            lessons.push(Lesson {
                id: next_id,
                description: description.to_string(),
                duration: duration.to_string(),
                seq_no: seq_no as i32 + 1,
                course_id,
            });
            next_id += 1;
        }
    }
    lessons
}

pub fn dataset() -> Dataset {
    Dataset::new(courses(), lessons())
}

/// The lessons of one course in seqNo order.
pub fn find_lessons_for_course(course_id: u32) -> Vec<Lesson> {
    let mut found: Vec<Lesson> = lessons()
        .into_iter()
        .filter(|l| l.course_id == course_id)
        .collect();
    found.sort_by_key(|l| l.seq_no);
    found
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_lesson_references_an_existing_course() {
        let ids: HashSet<u32> = courses().iter().map(|c| c.id).collect();
        assert!(lessons().iter().all(|l| ids.contains(&l.course_id)));
    }

    #[test]
    fn ids_are_unique() {
        let lessons = lessons();
        let ids: HashSet<u32> = lessons.iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), lessons.len());
        assert_eq!(courses().len(), 12);
    }

    #[test]
    fn lessons_count_matches_lessons() {
        for course in courses() {
            assert_eq!(
                course.lessons_count,
                Some(find_lessons_for_course(course.id).len() as u32)
            );
        }
    }
}
