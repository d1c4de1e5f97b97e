use std::cmp::Ordering;

use crate::models::Course;

pub fn compare_by_seq_no(a: &Course, b: &Course) -> Ordering {
    a.seq_no.cmp(&b.seq_no)
}

/// Returns the courses ordered by ascending `seq_no`. Courses with equal
/// `seq_no` keep their input order. The input is not modified.
pub fn sort_courses_by_seq_no(courses: &[Course]) -> Vec<Course> {
    let mut sorted = courses.to_vec();
    sorted.sort_by(compare_by_seq_no);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed;

    fn with_seq(id: u32, seq_no: i32) -> Course {
        let mut course = seed::courses()[0].clone();
        course.id = id;
        course.seq_no = seq_no;
        course
    }

    #[test]
    fn output_is_non_decreasing_and_same_length() {
        let input = seed::courses();
        let sorted = sort_courses_by_seq_no(&input);

        assert_eq!(sorted.len(), input.len());
        assert!(sorted.windows(2).all(|w| w[0].seq_no <= w[1].seq_no));
    }

    #[test]
    fn sorting_twice_equals_sorting_once() {
        let once = sort_courses_by_seq_no(&seed::courses());
        let twice = sort_courses_by_seq_no(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn equal_keys_keep_arrival_order() {
        let input = vec![with_seq(1, 5), with_seq(2, 1), with_seq(3, 5), with_seq(4, 1)];
        let ids: Vec<u32> = sort_courses_by_seq_no(&input).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn input_is_left_untouched() {
        let input = vec![with_seq(1, 3), with_seq(2, 2), with_seq(3, 1)];
        let copy = input.clone();
        let _ = sort_courses_by_seq_no(&input);
        assert_eq!(input, copy);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(sort_courses_by_seq_no(&[]).is_empty());
    }
}
