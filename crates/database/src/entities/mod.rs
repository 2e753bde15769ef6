pub mod assignments;
pub mod course_instructors;
pub mod course_students;
pub mod courses;
pub mod lessons;
pub mod readings;
pub mod schools;
pub mod terms;
pub mod users;
