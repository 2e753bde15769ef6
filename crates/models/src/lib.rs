pub mod assignment;
pub mod course;
pub mod course_instructor;
pub mod course_student;
pub mod delete_action;
pub mod formats;
pub mod lesson;
pub mod reading;
pub mod school;
pub mod term;
pub mod user;
pub mod validation;
