use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    static ref HTTP_URL: Regex = Regex::new(r"^https?://").unwrap();
    // Three letters up front, three digits at the end, e.g. "PSY101" or "MAT 210"
    static ref COURSE_CODE: Regex = Regex::new(r"^[A-Za-z]{3}.*\d{3}$").unwrap();
}

pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Only the scheme is checked
pub fn is_http_url(value: &str) -> bool {
    HTTP_URL.is_match(value)
}

pub fn is_course_code(value: &str) -> bool {
    COURSE_CODE.is_match(value)
}
