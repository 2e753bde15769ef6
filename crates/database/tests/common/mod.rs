#![allow(dead_code)]

use chrono::NaiveDate;
use database::{
    db::{DbConfig, create_connection},
    entities::{courses, schools, terms, users},
    services::{
        course::CourseService, school::SchoolService, term::TermService, user::UserService,
    },
};
use migration::{Migrator, MigratorTrait};
use models::{course::CourseForm, school::SchoolForm, term::TermForm, user::UserForm};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

/// A freshly migrated database living in its own temporary directory
pub struct TestDb {
    pub db: DatabaseConnection,
    _dir: TempDir,
}

pub async fn setup() -> TestDb {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("test.sqlite3").display()
    );

    let db = create_connection(&DbConfig::new(url))
        .await
        .expect("failed to connect to test database");
    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");

    TestDb { db, _dir: dir }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub async fn school(db: &DatabaseConnection) -> schools::Model {
    SchoolService::create(db, SchoolForm::new("Appalachian State University"))
        .await
        .unwrap()
}

pub async fn term(db: &DatabaseConnection, school_id: uuid::Uuid, name: &str) -> terms::Model {
    TermService::create(
        db,
        TermForm::new(school_id, name, date(2016, 1, 11), date(2016, 5, 6)),
    )
    .await
    .unwrap()
}

pub async fn course(db: &DatabaseConnection, name: &str, code: &str) -> courses::Model {
    CourseService::create(db, CourseForm::new(name, code))
        .await
        .unwrap()
}

pub async fn user(db: &DatabaseConnection, first_name: &str, email: &str) -> users::Model {
    UserService::create(db, UserForm::new(first_name, "Tester", email))
        .await
        .unwrap()
}
