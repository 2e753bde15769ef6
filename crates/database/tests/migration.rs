mod common;

use common::{course, setup};
use database::services::course::CourseService;
use migration::{Migrator, MigratorTrait};

#[tokio::test]
async fn test_down_then_up_rebuilds_schema() {
    let test = setup().await;
    let db = &test.db;

    let algebra = course(db, "Algebra", "MAT110").await;

    Migrator::down(db, None).await.unwrap();
    assert!(CourseService::find(db, algebra.id).await.is_err());

    Migrator::up(db, None).await.unwrap();
    assert!(CourseService::find(db, algebra.id).await.is_err());

    // Tables are usable again after the round trip
    let algebra = course(db, "Algebra", "MAT110").await;
    assert_eq!(CourseService::find(db, algebra.id).await.unwrap(), algebra);
}

#[tokio::test]
async fn test_fresh_starts_empty() {
    let test = setup().await;
    let db = &test.db;

    let psychology = course(db, "Psychology", "PSY101").await;
    Migrator::fresh(db).await.unwrap();

    assert!(matches!(
        CourseService::find(db, psychology.id).await,
        Err(database::Error::NotFound { .. })
    ));
    assert!(Migrator::get_pending_migrations(db).await.unwrap().is_empty());
}
