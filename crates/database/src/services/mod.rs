use crate::Result;
use chrono::Utc;
use models::validation::{ValidationErrors, ViolationKind};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, PrimaryKeyTrait, prelude::DateTime};
use uuid::Uuid;

pub mod assignment;
pub mod course;
pub mod course_instructor;
pub mod course_student;
pub mod lesson;
pub mod reading;
pub mod school;
pub mod term;
pub mod user;

/// Value written to `created_at` / `updated_at`
pub(crate) fn now() -> DateTime {
    Utc::now().naive_utc()
}

/// Records a violation on `field` when it names a row of `E` that does not exist
pub(crate) async fn check_reference<E, C>(
    db: &C,
    errors: &mut ValidationErrors,
    field: &'static str,
    id: Option<Uuid>,
) -> Result<()>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>,
    E::Model: Sync + 'static,
    C: ConnectionTrait,
{
    if let Some(id) = id
        && E::find_by_id(id).count(db).await? == 0
    {
        errors.add(field, ViolationKind::Missing);
    }

    Ok(())
}
