use crate::{
    Error, Result,
    cascade::{self, Table},
    entities::{course_instructors, courses, users},
    record::Record,
    services::{check_reference, now},
};
use log::info;
use models::{course_instructor::CourseInstructorForm, validation::Validate};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseConnection, EntityTrait,
    ModelTrait,
};
use uuid::Uuid;

pub struct CourseInstructorService;

impl CourseInstructorService {
    pub async fn create(
        db: &DatabaseConnection,
        form: CourseInstructorForm,
    ) -> Result<course_instructors::Model> {
        Self::validate(db, &form).await?;

        let now = now();
        let course_instructor = course_instructors::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(form.course_id),
            instructor_id: Set(form.instructor_id),
            primary: Set(form.primary),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await?;

        info!("Created course instructor {}", course_instructor.id);
        Ok(course_instructor)
    }

    pub async fn build(
        db: &DatabaseConnection,
        form: CourseInstructorForm,
    ) -> Result<Record<CourseInstructorForm, course_instructors::Model>> {
        let result = Self::create(db, form.clone()).await;
        Record::from_result(form, result)
    }

    pub async fn find(db: &DatabaseConnection, id: Uuid) -> Result<course_instructors::Model> {
        course_instructors::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(Error::NotFound {
                table: Table::CourseInstructors,
                id,
            })
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        change: impl FnOnce(&mut CourseInstructorForm),
    ) -> Result<course_instructors::Model> {
        let course_instructor = Self::find(db, id).await?;
        let mut form = course_instructor.to_form();
        change(&mut form);
        Self::validate(db, &form).await?;

        let mut active: course_instructors::ActiveModel = course_instructor.into();
        active.course_id = Set(form.course_id);
        active.instructor_id = Set(form.instructor_id);
        active.primary = Set(form.primary);
        active.updated_at = Set(now());

        Ok(active.update(db).await?)
    }

    pub async fn destroy(db: &DatabaseConnection, id: Uuid) -> Result<()> {
        cascade::destroy(db, Table::CourseInstructors, id).await
    }

    pub async fn course(db: &DatabaseConnection, id: Uuid) -> Result<Option<courses::Model>> {
        let course_instructor = Self::find(db, id).await?;
        Ok(course_instructor.find_related(courses::Entity).one(db).await?)
    }

    pub async fn instructor(db: &DatabaseConnection, id: Uuid) -> Result<Option<users::Model>> {
        let course_instructor = Self::find(db, id).await?;
        Ok(course_instructor.find_related(users::Entity).one(db).await?)
    }

    async fn validate<C: ConnectionTrait>(db: &C, form: &CourseInstructorForm) -> Result<()> {
        let mut errors = form.validate();
        check_reference::<courses::Entity, _>(db, &mut errors, "course_id", form.course_id).await?;
        check_reference::<users::Entity, _>(db, &mut errors, "instructor_id", form.instructor_id)
            .await?;

        Ok(errors.into_result()?)
    }
}
