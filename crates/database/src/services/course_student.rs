use crate::{
    Error, Result,
    cascade::{self, Table},
    entities::{course_students, courses, users},
    record::Record,
    services::{check_reference, now},
};
use log::info;
use models::{course_student::CourseStudentForm, validation::Validate};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseConnection, EntityTrait,
    ModelTrait,
};
use uuid::Uuid;

pub struct CourseStudentService;

impl CourseStudentService {
    /// Enrolls a student, failing with [`Error::Validation`] if no student is given
    pub async fn create(
        db: &DatabaseConnection,
        form: CourseStudentForm,
    ) -> Result<course_students::Model> {
        Self::validate(db, &form).await?;

        let now = now();
        let course_student = course_students::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(form.course_id),
            student_id: Set(form.student_id.unwrap_or_default()),
            approved: Set(form.approved),
            final_grade: Set(form.final_grade),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await?;

        info!("Created course student {}", course_student.id);
        Ok(course_student)
    }

    pub async fn build(
        db: &DatabaseConnection,
        form: CourseStudentForm,
    ) -> Result<Record<CourseStudentForm, course_students::Model>> {
        let result = Self::create(db, form.clone()).await;
        Record::from_result(form, result)
    }

    pub async fn find(db: &DatabaseConnection, id: Uuid) -> Result<course_students::Model> {
        course_students::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(Error::NotFound {
                table: Table::CourseStudents,
                id,
            })
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        change: impl FnOnce(&mut CourseStudentForm),
    ) -> Result<course_students::Model> {
        let course_student = Self::find(db, id).await?;
        let mut form = course_student.to_form();
        change(&mut form);
        Self::validate(db, &form).await?;

        let mut active: course_students::ActiveModel = course_student.into();
        active.course_id = Set(form.course_id);
        active.student_id = Set(form.student_id.unwrap_or_default());
        active.approved = Set(form.approved);
        active.final_grade = Set(form.final_grade);
        active.updated_at = Set(now());

        Ok(active.update(db).await?)
    }

    pub async fn destroy(db: &DatabaseConnection, id: Uuid) -> Result<()> {
        cascade::destroy(db, Table::CourseStudents, id).await
    }

    pub async fn course(db: &DatabaseConnection, id: Uuid) -> Result<Option<courses::Model>> {
        let course_student = Self::find(db, id).await?;
        Ok(course_student.find_related(courses::Entity).one(db).await?)
    }

    pub async fn student(db: &DatabaseConnection, id: Uuid) -> Result<users::Model> {
        let course_student = Self::find(db, id).await?;

        course_student
            .find_related(users::Entity)
            .one(db)
            .await?
            .ok_or(Error::NotFound {
                table: Table::Users,
                id: course_student.student_id,
            })
    }

    async fn validate<C: ConnectionTrait>(db: &C, form: &CourseStudentForm) -> Result<()> {
        let mut errors = form.validate();
        check_reference::<courses::Entity, _>(db, &mut errors, "course_id", form.course_id).await?;
        check_reference::<users::Entity, _>(db, &mut errors, "student_id", form.student_id).await?;

        Ok(errors.into_result()?)
    }
}
