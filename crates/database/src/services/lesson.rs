use crate::{
    Error, Result,
    cascade::{self, Table},
    entities::{assignments, courses, lessons, readings},
    record::Record,
    services::{check_reference, now, reading::ReadingService},
};
use log::info;
use models::{lesson::LessonForm, reading::ReadingForm, validation::Validate};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseConnection, EntityTrait,
    ModelTrait, QueryOrder,
};
use uuid::Uuid;

pub struct LessonService;

impl LessonService {
    /// Saves a new lesson, failing with [`Error::Validation`] if it is invalid
    pub async fn create(db: &DatabaseConnection, form: LessonForm) -> Result<lessons::Model> {
        Self::validate(db, &form).await?;

        let now = now();
        let lesson = lessons::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(form.course_id),
            name: Set(form.name.unwrap_or_default()),
            description: Set(form.description),
            outline: Set(form.outline),
            lead_in_question: Set(form.lead_in_question),
            pre_class_assignment_id: Set(form.pre_class_assignment_id),
            in_class_assignment_id: Set(form.in_class_assignment_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await?;

        info!("Created lesson {} ({})", lesson.name, lesson.id);
        Ok(lesson)
    }

    /// Like [`Self::create`], but returns rejected attributes instead of failing
    pub async fn build(
        db: &DatabaseConnection,
        form: LessonForm,
    ) -> Result<Record<LessonForm, lessons::Model>> {
        let result = Self::create(db, form.clone()).await;
        Record::from_result(form, result)
    }

    pub async fn find(db: &DatabaseConnection, id: Uuid) -> Result<lessons::Model> {
        lessons::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(Error::NotFound {
                table: Table::Lessons,
                id,
            })
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        change: impl FnOnce(&mut LessonForm),
    ) -> Result<lessons::Model> {
        let lesson = Self::find(db, id).await?;
        let mut form = lesson.to_form();
        change(&mut form);
        Self::validate(db, &form).await?;

        let mut active: lessons::ActiveModel = lesson.into();
        active.course_id = Set(form.course_id);
        active.name = Set(form.name.unwrap_or_default());
        active.description = Set(form.description);
        active.outline = Set(form.outline);
        active.lead_in_question = Set(form.lead_in_question);
        active.pre_class_assignment_id = Set(form.pre_class_assignment_id);
        active.in_class_assignment_id = Set(form.in_class_assignment_id);
        active.updated_at = Set(now());

        Ok(active.update(db).await?)
    }

    /// Destroys the lesson together with its readings
    pub async fn destroy(db: &DatabaseConnection, id: Uuid) -> Result<()> {
        cascade::destroy(db, Table::Lessons, id).await
    }

    pub async fn course(db: &DatabaseConnection, id: Uuid) -> Result<Option<courses::Model>> {
        let lesson = Self::find(db, id).await?;
        Ok(lesson.find_related(courses::Entity).one(db).await?)
    }

    /// Readings in the order they should be read
    pub async fn readings(db: &DatabaseConnection, id: Uuid) -> Result<Vec<readings::Model>> {
        let lesson = Self::find(db, id).await?;

        Ok(lesson
            .find_related(readings::Entity)
            .order_by_asc(readings::Column::OrderNumber)
            .order_by_asc(readings::Column::CreatedAt)
            .all(db)
            .await?)
    }

    /// Saves `form` as a reading of the lesson
    pub async fn add_reading(
        db: &DatabaseConnection,
        id: Uuid,
        form: ReadingForm,
    ) -> Result<readings::Model> {
        let lesson = Self::find(db, id).await?;
        ReadingService::create(db, form.for_lesson(lesson.id)).await
    }

    pub async fn pre_class_assignment(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<assignments::Model>> {
        let lesson = Self::find(db, id).await?;
        Ok(lesson.find_linked(lessons::PreClassAssignment).one(db).await?)
    }

    pub async fn in_class_assignment(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<assignments::Model>> {
        let lesson = Self::find(db, id).await?;
        Ok(lesson.find_linked(lessons::InClassAssignment).one(db).await?)
    }

    /// Pass `None` to detach the current one
    pub async fn set_pre_class_assignment(
        db: &DatabaseConnection,
        id: Uuid,
        assignment_id: Option<Uuid>,
    ) -> Result<lessons::Model> {
        Self::update(db, id, |lesson| {
            lesson.pre_class_assignment_id = assignment_id;
        })
        .await
    }

    /// Pass `None` to detach the current one
    pub async fn set_in_class_assignment(
        db: &DatabaseConnection,
        id: Uuid,
        assignment_id: Option<Uuid>,
    ) -> Result<lessons::Model> {
        Self::update(db, id, |lesson| {
            lesson.in_class_assignment_id = assignment_id;
        })
        .await
    }

    async fn validate<C: ConnectionTrait>(db: &C, form: &LessonForm) -> Result<()> {
        let mut errors = form.validate();
        check_reference::<courses::Entity, _>(db, &mut errors, "course_id", form.course_id).await?;
        check_reference::<assignments::Entity, _>(
            db,
            &mut errors,
            "pre_class_assignment_id",
            form.pre_class_assignment_id,
        )
        .await?;
        check_reference::<assignments::Entity, _>(
            db,
            &mut errors,
            "in_class_assignment_id",
            form.in_class_assignment_id,
        )
        .await?;

        Ok(errors.into_result()?)
    }
}
