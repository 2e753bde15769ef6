use crate::{
    Error, Result,
    cascade::{self, Table},
    entities::{courses, schools, terms},
    record::Record,
    services::{check_reference, course::CourseService, now},
};
use log::info;
use models::{term::TermForm, validation::Validate};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseConnection, EntityTrait,
    ModelTrait, QueryOrder,
};
use uuid::Uuid;

pub struct TermService;

impl TermService {
    /// Saves a new term, failing with [`Error::Validation`] if it is invalid
    pub async fn create(db: &DatabaseConnection, form: TermForm) -> Result<terms::Model> {
        Self::validate(db, &form).await?;

        let now = now();
        let term = terms::ActiveModel {
            id: Set(Uuid::new_v4()),
            school_id: Set(form.school_id.unwrap_or_default()),
            name: Set(form.name.unwrap_or_default()),
            starts_on: Set(form.starts_on.unwrap_or_default()),
            ends_on: Set(form.ends_on.unwrap_or_default()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await?;

        info!("Created term {} ({})", term.name, term.id);
        Ok(term)
    }

    /// Like [`Self::create`], but returns rejected attributes instead of failing
    pub async fn build(
        db: &DatabaseConnection,
        form: TermForm,
    ) -> Result<Record<TermForm, terms::Model>> {
        let result = Self::create(db, form.clone()).await;
        Record::from_result(form, result)
    }

    pub async fn find(db: &DatabaseConnection, id: Uuid) -> Result<terms::Model> {
        terms::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(Error::NotFound {
                table: Table::Terms,
                id,
            })
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        change: impl FnOnce(&mut TermForm),
    ) -> Result<terms::Model> {
        let term = Self::find(db, id).await?;
        let mut form = term.to_form();
        change(&mut form);
        Self::validate(db, &form).await?;

        let mut active: terms::ActiveModel = term.into();
        active.school_id = Set(form.school_id.unwrap_or_default());
        active.name = Set(form.name.unwrap_or_default());
        active.starts_on = Set(form.starts_on.unwrap_or_default());
        active.ends_on = Set(form.ends_on.unwrap_or_default());
        active.updated_at = Set(now());

        Ok(active.update(db).await?)
    }

    /// Refused while any course is scheduled in the term
    pub async fn destroy(db: &DatabaseConnection, id: Uuid) -> Result<()> {
        cascade::destroy(db, Table::Terms, id).await
    }

    pub async fn school(db: &DatabaseConnection, id: Uuid) -> Result<schools::Model> {
        let term = Self::find(db, id).await?;

        term.find_related(schools::Entity)
            .one(db)
            .await?
            .ok_or(Error::NotFound {
                table: Table::Schools,
                id: term.school_id,
            })
    }

    pub async fn courses(db: &DatabaseConnection, id: Uuid) -> Result<Vec<courses::Model>> {
        let term = Self::find(db, id).await?;

        Ok(term
            .find_related(courses::Entity)
            .order_by_asc(courses::Column::CourseCode)
            .all(db)
            .await?)
    }

    /// Moves an existing course into the term
    pub async fn assign_course(
        db: &DatabaseConnection,
        id: Uuid,
        course_id: Uuid,
    ) -> Result<courses::Model> {
        let term = Self::find(db, id).await?;
        CourseService::update(db, course_id, |course| course.term_id = Some(term.id)).await
    }

    async fn validate<C: ConnectionTrait>(db: &C, form: &TermForm) -> Result<()> {
        let mut errors = form.validate();
        check_reference::<schools::Entity, _>(db, &mut errors, "school_id", form.school_id).await?;

        Ok(errors.into_result()?)
    }
}
