use crate::{
    Error, Result,
    cascade::{self, Table},
    entities::{lessons, readings},
    record::Record,
    services::{check_reference, now},
};
use log::info;
use models::{reading::ReadingForm, validation::Validate};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseConnection, EntityTrait,
    ModelTrait,
};
use uuid::Uuid;

pub struct ReadingService;

impl ReadingService {
    /// Saves a new reading, failing with [`Error::Validation`] if it is invalid
    pub async fn create(db: &DatabaseConnection, form: ReadingForm) -> Result<readings::Model> {
        Self::validate(db, &form).await?;

        let now = now();
        let reading = readings::ActiveModel {
            id: Set(Uuid::new_v4()),
            lesson_id: Set(form.lesson_id.unwrap_or_default()),
            caption: Set(form.caption),
            url: Set(form.url.unwrap_or_default()),
            order_number: Set(form.order_number.unwrap_or_default()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await?;

        info!("Created reading {} ({})", reading.url, reading.id);
        Ok(reading)
    }

    /// Like [`Self::create`], but returns rejected attributes instead of failing
    pub async fn build(
        db: &DatabaseConnection,
        form: ReadingForm,
    ) -> Result<Record<ReadingForm, readings::Model>> {
        let result = Self::create(db, form.clone()).await;
        Record::from_result(form, result)
    }

    pub async fn find(db: &DatabaseConnection, id: Uuid) -> Result<readings::Model> {
        readings::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(Error::NotFound {
                table: Table::Readings,
                id,
            })
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        change: impl FnOnce(&mut ReadingForm),
    ) -> Result<readings::Model> {
        let reading = Self::find(db, id).await?;
        let mut form = reading.to_form();
        change(&mut form);
        Self::validate(db, &form).await?;

        let mut active: readings::ActiveModel = reading.into();
        active.lesson_id = Set(form.lesson_id.unwrap_or_default());
        active.caption = Set(form.caption);
        active.url = Set(form.url.unwrap_or_default());
        active.order_number = Set(form.order_number.unwrap_or_default());
        active.updated_at = Set(now());

        Ok(active.update(db).await?)
    }

    pub async fn destroy(db: &DatabaseConnection, id: Uuid) -> Result<()> {
        cascade::destroy(db, Table::Readings, id).await
    }

    pub async fn lesson(db: &DatabaseConnection, id: Uuid) -> Result<lessons::Model> {
        let reading = Self::find(db, id).await?;

        reading
            .find_related(lessons::Entity)
            .one(db)
            .await?
            .ok_or(Error::NotFound {
                table: Table::Lessons,
                id: reading.lesson_id,
            })
    }

    async fn validate<C: ConnectionTrait>(db: &C, form: &ReadingForm) -> Result<()> {
        let mut errors = form.validate();
        check_reference::<lessons::Entity, _>(db, &mut errors, "lesson_id", form.lesson_id).await?;

        Ok(errors.into_result()?)
    }
}
