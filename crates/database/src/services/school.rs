use crate::{
    Error, Result,
    cascade::{self, Table},
    entities::{schools, terms},
    record::Record,
    services::{now, term::TermService},
};
use log::info;
use models::{school::SchoolForm, term::TermForm, validation::Validate};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder,
};
use uuid::Uuid;

pub struct SchoolService;

impl SchoolService {
    /// Saves a new school, failing with [`Error::Validation`] if it is invalid
    pub async fn create(db: &DatabaseConnection, form: SchoolForm) -> Result<schools::Model> {
        form.validate().into_result()?;

        let now = now();
        let school = schools::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(form.name.unwrap_or_default()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await?;

        info!("Created school {} ({})", school.name, school.id);
        Ok(school)
    }

    /// Like [`Self::create`], but returns rejected attributes instead of failing
    pub async fn build(
        db: &DatabaseConnection,
        form: SchoolForm,
    ) -> Result<Record<SchoolForm, schools::Model>> {
        let result = Self::create(db, form.clone()).await;
        Record::from_result(form, result)
    }

    pub async fn find(db: &DatabaseConnection, id: Uuid) -> Result<schools::Model> {
        schools::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(Error::NotFound {
                table: Table::Schools,
                id,
            })
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        change: impl FnOnce(&mut SchoolForm),
    ) -> Result<schools::Model> {
        let school = Self::find(db, id).await?;
        let mut form = school.to_form();
        change(&mut form);
        form.validate().into_result()?;

        let mut active: schools::ActiveModel = school.into();
        active.name = Set(form.name.unwrap_or_default());
        active.updated_at = Set(now());

        Ok(active.update(db).await?)
    }

    /// Refused while the school still has terms
    pub async fn destroy(db: &DatabaseConnection, id: Uuid) -> Result<()> {
        cascade::destroy(db, Table::Schools, id).await
    }

    pub async fn terms(db: &DatabaseConnection, id: Uuid) -> Result<Vec<terms::Model>> {
        let school = Self::find(db, id).await?;

        Ok(school
            .find_related(terms::Entity)
            .order_by_asc(terms::Column::StartsOn)
            .all(db)
            .await?)
    }

    /// Creates a term belonging to the school
    pub async fn add_term(
        db: &DatabaseConnection,
        id: Uuid,
        form: TermForm,
    ) -> Result<terms::Model> {
        let school = Self::find(db, id).await?;

        TermService::create(
            db,
            TermForm {
                school_id: Some(school.id),
                ..form
            },
        )
        .await
    }
}
