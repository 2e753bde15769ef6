use crate::{
    Error, Result,
    cascade::{self, Table},
    entities::{courses, users},
    record::Record,
    services::now,
};
use log::info;
use models::{
    user::UserForm,
    validation::{Validate, ViolationKind},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct UserService;

impl UserService {
    /// Saves a new user, failing with [`Error::Validation`] if it is invalid
    pub async fn create(db: &DatabaseConnection, form: UserForm) -> Result<users::Model> {
        let form = form.normalized();
        Self::validate(db, &form, None).await?;

        let now = now();
        let user = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(form.first_name.unwrap_or_default()),
            last_name: Set(form.last_name.unwrap_or_default()),
            email: Set(form.email.unwrap_or_default()),
            photo_url: Set(form.photo_url),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await?;

        info!("Created user {} <{}>", user.full_name(), user.email);
        Ok(user)
    }

    /// Like [`Self::create`], but returns rejected attributes instead of failing
    pub async fn build(
        db: &DatabaseConnection,
        form: UserForm,
    ) -> Result<Record<UserForm, users::Model>> {
        let result = Self::create(db, form.clone()).await;
        Record::from_result(form, result)
    }

    pub async fn find(db: &DatabaseConnection, id: Uuid) -> Result<users::Model> {
        users::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(Error::NotFound {
                table: Table::Users,
                id,
            })
    }

    /// Matches regardless of case
    pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<users::Model>> {
        Ok(users::Entity::find()
            .filter(users::Column::Email.eq(email.trim().to_lowercase()))
            .one(db)
            .await?)
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        change: impl FnOnce(&mut UserForm),
    ) -> Result<users::Model> {
        let user = Self::find(db, id).await?;
        let mut form = user.to_form();
        change(&mut form);
        let form = form.normalized();
        Self::validate(db, &form, Some(id)).await?;

        let mut active: users::ActiveModel = user.into();
        active.first_name = Set(form.first_name.unwrap_or_default());
        active.last_name = Set(form.last_name.unwrap_or_default());
        active.email = Set(form.email.unwrap_or_default());
        active.photo_url = Set(form.photo_url);
        active.updated_at = Set(now());

        Ok(active.update(db).await?)
    }

    /// Refused while the user teaches or attends any course
    pub async fn destroy(db: &DatabaseConnection, id: Uuid) -> Result<()> {
        cascade::destroy(db, Table::Users, id).await
    }

    pub async fn courses_taught(db: &DatabaseConnection, id: Uuid) -> Result<Vec<courses::Model>> {
        let user = Self::find(db, id).await?;

        Ok(user
            .find_linked(users::TaughtCourses)
            .order_by_asc(courses::Column::CourseCode)
            .all(db)
            .await?)
    }

    pub async fn courses_enrolled(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Vec<courses::Model>> {
        let user = Self::find(db, id).await?;

        Ok(user
            .find_linked(users::EnrolledCourses)
            .order_by_asc(courses::Column::CourseCode)
            .all(db)
            .await?)
    }

    async fn validate<C: ConnectionTrait>(db: &C, form: &UserForm, id: Option<Uuid>) -> Result<()> {
        let mut errors = form.validate();

        if let Some(email) = form.email.as_deref()
            && !errors.has_field("email")
        {
            let mut query = users::Entity::find().filter(users::Column::Email.eq(email));
            if let Some(id) = id {
                query = query.filter(users::Column::Id.ne(id));
            }

            if query.count(db).await? > 0 {
                errors.add("email", ViolationKind::Taken);
            }
        }

        Ok(errors.into_result()?)
    }
}
