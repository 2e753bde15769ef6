use crate::{
    Error, Result,
    cascade::{self, Table},
    entities::{assignments, courses, lessons},
    record::Record,
    services::{check_reference, now},
};
use log::info;
use models::{
    assignment::AssignmentForm,
    validation::{Validate, ViolationKind},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct AssignmentService;

impl AssignmentService {
    /// Saves a new assignment, failing with [`Error::Validation`] if it is invalid
    pub async fn create(
        db: &DatabaseConnection,
        form: AssignmentForm,
    ) -> Result<assignments::Model> {
        Self::validate(db, &form, None).await?;

        let now = now();
        let assignment = assignments::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(form.course_id.unwrap_or_default()),
            name: Set(form.name.unwrap_or_default()),
            percent_of_grade: Set(form.percent_of_grade.unwrap_or_default()),
            maximum_grade: Set(form.maximum_grade),
            active_at: Set(form.active_at),
            due_at: Set(form.due_at),
            students_can_submit: Set(form.students_can_submit),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await?;

        info!("Created assignment {} ({})", assignment.name, assignment.id);
        Ok(assignment)
    }

    /// Like [`Self::create`], but returns rejected attributes instead of failing
    pub async fn build(
        db: &DatabaseConnection,
        form: AssignmentForm,
    ) -> Result<Record<AssignmentForm, assignments::Model>> {
        let result = Self::create(db, form.clone()).await;
        Record::from_result(form, result)
    }

    pub async fn find(db: &DatabaseConnection, id: Uuid) -> Result<assignments::Model> {
        assignments::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(Error::NotFound {
                table: Table::Assignments,
                id,
            })
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        change: impl FnOnce(&mut AssignmentForm),
    ) -> Result<assignments::Model> {
        let assignment = Self::find(db, id).await?;
        let mut form = assignment.to_form();
        change(&mut form);
        Self::validate(db, &form, Some(id)).await?;

        let mut active: assignments::ActiveModel = assignment.into();
        active.course_id = Set(form.course_id.unwrap_or_default());
        active.name = Set(form.name.unwrap_or_default());
        active.percent_of_grade = Set(form.percent_of_grade.unwrap_or_default());
        active.maximum_grade = Set(form.maximum_grade);
        active.active_at = Set(form.active_at);
        active.due_at = Set(form.due_at);
        active.students_can_submit = Set(form.students_can_submit);
        active.updated_at = Set(now());

        Ok(active.update(db).await?)
    }

    /// Lessons pointing at the assignment keep existing but lose the reference
    pub async fn destroy(db: &DatabaseConnection, id: Uuid) -> Result<()> {
        cascade::destroy(db, Table::Assignments, id).await
    }

    pub async fn course(db: &DatabaseConnection, id: Uuid) -> Result<courses::Model> {
        let assignment = Self::find(db, id).await?;

        assignment
            .find_related(courses::Entity)
            .one(db)
            .await?
            .ok_or(Error::NotFound {
                table: Table::Courses,
                id: assignment.course_id,
            })
    }

    pub async fn pre_class_lessons(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Vec<lessons::Model>> {
        let assignment = Self::find(db, id).await?;

        Ok(assignment
            .find_linked(assignments::PreClassLessons)
            .order_by_asc(lessons::Column::CreatedAt)
            .all(db)
            .await?)
    }

    pub async fn in_class_lessons(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Vec<lessons::Model>> {
        let assignment = Self::find(db, id).await?;

        Ok(assignment
            .find_linked(assignments::InClassLessons)
            .order_by_asc(lessons::Column::CreatedAt)
            .all(db)
            .await?)
    }

    async fn validate<C: ConnectionTrait>(
        db: &C,
        form: &AssignmentForm,
        id: Option<Uuid>,
    ) -> Result<()> {
        let mut errors = form.validate();
        check_reference::<courses::Entity, _>(db, &mut errors, "course_id", form.course_id).await?;

        // Names only have to be unique within one course
        if let (Some(course_id), Some(name)) = (form.course_id, form.name.as_deref())
            && !errors.has_field("name")
        {
            let mut query = assignments::Entity::find()
                .filter(assignments::Column::CourseId.eq(course_id))
                .filter(assignments::Column::Name.eq(name));
            if let Some(id) = id {
                query = query.filter(assignments::Column::Id.ne(id));
            }

            if query.count(db).await? > 0 {
                errors.add("name", ViolationKind::Taken);
            }
        }

        Ok(errors.into_result()?)
    }
}
