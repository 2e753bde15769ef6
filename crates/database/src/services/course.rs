use crate::{
    Error, Result,
    cascade::{self, Table},
    entities::{assignments, course_instructors, course_students, courses, lessons, readings, terms, users},
    record::Record,
    services::{
        assignment::AssignmentService, check_reference, course_instructor::CourseInstructorService,
        course_student::CourseStudentService, lesson::LessonService, now, user::UserService,
    },
};
use log::info;
use models::{
    assignment::AssignmentForm,
    course::CourseForm,
    course_instructor::CourseInstructorForm,
    course_student::CourseStudentForm,
    lesson::LessonForm,
    validation::{Validate, ViolationKind},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct CourseService;

impl CourseService {
    /// Saves a new course, failing with [`Error::Validation`] if it is invalid
    pub async fn create(db: &DatabaseConnection, form: CourseForm) -> Result<courses::Model> {
        Self::validate(db, &form, None).await?;

        let now = now();
        let course = courses::ActiveModel {
            id: Set(Uuid::new_v4()),
            term_id: Set(form.term_id),
            name: Set(form.name.unwrap_or_default()),
            course_code: Set(form.course_code.unwrap_or_default()),
            color: Set(form.color),
            period: Set(form.period),
            description: Set(form.description),
            public: Set(form.public),
            grading_method: Set(form.grading_method),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await?;

        info!("Created course {} ({})", course.course_code, course.id);
        Ok(course)
    }

    /// Like [`Self::create`], but returns rejected attributes instead of failing
    pub async fn build(
        db: &DatabaseConnection,
        form: CourseForm,
    ) -> Result<Record<CourseForm, courses::Model>> {
        let result = Self::create(db, form.clone()).await;
        Record::from_result(form, result)
    }

    pub async fn find(db: &DatabaseConnection, id: Uuid) -> Result<courses::Model> {
        courses::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(Error::NotFound {
                table: Table::Courses,
                id,
            })
    }

    /// Applies `change` to the stored attributes and saves them if they are still valid
    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        change: impl FnOnce(&mut CourseForm),
    ) -> Result<courses::Model> {
        let course = Self::find(db, id).await?;
        let mut form = course.to_form();
        change(&mut form);
        Self::validate(db, &form, Some(id)).await?;

        let mut active: courses::ActiveModel = course.into();
        active.term_id = Set(form.term_id);
        active.name = Set(form.name.unwrap_or_default());
        active.course_code = Set(form.course_code.unwrap_or_default());
        active.color = Set(form.color);
        active.period = Set(form.period);
        active.description = Set(form.description);
        active.public = Set(form.public);
        active.grading_method = Set(form.grading_method);
        active.updated_at = Set(now());

        let course = active.update(db).await?;
        info!("Updated course {} ({})", course.course_code, course.id);
        Ok(course)
    }

    /// Destroys the course with its lessons and assignments.
    ///
    /// Refused while any instructor or student is attached to it.
    pub async fn destroy(db: &DatabaseConnection, id: Uuid) -> Result<()> {
        cascade::destroy(db, Table::Courses, id).await
    }

    pub async fn term(db: &DatabaseConnection, id: Uuid) -> Result<Option<terms::Model>> {
        let course = Self::find(db, id).await?;
        Ok(course.find_related(terms::Entity).one(db).await?)
    }

    pub async fn lessons(db: &DatabaseConnection, id: Uuid) -> Result<Vec<lessons::Model>> {
        let course = Self::find(db, id).await?;

        Ok(course
            .find_related(lessons::Entity)
            .order_by_asc(lessons::Column::CreatedAt)
            .all(db)
            .await?)
    }

    pub async fn assignments(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Vec<assignments::Model>> {
        let course = Self::find(db, id).await?;

        Ok(course
            .find_related(assignments::Entity)
            .order_by_asc(assignments::Column::CreatedAt)
            .all(db)
            .await?)
    }

    /// Readings of every lesson in the course, lesson by lesson
    pub async fn readings(db: &DatabaseConnection, id: Uuid) -> Result<Vec<readings::Model>> {
        let course = Self::find(db, id).await?;

        // The lessons table is already joined by the through relation
        Ok(course
            .find_related(readings::Entity)
            .order_by_asc(lessons::Column::CreatedAt)
            .order_by_asc(readings::Column::OrderNumber)
            .order_by_asc(readings::Column::CreatedAt)
            .all(db)
            .await?)
    }

    pub async fn course_instructors(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Vec<course_instructors::Model>> {
        let course = Self::find(db, id).await?;
        Ok(course.find_related(course_instructors::Entity).all(db).await?)
    }

    pub async fn course_students(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Vec<course_students::Model>> {
        let course = Self::find(db, id).await?;
        Ok(course.find_related(course_students::Entity).all(db).await?)
    }

    pub async fn instructors(db: &DatabaseConnection, id: Uuid) -> Result<Vec<users::Model>> {
        let course = Self::find(db, id).await?;

        Ok(course
            .find_linked(courses::Instructors)
            .order_by_asc(users::Column::LastName)
            .all(db)
            .await?)
    }

    pub async fn students(db: &DatabaseConnection, id: Uuid) -> Result<Vec<users::Model>> {
        let course = Self::find(db, id).await?;

        Ok(course
            .find_linked(courses::Students)
            .order_by_asc(users::Column::LastName)
            .all(db)
            .await?)
    }

    /// Creates a lesson belonging to the course
    pub async fn add_lesson(
        db: &DatabaseConnection,
        id: Uuid,
        form: LessonForm,
    ) -> Result<lessons::Model> {
        let course = Self::find(db, id).await?;

        LessonService::create(
            db,
            LessonForm {
                course_id: Some(course.id),
                ..form
            },
        )
        .await
    }

    /// Creates an assignment belonging to the course
    pub async fn add_assignment(
        db: &DatabaseConnection,
        id: Uuid,
        form: AssignmentForm,
    ) -> Result<assignments::Model> {
        let course = Self::find(db, id).await?;
        AssignmentService::create(db, form.for_course(course.id)).await
    }

    pub async fn add_instructor(
        db: &DatabaseConnection,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<course_instructors::Model> {
        let course = Self::find(db, id).await?;
        let user = UserService::find(db, user_id).await?;

        CourseInstructorService::create(
            db,
            CourseInstructorForm {
                course_id: Some(course.id),
                instructor_id: Some(user.id),
                primary: false,
            },
        )
        .await
    }

    pub async fn add_student(
        db: &DatabaseConnection,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<course_students::Model> {
        let course = Self::find(db, id).await?;
        let user = UserService::find(db, user_id).await?;

        CourseStudentService::create(
            db,
            CourseStudentForm {
                course_id: Some(course.id),
                ..CourseStudentForm::new(user.id)
            },
        )
        .await
    }

    /// Presence and format first, then the checks that need storage
    async fn validate<C: ConnectionTrait>(
        db: &C,
        form: &CourseForm,
        id: Option<Uuid>,
    ) -> Result<()> {
        let mut errors = form.validate();
        check_reference::<terms::Entity, _>(db, &mut errors, "term_id", form.term_id).await?;

        // Course codes are unique within a term
        if let Some(code) = form.course_code.as_deref()
            && !errors.has_field("course_code")
        {
            let mut query = courses::Entity::find().filter(courses::Column::CourseCode.eq(code));
            query = match form.term_id {
                Some(term_id) => query.filter(courses::Column::TermId.eq(term_id)),
                None => query.filter(courses::Column::TermId.is_null()),
            };
            if let Some(id) = id {
                query = query.filter(courses::Column::Id.ne(id));
            }

            if query.count(db).await? > 0 {
                errors.add("course_code", ViolationKind::Taken);
            }
        }

        Ok(errors.into_result()?)
    }
}
