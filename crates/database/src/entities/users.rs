use models::user::UserForm;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub photo_url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_instructors::Entity")]
    CourseInstructors,
    #[sea_orm(has_many = "super::course_students::Entity")]
    CourseStudents,
}

impl Related<super::course_instructors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseInstructors.def()
    }
}

impl Related<super::course_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseStudents.def()
    }
}

/// Courses the user teaches, through `course_instructors`
pub struct TaughtCourses;

impl Linked for TaughtCourses {
    type FromEntity = Entity;
    type ToEntity = super::courses::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::course_instructors::Relation::Instructor.def().rev(),
            super::course_instructors::Relation::Course.def(),
        ]
    }
}

/// Courses the user is enrolled in, through `course_students`
pub struct EnrolledCourses;

impl Linked for EnrolledCourses {
    type FromEntity = Entity;
    type ToEntity = super::courses::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::course_students::Relation::Student.def().rev(),
            super::course_students::Relation::Course.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn to_form(&self) -> UserForm {
        UserForm {
            first_name: Some(self.first_name.clone()),
            last_name: Some(self.last_name.clone()),
            email: Some(self.email.clone()),
            photo_url: self.photo_url.clone(),
        }
    }
}
