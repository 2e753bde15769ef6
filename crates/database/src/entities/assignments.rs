use models::assignment::AssignmentForm;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub name: String,
    pub percent_of_grade: f64,
    pub maximum_grade: Option<i32>,
    pub active_at: Option<DateTime>,
    pub due_at: Option<DateTime>,
    pub students_can_submit: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

/// Lessons that assign this before class
pub struct PreClassLessons;

impl Linked for PreClassLessons {
    type FromEntity = Entity;
    type ToEntity = super::lessons::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![super::lessons::Relation::PreClassAssignment.def().rev()]
    }
}

/// Lessons that work on this in class
pub struct InClassLessons;

impl Linked for InClassLessons {
    type FromEntity = Entity;
    type ToEntity = super::lessons::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![super::lessons::Relation::InClassAssignment.def().rev()]
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_form(&self) -> AssignmentForm {
        AssignmentForm {
            course_id: Some(self.course_id),
            name: Some(self.name.clone()),
            percent_of_grade: Some(self.percent_of_grade),
            maximum_grade: self.maximum_grade,
            active_at: self.active_at,
            due_at: self.due_at,
            students_can_submit: self.students_can_submit,
        }
    }
}
