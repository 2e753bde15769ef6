use models::lesson::LessonForm;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Option<Uuid>,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub outline: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub lead_in_question: Option<String>,
    pub pre_class_assignment_id: Option<Uuid>,
    pub in_class_assignment_id: Option<Uuid>,
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
    #[sea_orm(has_many = "super::readings::Entity")]
    Readings,
    #[sea_orm(
        belongs_to = "super::assignments::Entity",
        from = "Column::PreClassAssignmentId",
        to = "super::assignments::Column::Id"
    )]
    PreClassAssignment,
    #[sea_orm(
        belongs_to = "super::assignments::Entity",
        from = "Column::InClassAssignmentId",
        to = "super::assignments::Column::Id"
    )]
    InClassAssignment,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::readings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Readings.def()
    }
}

/// The assignment due before the lesson
pub struct PreClassAssignment;

impl Linked for PreClassAssignment {
    type FromEntity = Entity;
    type ToEntity = super::assignments::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::PreClassAssignment.def()]
    }
}

/// The assignment worked on during the lesson
pub struct InClassAssignment;

impl Linked for InClassAssignment {
    type FromEntity = Entity;
    type ToEntity = super::assignments::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::InClassAssignment.def()]
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_form(&self) -> LessonForm {
        LessonForm {
            course_id: self.course_id,
            name: Some(self.name.clone()),
            description: self.description.clone(),
            outline: self.outline.clone(),
            lead_in_question: self.lead_in_question.clone(),
            pre_class_assignment_id: self.pre_class_assignment_id,
            in_class_assignment_id: self.in_class_assignment_id,
        }
    }
}
