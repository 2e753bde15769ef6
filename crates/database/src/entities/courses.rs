use models::course::CourseForm;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub term_id: Option<Uuid>,
    pub name: String,
    pub course_code: String, // e.g. "PSY101"
    pub color: Option<String>,
    pub period: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub public: bool,
    pub grading_method: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::terms::Entity",
        from = "Column::TermId",
        to = "super::terms::Column::Id"
    )]
    Term,
    #[sea_orm(has_many = "super::lessons::Entity")]
    Lessons,
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
    #[sea_orm(has_many = "super::course_instructors::Entity")]
    CourseInstructors,
    #[sea_orm(has_many = "super::course_students::Entity")]
    CourseStudents,
}

impl Related<super::terms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Term.def()
    }
}

impl Related<super::lessons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lessons.def()
    }
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
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

// Readings are reached through the course's lessons
impl Related<super::readings::Entity> for Entity {
    fn to() -> RelationDef {
        super::lessons::Relation::Readings.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::lessons::Relation::Course.def().rev())
    }
}

/// Users teaching the course, through `course_instructors`
pub struct Instructors;

impl Linked for Instructors {
    type FromEntity = Entity;
    type ToEntity = super::users::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::course_instructors::Relation::Course.def().rev(),
            super::course_instructors::Relation::Instructor.def(),
        ]
    }
}

/// Users enrolled in the course, through `course_students`
pub struct Students;

impl Linked for Students {
    type FromEntity = Entity;
    type ToEntity = super::users::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::course_students::Relation::Course.def().rev(),
            super::course_students::Relation::Student.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_form(&self) -> CourseForm {
        CourseForm {
            term_id: self.term_id,
            name: Some(self.name.clone()),
            course_code: Some(self.course_code.clone()),
            color: self.color.clone(),
            period: self.period.clone(),
            description: self.description.clone(),
            public: self.public,
            grading_method: self.grading_method.clone(),
        }
    }
}
