use models::course_student::CourseStudentForm;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Junction table between courses and the users enrolled in them
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_id: Option<Uuid>,
    pub student_id: Uuid,
    pub approved: bool,
    pub final_grade: Option<String>,
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
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_form(&self) -> CourseStudentForm {
        CourseStudentForm {
            course_id: self.course_id,
            student_id: Some(self.student_id),
            approved: self.approved,
            final_grade: self.final_grade.clone(),
        }
    }
}
