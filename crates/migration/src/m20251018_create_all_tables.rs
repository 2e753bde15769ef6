use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create schools table
        manager
            .create_table(
                Table::create()
                    .table(Schools::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Schools::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Schools::Name).string().not_null())
                    .col(ColumnDef::new(Schools::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Schools::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create terms table
        manager
            .create_table(
                Table::create()
                    .table(Terms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Terms::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Terms::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(Terms::Name).string().not_null())
                    .col(ColumnDef::new(Terms::StartsOn).date().not_null())
                    .col(ColumnDef::new(Terms::EndsOn).date().not_null())
                    .col(ColumnDef::new(Terms::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Terms::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-terms-school_id")
                            .from(Terms::Table, Terms::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::TermId).uuid())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::CourseCode).string().not_null())
                    .col(ColumnDef::new(Courses::Color).string())
                    .col(ColumnDef::new(Courses::Period).string())
                    .col(ColumnDef::new(Courses::Description).text())
                    .col(
                        ColumnDef::new(Courses::Public)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Courses::GradingMethod).string())
                    .col(ColumnDef::new(Courses::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-term_id")
                            .from(Courses::Table, Courses::TermId)
                            .to(Terms::Table, Terms::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create assignments table
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::CourseId).uuid().not_null())
                    .col(ColumnDef::new(Assignments::Name).string().not_null())
                    .col(ColumnDef::new(Assignments::PercentOfGrade).double().not_null())
                    .col(ColumnDef::new(Assignments::MaximumGrade).integer())
                    .col(ColumnDef::new(Assignments::ActiveAt).date_time())
                    .col(ColumnDef::new(Assignments::DueAt).date_time())
                    .col(
                        ColumnDef::new(Assignments::StudentsCanSubmit)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Assignments::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Assignments::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-assignments-course_id")
                            .from(Assignments::Table, Assignments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create lessons table
        manager
            .create_table(
                Table::create()
                    .table(Lessons::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Lessons::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Lessons::CourseId).uuid())
                    .col(ColumnDef::new(Lessons::Name).string().not_null())
                    .col(ColumnDef::new(Lessons::Description).text())
                    .col(ColumnDef::new(Lessons::Outline).text())
                    .col(ColumnDef::new(Lessons::LeadInQuestion).text())
                    .col(ColumnDef::new(Lessons::PreClassAssignmentId).uuid())
                    .col(ColumnDef::new(Lessons::InClassAssignmentId).uuid())
                    .col(ColumnDef::new(Lessons::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Lessons::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-lessons-course_id")
                            .from(Lessons::Table, Lessons::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-lessons-pre_class_assignment_id")
                            .from(Lessons::Table, Lessons::PreClassAssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-lessons-in_class_assignment_id")
                            .from(Lessons::Table, Lessons::InClassAssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create readings table
        manager
            .create_table(
                Table::create()
                    .table(Readings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Readings::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Readings::LessonId).uuid().not_null())
                    .col(ColumnDef::new(Readings::Caption).string())
                    .col(ColumnDef::new(Readings::Url).string().not_null())
                    .col(ColumnDef::new(Readings::OrderNumber).integer().not_null())
                    .col(ColumnDef::new(Readings::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Readings::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-readings-lesson_id")
                            .from(Readings::Table, Readings::LessonId)
                            .to(Lessons::Table, Lessons::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::PhotoUrl).string())
                    .col(ColumnDef::new(Users::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create course_instructors junction table
        manager
            .create_table(
                Table::create()
                    .table(CourseInstructors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseInstructors::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseInstructors::CourseId).uuid())
                    .col(ColumnDef::new(CourseInstructors::InstructorId).uuid())
                    .col(
                        ColumnDef::new(CourseInstructors::Primary)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CourseInstructors::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseInstructors::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_instructors-course_id")
                            .from(CourseInstructors::Table, CourseInstructors::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_instructors-instructor_id")
                            .from(CourseInstructors::Table, CourseInstructors::InstructorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_students junction table
        manager
            .create_table(
                Table::create()
                    .table(CourseStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseStudents::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseStudents::CourseId).uuid())
                    .col(ColumnDef::new(CourseStudents::StudentId).uuid().not_null())
                    .col(
                        ColumnDef::new(CourseStudents::Approved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(CourseStudents::FinalGrade).string())
                    .col(
                        ColumnDef::new(CourseStudents::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseStudents::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_students-course_id")
                            .from(CourseStudents::Table, CourseStudents::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_students-student_id")
                            .from(CourseStudents::Table, CourseStudents::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(CourseStudents::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(CourseInstructors::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Readings::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Lessons::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Assignments::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Terms::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Schools::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Schools {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Terms {
    Table,
    Id,
    SchoolId,
    Name,
    StartsOn,
    EndsOn,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    TermId,
    Name,
    CourseCode,
    Color,
    Period,
    Description,
    Public,
    GradingMethod,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Assignments {
    Table,
    Id,
    CourseId,
    Name,
    PercentOfGrade,
    MaximumGrade,
    ActiveAt,
    DueAt,
    StudentsCanSubmit,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Lessons {
    Table,
    Id,
    CourseId,
    Name,
    Description,
    Outline,
    LeadInQuestion,
    PreClassAssignmentId,
    InClassAssignmentId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Readings {
    Table,
    Id,
    LessonId,
    Caption,
    Url,
    OrderNumber,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PhotoUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum CourseInstructors {
    Table,
    Id,
    CourseId,
    InstructorId,
    Primary,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum CourseStudents {
    Table,
    Id,
    CourseId,
    StudentId,
    Approved,
    FinalGrade,
    CreatedAt,
    UpdatedAt,
}
