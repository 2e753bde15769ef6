use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Emails are unique across all users
        manager
            .create_index(
                Index::create()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Assignment names are unique within a course
        manager
            .create_index(
                Index::create()
                    .name("idx_assignments_course_id_name")
                    .table(Assignments::Table)
                    .col(Assignments::CourseId)
                    .col(Assignments::Name)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Course codes are looked up per term
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_term_id_course_code")
                    .table(Courses::Table)
                    .col(Courses::TermId)
                    .col(Courses::CourseCode)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Foreign keys walked when destroying a parent
        for (name, table, column) in [
            ("idx_terms_school_id", Terms::Table.into_iden(), Terms::SchoolId.into_iden()),
            ("idx_lessons_course_id", Lessons::Table.into_iden(), Lessons::CourseId.into_iden()),
            ("idx_readings_lesson_id", Readings::Table.into_iden(), Readings::LessonId.into_iden()),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(table)
                        .col(column)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_readings_lesson_id",
            "idx_lessons_course_id",
            "idx_terms_school_id",
            "idx_courses_term_id_course_code",
            "idx_assignments_course_id_name",
            "idx_users_email",
        ] {
            manager
                .drop_index(Index::drop().name(name).if_exists().to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Email,
}

#[derive(Iden)]
enum Assignments {
    Table,
    CourseId,
    Name,
}

#[derive(Iden)]
enum Courses {
    Table,
    TermId,
    CourseCode,
}

#[derive(Iden)]
enum Terms {
    Table,
    SchoolId,
}

#[derive(Iden)]
enum Lessons {
    Table,
    CourseId,
}

#[derive(Iden)]
enum Readings {
    Table,
    LessonId,
}
