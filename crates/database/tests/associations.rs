mod common;

use common::{course, school, setup, term, user};
use database::{
    Error,
    cascade::Table,
    services::{
        assignment::AssignmentService, course::CourseService,
        course_instructor::CourseInstructorService, course_student::CourseStudentService,
        lesson::LessonService, reading::ReadingService, school::SchoolService, term::TermService,
        user::UserService,
    },
};
use models::{assignment::AssignmentForm, lesson::LessonForm, reading::ReadingForm};

#[tokio::test]
async fn test_course_readings_through_lessons() {
    let test = setup().await;
    let db = &test.db;

    let psychology = course(db, "Psychology", "PSY101").await;
    let algebra = course(db, "Algebra", "MAT110").await;
    let memory = CourseService::add_lesson(db, psychology.id, LessonForm::new("Memory"))
        .await
        .unwrap();
    let perception = CourseService::add_lesson(db, psychology.id, LessonForm::new("Perception"))
        .await
        .unwrap();
    let factoring = CourseService::add_lesson(db, algebra.id, LessonForm::new("Factoring"))
        .await
        .unwrap();

    let r1 = LessonService::add_reading(
        db,
        memory.id,
        ReadingForm::new("Working memory", "https://example.com/memory", 1),
    )
    .await
    .unwrap();
    let r2 = LessonService::add_reading(
        db,
        perception.id,
        ReadingForm::new("Gestalt", "https://example.com/gestalt", 1),
    )
    .await
    .unwrap();
    LessonService::add_reading(
        db,
        factoring.id,
        ReadingForm::new("Polynomials", "https://example.com/poly", 1),
    )
    .await
    .unwrap();

    // Lesson order first, then position within the lesson
    let r3 = LessonService::add_reading(
        db,
        memory.id,
        ReadingForm::new("Chunking", "https://example.com/chunking", 2),
    )
    .await
    .unwrap();
    assert_eq!(
        CourseService::readings(db, psychology.id).await.unwrap(),
        vec![r1.clone(), r3, r2]
    );

    assert_eq!(ReadingService::lesson(db, r1.id).await.unwrap(), memory);
    assert_eq!(
        LessonService::course(db, memory.id).await.unwrap(),
        Some(psychology.clone())
    );
    assert_eq!(CourseService::lessons(db, psychology.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_lesson_readings_are_ordered() {
    let test = setup().await;
    let db = &test.db;

    let lesson = LessonService::create(db, LessonForm::new("Sorting")).await.unwrap();
    let second = LessonService::add_reading(
        db,
        lesson.id,
        ReadingForm::new("Second", "http://example.com/2", 2),
    )
    .await
    .unwrap();
    let first = LessonService::add_reading(
        db,
        lesson.id,
        ReadingForm::new("First", "http://example.com/1", 1),
    )
    .await
    .unwrap();

    assert_eq!(
        LessonService::readings(db, lesson.id).await.unwrap(),
        vec![first, second]
    );
}

#[tokio::test]
async fn test_lesson_assignments_both_directions() {
    let test = setup().await;
    let db = &test.db;

    let algebra = course(db, "Algebra", "MAT110").await;
    let homework = CourseService::add_assignment(db, algebra.id, AssignmentForm::new("Homework", 10.0))
        .await
        .unwrap();
    let worksheet = CourseService::add_assignment(db, algebra.id, AssignmentForm::new("Worksheet", 5.0))
        .await
        .unwrap();
    let lesson = CourseService::add_lesson(db, algebra.id, LessonForm::new("Factoring"))
        .await
        .unwrap();

    assert_eq!(
        LessonService::in_class_assignment(db, lesson.id).await.unwrap(),
        None
    );

    LessonService::set_pre_class_assignment(db, lesson.id, Some(homework.id))
        .await
        .unwrap();
    let lesson = LessonService::set_in_class_assignment(db, lesson.id, Some(worksheet.id))
        .await
        .unwrap();

    assert_eq!(
        LessonService::pre_class_assignment(db, lesson.id).await.unwrap(),
        Some(homework.clone())
    );
    assert_eq!(
        LessonService::in_class_assignment(db, lesson.id).await.unwrap(),
        Some(worksheet.clone())
    );
    assert_eq!(
        AssignmentService::pre_class_lessons(db, homework.id).await.unwrap(),
        vec![lesson.clone()]
    );
    assert_eq!(
        AssignmentService::in_class_lessons(db, worksheet.id).await.unwrap(),
        vec![lesson.clone()]
    );
    assert!(
        AssignmentService::in_class_lessons(db, homework.id)
            .await
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        AssignmentService::course(db, homework.id).await.unwrap(),
        algebra
    );

    let lesson = LessonService::set_in_class_assignment(db, lesson.id, None)
        .await
        .unwrap();
    assert_eq!(lesson.in_class_assignment_id, None);
    assert!(
        AssignmentService::in_class_lessons(db, worksheet.id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_instructors_and_students() {
    let test = setup().await;
    let db = &test.db;

    let algebra = course(db, "Algebra", "MAT110").await;
    let psychology = course(db, "Psychology", "PSY101").await;
    let emmy = user(db, "Emmy", "emmy@example.com").await;
    let ada = user(db, "Ada", "ada@example.com").await;

    let link = CourseService::add_instructor(db, algebra.id, emmy.id)
        .await
        .unwrap();
    CourseService::add_student(db, algebra.id, ada.id)
        .await
        .unwrap();
    let enrollment = CourseService::add_student(db, psychology.id, ada.id)
        .await
        .unwrap();

    assert_eq!(
        CourseService::instructors(db, algebra.id).await.unwrap(),
        vec![emmy.clone()]
    );
    assert_eq!(
        CourseService::students(db, algebra.id).await.unwrap(),
        vec![ada.clone()]
    );
    assert_eq!(
        CourseService::course_instructors(db, algebra.id).await.unwrap(),
        vec![link.clone()]
    );
    assert_eq!(
        CourseService::course_students(db, psychology.id)
            .await
            .unwrap(),
        vec![enrollment.clone()]
    );

    assert_eq!(
        UserService::courses_taught(db, emmy.id).await.unwrap(),
        vec![algebra.clone()]
    );
    assert_eq!(
        UserService::courses_enrolled(db, ada.id).await.unwrap(),
        vec![algebra.clone(), psychology.clone()]
    );
    assert!(
        UserService::courses_enrolled(db, emmy.id)
            .await
            .unwrap()
            .is_empty()
    );

    assert_eq!(
        CourseInstructorService::instructor(db, link.id).await.unwrap(),
        Some(emmy)
    );
    assert_eq!(
        CourseStudentService::student(db, enrollment.id).await.unwrap(),
        ada
    );
    assert_eq!(
        CourseStudentService::course(db, enrollment.id).await.unwrap(),
        Some(psychology)
    );
}

#[tokio::test]
async fn test_adding_to_missing_parent_is_not_found() {
    let test = setup().await;
    let db = &test.db;

    let algebra = course(db, "Algebra", "MAT110").await;
    let lesson = CourseService::add_lesson(db, algebra.id, LessonForm::new("Factoring"))
        .await
        .unwrap();
    LessonService::destroy(db, lesson.id).await.unwrap();

    let result = LessonService::add_reading(
        db,
        lesson.id,
        ReadingForm::new("Lost", "http://example.com/lost", 1),
    )
    .await;
    assert!(matches!(
        result,
        Err(Error::NotFound {
            table: Table::Lessons,
            ..
        })
    ));
}

#[tokio::test]
async fn test_school_term_course_scenario() {
    let test = setup().await;
    let db = &test.db;

    let asu = school(db).await;
    let spring = term(db, asu.id, "Spring 2016").await;
    let psychology = course(db, "Psychology", "PSY101").await;
    let algebra = course(db, "Algebra", "MAT110").await;

    TermService::assign_course(db, spring.id, psychology.id)
        .await
        .unwrap();
    TermService::assign_course(db, spring.id, algebra.id)
        .await
        .unwrap();

    let codes: Vec<_> = TermService::courses(db, spring.id)
        .await
        .unwrap()
        .into_iter()
        .map(|course| course.course_code)
        .collect();
    assert_eq!(codes, vec!["MAT110", "PSY101"]);
    assert_eq!(
        CourseService::term(db, algebra.id).await.unwrap(),
        Some(spring.clone())
    );
    assert_eq!(TermService::school(db, spring.id).await.unwrap(), asu);
    assert_eq!(
        SchoolService::terms(db, asu.id).await.unwrap(),
        vec![spring.clone()]
    );

    assert!(matches!(
        TermService::destroy(db, spring.id).await,
        Err(Error::ConstraintViolation {
            table: Table::Terms,
            association: Table::Courses,
        })
    ));

    let fall = term(db, asu.id, "Fall 2016").await;
    TermService::destroy(db, fall.id).await.unwrap();
    assert!(matches!(
        TermService::find(db, fall.id).await,
        Err(Error::NotFound {
            table: Table::Terms,
            ..
        })
    ));
    assert_eq!(TermService::courses(db, spring.id).await.unwrap().len(), 2);
}
