use crate::routes::{
    admin, course, department, enrollment, health, instructor, report, root, section, student,
};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        department::get_departments,
        course::get_courses,
        course::add_course,
        course::get_course_details,
        course::get_course_students,
        course::get_course_instructors,
        student::get_students,
        student::add_student,
        student::get_students_with_advisors,
        student::assign_advisor,
        student::check_prerequisites,
        instructor::get_instructors,
        instructor::add_instructor,
        section::get_sections,
        section::add_section,
        section::assign_instructor,
        enrollment::enroll_student,
        report::get_average_salary,
        report::get_students_by_credits,
        admin::reseed
    ),
    tags(
        (name = "Departments", description = "Department related endpoints"),
        (name = "Courses", description = "Course catalog endpoints"),
        (name = "Students", description = "Student and advising endpoints"),
        (name = "Instructors", description = "Instructor related endpoints"),
        (name = "Sections", description = "Section and teaching assignment endpoints"),
        (name = "Enrollments", description = "Enrollment endpoints"),
        (name = "Reports", description = "Aggregate reporting endpoints"),
        (name = "Admin", description = "Administrative endpoints"),
        (name = "Health", description = "Service health endpoints"),
    ),
    info(
        title = "Registrar API",
        version = "1.0.0",
        description = "College records API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
