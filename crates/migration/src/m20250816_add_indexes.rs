use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Indexes on the department foreign keys for the per-department reads
        manager
            .create_index(
                Index::create()
                    .name("idx_course_dept_name")
                    .table(Course::Table)
                    .col(Course::DeptName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_instructor_dept_name")
                    .table(Instructor::Table)
                    .col(Instructor::DeptName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_dept_name")
                    .table(Student::Table)
                    .col(Student::DeptName)
                    .to_owned(),
            )
            .await?;

        // Enrollment lookups by student and by course
        manager
            .create_index(
                Index::create()
                    .name("idx_takes_student_id")
                    .table(Takes::Table)
                    .col(Takes::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_takes_course_id")
                    .table(Takes::Table)
                    .col(Takes::CourseId)
                    .to_owned(),
            )
            .await?;

        // Teaching-assignment lookups by instructor and by course
        manager
            .create_index(
                Index::create()
                    .name("idx_teaches_instructor_id")
                    .table(Teaches::Table)
                    .col(Teaches::InstructorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teaches_course_id")
                    .table(Teaches::Table)
                    .col(Teaches::CourseId)
                    .to_owned(),
            )
            .await?;

        // Section room lookups for the capacity report
        manager
            .create_index(
                Index::create()
                    .name("idx_section_classroom")
                    .table(Section::Table)
                    .col(Section::Building)
                    .col(Section::RoomNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_advisor_instructor_id")
                    .table(Advisor::Table)
                    .col(Advisor::InstructorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_prereq_prereq_id")
                    .table(Prereq::Table)
                    .col(Prereq::PrereqId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_course_dept_name",
            "idx_instructor_dept_name",
            "idx_student_dept_name",
            "idx_takes_student_id",
            "idx_takes_course_id",
            "idx_teaches_instructor_id",
            "idx_teaches_course_id",
            "idx_section_classroom",
            "idx_advisor_instructor_id",
            "idx_prereq_prereq_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden)]
enum Course {
    Table,
    DeptName,
}

#[derive(Iden)]
enum Instructor {
    Table,
    DeptName,
}

#[derive(Iden)]
enum Student {
    Table,
    DeptName,
}

#[derive(Iden)]
enum Takes {
    Table,
    StudentId,
    CourseId,
}

#[derive(Iden)]
enum Teaches {
    Table,
    InstructorId,
    CourseId,
}

#[derive(Iden)]
enum Section {
    Table,
    Building,
    RoomNumber,
}

#[derive(Iden)]
enum Advisor {
    Table,
    InstructorId,
}

#[derive(Iden)]
enum Prereq {
    Table,
    PrereqId,
}
