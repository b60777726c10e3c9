use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create department table
        manager
            .create_table(
                Table::create()
                    .table(Department::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Department::DeptName)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Department::Building).string().not_null())
                    .col(
                        ColumnDef::new(Department::Budget)
                            .double()
                            .not_null()
                            .check(Expr::col(Department::Budget).gte(0)),
                    )
                    .to_owned(),
            )
            .await?;

        // Create classroom table
        manager
            .create_table(
                Table::create()
                    .table(Classroom::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Classroom::Building).string().not_null())
                    .col(ColumnDef::new(Classroom::RoomNumber).string().not_null())
                    .col(ColumnDef::new(Classroom::Capacity).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(Classroom::Building)
                            .col(Classroom::RoomNumber),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course table
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Course::CourseId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Course::Title).string().not_null())
                    .col(ColumnDef::new(Course::DeptName).string().not_null())
                    .col(
                        ColumnDef::new(Course::Credits)
                            .integer()
                            .not_null()
                            .check(Expr::col(Course::Credits).gt(0)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_dept_name")
                            .from(Course::Table, Course::DeptName)
                            .to(Department::Table, Department::DeptName),
                    )
                    .to_owned(),
            )
            .await?;

        // Create instructor table; ids come from the identity column
        manager
            .create_table(
                Table::create()
                    .table(Instructor::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Instructor::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Instructor::Name).string().not_null())
                    .col(ColumnDef::new(Instructor::DeptName).string().not_null())
                    .col(
                        ColumnDef::new(Instructor::Salary)
                            .double()
                            .not_null()
                            .check(Expr::col(Instructor::Salary).gte(0)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_instructor_dept_name")
                            .from(Instructor::Table, Instructor::DeptName)
                            .to(Department::Table, Department::DeptName),
                    )
                    .to_owned(),
            )
            .await?;

        // Create student table; ids come from the identity column
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Student::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Student::Name).string().not_null())
                    .col(ColumnDef::new(Student::DeptName).string().not_null())
                    .col(
                        ColumnDef::new(Student::TotCred)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Student::TotCred).gte(0)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_dept_name")
                            .from(Student::Table, Student::DeptName)
                            .to(Department::Table, Department::DeptName),
                    )
                    .to_owned(),
            )
            .await?;

        // Create time_slot table
        manager
            .create_table(
                Table::create()
                    .table(TimeSlot::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TimeSlot::TimeSlotId).string().not_null())
                    .col(ColumnDef::new(TimeSlot::Day).string().not_null())
                    .col(ColumnDef::new(TimeSlot::StartHour).small_integer().not_null())
                    .col(
                        ColumnDef::new(TimeSlot::StartMinute)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TimeSlot::EndHour).small_integer().not_null())
                    .col(ColumnDef::new(TimeSlot::EndMinute).small_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(TimeSlot::TimeSlotId)
                            .col(TimeSlot::Day)
                            .col(TimeSlot::StartHour)
                            .col(TimeSlot::StartMinute),
                    )
                    .to_owned(),
            )
            .await?;

        // Create section table
        manager
            .create_table(
                Table::create()
                    .table(Section::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Section::CourseId).string().not_null())
                    .col(ColumnDef::new(Section::SecId).string().not_null())
                    .col(ColumnDef::new(Section::Semester).string().not_null())
                    .col(ColumnDef::new(Section::Year).small_integer().not_null())
                    .col(ColumnDef::new(Section::Building).string().not_null())
                    .col(ColumnDef::new(Section::RoomNumber).string().not_null())
                    .col(ColumnDef::new(Section::TimeSlotId).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(Section::CourseId)
                            .col(Section::SecId)
                            .col(Section::Semester)
                            .col(Section::Year),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_section_course_id")
                            .from(Section::Table, Section::CourseId)
                            .to(Course::Table, Course::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_section_classroom")
                            .from(Section::Table, (Section::Building, Section::RoomNumber))
                            .to(Classroom::Table, (Classroom::Building, Classroom::RoomNumber)),
                    )
                    .to_owned(),
            )
            .await?;

        // Create teaches table
        manager
            .create_table(
                Table::create()
                    .table(Teaches::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Teaches::InstructorId).integer().not_null())
                    .col(ColumnDef::new(Teaches::CourseId).string().not_null())
                    .col(ColumnDef::new(Teaches::SecId).string().not_null())
                    .col(ColumnDef::new(Teaches::Semester).string().not_null())
                    .col(ColumnDef::new(Teaches::Year).small_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(Teaches::InstructorId)
                            .col(Teaches::CourseId)
                            .col(Teaches::SecId)
                            .col(Teaches::Semester)
                            .col(Teaches::Year),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teaches_instructor_id")
                            .from(Teaches::Table, Teaches::InstructorId)
                            .to(Instructor::Table, Instructor::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teaches_section")
                            .from_tbl(Teaches::Table)
                            .from_col(Teaches::CourseId)
                            .from_col(Teaches::SecId)
                            .from_col(Teaches::Semester)
                            .from_col(Teaches::Year)
                            .to_tbl(Section::Table)
                            .to_col(Section::CourseId)
                            .to_col(Section::SecId)
                            .to_col(Section::Semester)
                            .to_col(Section::Year),
                    )
                    .to_owned(),
            )
            .await?;

        // Create takes table
        manager
            .create_table(
                Table::create()
                    .table(Takes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Takes::StudentId).integer().not_null())
                    .col(ColumnDef::new(Takes::CourseId).string().not_null())
                    .col(ColumnDef::new(Takes::SecId).string().not_null())
                    .col(ColumnDef::new(Takes::Semester).string().not_null())
                    .col(ColumnDef::new(Takes::Year).small_integer().not_null())
                    .col(ColumnDef::new(Takes::Grade).string())
                    .primary_key(
                        Index::create()
                            .col(Takes::StudentId)
                            .col(Takes::CourseId)
                            .col(Takes::SecId)
                            .col(Takes::Semester)
                            .col(Takes::Year),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_takes_student_id")
                            .from(Takes::Table, Takes::StudentId)
                            .to(Student::Table, Student::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_takes_section")
                            .from_tbl(Takes::Table)
                            .from_col(Takes::CourseId)
                            .from_col(Takes::SecId)
                            .from_col(Takes::Semester)
                            .from_col(Takes::Year)
                            .to_tbl(Section::Table)
                            .to_col(Section::CourseId)
                            .to_col(Section::SecId)
                            .to_col(Section::Semester)
                            .to_col(Section::Year),
                    )
                    .to_owned(),
            )
            .await?;

        // Create advisor table (one advisor per student)
        manager
            .create_table(
                Table::create()
                    .table(Advisor::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Advisor::StudentId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Advisor::InstructorId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_advisor_student_id")
                            .from(Advisor::Table, Advisor::StudentId)
                            .to(Student::Table, Student::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_advisor_instructor_id")
                            .from(Advisor::Table, Advisor::InstructorId)
                            .to(Instructor::Table, Instructor::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Create prereq table
        manager
            .create_table(
                Table::create()
                    .table(Prereq::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Prereq::CourseId).string().not_null())
                    .col(ColumnDef::new(Prereq::PrereqId).string().not_null())
                    .primary_key(Index::create().col(Prereq::CourseId).col(Prereq::PrereqId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prereq_course_id")
                            .from(Prereq::Table, Prereq::CourseId)
                            .to(Course::Table, Course::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prereq_prereq_id")
                            .from(Prereq::Table, Prereq::PrereqId)
                            .to(Course::Table, Course::CourseId),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Prereq::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Advisor::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Takes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Teaches::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Section::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TimeSlot::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Instructor::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Classroom::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Department::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Department {
    Table,
    DeptName,
    Building,
    Budget,
}

#[derive(Iden)]
enum Classroom {
    Table,
    Building,
    RoomNumber,
    Capacity,
}

#[derive(Iden)]
enum Course {
    Table,
    CourseId,
    Title,
    DeptName,
    Credits,
}

#[derive(Iden)]
enum Instructor {
    Table,
    Id,
    Name,
    DeptName,
    Salary,
}

#[derive(Iden)]
enum Student {
    Table,
    Id,
    Name,
    DeptName,
    TotCred,
}

#[derive(Iden)]
enum TimeSlot {
    Table,
    TimeSlotId,
    Day,
    StartHour,
    StartMinute,
    EndHour,
    EndMinute,
}

#[derive(Iden)]
enum Section {
    Table,
    CourseId,
    SecId,
    Semester,
    Year,
    Building,
    RoomNumber,
    TimeSlotId,
}

#[derive(Iden)]
enum Teaches {
    Table,
    InstructorId,
    CourseId,
    SecId,
    Semester,
    Year,
}

#[derive(Iden)]
enum Takes {
    Table,
    StudentId,
    CourseId,
    SecId,
    Semester,
    Year,
    Grade,
}

#[derive(Iden)]
enum Advisor {
    Table,
    StudentId,
    InstructorId,
}

#[derive(Iden)]
enum Prereq {
    Table,
    CourseId,
    PrereqId,
}
