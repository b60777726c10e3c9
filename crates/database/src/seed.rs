//! Fixed demonstration dataset and the bulk reseed operation.
//!
//! Reseeding deletes every row leaf-first, reinserts the dataset, and
//! realigns the identity sequences, all in one transaction. Running it twice
//! yields the same row counts as running it once.

use crate::entities::{
    advisor, classroom, course, department, instructor, prereq, section, student, takes, teaches,
    time_slot,
};
use crate::error::Result;
use sea_orm::{ActiveValue::Set, ConnectionTrait, DatabaseConnection, EntityTrait, TransactionTrait};
use serde::Serialize;

pub struct SeedService;

/// Row counts inserted by a reseed, per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub departments: usize,
    pub classrooms: usize,
    pub courses: usize,
    pub instructors: usize,
    pub students: usize,
    pub time_slots: usize,
    pub sections: usize,
    pub teaches: usize,
    pub advisors: usize,
    pub takes: usize,
    pub prereqs: usize,
}

// (dept_name, building, budget)
const DEPARTMENTS: &[(&str, &str, f64)] = &[
    ("Biology", "Building E", 520_000.0),
    ("Chemistry", "Building D", 550_000.0),
    ("Computer Science", "Building B", 600_000.0),
    ("Environmental Science", "Building G", 530_000.0),
    ("Mathematics", "Building A", 500_000.0),
    ("Physics", "Building C", 450_000.0),
    ("Statistics", "Building F", 480_000.0),
];

// (building, room_number, capacity)
const CLASSROOMS: &[(&str, &str, i32)] = &[
    ("Building A", "101", 30),
    ("Building A", "102", 30),
    ("Building B", "201", 25),
    ("Building B", "205", 20),
    ("Building C", "301", 20),
    ("Building D", "110", 35),
    ("Building E", "120", 40),
    ("Building F", "140", 45),
    ("Building G", "150", 30),
];

// (course_id, title, dept_name, credits)
const COURSES: &[(&str, &str, &str, i32)] = &[
    ("BIO-101", "Introduction to Biology", "Biology", 3),
    ("BIO-301", "Genetics", "Biology", 3),
    ("CHEM-210", "Organic Chemistry", "Chemistry", 4),
    ("CS-201", "Algorithms", "Computer Science", 4),
    ("CS-202", "Data Structures", "Computer Science", 4),
    ("CS-301", "Machine Learning", "Computer Science", 4),
    ("ENV-240", "Environmental Policy", "Environmental Science", 3),
    ("MATH-101", "Calculus", "Mathematics", 3),
    ("MATH-201", "Linear Algebra", "Mathematics", 3),
    ("PHYS-301", "Quantum Mechanics", "Physics", 3),
    ("STAT-310", "Statistical Inference", "Statistics", 4),
];

// (course_id, prereq_id)
const PREREQS: &[(&str, &str)] = &[
    ("BIO-301", "BIO-101"),
    ("CS-301", "CS-201"),
    ("CS-301", "CS-202"),
    ("MATH-201", "MATH-101"),
    ("STAT-310", "MATH-101"),
];

// (id, name, dept_name, salary)
const INSTRUCTORS: &[(i32, &str, &str, f64)] = &[
    (1, "Dr. Anna Martin", "Mathematics", 72_000.0),
    (2, "Dr. Robert Moore", "Computer Science", 80_000.0),
    (3, "Dr. William Scott", "Physics", 78_000.0),
    (4, "Dr. Jessica Wright", "Chemistry", 75_000.0),
    (5, "Dr. Michael Hill", "Biology", 74_000.0),
    (6, "Dr. Olivia Brooks", "Statistics", 68_000.0),
    (7, "Dr. Henry Adams", "Environmental Science", 79_000.0),
    (8, "Dr. Grace Chen", "Computer Science", 90_000.0),
];

// (id, name, dept_name, tot_cred)
const STUDENTS: &[(i32, &str, &str, i32)] = &[
    (1, "Liam White", "Mathematics", 45),
    (2, "Olivia Green", "Computer Science", 30),
    (3, "Noah Brown", "Physics", 60),
    (4, "Emma Black", "Chemistry", 12),
    (5, "Oliver Stone", "Biology", 90),
    (6, "Charlotte Lee", "Mathematics", 24),
    (7, "James Williams", "Computer Science", 48),
    (8, "Sophia Harris", "Physics", 36),
    (9, "Mason Hall", "Chemistry", 102),
    (10, "Ava Walker", "Biology", 18),
    (11, "Ethan King", "Statistics", 54),
    (12, "Isabella White", "Environmental Science", 27),
    (13, "Mia Patel", "Mathematics", 66),
    (14, "Alexander Chan", "Computer Science", 9),
    (15, "Harper Singh", "Physics", 33),
];

// (time_slot_id, day, start_hour, start_minute, end_hour, end_minute)
const TIME_SLOTS: &[(&str, &str, i16, i16, i16, i16)] = &[
    ("A", "M", 10, 0, 10, 50),
    ("A", "W", 10, 0, 10, 50),
    ("A", "F", 10, 0, 10, 50),
    ("B", "T", 13, 0, 14, 15),
    ("B", "R", 13, 0, 14, 15),
    ("C", "M", 14, 0, 14, 50),
    ("C", "W", 14, 0, 14, 50),
    ("C", "F", 14, 0, 14, 50),
    ("D", "T", 10, 0, 11, 15),
    ("D", "R", 10, 0, 11, 15),
];

// (course_id, sec_id, semester, year, building, room_number, time_slot_id)
const SECTIONS: &[(&str, &str, &str, i16, &str, &str, &str)] = &[
    ("BIO-101", "1", "Fall", 2025, "Building E", "120", "A"),
    ("BIO-301", "1", "Spring", 2025, "Building E", "120", "D"),
    ("CHEM-210", "1", "Spring", 2025, "Building D", "110", "B"),
    ("CS-201", "1", "Fall", 2025, "Building B", "201", "B"),
    ("CS-202", "1", "Spring", 2025, "Building B", "205", "C"),
    ("CS-301", "1", "Fall", 2025, "Building B", "201", "D"),
    ("ENV-240", "1", "Fall", 2025, "Building G", "150", "C"),
    ("MATH-101", "1", "Fall", 2025, "Building A", "101", "A"),
    ("MATH-201", "1", "Spring", 2025, "Building A", "102", "A"),
    ("PHYS-301", "1", "Fall", 2025, "Building C", "301", "C"),
    ("STAT-310", "1", "Fall", 2025, "Building F", "140", "B"),
];

// (instructor_id, course_id, sec_id, semester, year)
const TEACHES: &[(i32, &str, &str, &str, i16)] = &[
    (1, "MATH-101", "1", "Fall", 2025),
    (1, "MATH-201", "1", "Spring", 2025),
    (2, "CS-201", "1", "Fall", 2025),
    (3, "PHYS-301", "1", "Fall", 2025),
    (4, "CHEM-210", "1", "Spring", 2025),
    (5, "BIO-101", "1", "Fall", 2025),
    (5, "BIO-301", "1", "Spring", 2025),
    (6, "STAT-310", "1", "Fall", 2025),
    (7, "ENV-240", "1", "Fall", 2025),
    (8, "CS-202", "1", "Spring", 2025),
    (8, "CS-301", "1", "Fall", 2025),
];

// (student_id, instructor_id)
const ADVISORS: &[(i32, i32)] = &[
    (1, 1),
    (2, 2),
    (3, 3),
    (4, 4),
    (5, 5),
    (6, 1),
    (7, 2),
    (8, 3),
    (9, 4),
    (10, 5),
    (11, 6),
    (12, 7),
    (13, 1),
    (14, 2),
    (15, 8),
];

// (student_id, course_id, sec_id, semester, year, grade)
const TAKES: &[(i32, &str, &str, &str, i16, Option<&str>)] = &[
    (1, "MATH-101", "1", "Fall", 2025, Some("A")),
    (2, "CS-201", "1", "Fall", 2025, Some("B+")),
    (2, "CS-202", "1", "Spring", 2025, Some("A-")),
    (3, "PHYS-301", "1", "Fall", 2025, None),
    (4, "CHEM-210", "1", "Spring", 2025, Some("B")),
    (5, "BIO-101", "1", "Fall", 2025, Some("F")),
    (6, "MATH-101", "1", "Fall", 2025, Some("C+")),
    (7, "CS-201", "1", "Fall", 2025, None),
    (8, "BIO-101", "1", "Fall", 2025, Some("A")),
    (9, "STAT-310", "1", "Fall", 2025, None),
    (10, "ENV-240", "1", "Fall", 2025, Some("A-")),
    (11, "MATH-101", "1", "Fall", 2025, Some("B-")),
    (12, "BIO-101", "1", "Fall", 2025, None),
    (13, "MATH-201", "1", "Spring", 2025, Some("A")),
    (15, "MATH-101", "1", "Fall", 2025, Some("D")),
];

impl SeedService {
    /// Deletes everything leaf-first, reinserts the fixed dataset, and
    /// realigns the identity sequences. One transaction end to end.
    pub async fn reseed(db: &DatabaseConnection) -> Result<SeedReport> {
        let txn = db.begin().await?;

        // leaf tables first so no delete trips a foreign key
        takes::Entity::delete_many().exec(&txn).await?;
        teaches::Entity::delete_many().exec(&txn).await?;
        advisor::Entity::delete_many().exec(&txn).await?;
        section::Entity::delete_many().exec(&txn).await?;
        prereq::Entity::delete_many().exec(&txn).await?;
        time_slot::Entity::delete_many().exec(&txn).await?;
        course::Entity::delete_many().exec(&txn).await?;
        student::Entity::delete_many().exec(&txn).await?;
        instructor::Entity::delete_many().exec(&txn).await?;
        classroom::Entity::delete_many().exec(&txn).await?;
        department::Entity::delete_many().exec(&txn).await?;

        department::Entity::insert_many(department_rows()).exec(&txn).await?;
        classroom::Entity::insert_many(classroom_rows()).exec(&txn).await?;
        instructor::Entity::insert_many(instructor_rows()).exec(&txn).await?;
        student::Entity::insert_many(student_rows()).exec(&txn).await?;
        time_slot::Entity::insert_many(time_slot_rows()).exec(&txn).await?;
        course::Entity::insert_many(course_rows()).exec(&txn).await?;
        prereq::Entity::insert_many(prereq_rows()).exec(&txn).await?;
        section::Entity::insert_many(section_rows()).exec(&txn).await?;
        teaches::Entity::insert_many(teaches_rows()).exec(&txn).await?;
        advisor::Entity::insert_many(advisor_rows()).exec(&txn).await?;
        takes::Entity::insert_many(takes_rows()).exec(&txn).await?;

        // seed rows carry explicit ids; advance the sequences past them so
        // the next engine-assigned id cannot collide
        txn.execute_unprepared(
            "SELECT setval(pg_get_serial_sequence('instructor', 'id'), (SELECT MAX(id) FROM instructor))",
        )
        .await?;
        txn.execute_unprepared(
            "SELECT setval(pg_get_serial_sequence('student', 'id'), (SELECT MAX(id) FROM student))",
        )
        .await?;

        txn.commit().await?;

        let report = SeedReport {
            departments: DEPARTMENTS.len(),
            classrooms: CLASSROOMS.len(),
            courses: COURSES.len(),
            instructors: INSTRUCTORS.len(),
            students: STUDENTS.len(),
            time_slots: TIME_SLOTS.len(),
            sections: SECTIONS.len(),
            teaches: TEACHES.len(),
            advisors: ADVISORS.len(),
            takes: TAKES.len(),
            prereqs: PREREQS.len(),
        };
        log::info!(
            "reseeded: {} departments, {} courses, {} students, {} instructors",
            report.departments,
            report.courses,
            report.students,
            report.instructors
        );
        Ok(report)
    }
}

fn department_rows() -> Vec<department::ActiveModel> {
    DEPARTMENTS
        .iter()
        .map(|&(dept_name, building, budget)| department::ActiveModel {
            dept_name: Set(dept_name.to_owned()),
            building: Set(building.to_owned()),
            budget: Set(budget),
        })
        .collect()
}

fn classroom_rows() -> Vec<classroom::ActiveModel> {
    CLASSROOMS
        .iter()
        .map(|&(building, room_number, capacity)| classroom::ActiveModel {
            building: Set(building.to_owned()),
            room_number: Set(room_number.to_owned()),
            capacity: Set(capacity),
        })
        .collect()
}

fn course_rows() -> Vec<course::ActiveModel> {
    COURSES
        .iter()
        .map(|&(course_id, title, dept_name, credits)| course::ActiveModel {
            course_id: Set(course_id.to_owned()),
            title: Set(title.to_owned()),
            dept_name: Set(dept_name.to_owned()),
            credits: Set(credits),
        })
        .collect()
}

fn prereq_rows() -> Vec<prereq::ActiveModel> {
    PREREQS
        .iter()
        .map(|&(course_id, prereq_id)| prereq::ActiveModel {
            course_id: Set(course_id.to_owned()),
            prereq_id: Set(prereq_id.to_owned()),
        })
        .collect()
}

fn instructor_rows() -> Vec<instructor::ActiveModel> {
    INSTRUCTORS
        .iter()
        .map(|&(id, name, dept_name, salary)| instructor::ActiveModel {
            id: Set(id),
            name: Set(name.to_owned()),
            dept_name: Set(dept_name.to_owned()),
            salary: Set(salary),
        })
        .collect()
}

fn student_rows() -> Vec<student::ActiveModel> {
    STUDENTS
        .iter()
        .map(|&(id, name, dept_name, tot_cred)| student::ActiveModel {
            id: Set(id),
            name: Set(name.to_owned()),
            dept_name: Set(dept_name.to_owned()),
            tot_cred: Set(tot_cred),
        })
        .collect()
}

fn time_slot_rows() -> Vec<time_slot::ActiveModel> {
    TIME_SLOTS
        .iter()
        .map(
            |&(time_slot_id, day, start_hour, start_minute, end_hour, end_minute)| {
                time_slot::ActiveModel {
                    time_slot_id: Set(time_slot_id.to_owned()),
                    day: Set(day.to_owned()),
                    start_hour: Set(start_hour),
                    start_minute: Set(start_minute),
                    end_hour: Set(end_hour),
                    end_minute: Set(end_minute),
                }
            },
        )
        .collect()
}

fn section_rows() -> Vec<section::ActiveModel> {
    SECTIONS
        .iter()
        .map(
            |&(course_id, sec_id, semester, year, building, room_number, time_slot_id)| {
                section::ActiveModel {
                    course_id: Set(course_id.to_owned()),
                    sec_id: Set(sec_id.to_owned()),
                    semester: Set(semester.to_owned()),
                    year: Set(year),
                    building: Set(building.to_owned()),
                    room_number: Set(room_number.to_owned()),
                    time_slot_id: Set(time_slot_id.to_owned()),
                }
            },
        )
        .collect()
}

fn teaches_rows() -> Vec<teaches::ActiveModel> {
    TEACHES
        .iter()
        .map(
            |&(instructor_id, course_id, sec_id, semester, year)| teaches::ActiveModel {
                instructor_id: Set(instructor_id),
                course_id: Set(course_id.to_owned()),
                sec_id: Set(sec_id.to_owned()),
                semester: Set(semester.to_owned()),
                year: Set(year),
            },
        )
        .collect()
}

fn advisor_rows() -> Vec<advisor::ActiveModel> {
    ADVISORS
        .iter()
        .map(|&(student_id, instructor_id)| advisor::ActiveModel {
            student_id: Set(student_id),
            instructor_id: Set(instructor_id),
        })
        .collect()
}

fn takes_rows() -> Vec<takes::ActiveModel> {
    TAKES
        .iter()
        .map(
            |&(student_id, course_id, sec_id, semester, year, grade)| takes::ActiveModel {
                student_id: Set(student_id),
                course_id: Set(course_id.to_owned()),
                sec_id: Set(sec_id.to_owned()),
                semester: Set(semester.to_owned()),
                year: Set(year),
                grade: Set(grade.map(str::to_owned)),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Day, Grade};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
    use std::collections::{BTreeMap, HashMap, HashSet};

    fn pk_row(cols: &[(&'static str, Value)]) -> BTreeMap<&'static str, Value> {
        cols.iter().cloned().collect()
    }

    fn department_names() -> HashSet<&'static str> {
        DEPARTMENTS.iter().map(|d| d.0).collect()
    }

    fn course_ids() -> HashSet<&'static str> {
        COURSES.iter().map(|c| c.0).collect()
    }

    fn section_keys() -> HashSet<(&'static str, &'static str, &'static str, i16)> {
        SECTIONS.iter().map(|s| (s.0, s.1, s.2, s.3)).collect()
    }

    #[test]
    fn every_course_references_a_seeded_department() {
        let departments = department_names();
        for (course_id, _, dept_name, credits) in COURSES {
            assert!(departments.contains(dept_name), "{course_id} -> {dept_name}");
            assert!(*credits > 0);
        }
    }

    #[test]
    fn every_person_references_a_seeded_department() {
        let departments = department_names();
        for (id, _, dept_name, salary) in INSTRUCTORS {
            assert!(departments.contains(dept_name), "instructor {id}");
            assert!(*salary >= 0.0);
        }
        for (id, _, dept_name, tot_cred) in STUDENTS {
            assert!(departments.contains(dept_name), "student {id}");
            assert!(*tot_cred >= 0);
        }
    }

    #[test]
    fn seeded_ids_are_unique() {
        let instructor_ids: HashSet<i32> = INSTRUCTORS.iter().map(|i| i.0).collect();
        assert_eq!(instructor_ids.len(), INSTRUCTORS.len());

        let student_ids: HashSet<i32> = STUDENTS.iter().map(|s| s.0).collect();
        assert_eq!(student_ids.len(), STUDENTS.len());

        assert_eq!(course_ids().len(), COURSES.len());
    }

    #[test]
    fn every_section_references_seeded_rows() {
        let courses = course_ids();
        let classrooms: HashSet<(&str, &str)> = CLASSROOMS.iter().map(|c| (c.0, c.1)).collect();
        let slots: HashSet<&str> = TIME_SLOTS.iter().map(|t| t.0).collect();

        for (course_id, sec_id, _, _, building, room_number, time_slot_id) in SECTIONS {
            assert!(courses.contains(course_id), "{course_id}/{sec_id}");
            assert!(
                classrooms.contains(&(*building, *room_number)),
                "{course_id}/{sec_id} room"
            );
            assert!(slots.contains(time_slot_id), "{course_id}/{sec_id} slot");
        }
    }

    #[test]
    fn every_assignment_and_enrollment_references_seeded_rows() {
        let sections = section_keys();
        let instructor_ids: HashSet<i32> = INSTRUCTORS.iter().map(|i| i.0).collect();
        let student_ids: HashSet<i32> = STUDENTS.iter().map(|s| s.0).collect();

        for (instructor_id, course_id, sec_id, semester, year) in TEACHES {
            assert!(instructor_ids.contains(instructor_id));
            assert!(sections.contains(&(*course_id, *sec_id, *semester, *year)));
        }
        for (student_id, course_id, sec_id, semester, year, _) in TAKES {
            assert!(student_ids.contains(student_id));
            assert!(sections.contains(&(*course_id, *sec_id, *semester, *year)));
        }
        for (student_id, instructor_id) in ADVISORS {
            assert!(student_ids.contains(student_id));
            assert!(instructor_ids.contains(instructor_id));
        }
    }

    #[test]
    fn every_advised_student_appears_once() {
        let advised: HashSet<i32> = ADVISORS.iter().map(|a| a.0).collect();
        assert_eq!(advised.len(), ADVISORS.len());
    }

    #[test]
    fn every_prerequisite_references_seeded_courses() {
        let courses = course_ids();
        for (course_id, prereq_id) in PREREQS {
            assert!(courses.contains(course_id));
            assert!(courses.contains(prereq_id));
            assert_ne!(course_id, prereq_id);
        }
    }

    #[test]
    fn every_seeded_grade_parses() {
        for (student_id, course_id, _, _, _, grade) in TAKES {
            if let Some(grade) = grade {
                assert!(
                    grade.parse::<Grade>().is_ok(),
                    "student {student_id} in {course_id}: bad grade {grade}"
                );
            }
        }
    }

    // Mirrors the average-salary report over the seed: each department's
    // mean must equal the arithmetic mean of its seeded salaries.
    #[test]
    fn seeded_salaries_produce_known_department_averages() {
        let mut sums: HashMap<&str, (f64, u32)> = HashMap::new();
        for (_, _, dept_name, salary) in INSTRUCTORS {
            let entry = sums.entry(dept_name).or_insert((0.0, 0));
            entry.0 += salary;
            entry.1 += 1;
        }

        let avg = |dept: &str| {
            let (sum, count) = sums[dept];
            sum / f64::from(count)
        };

        assert_eq!(avg("Mathematics"), 72_000.0);
        assert_eq!(avg("Computer Science"), 85_000.0);
        assert_eq!(avg("Biology"), 74_000.0);
    }

    #[test]
    fn every_seeded_day_code_parses() {
        for (slot_id, day, ..) in TIME_SLOTS {
            assert!(
                day.parse::<Day>().is_ok(),
                "slot {slot_id}: bad day code {day}"
            );
        }
    }

    // Reseed is only count-stable if the delete pass clears every table the
    // insert pass repopulates. Only the auto-increment inserts (instructor,
    // student) read a returning row back; every other statement is a plain
    // exec. The statement log shows which tables were touched.
    #[tokio::test]
    async fn reseed_deletes_every_table_it_repopulates() {
        let returning = vec![
            pk_row(&[("id", 8i32.into())]),
            pk_row(&[("id", 15i32.into())]),
        ];

        // 11 deletes, 9 pre-keyed inserts, plus the two setval statements
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results((0..22).map(|_| MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }))
            .append_query_results(returning.into_iter().map(|row| vec![row]))
            .into_connection();

        let report = SeedService::reseed(&db).await.unwrap();
        assert_eq!(report.departments, DEPARTMENTS.len());
        assert_eq!(report.takes, TAKES.len());

        // identifiers appear quote-escaped in the debug-rendered log
        let log = format!("{:?}", db.into_transaction_log());
        for table in [
            "takes",
            "teaches",
            "advisor",
            "section",
            "prereq",
            "time_slot",
            "course",
            "student",
            "instructor",
            "classroom",
            "department",
        ] {
            assert!(
                log.contains(&format!("DELETE FROM \\\"{table}\\\"")),
                "no delete for {table}"
            );
            assert!(
                log.contains(&format!("INSERT INTO \\\"{table}\\\"")),
                "no insert for {table}"
            );
        }
    }

    #[test]
    fn seed_row_builders_cover_the_whole_dataset() {
        assert_eq!(department_rows().len(), DEPARTMENTS.len());
        assert_eq!(classroom_rows().len(), CLASSROOMS.len());
        assert_eq!(course_rows().len(), COURSES.len());
        assert_eq!(instructor_rows().len(), INSTRUCTORS.len());
        assert_eq!(student_rows().len(), STUDENTS.len());
        assert_eq!(time_slot_rows().len(), TIME_SLOTS.len());
        assert_eq!(section_rows().len(), SECTIONS.len());
        assert_eq!(teaches_rows().len(), TEACHES.len());
        assert_eq!(advisor_rows().len(), ADVISORS.len());
        assert_eq!(takes_rows().len(), TAKES.len());
        assert_eq!(prereq_rows().len(), PREREQS.len());
    }
}
