pub mod admin;
pub mod course;
pub mod department;
pub mod enrollment;
pub mod instructor;
pub mod report;
pub mod section;
pub mod student;
