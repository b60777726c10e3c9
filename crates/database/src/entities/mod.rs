pub mod advisor;
pub mod classroom;
pub mod course;
pub mod department;
pub mod instructor;
pub mod prereq;
pub mod section;
pub mod student;
pub mod takes;
pub mod teaches;
pub mod time_slot;
