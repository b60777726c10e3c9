pub mod grade;
pub mod semester;
pub mod time_slot;

pub use grade::Grade;
pub use semester::Semester;
pub use time_slot::Day;
