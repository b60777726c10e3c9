use database::seed::SeedReport;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct SeedReportResponse {
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

impl From<SeedReport> for SeedReportResponse {
    fn from(report: SeedReport) -> Self {
        Self {
            departments: report.departments,
            classrooms: report.classrooms,
            courses: report.courses,
            instructors: report.instructors,
            students: report.students,
            time_slots: report.time_slots,
            sections: report.sections,
            teaches: report.teaches,
            advisors: report.advisors,
            takes: report.takes,
            prereqs: report.prereqs,
        }
    }
}
