use serde::Serialize;

// A course as entered by the student. `grade_points` is taken from the grade table
// when the record is created and never refreshed afterwards.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CourseRecord {
    pub id: u64,
    pub name: String,
    pub grade: String,
    pub credits: u32,
    pub grade_points: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct GoalPlan {
    pub target: String,
    pub timeline: String,
}

#[derive(Debug, Serialize)]
pub struct InsightsReport {
    pub courses: Vec<CourseRecord>,
    pub gpa: f64,
    pub progress: f64,
    pub suggestions: Vec<String>,
    pub goal: Option<GoalPlan>,
}
