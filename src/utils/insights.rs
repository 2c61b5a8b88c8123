use log::info;
use crate::models::{CourseRecord, GoalPlan, InsightsReport};
use crate::utils::gpa::{calculate_gpa, progress_ratio, Gradebook, MAX_GPA};

// Canned improvement tips, no model behind them.
const SUGGESTIONS: [&str; 4] = [
    "Focus 2 hours daily on Math to improve understanding",
    "Join study groups for Physics - collaboration helps",
    "Use active recall techniques for Chemistry memorization",
    "Practice writing essays to improve English grades",
];

pub fn suggestions() -> &'static [&'static str] {
    &SUGGESTIONS
}

// Accepts a goal only when both the target and the timeline are filled in. Plans are kept in memory only.
pub fn save_plan(target: &str, timeline: &str) -> Option<GoalPlan> {
    if target.is_empty() || timeline.is_empty() {
        return None;
    }
    let plan = GoalPlan { target: target.to_string(), timeline: timeline.to_string() };
    info!("Plan saved: {:?}", plan);
    Some(plan)
}

pub fn build_report(book: &Gradebook, goal: Option<&GoalPlan>) -> InsightsReport {
    let gpa = calculate_gpa(book.records());
    InsightsReport {
        courses: book.records().to_vec(),
        gpa,
        progress: progress_ratio(gpa),
        suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        goal: goal.cloned(),
    }
}

// Renders the course table: name, grade, credits and grade points to one decimal.
pub fn render_table(records: &[CourseRecord]) -> String {
    let width = records.iter().map(|r| r.name.chars().count()).max().unwrap_or(0).max("Course".len());
    let mut table = format!("{:<width$}  {:<5}  {:>7}  {:>10}\n", "Course", "Grade", "Credits", "GPA Points");
    for record in records {
        table.push_str(&format!(
            "{:<width$}  {:<5}  {:>7}  {:>10.1}\n",
            record.name, record.grade, record.credits, record.grade_points
        ));
    }
    table
}

pub fn render_summary(gpa: f64) -> String {
    format!("{:.2} out of {:.1}\n{:.1}% of maximum GPA\n", gpa, MAX_GPA, progress_ratio(gpa))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_needs_target_and_timeline() {
        assert_eq!(save_plan("", "End of semester"), None);
        assert_eq!(save_plan("Achieve 3.8 GPA", ""), None);

        let plan = save_plan("Achieve 3.8 GPA", "End of semester").unwrap();
        assert_eq!(plan.target, "Achieve 3.8 GPA");
        assert_eq!(plan.timeline, "End of semester");
    }

    #[test]
    fn report_reflects_current_book() {
        let book = Gradebook::with_seed_courses();
        let plan = save_plan("Achieve 3.8 GPA", "End of semester");
        let report = build_report(&book, plan.as_ref());

        assert_eq!(report.courses.len(), 4);
        assert_eq!(report.gpa, calculate_gpa(book.records()));
        assert_eq!(report.progress, progress_ratio(report.gpa));
        assert_eq!(report.suggestions.len(), suggestions().len());
        assert_eq!(report.goal, plan);
    }

    #[test]
    fn report_serializes_to_json() {
        let report = build_report(&Gradebook::new(), None);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["gpa"], 0.0);
        assert!(json["courses"].as_array().unwrap().is_empty());
        assert!(json["goal"].is_null());
    }

    #[test]
    fn table_lists_courses_in_order() {
        let book = Gradebook::with_seed_courses();
        let table = render_table(book.records());
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Course"));
        assert!(lines[1].starts_with("Calculus I"));
        assert!(lines[2].contains("B+"));
        assert!(lines[3].ends_with("3.7"));
        assert!(lines[4].starts_with("English"));
    }

    #[test]
    fn summary_shows_gpa_and_progress() {
        assert_eq!(render_summary(3.52), "3.52 out of 4.0\n88.0% of maximum GPA\n");
        assert_eq!(render_summary(0.0), "0.00 out of 4.0\n0.0% of maximum GPA\n");
    }
}
