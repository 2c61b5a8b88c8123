use log::{debug, info};
use crate::models::CourseRecord;

pub const MAX_GPA: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterGrade {
    APlus,
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    F,
}

impl LetterGrade {
    // Exact, case-sensitive match on the conventional symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let grade = match symbol {
            "A+" => Self::APlus,
            "A" => Self::A,
            "A-" => Self::AMinus,
            "B+" => Self::BPlus,
            "B" => Self::B,
            "B-" => Self::BMinus,
            "C+" => Self::CPlus,
            "C" => Self::C,
            "C-" => Self::CMinus,
            "D+" => Self::DPlus,
            "D" => Self::D,
            "F" => Self::F,
            _ => return None,
        };
        Some(grade)
    }

    pub fn points(self) -> f64 {
        match self {
            Self::APlus | Self::A => 4.0,
            Self::AMinus => 3.7,
            Self::BPlus => 3.3,
            Self::B => 3.0,
            Self::BMinus => 2.7,
            Self::CPlus => 2.3,
            Self::C => 2.0,
            Self::CMinus => 1.7,
            Self::DPlus => 1.3,
            Self::D => 1.0,
            Self::F => 0.0,
        }
    }
}

// Converts a letter grade to grade points. Unknown symbols count as 0.0 rather than being rejected.
pub fn grade_to_points(letter_grade: &str) -> f64 {
    match LetterGrade::from_symbol(letter_grade) {
        Some(grade) => grade.points(),
        None => {
            debug!("Unrecognised grade {:?}, counting it as 0.0", letter_grade);
            0.0
        }
    }
}

// Credit-weighted average of the given records, rounded to two decimals.
pub fn calculate_gpa(records: &[CourseRecord]) -> f64 {
    let total_credits: u64 = records.iter().map(|r| u64::from(r.credits)).sum();
    if total_credits == 0 {
        return 0.0;
    }
    let total_points: f64 = records.iter().map(|r| r.grade_points * f64::from(r.credits)).sum();
    round2(total_points / total_credits as f64)
}

// Percentage of the 4.0 ceiling. Not clamped.
pub fn progress_ratio(gpa: f64) -> f64 {
    (gpa / MAX_GPA) * 100.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// Owned, insertion-ordered collection of course records. The book only admits records;
// the GPA is computed by the free functions above over a snapshot from `records()`.
#[derive(Debug, Default)]
pub struct Gradebook {
    courses: Vec<CourseRecord>,
    next_id: u64,
}

impl Gradebook {
    pub fn new() -> Self {
        Self { courses: Vec::new(), next_id: 1 }
    }

    // The four courses the insights page starts with.
    pub fn with_seed_courses() -> Self {
        let mut book = Self::new();
        for (name, grade, credits) in [
            ("Calculus I", "A", 4),
            ("Physics", "B+", 3),
            ("Chemistry", "A-", 4),
            ("English", "B", 3),
        ] {
            book.add_course(name, grade, credits);
        }
        book
    }

    // Appends a course, or does nothing if the name or grade is empty or credits are not positive.
    pub fn add_course(&mut self, name: &str, letter_grade: &str, credits: i64) -> Option<&CourseRecord> {
        if name.is_empty() || letter_grade.is_empty() || credits <= 0 {
            debug!("Ignoring course {:?} ({:?}, {} credits)", name, letter_grade, credits);
            return None;
        }
        let credits = match u32::try_from(credits) {
            Ok(credits) => credits,
            Err(_) => {
                debug!("Ignoring course {:?}: {} credits is out of range", name, credits);
                return None;
            }
        };

        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.courses.push(CourseRecord {
            id,
            name: name.to_string(),
            grade: letter_grade.to_string(),
            credits,
            grade_points: grade_to_points(letter_grade),
        });
        info!("Course added: {}", name);
        self.courses.last()
    }

    pub fn records(&self) -> &[CourseRecord] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
