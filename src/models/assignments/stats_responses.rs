use serde::Serialize;

/// 作业统计响应
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssignmentStatistics {
    pub assignment_id: i64,
    pub total_students: i64,
    pub submitted_count: i64,
    pub graded_count: i64,
    pub missing_count: i64,
    pub late_count: i64,
    pub average_grade: f64,
    pub highest_grade: Option<f64>,
    pub lowest_grade: Option<f64>,
    pub grade_distribution: Vec<GradeRange>,
}

/// 成绩区间
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GradeRange {
    pub range: String,
    pub count: i64,
}

/// 等级划分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeBand {
    A,
    B,
    C,
    D,
    F,
}

impl GradeBand {
    pub fn all() -> &'static [GradeBand] {
        &[Self::A, Self::B, Self::C, Self::D, Self::F]
    }

    /// 百分比所属等级，五个区间互不重叠
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::A
        } else if percentage >= 80.0 {
            Self::B
        } else if percentage >= 70.0 {
            Self::C
        } else if percentage >= 60.0 {
            Self::D
        } else {
            Self::F
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::A => "A (90-100)",
            Self::B => "B (80-89)",
            Self::C => "C (70-79)",
            Self::D => "D (60-69)",
            Self::F => "F (0-59)",
        }
    }
}
