use serde::Deserialize;
use std::collections::BTreeMap;

/// 提交作业请求
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAssignmentRequest {
    pub student_id: String,
    pub student_name: String,
    pub submitted_file: String,
}

/// 评分请求
#[derive(Debug, Clone, Deserialize)]
pub struct GradeSubmissionRequest {
    pub points_earned: f64,
    #[serde(default)]
    pub breakdown: BTreeMap<String, f64>,
    #[serde(default)]
    pub feedback: String,
    pub graded_by: String,
}
