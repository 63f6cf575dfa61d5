use serde::Serialize;

use super::entities::{Submission, SubmissionStatus};

/// 成绩查询中附带的作业信息
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssignmentBrief {
    pub title: String,
    pub max_points: f64,
}

/// 学生成绩响应
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StudentGradeResponse {
    pub submission: Submission,
    pub assignment: AssignmentBrief,
}

/// 状态选项
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusOption {
    pub status: SubmissionStatus,
    pub label: String,
}
