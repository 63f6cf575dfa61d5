use chrono::NaiveDateTime;
use serde::Serialize;

use super::entities::Assignment;
use super::stats_responses::AssignmentStatistics;
use crate::models::submissions::entities::{Submission, SubmissionStatus};
use crate::utils::datetime::serde_datetime;

/// 各状态的提交数量
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct StatusSummary {
    pub missing: i64,
    pub submitted: i64,
    pub graded: i64,
    pub returned: i64,
    pub late: i64,
}

impl StatusSummary {
    pub fn from_submissions(submissions: &[Submission]) -> Self {
        let mut summary = Self::default();
        for submission in submissions {
            *summary.slot_mut(submission.status) += 1;
        }
        summary
    }

    pub fn count(&self, status: SubmissionStatus) -> i64 {
        match status {
            SubmissionStatus::Missing => self.missing,
            SubmissionStatus::Submitted => self.submitted,
            SubmissionStatus::Graded => self.graded,
            SubmissionStatus::Returned => self.returned,
            SubmissionStatus::Late => self.late,
        }
    }

    fn slot_mut(&mut self, status: SubmissionStatus) -> &mut i64 {
        match status {
            SubmissionStatus::Missing => &mut self.missing,
            SubmissionStatus::Submitted => &mut self.submitted,
            SubmissionStatus::Graded => &mut self.graded,
            SubmissionStatus::Returned => &mut self.returned,
            SubmissionStatus::Late => &mut self.late,
        }
    }
}

/// 作业提交列表响应
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssignmentSubmissionsResponse {
    pub assignment: Assignment,
    // 按状态筛选后的提交
    pub submissions: Vec<Submission>,
    // 基于全部提交的状态统计
    pub summary: StatusSummary,
}

/// 作业列表项（附带统计）
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssignmentOverview {
    pub id: i64,
    pub title: String,
    #[serde(with = "serde_datetime")]
    pub due_date: NaiveDateTime,
    pub max_points: f64,
    pub statistics: AssignmentStatistics,
}
