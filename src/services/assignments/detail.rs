use super::AssignmentService;
use crate::errors::{GradingError, Result};
use crate::models::GradebookDocument;
use crate::models::assignments::responses::{AssignmentSubmissionsResponse, StatusSummary};
use crate::models::submissions::entities::SubmissionStatus;

/// 收集作业提交，筛选只作用于列表，状态统计始终基于全部提交
pub fn collect_assignment_submissions(
    document: &GradebookDocument,
    assignment_id: i64,
    status_filter: Option<SubmissionStatus>,
) -> Result<AssignmentSubmissionsResponse> {
    let assignment = document
        .find_assignment(assignment_id)
        .ok_or_else(|| GradingError::not_found("Assignment not found"))?;

    let submissions = assignment
        .submissions
        .iter()
        .filter(|s| status_filter.is_none_or(|status| s.status == status))
        .cloned()
        .collect();

    Ok(AssignmentSubmissionsResponse {
        assignment: assignment.clone(),
        submissions,
        summary: StatusSummary::from_submissions(&assignment.submissions),
    })
}

pub async fn get_assignment_submissions(
    service: &AssignmentService,
    assignment_id: i64,
    status_filter: Option<SubmissionStatus>,
) -> Result<AssignmentSubmissionsResponse> {
    let document = service.get_storage().load().await?;
    collect_assignment_submissions(&document, assignment_id, status_filter)
}
