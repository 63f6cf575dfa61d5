use chrono::NaiveDateTime;
use tracing::info;

use super::SubmissionService;
use crate::errors::{GradingError, Result};
use crate::models::GradebookDocument;
use crate::models::submissions::{
    entities::{Submission, SubmissionStatus},
    requests::SubmitAssignmentRequest,
};
use crate::storage::update_document;
use crate::utils::datetime;
use crate::utils::validate::{validate_identifier, validate_required};

/// 记录一次提交，同一学生的旧提交（连同评分与评论）被整体替换
pub fn apply_submission(
    document: &mut GradebookDocument,
    assignment_id: i64,
    req: SubmitAssignmentRequest,
    now: NaiveDateTime,
) -> Result<Submission> {
    validate_identifier("Student id", &req.student_id)?;
    validate_required("Student name", &req.student_name)?;
    validate_required("Submitted file", &req.submitted_file)?;

    let assignment = document
        .find_assignment_mut(assignment_id)
        .ok_or_else(|| GradingError::not_found("Assignment not found"))?;

    let status = if assignment.is_late_at(now) {
        SubmissionStatus::Late
    } else {
        SubmissionStatus::Submitted
    };

    let submission = Submission {
        student_id: req.student_id,
        student_name: req.student_name,
        submitted_file: req.submitted_file,
        submission_date: now,
        status,
        grade: None,
        private_comments: Vec::new(),
    };

    assignment
        .submissions
        .retain(|s| s.student_id != submission.student_id);
    assignment.submissions.push(submission.clone());
    Ok(submission)
}

pub async fn submit_assignment(
    service: &SubmissionService,
    assignment_id: i64,
    req: SubmitAssignmentRequest,
) -> Result<Submission> {
    let now = datetime::now();
    let submission = update_document(service.get_storage(), |document| {
        apply_submission(document, assignment_id, req, now)
    })
    .await?;

    info!(
        assignment_id,
        student_id = %submission.student_id,
        status = %submission.status,
        "Submission recorded: {}",
        submission.submitted_file
    );
    Ok(submission)
}
