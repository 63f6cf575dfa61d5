use tracing::info;

use super::SubmissionService;
use crate::errors::{GradingError, Result};
use crate::models::GradebookDocument;
use crate::models::submissions::entities::{Submission, SubmissionStatus};
use crate::storage::update_document;

pub fn apply_status(
    document: &mut GradebookDocument,
    assignment_id: i64,
    student_id: &str,
    status: SubmissionStatus,
) -> Result<Submission> {
    let submission = document
        .find_assignment_mut(assignment_id)
        .and_then(|assignment| assignment.find_submission_mut(student_id))
        .ok_or_else(|| GradingError::not_found("Submission not found"))?;

    submission.status = status;
    Ok(submission.clone())
}

pub async fn update_status(
    service: &SubmissionService,
    assignment_id: i64,
    student_id: &str,
    status: SubmissionStatus,
) -> Result<Submission> {
    let submission = update_document(service.get_storage(), |document| {
        apply_status(document, assignment_id, student_id, status)
    })
    .await?;

    info!(assignment_id, student_id, "Submission status set to {}", status);
    Ok(submission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_document;

    #[test]
    fn test_status_change_keeps_grade_and_comments() {
        let mut document = sample_document();
        let updated = apply_status(&mut document, 1, "student1", SubmissionStatus::Returned).unwrap();

        assert_eq!(updated.status, SubmissionStatus::Returned);
        assert_eq!(updated.private_comments.len(), 1);
        assert_eq!(document.assignments[0].submissions[0], updated);
    }

    #[test]
    fn test_unknown_assignment_or_student() {
        let mut document = sample_document();
        let expected = GradingError::not_found("Submission not found");

        assert_eq!(
            apply_status(&mut document, 9, "student1", SubmissionStatus::Missing).unwrap_err(),
            expected
        );
        assert_eq!(
            apply_status(&mut document, 1, "nobody", SubmissionStatus::Missing).unwrap_err(),
            expected
        );
    }
}
