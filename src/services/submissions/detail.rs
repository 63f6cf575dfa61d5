use super::SubmissionService;
use crate::errors::{GradingError, Result};
use crate::models::GradebookDocument;
use crate::models::submissions::responses::{AssignmentBrief, StudentGradeResponse};

pub fn find_student_grade(
    document: &GradebookDocument,
    assignment_id: i64,
    student_id: &str,
) -> Result<StudentGradeResponse> {
    document
        .find_assignment(assignment_id)
        .and_then(|assignment| {
            assignment
                .find_submission(student_id)
                .map(|submission| StudentGradeResponse {
                    submission: submission.clone(),
                    assignment: AssignmentBrief {
                        title: assignment.title.clone(),
                        max_points: assignment.max_points,
                    },
                })
        })
        .ok_or_else(|| GradingError::not_found("No submission found"))
}

pub async fn get_student_grade(
    service: &SubmissionService,
    assignment_id: i64,
    student_id: &str,
) -> Result<StudentGradeResponse> {
    let document = service.get_storage().load().await?;
    find_student_grade(&document, assignment_id, student_id)
}
