use chrono::NaiveDateTime;
use tracing::{info, warn};

use super::SubmissionService;
use crate::errors::{GradingError, Result};
use crate::models::GradebookDocument;
use crate::models::submissions::{
    entities::{Grade, SubmissionStatus},
    requests::GradeSubmissionRequest,
};
use crate::storage::update_document;
use crate::utils::datetime;
use crate::utils::validate::{validate_points_earned, validate_required, validate_weights};

/// 为学生提交评分，状态无条件置为 graded
pub fn apply_grade(
    document: &mut GradebookDocument,
    assignment_id: i64,
    student_id: &str,
    req: GradeSubmissionRequest,
    now: NaiveDateTime,
) -> Result<Grade> {
    let assignment = document
        .find_assignment_mut(assignment_id)
        .ok_or_else(|| GradingError::not_found("Assignment not found"))?;
    let max_points = assignment.max_points;
    let submission = assignment
        .find_submission_mut(student_id)
        .ok_or_else(|| GradingError::not_found("Student submission not found"))?;

    validate_points_earned(req.points_earned)?;
    validate_weights("Breakdown", &req.breakdown)?;
    validate_required("Grader", &req.graded_by)?;
    if !max_points.is_finite() || max_points <= 0.0 {
        return Err(GradingError::validation(format!(
            "Assignment {assignment_id} has invalid max points: {max_points}"
        )));
    }

    if req.points_earned > max_points {
        warn!(
            assignment_id,
            student_id, "Awarding {} of {} points (extra credit)", req.points_earned, max_points
        );
    }

    let grade = Grade {
        points_earned: req.points_earned,
        percentage: Grade::percentage_of(req.points_earned, max_points),
        breakdown: req.breakdown,
        feedback: req.feedback,
        graded_by: req.graded_by,
        graded_date: now,
    };

    submission.grade = Some(grade.clone());
    submission.status = SubmissionStatus::Graded;
    Ok(grade)
}

pub async fn grade_submission(
    service: &SubmissionService,
    assignment_id: i64,
    student_id: &str,
    req: GradeSubmissionRequest,
) -> Result<Grade> {
    let now = datetime::now();
    let grade = update_document(service.get_storage(), |document| {
        apply_grade(document, assignment_id, student_id, req, now)
    })
    .await?;

    info!(
        assignment_id,
        student_id,
        percentage = grade.percentage,
        "Submission graded by {}",
        grade.graded_by
    );
    Ok(grade)
}
