use chrono::NaiveDateTime;
use tracing::info;

use super::CommentService;
use crate::errors::{GradingError, Result};
use crate::models::GradebookDocument;
use crate::models::comments::{entities::Comment, requests::AddCommentRequest};
use crate::storage::update_document;
use crate::utils::datetime;
use crate::utils::generate_unique_comment_id;
use crate::utils::validate::{validate_identifier, validate_required};

pub fn apply_comment(
    document: &mut GradebookDocument,
    assignment_id: i64,
    student_id: &str,
    req: AddCommentRequest,
    now: NaiveDateTime,
) -> Result<Comment> {
    validate_identifier("Author", &req.author)?;
    validate_required("Author name", &req.author_name)?;
    validate_required("Message", &req.message)?;

    let submission = document
        .find_assignment_mut(assignment_id)
        .and_then(|assignment| assignment.find_submission_mut(student_id))
        .ok_or_else(|| GradingError::not_found("Assignment or student not found"))?;

    // ID 在同一提交内唯一
    let id = generate_unique_comment_id(|candidate| {
        submission.private_comments.iter().any(|c| c.id == candidate)
    })?;

    let comment = Comment {
        id,
        author: req.author,
        author_name: req.author_name,
        message: req.message,
        timestamp: now,
        comment_type: req.comment_type,
    };

    submission.private_comments.push(comment.clone());
    Ok(comment)
}

pub async fn add_private_comment(
    service: &CommentService,
    assignment_id: i64,
    student_id: &str,
    req: AddCommentRequest,
) -> Result<Comment> {
    let now = datetime::now();
    let comment = update_document(service.get_storage(), |document| {
        apply_comment(document, assignment_id, student_id, req, now)
    })
    .await?;

    info!(
        assignment_id,
        student_id,
        comment_id = %comment.id,
        "Private {} comment added by {}",
        comment.comment_type,
        comment.author
    );
    Ok(comment)
}
