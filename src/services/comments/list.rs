use tracing::debug;

use super::CommentService;
use crate::errors::Result;
use crate::models::GradebookDocument;
use crate::models::comments::entities::Comment;

/// 按添加顺序返回评论，作业或提交不存在时为空
pub fn collect_comments(
    document: &GradebookDocument,
    assignment_id: i64,
    student_id: &str,
) -> Vec<Comment> {
    document
        .find_assignment(assignment_id)
        .and_then(|assignment| assignment.find_submission(student_id))
        .map(|submission| submission.private_comments.clone())
        .unwrap_or_default()
}

pub async fn get_private_comments(
    service: &CommentService,
    assignment_id: i64,
    student_id: &str,
) -> Result<Vec<Comment>> {
    let document = service.get_storage().load().await?;
    let comments = collect_comments(&document, assignment_id, student_id);
    debug!(
        assignment_id,
        student_id, "Found {} private comments", comments.len()
    );
    Ok(comments)
}
