use serde::Deserialize;

use super::entities::CommentType;

/// 添加私信评论请求
#[derive(Debug, Clone, Deserialize)]
pub struct AddCommentRequest {
    pub author: String,
    pub author_name: String,
    pub message: String,
    #[serde(rename = "type")]
    pub comment_type: CommentType,
}
