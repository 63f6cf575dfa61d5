pub mod create;
pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::comments::{entities::Comment, requests::AddCommentRequest};
use crate::storage::Storage;

pub struct CommentService {
    storage: Arc<dyn Storage>,
}

impl CommentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// 添加私信评论
    pub async fn add_private_comment(
        &self,
        assignment_id: i64,
        student_id: &str,
        req: AddCommentRequest,
    ) -> Result<Comment> {
        create::add_private_comment(self, assignment_id, student_id, req).await
    }

    /// 获取私信评论，提交不存在时返回空列表
    pub async fn get_private_comments(
        &self,
        assignment_id: i64,
        student_id: &str,
    ) -> Result<Vec<Comment>> {
        list::get_private_comments(self, assignment_id, student_id).await
    }
}
