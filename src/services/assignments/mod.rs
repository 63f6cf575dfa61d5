pub mod create;
pub mod detail;
pub mod list;
pub mod stats;

use std::sync::Arc;

use crate::config::GradingConfig;
use crate::errors::Result;
use crate::models::assignments::{
    entities::Assignment,
    requests::CreateAssignmentRequest,
    responses::{AssignmentOverview, AssignmentSubmissionsResponse},
    stats_responses::AssignmentStatistics,
};
use crate::models::submissions::entities::SubmissionStatus;
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Arc<dyn Storage>,
    defaults: GradingConfig,
}

impl AssignmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_defaults(storage, GradingConfig::default())
    }

    pub fn with_defaults(storage: Arc<dyn Storage>, defaults: GradingConfig) -> Self {
        Self { storage, defaults }
    }

    pub(crate) fn get_storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub(crate) fn defaults(&self) -> &GradingConfig {
        &self.defaults
    }

    /// 创建作业
    pub async fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        create::create_assignment(self, req).await
    }

    /// 列出全部作业及其统计
    pub async fn list_assignments(&self) -> Result<Vec<AssignmentOverview>> {
        list::list_assignments(self).await
    }

    /// 获取作业提交列表（可按状态筛选）
    pub async fn get_assignment_submissions(
        &self,
        assignment_id: i64,
        status_filter: Option<SubmissionStatus>,
    ) -> Result<AssignmentSubmissionsResponse> {
        detail::get_assignment_submissions(self, assignment_id, status_filter).await
    }

    /// 获取作业统计
    pub async fn get_assignment_statistics(
        &self,
        assignment_id: i64,
    ) -> Result<AssignmentStatistics> {
        stats::get_assignment_statistics(self, assignment_id).await
    }
}
