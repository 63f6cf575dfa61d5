use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::utils::datetime::serde_datetime;

/// 创建作业请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignmentRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "serde_datetime")]
    pub due_date: NaiveDateTime,
    // 为空时使用配置的默认满分
    pub max_points: Option<f64>,
    // 为空时使用单一的默认评分项
    #[serde(default)]
    pub grading_criteria: BTreeMap<String, f64>,
}
