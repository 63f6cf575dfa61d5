use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::submissions::entities::Submission;
use crate::utils::datetime::serde_datetime;

fn default_max_points() -> f64 {
    100.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    // 唯一 ID（创建时取最大值 + 1）
    pub id: i64,
    // 作业标题
    pub title: String,
    // 作业描述
    #[serde(default)]
    pub description: String,
    // 截止时间
    #[serde(with = "serde_datetime")]
    pub due_date: NaiveDateTime,
    // 满分
    #[serde(default = "default_max_points")]
    pub max_points: f64,
    // 评分标准：评分项 -> 权重
    #[serde(default)]
    pub grading_criteria: BTreeMap<String, f64>,
    // 学生提交，每个学生至多一条
    #[serde(default)]
    pub submissions: Vec<Submission>,
    // 创建时间
    #[serde(default, with = "serde_datetime::option")]
    pub created_date: Option<NaiveDateTime>,
}

impl Assignment {
    pub fn find_submission(&self, student_id: &str) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.student_id == student_id)
    }

    pub fn find_submission_mut(&mut self, student_id: &str) -> Option<&mut Submission> {
        self.submissions
            .iter_mut()
            .find(|s| s.student_id == student_id)
    }

    /// 在给定时间提交是否算迟交
    pub fn is_late_at(&self, at: NaiveDateTime) -> bool {
        at > self.due_date
    }
}
