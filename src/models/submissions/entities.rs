use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::comments::entities::Comment;
use crate::utils::datetime::serde_datetime;
use crate::utils::round2;

// 提交状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Missing, // 缺交
    #[default]
    Submitted, // 已提交
    Graded,   // 已评分
    Returned, // 已发还
    Late,     // 迟交
}

impl SubmissionStatus {
    pub const MISSING: &'static str = "missing";
    pub const SUBMITTED: &'static str = "submitted";
    pub const GRADED: &'static str = "graded";
    pub const RETURNED: &'static str = "returned";
    pub const LATE: &'static str = "late";

    /// 全部状态（按展示顺序）
    pub fn all() -> &'static [SubmissionStatus] {
        &[
            Self::Missing,
            Self::Submitted,
            Self::Graded,
            Self::Returned,
            Self::Late,
        ]
    }

    /// 展示名称
    pub fn label(&self) -> &'static str {
        match self {
            Self::Missing => "Missing",
            Self::Submitted => "Submitted",
            Self::Graded => "Graded",
            Self::Returned => "Returned",
            Self::Late => "Late",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => Self::MISSING,
            Self::Submitted => Self::SUBMITTED,
            Self::Graded => Self::GRADED,
            Self::Returned => Self::RETURNED,
            Self::Late => Self::LATE,
        }
    }

    /// 学生是否已经交过文件
    pub fn counts_as_submitted(&self) -> bool {
        !matches!(self, Self::Missing)
    }
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "Invalid submission status: '{s}'. Supported: missing, submitted, graded, returned, late"
            ))
        })
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::MISSING => Ok(Self::Missing),
            Self::SUBMITTED => Ok(Self::Submitted),
            Self::GRADED => Ok(Self::Graded),
            Self::RETURNED => Ok(Self::Returned),
            Self::LATE => Ok(Self::Late),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

/// 评分
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Grade {
    // 得分
    pub points_earned: f64,
    // 百分比（保留两位小数）
    pub percentage: f64,
    // 各评分项得分
    #[serde(default)]
    pub breakdown: BTreeMap<String, f64>,
    // 评语
    #[serde(default)]
    pub feedback: String,
    // 评分人
    pub graded_by: String,
    // 评分时间
    #[serde(with = "serde_datetime")]
    pub graded_date: NaiveDateTime,
}

impl Grade {
    /// 计算得分百分比，四舍五入到两位小数
    pub fn percentage_of(points_earned: f64, max_points: f64) -> f64 {
        round2(points_earned / max_points * 100.0)
    }
}

/// 学生提交
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    pub student_id: String,
    pub student_name: String,
    pub submitted_file: String,
    #[serde(with = "serde_datetime")]
    pub submission_date: NaiveDateTime,
    #[serde(default)]
    pub status: SubmissionStatus,
    #[serde(default)]
    pub grade: Option<Grade>,
    // 私信评论
    #[serde(default)]
    pub private_comments: Vec<Comment>,
}
