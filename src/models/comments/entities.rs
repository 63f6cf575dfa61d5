use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::datetime::serde_datetime;

// 评论者类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommentType {
    Teacher, // 教师
    Student, // 学生
}

impl CommentType {
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";
}

impl<'de> Deserialize<'de> for CommentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            CommentType::TEACHER => Ok(CommentType::Teacher),
            CommentType::STUDENT => Ok(CommentType::Student),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid comment type: '{s}'. Supported: teacher, student"
            ))),
        }
    }
}

impl std::fmt::Display for CommentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommentType::Teacher => write!(f, "{}", CommentType::TEACHER),
            CommentType::Student => write!(f, "{}", CommentType::STUDENT),
        }
    }
}

impl std::str::FromStr for CommentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teacher" => Ok(CommentType::Teacher),
            "student" => Ok(CommentType::Student),
            _ => Err(format!("Invalid comment type: {s}")),
        }
    }
}

/// 提交下的私信评论
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub author_name: String,
    pub message: String,
    #[serde(with = "serde_datetime")]
    pub timestamp: NaiveDateTime,
    #[serde(rename = "type")]
    pub comment_type: CommentType,
}
