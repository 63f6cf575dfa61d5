//! 命令行入口定义
//!
//! 每个子命令对应一个服务操作，结果以 JSON 响应结构输出到标准输出。

pub mod handlers;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::models::ApiResponse;
use crate::models::comments::entities::CommentType;
use crate::models::submissions::entities::SubmissionStatus;
use crate::utils::parse_datetime;

#[derive(Debug, Parser)]
#[command(
    name = "rust-classroom-grading",
    version,
    about = "Classroom assignment grading backed by a JSON document"
)]
pub struct Cli {
    /// 覆盖配置中的 JSON 文档路径
    #[arg(long, global = true)]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new assignment
    CreateAssignment {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, value_parser = parse_due_date)]
        due_date: NaiveDateTime,
        #[arg(long)]
        max_points: Option<f64>,
        /// Grading criterion as LABEL=WEIGHT, repeatable
        #[arg(long = "criterion", value_parser = parse_weight)]
        criteria: Vec<(String, f64)>,
    },
    /// List every assignment with its statistics
    ListAssignments,
    /// Submit a file for an assignment (replaces an earlier submission)
    Submit {
        #[arg(long)]
        assignment: i64,
        #[arg(long)]
        student: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        file: String,
    },
    /// Grade a student's submission
    Grade {
        #[arg(long)]
        assignment: i64,
        #[arg(long)]
        student: String,
        #[arg(long)]
        points: f64,
        /// Points for one criterion as LABEL=POINTS, repeatable
        #[arg(long = "breakdown", value_parser = parse_weight)]
        breakdown: Vec<(String, f64)>,
        #[arg(long, default_value = "")]
        feedback: String,
        #[arg(long)]
        graded_by: String,
    },
    /// Set the status of a submission
    SetStatus {
        #[arg(long)]
        assignment: i64,
        #[arg(long)]
        student: String,
        #[arg(long)]
        status: SubmissionStatus,
    },
    /// Return a graded submission to the student
    Return {
        #[arg(long)]
        assignment: i64,
        #[arg(long)]
        student: String,
    },
    /// Mark a submission as missing
    MarkMissing {
        #[arg(long)]
        assignment: i64,
        #[arg(long)]
        student: String,
    },
    /// Show a student's submission and grade
    StudentGrade {
        #[arg(long)]
        assignment: i64,
        #[arg(long)]
        student: String,
    },
    /// List the submissions of an assignment
    Submissions {
        #[arg(long)]
        assignment: i64,
        #[arg(long)]
        status: Option<SubmissionStatus>,
    },
    /// Show assignment statistics
    Stats {
        #[arg(long)]
        assignment: i64,
    },
    /// Add a private comment to a submission
    Comment {
        #[arg(long)]
        assignment: i64,
        #[arg(long)]
        student: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        author_name: String,
        #[arg(long)]
        message: String,
        #[arg(long = "type")]
        comment_type: CommentType,
    },
    /// List the private comments of a submission
    Comments {
        #[arg(long)]
        assignment: i64,
        #[arg(long)]
        student: String,
    },
    /// List the submission statuses
    Statuses,
}

fn parse_due_date(value: &str) -> Result<NaiveDateTime, String> {
    parse_datetime(value).map_err(|e| e.message().to_string())
}

/// 解析 LABEL=VALUE
fn parse_weight(value: &str) -> Result<(String, f64), String> {
    let (label, weight) = value
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=VALUE, got '{value}'"))?;
    let weight: f64 = weight
        .trim()
        .parse()
        .map_err(|_| format!("'{weight}' is not a number"))?;
    Ok((label.trim().to_string(), weight))
}

/// 输出响应到标准输出
pub fn print_response<T: Serialize>(response: &ApiResponse<T>) {
    match serde_json::to_string_pretty(response) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to encode response: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create_assignment() {
        let cli = Cli::try_parse_from([
            "rust-classroom-grading",
            "--store",
            "/tmp/db.json",
            "create-assignment",
            "--title",
            "Essay",
            "--due-date",
            "2025-11-01 23:59:00",
            "--criterion",
            "content=70",
            "--criterion",
            "style=30",
        ])
        .unwrap();

        assert_eq!(cli.store.as_deref(), Some("/tmp/db.json"));
        match cli.command {
            Commands::CreateAssignment {
                title,
                criteria,
                max_points,
                ..
            } => {
                assert_eq!(title, "Essay");
                assert_eq!(max_points, None);
                assert_eq!(
                    criteria,
                    vec![("content".to_string(), 70.0), ("style".to_string(), 30.0)]
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_status_values() {
        let cli = Cli::try_parse_from([
            "rust-classroom-grading",
            "set-status",
            "--assignment",
            "1",
            "--student",
            "student1",
            "--status",
            "returned",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::SetStatus {
                status: SubmissionStatus::Returned,
                ..
            }
        ));

        let invalid = Cli::try_parse_from([
            "rust-classroom-grading",
            "set-status",
            "--assignment",
            "1",
            "--student",
            "student1",
            "--status",
            "done",
        ]);
        assert!(invalid.is_err());
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("overall=100"), Ok(("overall".to_string(), 100.0)));
        assert!(parse_weight("overall").is_err());
        assert!(parse_weight("overall=lots").is_err());
    }

    #[test]
    fn test_invalid_due_date_rejected() {
        let result = Cli::try_parse_from([
            "rust-classroom-grading",
            "create-assignment",
            "--title",
            "Essay",
            "--due-date",
            "soon",
        ]);
        assert!(result.is_err());
    }
}
