use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::Commands;
use crate::config::GradingConfig;
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::comments::requests::AddCommentRequest;
use crate::models::submissions::requests::{GradeSubmissionRequest, SubmitAssignmentRequest};
use crate::services::{AssignmentService, CommentService, SubmissionService};
use crate::storage::Storage;

fn respond<T: Serialize>(data: T, message: &str) -> Result<ApiResponse<Value>> {
    Ok(ApiResponse::success(serde_json::to_value(data)?, message))
}

/// 执行一个子命令并包装为统一响应
pub async fn execute(
    command: Commands,
    storage: Arc<dyn Storage>,
    defaults: GradingConfig,
) -> Result<ApiResponse<Value>> {
    let assignments = AssignmentService::with_defaults(storage.clone(), defaults);
    let submissions = SubmissionService::new(storage.clone());
    let comments = CommentService::new(storage);

    match command {
        Commands::CreateAssignment {
            title,
            description,
            due_date,
            max_points,
            criteria,
        } => {
            let assignment = assignments
                .create_assignment(CreateAssignmentRequest {
                    title,
                    description,
                    due_date,
                    max_points,
                    grading_criteria: criteria.into_iter().collect(),
                })
                .await?;
            info!("Created assignment {} ({})", assignment.id, assignment.title);
            respond(assignment, "Assignment created successfully")
        }
        Commands::ListAssignments => {
            respond(assignments.list_assignments().await?, "Assignments retrieved")
        }
        Commands::Submit {
            assignment,
            student,
            name,
            file,
        } => {
            let submission = submissions
                .submit_assignment(
                    assignment,
                    SubmitAssignmentRequest {
                        student_id: student,
                        student_name: name,
                        submitted_file: file,
                    },
                )
                .await?;
            respond(submission, "Assignment submitted successfully")
        }
        Commands::Grade {
            assignment,
            student,
            points,
            breakdown,
            feedback,
            graded_by,
        } => {
            let grade = submissions
                .grade_submission(
                    assignment,
                    &student,
                    GradeSubmissionRequest {
                        points_earned: points,
                        breakdown: breakdown.into_iter().collect(),
                        feedback,
                        graded_by,
                    },
                )
                .await?;
            respond(grade, "Submission graded successfully")
        }
        Commands::SetStatus {
            assignment,
            student,
            status,
        } => respond(
            submissions
                .update_status(assignment, &student, status)
                .await?,
            "Status updated successfully",
        ),
        Commands::Return {
            assignment,
            student,
        } => respond(
            submissions.return_submission(assignment, &student).await?,
            "Submission returned successfully",
        ),
        Commands::MarkMissing {
            assignment,
            student,
        } => respond(
            submissions.mark_missing(assignment, &student).await?,
            "Submission marked as missing",
        ),
        Commands::StudentGrade {
            assignment,
            student,
        } => respond(
            submissions.get_student_grade(assignment, &student).await?,
            "Student grade retrieved",
        ),
        Commands::Submissions { assignment, status } => respond(
            assignments
                .get_assignment_submissions(assignment, status)
                .await?,
            "Submissions retrieved",
        ),
        Commands::Stats { assignment } => respond(
            assignments.get_assignment_statistics(assignment).await?,
            "Statistics retrieved",
        ),
        Commands::Comment {
            assignment,
            student,
            author,
            author_name,
            message,
            comment_type,
        } => {
            let comment = comments
                .add_private_comment(
                    assignment,
                    &student,
                    AddCommentRequest {
                        author,
                        author_name,
                        message,
                        comment_type,
                    },
                )
                .await?;
            respond(comment, "Comment added successfully")
        }
        Commands::Comments {
            assignment,
            student,
        } => respond(
            comments.get_private_comments(assignment, &student).await?,
            "Comments retrieved",
        ),
        Commands::Statuses => respond(SubmissionService::status_options(), "Statuses retrieved"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::test_support::sample_storage;
    use clap::Parser;

    fn command(args: &[&str]) -> Commands {
        let mut argv = vec!["rust-classroom-grading"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let storage = sample_storage();
        let created = execute(
            command(&[
                "create-assignment",
                "--title",
                "Lab 3",
                "--due-date",
                "2030-01-01",
            ]),
            storage.clone(),
            GradingConfig::default(),
        )
        .await
        .unwrap();
        assert!(created.is_success());
        let data = created.data.unwrap();
        assert_eq!(data["id"], 3);
        assert_eq!(data["max_points"], 100.0);
        assert_eq!(data["grading_criteria"]["overall"], 100.0);

        let listed = execute(
            command(&["list-assignments"]),
            storage,
            GradingConfig::default(),
        )
        .await
        .unwrap();
        assert_eq!(listed.data.unwrap().as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_grade_and_stats() {
        let storage = sample_storage();
        execute(
            command(&[
                "grade",
                "--assignment",
                "1",
                "--student",
                "student1",
                "--points",
                "92",
                "--graded-by",
                "teacher1",
            ]),
            storage.clone(),
            GradingConfig::default(),
        )
        .await
        .unwrap();

        let stats = execute(
            command(&["stats", "--assignment", "1"]),
            storage,
            GradingConfig::default(),
        )
        .await
        .unwrap()
        .data
        .unwrap();
        assert_eq!(stats["graded_count"], 1);
        assert_eq!(stats["average_grade"], 92.0);
        assert_eq!(stats["grade_distribution"][0]["count"], 1);
    }

    #[tokio::test]
    async fn test_comment_round() {
        let storage = sample_storage();
        let added = execute(
            command(&[
                "comment",
                "--assignment",
                "1",
                "--student",
                "student1",
                "--author",
                "student1",
                "--author-name",
                "Test Student 1",
                "--message",
                "Thanks!",
                "--type",
                "student",
            ]),
            storage.clone(),
            GradingConfig::default(),
        )
        .await
        .unwrap();
        assert_eq!(added.data.unwrap()["type"], "student");

        let listed = execute(
            command(&["comments", "--assignment", "1", "--student", "student1"]),
            storage,
            GradingConfig::default(),
        )
        .await
        .unwrap()
        .data
        .unwrap();
        let listed = listed.as_array().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1]["message"], "Thanks!");
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let err = execute(
            command(&["return", "--assignment", "9", "--student", "student1"]),
            sample_storage(),
            GradingConfig::default(),
        )
        .await
        .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.message(), "Submission not found");
    }

    #[tokio::test]
    async fn test_statuses() {
        let response = execute(
            command(&["statuses"]),
            sample_storage(),
            GradingConfig::default(),
        )
        .await
        .unwrap();
        let data = response.data.unwrap();
        assert_eq!(data.as_array().unwrap().len(), 5);
        assert_eq!(data[0]["status"], "missing");
    }
}
