pub mod detail;
pub mod grade;
pub mod status;
pub mod submit;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::submissions::{
    entities::{Grade, Submission, SubmissionStatus},
    requests::{GradeSubmissionRequest, SubmitAssignmentRequest},
    responses::{StatusOption, StudentGradeResponse},
};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Arc<dyn Storage>,
}

impl SubmissionService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// 全部提交状态及展示名称
    pub fn status_options() -> Vec<StatusOption> {
        SubmissionStatus::all()
            .iter()
            .map(|status| StatusOption {
                status: *status,
                label: status.label().to_string(),
            })
            .collect()
    }

    /// 提交作业（覆盖该学生此前的提交）
    pub async fn submit_assignment(
        &self,
        assignment_id: i64,
        req: SubmitAssignmentRequest,
    ) -> Result<Submission> {
        submit::submit_assignment(self, assignment_id, req).await
    }

    /// 评分
    pub async fn grade_submission(
        &self,
        assignment_id: i64,
        student_id: &str,
        req: GradeSubmissionRequest,
    ) -> Result<Grade> {
        grade::grade_submission(self, assignment_id, student_id, req).await
    }

    /// 更新提交状态
    pub async fn update_status(
        &self,
        assignment_id: i64,
        student_id: &str,
        status: SubmissionStatus,
    ) -> Result<Submission> {
        status::update_status(self, assignment_id, student_id, status).await
    }

    /// 发还作业
    pub async fn return_submission(
        &self,
        assignment_id: i64,
        student_id: &str,
    ) -> Result<Submission> {
        status::update_status(self, assignment_id, student_id, SubmissionStatus::Returned).await
    }

    /// 标记为缺交
    pub async fn mark_missing(&self, assignment_id: i64, student_id: &str) -> Result<Submission> {
        status::update_status(self, assignment_id, student_id, SubmissionStatus::Missing).await
    }

    /// 获取学生成绩
    pub async fn get_student_grade(
        &self,
        assignment_id: i64,
        student_id: &str,
    ) -> Result<StudentGradeResponse> {
        detail::get_student_grade(self, assignment_id, student_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_storage;
    use std::collections::BTreeMap;

    fn submission_request(student_id: &str, file: &str) -> SubmitAssignmentRequest {
        SubmitAssignmentRequest {
            student_id: student_id.to_string(),
            student_name: "Ada Lovelace".to_string(),
            submitted_file: file.to_string(),
        }
    }

    fn grade_request(points: f64) -> GradeSubmissionRequest {
        GradeSubmissionRequest {
            points_earned: points,
            breakdown: BTreeMap::new(),
            feedback: "Solid work".to_string(),
            graded_by: "teacher1".to_string(),
        }
    }

    #[test]
    fn test_status_options() {
        let options = SubmissionService::status_options();
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Missing", "Submitted", "Graded", "Returned", "Late"]
        );
    }

    #[tokio::test]
    async fn test_resubmission_replaces_previous() {
        let storage = sample_storage();
        let service = SubmissionService::new(storage.clone());

        service
            .submit_assignment(2, submission_request("student9", "draft.pdf"))
            .await
            .unwrap();
        service
            .submit_assignment(2, submission_request("student9", "final.pdf"))
            .await
            .unwrap();

        let document = storage.load().await.unwrap();
        let submissions = &document.find_assignment(2).unwrap().submissions;
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].submitted_file, "final.pdf");
    }

    #[tokio::test]
    async fn test_submit_unknown_assignment() {
        let service = SubmissionService::new(sample_storage());
        let err = service
            .submit_assignment(404, submission_request("student9", "a.pdf"))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Assignment not found");
    }

    #[tokio::test]
    async fn test_grade_then_return_flow() {
        let storage = sample_storage();
        let service = SubmissionService::new(storage.clone());

        let grade = service
            .grade_submission(1, "student1", grade_request(88.0))
            .await
            .unwrap();
        assert_eq!(grade.percentage, 88.0);

        let response = service.get_student_grade(1, "student1").await.unwrap();
        assert_eq!(response.submission.status, SubmissionStatus::Graded);
        assert_eq!(response.assignment.title, "Test Assignment 1");
        assert_eq!(response.assignment.max_points, 100.0);

        let returned = service.return_submission(1, "student1").await.unwrap();
        assert_eq!(returned.status, SubmissionStatus::Returned);
        assert!(returned.grade.is_some());
    }

    #[tokio::test]
    async fn test_grade_errors() {
        let service = SubmissionService::new(sample_storage());

        let err = service
            .grade_submission(99, "student1", grade_request(10.0))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Assignment not found");

        let err = service
            .grade_submission(1, "ghost", grade_request(10.0))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Student submission not found");
    }

    #[tokio::test]
    async fn test_mark_missing_and_lookup_errors() {
        let service = SubmissionService::new(sample_storage());

        let missing = service.mark_missing(1, "student1").await.unwrap();
        assert_eq!(missing.status, SubmissionStatus::Missing);

        let err = service.mark_missing(1, "ghost").await.unwrap_err();
        assert_eq!(err.message(), "Submission not found");

        let err = service.get_student_grade(2, "student1").await.unwrap_err();
        assert_eq!(err.message(), "No submission found");
    }
}
