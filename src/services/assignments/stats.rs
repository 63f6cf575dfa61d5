use tracing::debug;

use super::AssignmentService;
use crate::errors::{GradingError, Result};
use crate::models::assignments::{
    entities::Assignment,
    stats_responses::{AssignmentStatistics, GradeBand, GradeRange},
};
use crate::models::submissions::entities::SubmissionStatus;
use crate::utils::round2;

/// 计算作业统计
pub fn calculate_statistics(assignment: &Assignment) -> AssignmentStatistics {
    let submissions = &assignment.submissions;

    let percentages: Vec<f64> = submissions
        .iter()
        .filter_map(|s| s.grade.as_ref().map(|g| g.percentage))
        .collect();

    let count_status = |status: SubmissionStatus| {
        submissions.iter().filter(|s| s.status == status).count() as i64
    };

    let average_grade = if percentages.is_empty() {
        0.0
    } else {
        let sum: f64 = percentages.iter().sum();
        round2(sum / percentages.len() as f64)
    };

    AssignmentStatistics {
        assignment_id: assignment.id,
        total_students: submissions.len() as i64,
        submitted_count: submissions
            .iter()
            .filter(|s| s.status.counts_as_submitted())
            .count() as i64,
        graded_count: percentages.len() as i64,
        missing_count: count_status(SubmissionStatus::Missing),
        late_count: count_status(SubmissionStatus::Late),
        average_grade,
        highest_grade: percentages.iter().cloned().reduce(f64::max),
        lowest_grade: percentages.iter().cloned().reduce(f64::min),
        grade_distribution: calculate_grade_distribution(&percentages),
    }
}

/// 计算成绩分布，每个百分比恰好落入一个区间
pub fn calculate_grade_distribution(percentages: &[f64]) -> Vec<GradeRange> {
    GradeBand::all()
        .iter()
        .map(|band| GradeRange {
            range: band.label().to_string(),
            count: percentages
                .iter()
                .filter(|&&p| GradeBand::from_percentage(p) == *band)
                .count() as i64,
        })
        .collect()
}

pub async fn get_assignment_statistics(
    service: &AssignmentService,
    assignment_id: i64,
) -> Result<AssignmentStatistics> {
    let document = service.get_storage().load().await?;
    let assignment = document
        .find_assignment(assignment_id)
        .ok_or_else(|| GradingError::not_found("Assignment not found"))?;

    let statistics = calculate_statistics(assignment);
    debug!(
        assignment_id,
        graded = statistics.graded_count,
        "Computed assignment statistics"
    );
    Ok(statistics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submissions::entities::{Grade, Submission};
    use crate::test_support::{at, sample_document};
    use std::collections::BTreeMap;

    fn graded(student_id: &str, percentage: f64, status: SubmissionStatus) -> Submission {
        Submission {
            student_id: student_id.to_string(),
            student_name: student_id.to_uppercase(),
            submitted_file: format!("{student_id}.pdf"),
            submission_date: at("2025-10-12 10:00:00"),
            status,
            grade: Some(Grade {
                points_earned: percentage,
                percentage,
                breakdown: BTreeMap::new(),
                feedback: String::new(),
                graded_by: "teacher1".to_string(),
                graded_date: at("2025-10-13 10:00:00"),
            }),
            private_comments: Vec::new(),
        }
    }

    fn ungraded(student_id: &str, status: SubmissionStatus) -> Submission {
        Submission {
            grade: None,
            ..graded(student_id, 0.0, status)
        }
    }

    #[test]
    fn test_statistics_without_grades() {
        let mut assignment = sample_document().assignments.remove(0);
        assignment.submissions.push(ungraded("student2", SubmissionStatus::Missing));

        let stats = calculate_statistics(&assignment);
        assert_eq!(stats.total_students, 2);
        assert_eq!(stats.submitted_count, 1);
        assert_eq!(stats.graded_count, 0);
        assert_eq!(stats.missing_count, 1);
        assert_eq!(stats.average_grade, 0.0);
        assert_eq!(stats.highest_grade, None);
        assert!(stats.grade_distribution.iter().all(|r| r.count == 0));
        assert_eq!(stats.grade_distribution.len(), 5);
    }

    #[test]
    fn test_statistics_with_grades() {
        let mut assignment = sample_document().assignments.remove(1);
        assignment.submissions = vec![
            graded("a", 95.0, SubmissionStatus::Graded),
            graded("b", 82.5, SubmissionStatus::Returned),
            graded("c", 71.0, SubmissionStatus::Graded),
            ungraded("d", SubmissionStatus::Late),
            ungraded("e", SubmissionStatus::Missing),
        ];

        let stats = calculate_statistics(&assignment);
        assert_eq!(stats.assignment_id, 2);
        assert_eq!(stats.total_students, 5);
        assert_eq!(stats.submitted_count, 4);
        assert_eq!(stats.graded_count, 3);
        assert_eq!(stats.missing_count, 1);
        assert_eq!(stats.late_count, 1);
        assert_eq!(stats.average_grade, 82.83);
        assert_eq!(stats.highest_grade, Some(95.0));
        assert_eq!(stats.lowest_grade, Some(71.0));
    }

    #[test]
    fn test_average_rounds_half_cent_up() {
        let mut assignment = sample_document().assignments.remove(1);
        assignment.submissions = vec![
            graded("a", 1.0, SubmissionStatus::Graded),
            graded("b", 1.01, SubmissionStatus::Graded),
        ];

        assert_eq!(calculate_statistics(&assignment).average_grade, 1.01);
    }

    #[test]
    fn test_distribution_partitions_percentages() {
        let percentages = [100.0, 90.0, 89.99, 80.0, 75.5, 60.0, 59.99, 0.0, 104.0];
        let distribution = calculate_grade_distribution(&percentages);

        let labels: Vec<&str> = distribution.iter().map(|r| r.range.as_str()).collect();
        assert_eq!(
            labels,
            vec!["A (90-100)", "B (80-89)", "C (70-79)", "D (60-69)", "F (0-59)"]
        );
        let counts: Vec<i64> = distribution.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![3, 2, 1, 1, 2]);
        assert_eq!(counts.iter().sum::<i64>(), percentages.len() as i64);
    }
}
