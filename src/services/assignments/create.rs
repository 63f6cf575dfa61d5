use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use tracing::info;

use super::AssignmentService;
use crate::config::GradingConfig;
use crate::errors::Result;
use crate::models::GradebookDocument;
use crate::models::assignments::{entities::Assignment, requests::CreateAssignmentRequest};
use crate::storage::update_document;
use crate::utils::datetime;
use crate::utils::validate::{validate_max_points, validate_title, validate_weights};

/// 在文档中追加新作业，ID 取现有最大值 + 1
pub fn apply_create_assignment(
    document: &mut GradebookDocument,
    req: CreateAssignmentRequest,
    defaults: &GradingConfig,
    now: NaiveDateTime,
) -> Result<Assignment> {
    validate_title(&req.title)?;
    let max_points = req.max_points.unwrap_or(defaults.default_max_points);
    validate_max_points(max_points)?;
    validate_weights("Grading criterion", &req.grading_criteria)?;

    // 未提供评分标准时使用单一评分项
    let grading_criteria = if req.grading_criteria.is_empty() {
        BTreeMap::from([(defaults.default_criterion.clone(), 100.0)])
    } else {
        req.grading_criteria
    };

    let assignment = Assignment {
        id: document.next_assignment_id(),
        title: req.title.trim().to_string(),
        description: req.description,
        due_date: req.due_date,
        max_points,
        grading_criteria,
        submissions: Vec::new(),
        created_date: Some(now),
    };

    document.assignments.push(assignment.clone());
    Ok(assignment)
}

pub async fn create_assignment(
    service: &AssignmentService,
    req: CreateAssignmentRequest,
) -> Result<Assignment> {
    let now = datetime::now();
    let assignment = update_document(service.get_storage(), |document| {
        apply_create_assignment(document, req, service.defaults(), now)
    })
    .await?;

    info!(
        assignment_id = assignment.id,
        "Assignment '{}' created, due {}",
        assignment.title,
        datetime::format_datetime(&assignment.due_date)
    );
    Ok(assignment)
}
