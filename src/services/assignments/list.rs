use tracing::debug;

use super::AssignmentService;
use super::stats::calculate_statistics;
use crate::errors::Result;
use crate::models::GradebookDocument;
use crate::models::assignments::responses::AssignmentOverview;

pub fn collect_overview(document: &GradebookDocument) -> Vec<AssignmentOverview> {
    document
        .assignments
        .iter()
        .map(|assignment| AssignmentOverview {
            id: assignment.id,
            title: assignment.title.clone(),
            due_date: assignment.due_date,
            max_points: assignment.max_points,
            statistics: calculate_statistics(assignment),
        })
        .collect()
}

pub async fn list_assignments(service: &AssignmentService) -> Result<Vec<AssignmentOverview>> {
    let document = service.get_storage().load().await?;
    let overview = collect_overview(&document);
    debug!("Listed {} assignments", overview.len());
    Ok(overview)
}
