//! 整个 JSON 文档的内存表示

use serde::{Deserialize, Serialize};

use super::assignments::entities::Assignment;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GradebookDocument {
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl GradebookDocument {
    /// 下一个作业 ID：现有最大 ID + 1，空文档从 1 开始
    pub fn next_assignment_id(&self) -> i64 {
        self.assignments.iter().map(|a| a.id).max().unwrap_or(0) + 1
    }

    pub fn find_assignment(&self, assignment_id: i64) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == assignment_id)
    }

    pub fn find_assignment_mut(&mut self, assignment_id: i64) -> Option<&mut Assignment> {
        self.assignments.iter_mut().find(|a| a.id == assignment_id)
    }
}
