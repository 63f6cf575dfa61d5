use rand::Rng;

use crate::errors::{GradingError, Result};

// 每秒只有 900 个后缀可用
const MAX_COMMENT_ID_ATTEMPTS: usize = 1000;

/// 生成评论 ID：Unix 秒级时间戳 + 三位随机后缀
pub fn generate_comment_id() -> String {
    let mut rng = rand::rng();
    format!(
        "{}{}",
        chrono::Utc::now().timestamp(),
        rng.random_range(100..=999)
    )
}

/// 生成不与已有 ID 冲突的评论 ID
pub fn generate_unique_comment_id<F>(is_taken: F) -> Result<String>
where
    F: Fn(&str) -> bool,
{
    for _ in 0..MAX_COMMENT_ID_ATTEMPTS {
        let id = generate_comment_id();
        if !is_taken(&id) {
            return Ok(id);
        }
    }
    Err(GradingError::storage_operation(format!(
        "Could not allocate a unique comment id after {MAX_COMMENT_ID_ATTEMPTS} attempts"
    )))
}
