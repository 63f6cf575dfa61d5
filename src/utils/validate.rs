use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::errors::{GradingError, Result};

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.@-]+$").expect("Invalid identifier regex"));

const MAX_TITLE_LENGTH: usize = 200;

/// 校验学生/作者等标识符
pub fn validate_identifier(field: &str, value: &str) -> Result<()> {
    if value.is_empty() || value.len() > 64 {
        return Err(GradingError::validation(format!(
            "{field} length must be between 1 and 64 characters"
        )));
    }
    // 只能包含字母、数字、下划线、点、@ 或连字符
    if !IDENTIFIER_RE.is_match(value) {
        return Err(GradingError::validation(format!(
            "{field} must contain only letters, numbers, '_', '.', '@' or '-'"
        )));
    }
    Ok(())
}

/// 校验必填文本字段
pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GradingError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<()> {
    validate_required("Title", title)?;
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(GradingError::validation(format!(
            "Title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_max_points(max_points: f64) -> Result<()> {
    if !max_points.is_finite() || max_points <= 0.0 {
        return Err(GradingError::validation(
            "Max points must be a number greater than zero",
        ));
    }
    Ok(())
}

pub fn validate_points_earned(points: f64) -> Result<()> {
    if !points.is_finite() || points < 0.0 {
        return Err(GradingError::validation(
            "Points earned must be a non-negative number",
        ));
    }
    Ok(())
}

/// 校验评分标准或得分明细中的数值
pub fn validate_weights(field: &str, weights: &BTreeMap<String, f64>) -> Result<()> {
    for (label, weight) in weights {
        validate_required(field, label)?;
        if !weight.is_finite() || *weight < 0.0 {
            return Err(GradingError::validation(format!(
                "{field} '{label}' must be a non-negative number"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("Student id", "student1").is_ok());
        assert!(validate_identifier("Student id", "jane.doe@school").is_ok());
        assert!(validate_identifier("Author", "teacher-01").is_ok());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("Student id", "").is_err());
        assert!(validate_identifier("Student id", "two words").is_err());
        let err = validate_identifier("Student id", "<script>").unwrap_err();
        assert!(err.message().contains("Student id"));
    }

    #[test]
    fn test_title() {
        assert!(validate_title("Essay 1").is_ok());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_points() {
        assert!(validate_max_points(100.0).is_ok());
        assert!(validate_max_points(0.0).is_err());
        assert!(validate_max_points(f64::NAN).is_err());
        assert!(validate_points_earned(0.0).is_ok());
        assert!(validate_points_earned(-1.0).is_err());
        assert!(validate_points_earned(f64::INFINITY).is_err());
    }

    #[test]
    fn test_weights() {
        let mut weights = BTreeMap::new();
        weights.insert("content".to_string(), 60.0);
        weights.insert("style".to_string(), 40.0);
        assert!(validate_weights("Criterion", &weights).is_ok());

        weights.insert("penalty".to_string(), -5.0);
        let err = validate_weights("Criterion", &weights).unwrap_err();
        assert!(err.message().contains("penalty"));
    }
}
