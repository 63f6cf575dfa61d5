use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::models::GradebookDocument;
use crate::storage::{MemoryStorage, Storage};
use crate::utils::parse_datetime;

pub(crate) const SAMPLE_DOCUMENT: &str = r#"{
    "assignments": [
        {
            "id": 1,
            "title": "Test Assignment 1",
            "description": "Test Description",
            "due_date": "2025-10-15",
            "max_points": 100,
            "grading_criteria": {"overall": 100},
            "submissions": [
                {
                    "student_id": "student1",
                    "student_name": "Test Student 1",
                    "submitted_file": "test1.php",
                    "submission_date": "2025-10-12 10:00:00",
                    "status": "submitted",
                    "grade": null,
                    "private_comments": [
                        {
                            "id": "comment1",
                            "author": "teacher1",
                            "author_name": "Test Teacher",
                            "message": "Initial test comment",
                            "timestamp": "2025-10-12 11:00:00",
                            "type": "teacher"
                        }
                    ]
                }
            ],
            "created_date": "2025-10-01 09:00:00"
        },
        {
            "id": 2,
            "title": "Test Assignment 2",
            "description": "Another test",
            "due_date": "2025-10-20",
            "max_points": 40,
            "grading_criteria": {"content": 30, "style": 10},
            "submissions": [],
            "created_date": "2025-10-02 09:00:00"
        }
    ]
}"#;

pub(crate) fn sample_document() -> GradebookDocument {
    serde_json::from_str(SAMPLE_DOCUMENT).expect("sample document must decode")
}

pub(crate) fn sample_storage() -> Arc<dyn Storage> {
    Arc::new(MemoryStorage::with_document(sample_document()))
}

pub(crate) fn at(value: &str) -> NaiveDateTime {
    parse_datetime(value).expect("test timestamp must parse")
}
