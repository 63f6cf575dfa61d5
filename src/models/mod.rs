pub mod assignments;
pub mod comments;
pub mod common;
pub mod document;
pub mod submissions;

pub use common::response::ApiResponse;
pub use document::GradebookDocument;
