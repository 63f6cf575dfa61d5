//! 业务逻辑层
//!
//! 每个操作分为两层：作用于内存文档的纯函数（`apply_*` / `collect_*` /
//! `calculate_*`），以及通过存储后端完成读取、修改、写回的异步服务方法。

pub mod assignments;
pub mod comments;
pub mod submissions;

pub use assignments::AssignmentService;
pub use comments::CommentService;
pub use submissions::SubmissionService;
