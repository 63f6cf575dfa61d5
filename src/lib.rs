//! Classroom Grading - 课堂作业评分工具
//!
//! 以单个 JSON 文档保存全部作业、提交、成绩与私信评论。
//!
//! # 架构
//! - `cli`: 命令行子命令定义与分发
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 文档存储层（JSON 文件 / 内存）
//! - `utils`: 工具函数

pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;

#[cfg(test)]
mod test_support;
