use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub storage: StorageConfig,
    pub grading: GradingConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(rename = "type")]
    pub storage_type: String, // 存储后端名称（json / memory）
    pub path: String,         // JSON 文档路径
    pub pretty: bool,         // 是否格式化输出
}

/// 评分默认值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingConfig {
    pub default_max_points: f64,
    pub default_criterion: String,
}

impl StorageConfig {
    /// 指向某个 JSON 文件的存储配置
    pub fn json<P: Into<String>>(path: P) -> Self {
        Self {
            storage_type: "json".to_string(),
            path: path.into(),
            pretty: true,
        }
    }

    /// 进程内存储配置
    pub fn memory() -> Self {
        Self {
            storage_type: "memory".to_string(),
            path: String::new(),
            pretty: false,
        }
    }
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            default_max_points: 100.0,
            default_criterion: "overall".to_string(),
        }
    }
}
