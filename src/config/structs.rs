use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub upload: UploadConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 远端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String, // 不带结尾斜杠，如 http://localhost:5183/api
    pub timeout_ms: u64,  // 单次请求超时 (毫秒)
}

/// 会话（认证 cookie）配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub expiry_days: i64,
    pub same_site: String,
    pub secure: bool,
    pub store: String, // "file" 或 "memory"
    pub path: String,  // file 存储的位置
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_size: usize,            // 单文件最大字节数
    pub allowed_types: Vec<String>, // 允许的扩展名（包含点号）
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            system_name: "Aprenda@".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "auth_token".to_string(),
            expiry_days: 7,
            same_site: "strict".to_string(),
            secure: false,
            store: "file".to_string(),
            path: ".aprenda/session.json".to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5183/api".to_string(),
            timeout_ms: 30_000,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size: 10 * 1024 * 1024,
            allowed_types: [
                ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".txt", ".md", ".csv",
                ".png", ".jpg", ".jpeg", ".gif", ".webp", ".zip", ".rar", ".7z",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}
