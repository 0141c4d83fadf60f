// ==========================================
// 牙科智能配对系统 - 配置层
// ==========================================
// 职责: 配置加载与环境变量覆写
// 存储: JSON 文件
// ==========================================

pub mod app_config;
pub mod config_manager;

// 重导出核心配置
pub use app_config::{AppConfig, ExplanationConfig, DEFAULT_PATIENT_PLACEHOLDER};
pub use config_manager::{config_keys, get_default_config_path, ConfigError, ConfigManager};
