// ==========================================
// 牙科智能配对系统 - 配置管理器
// ==========================================
// 职责: 配置加载、环境变量覆写、校验
// 存储: JSON 文件 (缺失时全部使用缺省值)
// ==========================================

use crate::config::app_config::{AppConfig, DEFAULT_PATIENT_PLACEHOLDER};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("配置文件解析失败: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ValueError {
        key: String,
        value: String,
        message: String,
    },
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager;

impl ConfigManager {
    /// 按缺省位置加载配置并应用环境变量覆写
    ///
    /// 位置优先级: DENTAL_MATCH_CONFIG → get_default_config_path()
    pub fn load_default() -> Result<AppConfig, ConfigError> {
        let path = std::env::var(config_keys::CONFIG_PATH)
            .ok()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(get_default_config_path);

        let mut config = Self::load(&path)?;
        Self::apply_overrides(&mut config, |key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// 从 JSON 文件加载配置
    ///
    /// # 返回
    /// - 文件不存在: 缺省配置
    /// - 文件存在: 解析并校验后的配置
    pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "配置文件不存在,使用缺省配置");
            return Ok(AppConfig::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&raw)?;
        Self::validate(&config)?;

        info!(path = %path.display(), "配置加载完成");
        Ok(config)
    }

    /// 应用覆写
    ///
    /// # 参数
    /// - lookup: 键 → 值 (通常为环境变量)
    pub fn apply_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(path) = get(config_keys::ROSTER_PATH) {
            config.roster_path = Some(PathBuf::from(path));
        }

        if let Some(path) = get(config_keys::TREATMENT_CATALOG_PATH) {
            config.treatment_catalog_path = Some(PathBuf::from(path));
        }

        if let Some(url) = get(config_keys::EXPLAIN_URL) {
            config.explanation.endpoint = Some(url);
        }

        if let Some(raw) = get(config_keys::EXPLAIN_TIMEOUT_SECS) {
            config.explanation.timeout_secs =
                raw.parse().map_err(|e: std::num::ParseIntError| ConfigError::ValueError {
                    key: config_keys::EXPLAIN_TIMEOUT_SECS.to_string(),
                    value: raw.clone(),
                    message: e.to_string(),
                })?;
        }

        Self::validate(config)
    }

    /// 校验配置
    fn validate(config: &AppConfig) -> Result<(), ConfigError> {
        if config.explanation.timeout_secs == 0 {
            return Err(ConfigError::ValueError {
                key: "explanation.timeout_secs".to_string(),
                value: "0".to_string(),
                message: "超时必须大于 0".to_string(),
            });
        }

        if config.patient_placeholder.trim().is_empty() {
            return Err(ConfigError::ValueError {
                key: "patient_placeholder".to_string(),
                value: config.patient_placeholder.clone(),
                message: format!("占位不能为空 (缺省: {})", DEFAULT_PATIENT_PLACEHOLDER),
            });
        }

        Ok(())
    }
}

/// 缺省配置文件路径
///
/// 优先使用用户配置目录,取不到时回退到当前目录
pub fn get_default_config_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("dental-match").join("config.json"),
        None => PathBuf::from("./dental_match.json"),
    }
}

// ==========================================
// 配置键 (环境变量)
// ==========================================
pub mod config_keys {
    pub const CONFIG_PATH: &str = "DENTAL_MATCH_CONFIG";
    pub const ROSTER_PATH: &str = "DENTAL_MATCH_ROSTER";
    pub const TREATMENT_CATALOG_PATH: &str = "DENTAL_MATCH_TREATMENTS";
    pub const EXPLAIN_URL: &str = "DENTAL_MATCH_EXPLAIN_URL";
    pub const EXPLAIN_TIMEOUT_SECS: &str = "DENTAL_MATCH_EXPLAIN_TIMEOUT_SECS";
}
