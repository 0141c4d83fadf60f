// ==========================================
// 牙科智能配对系统 - 应用配置对象
// ==========================================
// 说明: 评分常量 (满额 5 / 月容量 150 / 权重 0.7:0.3) 不属于配置
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// 病患姓名缺省占位
pub const DEFAULT_PATIENT_PLACEHOLDER: &str = "未具名病患";

/// 说明服务缺省超时 (秒)
pub const DEFAULT_EXPLANATION_TIMEOUT_SECS: u64 = 5;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 名册 JSON 路径
    pub roster_path: Option<PathBuf>,

    /// 处置目录覆写路径 (.csv / .json),为空则使用名册内嵌目录
    pub treatment_catalog_path: Option<PathBuf>,

    /// 病患姓名为空时的占位
    pub patient_placeholder: String,

    /// 说明服务
    pub explanation: ExplanationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roster_path: None,
            treatment_catalog_path: None,
            patient_placeholder: DEFAULT_PATIENT_PLACEHOLDER.to_string(),
            explanation: ExplanationConfig::default(),
        }
    }
}

/// 说明服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplanationConfig {
    /// 远端服务地址,为空则使用本地模板
    pub endpoint: Option<String>,

    /// 超时秒数
    pub timeout_secs: u64,
}

impl Default for ExplanationConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: DEFAULT_EXPLANATION_TIMEOUT_SECS,
        }
    }
}

impl ExplanationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
