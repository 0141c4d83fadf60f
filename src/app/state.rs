// ==========================================
// 牙科智能配对系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::{ApiError, ApiResult, MatchApi};
use crate::config::AppConfig;
use crate::explain::build_explainer;
use crate::roster::{RosterLoader, RosterSnapshot};

/// 应用状态
///
/// 包含名册快照与配对API
pub struct AppState {
    /// 生效配置
    pub config: AppConfig,

    /// 名册快照 (只读)
    pub roster: Arc<RosterSnapshot>,

    /// 配对API
    pub match_api: Arc<MatchApi>,
}

impl AppState {
    /// 按配置创建AppState
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 读取名册 JSON
    /// 2. 按需以处置目录文件覆写内嵌目录
    /// 3. 按配置选择说明服务并创建配对API
    pub fn new(config: AppConfig) -> ApiResult<Self> {
        let roster_path = config
            .roster_path
            .clone()
            .ok_or_else(|| ApiError::ConfigError("未配置名册路径 (roster_path)".to_string()))?;

        tracing::info!("初始化AppState,名册路径: {}", roster_path.display());

        let mut roster = RosterLoader::from_json_file(&roster_path)?;
        if let Some(catalog_path) = &config.treatment_catalog_path {
            let treatments = RosterLoader::treatments_from_file(catalog_path)?;
            tracing::info!(
                "处置目录已覆写: {} ({} 项)",
                catalog_path.display(),
                treatments.len()
            );
            roster = roster.with_treatments(treatments)?;
        }

        Self::from_parts(config, roster)
    }

    /// 由已有名册创建AppState
    ///
    /// 说明服务客户端创建失败时返回 ConfigError
    pub fn from_parts(config: AppConfig, roster: RosterSnapshot) -> ApiResult<Self> {
        let roster = Arc::new(roster);
        let explainer = build_explainer(&config.explanation)
            .map_err(|e| ApiError::ConfigError(e.to_string()))?;
        tracing::info!("说明服务: {}", explainer.name());

        let match_api = Arc::new(MatchApi::new(
            roster.clone(),
            explainer,
            config.explanation.timeout(),
            config.patient_placeholder.clone(),
        ));

        Ok(Self {
            config,
            roster,
            match_api,
        })
    }
}
