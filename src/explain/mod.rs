// ==========================================
// 牙科智能配对系统 - 说明服务层
// ==========================================
// 职责: 外部说明服务的接口与实现
// 红线: 说明服务不参与决策
// ==========================================

pub mod error;
pub mod explainer_trait;
pub mod http_explainer;
pub mod template_explainer;

pub use error::ExplainError;
pub use explainer_trait::{ExplanationRequest, ExplanationRequester, FALLBACK_EXPLANATION};
pub use http_explainer::HttpExplainer;
pub use template_explainer::TemplateExplainer;

use crate::config::ExplanationConfig;
use std::sync::Arc;

/// 按配置选择说明服务实现
///
/// - 配置了 endpoint: HttpExplainer
/// - 否则: TemplateExplainer
pub fn build_explainer(
    config: &ExplanationConfig,
) -> Result<Arc<dyn ExplanationRequester>, ExplainError> {
    match config.endpoint.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
        Some(endpoint) => Ok(Arc::new(HttpExplainer::new(endpoint, config.timeout())?)),
        None => Ok(Arc::new(TemplateExplainer::new())),
    }
}
