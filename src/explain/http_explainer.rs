// ==========================================
// 牙科智能配对系统 - 远端说明服务客户端
// ==========================================
// 协议: POST ExplanationRequest (JSON) → { "reason": "..." }
// ==========================================

use crate::explain::error::ExplainError;
use crate::explain::explainer_trait::{ExplanationRequest, ExplanationRequester};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// 远端响应
#[derive(Debug, Deserialize)]
struct ExplanationResponse {
    #[serde(alias = "text")]
    reason: String,
}

pub struct HttpExplainer {
    http_client: reqwest::Client,
    endpoint: String,
}

impl HttpExplainer {
    /// 创建客户端
    ///
    /// # 参数
    /// - endpoint: 说明服务地址
    /// - timeout: 单次请求超时
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ExplainError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExplainError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ExplanationRequester for HttpExplainer {
    async fn explain(&self, request: &ExplanationRequest) -> Result<String, ExplainError> {
        debug!(
            endpoint = %self.endpoint,
            doctor_id = request.doctor.doctor.id,
            "请求说明服务"
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ExplainError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(status, "说明服务返回错误");
            return Err(ExplainError::Status { status, body });
        }

        let parsed: ExplanationResponse = response
            .json()
            .await
            .map_err(|e| ExplainError::InvalidResponse(e.to_string()))?;

        let reason = parsed.reason.trim();
        if reason.is_empty() {
            return Err(ExplainError::EmptyResponse);
        }
        Ok(reason.to_string())
    }

    fn name(&self) -> &str {
        "http"
    }
}
