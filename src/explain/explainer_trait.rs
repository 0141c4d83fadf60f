// ==========================================
// 牙科智能配对系统 - 说明服务接口
// ==========================================
// 职责: 定义配对结果说明的外部协作接口（不包含实现）
// 红线: 说明在胜出者确定之后才请求,结果永不回流影响选择
// ==========================================

use crate::domain::assessment::DailyAssessment;
use crate::domain::treatment::Treatment;
use crate::explain::error::ExplainError;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;

/// 说明服务失败或超时时的兜底文字
pub const FALLBACK_EXPLANATION: &str =
    "系统依据职级、当日负载与案例目标综合评分选出此医师,详细说明暂时无法取得。";

// ==========================================
// ExplanationRequest - 说明请求
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct ExplanationRequest {
    pub doctor: DailyAssessment, // 含评分
    pub patient_name: String,
    pub treatments: Vec<Treatment>,
    pub date: NaiveDate,
}

// ==========================================
// ExplanationRequester Trait
// ==========================================
// 实现者: TemplateExplainer (本地模板) / HttpExplainer (远端服务)
#[async_trait]
pub trait ExplanationRequester: Send + Sync {
    /// 为胜出医师生成可读说明
    ///
    /// 可能较慢或失败;调用方负责超时与兜底
    async fn explain(&self, request: &ExplanationRequest) -> Result<String, ExplainError>;

    /// 实现名称 (日志用)
    fn name(&self) -> &str;
}
