// ==========================================
// 牙科智能配对系统 - 配对API
// ==========================================
// 职责: 配对请求入口;串接 校验 → 引擎 → 说明服务
// 红线: 同一时间最多一个配对请求在途,新请求直接拒绝
// 红线: 胜出者先确定,再请求说明;说明失败/超时只降级为兜底文字
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::{parse_date, select_treatments, MatchRequest, MatchRequestValidator};
use crate::domain::assessment::DailyAssessment;
use crate::domain::treatment::{RequiredRank, Treatment};
use crate::engine::{DoctorLoadCard, LoadBoard, MatchOrchestrator, RequiredRankResolver};
use crate::explain::{
    ExplainError, ExplanationRequest, ExplanationRequester, FALLBACK_EXPLANATION,
};
use crate::roster::RosterSnapshot;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, instrument, warn};
use uuid::Uuid;

// ==========================================
// 响应对象
// ==========================================

/// 说明文字来源
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExplanationSource {
    /// 说明服务正常返回
    Generated { provider: String },
    /// 说明服务失败或超时,使用兜底文字
    Fallback { reason: String },
}

/// 配对成功响应
#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    pub match_id: Uuid,
    pub date: NaiveDate,
    pub patient_name: String,
    pub treatments: Vec<Treatment>,
    pub required_rank: RequiredRank,
    pub winner: DailyAssessment,
    pub candidates: Vec<DailyAssessment>, // 完整评估列表 (名册顺序)
    pub explanation: String,
    pub explanation_source: ExplanationSource,
}

/// 当前显示中的配对结果
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayedMatch {
    Matched(Box<MatchResponse>),
    Failed { error: String },
}

// ==========================================
// MatchingFlag - 在途状态 (离开作用域即清除)
// ==========================================
struct MatchingFlag<'a>(&'a AtomicBool);

impl<'a> MatchingFlag<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for MatchingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

// ==========================================
// MatchApi - 配对API
// ==========================================
pub struct MatchApi {
    roster: Arc<RosterSnapshot>,
    orchestrator: MatchOrchestrator,
    validator: MatchRequestValidator,
    explainer: Arc<dyn ExplanationRequester>,
    explanation_timeout: Duration,

    // 在途保护: 持有期间覆盖 校验 → 计算 → 说明 全过程
    in_flight: Mutex<()>,
    // 在途状态,只供查询;查询不得触碰 in_flight
    matching: AtomicBool,
    displayed: RwLock<Option<DisplayedMatch>>,
}

impl MatchApi {
    /// 创建配对API
    ///
    /// # 参数
    /// - roster: 名册快照
    /// - explainer: 说明服务
    /// - explanation_timeout: 说明服务超时
    /// - patient_placeholder: 病患姓名占位
    pub fn new(
        roster: Arc<RosterSnapshot>,
        explainer: Arc<dyn ExplanationRequester>,
        explanation_timeout: Duration,
        patient_placeholder: impl Into<String>,
    ) -> Self {
        Self {
            roster,
            orchestrator: MatchOrchestrator::new(),
            validator: MatchRequestValidator::new(patient_placeholder),
            explainer,
            explanation_timeout,
            in_flight: Mutex::new(()),
            matching: AtomicBool::new(false),
            displayed: RwLock::new(None),
        }
    }

    pub fn roster(&self) -> &RosterSnapshot {
        &self.roster
    }

    /// 说明服务实现名称
    pub fn explainer_name(&self) -> &str {
        self.explainer.name()
    }

    // ==========================================
    // 配对
    // ==========================================

    /// 提交配对请求
    ///
    /// # 返回
    /// - Ok(MatchResponse): 胜出者 + 完整评估 + 说明
    /// - Err(ApiError::MatchInFlight): 已有请求在途
    /// - Err(ApiError::MalformedDate / UnknownTreatment / NoTreatmentsSelected): 输入不合法
    /// - Err(ApiError::NoEligibleDoctor): 无合格医师
    #[instrument(skip(self, request), fields(date = %request.date, treatments = request.treatment_ids.len()))]
    pub async fn submit(&self, request: MatchRequest) -> ApiResult<MatchResponse> {
        let _guard = self.in_flight.try_lock().map_err(|_| {
            warn!("已有配对请求进行中,拒绝新请求");
            ApiError::MatchInFlight
        })?;
        let _matching = MatchingFlag::raise(&self.matching);

        let validated = self.validator.validate(&self.roster, &request)?;
        *self.displayed.write().await = None;

        // === 步骤 1: 引擎计算 (同步,确定胜出者) ===
        let outcome = self.orchestrator.run(
            self.roster.doctors(),
            validated.date,
            &validated.treatments,
        )?;

        let winner = match outcome.winner_or_error() {
            Ok(winner) => winner.clone(),
            Err(err) => {
                info!(error = %err, "无合格医师");
                *self.displayed.write().await = Some(DisplayedMatch::Failed {
                    error: err.to_string(),
                });
                return Err(err.into());
            }
        };

        info!(
            doctor_id = winner.doctor.id,
            total_score = winner.total_score,
            "胜出者已确定"
        );

        // === 步骤 2: 请求说明 (不影响胜出者) ===
        let explanation_request = ExplanationRequest {
            doctor: winner.clone(),
            patient_name: validated.patient_name.clone(),
            treatments: validated.treatments.clone(),
            date: validated.date,
        };
        let (explanation, explanation_source) =
            self.request_explanation(&explanation_request).await;

        let response = MatchResponse {
            match_id: Uuid::new_v4(),
            date: validated.date,
            patient_name: validated.patient_name,
            treatments: validated.treatments,
            required_rank: outcome.required_rank,
            winner,
            candidates: outcome.assessments,
            explanation,
            explanation_source,
        };

        *self.displayed.write().await = Some(DisplayedMatch::Matched(Box::new(response.clone())));
        Ok(response)
    }

    /// 请求说明,失败或超时降级为兜底文字
    async fn request_explanation(
        &self,
        request: &ExplanationRequest,
    ) -> (String, ExplanationSource) {
        let result =
            match tokio::time::timeout(self.explanation_timeout, self.explainer.explain(request))
                .await
            {
                Ok(result) => result,
                Err(_) => Err(ExplainError::Timeout(
                    self.explanation_timeout.as_millis() as u64,
                )),
            };

        match result {
            Ok(text) => (
                text,
                ExplanationSource::Generated {
                    provider: self.explainer.name().to_string(),
                },
            ),
            Err(err) => {
                warn!(provider = self.explainer.name(), error = %err, "说明服务不可用,使用兜底说明");
                (
                    FALLBACK_EXPLANATION.to_string(),
                    ExplanationSource::Fallback {
                        reason: err.to_string(),
                    },
                )
            }
        }
    }

    // ==========================================
    // 显示状态
    // ==========================================

    /// 当前显示中的配对结果
    pub async fn current_match(&self) -> Option<DisplayedMatch> {
        self.displayed.read().await.clone()
    }

    /// 清除显示结果 (日期或选择变更时调用)
    pub async fn invalidate(&self) {
        *self.displayed.write().await = None;
    }

    /// 是否有配对请求在途
    pub fn is_matching(&self) -> bool {
        self.matching.load(Ordering::Acquire)
    }

    // ==========================================
    // 负载看板
    // ==========================================

    /// 指定日期的医师负载看板
    ///
    /// 允许空选择 (此时无职级要求)
    pub fn load_board(&self, date: &str, treatment_ids: &[String]) -> ApiResult<Vec<DoctorLoadCard>> {
        let date = parse_date(date)?;
        let treatments = select_treatments(&self.roster, treatment_ids)?;
        let required_rank = RequiredRankResolver::resolve(&treatments);
        Ok(LoadBoard::build(self.roster.doctors(), date, required_rank))
    }
}
