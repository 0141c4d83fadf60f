// ==========================================
// 牙科智能配对系统 - 配对请求校验器
// ==========================================
// 职责: 在进入引擎前拒绝不合法输入 (日期、处置编号、空选择)
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::treatment::Treatment;
use crate::roster::RosterSnapshot;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 日期格式 (ISO-8601 日历日期)
const DATE_FORMAT: &str = "%Y-%m-%d";

// ==========================================
// MatchRequest - 配对请求 (外部输入)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub date: String,
    pub treatment_ids: Vec<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
}

// ==========================================
// ValidatedMatchRequest - 已校验请求
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedMatchRequest {
    pub date: NaiveDate,
    pub treatments: Vec<Treatment>, // 目录顺序,已去重
    pub patient_name: String,
}

pub struct MatchRequestValidator {
    patient_placeholder: String,
}

impl MatchRequestValidator {
    pub fn new(patient_placeholder: impl Into<String>) -> Self {
        Self {
            patient_placeholder: patient_placeholder.into(),
        }
    }

    /// 校验配对请求
    pub fn validate(
        &self,
        roster: &RosterSnapshot,
        request: &MatchRequest,
    ) -> ApiResult<ValidatedMatchRequest> {
        let date = parse_date(&request.date)?;

        let treatments = select_treatments(roster, &request.treatment_ids)?;
        if treatments.is_empty() {
            return Err(ApiError::NoTreatmentsSelected);
        }

        Ok(ValidatedMatchRequest {
            date,
            treatments,
            patient_name: self.patient_name(request.patient_name.as_deref()),
        })
    }

    /// 病患姓名,空白时使用占位
    pub fn patient_name(&self, raw: Option<&str>) -> String {
        match raw.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.patient_placeholder.clone(),
        }
    }
}

/// 解析 YYYY-MM-DD
pub fn parse_date(raw: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| ApiError::MalformedDate(raw.to_string()))
}

/// 将处置编号解析为目录条目
///
/// # 规则
/// - 任一编号不存在 → UnknownTreatment
/// - 结果按目录顺序排列,重复编号只保留一次
/// - 空选择返回空列表 (由调用方决定是否为错误)
pub fn select_treatments(roster: &RosterSnapshot, ids: &[String]) -> ApiResult<Vec<Treatment>> {
    if let Some(unknown) = ids.iter().find(|id| roster.treatment(id.trim()).is_none()) {
        return Err(ApiError::UnknownTreatment(unknown.clone()));
    }

    Ok(roster
        .treatments()
        .iter()
        .filter(|t| ids.iter().any(|id| id.trim() == t.id))
        .cloned()
        .collect())
}
