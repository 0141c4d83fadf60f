// ==========================================
// 牙科智能配对系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,将引擎/名册/配置错误转换为用户可读消息
// ==========================================

use crate::config::ConfigError;
use crate::engine::MatchError;
use crate::roster::RosterError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 边界校验错误 (进入引擎前拒绝)
    // ==========================================
    #[error("日期格式错误: {0}（期望 YYYY-MM-DD）")]
    MalformedDate(String),

    #[error("处置项目不存在: {0}")]
    UnknownTreatment(String),

    #[error("尚未选择处置项目")]
    NoTreatmentsSelected,

    // ==========================================
    // 业务结果错误 (可恢复,调整输入后重试)
    // ==========================================
    #[error("{0}")]
    NoEligibleDoctor(String),

    // ==========================================
    // 并发控制错误
    // ==========================================
    #[error("已有配对请求进行中,请稍后再试")]
    MatchInFlight,

    // ==========================================
    // 外部数据错误
    // ==========================================
    #[error("名册读取失败: {0}")]
    RosterError(String),

    #[error("配置读取失败: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<MatchError> for ApiError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::NoTreatmentsSelected => ApiError::NoTreatmentsSelected,
            e @ MatchError::NoEligibleDoctor { .. } => ApiError::NoEligibleDoctor(e.to_string()),
        }
    }
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        ApiError::RosterError(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_match_error_conversion() {
        let err: ApiError = MatchError::NoTreatmentsSelected.into();
        assert!(matches!(err, ApiError::NoTreatmentsSelected));

        let err: ApiError = MatchError::NoEligibleDoctor {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            required_rank: "VS".to_string(),
        }
        .into();
        match err {
            ApiError::NoEligibleDoctor(msg) => {
                assert!(msg.contains("查无符合职等或该日未满额之医师"));
                assert!(msg.contains("2024-03-15"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_roster_error_conversion() {
        let err: ApiError = RosterError::DuplicateDoctorId(3).into();
        assert!(err.to_string().contains("医师编号重复"));
    }
}
