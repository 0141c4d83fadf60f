// ==========================================
// 牙科智能配对系统 - 引擎层错误类型
// ==========================================

use crate::domain::treatment::RequiredRank;
use chrono::NaiveDate;
use thiserror::Error;

/// 配对引擎错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    /// 前置条件: 未选择处置项目,无法推导所需职级
    #[error("尚未选择处置项目")]
    NoTreatmentsSelected,

    /// 无任何医师同时满足职级 / 当日满额 / 科别
    #[error("查无符合职等或该日未满额之医师 (date={date}, required_rank={required_rank})")]
    NoEligibleDoctor { date: NaiveDate, required_rank: String },
}

impl MatchError {
    pub(crate) fn no_eligible(date: NaiveDate, required: RequiredRank) -> Self {
        MatchError::NoEligibleDoctor {
            date,
            required_rank: required.name.to_string(),
        }
    }
}
