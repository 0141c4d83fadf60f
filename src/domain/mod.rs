// ==========================================
// 牙科智能配对系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据读取逻辑,不含引擎逻辑
// ==========================================

pub mod assessment;
pub mod doctor;
pub mod treatment;
pub mod types;

// 重导出核心类型
pub use assessment::{DailyAssessment, EligibilityVerdict, ScoreCard, INELIGIBLE_SCORE};
pub use doctor::{Doctor, DEFAULT_CURRENT_CASES, DEFAULT_TARGET_CASES};
pub use treatment::{RequiredRank, Treatment};
pub use types::Rank;
