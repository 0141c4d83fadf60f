// ==========================================
// 牙科智能配对系统 - 引擎层
// ==========================================
// 职责: 实现配对决策规则
// 红线: 引擎不做 I/O;所有准入规则必须输出 reason
// ==========================================

pub mod capacity;
pub mod eligibility;
pub mod error;
pub mod load_board;
pub mod orchestrator;
pub mod rank_resolver;
pub mod scoring;
pub mod selector;

// 重导出核心引擎
pub use capacity::{CapacitySimulator, DAILY_SLOT_CEILING};
pub use eligibility::EligibilityFilter;
pub use error::MatchError;
pub use load_board::{DoctorLoadCard, LoadBoard, TargetProgress};
pub use orchestrator::{MatchOrchestrator, MatchOutcome};
pub use rank_resolver::RequiredRankResolver;
pub use scoring::{ScoringEngine, LOAD_WEIGHT, MONTHLY_CAPACITY, URGENCY_WEIGHT};
pub use selector::Selector;
