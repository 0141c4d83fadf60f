// ==========================================
// 牙科智能配对系统 - 核心库
// ==========================================
// 系统定位: 为处置需求指派一位合格医师 (人工最终确认)
// 决策核心: 职级解析 → 当日负载 → 准入 → 评分 → 选择
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 配对规则
pub mod engine;

// 名册层 - 外部数据
pub mod roster;

// 说明服务 - 外部协作者
pub mod explain;

// 配置层
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态组装
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域
pub use domain::{
    DailyAssessment, Doctor, EligibilityVerdict, Rank, RequiredRank, ScoreCard, Treatment,
};

// 引擎
pub use engine::{
    CapacitySimulator, EligibilityFilter, LoadBoard, MatchError, MatchOrchestrator, MatchOutcome,
    RequiredRankResolver, ScoringEngine, Selector,
};

// 名册
pub use roster::{RosterError, RosterLoader, RosterSnapshot};

// 说明服务
pub use explain::{ExplanationRequest, ExplanationRequester};

// API
pub use api::{ApiError, MatchApi, MatchRequest, MatchResponse};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "牙科智能配对系统";
