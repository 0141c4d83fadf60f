// ==========================================
// 牙科智能配对系统 - 应用层
// ==========================================
// 职责: 组装配置、名册与API
// ==========================================

pub mod state;

// 重导出
pub use state::AppState;
