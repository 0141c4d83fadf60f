// ==========================================
// 牙科智能配对系统 - 名册层
// ==========================================
// 职责: 读取外部提供的医师名册与处置目录,建立不可变快照
// ==========================================

pub mod error;
pub mod loader;
pub mod snapshot;

pub use error::RosterError;
pub use loader::RosterLoader;
pub use snapshot::RosterSnapshot;
