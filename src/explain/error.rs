// ==========================================
// 牙科智能配对系统 - 说明服务错误类型
// ==========================================

use thiserror::Error;

/// 外部说明服务错误
///
/// 任何变体都不得影响已确定的配对结果,只会触发兜底说明
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExplainError {
    #[error("说明服务超时 ({0} 毫秒)")]
    Timeout(u64),

    #[error("说明服务客户端创建失败: {0}")]
    ClientBuild(String),

    #[error("说明服务连接失败: {0}")]
    Transport(String),

    #[error("说明服务返回错误 {status}: {body}")]
    Status { status: u16, body: String },

    #[error("说明服务响应无法解析: {0}")]
    InvalidResponse(String),

    #[error("说明服务返回空内容")]
    EmptyResponse,
}
