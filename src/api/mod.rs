// ==========================================
// 牙科智能配对系统 - API层
// ==========================================
// 职责: 校验外部请求,调用引擎,组装响应
// ==========================================

pub mod error;
pub mod match_api;
pub mod validator;

pub use error::{ApiError, ApiResult};
pub use match_api::{DisplayedMatch, ExplanationSource, MatchApi, MatchResponse};
pub use validator::{MatchRequest, MatchRequestValidator, ValidatedMatchRequest};
