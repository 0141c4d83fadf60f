// ==========================================
// Mock 说明服务 - 用于集成测试
// ==========================================

use async_trait::async_trait;
use dental_match::explain::{ExplainError, ExplanationRequest, ExplanationRequester};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

/// Mock 行为
pub enum MockBehavior {
    /// 立即返回固定文字
    Reply(String),
    /// 立即返回错误
    Fail(ExplainError),
    /// 等待一段时间后返回
    Delay(Duration, String),
    /// 进入后通知 entered,等待 release 后返回
    Gate {
        entered: Arc<Notify>,
        release: Arc<Notify>,
    },
}

pub struct MockExplainer {
    behavior: MockBehavior,
    calls: AtomicUsize,
    last_request: Mutex<Option<ExplanationRequest>>,
}

impl MockExplainer {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self::new(MockBehavior::Reply(text.to_string())))
    }

    pub fn failing(err: ExplainError) -> Arc<Self> {
        Arc::new(Self::new(MockBehavior::Fail(err)))
    }

    pub fn delayed(delay: Duration, text: &str) -> Arc<Self> {
        Arc::new(Self::new(MockBehavior::Delay(delay, text.to_string())))
    }

    /// 返回 (mock, entered, release)
    pub fn gated() -> (Arc<Self>, Arc<Notify>, Arc<Notify>) {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let mock = Arc::new(Self::new(MockBehavior::Gate {
            entered: entered.clone(),
            release: release.clone(),
        }));
        (mock, entered, release)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ExplanationRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExplanationRequester for MockExplainer {
    async fn explain(&self, request: &ExplanationRequest) -> Result<String, ExplainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        match &self.behavior {
            MockBehavior::Reply(text) => Ok(text.clone()),
            MockBehavior::Fail(err) => Err(err.clone()),
            MockBehavior::Delay(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(text.clone())
            }
            MockBehavior::Gate { entered, release } => {
                // notify_one 会保留许可,先通知后等待也不会丢失
                entered.notify_one();
                release.notified().await;
                Ok("放行".to_string())
            }
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
