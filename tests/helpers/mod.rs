// ==========================================
// 集成测试共享辅助模块
// ==========================================

#![allow(dead_code)]

pub mod mock_explainer;
pub mod stub_server;
pub mod test_data_builder;
