// ==========================================
// 牙科智能配对系统 - 处置项目领域模型
// ==========================================

use crate::domain::types::Rank;
use serde::{Deserialize, Serialize};

// ==========================================
// Treatment - 处置项目 (目录条目,不可变)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treatment {
    pub id: String,
    pub name: String,      // 显示名称,同时作为医师目标表的键
    pub dept: String,      // 所属科别
    pub min_rank: Rank,    // 最低执行职级
}

// ==========================================
// RequiredRank - 所需最低职级 (派生值)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredRank {
    pub name: Rank,
    pub level: u8,
}

impl From<Rank> for RequiredRank {
    fn from(rank: Rank) -> Self {
        Self {
            name: rank,
            level: rank.level(),
        }
    }
}
