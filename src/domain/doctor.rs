// ==========================================
// 牙科智能配对系统 - 医师领域模型
// ==========================================
// 红线: 核心只读医师数据,不新增、不删除
// 缺省值策略集中在访问器: 目标缺失 → 1, 当前案例缺失 → 0
// ==========================================

use crate::domain::types::Rank;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 目标案例数缺省值 (同时避免除零)
pub const DEFAULT_TARGET_CASES: u32 = 1;

/// 当前案例数缺省值
pub const DEFAULT_CURRENT_CASES: u32 = 0;

// ==========================================
// Doctor - 医师
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    // ===== 身份 =====
    pub id: u32,
    pub name: String,

    // ===== 资格 =====
    pub rank: Rank,
    pub dept: String, // 科别标签,多科别以分隔符拼接 (如 "Ortho/Perio")

    // ===== 负载 =====
    #[serde(default)]
    pub monthly_total: u32, // 本月累计案例数

    // ===== 处置目标 (按处置名称) =====
    #[serde(default)]
    pub targets: BTreeMap<String, u32>,
    #[serde(default)]
    pub current_cases: BTreeMap<String, u32>,
}

impl Doctor {
    /// 某处置的目标案例数
    ///
    /// 缺失或为 0 时取 DEFAULT_TARGET_CASES
    pub fn target_for(&self, treatment_name: &str) -> u32 {
        match self.targets.get(treatment_name) {
            Some(&target) if target > 0 => target,
            _ => DEFAULT_TARGET_CASES,
        }
    }

    /// 某处置的当前案例数
    pub fn current_cases_for(&self, treatment_name: &str) -> u32 {
        self.current_cases
            .get(treatment_name)
            .copied()
            .unwrap_or(DEFAULT_CURRENT_CASES)
    }

    /// 科别是否覆盖指定科别 (包含语义,非精确相等)
    pub fn covers_department(&self, dept: &str) -> bool {
        self.dept.contains(dept)
    }
}
