// ==========================================
// 牙科智能配对系统 - 当日评估 (派生对象)
// ==========================================
// 红线: 仅在单次配对内存在,不落库,日期/选择变化即重算
// 红线: 不合格医师一律标记 total_score = -1,永不入选
// ==========================================

use crate::domain::doctor::Doctor;
use serde::{Deserialize, Serialize};

/// 不合格医师的哨兵分数
pub const INELIGIBLE_SCORE: f64 = -1.0;

// ==========================================
// EligibilityVerdict - 准入判定结果
// ==========================================
// 三项判定独立计算,全部通过才算合格
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub rank_ok: bool,
    pub capacity_ok: bool,
    pub dept_ok: bool,
    pub reasons: Vec<String>,
}

impl EligibilityVerdict {
    pub fn is_eligible(&self) -> bool {
        self.rank_ok && self.capacity_ok && self.dept_ok
    }
}

// ==========================================
// ScoreCard - 评分结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub urgency_score: f64, // 目标缺口分 (可为负或超过 100)
    pub load_score: f64,    // 月负载反向分
    pub total_score: f64,   // 0.7 × urgency + 0.3 × load
}

// ==========================================
// DailyAssessment - 医师当日评估
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAssessment {
    #[serde(flatten)]
    pub doctor: Doctor,

    // ===== 当日负载 =====
    pub daily_count: u8,

    // ===== 准入 =====
    pub eligibility: EligibilityVerdict,

    // ===== 评分 (仅合格医师有值) =====
    pub urgency_score: Option<f64>,
    pub load_score: Option<f64>,
    pub total_score: f64,
}

impl DailyAssessment {
    /// 构造不合格评估 (哨兵分数)
    pub fn ineligible(doctor: Doctor, daily_count: u8, eligibility: EligibilityVerdict) -> Self {
        Self {
            doctor,
            daily_count,
            eligibility,
            urgency_score: None,
            load_score: None,
            total_score: INELIGIBLE_SCORE,
        }
    }

    /// 构造合格评估
    pub fn scored(
        doctor: Doctor,
        daily_count: u8,
        eligibility: EligibilityVerdict,
        score: ScoreCard,
    ) -> Self {
        Self {
            doctor,
            daily_count,
            eligibility,
            urgency_score: Some(score.urgency_score),
            load_score: Some(score.load_score),
            total_score: score.total_score,
        }
    }

    /// 是否可参与排名
    pub fn is_selectable(&self) -> bool {
        self.total_score >= 0.0
    }
}
