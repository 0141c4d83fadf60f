// ==========================================
// 牙科智能配对系统 - 评分引擎
// ==========================================
// 职责: 对已通过准入的医师计算 urgency / load / total 分数
// 红线: 权重固定为 0.7 / 0.3,不得静默调整;分数不做截断
// ==========================================

use crate::domain::assessment::ScoreCard;
use crate::domain::doctor::Doctor;
use crate::domain::treatment::Treatment;

/// 月度案例容量
pub const MONTHLY_CAPACITY: f64 = 150.0;

/// 目标缺口权重
pub const URGENCY_WEIGHT: f64 = 0.7;

/// 月负载权重
pub const LOAD_WEIGHT: f64 = 0.3;

pub struct ScoringEngine;

impl ScoringEngine {
    /// 计算评分
    ///
    /// # 规则
    /// - 单项缺口 = (target - current) / target × 100
    /// - urgency = 各已选处置缺口的算术平均
    /// - load = (150 - monthly_total) / 150 × 100
    /// - total = 0.7 × urgency + 0.3 × load
    pub fn score(doctor: &Doctor, selected: &[Treatment]) -> ScoreCard {
        let urgency_score = Self::urgency_score(doctor, selected);
        let load_score = Self::load_score(doctor.monthly_total);

        ScoreCard {
            urgency_score,
            load_score,
            total_score: Self::total_score(urgency_score, load_score),
        }
    }

    /// 单项处置缺口分
    pub fn treatment_urgency(doctor: &Doctor, treatment: &Treatment) -> f64 {
        let target = doctor.target_for(&treatment.name) as f64;
        let current = doctor.current_cases_for(&treatment.name) as f64;
        (target - current) / target * 100.0
    }

    /// 缺口平均分
    ///
    /// 空选择返回 0 (准入阶段已保证不会出现)
    pub fn urgency_score(doctor: &Doctor, selected: &[Treatment]) -> f64 {
        if selected.is_empty() {
            return 0.0;
        }

        let sum: f64 = selected
            .iter()
            .map(|t| Self::treatment_urgency(doctor, t))
            .sum();
        sum / selected.len() as f64
    }

    /// 月负载反向分
    pub fn load_score(monthly_total: u32) -> f64 {
        (MONTHLY_CAPACITY - monthly_total as f64) / MONTHLY_CAPACITY * 100.0
    }

    /// 加权总分
    pub fn total_score(urgency_score: f64, load_score: f64) -> f64 {
        URGENCY_WEIGHT * urgency_score + LOAD_WEIGHT * load_score
    }
}
