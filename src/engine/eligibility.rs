// ==========================================
// 牙科智能配对系统 - 医师准入过滤
// ==========================================
// 职责: 职级 / 当日满额 / 科别 三项独立判定
// 红线: 三项全部通过才合格;每项判定都必须输出 reason
// ==========================================

use crate::domain::assessment::EligibilityVerdict;
use crate::domain::doctor::Doctor;
use crate::domain::treatment::{RequiredRank, Treatment};
use crate::engine::capacity::DAILY_SLOT_CEILING;

pub struct EligibilityFilter;

impl EligibilityFilter {
    /// 判定医师是否可承接本次处置
    ///
    /// # 参数
    /// - doctor: 医师
    /// - daily_count: 当日已预约数
    /// - required: 所需最低职级
    /// - selected: 已选处置项目
    ///
    /// # 返回
    /// - EligibilityVerdict: 三项结果 + 决策原因
    pub fn evaluate(
        doctor: &Doctor,
        daily_count: u8,
        required: RequiredRank,
        selected: &[Treatment],
    ) -> EligibilityVerdict {
        let mut reasons = Vec::new();

        // 规则 1: 职级
        let rank_ok = Self::rank_check(doctor, required);
        if !rank_ok {
            reasons.push(format!(
                "RANK_TOO_LOW: rank={}({}) < required={}({})",
                doctor.rank,
                doctor.rank.level(),
                required.name,
                required.level
            ));
        }

        // 规则 2: 当日满额
        let capacity_ok = Self::capacity_check(daily_count);
        if !capacity_ok {
            reasons.push(format!(
                "DAILY_FULL: daily_count={} >= {}",
                daily_count, DAILY_SLOT_CEILING
            ));
        }

        // 规则 3: 科别
        let dept_ok = Self::department_check(doctor, selected);
        if !dept_ok {
            reasons.push(format!("DEPT_MISMATCH: dept={}", doctor.dept));
        }

        if reasons.is_empty() {
            reasons.push("ELIGIBLE".to_string());
        }

        EligibilityVerdict {
            rank_ok,
            capacity_ok,
            dept_ok,
            reasons,
        }
    }

    /// 仅返回是否合格
    pub fn is_eligible(
        doctor: &Doctor,
        daily_count: u8,
        required: RequiredRank,
        selected: &[Treatment],
    ) -> bool {
        Self::evaluate(doctor, daily_count, required, selected).is_eligible()
    }

    /// 职级判定: level(doctor.rank) >= required.level
    pub fn rank_check(doctor: &Doctor, required: RequiredRank) -> bool {
        doctor.rank.satisfies(required.level)
    }

    /// 当日满额判定: daily_count < 5
    pub fn capacity_check(daily_count: u8) -> bool {
        daily_count < DAILY_SLOT_CEILING
    }

    /// 科别判定: 医师科别包含任一已选处置的科别
    pub fn department_check(doctor: &Doctor, selected: &[Treatment]) -> bool {
        selected.iter().any(|t| doctor.covers_department(&t.dept))
    }
}
