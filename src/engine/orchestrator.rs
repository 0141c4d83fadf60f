// ==========================================
// 牙科智能配对系统 - 配对引擎编排器
// ==========================================
// 用途: 协调 职级解析 → 当日负载 → 准入 + 评分 → 选择
// 红线: 纯同步计算,不持有任何跨调用状态;每次调用从头重算
// ==========================================

use crate::domain::assessment::DailyAssessment;
use crate::domain::doctor::Doctor;
use crate::domain::treatment::{RequiredRank, Treatment};
use crate::engine::{
    CapacitySimulator, EligibilityFilter, MatchError, RequiredRankResolver, ScoringEngine,
    Selector,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, instrument};

// ==========================================
// MatchOutcome - 配对结果
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct MatchOutcome {
    pub date: NaiveDate,
    pub required_rank: RequiredRank,

    // 完整评估列表 (名册顺序,含不合格医师,供显示/稽核)
    pub assessments: Vec<DailyAssessment>,

    // 胜出者 (无合格医师时为 None)
    pub winner: Option<DailyAssessment>,
}

impl MatchOutcome {
    /// 胜出者或 NoEligibleDoctor
    pub fn winner_or_error(&self) -> Result<&DailyAssessment, MatchError> {
        self.winner
            .as_ref()
            .ok_or_else(|| MatchError::no_eligible(self.date, self.required_rank))
    }

    /// 合格医师数
    pub fn eligible_count(&self) -> usize {
        self.assessments
            .iter()
            .filter(|a| a.eligibility.is_eligible())
            .count()
    }
}

// ==========================================
// MatchOrchestrator - 配对引擎编排器
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct MatchOrchestrator;

impl MatchOrchestrator {
    pub fn new() -> Self {
        Self
    }

    /// 执行完整配对流程
    ///
    /// # 参数
    /// - doctors: 医师名册 (顺序即同分裁决顺序)
    /// - date: 预约日期
    /// - selected: 已选处置项目
    ///
    /// # 返回
    /// - Ok(MatchOutcome): 含完整评估列表与胜出者
    /// - Err(MatchError::NoTreatmentsSelected): 未选择处置
    #[instrument(skip(self, doctors, selected), fields(doctors = doctors.len(), treatments = selected.len()))]
    pub fn run(
        &self,
        doctors: &[Doctor],
        date: NaiveDate,
        selected: &[Treatment],
    ) -> Result<MatchOutcome, MatchError> {
        // ==========================================
        // 步骤1: 推导所需职级
        // ==========================================
        let required_rank =
            RequiredRankResolver::resolve(selected).ok_or(MatchError::NoTreatmentsSelected)?;

        // ==========================================
        // 步骤2: 当日负载 + 准入 + 评分
        // ==========================================
        let assessments = self.assess(doctors, date, required_rank, selected);

        // ==========================================
        // 步骤3: 选择胜出者
        // ==========================================
        let winner = Selector::select(&assessments, date, required_rank).ok();

        info!(
            %date,
            required_rank = %required_rank.name,
            eligible = assessments.iter().filter(|a| a.eligibility.is_eligible()).count(),
            winner = ?winner.as_ref().map(|w| w.doctor.id),
            "配对计算完成"
        );

        Ok(MatchOutcome {
            date,
            required_rank,
            assessments,
            winner,
        })
    }

    /// 为名册中每位医师生成当日评估 (保持名册顺序)
    pub fn assess(
        &self,
        doctors: &[Doctor],
        date: NaiveDate,
        required_rank: RequiredRank,
        selected: &[Treatment],
    ) -> Vec<DailyAssessment> {
        doctors
            .iter()
            .map(|doctor| {
                let daily_count = CapacitySimulator::daily_count(doctor.id, date);
                let verdict =
                    EligibilityFilter::evaluate(doctor, daily_count, required_rank, selected);

                if !verdict.is_eligible() {
                    debug!(doctor_id = doctor.id, reasons = ?verdict.reasons, "医师不合格");
                    return DailyAssessment::ineligible(doctor.clone(), daily_count, verdict);
                }

                let card = ScoringEngine::score(doctor, selected);
                debug!(
                    doctor_id = doctor.id,
                    urgency = card.urgency_score,
                    load = card.load_score,
                    total = card.total_score,
                    "医师评分"
                );
                DailyAssessment::scored(doctor.clone(), daily_count, verdict, card)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::INELIGIBLE_SCORE;
    use crate::domain::types::Rank;
    use std::collections::BTreeMap;

    fn doctor(id: u32, rank: Rank, dept: &str, monthly_total: u32) -> Doctor {
        Doctor {
            id,
            name: format!("医师{}", id),
            rank,
            dept: dept.to_string(),
            monthly_total,
            targets: BTreeMap::from([("Implant".to_string(), 5)]),
            current_cases: BTreeMap::from([("Implant".to_string(), 2)]),
        }
    }

    fn implant() -> Treatment {
        Treatment {
            id: "implant".to_string(),
            name: "Implant".to_string(),
            dept: "Ortho".to_string(),
            min_rank: Rank::Fr,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_no_treatments_is_precondition_error() {
        let err = MatchOrchestrator::new()
            .run(&[doctor(1, Rank::Vs, "Ortho", 60)], date(), &[])
            .unwrap_err();
        assert_eq!(err, MatchError::NoTreatmentsSelected);
    }

    #[test]
    fn test_reference_doctor_wins() {
        let outcome = MatchOrchestrator::new()
            .run(&[doctor(1, Rank::Vs, "Ortho", 60)], date(), &[implant()])
            .unwrap();
        let winner = outcome.winner_or_error().unwrap();
        assert_eq!(winner.doctor.id, 1);
        assert_eq!(winner.daily_count, 3);
        assert!((winner.total_score - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_ineligible_doctors_keep_sentinel_and_stay_listed() {
        let doctors = vec![
            doctor(1, Rank::Pgy, "Ortho", 10), // 职级不足
            doctor(3, Rank::Vs, "Ortho", 10),  // 2024-03-15 当日满额
            doctor(4, Rank::Vs, "Endo", 10),   // 科别不符
            doctor(6, Rank::Vs, "Ortho", 10),  // 合格
        ];
        let outcome = MatchOrchestrator::new().run(&doctors, date(), &[implant()]).unwrap();
        assert_eq!(outcome.assessments.len(), 4);
        for a in &outcome.assessments[..3] {
            assert_eq!(a.total_score, INELIGIBLE_SCORE);
            assert!(a.urgency_score.is_none());
        }
        assert_eq!(outcome.eligible_count(), 1);
        assert_eq!(outcome.winner.unwrap().doctor.id, 6);
    }

    #[test]
    fn test_no_eligible_doctor() {
        let outcome = MatchOrchestrator::new()
            .run(&[doctor(3, Rank::Vs, "Ortho", 60)], date(), &[implant()])
            .unwrap();
        assert!(outcome.winner.is_none());
        assert!(matches!(
            outcome.winner_or_error(),
            Err(MatchError::NoEligibleDoctor { .. })
        ));
    }

    #[test]
    fn test_run_is_idempotent() {
        let doctors = vec![
            doctor(1, Rank::Vs, "Ortho", 60),
            doctor(2, Rank::Fr, "Ortho", 20),
            doctor(6, Rank::Vs, "Ortho", 90),
        ];
        let orchestrator = MatchOrchestrator::new();
        let first = orchestrator.run(&doctors, date(), &[implant()]).unwrap();
        let second = orchestrator.run(&doctors, date(), &[implant()]).unwrap();
        assert_eq!(first.assessments, second.assessments);
        assert_eq!(first.winner, second.winner);
    }
}
