// ==========================================
// 牙科智能配对系统 - 胜出者选择
// ==========================================
// 职责: 过滤 total_score >= 0 的医师,按总分降序取第一位
// 红线: 稳定排序,同分时名册中先出现者胜出 (可复现)
// ==========================================

use crate::domain::assessment::DailyAssessment;
use crate::domain::treatment::RequiredRank;
use crate::engine::error::MatchError;
use chrono::NaiveDate;

pub struct Selector;

impl Selector {
    /// 可参与排名的医师,按总分降序 (稳定)
    pub fn rank(assessments: &[DailyAssessment]) -> Vec<&DailyAssessment> {
        let mut ranked: Vec<&DailyAssessment> =
            assessments.iter().filter(|a| a.is_selectable()).collect();
        // Vec::sort_by 为稳定排序
        ranked.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
        ranked
    }

    /// 选出胜出者
    ///
    /// # 返回
    /// - Ok(DailyAssessment): 总分最高者
    /// - Err(MatchError::NoEligibleDoctor): 无可选医师
    pub fn select(
        assessments: &[DailyAssessment],
        date: NaiveDate,
        required: RequiredRank,
    ) -> Result<DailyAssessment, MatchError> {
        Self::rank(assessments)
            .first()
            .map(|winner| (*winner).clone())
            .ok_or_else(|| MatchError::no_eligible(date, required))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{EligibilityVerdict, ScoreCard};
    use crate::domain::doctor::Doctor;
    use crate::domain::types::Rank;
    use std::collections::BTreeMap;

    fn verdict(ok: bool) -> EligibilityVerdict {
        EligibilityVerdict {
            rank_ok: ok,
            capacity_ok: true,
            dept_ok: true,
            reasons: vec![],
        }
    }

    fn doctor(id: u32) -> Doctor {
        Doctor {
            id,
            name: format!("D{}", id),
            rank: Rank::Vs,
            dept: "Ortho".to_string(),
            monthly_total: 0,
            targets: BTreeMap::new(),
            current_cases: BTreeMap::new(),
        }
    }

    fn scored(id: u32, total: f64) -> DailyAssessment {
        DailyAssessment::scored(
            doctor(id),
            0,
            verdict(true),
            ScoreCard {
                urgency_score: total,
                load_score: total,
                total_score: total,
            },
        )
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_selects_highest_total() {
        let list = vec![scored(1, 40.0), scored(2, 75.5), scored(3, 60.0)];
        let winner = Selector::select(&list, date(), Rank::Fr.into()).unwrap();
        assert_eq!(winner.doctor.id, 2);
    }

    #[test]
    fn test_tie_keeps_roster_order() {
        let list = vec![scored(5, 10.0), scored(8, 60.0), scored(2, 60.0)];
        let winner = Selector::select(&list, date(), Rank::Fr.into()).unwrap();
        assert_eq!(winner.doctor.id, 8);
    }

    #[test]
    fn test_ineligible_never_selected() {
        let list = vec![
            DailyAssessment::ineligible(doctor(1), 5, verdict(false)),
            scored(2, 0.0),
        ];
        let winner = Selector::select(&list, date(), Rank::Fr.into()).unwrap();
        assert_eq!(winner.doctor.id, 2);
    }

    #[test]
    fn test_negative_total_is_not_selectable() {
        let list = vec![scored(1, -12.5)];
        let err = Selector::select(&list, date(), Rank::Fr.into()).unwrap_err();
        assert!(matches!(err, MatchError::NoEligibleDoctor { .. }));
    }

    #[test]
    fn test_empty_list_is_error() {
        assert!(Selector::select(&[], date(), Rank::Intern.into()).is_err());
    }

    #[test]
    fn test_rank_is_descending() {
        let list = vec![scored(1, 10.0), scored(2, 30.0), scored(3, 20.0)];
        let ids: Vec<u32> = Selector::rank(&list).iter().map(|a| a.doctor.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
