// ==========================================
// 牙科智能配对系统 - 医师负载看板
// ==========================================
// 职责: 生成每位医师当日负载与目标达成进度 (只读视图)
// 说明: 与配对无关,未选择处置时同样可生成
// ==========================================

use crate::domain::doctor::Doctor;
use crate::domain::treatment::RequiredRank;
use crate::domain::types::Rank;
use crate::engine::capacity::{CapacitySimulator, DAILY_SLOT_CEILING};
use chrono::NaiveDate;
use serde::Serialize;

// ==========================================
// TargetProgress - 单项处置目标进度
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetProgress {
    pub treatment: String,
    pub current: u32,
    pub target: u32,
    pub percent: f64, // current / target × 100,不截断
    pub met: bool,    // percent >= 100
}

// ==========================================
// DoctorLoadCard - 医师负载卡
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorLoadCard {
    pub doctor_id: u32,
    pub name: String,
    pub rank: Rank,
    pub dept: String,
    pub daily_count: u8,
    pub daily_ceiling: u8,
    pub is_full: bool,
    pub is_low_rank: bool,
    pub progress: Vec<TargetProgress>,
}

pub struct LoadBoard;

impl LoadBoard {
    /// 生成负载看板 (保持名册顺序)
    ///
    /// # 参数
    /// - required_rank: None 表示尚无职级要求,此时不标记职级不符
    pub fn build(
        doctors: &[Doctor],
        date: NaiveDate,
        required_rank: Option<RequiredRank>,
    ) -> Vec<DoctorLoadCard> {
        doctors
            .iter()
            .map(|doctor| Self::card(doctor, date, required_rank))
            .collect()
    }

    fn card(doctor: &Doctor, date: NaiveDate, required_rank: Option<RequiredRank>) -> DoctorLoadCard {
        let daily_count = CapacitySimulator::daily_count(doctor.id, date);
        let is_low_rank = required_rank
            .map(|required| !doctor.rank.satisfies(required.level))
            .unwrap_or(false);

        // 只列出医师有设定目标的处置 (BTreeMap 已按名称排序)
        let progress = doctor
            .targets
            .keys()
            .map(|name| {
                let target = doctor.target_for(name);
                let current = doctor.current_cases_for(name);
                let percent = current as f64 / target as f64 * 100.0;
                TargetProgress {
                    treatment: name.clone(),
                    current,
                    target,
                    percent,
                    met: percent >= 100.0,
                }
            })
            .collect();

        DoctorLoadCard {
            doctor_id: doctor.id,
            name: doctor.name.clone(),
            rank: doctor.rank,
            dept: doctor.dept.clone(),
            daily_count,
            daily_ceiling: DAILY_SLOT_CEILING,
            is_full: CapacitySimulator::is_full(daily_count),
            is_low_rank,
            progress,
        }
    }
}
