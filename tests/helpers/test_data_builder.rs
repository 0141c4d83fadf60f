// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::NaiveDate;
use dental_match::domain::{Doctor, Rank, Treatment};
use dental_match::roster::RosterSnapshot;
use std::collections::BTreeMap;

// ==========================================
// Doctor 构建器
// ==========================================

pub struct DoctorBuilder {
    id: u32,
    name: String,
    rank: Rank,
    dept: String,
    monthly_total: u32,
    targets: BTreeMap<String, u32>,
    current_cases: BTreeMap<String, u32>,
}

impl DoctorBuilder {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: format!("医师{}", id),
            rank: Rank::Vs,
            dept: "Ortho".to_string(),
            monthly_total: 0,
            targets: BTreeMap::new(),
            current_cases: BTreeMap::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn rank(mut self, rank: Rank) -> Self {
        self.rank = rank;
        self
    }

    pub fn dept(mut self, dept: &str) -> Self {
        self.dept = dept.to_string();
        self
    }

    pub fn monthly_total(mut self, total: u32) -> Self {
        self.monthly_total = total;
        self
    }

    pub fn target(mut self, treatment: &str, target: u32) -> Self {
        self.targets.insert(treatment.to_string(), target);
        self
    }

    pub fn current(mut self, treatment: &str, current: u32) -> Self {
        self.current_cases.insert(treatment.to_string(), current);
        self
    }

    pub fn build(self) -> Doctor {
        Doctor {
            id: self.id,
            name: self.name,
            rank: self.rank,
            dept: self.dept,
            monthly_total: self.monthly_total,
            targets: self.targets,
            current_cases: self.current_cases,
        }
    }
}

// ==========================================
// Treatment / 日期 辅助
// ==========================================

pub fn treatment(id: &str, name: &str, dept: &str, min_rank: Rank) -> Treatment {
    Treatment {
        id: id.to_string(),
        name: name.to_string(),
        dept: dept.to_string(),
        min_rank,
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 参考日期 2024-03-15 (date_seed = 2042)
///
/// 当日负载: id 1 → 3, id 2 → 4, id 3 → 5(满额), id 4 → 0, id 6 → 2
pub fn reference_date() -> NaiveDate {
    date(2024, 3, 15)
}

/// 参考医师: VS / Ortho / 月 60 / Implant 目标 5 已做 2 → 总分 60
pub fn reference_doctor(id: u32) -> Doctor {
    DoctorBuilder::new(id)
        .rank(Rank::Vs)
        .dept("Ortho")
        .monthly_total(60)
        .target("Implant", 5)
        .current("Implant", 2)
        .build()
}

/// 标准处置目录
pub fn catalog() -> Vec<Treatment> {
    vec![
        treatment("scaling", "Scaling", "Perio", Rank::Intern),
        treatment("filling", "Filling", "GD", Rank::Pgy),
        treatment("rct", "RCT", "Endo", Rank::Fr),
        treatment("implant", "Implant", "Ortho", Rank::Fr),
        treatment("surgery", "Surgery", "OS", Rank::Vs),
    ]
}

/// 标准名册
pub fn sample_roster() -> RosterSnapshot {
    let doctors = vec![
        DoctorBuilder::new(1)
            .name("王大明")
            .rank(Rank::Vs)
            .dept("Ortho")
            .monthly_total(60)
            .target("Implant", 5)
            .current("Implant", 2)
            .build(),
        DoctorBuilder::new(2)
            .name("林小芳")
            .rank(Rank::Fr)
            .dept("Endo/Perio")
            .monthly_total(30)
            .target("RCT", 10)
            .current("RCT", 4)
            .target("Scaling", 20)
            .current("Scaling", 25)
            .build(),
        DoctorBuilder::new(3)
            .name("陈志强")
            .rank(Rank::Vs)
            .dept("Ortho/OS")
            .monthly_total(20)
            .target("Implant", 8)
            .build(),
        DoctorBuilder::new(4)
            .name("张雅婷")
            .rank(Rank::Pgy)
            .dept("GD")
            .monthly_total(90)
            .target("Filling", 12)
            .current("Filling", 3)
            .build(),
        DoctorBuilder::new(6)
            .name("黄建国")
            .rank(Rank::Intern)
            .dept("Perio")
            .monthly_total(10)
            .build(),
    ];
    RosterSnapshot::new(doctors, catalog()).unwrap()
}
