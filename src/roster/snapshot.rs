// ==========================================
// 牙科智能配对系统 - 名册快照
// ==========================================
// 红线: 快照建立后不可变;核心只读
// 红线: 医师顺序即同分裁决顺序,加载时不得重排
// ==========================================

use crate::domain::doctor::Doctor;
use crate::domain::treatment::Treatment;
use crate::roster::error::RosterError;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize)]
pub struct RosterSnapshot {
    doctors: Vec<Doctor>,
    treatments: Vec<Treatment>,
}

impl RosterSnapshot {
    /// 建立快照并做数据质量检查
    ///
    /// # 检查项
    /// - 医师编号唯一
    /// - 处置编号唯一
    /// - 处置名称、科别非空
    pub fn new(doctors: Vec<Doctor>, treatments: Vec<Treatment>) -> Result<Self, RosterError> {
        let mut seen_doctors = HashSet::new();
        for doctor in &doctors {
            if !seen_doctors.insert(doctor.id) {
                return Err(RosterError::DuplicateDoctorId(doctor.id));
            }
        }

        Self::check_treatments(&treatments)?;

        Ok(Self {
            doctors,
            treatments,
        })
    }

    /// 以新的处置目录替换 (如 CSV 目录覆写 JSON 内嵌目录)
    pub fn with_treatments(self, treatments: Vec<Treatment>) -> Result<Self, RosterError> {
        Self::new(self.doctors, treatments)
    }

    fn check_treatments(treatments: &[Treatment]) -> Result<(), RosterError> {
        let mut seen = HashSet::new();
        for treatment in treatments {
            if !seen.insert(treatment.id.as_str()) {
                return Err(RosterError::DuplicateTreatmentId(treatment.id.clone()));
            }
            if treatment.name.trim().is_empty() {
                return Err(RosterError::EmptyTreatmentName(treatment.id.clone()));
            }
            // 空科别在包含语义下会匹配所有医师,必须拒绝
            if treatment.dept.trim().is_empty() {
                return Err(RosterError::EmptyDepartment(treatment.id.clone()));
            }
        }
        Ok(())
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn treatments(&self) -> &[Treatment] {
        &self.treatments
    }

    pub fn treatment(&self, id: &str) -> Option<&Treatment> {
        self.treatments.iter().find(|t| t.id == id)
    }

    pub fn doctor(&self, id: u32) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }
}
