// ==========================================
// 牙科智能配对系统 - 名册加载器
// ==========================================
// 支持: 名册 JSON (医师 + 处置目录) / 处置目录 CSV
// 红线: 只读外部数据,不回写
// ==========================================

use crate::domain::doctor::Doctor;
use crate::domain::treatment::Treatment;
use crate::domain::types::Rank;
use crate::roster::error::RosterError;
use crate::roster::snapshot::RosterSnapshot;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// 名册 JSON 结构
#[derive(Debug, Deserialize)]
struct RosterFile {
    doctors: Vec<Doctor>,
    #[serde(default)]
    treatments: Vec<Treatment>,
}

pub struct RosterLoader;

impl RosterLoader {
    // ==========================================
    // JSON 名册
    // ==========================================

    /// 从 JSON 文本解析名册
    pub fn from_json_str(raw: &str) -> Result<RosterSnapshot, RosterError> {
        let file: RosterFile = serde_json::from_str(raw)?;
        RosterSnapshot::new(file.doctors, file.treatments)
    }

    /// 从 JSON 文件读取名册
    pub fn from_json_file(path: &Path) -> Result<RosterSnapshot, RosterError> {
        Self::check_file(path, &["json"])?;

        let raw = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json_str(&raw)?;

        info!(
            path = %path.display(),
            doctors = snapshot.doctors().len(),
            treatments = snapshot.treatments().len(),
            "名册加载完成"
        );
        Ok(snapshot)
    }

    // ==========================================
    // 处置目录
    // ==========================================

    /// 按扩展名读取处置目录 (.csv / .json)
    pub fn treatments_from_file(path: &Path) -> Result<Vec<Treatment>, RosterError> {
        Self::check_file(path, &["csv", "json"])?;

        match Self::extension(path).as_str() {
            "json" => {
                let raw = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&raw)?)
            }
            _ => Self::treatments_from_csv_reader(File::open(path)?),
        }
    }

    /// 从 CSV 读取处置目录
    ///
    /// 表头: id,name,dept,min_rank (顺序不限,大小写不敏感)
    pub fn treatments_from_csv_reader<R: Read>(reader: R) -> Result<Vec<Treatment>, RosterError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let mut treatments = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            // 行号从 1 起算,表头为第 1 行
            let row = idx + 2;

            let row_map: HashMap<&str, &str> = headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.as_str(), v))
                .collect();

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            treatments.push(Self::map_treatment_row(row, &row_map)?);
        }

        Ok(treatments)
    }

    fn map_treatment_row(
        row: usize,
        row_map: &HashMap<&str, &str>,
    ) -> Result<Treatment, RosterError> {
        let field = |name: &str| -> Result<String, RosterError> {
            match row_map.get(name) {
                Some(v) if !v.is_empty() => Ok(v.to_string()),
                _ => Err(RosterError::FieldMappingError {
                    row,
                    message: format!("缺少字段 {}", name),
                }),
            }
        };

        let min_rank_raw = field("min_rank")?;
        let min_rank: Rank = min_rank_raw
            .parse()
            .map_err(|message| RosterError::FieldMappingError { row, message })?;

        Ok(Treatment {
            id: field("id")?,
            name: field("name")?,
            dept: field("dept")?,
            min_rank,
        })
    }

    fn check_file(path: &Path, allowed: &[&str]) -> Result<(), RosterError> {
        if !path.exists() {
            return Err(RosterError::FileNotFound(path.display().to_string()));
        }

        let ext = Self::extension(path);
        if !allowed.contains(&ext.as_str()) {
            return Err(RosterError::UnsupportedFormat(ext));
        }
        Ok(())
    }

    /// 小写扩展名 (无扩展名时为空串)
    fn extension(path: &Path) -> String {
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase()
    }
}
