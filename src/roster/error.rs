// ==========================================
// 牙科智能配对系统 - 名册模块错误类型
// ==========================================

use thiserror::Error;

/// 名册读取错误
#[derive(Error, Debug)]
pub enum RosterError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（名册仅支持 .json,处置目录支持 .json/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("JSON 解析失败: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(#[from] csv::Error),

    // ===== 数据映射错误 =====
    #[error("字段映射失败 (行 {row}): {message}")]
    FieldMappingError { row: usize, message: String },

    // ===== 数据质量错误 =====
    #[error("医师编号重复: {0}")]
    DuplicateDoctorId(u32),

    #[error("处置编号重复: {0}")]
    DuplicateTreatmentId(String),

    #[error("处置项目缺少科别: {0}")]
    EmptyDepartment(String),

    #[error("处置名称为空: {0}")]
    EmptyTreatmentName(String),
}
