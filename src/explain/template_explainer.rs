// ==========================================
// 牙科智能配对系统 - 本地模板说明
// ==========================================
// 用途: 未配置远端说明服务时使用;确定性输出,无 I/O
// ==========================================

use crate::engine::DAILY_SLOT_CEILING;
use crate::explain::error::ExplainError;
use crate::explain::explainer_trait::{ExplanationRequest, ExplanationRequester};
use async_trait::async_trait;

#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateExplainer;

impl TemplateExplainer {
    pub fn new() -> Self {
        Self
    }

    /// 生成说明文字
    pub fn render(request: &ExplanationRequest) -> String {
        let doctor = &request.doctor;
        let treatments: Vec<&str> = request.treatments.iter().map(|t| t.name.as_str()).collect();

        format!(
            "{patient} 于 {date} 的 {treatments} 建议由 {name} 医师（{rank}，{dept}）负责：\
             当日已约 {daily}/{ceiling}，案例目标缺口分 {urgency:.1}，月负载分 {load:.1}，综合 {total:.1} 分为合格医师中最高。",
            patient = request.patient_name,
            date = request.date,
            treatments = treatments.join("、"),
            name = doctor.doctor.name,
            rank = doctor.doctor.rank,
            dept = doctor.doctor.dept,
            daily = doctor.daily_count,
            ceiling = DAILY_SLOT_CEILING,
            urgency = doctor.urgency_score.unwrap_or_default(),
            load = doctor.load_score.unwrap_or_default(),
            total = doctor.total_score,
        )
    }
}

#[async_trait]
impl ExplanationRequester for TemplateExplainer {
    async fn explain(&self, request: &ExplanationRequest) -> Result<String, ExplainError> {
        Ok(Self::render(request))
    }

    fn name(&self) -> &str {
        "template"
    }
}
