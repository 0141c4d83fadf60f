// ==========================================
// 牙科智能配对系统 - 所需职级解析
// ==========================================
// 职责: 由已选处置项目推导最低可接受职级
// 规则: 取各处置 min_rank 中 level 最大者;并列时先出现者胜出
// ==========================================

use crate::domain::treatment::{RequiredRank, Treatment};

pub struct RequiredRankResolver;

impl RequiredRankResolver {
    /// 解析所需职级
    ///
    /// # 返回
    /// - None: 未选择任何处置 (尚无要求,不是错误)
    /// - Some(RequiredRank): 最高的最低职级
    pub fn resolve(selected: &[Treatment]) -> Option<RequiredRank> {
        let mut required: Option<RequiredRank> = None;

        for treatment in selected {
            let candidate = RequiredRank::from(treatment.min_rank);
            // 严格大于才替换,保证并列时先出现者稳定
            match required {
                Some(current) if candidate.level <= current.level => {}
                _ => required = Some(candidate),
            }
        }

        required
    }
}
