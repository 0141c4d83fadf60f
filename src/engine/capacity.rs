// ==========================================
// 牙科智能配对系统 - 当日负载模拟器
// ==========================================
// 职责: 给出医师在指定日期已预约的时段数
// 红线: 纯函数,无隐藏状态;相同 (医师, 日期) 永远相同结果
// 说明: 替代真实排班日历,算术必须保持不变以兼容既有测试
// ==========================================

use chrono::{Datelike, NaiveDate};

/// 每日可预约时段上限
pub const DAILY_SLOT_CEILING: u8 = 5;

/// 模拟值取模基数 (结果落在 [0, DAILY_SLOT_CEILING])
const CAPACITY_MODULUS: i64 = DAILY_SLOT_CEILING as i64 + 1;

// ==========================================
// CapacitySimulator - 纯函数工具类
// ==========================================
pub struct CapacitySimulator;

impl CapacitySimulator {
    /// 日期种子 = 年 + 月 + 日
    ///
    /// # 示例
    /// ```
    /// use dental_match::engine::CapacitySimulator;
    /// let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// assert_eq!(CapacitySimulator::date_seed(date), 2042);
    /// ```
    pub fn date_seed(date: NaiveDate) -> i64 {
        date.year() as i64 + date.month() as i64 + date.day() as i64
    }

    /// 医师当日已预约数
    ///
    /// # 规则
    /// - (doctor_id + date_seed) mod 6
    ///
    /// # 返回
    /// - u8: 落在 [0, 5]
    pub fn daily_count(doctor_id: u32, date: NaiveDate) -> u8 {
        let raw = (doctor_id as i64 + Self::date_seed(date)).rem_euclid(CAPACITY_MODULUS);
        raw as u8
    }

    /// 当日是否已满额
    pub fn is_full(daily_count: u8) -> bool {
        daily_count >= DAILY_SLOT_CEILING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_seed_sums_components() {
        assert_eq!(CapacitySimulator::date_seed(date(2024, 3, 15)), 2042);
        assert_eq!(CapacitySimulator::date_seed(date(2025, 12, 31)), 2068);
    }

    #[test]
    fn test_daily_count_known_values() {
        // 2024-03-15 → seed 2042
        assert_eq!(CapacitySimulator::daily_count(1, date(2024, 3, 15)), 3);
        assert_eq!(CapacitySimulator::daily_count(3, date(2024, 3, 15)), 5);
        assert_eq!(CapacitySimulator::daily_count(4, date(2024, 3, 15)), 0);
    }

    #[test]
    fn test_daily_count_deterministic_and_bounded() {
        let start = date(2024, 1, 1);
        for offset in 0..400 {
            let d = start + chrono::Duration::days(offset);
            for id in [0u32, 1, 2, 7, 42, 1001, u32::MAX] {
                let first = CapacitySimulator::daily_count(id, d);
                let second = CapacitySimulator::daily_count(id, d);
                assert_eq!(first, second);
                assert!(first <= DAILY_SLOT_CEILING);
            }
        }
    }

    #[test]
    fn test_is_full() {
        assert!(CapacitySimulator::is_full(5));
        assert!(!CapacitySimulator::is_full(4));
    }
}
