// ==========================================
// 牙科智能配对系统 - 领域类型定义
// ==========================================
// 红线: 职级比较只按 level 序数,不按字符串或数组下标
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 医师职级 (Rank)
// ==========================================
// 顺序: Intern < PGY < FR < VS (严格全序,无并列)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "Intern")]
    Intern, // 实习医师
    #[serde(rename = "PGY")]
    Pgy, // 毕业后一般医学训练医师
    #[serde(rename = "FR")]
    Fr, // 住院总医师
    #[serde(rename = "VS")]
    Vs, // 主治医师
}

impl Rank {
    /// 全部职级,按 level 升序
    pub const ALL: [Rank; 4] = [Rank::Intern, Rank::Pgy, Rank::Fr, Rank::Vs];

    /// 职级序数
    pub fn level(self) -> u8 {
        match self {
            Rank::Intern => 1,
            Rank::Pgy => 2,
            Rank::Fr => 3,
            Rank::Vs => 4,
        }
    }

    /// 职级名称 (与外部名册一致)
    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Intern => "Intern",
            Rank::Pgy => "PGY",
            Rank::Fr => "FR",
            Rank::Vs => "VS",
        }
    }

    /// 是否达到指定职级要求
    pub fn satisfies(self, required_level: u8) -> bool {
        self.level() >= required_level
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.level().cmp(&other.level())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Rank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Intern" => Ok(Rank::Intern),
            "PGY" => Ok(Rank::Pgy),
            "FR" => Ok(Rank::Fr),
            "VS" => Ok(Rank::Vs),
            other => Err(format!("未知职级: {}", other)),
        }
    }
}
