//! The 24 solar terms (jieqi) in civil-calendar-year order.
//!
//! Terms alternate between "nodes" (jie) and mid-terms (qi); only nodes
//! govern month-pillar cutover. The array here is ordered January-first
//! (XiaoHan = 0), under which nodes sit at even indices; downstream code
//! must use [`SolarTerm::is_node`], never index parity.

use serde::{Deserialize, Serialize};
use sizhu_calendar::EarthlyBranch;

/// The 24 solar terms, two per civil month starting with January's XiaoHan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum SolarTerm {
    XiaoHan,
    DaHan,
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
}

/// All 24 terms in civil-year order (index 0 = XiaoHan, early January).
pub const ALL_TERMS: [SolarTerm; 24] = [
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
];

const TERM_NAMES: [&str; 24] = [
    "XiaoHan",
    "DaHan",
    "LiChun",
    "YuShui",
    "JingZhe",
    "ChunFen",
    "QingMing",
    "GuYu",
    "LiXia",
    "XiaoMan",
    "MangZhong",
    "XiaZhi",
    "XiaoShu",
    "DaShu",
    "LiQiu",
    "ChuShu",
    "BaiLu",
    "QiuFen",
    "HanLu",
    "ShuangJiang",
    "LiDong",
    "XiaoXue",
    "DaXue",
    "DongZhi",
];

const TERM_CHINESE: [&str; 24] = [
    "小寒",
    "大寒",
    "立春",
    "雨水",
    "惊蛰",
    "春分",
    "清明",
    "谷雨",
    "立夏",
    "小满",
    "芒种",
    "夏至",
    "小暑",
    "大暑",
    "立秋",
    "处暑",
    "白露",
    "秋分",
    "寒露",
    "霜降",
    "立冬",
    "小雪",
    "大雪",
    "冬至",
];

impl SolarTerm {
    /// 0-based index into ALL_TERMS.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Create from a 0-based index. Returns None if index >= 24.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 24 {
            Some(ALL_TERMS[index as usize])
        } else {
            None
        }
    }

    /// Pinyin name of the term.
    pub const fn name(self) -> &'static str {
        TERM_NAMES[self.index() as usize]
    }

    /// Chinese name of the term.
    pub const fn chinese(self) -> &'static str {
        TERM_CHINESE[self.index() as usize]
    }

    /// Civil month (1-12) the term falls in.
    pub const fn civil_month(self) -> u32 {
        (self.index() as u32) / 2 + 1
    }

    /// Whether this term is a node (jie) governing month-pillar cutover.
    ///
    /// Under the January-first ordering the nodes are the even indices.
    pub const fn is_node(self) -> bool {
        self.index() % 2 == 0
    }

    /// The node governing the same civil month (itself, or one step back).
    pub const fn governing_node(self) -> Self {
        if self.is_node() {
            self
        } else {
            ALL_TERMS[(self.index() - 1) as usize]
        }
    }

    /// The month branch a node opens: LiChun opens the Yin month, and the
    /// remaining nodes follow in branch order. Returns None for mid-terms.
    pub const fn month_branch(self) -> Option<EarthlyBranch> {
        match self {
            Self::LiChun => Some(EarthlyBranch::Yin),
            Self::JingZhe => Some(EarthlyBranch::Mao),
            Self::QingMing => Some(EarthlyBranch::Chen),
            Self::LiXia => Some(EarthlyBranch::Si),
            Self::MangZhong => Some(EarthlyBranch::Wu),
            Self::XiaoShu => Some(EarthlyBranch::Wei),
            Self::LiQiu => Some(EarthlyBranch::Shen),
            Self::BaiLu => Some(EarthlyBranch::You),
            Self::HanLu => Some(EarthlyBranch::Xu),
            Self::LiDong => Some(EarthlyBranch::Hai),
            Self::DaXue => Some(EarthlyBranch::Zi),
            Self::XiaoHan => Some(EarthlyBranch::Chou),
            _ => None,
        }
    }
}
