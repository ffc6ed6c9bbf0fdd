//! Ten-god relational classification against the day master.
//!
//! Every relation is a function of (day-master stem, target element,
//! target polarity). Because the 10 stems enumerate exactly the
//! element × polarity pairs, the whole mapping is one precomputed
//! 10×10 table: no branching logic, no unhandled combination. A property
//! test re-derives every cell from the generation/control cycles.

use serde::{Deserialize, Serialize};

use sizhu_calendar::{Element, HeavenlyStem, Polarity, stem_for};

use crate::pillars::{FourPillars, HourPillar};

/// The ten relational labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    BiJian,
    JieCai,
    ShiShen,
    ShangGuan,
    PianCai,
    ZhengCai,
    QiSha,
    ZhengGuan,
    PianYin,
    ZhengYin,
}

/// All 10 labels in traditional pair order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::BiJian,
    TenGod::JieCai,
    TenGod::ShiShen,
    TenGod::ShangGuan,
    TenGod::PianCai,
    TenGod::ZhengCai,
    TenGod::QiSha,
    TenGod::ZhengGuan,
    TenGod::PianYin,
    TenGod::ZhengYin,
];

impl TenGod {
    /// Pinyin name of the label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BiJian => "BiJian",
            Self::JieCai => "JieCai",
            Self::ShiShen => "ShiShen",
            Self::ShangGuan => "ShangGuan",
            Self::PianCai => "PianCai",
            Self::ZhengCai => "ZhengCai",
            Self::QiSha => "QiSha",
            Self::ZhengGuan => "ZhengGuan",
            Self::PianYin => "PianYin",
            Self::ZhengYin => "ZhengYin",
        }
    }

    /// Chinese name of the label.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::BiJian => "比肩",
            Self::JieCai => "劫财",
            Self::ShiShen => "食神",
            Self::ShangGuan => "伤官",
            Self::PianCai => "偏财",
            Self::ZhengCai => "正财",
            Self::QiSha => "七杀",
            Self::ZhengGuan => "正官",
            Self::PianYin => "偏印",
            Self::ZhengYin => "正印",
        }
    }

    /// English name of the label.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::BiJian => "Friend",
            Self::JieCai => "Rob Wealth",
            Self::ShiShen => "Eating God",
            Self::ShangGuan => "Hurting Officer",
            Self::PianCai => "Indirect Wealth",
            Self::ZhengCai => "Direct Wealth",
            Self::QiSha => "Seven Killings",
            Self::ZhengGuan => "Direct Officer",
            Self::PianYin => "Indirect Resource",
            Self::ZhengYin => "Direct Resource",
        }
    }
}

use TenGod::{
    BiJian, JieCai, PianCai, PianYin, QiSha, ShangGuan, ShiShen, ZhengCai, ZhengGuan, ZhengYin,
};

/// Precomputed relation table: `TEN_GOD_TABLE[day_master][target]`.
const TEN_GOD_TABLE: [[TenGod; 10]; 10] = [
    // Jia
    [BiJian, JieCai, ShiShen, ShangGuan, PianCai, ZhengCai, QiSha, ZhengGuan, PianYin, ZhengYin],
    // Yi
    [JieCai, BiJian, ShangGuan, ShiShen, ZhengCai, PianCai, ZhengGuan, QiSha, ZhengYin, PianYin],
    // Bing
    [PianYin, ZhengYin, BiJian, JieCai, ShiShen, ShangGuan, PianCai, ZhengCai, QiSha, ZhengGuan],
    // Ding
    [ZhengYin, PianYin, JieCai, BiJian, ShangGuan, ShiShen, ZhengCai, PianCai, ZhengGuan, QiSha],
    // Wu
    [QiSha, ZhengGuan, PianYin, ZhengYin, BiJian, JieCai, ShiShen, ShangGuan, PianCai, ZhengCai],
    // Ji
    [ZhengGuan, QiSha, ZhengYin, PianYin, JieCai, BiJian, ShangGuan, ShiShen, ZhengCai, PianCai],
    // Geng
    [PianCai, ZhengCai, QiSha, ZhengGuan, PianYin, ZhengYin, BiJian, JieCai, ShiShen, ShangGuan],
    // Xin
    [ZhengCai, PianCai, ZhengGuan, QiSha, ZhengYin, PianYin, JieCai, BiJian, ShangGuan, ShiShen],
    // Ren
    [ShiShen, ShangGuan, PianCai, ZhengCai, QiSha, ZhengGuan, PianYin, ZhengYin, BiJian, JieCai],
    // Gui
    [ShangGuan, ShiShen, ZhengCai, PianCai, ZhengGuan, QiSha, ZhengYin, PianYin, JieCai, BiJian],
];

/// Classify a target stem against the day master. Total over all pairs.
pub const fn ten_god(day_master: HeavenlyStem, target: HeavenlyStem) -> TenGod {
    TEN_GOD_TABLE[day_master.index() as usize][target.index() as usize]
}

/// Classify a target element/polarity (the branch path) against the day
/// master. The pair addresses the unique stem with those attributes.
pub const fn ten_god_for(
    day_master: HeavenlyStem,
    element: Element,
    polarity: Polarity,
) -> TenGod {
    ten_god(day_master, stem_for(element, polarity))
}

/// Stem and branch relations of one pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarRelation {
    pub stem: TenGod,
    pub branch: TenGod,
}

/// Ten-god relations for every classified position of a chart.
///
/// The day stem is the day master itself and carries no relation; an
/// unknown hour pillar is suppressed, not guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenGodMap {
    pub year: PillarRelation,
    pub month: PillarRelation,
    pub day_branch: TenGod,
    pub hour: Option<PillarRelation>,
}

/// Classify every non-day-master position of the chart.
pub fn ten_gods(day_master: HeavenlyStem, pillars: &FourPillars) -> TenGodMap {
    let relation = |sb: sizhu_calendar::StemBranch| PillarRelation {
        stem: ten_god(day_master, sb.stem()),
        branch: ten_god_for(day_master, sb.branch().element(), sb.branch().polarity()),
    };
    TenGodMap {
        year: relation(pillars.year),
        month: relation(pillars.month),
        day_branch: ten_god_for(
            day_master,
            pillars.day.branch().element(),
            pillars.day.branch().polarity(),
        ),
        hour: match pillars.hour {
            HourPillar::Known(sb) => Some(relation(sb)),
            HourPillar::Unknown => None,
        },
    }
}
