//! Nayin ("received sound") categories of the sexagenary cycle.
//!
//! Consecutive cycle pairs share one of 30 sound categories: position / 2.
//! Standard table from traditional sources, public domain.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::cycle::StemBranch;
use crate::element::Element;
use crate::error::CalendarError;
use crate::stem::HeavenlyStem;

/// The 30 nayin categories in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Nayin {
    HaiZhongJin,
    LuZhongHuo,
    DaLinMu,
    LuPangTu,
    JianFengJin,
    ShanTouHuo,
    JianXiaShui,
    ChengTouTu,
    BaiLaJin,
    YangLiuMu,
    QuanZhongShui,
    WuShangTu,
    PiLiHuo,
    SongBaiMu,
    ChangLiuShui,
    ShaZhongJin,
    ShanXiaHuo,
    PingDiMu,
    BiShangTu,
    JinBoJin,
    FuDengHuo,
    TianHeShui,
    DaYiTu,
    ChaiChuanJin,
    SangZheMu,
    DaXiShui,
    ShaZhongTu,
    TianShangHuo,
    ShiLiuMu,
    DaHaiShui,
}

/// All 30 nayin categories in cycle order (index 0 = HaiZhongJin).
pub const ALL_NAYIN: [Nayin; 30] = [
    Nayin::HaiZhongJin,
    Nayin::LuZhongHuo,
    Nayin::DaLinMu,
    Nayin::LuPangTu,
    Nayin::JianFengJin,
    Nayin::ShanTouHuo,
    Nayin::JianXiaShui,
    Nayin::ChengTouTu,
    Nayin::BaiLaJin,
    Nayin::YangLiuMu,
    Nayin::QuanZhongShui,
    Nayin::WuShangTu,
    Nayin::PiLiHuo,
    Nayin::SongBaiMu,
    Nayin::ChangLiuShui,
    Nayin::ShaZhongJin,
    Nayin::ShanXiaHuo,
    Nayin::PingDiMu,
    Nayin::BiShangTu,
    Nayin::JinBoJin,
    Nayin::FuDengHuo,
    Nayin::TianHeShui,
    Nayin::DaYiTu,
    Nayin::ChaiChuanJin,
    Nayin::SangZheMu,
    Nayin::DaXiShui,
    Nayin::ShaZhongTu,
    Nayin::TianShangHuo,
    Nayin::ShiLiuMu,
    Nayin::DaHaiShui,
];

const NAYIN_CHINESE: [&str; 30] = [
    "海中金",
    "炉中火",
    "大林木",
    "路旁土",
    "剑锋金",
    "山头火",
    "涧下水",
    "城头土",
    "白蜡金",
    "杨柳木",
    "泉中水",
    "屋上土",
    "霹雳火",
    "松柏木",
    "长流水",
    "砂中金",
    "山下火",
    "平地木",
    "壁上土",
    "金箔金",
    "覆灯火",
    "天河水",
    "大驿土",
    "钗钏金",
    "桑柘木",
    "大溪水",
    "沙中土",
    "天上火",
    "石榴木",
    "大海水",
];

impl Nayin {
    /// 0-based index into ALL_NAYIN.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Create from a 0-based index. Returns None if index >= 30.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 30 {
            Some(ALL_NAYIN[index as usize])
        } else {
            None
        }
    }

    /// Chinese name of the category.
    pub const fn chinese(self) -> &'static str {
        NAYIN_CHINESE[self.index() as usize]
    }

    /// The sound's element, the last character of the Chinese name.
    pub const fn element(self) -> Element {
        match self {
            Self::HaiZhongJin
            | Self::JianFengJin
            | Self::BaiLaJin
            | Self::ShaZhongJin
            | Self::JinBoJin
            | Self::ChaiChuanJin => Element::Metal,
            Self::LuZhongHuo
            | Self::ShanTouHuo
            | Self::PiLiHuo
            | Self::ShanXiaHuo
            | Self::FuDengHuo
            | Self::TianShangHuo => Element::Fire,
            Self::DaLinMu
            | Self::YangLiuMu
            | Self::SongBaiMu
            | Self::PingDiMu
            | Self::SangZheMu
            | Self::ShiLiuMu => Element::Wood,
            Self::LuPangTu
            | Self::ChengTouTu
            | Self::WuShangTu
            | Self::BiShangTu
            | Self::DaYiTu
            | Self::ShaZhongTu => Element::Earth,
            Self::JianXiaShui
            | Self::QuanZhongShui
            | Self::ChangLiuShui
            | Self::TianHeShui
            | Self::DaXiShui
            | Self::DaHaiShui => Element::Water,
        }
    }
}

/// Resolve the nayin category for a stem-branch pairing.
///
/// Fails with `InvalidCombination` for pairings outside the 60-cycle.
pub fn nayin(stem: HeavenlyStem, branch: EarthlyBranch) -> Result<Nayin, CalendarError> {
    let sb = StemBranch::new(stem, branch)?;
    Ok(sb.nayin())
}

impl StemBranch {
    /// Nayin category of this pair: cycle position / 2.
    pub const fn nayin(self) -> Nayin {
        ALL_NAYIN[(self.cycle_index() / 2) as usize]
    }
}
