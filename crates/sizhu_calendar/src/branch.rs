//! The 12 earthly branches (dizhi).
//!
//! Branches carry fixed element/polarity attributes, the zodiac animal, and
//! the six-combination (liuhe) and six-clash (liuchong) partner tables used
//! by decade-cycle interaction annotations.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The 12 earthly branches in traditional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in traditional order (index 0 = Zi).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

impl EarthlyBranch {
    /// Pinyin name of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Chinese character for the branch.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// 0-based index into ALL_BRANCHES.
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Create from a 0-based index. Returns None if index >= 12.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// Fixed element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// Fixed polarity of the branch (even indices yang, odd yin).
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// English zodiac animal of the branch.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// The branch this one clashes with (liuchong): always 6 steps away.
    pub const fn clash(self) -> Self {
        ALL_BRANCHES[((self.index() + 6) % 12) as usize]
    }

    /// The branch this one combines with (liuhe).
    pub const fn combine(self) -> Self {
        match self {
            Self::Zi => Self::Chou,
            Self::Chou => Self::Zi,
            Self::Yin => Self::Hai,
            Self::Hai => Self::Yin,
            Self::Mao => Self::Xu,
            Self::Xu => Self::Mao,
            Self::Chen => Self::You,
            Self::You => Self::Chen,
            Self::Si => Self::Shen,
            Self::Shen => Self::Si,
            Self::Wu => Self::Wei,
            Self::Wei => Self::Wu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_branches_count() {
        assert_eq!(ALL_BRANCHES.len(), 12);
    }

    #[test]
    fn branch_indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(EarthlyBranch::from_index(i as u8), Some(*b));
        }
    }

    #[test]
    fn from_index_out_of_range() {
        assert_eq!(EarthlyBranch::from_index(12), None);
    }

    #[test]
    fn branch_names_nonempty() {
        for b in ALL_BRANCHES {
            assert!(!b.name().is_empty());
            assert!(!b.chinese().is_empty());
            assert!(!b.animal().is_empty());
        }
    }

    #[test]
    fn element_distribution() {
        // 2 Water, 2 Wood, 2 Fire, 2 Metal, 4 Earth.
        let earth = ALL_BRANCHES
            .iter()
            .filter(|b| b.element() == Element::Earth)
            .count();
        assert_eq!(earth, 4);
        for e in [Element::Water, Element::Wood, Element::Fire, Element::Metal] {
            let n = ALL_BRANCHES.iter().filter(|b| b.element() == e).count();
            assert_eq!(n, 2, "{} branches", e.name());
        }
    }

    #[test]
    fn clash_is_symmetric() {
        for b in ALL_BRANCHES {
            assert_eq!(b.clash().clash(), b);
            assert_ne!(b.clash(), b);
        }
    }

    #[test]
    fn clash_pairs() {
        assert_eq!(EarthlyBranch::Zi.clash(), EarthlyBranch::Wu);
        assert_eq!(EarthlyBranch::Chou.clash(), EarthlyBranch::Wei);
        assert_eq!(EarthlyBranch::Yin.clash(), EarthlyBranch::Shen);
        assert_eq!(EarthlyBranch::Mao.clash(), EarthlyBranch::You);
        assert_eq!(EarthlyBranch::Chen.clash(), EarthlyBranch::Xu);
        assert_eq!(EarthlyBranch::Si.clash(), EarthlyBranch::Hai);
    }

    #[test]
    fn combine_is_symmetric() {
        for b in ALL_BRANCHES {
            assert_eq!(b.combine().combine(), b);
            assert_ne!(b.combine(), b);
        }
    }

    #[test]
    fn combine_pairs() {
        assert_eq!(EarthlyBranch::Zi.combine(), EarthlyBranch::Chou);
        assert_eq!(EarthlyBranch::Yin.combine(), EarthlyBranch::Hai);
        assert_eq!(EarthlyBranch::Mao.combine(), EarthlyBranch::Xu);
        assert_eq!(EarthlyBranch::Chen.combine(), EarthlyBranch::You);
        assert_eq!(EarthlyBranch::Si.combine(), EarthlyBranch::Shen);
        assert_eq!(EarthlyBranch::Wu.combine(), EarthlyBranch::Wei);
    }

    #[test]
    fn zi_is_yang_water_rat() {
        assert_eq!(EarthlyBranch::Zi.element(), Element::Water);
        assert_eq!(EarthlyBranch::Zi.polarity(), Polarity::Yang);
        assert_eq!(EarthlyBranch::Zi.animal(), "Rat");
    }
}
