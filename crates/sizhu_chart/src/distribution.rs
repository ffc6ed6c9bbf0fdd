//! Weighted five-element distribution over the four pillars.
//!
//! Each pillar contributes its stem's element at weight 15 and its branch's
//! element at weight 10, uniformly. Raw weighted counts, no normalization:
//! downstream strength logic applies its own thresholds.

use serde::{Deserialize, Serialize};

use sizhu_calendar::{ALL_ELEMENTS, Element};

use crate::pillars::{FourPillars, HourPillar};

/// Weight of a pillar's stem element.
pub const STEM_WEIGHT: u32 = 15;

/// Weight of a pillar's branch element.
pub const BRANCH_WEIGHT: u32 = 10;

/// Element -> weight vector, indexed in generation-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementDistribution {
    weights: [u32; 5],
}

impl ElementDistribution {
    /// Weight of one element.
    pub const fn weight(&self, element: Element) -> u32 {
        self.weights[element.index() as usize]
    }

    /// Sum of all weights: 100 with a known hour pillar, 75 without.
    pub fn total(&self) -> u32 {
        self.weights.iter().sum()
    }

    /// Whether the element appears in the chart at all.
    pub const fn is_present(&self, element: Element) -> bool {
        self.weight(element) > 0
    }

    /// (element, weight) pairs in generation-cycle order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        ALL_ELEMENTS.iter().map(|e| (*e, self.weight(*e)))
    }

    /// The heaviest element; ties resolve to the earlier cycle position.
    pub fn strongest(&self) -> Element {
        let mut best = Element::Wood;
        for e in ALL_ELEMENTS {
            if self.weight(e) > self.weight(best) {
                best = e;
            }
        }
        best
    }

    fn add(&mut self, element: Element, weight: u32) {
        self.weights[element.index() as usize] += weight;
    }
}

/// Aggregate the weighted element vector for a set of pillars.
///
/// Purely additive and order-independent; an unknown hour pillar
/// contributes zero.
pub fn distribute(pillars: &FourPillars) -> ElementDistribution {
    let mut dist = ElementDistribution::default();
    for sb in [pillars.year, pillars.month, pillars.day] {
        dist.add(sb.stem().element(), STEM_WEIGHT);
        dist.add(sb.branch().element(), BRANCH_WEIGHT);
    }
    if let HourPillar::Known(sb) = pillars.hour {
        dist.add(sb.stem().element(), STEM_WEIGHT);
        dist.add(sb.branch().element(), BRANCH_WEIGHT);
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizhu_time::{LocalDateTime, TermContext};

    fn pillars_for(y: i32, mo: u32, d: u32, h: u32, known: bool) -> FourPillars {
        let local = LocalDateTime::new(y, mo, d, h, 0, 0).unwrap();
        crate::pillars::resolve_pillars(&local, known, &mut TermContext::new()).unwrap()
    }

    #[test]
    fn total_100_with_known_hour() {
        let p = pillars_for(1990, 5, 10, 12, true);
        assert_eq!(distribute(&p).total(), 4 * STEM_WEIGHT + 4 * BRANCH_WEIGHT);
    }

    #[test]
    fn total_75_with_unknown_hour() {
        let p = pillars_for(1990, 5, 10, 12, false);
        assert_eq!(distribute(&p).total(), 3 * STEM_WEIGHT + 3 * BRANCH_WEIGHT);
    }

    #[test]
    fn golden_1990_05_10_vector() {
        // GengWu XinSi YiHai RenWu:
        // stems Metal+Metal+Wood+Water, branches Fire+Fire+Water+Fire.
        let p = pillars_for(1990, 5, 10, 12, true);
        let d = distribute(&p);
        assert_eq!(d.weight(Element::Wood), 15);
        assert_eq!(d.weight(Element::Fire), 30);
        assert_eq!(d.weight(Element::Earth), 0);
        assert_eq!(d.weight(Element::Metal), 30);
        assert_eq!(d.weight(Element::Water), 25);
    }

    #[test]
    fn absent_element_not_present() {
        let p = pillars_for(1990, 5, 10, 12, true);
        let d = distribute(&p);
        assert!(!d.is_present(Element::Earth));
        assert!(d.is_present(Element::Water));
    }

    #[test]
    fn strongest_prefers_earlier_cycle_position_on_tie() {
        // Fire (30) ties Metal (30); Fire sits earlier in the cycle.
        let p = pillars_for(1990, 5, 10, 12, true);
        assert_eq!(distribute(&p).strongest(), Element::Fire);
    }

    #[test]
    fn iter_covers_all_elements() {
        let p = pillars_for(1990, 5, 10, 12, true);
        let d = distribute(&p);
        let collected: Vec<_> = d.iter().collect();
        assert_eq!(collected.len(), 5);
        let sum: u32 = collected.iter().map(|(_, w)| w).sum();
        assert_eq!(sum, d.total());
    }
}
