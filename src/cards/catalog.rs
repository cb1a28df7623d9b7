//! The fixed card catalog.
//!
//! Card names are rule keys. They are resolved once, when a card is built,
//! into closed enums that carry the lane role, taunt, ability and
//! targeting rules the engine needs; no rule code compares names.
//!
//! | Minion          | Lane  | Tank | Ability     |
//! |-----------------|-------|------|-------------|
//! | Sentinel        | back  |      |             |
//! | Berserker       | back  |      |             |
//! | The Cursed One  | back  |      | Shapeshift  |
//! | Disciple        | back  |      | God's Plan  |
//! | Goliath         | front | yes  |             |
//! | Warden          | front | yes  |             |
//! | The Ripper      | front |      | Weak Knees  |
//! | Miraj           | front |      | Skyjack     |

use serde::{Deserialize, Serialize};

use super::minion::Minion;

/// Which side's lanes an ability or power may target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetSide {
    /// Lanes owned by the acting player.
    Ally,
    /// Lanes owned by the opponent.
    Enemy,
}

/// Which of its owner's two lanes a minion is placed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaneRole {
    /// The melee lane, next to the middle of the board.
    Front,
    /// The ranged lane, on the owner's edge of the board.
    Back,
}

/// Minion kinds known to the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinionKind {
    Sentinel,
    Berserker,
    Goliath,
    Warden,
    TheRipper,
    Miraj,
    TheCursedOne,
    Disciple,
    /// A name outside the catalog. It can sit in a hand or deck but has
    /// no lane.
    Unlisted,
}

impl MinionKind {
    /// Resolve a card name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Sentinel" => Self::Sentinel,
            "Berserker" => Self::Berserker,
            "Goliath" => Self::Goliath,
            "Warden" => Self::Warden,
            "The Ripper" => Self::TheRipper,
            "Miraj" => Self::Miraj,
            "The Cursed One" => Self::TheCursedOne,
            "Disciple" => Self::Disciple,
            _ => Self::Unlisted,
        }
    }

    /// The lane role used for placement, if the kind can be placed.
    #[must_use]
    pub fn lane_role(self) -> Option<LaneRole> {
        match self {
            Self::Sentinel | Self::Berserker | Self::TheCursedOne | Self::Disciple => {
                Some(LaneRole::Back)
            }
            Self::Goliath | Self::Warden | Self::TheRipper | Self::Miraj => Some(LaneRole::Front),
            Self::Unlisted => None,
        }
    }

    /// Tanks must be attacked before anything else in the enemy lanes.
    #[must_use]
    pub fn is_tank(self) -> bool {
        matches!(self, Self::Goliath | Self::Warden)
    }

    /// The special ability, if the kind has one.
    #[must_use]
    pub fn ability(self) -> Option<MinionAbility> {
        match self {
            Self::Disciple => Some(MinionAbility::GodsPlan),
            Self::TheRipper => Some(MinionAbility::WeakKnees),
            Self::Miraj => Some(MinionAbility::Skyjack),
            Self::TheCursedOne => Some(MinionAbility::Shapeshift),
            _ => None,
        }
    }
}

/// Minion abilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinionAbility {
    /// Disciple: +2 health to an ally.
    GodsPlan,
    /// The Ripper: -2 attack to an enemy, floored at 0.
    WeakKnees,
    /// Miraj: swap health with an enemy.
    Skyjack,
    /// The Cursed One: swap an enemy's attack and health.
    Shapeshift,
}

impl MinionAbility {
    /// Whose lanes the ability may target.
    #[must_use]
    pub fn target_side(self) -> TargetSide {
        match self {
            Self::GodsPlan => TargetSide::Ally,
            Self::WeakKnees | Self::Skyjack | Self::Shapeshift => TargetSide::Enemy,
        }
    }

    /// Whether enemy tanks must be targeted first.
    #[must_use]
    pub fn respects_taunt(self) -> bool {
        self.target_side() == TargetSide::Enemy
    }

    /// Apply the effect to `target`.
    ///
    /// `caster_health` is the caster's health before the effect. Returns the
    /// caster's new health when the effect changes it.
    pub fn apply(self, caster_health: i32, target: &mut Minion) -> Option<i32> {
        match self {
            Self::GodsPlan => {
                target.health += 2;
                None
            }
            Self::WeakKnees => {
                target.attack_damage = (target.attack_damage - 2).max(0);
                None
            }
            Self::Skyjack => {
                let target_health = target.health;
                target.health = caster_health;
                Some(target_health)
            }
            Self::Shapeshift => {
                std::mem::swap(&mut target.attack_damage, &mut target.health);
                None
            }
        }
    }
}

/// Hero powers, keyed by hero name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroPower {
    /// Lord Royce: freeze every minion in an enemy lane.
    SubZero,
    /// Empress Thorina: destroy the healthiest minion in an enemy lane.
    LowBlow,
    /// King Mudface: +1 health to every minion in an own lane.
    EarthBorn,
    /// General Kocioraw: +1 attack to every minion in an own lane.
    BloodThirst,
}

impl HeroPower {
    /// Resolve a hero name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Lord Royce" => Some(Self::SubZero),
            "Empress Thorina" => Some(Self::LowBlow),
            "King Mudface" => Some(Self::EarthBorn),
            "General Kocioraw" => Some(Self::BloodThirst),
            _ => None,
        }
    }

    /// Whose lanes the power may target.
    #[must_use]
    pub fn target_side(self) -> TargetSide {
        match self {
            Self::SubZero | Self::LowBlow => TargetSide::Enemy,
            Self::EarthBorn | Self::BloodThirst => TargetSide::Ally,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDefinition;

    fn minion(name: &str, attack: i32, health: i32) -> Minion {
        Minion::new(CardDefinition::minion(name, 1, attack, health))
    }

    #[test]
    fn test_lane_roles() {
        for name in ["Sentinel", "Berserker", "The Cursed One", "Disciple"] {
            assert_eq!(MinionKind::from_name(name).lane_role(), Some(LaneRole::Back));
        }
        for name in ["Goliath", "Warden", "The Ripper", "Miraj"] {
            assert_eq!(MinionKind::from_name(name).lane_role(), Some(LaneRole::Front));
        }
        assert_eq!(MinionKind::from_name("Lord Royce").lane_role(), None);
        assert_eq!(MinionKind::from_name("goliath").lane_role(), None);
    }

    #[test]
    fn test_tanks() {
        assert!(MinionKind::Goliath.is_tank());
        assert!(MinionKind::Warden.is_tank());
        assert!(!MinionKind::Sentinel.is_tank());
        assert!(!MinionKind::Unlisted.is_tank());
    }

    #[test]
    fn test_abilities() {
        assert_eq!(MinionKind::Disciple.ability(), Some(MinionAbility::GodsPlan));
        assert_eq!(MinionKind::TheRipper.ability(), Some(MinionAbility::WeakKnees));
        assert_eq!(MinionKind::Miraj.ability(), Some(MinionAbility::Skyjack));
        assert_eq!(MinionKind::TheCursedOne.ability(), Some(MinionAbility::Shapeshift));
        assert_eq!(MinionKind::Berserker.ability(), None);

        assert_eq!(MinionAbility::GodsPlan.target_side(), TargetSide::Ally);
        assert!(!MinionAbility::GodsPlan.respects_taunt());
        assert!(MinionAbility::Skyjack.respects_taunt());
    }

    #[test]
    fn test_gods_plan() {
        let mut target = minion("Sentinel", 1, 3);
        assert_eq!(MinionAbility::GodsPlan.apply(9, &mut target), None);
        assert_eq!(target.health, 5);
    }

    #[test]
    fn test_weak_knees_floors_at_zero() {
        let mut target = minion("Sentinel", 1, 3);
        MinionAbility::WeakKnees.apply(5, &mut target);
        assert_eq!(target.attack_damage, 0);

        let mut target = minion("Sentinel", 5, 3);
        MinionAbility::WeakKnees.apply(5, &mut target);
        assert_eq!(target.attack_damage, 3);
    }

    #[test]
    fn test_skyjack_swaps_health() {
        let mut target = minion("Goliath", 1, 6);
        let caster = MinionAbility::Skyjack.apply(2, &mut target);

        assert_eq!(target.health, 2);
        assert_eq!(caster, Some(6));
    }

    #[test]
    fn test_shapeshift_swaps_own_stats() {
        let mut target = minion("Warden", 0, 4);
        MinionAbility::Shapeshift.apply(7, &mut target);

        assert_eq!(target.attack_damage, 4);
        assert_eq!(target.health, 0);
    }

    #[test]
    fn test_hero_powers() {
        assert_eq!(HeroPower::from_name("Lord Royce"), Some(HeroPower::SubZero));
        assert_eq!(HeroPower::from_name("Empress Thorina"), Some(HeroPower::LowBlow));
        assert_eq!(HeroPower::from_name("King Mudface"), Some(HeroPower::EarthBorn));
        assert_eq!(HeroPower::from_name("General Kocioraw"), Some(HeroPower::BloodThirst));
        assert_eq!(HeroPower::from_name("Sentinel"), None);

        assert_eq!(HeroPower::SubZero.target_side(), TargetSide::Enemy);
        assert_eq!(HeroPower::LowBlow.target_side(), TargetSide::Enemy);
        assert_eq!(HeroPower::EarthBorn.target_side(), TargetSide::Ally);
        assert_eq!(HeroPower::BloodThirst.target_side(), TargetSide::Ally);
    }
}
