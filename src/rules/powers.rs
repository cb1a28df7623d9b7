//! Hero powers.

use tracing::debug;

use crate::cards::{HeroPower, TargetSide};
use crate::error::RuleViolation;
use crate::rules::state::GameState;
use crate::zones::{lane_owner, Lane};

impl HeroPower {
    /// Apply the power to every minion of `lane`.
    pub fn apply(self, lane: &mut Lane) {
        match self {
            Self::SubZero => {
                for minion in lane.iter_mut() {
                    minion.frozen = true;
                }
            }
            Self::LowBlow => {
                // First minion strictly healthier than everything before it.
                let mut best = None;
                let mut max_health = 0;
                for (slot, minion) in lane.iter().enumerate() {
                    if minion.health > max_health {
                        max_health = minion.health;
                        best = Some(slot);
                    }
                }
                if let Some(slot) = best {
                    lane.remove(slot);
                }
            }
            Self::EarthBorn => {
                for minion in lane.iter_mut() {
                    minion.health += 1;
                }
            }
            Self::BloodThirst => {
                for minion in lane.iter_mut() {
                    minion.attack_damage += 1;
                }
            }
        }
    }
}

/// `useHeroAbility`: the active player's hero uses its power on a lane.
///
/// A row off the board is ignored without spending anything. A hero with
/// no catalog power pays and is marked used with no effect.
pub fn use_hero_power(state: &mut GameState, row: i32) -> Result<(), RuleViolation> {
    let current = state.active;
    let player = state.active_player();
    let cost = player.hero.mana();
    if player.mana < cost {
        return Err(RuleViolation::NotEnoughManaForPower);
    }
    if player.hero.used_ability {
        return Err(RuleViolation::PowerUsed);
    }

    let power = player.hero.power();
    match (power.map(HeroPower::target_side), lane_owner(row)) {
        (Some(TargetSide::Enemy), Some(owner)) if owner == current => {
            return Err(RuleViolation::RowNotEnemy);
        }
        (Some(TargetSide::Ally), Some(owner)) if owner != current => {
            return Err(RuleViolation::RowNotAlly);
        }
        _ => {}
    }

    if let Some(power) = power {
        let Some(lane) = state.board.lane_mut(row) else {
            debug!(row, "hero power aimed off the board");
            return Ok(());
        };
        power.apply(lane);
    }

    let player = state.active_player_mut();
    player.mana -= cost;
    player.hero.used_ability = true;
    debug!(player = %current, ?power, row, "hero power used");
    Ok(())
}
