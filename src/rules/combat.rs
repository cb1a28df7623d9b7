//! Minion attacks, minion abilities and hero attacks.
//!
//! Each handler validates in a fixed order and returns the first violation
//! without touching state. An empty attacker or target cell is a silent
//! no-op. "Enemy" always means the opponent of the active player.

use tracing::debug;

use crate::cards::{Minion, MinionAbility, TargetSide};
use crate::core::Coordinates;
use crate::error::RuleViolation;
use crate::rules::engine::GameResult;
use crate::rules::state::GameState;
use crate::zones::{lane_owner, Board};

/// Remove the minion at `at` if it is out of health.
fn clear_if_dead(board: &mut Board, at: Coordinates) {
    if board.get(at).is_some_and(Minion::is_dead) {
        if let Some(dead) = board.remove(at) {
            debug!(name = dead.name(), x = at.x, y = at.y, "minion destroyed");
        }
    }
}

/// `cardUsesAttack`: one minion strikes another.
pub fn card_attack(
    state: &mut GameState,
    attacker_at: Coordinates,
    target_at: Coordinates,
) -> Result<(), RuleViolation> {
    let current = state.active;
    if lane_owner(target_at.x) == Some(current) {
        return Err(RuleViolation::TargetNotEnemy);
    }

    let (Some(attacker), Some(target)) = (state.board.get(attacker_at), state.board.get(target_at))
    else {
        return Ok(());
    };
    if attacker.attacked {
        return Err(RuleViolation::AlreadyActed);
    }
    if attacker.frozen {
        return Err(RuleViolation::Frozen);
    }
    if !target.is_tank() && state.board.has_tank(current.opponent()) {
        return Err(RuleViolation::TankFirst);
    }

    let damage = attacker.attack_damage;
    if let Some(attacker) = state.board.get_mut(attacker_at) {
        attacker.attacked = true;
    }
    if let Some(target) = state.board.get_mut(target_at) {
        target.health -= damage;
    }
    clear_if_dead(&mut state.board, target_at);
    Ok(())
}

/// `cardUsesAbility`: a minion uses its special ability on another.
///
/// A minion without a catalog ability still goes through the tank check
/// and spends its action.
pub fn card_ability(
    state: &mut GameState,
    caster_at: Coordinates,
    target_at: Coordinates,
) -> Result<(), RuleViolation> {
    let current = state.active;
    let (Some(caster), Some(target)) = (state.board.get(caster_at), state.board.get(target_at))
    else {
        return Ok(());
    };
    if caster.frozen {
        return Err(RuleViolation::Frozen);
    }
    if caster.has_acted() {
        return Err(RuleViolation::AlreadyActed);
    }

    let ability = caster.ability();
    let target_owner = lane_owner(target_at.x);
    match ability.map(MinionAbility::target_side) {
        Some(TargetSide::Ally) if target_owner != Some(current) => {
            return Err(RuleViolation::TargetNotAlly);
        }
        Some(TargetSide::Enemy) if target_owner == Some(current) => {
            return Err(RuleViolation::TargetNotEnemy);
        }
        _ => {}
    }
    if ability.map_or(true, MinionAbility::respects_taunt)
        && !target.is_tank()
        && state.board.has_tank(current.opponent())
    {
        return Err(RuleViolation::TankFirst);
    }

    let caster_health = caster.health;
    let swapped = match (ability, state.board.get_mut(target_at)) {
        (Some(ability), Some(target)) => ability.apply(caster_health, target),
        _ => None,
    };
    if let Some(caster) = state.board.get_mut(caster_at) {
        if let Some(health) = swapped {
            caster.health = health;
        }
        caster.used_ability = true;
    }

    if ability != Some(MinionAbility::GodsPlan) {
        clear_if_dead(&mut state.board, target_at);
    }
    Ok(())
}

/// `useAttackHero`: a minion strikes the enemy hero.
///
/// Returns the game result whenever either hero is down afterwards, even
/// when the game was already decided.
pub fn attack_hero(
    state: &mut GameState,
    attacker_at: Coordinates,
) -> Result<Option<GameResult>, RuleViolation> {
    let current = state.active;
    let Some(attacker) = state.board.get(attacker_at) else {
        return Ok(None);
    };
    if attacker.frozen {
        return Err(RuleViolation::Frozen);
    }
    if attacker.has_acted() {
        return Err(RuleViolation::AlreadyActed);
    }
    if state.board.has_tank(current.opponent()) {
        return Err(RuleViolation::TankFirst);
    }

    let damage = attacker.attack_damage;
    state.players[current.opponent()].hero.health -= damage;
    if let Some(attacker) = state.board.get_mut(attacker_at) {
        attacker.attacked = true;
    }
    Ok(state.outcome())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDefinition;
    use crate::core::{PlayerId, PlayerMap, RulesConfig};
    use crate::rules::state::GameSetup;

    fn empty_game() -> GameState {
        let setup = GameSetup {
            decks: PlayerMap::with_default(),
            heroes: PlayerMap::with_value(CardDefinition::hero("Lord Royce", 1)),
            seed: 0,
            starting_player: PlayerId::ONE,
        };
        GameState::new(&RulesConfig::default(), setup)
    }

    fn put(state: &mut GameState, row: usize, name: &str, attack: i32, health: i32) {
        let minion = Minion::new(CardDefinition::minion(name, 0, attack, health));
        state.board.place(row, minion).unwrap();
    }

    fn at(x: i32, y: i32) -> Coordinates {
        Coordinates::new(x, y)
    }

    #[test]
    fn test_attack_own_lane_checked_before_empty_cells() {
        let mut state = empty_game();
        assert_eq!(
            card_attack(&mut state, at(0, 0), at(2, 0)),
            Err(RuleViolation::TargetNotEnemy)
        );
        assert_eq!(card_attack(&mut state, at(2, 0), at(1, 0)), Ok(()));
    }

    #[test]
    fn test_attack_kills_and_shifts_lane() {
        let mut state = empty_game();
        put(&mut state, 2, "Berserker", 3, 2);
        put(&mut state, 0, "Sentinel", 1, 3);
        put(&mut state, 0, "Disciple", 1, 4);

        card_attack(&mut state, at(2, 0), at(0, 0)).unwrap();

        let lane: Vec<_> = state.board.lane(0).unwrap().iter().map(Minion::name).collect();
        assert_eq!(lane, vec!["Disciple"]);
        assert!(state.board.get(at(2, 0)).unwrap().attacked);
    }

    #[test]
    fn test_attack_validation_order() {
        let mut state = empty_game();
        put(&mut state, 2, "Berserker", 1, 2);
        put(&mut state, 1, "Goliath", 1, 5);
        put(&mut state, 0, "Sentinel", 1, 5);

        {
            let attacker = state.board.get_mut(at(2, 0)).unwrap();
            attacker.attacked = true;
            attacker.frozen = true;
        }
        assert_eq!(
            card_attack(&mut state, at(2, 0), at(0, 0)),
            Err(RuleViolation::AlreadyActed)
        );

        state.board.get_mut(at(2, 0)).unwrap().attacked = false;
        assert_eq!(
            card_attack(&mut state, at(2, 0), at(0, 0)),
            Err(RuleViolation::Frozen)
        );

        state.board.get_mut(at(2, 0)).unwrap().frozen = false;
        assert_eq!(
            card_attack(&mut state, at(2, 0), at(0, 0)),
            Err(RuleViolation::TankFirst)
        );
        assert_eq!(card_attack(&mut state, at(2, 0), at(1, 0)), Ok(()));
        assert_eq!(state.board.get(at(1, 0)).unwrap().health, 4);
    }

    #[test]
    fn test_disciple_heals_ally_only() {
        let mut state = empty_game();
        put(&mut state, 3, "Disciple", 0, 2);
        put(&mut state, 2, "Sentinel", 1, 1);
        put(&mut state, 1, "Goliath", 1, 1);

        assert_eq!(
            card_ability(&mut state, at(3, 0), at(1, 0)),
            Err(RuleViolation::TargetNotAlly)
        );
        card_ability(&mut state, at(3, 0), at(2, 0)).unwrap();
        assert_eq!(state.board.get(at(2, 0)).unwrap().health, 3);
        assert!(state.board.get(at(3, 0)).unwrap().used_ability);

        assert_eq!(
            card_ability(&mut state, at(3, 0), at(2, 0)),
            Err(RuleViolation::AlreadyActed)
        );
    }

    #[test]
    fn test_enemy_abilities_reject_own_lane() {
        let mut state = empty_game();
        put(&mut state, 2, "The Ripper", 1, 2);
        put(&mut state, 3, "Sentinel", 1, 1);

        assert_eq!(
            card_ability(&mut state, at(2, 0), at(3, 0)),
            Err(RuleViolation::TargetNotEnemy)
        );
    }

    #[test]
    fn test_ability_respects_tank() {
        let mut state = empty_game();
        put(&mut state, 2, "The Ripper", 1, 2);
        put(&mut state, 1, "Warden", 2, 3);
        put(&mut state, 0, "Sentinel", 3, 1);

        assert_eq!(
            card_ability(&mut state, at(2, 0), at(0, 0)),
            Err(RuleViolation::TankFirst)
        );
        card_ability(&mut state, at(2, 0), at(1, 0)).unwrap();
        assert_eq!(state.board.get(at(1, 0)).unwrap().attack_damage, 0);
    }

    #[test]
    fn test_skyjack_swaps_caster_health() {
        let mut state = empty_game();
        put(&mut state, 2, "Miraj", 1, 2);
        put(&mut state, 0, "Sentinel", 1, 6);

        card_ability(&mut state, at(2, 0), at(0, 0)).unwrap();

        assert_eq!(state.board.get(at(2, 0)).unwrap().health, 6);
        assert_eq!(state.board.get(at(0, 0)).unwrap().health, 2);
    }

    #[test]
    fn test_shapeshift_to_zero_health_destroys() {
        let mut state = empty_game();
        put(&mut state, 3, "The Cursed One", 0, 2);
        put(&mut state, 0, "Sentinel", 0, 4);

        card_ability(&mut state, at(3, 0), at(0, 0)).unwrap();

        assert!(state.board.lane(0).unwrap().is_empty());
    }

    #[test]
    fn test_plain_minion_ability_spends_action() {
        let mut state = empty_game();
        put(&mut state, 3, "Berserker", 2, 2);
        put(&mut state, 0, "Sentinel", 1, 1);

        card_ability(&mut state, at(3, 0), at(0, 0)).unwrap();

        assert!(state.board.get(at(3, 0)).unwrap().used_ability);
        assert_eq!(state.board.get(at(0, 0)).unwrap().health, 1);
    }

    #[test]
    fn test_attack_hero() {
        let mut state = empty_game();
        put(&mut state, 2, "Berserker", 5, 2);
        state.players[PlayerId::TWO].hero.health = 3;

        let result = attack_hero(&mut state, at(2, 0)).unwrap();

        assert_eq!(result, Some(GameResult::Winner(PlayerId::ONE)));
        assert_eq!(state.players[PlayerId::TWO].hero.health, -2);
        assert_eq!(
            attack_hero(&mut state, at(2, 0)),
            Err(RuleViolation::AlreadyActed)
        );
        assert_eq!(attack_hero(&mut state, at(3, 0)), Ok(None));
    }

    #[test]
    fn test_attack_hero_blocked_by_any_tank() {
        let mut state = empty_game();
        put(&mut state, 2, "Berserker", 5, 2);
        put(&mut state, 0, "Goliath", 1, 1);

        assert_eq!(attack_hero(&mut state, at(2, 0)), Err(RuleViolation::TankFirst));
        assert_eq!(state.players[PlayerId::TWO].hero.health, 30);
    }
}
