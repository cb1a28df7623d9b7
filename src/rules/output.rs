//! Result records.
//!
//! An `ActionOutput` is emitted for every query, every rule violation and
//! every lethal hero attack. Fields serialize in a fixed order and absent
//! fields are omitted:
//!
//! `command`, `playerIdx`, `handIdx`, `cardAttacker`, `cardAttacked`,
//! `affectedRow`, `x`, `y`, `output`, `error`, `gameEnded`.

use serde::Serialize;

use crate::cards::{Colors, Hero, Minion};
use crate::core::{Action, Coordinates, PlayerId};
use crate::error::RuleViolation;

/// Reported when `getCardAtPosition` hits an empty cell.
pub const NO_CARD_AT_POSITION: &str = "No card available at that position.";

/// A minion as reported by queries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub mana: i32,
    pub attack_damage: i32,
    pub health: i32,
    pub description: String,
    pub colors: Colors,
    pub name: String,
}

impl From<&Minion> for CardView {
    fn from(minion: &Minion) -> Self {
        let definition = minion.definition();
        Self {
            mana: definition.mana,
            attack_damage: minion.attack_damage,
            health: minion.health,
            description: definition.description.clone(),
            colors: definition.colors.clone(),
            name: definition.name.clone(),
        }
    }
}

/// A hero as reported by queries. Heroes have no attack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeroView {
    pub mana: i32,
    pub description: String,
    pub colors: Colors,
    pub name: String,
    pub health: i32,
}

impl From<&Hero> for HeroView {
    fn from(hero: &Hero) -> Self {
        let definition = hero.definition();
        Self {
            mana: definition.mana,
            description: definition.description.clone(),
            colors: definition.colors.clone(),
            name: definition.name.clone(),
            health: hero.health,
        }
    }
}

/// The `output` value of a query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Number(i64),
    Message(&'static str),
    Card(CardView),
    Hero(HeroView),
    Cards(Vec<CardView>),
    Table(Vec<Vec<CardView>>),
}

impl Payload {
    /// A list of card views.
    pub fn cards<'a>(minions: impl IntoIterator<Item = &'a Minion>) -> Self {
        Self::Cards(minions.into_iter().map(CardView::from).collect())
    }
}

/// One result record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_idx: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand_idx: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_attacker: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_attacked: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_row: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Payload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_ended: Option<String>,
}

impl ActionOutput {
    /// Start a query record for `action`.
    #[must_use]
    pub fn query(action: &Action) -> Self {
        Self {
            command: Some(action.command()),
            ..Self::default()
        }
    }

    /// Echo the queried `playerIdx` verbatim.
    #[must_use]
    pub fn with_player(mut self, player_idx: i32) -> Self {
        self.player_idx = Some(player_idx);
        self
    }

    /// Echo queried coordinates.
    #[must_use]
    pub fn with_position(mut self, at: Coordinates) -> Self {
        self.x = Some(at.x);
        self.y = Some(at.y);
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: Payload) -> Self {
        self.output = Some(output);
        self
    }

    /// An error record for a rejected command, echoing the fields that
    /// identify what it targeted.
    ///
    /// ```
    /// use lane_duel::core::{Action, Coordinates};
    /// use lane_duel::error::RuleViolation;
    /// use lane_duel::rules::ActionOutput;
    ///
    /// let action = Action::UseAttackHero { card_attacker: Coordinates::new(2, 1) };
    /// let record = ActionOutput::rejected(&action, RuleViolation::Frozen);
    ///
    /// assert_eq!(
    ///     serde_json::to_string(&record).unwrap(),
    ///     r#"{"command":"useAttackHero","cardAttacker":{"x":2,"y":1},"error":"Attacker card is frozen."}"#
    /// );
    /// ```
    #[must_use]
    pub fn rejected(action: &Action, violation: RuleViolation) -> Self {
        let mut record = Self {
            command: Some(action.command()),
            error: Some(violation.to_string()),
            ..Self::default()
        };
        match *action {
            Action::PlaceCard { hand_idx } => record.hand_idx = Some(hand_idx),
            Action::CardUsesAttack {
                card_attacker,
                card_attacked,
            }
            | Action::CardUsesAbility {
                card_attacker,
                card_attacked,
            } => {
                record.card_attacker = Some(card_attacker);
                record.card_attacked = Some(card_attacked);
            }
            Action::UseAttackHero { card_attacker } => record.card_attacker = Some(card_attacker),
            Action::UseHeroAbility { affected_row } => record.affected_row = Some(affected_row),
            _ => {}
        }
        record
    }

    /// The record of a decided game. It carries nothing else.
    #[must_use]
    pub fn game_ended(winner: PlayerId) -> Self {
        Self {
            game_ended: Some(format!("{winner} killed the enemy hero.")),
            ..Self::default()
        }
    }
}
