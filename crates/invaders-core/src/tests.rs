//! Tests for the shared vocabulary: enums, collision groups, configuration.

use crate::commands::GameCommand;
use crate::config::{ConfigError, GameConfig};
use crate::enums::*;
use crate::events::GameEvent;
use crate::groups::{should_collide, CollisionFilter, CollisionGroups};
use crate::state::RoundSnapshot;
use crate::types::{EntityId, SimTime};

// ---- Sweep state ----

#[test]
fn test_sweep_state_cycles_through_all_four() {
    let mut state = SweepState::SweepRight;
    let mut seen = Vec::new();
    for _ in 0..8 {
        seen.push(state.index());
        state = state.next();
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 0, 1, 2, 3]);
}

#[test]
fn test_sweep_state_index_matches_all_order() {
    for (i, state) in SweepState::ALL.iter().enumerate() {
        assert_eq!(state.index(), i);
    }
}

#[test]
fn test_only_drop_states_are_drops() {
    assert!(!SweepState::SweepRight.is_drop());
    assert!(SweepState::DropRight.is_drop());
    assert!(!SweepState::SweepLeft.is_drop());
    assert!(SweepState::DropLeft.is_drop());
}

#[test]
fn test_terminal_phases() {
    assert!(GamePhase::Lost.is_terminal());
    assert!(GamePhase::Won.is_terminal());
    assert!(!GamePhase::Setup.is_terminal());
    assert!(!GamePhase::Running.is_terminal());
    assert!(!GamePhase::Paused.is_terminal());
}

// ---- Collision groups ----

#[test]
fn test_collision_matrix() {
    use EntityRole::*;
    let roles = [Bullet, Invader, LossTrigger, BulletSponge];
    let expected = |a: EntityRole, b: EntityRole| {
        matches!(
            (a, b),
            (Bullet, Invader)
                | (Invader, Bullet)
                | (Bullet, BulletSponge)
                | (BulletSponge, Bullet)
                | (Invader, LossTrigger)
                | (LossTrigger, Invader)
        )
    };
    for a in roles {
        for b in roles {
            assert_eq!(
                should_collide(a, b),
                expected(a, b),
                "unexpected interaction result for {a:?} vs {b:?}"
            );
        }
    }
}

#[test]
fn test_each_role_has_a_single_distinct_group_bit() {
    let roles = [
        EntityRole::Bullet,
        EntityRole::Invader,
        EntityRole::LossTrigger,
        EntityRole::BulletSponge,
    ];
    let mut union = CollisionGroups::NONE;
    for role in roles {
        let filter = CollisionFilter::for_role(role);
        assert_eq!(filter.group.count_ones(), 1);
        assert_eq!(union & filter.group, 0, "{role:?} shares a group bit");
        union |= filter.group;
    }
}

#[test]
fn test_one_sided_mask_does_not_interact() {
    let a = CollisionFilter {
        group: CollisionGroups::BULLET,
        mask: CollisionGroups::INVADER,
    };
    let b = CollisionFilter {
        group: CollisionGroups::INVADER,
        mask: CollisionGroups::NONE,
    };
    assert!(!a.interacts_with(&b));
    assert!(!b.interacts_with(&a));
}

// ---- Configuration ----

#[test]
fn test_default_config_is_valid() {
    let config = GameConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.invader_count(), 45);
}

#[test]
fn test_config_rejects_out_of_range_values() {
    let base = GameConfig::default();
    assert_eq!(
        GameConfig { max_speed: 0.5, ..base }.validate(),
        Err(ConfigError::MaxSpeedOutOfRange(0.5))
    );
    assert_eq!(
        GameConfig { rows: 0, ..base }.validate(),
        Err(ConfigError::RowsOutOfRange(0))
    );
    assert_eq!(
        GameConfig { rows: 11, ..base }.validate(),
        Err(ConfigError::RowsOutOfRange(11))
    );
    assert_eq!(
        GameConfig { columns: 12, ..base }.validate(),
        Err(ConfigError::ColumnsOutOfRange(12))
    );
}

#[test]
fn test_config_accepts_single_row() {
    let config = GameConfig {
        rows: 1,
        columns: 9,
        ..Default::default()
    };
    assert!(config.validate().is_ok());
    assert_eq!(config.invader_count(), 9);
}

#[test]
fn test_config_fills_missing_fields_from_defaults() {
    let config: GameConfig = serde_json::from_str(r#"{ "rows": 3 }"#).unwrap();
    assert_eq!(config.rows, 3);
    assert_eq!(config.columns, GameConfig::default().columns);
    assert_eq!(config.max_speed, GameConfig::default().max_speed);
}

#[test]
fn test_config_error_messages() {
    let err = GameConfig {
        rows: 0,
        ..Default::default()
    }
    .validate()
    .unwrap_err();
    assert_eq!(err.to_string(), "row count 0 is outside 1..=10");
}

// ---- Serialization ----

#[test]
fn test_game_command_tagged_json() {
    let json = serde_json::to_string(&GameCommand::Fire).unwrap();
    assert_eq!(json, r#"{"type":"Fire"}"#);

    let cmd: GameCommand =
        serde_json::from_str(r#"{"type":"MovePlayer","x":0.5,"y":0.0,"z":0.0}"#).unwrap();
    assert_eq!(
        cmd,
        GameCommand::MovePlayer {
            x: 0.5,
            y: 0.0,
            z: 0.0
        }
    );
}

#[test]
fn test_game_event_tagged_json() {
    let event = GameEvent::InvaderHit {
        bullet: EntityId(7),
        invader: EntityId(3),
        remaining: 4,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains(r#""type":"InvaderHit""#));
    let back: GameEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}

#[test]
fn test_default_snapshot_serializes() {
    let snapshot = RoundSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains(r#""phase":"Setup""#));
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..60 {
        time.advance(1.0 / 60.0);
    }
    assert_eq!(time.tick, 60);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-4);
}

#[test]
fn test_entity_id_display() {
    assert_eq!(EntityId(42).to_string(), "#42");
}
