#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use invaders_core::constants::*;
    use invaders_core::enums::SweepState;

    use crate::layout::{column_offsets, formation, generate_limits, initial_speed, row_height};
    use crate::sweep::{evaluate, SweepContext, SweepUpdate};

    const FRAME: f32 = 1.0 / 60.0;

    fn make_context(state: SweepState, position: Vec2, spawn: Vec2) -> SweepContext {
        SweepContext {
            state,
            position,
            limits: generate_limits(spawn),
            speed: INVADER_BASE_SPEED,
            max_speed: MAX_MAX_SPEED,
            delta: FRAME,
        }
    }

    fn apply(ctx: &mut SweepContext, update: &SweepUpdate) {
        ctx.state = update.new_state;
        ctx.position = update.new_position;
        ctx.limits = update.new_limits;
        ctx.speed = update.new_speed;
    }

    // ---- Sweep FSM ----

    #[test]
    fn test_sweep_right_moves_toward_positive_x() {
        let spawn = Vec2::new(0.0, 0.6);
        let ctx = make_context(SweepState::SweepRight, spawn, spawn);
        let update = evaluate(&ctx);
        assert!(!update.state_changed);
        assert_eq!(update.new_state, SweepState::SweepRight);
        assert!(update.new_position.x > spawn.x);
        assert_eq!(update.new_position.y, spawn.y);
    }

    #[test]
    fn test_crossing_right_limit_snaps_and_starts_drop() {
        let spawn = Vec2::new(0.0, 0.6);
        let ctx = make_context(SweepState::SweepRight, Vec2::new(0.51, 0.6), spawn);
        let xlimit = ctx.limits[0].x;
        let update = evaluate(&ctx);

        assert!(update.state_changed);
        assert_eq!(update.new_state, SweepState::DropRight);
        let frame_step = ctx.speed * ctx.delta;
        assert!((update.new_position.x - (xlimit - frame_step)).abs() < 1e-6);
        assert!(update.new_position.x <= xlimit);
        // Drop bounds only change when a drop completes.
        assert_eq!(update.new_limits[1].y, ctx.limits[1].y);
        assert_eq!(update.new_limits[3].y, ctx.limits[3].y);
        assert_eq!(update.new_speed, ctx.speed);
    }

    #[test]
    fn test_crossing_left_limit_snaps_inward() {
        let spawn = Vec2::new(0.0, 0.6);
        let ctx = make_context(SweepState::SweepLeft, Vec2::new(-0.52, 0.4), spawn);
        let xlimit = ctx.limits[2].x;
        let update = evaluate(&ctx);

        assert_eq!(update.new_state, SweepState::DropLeft);
        assert!((update.new_position.x - (xlimit + ctx.speed * ctx.delta)).abs() < 1e-6);
        assert!(update.new_position.x >= xlimit);
    }

    #[test]
    fn test_right_limit_at_zero_never_turns() {
        // A non-positive right limit disables the turn; the invader keeps going.
        let mut ctx = make_context(SweepState::SweepRight, Vec2::new(0.1, 0.6), Vec2::ZERO);
        ctx.limits[0].x = 0.0;
        let update = evaluate(&ctx);
        assert_eq!(update.new_state, SweepState::SweepRight);
        assert!(update.new_position.x > 0.1);
    }

    #[test]
    fn test_drop_moves_down_until_bound() {
        let spawn = Vec2::new(0.0, 0.6);
        let ctx = make_context(SweepState::DropRight, Vec2::new(0.5, 0.6), spawn);
        let update = evaluate(&ctx);
        assert_eq!(update.new_state, SweepState::DropRight);
        assert!(update.new_position.y < 0.6);
        assert_eq!(update.new_position.x, 0.5);
    }

    #[test]
    fn test_completed_drop_lowers_bounds_and_speeds_up() {
        let spawn = Vec2::new(0.0, 0.6);
        let below = spawn.y - DROP_STEP - 0.001;
        let ctx = make_context(SweepState::DropRight, Vec2::new(0.5, below), spawn);
        let update = evaluate(&ctx);

        assert_eq!(update.new_state, SweepState::SweepLeft);
        assert!((update.new_limits[1].y - (ctx.limits[1].y - DROP_STEP)).abs() < 1e-6);
        assert!((update.new_limits[3].y - (ctx.limits[3].y - DROP_STEP)).abs() < 1e-6);
        assert_eq!(update.new_limits[0], ctx.limits[0]);
        assert_eq!(update.new_limits[2], ctx.limits[2]);
        assert!((update.new_speed - (INVADER_BASE_SPEED + INVADER_SPEED_INCREMENT)).abs() < 1e-6);
    }

    #[test]
    fn test_speed_clamped_to_max() {
        let spawn = Vec2::new(0.0, 0.6);
        let mut ctx = make_context(SweepState::DropLeft, Vec2::new(-0.5, 0.0), spawn);
        ctx.max_speed = 0.06;
        ctx.speed = 0.058;
        let update = evaluate(&ctx);
        assert_eq!(update.new_state, SweepState::SweepRight);
        assert_eq!(update.new_speed, 0.06);
    }

    #[test]
    fn test_full_cycle_returns_to_sweep_right_one_drop_lower_each_time() {
        let spawn = Vec2::new(0.0, 0.6);
        let mut ctx = make_context(SweepState::SweepRight, spawn, spawn);
        let mut transitions = Vec::new();

        for _ in 0..20_000 {
            let update = evaluate(&ctx);
            if update.state_changed {
                transitions.push((update.new_state, update.new_position));
            }
            apply(&mut ctx, &update);
            if transitions.len() == 4 {
                break;
            }
        }

        let states: Vec<SweepState> = transitions.iter().map(|(s, _)| *s).collect();
        assert_eq!(
            states,
            vec![
                SweepState::DropRight,
                SweepState::SweepLeft,
                SweepState::DropLeft,
                SweepState::SweepRight,
            ]
        );
        // Two drops completed, each roughly one DROP_STEP.
        assert!(ctx.position.y < spawn.y - 2.0 * DROP_STEP);
        assert!(ctx.position.y > spawn.y - 2.0 * DROP_STEP - 0.01);
        assert!((ctx.limits[1].y - (spawn.y - 3.0 * DROP_STEP)).abs() < 1e-5);
    }

    // ---- Layout ----

    #[test]
    fn test_column_offsets_odd_is_centred_on_zero() {
        let offsets = column_offsets(5, 0.1);
        assert_eq!(offsets.len(), 5);
        assert!((offsets[2]).abs() < 1e-6);
        assert!((offsets[0] + 0.2).abs() < 1e-6);
        assert!((offsets[4] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_column_offsets_even_straddles_zero() {
        let offsets = column_offsets(4, 0.1);
        let expected = [-0.15, -0.05, 0.05, 0.15];
        assert_eq!(offsets.len(), 4);
        for (got, want) in offsets.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6, "got {got}, want {want}");
        }
    }

    #[test]
    fn test_single_column_at_origin() {
        assert_eq!(column_offsets(1, 0.1), vec![0.0]);
    }

    #[test]
    fn test_formation_size_and_glyphs() {
        let slots = formation(3, 5);
        assert_eq!(slots.len(), 15);
        assert_eq!(slots[0].row, 1);
        assert_eq!(slots[0].glyph, 1);
        assert_eq!(slots[4].glyph, 5);
        assert_eq!(slots[14].row, 3);
        assert!((slots[14].position.y - row_height(3)).abs() < 1e-6);
    }

    #[test]
    fn test_limits_bracket_spawn_point() {
        let spawn = Vec2::new(-0.2, 0.8);
        let limits = generate_limits(spawn);
        assert!(limits[0].x > 0.0, "right limit must be positive to turn");
        assert!(limits[2].x < 0.0, "left limit must be negative to turn");
        assert!((limits[1].y - (0.8 - DROP_STEP)).abs() < 1e-6);
        assert_eq!(limits[1].y, limits[3].y);
    }

    #[test]
    fn test_initial_speed_never_exceeds_max() {
        assert_eq!(initial_speed(MAX_MAX_SPEED), INVADER_BASE_SPEED);
        assert_eq!(initial_speed(0.03), 0.03);
    }

    // ---- Properties ----

    proptest! {
        #[test]
        fn prop_state_cycles_and_speed_ramps_within_max(
            column in 0u32..9,
            row in 1u32..=10,
            max_speed in MIN_MAX_SPEED..=MAX_MAX_SPEED,
            deltas in proptest::collection::vec(0.001f32..0.05, 1..2_000),
        ) {
            let x = column_offsets(9, INVADER_SPACING)[column as usize];
            let spawn = Vec2::new(x, row_height(row));
            let mut ctx = SweepContext {
                state: SweepState::SweepRight,
                position: spawn,
                limits: generate_limits(spawn),
                speed: initial_speed(max_speed),
                max_speed,
                delta: 0.0,
            };

            for delta in deltas {
                ctx.delta = delta;
                let before = (ctx.state, ctx.speed, ctx.limits);
                let update = evaluate(&ctx);

                if update.state_changed {
                    prop_assert_eq!(update.new_state, before.0.next());
                } else {
                    prop_assert_eq!(update.new_state, before.0);
                }
                prop_assert!(update.new_speed >= before.1);
                prop_assert!(update.new_speed <= max_speed);
                prop_assert!(update.new_limits[1].y <= before.2[1].y);
                prop_assert!(update.new_limits[3].y <= before.2[3].y);

                apply(&mut ctx, &update);
            }
        }

        #[test]
        fn prop_turn_overshoot_bounded_by_one_frame(
            overshoot in 0.0001f32..0.01,
            speed in 0.01f32..0.2,
            delta in 0.001f32..0.05,
        ) {
            let spawn = Vec2::new(0.0, 0.6);
            let limits = generate_limits(spawn);
            let ctx = SweepContext {
                state: SweepState::SweepRight,
                position: Vec2::new(limits[0].x + overshoot, 0.6),
                limits,
                speed,
                max_speed: MAX_MAX_SPEED,
                delta,
            };
            let update = evaluate(&ctx);
            prop_assert_eq!(update.new_state, SweepState::DropRight);
            prop_assert!((limits[0].x - update.new_position.x) <= speed * delta + 1e-6);
        }
    }
}
