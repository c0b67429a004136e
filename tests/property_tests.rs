//! Property-based tests for the claw machine.
//!
//! These tests use proptest to check the motion and timing guarantees
//! hold across many randomly generated tick and command sequences.

use claw_machine::builder::ClawMachineBuilder;
use claw_machine::claw::{ClawBody, ClawMachine, FixedPrizeDetector};
use claw_machine::config::ClawConfig;
use claw_machine::core::{ClawState, Direction, State};
use proptest::prelude::*;

fn build(config: ClawConfig, spawn_x: f32, success: bool) -> ClawMachine {
    ClawMachineBuilder::new()
        .config(config)
        .claw_body(ClawBody::at(spawn_x, 0.0, 0.0))
        .detector(FixedPrizeDetector(success))
        .build()
        .unwrap()
}

/// Tick until the machine is idle again, with a hard cap on iterations.
fn run_to_idle(claw: &mut ClawMachine, dt: f32) {
    for _ in 0..1_000_000 {
        if claw.state() == ClawState::Idle {
            return;
        }
        claw.tick(dt);
    }
    panic!("claw never returned to Idle");
}

#[derive(Clone, Debug)]
enum Op {
    Move(Direction),
    Stop,
    Lower,
    Tick(f32),
}

prop_compose! {
    fn arbitrary_direction()(right in any::<bool>()) -> Direction {
        if right { Direction::Right } else { Direction::Left }
    }
}

prop_compose! {
    fn arbitrary_config()(
        move_speed in 0.5f32..20.0,
        drop_speed in 0.5f32..20.0,
        half_width in 0.0f32..20.0,
        min_y in -20.0f32..0.0,
        height in 0.0f32..20.0,
        clamp_delay_seconds in 0.0f32..2.0,
    ) -> ClawConfig {
        ClawConfig {
            move_speed,
            drop_speed,
            min_x: -half_width,
            max_x: half_width,
            min_y,
            start_y: min_y + height,
            clamp_delay_seconds,
            ..ClawConfig::default()
        }
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_direction().prop_map(Op::Move),
        Just(Op::Stop),
        Just(Op::Lower),
        (0.0f32..2.0).prop_map(Op::Tick),
        (0.0f32..500.0).prop_map(Op::Tick),
    ]
}

fn apply(claw: &mut ClawMachine, op: &Op) {
    match op {
        Op::Move(direction) => claw.move_claw(*direction),
        Op::Stop => claw.stop_movement(),
        Op::Lower => claw.lower_claw(),
        Op::Tick(dt) => claw.tick(*dt),
    }
}

proptest! {
    #[test]
    fn x_never_leaves_rail(
        config in arbitrary_config(),
        spawn_x in -50.0f32..50.0,
        steps in prop::collection::vec((arbitrary_direction(), 0.0f32..1000.0), 1..50)
    ) {
        let (min_x, max_x) = (config.min_x, config.max_x);
        let mut claw = build(config, spawn_x, true);
        prop_assert!(claw.position().x >= min_x && claw.position().x <= max_x);

        for (direction, dt) in steps {
            claw.move_claw(direction);
            claw.tick(dt);
            prop_assert_eq!(claw.state(), ClawState::MovingHorizontal);
            prop_assert!(claw.position().x >= min_x && claw.position().x <= max_x);
        }
    }

    #[test]
    fn drop_lands_exactly_on_floor(
        config in arbitrary_config(),
        deltas in prop::collection::vec(0.0f32..5.0, 1..200)
    ) {
        let min_y = config.min_y;
        let mut claw = build(config, 0.0, true);
        claw.lower_claw();

        for dt in deltas {
            claw.tick(dt);
            prop_assert!(claw.position().y >= min_y);
            if claw.state() != ClawState::Dropping {
                prop_assert_eq!(claw.position().y, min_y);
                break;
            }
        }
    }

    #[test]
    fn clamp_never_resumes_early(
        delay in 0.0f32..2.0,
        deltas in prop::collection::vec(0.0f32..0.3, 1..100)
    ) {
        let config = ClawConfig {
            clamp_delay_seconds: delay,
            ..ClawConfig::default()
        };
        let mut claw = build(config, 0.0, false);
        claw.lower_claw();
        claw.tick(100.0);
        prop_assert_eq!(claw.state(), ClawState::Clamping);

        let mut accumulated = 0.0f32;
        for dt in deltas {
            claw.tick(dt);
            accumulated += dt;
            if accumulated < delay {
                prop_assert_eq!(claw.state(), ClawState::Clamping);
            } else {
                prop_assert_ne!(claw.state(), ClawState::Clamping);
                break;
            }
        }
    }

    #[test]
    fn return_lands_exactly_on_initial_position(
        config in arbitrary_config(),
        spawn_x in -50.0f32..50.0,
        offset in -10.0f32..10.0,
        dt in 0.01f32..0.5,
        success in any::<bool>()
    ) {
        let mut claw = build(config, spawn_x, success);
        let initial = claw.initial_position();

        claw.move_claw(if offset >= 0.0 { Direction::Right } else { Direction::Left });
        claw.tick(offset.abs());
        claw.stop_movement();
        claw.lower_claw();
        run_to_idle(&mut claw, dt);

        prop_assert_eq!(claw.position(), initial);
        prop_assert!(claw.position().is_finite());
    }

    #[test]
    fn full_cycle_always_resets(
        config in arbitrary_config(),
        success in any::<bool>(),
        dt in 0.01f32..1.0
    ) {
        let mut claw = build(config, 0.0, success);
        claw.lower_claw();
        run_to_idle(&mut claw, dt);

        prop_assert_eq!(claw.state(), ClawState::Idle);
        prop_assert!(claw.input_enabled());
        prop_assert!(!claw.is_clamped());
    }

    #[test]
    fn commands_during_sequence_are_ignored(
        commands in prop::collection::vec(
            prop_oneof![
                arbitrary_direction().prop_map(Op::Move),
                Just(Op::Stop),
                Just(Op::Lower),
            ],
            1..20
        ),
        dt in 0.01f32..0.5
    ) {
        let mut claw = build(ClawConfig::default(), 0.0, true);
        claw.lower_claw();

        while claw.state() != ClawState::Idle {
            let before = (claw.state(), claw.position(), claw.is_clamped(), claw.input_enabled());
            for command in &commands {
                apply(&mut claw, command);
            }
            let after = (claw.state(), claw.position(), claw.is_clamped(), claw.input_enabled());
            prop_assert_eq!(before, after);
            claw.tick(dt);
        }
    }

    #[test]
    fn every_recorded_transition_is_legal(
        ops in prop::collection::vec(arbitrary_op(), 1..100)
    ) {
        let mut claw = build(ClawConfig::default(), 0.0, true);
        for op in &ops {
            apply(&mut claw, op);
            prop_assert_eq!(claw.input_enabled(), !claw.state().is_sequence());
        }

        for transition in claw.history().transitions() {
            prop_assert!(transition.from.can_transition_to(transition.to));
        }
        prop_assert!(claw.position().is_finite());
    }
}
