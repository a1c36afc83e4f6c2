//! Integration tests for motion-interp.
//!
//! These tests drive the interpreter end to end, from TOML configuration to
//! the motion blocks queued for the planner.

use core::f64::consts::{FRAC_PI_2, PI};

use embedded_hal_mock::eh1::delay::NoopDelay;
use motion_interp::config::{parse_config, MachineConfig, Millimeters};
use motion_interp::error::{Error, PlannerError};
use motion_interp::interpreter::{Command, Interpreter, MotionMode, Positioning};
use motion_interp::kinematics::{CartesianSolution, Solution};
use motion_interp::motion::{ArcDirection, ArcMove, LineSegments, MotionBlock, Plane};
use heapless::spsc::Queue;
use motion_interp::planner::BlockQueue;

// =============================================================================
// Test configuration data
// =============================================================================

const MACHINE_CONFIG: &str = r#"
default_feed_rate = 600.0
default_seek_rate = 3000.0
mm_per_line_segment = 5.0
mm_per_arc_segment = 0.5

[kinematics]
solution = "cartesian"
steps_per_mm = [1000.0, 1000.0, 1000.0]
"#;

type TestInterpreter = Interpreter<Solution, BlockQueue<1024>, NoopDelay>;

fn interpreter() -> TestInterpreter {
    let config = parse_config(MACHINE_CONFIG).expect("Config should parse");
    Interpreter::from_config(&config, BlockQueue::new(), NoopDelay::new())
        .expect("Config should be valid")
}

fn drain(interp: &mut TestInterpreter) -> Vec<MotionBlock> {
    let mut blocks = Vec::new();
    while let Some(block) = interp.planner_mut().pop() {
        blocks.push(block);
    }
    blocks
}

fn g(code: f64) -> Command {
    Command::new().with('G', code)
}

// =============================================================================
// Line scenarios
// =============================================================================

#[test]
fn linear_move_splits_at_segment_length() {
    let mut interp = interpreter();

    let outcome = interp
        .execute(&g(1.0).with('X', 10.0).with('Y', 0.0).with('Z', 0.0).with('F', 100.0))
        .unwrap();

    assert_eq!(outcome.milestones, 2);
    assert_eq!(outcome.blocks, 2);

    let blocks = drain(&mut interp);
    assert_eq!(blocks[0].steps, [5000, 0, 0]);
    assert_eq!(blocks[1].steps, [10000, 0, 0]);
    for block in &blocks {
        assert!((block.rate - 100.0).abs() < 1e-9);
        assert!((block.distance_mm - 5.0).abs() < 1e-12);
        assert_eq!(block.deltas, [5.0, 0.0, 0.0]);
    }
    assert_eq!(interp.state().current_position, [10.0, 0.0, 0.0]);
    assert_eq!(interp.state().last_milestone, [10.0, 0.0, 0.0]);
}

#[test]
fn line_segmenter_yields_exact_points() {
    let milestones: Vec<_> =
        LineSegments::new([0.0; 3], [10.0, 0.0, 0.0], 100.0 / 60.0, 5.0).collect();

    assert_eq!(milestones.len(), 2);
    assert_eq!(milestones[0].target, [5.0, 0.0, 0.0]);
    assert_eq!(milestones[1].target, [10.0, 0.0, 0.0]);
}

#[test]
fn seek_uses_seek_rate() {
    let mut interp = interpreter();

    interp.execute(&g(0.0).with('X', 1.0)).unwrap();

    let blocks = drain(&mut interp);
    assert_eq!(blocks.len(), 1);
    assert!((blocks[0].rate - 3000.0).abs() < 1e-9);
}

#[test]
fn motion_mode_persists_between_commands() {
    let mut interp = interpreter();

    interp.execute(&g(1.0).with('X', 1.0).with('F', 120.0)).unwrap();
    interp.execute(&Command::new().with('Y', 1.0)).unwrap();

    let blocks = drain(&mut interp);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1].deltas, [0.0, 1.0, 0.0]);
    assert!((blocks[1].rate - 120.0).abs() < 1e-9);
}

#[test]
fn relative_moves_accumulate() {
    let mut interp = interpreter();
    interp.execute(&g(91.0)).unwrap();

    for _ in 0..3 {
        interp.execute(&g(1.0).with('X', 1.0)).unwrap();
    }

    assert_eq!(interp.state().positioning, Positioning::Relative);
    assert!((interp.state().current_position[0] - 3.0).abs() < 1e-12);
    assert_eq!(drain(&mut interp).len(), 3);
}

#[test]
fn inch_values_are_converted() {
    let mut interp = interpreter();

    interp.execute(&g(20.0)).unwrap();
    interp.execute(&g(1.0).with('X', 1.0)).unwrap();

    assert_eq!(interp.state().current_position[0], 1.0 / 25.4);
}

#[test]
fn zero_length_move_emits_nothing() {
    let mut interp = interpreter();
    interp.execute(&g(1.0).with('X', 5.0)).unwrap();
    drain(&mut interp);

    let outcome = interp.execute(&g(1.0).with('X', 5.0)).unwrap();

    assert_eq!(outcome.milestones, 0);
    assert!(interp.planner().is_empty());
}

#[test]
fn negligible_move_is_discarded_but_position_advances() {
    let mut interp = interpreter();

    let outcome = interp.execute(&g(1.0).with('X', 0.0005)).unwrap();

    assert_eq!(outcome.milestones, 1);
    assert_eq!(outcome.discarded(), 1);
    assert_eq!(interp.state().current_position, [0.0005, 0.0, 0.0]);
    assert_eq!(interp.state().last_milestone, [0.0; 3]);
}

// =============================================================================
// Arc scenarios
// =============================================================================

#[test]
fn clockwise_arc_from_quarter_point() {
    let mut interp = interpreter();
    interp.execute(&g(0.0).with('X', 10.0)).unwrap();
    drain(&mut interp);

    let arc = ArcMove::new(
        interp.state().current_position,
        [0.0, 10.0, 0.0],
        [-10.0, 0.0, 0.0],
        ArcDirection::Clockwise,
        interp.state().plane,
    );
    assert_eq!(arc.radius, 10.0);
    // Clockwise from +X to +Y is three quarters of a turn
    assert!((arc.angular_travel() + 3.0 * FRAC_PI_2).abs() < 1e-12);

    interp
        .execute(&g(2.0).with('X', 0.0).with('Y', 10.0).with('I', -10.0).with('J', 0.0))
        .unwrap();

    let blocks = drain(&mut interp);
    assert_eq!(blocks.last().unwrap().steps, [0, 10000, 0]);
    assert_eq!(interp.state().last_milestone, [0.0, 10.0, 0.0]);
    assert_eq!(interp.state().current_position, [0.0, 10.0, 0.0]);

    // The path dips through -Y on the way round
    assert!(blocks.iter().any(|b| b.steps[1] < -9000));
}

#[test]
fn clockwise_quarter_turn() {
    let arc = ArcMove::new(
        [0.0, 10.0, 0.0],
        [10.0, 0.0, 0.0],
        [0.0, -10.0, 0.0],
        ArcDirection::Clockwise,
        Plane::Xy,
    );

    assert_eq!(arc.radius, 10.0);
    assert!((arc.angular_travel() + FRAC_PI_2).abs() < 1e-12);

    let milestones: Vec<_> = arc.segments(1.0, 0.5, 25).collect();
    assert_eq!(milestones.last().unwrap().target, [10.0, 0.0, 0.0]);
}

#[test]
fn clockwise_and_counter_clockwise_are_complementary() {
    let cw = ArcMove::new(
        [10.0, 0.0, 0.0],
        [0.0, 10.0, 0.0],
        [-10.0, 0.0, 0.0],
        ArcDirection::Clockwise,
        Plane::Xy,
    );
    let ccw = ArcMove {
        direction: ArcDirection::CounterClockwise,
        ..cw
    };

    assert!(cw.angular_travel() < 0.0);
    assert!(ccw.angular_travel() > 0.0);
    assert!((cw.angular_travel().abs() + ccw.angular_travel() - 2.0 * PI).abs() < 1e-12);
    assert!((cw.path_length() + ccw.path_length() - 2.0 * PI * 10.0).abs() < 1e-9);
}

#[test]
fn arcs_always_run_at_feed_rate() {
    let mut interp = interpreter();
    interp.execute(&g(0.0).with('X', 10.0).with('F', 9000.0)).unwrap();
    drain(&mut interp);

    interp
        .execute(&g(3.0).with('X', 0.0).with('Y', 10.0).with('I', -10.0))
        .unwrap();

    let blocks = drain(&mut interp);
    assert!(!blocks.is_empty());
    assert!(blocks.iter().all(|b| (b.rate - 600.0).abs() < 1e-9));
}

#[test]
fn arc_in_yz_plane_with_helix() {
    let mut interp = interpreter();
    interp.execute(&g(0.0).with('Y', 5.0)).unwrap();
    drain(&mut interp);

    // Half turn around (0, 0, 0) in Y/Z while X climbs 2 mm
    let outcome = interp
        .execute(&g(19.0).with('G', 3.0).with('Y', -5.0).with('X', 2.0).with('J', -5.0))
        .unwrap();

    assert_eq!(interp.state().plane, Plane::Yz);
    assert_eq!(interp.state().motion_mode, MotionMode::CounterClockwiseArc);
    assert!(outcome.blocks > 1);

    let blocks = drain(&mut interp);
    let total_x: f64 = blocks.iter().map(|b| b.deltas[0]).sum();
    assert!((total_x - 2.0).abs() < 1e-9);
    assert_eq!(interp.state().last_milestone, [2.0, -5.0, 0.0]);
}

#[test]
fn degenerate_arc_emits_nothing() {
    let mut interp = interpreter();

    let outcome = interp.execute(&g(3.0)).unwrap();

    assert_eq!(outcome.milestones, 0);
    assert!(interp.planner().is_empty());
}

#[test]
fn short_arc_falls_back_to_single_milestone() {
    let mut interp = interpreter();
    interp.execute(&g(0.0).with('X', 0.1)).unwrap();
    drain(&mut interp);

    // Quarter turn of radius 0.1 is ~0.157 mm, under one 0.5 mm arc segment
    let outcome = interp
        .execute(&g(3.0).with('X', 0.0).with('Y', 0.1).with('I', -0.1))
        .unwrap();

    assert_eq!(outcome.milestones, 1);
    let blocks = drain(&mut interp);
    assert_eq!(blocks[0].steps, [0, 100, 0]);
}

#[test]
fn canned_cycle_entry_points() {
    let mut interp = interpreter();

    interp.append_line([0.0, 0.0, -2.0], 5.0).unwrap();
    // Entry points leave the command position alone
    assert_eq!(interp.state().current_position, [0.0; 3]);
    assert_eq!(interp.state().last_milestone, [0.0, 0.0, -2.0]);

    interp.reset_position([0.0, 0.0, -2.0]);
    let outcome = interp
        .append_arc([0.0, 0.0, -2.0], [1.0, 0.0, 0.0], 1.0, ArcDirection::Clockwise)
        .unwrap();
    // Full circle of radius 1 at 0.5 mm per segment
    assert_eq!(outcome.milestones, 12);
}

// =============================================================================
// Configuration and planner failures
// =============================================================================

#[test]
fn config_reload_changes_segmentation() {
    let mut interp = interpreter();
    let config = MachineConfig {
        line_segment_length: Millimeters(1.0),
        ..parse_config(MACHINE_CONFIG).unwrap()
    };

    interp.on_config_reload(&config).unwrap();
    let outcome = interp.execute(&g(1.0).with('X', 10.0)).unwrap();

    assert_eq!(outcome.milestones, 10);
}

#[test]
fn halted_planner_surfaces_error() {
    let mut interp = interpreter();
    interp.planner_mut().halt();

    let result = interp.execute(&g(1.0).with('X', 10.0));

    assert_eq!(result, Err(Error::Planner(PlannerError::Halted)));
    assert_eq!(interp.state().last_milestone, [0.0; 3]);
    assert_eq!(interp.state().current_position, [10.0, 0.0, 0.0]);
}

#[test]
fn explicit_solution_and_planner_reference() {
    let config = parse_config(MACHINE_CONFIG).unwrap();
    let mut queue: BlockQueue<8> = BlockQueue::new();

    {
        let mut interp = Interpreter::new(
            &config,
            CartesianSolution::new([10.0, 10.0, 10.0]),
            &mut queue,
            NoopDelay::new(),
        )
        .unwrap();
        interp.execute(&g(1.0).with('Z', -1.0)).unwrap();
    }

    assert_eq!(queue.pop().unwrap().steps, [0, 0, -10]);
}

#[test]
fn small_queue_drained_concurrently_during_long_move() {
    let config = parse_config(MACHINE_CONFIG).unwrap();
    // Two usable slots for a 40-block move
    let mut queue: Queue<MotionBlock, 3> = Queue::new();
    let (producer, mut consumer) = queue.split();
    let mut interp = Interpreter::from_config(&config, producer, NoopDelay::new()).unwrap();

    let received = std::thread::scope(|s| {
        let step_generator = s.spawn(move || {
            let mut blocks = Vec::new();
            while blocks.len() < 40 {
                match consumer.dequeue() {
                    Some(block) => blocks.push(block),
                    None => std::thread::yield_now(),
                }
            }
            blocks
        });

        let outcome = interp.execute(&g(1.0).with('X', 200.0)).unwrap();
        assert_eq!(outcome.blocks, 40);

        step_generator.join().unwrap()
    });

    assert_eq!(received.len(), 40);
    assert_eq!(received[0].steps, [5_000, 0, 0]);
    assert_eq!(received[39].steps, [200_000, 0, 0]);
    assert_eq!(interp.state().last_milestone, [200.0, 0.0, 0.0]);
}
