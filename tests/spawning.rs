extern crate funnelbot;
extern crate serde_json;

#[macro_use] extern crate proptest;

use funnelbot::engine::geometry::Point;
use funnelbot::engine::roles::{RoleMap, UnitRole, UnitSpec};
use funnelbot::engine::{GameState, PlayerStats, StructureGrid};

use proptest::prelude::*;

fn spec(shorthand: &str, cost_sp: f64, cost_mp: f64, upgrade_sp: f64) -> UnitSpec {
    UnitSpec {
        shorthand: shorthand.to_owned(),
        cost_sp,
        cost_mp,
        upgrade_cost_sp: upgrade_sp,
        upgrade_cost_mp: 0.0
    }
}

fn test_roles() -> RoleMap {
    RoleMap::new([
        spec("FF", 1.0, 0.0, 1.0),
        spec("EF", 4.0, 0.0, 4.0),
        spec("DF", 2.0, 0.0, 4.0),
        spec("PI", 0.0, 1.0, 0.0),
        spec("EI", 0.0, 3.0, 0.0),
        spec("SI", 0.0, 1.0, 0.0)
    ])
}

fn test_state(structure_points: f64, mobile_points: f64) -> GameState {
    GameState::new(
        0,
        PlayerStats { health: 30.0, structure_points, mobile_points },
        PlayerStats { health: 30.0, structure_points: 30.0, mobile_points: 5.0 },
        StructureGrid::empty()
    )
}

#[test]
fn mobile_units_stack_on_one_cell() {
    let roles = test_roles();
    let mut state = test_state(0.0, 20.0);

    let spawned = state.attempt_spawn(&roles, UnitRole::Scout, &[Point::new(4, 9)], Some(20));

    assert_eq!(spawned, 20);
    assert_eq!(state.deploy_stack.len(), 20);
    assert!(state.deploy_stack.iter().all(|entry| entry.code == "PI" && entry.cell == Point::new(4, 9)));
    assert_eq!(state.me.mobile_points, 0.0);
    assert!(state.build_stack.is_empty());
}

#[test]
fn wave_size_is_cut_by_the_mobile_pool() {
    let roles = test_roles();
    let mut state = test_state(0.0, 20.0);

    let spawned = state.attempt_spawn(&roles, UnitRole::Demolisher, &[Point::new(4, 9)], Some(20));

    assert_eq!(spawned, 6);
    assert_eq!(state.me.mobile_points, 2.0);
}

#[test]
fn structures_cap_at_one_per_cell() {
    let roles = test_roles();
    let mut state = test_state(10.0, 0.0);

    let spawned = state.attempt_spawn(&roles, UnitRole::Wall, &[Point::new(0, 13)], None);

    assert_eq!(spawned, 1);
    assert_eq!(state.build_stack.len(), 1);
    assert!(state.defenses.occupied(Point::new(0, 13)));
    assert_eq!(state.me.structure_points, 9.0);
}

#[test]
fn placement_walks_every_cell_even_after_a_failure() {
    let roles = test_roles();
    let mut state = test_state(2.0, 0.0);
    state.defenses.add(UnitRole::Turret, Point::new(1, 13));

    let cells = [Point::new(0, 13), Point::new(1, 13), Point::new(2, 13)];
    let spawned = state.attempt_spawn(&roles, UnitRole::Wall, &cells, Some(1));

    assert_eq!(spawned, 2);
    assert!(state.defenses.walls.contains(Point::new(0, 13)));
    assert!(state.defenses.walls.contains(Point::new(2, 13)));
    assert_eq!(state.me.structure_points, 0.0);
}

#[test]
fn cells_on_the_enemy_half_never_spawn() {
    let roles = test_roles();
    let mut state = test_state(50.0, 50.0);

    assert!(!state.can_spawn(&roles, UnitRole::Wall, Point::new(0, 14)));
    assert_eq!(state.attempt_spawn(&roles, UnitRole::Wall, &[Point::new(0, 14)], None), 0);
    assert_eq!(state.attempt_spawn(&roles, UnitRole::Scout, &[Point::new(13, 27)], Some(5)), 0);
    assert_eq!(state.me.structure_points, 50.0);
    assert_eq!(state.me.mobile_points, 50.0);
}

#[test]
fn occupied_cells_refuse_other_structures() {
    let roles = test_roles();
    let mut state = test_state(50.0, 0.0);

    assert_eq!(state.attempt_spawn(&roles, UnitRole::Wall, &[Point::new(5, 5)], Some(1)), 1);
    assert_eq!(state.attempt_spawn(&roles, UnitRole::Turret, &[Point::new(5, 5)], Some(1)), 0);
    assert_eq!(state.defenses.structure_at(Point::new(5, 5)), Some(UnitRole::Wall));
}

#[test]
fn upgrading_needs_an_existing_structure() {
    let roles = test_roles();
    let mut state = test_state(50.0, 0.0);
    let cell = Point::new(3, 12);

    assert_eq!(state.attempt_upgrade(&roles, &[cell]), 0);

    state.attempt_spawn(&roles, UnitRole::Turret, &[cell], Some(1));
    assert_eq!(state.attempt_upgrade(&roles, &[cell]), 1);
    assert!(state.defenses.upgraded.contains(cell));
    assert_eq!(state.build_stack.last().map(|entry| entry.code.as_str()), Some("UP"));

    // Second pass is a no-op, the cell is already upgraded.
    assert_eq!(state.attempt_upgrade(&roles, &[cell]), 0);
}

#[test]
fn upgrades_use_the_override_price() {
    let roles = test_roles();
    let mut state = test_state(5.0, 0.0);
    let cell = Point::new(3, 12);

    // 2.0 to place the turret leaves 3.0, which is below its 4.0 upgrade price.
    state.attempt_spawn(&roles, UnitRole::Turret, &[cell], Some(1));
    assert_eq!(state.attempt_upgrade(&roles, &[cell]), 0);

    state.me.structure_points = 4.0;
    assert_eq!(state.attempt_upgrade(&roles, &[cell]), 1);
    assert_eq!(state.me.structure_points, 0.0);
}

#[test]
fn wall_upgrades_fall_back_to_the_spawn_price() {
    let roles = test_roles();
    let mut state = test_state(2.0, 0.0);
    let cell = Point::new(0, 13);

    state.attempt_spawn(&roles, UnitRole::Wall, &[cell], Some(1));
    assert_eq!(state.attempt_upgrade(&roles, &[cell]), 1);
    assert_eq!(state.me.structure_points, 0.0);
}

#[test]
fn removal_marks_but_keeps_the_cell() {
    let roles = test_roles();
    let mut state = test_state(10.0, 0.0);
    let cell = Point::new(8, 8);

    state.attempt_spawn(&roles, UnitRole::Wall, &[cell], Some(1));
    assert_eq!(state.attempt_remove(&[cell]), 1);
    assert_eq!(state.build_stack.last().map(|entry| entry.code.as_str()), Some("RM"));
    assert!(state.defenses.occupied(cell));

    assert_eq!(state.attempt_remove(&[Point::new(9, 9)]), 0);
}

#[test]
fn submission_is_two_json_lines() {
    let roles = test_roles();
    let mut state = test_state(10.0, 10.0);
    state.attempt_spawn(&roles, UnitRole::Wall, &[Point::new(0, 13)], Some(1));
    state.attempt_spawn(&roles, UnitRole::Scout, &[Point::new(4, 9)], Some(2));

    let mut output = Vec::new();
    state.submit_turn(&mut output).expect("submission failed");
    let written = String::from_utf8(output).expect("submission was not utf8");

    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 2);

    let build: Vec<(String, u8, u8)> = serde_json::from_str(lines[0]).expect("build stack line was not json");
    let deploy: Vec<(String, u8, u8)> = serde_json::from_str(lines[1]).expect("deploy stack line was not json");
    assert_eq!(build, vec![("FF".to_owned(), 0, 13)]);
    assert_eq!(deploy, vec![("PI".to_owned(), 4, 9), ("PI".to_owned(), 4, 9)]);
}

#[test]
fn an_empty_turn_still_submits_both_lines() {
    let state = test_state(0.0, 0.0);

    let mut output = Vec::new();
    state.submit_turn(&mut output).expect("submission failed");

    assert_eq!(String::from_utf8(output).expect("submission was not utf8"), "[]\n[]\n");
}

proptest! {
    #[test]
    fn spawning_never_overdraws_either_pool(
        x in 0u8..28,
        y in 0u8..14,
        structure_points in 0.0f64..100.0,
        mobile_points in 0.0f64..100.0,
        role_index in 0usize..6,
        budget in 0usize..30
    ) {
        let roles = test_roles();
        let role = UnitRole::all()[role_index];
        let mut state = test_state(structure_points, mobile_points);

        let spawned = state.attempt_spawn(&roles, role, &[Point::new(x, y)], Some(budget));

        assert!(state.me.structure_points >= 0.0);
        assert!(state.me.mobile_points >= 0.0);
        assert_eq!(spawned, state.build_stack.len() + state.deploy_stack.len());
        if role.is_structure() {
            assert!(spawned <= 1);
            assert_eq!(spawned == 1, state.defenses.occupied(Point::new(x, y)));
        }
    }

    #[test]
    fn upgrading_never_overdraws_the_structure_pool(
        x in 0u8..28,
        y in 0u8..14,
        structure_points in 0.0f64..10.0
    ) {
        let roles = test_roles();
        let mut state = test_state(structure_points, 0.0);
        state.defenses.add(UnitRole::Turret, Point::new(x, y));

        state.attempt_upgrade(&roles, &[Point::new(x, y)]);

        assert!(state.me.structure_points >= 0.0);
    }
}
