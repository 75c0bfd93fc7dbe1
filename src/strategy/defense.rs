use engine::{GameState, PlayerIndex, Resource};
use engine::roles::RoleMap;

use strategy::layout;

/// Upgrades only run while the SP pool still exceeds this after the build
/// pass. Placement coverage always comes first; upgrades soak up surplus.
pub const UPGRADE_SP_THRESHOLD: f64 = 30.0;

pub fn plan(state: &mut GameState, roles: &RoleMap) {
    for placement in layout::BUILD_ORDER.iter() {
        state.attempt_spawn(roles, placement.role, placement.cells, placement.limit);
    }

    if state.get_resource(Resource::Structure, PlayerIndex::Me) > UPGRADE_SP_THRESHOLD {
        for cells in layout::UPGRADE_ORDER.iter() {
            state.attempt_upgrade(roles, cells);
        }
    }
}
