use engine::constants::STARTING_HEALTH;
use engine::roles::{RoleMap, UnitRole};
use engine::{GameState, PlayerIndex, Resource};

use strategy::layout;

/// Hold the wave until at least this much MP is banked.
pub const MIN_WAVE_MP: f64 = 15.0;
/// Units per wave, resources permitting.
pub const WAVE_SIZE: usize = 20;
/// A wave that cost the enemy no more health than this has run into too
/// much armor for scouts to handle.
pub const STALL_MARGIN: f64 = 2.0;

/// Carries the attack read-out across turns: what the enemy health was when
/// we last launched, whether a launch is awaiting review, and which troop
/// the next wave uses.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveTracker {
    pub last_enemy_health: f64,
    pub use_demolishers: bool,
    pub wave_pending: bool
}

impl WaveTracker {
    pub fn new() -> WaveTracker {
        WaveTracker {
            last_enemy_health: STARTING_HEALTH,
            use_demolishers: false,
            wave_pending: false
        }
    }

    /// Runs at the start of every turn. If last turn launched a wave, judge
    /// it by how far the enemy health fell and pick the troop type for the
    /// next one; the pending flag is cleared either way. The health
    /// reference point only moves on review, so quiet turns don't dilute
    /// the next judgement.
    pub fn review_last_wave(&mut self, enemy_health: f64) {
        if self.wave_pending {
            debug!("enemy health before wave: {}", self.last_enemy_health);
            debug!("enemy health after wave: {}", enemy_health);
            self.use_demolishers = self.last_enemy_health <= enemy_health + STALL_MARGIN;
            self.last_enemy_health = enemy_health;
        }
        self.wave_pending = false;
    }
}

/// Launches one wave from the fixed launch cell once enough MP is banked:
/// scouts while they keep drawing blood, demolishers once a wave stalls.
/// Below the MP floor this declines quietly and leaves the tracker alone.
pub fn plan(state: &mut GameState, roles: &RoleMap, tracker: &mut WaveTracker) {
    if state.get_resource(Resource::Mobile, PlayerIndex::Me) < MIN_WAVE_MP {
        return;
    }
    tracker.wave_pending = true;
    let troop = if tracker.use_demolishers {
        UnitRole::Demolisher
    } else {
        UnitRole::Scout
    };
    let launched = state.attempt_spawn(roles, troop, &[layout::TROOP_LAUNCH], Some(WAVE_SIZE));
    debug!("launched {} x {:?}", launched, troop);
}
