pub mod breaches;
pub mod defense;
pub mod layout;
pub mod offense;

use std::error::Error;

use engine::GameState;
use engine::roles::{RoleMap, UnitRole};
use runner::Algo;

use self::breaches::BreachLog;
use self::offense::WaveTracker;

/// The whole bot: a fixed funnel defense plus a two-mode wave offense, with
/// a breach log fed from action frames. All game-lifetime state lives here.
pub struct FunnelStrategy {
    roles: Option<RoleMap>,
    tracker: WaveTracker,
    scored_on: BreachLog
}

impl FunnelStrategy {
    pub fn new() -> FunnelStrategy {
        FunnelStrategy {
            roles: None,
            tracker: WaveTracker::new(),
            scored_on: BreachLog::new()
        }
    }

    pub fn scored_on(&self) -> &BreachLog {
        &self.scored_on
    }

    pub fn tracker(&self) -> &WaveTracker {
        &self.tracker
    }
}

impl Algo for FunnelStrategy {
    fn on_game_start(&mut self, roles: RoleMap) {
        let shorthands: Vec<&str> = UnitRole::all().iter().map(|&role| roles.shorthand(role)).collect();
        debug!("unit roles bound: {:?}", shorthands);
        self.roles = Some(roles);
    }

    fn on_turn(&mut self, state: &mut GameState) -> Result<(), Box<Error>> {
        let roles = match self.roles {
            Some(ref roles) => roles,
            None => return Err("turn frame arrived before configuration".into())
        };
        self.tracker.review_last_wave(state.enemy.health);
        defense::plan(state, roles);
        offense::plan(state, roles, &mut self.tracker);
        Ok(())
    }

    fn on_action_frame(&mut self, frame: &str) -> Result<(), Box<Error>> {
        self.scored_on.record_from_frame(frame)
    }
}
