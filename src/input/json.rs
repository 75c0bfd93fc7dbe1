use std::error::Error;

use serde_json;

use engine::geometry::Point;
use engine::roles::{RoleMap, UnitRole, UnitSpec, ROLE_COUNT};
use engine::{GameState, PlayerStats, StructureGrid};

/// Index of the upgraded-units list in a frame's per-player unit lists.
/// Lists 0 to 5 follow role order, list 6 holds pending removals (not
/// consumed here), list 7 marks which structures are upgraded.
const UPGRADE_LIST_INDEX: usize = 7;

pub fn parse_config(line: &str) -> Result<RoleMap, Box<Error>> {
    let config: Config = serde_json::from_str(line)?;
    config.to_role_map()
}

pub fn parse_turn_frame(line: &str) -> Result<GameState, Box<Error>> {
    let frame: TurnFrame = serde_json::from_str(line)?;
    frame.to_engine()
}

pub fn parse_action_frame(line: &str) -> Result<Vec<Breach>, Box<Error>> {
    let frame: ActionFrame = serde_json::from_str(line)?;
    Ok(frame.to_breaches())
}

/// Cheap first-pass read of `turnInfo[0]`, which tells turn frames (0),
/// action frames (1) and the end-of-game frame (2) apart.
pub fn read_frame_kind(line: &str) -> Result<i32, Box<Error>> {
    let header: FrameHeader = serde_json::from_str(line)?;
    match header.turn_info.first() {
        Some(&kind) => Ok(kind as i32),
        None => Err("turnInfo is empty".into())
    }
}

/// A mobile unit reaching an edge, as reported in action-frame events.
/// Owner codes here are the frame encoding (1 = us, 2 = opponent), not the
/// wrapper's 0/1 player index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breach {
    pub cell: Point,
    pub owner: FrameOwner
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOwner {
    Mine,
    Enemy
}

impl FrameOwner {
    /// Anything that is not us counts as the opponent, matching how the
    /// original harness reads this field.
    fn from_code(code: u8) -> FrameOwner {
        if code == 1 {
            FrameOwner::Mine
        } else {
            FrameOwner::Enemy
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Config {
    unit_information: Vec<UnitInformation>,
    //timing_and_replay, resources, mechanics: engine-side tuning
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnitInformation {
    shorthand: Option<String>,
    #[serde(default)]
    cost1: f64,
    #[serde(default)]
    cost2: f64,
    upgrade: Option<UpgradeInformation>,
    //display: String,
    //start_health: f64,
    //attack_range, damage_walker, speed: combat stats the engine applies
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpgradeInformation {
    cost1: Option<f64>,
    cost2: Option<f64>
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrameHeader {
    turn_info: Vec<f64>
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TurnFrame {
    turn_info: Vec<f64>,
    p1_stats: Vec<f64>,
    p2_stats: Vec<f64>,
    p1_units: Vec<Vec<UnitRecord>>,
    //p2_units: the opponent's structures all sit on their half and never
    //          block our placements
    //events: only populated on action frames
}

/// `[x, y, stability, unit id]`
type UnitRecord = (u8, u8, f64, serde_json::Value);

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActionFrame {
    events: Events
    //turn_info: already consumed by read_frame_kind
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Events {
    breach: Vec<BreachRecord>
    //attack, damage, death, melee, move, self_destruct, shield, spawn
}

/// `[[x, y], damage, unit type, unit id, owner]`
type BreachRecord = ((u8, u8), f64, serde_json::Value, serde_json::Value, u8);

impl Config {
    fn to_role_map(&self) -> Result<RoleMap, Box<Error>> {
        if self.unit_information.len() < ROLE_COUNT {
            return Err(format!(
                "configuration lists {} unit types, need at least {}",
                self.unit_information.len(),
                ROLE_COUNT
            ).into());
        }
        let spec = |role: UnitRole| self.unit_information[role as usize].to_engine(role);
        Ok(RoleMap::new([
            spec(UnitRole::Wall)?,
            spec(UnitRole::Support)?,
            spec(UnitRole::Turret)?,
            spec(UnitRole::Scout)?,
            spec(UnitRole::Demolisher)?,
            spec(UnitRole::Interceptor)?
        ]))
    }
}

impl UnitInformation {
    fn to_engine(&self, role: UnitRole) -> Result<UnitSpec, Box<Error>> {
        let shorthand = match self.shorthand {
            Some(ref shorthand) if !shorthand.is_empty() => shorthand.clone(),
            _ => return Err(format!("unit record for {:?} has no shorthand", role).into())
        };
        Ok(UnitSpec {
            shorthand,
            cost_sp: self.cost1,
            cost_mp: self.cost2,
            upgrade_cost_sp: self.upgrade.as_ref().and_then(|u| u.cost1).unwrap_or(self.cost1),
            upgrade_cost_mp: self.upgrade.as_ref().and_then(|u| u.cost2).unwrap_or(self.cost2)
        })
    }
}

impl TurnFrame {
    fn to_engine(&self) -> Result<GameState, Box<Error>> {
        if self.turn_info.len() < 2 {
            return Err("turnInfo is missing the turn number".into());
        }
        let me = stats_to_engine(&self.p1_stats, "p1Stats")?;
        let enemy = stats_to_engine(&self.p2_stats, "p2Stats")?;

        let mut defenses = StructureGrid::empty();
        let structure_roles = [UnitRole::Wall, UnitRole::Support, UnitRole::Turret];
        for (index, &role) in structure_roles.iter().enumerate() {
            if let Some(list) = self.p1_units.get(index) {
                for unit in list {
                    let cell = Point::new(unit.0, unit.1);
                    if cell.on_own_half() {
                        defenses.add(role, cell);
                    }
                }
            }
        }
        if let Some(list) = self.p1_units.get(UPGRADE_LIST_INDEX) {
            for unit in list {
                let cell = Point::new(unit.0, unit.1);
                if cell.on_own_half() {
                    defenses.upgraded.insert(cell);
                }
            }
        }

        Ok(GameState::new(self.turn_info[1] as u32, me, enemy, defenses))
    }
}

impl ActionFrame {
    fn to_breaches(&self) -> Vec<Breach> {
        self.events
            .breach
            .iter()
            .map(|record| Breach {
                cell: Point::new((record.0).0, (record.0).1),
                owner: FrameOwner::from_code(record.4)
            })
            .collect()
    }
}

fn stats_to_engine(stats: &[f64], name: &str) -> Result<PlayerStats, Box<Error>> {
    if stats.len() < 3 {
        return Err(format!("{} must carry health, SP and MP, got {} values", name, stats.len()).into());
    }
    Ok(PlayerStats {
        health: stats[0],
        structure_points: stats[1],
        mobile_points: stats[2]
    })
}
