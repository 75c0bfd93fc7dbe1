pub mod command;
pub mod constants;
pub mod geometry;
pub mod roles;

use std::error::Error;
use std::io::Write;

use self::command::{SpawnEntry, encode_stack, UPGRADE, REMOVE};
use self::constants::*;
use self::geometry::Point;
use self::roles::{RoleMap, UnitRole};

/// Resource kinds, in the wrapper's 0/1 numbering: structure points fund
/// stationary units and upgrades, mobile points fund troop waves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Structure,
    Mobile
}

/// Player selector for per-turn lookups, in the wrapper's 0/1 numbering
/// (0 = ourselves, 1 = the opponent). Action frames number players 1/2
/// instead; that encoding lives in `input::json::FrameOwner` and the two
/// must never be mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerIndex {
    Me,
    Opponent
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerStats {
    pub health: f64,
    pub structure_points: f64,
    pub mobile_points: f64
}

/// One row of bits per own-half row, bit x of row y marking cell (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMask([u32; HALF_BOARD as usize]);

impl CellMask {
    pub fn empty() -> CellMask {
        CellMask([0; HALF_BOARD as usize])
    }

    pub fn contains(&self, cell: Point) -> bool {
        cell.on_own_half() && self.0[cell.y as usize] & (1 << cell.x) != 0
    }

    pub fn insert(&mut self, cell: Point) {
        debug_assert!(cell.on_own_half());
        self.0[cell.y as usize] |= 1 << cell.x;
    }

    pub fn count(&self) -> u32 {
        self.0.iter().map(|row| row.count_ones()).sum()
    }
}

/// Where our stationary units sit this turn, by role, plus which of them are
/// already upgraded. Mobile units are never tracked here: they stack freely
/// and only live during action phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureGrid {
    pub walls: CellMask,
    pub supports: CellMask,
    pub turrets: CellMask,
    pub upgraded: CellMask
}

impl StructureGrid {
    pub fn empty() -> StructureGrid {
        StructureGrid {
            walls: CellMask::empty(),
            supports: CellMask::empty(),
            turrets: CellMask::empty(),
            upgraded: CellMask::empty()
        }
    }

    pub fn occupied(&self, cell: Point) -> bool {
        self.walls.contains(cell) || self.supports.contains(cell) || self.turrets.contains(cell)
    }

    pub fn structure_at(&self, cell: Point) -> Option<UnitRole> {
        if self.walls.contains(cell) {
            Some(UnitRole::Wall)
        } else if self.supports.contains(cell) {
            Some(UnitRole::Support)
        } else if self.turrets.contains(cell) {
            Some(UnitRole::Turret)
        } else {
            None
        }
    }

    pub fn add(&mut self, role: UnitRole, cell: Point) {
        debug_assert!(role.is_structure());
        debug_assert!(!self.occupied(cell));
        match role {
            UnitRole::Wall => self.walls.insert(cell),
            UnitRole::Support => self.supports.insert(cell),
            UnitRole::Turret => self.turrets.insert(cell),
            _ => {}
        }
    }

    pub fn count(&self) -> u32 {
        self.walls.count() + self.supports.count() + self.turrets.count()
    }
}

/// One turn's working state: the frame snapshot plus the actions queued so
/// far. Spawns and upgrades are booked against the local copy of the
/// resource pools and occupancy immediately, so a batch of attempts within
/// the turn composes the way the engine will apply it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub turn: u32,
    pub me: PlayerStats,
    pub enemy: PlayerStats,
    pub defenses: StructureGrid,
    pub build_stack: Vec<SpawnEntry>,
    pub deploy_stack: Vec<SpawnEntry>
}

impl GameState {
    pub fn new(turn: u32, me: PlayerStats, enemy: PlayerStats, defenses: StructureGrid) -> GameState {
        GameState {
            turn,
            me,
            enemy,
            defenses,
            build_stack: Vec::new(),
            deploy_stack: Vec::new()
        }
    }

    pub fn get_resource(&self, resource: Resource, player: PlayerIndex) -> f64 {
        let stats = match player {
            PlayerIndex::Me => &self.me,
            PlayerIndex::Opponent => &self.enemy
        };
        match resource {
            Resource::Structure => stats.structure_points,
            Resource::Mobile => stats.mobile_points
        }
    }

    pub fn can_spawn(&self, roles: &RoleMap, role: UnitRole, cell: Point) -> bool {
        if !cell.on_own_half() {
            return false;
        }
        let spec = roles.spec(role);
        if self.me.structure_points < spec.cost_sp || self.me.mobile_points < spec.cost_mp {
            return false;
        }
        !(role.is_structure() && self.defenses.occupied(cell))
    }

    /// Queues up to `limit` units of `role` on each of `cells` in order,
    /// stopping per cell at the first attempt that fails. `None` keeps
    /// attempting for as long as resources allow. Placing a structure on an
    /// occupied cell fails, so structures cap out at one per cell whatever
    /// the limit; mobile units stack. Returns how many were queued.
    pub fn attempt_spawn(&mut self, roles: &RoleMap, role: UnitRole, cells: &[Point], limit: Option<usize>) -> usize {
        let budget = limit.unwrap_or(usize::max_value());
        let mut spawned = 0;
        for &cell in cells {
            for _ in 0..budget {
                if !self.try_spawn(roles, role, cell) {
                    break;
                }
                spawned += 1;
            }
        }
        spawned
    }

    fn try_spawn(&mut self, roles: &RoleMap, role: UnitRole, cell: Point) -> bool {
        if !self.can_spawn(roles, role, cell) {
            return false;
        }
        let spec = roles.spec(role);
        self.me.structure_points -= spec.cost_sp;
        self.me.mobile_points -= spec.cost_mp;
        if role.is_structure() {
            self.defenses.add(role, cell);
            self.build_stack.push(SpawnEntry::new(&spec.shorthand, cell));
        } else {
            self.deploy_stack.push(SpawnEntry::new(&spec.shorthand, cell));
        }
        true
    }

    /// Queues an upgrade for every cell that holds one of our structures,
    /// is not upgraded yet, and whose upgrade price is affordable. Absent
    /// and already-upgraded cells are skipped quietly. Returns how many
    /// upgrades were queued.
    pub fn attempt_upgrade(&mut self, roles: &RoleMap, cells: &[Point]) -> usize {
        let mut upgraded = 0;
        for &cell in cells {
            let role = match self.defenses.structure_at(cell) {
                Some(role) => role,
                None => continue
            };
            if self.defenses.upgraded.contains(cell) {
                continue;
            }
            let spec = roles.spec(role);
            if self.me.structure_points < spec.upgrade_cost_sp || self.me.mobile_points < spec.upgrade_cost_mp {
                continue;
            }
            self.me.structure_points -= spec.upgrade_cost_sp;
            self.me.mobile_points -= spec.upgrade_cost_mp;
            self.defenses.upgraded.insert(cell);
            self.build_stack.push(SpawnEntry::new(UPGRADE, cell));
            upgraded += 1;
        }
        upgraded
    }

    /// Schedules the structures on `cells` for removal. The refund and the
    /// actual teardown happen on the engine's side next turn, so the cells
    /// stay occupied locally for the rest of this one.
    pub fn attempt_remove(&mut self, cells: &[Point]) -> usize {
        let mut removed = 0;
        for &cell in cells {
            if self.defenses.occupied(cell) {
                self.build_stack.push(SpawnEntry::new(REMOVE, cell));
                removed += 1;
            }
        }
        removed
    }

    /// Writes the turn's actions as the two lines the engine expects: the
    /// build stack, then the deploy stack. Both lines are always sent, empty
    /// or not, and flushed so the engine is never left waiting.
    pub fn submit_turn<W: Write>(&self, output: &mut W) -> Result<(), Box<Error>> {
        writeln!(output, "{}", encode_stack(&self.build_stack)?)?;
        writeln!(output, "{}", encode_stack(&self.deploy_stack)?)?;
        output.flush()?;
        Ok(())
    }
}
