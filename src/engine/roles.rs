pub const ROLE_COUNT: usize = 6;

/// The six unit roles, in the order the engine lists them in both the
/// configuration payload and the per-player unit lists of a turn frame.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRole {
    Wall = 0,
    Support = 1,
    Turret = 2,
    Scout = 3,
    Demolisher = 4,
    Interceptor = 5
}

impl UnitRole {
    pub fn all() -> [UnitRole; ROLE_COUNT] {
        use self::UnitRole::*;
        [Wall, Support, Turret, Scout, Demolisher, Interceptor]
    }

    pub fn is_structure(&self) -> bool {
        match *self {
            UnitRole::Wall | UnitRole::Support | UnitRole::Turret => true,
            _ => false
        }
    }
}

/// Engine-facing identity and pricing of one unit role. `cost_sp` and
/// `cost_mp` are the two components of the spawn price (structure points and
/// mobile points); upgrades have their own price, falling back to the spawn
/// price where the configuration does not override it.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSpec {
    pub shorthand: String,
    pub cost_sp: f64,
    pub cost_mp: f64,
    pub upgrade_cost_sp: f64,
    pub upgrade_cost_mp: f64
}

/// Role-indexed lookup table, bound once from the configuration payload and
/// read-only for the rest of the game.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleMap {
    specs: [UnitSpec; ROLE_COUNT]
}

impl RoleMap {
    pub fn new(specs: [UnitSpec; ROLE_COUNT]) -> RoleMap {
        RoleMap { specs }
    }

    pub fn spec(&self, role: UnitRole) -> &UnitSpec {
        &self.specs[role as usize]
    }

    pub fn shorthand(&self, role: UnitRole) -> &str {
        &self.spec(role).shorthand
    }
}
