//! The funnel layout as data.
//!
//! Three build zones: a maze on the left flank that turns anything entering
//! there through a turret pocket, a sealed corner on the right, and a plain
//! wall line across the mid-board choke. The left gap next to the maze is
//! the one opening we leave, and our own waves launch just below it.

use engine::geometry::Point;
use engine::roles::UnitRole;

/// One step of the build pass. `limit` is the per-cell attempt budget;
/// `None` keeps going for as long as resources allow.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub role: UnitRole,
    pub cells: &'static [Point],
    pub limit: Option<usize>
}

pub const MAZE_WALLS: [Point; 8] = [
    Point { x: 0, y: 13 }, Point { x: 1, y: 13 }, Point { x: 2, y: 13 },
    Point { x: 3, y: 13 }, Point { x: 5, y: 12 }, Point { x: 6, y: 9 },
    Point { x: 7, y: 8 }, Point { x: 8, y: 8 }
];

pub const MAZE_TURRETS: [Point; 4] = [
    Point { x: 3, y: 12 }, Point { x: 3, y: 11 },
    Point { x: 5, y: 11 }, Point { x: 5, y: 10 }
];

pub const CORNER_WALLS: [Point; 9] = [
    Point { x: 24, y: 13 }, Point { x: 25, y: 13 }, Point { x: 26, y: 13 },
    Point { x: 27, y: 13 }, Point { x: 24, y: 12 }, Point { x: 23, y: 11 },
    Point { x: 22, y: 10 }, Point { x: 22, y: 9 }, Point { x: 22, y: 8 }
];

pub const CORNER_TURRETS: [Point; 2] = [
    Point { x: 25, y: 12 }, Point { x: 24, y: 11 }
];

pub const MIDLINE_WALLS: [Point; 13] = [
    Point { x: 10, y: 8 }, Point { x: 11, y: 8 }, Point { x: 12, y: 8 },
    Point { x: 13, y: 8 }, Point { x: 14, y: 8 }, Point { x: 15, y: 8 },
    Point { x: 16, y: 8 }, Point { x: 17, y: 8 }, Point { x: 18, y: 8 },
    Point { x: 19, y: 8 }, Point { x: 20, y: 8 }, Point { x: 21, y: 8 },
    Point { x: 9, y: 7 }
];

pub const EXTRA_SUPPORTS: [Point; 3] = [
    Point { x: 1, y: 12 }, Point { x: 2, y: 12 }, Point { x: 2, y: 11 }
];

pub const EXTRA_TURRETS: [Point; 3] = [
    Point { x: 3, y: 10 }, Point { x: 6, y: 10 }, Point { x: 23, y: 10 }
];

/// Turret cells eligible for the maze-zone upgrade sweep: the maze pocket
/// plus the two extra turrets backing it.
pub const MAZE_UPGRADE_TURRETS: [Point; 6] = [
    Point { x: 3, y: 12 }, Point { x: 3, y: 11 }, Point { x: 5, y: 11 },
    Point { x: 5, y: 10 }, Point { x: 3, y: 10 }, Point { x: 6, y: 10 }
];

/// Corner turrets plus the extra turret covering the corner approach.
pub const CORNER_UPGRADE_TURRETS: [Point; 3] = [
    Point { x: 25, y: 12 }, Point { x: 24, y: 11 }, Point { x: 23, y: 10 }
];

/// Where troop waves enter the board, on the left edge below the maze gap.
pub const TROOP_LAUNCH: Point = Point { x: 4, y: 9 };

/// The build pass, in priority order. Runs every turn; placements on cells
/// that survived the last action phase are no-ops.
pub const BUILD_ORDER: [Placement; 7] = [
    Placement { role: UnitRole::Wall, cells: &MAZE_WALLS, limit: Some(1) },
    Placement { role: UnitRole::Turret, cells: &MAZE_TURRETS, limit: Some(1) },
    Placement { role: UnitRole::Wall, cells: &CORNER_WALLS, limit: Some(1) },
    Placement { role: UnitRole::Turret, cells: &CORNER_TURRETS, limit: Some(1) },
    Placement { role: UnitRole::Wall, cells: &MIDLINE_WALLS, limit: None },
    Placement { role: UnitRole::Support, cells: &EXTRA_SUPPORTS, limit: None },
    Placement { role: UnitRole::Turret, cells: &EXTRA_TURRETS, limit: None }
];

/// The upgrade pass, maze zone before corner zone. The mid-line is cheap
/// cover and never worth upgrading.
pub const UPGRADE_ORDER: [&[Point]; 5] = [
    &MAZE_WALLS,
    &MAZE_UPGRADE_TURRETS,
    &EXTRA_SUPPORTS,
    &CORNER_WALLS,
    &CORNER_UPGRADE_TURRETS
];
