use std::error::Error;

use engine::geometry::Point;
use input::json::{self, FrameOwner};

/// Append-only record of the cells where enemy units got through our edge,
/// in the order the engine reported them. Diagnostic only.
#[derive(Debug)]
pub struct BreachLog {
    cells: Vec<Point>
}

impl BreachLog {
    pub fn new() -> BreachLog {
        BreachLog { cells: Vec::new() }
    }

    /// Feeds one raw action frame through the breach filter. Breaches we
    /// caused on the opponent's edge are ignored; ones the opponent caused
    /// on ours are logged and recorded.
    pub fn record_from_frame(&mut self, frame: &str) -> Result<(), Box<Error>> {
        for breach in json::parse_action_frame(frame)? {
            if breach.owner == FrameOwner::Enemy {
                debug!("got scored on at {}", breach.cell);
                self.cells.push(breach.cell);
            }
        }
        Ok(())
    }

    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
