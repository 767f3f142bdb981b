//! Toolhead Motion
//!
//! Positions, parsed moves, and the running state threaded through the
//! simulation one move at a time.

use serde::Serialize;

use super::ZeroFeedPolicy;
use crate::parser::{self, Command, ParsedLine};

/// Absolute toolhead and extruder position in millimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub e: f64,
}

impl Position {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        e: 0.0,
    };

    /// Straight-line XYZ distance. The extruder axis is not travel.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        dx.hypot(dy).hypot(dz)
    }
}

/// Axis and feed words of one `G0`/`G1` line. `None` means "unchanged".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Move {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub e: Option<f64>,
    pub feed_rate: Option<f64>,
}

impl Move {
    /// Parse a line, returning `None` unless it is a linear move.
    pub fn parse(line: &str) -> Option<Self> {
        if !parser::is_linear_move(line) {
            return None;
        }

        match parser::parse_line(line) {
            ParsedLine::Command(command) => Some(Self::from_command(&command)),
            ParsedLine::Comment(_) | ParsedLine::Empty => None,
        }
    }

    pub fn from_command(command: &Command<'_>) -> Self {
        Self {
            x: command.value('X'),
            y: command.value('Y'),
            z: command.value('Z'),
            e: command.value('E'),
            feed_rate: command.value('F'),
        }
    }

    /// Where this move ends when started from `from`.
    pub fn target(&self, from: &Position) -> Position {
        Position {
            x: self.x.unwrap_or(from.x),
            y: self.y.unwrap_or(from.y),
            z: self.z.unwrap_or(from.z),
            e: self.e.unwrap_or(from.e),
        }
    }
}

/// Accumulator for the simulation fold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub position: Position,
    /// Current feed rate in mm/min
    pub feed_rate: f64,
    /// Elapsed time in seconds
    pub elapsed: f64,
    /// XYZ travel in millimetres
    pub distance: f64,
    pub moves: usize,
}

impl MotionState {
    pub fn new(feed_rate: f64) -> Self {
        Self {
            position: Position::ORIGIN,
            feed_rate,
            elapsed: 0.0,
            distance: 0.0,
            moves: 0,
        }
    }

    /// Execute one move and return the resulting state.
    pub fn step(self, mv: &Move, policy: ZeroFeedPolicy) -> Self {
        let feed_rate = match mv.feed_rate {
            Some(requested) => policy.next_feed_rate(self.feed_rate, requested),
            None => self.feed_rate,
        };

        let target = mv.target(&self.position);
        let mut distance = self.position.distance_to(&target);

        // mm / (mm/min) = min
        let mut elapsed = if feed_rate > 0.0 {
            self.elapsed + distance / feed_rate * 60.0
        } else {
            self.elapsed
        };

        // Only the position advances when a move overflows.
        if !distance.is_finite()
            || !elapsed.is_finite()
            || !(self.distance + distance).is_finite()
        {
            log::warn!(
                "Move from {:?} to {:?} overflows, not counting its time or distance",
                self.position,
                target
            );
            distance = 0.0;
            elapsed = self.elapsed;
        }

        Self {
            position: target,
            feed_rate,
            elapsed,
            distance: self.distance + distance,
            moves: self.moves + 1,
        }
    }
}
