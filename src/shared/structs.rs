/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::InputError;

/***************************************/
/*       Public data structures        */
/***************************************/
pub type Floor = i64;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match *self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

impl FromStr for Direction {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "u" | "up" => Ok(Direction::Up),
            "d" | "down" => Ok(Direction::Down),
            _ => Err(InputError::InvalidDirection(s.to_string())),
        }
    }
}

/**
 * Outcome of a single ride.
 *
 * `visited` always starts with the floor the elevator was on when the ride
 * was requested and only grows through `Trip::visit`, so it is never empty.
 * `total_time` is a `u128`: a leg spans at most `2^64 - 1` floors and costs at
 * most `u32::MAX` per floor, and a ride sweeps the floor range at most three
 * times, so the sum cannot overflow.
 */
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    visited: Vec<Floor>,
    total_time: u128,
    #[serde(skip)]
    origin: Floor,
}

impl Trip {
    pub fn new(current_floor: Floor) -> Trip {
        Trip {
            visited: vec![current_floor],
            total_time: 0,
            origin: current_floor,
        }
    }

    pub fn visited(&self) -> &[Floor] {
        &self.visited
    }

    pub fn total_time(&self) -> u128 {
        self.total_time
    }

    pub fn final_floor(&self) -> Floor {
        self.visited.last().copied().unwrap_or(self.origin)
    }

    /// Moves to `floor`, charging `elapsed` for the leg.
    pub fn visit(&mut self, floor: Floor, elapsed: u128) {
        self.total_time += elapsed;
        self.visited.push(floor);
    }

    pub fn visited_as_text(&self) -> String {
        self.visited
            .iter()
            .map(|floor| floor.to_string())
            .collect::<Vec<String>>()
            .join(",")
    }
}
