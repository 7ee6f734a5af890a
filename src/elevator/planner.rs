use crate::shared::{Direction, Floor, Trip};
use log::{debug, trace};
use std::collections::BTreeSet;

pub const TRAVEL_TIME_PER_FLOOR: u32 = 10;

/**
 * Plans the order in which requested floors are visited and the time it takes.
 *
 * The planner holds no session state; the caller passes the floor the
 * elevator is on and applies the resulting `Trip` itself.
 *
 * # Visiting policy
 * Requests are split into the floors above and below the working position.
 * The group in the chosen direction is served first, then the other group.
 * Both groups are served nearest-first, so the elevator never doubles back
 * inside a group: ascending for the floors above, descending for the floors
 * below. A request for the working position itself is already served and is
 * dropped.
 *
 * # Fields
 * - `travel_time_per_floor`:   Time units charged for each floor travelled.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripPlanner {
    travel_time_per_floor: u32,
}

impl Default for TripPlanner {
    fn default() -> Self {
        TripPlanner::new(TRAVEL_TIME_PER_FLOOR)
    }
}

impl TripPlanner {
    pub fn new(travel_time_per_floor: u32) -> TripPlanner {
        TripPlanner {
            travel_time_per_floor,
        }
    }

    pub fn travel_time_per_floor(&self) -> u32 {
        self.travel_time_per_floor
    }

    /// Exact for any pair of floors: `(2^64 - 1) * u32::MAX` fits in a `u128`.
    pub fn travel_time(&self, from: Floor, to: Floor) -> u128 {
        u128::from(from.abs_diff(to)) * u128::from(self.travel_time_per_floor)
    }

    pub fn plan_trip(
        &self,
        current_floor: Floor,
        starting_floor: Floor,
        direction: Direction,
        requested_floors: &[Floor],
    ) -> Trip {
        let mut trip = Trip::new(current_floor);

        // Reposition to where the passenger is waiting
        if current_floor != starting_floor {
            self.visit(&mut trip, starting_floor);
        }
        let position = starting_floor;

        let requests: BTreeSet<Floor> = requested_floors.iter().copied().collect();
        let first = self.group(&requests, position, direction);
        let second = self.group(&requests, position, direction.opposite());

        for floor in first.into_iter().chain(second) {
            self.visit(&mut trip, floor);
        }

        debug!(
            "Planned trip from {} via {} going {}: {:?} in {}",
            current_floor, starting_floor, direction, trip.visited(), trip.total_time()
        );
        trip
    }

    /// Floors strictly on the `direction` side of `position`, nearest first.
    fn group(&self, requests: &BTreeSet<Floor>, position: Floor, direction: Direction) -> Vec<Floor> {
        match direction {
            Direction::Up => requests
                .iter()
                .copied()
                .filter(|&floor| floor > position)
                .collect(),
            Direction::Down => requests
                .iter()
                .rev()
                .copied()
                .filter(|&floor| floor < position)
                .collect(),
        }
    }

    fn visit(&self, trip: &mut Trip, floor: Floor) {
        let elapsed = self.travel_time(trip.final_floor(), floor);
        trace!("{} -> {} (+{})", trip.final_floor(), floor, elapsed);
        trip.visit(floor, elapsed);
    }
}
