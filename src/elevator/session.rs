use crate::elevator::planner::TripPlanner;
use crate::shared::{Direction, Floor, Trip};
use log::debug;

/**
 * Where the elevator is between rides.
 *
 * The current floor is unknown until the first ride; that ride seeds it from
 * the starting floor. Every later ride starts from where the previous one
 * ended, even when the passenger enters a different starting floor.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    current_floor: Floor,
    first_run: bool,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    pub fn new() -> Session {
        Session {
            current_floor: 0,
            first_run: true,
        }
    }

    pub fn get_current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn set_current_floor(&mut self, floor: Floor) {
        self.current_floor = floor;
    }

    pub fn is_first_run(&self) -> bool {
        self.first_run
    }

    pub fn mark_initialized(&mut self) {
        self.first_run = false;
    }

    /// Accepts the starting floor of a new ride.
    pub fn begin_trip(&mut self, starting_floor: Floor) {
        if self.is_first_run() {
            self.set_current_floor(starting_floor);
            self.mark_initialized();
        } else {
            debug!(
                "Carrying over current floor {} (starting floor {})",
                self.current_floor, starting_floor
            );
        }
    }

    pub fn ride(
        &mut self,
        planner: &TripPlanner,
        starting_floor: Floor,
        direction: Direction,
        requested_floors: &[Floor],
    ) -> Trip {
        self.begin_trip(starting_floor);

        let trip = planner.plan_trip(self.current_floor, starting_floor, direction, requested_floors);
        self.set_current_floor(trip.final_floor());
        trip
    }
}
