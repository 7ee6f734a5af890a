/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::info;
use serde::Serialize;
use std::io::{BufRead, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::console::input::{parse_direction, parse_floors, parse_int};
use crate::elevator::{Session, TripPlanner};
use crate::error::{InputError, SimulatorError};
use crate::shared::{Floor, Trip};

const STARTING_FLOOR_PROMPT: &str = "Please enter your starting floor. (int: e.g. 1): ";
const DIRECTION_PROMPT: &str = "Which direction are you going? (char: u or d): ";
const FLOORS_PROMPT: &str = "What floors are you visiting? (int[]: e.g. [1, 3, 15]): ";

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TripReport<'a> {
    #[serde(flatten)]
    trip: &'a Trip,
    current_floor: Floor,
}

/**
 * Interactive loop around the trip planner.
 *
 * Each round asks for a starting floor, a direction and the floors to visit,
 * re-asking until the answer parses, then rides and prints the report. The
 * loop ends when the input is exhausted.
 *
 * # Fields
 * - `input`:       Where answers are read from, one per line.
 * - `output`:      Where prompts and reports are written.
 * - `session`:     Carries the current floor from one round to the next.
 * - `planner`:     Orders the floors and times the trip.
 * - `format`:      How trip reports are printed.
 */
pub struct Console<R, W> {
    input: R,
    output: W,
    session: Session,
    planner: TripPlanner,
    format: ReportFormat,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, planner: TripPlanner, format: ReportFormat) -> Console<R, W> {
        Console {
            input,
            output,
            session: Session::new(),
            planner,
            format,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<(), SimulatorError> {
        while let Some(trip) = self.run_round()? {
            info!("Ride finished on floor {} after {}", trip.final_floor(), trip.total_time());
        }
        info!("End of input, leaving the elevator");
        Ok(())
    }

    /// Runs one round. Returns `None` if the input ended before the round was complete.
    pub fn run_round(&mut self) -> Result<Option<Trip>, SimulatorError> {
        let starting_floor = match self.ask(STARTING_FLOOR_PROMPT, parse_int)? {
            Some(floor) => floor,
            None => return Ok(None),
        };
        let direction = match self.ask(DIRECTION_PROMPT, parse_direction)? {
            Some(direction) => direction,
            None => return Ok(None),
        };
        let floors = match self.ask(FLOORS_PROMPT, parse_floors)? {
            Some(floors) => floors,
            None => return Ok(None),
        };

        writeln!(self.output, "*Ding* Here we go!")?;
        let trip = self.session.ride(&self.planner, starting_floor, direction, &floors);
        self.report(&trip)?;

        Ok(Some(trip))
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> Result<T, InputError>,
    ) -> Result<Option<T>, SimulatorError> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            match parse(line.trim_end_matches(['\r', '\n'])) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    info!("Rejected input {:?}: {:?}", line.trim_end(), e);
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    fn report(&mut self, trip: &Trip) -> Result<(), SimulatorError> {
        let current_floor = self.session.get_current_floor();

        match self.format {
            ReportFormat::Text => {
                writeln!(self.output, "Total Travel Time: {}", trip.total_time())?;
                writeln!(self.output, "Floors Visited: {}", trip.visited_as_text())?;
                writeln!(self.output, "Current Floor: {}", current_floor)?;
                writeln!(self.output, "\n\n What fun, ready for another ride?\n\n")?;
            }
            ReportFormat::Json => {
                let report = TripReport { trip, current_floor };
                writeln!(self.output, "{}", serde_json::to_string(&report)?)?;
            }
        }

        Ok(())
    }
}
