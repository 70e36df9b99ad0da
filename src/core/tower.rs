use crate::adapters::flight::Flight;
use crate::core::airport::Airport;
use crate::domain::ports::{PlaneRef, WeatherSource};
use crate::utils::error::{AirportError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A single instruction from the control tower.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Land(String),
    TakeOff(Option<String>),
    Weather,
    Status,
}

impl FromStr for Command {
    type Err = AirportError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let (verb, callsign) = match input.split_once(':') {
            Some((verb, callsign)) => (verb.trim(), Some(callsign.trim())),
            None => (input, None),
        };

        let parse_error = |reason: &str| AirportError::CommandParseError {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        match (verb.to_ascii_lowercase().as_str(), callsign) {
            ("land", Some(cs)) if !cs.is_empty() => Ok(Command::Land(cs.to_string())),
            ("land", _) => Err(parse_error("landing needs a call sign")),
            ("take-off" | "takeoff", None) => Ok(Command::TakeOff(None)),
            ("take-off" | "takeoff", Some(cs)) if !cs.is_empty() => {
                Ok(Command::TakeOff(Some(cs.to_string())))
            }
            ("take-off" | "takeoff", Some(_)) => Err(parse_error("empty call sign")),
            ("weather", None) => Ok(Command::Weather),
            ("status", None) => Ok(Command::Status),
            _ => Err(parse_error("unknown command")),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Land(cs) => write!(f, "land:{}", cs),
            Command::TakeOff(Some(cs)) => write!(f, "take-off:{}", cs),
            Command::TakeOff(None) => f.write_str("take-off"),
            Command::Weather => f.write_str("weather"),
            Command::Status => f.write_str("status"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Ok { detail: String },
    Refused { reason: String },
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub command: String,
    pub outcome: Outcome,
    pub occupancy: usize,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (mark, text) = match &self.outcome {
            Outcome::Ok { detail } => ("✅", detail),
            Outcome::Refused { reason } => ("❌", reason),
        };
        write!(
            f,
            "[{}] {:<16} {} {} ({} on the ground)",
            self.at.format("%H:%M:%S"),
            self.command,
            mark,
            text,
            self.occupancy
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub landed: usize,
    pub departed: usize,
    pub refused: usize,
}

#[derive(Debug, Serialize)]
pub struct FlightReport<'a> {
    pub airport: &'a str,
    pub capacity: usize,
    pub occupancy: usize,
    pub summary: Summary,
    pub entries: &'a [LogEntry],
}

/// Runs tower commands against one airport and keeps the flight log.
pub struct Tower<W: WeatherSource> {
    airport: Airport<W>,
    flights: HashMap<String, Arc<Flight>>,
    log: Vec<LogEntry>,
    summary: Summary,
}

impl<W: WeatherSource> Tower<W> {
    pub fn new(airport: Airport<W>) -> Self {
        Self {
            airport,
            flights: HashMap::new(),
            log: Vec::new(),
            summary: Summary::default(),
        }
    }

    pub fn airport(&self) -> &Airport<W> {
        &self.airport
    }

    pub fn flight(&self, callsign: &str) -> Option<&Arc<Flight>> {
        self.flights.get(callsign)
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Runs one command. Airport refusals are recorded in the log; only
    /// non-traffic failures are returned as errors.
    pub fn execute(&mut self, command: Command) -> Result<&LogEntry> {
        let outcome = match self.dispatch(&command) {
            Ok(detail) => Outcome::Ok { detail },
            Err(e) if e.is_refusal() => {
                self.summary.refused += 1;
                Outcome::Refused {
                    reason: e.to_string(),
                }
            }
            Err(e) => return Err(e),
        };

        self.log.push(LogEntry {
            at: Utc::now(),
            command: command.to_string(),
            outcome,
            occupancy: self.airport.len(),
        });
        Ok(&self.log[self.log.len() - 1])
    }

    /// Parses the whole script before running any of it.
    pub fn run_script<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<&[LogEntry]> {
        let commands = lines
            .iter()
            .map(|line| line.as_ref().parse::<Command>())
            .collect::<Result<Vec<_>>>()?;

        tracing::info!("🗼 Running {} tower commands", commands.len());
        for command in commands {
            self.execute(command)?;
        }
        Ok(&self.log)
    }

    pub fn report(&self) -> FlightReport<'_> {
        FlightReport {
            airport: self.airport.name(),
            capacity: self.airport.capacity(),
            occupancy: self.airport.len(),
            summary: self.summary,
            entries: &self.log,
        }
    }

    fn dispatch(&mut self, command: &Command) -> Result<String> {
        match command {
            Command::Land(callsign) => {
                let flight = self.known_or_new(callsign);
                self.airport.land(Arc::clone(&flight) as PlaneRef)?;
                // Only flights that have actually landed are registered
                self.flights.entry(callsign.clone()).or_insert(flight);
                self.summary.landed += 1;
                Ok(format!("{} landed", callsign))
            }
            Command::TakeOff(callsign) => {
                // An unknown call sign gets a throwaway flight so the airport
                // still reports empty and weather refusals first.
                let requested: Option<PlaneRef> = callsign
                    .as_deref()
                    .map(|cs| -> PlaneRef { self.known_or_new(cs) });
                let departed = self.airport.take_off(requested.as_ref())?;
                self.summary.departed += 1;
                Ok(format!("{} departed", self.callsign_of(&departed)))
            }
            Command::Weather => Ok(format!("weather is {}", self.airport.local_weather())),
            Command::Status => {
                let grounded: Vec<&str> = self
                    .airport
                    .planes()
                    .iter()
                    .map(|plane| self.callsign_of(plane))
                    .collect();
                Ok(format!(
                    "{}/{} stands taken: [{}]",
                    grounded.len(),
                    self.airport.capacity(),
                    grounded.join(", ")
                ))
            }
        }
    }

    fn known_or_new(&self, callsign: &str) -> Arc<Flight> {
        self.flights
            .get(callsign)
            .cloned()
            .unwrap_or_else(|| Arc::new(Flight::new(callsign)))
    }

    fn callsign_of(&self, plane: &PlaneRef) -> &str {
        self.flights
            .values()
            .find(|flight| std::ptr::addr_eq(Arc::as_ptr(flight), Arc::as_ptr(plane)))
            .map(|flight| flight.callsign())
            .unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Weather;

    fn sunny_tower(capacity: usize) -> Tower<Weather> {
        Tower::new(Airport::with_weather(capacity, Weather::Sunny).named("Test Field"))
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "land:BA1".parse::<Command>().unwrap(),
            Command::Land("BA1".to_string())
        );
        assert_eq!("take-off".parse::<Command>().unwrap(), Command::TakeOff(None));
        assert_eq!(
            " TakeOff: EZY2 ".parse::<Command>().unwrap(),
            Command::TakeOff(Some("EZY2".to_string()))
        );
        assert_eq!("weather".parse::<Command>().unwrap(), Command::Weather);
        assert_eq!("status".parse::<Command>().unwrap(), Command::Status);
    }

    #[test]
    fn test_parse_rejects_bad_commands() {
        for bad in ["land", "land:", "take-off:", "hover", "weather:now", ""] {
            let err = bad.parse::<Command>().unwrap_err();
            assert!(
                matches!(err, AirportError::CommandParseError { .. }),
                "expected parse error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_command_display_round_trips_text() {
        for text in ["land:BA1", "take-off", "take-off:BA1", "weather", "status"] {
            assert_eq!(text.parse::<Command>().unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_execute_records_refusals() {
        let mut tower = sunny_tower(1);
        tower.execute(Command::Land("BA1".to_string())).unwrap();
        let entry = tower.execute(Command::Land("BA2".to_string())).unwrap();

        assert_eq!(
            entry.outcome,
            Outcome::Refused {
                reason: "airport is full".to_string()
            }
        );
        assert_eq!(entry.occupancy, 1);
        assert_eq!(
            tower.summary(),
            Summary {
                landed: 1,
                departed: 0,
                refused: 1
            }
        );
    }

    #[test]
    fn test_take_off_by_callsign_reaches_same_flight() {
        let mut tower = sunny_tower(6);
        tower
            .run_script(&["land:BA1", "land:BA2", "take-off:BA1"])
            .unwrap();

        let ba1 = tower.flight("BA1").unwrap();
        let ba2 = tower.flight("BA2").unwrap();
        assert_eq!(ba1.take_offs(), 1);
        assert_eq!(ba2.take_offs(), 0);
        assert!(ba2.is_grounded());
        assert_eq!(tower.airport().len(), 1);

        let last = tower.log().last().unwrap();
        assert_eq!(
            last.outcome,
            Outcome::Ok {
                detail: "BA1 departed".to_string()
            }
        );
    }

    #[test]
    fn test_status_lists_grounded_flights_in_order() {
        let mut tower = sunny_tower(4);
        tower.run_script(&["land:A", "land:B", "status"]).unwrap();

        let entry = tower.log().last().unwrap();
        assert_eq!(
            entry.outcome,
            Outcome::Ok {
                detail: "2/4 stands taken: [A, B]".to_string()
            }
        );
    }

    #[test]
    fn test_script_parse_error_runs_nothing() {
        let mut tower = sunny_tower(6);
        let err = tower.run_script(&["land:BA1", "loop-the-loop"]).unwrap_err();

        assert!(matches!(err, AirportError::CommandParseError { .. }));
        assert!(tower.log().is_empty());
        assert!(tower.airport().is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let mut tower = sunny_tower(2);
        tower.run_script(&["land:BA1", "weather"]).unwrap();

        let json = serde_json::to_value(tower.report()).unwrap();
        assert_eq!(json["airport"], "Test Field");
        assert_eq!(json["summary"]["landed"], 1);
        assert_eq!(json["entries"][0]["outcome"]["status"], "ok");
        assert_eq!(json["entries"][1]["outcome"]["detail"], "weather is sunny");
    }
}
