//! The configuration aggregate.
//!
//! A `Car` is created once from the identity query and then filled in by the
//! caller as options are picked. Single-choice slots are replaced on every
//! set; seats and driving assistants accumulate.

use std::fmt;

use serde::Serialize;

use super::records::{
    Ambient, DrivingAssistant, Engine, Headlights, Paint, Safety, Seats, SteeringWheel,
    Transmission, Upholstery, Wheels,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Exterior {
    pub paint: Option<Paint>,
    pub headlights: Option<Headlights>,
    pub wheels: Option<Wheels>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Interior {
    pub seats: Vec<Seats>,
    pub upholstery: Option<Upholstery>,
    pub ambient: Option<Ambient>,
    pub steering_wheel: Option<SteeringWheel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Optionals {
    pub safety: Option<Safety>,
    pub driving_assistants: Vec<DrivingAssistant>,
}

/// A car being configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    model: String,
    engine: Option<Engine>,
    transmission: Option<Transmission>,
    exterior: Exterior,
    interior: Interior,
    optionals: Optionals,
}

impl Car {
    /// Create an unconfigured car of the given model.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            engine: None,
            transmission: None,
            exterior: Exterior::default(),
            interior: Interior::default(),
            optionals: Optionals::default(),
        }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub const fn engine(&self) -> Option<&Engine> {
        self.engine.as_ref()
    }

    #[must_use]
    pub const fn transmission(&self) -> Option<&Transmission> {
        self.transmission.as_ref()
    }

    #[must_use]
    pub const fn exterior(&self) -> &Exterior {
        &self.exterior
    }

    #[must_use]
    pub const fn interior(&self) -> &Interior {
        &self.interior
    }

    #[must_use]
    pub const fn optionals(&self) -> &Optionals {
        &self.optionals
    }

    pub fn set_engine(&mut self, engine: Engine) {
        self.engine = Some(engine);
    }

    pub fn set_transmission(&mut self, transmission: Transmission) {
        self.transmission = Some(transmission);
    }

    pub fn set_paint(&mut self, paint: Paint) {
        self.exterior.paint = Some(paint);
    }

    pub fn set_headlights(&mut self, headlights: Headlights) {
        self.exterior.headlights = Some(headlights);
    }

    pub fn set_wheels(&mut self, wheels: Wheels) {
        self.exterior.wheels = Some(wheels);
    }

    pub fn set_upholstery(&mut self, upholstery: Upholstery) {
        self.interior.upholstery = Some(upholstery);
    }

    pub fn set_ambient(&mut self, ambient: Ambient) {
        self.interior.ambient = Some(ambient);
    }

    pub fn set_steering_wheel(&mut self, steering_wheel: SteeringWheel) {
        self.interior.steering_wheel = Some(steering_wheel);
    }

    pub fn add_seat(&mut self, seat: Seats) {
        self.interior.seats.push(seat);
    }

    pub fn set_safety(&mut self, safety: Safety) {
        self.optionals.safety = Some(safety);
    }

    pub fn add_driving_assistant(&mut self, assistant: DrivingAssistant) {
        self.optionals.driving_assistants.push(assistant);
    }
}

fn write_slot<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: Option<&T>,
) -> fmt::Result {
    match value {
        Some(value) => writeln!(f, "  {label}: {value}"),
        None => writeln!(f, "  {label}: not selected"),
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, label: &str, values: &[T]) -> fmt::Result {
    if values.is_empty() {
        return writeln!(f, "  {label}: not selected");
    }
    writeln!(f, "  {label}:")?;
    for value in values {
        writeln!(f, "    - {value}")?;
    }
    Ok(())
}

/// Multi-line summary of the configuration.
impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Car {}", self.model)?;
        write_slot(f, "Engine", self.engine.as_ref())?;
        write_slot(f, "Transmission", self.transmission.as_ref())?;
        write_slot(f, "Paint", self.exterior.paint.as_ref())?;
        write_slot(f, "Headlights", self.exterior.headlights.as_ref())?;
        write_slot(f, "Wheels", self.exterior.wheels.as_ref())?;
        write_list(f, "Seats", &self.interior.seats)?;
        write_slot(f, "Upholstery", self.interior.upholstery.as_ref())?;
        write_slot(f, "Ambient lighting", self.interior.ambient.as_ref())?;
        write_slot(f, "Steering wheel", self.interior.steering_wheel.as_ref())?;
        write_slot(f, "Safety", self.optionals.safety.as_ref())?;
        write_list(f, "Driving assistants", &self.optionals.driving_assistants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(model: &str, optional: &str) -> Seats {
        Seats {
            model: model.to_owned(),
            optional: optional.to_owned(),
        }
    }

    fn assistant(model: &str, kind: &str) -> DrivingAssistant {
        DrivingAssistant {
            model: model.to_owned(),
            assistant_type: kind.to_owned(),
        }
    }

    #[test]
    fn test_new_car_is_unconfigured() {
        let car = Car::new("ClasseCBerlina");
        assert_eq!(car.model(), "ClasseCBerlina");
        assert!(car.engine().is_none());
        assert!(car.transmission().is_none());
        assert_eq!(car.exterior(), &Exterior::default());
        assert!(car.interior().seats.is_empty());
        assert!(car.optionals().driving_assistants.is_empty());
    }

    #[test]
    fn test_singular_slots_are_replaced() {
        let mut car = Car::new("ClasseCBerlina");
        car.set_paint(Paint {
            color: "Black".to_owned(),
            paint_type: "Matte".to_owned(),
        });
        car.set_paint(Paint {
            color: "White".to_owned(),
            paint_type: "Metallic".to_owned(),
        });
        assert_eq!(
            car.exterior().paint.as_ref().map(|p| p.color.as_str()),
            Some("White")
        );
    }

    #[test]
    fn test_holds_multiple_seats_and_assistants() {
        let mut car = Car::new("ClasseCBerlina");
        car.add_seat(seat("LuxurySeats", "Leather"));
        car.add_seat(seat("SportSeats", "Heated"));
        car.add_driving_assistant(assistant("LaneKeep", "Lane keeping"));
        car.add_driving_assistant(assistant("ParkPilot", "Parking"));

        assert_eq!(car.interior().seats.len(), 2);
        assert_eq!(car.optionals().driving_assistants.len(), 2);
        assert_eq!(car.interior().seats[1].model, "SportSeats");
    }

    #[test]
    fn test_summary_lists_selections() {
        let mut car = Car::new("ClasseCBerlina");
        car.set_engine(Engine {
            model: "C220d".to_owned(),
            power: Some("500HP".to_owned()),
            fuel_consumption: None,
        });
        car.add_seat(seat("LuxurySeats", "Leather"));

        let summary = car.to_string();
        assert!(summary.starts_with("Car ClasseCBerlina\n"));
        assert!(summary.contains("  Engine: C220d, power 500HP\n"));
        assert!(summary.contains("  Transmission: not selected\n"));
        assert!(summary.contains("    - LuxurySeats: Leather\n"));
        assert!(summary.contains("  Driving assistants: not selected\n"));
    }

    #[test]
    fn test_serializes_nested_shape() {
        let mut car = Car::new("ClasseCBerlina");
        car.add_seat(seat("LuxurySeats", "Leather"));

        let json = serde_json::to_value(&car).expect("serialize");
        assert_eq!(json["model"], "ClasseCBerlina");
        assert!(json["engine"].is_null());
        assert_eq!(json["interior"]["seats"][0]["optional"], "Leather");
        assert_eq!(json["optionals"]["driving_assistants"], serde_json::json!([]));
    }
}
