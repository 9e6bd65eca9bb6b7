//! Typed configuration categories and the `Car` aggregate they feed.

pub mod car;
pub mod mapper;
pub mod records;
pub mod template;

pub use car::{Car, Exterior, Interior, Optionals};
pub use mapper::{ConfigurationMapper, MapperError};
pub use records::{
    Ambient, DrivingAssistant, Engine, Headlights, OptionRecord, Paint, Safety, Seats,
    SteeringWheel, Transmission, Upholstery, Wheels,
};
pub use template::{CategoryTemplate, Namespace, OptionFields};
