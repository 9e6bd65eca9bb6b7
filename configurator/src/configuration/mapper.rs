//! Configuration mapper.
//!
//! Runs the category queries against a snapshot and folds each result row
//! into a typed record. Also owns the identity query that locates the
//! configurable product.

use super::car::Car;
use super::records::{
    Ambient, DrivingAssistant, Engine, Headlights, OptionRecord, Paint, Safety, Seats,
    SteeringWheel, Transmission, Upholstery, Wheels,
};
use super::template::{Namespace, OptionFields};
use crate::constants::RDF_TYPE;
use crate::query::{Pattern, PatternElement, Query, QueryEngine};
use crate::store::Snapshot;

/// Class every configurable product is an instance of.
const PRODUCT_CLASS: &str = "Car";

/// Error returned by the mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapperError {
    /// No product instance has the requested identifier.
    IdentityNotFound { identifier: String },
}

impl std::fmt::Display for MapperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentityNotFound { identifier } => {
                write!(f, "no matching product instance: {identifier}")
            }
        }
    }
}

impl std::error::Error for MapperError {}

/// Typed view of the configuration categories in a snapshot.
pub struct ConfigurationMapper<'a> {
    engine: QueryEngine<'a>,
    namespace: Namespace,
}

impl<'a> ConfigurationMapper<'a> {
    /// Create a mapper over the car ontology namespace.
    #[must_use]
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self::with_namespace(snapshot, Namespace::default())
    }

    #[must_use]
    pub const fn with_namespace(snapshot: &'a Snapshot, namespace: Namespace) -> Self {
        Self {
            engine: QueryEngine::new(snapshot),
            namespace,
        }
    }

    #[must_use]
    pub const fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Locate the product instance and start a configuration for it.
    ///
    /// The identifier is the instance's local name in the namespace.
    ///
    /// # Errors
    ///
    /// Returns `MapperError::IdentityNotFound` if no instance of the product
    /// class has that identifier.
    pub fn resolve_product(&self, identifier: &str) -> Result<Car, MapperError> {
        let query = Query::new()
            .find("car")
            .where_pattern(Pattern::new(
                PatternElement::var("car"),
                PatternElement::iri(RDF_TYPE),
                PatternElement::Node(self.namespace.node(PRODUCT_CLASS)),
            ))
            .bind("car", self.namespace.node(identifier));

        let result = self.engine.execute(&query);
        let Some(car) = result.solutions().find_map(|row| row.get("car")) else {
            tracing::warn!(identifier, "product instance not found");
            return Err(MapperError::IdentityNotFound {
                identifier: identifier.to_owned(),
            });
        };

        tracing::debug!(identifier, "product instance resolved");
        Ok(Car::new(car.local_name()))
    }

    /// List every option of the category `R`, in discovery order.
    ///
    /// Instances missing a mandatory literal value are left out.
    #[must_use]
    pub fn options<R: OptionRecord>(&self) -> Vec<R> {
        let template = R::TEMPLATE;
        let result = self.engine.execute(&template.query(&self.namespace));

        let records: Vec<R> = result
            .solutions()
            .filter_map(OptionFields::from_solution)
            .filter_map(|fields| R::from_fields(&fields))
            .collect();

        tracing::debug!(
            category = template.class,
            rows = result.len(),
            records = records.len(),
            "category resolved"
        );
        records
    }

    #[must_use]
    pub fn engines(&self) -> Vec<Engine> {
        self.options()
    }

    #[must_use]
    pub fn paints(&self) -> Vec<Paint> {
        self.options()
    }

    #[must_use]
    pub fn wheels(&self) -> Vec<Wheels> {
        self.options()
    }

    #[must_use]
    pub fn headlights(&self) -> Vec<Headlights> {
        self.options()
    }

    #[must_use]
    pub fn transmissions(&self) -> Vec<Transmission> {
        self.options()
    }

    #[must_use]
    pub fn upholstery(&self) -> Vec<Upholstery> {
        self.options()
    }

    #[must_use]
    pub fn ambient_lighting(&self) -> Vec<Ambient> {
        self.options()
    }

    #[must_use]
    pub fn safety_packages(&self) -> Vec<Safety> {
        self.options()
    }

    #[must_use]
    pub fn steering_wheels(&self) -> Vec<SteeringWheel> {
        self.options()
    }

    #[must_use]
    pub fn seats(&self) -> Vec<Seats> {
        self.options()
    }

    #[must_use]
    pub fn driving_assistants(&self) -> Vec<DrivingAssistant> {
        self.options()
    }

    /// Resolve the product and pick the first option of every category.
    ///
    /// Categories without options stay unselected.
    ///
    /// # Errors
    ///
    /// Returns `MapperError::IdentityNotFound` if the product is missing.
    pub fn default_configuration(&self, identifier: &str) -> Result<Car, MapperError> {
        let mut car = self.resolve_product(identifier)?;

        if let Some(engine) = first(self.engines()) {
            car.set_engine(engine);
        }
        if let Some(transmission) = first(self.transmissions()) {
            car.set_transmission(transmission);
        }
        if let Some(paint) = first(self.paints()) {
            car.set_paint(paint);
        }
        if let Some(headlights) = first(self.headlights()) {
            car.set_headlights(headlights);
        }
        if let Some(wheels) = first(self.wheels()) {
            car.set_wheels(wheels);
        }
        if let Some(seat) = first(self.seats()) {
            car.add_seat(seat);
        }
        if let Some(upholstery) = first(self.upholstery()) {
            car.set_upholstery(upholstery);
        }
        if let Some(ambient) = first(self.ambient_lighting()) {
            car.set_ambient(ambient);
        }
        if let Some(steering_wheel) = first(self.steering_wheels()) {
            car.set_steering_wheel(steering_wheel);
        }
        if let Some(safety) = first(self.safety_packages()) {
            car.set_safety(safety);
        }
        if let Some(assistant) = first(self.driving_assistants()) {
            car.add_driving_assistant(assistant);
        }

        Ok(car)
    }
}

fn first<T>(options: Vec<T>) -> Option<T> {
    options.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TripleStore;
    use crate::types::{Node, Triple};

    fn ns() -> Namespace {
        Namespace::new("urn:car#")
    }

    fn snapshot(triples: &[(&str, &str, Node)]) -> Snapshot {
        let ns = ns();
        let mut store = TripleStore::new();
        for (subject, predicate, object) in triples {
            let predicate = if *predicate == "a" {
                Node::iri(RDF_TYPE)
            } else {
                ns.node(predicate)
            };
            store.insert(Triple::new(ns.node(subject), predicate, object.clone()));
        }
        store.freeze()
    }

    #[test]
    fn test_engine_model_falls_back_to_local_name() {
        let snapshot = snapshot(&[
            ("e1", "a", ns().node("Engine")),
            ("e1", "hasEnginePower", Node::literal("500HP")),
            ("e3", "a", ns().node("Engine")),
            ("e3", "engineHasModel", Node::literal("C220d")),
        ]);
        let mapper = ConfigurationMapper::with_namespace(&snapshot, ns());

        let engines = mapper.engines();
        assert_eq!(
            engines,
            vec![
                Engine {
                    model: "e1".to_owned(),
                    power: Some("500HP".to_owned()),
                    fuel_consumption: None,
                },
                Engine {
                    model: "C220d".to_owned(),
                    power: None,
                    fuel_consumption: None,
                },
            ]
        );
    }

    #[test]
    fn test_non_literal_mandatory_value_excludes_instance() {
        let snapshot = snapshot(&[
            ("p1", "a", ns().node("Paint")),
            ("p1", "hasPaintColor", Node::literal("Black")),
            ("p1", "hasPaintType", Node::literal("Matte")),
            ("p2", "a", ns().node("Paint")),
            ("p2", "hasPaintColor", ns().node("Red")),
            ("p2", "hasPaintType", Node::literal("Gloss")),
            ("p3", "a", ns().node("Paint")),
            ("p3", "hasPaintColor", Node::literal("White")),
        ]);
        let mapper = ConfigurationMapper::with_namespace(&snapshot, ns());

        assert_eq!(
            mapper.paints(),
            vec![Paint {
                color: "Black".to_owned(),
                paint_type: "Matte".to_owned(),
            }]
        );
    }

    #[test]
    fn test_non_literal_optional_value_is_absent() {
        let snapshot = snapshot(&[
            ("e1", "a", ns().node("Engine")),
            ("e1", "hasEnginePower", ns().node("SomePower")),
        ]);
        let mapper = ConfigurationMapper::with_namespace(&snapshot, ns());

        let engines = mapper.engines();
        assert_eq!(engines.len(), 1);
        assert!(engines[0].power.is_none());
    }

    #[test]
    fn test_resolve_product() {
        let snapshot = snapshot(&[
            ("ClasseCBerlina", "a", ns().node("Car")),
            ("ClasseG", "a", ns().node("Car")),
        ]);
        let mapper = ConfigurationMapper::with_namespace(&snapshot, ns());

        let car = mapper.resolve_product("ClasseCBerlina").expect("resolve");
        assert_eq!(car.model(), "ClasseCBerlina");

        let err = mapper.resolve_product("ClasseA").expect_err("missing");
        assert_eq!(
            err,
            MapperError::IdentityNotFound {
                identifier: "ClasseA".to_owned()
            }
        );
    }

    #[test]
    fn test_identity_requires_product_class() {
        let snapshot = snapshot(&[("ClasseCBerlina", "a", ns().node("Engine"))]);
        let mapper = ConfigurationMapper::with_namespace(&snapshot, ns());

        assert!(mapper.resolve_product("ClasseCBerlina").is_err());
    }

    #[test]
    fn test_default_configuration_picks_first_options() {
        let snapshot = snapshot(&[
            ("ClasseCBerlina", "a", ns().node("Car")),
            ("s1", "a", ns().node("Seats")),
            ("s1", "hasSeatOptional", Node::literal("Leather")),
            ("s2", "a", ns().node("Seats")),
            ("s2", "hasSeatOptional", Node::literal("Fabric")),
        ]);
        let mapper = ConfigurationMapper::with_namespace(&snapshot, ns());

        let car = mapper
            .default_configuration("ClasseCBerlina")
            .expect("configure");
        assert_eq!(car.interior().seats.len(), 1);
        assert_eq!(car.interior().seats[0].model, "s1");
        assert!(car.engine().is_none());
    }
}
