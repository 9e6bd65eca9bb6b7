// Forbid unwrap() in production code to prevent panics from malformed ontologies.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

use std::fmt::Display;

use configurator::config::ConfiguratorConfig;
use configurator::configuration::{Car, ConfigurationMapper, MapperError, Namespace};
use configurator::inference::Reasoner;
use configurator::ontology::Ontology;
use configurator::source::FileSource;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "configurator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match ConfiguratorConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Loaded configuration: ontology_path={}, product_id={}, max_inference_passes={}",
        config.ontology_path.display(),
        config.product_id,
        config.max_inference_passes
    );

    let source = FileSource::new(&config.ontology_path);
    let ontology =
        match Ontology::bootstrap_with(&source, Reasoner::new(config.max_inference_passes)) {
            Ok(ontology) => ontology,
            Err(e) => {
                tracing::error!("Failed to load ontology: {e}");
                std::process::exit(1);
            }
        };

    let mapper =
        ConfigurationMapper::with_namespace(ontology.snapshot(), Namespace::new(&config.namespace));

    let (report, car) = match session_report(&mapper, &config.product_id) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Failed to resolve product: {e}");
            std::process::exit(1);
        }
    };

    print!("{report}");
    match serde_json::to_string_pretty(&car) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!("Failed to serialize configuration: {e}");
            std::process::exit(1);
        }
    }
}

/// Resolve the product, then list every category and the default picks.
///
/// Nothing is rendered unless the product exists.
fn session_report(
    mapper: &ConfigurationMapper<'_>,
    product_id: &str,
) -> Result<(String, Car), MapperError> {
    let car = mapper.default_configuration(product_id)?;

    let mut report = String::new();
    report.push_str(&render_options("Engines", &mapper.engines()));
    report.push_str(&render_options("Transmissions", &mapper.transmissions()));
    report.push_str(&render_options("Paints", &mapper.paints()));
    report.push_str(&render_options("Headlights", &mapper.headlights()));
    report.push_str(&render_options("Wheels", &mapper.wheels()));
    report.push_str(&render_options("Seats", &mapper.seats()));
    report.push_str(&render_options("Upholstery", &mapper.upholstery()));
    report.push_str(&render_options("Ambient lighting", &mapper.ambient_lighting()));
    report.push_str(&render_options("Steering wheels", &mapper.steering_wheels()));
    report.push_str(&render_options("Safety packages", &mapper.safety_packages()));
    report.push_str(&render_options("Driving assistants", &mapper.driving_assistants()));
    report.push_str(&format!("{car}\n"));

    Ok((report, car))
}

fn render_options<T: Display>(title: &str, options: &[T]) -> String {
    let mut section = format!("{title} ({}):\n", options.len());
    for (index, option) in options.iter().enumerate() {
        section.push_str(&format!("  {}. {option}\n", index + 1));
    }
    section.push('\n');
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use configurator::constants::{CAR_NAMESPACE, RDF_TYPE};
    use configurator::source::MemorySource;
    use configurator::types::{Node, Triple};

    fn car(local: &str) -> Node {
        Node::iri(format!("{CAR_NAMESPACE}{local}"))
    }

    fn sample() -> Ontology {
        Ontology::bootstrap(&MemorySource::new(vec![
            Triple::new(car("ClasseCBerlina"), Node::iri(RDF_TYPE), car("Car")),
            Triple::new(car("C220d"), Node::iri(RDF_TYPE), car("Engine")),
            Triple::new(car("C220d"), car("hasEnginePower"), Node::literal("200HP")),
        ]))
        .expect("bootstrap")
    }

    #[test]
    fn test_unknown_product_renders_nothing() {
        let ontology = sample();
        let mapper = ConfigurationMapper::new(ontology.snapshot());

        let err = session_report(&mapper, "ClasseG").expect_err("unknown product");
        assert_eq!(
            err,
            MapperError::IdentityNotFound {
                identifier: "ClasseG".to_owned()
            }
        );
    }

    #[test]
    fn test_report_lists_categories_then_configuration() {
        let ontology = sample();
        let mapper = ConfigurationMapper::new(ontology.snapshot());

        let (report, car) = session_report(&mapper, "ClasseCBerlina").expect("report");
        assert_eq!(car.model(), "ClasseCBerlina");
        assert!(report.starts_with("Engines (1):\n  1. C220d, power 200HP\n"));
        assert!(report.contains("Paints (0):\n"));

        let listing_end = report.find("Driving assistants").expect("last category");
        let summary_start = report.find("Car ClasseCBerlina").expect("summary");
        assert!(listing_end < summary_start);
    }
}
