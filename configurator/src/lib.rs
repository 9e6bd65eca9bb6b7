// Life of a configuration session:
// 1. An ontology source yields raw triples
// 2. The triples are bulk loaded into the store
// 3. Inference materializes subclass, type and subproperty facts
// 4. The store is frozen into a read-only snapshot
// 5. The mapper answers the identity query and one query per category
// 6. The caller folds the picked options into a `Car`
//
// System components:
//  - Triple store with SPO/POS/OSP indexes
//  - Forward-chaining reasoner
//  - Pattern query engine
//  - Template-driven configuration mapper

pub mod config;
pub mod configuration;
pub mod constants;
pub mod inference;
pub mod ontology;
pub mod query;
pub mod source;
pub mod store;
pub mod types;

mod e2e_tests;

pub use configuration::{Car, ConfigurationMapper, MapperError};
pub use ontology::{Ontology, OntologyError};
