//! Pattern query engine over a frozen snapshot.
//!
//! Supports:
//! - Pattern matching with variables
//! - WHERE clauses (conjunction of patterns)
//! - OPTIONAL clauses (left join semantics)
//! - Pre-bound variables (equality restriction)
//! - Filters (predicate functions)
//!
//! # Example
//!
//! ```ignore
//! let snapshot = store.freeze();
//! let engine = QueryEngine::new(&snapshot);
//!
//! let query = Query::new()
//!     .find("engine")
//!     .find("power")
//!     .where_pattern(Pattern::new(
//!         PatternElement::var("engine"),
//!         PatternElement::iri(RDF_TYPE),
//!         PatternElement::iri("urn:car#Engine"),
//!     ))
//!     .optional(Pattern::new(
//!         PatternElement::var("engine"),
//!         PatternElement::iri("urn:car#hasEnginePower"),
//!         PatternElement::var("power"),
//!     ));
//!
//! for row in engine.execute(&query).solutions() {
//!     println!("{:?} {:?}", row.get("engine"), row.literal("power"));
//! }
//! ```

pub mod context;
pub mod engine;
pub mod types;

pub use context::Binding;
pub use engine::QueryEngine;
pub use types::{
    Filter, Pattern, PatternElement, Query, QueryResult, QueryRow, Solution, Variable,
};
