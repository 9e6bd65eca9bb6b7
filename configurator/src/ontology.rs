//! Ontology bootstrap.
//!
//! Loads a source into a fresh store, runs inference once and freezes the
//! result. A failed load never produces a store, and the returned `Ontology`
//! is read-only from then on.

use crate::inference::{InferenceError, InferenceReport, Reasoner};
use crate::source::{LoadError, TripleSource};
use crate::store::{Snapshot, TripleStore};

/// Error returned when the ontology cannot be brought up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OntologyError {
    /// The source could not be loaded.
    Load(LoadError),
    /// Inference did not reach a fixed point.
    Inference(InferenceError),
}

impl std::fmt::Display for OntologyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(e) => write!(f, "load error: {e}"),
            Self::Inference(e) => write!(f, "inference error: {e}"),
        }
    }
}

impl std::error::Error for OntologyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Inference(e) => Some(e),
        }
    }
}

impl From<LoadError> for OntologyError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

impl From<InferenceError> for OntologyError {
    fn from(e: InferenceError) -> Self {
        Self::Inference(e)
    }
}

/// A loaded, closed knowledge base.
#[derive(Debug)]
pub struct Ontology {
    snapshot: Snapshot,
    loaded: usize,
    report: InferenceReport,
}

impl Ontology {
    /// Load `source` and close it under the default reasoner.
    ///
    /// # Errors
    ///
    /// Returns `OntologyError::Load` if the source fails, or
    /// `OntologyError::Inference` if inference does not terminate.
    pub fn bootstrap(source: &dyn TripleSource) -> Result<Self, OntologyError> {
        Self::bootstrap_with(source, Reasoner::default())
    }

    /// Load `source` and close it under `reasoner`.
    ///
    /// # Errors
    ///
    /// See [`Ontology::bootstrap`].
    pub fn bootstrap_with(
        source: &dyn TripleSource,
        reasoner: Reasoner,
    ) -> Result<Self, OntologyError> {
        let location = source.describe();
        tracing::info!(source = %location, "loading ontology");

        let triples = source.load().inspect_err(|e| {
            tracing::error!(source = %location, error = %e, "ontology load failed");
        })?;

        let mut store = TripleStore::new();
        let loaded = store.extend(triples);
        tracing::debug!(loaded, "ontology facts stored");

        let report = reasoner.run(&mut store)?;
        let snapshot = store.freeze();

        tracing::info!(
            source = %location,
            loaded,
            inferred = report.inferred,
            passes = report.passes,
            total = snapshot.len(),
            "ontology ready"
        );

        Ok(Self {
            snapshot,
            loaded,
            report,
        })
    }

    /// The frozen store.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Distinct facts read from the source.
    #[must_use]
    pub const fn loaded(&self) -> usize {
        self.loaded
    }

    #[must_use]
    pub const fn report(&self) -> InferenceReport {
        self.report
    }

    /// Give up the wrapper and keep only the snapshot.
    #[must_use]
    pub fn into_snapshot(self) -> Snapshot {
        self.snapshot
    }
}
