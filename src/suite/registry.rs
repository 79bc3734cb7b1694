//! Append-only catalogue of suite descriptors and the run entry point.

use thiserror::Error;

use crate::output::Logger;

use super::descriptor::{Suite, SuiteDescriptor};
use super::runner::ErasedSuite;

/// Registration-time errors. These are programming errors, surfaced before
/// any run begins.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A suite with this name is already catalogued.
    #[error("suite '{0}' is already registered")]
    DuplicateSuite(String),
}

/// Ordered catalogue of suite descriptors.
///
/// Append-only, insertion order preserved; populated at startup, before any
/// run. The registry is an explicit value owned by the embedding code —
/// there is no process-wide instance.
///
/// # Example
///
/// ```rust,ignore
/// let mut registry = Registry::new();
/// registry.register(SuiteBuilder::<Sample>::new("Sample")
///     .case("ShouldWork", should_work)
///     .build())?;
///
/// let mut logger = ConsoleLogger::new();
/// let failures = registry.run(None, &mut logger);
/// ```
#[derive(Default)]
pub struct Registry {
    suites: Vec<Box<dyn ErasedSuite>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalogue a suite. Duplicate names are rejected: registration
    /// happens once per suite definition, at process start.
    pub fn register<S>(&mut self, descriptor: SuiteDescriptor<S>) -> Result<(), RegistryError>
    where
        S: Suite + Default + 'static,
    {
        if self.suites.iter().any(|s| s.name() == descriptor.name()) {
            return Err(RegistryError::DuplicateSuite(descriptor.name().to_string()));
        }
        self.suites.push(Box::new(descriptor));
        Ok(())
    }

    /// Catalogued suite names, in registration order. Includes inactive
    /// suites.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.suites.iter().map(|s| s.name())
    }

    /// Number of catalogued suites.
    pub fn len(&self) -> usize {
        self.suites.len()
    }

    /// Whether the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    /// Run catalogued suites and return the total failure tally
    /// (0 = fully green).
    ///
    /// `None` runs every active suite in registration order. `Some(name)`
    /// runs only the exact name match; a filter matching no catalogued
    /// suite is itself a run failure ("no matching suite"), without
    /// touching any suite instance. Inactive suites are silent in
    /// execution either way.
    ///
    /// Test-level conditions never propagate past this call; its only
    /// outputs are the returned tally and the logger stream.
    pub fn run(&self, filter: Option<&str>, logger: &mut dyn Logger) -> usize {
        let mut failures = 0;
        let mut matched = false;

        for suite in &self.suites {
            if let Some(name) = filter {
                if suite.name() != name {
                    continue;
                }
            }
            matched = true;
            if !suite.is_active() {
                continue;
            }
            failures += suite.execute(logger);
        }

        if let Some(name) = filter {
            if !matched {
                logger.log(&format!("no matching suite: {}", name));
                failures += 1;
            }
        }

        failures
    }
}
