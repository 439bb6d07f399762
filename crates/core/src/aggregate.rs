//! Per-run accumulation of canonical records, grouped by origin.
//!
//! An [`Aggregator`] is constructed fresh for every run and owns the only
//! mutable state of the engine. It unions records by their identity key
//! and leaves all output ordering to the emitters.

use crate::error::{HintforgeError, Result};
use crate::model::{Access, Entrypoint, Initialization, LinkSet, ProxyExtraction};
use crate::origin::Origin;
use hintforge_api::{AccessKind, InitPhase};
use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeSet;
use tracing::warn;

/// Link state of one origin. A single link-all assertion suppresses the
/// per-type enumeration for good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAccumulation {
    All,
    Types(IndexSet<String>),
}

/// Resource pattern buckets of one origin, deduplicated across
/// declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceAccumulation {
    pub includes: IndexSet<String>,
    pub excludes: IndexSet<String>,
    pub bundles: IndexSet<String>,
}

impl ResourceAccumulation {
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty() && self.bundles.is_empty()
    }
}

/// Everything one origin accumulated over a run.
#[derive(Debug, Clone, Default)]
pub struct OriginBundle {
    pub reflection: IndexMap<String, BTreeSet<AccessKind>>,
    pub jni: IndexMap<String, BTreeSet<AccessKind>>,
    pub initialization: IndexMap<String, InitPhase>,
    pub link: Option<LinkAccumulation>,
    pub proxy_configurations: Vec<crate::model::ProxyConfiguration>,
    pub proxy_files: IndexSet<String>,
    pub proxy_resources: IndexSet<String>,
    pub resources: ResourceAccumulation,
    pub entrypoint: Option<Entrypoint>,
    pub options: IndexSet<String>,
}

impl OriginBundle {
    /// The explicit "nothing to emit" signal for an origin.
    pub fn is_empty(&self) -> bool {
        self.reflection.is_empty()
            && self.jni.is_empty()
            && self.initialization.is_empty()
            && self.link.is_none()
            && self.proxy_configurations.is_empty()
            && self.proxy_files.is_empty()
            && self.proxy_resources.is_empty()
            && self.resources.is_empty()
            && self.entrypoint.is_none()
            && self.options.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct Aggregator {
    bundles: IndexMap<Origin, OriginBundle>,
    entrypoint: Option<Entrypoint>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    fn bundle(&mut self, origin: &Origin) -> &mut OriginBundle {
        self.bundles.entry(origin.clone()).or_default()
    }

    pub fn add_reflection(&mut self, origin: &Origin, records: Vec<Access>) {
        if records.is_empty() {
            return;
        }
        let bundle = self.bundle(origin);
        union_access(&mut bundle.reflection, records);
    }

    pub fn add_jni(&mut self, origin: &Origin, records: Vec<Access>) {
        if records.is_empty() {
            return;
        }
        let bundle = self.bundle(origin);
        union_access(&mut bundle.jni, records);
    }

    /// Same class asserted at two phases resolves last-write-wins; the
    /// conflict is surfaced as a warning.
    pub fn add_initialization(&mut self, origin: &Origin, records: Vec<Initialization>) {
        if records.is_empty() {
            return;
        }
        let bundle = self.bundle(origin);
        for record in records {
            if let Some(previous) = bundle
                .initialization
                .insert(record.class_name.clone(), record.phase)
            {
                if previous != record.phase {
                    warn!(
                        class = %record.class_name,
                        "initialization phase conflict: {previous:?} overridden by {:?}",
                        record.phase
                    );
                }
            }
        }
    }

    pub fn add_link(&mut self, origin: &Origin, link: LinkSet) {
        let bundle = self.bundle(origin);
        let merged = match (bundle.link.take(), link) {
            (Some(LinkAccumulation::All), _) | (_, LinkSet::All) => LinkAccumulation::All,
            (Some(LinkAccumulation::Types(mut existing)), LinkSet::Types(types)) => {
                existing.extend(types);
                LinkAccumulation::Types(existing)
            }
            (None, LinkSet::Types(types)) => {
                LinkAccumulation::Types(types.into_iter().collect())
            }
        };
        bundle.link = Some(merged);
    }

    /// Descriptors are deduplicated by value, first-seen order preserved.
    pub fn add_proxy(&mut self, origin: &Origin, extraction: ProxyExtraction) {
        let bundle = self.bundle(origin);
        for configuration in extraction.configurations {
            if !bundle.proxy_configurations.contains(&configuration) {
                bundle.proxy_configurations.push(configuration);
            }
        }
        bundle.proxy_files.extend(extraction.files);
        bundle.proxy_resources.extend(extraction.resources);
    }

    pub fn add_resources(&mut self, origin: &Origin, patterns: crate::model::ResourcePatterns) {
        let bundle = self.bundle(origin);
        bundle.resources.includes.extend(patterns.includes);
        bundle.resources.excludes.extend(patterns.excludes);
        bundle.resources.bundles.extend(patterns.bundles);
    }

    /// Exactly one entrypoint may be declared per run, across all origins.
    pub fn add_entrypoint(&mut self, origin: &Origin, entrypoint: Entrypoint) -> Result<()> {
        if let Some(existing) = &self.entrypoint {
            return Err(HintforgeError::Configuration(format!(
                "multiple entrypoints declared: {} (from {}) and {} (from {})",
                existing.class_name,
                existing.declared_by,
                entrypoint.class_name,
                entrypoint.declared_by
            )));
        }
        self.bundle(origin).entrypoint = Some(entrypoint.clone());
        self.entrypoint = Some(entrypoint);
        Ok(())
    }

    pub fn add_options(&mut self, origin: &Origin, options: Vec<String>) {
        if options.is_empty() {
            return;
        }
        self.bundle(origin).options.extend(options);
    }

    pub fn into_bundles(self) -> IndexMap<Origin, OriginBundle> {
        self.bundles
    }
}

fn union_access(accumulated: &mut IndexMap<String, BTreeSet<AccessKind>>, records: Vec<Access>) {
    for record in records {
        accumulated
            .entry(record.target)
            .or_default()
            .extend(record.kinds);
    }
}
