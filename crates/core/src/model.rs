//! Canonical records produced by the extractors and merged by the
//! aggregator, one shape per hint kind.

use hintforge_api::{AccessKind, InitPhase};

/// One reflection/JNI access assertion. Identity key is the target name;
/// access-kind sets for the same target accumulate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Access {
    pub target: String,
    pub kinds: Vec<AccessKind>,
}

/// One class-initialization assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Initialization {
    pub class_name: String,
    pub phase: InitPhase,
}

/// Link targets contributed by one declaration. `All` suppresses per-type
/// enumeration for the whole origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkSet {
    All,
    Types(Vec<String>),
}

/// One dynamic-proxy descriptor: an ordered, non-empty interface list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfiguration {
    pub interfaces: Vec<String>,
}

/// Everything one dynamic-proxy hint contributes: inline descriptors plus
/// external file/resource references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyExtraction {
    pub configurations: Vec<ProxyConfiguration>,
    pub files: Vec<String>,
    pub resources: Vec<String>,
}

/// Resource patterns of one declaration after blank filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePatterns {
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub bundles: Vec<String>,
}

/// The single entrypoint of a build. `declared_by` names the declaration
/// that asserted it, for duplicate diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entrypoint {
    pub class_name: String,
    pub display_name: Option<String>,
    pub declared_by: String,
}
