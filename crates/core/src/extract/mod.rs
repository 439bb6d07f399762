//! Hint extractors: one module per hint kind, each turning a declaration's
//! raw hint attributes into canonical records.

mod access;
mod entrypoint;
mod initialization;
mod link;
mod proxy;
mod resource;

pub use access::extract_access;
pub use entrypoint::{EntrypointExtraction, extract_entrypoint};
pub use initialization::extract_initialization;
pub use link::extract_link;
pub use proxy::extract_proxy;
pub use resource::extract_resources;

use crate::naming;
use hintforge_api::{DeclarationId, HintSource};

/// Resolve the target list of one hint instance.
///
/// Explicit `types` references are canonicalized, `type_names` strings are
/// taken as given (a stray class-literal marker is still normalized away).
/// When both lists are empty after blank filtering, the hint targets the
/// declaring type itself.
pub(crate) fn targets_or_self(
    source: &dyn HintSource,
    id: DeclarationId,
    types: &[String],
    type_names: &[String],
) -> Vec<String> {
    let explicit: Vec<String> = types
        .iter()
        .chain(type_names.iter())
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| naming::canonical_target(raw))
        .collect();

    if explicit.is_empty() {
        vec![naming::binary_name(source, id)]
    } else {
        explicit
    }
}
