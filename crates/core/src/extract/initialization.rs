use super::targets_or_self;
use crate::model::Initialization;
use hintforge_api::{DeclarationId, HintSource};

/// Extract initialization-phase records from one declaration.
pub fn extract_initialization(source: &dyn HintSource, id: DeclarationId) -> Vec<Initialization> {
    source
        .declaration(id)
        .hints
        .initialization
        .iter()
        .flat_map(|hint| {
            targets_or_self(source, id, &hint.types, &hint.type_names)
                .into_iter()
                .map(|class_name| Initialization {
                    class_name,
                    phase: hint.phase,
                })
        })
        .collect()
}
