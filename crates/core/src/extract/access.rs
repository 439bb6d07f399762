use super::targets_or_self;
use crate::model::Access;
use hintforge_api::{AccessKind, DeclarationId, HintKind, HintSource};

/// Extract reflection or JNI access records from one declaration. Stacked
/// hint instances are already the list form of the attribute bag; each
/// instance resolves its targets independently.
pub fn extract_access(source: &dyn HintSource, id: DeclarationId, kind: HintKind) -> Vec<Access> {
    let declaration = source.declaration(id);
    let hints = match kind {
        HintKind::Reflection => &declaration.hints.reflection,
        HintKind::Jni => &declaration.hints.jni,
        _ => return Vec::new(),
    };

    hints
        .iter()
        .flat_map(|hint| {
            let kinds = if hint.access.is_empty() {
                vec![AccessKind::AllDeclared]
            } else {
                hint.access.clone()
            };
            targets_or_self(source, id, &hint.types, &hint.type_names)
                .into_iter()
                .map(move |target| Access {
                    target,
                    kinds: kinds.clone(),
                })
        })
        .collect()
}
