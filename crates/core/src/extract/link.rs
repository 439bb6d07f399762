use super::targets_or_self;
use crate::model::LinkSet;
use hintforge_api::{DeclarationId, HintSource};

/// Extract the link targets of one declaration. The `all` flag
/// short-circuits the explicit/self target list entirely.
pub fn extract_link(source: &dyn HintSource, id: DeclarationId) -> Option<LinkSet> {
    let declaration = source.declaration(id);
    let hint = declaration.hints.link.as_ref()?;

    if hint.all {
        return Some(LinkSet::All);
    }

    Some(LinkSet::Types(targets_or_self(
        source,
        id,
        &hint.types,
        &hint.type_names,
    )))
}
