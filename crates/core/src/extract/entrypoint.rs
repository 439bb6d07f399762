use crate::model::Entrypoint;
use crate::naming;
use hintforge_api::{DeclarationId, HintSource};
use std::collections::HashSet;

/// What one native-image hint contributes: at most one entrypoint record
/// plus an ordered list of build-argument tokens.
#[derive(Debug, Clone, Default)]
pub struct EntrypointExtraction {
    pub entrypoint: Option<Entrypoint>,
    pub options: Vec<String>,
}

/// Extract the entrypoint and option tokens of one declaration. A hint
/// without an `entrypoint` attribute contributes options only. Tokens from
/// the closed vocabulary and free-form option strings are deduplicated by
/// value, first-seen order preserved.
pub fn extract_entrypoint(source: &dyn HintSource, id: DeclarationId) -> EntrypointExtraction {
    let declaration = source.declaration(id);
    let Some(hint) = declaration.hints.native_image.as_ref() else {
        return EntrypointExtraction::default();
    };

    let entrypoint = hint.entrypoint.as_ref().map(|class| Entrypoint {
        class_name: naming::canonical_target(class),
        display_name: hint.name.clone(),
        declared_by: naming::source_name(source, id),
    });

    let mut seen = HashSet::new();
    let options = hint
        .options
        .iter()
        .map(|option| option.token().to_string())
        .chain(hint.option_names.iter().cloned())
        .filter(|token| seen.insert(token.clone()))
        .collect();

    EntrypointExtraction {
        entrypoint,
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hintforge_api::{
        Declaration, DeclarationSet, HintAttributes, NativeImageHint, NativeImageOption,
    };

    fn declaration_with(hint: NativeImageHint) -> (DeclarationSet, DeclarationId) {
        let mut set = DeclarationSet::new();
        let id = set.push(
            "io.acme",
            None,
            Declaration {
                name: "App".into(),
                hints: HintAttributes {
                    native_image: Some(hint),
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        (set, id)
    }

    #[test]
    fn unset_entrypoint_contributes_options_only() {
        let (set, id) = declaration_with(NativeImageHint {
            options: vec![NativeImageOption::NoFallback],
            ..Default::default()
        });
        let extraction = extract_entrypoint(&set, id);
        assert!(extraction.entrypoint.is_none());
        assert_eq!(extraction.options, vec!["--no-fallback"]);
    }

    #[test]
    fn options_deduplicate_preserving_first_seen_order() {
        let (set, id) = declaration_with(NativeImageHint {
            options: vec![
                NativeImageOption::NoFallback,
                NativeImageOption::EnableHttp,
            ],
            option_names: vec!["--no-fallback".into(), "-H:Custom=1".into()],
            ..Default::default()
        });
        let extraction = extract_entrypoint(&set, id);
        assert_eq!(
            extraction.options,
            vec!["--no-fallback", "--enable-http", "-H:Custom=1"]
        );
    }

    #[test]
    fn entrypoint_is_canonicalized() {
        let (set, id) = declaration_with(NativeImageHint {
            entrypoint: Some("io.acme.Outer.Main.class".into()),
            name: Some("app".into()),
            ..Default::default()
        });
        let extraction = extract_entrypoint(&set, id);
        let entrypoint = extraction.entrypoint.unwrap();
        assert_eq!(entrypoint.class_name, "io.acme.Outer$Main");
        assert_eq!(entrypoint.display_name.as_deref(), Some("app"));
        assert_eq!(entrypoint.declared_by, "io.acme.App");
    }
}
