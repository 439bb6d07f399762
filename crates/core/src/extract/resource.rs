use crate::error::{HintforgeError, Result};
use crate::model::ResourcePatterns;
use crate::naming;
use hintforge_api::{DeclarationId, HintSource};
use tracing::warn;

/// Extract the resource pattern buckets of one declaration.
///
/// Blank entries are dropped first; a hint whose three buckets are all
/// empty after that is a fatal configuration error. Patterns are regular
/// expressions downstream, so ones that do not compile are flagged but
/// still passed through verbatim.
pub fn extract_resources(
    source: &dyn HintSource,
    id: DeclarationId,
) -> Result<Option<ResourcePatterns>> {
    let declaration = source.declaration(id);
    let Some(hint) = declaration.hints.resource.as_ref() else {
        return Ok(None);
    };

    let patterns = ResourcePatterns {
        includes: non_blank(&hint.include),
        excludes: non_blank(&hint.exclude),
        bundles: non_blank(&hint.bundles),
    };

    if patterns.includes.is_empty() && patterns.excludes.is_empty() && patterns.bundles.is_empty() {
        return Err(HintforgeError::Configuration(format!(
            "{} carries a resource hint but no usable include, exclude or bundle pattern",
            naming::source_name(source, id)
        )));
    }

    for pattern in patterns.includes.iter().chain(patterns.excludes.iter()) {
        if regex::Regex::new(pattern).is_err() {
            warn!(
                pattern = %pattern,
                declaration = %naming::source_name(source, id),
                "resource pattern is not a valid regular expression, passing through verbatim"
            );
        }
    }

    Ok(Some(patterns))
}

fn non_blank(patterns: &[String]) -> Vec<String> {
    patterns
        .iter()
        .filter(|pattern| !pattern.trim().is_empty())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hintforge_api::{Declaration, DeclarationSet, HintAttributes, ResourceHint};

    fn declaration_with(hint: ResourceHint) -> (DeclarationSet, DeclarationId) {
        let mut set = DeclarationSet::new();
        let id = set.push(
            "io.acme",
            None,
            Declaration {
                name: "Assets".into(),
                hints: HintAttributes {
                    resource: Some(hint),
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        (set, id)
    }

    #[test]
    fn blank_patterns_are_filtered() {
        let (set, id) = declaration_with(ResourceHint {
            include: vec!["".into(), "META-INF/.*".into(), "  ".into()],
            ..Default::default()
        });
        let patterns = extract_resources(&set, id).unwrap().unwrap();
        assert_eq!(patterns.includes, vec!["META-INF/.*"]);
        assert!(patterns.excludes.is_empty());
    }

    #[test]
    fn all_buckets_blank_is_fatal() {
        let (set, id) = declaration_with(ResourceHint {
            include: vec!["".into()],
            exclude: vec!["   ".into()],
            bundles: vec![],
        });
        let error = extract_resources(&set, id).unwrap_err();
        assert!(error.to_string().contains("io.acme.Assets"));
    }
}
