use crate::error::Result;
use hintforge_api::AccessKind;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeSet;

/// One entry of `reflect-config.json` / `jni-config.json`. Field order is
/// the emitted key order: `name` first, then the granular access keys in
/// ascending key order, present only when true.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccessEntry<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    all_declared_constructors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    all_declared_fields: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    all_declared_methods: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    all_public_constructors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    all_public_fields: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    all_public_methods: Option<bool>,
}

/// Render an access config JSON array, entries sorted by target name.
/// Aggregate kinds expand to their granular constituents here and never
/// appear in the output themselves.
pub fn render_access_config(accesses: &IndexMap<String, BTreeSet<AccessKind>>) -> Result<String> {
    let mut sorted: Vec<(&String, &BTreeSet<AccessKind>)> = accesses.iter().collect();
    sorted.sort_by(|left, right| left.0.cmp(right.0));

    let entries: Vec<AccessEntry<'_>> = sorted
        .into_iter()
        .map(|(name, kinds)| {
            let expanded: BTreeSet<AccessKind> = kinds
                .iter()
                .flat_map(|kind| kind.expand().iter().copied())
                .collect();
            let flag = |kind: AccessKind| expanded.contains(&kind).then_some(true);
            AccessEntry {
                name,
                all_declared_constructors: flag(AccessKind::AllDeclaredConstructors),
                all_declared_fields: flag(AccessKind::AllDeclaredFields),
                all_declared_methods: flag(AccessKind::AllDeclaredMethods),
                all_public_constructors: flag(AccessKind::AllPublicConstructors),
                all_public_fields: flag(AccessKind::AllPublicFields),
                all_public_methods: flag(AccessKind::AllPublicMethods),
            }
        })
        .collect();

    Ok(serde_json::to_string_pretty(&entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accesses(entries: &[(&str, &[AccessKind])]) -> IndexMap<String, BTreeSet<AccessKind>> {
        entries
            .iter()
            .map(|(name, kinds)| (name.to_string(), kinds.iter().copied().collect()))
            .collect()
    }

    #[test]
    fn aggregate_kinds_expand_to_granular_keys() {
        let rendered = render_access_config(&accesses(&[(
            "io.acme.Response",
            &[AccessKind::AllDeclared],
        )]))
        .unwrap();
        assert_eq!(
            rendered,
            r#"[
  {
    "name": "io.acme.Response",
    "allDeclaredConstructors": true,
    "allDeclaredFields": true,
    "allDeclaredMethods": true
  }
]"#
        );
    }

    #[test]
    fn entries_are_sorted_by_name() {
        let rendered = render_access_config(&accesses(&[
            ("io.acme.Zeta", &[AccessKind::AllPublicFields]),
            ("io.acme.Alpha", &[AccessKind::AllDeclaredMethods]),
        ]))
        .unwrap();
        let zeta = rendered.find("Zeta").unwrap();
        let alpha = rendered.find("Alpha").unwrap();
        assert!(alpha < zeta);
    }

    #[test]
    fn union_of_aggregate_and_granular_kinds() {
        let rendered = render_access_config(&accesses(&[(
            "io.acme.A",
            &[AccessKind::AllPublic, AccessKind::AllDeclaredFields],
        )]))
        .unwrap();
        assert_eq!(
            rendered,
            r#"[
  {
    "name": "io.acme.A",
    "allDeclaredFields": true,
    "allPublicConstructors": true,
    "allPublicFields": true,
    "allPublicMethods": true
  }
]"#
        );
    }
}
