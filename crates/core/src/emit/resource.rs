use crate::aggregate::ResourceAccumulation;
use crate::error::Result;
use indexmap::IndexSet;
use serde::Serialize;

#[derive(Serialize)]
struct PatternEntry<'a> {
    pattern: &'a str,
}

#[derive(Serialize)]
struct BundleEntry<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct ResourceSection<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    includes: Option<Vec<PatternEntry<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    excludes: Option<Vec<PatternEntry<'a>>>,
}

#[derive(Serialize)]
struct ResourceConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    resources: Option<ResourceSection<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bundles: Option<Vec<BundleEntry<'a>>>,
}

/// Render `resource-config.json`. The `resources` section and the
/// `bundles` array are present only when non-empty, inner arrays sorted
/// lexicographically.
pub fn render_resource_config(accumulation: &ResourceAccumulation) -> Result<String> {
    let includes = sorted(&accumulation.includes);
    let excludes = sorted(&accumulation.excludes);
    let bundles = sorted(&accumulation.bundles);

    let resources = if includes.is_empty() && excludes.is_empty() {
        None
    } else {
        Some(ResourceSection {
            includes: entries(&includes, |pattern| PatternEntry { pattern }),
            excludes: entries(&excludes, |pattern| PatternEntry { pattern }),
        })
    };

    let config = ResourceConfig {
        resources,
        bundles: entries(&bundles, |name| BundleEntry { name }),
    };

    Ok(serde_json::to_string_pretty(&config)?)
}

fn sorted(values: &IndexSet<String>) -> Vec<&str> {
    let mut values: Vec<&str> = values.iter().map(String::as_str).collect();
    values.sort_unstable();
    values
}

fn entries<'a, T>(values: &[&'a str], entry: impl Fn(&'a str) -> T) -> Option<Vec<T>> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().copied().map(entry).collect())
    }
}
