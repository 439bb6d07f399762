use crate::aggregate::{LinkAccumulation, OriginBundle};
use hintforge_api::InitPhase;
use indexmap::IndexSet;

/// Continuation separator between argument tokens: space, backslash,
/// newline, seven spaces of indent.
pub const ARG_SEPARATOR: &str = " \\\n       ";

const ENTRY_CLASS: &str = "-H:Class=";
const ENTRY_NAME: &str = "-H:Name=";
const LINK_BUILD_TIME: &str = "--link-at-build-time";
const INIT_BUILD_TIME: &str = "--initialize-at-build-time=";
const INIT_RUNTIME: &str = "--initialize-at-run-time=";
const PROXY_FILES: &str = "-H:DynamicProxyConfigurationFiles=";
const PROXY_RESOURCES: &str = "-H:DynamicProxyConfigurationResources=";

/// Render the `native-image.properties` contents for one origin, or `None`
/// when no category contributes a token.
///
/// Token order: entrypoint, link flag, initialization (build before
/// run-time, class lists sorted), dynamic-proxy file/resource references,
/// then remaining free-form options. Empty categories contribute nothing.
pub fn render_native_image_properties(bundle: &OriginBundle) -> Option<String> {
    let mut tokens: Vec<String> = Vec::new();

    if let Some(entrypoint) = &bundle.entrypoint {
        let mut token = format!("{ENTRY_CLASS}{}", entrypoint.class_name);
        if let Some(name) = &entrypoint.display_name {
            token.push(' ');
            token.push_str(ENTRY_NAME);
            token.push_str(name);
        }
        tokens.push(token);
    }

    match &bundle.link {
        Some(LinkAccumulation::All) => tokens.push(LINK_BUILD_TIME.to_string()),
        Some(LinkAccumulation::Types(types)) => {
            tokens.push(format!("{LINK_BUILD_TIME}={}", sorted_joined(types)));
        }
        None => {}
    }

    for (prefix, phase) in [(INIT_BUILD_TIME, InitPhase::Build), (INIT_RUNTIME, InitPhase::Runtime)] {
        let mut classes: Vec<&str> = bundle
            .initialization
            .iter()
            .filter(|(_, p)| **p == phase)
            .map(|(class, _)| class.as_str())
            .collect();
        if classes.is_empty() {
            continue;
        }
        classes.sort_unstable();
        tokens.push(format!("{prefix}{}", classes.join(",")));
    }

    if !bundle.proxy_files.is_empty() {
        tokens.push(format!("{PROXY_FILES}{}", sorted_joined(&bundle.proxy_files)));
    }
    if !bundle.proxy_resources.is_empty() {
        tokens.push(format!(
            "{PROXY_RESOURCES}{}",
            sorted_joined(&bundle.proxy_resources)
        ));
    }

    tokens.extend(bundle.options.iter().cloned());

    if tokens.is_empty() {
        None
    } else {
        Some(format!("Args = {}", tokens.join(ARG_SEPARATOR)))
    }
}

fn sorted_joined(values: &IndexSet<String>) -> String {
    let mut values: Vec<&str> = values.iter().map(String::as_str).collect();
    values.sort_unstable();
    values.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entrypoint;

    #[test]
    fn empty_bundle_renders_nothing() {
        assert_eq!(render_native_image_properties(&OriginBundle::default()), None);
    }

    #[test]
    fn entrypoint_with_display_name_shares_one_token() {
        let bundle = OriginBundle {
            entrypoint: Some(Entrypoint {
                class_name: "io.acme.App".into(),
                display_name: Some("acme".into()),
                declared_by: "io.acme.App".into(),
            }),
            ..Default::default()
        };
        assert_eq!(
            render_native_image_properties(&bundle).unwrap(),
            "Args = -H:Class=io.acme.App -H:Name=acme"
        );
    }

    #[test]
    fn initialization_groups_by_phase_sorted() {
        let mut bundle = OriginBundle::default();
        bundle
            .initialization
            .insert("io.acme.B".into(), InitPhase::Build);
        bundle
            .initialization
            .insert("io.acme.A".into(), InitPhase::Build);
        bundle
            .initialization
            .insert("io.acme.Late".into(), InitPhase::Runtime);

        assert_eq!(
            render_native_image_properties(&bundle).unwrap(),
            "Args = --initialize-at-build-time=io.acme.A,io.acme.B \\\n       --initialize-at-run-time=io.acme.Late"
        );
    }

    #[test]
    fn category_order_is_fixed() {
        let mut bundle = OriginBundle {
            entrypoint: Some(Entrypoint {
                class_name: "io.acme.App".into(),
                display_name: None,
                declared_by: "io.acme.App".into(),
            }),
            link: Some(LinkAccumulation::All),
            ..Default::default()
        };
        bundle
            .initialization
            .insert("io.acme.A".into(), InitPhase::Build);
        bundle.proxy_resources.insert("proxies/config.json".into());
        bundle.options.insert("--no-fallback".into());

        assert_eq!(
            render_native_image_properties(&bundle).unwrap(),
            "Args = -H:Class=io.acme.App \\\n       --link-at-build-time \\\n       --initialize-at-build-time=io.acme.A \\\n       -H:DynamicProxyConfigurationResources=proxies/config.json \\\n       --no-fallback"
        );
    }
}
