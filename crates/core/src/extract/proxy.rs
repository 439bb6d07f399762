use crate::error::{HintforgeError, Result};
use crate::model::{ProxyConfiguration, ProxyExtraction};
use crate::naming;
use hintforge_api::{DeclarationId, HintSource};

/// Extract dynamic-proxy descriptors from one declaration.
///
/// A hint with no inline configurations and no external file/resource
/// references falls back to a single-interface descriptor for the
/// declaring type; a non-interface declaration cannot satisfy that
/// fallback and is a fatal configuration error.
pub fn extract_proxy(
    source: &dyn HintSource,
    id: DeclarationId,
) -> Result<Option<ProxyExtraction>> {
    let declaration = source.declaration(id);
    let Some(hint) = declaration.hints.dynamic_proxy.as_ref() else {
        return Ok(None);
    };

    let mut configurations: Vec<ProxyConfiguration> = hint
        .configurations
        .iter()
        .filter(|configuration| !configuration.interfaces.is_empty())
        .map(|configuration| ProxyConfiguration {
            interfaces: configuration
                .interfaces
                .iter()
                .map(|interface| naming::canonical_target(interface))
                .collect(),
        })
        .collect();

    if configurations.is_empty() && hint.files.is_empty() && hint.resources.is_empty() {
        let self_name = naming::binary_name(source, id);
        if !declaration.kind.is_interface() {
            return Err(HintforgeError::Configuration(format!(
                "{self_name} carries a dynamic-proxy hint but is not an interface"
            )));
        }
        configurations = vec![ProxyConfiguration {
            interfaces: vec![self_name],
        }];
    }

    Ok(Some(ProxyExtraction {
        configurations,
        files: hint.files.clone(),
        resources: hint.resources.clone(),
    }))
}
