use crate::error::Result;
use crate::model::ProxyConfiguration;
use serde::Serialize;

#[derive(Serialize)]
struct ProxyEntry<'a> {
    interfaces: &'a [String],
}

/// Render `dynamic-proxy-config.json`: one object per descriptor, each
/// interface list in its declared order, descriptors in merge order.
pub fn render_proxy_config(configurations: &[ProxyConfiguration]) -> Result<String> {
    let entries: Vec<ProxyEntry<'_>> = configurations
        .iter()
        .map(|configuration| ProxyEntry {
            interfaces: &configuration.interfaces,
        })
        .collect();

    Ok(serde_json::to_string_pretty(&entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interface_order_is_preserved() {
        let rendered = render_proxy_config(&[ProxyConfiguration {
            interfaces: vec!["io.acme.Z".into(), "io.acme.A".into()],
        }])
        .unwrap();
        assert_eq!(
            rendered,
            r#"[
  {
    "interfaces": [
      "io.acme.Z",
      "io.acme.A"
    ]
  }
]"#
        );
    }
}
