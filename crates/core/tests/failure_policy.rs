use hintforge_api::{ConfigSink, DeclarationSet, HintManifest, SinkError};
use hintforge_core::{HintEngine, HintforgeError, MemorySink};

fn set_from(manifests: &[serde_json::Value]) -> DeclarationSet {
    let mut set = DeclarationSet::new();
    for value in manifests {
        let manifest: HintManifest = serde_json::from_value(value.clone()).unwrap();
        set.extend_from_manifest(&manifest);
    }
    set
}

fn run_expecting_error(manifests: &[serde_json::Value]) -> HintforgeError {
    let set = set_from(manifests);
    let engine = HintEngine::new(&set);
    let mut sink = MemorySink::new();
    engine.run(&mut sink).unwrap_err()
}

#[test]
fn two_entrypoints_are_fatal_across_origins() {
    let error = run_expecting_error(&[
        serde_json::json!({
            "package": "io.acme",
            "declarations": [
                { "name": "App", "hints": { "nativeImage": { "entrypoint": "io.acme.App" } } }
            ]
        }),
        serde_json::json!({
            "package": "com.other",
            "declarations": [
                { "name": "Main", "hints": { "nativeImage": { "entrypoint": "com.other.Main" } } }
            ]
        }),
    ]);

    let message = error.to_string();
    assert!(message.contains("multiple entrypoints"));
    assert!(message.contains("io.acme.App"));
    assert!(message.contains("com.other.Main"));
}

#[test]
fn resource_hint_without_patterns_is_fatal() {
    let error = run_expecting_error(&[serde_json::json!({
        "package": "io.acme",
        "declarations": [
            { "name": "Assets", "hints": { "resource": { "include": ["", "  "] } } }
        ]
    })]);

    assert!(error.to_string().contains("io.acme.Assets"));
}

#[test]
fn non_interface_proxy_self_default_is_fatal() {
    let error = run_expecting_error(&[serde_json::json!({
        "package": "io.acme",
        "declarations": [
            { "name": "Service", "kind": "class", "hints": { "dynamicProxy": {} } }
        ]
    })]);

    let message = error.to_string();
    assert!(message.contains("io.acme.Service"));
    assert!(message.contains("not an interface"));
}

#[test]
fn annotation_declarations_count_as_interfaces() {
    let set = set_from(&[serde_json::json!({
        "package": "io.acme",
        "declarations": [
            { "name": "Marker", "kind": "annotation", "hints": { "dynamicProxy": {} } }
        ]
    })]);
    let engine = HintEngine::new(&set);
    let mut sink = MemorySink::new();
    assert!(engine.run(&mut sink).is_ok());
}

/// Refuses every write whose path contains a marker substring.
struct FlakySink {
    refused: &'static str,
    inner: MemorySink,
}

impl ConfigSink for FlakySink {
    fn write(&mut self, path: &str, contents: &str) -> Result<(), SinkError> {
        if path.contains(self.refused) {
            return Err(SinkError::new(path, "permission denied"));
        }
        self.inner.write(path, contents)
    }
}

#[test]
fn sink_failures_are_reported_per_file_and_do_not_abort() {
    let set = set_from(&[
        serde_json::json!({
            "package": "io.acme.alpha",
            "declarations": [{ "name": "A", "hints": { "reflection": [{}] } }]
        }),
        serde_json::json!({
            "package": "io.acme.beta",
            "declarations": [{ "name": "B", "hints": { "reflection": [{}] } }]
        }),
    ]);
    let engine = HintEngine::new(&set);
    let mut sink = FlakySink {
        refused: "io.acme.alpha",
        inner: MemorySink::new(),
    };
    let report = engine.run(&mut sink).unwrap();

    assert!(!report.succeeded());
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].contains("io.acme.alpha"));
    assert_eq!(report.files.len(), 1);
    assert!(sink
        .inner
        .contents("META-INF/native-image/io.acme.beta/reflect-config.json")
        .is_some());
}
