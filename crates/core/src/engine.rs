//! Single-pass orchestration: collect declarations, extract, aggregate,
//! emit, persist. One engine run owns one aggregator; nothing is shared
//! across runs.

use crate::aggregate::Aggregator;
use crate::emit;
use crate::error::Result;
use crate::extract;
use crate::origin::{Origin, OriginOverrides, resolve_origin};
use hintforge_api::{ConfigSink, HintKind, HintSource};
use tracing::{debug, info, warn};

pub const REFLECT_CONFIG_FILE: &str = "reflect-config.json";
pub const JNI_CONFIG_FILE: &str = "jni-config.json";
pub const RESOURCE_CONFIG_FILE: &str = "resource-config.json";
pub const DYNAMIC_PROXY_CONFIG_FILE: &str = "dynamic-proxy-config.json";
pub const NATIVE_IMAGE_PROPERTIES_FILE: &str = "native-image.properties";

/// Outcome of one engine run. Sink failures are per-file and do not abort
/// the remaining writes; fatal configuration errors surface as `Err` from
/// [`HintEngine::run`] instead.
#[derive(Debug, Default)]
pub struct RunReport {
    pub files: Vec<String>,
    pub warnings: Vec<String>,
    pub failures: Vec<String>,
}

impl RunReport {
    pub fn succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn wrote_nothing(&self) -> bool {
        self.files.is_empty()
    }
}

pub struct HintEngine<'a> {
    source: &'a dyn HintSource,
    overrides: OriginOverrides,
}

impl<'a> HintEngine<'a> {
    pub fn new(source: &'a dyn HintSource) -> Self {
        HintEngine {
            source,
            overrides: OriginOverrides::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: OriginOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Run the whole batch pass and persist every non-empty origin's
    /// artifacts through the sink.
    pub fn run(&self, sink: &mut dyn ConfigSink) -> Result<RunReport> {
        let mut aggregator = Aggregator::new();
        let mut kinds_seen: Vec<HintKind> = Vec::new();

        for kind in HintKind::ALL {
            let ids = self.source.declarations_with(kind);
            if ids.is_empty() {
                continue;
            }
            kinds_seen.push(kind);

            for id in ids {
                let origin = resolve_origin(self.source, id, &self.overrides);
                match kind {
                    HintKind::Reflection => {
                        aggregator
                            .add_reflection(&origin, extract::extract_access(self.source, id, kind));
                    }
                    HintKind::Jni => {
                        aggregator.add_jni(&origin, extract::extract_access(self.source, id, kind));
                    }
                    HintKind::Initialization => {
                        aggregator.add_initialization(
                            &origin,
                            extract::extract_initialization(self.source, id),
                        );
                    }
                    HintKind::DynamicProxy => {
                        if let Some(extraction) = extract::extract_proxy(self.source, id)? {
                            aggregator.add_proxy(&origin, extraction);
                        }
                    }
                    HintKind::Link => {
                        if let Some(link) = extract::extract_link(self.source, id) {
                            aggregator.add_link(&origin, link);
                        }
                    }
                    HintKind::Resource => {
                        if let Some(patterns) = extract::extract_resources(self.source, id)? {
                            aggregator.add_resources(&origin, patterns);
                        }
                    }
                    HintKind::NativeImage => {
                        let extraction = extract::extract_entrypoint(self.source, id);
                        if let Some(entrypoint) = extraction.entrypoint {
                            aggregator.add_entrypoint(&origin, entrypoint)?;
                        }
                        aggregator.add_options(&origin, extraction.options);
                    }
                }
            }
        }

        let mut report = RunReport::default();
        for (origin, mut bundle) in aggregator.into_bundles() {
            if bundle.is_empty() {
                debug!(origin = %origin, "origin accumulated no records, emitting nothing");
                continue;
            }

            if !bundle.reflection.is_empty() {
                let contents = emit::render_access_config(&bundle.reflection)?;
                write_artifact(sink, &origin, REFLECT_CONFIG_FILE, &contents, &mut report);
            }
            if !bundle.jni.is_empty() {
                let contents = emit::render_access_config(&bundle.jni)?;
                write_artifact(sink, &origin, JNI_CONFIG_FILE, &contents, &mut report);
            }
            if !bundle.resources.is_empty() {
                let contents = emit::render_resource_config(&bundle.resources)?;
                write_artifact(sink, &origin, RESOURCE_CONFIG_FILE, &contents, &mut report);
            }
            if !bundle.proxy_configurations.is_empty() {
                let contents = emit::render_proxy_config(&bundle.proxy_configurations)?;
                let path = origin.relative_path(DYNAMIC_PROXY_CONFIG_FILE);
                write_artifact(sink, &origin, DYNAMIC_PROXY_CONFIG_FILE, &contents, &mut report);
                // The generated descriptor is referenced back from the
                // build-arguments file.
                bundle.proxy_resources.insert(path);
            }
            if let Some(contents) = emit::render_native_image_properties(&bundle) {
                write_artifact(
                    sink,
                    &origin,
                    NATIVE_IMAGE_PROPERTIES_FILE,
                    &contents,
                    &mut report,
                );
            }
        }

        if report.wrote_nothing() && !kinds_seen.is_empty() {
            let present = kinds_seen
                .iter()
                .map(|kind| kind.label())
                .collect::<Vec<_>>()
                .join(", ");
            let message = format!("{present} are present but produced no output");
            warn!("{message}");
            report.warnings.push(message);
        }

        Ok(report)
    }
}

fn write_artifact(
    sink: &mut dyn ConfigSink,
    origin: &Origin,
    file_name: &str,
    contents: &str,
    report: &mut RunReport,
) {
    let path = origin.relative_path(file_name);
    match sink.write(&path, contents) {
        Ok(()) => {
            info!(path = %path, "generated config file");
            report.files.push(path);
        }
        Err(error) => {
            tracing::error!(path = %path, "{error}");
            report.failures.push(error.to_string());
        }
    }
}
