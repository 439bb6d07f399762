use crate::manifest;
use hintforge_core::{HintEngine, MemorySink, OriginOverrides};
use std::path::PathBuf;
use tracing::{info, warn};

pub fn run(
    inputs: Vec<PathBuf>,
    group: Option<String>,
    artifact: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let set = manifest::load_declarations(&inputs)?;
    if set.is_empty() {
        warn!("no hint declarations found in the given manifests");
        return Ok(());
    }

    let engine = HintEngine::new(&set).with_overrides(OriginOverrides { group, artifact });
    let mut sink = MemorySink::new();
    let report = engine.run(&mut sink)?;

    for warning in &report.warnings {
        warn!("{warning}");
    }
    info!("{} config file(s) would be generated:", sink.files().len());
    for (path, contents) in sink.files() {
        info!(" - {path} ({} bytes)", contents.len());
    }
    Ok(())
}
