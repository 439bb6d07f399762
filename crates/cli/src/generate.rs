use crate::manifest;
use hintforge_core::{FsSink, HintEngine, OriginOverrides};
use std::path::PathBuf;
use tracing::{error, info, warn};

pub fn run(
    inputs: Vec<PathBuf>,
    output: PathBuf,
    group: Option<String>,
    artifact: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let set = manifest::load_declarations(&inputs)?;
    if set.is_empty() {
        warn!("no hint declarations found in the given manifests");
        return Ok(());
    }
    info!("Loaded {} hint declaration(s)", set.len());

    let engine = HintEngine::new(&set).with_overrides(OriginOverrides { group, artifact });
    let mut sink = FsSink::new(&output);
    let report = engine.run(&mut sink)?;

    for warning in &report.warnings {
        warn!("{warning}");
    }
    for failure in &report.failures {
        error!("{failure}");
    }
    info!(
        "Generated {} config file(s) under {}",
        report.files.len(),
        output.display()
    );

    if !report.succeeded() {
        return Err("one or more config files could not be written".into());
    }
    Ok(())
}
