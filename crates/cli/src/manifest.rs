use hintforge_api::{DeclarationSet, HintManifest};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

const MANIFEST_SUFFIX: &str = ".hints.json";

/// Load every manifest named by `inputs` into one declaration set.
/// Directories are scanned recursively for `*.hints.json` files; explicit
/// file arguments are loaded regardless of their name.
pub fn load_declarations(
    inputs: &[PathBuf],
) -> Result<DeclarationSet, Box<dyn std::error::Error>> {
    let mut set = DeclarationSet::new();
    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input) {
                let entry = entry?;
                if entry.file_type().is_file() && is_manifest(entry.path()) {
                    merge(&mut set, entry.path())?;
                }
            }
        } else {
            merge(&mut set, input)?;
        }
    }
    Ok(set)
}

fn is_manifest(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(MANIFEST_SUFFIX))
}

fn merge(set: &mut DeclarationSet, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)
        .map_err(|error| format!("cannot read {}: {error}", path.display()))?;
    let manifest: HintManifest = serde_json::from_str(&text)
        .map_err(|error| format!("cannot parse {}: {error}", path.display()))?;
    debug!(path = %path.display(), declarations = manifest.declarations.len(), "loaded manifest");
    set.extend_from_manifest(&manifest);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hintforge_api::{HintKind, HintSource};
    use std::fs;

    #[test]
    fn scans_directories_for_hint_manifests() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("service.hints.json"),
            r#"{"package": "io.acme", "declarations": [{"name": "A", "hints": {"reflection": [{}]}}]}"#,
        )
        .unwrap();
        fs::write(dir.path().join("notes.json"), "{}").unwrap();

        let set = load_declarations(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.declarations_with(HintKind::Reflection).len(), 1);
    }

    #[test]
    fn explicit_files_load_regardless_of_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anything.json");
        fs::write(
            &path,
            r#"{"package": "io.acme", "declarations": [{"name": "A"}]}"#,
        )
        .unwrap();

        let set = load_declarations(&[path]).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.hints.json");
        fs::write(&path, "{not json").unwrap();
        assert!(load_declarations(&[path]).is_err());
    }
}
