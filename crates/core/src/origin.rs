use hintforge_api::{DeclarationId, HintSource};
use serde::Serialize;
use std::fmt;

/// Root directory all config artifacts are written under.
pub const CONFIG_ROOT: &str = "META-INF/native-image";

/// Group used for declarations living in the default (unnamed) package.
pub const FALLBACK_GROUP: &str = "io.graalvm.hint";

/// Logical output destination for merged config artifacts.
///
/// Purely a value: two declarations with equal origins share one artifact
/// set. An absent artifact means "global to the group" and adds no path
/// segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Origin {
    pub group: String,
    pub artifact: Option<String>,
}

impl Origin {
    pub fn new(group: impl Into<String>) -> Self {
        Origin {
            group: group.into(),
            artifact: None,
        }
    }

    pub fn with_artifact(mut self, artifact: impl Into<String>) -> Self {
        self.artifact = Some(artifact.into());
        self
    }

    /// Destination path for a config file of this origin:
    /// `META-INF/native-image/<group>[/<artifact>]/<file_name>`.
    pub fn relative_path(&self, file_name: &str) -> String {
        match &self.artifact {
            Some(artifact) => format!("{CONFIG_ROOT}/{}/{artifact}/{file_name}", self.group),
            None => format!("{CONFIG_ROOT}/{}/{file_name}", self.group),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.artifact {
            Some(artifact) => write!(f, "[group={}, artifact={artifact}]", self.group),
            None => write!(f, "[group={}]", self.group),
        }
    }
}

/// Run-wide origin overrides supplied by build configuration. An override
/// wins unconditionally for every declaration in the run.
#[derive(Debug, Clone, Default)]
pub struct OriginOverrides {
    pub group: Option<String>,
    pub artifact: Option<String>,
}

/// Compute the origin of one declaration. Without overrides the group is
/// the declaration's package and the artifact stays absent.
pub fn resolve_origin(
    source: &dyn HintSource,
    id: DeclarationId,
    overrides: &OriginOverrides,
) -> Origin {
    let group = match &overrides.group {
        Some(group) => group.clone(),
        None => {
            let package = source.package_of(id);
            if package.is_empty() {
                FALLBACK_GROUP.to_string()
            } else {
                package.to_string()
            }
        }
    };

    Origin {
        group,
        artifact: overrides.artifact.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hintforge_api::{Declaration, DeclarationSet};

    fn single(package: &str) -> (DeclarationSet, DeclarationId) {
        let mut set = DeclarationSet::new();
        let id = set.push(
            package,
            None,
            Declaration {
                name: "Config".into(),
                ..Default::default()
            },
        );
        (set, id)
    }

    #[test]
    fn group_defaults_to_package() {
        let (set, id) = single("io.acme.service");
        let origin = resolve_origin(&set, id, &OriginOverrides::default());
        assert_eq!(origin.group, "io.acme.service");
        assert_eq!(origin.artifact, None);
    }

    #[test]
    fn unnamed_package_falls_back() {
        let (set, id) = single("");
        let origin = resolve_origin(&set, id, &OriginOverrides::default());
        assert_eq!(origin.group, FALLBACK_GROUP);
    }

    #[test]
    fn overrides_win_unconditionally() {
        let (set, id) = single("io.acme.service");
        let overrides = OriginOverrides {
            group: Some("com.corp".into()),
            artifact: Some("app".into()),
        };
        let origin = resolve_origin(&set, id, &overrides);
        assert_eq!(origin.group, "com.corp");
        assert_eq!(origin.artifact.as_deref(), Some("app"));
    }

    #[test]
    fn resolution_is_deterministic() {
        let (set, id) = single("io.acme");
        let overrides = OriginOverrides::default();
        assert_eq!(
            resolve_origin(&set, id, &overrides),
            resolve_origin(&set, id, &overrides)
        );
    }

    #[test]
    fn relative_path_skips_absent_artifact() {
        let origin = Origin::new("io.acme");
        assert_eq!(
            origin.relative_path("reflect-config.json"),
            "META-INF/native-image/io.acme/reflect-config.json"
        );

        let origin = Origin::new("io.acme").with_artifact("app");
        assert_eq!(
            origin.relative_path("reflect-config.json"),
            "META-INF/native-image/io.acme/app/reflect-config.json"
        );
    }
}
