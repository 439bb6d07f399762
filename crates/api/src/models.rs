use serde::{Deserialize, Serialize};

/// The closed set of hint kinds a declaration can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HintKind {
    Reflection,
    Jni,
    Initialization,
    DynamicProxy,
    Link,
    Resource,
    NativeImage,
}

impl HintKind {
    /// Every hint kind, in processing order.
    pub const ALL: [HintKind; 7] = [
        HintKind::Reflection,
        HintKind::Jni,
        HintKind::Initialization,
        HintKind::DynamicProxy,
        HintKind::Link,
        HintKind::Resource,
        HintKind::NativeImage,
    ];

    /// Human-readable label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            HintKind::Reflection => "ReflectionHint",
            HintKind::Jni => "JniHint",
            HintKind::Initialization => "InitializationHint",
            HintKind::DynamicProxy => "DynamicProxyHint",
            HintKind::Link => "LinkHint",
            HintKind::Resource => "ResourceHint",
            HintKind::NativeImage => "NativeImageHint",
        }
    }
}

impl std::fmt::Display for HintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Reflection/JNI access granularity.
///
/// `AllPublic` and `AllDeclared` are aggregates that expand to their three
/// granular constituents when a config file is rendered; they never appear
/// in emitted output themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessKind {
    AllPublic,
    AllPublicConstructors,
    AllPublicMethods,
    AllPublicFields,
    AllDeclared,
    AllDeclaredConstructors,
    AllDeclaredMethods,
    AllDeclaredFields,
}

impl AccessKind {
    /// Granular kinds this kind stands for in emitted config files.
    pub fn expand(self) -> &'static [AccessKind] {
        match self {
            AccessKind::AllPublic => &[
                AccessKind::AllPublicConstructors,
                AccessKind::AllPublicMethods,
                AccessKind::AllPublicFields,
            ],
            AccessKind::AllDeclared => &[
                AccessKind::AllDeclaredConstructors,
                AccessKind::AllDeclaredMethods,
                AccessKind::AllDeclaredFields,
            ],
            AccessKind::AllPublicConstructors => &[AccessKind::AllPublicConstructors],
            AccessKind::AllPublicMethods => &[AccessKind::AllPublicMethods],
            AccessKind::AllPublicFields => &[AccessKind::AllPublicFields],
            AccessKind::AllDeclaredConstructors => &[AccessKind::AllDeclaredConstructors],
            AccessKind::AllDeclaredMethods => &[AccessKind::AllDeclaredMethods],
            AccessKind::AllDeclaredFields => &[AccessKind::AllDeclaredFields],
        }
    }
}

/// When a class is initialized relative to the native-image build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InitPhase {
    #[default]
    Build,
    Runtime,
}

/// Closed vocabulary of well-known native-image command line options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NativeImageOption {
    DryRun,
    NativeImageInfo,
    TraceClassInit,
    TraceObjectInit,
    AutoFallback,
    NoFallback,
    ForceFallback,
    UseGlibc,
    UseMusl,
    Verbose,
    Version,
    EnableHttp,
    EnableHttps,
    EnableG1,
    EnableSerial,
    EnableMonitoring,
    EnableUrlProtocols,
    AllowIncompleteClasspath,
    ReportUnsupported,
    QuickBuild,
    MaxCompatibility,
    MaxPerformance,
    BuildReport,
    UseLlvm,
    InlineBeforeAnalysis,
    PrintInitialization,
    IncludeAllLocales,
    LocalisationOptimizedMode,
    LogRegisteredResourceMin,
    LogRegisteredResourceMax,
}

impl NativeImageOption {
    /// The literal command line token for this option.
    pub fn token(self) -> &'static str {
        match self {
            NativeImageOption::DryRun => "--dry-run",
            NativeImageOption::NativeImageInfo => "--native-image-info",
            NativeImageOption::TraceClassInit => "--trace-class-initialization",
            NativeImageOption::TraceObjectInit => "--trace-object-instantiation",
            NativeImageOption::AutoFallback => "--auto-fallback",
            NativeImageOption::NoFallback => "--no-fallback",
            NativeImageOption::ForceFallback => "--force-fallback",
            NativeImageOption::UseGlibc => "--libc=glibc",
            NativeImageOption::UseMusl => "--libc=musl",
            NativeImageOption::Verbose => "--verbose",
            NativeImageOption::Version => "--version",
            NativeImageOption::EnableHttp => "--enable-http",
            NativeImageOption::EnableHttps => "--enable-https",
            NativeImageOption::EnableG1 => "-H:+UseLowLatencyGC",
            NativeImageOption::EnableSerial => "--gc=serial",
            NativeImageOption::EnableMonitoring => {
                "--enable-monitoring=jmxserver,jmxclient,jvmstat"
            }
            NativeImageOption::EnableUrlProtocols => "--enable-url-protocols",
            NativeImageOption::AllowIncompleteClasspath => "--allow-incomplete-classpath",
            NativeImageOption::ReportUnsupported => "--report-unsupported-elements-at-runtime",
            NativeImageOption::QuickBuild => "-Ob",
            NativeImageOption::MaxCompatibility => "-march=compatibility",
            NativeImageOption::MaxPerformance => "-march=native",
            NativeImageOption::BuildReport => "-H:+BuildReport",
            NativeImageOption::UseLlvm => "-H:CompilerBackend=llvm",
            NativeImageOption::InlineBeforeAnalysis => "-H:+InlineBeforeAnalysis",
            NativeImageOption::PrintInitialization => "-H:+PrintClassInitialization",
            NativeImageOption::IncludeAllLocales => "-H:+IncludeAllLocales",
            NativeImageOption::LocalisationOptimizedMode => "-H:-LocalizationOptimizedMode",
            NativeImageOption::LogRegisteredResourceMin => "-H:Log=registerResource:1",
            NativeImageOption::LogRegisteredResourceMax => "-H:Log=registerResource:5",
        }
    }
}

/// One reflection or JNI access hint instance.
///
/// `types` entries are type references and may carry the `.class` literal
/// marker; `type_names` entries are free-form strings used verbatim. When
/// both are empty the hint targets the declaring type itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessHint {
    pub access: Vec<AccessKind>,
    pub types: Vec<String>,
    pub type_names: Vec<String>,
}

/// One initialization-phase hint instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InitializationHint {
    pub phase: InitPhase,
    pub types: Vec<String>,
    pub type_names: Vec<String>,
}

/// Link-at-build-time hint. `all` short-circuits the per-type list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkHint {
    pub all: bool,
    pub types: Vec<String>,
    pub type_names: Vec<String>,
}

/// One interface list of a dynamic-proxy descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyConfigurationHint {
    pub interfaces: Vec<String>,
}

/// Dynamic-proxy hint: inline configurations plus external file/resource
/// references. A hint with none of the three falls back to the declaring
/// type, which must then be an interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DynamicProxyHint {
    pub configurations: Vec<ProxyConfigurationHint>,
    pub files: Vec<String>,
    pub resources: Vec<String>,
}

/// Resource inclusion hint with three pattern buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceHint {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub bundles: Vec<String>,
}

/// Entrypoint and build-option hint. An absent `entrypoint` means the hint
/// only contributes options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NativeImageHint {
    pub entrypoint: Option<String>,
    pub name: Option<String>,
    pub options: Vec<NativeImageOption>,
    pub option_names: Vec<String>,
}

/// Attribute bag of every hint a declaration carries.
///
/// Repeatable hint kinds are plain lists; a singular hint is a one-element
/// list, so extraction has a single code path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HintAttributes {
    pub reflection: Vec<AccessHint>,
    pub jni: Vec<AccessHint>,
    pub initialization: Vec<InitializationHint>,
    pub dynamic_proxy: Option<DynamicProxyHint>,
    pub link: Option<LinkHint>,
    pub resource: Option<ResourceHint>,
    pub native_image: Option<NativeImageHint>,
}

impl HintAttributes {
    /// Whether any hint of the given kind is present on the declaration.
    pub fn carries(&self, kind: HintKind) -> bool {
        match kind {
            HintKind::Reflection => !self.reflection.is_empty(),
            HintKind::Jni => !self.jni.is_empty(),
            HintKind::Initialization => !self.initialization.is_empty(),
            HintKind::DynamicProxy => self.dynamic_proxy.is_some(),
            HintKind::Link => self.link.is_some(),
            HintKind::Resource => self.resource.is_some(),
            HintKind::NativeImage => self.native_image.is_some(),
        }
    }

    pub fn is_empty(&self) -> bool {
        HintKind::ALL.iter().all(|kind| !self.carries(*kind))
    }
}

/// Kind of a hint-carrying type declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclarationKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
    Record,
}

impl DeclarationKind {
    /// Annotations are interfaces on the JVM.
    pub fn is_interface(self) -> bool {
        matches!(self, DeclarationKind::Interface | DeclarationKind::Annotation)
    }
}

/// One hint-carrying type declaration. Enclosing scope and package live in
/// the [`crate::source::HintSource`] that owns the declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
    pub hints: HintAttributes,
}

/// JSON manifest form of one compilation unit's worth of declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HintManifest {
    pub package: String,
    pub declarations: Vec<DeclarationManifest>,
}

/// Manifest form of one declaration; nested types are children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeclarationManifest {
    pub name: String,
    pub kind: DeclarationKind,
    pub hints: HintAttributes,
    pub declarations: Vec<DeclarationManifest>,
}
