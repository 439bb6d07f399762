use crate::models::{Declaration, DeclarationManifest, HintKind, HintManifest};

/// Opaque handle to a declaration inside one [`HintSource`].
///
/// Ids are only meaningful against the source that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclarationId(usize);

impl DeclarationId {
    pub fn new(index: usize) -> Self {
        DeclarationId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// The scope immediately enclosing a declaration: a nested type's outer
/// type, or the package for a top-level type. `None` marks a declaration
/// with neither (default package, no enclosing type).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enclosing<'a> {
    Type(DeclarationId),
    Package(&'a str),
    None,
}

/// Declaration Provider: the engine's only view of the closed set of
/// hint-carrying declarations known for one run.
pub trait HintSource {
    /// All declarations carrying at least one hint of the given kind, in a
    /// stable order.
    fn declarations_with(&self, kind: HintKind) -> Vec<DeclarationId>;

    /// Look up a declaration. The id must come from this source.
    fn declaration(&self, id: DeclarationId) -> &Declaration;

    /// The scope immediately enclosing the declaration.
    fn enclosing_of(&self, id: DeclarationId) -> Enclosing<'_>;

    /// Package of the declaration, walking out through enclosing types.
    /// Empty for the default package.
    fn package_of(&self, id: DeclarationId) -> &str {
        let mut current = id;
        loop {
            match self.enclosing_of(current) {
                Enclosing::Type(parent) => current = parent,
                Enclosing::Package(package) => return package,
                Enclosing::None => return "",
            }
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    declaration: Declaration,
    package: String,
    parent: Option<DeclarationId>,
}

/// In-memory declaration arena, usually built from [`HintManifest`] files.
#[derive(Debug, Clone, Default)]
pub struct DeclarationSet {
    nodes: Vec<Node>,
}

impl DeclarationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_manifest(manifest: &HintManifest) -> Self {
        let mut set = Self::new();
        set.extend_from_manifest(manifest);
        set
    }

    /// Append every declaration of the manifest, preserving nesting.
    pub fn extend_from_manifest(&mut self, manifest: &HintManifest) {
        for declaration in &manifest.declarations {
            self.push_manifest_declaration(&manifest.package, None, declaration);
        }
    }

    fn push_manifest_declaration(
        &mut self,
        package: &str,
        parent: Option<DeclarationId>,
        manifest: &DeclarationManifest,
    ) {
        let id = self.push(
            package,
            parent,
            Declaration {
                name: manifest.name.clone(),
                kind: manifest.kind,
                hints: manifest.hints.clone(),
            },
        );
        for child in &manifest.declarations {
            self.push_manifest_declaration(package, Some(id), child);
        }
    }

    /// Append a single declaration and return its id.
    pub fn push(
        &mut self,
        package: &str,
        parent: Option<DeclarationId>,
        declaration: Declaration,
    ) -> DeclarationId {
        let id = DeclarationId::new(self.nodes.len());
        self.nodes.push(Node {
            declaration,
            package: package.to_string(),
            parent,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = DeclarationId> + '_ {
        (0..self.nodes.len()).map(DeclarationId::new)
    }
}

impl HintSource for DeclarationSet {
    fn declarations_with(&self, kind: HintKind) -> Vec<DeclarationId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.declaration.hints.carries(kind))
            .map(|(index, _)| DeclarationId::new(index))
            .collect()
    }

    fn declaration(&self, id: DeclarationId) -> &Declaration {
        &self.nodes[id.index()].declaration
    }

    fn enclosing_of(&self, id: DeclarationId) -> Enclosing<'_> {
        let node = &self.nodes[id.index()];
        match node.parent {
            Some(parent) => Enclosing::Type(parent),
            None if node.package.is_empty() => Enclosing::None,
            None => Enclosing::Package(&node.package),
        }
    }
}
