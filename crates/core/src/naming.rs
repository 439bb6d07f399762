use hintforge_api::{DeclarationId, Enclosing, HintSource};

/// Marker suffix carried by class-literal type references.
pub const CLASS_LITERAL_SUFFIX: &str = ".class";

/// Separator between an outer and a nested type in a binary class name.
pub const NESTED_SEPARATOR: char = '$';

/// Separator between packages and between package/class.
pub const PACKAGE_SEPARATOR: char = '.';

/// Canonicalize a raw type reference into a fully qualified target name.
///
/// A reference carrying the `.class` literal marker has the marker stripped
/// and its nested-type chain rewritten with `$`: trailing segments that
/// start with an upper-case letter are treated as the type chain, the first
/// lower-case segment ends the walk and marks the package boundary.
/// Anything without the marker passes through unchanged, malformed input
/// included.
///
/// # Examples
/// ```ignore
/// canonical_target("pkg.Outer.Inner.class") => "pkg.Outer$Inner"
/// canonical_target("pkg.Outer$Inner") => "pkg.Outer$Inner"
/// canonical_target("pkg.Foo") => "pkg.Foo"
/// ```
pub fn canonical_target(raw: &str) -> String {
    let Some(stripped) = raw.strip_suffix(CLASS_LITERAL_SUFFIX) else {
        return raw.to_string();
    };

    let mut package = stripped;
    let mut chain: Vec<&str> = Vec::new();
    while let Some(separator) = package.rfind(PACKAGE_SEPARATOR) {
        let segment = &package[separator + 1..];
        if !segment.chars().next().is_some_and(|c| c.is_uppercase()) {
            break;
        }
        chain.push(segment);
        package = &package[..separator];
    }

    if chain.is_empty() {
        return stripped.to_string();
    }

    chain.reverse();
    let mut name = String::with_capacity(stripped.len());
    name.push_str(package);
    name.push(PACKAGE_SEPARATOR);
    for (index, segment) in chain.iter().enumerate() {
        if index > 0 {
            name.push(NESTED_SEPARATOR);
        }
        name.push_str(segment);
    }
    name
}

/// Binary name of a declaration: enclosing type names joined with `$` in
/// outer-to-inner order, prefixed by the package.
pub fn binary_name(source: &dyn HintSource, id: DeclarationId) -> String {
    qualified_name(source, id, NESTED_SEPARATOR)
}

/// Source-style dotted name of a declaration, for diagnostics.
pub fn source_name(source: &dyn HintSource, id: DeclarationId) -> String {
    qualified_name(source, id, PACKAGE_SEPARATOR)
}

fn qualified_name(source: &dyn HintSource, id: DeclarationId, joiner: char) -> String {
    let mut simple_names = vec![source.declaration(id).name.as_str()];
    let mut current = id;
    let package = loop {
        match source.enclosing_of(current) {
            Enclosing::Type(parent) => {
                simple_names.push(source.declaration(parent).name.as_str());
                current = parent;
            }
            Enclosing::Package(package) => break package,
            Enclosing::None => break "",
        }
    };
    simple_names.reverse();

    let mut name = String::new();
    if !package.is_empty() {
        name.push_str(package);
        name.push(PACKAGE_SEPARATOR);
    }
    for (index, segment) in simple_names.iter().enumerate() {
        if index > 0 {
            name.push(joiner);
        }
        name.push_str(segment);
    }
    name
}
