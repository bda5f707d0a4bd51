//! Naming conventions for generated factories and registries.
//!
//! Type names come in binary form: `.` separates namespaces, `$` separates
//! nested types (`app.model.Order$Line`). Generated names live in the same
//! namespace as the type they were generated for.

use serde::Deserialize;

pub use factory_registry::normalize_type_name;

/// Joiner that replaces the nested-type separator inside generated names.
pub const NESTED_JOINER: &str = "_";

/// Which kind of helper a registry resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryKind {
    /// Factories that build new instances.
    #[default]
    Factory,
    /// Member injectors that fill in existing instances.
    MemberInjector,
}

impl RegistryKind {
    /// Parse the configuration spelling (`factory`, `member_injector`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "factory" => Some(Self::Factory),
            "member_injector" => Some(Self::MemberInjector),
            _ => None,
        }
    }

    /// Name of the generated registry type.
    pub const fn registry_type(self) -> &'static str {
        match self {
            Self::Factory => "FactoryRegistry",
            Self::MemberInjector => "MemberInjectorRegistry",
        }
    }

    /// Marker appended to a type's name to get its generated helper.
    pub const fn factory_suffix(self) -> &'static str {
        match self {
            Self::Factory => "__Factory",
            Self::MemberInjector => "__MemberInjector",
        }
    }

    /// Runtime trait the generated helpers implement.
    pub const fn product_trait(self) -> &'static str {
        match self {
            Self::Factory => "Factory",
            Self::MemberInjector => "MemberInjector",
        }
    }

    /// Prefix of the per-bucket accessor methods.
    pub const fn accessor_prefix(self) -> &'static str {
        match self {
            Self::Factory => "factory_bucket_",
            Self::MemberInjector => "member_injector_bucket_",
        }
    }

    /// Human-readable label used in generated docs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Factory => "Factory",
            Self::MemberInjector => "Member injector",
        }
    }
}

/// Generated helper name for a binary type name.
///
/// `app.model.Order$Line` becomes `app.model.Order_Line__Factory` for
/// [`RegistryKind::Factory`].
pub fn factory_name(binary_type_name: &str, kind: RegistryKind) -> String {
    let (namespace, simple) = match binary_type_name.rsplit_once('.') {
        Some((namespace, simple)) => (Some(namespace), simple),
        None => (None, binary_type_name),
    };
    let simple = simple.replace('$', NESTED_JOINER);
    match namespace {
        Some(namespace) => format!("{namespace}.{simple}{}", kind.factory_suffix()),
        None => format!("{simple}{}", kind.factory_suffix()),
    }
}

/// Fully qualified name of the registry generated for `package`.
pub fn registry_name(package: &str, kind: RegistryKind) -> String {
    if package.is_empty() {
        kind.registry_type().to_string()
    } else {
        format!("{package}.{}", kind.registry_type())
    }
}

/// Render a dot-separated name as a Rust path (`a.b.C` -> `a::b::C`).
pub fn rust_path(dotted: &str) -> String {
    dotted.replace('.', "::")
}
