//! Inline front-end for factory-registry generation.
//!
//! `registry!` expands to the same source `factory-registry-build` writes from
//! `registry.toml`, for crates that would rather list their types next to the
//! code than run a build script.
//!
//! ```ignore
//! mod model {
//!     #[derive(Default)]
//!     pub struct User;
//!     // User__Factory implements factory_registry::Factory
//! }
//!
//! factory_registry_macro::registry! {
//!     package: "crate",
//!     children: ["crate.plugins"],
//!     types: ["crate.model.User"],
//! }
//!
//! use factory_registry::Registry;
//! let factory = FactoryRegistry::new().lookup("crate.model.User");
//! ```

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{bracketed, Ident, LitInt, LitStr, Result, Token};

use factory_registry_build::{compose, PackageFilter, RegistryConfig, RegistryKind};
use proc_macro_crate::{crate_name, FoundCrate};

/// Package name of the runtime crate, as it appears in Cargo.toml.
const RUNTIME_PACKAGE: &str = "factory-registry";

/// Parsed `registry!` input. Every key but `package` is optional.
#[derive(Default)]
struct RegistryInput {
    kind: Option<RegistryKind>,
    package: Option<LitStr>,
    max_entries_per_bucket: Option<usize>,
    children: Vec<String>,
    excludes: Option<Vec<String>>,
    types: Vec<String>,
}

impl Parse for RegistryInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut result = RegistryInput::default();
        let mut seen: Vec<String> = Vec::new();

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![:]>()?;

            let name = key.to_string();
            if seen.contains(&name) {
                return Err(syn::Error::new(key.span(), format!("duplicate key `{}`", name)));
            }
            seen.push(name);

            if key == "kind" {
                let value: Ident = input.parse()?;
                let kind = RegistryKind::parse(&value.to_string()).ok_or_else(|| {
                    syn::Error::new(
                        value.span(),
                        "expected `factory` or `member_injector`",
                    )
                })?;
                result.kind = Some(kind);
            } else if key == "package" {
                result.package = Some(input.parse()?);
            } else if key == "max_entries_per_bucket" {
                let value: LitInt = input.parse()?;
                result.max_entries_per_bucket = Some(value.base10_parse()?);
            } else if key == "children" {
                result.children = parse_string_list(input)?;
            } else if key == "excludes" {
                result.excludes = Some(parse_string_list(input)?);
            } else if key == "types" {
                result.types = parse_string_list(input)?;
            } else {
                return Err(syn::Error::new(
                    key.span(),
                    format!(
                        "unknown key `{}`; expected one of kind, package, max_entries_per_bucket, children, excludes, types",
                        key
                    ),
                ));
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(result)
    }
}

/// `["a", "b", ...]`, trailing comma allowed.
fn parse_string_list(input: ParseStream) -> Result<Vec<String>> {
    let content;
    bracketed!(content in input);
    let items = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
    Ok(items.iter().map(LitStr::value).collect())
}

impl RegistryInput {
    fn into_config(self, runtime_crate: String) -> Result<RegistryConfig> {
        let package = self
            .package
            .ok_or_else(|| syn::Error::new(Span::call_site(), "missing key `package`"))?;

        let mut config = RegistryConfig::new(package.value())
            .with_kind(self.kind.unwrap_or_default())
            .with_types(self.types);
        config.children = self.children;
        config.runtime_crate = runtime_crate;
        if let Some(max) = self.max_entries_per_bucket {
            config.max_entries_per_bucket = max;
        }
        if let Some(excludes) = self.excludes {
            config.filter = PackageFilter::new(excludes);
        }

        config
            .validate()
            .map_err(|e| syn::Error::new(package.span(), e))?;
        Ok(config)
    }
}

// =============================================================================
// Crate path resolution
// =============================================================================

/// Name the generated code uses for the runtime crate.
///
/// Tests and examples of the runtime crate itself see it under its library
/// name, so `Itself` maps to that rather than to `crate`.
fn runtime_crate_name() -> String {
    match crate_name(RUNTIME_PACKAGE) {
        Ok(FoundCrate::Name(name)) => name,
        Ok(FoundCrate::Itself) | Err(_) => RUNTIME_PACKAGE.replace('-', "_"),
    }
}

// =============================================================================
// Entry point
// =============================================================================

fn expand(input: RegistryInput, runtime_crate: String) -> Result<TokenStream2> {
    let config = input.into_config(runtime_crate)?;
    let code = compose(config.to_def());
    syn::parse_str(&code)
}

#[proc_macro]
pub fn registry(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as RegistryInput);
    match expand(input, runtime_crate_name()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
