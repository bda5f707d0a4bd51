//! Two-level dispatch synthesis.
//!
//! The outer `lookup` switches on the masked hash; each bucket index gets a
//! private accessor that switches on the exact type name. Every miss, at
//! either level, delegates to the child registries.
//!
//! Output only depends on the partition and the context, so the same inputs
//! always produce the same text.

use crate::naming::{rust_path, RegistryKind};
use crate::partition::Partition;

/// Field of the generated registry holding its children.
pub(crate) const CHILDREN_FIELD: &str = "children";

/// Rendering context shared by the synthesizer and the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchContext {
    runtime: String,
    kind: RegistryKind,
}

impl DispatchContext {
    pub fn new(runtime_crate: &str, kind: RegistryKind) -> Self {
        let path = rust_path(runtime_crate);
        let relative = matches!(
            path.split("::").next(),
            Some("crate" | "self" | "super")
        );
        let runtime = if relative { path } else { format!("::{path}") };
        Self { runtime, kind }
    }

    pub fn kind(&self) -> RegistryKind {
        self.kind
    }

    /// Path to an item of the runtime crate.
    pub fn runtime_item(&self, item: &str) -> String {
        format!("{}::{item}", self.runtime)
    }

    /// Trait object type the registry hands out.
    pub fn product(&self) -> String {
        format!("dyn {}", self.runtime_item(self.kind.product_trait()))
    }

    /// Return type of `lookup` and the bucket accessors.
    pub fn lookup_result(&self) -> String {
        format!("Option<Box<{}>>", self.product())
    }

    pub fn accessor_name(&self, index: usize) -> String {
        format!("{}{index}", self.kind.accessor_prefix())
    }
}

fn delegate(type_name: &str) -> String {
    format!("self.{CHILDREN_FIELD}.lookup({type_name})")
}

/// The `lookup` method of the `Registry` impl.
///
/// One arm per bucket index. With no buckets the match keeps only the
/// delegating default arm.
pub fn synthesize_lookup(partition: &Partition<'_>, ctx: &DispatchContext) -> String {
    let mut out = String::new();
    out.push_str("    #[allow(clippy::erasing_op, clippy::match_single_binding)]\n");
    out.push_str(&format!(
        "    fn lookup(&self, type_name: &str) -> {} {{\n",
        ctx.lookup_result()
    ));
    out.push_str(&format!(
        "        let type_name = {}(type_name);\n",
        ctx.runtime_item("normalize_type_name")
    ));
    out.push_str(&format!(
        "        let bucket = {}(&type_name) & {};\n",
        ctx.runtime_item("type_name_hash"),
        partition.mask()
    ));
    out.push_str("        match bucket {\n");
    for (index, _) in partition.buckets() {
        out.push_str(&format!(
            "            {index} => self.{}(&type_name),\n",
            ctx.accessor_name(index)
        ));
    }
    out.push_str(&format!("            _ => {},\n", delegate("&type_name")));
    out.push_str("        }\n");
    out.push_str("    }\n");
    out
}

/// One private accessor per bucket, each preceded by a blank line.
///
/// Empty buckets still get an accessor; it delegates unconditionally.
pub fn synthesize_accessors(partition: &Partition<'_>, ctx: &DispatchContext) -> String {
    let mut out = String::new();
    for (index, entries) in partition.buckets() {
        out.push('\n');
        out.push_str(&format!(
            "    fn {}(&self, type_name: &str) -> {} {{\n",
            ctx.accessor_name(index),
            ctx.lookup_result()
        ));
        if entries.is_empty() {
            out.push_str(&format!("        {}\n", delegate("type_name")));
        } else {
            out.push_str("        match type_name {\n");
            for entry in entries {
                out.push_str(&format!(
                    "            {:?} => Some(Box::new({}::default())),\n",
                    entry.type_name,
                    rust_path(&entry.factory_name)
                ));
            }
            out.push_str(&format!("            _ => {},\n", delegate("type_name")));
            out.push_str("        }\n");
        }
        out.push_str("    }\n");
    }
    out
}
