//! Assembling complete source units.

use inlinegen_foundation::{Error, ErrorContext, Result};
use inlinegen_model::{DeclarationId, Modifier, ValidDescriptor};
use tracing::trace;

use crate::body::{BodyWriter, Group};
use crate::fragment::{BuiltinFragments, FragmentKey, FragmentSource};
use crate::interfaces::InterfaceLists;
use crate::members::{self, Placement};
use crate::nesting::{indent, wrap_containers, wrap_namespace};
use crate::plan::CompositionPlan;
use crate::template::{Bindings, render};

/// Namespace of the support unit.
pub const SUPPORT_NAMESPACE: &str = "InlineCollections";

/// Hint name of the support unit.
pub const SUPPORT_HINT_NAME: &str = "InlineCollections.Support.g.cs";

/// Composer settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ComposeOptions {
    /// Spaces per indentation level.
    pub indent_width: usize,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

/// One generated source file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeneratedUnit {
    /// The declaration this unit was generated for; `None` for the support unit.
    pub id: Option<DeclarationId>,
    /// Suggested file name.
    pub hint_name: String,
    /// Source text with `\n` line endings and a trailing newline.
    pub text: String,
}

/// Composes source units from valid descriptors.
#[derive(Clone, Debug)]
pub struct Composer<S = BuiltinFragments> {
    source: S,
    options: ComposeOptions,
}

impl Composer {
    /// Creates a composer over the built-in fragment catalog.
    #[must_use]
    pub fn new(options: ComposeOptions) -> Self {
        Self::with_source(BuiltinFragments, options)
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(ComposeOptions::default())
    }
}

impl<S: FragmentSource> Composer<S> {
    /// Creates a composer over a custom fragment source.
    pub fn with_source(source: S, options: ComposeOptions) -> Self {
        Self { source, options }
    }

    /// The composer's settings.
    #[must_use]
    pub fn options(&self) -> ComposeOptions {
        self.options
    }

    fn render(&self, key: FragmentKey, bindings: &Bindings) -> Result<String> {
        let mut text = render(&key.name(), self.source.fragment(key), bindings)?;
        text.truncate(text.trim_end().len());
        Ok(text)
    }

    /// Composes the unit for one descriptor.
    ///
    /// # Errors
    ///
    /// Returns a template error if a fragment references an unbound
    /// placeholder. The built-in catalog never does.
    pub fn compose(&self, descriptor: &ValidDescriptor) -> Result<GeneratedUnit> {
        self.compose_text(descriptor)
            .map(|text| {
                trace!(declaration = %descriptor.id(), bytes = text.len(), "composed unit");
                GeneratedUnit {
                    id: Some(descriptor.id().clone()),
                    hint_name: hint_name(descriptor),
                    text,
                }
            })
            .map_err(|e: Error| {
                e.with_context(
                    ErrorContext::new()
                        .with_phase("compose")
                        .with_declaration(descriptor.id().as_str()),
                )
            })
    }

    fn compose_text(&self, descriptor: &ValidDescriptor) -> Result<String> {
        let width = self.options.indent_width;
        let plan = CompositionPlan::resolve(descriptor.capabilities());
        let element = descriptor.element().ty.as_str();

        let base = base_bindings(descriptor);
        let primary_bindings = view_bindings(base.clone(), descriptor, "this", "readonly ");
        let helper_bindings = view_bindings(base, descriptor, "collection", "");

        let mut primary = BodyWriter::new();
        let mut helper = BodyWriter::new();
        for (row, key) in members::select(&plan) {
            let to_helper = row.placement == Placement::Interfaces && plan.is_delegated();
            if to_helper {
                helper.push(row.group, &self.render(key, &helper_bindings)?);
            } else {
                primary.push(row.group, &self.render(key, &primary_bindings)?);
            }
        }

        let lists = InterfaceLists::compose(&plan, element);
        if plan.is_delegated() {
            let view = primary_bindings
                .clone()
                .with("interfaces", lists.helper.join(", "))
                .with("members", indent(&helper.finish(), 1, width));
            primary.push(
                Group::Nested,
                &self.render(FragmentKey::InterfaceViewType, &view)?,
            );
        }

        let interface_clause = if lists.primary.is_empty() {
            String::new()
        } else {
            format!(" : {}", lists.primary.join(", "))
        };
        let attributes = descriptor
            .factory()
            .map(|f| format!("[CollectionBuilder(typeof({}), \"Create\")]\n", f.name))
            .unwrap_or_default();
        let declaration = self.render(
            FragmentKey::CollectionDeclaration,
            &primary_bindings
                .clone()
                .with("attributes", attributes)
                .with("interface_clause", interface_clause)
                .with("body", indent(&primary.finish(), 1, width)),
        )?;

        let mut content =
            wrap_containers(declaration, descriptor.declaration().containers(), width);

        if let Some(factory) = descriptor.factory() {
            let all_public = descriptor
                .frames()
                .iter()
                .all(|f| f.modifiers.first() == Some(&Modifier::Public));
            let access = if all_public { "public" } else { "internal" };
            let bindings = primary_bindings
                .clone()
                .with("access", access)
                .with("factory", factory.name.clone())
                .with("type_parameters", factory.type_parameter_list())
                .with("qualified", factory.collection_type.clone())
                .with("element", factory.element_type.clone());
            content.push_str("\n\n");
            content.push_str(&self.render(FragmentKey::FactoryType, &bindings)?);
        }

        let content = wrap_namespace(content, descriptor.namespace(), width);
        let header = self.render(
            FragmentKey::UnitHeader,
            &Bindings::new().with("support_namespace", SUPPORT_NAMESPACE),
        )?;

        Ok(finish_unit(&format!("{header}\n\n{content}")))
    }

    /// Composes the shared support unit.
    ///
    /// # Errors
    ///
    /// Returns a template error if the support fragment references an
    /// unbound placeholder.
    pub fn compose_support(&self) -> Result<GeneratedUnit> {
        let text = self.render(
            FragmentKey::SupportUnit,
            &Bindings::new().with("support_namespace", SUPPORT_NAMESPACE),
        )?;
        Ok(GeneratedUnit {
            id: None,
            hint_name: SUPPORT_HINT_NAME.to_string(),
            text: finish_unit(&text),
        })
    }
}

fn base_bindings(descriptor: &ValidDescriptor) -> Bindings {
    let innermost = descriptor.innermost();
    Bindings::new()
        .with("element", descriptor.element().ty.clone())
        .with("field", descriptor.element().name.clone())
        .with("length", descriptor.length().to_string())
        .with("name", innermost.name.clone())
        .with("type", innermost.display_name())
        .with("kind", innermost.kind.keyword())
        .with("modifiers", innermost.modifier_text())
        .with("qualified", descriptor.qualified_name())
}

/// Binds the storage expression members operate on.
fn view_bindings(
    bindings: Bindings,
    descriptor: &ValidDescriptor,
    target: &str,
    readonly: &str,
) -> Bindings {
    let field = &descriptor.element().name;
    bindings
        .with("self", target)
        .with("readonly", readonly)
        .with(
            "read_view",
            format!(
                "MemoryMarshal.CreateReadOnlySpan(ref Unsafe.AsRef(in {target}.{field}), InlineLength)"
            ),
        )
        .with(
            "write_view",
            format!("MemoryMarshal.CreateSpan(ref {target}.{field}, InlineLength)"),
        )
}

/// Normalizes line endings and ends the text with exactly one newline.
fn finish_unit(text: &str) -> String {
    let mut out = text
        .replace("\r\n", "\n")
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

/// File name for a descriptor's unit, e.g. ``Demo.Outer`1+Buffer.g.cs``.
///
/// Namespace segments keep their dots; frames are joined with `+` and generic
/// frames carry a backtick arity, so the frame chain never reads as part of
/// the namespace.
#[must_use]
pub fn hint_name(descriptor: &ValidDescriptor) -> String {
    let chain = descriptor
        .frames()
        .iter()
        .map(|frame| {
            if frame.arity() == 0 {
                frame.name.clone()
            } else {
                format!("{}`{}", frame.name, frame.arity())
            }
        })
        .collect::<Vec<_>>()
        .join("+");
    match descriptor.namespace() {
        Some(ns) if !ns.is_empty() => format!("{ns}.{chain}.g.cs"),
        _ => format!("{chain}.g.cs"),
    }
}
