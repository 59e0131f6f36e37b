//! Re-nesting generated declarations inside their containers.

use inlinegen_model::ContainerFrame;

/// Indents every non-empty line by `levels` times `width` spaces.
#[must_use]
pub fn indent(text: &str, levels: usize, width: usize) -> String {
    let pad = " ".repeat(levels * width);
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wraps `text` in a braced block under `header`.
#[must_use]
pub fn block(header: &str, text: &str, width: usize) -> String {
    if text.is_empty() {
        format!("{header}\n{{\n}}")
    } else {
        format!("{header}\n{{\n{}\n}}", indent(text, 1, width))
    }
}

/// Declaration header of a container frame, e.g. `public static partial class Outer<T>`.
#[must_use]
pub fn frame_header(frame: &ContainerFrame) -> String {
    let modifiers = frame.modifier_text();
    if modifiers.is_empty() {
        format!("{} {}", frame.kind.keyword(), frame.display_name())
    } else {
        format!("{modifiers} {} {}", frame.kind.keyword(), frame.display_name())
    }
}

/// Wraps `text` in every container, innermost first, so the outermost
/// container ends up outside.
#[must_use]
pub fn wrap_containers(text: String, containers: &[ContainerFrame], width: usize) -> String {
    containers
        .iter()
        .rev()
        .fold(text, |inner, frame| block(&frame_header(frame), &inner, width))
}

/// Wraps `text` in a namespace block, if there is a namespace.
#[must_use]
pub fn wrap_namespace(text: String, namespace: Option<&str>, width: usize) -> String {
    match namespace {
        Some(ns) if !ns.is_empty() => block(&format!("namespace {ns}"), &text, width),
        _ => text,
    }
}
