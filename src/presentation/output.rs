//! Output Rendering
//!
//! Text and JSON renderings of use-case results. Renderers return strings;
//! printing is left to the caller.

use crossterm::style::{Color, Stylize};

use crate::application::{ContextResult, NodeSummary, StatusResult};
use crate::config::{ColorMode, OutputConfig};
use crate::domain::entities::SpecNode;
use crate::domain::value_objects::NodeState;

use super::cli::ColorWhen;
use super::terminal::TerminalCapabilities;

/// Resolved presentation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStyle {
    pub color: bool,
    pub unicode: bool,
}

impl OutputStyle {
    /// Plain ASCII without color
    pub const PLAIN: Self = Self {
        color: false,
        unicode: false,
    };

    pub fn resolve(
        cli_color: Option<ColorWhen>,
        config: &OutputConfig,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            color,
            unicode: config.unicode && caps.supports_unicode,
        }
    }

    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn state_icon(&self, state: NodeState) -> String {
        let icons = self.icons();
        let (icon, color) = match state {
            NodeState::Valid => (icons.valid, Color::Green),
            NodeState::Stale => (icons.stale, Color::Yellow),
            NodeState::NeedsWork => (icons.needs_work, Color::DarkGrey),
        };
        if self.color {
            format!("{}", icon.with(color))
        } else {
            icon.to_string()
        }
    }

    fn node_line(&self, state: NodeState, name: &str) -> String {
        format!("{} {} ({})", self.state_icon(state), name, state.label())
    }
}

/// Icons and tree connectors
struct Icons {
    valid: &'static str,
    stale: &'static str,
    needs_work: &'static str,
    branch: &'static str,
    last: &'static str,
    pipe: &'static str,
    blank: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            valid: "✓",
            stale: "⚠",
            needs_work: "○",
            branch: "├── ",
            last: "└── ",
            pipe: "│   ",
            blank: "    ",
        }
    }

    fn ascii() -> Self {
        Self {
            valid: "[OK]",
            stale: "[WARN]",
            needs_work: "[ ]",
            branch: "|-- ",
            last: "`-- ",
            pipe: "|   ",
            blank: "    ",
        }
    }
}

/// Tree drawing followed by the per-state totals
pub fn render_status(result: &StatusResult, style: OutputStyle) -> String {
    let mut out = String::new();
    out.push_str(&style.node_line(result.tree.state(), result.tree.slug()));
    out.push('\n');
    render_children(&result.tree, "", style, &mut out);

    let counts = result.counts;
    out.push('\n');
    out.push_str(&format!(
        "{} nodes: {} valid, {} stale, {} {}\n",
        counts.total(),
        counts.valid,
        counts.stale,
        counts.needs_work,
        NodeState::NeedsWork.label()
    ));
    out
}

fn render_children(node: &SpecNode, prefix: &str, style: OutputStyle, out: &mut String) {
    let icons = style.icons();
    let count = node.children().len();
    for (i, child) in node.children().iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { icons.last } else { icons.branch };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&style.node_line(child.state(), child.slug()));
        out.push('\n');

        let extension = if is_last { icons.blank } else { icons.pipe };
        render_children(child, &format!("{prefix}{extension}"), style, out);
    }
}

/// Ancestor path, one node per line, indented by depth
pub fn render_path(result: &ContextResult, style: OutputStyle) -> String {
    let mut out = String::new();
    for node in &result.path {
        out.push_str(&"  ".repeat(node.depth));
        out.push_str(&style.node_line(node.state, &node.id));
        out.push('\n');
    }
    out
}

/// Context set grouped into the path and the lower-index siblings
pub fn render_context(result: &ContextResult, style: OutputStyle) -> String {
    let target = result
        .target
        .as_ref()
        .map(|t| t.id.as_str())
        .unwrap_or(result.query.as_str());

    let mut out = format!("Context for {} ({} nodes)\n\n", target, result.len());
    render_group("On path", &result.path, style, &mut out);
    out.push('\n');
    render_group("Lower-index siblings", &result.siblings, style, &mut out);
    out
}

fn render_group(title: &str, nodes: &[NodeSummary], style: OutputStyle, out: &mut String) {
    out.push_str(&format!("{} ({}):\n", title, nodes.len()));
    if nodes.is_empty() {
        out.push_str("  (none)\n");
    }
    for node in nodes {
        out.push_str("  ");
        out.push_str(&style.node_line(node.state, &node.id));
        out.push('\n');
    }
}

/// Pre-order listing with id, type and state
pub fn render_list(tree: &SpecNode, style: OutputStyle) -> String {
    let mut out = String::new();
    for node in tree.iter() {
        out.push_str(&"  ".repeat(node.depth()));
        out.push_str(&style.node_line(
            node.state(),
            &format!("{} [{}]", node.id(), node.node_type()),
        ));
        out.push('\n');
    }
    out
}

pub fn status_json(result: &StatusResult, rollup: bool) -> serde_json::Value {
    serde_json::json!({
        "source": result.source,
        "rollup": rollup,
        "counts": result.counts,
        "tree": result.tree,
        "warnings": result.warnings,
    })
}

pub fn path_json(result: &ContextResult) -> serde_json::Value {
    serde_json::json!({
        "query": result.query,
        "found": result.found(),
        "path": result.path,
        "warnings": result.warnings,
    })
}

pub fn context_json(result: &ContextResult) -> serde_json::Value {
    serde_json::json!({
        "query": result.query,
        "found": result.found(),
        "count": result.len(),
        "target": result.target,
        "path": result.path,
        "siblings": result.siblings,
        "warnings": result.warnings,
    })
}

pub fn list_json(tree: &SpecNode, warnings: &[String]) -> serde_json::Value {
    let nodes: Vec<NodeSummary> = tree.iter().map(NodeSummary::from).collect();
    serde_json::json!({
        "count": nodes.len(),
        "nodes": nodes,
        "warnings": warnings,
    })
}
