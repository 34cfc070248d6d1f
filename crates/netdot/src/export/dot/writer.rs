//! Indented DOT statement writer.
//!
//! [`DotWriter`] owns the output buffer, the indentation depth and the
//! statement syntax. Renderers hand it raw ids and raw label text; it routes
//! every id through [`escape_node_id`] and every label through
//! [`escape_label`] exactly once.

use std::fmt::{self, Write};

use netdot_core::identifier::{cluster_id, escape_label, escape_node_id};

const INDENT: &str = "  ";

/// A single `key=value` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    key: &'static str,
    value: AttrValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrValue {
    /// Written as is: keywords, colors, numbers.
    Raw(String),
    /// Written inside quotes without escaping; only for fixed vocabulary.
    Quoted(&'static str),
    /// User text, escaped and quoted.
    Label(String),
}

impl Attr {
    pub fn raw(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: AttrValue::Raw(value.into()),
        }
    }

    pub fn quoted(key: &'static str, value: &'static str) -> Self {
        Self {
            key,
            value: AttrValue::Quoted(value),
        }
    }

    /// A `label="..."` attribute built from user text.
    pub fn label(text: impl Into<String>) -> Self {
        Self {
            key: "label",
            value: AttrValue::Label(text.into()),
        }
    }

    /// A `style` attribute, quoted only when it lists several keywords.
    pub fn style(value: &'static str) -> Self {
        if value.contains(',') {
            Self::quoted("style", value)
        } else {
            Self::raw("style", value)
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            AttrValue::Raw(value) => write!(f, "{}={}", self.key, value),
            AttrValue::Quoted(value) => write!(f, "{}=\"{}\"", self.key, value),
            AttrValue::Label(text) => write!(f, "{}=\"{}\"", self.key, escape_label(text)),
        }
    }
}

/// Joins label lines with newlines, skipping the missing ones.
///
/// Returns `None` when every line is missing.
pub fn label_lines<I, S>(lines: I) -> Option<String>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut label: Option<String> = None;
    for line in lines.into_iter().flatten() {
        match &mut label {
            Some(label) => {
                label.push('\n');
                label.push_str(line.as_ref());
            }
            None => label = Some(line.as_ref().to_string()),
        }
    }
    label
}

/// Visual style of a node: shape, style keywords, fill and border colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    pub shape: &'static str,
    pub style: &'static str,
    pub fill: &'static str,
    pub color: &'static str,
    pub penwidth: &'static str,
}

impl NodeStyle {
    /// The default rounded `box3d` node.
    pub const fn box3d(fill: &'static str, color: &'static str, penwidth: &'static str) -> Self {
        Self {
            shape: "box3d",
            style: "rounded,filled",
            fill,
            color,
            penwidth,
        }
    }

    /// A `tab` node, used for ports.
    pub const fn tab(
        style: &'static str,
        fill: &'static str,
        color: &'static str,
        penwidth: &'static str,
    ) -> Self {
        Self {
            shape: "tab",
            style,
            fill,
            color,
            penwidth,
        }
    }

    pub const fn with_style(mut self, style: &'static str) -> Self {
        self.style = style;
        self
    }

    /// Returns `label` followed by this style's attributes.
    pub fn attrs(&self, label: impl Into<String>) -> Vec<Attr> {
        vec![
            Attr::label(label),
            Attr::raw("shape", self.shape),
            Attr::style(self.style),
            Attr::raw("fillcolor", self.fill),
            Attr::raw("color", self.color),
            Attr::raw("penwidth", self.penwidth),
        ]
    }
}

/// Writes DOT statements into a string buffer.
#[derive(Debug, Default)]
pub struct DotWriter {
    out: String,
    depth: usize,
}

impl DotWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the root `digraph G {` block.
    pub fn begin_graph(&mut self) -> fmt::Result {
        self.open("digraph G")
    }

    /// Opens a `subgraph cluster_<raw> {` block.
    pub fn begin_cluster(&mut self, raw: &str) -> fmt::Result {
        self.open(&format!("subgraph {}", cluster_id(raw)))
    }

    /// Closes the innermost open block.
    pub fn end_block(&mut self) -> fmt::Result {
        self.depth = self.depth.saturating_sub(1);
        self.indent()?;
        self.out.write_str("}\n")
    }

    /// Writes `text;` on its own line.
    pub fn statement(&mut self, text: &str) -> fmt::Result {
        self.indent()?;
        writeln!(self.out, "{text};")
    }

    /// Writes a graph or cluster attribute statement such as `style=rounded;`.
    pub fn attribute(&mut self, attr: Attr) -> fmt::Result {
        self.indent()?;
        writeln!(self.out, "{attr};")
    }

    /// Writes a node statement.
    pub fn node(&mut self, raw_id: &str, attrs: &[Attr]) -> fmt::Result {
        self.indent()?;
        self.out.write_str(&escape_node_id(raw_id))?;
        self.attr_list(attrs)?;
        self.out.write_str(";\n")
    }

    /// Writes an edge statement. An empty attribute list omits the brackets.
    pub fn edge(&mut self, from: &str, to: &str, attrs: &[Attr]) -> fmt::Result {
        self.indent()?;
        write!(
            self.out,
            "{} -> {}",
            escape_node_id(from),
            escape_node_id(to)
        )?;
        self.attr_list(attrs)?;
        self.out.write_str(";\n")
    }

    /// Chains consecutive ids with `style=invis` edges to fix their order.
    pub fn invisible_chain<S: AsRef<str>>(&mut self, raw_ids: &[S]) -> fmt::Result {
        for pair in raw_ids.windows(2) {
            self.edge(
                pair[0].as_ref(),
                pair[1].as_ref(),
                &[Attr::raw("style", "invis")],
            )?;
        }
        Ok(())
    }

    /// Writes `{ rank=same; a; b; }`.
    pub fn rank_same<S: AsRef<str>>(&mut self, raw_ids: &[S]) -> fmt::Result {
        self.indent()?;
        self.out.write_str("{ rank=same; ")?;
        for id in raw_ids {
            write!(self.out, "{}; ", escape_node_id(id.as_ref()))?;
        }
        self.out.write_str("}\n")
    }

    /// Writes a `// text` line. Newlines in `text` become spaces.
    pub fn comment(&mut self, text: &str) -> fmt::Result {
        self.indent()?;
        writeln!(self.out, "// {}", text.replace(['\r', '\n'], " "))
    }

    pub fn blank(&mut self) -> fmt::Result {
        self.out.write_char('\n')
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn open(&mut self, header: &str) -> fmt::Result {
        self.indent()?;
        writeln!(self.out, "{header} {{")?;
        self.depth += 1;
        Ok(())
    }

    fn indent(&mut self) -> fmt::Result {
        for _ in 0..self.depth {
            self.out.write_str(INDENT)?;
        }
        Ok(())
    }

    fn attr_list(&mut self, attrs: &[Attr]) -> fmt::Result {
        if attrs.is_empty() {
            return Ok(());
        }
        self.out.write_str(" [")?;
        for (i, attr) in attrs.iter().enumerate() {
            if i > 0 {
                self.out.write_str(", ")?;
            }
            write!(self.out, "{attr}")?;
        }
        self.out.write_char(']')
    }
}
