//! Stateful DOT writer.
//!
//! The writer sequences discrete structural commands into correctly
//! punctuated DOT text. Three booleans describe the line in progress —
//! whether its indentation has been written, whether an attribute list
//! is open, and whether a chainable token has been written — and are the
//! entire decision state for bracket placement, connector insertion and
//! statement termination.

use plume_enum::{enumerated, Enumerated};
use tracing::trace;

use crate::line::Line;
use crate::sink::{Sink, StringSink};

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

enumerated! {
    /// Kind of graph block to open.
    ///
    /// `Graph` and `Digraph` fix the connector token (`--` or `->`) used
    /// by every edge chain until another graph or digraph opens.
    /// `Subgraph` is purely a nesting construct and leaves the connector
    /// style of the enclosing graph unchanged.
    pub enum GraphKind {
        /// Undirected graph; chains join with `--`.
        Graph => "graph",
        /// Directed graph; chains join with `->`.
        Digraph => "digraph",
        /// Nested block inheriting the enclosing connector style.
        Subgraph => "subgraph",
    }
}

/// Error from a structurally invalid call sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DotError {
    /// `close_graph` was called with no graph open.
    #[error("close_graph called with no open graph")]
    UnbalancedClose,
}

/// Configuration for the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotConfig {
    /// Indent each line by the nesting depth when true.
    pub pretty: bool,

    /// Spaces per nesting level when pretty-printing.
    pub indent_width: usize,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            indent_width: INDENT_WIDTH,
        }
    }
}

impl DotConfig {
    /// Config with pretty-printing disabled.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Default::default()
        }
    }

    /// Config with the given indent width.
    pub fn with_indent_width(indent_width: usize) -> Self {
        Self {
            indent_width,
            ..Default::default()
        }
    }
}

/// Streaming writer for DOT graph-description text.
///
/// The writer owns its sink exclusively; writing to the same destination
/// through another path while the writer is live would desynchronize its
/// line state from the actual stream contents. Dropping the writer
/// releases the sink. An unterminated line or unclosed graph at drop is
/// left as-is; the writer never auto-balances.
pub struct DotWriter<S: Sink = StringSink> {
    sink: S,
    config: DotConfig,
    /// Connector style of the nearest enclosing graph or digraph.
    kind: GraphKind,
    depth: usize,
    /// Indentation has been written for the current line.
    line_open: bool,
    /// An attribute list is open and needs `]` before the line ends.
    in_attr_list: bool,
    /// A chainable token has been written on the current line.
    has_node: bool,
}

impl DotWriter<StringSink> {
    /// Writer over an in-memory sink with the default configuration.
    pub fn new() -> Self {
        Self::with_sink(StringSink::new())
    }

    /// Writer over an in-memory sink with the given configuration.
    pub fn with_config(config: DotConfig) -> Self {
        Self::with_sink_and_config(StringSink::new(), config)
    }

    /// Consume the writer and return the text written so far.
    pub fn output(self) -> String {
        self.sink.output()
    }
}

impl Default for DotWriter<StringSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Sink> DotWriter<S> {
    /// Writer over a specific sink with the default configuration.
    pub fn with_sink(sink: S) -> Self {
        Self::with_sink_and_config(sink, DotConfig::default())
    }

    /// Writer over a specific sink and configuration.
    pub fn with_sink_and_config(sink: S, config: DotConfig) -> Self {
        Self {
            sink,
            config,
            kind: GraphKind::Graph,
            depth: 0,
            line_open: false,
            in_attr_list: false,
            has_node: false,
        }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Current configuration.
    pub fn config(&self) -> DotConfig {
        self.config
    }

    /// Hand the sink back, abandoning any line in progress.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Open a `graph`, `digraph` or `subgraph` block.
    ///
    /// An open attribute list ends its line first. A node chain in
    /// progress instead continues: the connector token is written so the
    /// block itself becomes the chain's next endpoint. An empty `name`
    /// renders no quoted name after the keyword.
    pub fn open_graph(&mut self, kind: GraphKind, name: &str) {
        if self.in_attr_list {
            self.end_line(true);
        }
        if self.has_node {
            self.write_connector();
        }
        if kind != GraphKind::Subgraph {
            self.kind = kind;
        }
        self.open_line();
        self.sink.write_str(kind.name());
        if !name.is_empty() {
            self.sink.write_space();
            self.write_quoted(name);
        }
        self.sink.write_space();
        self.sink.write_str("{");
        self.in_attr_list = false;
        self.has_node = false;
        self.end_line(true);
        self.depth += 1;
        trace!(kind = kind.name(), depth = self.depth, "open graph");
    }

    /// Close the innermost open block.
    ///
    /// Fails without writing anything when no block is open.
    pub fn close_graph(&mut self) -> Result<(), DotError> {
        if self.depth == 0 {
            return Err(DotError::UnbalancedClose);
        }
        self.end_line(true);
        self.depth -= 1;
        self.open_line();
        self.sink.write_str("}");
        self.end_line(true);
        trace!(depth = self.depth, "close graph");
        Ok(())
    }

    /// Write a node token, continuing any chain on the current line.
    ///
    /// A line holding an open attribute list cannot be continued by a
    /// node, so that line is terminated and the node starts the next
    /// one. Otherwise a second node on the same line is joined to the
    /// first with the connector of the nearest enclosing graph or
    /// digraph. Ports render colon-joined after the name; an empty port
    /// list renders no colon at all.
    pub fn node(&mut self, name: &str, ports: &[&str]) {
        if self.in_attr_list {
            self.end_line(true);
            self.node(name, ports);
            return;
        }
        self.open_line();
        if self.has_node {
            self.write_connector();
        }
        self.sink.write_str(name);
        for port in ports {
            self.sink.write_str(":");
            self.sink.write_str(port);
        }
        self.has_node = true;
    }

    /// Write a `"name"="value"` attribute, opening the bracketed list if
    /// this is the line's first attribute.
    ///
    /// Double quotes in either string are escaped with a backslash; no
    /// other transformation is applied.
    pub fn attribute(&mut self, name: &str, value: &str) {
        self.open_line();
        if self.in_attr_list || self.has_node {
            self.sink.write_space();
        }
        if !self.in_attr_list {
            self.sink.write_str("[");
        }
        self.write_quoted(name);
        self.sink.write_str("=");
        self.write_quoted(value);
        // An attribute list counts as chain content: a node following it
        // starts a fresh line rather than picking up a connector.
        self.in_attr_list = true;
        self.has_node = true;
    }

    /// Write `//text` on its own line.
    pub fn comment(&mut self, text: &str) {
        self.end_line(true);
        self.open_line();
        self.sink.write_str("//");
        self.sink.write_str(text);
        self.end_line(true);
    }

    /// Start a line of graph-wide default attributes (`Graph [...]`).
    ///
    /// The keyword counts as line content, so the attributes that follow
    /// open their bracket after it instead of inserting a connector.
    pub fn graph_defaults_line(&mut self) {
        self.defaults_line("Graph");
    }

    /// Start a line of node default attributes (`Node [...]`).
    pub fn node_defaults_line(&mut self) {
        self.defaults_line("Node");
    }

    /// Start a line of edge default attributes (`Edge [...]`).
    pub fn edge_defaults_line(&mut self) {
        self.defaults_line("Edge");
    }

    /// Terminate the current line and return a handle for composing the
    /// next one fluently.
    pub fn start_line(&mut self) -> Line<'_, S> {
        self.end_line(true);
        Line::new(self)
    }

    /// Terminate the current line and start a graph-defaults line.
    pub fn start_graph_defaults_line(&mut self) -> Line<'_, S> {
        self.graph_defaults_line();
        Line::new(self)
    }

    /// Terminate the current line and start a node-defaults line.
    pub fn start_node_defaults_line(&mut self) -> Line<'_, S> {
        self.node_defaults_line();
        Line::new(self)
    }

    /// Terminate the current line and start an edge-defaults line.
    pub fn start_edge_defaults_line(&mut self) -> Line<'_, S> {
        self.edge_defaults_line();
        Line::new(self)
    }

    /// Terminate the line in progress.
    ///
    /// Does nothing when nothing has been written since the last
    /// termination. An open attribute list is closed, and a line that
    /// held any node or attribute content gets its `;` terminator. With
    /// `line_break` the line ends in a newline and the next write
    /// re-applies indentation; without it a single space is written so
    /// the next statement shares the physical line.
    pub fn end_line(&mut self, line_break: bool) {
        if !self.line_open {
            return;
        }
        if self.in_attr_list {
            self.sink.write_str("]");
        }
        if self.in_attr_list || self.has_node {
            self.sink.write_str(";");
        }
        if line_break {
            self.sink.write_newline();
            self.line_open = false;
        } else {
            self.sink.write_space();
        }
        self.in_attr_list = false;
        self.has_node = false;
    }

    fn defaults_line(&mut self, keyword: &str) {
        self.end_line(true);
        self.open_line();
        self.sink.write_str(keyword);
        self.has_node = true;
    }

    fn open_line(&mut self) {
        if !self.line_open && self.config.pretty {
            self.sink
                .write_indent(self.depth * self.config.indent_width);
        }
        self.line_open = true;
    }

    fn write_connector(&mut self) {
        self.sink.write_str(if self.kind == GraphKind::Graph {
            " -- "
        } else {
            " -> "
        });
    }

    fn write_quoted(&mut self, text: &str) {
        self.sink.write_str("\"");
        self.sink.write_str(&text.replace('"', "\\\""));
        self.sink.write_str("\"");
    }
}
