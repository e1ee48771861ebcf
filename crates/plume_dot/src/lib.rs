//! Streaming DOT (Graphviz) text emission.
//!
//! [`DotWriter`] converts an ordered sequence of structural calls — open
//! graph, write node, write attribute, close graph, comment — into
//! syntactically valid DOT text, with optional indentation. The caller
//! never manages punctuation: the writer tracks the line in progress and
//! decides when to insert edge connectors, open and close attribute
//! brackets, and terminate statements.
//!
//! # Modules
//!
//! - [`sink`]: output abstraction for in-memory and file destinations
//! - [`writer`]: the stateful writer and its configuration
//! - [`line`]: fluent builder for composing one line at a time
//! - [`attr`]: shape and style vocabularies for decorative attributes
//!
//! # Example
//!
//! ```
//! use plume_dot::{DotWriter, GraphKind};
//!
//! let mut writer = DotWriter::new();
//! writer.open_graph(GraphKind::Digraph, "G");
//! writer.node("a", &[]);
//! writer.node("b", &[]);
//! writer.close_graph()?;
//!
//! assert_eq!(writer.output(), "digraph \"G\" {\n    a -> b;\n}\n");
//! # Ok::<(), plume_dot::DotError>(())
//! ```

pub mod attr;
pub mod line;
pub mod sink;
pub mod writer;

pub use attr::{Shape, Style};
pub use line::Line;
pub use sink::{FileSink, Sink, StringSink};
pub use writer::{DotConfig, DotError, DotWriter, GraphKind, INDENT_WIDTH};
