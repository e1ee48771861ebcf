#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Whole-document tests for the DOT writer.
//!
//! These drive the full public surface the way a caller would — graph
//! blocks, chains, defaults, comments, decorative attributes — and pin
//! the exact emitted text. A second pass checks that the file sink
//! produces byte-identical output to the in-memory sink.

use std::fs;

use plume_color::Color;
use plume_dot::{DotConfig, DotError, DotWriter, FileSink, GraphKind, Shape, Sink, Style};

const PIPELINE_EXPECTED: &str = r#"digraph "pipeline" {
    //defaults
    Node ["shape"="box"];
    fetch -> parse -> emit;
    emit:out -> sink ["label"="done"];
    subgraph "cluster_io" {
        read -> write;
    }
}
"#;

fn write_pipeline<S: Sink>(writer: &mut DotWriter<S>) -> Result<(), DotError> {
    writer.open_graph(GraphKind::Digraph, "pipeline");
    writer.comment("defaults");
    writer.start_node_defaults_line().shape(Shape::Box).finish();
    writer
        .start_line()
        .node("fetch", &[])
        .node("parse", &[])
        .node("emit", &[])
        .finish();
    writer
        .start_line()
        .node("emit", &["out"])
        .node("sink", &[])
        .label("done")
        .finish();
    writer.open_graph(GraphKind::Subgraph, "cluster_io");
    writer
        .start_line()
        .node("read", &[])
        .node("write", &[])
        .finish();
    writer.close_graph()?;
    writer.close_graph()?;
    Ok(())
}

#[test]
fn pipeline_document_renders_exactly() {
    let mut writer = DotWriter::new();
    write_pipeline(&mut writer).unwrap();
    assert_eq!(writer.output(), PIPELINE_EXPECTED);
}

#[test]
fn file_sink_matches_string_sink_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pipeline.dot");

    let sink = FileSink::create(&path).unwrap();
    let mut writer = DotWriter::with_sink(sink);
    write_pipeline(&mut writer).unwrap();
    writer.into_sink().finish().unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, PIPELINE_EXPECTED);
}

#[test]
fn decorated_nodes_use_html_color_forms() {
    let steel = Color::rgb(70, 130, 180).unwrap();
    let paper = Color::rgb(255, 255, 240).unwrap();

    let mut writer = DotWriter::new();
    writer.open_graph(GraphKind::Graph, "");
    writer
        .start_line()
        .node("hub", &[])
        .color(steel)
        .fill_color(paper)
        .style(Style::Filled)
        .finish();
    writer.close_graph().unwrap();

    assert_eq!(
        writer.output(),
        "graph {\n    hub [\"color\"=\"#4682B4\" \"fillcolor\"=\"#FFFFF0\" \
         \"style\"=\"filled\"];\n}\n"
    );
}

#[test]
fn compact_document_stays_structurally_identical() {
    let mut writer = DotWriter::with_config(DotConfig::compact());
    write_pipeline(&mut writer).unwrap();

    let pretty_lines: Vec<String> = PIPELINE_EXPECTED
        .lines()
        .map(|line| line.trim_start().to_owned())
        .collect();
    let compact_lines: Vec<String> = writer
        .output()
        .lines()
        .map(ToOwned::to_owned)
        .collect();
    assert_eq!(compact_lines, pretty_lines);
}
