//! Graphviz DOT export of collected parse trees

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use crate::tree::ParseNode;

/// Render a batch of parse trees as one DOT digraph.
///
/// Each tree becomes a `subgraph cluster_<i>` labeled `"Assignment <i+1>"`,
/// with one `id [label="<value>"];` line per node and a directed edge from
/// each parent to each child. Node ids come from a single counter shared
/// across the whole call, assigned pre-order (node before children, left
/// child before right), so ids are unique and monotone over the output.
pub fn render_dot(trees: &[ParseNode]) -> String {
    let mut out = String::from("digraph ParseTree {\n");
    let mut next_id = 0usize;

    for (i, tree) in trees.iter().enumerate() {
        let _ = writeln!(out, "  subgraph cluster_{i} {{");
        let _ = writeln!(out, "    label=\"Assignment {}\";", i + 1);
        write_node(tree, &mut next_id, &mut out);
        out.push_str("  }\n");
    }

    out.push_str("}\n");
    out
}

/// Emit one node and its subtrees, returning the node's id.
fn write_node(node: &ParseNode, next_id: &mut usize, out: &mut String) -> usize {
    let id = *next_id;
    *next_id += 1;
    let _ = writeln!(out, "  {} [label=\"{}\"];", id, node.value);
    if let Some(left) = &node.left {
        let child = write_node(left, next_id, out);
        let _ = writeln!(out, "  {id} -> {child};");
    }
    if let Some(right) = &node.right {
        let child = write_node(right, next_id, out);
        let _ = writeln!(out, "  {id} -> {child};");
    }
    id
}

/// Render a batch of parse trees and write the result to `path`.
///
/// Callers are expected to skip the call entirely when the batch is empty;
/// an empty batch still produces a valid (childless) digraph.
pub fn write_dot(trees: &[ParseNode], path: &Path) -> io::Result<()> {
    let rendered = render_dot(trees);
    tracing::debug!(path = %path.display(), trees = trees.len(), "writing parse tree graph");
    fs::write(path, rendered)
}
