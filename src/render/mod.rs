//! Graphviz rendering of a tour.
//!
//! Produces DOT text with every node and the tour's edges labelled by
//! distance. Render with e.g. `circo -Tpng tour.dot -o tour.png`.

use std::fmt::Write;

use crate::aco::Tour;
use crate::matrix::DistanceMatrix;

/// Renders `tour` over the nodes of `distances` as an undirected DOT graph.
///
/// # Examples
///
/// ```
/// use u_antcolony::aco::Tour;
/// use u_antcolony::matrix::parse_matrix;
/// use u_antcolony::render::to_dot;
///
/// let d = parse_matrix("0 5\n5 0").unwrap();
/// let dot = to_dot(&d, &Tour::new(vec![0, 1, 0]));
/// assert!(dot.starts_with("graph tour {"));
/// assert!(dot.contains("0 -- 1 [label=\"5\""));
/// ```
pub fn to_dot(distances: &DistanceMatrix, tour: &Tour) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "graph tour {{");
    let _ = writeln!(out, "    layout=circo;");
    let _ = writeln!(out, "    label=\"Best tour found\";");
    let _ = writeln!(out, "    labelloc=t;");
    let _ = writeln!(
        out,
        "    node [shape=circle, style=filled, fillcolor=lightblue];"
    );

    for node in 0..distances.len() {
        let _ = writeln!(out, "    {node};");
    }

    for (i, j) in tour.edges() {
        let _ = writeln!(
            out,
            "    {i} -- {j} [label=\"{}\", color=blue, penwidth=2];",
            distances.get(i, j)
        );
    }

    out.push_str("}\n");
    out
}
