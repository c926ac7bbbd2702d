//! CLI command implementations.
//!
//! Each command has a report builder that works on an in-memory graph and
//! a `cmd_*` wrapper that reads the graph file and prints the report.

use std::path::Path;

use serde::Serialize;

use crate::algorithms::{heap_sort_by, minimum_spanning_tree, shortest_paths};
use crate::graph::{traverse, AdjacencyList, GraphDocument, TraversalOrder};
use crate::types::{AlgoError, AlgoResult, VertexId};

/// Shortest path from the source to one destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    /// Source label.
    pub from: String,
    /// Destination label.
    pub to: String,
    /// Total weight, or `None` when the destination is unreachable.
    pub distance: Option<f64>,
    /// Vertex labels along the path, source first. Empty when unreachable.
    pub hops: Vec<String>,
}

/// One edge of a spanning tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeEdgeReport {
    /// Label of the endpoint already in the tree.
    pub from: String,
    /// Label of the endpoint the edge added.
    pub to: String,
    /// Edge weight, if any.
    pub weight: Option<f64>,
}

/// Minimum spanning tree summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeReport {
    /// Sum of edge weights.
    pub cost: f64,
    /// Chosen edges in pick order.
    pub edges: Vec<TreeEdgeReport>,
    /// Vertices the first vertex cannot reach.
    pub unreached: Vec<String>,
}

/// Vertices in traversal order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraversalReport {
    /// "bfs" or "dfs".
    pub order: String,
    /// Visited labels.
    pub visited: Vec<String>,
}

fn lookup(graph: &AdjacencyList<String>, label: &str) -> AlgoResult<VertexId> {
    graph
        .find(&label.to_string())
        .ok_or_else(|| AlgoError::UnknownLabel(label.to_string()))
}

fn label(graph: &AdjacencyList<String>, id: VertexId) -> String {
    graph
        .data(id)
        .cloned()
        .unwrap_or_else(|| id.to_string())
}

fn load(path: &Path) -> AlgoResult<AdjacencyList<String>> {
    let document = GraphDocument::read_from_file(path)?;
    document.to_graph()
}

fn print_json<S: Serialize>(value: &S) -> AlgoResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{:.0}", weight)
    } else {
        format!("{}", weight)
    }
}

/// Shortest paths from `from` to `to`, or to every vertex when `to` is
/// `None`.
pub fn shortest_path_reports(
    graph: &AdjacencyList<String>,
    from: &str,
    to: Option<&str>,
) -> AlgoResult<Vec<PathReport>> {
    let source = lookup(graph, from)?;
    let targets = match to {
        Some(to) => vec![lookup(graph, to)?],
        None => graph.all_vertices().iter().map(|v| v.id).collect(),
    };

    let paths = shortest_paths(graph, source)?;

    let reports = targets
        .into_iter()
        .map(|target| {
            let distance = paths.distance_to(target);
            let hops = if distance.is_some() {
                std::iter::once(source)
                    .chain(paths.path_to(target).iter().map(|edge| edge.destination))
                    .map(|id| label(graph, id))
                    .collect()
            } else {
                Vec::new()
            };
            PathReport {
                from: from.to_string(),
                to: label(graph, target),
                distance,
                hops,
            }
        })
        .collect();

    Ok(reports)
}

/// Minimum spanning tree rooted at the graph's first vertex.
pub fn tree_report(graph: &AdjacencyList<String>) -> TreeReport {
    let spanning = minimum_spanning_tree(graph);

    let mut spanned: Vec<VertexId> = spanning
        .edges
        .iter()
        .flat_map(|edge| [edge.source, edge.destination])
        .collect();
    if let Some(first) = graph.all_vertices().first() {
        spanned.push(first.id);
    }

    TreeReport {
        cost: spanning.cost,
        edges: spanning
            .edges
            .iter()
            .map(|edge| TreeEdgeReport {
                from: label(graph, edge.source),
                to: label(graph, edge.destination),
                weight: edge.weight,
            })
            .collect(),
        unreached: graph
            .all_vertices()
            .iter()
            .filter(|vertex| !spanned.contains(&vertex.id))
            .map(|vertex| vertex.data.clone())
            .collect(),
    }
}

/// Vertices reachable from `from`, in the requested order.
pub fn traversal_report(
    graph: &AdjacencyList<String>,
    from: &str,
    order: TraversalOrder,
) -> AlgoResult<TraversalReport> {
    let source = lookup(graph, from)?;
    let visited = traverse(graph, source, order)?;
    Ok(TraversalReport {
        order: match order {
            TraversalOrder::BreadthFirst => "bfs".to_string(),
            TraversalOrder::DepthFirst => "dfs".to_string(),
        },
        visited: visited.into_iter().map(|id| label(graph, id)).collect(),
    })
}

/// Heap sort a list of numbers.
///
/// NaN and infinities are rejected, since the comparator cannot order NaN.
pub fn sorted_values(mut values: Vec<f64>, descending: bool) -> AlgoResult<Vec<f64>> {
    if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(AlgoError::InvalidValue(bad));
    }
    if descending {
        heap_sort_by(&mut values, |a, b| a < b);
    } else {
        heap_sort_by(&mut values, |a, b| a > b);
    }
    Ok(values)
}

/// Print shortest paths read from a graph file.
pub fn cmd_shortest_path(path: &Path, from: &str, to: Option<&str>, json: bool) -> AlgoResult<()> {
    let graph = load(path)?;
    let reports = shortest_path_reports(&graph, from, to)?;

    if json {
        return print_json(&reports);
    }
    for report in &reports {
        match report.distance {
            Some(distance) => println!(
                "{} -> {}: {} via {}",
                report.from,
                report.to,
                format_weight(distance),
                report.hops.join(" -> ")
            ),
            None => println!("{} -> {}: unreachable", report.from, report.to),
        }
    }
    Ok(())
}

/// Print the minimum spanning tree of a graph file.
pub fn cmd_mst(path: &Path, json: bool) -> AlgoResult<()> {
    let graph = load(path)?;
    let report = tree_report(&graph);

    if json {
        return print_json(&report);
    }
    println!("Cost: {}", format_weight(report.cost));
    for edge in &report.edges {
        match edge.weight {
            Some(weight) => println!("{} -- {} ({})", edge.from, edge.to, format_weight(weight)),
            None => println!("{} -- {}", edge.from, edge.to),
        }
    }
    if !report.unreached.is_empty() {
        println!("Unreached: {}", report.unreached.join(", "));
    }
    Ok(())
}

/// Print a traversal of a graph file.
pub fn cmd_traverse(path: &Path, from: &str, order: TraversalOrder, json: bool) -> AlgoResult<()> {
    let graph = load(path)?;
    let report = traversal_report(&graph, from, order)?;

    if json {
        return print_json(&report);
    }
    println!("{}", report.visited.join(", "));
    Ok(())
}

/// Print numbers in sorted order.
pub fn cmd_sort(values: Vec<f64>, descending: bool, json: bool) -> AlgoResult<()> {
    let sorted = sorted_values(values, descending)?;

    if json {
        return print_json(&sorted);
    }
    let rendered: Vec<String> = sorted.iter().map(|v| v.to_string()).collect();
    println!("{}", rendered.join(" "));
    Ok(())
}
