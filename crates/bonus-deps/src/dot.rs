//! Graphviz DOT serialization.

use crate::graph::DependencyGraph;

/// Comment written at the top of the description by default.
pub const DEFAULT_COMMENT: &str = "Bonus dependencies";

/// Serialize `graph` as a DOT `digraph`.
///
/// Output shape:
///
/// ```text
/// // Bonus dependencies
/// digraph {
/// 	"3" -> "7"
/// }
/// ```
///
/// Edges are written one per line in insertion order, duplicates included.
/// The comment line is omitted when `comment` is empty.
#[must_use]
pub fn to_dot(graph: &DependencyGraph, comment: &str) -> String {
    let mut out = String::new();
    for line in comment.lines() {
        out.push_str("// ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("digraph {\n");
    for edge in graph.edges() {
        out.push('\t');
        out.push_str(&quote(edge.from.as_str()));
        out.push_str(" -> ");
        out.push_str(&quote(edge.to.as_str()));
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

/// Quote an identifier as a DOT string literal.
fn quote(id: &str) -> String {
    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    for c in id.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProblemId;
    use serde_json::json;

    #[test]
    fn test_empty_graph() {
        let dot = to_dot(&DependencyGraph::new(), DEFAULT_COMMENT);
        assert_eq!(dot, "// Bonus dependencies\ndigraph {\n}\n");
    }

    #[test]
    fn test_edges_in_order_with_duplicates() {
        let mut graph = DependencyGraph::new();
        graph.add_edge(&ProblemId::from("3"), &ProblemId::from("7"), json!("x"));
        graph.add_edge(&ProblemId::from("3"), &ProblemId::from("7"), json!("y"));
        graph.add_edge(&ProblemId::from("1"), &ProblemId::from("3"), json!("z"));

        let dot = to_dot(&graph, DEFAULT_COMMENT);
        assert_eq!(
            dot,
            "// Bonus dependencies\ndigraph {\n\t\"3\" -> \"7\"\n\t\"3\" -> \"7\"\n\t\"1\" -> \"3\"\n}\n"
        );
    }

    #[test]
    fn test_no_comment() {
        let dot = to_dot(&DependencyGraph::new(), "");
        assert_eq!(dot, "digraph {\n}\n");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote(r#"a"b"#), r#""a\"b""#);
        assert_eq!(quote(r"a\b"), r#""a\\b""#);
        assert_eq!(quote("a\nb"), r#""a\nb""#);
    }
}
