use crate::ast::NodeKind;
use crate::Location;

/// Trait implemented by all AST node types and by the enums over them
/// ([`Node`](crate::ast::Node), [`Value`](crate::ast::Value), ...).
///
/// Every node type implements this trait via `#[inherent] impl AstNode`,
/// giving each node both inherent methods (no trait import needed) and a
/// trait bound for generic utilities.
pub trait AstNode {
    /// The kind tag of this node.
    fn kind(&self) -> NodeKind;

    /// Where this node was parsed from, unless it was parsed with
    /// [`ParseOptions::no_location`](crate::ParseOptions) or built by hand.
    fn loc(&self) -> Option<&Location>;

    /// Append the source text this node was parsed from to `sink`.
    ///
    /// Appends nothing when the node has no location or its location no
    /// longer refers to a source (e.g. after deserialization).
    fn append_source(&self, sink: &mut String) {
        if let Some(loc) = self.loc()
            && let Some(source) = &loc.source {
            sink.push_str(&source.slice(loc.start, loc.end));
        }
    }

    /// Return the source text this node was parsed from.
    ///
    /// Convenience wrapper around
    /// [`append_source`](AstNode::append_source).
    fn to_source(&self) -> String {
        let mut s = String::new();
        self.append_source(&mut s);
        s
    }
}
