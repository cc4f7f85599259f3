use std::fmt;

use crate::expression::ast::{Node, NodeKind};

/// Renders the whitespace-free source the node was parsed from
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind() {
            NodeKind::Literal(digit) => write!(f, "{}", digit),
            NodeKind::Grouped(inner) => write!(f, "({})", inner),
            NodeKind::Binary { op, left, right } => {
                write!(f, "{}{}{}", left, op.symbol(), right)
            }
        }
    }
}
