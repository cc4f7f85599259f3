use std::cell::OnceCell;

/// Grammar precedence level an operator binds at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Expression,
    Term,
    Factor,
}

/// Binary operators, grouped by the tier that owns them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// Map a source character onto its operator
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    pub fn tier(self) -> Tier {
        match self {
            Operator::Add | Operator::Sub => Tier::Expression,
            Operator::Mul | Operator::Div => Tier::Term,
            Operator::Pow => Tier::Factor,
        }
    }
}

/// Shape of a parse tree node
///
/// An Expression or Term without an operator is represented by its only child,
/// so a `Binary` node always carries both operands and no other kind carries any.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A single decimal digit
    Literal(u8),
    /// A parenthesized expression
    Grouped(Box<Node>),
    Binary {
        op: Operator,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// Owned parse tree node with its evaluation cache
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    pub(crate) value: OnceCell<f64>,
}

impl Node {
    pub fn literal(digit: u8) -> Self {
        Self {
            kind: NodeKind::Literal(digit),
            value: OnceCell::from(f64::from(digit)),
        }
    }

    pub fn grouped(inner: Node) -> Self {
        Self {
            kind: NodeKind::Grouped(Box::new(inner)),
            value: OnceCell::new(),
        }
    }

    pub fn binary(op: Operator, left: Node, right: Node) -> Self {
        Self {
            kind: NodeKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            value: OnceCell::new(),
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The tier this node was produced at
    pub fn tier(&self) -> Tier {
        match &self.kind {
            NodeKind::Literal(_) | NodeKind::Grouped(_) => Tier::Factor,
            NodeKind::Binary { op, .. } => op.tier(),
        }
    }

    /// Cached value, if this node has been evaluated already
    pub fn cached_value(&self) -> Option<f64> {
        self.value.get().copied()
    }

    pub fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }

    /// Direct children, left to right
    pub fn children(&self) -> Vec<&Node> {
        match &self.kind {
            NodeKind::Literal(_) => Vec::new(),
            NodeKind::Grouped(inner) => vec![inner.as_ref()],
            NodeKind::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
        }
    }

    /// Number of nodes in this subtree, including itself
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(|c| c.node_count()).sum::<usize>()
    }
}
