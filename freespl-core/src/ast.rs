use std::fmt;
use std::ops::{Index, IndexMut};

use crate::lexer::{Token, TokenKind};

/// Handle to a node inside the [`Ast`] that created it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct NodeId(usize);

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Node {
    pub token: Token,
    /// Condition of an `if`/`while` statement.
    pub left: Option<NodeId>,
    /// Body of an `if`/`while`, or the next token of the current statement's
    /// expression chain.
    pub right: Option<NodeId>,
    /// Following sibling statement.
    pub next: Option<NodeId>,
}

impl Node {
    fn new(token: Token) -> Self {
        Node {
            token,
            left: None,
            right: None,
            next: None,
        }
    }
}

/// Arena owning every node of a parsed program.
///
/// Links between nodes are `NodeId`s into the arena, so the tree can be
/// walked by shared reference and never holds dangling pointers. Indexing
/// with a `NodeId` obtained from a different arena panics.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Ast {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    /// Adds an unlinked node and returns its handle.
    pub fn push(&mut self, token: Token) -> NodeId {
        self.nodes.push(Node::new(token));
        NodeId(self.nodes.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId(idx), node))
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Expression chains grow with the input, so walk with an explicit
        // stack. Pushed in reverse so `left` prints before `right`, and both
        // before `next`.
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 0)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            let node = &self[id];
            writeln!(
                f,
                "{:indent$}{:?}: {}",
                "",
                node.token.kind,
                node.token.lexeme,
                indent = depth * 2
            )?;
            // Only a keyword's `right` opens a body; on any other token it
            // continues the same expression chain.
            let right_depth = if node.token.kind == TokenKind::Keyword {
                depth + 1
            } else {
                depth
            };
            stack.extend(node.next.map(|next| (next, depth)));
            stack.extend(node.right.map(|right| (right, right_depth)));
            stack.extend(node.left.map(|left| (left, depth + 1)));
        }
        Ok(())
    }
}

impl Index<NodeId> for Ast {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for Ast {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}

/// Indented dump: a node's `left`, and a keyword's `right`, one level
/// deeper; `next` and expression-chain continuations on the same level.
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f)
    }
}
