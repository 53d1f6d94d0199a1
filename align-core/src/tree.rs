//! Process trees: arena-owned nodes, operators and activity sets.

use std::collections::HashSet;
use std::fmt;

use crate::activity::ActivityId;
use crate::error::TreeError;

/// A stable, unique id for a node inside a [`ProcessTree`]'s arena.
///
/// Doubles as the memoization key used by the engine's cost cache. Real arena nodes always
/// carry a non-negative index; the engine's redo-loop routine separately mints synthetic,
/// negative-range ids for its transient `(Q, R)` pairs (see `align-engine`'s
/// `operators::redo_loop` module) so the two id spaces can never collide.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(i64);

impl NodeId {
    /// Wraps a raw index as a `NodeId`. Used internally by the builder; collaborators should
    /// treat `NodeId` as opaque.
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as i64)
    }

    /// Builds a synthetic id outside the arena's id range, reserved for the engine's
    /// transient sequence nodes. Negates `raw` into the id range below zero, so a synthetic
    /// id can never collide with a real arena index (which is always non-negative).
    pub fn synthetic(raw: u64) -> Self {
        Self(-(raw as i64 + 1))
    }

    /// Returns the raw index backing this id, for arena lookups.
    pub(crate) fn index(self) -> usize {
        debug_assert!(self.0 >= 0, "index() called on a synthetic NodeId");
        self.0 as usize
    }

    /// Returns the node's raw arena index as a `u64`.
    ///
    /// Exposed for collaborators outside this crate that need a stable integer derived from
    /// a real node id — notably `align-engine`'s redo-loop routine, which Cantor-pairs the
    /// body and redo children's indices to mint a synthetic id for its transient `(Q, R)`
    /// sequence (see [`NodeId::synthetic`]).
    ///
    /// Panics if called on a synthetic id.
    pub fn arena_index(self) -> u64 {
        debug_assert!(self.0 >= 0, "arena_index() called on a synthetic NodeId");
        self.0 as u64
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// The closed set of process-tree operators.
///
/// A tagged enum with an exhaustive `match` is used throughout the engine rather than any
/// trait-object/vtable dispatch mechanism: the operator set is closed and small, and adding
/// a new one is meant to be a compile error everywhere it isn't handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Children must occur, in order, as contiguous non-overlapping runs of the trace.
    Sequence,
    /// Children's traces are interleaved arbitrarily.
    Parallel,
    /// Exactly one child's language is chosen.
    Xor,
    /// A redo-loop `*(R, Q)` accepting the language `R (Q R)*`. Exactly two children: body
    /// (index 0) and redo (index 1).
    RedoLoop,
    /// A leaf matching exactly one occurrence of a single activity.
    Activity(ActivityId),
    /// A leaf matching only the empty trace.
    Silent,
}

impl Operator {
    /// A short, `'static` name for diagnostics (error messages, CLI notation round-tripping).
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Sequence => "Sequence",
            Operator::Parallel => "Parallel",
            Operator::Xor => "Xor",
            Operator::RedoLoop => "RedoLoop",
            Operator::Activity(_) => "Activity",
            Operator::Silent => "Silent",
        }
    }
}

/// A single node in a [`ProcessTree`]'s arena.
#[derive(Debug, Clone)]
pub struct TreeNode {
    id: NodeId,
    operator: Operator,
    children: Vec<NodeId>,
    activity_set: HashSet<ActivityId>,
}

impl TreeNode {
    /// This node's stable id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// This node's operator tag.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// This node's ordered children (empty for leaves).
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The union of activity ids reachable below this node (itself included, for a leaf).
    pub fn activity_set(&self) -> &HashSet<ActivityId> {
        &self.activity_set
    }
}

/// An arena-owned, acyclic process tree.
///
/// Produced only by [`ProcessTreeBuilder::build`], which validates §3's structural
/// invariants once; every `ProcessTree` value in existence is therefore already
/// well-formed, and `align-engine` never re-checks it.
#[derive(Debug, Clone)]
pub struct ProcessTree {
    nodes: Vec<TreeNode>,
    root: NodeId,
}

impl ProcessTree {
    /// Returns the root node's id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node for `id`.
    ///
    /// Panics if `id` does not belong to this tree's arena; this cannot happen through the
    /// public API, since every `NodeId` a caller can observe for a given tree was handed out
    /// by that same tree's builder.
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.index()]
    }

    /// Returns the root node.
    pub fn root_node(&self) -> &TreeNode {
        self.node(self.root)
    }

    /// Returns the number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the arena is empty (never true for a tree produced by the builder).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Builds a [`ProcessTree`], validating structural invariants exactly once.
///
/// Children must be added to the arena before any node referencing them, since a node is
/// constructed from already-minted [`NodeId`]s (there is no forward-reference or mutation
/// step after the fact). This mirrors how the distilled spec's source language builds trees
/// bottom-up.
#[derive(Debug, Default)]
pub struct ProcessTreeBuilder {
    nodes: Vec<TreeNode>,
}

impl ProcessTreeBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an `Activity(id)` leaf and returns its id.
    pub fn activity(&mut self, id: ActivityId) -> NodeId {
        self.push_leaf(Operator::Activity(id), HashSet::from([id]))
    }

    /// Adds a `Silent` leaf and returns its id.
    pub fn silent(&mut self) -> NodeId {
        self.push_leaf(Operator::Silent, HashSet::new())
    }

    /// Adds a `Sequence` node over `children` (already-minted child ids) and returns its id.
    pub fn sequence(&mut self, children: Vec<NodeId>) -> NodeId {
        self.push_inner(Operator::Sequence, children)
    }

    /// Adds a `Parallel` node over `children` and returns its id.
    pub fn parallel(&mut self, children: Vec<NodeId>) -> NodeId {
        self.push_inner(Operator::Parallel, children)
    }

    /// Adds an `Xor` node over `children` and returns its id.
    pub fn xor(&mut self, children: Vec<NodeId>) -> NodeId {
        self.push_inner(Operator::Xor, children)
    }

    /// Adds a `RedoLoop(body, redo)` node and returns its id.
    pub fn redo_loop(&mut self, body: NodeId, redo: NodeId) -> NodeId {
        self.push_inner(Operator::RedoLoop, vec![body, redo])
    }

    fn push_leaf(&mut self, operator: Operator, activity_set: HashSet<ActivityId>) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(TreeNode {
            id,
            operator,
            children: Vec::new(),
            activity_set,
        });
        id
    }

    fn push_inner(&mut self, operator: Operator, children: Vec<NodeId>) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(TreeNode {
            id,
            operator,
            children,
            activity_set: HashSet::new(),
        });
        id
    }

    /// Validates §3's structural invariants, fills in every node's activity set via a single
    /// post-order traversal (`fill_activity_sets`), and returns the finished tree rooted at
    /// `root`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::WrongArity`] if a `RedoLoop` doesn't have exactly two children or
    /// a `Sequence`/`Parallel`/`Xor` has zero, and [`TreeError::DanglingChild`] if a child
    /// index references a node not present in the arena (this can only happen if a caller
    /// hand-built invalid `NodeId`s; the builder's own methods never produce dangling
    /// references).
    pub fn build(mut self, root: NodeId) -> Result<ProcessTree, TreeError> {
        for node in &self.nodes {
            for &child in &node.children {
                if child.index() >= self.nodes.len() {
                    return Err(TreeError::DanglingChild {
                        parent: node.id,
                        child,
                    });
                }
            }
            match node.operator {
                Operator::RedoLoop if node.children.len() != 2 => {
                    return Err(TreeError::WrongArity {
                        operator: node.operator.name(),
                        node: node.id,
                        expected: "exactly 2",
                        found: node.children.len(),
                    });
                }
                Operator::Sequence | Operator::Parallel | Operator::Xor
                    if node.children.is_empty() =>
                {
                    return Err(TreeError::WrongArity {
                        operator: node.operator.name(),
                        node: node.id,
                        expected: "1 or more",
                        found: 0,
                    });
                }
                _ => {}
            }
        }

        fill_activity_sets(&mut self.nodes, root);

        Ok(ProcessTree {
            nodes: self.nodes,
            root,
        })
    }
}

/// Populates every node's activity set as the union of its children's, via a single
/// post-order traversal starting at `root`.
///
/// Nodes unreachable from `root` are left with an empty activity set; they are dead weight
/// in the arena but cause no incorrect behavior, since the engine only ever visits nodes
/// reachable from whichever root it was invoked with.
fn fill_activity_sets(nodes: &mut [TreeNode], root: NodeId) {
    fn visit(nodes: &mut [TreeNode], id: NodeId) -> HashSet<ActivityId> {
        let children = nodes[id.index()].children.clone();
        if children.is_empty() {
            return nodes[id.index()].activity_set.clone();
        }
        let mut set = HashSet::new();
        for child in children {
            set.extend(visit(nodes, child));
        }
        nodes[id.index()].activity_set = set.clone();
        set
    }

    visit(nodes, root);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a(raw: u32) -> ActivityId {
        ActivityId::from_raw(raw)
    }

    #[test]
    fn activity_sets_are_unions_of_children() {
        let mut builder = ProcessTreeBuilder::new();
        let x = builder.activity(a(0));
        let y = builder.activity(a(1));
        let seq = builder.sequence(vec![x, y]);
        let tree = builder.build(seq).unwrap();

        let expected: HashSet<_> = [a(0), a(1)].into_iter().collect();
        assert_eq!(tree.root_node().activity_set(), &expected);
    }

    #[test]
    fn silent_activity_set_is_empty() {
        let mut builder = ProcessTreeBuilder::new();
        let tau = builder.silent();
        let tree = builder.build(tau).unwrap();
        assert!(tree.root_node().activity_set().is_empty());
    }

    #[test]
    fn sequence_of_one_child_is_accepted() {
        let mut builder = ProcessTreeBuilder::new();
        let only_child = builder.activity(a(0));
        let seq = builder.sequence(vec![only_child]);
        assert!(builder.build(seq).is_ok());
    }

    #[test]
    fn redo_loop_requires_exactly_two_children() {
        let mut builder = ProcessTreeBuilder::new();
        let body = builder.activity(a(0));
        let redo = builder.activity(a(1));
        let third = builder.activity(a(2));
        let bad_loop = builder.push_inner(Operator::RedoLoop, vec![body, redo, third]);
        assert!(matches!(
            builder.build(bad_loop),
            Err(TreeError::WrongArity { .. })
        ));
    }

    #[test]
    fn sequence_with_no_children_is_rejected() {
        let mut builder = ProcessTreeBuilder::new();
        let empty_seq = builder.push_inner(Operator::Sequence, vec![]);
        assert!(matches!(
            builder.build(empty_seq),
            Err(TreeError::WrongArity { .. })
        ));
    }

    #[test]
    fn dangling_child_is_rejected() {
        let mut builder = ProcessTreeBuilder::new();
        let ghost = NodeId::from_index(42);
        let seq = builder.push_inner(Operator::Sequence, vec![ghost]);
        assert!(matches!(
            builder.build(seq),
            Err(TreeError::DanglingChild { .. })
        ));
    }
}
