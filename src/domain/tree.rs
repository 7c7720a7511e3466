//! Arena-based AVL tree keyed by record id
//!
//! Nodes live in a generational arena and refer to their children by
//! arena index, so there is no recursive ownership and removed nodes
//! free their slot immediately. Every structural change keeps the
//! cached subtree heights exact and the balance factor of every node
//! within [-1, 1].

use std::cmp::Ordering;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::record::{self, Record, RecordId};

/// Tree node stored in the arena.
#[derive(Debug)]
struct Node {
    /// Payload this node carries
    record: Record,
    /// Index of the left child, ids strictly smaller
    left: Option<Index>,
    /// Index of the right child, ids strictly greater
    right: Option<Index>,
    /// Height of the subtree rooted here, a leaf has height 1
    height: usize,
}

impl Node {
    fn new(record: Record) -> Self {
        Self {
            record,
            left: None,
            right: None,
            height: 1,
        }
    }
}

/// Self-balancing ordered roster of (name, id) records.
///
/// Duplicate ids are rejected; duplicate names are allowed. Lookups and
/// updates are O(log n) thanks to the AVL balance invariant.
#[derive(Debug)]
pub struct AvlTree {
    /// Arena storage for all tree nodes
    arena: Arena<Node>,
    /// Index of the root node, None for the empty tree
    root: Option<Index>,
}

impl Default for AvlTree {
    fn default() -> Self {
        Self::new()
    }
}

impl AvlTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a new record. Fails on a malformed name or an id that is
    /// already present; the tree is unchanged in both cases.
    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, name: &str, id: RecordId) -> DomainResult<()> {
        if !record::is_valid_name(name) {
            return Err(DomainError::InvalidName(name.to_string()));
        }
        let root = self.root;
        let new_root = self.insert_at(root, Record::new(name, id))?;
        self.root = Some(new_root);
        Ok(())
    }

    /// Remove the record with the given id.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, id: RecordId) -> DomainResult<()> {
        let root = self.root;
        let (new_root, removed) = self.remove_at(root, id);
        self.root = new_root;
        if removed {
            Ok(())
        } else {
            Err(DomainError::IdNotFound(id))
        }
    }

    /// Remove the record at the given zero-based in-order position,
    /// i.e. position 0 is the smallest id in the roster.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_inorder(&mut self, position: usize) -> DomainResult<()> {
        let id = self
            .iter()
            .nth(position)
            .map(|record| record.id)
            .ok_or(DomainError::PositionOutOfRange(position))?;
        self.remove(id)
    }

    /// Look up a record by id, descending from the root.
    #[instrument(level = "debug", skip(self))]
    pub fn search_id(&self, id: RecordId) -> Option<&str> {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = self.arena.get(idx)?;
            match id.cmp(&node.record.id) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => return Some(node.record.name.as_str()),
            }
        }
        None
    }

    /// Collect the ids of every record with the given name, in pre-order
    /// of the tree. Names are not indexed, so this walks all nodes.
    #[instrument(level = "debug", skip(self))]
    pub fn search_name(&self, name: &str) -> DomainResult<Vec<RecordId>> {
        if !record::is_valid_name(name) {
            return Err(DomainError::InvalidName(name.to_string()));
        }
        Ok(self
            .iter_preorder()
            .filter(|record| record.name == name)
            .map(|record| record.id)
            .collect())
    }

    /// Number of levels in the tree. Empty trees have height 0, a lone
    /// root has height 1.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    /// In-order iterator: ascending by id.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> InorderIterator {
        InorderIterator::new(self)
    }

    /// Pre-order iterator: each node before its children.
    #[instrument(level = "trace", skip(self))]
    pub fn iter_preorder(&self) -> PreorderIterator {
        PreorderIterator::new(self)
    }

    /// Post-order iterator: each node after its children.
    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self) -> PostorderIterator {
        PostorderIterator::new(self)
    }

    fn insert_at(&mut self, at: Option<Index>, record: Record) -> DomainResult<Index> {
        let idx = match at {
            Some(idx) => idx,
            None => return Ok(self.arena.insert(Node::new(record))),
        };
        let (current_id, left, right) = match self.arena.get(idx) {
            Some(node) => (node.record.id, node.left, node.right),
            None => return Ok(idx),
        };

        match record.id.cmp(&current_id) {
            Ordering::Less => {
                let new_left = self.insert_at(left, record)?;
                if let Some(node) = self.arena.get_mut(idx) {
                    node.left = Some(new_left);
                }
                Ok(self.rebalance(idx))
            }
            Ordering::Greater => {
                let new_right = self.insert_at(right, record)?;
                if let Some(node) = self.arena.get_mut(idx) {
                    node.right = Some(new_right);
                }
                Ok(self.rebalance(idx))
            }
            Ordering::Equal => Err(DomainError::DuplicateId(record.id)),
        }
    }

    /// Recursive removal by id. Returns the new subtree root and whether
    /// a node was actually removed; the subtree is rebalanced on the way
    /// back up whenever something changed below it.
    fn remove_at(&mut self, at: Option<Index>, id: RecordId) -> (Option<Index>, bool) {
        let idx = match at {
            Some(idx) => idx,
            None => return (None, false),
        };
        let (current_id, left, right) = match self.arena.get(idx) {
            Some(node) => (node.record.id, node.left, node.right),
            None => return (at, false),
        };

        match id.cmp(&current_id) {
            Ordering::Less => {
                let (new_left, removed) = self.remove_at(left, id);
                if let Some(node) = self.arena.get_mut(idx) {
                    node.left = new_left;
                }
                if removed {
                    (Some(self.rebalance(idx)), true)
                } else {
                    (Some(idx), false)
                }
            }
            Ordering::Greater => {
                let (new_right, removed) = self.remove_at(right, id);
                if let Some(node) = self.arena.get_mut(idx) {
                    node.right = new_right;
                }
                if removed {
                    (Some(self.rebalance(idx)), true)
                } else {
                    (Some(idx), false)
                }
            }
            Ordering::Equal => (self.remove_node(idx, left, right), true),
        }
    }

    /// Standard BST deletion of the node at `idx`. Returns the root of
    /// the replacement subtree.
    fn remove_node(
        &mut self,
        idx: Index,
        left: Option<Index>,
        right: Option<Index>,
    ) -> Option<Index> {
        match (left, right) {
            (None, None) => {
                self.arena.remove(idx);
                None
            }
            (Some(child), None) | (None, Some(child)) => {
                self.arena.remove(idx);
                Some(child)
            }
            (Some(_), Some(right_idx)) => {
                // Two children: adopt the in-order successor's record,
                // then delete the successor from the right subtree.
                let successor = self.leftmost(right_idx);
                let record = match self.arena.get(successor) {
                    Some(node) => node.record.clone(),
                    None => return Some(idx),
                };
                let successor_id = record.id;
                if let Some(node) = self.arena.get_mut(idx) {
                    node.record = record;
                }
                let (new_right, _) = self.remove_at(Some(right_idx), successor_id);
                if let Some(node) = self.arena.get_mut(idx) {
                    node.right = new_right;
                }
                Some(self.rebalance(idx))
            }
        }
    }

    fn leftmost(&self, start: Index) -> Index {
        let mut idx = start;
        while let Some(left) = self.arena.get(idx).and_then(|node| node.left) {
            idx = left;
        }
        idx
    }

    /// Restore the balance invariant at `idx`, assuming both subtrees
    /// are already balanced. Returns the subtree root after rotation.
    fn rebalance(&mut self, idx: Index) -> Index {
        self.update_height(idx);
        let balance = self.balance_of(idx);

        if balance > 1 {
            // Left-heavy. A right-heavy left child needs the double rotation.
            let (left, _) = self.children_of(idx);
            if let Some(left_idx) = left {
                if self.balance_of(left_idx) < 0 {
                    let new_left = self.rotate_left(left_idx);
                    if let Some(node) = self.arena.get_mut(idx) {
                        node.left = Some(new_left);
                    }
                }
            }
            return self.rotate_right(idx);
        }
        if balance < -1 {
            let (_, right) = self.children_of(idx);
            if let Some(right_idx) = right {
                if self.balance_of(right_idx) > 0 {
                    let new_right = self.rotate_right(right_idx);
                    if let Some(node) = self.arena.get_mut(idx) {
                        node.right = Some(new_right);
                    }
                }
            }
            return self.rotate_left(idx);
        }
        idx
    }

    /// Rotate the subtree at `idx` rightward; the left child becomes the
    /// new subtree root. Heights are recomputed bottom-up.
    fn rotate_right(&mut self, idx: Index) -> Index {
        let pivot = match self.children_of(idx).0 {
            Some(pivot) => pivot,
            None => return idx,
        };
        let inner = self.children_of(pivot).1;
        if let Some(node) = self.arena.get_mut(idx) {
            node.left = inner;
        }
        if let Some(node) = self.arena.get_mut(pivot) {
            node.right = Some(idx);
        }
        self.update_height(idx);
        self.update_height(pivot);
        pivot
    }

    /// Mirror image of [`Self::rotate_right`].
    fn rotate_left(&mut self, idx: Index) -> Index {
        let pivot = match self.children_of(idx).1 {
            Some(pivot) => pivot,
            None => return idx,
        };
        let inner = self.children_of(pivot).0;
        if let Some(node) = self.arena.get_mut(idx) {
            node.right = inner;
        }
        if let Some(node) = self.arena.get_mut(pivot) {
            node.left = Some(idx);
        }
        self.update_height(idx);
        self.update_height(pivot);
        pivot
    }

    fn update_height(&mut self, idx: Index) {
        let (left, right) = self.children_of(idx);
        let height = 1 + self.height_of(left).max(self.height_of(right));
        if let Some(node) = self.arena.get_mut(idx) {
            node.height = height;
        }
    }

    fn height_of(&self, at: Option<Index>) -> usize {
        at.and_then(|idx| self.arena.get(idx))
            .map_or(0, |node| node.height)
    }

    /// Left height minus right height; AVL keeps this in [-1, 1].
    fn balance_of(&self, idx: Index) -> isize {
        match self.arena.get(idx) {
            Some(node) => self.height_of(node.left) as isize - self.height_of(node.right) as isize,
            None => 0,
        }
    }

    fn children_of(&self, idx: Index) -> (Option<Index>, Option<Index>) {
        match self.arena.get(idx) {
            Some(node) => (node.left, node.right),
            None => (None, None),
        }
    }
}

pub struct InorderIterator<'a> {
    tree: &'a AvlTree,
    /// Path of nodes whose left subtree is done but which have not
    /// themselves been yielded yet
    stack: Vec<Index>,
}

impl<'a> InorderIterator<'a> {
    fn new(tree: &'a AvlTree) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut at: Option<Index>) {
        while let Some(idx) = at {
            self.stack.push(idx);
            at = self.tree.arena.get(idx).and_then(|node| node.left);
        }
    }
}

impl<'a> Iterator for InorderIterator<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = self.tree.arena.get(idx)?;
        self.push_left_spine(node.right);
        Some(&node.record)
    }
}

pub struct PreorderIterator<'a> {
    tree: &'a AvlTree,
    stack: Vec<Index>,
}

impl<'a> PreorderIterator<'a> {
    fn new(tree: &'a AvlTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PreorderIterator<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = self.tree.arena.get(idx)?;
        // Push right first so the left subtree pops before it
        if let Some(right) = node.right {
            self.stack.push(right);
        }
        if let Some(left) = node.left {
            self.stack.push(left);
        }
        Some(&node.record)
    }
}

pub struct PostorderIterator<'a> {
    tree: &'a AvlTree,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostorderIterator<'a> {
    fn new(tree: &'a AvlTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root {
            stack.push((root, false));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PostorderIterator<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, visited)) = self.stack.pop() {
            let node = self.tree.arena.get(idx)?;
            if visited {
                return Some(&node.record);
            }
            self.stack.push((idx, true));
            if let Some(right) = node.right {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left {
                self.stack.push((left, false));
            }
        }
        None
    }
}
