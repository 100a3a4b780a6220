//! Binary search tree - node-owned, duplicate-discarding
//!
//! Invariant: for every node, all values in its left subtree are
//! strictly less than the node value and all values in its right
//! subtree strictly greater. Duplicates are discarded on insert, so
//! the in-order view is always strictly ascending.
//!
//! Traversals use cursor re-borrowing or an explicit stack rather than
//! recursion, so a degenerate (linked-list-shaped) tree cannot
//! overflow the call stack.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
struct TreeNode {
    value: i64,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn new(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// Where a node sits relative to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodePosition {
    Root,
    Left,
    Right,
}

/// One node of the tree-structure view consumed by the tree renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNodeInfo {
    pub value: i64,
    pub depth: usize,
    pub position: NodePosition,
}

/// Binary search tree with traced lookup.
#[derive(Debug, Clone, Default)]
pub struct BinarySearchTree {
    root: Option<Box<TreeNode>>,
    len: usize,
    access_history: Vec<i64>,
}

impl BinarySearchTree {
    pub fn new(data: Vec<i64>) -> Self {
        let mut tree = Self::default();
        for value in data {
            tree.insert(value);
        }
        tree
    }

    /// Number of values stored; incremented only on successful insert.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a value, discarding duplicates. Returns whether the
    /// value was actually inserted.
    pub fn insert(&mut self, value: i64) -> bool {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            if value < node.value {
                cursor = &mut node.left;
            } else if value > node.value {
                cursor = &mut node.right;
            } else {
                return false;
            }
        }
        *cursor = Some(Box::new(TreeNode::new(value)));
        self.len += 1;
        true
    }

    /// Walk from the root toward `target`, recording every visited
    /// value. Returns the found flag and the root-to-deepest-visited
    /// path.
    pub fn search_with_path(&mut self, target: i64) -> (bool, Vec<i64>) {
        self.clear_history();

        let mut found = false;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            self.access_history.push(node.value);
            if target == node.value {
                found = true;
                break;
            } else if target < node.value {
                cursor = node.left.as_deref();
            } else {
                cursor = node.right.as_deref();
            }
        }

        (found, self.access_history.clone())
    }

    /// Values visited by the most recent traced search.
    pub fn access_history(&self) -> &[i64] {
        &self.access_history
    }

    pub fn clear_history(&mut self) {
        self.access_history.clear();
    }

    /// In-order traversal; always strictly ascending.
    pub fn to_ordered_sequence(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&TreeNode> = Vec::new();
        let mut cursor = self.root.as_deref();

        while cursor.is_some() || !stack.is_empty() {
            while let Some(node) = cursor {
                stack.push(node);
                cursor = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                out.push(node.value);
                cursor = node.right.as_deref();
            }
        }
        out
    }

    /// Pre-order structure view (value, depth, position) for the
    /// external tree renderer.
    pub fn tree_layout(&self) -> Vec<TreeNodeInfo> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<(&TreeNode, usize, NodePosition)> = Vec::new();

        if let Some(root) = self.root.as_deref() {
            stack.push((root, 0, NodePosition::Root));
        }
        while let Some((node, depth, position)) = stack.pop() {
            out.push(TreeNodeInfo {
                value: node.value,
                depth,
                position,
            });
            // Right pushed first so the left subtree is emitted first.
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1, NodePosition::Right));
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1, NodePosition::Left));
            }
        }
        out
    }

    /// Rebuild the tree from `size` random values in `[min, max]`,
    /// sampled without repetition (capped at the range width), and
    /// reset the access history.
    pub fn populate_random_with<R: Rng + ?Sized>(
        &mut self,
        size: usize,
        min: i64,
        max: i64,
        rng: &mut R,
    ) {
        self.root = None;
        self.len = 0;
        self.clear_history();

        if min > max {
            return;
        }
        let range_len = (max - min + 1) as usize;
        let count = size.min(range_len);
        for offset in rand::seq::index::sample(rng, range_len, count) {
            self.insert(min + offset as i64);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_insert_discards_duplicates() {
        let mut tree = BinarySearchTree::default();
        assert!(tree.insert(5));
        assert!(tree.insert(3));
        assert!(!tree.insert(5));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_in_order_is_strictly_ascending() {
        let tree = BinarySearchTree::new(vec![5, 3, 7, 1, 9, 4, 6]);
        assert_eq!(tree.to_ordered_sequence(), vec![1, 3, 4, 5, 6, 7, 9]);
    }

    #[test]
    fn test_search_with_path_records_route() {
        let mut tree = BinarySearchTree::new(vec![5, 3, 7, 1, 9, 4, 6]);

        let (found, path) = tree.search_with_path(4);
        assert!(found);
        assert_eq!(path, vec![5, 3, 4]);
        assert_eq!(tree.access_history(), &[5, 3, 4]);

        let (found, path) = tree.search_with_path(8);
        assert!(!found);
        assert_eq!(path, vec![5, 7, 9]);
    }

    #[test]
    fn test_search_empty_tree() {
        let mut tree = BinarySearchTree::default();
        let (found, path) = tree.search_with_path(1);
        assert!(!found);
        assert!(path.is_empty());
    }

    #[test]
    fn test_tree_layout_preorder() {
        let tree = BinarySearchTree::new(vec![5, 3, 7]);
        let layout = tree.tree_layout();
        assert_eq!(
            layout,
            vec![
                TreeNodeInfo {
                    value: 5,
                    depth: 0,
                    position: NodePosition::Root
                },
                TreeNodeInfo {
                    value: 3,
                    depth: 1,
                    position: NodePosition::Left
                },
                TreeNodeInfo {
                    value: 7,
                    depth: 1,
                    position: NodePosition::Right
                },
            ]
        );
    }

    #[test]
    fn test_populate_random_distinct_and_capped() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut tree = BinarySearchTree::default();

        // Range [1, 5] holds only 5 distinct values.
        tree.populate_random_with(20, 1, 5, &mut rng);
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.to_ordered_sequence(), vec![1, 2, 3, 4, 5]);

        tree.populate_random_with(10, 100, 200, &mut rng);
        assert_eq!(tree.len(), 10);
        let seq = tree.to_ordered_sequence();
        assert!(seq.windows(2).all(|w| w[0] < w[1]));
        assert!(seq.iter().all(|&v| (100..=200).contains(&v)));
    }

    #[test]
    fn test_populate_random_empty_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut tree = BinarySearchTree::new(vec![1, 2, 3]);
        tree.populate_random_with(10, 5, 4, &mut rng);
        assert!(tree.is_empty());
    }
}
