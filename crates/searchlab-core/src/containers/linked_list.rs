//! Searchable singly linked list
//!
//! Reaching index i costs i link hops, which is exactly what the
//! visualizer wants learners to see. Unlike the array, the access
//! history records the *value* read at each position, not the index.

use rand::Rng;

use crate::errors::ContainerError;

#[derive(Debug, Clone)]
struct ListNode {
    value: i64,
    next: Option<Box<ListNode>>,
}

/// Singly linked, head-owned container of comparable values.
#[derive(Debug, Clone, Default)]
pub struct SearchLinkedList {
    head: Option<Box<ListNode>>,
    len: usize,
    access_history: Vec<i64>,
}

impl SearchLinkedList {
    pub fn new(data: Vec<i64>) -> Self {
        let mut list = Self::default();
        for value in data {
            list.push(value);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a value at the tail.
    pub fn push(&mut self, value: i64) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(ListNode { value, next: None }));
        self.len += 1;
    }

    /// Read the value at `index`, hopping `index` links and recording
    /// the value read.
    pub fn value_at(&mut self, index: usize) -> Result<i64, ContainerError> {
        if index >= self.len {
            return Err(ContainerError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        let mut cursor = self.head.as_deref();
        for _ in 0..index {
            cursor = cursor.and_then(|node| node.next.as_deref());
        }

        // index < len guarantees the cursor landed on a node
        match cursor {
            Some(node) => {
                self.access_history.push(node.value);
                Ok(node.value)
            }
            None => Err(ContainerError::IndexOutOfRange {
                index,
                len: self.len,
            }),
        }
    }

    /// Values read so far, in order.
    pub fn access_history(&self) -> &[i64] {
        &self.access_history
    }

    pub fn clear_history(&mut self) {
        self.access_history.clear();
    }

    pub fn to_ordered_sequence(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            out.push(node.value);
            cursor = node.next.as_deref();
        }
        out
    }

    /// Replace contents with `size` random values in `[min, max]` and
    /// reset the access history. An empty range (`min > max`) leaves
    /// the list empty.
    pub fn populate_random_with<R: Rng + ?Sized>(
        &mut self,
        size: usize,
        min: i64,
        max: i64,
        rng: &mut R,
    ) {
        self.head = None;
        self.len = 0;
        self.clear_history();

        if min > max {
            return;
        }
        for _ in 0..size {
            self.push(rng.gen_range(min..=max));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_push_and_ordered_sequence() {
        let list = SearchLinkedList::new(vec![3, 1, 4]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_ordered_sequence(), vec![3, 1, 4]);
    }

    #[test]
    fn test_value_at_records_values_not_indices() {
        let mut list = SearchLinkedList::new(vec![10, 20, 30]);
        assert_eq!(list.value_at(1).unwrap(), 20);
        assert_eq!(list.value_at(2).unwrap(), 30);
        assert_eq!(list.access_history(), &[20, 30]);
    }

    #[test]
    fn test_value_at_out_of_range() {
        let mut list = SearchLinkedList::new(vec![1]);
        assert_eq!(
            list.value_at(1),
            Err(ContainerError::IndexOutOfRange { index: 1, len: 1 })
        );

        let mut empty = SearchLinkedList::default();
        assert_eq!(
            empty.value_at(0),
            Err(ContainerError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_populate_random_resets_everything() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut list = SearchLinkedList::new(vec![1, 2, 3]);
        list.value_at(0).unwrap();

        list.populate_random_with(20, -5, 5, &mut rng);
        assert_eq!(list.len(), 20);
        assert!(list.access_history().is_empty());
        assert!(list
            .to_ordered_sequence()
            .iter()
            .all(|&v| (-5..=5).contains(&v)));
    }

    #[test]
    fn test_populate_random_empty_range() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut list = SearchLinkedList::new(vec![1, 2, 3]);
        list.populate_random_with(10, 5, 4, &mut rng);
        assert!(list.is_empty());
        assert!(list.to_ordered_sequence().is_empty());
    }
}
