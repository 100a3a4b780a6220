//! Searchable array - index-addressable storage with an access log

use rand::Rng;

use crate::errors::ContainerError;

/// Ordered, index-addressable container of comparable values.
///
/// Every positional read is appended to an access-history log so the
/// visualization layer can replay which cells a search touched.
#[derive(Debug, Clone, Default)]
pub struct SearchArray {
    data: Vec<i64>,
    access_history: Vec<usize>,
}

impl SearchArray {
    pub fn new(data: Vec<i64>) -> Self {
        Self {
            data,
            access_history: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read the value at `index`, recording the access.
    pub fn get(&mut self, index: usize) -> Result<i64, ContainerError> {
        if index >= self.data.len() {
            return Err(ContainerError::IndexOutOfRange {
                index,
                len: self.data.len(),
            });
        }
        self.access_history.push(index);
        Ok(self.data[index])
    }

    /// Overwrite the value at `index`. Writes are not logged.
    pub fn set(&mut self, index: usize, value: i64) -> Result<(), ContainerError> {
        if index >= self.data.len() {
            return Err(ContainerError::IndexOutOfRange {
                index,
                len: self.data.len(),
            });
        }
        self.data[index] = value;
        Ok(())
    }

    /// Append a value at the end.
    pub fn push(&mut self, value: i64) {
        self.data.push(value);
    }

    /// Sort in place, ascending. Precondition for binary search.
    pub fn sort(&mut self) {
        self.data.sort_unstable();
    }

    /// Indices read so far, in order.
    pub fn access_history(&self) -> &[usize] {
        &self.access_history
    }

    pub fn clear_history(&mut self) {
        self.access_history.clear();
    }

    /// Read-only view of the underlying values.
    pub fn values(&self) -> &[i64] {
        &self.data
    }

    pub fn to_ordered_sequence(&self) -> Vec<i64> {
        self.data.clone()
    }

    /// Replace contents with `size` random values in `[min, max]` and
    /// reset the access history. An empty range (`min > max`) leaves
    /// the array empty.
    pub fn populate_random_with<R: Rng + ?Sized>(
        &mut self,
        size: usize,
        min: i64,
        max: i64,
        rng: &mut R,
    ) {
        self.data.clear();
        self.clear_history();

        if min > max {
            return;
        }
        self.data = (0..size).map(|_| rng.gen_range(min..=max)).collect();
    }
}
