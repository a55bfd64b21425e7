use crate::{Error, Result};
use num_traits::Float;
use std::fmt::Debug;

/// A binary min-/max-heap over a fixed set of integer elements.
///
/// The heap tracks the elements `0..n`, each associated with a floating
/// point key. While this seems very specific, it can be used for basically
/// everything, since the integer elements can index into arbitrary external
/// data and key updates can be deferred outside of this structure.
///
/// The element set is fixed at construction: there is no insertion or
/// deletion afterwards, only key increases and decreases. This limitation is
/// intentional, as it allows a dense, permutation-indexed representation
/// with O(1) key lookup by element id.
///
/// A max-heap is obtained through [`IndexedHeap::new_max`]; it stores keys
/// negated internally so the same comparison logic serves both orders, and
/// every key read back is sign-corrected.
#[derive(Debug, Clone)]
pub struct IndexedHeap<K = f64>
where
    K: Float + Debug + Copy,
{
    /// The heap tree itself: (stored key, element id) pairs.
    nodes: Vec<(K, usize)>,

    /// Inverse permutation of the tree: `perm[e]` is the position in
    /// `nodes` where element `e` currently lives.
    perm: Vec<usize>,

    /// +1 for a min-heap, -1 for a max-heap.
    sign: K,
}

impl<K> IndexedHeap<K>
where
    K: Float + Debug + Copy,
{
    /// Creates a min-heap over the elements `0..keys.len()`, where element
    /// `i` is assigned the key `keys[i]`.
    ///
    /// The heap is built by inserting the elements one at a time, so
    /// construction costs O(n log n).
    pub fn new(keys: &[K]) -> Self {
        Self::with_sign(keys, K::one())
    }

    /// Creates a max-heap over the elements `0..keys.len()`.
    ///
    /// Keys are stored negated internally; every key returned by the
    /// accessors is corrected back to the caller's sign.
    pub fn new_max(keys: &[K]) -> Self {
        Self::with_sign(keys, -K::one())
    }

    fn with_sign(keys: &[K], sign: K) -> Self {
        let mut heap = IndexedHeap {
            nodes: Vec::with_capacity(keys.len()),
            perm: Vec::with_capacity(keys.len()),
            sign,
        };
        for &key in keys {
            heap.insert(key);
        }
        heap
    }

    /// Appends a new element with the given key and restores the heap.
    fn insert(&mut self, key: K) {
        let v = self.nodes.len();
        self.perm.push(v);
        self.nodes.push((self.sign * key, v));
        self.sift_up(v);
    }

    /// Returns the number of elements in the heap.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the minimum key and its element id.
    ///
    /// If the heap is a max-heap, this returns the maximum key instead.
    /// Fails with [`Error::OutOfRange`] when the heap is empty.
    pub fn find_min(&self) -> Result<(K, usize)> {
        let &(key, element) = self
            .nodes
            .first()
            .ok_or(Error::out_of_range("heap", 0, 0))?;
        Ok((self.sign * key, element))
    }

    /// Returns the current key associated with the given element, in O(1).
    ///
    /// Fails with [`Error::OutOfRange`] when `element >= size()`.
    pub fn get_key(&self, element: usize) -> Result<K> {
        self.check_element(element)?;
        Ok(self.sign * self.nodes[self.perm[element]].0)
    }

    /// Decreases the key of the given element by `decrement`, then restores
    /// the heap in O(log n).
    ///
    /// This is a decrement regardless of whether the heap is a min-heap or
    /// a max-heap. The decrement is assumed non-negative; the caller is
    /// responsible for the sign.
    ///
    /// Fails with [`Error::OutOfRange`] when `element >= size()`.
    pub fn decrease_key(&mut self, element: usize, decrement: K) -> Result<()> {
        self.check_element(element)?;

        let v = self.perm[element];
        self.nodes[v].0 = self.nodes[v].0 - self.sign * decrement;

        // A min-heap stores keys as given, so a decrement can only move the
        // element up. A max-heap stores keys negated, so the stored key
        // grew and the element can only move down.
        if self.sign > K::zero() {
            self.sift_up(v);
        } else {
            self.sift_down(v);
        }
        Ok(())
    }

    /// Increases the key of the given element by `increment`, then restores
    /// the heap in O(log n).
    ///
    /// This is an increment regardless of whether the heap is a min-heap or
    /// a max-heap. The increment is assumed non-negative; the caller is
    /// responsible for the sign.
    ///
    /// Fails with [`Error::OutOfRange`] when `element >= size()`.
    pub fn increase_key(&mut self, element: usize, increment: K) -> Result<()> {
        self.check_element(element)?;

        let v = self.perm[element];
        self.nodes[v].0 = self.nodes[v].0 + self.sign * increment;

        if self.sign > K::zero() {
            self.sift_down(v);
        } else {
            self.sift_up(v);
        }
        Ok(())
    }

    /// Sets the key of the given element to an absolute value, composing
    /// [`IndexedHeap::increase_key`] and [`IndexedHeap::decrease_key`] by
    /// the signed difference.
    ///
    /// Fails with [`Error::OutOfRange`] when `element >= size()`.
    pub fn set_key(&mut self, element: usize, key: K) -> Result<()> {
        let current = self.get_key(element)?;
        if key < current {
            self.decrease_key(element, current - key)
        } else {
            self.increase_key(element, key - current)
        }
    }

    fn check_element(&self, element: usize) -> Result<()> {
        if element >= self.size() {
            return Err(Error::out_of_range("heap", element, self.size()));
        }
        Ok(())
    }

    /// Moves the node at position `v` towards the root until its parent's
    /// stored key is no greater. Equal keys do not swap.
    fn sift_up(&mut self, mut v: usize) {
        while v != 0 {
            // Implicit layout: parent of v is v / 2, so node 1 is the only
            // child of the root.
            let p = v >> 1;
            if self.nodes[p].0 <= self.nodes[v].0 {
                break;
            }

            self.nodes.swap(p, v);
            // Keep the inverse permutation in sync with the swap
            self.perm.swap(self.nodes[p].1, self.nodes[v].1);

            v = p;
        }
    }

    /// Moves the node at position `v` towards the leaves, swapping with the
    /// smaller child while that child's stored key is strictly smaller.
    fn sift_down(&mut self, mut v: usize) {
        loop {
            // Children of v are 2v and 2v + 1; the root's only child is
            // node 1, since 2 * 0 would point back at the root itself.
            let mut u = if v == 0 { 1 } else { 2 * v };
            if u >= self.size() {
                break;
            }
            if u + 1 < self.size() && self.nodes[u + 1].0 < self.nodes[u].0 {
                u += 1;
            }

            if self.nodes[u].0 >= self.nodes[v].0 {
                break;
            }

            self.nodes.swap(u, v);
            self.perm.swap(self.nodes[u].1, self.nodes[v].1);

            v = u;
        }
    }
}
