// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;
use core::cmp::Ordering;
use core::marker::PhantomData;
use core::mem::{needs_drop, size_of};
use core::ops::{Deref, DerefMut};
use core::ptr;
use core::slice;

use stride_buf::RawSlotBuf;

use crate::error::StrideVecError;

/// A growable vector of fixed-stride elements with typed cleanup.
///
/// Logical length never exceeds capacity; slots `[0, len)` hold initialized
/// elements and the rest are uninitialized storage. Capacity doubles when an
/// insertion meets a full buffer, so references handed out earlier are
/// invalidated by any mutating call; the borrow checker enforces this.
///
/// Elements with a `Drop` impl are dropped when overwritten ([`replace`]),
/// deleted ([`delete`]), cleared ([`clear`]) or when the vector is dropped.
/// Relocation (growth, shifting, sorting) moves elements without dropping
/// them. For plain data, `needs_drop` lets all cleanup loops compile away.
///
/// [`replace`]: StrideVec::replace
/// [`delete`]: StrideVec::delete
/// [`clear`]: StrideVec::clear
///
/// # Example
///
/// ```rust
/// use stride_vec::StrideVec;
///
/// let mut vec = StrideVec::<u64>::with_capacity(2)?;
/// vec.append(10)?;
/// vec.append(20)?;
/// vec.insert(15, 1)?;
///
/// assert_eq!(vec.as_slice(), &[10, 15, 20]);
/// assert_eq!(vec.capacity(), 4);
/// # Ok::<(), stride_vec::StrideVecError>(())
/// ```
pub struct StrideVec<T> {
    buf: RawSlotBuf,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T> StrideVec<T> {
    /// Creates an empty vector with exactly `initial_capacity` slots.
    ///
    /// # Errors
    ///
    /// - [`StrideVecError::ZeroSizedElement`] if `T` has zero size.
    /// - [`StrideVecError::ZeroCapacity`] if `initial_capacity` is zero.
    /// - [`StrideVecError::Buf`] if the initial allocation fails.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, StrideVecError> {
        if size_of::<T>() == 0 {
            return Err(StrideVecError::ZeroSizedElement);
        }
        if initial_capacity == 0 {
            return Err(StrideVecError::ZeroCapacity);
        }

        let buf = RawSlotBuf::new(Layout::new::<T>(), initial_capacity)?;

        Ok(Self {
            buf,
            len: 0,
            _marker: PhantomData,
        })
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Address of slot `index` as a typed pointer.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.capacity()`. Whether the slot holds
    /// an initialized element is the caller's knowledge.
    #[inline]
    unsafe fn elem_ptr(&self, index: usize) -> *mut T {
        // SAFETY: forwarded contract; the buffer was built with
        // Layout::new::<T>(), so every slot is a correctly aligned T
        // location.
        unsafe { self.buf.slot_ptr(index).cast::<T>() }
    }

    /// Returns a reference to the element at `position`.
    ///
    /// The reference is valid until the next mutating call (growth may
    /// relocate the whole backing store); the borrow checker enforces this.
    ///
    /// # Errors
    ///
    /// [`StrideVecError::OutOfBounds`] unless `position < len`.
    pub fn nth(&self, position: usize) -> Result<&T, StrideVecError> {
        if position >= self.len {
            return Err(StrideVecError::OutOfBounds {
                index: position,
                len: self.len,
            });
        }

        // SAFETY: position < len, and slots [0, len) hold initialized
        // elements.
        Ok(unsafe { &*self.elem_ptr(position) })
    }

    /// Returns a mutable reference to the element at `position`.
    ///
    /// # Errors
    ///
    /// [`StrideVecError::OutOfBounds`] unless `position < len`.
    pub fn nth_mut(&mut self, position: usize) -> Result<&mut T, StrideVecError> {
        if position >= self.len {
            return Err(StrideVecError::OutOfBounds {
                index: position,
                len: self.len,
            });
        }

        // SAFETY: position < len, and slots [0, len) hold initialized
        // elements.
        Ok(unsafe { &mut *self.elem_ptr(position) })
    }

    /// Overwrites the element at `position` with `value`.
    ///
    /// The displaced element is dropped (its cleanup runs) before the new
    /// value becomes visible. Length is unchanged.
    ///
    /// # Errors
    ///
    /// [`StrideVecError::OutOfBounds`] unless `position < len`.
    pub fn replace(&mut self, value: T, position: usize) -> Result<(), StrideVecError> {
        if position >= self.len {
            return Err(StrideVecError::OutOfBounds {
                index: position,
                len: self.len,
            });
        }

        // SAFETY: position < len, so the slot holds an initialized element;
        // dropping it in place releases whatever it owns, and the write
        // re-initializes the slot.
        unsafe {
            let slot = self.elem_ptr(position);
            ptr::drop_in_place(slot);
            ptr::write(slot, value);
        }

        Ok(())
    }

    /// Inserts `value` at `position`, shifting `[position, len)` one slot
    /// right.
    ///
    /// `position == len` is valid and appends. Doubles capacity when full.
    /// Shifted elements are relocated, not dropped.
    ///
    /// # Errors
    ///
    /// - [`StrideVecError::OutOfBounds`] unless `position <= len`.
    /// - [`StrideVecError::Buf`] if growth fails; the vector is unchanged.
    pub fn insert(&mut self, value: T, position: usize) -> Result<(), StrideVecError> {
        if position > self.len {
            return Err(StrideVecError::OutOfBounds {
                index: position,
                len: self.len,
            });
        }

        if self.len == self.buf.capacity() {
            self.buf.grow()?;
        }

        // SAFETY: len < capacity after the growth check and position <= len,
        // so the gap move stays inside the allocation and relocates only
        // initialized slots; the write fills the vacated slot.
        unsafe {
            self.buf.open_gap(position, self.len);
            ptr::write(self.elem_ptr(position), value);
        }

        self.len += 1;
        Ok(())
    }

    /// Appends `value` at the end. O(1) amortized; no shifting.
    ///
    /// # Errors
    ///
    /// [`StrideVecError::Buf`] if growth fails; the vector is unchanged.
    pub fn append(&mut self, value: T) -> Result<(), StrideVecError> {
        if self.len == self.buf.capacity() {
            self.buf.grow()?;
        }

        // SAFETY: len < capacity after the growth check; the tail slot is
        // uninitialized storage.
        unsafe { ptr::write(self.elem_ptr(self.len), value) };

        self.len += 1;
        Ok(())
    }

    /// Removes the element at `position`, shifting `(position, len)` one
    /// slot left.
    ///
    /// The removed element is dropped: delete and replace share the same
    /// cleanup contract, so owned resources are released on both paths.
    ///
    /// # Errors
    ///
    /// [`StrideVecError::OutOfBounds`] unless `position < len`.
    pub fn delete(&mut self, position: usize) -> Result<(), StrideVecError> {
        if position >= self.len {
            return Err(StrideVecError::OutOfBounds {
                index: position,
                len: self.len,
            });
        }

        // SAFETY: position < len, so the slot holds an initialized element.
        // After the in-place drop, the gap move overwrites the dead slot's
        // bytes (or, for the tail, leaves them beyond the new length), so no
        // element is dropped twice.
        unsafe {
            ptr::drop_in_place(self.elem_ptr(position));
            self.buf.close_gap(position, self.len);
        }

        self.len -= 1;
        Ok(())
    }

    /// Drops every live element in ascending index order, keeping the
    /// allocation.
    pub fn clear(&mut self) {
        let live = self.len;

        // Length goes to zero before any element drop runs: a panicking
        // Drop then leaks the remainder instead of double-dropping it.
        self.len = 0;

        if !needs_drop::<T>() {
            return;
        }

        for i in 0..live {
            // SAFETY: slots [0, live) held initialized elements and are
            // dropped exactly once each.
            unsafe { ptr::drop_in_place(self.elem_ptr(i)) };
        }
    }

    /// Sorts the elements in place with `compare`. Not stable: equal
    /// elements keep no particular order.
    ///
    /// Sorting permutes elements without dropping any.
    pub fn sort_unstable_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_unstable_by(compare);
    }

    /// Visits every element mutably in ascending index order.
    ///
    /// This is a side-effecting traversal: changes are visible immediately
    /// and nothing is aggregated. State the traversal needs lives in the
    /// closure's captured environment.
    pub fn for_each_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut T),
    {
        for elem in self.as_mut_slice() {
            visit(elem);
        }
    }

    /// Searches for `key` under a three-way `compare(key, element)`.
    ///
    /// With `sorted == false`, scans `[start_index, len)` linearly and
    /// returns the first match. With `sorted == true`, binary-searches the
    /// **entire** vector; `start_index` does not narrow the sorted path
    /// (callers wanting a bounded sorted search can slice via
    /// [`as_slice`](StrideVec::as_slice)); which of several equal elements
    /// is found is unspecified.
    ///
    /// Returns `Ok(None)` when nothing matches.
    ///
    /// # Errors
    ///
    /// [`StrideVecError::OutOfBounds`] unless `start_index < len`; searching
    /// an empty vector is a contract violation, not a miss.
    pub fn search_by<K, F>(
        &self,
        key: &K,
        mut compare: F,
        start_index: usize,
        sorted: bool,
    ) -> Result<Option<usize>, StrideVecError>
    where
        F: FnMut(&K, &T) -> Ordering,
    {
        if start_index >= self.len {
            return Err(StrideVecError::OutOfBounds {
                index: start_index,
                len: self.len,
            });
        }

        if sorted {
            // binary_search_by wants element-versus-target ordering, the
            // mirror of compare's key-versus-element.
            return Ok(self
                .as_slice()
                .binary_search_by(|elem| compare(key, elem).reverse())
                .ok());
        }

        Ok(self.as_slice()[start_index..]
            .iter()
            .position(|elem| compare(key, elem) == Ordering::Equal)
            .map(|offset| start_index + offset))
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) hold initialized elements; capacity is
        // never zero, so the base pointer is valid even at len == 0.
        unsafe { slice::from_raw_parts(self.elem_ptr(0).cast_const(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for as_slice, with exclusive access through &mut self.
        unsafe { slice::from_raw_parts_mut(self.elem_ptr(0), self.len) }
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl<T: PartialEq> PartialEq for StrideVec<T> {
    fn eq(&self, other: &Self) -> bool {
        // Capacity is an allocation detail, not part of the value.
        self.as_slice() == other.as_slice()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl<T: Eq> Eq for StrideVec<T> {}

impl<T> core::fmt::Debug for StrideVec<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StrideVec")
            .field("len", &self.len)
            .field("capacity", &self.buf.capacity())
            .finish_non_exhaustive()
    }
}

impl<T> Deref for StrideVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for StrideVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> Drop for StrideVec<T> {
    fn drop(&mut self) {
        // Live elements first, ascending; the backing storage is then
        // released unconditionally by RawSlotBuf's own drop.
        self.clear();
    }
}
