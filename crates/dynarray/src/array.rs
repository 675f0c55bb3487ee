//! The growable array container.
//!
//! [`DynArray`] owns a contiguous buffer of elements and tracks a logical
//! length and a contract capacity separately. Appends are amortized O(1):
//! when the array is full, capacity doubles (or restarts at
//! [`DynArray::INITIAL_CAPACITY`] after a [`clear`](DynArray::clear)) and the
//! elements are migrated to the new buffer before the old one is released.

use std::io;
use std::mem;
use std::ops::{Index, IndexMut};
use std::slice;

use crate::error::ArrayError;

/// A growable array with explicit capacity management.
///
/// The backing storage holds exactly the logical elements; slots between the
/// logical length and the contract capacity are reserved but never
/// observable. Two arrays never share storage: duplication is always a deep,
/// element-wise copy via [`try_clone`](DynArray::try_clone).
///
/// Every constructor and every mutating operation that can allocate returns
/// `Result` — allocation failure surfaces as
/// [`ArrayError::AllocationFailed`] and leaves the array unchanged.
#[derive(Debug)]
pub struct DynArray<T> {
    /// Backing storage. `buf.len()` is the logical length; the vector's real
    /// allocation is kept at least `cap` slots ahead of it.
    buf: Vec<T>,
    /// Contract capacity: number of slots reserved for elements. Drives the
    /// growth policy and is the value reported by `capacity()`.
    cap: usize,
}

impl<T> DynArray<T> {
    /// Capacity of a default-constructed array, and the capacity the array
    /// regrows to when pushing after [`clear`](DynArray::clear).
    pub const INITIAL_CAPACITY: usize = 16;

    /// Create an empty array with [`INITIAL_CAPACITY`](Self::INITIAL_CAPACITY)
    /// slots reserved.
    pub fn new() -> Result<Self, ArrayError> {
        Self::with_capacity(Self::INITIAL_CAPACITY)
    }

    /// Create an empty array with `capacity` slots reserved.
    ///
    /// Returns [`ArrayError::InvalidCapacity`] when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        if capacity == 0 {
            return Err(ArrayError::InvalidCapacity);
        }
        let mut buf = Vec::new();
        reserve_slots(&mut buf, capacity)?;
        Ok(Self { buf, cap: capacity })
    }

    /// Number of elements currently in the array.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of slots currently reserved for elements.
    ///
    /// Never decreases except through [`clear`](DynArray::clear), which
    /// resets it to zero.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Append `value`, growing the buffer first if the array is full.
    ///
    /// Amortized O(1). Growth doubles the capacity, or reserves
    /// [`INITIAL_CAPACITY`](Self::INITIAL_CAPACITY) slots when growing from
    /// a cleared (zero-capacity) state. On allocation failure the array is
    /// unchanged, `value` is dropped, and the error carries the capacity
    /// that could not be reserved.
    pub fn push(&mut self, value: T) -> Result<(), ArrayError> {
        if self.buf.len() == self.cap {
            self.grow()?;
        }
        self.buf.push(value);
        Ok(())
    }

    /// Remove and return the last element.
    ///
    /// O(1); capacity is unchanged. Returns [`ArrayError::Empty`] when the
    /// array holds no elements.
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        self.buf.pop().ok_or(ArrayError::Empty { operation: "pop" })
    }

    /// Release the buffer entirely.
    ///
    /// Both length and capacity become zero. The next
    /// [`push`](DynArray::push) re-allocates through the normal
    /// grow-from-zero path.
    pub fn clear(&mut self) {
        self.buf = Vec::new();
        self.cap = 0;
    }

    /// Shared reference to the element at `index`.
    ///
    /// Returns [`ArrayError::OutOfBounds`] when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        self.buf.get(index).ok_or(ArrayError::OutOfBounds {
            index,
            len: self.buf.len(),
        })
    }

    /// Mutable reference to the element at `index`.
    ///
    /// Returns [`ArrayError::OutOfBounds`] when `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.buf.len();
        self.buf
            .get_mut(index)
            .ok_or(ArrayError::OutOfBounds { index, len })
    }

    /// Shared reference to the first element.
    ///
    /// Returns [`ArrayError::Empty`] when the array holds no elements.
    pub fn front(&self) -> Result<&T, ArrayError> {
        self.buf
            .first()
            .ok_or(ArrayError::Empty { operation: "front" })
    }

    /// Mutable reference to the first element.
    ///
    /// Returns [`ArrayError::Empty`] when the array holds no elements.
    pub fn front_mut(&mut self) -> Result<&mut T, ArrayError> {
        self.buf
            .first_mut()
            .ok_or(ArrayError::Empty { operation: "front" })
    }

    /// Shared reference to the last element.
    ///
    /// Returns [`ArrayError::Empty`] when the array holds no elements.
    pub fn back(&self) -> Result<&T, ArrayError> {
        self.buf
            .last()
            .ok_or(ArrayError::Empty { operation: "back" })
    }

    /// Mutable reference to the last element.
    ///
    /// Returns [`ArrayError::Empty`] when the array holds no elements.
    pub fn back_mut(&mut self) -> Result<&mut T, ArrayError> {
        self.buf
            .last_mut()
            .ok_or(ArrayError::Empty { operation: "back" })
    }

    /// View of the logical elements.
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// Mutable view of the logical elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// Iterator over the elements in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buf.iter()
    }

    /// Mutable iterator over the elements in index order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.buf.iter_mut()
    }

    /// Reserved storage in bytes (`capacity() * size_of::<T>()`).
    pub fn memory_bytes(&self) -> usize {
        self.cap * mem::size_of::<T>()
    }

    /// Write a human-readable dump of the container address, buffer address,
    /// length, and capacity to `out`.
    ///
    /// Diagnostic only; the format is not part of the contract.
    pub fn dump_info<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "address: {:p}", self)?;
        writeln!(out, "buffer address: {:p}", self.buf.as_ptr())?;
        writeln!(out, "length: {}", self.buf.len())?;
        writeln!(out, "capacity: {}", self.cap)
    }

    /// Reserve the next capacity step: double, or
    /// [`INITIAL_CAPACITY`](Self::INITIAL_CAPACITY) when growing from zero.
    ///
    /// The reservation moves the elements into the new buffer before the old
    /// one is released; on failure the array is untouched.
    fn grow(&mut self) -> Result<(), ArrayError> {
        let new_cap = if self.cap == 0 {
            Self::INITIAL_CAPACITY
        } else {
            self.cap.saturating_mul(2)
        };
        reserve_slots(&mut self.buf, new_cap)?;
        self.cap = new_cap;
        Ok(())
    }
}

impl<T: Clone> DynArray<T> {
    /// Create an array whose `capacity` slots all hold a clone of `value`,
    /// with length equal to capacity.
    ///
    /// Returns [`ArrayError::InvalidCapacity`] when `capacity` is zero. A
    /// panic in `T::clone` unwinds out; everything built so far is released.
    pub fn filled(capacity: usize, value: T) -> Result<Self, ArrayError> {
        let mut array = Self::with_capacity(capacity)?;
        array.buf.resize(capacity, value);
        Ok(array)
    }

    /// Create an array holding a copy of each element of `values`, in order,
    /// with capacity equal to `values.len()`.
    ///
    /// Returns [`ArrayError::InvalidCapacity`] for an empty slice, matching
    /// the sized constructor it delegates to.
    pub fn from_slice(values: &[T]) -> Result<Self, ArrayError> {
        let mut array = Self::with_capacity(values.len())?;
        array.buf.extend_from_slice(values);
        Ok(array)
    }

    /// Deep copy: a new array with this array's capacity and an element-wise
    /// copy of its contents.
    ///
    /// Unlike the constructors, a capacity of zero is legal here — copying a
    /// cleared array yields a cleared array.
    pub fn try_clone(&self) -> Result<Self, ArrayError> {
        let mut buf = Vec::new();
        reserve_slots(&mut buf, self.cap)?;
        buf.extend_from_slice(&self.buf);
        Ok(Self { buf, cap: self.cap })
    }

    /// Replace this array's contents with a deep copy of `other`.
    ///
    /// Copy-and-swap: the copy is built completely in a temporary, then
    /// swapped in, so on error the array is untouched and the old storage is
    /// released exactly once, when the temporary drops.
    pub fn assign(&mut self, other: &Self) -> Result<(), ArrayError> {
        let mut fresh = other.try_clone()?;
        mem::swap(self, &mut fresh);
        Ok(())
    }
}

impl<T: PartialEq> DynArray<T> {
    /// Index of the first element equal to `value`, if any.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.buf.iter().position(|el| el == value)
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    /// Same bounds check as [`DynArray::get`].
    ///
    /// # Panics
    ///
    /// Panics when `index >= len()`, with the
    /// [`ArrayError::OutOfBounds`] message.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    /// Same bounds check as [`DynArray::get_mut`].
    ///
    /// # Panics
    ///
    /// Panics when `index >= len()`, with the
    /// [`ArrayError::OutOfBounds`] message.
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    /// Element-wise equality over the logical elements; capacity does not
    /// participate.
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

/// Grow `buf`'s real allocation to at least `target` slots.
///
/// `try_reserve_exact` either completes the reservation (moving existing
/// elements and releasing the old buffer only afterwards) or fails leaving
/// the vector untouched.
fn reserve_slots<T>(buf: &mut Vec<T>, target: usize) -> Result<(), ArrayError> {
    let additional = target.saturating_sub(buf.len());
    buf.try_reserve_exact(additional)
        .map_err(|source| ArrayError::AllocationFailed {
            requested: target,
            source,
        })
}
