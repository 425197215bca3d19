//! The abstract list contract shared by every container in this crate.
//!
//! [`List`] captures the operations a sequence container must provide:
//! positional insertion, access and removal, membership tests, bulk
//! set-style operations, snapshot conversion, and the two cursor
//! factories. [`ArrayList`] and [`LinkedList`] both conform, and any two
//! conforming containers holding the same logical sequence of elements are
//! observably equivalent through every contract operation.
//!
//! [`Cursor`] is the contract of the bidirectional read-only cursors the
//! containers hand out. The forward-only cursors are ordinary [`Iterator`]s.
//!
//! [`ArrayList`]: crate::ArrayList
//! [`LinkedList`]: crate::LinkedList

use crate::error::Error;

/// The common behavior of the sequence containers in this crate.
///
/// Fallible operations return [`Error`] instead of panicking, and they
/// validate their arguments *before* mutating anything, so a failed call
/// leaves the container exactly as it was.
///
/// The bulk operations ([`contains_all`], [`append_all`], [`remove_all`],
/// [`retain_all`]) and the equality-based scans are provided as default
/// methods defined element-wise over the required primitives; the
/// containers only implement the primitives.
///
/// # Examples
///
/// Code written against the contract runs unchanged on either container:
///
/// ```
/// use seq_list::{ArrayList, LinkedList, List};
///
/// fn middle<L: List<i32>>(list: &L) -> Option<&i32> {
///     list.get(list.len() / 2).ok()
/// }
///
/// let array = ArrayList::from_iter([1, 2, 3]);
/// let linked = LinkedList::from_iter([1, 2, 3]);
/// assert_eq!(middle(&array), Some(&2));
/// assert_eq!(middle(&linked), Some(&2));
/// ```
///
/// [`contains_all`]: List::contains_all
/// [`append_all`]: List::append_all
/// [`remove_all`]: List::remove_all
/// [`retain_all`]: List::retain_all
pub trait List<T> {
    /// The forward-only cursor type, a lazy sequence over the remaining
    /// elements. Restartable only by calling [`iter`](List::iter) again.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// The bidirectional read-only cursor type.
    type Cursor<'a>: Cursor<'a, T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    fn len(&self) -> usize;

    /// Removes all elements from the list.
    ///
    /// The array-backed container keeps its buffer; the linked container
    /// releases all of its nodes.
    fn clear(&mut self);

    /// Appends `value` to the end of the list.
    ///
    /// Equivalent to `insert(len, value)`, which is always in range.
    fn push(&mut self, value: T);

    /// Inserts `value` at position `index`, shifting every element at or
    /// after `index` one position later.
    ///
    /// `index` may be any position in `0..=len`; inserting at `len`
    /// appends.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::{LinkedList, List};
    ///
    /// let mut list = LinkedList::from_iter(["a", "b"]);
    /// list.insert(1, "c").unwrap();
    /// assert_eq!(list.to_vec(), ["a", "c", "b"]);
    /// assert!(list.insert(9, "d").is_err());
    /// ```
    fn insert(&mut self, index: usize, value: T) -> Result<(), Error>;

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if `index >= len`.
    fn get(&self, index: usize) -> Result<&T, Error>;

    /// Replaces the element at `index` with `value` and returns the
    /// previous element.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::{ArrayList, List};
    ///
    /// let mut list = ArrayList::from_iter([10, 20]);
    /// assert_eq!(list.set(1, 25), Ok(20));
    /// assert_eq!(list.to_vec(), [10, 25]);
    /// ```
    fn set(&mut self, index: usize, value: T) -> Result<T, Error>;

    /// Removes the element at `index` and returns it, shifting every
    /// later element one position earlier.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if `index >= len`.
    fn remove_at(&mut self, index: usize) -> Result<T, Error>;

    /// Provides a forward cursor over the whole list.
    fn iter(&self) -> Self::Iter<'_>;

    /// Provides a forward cursor over the elements from position `start`
    /// to the end. At `start == len` the cursor starts exhausted.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if `start > len`.
    fn iter_from(&self, start: usize) -> Result<Self::Iter<'_>, Error>;

    /// Provides a bidirectional cursor positioned before the first
    /// element.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Provides a bidirectional cursor positioned in the gap before the
    /// element at `index`, so that [`next`](Cursor::next) first yields
    /// element `index` and [`previous`](Cursor::previous) first yields
    /// element `index - 1`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if `index > len`.
    fn cursor_at(&self, index: usize) -> Result<Self::Cursor<'_>, Error>;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the list contains an element equal to `value`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == value)
    }

    /// Removes the first element equal to `value`, if any, and returns
    /// whether a removal occurred.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::{LinkedList, List};
    ///
    /// let mut list = LinkedList::from_iter([1, 2, 1]);
    /// assert!(list.remove_value(&1));
    /// assert_eq!(list.to_vec(), [2, 1]);
    /// assert!(!list.remove_value(&7));
    /// ```
    fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let found = self.iter().position(|e| e == value);
        match found {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Returns `true` if every element of `other` is contained in this
    /// list. Vacuously true when `other` is empty.
    fn contains_all<L>(&self, other: &L) -> bool
    where
        L: List<T>,
        T: PartialEq,
    {
        other.iter().all(|value| self.contains(value))
    }

    /// Appends a clone of every element of `other` to this list, in
    /// order. Returns whether the length changed.
    fn append_all<L>(&mut self, other: &L) -> bool
    where
        L: List<T>,
        T: Clone,
    {
        let before = self.len();
        for value in other.iter() {
            self.push(value.clone());
        }
        before != self.len()
    }

    /// Set difference: removes every occurrence of each value that is
    /// contained in `other`. Returns whether the length changed.
    ///
    /// Unlike a one-occurrence-per-scan removal, this is well defined for
    /// duplicate-heavy inputs on either side.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::{ArrayList, List};
    ///
    /// let mut list = ArrayList::from_iter([1, 1, 2, 3]);
    /// let other = ArrayList::from_iter([1, 3]);
    /// assert!(list.remove_all(&other));
    /// assert_eq!(list.to_vec(), [2]);
    /// ```
    fn remove_all<L>(&mut self, other: &L) -> bool
    where
        L: List<T>,
        T: PartialEq,
    {
        let before = self.len();
        let mut index = 0;
        while index < self.len() {
            let matched = match self.get(index) {
                Ok(value) => other.contains(value),
                Err(_) => break,
            };
            if matched {
                let _removed = self.remove_at(index);
            } else {
                index += 1;
            }
        }
        before != self.len()
    }

    /// Set intersection: keeps only the elements (every occurrence) that
    /// are contained in `other`. Returns whether the length changed.
    fn retain_all<L>(&mut self, other: &L) -> bool
    where
        L: List<T>,
        T: PartialEq,
    {
        let before = self.len();
        let mut index = 0;
        while index < self.len() {
            let keep = match self.get(index) {
                Ok(value) => other.contains(value),
                Err(_) => break,
            };
            if keep {
                index += 1;
            } else {
                let _removed = self.remove_at(index);
            }
        }
        before != self.len()
    }

    /// Returns a snapshot of all elements in order, independent of later
    /// mutation of the list.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// A bidirectional read-only cursor over a list.
///
/// A cursor rests in a *gap* between two elements (or before the first /
/// after the last); a list of length *n* has *n* + 1 valid gaps. Moving
/// forward returns the element after the gap, moving backward returns the
/// element before it, so a cursor created at position `i` yields elements
/// `i, i + 1, …` going forward and `i - 1, …, 0` going backward.
///
/// Cursors never mutate their list. The structural-mutation surface is
/// present for interface completeness only and always fails with
/// [`Error::Unsupported`].
///
/// # Examples
///
/// ```
/// use seq_list::{Cursor, LinkedList, List};
///
/// let list = LinkedList::from_iter(['a', 'b', 'c']);
/// let mut cursor = list.cursor_at(list.len()).unwrap();
///
/// assert!(!cursor.has_next());
/// assert_eq!(cursor.previous(), Ok(&'c'));
/// assert_eq!(cursor.previous(), Ok(&'b'));
/// assert_eq!(cursor.next(), Ok(&'b'));
/// ```
pub trait Cursor<'a, T> {
    /// Returns `true` if a forward move would yield an element.
    fn has_next(&self) -> bool;

    /// Returns the element after the gap and moves the gap one position
    /// forward.
    ///
    /// # Errors
    ///
    /// [`Error::Exhausted`] if the gap is already after the last element.
    fn next(&mut self) -> Result<&'a T, Error>;

    /// Returns `true` if a backward move would yield an element.
    fn has_previous(&self) -> bool;

    /// Returns the element before the gap and moves the gap one position
    /// backward.
    ///
    /// # Errors
    ///
    /// [`Error::Exhausted`] if the gap is already before the first
    /// element.
    fn previous(&mut self) -> Result<&'a T, Error>;

    /// Not supported: cursors are read-only.
    fn insert(&mut self, _value: T) -> Result<(), Error> {
        Err(Error::Unsupported("insert"))
    }

    /// Not supported: cursors are read-only.
    fn remove(&mut self) -> Result<T, Error> {
        Err(Error::Unsupported("remove"))
    }

    /// Not supported: cursors are read-only.
    fn replace(&mut self, _value: T) -> Result<T, Error> {
        Err(Error::Unsupported("replace"))
    }

    /// Not supported.
    fn next_index(&self) -> Result<usize, Error> {
        Err(Error::Unsupported("next_index"))
    }

    /// Not supported.
    fn previous_index(&self) -> Result<usize, Error> {
        Err(Error::Unsupported("previous_index"))
    }
}
