//! A sequence container backed by a single contiguous buffer.

use std::fmt::{Debug, Display, Formatter};

use crate::error::Error;
use crate::linked_list::LinkedList;
use crate::list::List;

pub mod cursor;
pub mod iterator;

pub use cursor::Cursor;
pub use iterator::{IntoIter, Iter};

/// Capacity of a buffer allocated by [`ArrayList::new`].
const DEFAULT_CAPACITY: usize = 10;

/// An [`ArrayList`] stores its elements in one contiguous buffer, giving
/// *O*(1) random access and *O*(1) amortized appends, in exchange for
/// *O*(*n* − *index*) positional insertion and removal.
///
/// The buffer is grown only by the container's own policy: when an
/// insertion finds the buffer full, capacity grows by half (with a minimum
/// increment of one slot). [`trim_to_size`] gives the excess back. Both
/// effects are observable through [`capacity`].
///
/// # Examples
///
/// ```
/// use seq_list::{ArrayList, List};
///
/// let mut list = ArrayList::with_capacity(2);
/// list.push("a");
/// list.push("b");
/// list.push("c"); // grows the buffer
/// assert_eq!(list.to_vec(), ["a", "b", "c"]);
/// assert!(list.capacity() >= 3);
/// ```
///
/// [`trim_to_size`]: ArrayList::trim_to_size
/// [`capacity`]: ArrayList::capacity
#[derive(Clone)]
pub struct ArrayList<T> {
    items: Vec<T>,
}

impl<T> ArrayList<T> {
    /// Creates an empty `ArrayList` with the default initial capacity
    /// of 10.
    ///
    /// # Examples
    /// ```
    /// let list: seq_list::ArrayList<u32> = seq_list::ArrayList::new();
    /// assert_eq!(list.capacity(), 10);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `ArrayList` whose buffer holds `capacity`
    /// elements before the first reallocation.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements the buffer can hold before
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Reallocates the buffer to exactly the current length, releasing
    /// any spare capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use seq_list::{ArrayList, List};
    ///
    /// let mut list = ArrayList::new();
    /// list.push(1);
    /// list.push(2);
    /// list.trim_to_size();
    /// assert_eq!(list.capacity(), 2);
    /// ```
    pub fn trim_to_size(&mut self) {
        self.items.shrink_to_fit();
    }

    /// Grow the buffer by half, by at least one slot, when it is full.
    ///
    /// `reserve_exact` keeps the growth arithmetic in this container's
    /// hands instead of `Vec`'s doubling policy.
    fn ensure_capacity(&mut self) {
        let capacity = self.items.capacity();
        if self.items.len() == capacity {
            let target = capacity + (capacity / 2).max(1);
            self.items.reserve_exact(target - self.items.len());
        }
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index >= self.items.len() {
            return Err(Error::out_of_bounds(index, self.items.len()));
        }
        Ok(())
    }
}

impl<T> List<T> for ArrayList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    type Cursor<'a>
        = Cursor<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn clear(&mut self) {
        // keeps the buffer; only the length is reset
        self.items.clear();
    }

    fn push(&mut self, value: T) {
        self.ensure_capacity();
        self.items.push(value);
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.items.len() {
            return Err(Error::out_of_bounds(index, self.items.len()));
        }
        self.ensure_capacity();
        self.items.insert(index, value);
        Ok(())
    }

    fn get(&self, index: usize) -> Result<&T, Error> {
        self.items
            .get(index)
            .ok_or_else(|| Error::out_of_bounds(index, self.items.len()))
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.items[index], value))
    }

    fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    #[inline]
    fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.items)
    }

    fn iter_from(&self, start: usize) -> Result<Iter<'_, T>, Error> {
        match self.items.get(start..) {
            Some(rest) => Ok(Iter::new(rest)),
            None => Err(Error::out_of_bounds(start, self.items.len())),
        }
    }

    #[inline]
    fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    fn cursor_at(&self, index: usize) -> Result<Cursor<'_, T>, Error> {
        if index > self.items.len() {
            return Err(Error::out_of_bounds(index, self.items.len()));
        }
        Ok(Cursor::new(self, index))
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

/// Renders the list as a bracketed, space-separated element listing,
/// e.g. `[a b c]` (`[]` when empty).
impl<T: Display> Display for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

/// Containers holding the same logical sequence compare equal across
/// storage strategies.
impl<T: PartialEq> PartialEq<LinkedList<T>> for ArrayList<T> {
    fn eq(&self, other: &LinkedList<T>) -> bool {
        self.items.len() == other.len() && self.items.iter().eq(other.iter())
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ArrayList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push(value));
    }
}

#[cfg(test)]
mod tests {
    use super::ArrayList;
    use crate::error::Error;
    use crate::list::List;
    use test_case::test_case;

    #[test]
    fn starts_with_default_capacity() {
        let list: ArrayList<i32> = ArrayList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 10);
    }

    #[test]
    fn grows_by_half_with_minimum_increment() {
        let mut list = ArrayList::with_capacity(1);
        list.push('a');
        assert_eq!(list.capacity(), 1);
        list.push('b'); // 1 -> 2
        assert_eq!(list.capacity(), 2);
        list.push('c'); // 2 -> 3
        assert_eq!(list.capacity(), 3);
        list.push('d'); // 3 -> 4
        list.push('e'); // 4 -> 6
        assert_eq!(list.capacity(), 6);
        assert_eq!(list.to_vec(), ['a', 'b', 'c', 'd', 'e']);
    }

    #[test]
    fn trim_releases_spare_capacity() {
        let mut list = ArrayList::new();
        list.push(1);
        list.push(2);
        list.push(3);
        assert_eq!(list.capacity(), 10);
        list.trim_to_size();
        assert_eq!(list.capacity(), 3);
        assert_eq!(list.to_vec(), [1, 2, 3]);
    }

    #[test]
    fn clear_keeps_the_buffer() {
        let mut list = ArrayList::with_capacity(4);
        list.push(1);
        list.push(2);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), 4);
    }

    #[test_case(0 ; "at the front")]
    #[test_case(1 ; "in the middle")]
    #[test_case(3 ; "at the back")]
    fn insert_shifts_the_tail(index: usize) {
        let mut list = ArrayList::from_iter([1, 2, 3]);
        list.insert(index, 9).unwrap();
        let mut expected = vec![1, 2, 3];
        expected.insert(index, 9);
        assert_eq!(list.to_vec(), expected);
        assert_eq!(list.len(), 4);
    }

    #[test_case(4, 3 ; "insert just past the end")]
    #[test_case(9, 3 ; "insert far past the end")]
    fn insert_out_of_bounds(index: usize, len: usize) {
        let mut list = ArrayList::from_iter([1, 2, 3]);
        assert_eq!(list.insert(index, 9), Err(Error::out_of_bounds(index, len)));
        assert_eq!(list.to_vec(), [1, 2, 3], "failed insert must not mutate");
    }

    #[test]
    fn get_set_remove_round_trip() {
        let mut list = ArrayList::from_iter(["x", "y", "z"]);
        assert_eq!(list.get(1), Ok(&"y"));
        assert_eq!(list.set(1, "w"), Ok("y"));
        assert_eq!(list.remove_at(1), Ok("w"));
        assert_eq!(list.to_vec(), ["x", "z"]);

        assert_eq!(list.get(2), Err(Error::out_of_bounds(2, 2)));
        assert_eq!(list.set(2, "!"), Err(Error::out_of_bounds(2, 2)));
        assert_eq!(list.remove_at(2), Err(Error::out_of_bounds(2, 2)));
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let original = ArrayList::from_iter([1, 2, 3]);
        let mut copy = original.clone();
        copy.set(0, 9).unwrap();
        copy.push(4);
        assert_eq!(original.to_vec(), [1, 2, 3]);
        assert_eq!(copy.to_vec(), [9, 2, 3, 4]);
    }

    #[test]
    fn display_renders_brackets() {
        let mut list = ArrayList::new();
        assert_eq!(list.to_string(), "[]");
        list.push(1);
        assert_eq!(list.to_string(), "[1]");
        list.push(2);
        list.push(3);
        assert_eq!(list.to_string(), "[1 2 3]");
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    }
}
