//! Bidirectional cursor over an ordered sequence.
//!
//! A cursor starts *before* the first element: the first call to
//! [`Iterator::next`] yields element `0`. Walking past either end parks the
//! index one step outside the sequence (`eol()` / `bol()`) and yields `None`.
//!
//! Backtracking uses an explicit stack of saved indices:
//!
//! ```
//! use bulikit_core::Cursor;
//!
//! let items = [1, 2, 3];
//! let mut cursor = Cursor::new(&items);
//! cursor.next();
//! cursor.push_index();
//! cursor.next();
//! cursor.next();
//! assert_eq!(cursor.value(), Some(&3));
//! cursor.pop_index();
//! assert_eq!(cursor.value(), Some(&1));
//! ```

#[derive(Debug, Clone)]
pub struct Cursor<'a, T> {
    items: &'a [T],
    index: isize,
    saved: Vec<isize>,
}

impl<'a, T> Cursor<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            index: -1,
            saved: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Current index; `-1` before the first element, `len()` past the last.
    pub fn index(&self) -> isize {
        self.index
    }

    /// Element under the cursor.
    pub fn value(&self) -> Option<&'a T> {
        self.at(self.index)
    }

    /// Element at an explicit index, ignoring the cursor position.
    pub fn value_at(&self, index: usize) -> Option<&'a T> {
        self.items.get(index)
    }

    /// Element after the cursor, without moving.
    pub fn peek_next(&self) -> Option<&'a T> {
        self.at(self.index + 1)
    }

    /// Element before the cursor, without moving.
    pub fn peek_prev(&self) -> Option<&'a T> {
        self.at(self.index - 1)
    }

    /// Step back one element. Stops at `-1`.
    pub fn prev(&mut self) -> Option<&'a T> {
        if self.index >= 0 {
            self.index -= 1;
        }
        self.value()
    }

    pub fn first(&mut self) -> Option<&'a T> {
        self.index = 0;
        self.value()
    }

    pub fn last(&mut self) -> Option<&'a T> {
        self.index = self.len() as isize - 1;
        self.value()
    }

    /// Move to `index`, clamped to `[0, len - 1]`.
    pub fn set_index(&mut self, index: isize) {
        self.index = if self.is_empty() {
            -1
        } else {
            index.clamp(0, self.len() as isize - 1)
        };
    }

    /// Move to an index previously returned by [`Cursor::index`], without
    /// clamping. Out-of-range values are parked at the nearest end.
    pub fn restore(&mut self, index: isize) {
        self.index = index.clamp(-1, self.len() as isize);
    }

    /// End of list: the cursor moved past the last element.
    pub fn eol(&self) -> bool {
        self.index >= self.len() as isize
    }

    /// Beginning of list: the cursor sits before the first element.
    pub fn bol(&self) -> bool {
        self.index < 0
    }

    /// No element left after the current one.
    pub fn is_exhausted(&self) -> bool {
        self.index + 1 >= self.len() as isize
    }

    pub fn reset(&mut self) {
        self.index = -1;
        self.saved.clear();
    }

    pub fn push_index(&mut self) {
        self.saved.push(self.index);
    }

    /// Restore the most recently saved index. Returns `false` if none was saved.
    pub fn pop_index(&mut self) -> bool {
        match self.saved.pop() {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    /// Drop the most recently saved index, keeping the current position.
    pub fn discard_index(&mut self) {
        self.saved.pop();
    }

    pub fn saved_depth(&self) -> usize {
        self.saved.len()
    }

    fn at(&self, index: isize) -> Option<&'a T> {
        usize::try_from(index).ok().and_then(|i| self.items.get(i))
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    /// Step forward one element. Stops at `len()`.
    fn next(&mut self) -> Option<&'a T> {
        if self.index < self.len() as isize {
            self.index += 1;
        }
        self.value()
    }
}
