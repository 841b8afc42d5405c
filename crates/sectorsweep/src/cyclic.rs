//! Fixed-size sequence with modular (cyclic) indexing.
//!
//! Logical indices are `isize` and may run past either end: `i` and `i + N`
//! name the same slot. `indices_between` turns a logical range into the real
//! indices it visits, stopping before any slot would be visited twice.

use crate::error::CyclicError;

/// Thin wrapper over `Vec<T>` that reads and writes through `i mod N`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CyclicSeq<T> {
    items: Vec<T>,
}

impl<T> CyclicSeq<T> {
    #[inline]
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate once over the underlying storage, in storage order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Real index of logical index `i` (Euclidean modulus).
    #[inline]
    pub fn index(&self, i: isize) -> Result<usize, CyclicError> {
        let n = self.items.len();
        if n == 0 {
            return Err(CyclicError::Empty);
        }
        Ok(i.rem_euclid(n as isize) as usize)
    }

    #[inline]
    pub fn get(&self, i: isize) -> Result<&T, CyclicError> {
        let k = self.index(i)?;
        Ok(&self.items[k])
    }

    #[inline]
    pub fn get_mut(&mut self, i: isize) -> Result<&mut T, CyclicError> {
        let k = self.index(i)?;
        Ok(&mut self.items[k])
    }

    /// Real indices visited walking from `start` towards `stop` by `step`.
    ///
    /// Stops when the logical counter reaches `stop` or when the next real index
    /// equals the first one yielded, whichever comes first.
    pub fn indices_between(
        &self,
        start: isize,
        stop: isize,
        step: isize,
    ) -> Result<IndicesBetween, CyclicError> {
        if step == 0 {
            return Err(CyclicError::ZeroStep);
        }
        if self.items.is_empty() {
            return Err(CyclicError::Empty);
        }
        Ok(IndicesBetween {
            cursor: start,
            stop,
            step,
            len: self.items.len() as isize,
            first: None,
        })
    }

    /// Elements visited by `indices_between(start, stop, step)`.
    pub fn between(
        &self,
        start: isize,
        stop: isize,
        step: isize,
    ) -> Result<impl Iterator<Item = &T> + '_, CyclicError> {
        Ok(self
            .indices_between(start, stop, step)?
            .map(move |k| &self.items[k]))
    }

    /// First real index in the cyclic range `[start, stop)` holding `value`.
    pub fn position_between(&self, value: &T, start: isize, stop: isize) -> Option<usize>
    where
        T: PartialEq,
    {
        self.indices_between(start, stop, 1)
            .ok()?
            .find(|&k| self.items[k] == *value)
    }
}

impl<T> From<Vec<T>> for CyclicSeq<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for CyclicSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Iterator returned by [`CyclicSeq::indices_between`].
#[derive(Clone, Debug)]
pub struct IndicesBetween {
    cursor: isize,
    stop: isize,
    step: isize,
    len: isize,
    first: Option<usize>,
}

impl IndicesBetween {
    #[inline]
    fn before_stop(&self) -> bool {
        if self.step > 0 {
            self.cursor < self.stop
        } else {
            self.cursor > self.stop
        }
    }
}

impl Iterator for IndicesBetween {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if !self.before_stop() {
            return None;
        }
        let k = self.cursor.rem_euclid(self.len) as usize;
        match self.first {
            None => self.first = Some(k),
            Some(first) if first == k => {
                // cycle closed; park the cursor so later calls stay exhausted
                self.cursor = self.stop;
                return None;
            }
            Some(_) => {}
        }
        self.cursor += self.step;
        Some(k)
    }
}

impl std::iter::FusedIterator for IndicesBetween {}
