//! Bulk filling of lists from a value source.

use crate::error::ListError;
use crate::list::List;
use crate::value::Element;
use log::debug;

#[cfg(feature = "rand")]
use crate::value::Value;
#[cfg(feature = "rand")]
use rand::Rng;
#[cfg(feature = "rand")]
use std::ops::RangeInclusive;

/// The range random fills draw their integers from.
#[cfg(feature = "rand")]
pub const RANDOM_FILL_RANGE: RangeInclusive<i64> = 1..=1000;

impl<T: Element> List<T> {
    /// Append `count` values produced by `source`, returning how many were
    /// appended.
    ///
    /// Stops with [`ListError::CapacityExhausted`] when the list fills up;
    /// the values appended before that stay in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{List, ListError};
    ///
    /// let mut next = 0;
    /// let mut list = List::with_max_len(4);
    /// assert_eq!(list.fill_with(3, || { next += 1; next }), Ok(3));
    /// assert_eq!(
    ///     list.fill_with(3, || 0),
    ///     Err(ListError::CapacityExhausted { max: 4 })
    /// );
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 0]);
    /// ```
    pub fn fill_with<F>(&mut self, count: usize, mut source: F) -> Result<usize, ListError>
    where
        F: FnMut() -> T,
    {
        for filled in 0..count {
            if let Err(err) = self.append(source()) {
                debug!("fill stopped after {} of {} values", filled, count);
                return Err(err);
            }
        }
        Ok(count)
    }
}

#[cfg(feature = "rand")]
impl List<Value> {
    /// Append `count` random integers from [`RANDOM_FILL_RANGE`], drawn from
    /// the thread-local generator.
    pub fn fill(&mut self, count: usize) -> Result<usize, ListError> {
        self.fill_from_rng(count, &mut rand::rng())
    }

    /// Append `count` random integers from [`RANDOM_FILL_RANGE`], drawn from
    /// `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{List, Value};
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut list = List::<Value>::new();
    /// list.fill_from_rng(10, &mut StdRng::seed_from_u64(7)).unwrap();
    /// assert_eq!(list.len(), 10);
    /// assert!(list.iter().all(|v| matches!(v, Value::Int(1..=1000))));
    /// ```
    pub fn fill_from_rng<R: Rng>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<usize, ListError> {
        self.fill_with(count, || Value::Int(rng.random_range(RANDOM_FILL_RANGE)))
    }
}
