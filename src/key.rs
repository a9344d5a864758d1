//! Floating-point keys.
//!
//! `f64` is only `PartialOrd`, so it can't be stored in the trees directly. [`Real`] wraps it with
//! the IEEE 754 total order, which makes every value (NaNs included) comparable. Integer keys need
//! no wrapper.

use std::cmp::Ordering;
use std::fmt;

/// An `f64` ordered by [`f64::total_cmp`].
///
/// Under this order `-0.0 < 0.0`, and positive NaNs sort above positive infinity. Two values are
/// equal exactly when their bits are.
///
/// # Examples
///
/// ```
/// use bintree::avl::Tree;
/// use bintree::{Order, Real};
///
/// let tree: Tree<Real> = [2.5, -1.0, 0.25].into_iter().map(Real::from).collect();
///
/// let keys: Vec<f64> = tree.traverse(Order::InOrder).into_iter().map(f64::from).collect();
/// assert_eq!(keys, vec![-1.0, 0.25, 2.5]);
/// ```
#[derive(Copy, Clone, Default)]
pub struct Real(pub f64);

impl Real {
    /// The wrapped value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Real {}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Real {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Real {
    fn from(value: f64) -> Self {
        Real(value)
    }
}

impl From<Real> for f64 {
    fn from(value: Real) -> Self {
        value.0
    }
}

impl fmt::Debug for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
