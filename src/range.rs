use crate::error::Result;

/// A forward-only sequence that knows where it is and roughly how long it is.
pub trait RangeIterator: Iterator {
    /// Elements already returned.
    fn consumed(&self) -> u64;
    /// Total number of elements, consumed or not. Row sequences treat this as an estimate.
    fn size(&self) -> u64;
    /// Advances past `n` elements, failing with `NoSuchElement` if fewer remain.
    fn skip_ahead(&mut self, n: u64) -> Result<()>;
    fn has_next(&mut self) -> bool;
}
