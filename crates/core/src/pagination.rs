//! Paged results: one page of items plus the total count of the unpaginated
//! source.
//!
//! The library does not implement ordering, counting or slicing itself. It
//! orchestrates two independent evaluations (count, window) against whatever
//! implements [`PageSource`], so callers can render "showing N of M" without
//! re-querying.

use core::any::Any;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Paging specification: 1-based page number and page size.
///
/// Page size is expected to be positive by convention; the source interprets
/// the resulting offset/limit window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    /// 1-based page number.
    pub page: u32,
    /// Number of items per page.
    pub size: u32,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self { page: 1, size: 50 }
    }
}

impl PageSpec {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Offset of the first item on this page. Page 0 is treated as page 1.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.size)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.size)
    }
}

/// An orderable, countable, sliceable data source.
///
/// External collaborator contract, typically backed by a deferred query
/// abstraction with an ordering already applied. `count` and `window` are
/// independently evaluable; any blocking or failure behavior during either
/// evaluation belongs to the implementor.
pub trait PageSource {
    type Item;

    /// Total item count of the full, unsliced source.
    fn count(&self) -> u64;

    /// Materializes the `[offset, offset + limit)` window of the source.
    /// Empty when the offset is past the end.
    fn window(&self, offset: u64, limit: u64) -> Vec<Self::Item>;
}

/// In-memory source over an already-ordered slice.
impl<T: Clone> PageSource for [T] {
    type Item = T;

    fn count(&self) -> u64 {
        self.len() as u64
    }

    fn window(&self, offset: u64, limit: u64) -> Vec<T> {
        let start = usize::try_from(offset).unwrap_or(usize::MAX).min(self.len());
        let end = start
            .saturating_add(usize::try_from(limit).unwrap_or(usize::MAX))
            .min(self.len());
        self[start..end].to_vec()
    }
}

/// One materialized page of items plus the total count of the logical,
/// unpaginated source.
///
/// `total` always describes the full source the page was drawn from, never
/// the page itself (which may be shorter, e.g. the last page). Read-only
/// after construction; iteration yields the stored items in order and is
/// restartable because the page owns its buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    items: Vec<T>,
    total: u64,
}

impl<T> Page<T> {
    /// Builds a page by evaluating `source` twice: once windowed according to
    /// `spec` (materialized eagerly) and once counted in full.
    ///
    /// A page beyond the end of the source yields no items while `total`
    /// still reports the true full count.
    pub fn from_source<S>(source: &S, spec: &PageSpec) -> Self
    where
        S: PageSource<Item = T> + ?Sized,
    {
        let items = source.window(spec.offset(), spec.limit());
        let total = source.count();
        debug!(
            offset = spec.offset(),
            limit = spec.limit(),
            returned = items.len(),
            total,
            "materialized page from source"
        );
        Self { items, total }
    }

    /// Builds a page from an already-produced sequence and a caller-supplied
    /// total. The sequence is consumed exactly once, here; every later view
    /// (typed, borrowed, type-erased) reads the same owned buffer. The total
    /// is trusted as given - no validation against the item count.
    pub fn from_parts(items: impl IntoIterator<Item = T>, total: u64) -> Self {
        Self {
            items: items.into_iter().collect(),
            total,
        }
    }

    /// Empty page over an empty source.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    /// The materialized page, in source order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Total item count of the unpaginated source.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Whether items remain past the page described by `spec`.
    pub fn has_more(&self, spec: &PageSpec) -> bool {
        spec.offset().saturating_add(self.items.len() as u64) < self.total
    }

    /// Projects the page's items (e.g. domain type to DTO), keeping the total.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Untyped view of a paged result, for consumers that only need the count
/// metadata and erased iteration.
pub trait Paged {
    /// Total item count of the unpaginated source.
    fn total(&self) -> u64;

    /// Number of items on this page.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the page's items type-erased, in order. Backed by the same
    /// buffer as the typed view; never re-evaluates the source.
    fn iter_erased(&self) -> Box<dyn Iterator<Item = &dyn Any> + '_>;
}

impl<T: Any> Paged for Page<T> {
    fn total(&self) -> u64 {
        self.total
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn iter_erased(&self) -> Box<dyn Iterator<Item = &dyn Any> + '_> {
        Box::new(self.items.iter().map(|item| item as &dyn Any))
    }
}
