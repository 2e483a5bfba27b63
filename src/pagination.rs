//! Slicing an already-computed result sequence into display pages.

/// Pages over a borrowed slice of results.
///
/// Pages are contiguous chunks of `page_size` items; the last page may be
/// shorter. A `page_size` of zero yields no pages.
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    pages: Vec<&'a [T]>,
}

impl<'a, T> Paginator<'a, T> {
    /// Split `items` into pages of at most `page_size` entries.
    pub fn new(items: &'a [T], page_size: usize) -> Self {
        let pages = if page_size == 0 {
            Vec::new()
        } else {
            items.chunks(page_size).collect()
        };

        Paginator { pages }
    }

    /// The pages, in order.
    pub fn pages(&self) -> &[&'a [T]] {
        &self.pages
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check whether there are no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl<'a, 'p, T> IntoIterator for &'p Paginator<'a, T> {
    type Item = &'a [T];
    type IntoIter = std::vec::IntoIter<&'a [T]>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.clone().into_iter()
    }
}

/// Convenience wrapper over [`Paginator::new`].
pub fn paginate<T>(items: &[T], page_size: usize) -> Paginator<'_, T> {
    Paginator::new(items, page_size)
}
