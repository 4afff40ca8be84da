//! Client-side paging over an already filtered list.

/// The slice of a list shown on one page.
///
/// Pages are 1-based. An empty list still has a single, empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub pages: usize,
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    /// Window over `len` items. `page` is clamped into range, so a page
    /// that vanished after a delete or a narrower search shows the last one.
    pub fn new(len: usize, page_size: usize, page: usize) -> Self {
        let size = page_size.max(1);
        let pages = ((len + size - 1) / size).max(1);
        let page = page.clamp(1, pages);
        let start = ((page - 1) * size).min(len);
        PageWindow {
            page,
            pages,
            start,
            end: (start + size).min(len),
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.min(items.len());
        &items[self.start.min(end)..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_of_eight() {
        let items: Vec<u32> = (1..=19).collect();

        let first = PageWindow::new(items.len(), 8, 1);
        assert_eq!(first.pages, 3);
        assert_eq!(first.slice(&items), &items[0..8]);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = PageWindow::new(items.len(), 8, 3);
        assert_eq!(last.slice(&items), &[17, 18, 19]);
        assert_eq!(last.len(), 3);
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let window = PageWindow::new(10, 8, 9);
        assert_eq!((window.page, window.start, window.end), (2, 8, 10));
        assert_eq!(PageWindow::new(10, 8, 0).page, 1);
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let window = PageWindow::new(0, 8, 4);
        assert_eq!((window.page, window.pages), (1, 1));
        assert!(window.is_empty());
        assert!(window.slice::<u32>(&[]).is_empty());
        assert!(!window.has_next());
    }
}
