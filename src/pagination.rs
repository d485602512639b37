use anyhow::{bail, Result};

pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Zero-based page cursor over a list of `count` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    rows_per_page: usize,
}

impl Pagination {
    pub fn new(rows_per_page: usize) -> Result<Self> {
        if rows_per_page == 0 {
            bail!("Rows per page must be at least 1");
        }
        Ok(Pagination {
            page: 0,
            rows_per_page,
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changing the page size always goes back to the first page.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) -> Result<()> {
        if rows_per_page == 0 {
            bail!("Rows per page must be at least 1");
        }
        self.rows_per_page = rows_per_page;
        self.page = 0;
        Ok(())
    }

    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.rows_per_page)
    }

    /// Pulls the cursor back onto the last page when the list shrank.
    pub fn clamp(&mut self, count: usize) {
        let last = self.total_pages(count).saturating_sub(1);
        if self.page > last {
            self.page = last;
        }
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.page.saturating_mul(self.rows_per_page);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.rows_per_page).min(items.len());
        &items[start..end]
    }

    /// 1-based bounds of the current page, `(0, 0)` when the page is empty.
    pub fn bounds(&self, count: usize) -> (usize, usize) {
        let start = self.page.saturating_mul(self.rows_per_page);
        if start >= count {
            return (0, 0);
        }
        let end = start.saturating_add(self.rows_per_page).min(count);
        (start + 1, end)
    }

    pub fn label(&self, count: usize, of: &str) -> String {
        let (from, to) = self.bounds(count);
        format!("{}-{} {} {}", from, to, of, count)
    }
}
