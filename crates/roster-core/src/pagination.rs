//! Fixed-size paging over a fetched result set.
//!
//! The whole result set is fetched once; [`Paginator`] slices it into pages of
//! [`PageSize`] records and drives the "next page" prompt between them.

use crate::{
    config::PageSize,
    console::Console,
    display::EmployeePage,
    error::Result,
    models::Employee,
};

/// Prompt shown between pages.
pub const CONTINUE_PROMPT: &str = "Press Enter to view next page or type 'exit' to quit: ";

/// Number of pages needed for `total` records.
pub fn page_count(total: usize, page_size: PageSize) -> usize {
    total.div_ceil(page_size.get())
}

/// Pages over a borrowed result set.
pub struct Paginator<'a> {
    records: &'a [Employee],
    page_size: PageSize,
}

impl<'a> Paginator<'a> {
    pub fn new(records: &'a [Employee], page_size: PageSize) -> Self {
        Self { records, page_size }
    }

    pub fn page_count(&self) -> usize {
        page_count(self.records.len(), self.page_size)
    }

    pub fn pages(&self) -> impl Iterator<Item = EmployeePage<'a>> + '_ {
        let total = self.page_count();
        self.records
            .chunks(self.page_size.get())
            .enumerate()
            .map(move |(index, records)| EmployeePage {
                number: index + 1,
                total,
                records,
            })
    }

    /// Shows pages in order, asking before each next page.
    ///
    /// Answering `exit` (any case, surrounding whitespace ignored) stops
    /// before the next page. Returns the number of pages shown.
    pub fn present<C: Console + ?Sized>(&self, console: &mut C) -> Result<usize> {
        let mut shown = 0;
        for page in self.pages() {
            console.write(&page.to_string())?;
            shown += 1;

            if page.has_next() {
                let answer = console.read_line(CONTINUE_PROMPT)?;
                if answer.trim().eq_ignore_ascii_case("exit") {
                    break;
                }
            }
        }
        Ok(shown)
    }
}
