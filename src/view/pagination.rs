// src/view/pagination.rs

use crate::models::entry::Entry;

/// Rows per table page, everywhere.
pub const PAGE_SIZE: usize = 10;

/// Entries shown in the podium above the overall table.
pub const PODIUM_SIZE: usize = 3;

/// Which slicing rule applies to the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// Overall tab with no filter. `entries` is the page the server returned:
    /// page 1 drops the podium entries and starts at rank 4, later pages are
    /// shown as fetched. The server's page count is trusted when present.
    Podium { server_total_pages: Option<u32> },
    /// Any filter or non-overall tab. `entries` is the whole client-visible
    /// working set and is sliced evenly.
    Uniform,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice {
    pub rows: Vec<Entry>,
    pub starting_rank: u32,
    pub total_pages: u32,
}

/// Cuts one table page out of `entries`.
///
/// `page` is 1-based; 0 is read as 1. A page past the last one yields no
/// rows rather than an error.
pub fn paginate(entries: &[Entry], page: u32, page_size: usize, convention: Convention) -> PageSlice {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let mut total_pages = total_pages(entries.len(), page_size, convention);

    let rows = match convention {
        Convention::Podium { server_total_pages } => {
            let known_total = server_total_pages.filter(|&n| n > 0);
            if known_total.is_some_and(|total| page > total) {
                Vec::new()
            } else if page == 1 {
                entries.iter().skip(PODIUM_SIZE).cloned().collect()
            } else {
                // Without a server count the fetched page is all there is to
                // go on: show it and count at least up to it.
                if known_total.is_none() && !entries.is_empty() {
                    total_pages = total_pages.max(page);
                }
                entries.to_vec()
            }
        }
        Convention::Uniform if page > total_pages => Vec::new(),
        Convention::Uniform => {
            let start = (page as usize - 1).saturating_mul(page_size);
            entries.iter().skip(start).take(page_size).cloned().collect()
        }
    };

    PageSlice {
        rows,
        starting_rank: starting_rank(page, page_size, convention),
        total_pages,
    }
}

/// Display rank of the first row on `page`.
pub fn starting_rank(page: u32, page_size: usize, convention: Convention) -> u32 {
    let page = page.max(1);
    match convention {
        Convention::Podium { .. } if page == 1 => PODIUM_SIZE as u32 + 1,
        _ => (page - 1).saturating_mul(page_size as u32).saturating_add(1),
    }
}

/// Number of table pages, never less than 1.
///
/// Without a server total this counts only what the client holds: narrowing a
/// fetched page cannot discover entries that were never retrieved.
pub fn total_pages(len: usize, page_size: usize, convention: Convention) -> u32 {
    if let Convention::Podium {
        server_total_pages: Some(total),
    } = convention
    {
        if total > 0 {
            return total;
        }
    }
    let pages = len.div_ceil(page_size.max(1));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}
