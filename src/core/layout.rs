use crate::core::{Page, Slot};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};

pub const ROWS_PER_PAGE: usize = 5;
pub const COLUMNS_PER_PAGE: usize = 2;
pub const TICKETS_PER_PAGE: usize = ROWS_PER_PAGE * COLUMNS_PER_PAGE;

const MAX_GRID_DIMENSION: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Tickets stacked in one column.
    pub rows: usize,
    pub columns: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rows: ROWS_PER_PAGE,
            columns: COLUMNS_PER_PAGE,
        }
    }
}

impl LayoutConfig {
    pub fn capacity(&self) -> usize {
        self.rows * self.columns
    }

    pub fn page_count(&self, tickets: usize) -> usize {
        match self.capacity() {
            0 => 0,
            capacity => tickets.div_ceil(capacity),
        }
    }

    /// Slot indices in placement order: columns left to right, rows top to bottom.
    pub fn grid_order(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.columns).flat_map(move |column| (0..self.rows).map(move |row| column * self.rows + row))
    }
}

impl Validate for LayoutConfig {
    fn validate(&self) -> Result<()> {
        validate_range("layout.rows", self.rows, 1, MAX_GRID_DIMENSION)?;
        validate_range("layout.columns", self.columns, 1, MAX_GRID_DIMENSION)?;
        Ok(())
    }
}

/// Sorts the numbers and deals them onto pages round-robin.
///
/// The i-th smallest number goes to page `i % pages`, so consecutive numbers end up
/// on different sheets. Every page is padded with [`Slot::Empty`] to full capacity.
pub fn plan_pages(numbers: &[u32], layout: &LayoutConfig) -> Vec<Page> {
    let capacity = layout.capacity();
    let page_count = layout.page_count(numbers.len());
    if page_count == 0 {
        return Vec::new();
    }

    let mut sorted = numbers.to_vec();
    sorted.sort_unstable();

    let mut pages: Vec<Vec<Slot>> = (0..page_count)
        .map(|_| Vec::with_capacity(capacity))
        .collect();
    for (index, number) in sorted.into_iter().enumerate() {
        pages[index % page_count].push(Slot::Ticket(number));
    }

    pages
        .into_iter()
        .map(|mut slots| {
            slots.resize(capacity, Slot::Empty);
            Page { slots }
        })
        .collect()
}
