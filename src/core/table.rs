//! History table engine: one generic filter + paginate + render-model
//! pipeline, instantiated for both history kinds.
//!
//! The stored sequences are chronological; the engine works on the
//! reversed view so the newest entry is row one of page one. Entry
//! numbers count down from the filtered total, giving every entry a
//! stable number regardless of the page it lands on.

use crate::models::{KitCalculation, PhoneGeneration};
use crate::utils::formatting;

/// A history kind the engine can project into a table.
pub trait TableRecord {
    /// Column headers, excluding the leading entry-number column.
    fn headers() -> Vec<&'static str>;
    /// Display cells, same order as `headers()`.
    fn cells(&self) -> Vec<String>;
    /// Raw field values scanned by the free-text search.
    fn search_fields(&self) -> Vec<&str>;
    /// Value of a named filter column. `None` marks an unrecognized
    /// key, which passes every row through unchanged.
    fn column(&self, key: &str) -> Option<&str>;
}

impl TableRecord for KitCalculation {
    fn headers() -> Vec<&'static str> {
        vec!["Kit Number", "Raw Result", "Padded Result", "Timestamp"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            formatting::group_thousands(&self.kit_number),
            formatting::group_thousands(&self.raw_result),
            self.padded_result.clone(),
            self.timestamp.clone(),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.kit_number,
            &self.raw_result,
            &self.padded_result,
            &self.timestamp,
        ]
    }

    fn column(&self, key: &str) -> Option<&str> {
        match key {
            "input" => Some(&self.kit_number),
            "raw" => Some(&self.raw_result),
            "result" => Some(&self.padded_result),
            _ => None,
        }
    }
}

impl TableRecord for PhoneGeneration {
    fn headers() -> Vec<&'static str> {
        vec!["Number", "Prefix", "Timestamp"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.number.clone(),
            self.prefix.clone(),
            self.timestamp.clone(),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.number, &self.prefix, &self.timestamp]
    }

    fn column(&self, key: &str) -> Option<&str> {
        match key {
            "number" => Some(&self.number),
            "prefix" => Some(&self.prefix),
            _ => None,
        }
    }
}

/// Filter and page position for one history view. Not persisted;
/// rebuilt per invocation and reset to page 1 by every filter change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub entries_per_page: usize,
    pub search_term: String,
    pub filter_column: String,
    pub filter_value: String,
}

impl PaginationState {
    pub fn new(entries_per_page: usize) -> Self {
        Self {
            current_page: 1,
            entries_per_page: entries_per_page.max(1),
            search_term: String::new(),
            filter_column: String::new(),
            filter_value: String::new(),
        }
    }

    pub fn set_search(&mut self, term: &str) {
        self.search_term = term.trim().to_string();
        self.current_page = 1;
    }

    pub fn set_filter(&mut self, column: &str, value: &str) {
        self.filter_column = column.to_string();
        self.filter_value = value.trim().to_string();
        self.current_page = 1;
    }

    pub fn set_entries_per_page(&mut self, entries: usize) {
        self.entries_per_page = entries.max(1);
        self.current_page = 1;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }
}

/// One visible row: its stable entry number plus display cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    pub entry: usize,
    pub cells: Vec<String>,
}

/// Condensed page-control descriptor: first and last page always
/// present, an ellipsis where the window around the current page does
/// not reach them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub current: usize,
    pub total_pages: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub items: Vec<PageItem>,
}

impl Pager {
    fn build(current: usize, total_pages: usize) -> Self {
        let mut items = Vec::new();

        if total_pages > 1 {
            let window_start = current.saturating_sub(2).max(1);
            let window_end = (current + 2).min(total_pages);

            if window_start > 1 {
                items.push(PageItem::Page(1));
                if window_start > 2 {
                    items.push(PageItem::Ellipsis);
                }
            }

            for page in window_start..=window_end {
                items.push(PageItem::Page(page));
            }

            if window_end < total_pages {
                if window_end < total_pages - 1 {
                    items.push(PageItem::Ellipsis);
                }
                items.push(PageItem::Page(total_pages));
            }
        }

        Pager {
            current,
            total_pages,
            prev_enabled: total_pages > 1 && current > 1,
            next_enabled: total_pages > 1 && current < total_pages,
            items,
        }
    }
}

/// Display-ready projection of one history view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub headers: Vec<&'static str>,
    pub rows: Vec<RenderRow>,
    /// 1-based bounds of the visible slice; both 0 when nothing
    /// matched.
    pub start_entry: usize,
    pub end_entry: usize,
    pub total: usize,
    pub pager: Pager,
}

impl RenderModel {
    /// The "Showing X to Y of Z entries" summary line.
    pub fn summary(&self) -> String {
        if self.total == 0 {
            "Showing 0 of 0 entries".to_string()
        } else {
            format!(
                "Showing {} to {} of {} entries",
                self.start_entry, self.end_entry, self.total
            )
        }
    }
}

/// Recompute the render model for a stored (chronological) history
/// slice. Resets `state.current_page` to 1 when it points past the
/// last page of the filtered set.
pub fn recompute<T: TableRecord>(records: &[T], state: &mut PaginationState) -> RenderModel {
    let search = state.search_term.to_lowercase();
    let filter_value = state.filter_value.to_lowercase();
    let filter_active = !state.filter_column.is_empty() && !filter_value.is_empty();

    let filtered: Vec<&T> = records
        .iter()
        .rev()
        .filter(|r| {
            search.is_empty()
                || r.search_fields()
                    .iter()
                    .any(|f| f.to_lowercase().contains(&search))
        })
        .filter(|r| {
            if !filter_active {
                return true;
            }
            match r.column(&state.filter_column) {
                Some(value) => value.to_lowercase().contains(&filter_value),
                None => true,
            }
        })
        .collect();

    let total = filtered.len();
    let total_pages = total.div_ceil(state.entries_per_page);

    if state.current_page > total_pages {
        state.current_page = 1;
    }

    let start = (state.current_page - 1) * state.entries_per_page;
    let end = (start + state.entries_per_page).min(total);

    let rows = filtered[start..end]
        .iter()
        .enumerate()
        .map(|(i, record)| RenderRow {
            entry: total - (start + i),
            cells: record.cells(),
        })
        .collect();

    RenderModel {
        headers: T::headers(),
        rows,
        start_entry: if total == 0 { 0 } else { start + 1 },
        end_entry: end,
        total,
        pager: Pager::build(state.current_page, total_pages),
    }
}
