//! Client-side query pipeline (pure).
//!
//! Turns the full in-memory character list plus a [`QueryState`] into the
//! visible slice for the current page. The stages run in a fixed order:
//!
//! 1. name filter (case-insensitive substring)
//! 2. status filter
//! 3. gender filter
//! 4. species filter
//! 5. stable sort by the selected key
//! 6. paginate
//!
//! An empty filter set is a no-op. The pipeline never clamps `page_index`;
//! [`QueryState`] resets it on every narrowing change and the state layer
//! clamps after recomputation.

pub mod collate;

use crate::model::{Character, Gender, Status};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

// ===== SortKey =====

/// Field the result list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Character name.
    #[default]
    Name,
    /// Life status.
    Status,
    /// Gender.
    Gender,
}

impl SortKey {
    /// All keys in cycle order.
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Status, SortKey::Gender];

    /// Typed accessor for the field this key sorts on.
    pub fn accessor(self) -> fn(&Character) -> &str {
        match self {
            SortKey::Name => name_field,
            SortKey::Status => status_field,
            SortKey::Gender => gender_field,
        }
    }

    /// Next key in cycle order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            SortKey::Name => SortKey::Status,
            SortKey::Status => SortKey::Gender,
            SortKey::Gender => SortKey::Name,
        }
    }

    /// Column label shown in the controls bar.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Status => "Status",
            SortKey::Gender => "Gender",
        }
    }
}

fn name_field(c: &Character) -> &str {
    c.name()
}

fn status_field(c: &Character) -> &str {
    c.status().as_str()
}

fn gender_field(c: &Character) -> &str {
    c.gender().as_str()
}

// ===== SortOrder =====

/// Direction of the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// A to Z.
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Z to A.
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Short indicator shown next to the sort key.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "A-Z",
            SortOrder::Descending => "Z-A",
        }
    }
}

// ===== PageSize =====

/// Rejected page size value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid page size {0}: expected 10, 20 or 50")]
pub struct InvalidPageSize(pub u32);

/// Number of rows per page. Only 10, 20 and 50 are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    /// 10 rows.
    Ten,
    /// 20 rows.
    #[default]
    Twenty,
    /// 50 rows.
    Fifty,
}

impl PageSize {
    /// All sizes in cycle order.
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::Twenty, PageSize::Fifty];

    /// Row count.
    pub fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
        }
    }

    /// Next size in cycle order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            PageSize::Ten => PageSize::Twenty,
            PageSize::Twenty => PageSize::Fifty,
            PageSize::Fifty => PageSize::Ten,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(PageSize::Ten),
            20 => Ok(PageSize::Twenty),
            50 => Ok(PageSize::Fifty),
            other => Err(InvalidPageSize(other)),
        }
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.get() as u32
    }
}

// ===== QueryState =====

/// Every user-controllable parameter governing which characters are visible
/// and in what order.
///
/// Mutators that can shrink the result set (search, filters, page size) and
/// sort changes reset `page_index` to 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    /// Case-insensitive substring matched against the name.
    pub search_text: String,
    /// Selected statuses; empty means no status filtering.
    pub status_filter: BTreeSet<Status>,
    /// Selected genders; empty means no gender filtering.
    pub gender_filter: BTreeSet<Gender>,
    /// Selected species; empty means no species filtering.
    pub species_filter: BTreeSet<String>,
    /// Field to sort by.
    pub sort_key: SortKey,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// Current page, 1-based.
    pub page_index: usize,
    /// Rows per page.
    pub page_size: PageSize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            status_filter: BTreeSet::new(),
            gender_filter: BTreeSet::new(),
            species_filter: BTreeSet::new(),
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            page_index: 1,
            page_size: PageSize::default(),
        }
    }
}

impl QueryState {
    /// Replace the search text.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page_index = 1;
    }

    /// Add or remove a status from the filter set.
    pub fn toggle_status(&mut self, status: Status) {
        toggle(&mut self.status_filter, status);
        self.page_index = 1;
    }

    /// Add or remove a gender from the filter set.
    pub fn toggle_gender(&mut self, gender: Gender) {
        toggle(&mut self.gender_filter, gender);
        self.page_index = 1;
    }

    /// Add or remove a species from the filter set.
    pub fn toggle_species(&mut self, species: &str) {
        if !self.species_filter.remove(species) {
            self.species_filter.insert(species.to_string());
        }
        self.page_index = 1;
    }

    /// Drop the search text and every filter; sort and page size are kept.
    pub fn clear_filters(&mut self) {
        self.search_text.clear();
        self.status_filter.clear();
        self.gender_filter.clear();
        self.species_filter.clear();
        self.page_index = 1;
    }

    /// Change the sort key.
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
        self.page_index = 1;
    }

    /// Flip the sort direction.
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
        self.page_index = 1;
    }

    /// Change the page size.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.page_index = 1;
    }

    /// Whether any search text or filter is active.
    pub fn has_filters(&self) -> bool {
        !self.search_text.is_empty()
            || !self.status_filter.is_empty()
            || !self.gender_filter.is_empty()
            || !self.species_filter.is_empty()
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if set.contains(&value) {
        set.remove(&value);
    } else {
        set.insert(value);
    }
}

// ===== Pipeline =====

/// Output of [`run_query`].
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a> {
    /// Records on the requested page, in sorted order.
    pub visible: Vec<&'a Character>,
    /// Records that survived filtering, across all pages.
    pub matched: usize,
    /// `ceil(matched / page_size)`, 0 when nothing matched.
    pub total_pages: usize,
}

impl QueryResult<'_> {
    /// Whether the filtered set is empty.
    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }
}

/// Run the filter → sort → paginate pipeline.
///
/// Total over its input: never fails, never panics. A `page_index` past the
/// last page yields an empty slice; 0 is treated as 1.
pub fn run_query<'a>(records: &'a [Character], state: &QueryState) -> QueryResult<'a> {
    let mut filtered = filter_records(records, state);
    sort_records(&mut filtered, state.sort_key, state.sort_order);

    let matched = filtered.len();
    let visible = paginate(filtered, state.page_index, state.page_size.get());

    QueryResult {
        visible,
        matched,
        total_pages: total_pages(matched, state.page_size),
    }
}

/// Cut page `page_index` (1-based, 0 treated as 1) of `page_len` rows out of
/// an already sorted list. Pages past the end are empty.
pub fn paginate<'a>(
    sorted: Vec<&'a Character>,
    page_index: usize,
    page_len: usize,
) -> Vec<&'a Character> {
    let start = page_index.max(1).saturating_sub(1).saturating_mul(page_len);
    sorted.into_iter().skip(start).take(page_len).collect()
}

/// Apply the name, status, gender and species filters in that order.
pub fn filter_records<'a>(records: &'a [Character], state: &QueryState) -> Vec<&'a Character> {
    let needle = state.search_text.to_lowercase();

    records
        .iter()
        .filter(|c| c.name().to_lowercase().contains(&needle))
        .filter(|c| state.status_filter.is_empty() || state.status_filter.contains(&c.status()))
        .filter(|c| state.gender_filter.is_empty() || state.gender_filter.contains(&c.gender()))
        .filter(|c| {
            state.species_filter.is_empty() || state.species_filter.contains(c.species())
        })
        .collect()
}

/// Stable sort by the lower-cased value of `key`.
///
/// Descending reverses the comparison rather than the output, so records
/// with equal keys keep their relative order in both directions.
pub fn sort_records(records: &mut Vec<&Character>, key: SortKey, order: SortOrder) {
    let field = key.accessor();
    let mut keyed: Vec<(String, &Character)> = records
        .drain(..)
        .map(|c| (field(c).to_lowercase(), c))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match order {
        SortOrder::Ascending => collate::compare(a, b),
        SortOrder::Descending => collate::compare(b, a),
    });

    records.extend(keyed.into_iter().map(|(_, c)| c));
}

/// Number of pages needed for `count` records.
pub fn total_pages(count: usize, size: PageSize) -> usize {
    count.div_ceil(size.get())
}

/// Clamp a page index into `[1, max(1, total_pages)]`.
pub fn clamp_page(page_index: usize, total_pages: usize) -> usize {
    page_index.clamp(1, total_pages.max(1))
}

// ===== Filter options =====

/// Values offered in the filter panel.
///
/// Always derived from the full record list so that narrowing a filter
/// never hides the option needed to widen it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// Every status variant.
    pub statuses: Vec<Status>,
    /// Every gender variant.
    pub genders: Vec<Gender>,
    /// Distinct species in first-seen order.
    pub species: Vec<String>,
}

impl FilterOptions {
    /// Collect options from the full record list.
    pub fn from_records(records: &[Character]) -> Self {
        let mut seen = std::collections::HashSet::new();
        let species = records
            .iter()
            .map(Character::species)
            .filter(|s| seen.insert(*s))
            .map(str::to_string)
            .collect();

        Self {
            statuses: Status::ALL.to_vec(),
            genders: Gender::ALL.to_vec(),
            species,
        }
    }

    /// Total number of options across all groups.
    pub fn len(&self) -> usize {
        self.statuses.len() + self.genders.len() + self.species.len()
    }

    /// Whether there are no options at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Option at a flat index (status group, then gender, then species).
    pub fn get(&self, index: usize) -> Option<FilterOption<'_>> {
        let genders_start = self.statuses.len();
        let species_start = genders_start + self.genders.len();

        if index < genders_start {
            self.statuses.get(index).copied().map(FilterOption::Status)
        } else if index < species_start {
            self.genders
                .get(index - genders_start)
                .copied()
                .map(FilterOption::Gender)
        } else {
            self.species
                .get(index - species_start)
                .map(|s| FilterOption::Species(s.as_str()))
        }
    }
}

/// One entry of the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOption<'a> {
    /// A status checkbox.
    Status(Status),
    /// A gender checkbox.
    Gender(Gender),
    /// A species checkbox.
    Species(&'a str),
}

impl FilterOption<'_> {
    /// Whether this option is currently selected in `state`.
    pub fn is_selected(&self, state: &QueryState) -> bool {
        match self {
            FilterOption::Status(s) => state.status_filter.contains(s),
            FilterOption::Gender(g) => state.gender_filter.contains(g),
            FilterOption::Species(s) => state.species_filter.contains(*s),
        }
    }

    /// Flip this option in `state`.
    pub fn toggle_in(&self, state: &mut QueryState) {
        match self {
            FilterOption::Status(s) => state.toggle_status(*s),
            FilterOption::Gender(g) => state.toggle_gender(*g),
            FilterOption::Species(s) => state.toggle_species(s),
        }
    }

    /// Checkbox label.
    pub fn label(&self) -> &str {
        match self {
            FilterOption::Status(s) => s.as_str(),
            FilterOption::Gender(g) => g.as_str(),
            FilterOption::Species(s) => s,
        }
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
