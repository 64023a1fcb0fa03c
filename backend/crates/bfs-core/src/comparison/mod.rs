//! Criteria filters over the static catalog.
//!
//! Every filter keeps the input order of the items it accepts, and treats an
//! empty or absent criterion as "match everything".

pub mod drug_price_filter;
pub mod plan_filter;
pub mod provider_filter;

pub trait Filter<T> {
    fn matches(&self, item: &T) -> bool;
}

/// Items accepted by `filter`, in input order
pub fn apply_filter<'a, T, F>(items: &'a [T], filter: &F) -> Vec<&'a T>
where
    F: Filter<T> + ?Sized,
{
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Case-insensitive substring test; `None` or blank criteria always match
pub(crate) fn text_matches(criterion: Option<&str>, value: &str) -> bool {
    match criterion.map(str::trim) {
        None | Some("") => true,
        Some(needle) => value.to_lowercase().contains(&needle.to_lowercase()),
    }
}
