use super::types::Item;

/// Applies the listing policy to a scanned batch of items.
///
/// When `filter` is non-empty, keeps only items whose title contains it as a
/// case-insensitive substring. The surviving items are sorted ascending by
/// lowercased title; the sort is stable, so ties keep their scan order.
///
/// The scan limit is applied by the caller before this runs, so a filtered
/// listing can return fewer matches than exist beyond the scanned window.
pub fn filter_and_sort(mut items: Vec<Item>, filter: &str) -> Vec<Item> {
    if !filter.is_empty() {
        let needle = filter.to_lowercase();
        items.retain(|item| item.title.to_lowercase().contains(&needle));
    }

    items.sort_by_key(|item| item.title.to_lowercase());
    items
}
