use crate::models::Region;

/// Largest region of a collection, or `None` when it is empty.
///
/// Running maximum with strict comparison: among equal sizes the earliest
/// region wins.
pub fn largest_region(regions: &[Region]) -> Option<&Region> {
    let mut iter = regions.iter();
    let mut best = iter.next()?;
    for region in iter {
        if region.len() > best.len() {
            best = region;
        }
    }
    Some(best)
}
