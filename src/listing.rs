//! Color list: the dataset grouped by grade and ordered by PCCS hue.

use std::collections::BTreeMap;

use crate::dataset::ty::{ColorRecord, Grade};

/// Key of achromatic colors (white, greys, black): after every hue.
pub const ACHROMATIC_KEY: u32 = 100;

/// Key of notations without a hue number: last.
pub const UNKNOWN_KEY: u32 = 200;

/// Return the PCCS hue number of a notation such as `v2`, `lt10+` or
/// `dkg18`, to sort colors around the hue circle.
pub fn pccs_hue_key(pccs: &str) -> u32 {
    if pccs.starts_with('W') || pccs.starts_with("Gy-") || pccs == "Bk" {
        return ACHROMATIC_KEY
    }
    let digits: String = pccs.chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() { return UNKNOWN_KEY }
    // Overlong hue numbers saturate instead of wrapping.
    digits.parse().unwrap_or(u32::MAX)
}

/// Group `records` by grade, grades in decreasing order (3 first), and
/// sort each group by hue then id.
pub fn group_for_listing(records: &[ColorRecord]) -> Vec<(Grade, Vec<ColorRecord>)> {
    let mut groups: BTreeMap<Grade, Vec<ColorRecord>> = BTreeMap::new();
    for r in records {
        groups.entry(r.grade).or_default().push(r.clone());
    }
    groups.into_iter().rev()
        .map(|(g, mut colors)| {
            colors.sort_by_key(|c| (pccs_hue_key(&c.pccs_notation), c.id));
            (g, colors) })
        .collect()
}
