//! Active-heading selection from viewport intersection data.
//!
//! The browser side feeds `IntersectionObserver` entries and heading
//! positions in; these functions decide which heading the table of contents
//! highlights. The observer's own callback cadence is the only debounce.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

/// Shrinks the observed viewport to its top 30%.
pub const ROOT_MARGIN: &str = "0px 0px -70% 0px";
pub const THRESHOLDS: [f64; 3] = [0.1, 0.3, 0.6];

/// One observer entry, keyed by heading slug.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionSample {
    pub slug: String,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// A heading's top edge relative to the viewport, in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadingPosition {
    pub slug: String,
    pub top: f64,
}

/// Intersecting heading with the highest ratio. Ties keep the earlier one.
#[must_use]
pub fn most_visible(samples: &[IntersectionSample]) -> Option<&str> {
    let mut best: Option<&IntersectionSample> = None;
    for sample in samples.iter().filter(|sample| sample.is_intersecting) {
        if best.is_none_or(|current| sample.ratio > current.ratio) {
            best = Some(sample);
        }
    }
    best.map(|sample| sample.slug.as_str())
}

/// Last heading whose top lies in the upper half of the viewport.
#[must_use]
pub fn upper_half_fallback(positions: &[HeadingPosition], viewport_height: f64) -> Option<&str> {
    let limit = viewport_height / 2.0;
    positions
        .iter()
        .filter(|position| position.top >= 0.0 && position.top < limit)
        .next_back()
        .map(|position| position.slug.as_str())
}

/// The heading to highlight for one observer callback.
#[must_use]
pub fn pick_active<'a>(
    samples: &'a [IntersectionSample],
    positions: &'a [HeadingPosition],
    viewport_height: f64,
) -> Option<&'a str> {
    most_visible(samples).or_else(|| upper_half_fallback(positions, viewport_height))
}

/// `Some(new)` when `picked` differs from `current`.
#[must_use]
pub fn next_active(current: Option<&str>, picked: Option<&str>) -> Option<String> {
    match picked {
        Some(slug) if current != Some(slug) => Some(slug.to_owned()),
        _ => None,
    }
}
