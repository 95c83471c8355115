// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Finds the two known data points on either side of a query position. These are the
//! endpoints used for linear interpolation, both for:
//! 1. The stops of a gradient that surround a position on the equalized stop grid.
//! 2. The user supplied gradients that surround a keyframe on the animation timeline.

/// Anything that sits at a position on a `0.0..=100.0` axis.
pub trait Positioned {
    fn position(&self) -> f64;
}

/// The result of [`nearest_bracket`]. When the query is outside of the range covered by
/// the items, or lands exactly on the last position, `below` and `above` have the same
/// position.
#[derive(Debug)]
pub struct Bracket<'a, T> {
    pub below: &'a T,
    pub above: &'a T,
}

impl<T> Clone for Bracket<'_, T> {
    fn clone(&self) -> Self { *self }
}

impl<T> Copy for Bracket<'_, T> {}

impl<T: Positioned> Bracket<'_, T> {
    /// Linearly remaps `query` from `[below, above]` into `[0, 1]`.
    ///
    /// When both ends of the bracket are at the same position this is `0.0`, instead of a
    /// division by zero.
    #[must_use]
    pub fn normalized_offset(&self, query: f64) -> f64 {
        if self.has_zero_width() {
            return 0.0;
        }
        let lo = self.below.position();
        let hi = self.above.position();
        (query - lo) / (hi - lo)
    }

    /// Both ends are at the same position, so there is nothing to interpolate between.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn has_zero_width(&self) -> bool { self.below.position() == self.above.position() }
}

/// `sorted_items` must be sorted in ascending order of [`Positioned::position`]. Returns
/// [None] only if `sorted_items` is empty.
///
/// - `below` is the item w/ the largest position `<= query`. If there is no such item
///   (the query is before every item) it is the first item.
/// - `above` is the item w/ the smallest position `> query`. If there is no such item
///   (the query is at or after every item) it is the last item.
///
/// When several items share a position, both `below` and `above` resolve to the first
/// of them (smallest index).
pub fn nearest_bracket<T: Positioned>(
    sorted_items: &[T],
    query: f64,
) -> Option<Bracket<'_, T>> {
    let last_index = sorted_items.len().checked_sub(1)?;

    // Index of the first item that is strictly after the query.
    let first_above = sorted_items.partition_point(|it| it.position() <= query);

    let below_index = match first_above.checked_sub(1) {
        // Start of the run of items that share the position of the last item at or
        // before the query.
        Some(last_at_or_below) => {
            let position = sorted_items[last_at_or_below].position();
            sorted_items.partition_point(|it| it.position() < position)
        }
        None => 0,
    };

    let below = &sorted_items[below_index];
    let above = &sorted_items[first_above.min(last_index)];

    Some(Bracket { below, above })
}
