// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Defaults used when the caller doesn't say otherwise.

/// Length of the animation in seconds. Together with [`DEFAULT_FPS`] this decides the
/// keyframe count, when one isn't given explicitly.
pub const DEFAULT_DURATION_SECS: f64 = 1.0;

pub const DEFAULT_FPS: u32 = 24;

/// A resolution of 8 gives 9 stops per gradient: 0%, 12.5%, 25%, ... 100%.
pub const DEFAULT_GRADIENT_RESOLUTION: u32 = 8;

/// Inline capacity for the stops of a gradient before [`smallvec::SmallVec`] spills to
/// the heap. Default resolution needs 9.
pub const STOP_VEC_INLINE_CAPACITY: usize = 16;
