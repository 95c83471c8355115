// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # gradanim
//!
//! A command line tool that turns a handful of CSS `linear-gradient(...)` backgrounds,
//! each pinned to a position on a timeline, into a smooth `@keyframes` animation.
//!
//! ```text
//! gradanim --name glow \
//!   --gradients \
//!     0%   "linear-gradient(30deg, #3d3393 0%, #35eb93 100%)" \
//!     100% "linear-gradient(20deg, #6e45e2 0%, #88d3ce 100%)"
//! ```
//!
//! This writes `glow.css` to the current directory. Use `--stdout` to print it instead.
//! All the heavy lifting is done by [`gradanim_core`].

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod gradanim;
