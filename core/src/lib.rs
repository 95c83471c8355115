// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # gradanim_core
//!
//! Generates CSS `@keyframes` animations that smoothly move between a number of
//! `linear-gradient(...)` backgrounds.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//!
//! - [Introduction](#introduction)
//! - [How it works](#how-it-works)
//! - [Logging](#logging)
//!
//! <!-- /TOC -->
//!
//! # Introduction
//! <a id="markdown-introduction" name="introduction"></a>
//!
//! You give it a few gradients, each pinned to a position on the animation's timeline,
//! and it returns the text of a `@keyframes` block that you can paste into a stylesheet.
//!
//! ```
//! use gradanim_core::{AnimationArgs, KeyframeCount, RawTimedGradient,
//!                     try_generate_animation};
//!
//! let args = AnimationArgs {
//!     keyframe_count: KeyframeCount::Explicit(4),
//!     ..AnimationArgs::new(
//!         "glow",
//!         vec![
//!             RawTimedGradient::new("0%", "linear-gradient(30deg, #3d3393 0%, #35eb93 100%)"),
//!             RawTimedGradient::new("100%", "linear-gradient(20deg, #6e45e2 0%, #88d3ce 100%)"),
//!         ],
//!     )
//! };
//! let css = try_generate_animation(args).unwrap();
//! assert!(css.starts_with("@keyframes glow \n{\n    0.00%\n"));
//! assert_eq!(css.matches("background-image").count(), 5);
//! ```
//!
//! # How it works
//! <a id="markdown-how-it-works" name="how-it-works"></a>
//!
//! 1. Each gradient string is parsed into a [`LinearGradient`] (angle + color stops).
//! 2. Each gradient is [`equalize`]d: resampled onto `resolution + 1` evenly spaced stops.
//!    After this every gradient has stops at the same positions.
//! 3. For each keyframe, the two gradients on either side of it on the timeline are found
//!    w/ [`nearest_bracket`], and the keyframe's gradient is interpolated between them,
//!    one stop index at a time.
//! 4. The keyframes are written out w/ [`keyframes_to_css`].
//!
//! # Logging
//! <a id="markdown-logging" name="logging"></a>
//!
//! Logging uses [`tracing`] and is disabled by default. See
//! [`try_initialize_logging_global`] and [`try_initialize_logging_thread_local`].

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod animation;
pub mod color;
pub mod common;
pub mod decl_macros;
pub mod gradient;
pub mod log;

// Re-export.
pub use animation::*;
pub use color::*;
pub use common::*;
pub use gradient::*;
pub use log::*;
