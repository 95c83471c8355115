// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Test fixtures shared by the crates in the `gradanim` workspace. This crate is meant to
//! be a
//! [`dev-dependency`](https://doc.rust-lang.org/cargo/reference/specifying-dependencies.html#dev-dependencies)
//! only.
//!
//! # temp_dir
//!
//! Tests that write CSS files or log files need a scratch directory that goes away when
//! the test is done.
//!
//! ```
//! use gradanim_test_fixtures::try_create_temp_dir;
//!
//! let temp_dir = try_create_temp_dir().unwrap();
//! let css_file = temp_dir.join("rainbow.css");
//! std::fs::write(&css_file, "@keyframes rainbow \n{\n}").unwrap();
//! assert!(css_file.exists());
//! ```

// Attach sources.
pub mod temp_dir;

// Re-export.
pub use temp_dir::*;
