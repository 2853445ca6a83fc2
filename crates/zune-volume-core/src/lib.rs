/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all volume crates
//!
//! This crate provides a set of core types shared
//! by the libraries under the `zune-volume` umbrella
//!
//! It currently contains
//!
//! - Element type information shared by volumes
//! - Inclusive 3D extents and the arithmetic on them
//! - Median filter options
//! - A logging shim that forwards to `log` when enabled
//!
//! This library is `#[no_std]` unless the `std` feature is enabled.
//!
//! # Features
//!  - `std`: Enables std support.
//!
//!  - `serde`: Enables serializing and deserializing of the data structures
//!     present in the crate
//!
//!  - `log`: Forward the logging macros to the `log` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]

#[cfg(not(feature = "log"))]
pub mod log;

#[cfg(feature = "log")]
pub use log;

pub mod element_type;
pub mod extent;
pub mod options;
pub mod serde;
