/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Volume containers for the `zune-volume` crates
//!
//! This crate holds the owned [`Volume`](volume::Volume) type, the borrowed
//! strided views processing routines work on, and the
//! [`OperationsTrait`](traits::OperationsTrait) every volume operation
//! implements.
//!
//! # Example
//! ```
//! use zune_volume::volume::Volume;
//!
//! let volume = Volume::fill(12_u16, [8, 8, 4], 1);
//! let view = volume.view::<u16>().unwrap();
//!
//! assert_eq!(view.sample([3, 2, 1], 0), 12);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

pub mod element;
pub mod errors;
pub mod traits;
pub mod view;
pub mod volume;
