/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Volume processing routines for `zune-volume`
//!
//! This implements neighborhood filters to be used with `zune-volume`
//!
//! Whole volume filters implement the `OperationsTrait` defined by zune-volume,
//! the routines they are built from work on borrowed views and can be
//! used on their own.
//!
//! # Example
//! - Median filter a volume with a 3x3x3 neighborhood
//! ```
//! use zune_volume::volume::Volume;
//! use zune_volume::traits::OperationsTrait;
//! use zune_volumeprocs::median::Median3D;
//!
//! let mut volume = Volume::fill::<u16>(233, [32, 32, 8], 1);
//! let median = Median3D::new([3, 3, 3]);
//! // execute the filter
//! median.execute(&mut volume).unwrap();
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
    clippy::missing_panics_doc,
    clippy::too_many_arguments
)]

pub mod kernel;
pub mod median;
