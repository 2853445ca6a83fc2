/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Median filter options
//!
//! This module exposes a struct which carries every configurable
//! part of a median filtering run.
//!
//! The same `MedianOptions` can be reused for any number of volumes,
//! it is never modified by the filter.

/// Median filter options
///
/// To keep construction chainable, setters consume and return the options.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MedianOptions {
    /// Neighborhood width along each axis.
    ///
    /// A width of 1 on an axis turns the filter into
    /// a lower dimension one, e.g `[5, 5, 1]` filters each slice on its own
    ///
    /// - Default value: `[3, 3, 3]`
    kernel_size:       [usize; 3],
    /// Index of the anchor sample inside the neighborhood along each axis.
    ///
    /// When `None`, the anchor is `size / 2` on every axis.
    ///
    /// - Default value: `None`
    kernel_middle:     Option<[usize; 3]>,
    /// Whether windows that would leave the volume are shrunk
    /// instead of shrinking the produced volume.
    ///
    /// - Default value: `true`
    handle_boundaries: bool,
    /// Number of workers used to filter a volume.
    ///
    /// Zero means use the available parallelism of the machine,
    /// one forces single threaded filtering.
    ///
    /// - Default value: `0`
    threads:           usize
}

impl Default for MedianOptions {
    fn default() -> Self {
        MedianOptions {
            kernel_size:       [3, 3, 3],
            kernel_middle:     None,
            handle_boundaries: true,
            threads:           0
        }
    }
}

impl MedianOptions {
    /// Create options for a kernel with the given size, centered,
    /// with boundary handling enabled
    pub fn new(kernel_size: [usize; 3]) -> MedianOptions {
        MedianOptions::default().set_kernel_size(kernel_size)
    }

    /// Get the configured kernel size
    pub const fn get_kernel_size(&self) -> [usize; 3] {
        self.kernel_size
    }

    /// Get the configured kernel anchor, if one was set explicitly
    pub const fn get_kernel_middle(&self) -> Option<[usize; 3]> {
        self.kernel_middle
    }

    /// Get the kernel anchor that will be used, either the explicit
    /// one or `size / 2` on every axis
    pub const fn get_effective_kernel_middle(&self) -> [usize; 3] {
        match self.kernel_middle {
            Some(middle) => middle,
            None => [
                self.kernel_size[0] / 2,
                self.kernel_size[1] / 2,
                self.kernel_size[2] / 2
            ]
        }
    }

    /// Return true if boundary windows are shrunk instead of the output
    pub const fn get_handle_boundaries(&self) -> bool {
        self.handle_boundaries
    }

    /// Get the number of workers to use, zero meaning auto
    pub const fn get_threads(&self) -> usize {
        self.threads
    }

    /// Set the neighborhood width along each axis
    ///
    /// # Arguments
    ///
    /// * `size`: Kernel width along axis 0, 1 and 2
    ///
    /// returns: MedianOptions
    #[must_use]
    pub fn set_kernel_size(mut self, size: [usize; 3]) -> Self {
        self.kernel_size = size;
        self
    }

    /// Set the anchor of the neighborhood along each axis
    ///
    /// Pass `None` to go back to a centered anchor.
    #[must_use]
    pub fn set_kernel_middle(mut self, middle: Option<[usize; 3]>) -> Self {
        self.kernel_middle = middle;
        self
    }

    /// Set whether windows at the edge of a volume are shrunk
    #[must_use]
    pub fn set_handle_boundaries(mut self, yes: bool) -> Self {
        self.handle_boundaries = yes;
        self
    }

    /// Set the number of workers, zero to use all available parallelism
    #[must_use]
    pub fn set_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}
