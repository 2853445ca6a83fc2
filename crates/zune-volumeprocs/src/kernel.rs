/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Neighborhood kernels and the extent arithmetic around them
//!
//! A kernel is a box of `size[axis]` samples per axis anchored at
//! `middle[axis]`, so the neighborhood of the sample at `p` covers
//!
//! ```text
//! p - middle ..= p + (size - 1 - middle)
//! ```
//!
//! The functions here translate between the extent a filter produces,
//! the input extent it reads and the part of the output whose
//! neighborhood never leaves the input.
use zune_volume::errors::VolumeErrors;
use zune_volume_core::extent::{Extent, AXES};
use zune_volume_core::options::MedianOptions;

/// A validated neighborhood description
///
/// Every axis has a size of at least one and an anchor inside it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Kernel {
    size:     [usize; AXES],
    middle:   [usize; AXES],
    elements: usize
}

impl Kernel {
    /// Create a kernel anchored at `size / 2` on every axis
    ///
    /// # Errors
    /// If any axis has a size of zero
    pub fn new(size: [usize; AXES]) -> Result<Kernel, VolumeErrors> {
        Self::with_middle(size, [size[0] / 2, size[1] / 2, size[2] / 2])
    }

    /// Create a kernel with an explicit anchor
    ///
    /// # Errors
    /// - Any axis has a size of zero
    /// - Any anchor is not smaller than the size on its axis
    /// - The number of samples in the kernel overflows `usize`, or a size
    ///   does not fit in an `i32`, which keeps window bounds in `i64` range
    pub fn with_middle(size: [usize; AXES], middle: [usize; AXES]) -> Result<Kernel, VolumeErrors> {
        let mut elements = 1_usize;

        for axis in 0..AXES {
            if size[axis] == 0 {
                return Err(VolumeErrors::ZeroKernelSize(axis));
            }
            if middle[axis] >= size[axis] {
                return Err(VolumeErrors::KernelMiddleOutOfRange(
                    axis,
                    middle[axis],
                    size[axis]
                ));
            }
            if i32::try_from(size[axis]).is_err() {
                return Err(VolumeErrors::KernelTooLarge(size));
            }
            elements = elements
                .checked_mul(size[axis])
                .ok_or(VolumeErrors::KernelTooLarge(size))?;
        }
        Ok(Kernel {
            size,
            middle,
            elements
        })
    }

    /// A centered `n x n x n` kernel
    ///
    /// # Errors
    /// If `n` is zero
    pub fn cube(n: usize) -> Result<Kernel, VolumeErrors> {
        Self::new([n, n, n])
    }

    /// Build the kernel configured by median options
    ///
    /// # Errors
    /// See [`Kernel::with_middle`]
    pub fn from_options(options: &MedianOptions) -> Result<Kernel, VolumeErrors> {
        Self::with_middle(
            options.get_kernel_size(),
            options.get_effective_kernel_middle()
        )
    }

    pub const fn size(&self) -> [usize; AXES] {
        self.size
    }

    pub const fn middle(&self) -> [usize; AXES] {
        self.middle
    }

    /// Number of samples in a full, unclipped neighborhood
    pub const fn number_of_elements(&self) -> usize {
        self.elements
    }

    /// Most samples a neighborhood clipped to `input` can hold
    ///
    /// On every axis a clipped window is no longer than the kernel
    /// and no longer than the input.
    pub fn clipped_capacity(&self, input: &Extent) -> usize {
        (0..AXES)
            .map(|axis| self.size[axis].min(input.axis_len(axis)).max(1))
            .product()
    }

    /// How far the neighborhood reaches below the anchor on `axis`
    #[allow(clippy::cast_possible_wrap)]
    pub const fn low_reach(&self, axis: usize) -> i64 {
        self.middle[axis] as i64
    }

    /// How far the neighborhood reaches above the anchor on `axis`
    #[allow(clippy::cast_possible_wrap)]
    pub const fn high_reach(&self, axis: usize) -> i64 {
        (self.size[axis] - 1 - self.middle[axis]) as i64
    }

    /// The neighborhood of `point`, not clipped to any extent
    pub fn window(&self, point: [i64; AXES]) -> Extent {
        let mut extent = Extent::new(point, point);

        for axis in 0..AXES {
            extent.set_axis(
                axis,
                point[axis] - self.low_reach(axis),
                point[axis] + self.high_reach(axis)
            );
        }
        extent
    }
}

/// Input sides a requested extent could not be satisfied on
///
/// Only produced when boundary handling is disabled, it never stops
/// a filter by itself, the caller decides what to do with it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ExtentAdvisory {
    /// Axes whose low bound fell below the whole extent
    pub low:  [bool; AXES],
    /// Axes whose high bound went past the whole extent
    pub high: [bool; AXES]
}

impl ExtentAdvisory {
    /// Return true if the requested extent was fully available
    pub fn is_clean(&self) -> bool {
        !self.low.iter().chain(self.high.iter()).any(|x| *x)
    }
}

/// The extent a filter may produce given the whole input extent
///
/// With boundary handling the whole extent is produced, windows are shrunk
/// at the edges instead. Without it the output loses `middle` samples on
/// the low side and `size - 1 - middle` on the high side of every axis.
pub fn output_extent(whole: &Extent, kernel: &Kernel, handle_boundaries: bool) -> Extent {
    if handle_boundaries {
        return *whole;
    }
    let mut output = *whole;

    for axis in 0..AXES {
        output.set_axis(
            axis,
            whole.min(axis) + kernel.low_reach(axis),
            whole.max(axis) - kernel.high_reach(axis)
        );
    }
    output
}

/// The input extent needed to produce `output`
///
/// The output is grown by the kernel reach on every side. With boundary
/// handling the result is clamped to `whole`, so it is always a subset of
/// it. Without boundary handling the grown extent is returned as is and
/// the sides that leave `whole` are reported in the advisory.
pub fn required_input_extent(
    output: &Extent, kernel: &Kernel, whole: &Extent, handle_boundaries: bool
) -> (Extent, ExtentAdvisory) {
    let mut input = *output;
    let mut advisory = ExtentAdvisory::default();

    for axis in 0..AXES {
        let mut min = output.min(axis) - kernel.low_reach(axis);
        let mut max = output.max(axis) + kernel.high_reach(axis);

        if min < whole.min(axis) {
            if handle_boundaries {
                min = whole.min(axis);
            } else {
                advisory.low[axis] = true;
            }
        }
        if max > whole.max(axis) {
            if handle_boundaries {
                max = whole.max(axis);
            } else {
                advisory.high[axis] = true;
            }
        }
        input.set_axis(axis, min, max);
    }
    (input, advisory)
}

/// Bounds of the samples whose neighborhood is not clipped by `input`
///
/// On each axis, coordinates in `[interior.min, interior.max)` were already
/// past the low edge and still before the high edge, the scanner uses these
/// two bounds to decide when to move a neighborhood side.
/// The result is empty on any axis where the kernel is larger than the input.
pub fn interior_extent(input: &Extent, kernel: &Kernel) -> Extent {
    let mut interior = *input;

    for axis in 0..AXES {
        #[allow(clippy::cast_possible_wrap)]
        let size = kernel.size[axis] as i64;

        interior.set_axis(
            axis,
            input.min(axis) + kernel.low_reach(axis),
            input.max(axis) - (size - 1) + kernel.low_reach(axis)
        );
    }
    interior
}
