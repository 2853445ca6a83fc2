/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Borrowed, strided views of volume samples
//!
//! A view pairs a slice with the extent it covers and the distance,
//! in samples, between neighbors along each axis ("increments").
//!
//! The first element of the slice is the first component of the sample at
//! the extent minimum, so the offset of any sample is
//!
//! ```text
//! (x - min0) * inc0 + (y - min1) * inc1 + (z - min2) * inc2 + component
//! ```
//!
//! Views never allocate sample storage, they only borrow it.
use zune_volume_core::extent::{Extent, AXES};

use crate::errors::VolumeErrors;

/// Increments for a tightly packed, component interleaved layout
/// where axis 0 varies fastest
pub const fn contiguous_increments(extent: &Extent, components: usize) -> [usize; AXES] {
    let inc0 = components;
    let inc1 = inc0 * extent.axis_len(0);
    let inc2 = inc1 * extent.axis_len(1);
    [inc0, inc1, inc2]
}

/// Offset one past the last component of the last sample in the extent
fn required_len(extent: &Extent, increments: &[usize; AXES], components: usize) -> usize {
    if extent.is_empty() {
        return 0;
    }
    let dims = extent.dimensions();
    (0..AXES)
        .map(|axis| (dims[axis] - 1) * increments[axis])
        .sum::<usize>()
        + components
}

fn validate(
    len: usize, extent: &Extent, increments: &[usize; AXES], components: usize
) -> Result<(), VolumeErrors> {
    if components == 0 {
        return Err(VolumeErrors::ZeroComponents);
    }
    if increments[0] < components {
        return Err(VolumeErrors::GenericString(format!(
            "Axis 0 increment {} is smaller than the component count {components}",
            increments[0]
        )));
    }
    let expected = required_len(extent, increments, components);

    if len < expected {
        return Err(VolumeErrors::DimensionsMisMatch(expected, len));
    }
    Ok(())
}

#[inline(always)]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn offset_of(
    extent: &Extent, increments: &[usize; AXES], point: [i64; AXES], component: usize
) -> usize {
    debug_assert!(extent.contains_point(point), "{point:?} outside {extent}");

    (point[0] - extent.min(0)) as usize * increments[0]
        + (point[1] - extent.min(1)) as usize * increments[1]
        + (point[2] - extent.min(2)) as usize * increments[2]
        + component
}

/// A read only view of volume samples
#[derive(Copy, Clone, Debug)]
pub struct VolumeView<'a, T> {
    data:       &'a [T],
    extent:     Extent,
    increments: [usize; AXES],
    components: usize
}

impl<'a, T: Copy> VolumeView<'a, T> {
    /// Create a view of a tightly packed buffer
    ///
    /// # Errors
    /// - `components` is zero
    /// - `data` is too short for the extent
    pub fn new(data: &'a [T], extent: Extent, components: usize) -> Result<Self, VolumeErrors> {
        let increments = contiguous_increments(&extent, components);
        Self::with_increments(data, extent, increments, components)
    }

    /// Create a view with explicit increments, e.g a sub region of
    /// a larger buffer
    ///
    /// # Errors
    /// - `components` is zero or larger than the axis 0 increment
    /// - `data` is too short for the extent with those increments
    pub fn with_increments(
        data: &'a [T], extent: Extent, increments: [usize; AXES], components: usize
    ) -> Result<Self, VolumeErrors> {
        validate(data.len(), &extent, &increments, components)?;

        Ok(VolumeView {
            data,
            extent,
            increments,
            components
        })
    }

    pub const fn extent(&self) -> Extent {
        self.extent
    }

    pub const fn increments(&self) -> [usize; AXES] {
        self.increments
    }

    pub const fn components(&self) -> usize {
        self.components
    }

    /// The borrowed samples
    pub const fn data(&self) -> &'a [T] {
        self.data
    }

    /// Offset of `component` of the sample at `point` inside [`data`](Self::data)
    #[inline(always)]
    pub fn offset(&self, point: [i64; AXES], component: usize) -> usize {
        offset_of(&self.extent, &self.increments, point, component)
    }

    /// Read one component of the sample at `point`
    ///
    /// # Panics
    /// If the point is outside the view
    #[inline(always)]
    pub fn sample(&self, point: [i64; AXES], component: usize) -> T {
        self.data[self.offset(point, component)]
    }

    /// A view of a region of this view
    ///
    /// # Errors
    /// If `extent` is not inside this view
    pub fn sub_view(&self, extent: Extent) -> Result<VolumeView<'a, T>, VolumeErrors> {
        if !self.extent.contains(&extent) {
            return Err(VolumeErrors::ExtentNotCovered(extent, self.extent));
        }
        if extent.is_empty() {
            return Err(VolumeErrors::EmptyExtent(extent));
        }
        let start = self.offset(extent.mins(), 0);

        VolumeView::with_increments(&self.data[start..], extent, self.increments, self.components)
    }
}

/// A writable view of volume samples
#[derive(Debug)]
pub struct VolumeViewMut<'a, T> {
    data:       &'a mut [T],
    extent:     Extent,
    increments: [usize; AXES],
    components: usize
}

impl<'a, T: Copy> VolumeViewMut<'a, T> {
    /// Create a mutable view of a tightly packed buffer
    ///
    /// # Errors
    /// - `components` is zero
    /// - `data` is too short for the extent
    pub fn new(
        data: &'a mut [T], extent: Extent, components: usize
    ) -> Result<Self, VolumeErrors> {
        let increments = contiguous_increments(&extent, components);
        Self::with_increments(data, extent, increments, components)
    }

    /// Create a mutable view with explicit increments
    ///
    /// # Errors
    /// Same as [`VolumeView::with_increments`]
    pub fn with_increments(
        data: &'a mut [T], extent: Extent, increments: [usize; AXES], components: usize
    ) -> Result<Self, VolumeErrors> {
        validate(data.len(), &extent, &increments, components)?;

        Ok(VolumeViewMut {
            data,
            extent,
            increments,
            components
        })
    }

    pub const fn extent(&self) -> Extent {
        self.extent
    }

    pub const fn increments(&self) -> [usize; AXES] {
        self.increments
    }

    pub const fn components(&self) -> usize {
        self.components
    }

    /// Reborrow as a read only view
    pub fn as_view(&self) -> VolumeView<'_, T> {
        VolumeView {
            data:       &*self.data,
            extent:     self.extent,
            increments: self.increments,
            components: self.components
        }
    }

    #[inline(always)]
    pub fn offset(&self, point: [i64; AXES], component: usize) -> usize {
        offset_of(&self.extent, &self.increments, point, component)
    }

    #[inline(always)]
    pub fn sample(&self, point: [i64; AXES], component: usize) -> T {
        self.data[self.offset(point, component)]
    }

    /// Write one component of the sample at `point`
    ///
    /// # Panics
    /// If the point is outside the view
    #[inline(always)]
    pub fn set(&mut self, point: [i64; AXES], component: usize, value: T) {
        let offset = self.offset(point, component);
        self.data[offset] = value;
    }

    /// Split the view into at most `pieces` views covering disjoint
    /// parts of the extent
    ///
    /// The split happens along the slowest axis with more than one
    /// coordinate for which every slower axis is a single coordinate,
    /// i.e axis 2 first and axis 1 (then 0) for single slice volumes, so
    /// every piece is a contiguous run of the underlying slice.
    ///
    /// Pieces are returned in increasing coordinate order, an empty view
    /// yields no pieces.
    pub fn split(self, pieces: usize) -> Vec<VolumeViewMut<'a, T>> {
        if self.extent.is_empty() {
            return vec![];
        }
        let dims = self.extent.dimensions();
        let axis = (0..AXES).rev().find(|a| dims[*a] > 1).unwrap_or(0);

        let pieces = pieces.clamp(1, dims[axis]);
        let per_piece = dims[axis].div_ceil(pieces);
        let stride = self.increments[axis];

        let mut output = Vec::with_capacity(pieces);
        let mut rest = self.data;
        let mut start = self.extent.min(axis);
        let end = self.extent.max(axis);

        while start <= end {
            #[allow(clippy::cast_possible_wrap)]
            let stop = (start + per_piece as i64 - 1).min(end);

            let mut extent = self.extent;
            extent.set_axis(axis, start, stop);

            let taken = if stop == end {
                rest.len()
            } else {
                (extent.axis_len(axis) * stride).min(rest.len())
            };
            let (head, tail) = rest.split_at_mut(taken);
            rest = tail;

            output.push(VolumeViewMut {
                data: head,
                extent,
                increments: self.increments,
                components: self.components
            });
            start = stop + 1;
        }
        output
    }
}
