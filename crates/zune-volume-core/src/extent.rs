/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Inclusive 3D extents
//!
//! An extent describes which integer coordinates of a volume exist,
//! as `[min0, max0, min1, max1, min2, max2]` with both bounds inclusive.
//!
//! Axis 0 is the fastest varying axis in memory and axis 2 the slowest.

/// Number of axes every extent has
pub const AXES: usize = 3;

/// An inclusive, axis aligned box of integer coordinates.
///
/// An extent where `max < min` on any axis is empty.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    min: [i64; AXES],
    max: [i64; AXES]
}

impl Extent {
    /// Create a new extent from per axis minimums and maximums
    pub const fn new(min: [i64; AXES], max: [i64; AXES]) -> Extent {
        Extent { min, max }
    }

    /// Create an extent from the `[min0, max0, min1, max1, min2, max2]`
    /// layout
    ///
    /// # Example
    /// ```
    /// use zune_volume_core::extent::Extent;
    /// let extent = Extent::from_array([0, 9, 0, 4, 2, 2]);
    /// assert_eq!(extent.dimensions(), [10, 5, 1]);
    /// ```
    pub const fn from_array(array: [i64; 6]) -> Extent {
        Extent {
            min: [array[0], array[2], array[4]],
            max: [array[1], array[3], array[5]]
        }
    }

    /// Create an extent starting at the origin with the given
    /// number of samples along each axis
    #[allow(clippy::cast_possible_wrap)]
    pub const fn from_dimensions(dims: [usize; AXES]) -> Extent {
        Extent {
            min: [0, 0, 0],
            max: [dims[0] as i64 - 1, dims[1] as i64 - 1, dims[2] as i64 - 1]
        }
    }

    /// Return the extent in the `[min0, max0, min1, max1, min2, max2]` layout
    pub const fn to_array(&self) -> [i64; 6] {
        [
            self.min[0],
            self.max[0],
            self.min[1],
            self.max[1],
            self.min[2],
            self.max[2]
        ]
    }

    /// Lowest coordinate on `axis`
    pub const fn min(&self, axis: usize) -> i64 {
        self.min[axis]
    }

    /// Highest coordinate on `axis`
    pub const fn max(&self, axis: usize) -> i64 {
        self.max[axis]
    }

    pub const fn mins(&self) -> [i64; AXES] {
        self.min
    }

    pub const fn maxs(&self) -> [i64; AXES] {
        self.max
    }

    /// Set both bounds of a single axis
    pub fn set_axis(&mut self, axis: usize, min: i64, max: i64) {
        self.min[axis] = min;
        self.max[axis] = max;
    }

    /// Number of coordinates along `axis`, zero for an empty axis
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub const fn axis_len(&self, axis: usize) -> usize {
        if self.max[axis] < self.min[axis] {
            0
        } else {
            (self.max[axis] - self.min[axis] + 1) as usize
        }
    }

    /// Number of coordinates along each axis
    pub const fn dimensions(&self) -> [usize; AXES] {
        [self.axis_len(0), self.axis_len(1), self.axis_len(2)]
    }

    /// Total number of sample positions inside the extent
    pub const fn len(&self) -> usize {
        self.axis_len(0) * self.axis_len(1) * self.axis_len(2)
    }

    /// Return true if any axis of this extent is empty
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return true if `point` lies inside the extent
    pub fn contains_point(&self, point: [i64; AXES]) -> bool {
        (0..AXES).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }

    /// Return true if every coordinate of `other` lies inside `self`
    ///
    /// Empty extents are contained in everything.
    pub fn contains(&self, other: &Extent) -> bool {
        if other.is_empty() {
            return true;
        }
        (0..AXES).all(|axis| other.min[axis] >= self.min[axis] && other.max[axis] <= self.max[axis])
    }

    /// The coordinates shared by both extents, possibly empty
    #[must_use]
    pub fn intersect(&self, other: &Extent) -> Extent {
        let mut result = *self;

        for axis in 0..AXES {
            result.min[axis] = self.min[axis].max(other.min[axis]);
            result.max[axis] = self.max[axis].min(other.max[axis]);
        }
        result
    }
}

impl core::fmt::Display for Extent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}..={}, {}..={}, {}..={}]",
            self.min[0], self.max[0], self.min[1], self.max[1], self.min[2], self.max[2]
        )
    }
}
