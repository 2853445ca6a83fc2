/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single volume
//!
//! A volume is represented as
//!
//! - one tightly packed buffer
//!     - of a single element type
//!         - with one or more interleaved components per sample
//!             - covering an inclusive 3D extent
//!
//! Axis 0 varies fastest in memory, followed by components being
//! the innermost of all, i.e the buffer is laid out as `[z][y][x][c]`.
use zune_volume_core::element_type::ElementType;
use zune_volume_core::extent::{Extent, AXES};

use crate::element::{VolumeData, VolumeElement};
use crate::errors::VolumeErrors;
use crate::view::{VolumeView, VolumeViewMut};

/// Represents a single volume
#[derive(Clone, Debug, PartialEq)]
pub struct Volume {
    data:       VolumeData,
    extent:     Extent,
    components: usize
}

fn check_layout(extent: &Extent, components: usize, length: usize) -> Result<(), VolumeErrors> {
    if components == 0 {
        return Err(VolumeErrors::ZeroComponents);
    }
    if extent.is_empty() {
        return Err(VolumeErrors::EmptyExtent(*extent));
    }
    let expected = extent.len() * components;

    if expected != length {
        return Err(VolumeErrors::DimensionsMisMatch(expected, length));
    }
    Ok(())
}

impl Volume {
    /// Create a volume from typed storage covering `extent`
    ///
    /// # Errors
    /// - `components` is zero or the extent is empty
    /// - The storage length is not `extent.len() * components`
    pub fn new(data: VolumeData, extent: Extent, components: usize) -> Result<Volume, VolumeErrors> {
        check_layout(&extent, components, data.len())?;

        Ok(Volume {
            data,
            extent,
            components
        })
    }

    /// Create a volume whose extent starts at the origin
    ///
    /// # Arguments
    /// - data: Samples laid out as `[z][y][x][c]`
    /// - dimensions: Number of samples along axis 0, 1 and 2
    /// - components: Number of components per sample
    ///
    /// # Example
    /// ```
    /// use zune_volume::volume::Volume;
    /// let volume = Volume::from_vec(vec![0_u8; 4 * 4 * 2], [4, 4, 2], 1).unwrap();
    /// assert_eq!(volume.dimensions(), [4, 4, 2]);
    /// ```
    ///
    /// # Errors
    /// See [`Volume::new`]
    pub fn from_vec<T: VolumeElement>(
        data: Vec<T>, dimensions: [usize; AXES], components: usize
    ) -> Result<Volume, VolumeErrors> {
        Self::from_vec_with_extent(data, Extent::from_dimensions(dimensions), components)
    }

    /// Create a volume covering an arbitrary extent
    ///
    /// # Errors
    /// See [`Volume::new`]
    pub fn from_vec_with_extent<T: VolumeElement>(
        data: Vec<T>, extent: Extent, components: usize
    ) -> Result<Volume, VolumeErrors> {
        Self::new(T::into_storage(data), extent, components)
    }

    /// Create a volume where every component of every sample is `value`
    ///
    /// # Panics
    /// If `components` is zero or any dimension is zero
    pub fn fill<T: VolumeElement>(value: T, dimensions: [usize; AXES], components: usize) -> Volume {
        let extent = Extent::from_dimensions(dimensions);

        assert!(components > 0 && !extent.is_empty(), "Empty volume");

        let data = vec![value; extent.len() * components];

        Volume {
            data: T::into_storage(data),
            extent,
            components
        }
    }

    /// Create a volume from native endian bytes of `element_type`
    ///
    /// The bytes are copied, so they need not be aligned.
    ///
    /// # Errors
    /// - The byte count is not a whole number of samples
    /// - See [`Volume::new`]
    pub fn from_raw_bytes(
        bytes: &[u8], element_type: ElementType, dimensions: [usize; AXES], components: usize
    ) -> Result<Volume, VolumeErrors> {
        let data = VolumeData::from_raw_bytes(element_type, bytes).ok_or_else(|| {
            VolumeErrors::GenericString(format!(
                "{} bytes is not a whole number of {element_type} samples",
                bytes.len()
            ))
        })?;
        Self::new(data, Extent::from_dimensions(dimensions), components)
    }

    pub const fn extent(&self) -> Extent {
        self.extent
    }

    /// Number of samples along each axis
    pub const fn dimensions(&self) -> [usize; AXES] {
        self.extent.dimensions()
    }

    pub const fn components(&self) -> usize {
        self.components
    }

    pub const fn element_type(&self) -> ElementType {
        self.data.element_type()
    }

    pub const fn data(&self) -> &VolumeData {
        &self.data
    }

    /// Replace the storage and extent of this volume
    ///
    /// The component count is kept.
    ///
    /// # Errors
    /// See [`Volume::new`], the volume is left untouched on error
    pub fn set_data(&mut self, data: VolumeData, extent: Extent) -> Result<(), VolumeErrors> {
        check_layout(&extent, self.components, data.len())?;

        self.data = data;
        self.extent = extent;
        Ok(())
    }

    /// Borrow samples as a typed slice
    ///
    /// # Errors
    /// If the volume does not store `T`
    pub fn as_slice<T: VolumeElement>(&self) -> Result<&[T], VolumeErrors> {
        T::storage(&self.data)
            .ok_or(VolumeErrors::ElementTypeMismatch(T::ELEMENT_TYPE, self.element_type()))
    }

    /// Mutably borrow samples as a typed slice
    ///
    /// # Errors
    /// If the volume does not store `T`
    pub fn as_slice_mut<T: VolumeElement>(&mut self) -> Result<&mut [T], VolumeErrors> {
        let found = self.element_type();

        T::storage_mut(&mut self.data).ok_or(VolumeErrors::ElementTypeMismatch(T::ELEMENT_TYPE, found))
    }

    /// A read only view over the whole volume
    ///
    /// # Errors
    /// If the volume does not store `T`
    pub fn view<T: VolumeElement>(&self) -> Result<VolumeView<'_, T>, VolumeErrors> {
        VolumeView::new(self.as_slice()?, self.extent, self.components)
    }

    /// A writable view over the whole volume
    ///
    /// # Errors
    /// If the volume does not store `T`
    pub fn view_mut<T: VolumeElement>(&mut self) -> Result<VolumeViewMut<'_, T>, VolumeErrors> {
        let (extent, components) = (self.extent, self.components);

        VolumeViewMut::new(self.as_slice_mut()?, extent, components)
    }

    /// Read a single component of the sample at `point`
    ///
    /// Returns `None` if the point or component is outside the volume or
    /// the volume does not store `T`
    pub fn get<T: VolumeElement>(&self, point: [i64; AXES], component: usize) -> Option<T> {
        if component >= self.components || !self.extent.contains_point(point) {
            return None;
        }
        let view = self.view::<T>().ok()?;
        Some(view.sample(point, component))
    }
}
