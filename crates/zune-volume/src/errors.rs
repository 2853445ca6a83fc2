/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during volume processing
use std::fmt::{Debug, Display, Formatter};

use zune_volume_core::element_type::ElementType;
use zune_volume_core::extent::Extent;

/// All possible volume errors that can occur.
///
/// Everything here is detected before any sample is processed,
/// once scanning starts nothing can fail.
pub enum VolumeErrors {
    /// A kernel axis with a width of zero, carries the axis
    ZeroKernelSize(usize),
    /// Kernel anchor outside the kernel, carries the axis, the
    /// anchor and the kernel width
    KernelMiddleOutOfRange(usize, usize, usize),
    /// Kernel sizes whose sample count or reach can't be represented
    KernelTooLarge([usize; 3]),
    /// Expected one element type but found another
    ElementTypeMismatch(ElementType, ElementType),
    /// The number of samples does not match the dimensions,
    /// carries the expected and found length
    DimensionsMisMatch(usize, usize),
    /// Components must be one or more
    ZeroComponents,
    /// Component counts of two views differ
    ComponentsMisMatch(usize, usize),
    /// Operation name and the element type it can't process
    OperationNotImplemented(&'static str, ElementType),
    /// An output extent which the input extent does not cover,
    /// carries the output and input extents
    ExtentNotCovered(Extent, Extent),
    /// An extent with no samples where samples are needed
    EmptyExtent(Extent),
    GenericString(String),
    GenericStr(&'static str)
}

impl Debug for VolumeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroKernelSize(axis) => {
                writeln!(f, "Kernel size on axis {axis} is zero, sizes must be at least 1")
            }
            Self::KernelMiddleOutOfRange(axis, middle, size) => {
                writeln!(
                    f,
                    "Kernel middle {middle} on axis {axis} is outside the kernel of size {size}"
                )
            }
            Self::KernelTooLarge(size) => {
                writeln!(f, "Kernel of size {size:?} is too large to be represented")
            }
            Self::ElementTypeMismatch(expected, found) => {
                writeln!(f, "Expected element type {expected} but found {found}")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} samples but found {found}"
                )
            }
            Self::ZeroComponents => writeln!(f, "Volumes need at least one component"),
            Self::ComponentsMisMatch(expected, found) => {
                writeln!(f, "Expected {expected} components and found {found}")
            }
            Self::OperationNotImplemented(operation, element_type) => {
                writeln!(
                    f,
                    "Operation {operation} is not implemented for element type {element_type}"
                )
            }
            Self::ExtentNotCovered(output, input) => {
                writeln!(
                    f,
                    "Output extent {output} is not covered by input extent {input}"
                )
            }
            Self::EmptyExtent(extent) => writeln!(f, "Extent {extent} has no samples"),
            Self::GenericString(err) => writeln!(f, "{err}"),
            Self::GenericStr(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for VolumeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for VolumeErrors {}

impl From<String> for VolumeErrors {
    fn from(s: String) -> VolumeErrors {
        VolumeErrors::GenericString(s)
    }
}

impl From<&'static str> for VolumeErrors {
    fn from(s: &'static str) -> VolumeErrors {
        VolumeErrors::GenericStr(s)
    }
}
