/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Volume sample types, information and manipulations

/// The underlying storage type of a volume sample
///
/// This represents the Rust primitive used to store
/// each component of every sample in a volume.
///
/// Volumes coming from scientific pipelines are far more varied than
/// photographs, so signed, unsigned and floating types of every common
/// width are represented.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ElementType {
    /// Samples are stored as [`u8`]
    U8,
    /// Samples are stored as [`i8`]
    I8,
    /// Samples are stored as [`u16`]
    U16,
    /// Samples are stored as [`i16`]
    I16,
    /// Samples are stored as [`u32`]
    U32,
    /// Samples are stored as [`i32`]
    I32,
    /// Samples are stored as [`u64`]
    ///
    /// Values above 2^53 cannot be represented exactly by the
    /// `f64` comparisons used in order statistics.
    U64,
    /// Samples are stored as [`i64`]
    ///
    /// Same precision caveat as [`ElementType::U64`]
    I64,
    /// Samples are stored as [`f32`]
    F32,
    /// Samples are stored as [`f64`]
    F64
}

impl ElementType {
    /// All element types, in declaration order
    pub const ALL: [ElementType; 10] = [
        Self::U8,
        Self::I8,
        Self::U16,
        Self::I16,
        Self::U32,
        Self::I32,
        Self::U64,
        Self::I64,
        Self::F32,
        Self::F64
    ];

    /// Get the number of bytes needed to store one sample component
    ///
    /// # Example
    /// ```
    /// use zune_volume_core::element_type::ElementType;
    /// assert_eq!(ElementType::U16.size_of(), 2);
    /// assert_eq!(ElementType::F64.size_of(), 8);
    /// ```
    pub const fn size_of(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U64 | Self::I64 | Self::F64 => 8
        }
    }

    /// Returns true if the element is a floating point type
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Returns true if the element type can store negative values
    pub const fn is_signed(self) -> bool {
        !matches!(self, Self::U8 | Self::U16 | Self::U32 | Self::U64)
    }

    /// Parse an element type from its lower case name, e.g `"u16"`
    pub fn from_name(name: &str) -> Option<ElementType> {
        let ty = match name {
            "u8" => Self::U8,
            "i8" => Self::I8,
            "u16" => Self::U16,
            "i16" => Self::I16,
            "u32" => Self::U32,
            "i32" => Self::I32,
            "u64" => Self::U64,
            "i64" => Self::I64,
            "f32" => Self::F32,
            "f64" => Self::F64,
            _ => return None
        };
        Some(ty)
    }

    /// The lower case name of the type, the inverse of [`from_name`](Self::from_name)
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::U64 => "u64",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64"
        }
    }
}

impl core::fmt::Display for ElementType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
