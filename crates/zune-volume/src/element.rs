/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Typed sample storage
//!
//! A volume owns exactly one [`VolumeData`], a vector of one of the
//! supported primitive types.
//! [`VolumeElement`] ties each Rust primitive to its variant so generic
//! code can borrow the storage back as a typed slice.
use std::fmt::Debug;

use bytemuck::Pod;
use zune_volume_core::element_type::ElementType;

/// Sample storage of a volume, one variant per element type
#[derive(Clone, Debug, PartialEq)]
pub enum VolumeData {
    U8(Vec<u8>),
    I8(Vec<i8>),
    U16(Vec<u16>),
    I16(Vec<i16>),
    U32(Vec<u32>),
    I32(Vec<i32>),
    U64(Vec<u64>),
    I64(Vec<i64>),
    F32(Vec<f32>),
    F64(Vec<f64>)
}

impl VolumeData {
    /// The element type of the stored samples
    pub const fn element_type(&self) -> ElementType {
        match self {
            Self::U8(_) => ElementType::U8,
            Self::I8(_) => ElementType::I8,
            Self::U16(_) => ElementType::U16,
            Self::I16(_) => ElementType::I16,
            Self::U32(_) => ElementType::U32,
            Self::I32(_) => ElementType::I32,
            Self::U64(_) => ElementType::U64,
            Self::I64(_) => ElementType::I64,
            Self::F32(_) => ElementType::F32,
            Self::F64(_) => ElementType::F64
        }
    }

    /// Number of stored sample components
    pub fn len(&self) -> usize {
        match self {
            Self::U8(v) => v.len(),
            Self::I8(v) => v.len(),
            Self::U16(v) => v.len(),
            Self::I16(v) => v.len(),
            Self::U32(v) => v.len(),
            Self::I32(v) => v.len(),
            Self::U64(v) => v.len(),
            Self::I64(v) => v.len(),
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create zero filled storage of `length` samples of `element_type`
    pub fn zeroed(element_type: ElementType, length: usize) -> VolumeData {
        match element_type {
            ElementType::U8 => Self::U8(vec![0; length]),
            ElementType::I8 => Self::I8(vec![0; length]),
            ElementType::U16 => Self::U16(vec![0; length]),
            ElementType::I16 => Self::I16(vec![0; length]),
            ElementType::U32 => Self::U32(vec![0; length]),
            ElementType::I32 => Self::I32(vec![0; length]),
            ElementType::U64 => Self::U64(vec![0; length]),
            ElementType::I64 => Self::I64(vec![0; length]),
            ElementType::F32 => Self::F32(vec![0.0; length]),
            ElementType::F64 => Self::F64(vec![0.0; length])
        }
    }

    /// Copy native endian bytes into typed storage
    ///
    /// Returns `None` if `bytes` is not a whole number of samples
    pub fn from_raw_bytes(element_type: ElementType, bytes: &[u8]) -> Option<VolumeData> {
        if bytes.len() % element_type.size_of() != 0 {
            return None;
        }
        let data = match element_type {
            ElementType::U8 => Self::U8(bytes.to_vec()),
            ElementType::I8 => Self::I8(bytemuck::pod_collect_to_vec(bytes)),
            ElementType::U16 => Self::U16(bytemuck::pod_collect_to_vec(bytes)),
            ElementType::I16 => Self::I16(bytemuck::pod_collect_to_vec(bytes)),
            ElementType::U32 => Self::U32(bytemuck::pod_collect_to_vec(bytes)),
            ElementType::I32 => Self::I32(bytemuck::pod_collect_to_vec(bytes)),
            ElementType::U64 => Self::U64(bytemuck::pod_collect_to_vec(bytes)),
            ElementType::I64 => Self::I64(bytemuck::pod_collect_to_vec(bytes)),
            ElementType::F32 => Self::F32(bytemuck::pod_collect_to_vec(bytes)),
            ElementType::F64 => Self::F64(bytemuck::pod_collect_to_vec(bytes))
        };
        Some(data)
    }

    /// View the storage as native endian bytes
    pub fn as_raw_bytes(&self) -> &[u8] {
        match self {
            Self::U8(v) => v,
            Self::I8(v) => bytemuck::cast_slice(v),
            Self::U16(v) => bytemuck::cast_slice(v),
            Self::I16(v) => bytemuck::cast_slice(v),
            Self::U32(v) => bytemuck::cast_slice(v),
            Self::I32(v) => bytemuck::cast_slice(v),
            Self::U64(v) => bytemuck::cast_slice(v),
            Self::I64(v) => bytemuck::cast_slice(v),
            Self::F32(v) => bytemuck::cast_slice(v),
            Self::F64(v) => bytemuck::cast_slice(v)
        }
    }
}

/// A primitive that can be stored in a volume
///
/// Order statistics compare samples as `f64` regardless of the storage
/// type, `to_f64` and `from_f64` are the two sides of that conversion.
/// `from_f64` uses `as` semantics, truncating toward zero and saturating
/// at the bounds of integer types.
pub trait VolumeElement: Pod + Default + PartialOrd + Debug + Send + Sync + 'static {
    /// The element type tag of this primitive
    const ELEMENT_TYPE: ElementType;

    fn to_f64(self) -> f64;

    fn from_f64(value: f64) -> Self;

    /// Borrow typed storage, `None` if `data` holds another type
    fn storage(data: &VolumeData) -> Option<&[Self]>;

    /// Mutably borrow typed storage, `None` if `data` holds another type
    fn storage_mut(data: &mut VolumeData) -> Option<&mut [Self]>;

    /// Wrap a vector into storage
    fn into_storage(data: Vec<Self>) -> VolumeData;
}

macro_rules! volume_element {
    ($prim:tt, $variant:tt) => {
        impl VolumeElement for $prim {
            const ELEMENT_TYPE: ElementType = ElementType::$variant;

            #[inline(always)]
            #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_lossless
            )]
            fn from_f64(value: f64) -> Self {
                value as $prim
            }

            fn storage(data: &VolumeData) -> Option<&[Self]> {
                match data {
                    VolumeData::$variant(v) => Some(v),
                    _ => None
                }
            }

            fn storage_mut(data: &mut VolumeData) -> Option<&mut [Self]> {
                match data {
                    VolumeData::$variant(v) => Some(v),
                    _ => None
                }
            }

            fn into_storage(data: Vec<Self>) -> VolumeData {
                VolumeData::$variant(data)
            }
        }
    };
}

volume_element!(u8, U8);
volume_element!(i8, I8);
volume_element!(u16, U16);
volume_element!(i16, I16);
volume_element!(u32, U32);
volume_element!(i32, I32);
volume_element!(u64, U64);
volume_element!(i64, I64);
volume_element!(f32, F32);
volume_element!(f64, F64);
