/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::path::{Path, PathBuf};

use serde::Deserialize;
use zune_volume::element::{VolumeData, VolumeElement};
use zune_volume::volume::Volume;
use zune_volume_core::element_type::ElementType;
use zune_volume_core::extent::Extent;
use zune_volume_core::options::MedianOptions;
use zune_volumeprocs::kernel::{output_extent, Kernel};

mod median;
mod options;
mod oracle;
mod views;

/// A single filtering case described in `tests/*.json`
#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:            String,
    pub element_type:    ElementType,
    pub dimensions:      [usize; 3],
    pub components:      usize,
    pub data:            Vec<f64>,
    pub options:         MedianOptions,
    pub expected:        Vec<f64>,
    pub expected_extent: [i64; 6],
    pub comment:         Option<String>
}

pub fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests")
}

/// Build a volume of `element_type` from samples given as `f64`
pub fn volume_from_f64(
    element_type: ElementType, data: &[f64], dimensions: [usize; 3], components: usize
) -> Volume {
    macro_rules! build {
        ($($variant:ident => $t:ty),*) => {
            match element_type {
                $(ElementType::$variant => {
                    let samples: Vec<$t> = data.iter().map(|x| <$t>::from_f64(*x)).collect();
                    Volume::from_vec(samples, dimensions, components).unwrap()
                })*
            }
        };
    }
    build!(
        U8 => u8, I8 => i8, U16 => u16, I16 => i16, U32 => u32,
        I32 => i32, U64 => u64, I64 => i64, F32 => f32, F64 => f64
    )
}

/// Every stored sample of a volume widened to `f64`
pub fn samples_as_f64(volume: &Volume) -> Vec<f64> {
    macro_rules! widen {
        ($($variant:ident),*) => {
            match volume.data() {
                $(VolumeData::$variant(v) => v.iter().map(|x| x.to_f64()).collect(),)*
            }
        };
    }
    widen!(U8, I8, U16, I16, U32, I32, U64, I64, F32, F64)
}

/// Median filter by sorting every window, along with the extent it produces
pub fn brute_force_median(volume: &Volume, options: &MedianOptions) -> (Vec<f64>, Extent) {
    let kernel = Kernel::from_options(options).unwrap();
    let whole = volume.extent();
    let output = output_extent(&whole, &kernel, options.get_handle_boundaries());

    let samples = samples_as_f64(volume);
    let dims = volume.dimensions();
    let components = volume.components();

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let index = |point: [i64; 3], c: usize| {
        let x = (point[0] - whole.min(0)) as usize;
        let y = (point[1] - whole.min(1)) as usize;
        let z = (point[2] - whole.min(2)) as usize;
        ((z * dims[1] + y) * dims[0] + x) * components + c
    };

    let mut result = Vec::with_capacity(output.len() * components);

    for z in output.min(2)..=output.max(2) {
        for y in output.min(1)..=output.max(1) {
            for x in output.min(0)..=output.max(0) {
                let window = kernel.window([x, y, z]).intersect(&whole);

                for c in 0..components {
                    let mut values = Vec::with_capacity(window.len());

                    for hz in window.min(2)..=window.max(2) {
                        for hy in window.min(1)..=window.max(1) {
                            for hx in window.min(0)..=window.max(0) {
                                values.push(samples[index([hx, hy, hz], c)]);
                            }
                        }
                    }
                    values.sort_by(f64::total_cmp);
                    result.push(values[values.len() / 2]);
                }
            }
        }
    }
    (result, output)
}
