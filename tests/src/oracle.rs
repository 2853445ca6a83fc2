/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Random volumes against a sorting median
use nanorand::Rng;
use zune_volume::traits::OperationsTrait;
use zune_volume_core::element_type::ElementType;
use zune_volume_core::options::MedianOptions;
use zune_volumeprocs::median::Median3D;

use crate::{brute_force_median, samples_as_f64, volume_from_f64};

fn random_options(rand: &mut nanorand::WyRand, dimensions: [usize; 3]) -> MedianOptions {
    let mut size = [0; 3];
    let mut middle = [0; 3];

    for axis in 0..3 {
        size[axis] = rand.generate_range(1_usize..=5);
        middle[axis] = rand.generate_range(0..size[axis]);
    }
    let mut handle_boundaries = rand.generate::<bool>();

    // keep at least one output sample when the volume shrinks
    if (0..3).any(|axis| size[axis] > dimensions[axis]) {
        handle_boundaries = true;
    }
    let options = MedianOptions::new(size)
        .set_handle_boundaries(handle_boundaries)
        .set_threads(rand.generate_range(1_usize..=4));

    if rand.generate::<bool>() {
        options.set_kernel_middle(Some(middle))
    } else {
        options
    }
}

#[test]
fn random_volumes_match_sorting() {
    let mut rand = nanorand::WyRand::new_seed(2023);

    for _ in 0..150 {
        let element_type = ElementType::ALL[rand.generate_range(0..ElementType::ALL.len())];

        let mut dimensions = [0; 3];
        for dim in &mut dimensions {
            *dim = rand.generate_range(1_usize..=8);
        }
        let components = rand.generate_range(1_usize..=3);
        let length = dimensions.iter().product::<usize>() * components;

        // small values so every type holds them, few distinct ones so ties happen
        let data: Vec<f64> = (0..length)
            .map(|_| f64::from(rand.generate_range(0_u8..40)))
            .collect();

        let options = random_options(&mut rand, dimensions);
        let volume = volume_from_f64(element_type, &data, dimensions, components);

        let (expected, extent) = brute_force_median(&volume, &options);
        let filtered = Median3D::from_options(options)
            .clone_and_execute(&volume)
            .unwrap();

        assert_eq!(filtered.extent(), extent, "{options:?}");
        assert_eq!(
            samples_as_f64(&filtered),
            expected,
            "{element_type} {dimensions:?} {options:?}"
        );
    }
}

#[test]
fn constant_volumes_stay_constant() {
    for element_type in ElementType::ALL {
        let data = vec![9.0; 6 * 5 * 4 * 2];
        let mut volume = volume_from_f64(element_type, &data, [6, 5, 4], 2);

        Median3D::new([3, 5, 2]).execute(&mut volume).unwrap();

        assert!(samples_as_f64(&volume).iter().all(|x| *x == 9.0));
    }
}
