/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Filtering regions of a volume through borrowed views
use nanorand::Rng;
use zune_volume::traits::OperationsTrait;
use zune_volume::view::VolumeViewMut;
use zune_volume::volume::Volume;
use zune_volume_core::extent::Extent;
use zune_volume_core::options::MedianOptions;
use zune_volumeprocs::kernel::{required_input_extent, Kernel};
use zune_volumeprocs::median::{median_3d, Median3D};

fn random_volume(seed: u64, dimensions: [usize; 3]) -> Volume {
    let mut rand = nanorand::WyRand::new_seed(seed);
    let length: usize = dimensions.iter().product();
    let data: Vec<i32> = (0..length).map(|_| rand.generate_range(-500_i32..500)).collect();

    Volume::from_vec(data, dimensions, 1).unwrap()
}

#[test]
fn regions_read_only_their_required_input() {
    let volume = random_volume(41, [9, 8, 7]);
    let whole = volume.extent();
    let kernel = Kernel::with_middle([3, 4, 3], [1, 2, 2]).unwrap();

    let full = Median3D::from_options(
        MedianOptions::new(kernel.size())
            .set_kernel_middle(Some(kernel.middle()))
            .set_threads(1)
    )
    .clone_and_execute(&volume)
    .unwrap();

    let view = volume.view::<i32>().unwrap();

    for region in [
        Extent::from_array([0, 3, 0, 3, 0, 2]),
        Extent::from_array([4, 8, 2, 7, 3, 6]),
        Extent::from_array([2, 2, 5, 5, 1, 1])
    ] {
        let (required, advisory) = required_input_extent(&region, &kernel, &whole, true);
        assert!(advisory.is_clean());

        let input = view.sub_view(required).unwrap();

        let mut out = vec![0; region.len()];
        let mut output = VolumeViewMut::new(&mut out, region, 1).unwrap();
        median_3d(&input, &mut output, &kernel).unwrap();

        for z in region.min(2)..=region.max(2) {
            for y in region.min(1)..=region.max(1) {
                for x in region.min(0)..=region.max(0) {
                    assert_eq!(
                        output.sample([x, y, z], 0),
                        full.get::<i32>([x, y, z], 0).unwrap(),
                        "{region} at {x} {y} {z}"
                    );
                }
            }
        }
    }
}

#[test]
fn split_pieces_match_whole_run() {
    let volume = random_volume(5, [6, 5, 9]);
    let kernel = Kernel::cube(3).unwrap();
    let input = volume.view::<i32>().unwrap();

    let mut whole = vec![0; volume.extent().len()];
    let mut output = VolumeViewMut::new(&mut whole, volume.extent(), 1).unwrap();
    median_3d(&input, &mut output, &kernel).unwrap();

    let mut pieces = vec![0; volume.extent().len()];
    let output = VolumeViewMut::new(&mut pieces, volume.extent(), 1).unwrap();

    for mut piece in output.split(4) {
        median_3d(&input, &mut piece, &kernel).unwrap();
    }
    assert_eq!(whole, pieces);
}

#[test]
fn shifted_volume_origin() {
    let data: Vec<u8> = vec![5, 1, 4, 2, 8];
    let extent = Extent::from_array([-7, -3, 10, 10, 4, 4]);
    let mut volume = Volume::from_vec_with_extent(data, extent, 1).unwrap();

    Median3D::new([3, 1, 1]).execute(&mut volume).unwrap();

    assert_eq!(volume.extent(), extent);
    assert_eq!(volume.as_slice::<u8>().unwrap(), &[5, 4, 2, 4, 8]);
}

#[test]
fn mismatched_types_are_rejected() {
    let volume = Volume::fill(3_u16, [3, 3, 3], 1);
    assert!(volume.view::<u8>().is_err());
}
