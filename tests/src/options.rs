/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! JSON configuration driving whole volume filtering
use zune_volume::traits::OperationsTrait;
use zune_volume::volume::Volume;
use zune_volume_core::options::MedianOptions;
use zune_volumeprocs::kernel::Kernel;
use zune_volumeprocs::median::Median3D;

#[test]
fn missing_fields_use_defaults() {
    let options: MedianOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, MedianOptions::default());

    let options: MedianOptions = serde_json::from_str(r#"{"kernel_size": [5, 1, 3]}"#).unwrap();
    assert_eq!(options.get_kernel_size(), [5, 1, 3]);
    assert_eq!(options.get_effective_kernel_middle(), [2, 0, 1]);
    assert!(options.get_handle_boundaries());
}

#[test]
fn json_configures_the_filter() {
    let json = r#"{
        "kernel_size": [3, 1, 1],
        "kernel_middle": [1, 0, 0],
        "handle_boundaries": false,
        "threads": 1
    }"#;
    let options: MedianOptions = serde_json::from_str(json).unwrap();

    let mut volume = Volume::from_vec(vec![5_u32, 1, 4, 2, 8], [5, 1, 1], 1).unwrap();
    Median3D::from_options(options).execute(&mut volume).unwrap();

    assert_eq!(volume.as_slice::<u32>().unwrap(), &[4, 2, 4]);
}

#[test]
fn invalid_json_kernel_fails_before_filtering() {
    let options: MedianOptions =
        serde_json::from_str(r#"{"kernel_size": [3, 3, 3], "kernel_middle": [0, 5, 0]}"#).unwrap();

    assert!(Kernel::from_options(&options).is_err());

    let mut volume = Volume::fill(1.5_f32, [4, 4, 4], 1);
    let before = volume.clone();

    assert!(Median3D::from_options(options).execute(&mut volume).is_err());
    assert_eq!(volume, before);
}

#[test]
fn options_survive_serialization() {
    let options = MedianOptions::new([7, 3, 1])
        .set_kernel_middle(Some([6, 0, 0]))
        .set_handle_boundaries(false)
        .set_threads(2);

    let json = serde_json::to_string(&options).unwrap();
    let back: MedianOptions = serde_json::from_str(&json).unwrap();

    assert_eq!(options, back);
}
