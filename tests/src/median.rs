/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use zune_volume::traits::OperationsTrait;
use zune_volume_core::extent::Extent;
use zune_volumeprocs::median::Median3D;

use crate::{brute_force_median, sample_path, samples_as_f64, volume_from_f64, TestEntry};

fn load_entries() -> Vec<TestEntry> {
    let json_file = read(sample_path().join("median.json")).unwrap();
    serde_json::from_slice(&json_file).unwrap()
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_median_cases() {
    let entries = load_entries();
    assert!(!entries.is_empty());

    let mut error = false;
    let mut failed = Vec::new();

    for entry in &entries {
        let mut volume = volume_from_f64(
            entry.element_type,
            &entry.data,
            entry.dimensions,
            entry.components
        );
        Median3D::from_options(entry.options)
            .execute(&mut volume)
            .unwrap();

        let found = samples_as_f64(&volume);
        let extent = Extent::from_array(entry.expected_extent);

        if found != entry.expected || volume.extent() != extent {
            error = true;
            failed.push(entry.name.clone());
            // report error
            let err = format!(
                "Mismatch for case {:?}\nExpected {:?} over {}\nFound {:?} over {}\nConfig:{:#?}",
                entry.name,
                entry.expected,
                extent,
                found,
                volume.extent(),
                entry.options
            );
            eprintln!("{}\n", err)
        }
    }
    if error {
        panic!("Errors found during median filtering\n {:#?}", failed);
    }
}

#[test]
fn cases_agree_with_brute_force() {
    for entry in load_entries() {
        let volume = volume_from_f64(
            entry.element_type,
            &entry.data,
            entry.dimensions,
            entry.components
        );
        let (expected, extent) = brute_force_median(&volume, &entry.options);

        assert_eq!(expected, entry.expected, "{}", entry.name);
        assert_eq!(extent.to_array(), entry.expected_extent, "{}", entry.name);
    }
}

#[test]
fn threads_do_not_change_cases() {
    for entry in load_entries() {
        let volume = volume_from_f64(
            entry.element_type,
            &entry.data,
            entry.dimensions,
            entry.components
        );
        let options = entry.options.set_threads(3);
        let filtered = Median3D::from_options(options)
            .clone_and_execute(&volume)
            .unwrap();

        assert_eq!(samples_as_f64(&filtered), entry.expected, "{}", entry.name);
    }
}
