/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use zune_volume::volume::Volume;

/// A volume of `u16` noise, the same for every run with the same seed
pub fn noise_volume(dimensions: [usize; 3], seed: u64) -> Volume {
    let mut rand = nanorand::WyRand::new_seed(seed);
    let length: usize = dimensions.iter().product();

    let data: Vec<u16> = (0..length).map(|_| rand.generate_range(0_u16..4096)).collect();
    // dimensions always match the sample count
    Volume::from_vec(data, dimensions, 1).unwrap()
}
