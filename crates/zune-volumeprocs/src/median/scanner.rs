/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sliding neighborhood scan
//!
//! Every output coordinate is visited once, axis 2 outermost and axis 0
//! innermost. The neighborhood is tracked per axis as an inclusive
//! `[hood_min, hood_max]` range of input coordinates, already clipped to the
//! input, and advanced with two comparisons per step instead of being
//! recomputed from the kernel.
use zune_volume::element::VolumeElement;
use zune_volume::view::{VolumeView, VolumeViewMut};
use zune_volume_core::extent::Extent;

use crate::kernel::{interior_extent, Kernel};
use crate::median::maintainer::RunningMedian;

/// Input coordinate range of one axis of a neighborhood
#[derive(Copy, Clone, Debug)]
struct Hood {
    min:          i64,
    max:          i64,
    interior_min: i64,
    interior_max: i64
}

impl Hood {
    /// The clipped neighborhood of the first output coordinate on `axis`
    fn start(axis: usize, output: &Extent, input: &Extent, interior: &Extent, kernel: &Kernel) -> Hood {
        let low = output.min(axis) - kernel.low_reach(axis);
        let high = output.min(axis) + kernel.high_reach(axis);

        Hood {
            min:          low.max(input.min(axis)),
            max:          high.min(input.max(axis)),
            interior_min: interior.min(axis),
            interior_max: interior.max(axis)
        }
    }

    /// Move past `coordinate`
    ///
    /// The low side only moves once the window no longer hangs off the
    /// start of the input, the high side stops once it reached the end.
    #[inline(always)]
    fn advance(&mut self, coordinate: i64) {
        if coordinate >= self.interior_min {
            self.min += 1;
        }
        if coordinate < self.interior_max {
            self.max += 1;
        }
    }
}

/// Write the median of every output sample's neighborhood
///
/// The caller guarantees the output extent lies within the input extent
/// and that both views have the same component count.
/// Samples of the neighborhood outside the input are not considered,
/// so windows near the input edges hold fewer values.
///
/// `progress` is called after each output line with the fraction of
/// lines written so far.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn scan<T: VolumeElement>(
    input: &VolumeView<T>, output: &mut VolumeViewMut<T>, kernel: &Kernel,
    progress: &mut dyn FnMut(f32)
) {
    let input_extent = input.extent();
    let output_extent = output.extent();

    debug_assert!(input_extent.contains(&output_extent));
    debug_assert_eq!(input.components(), output.components());

    let interior = interior_extent(&input_extent, kernel);
    let components = output.components();
    let data = input.data();
    let inc0 = input.increments()[0];

    let mut maintainer = RunningMedian::new(kernel.clipped_capacity(&input_extent));

    let start = |axis: usize| Hood::start(axis, &output_extent, &input_extent, &interior, kernel);

    let dims = output_extent.dimensions();
    let lines = (dims[1] * dims[2]).max(1) as f32;
    let mut lines_done = 0_usize;

    let mut hood2 = start(2);

    for z in output_extent.min(2)..=output_extent.max(2) {
        let mut hood1 = start(1);

        for y in output_extent.min(1)..=output_extent.max(1) {
            let mut hood0 = start(0);

            for x in output_extent.min(0)..=output_extent.max(0) {
                for c in 0..components {
                    maintainer.reset();

                    for hz in hood2.min..=hood2.max {
                        for hy in hood1.min..=hood1.max {
                            let mut offset = input.offset([hood0.min, hy, hz], c);

                            for _ in hood0.min..=hood0.max {
                                maintainer.insert(data[offset].to_f64());
                                offset += inc0;
                            }
                        }
                    }
                    output.set([x, y, z], c, maintainer.value());
                }
                hood0.advance(x);
            }
            hood1.advance(y);

            lines_done += 1;
            progress(lines_done as f32 / lines);
        }
        hood2.advance(z);
    }
}
