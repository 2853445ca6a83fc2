/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Median filtering of volumes
//!
//! Every output sample becomes the median of the input samples in a box
//! shaped neighborhood around it. Near the volume edges the part of the
//! box outside the input is ignored, so the median is taken over fewer
//! samples there. For an even number of samples the upper of the two
//! middle values is used.
//!
//! [`median_3d`] works on borrowed views and is the building block,
//! [`Median3D`] runs it over a whole [`Volume`], optionally on multiple threads.
//!
//! # Example
//! ```
//! use zune_volume::volume::Volume;
//! use zune_volume::traits::OperationsTrait;
//! use zune_volumeprocs::median::Median3D;
//!
//! let mut volume = Volume::from_vec(vec![5_u8, 1, 4, 2, 8], [5, 1, 1], 1).unwrap();
//! Median3D::new([3, 1, 1]).execute(&mut volume).unwrap();
//!
//! assert_eq!(volume.as_slice::<u8>().unwrap(), &[5, 4, 2, 4, 8]);
//! ```
use zune_volume::element::{VolumeData, VolumeElement};
use zune_volume::errors::VolumeErrors;
use zune_volume::traits::OperationsTrait;
use zune_volume::view::{VolumeView, VolumeViewMut};
use zune_volume::volume::Volume;
use zune_volume_core::element_type::ElementType;
use zune_volume_core::extent::Extent;
use zune_volume_core::log::{trace, warn};
use zune_volume_core::options::MedianOptions;

use crate::kernel::{output_extent, required_input_extent, Kernel};

pub mod maintainer;
mod scanner;

pub use maintainer::RunningMedian;

fn check_views<T: VolumeElement>(
    input: &VolumeView<T>, output: &VolumeViewMut<T>
) -> Result<(), VolumeErrors> {
    if input.components() != output.components() {
        return Err(VolumeErrors::ComponentsMisMatch(
            input.components(),
            output.components()
        ));
    }
    if output.extent().is_empty() {
        return Err(VolumeErrors::EmptyExtent(output.extent()));
    }
    if !input.extent().contains(&output.extent()) {
        return Err(VolumeErrors::ExtentNotCovered(
            output.extent(),
            input.extent()
        ));
    }
    Ok(())
}

/// Median filter `input` into `output`
///
/// Every sample of the output extent is written, the output extent must be
/// inside the input extent. Neighborhoods are clipped to the input extent,
/// so pass a larger input than output to use real samples across the
/// output edges.
///
/// # Arguments
/// - input: Samples to filter
/// - output: Where to write medians, must have as many components as the input
/// - kernel: Neighborhood shape
///
/// # Errors
/// - The component counts differ
/// - The output extent is empty or not covered by the input extent
pub fn median_3d<T: VolumeElement>(
    input: &VolumeView<T>, output: &mut VolumeViewMut<T>, kernel: &Kernel
) -> Result<(), VolumeErrors> {
    median_3d_with_progress(input, output, kernel, &mut |_: f32| ())
}

/// Same as [`median_3d`] but calls `progress` with the fraction of
/// output lines written after each line
///
/// The reported fractions are increasing and the last one is `1.0`.
///
/// # Errors
/// See [`median_3d`]
pub fn median_3d_with_progress<T: VolumeElement>(
    input: &VolumeView<T>, output: &mut VolumeViewMut<T>, kernel: &Kernel,
    progress: &mut dyn FnMut(f32)
) -> Result<(), VolumeErrors> {
    check_views(input, output)?;

    trace!(
        "Median 3D of {} {} into {} with kernel {:?} anchored at {:?}",
        T::ELEMENT_TYPE,
        input.extent(),
        output.extent(),
        kernel.size(),
        kernel.middle()
    );
    scanner::scan(input, output, kernel, progress);
    Ok(())
}

/// Replace every sample of a volume by the median of its neighborhood
///
/// When boundary handling is disabled, samples whose neighborhood does not
/// fit inside the volume are dropped and the volume shrinks accordingly.
#[derive(Clone, Debug, Default)]
pub struct Median3D {
    options: MedianOptions
}

impl Median3D {
    /// Create a median filter with a centered kernel of `kernel_size`
    /// and boundary handling on
    pub fn new(kernel_size: [usize; 3]) -> Median3D {
        Median3D {
            options: MedianOptions::new(kernel_size)
        }
    }

    pub fn from_options(options: MedianOptions) -> Median3D {
        Median3D { options }
    }

    pub const fn options(&self) -> &MedianOptions {
        &self.options
    }

    /// Run the filter, calling `progress` with a fraction in `[0, 1]`
    /// as lines are written
    ///
    /// With multiple threads the workers share one line count, so the
    /// fraction covers the whole volume and only reaches `1.0` once every
    /// worker is done. Calls are serialized but may come from any worker.
    ///
    /// # Errors
    /// - The kernel configuration is invalid
    /// - The kernel is larger than the volume and boundary handling is off
    pub fn execute_with_progress(
        &self, volume: &mut Volume, progress: &mut (dyn FnMut(f32) + Send)
    ) -> Result<(), VolumeErrors> {
        let element_type = volume.element_type();

        if !self.supported_types().contains(&element_type) {
            return Err(VolumeErrors::OperationNotImplemented(
                self.name(),
                element_type
            ));
        }
        self.filter(volume, progress)
    }

    fn threads(&self) -> usize {
        match self.options.get_threads() {
            0 => std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get),
            threads => threads
        }
    }

    fn filter(
        &self, volume: &mut Volume, progress: &mut (dyn FnMut(f32) + Send)
    ) -> Result<(), VolumeErrors> {
        let kernel = Kernel::from_options(&self.options)?;
        let handle_boundaries = self.options.get_handle_boundaries();

        let whole = volume.extent();
        let output = output_extent(&whole, &kernel, handle_boundaries);

        if output.is_empty() {
            return Err(VolumeErrors::EmptyExtent(output));
        }
        let (required, advisory) = required_input_extent(&output, &kernel, &whole, handle_boundaries);

        if !advisory.is_clean() {
            warn!(
                "Median 3D needs {required} but the volume only covers {whole}, \
                 missing sides low: {:?} high: {:?}",
                advisory.low,
                advisory.high
            );
        }
        let threads = self.threads();
        let mut data = VolumeData::zeroed(volume.element_type(), output.len() * volume.components());

        match volume.element_type() {
            ElementType::U8 => run::<u8>(volume, &mut data, output, &kernel, threads, progress),
            ElementType::I8 => run::<i8>(volume, &mut data, output, &kernel, threads, progress),
            ElementType::U16 => run::<u16>(volume, &mut data, output, &kernel, threads, progress),
            ElementType::I16 => run::<i16>(volume, &mut data, output, &kernel, threads, progress),
            ElementType::U32 => run::<u32>(volume, &mut data, output, &kernel, threads, progress),
            ElementType::I32 => run::<i32>(volume, &mut data, output, &kernel, threads, progress),
            ElementType::U64 => run::<u64>(volume, &mut data, output, &kernel, threads, progress),
            ElementType::I64 => run::<i64>(volume, &mut data, output, &kernel, threads, progress),
            ElementType::F32 => run::<f32>(volume, &mut data, output, &kernel, threads, progress),
            ElementType::F64 => run::<f64>(volume, &mut data, output, &kernel, threads, progress)
        }?;

        volume.set_data(data, output)
    }
}

fn run<T: VolumeElement>(
    volume: &Volume, data: &mut VolumeData, output_extent: Extent, kernel: &Kernel,
    threads: usize, progress: &mut (dyn FnMut(f32) + Send)
) -> Result<(), VolumeErrors> {
    let input = volume.view::<T>()?;
    let found = data.element_type();
    let slice = T::storage_mut(data).ok_or(VolumeErrors::ElementTypeMismatch(T::ELEMENT_TYPE, found))?;

    let mut output = VolumeViewMut::new(slice, output_extent, volume.components())?;
    check_views(&input, &output)?;

    #[cfg(feature = "threads")]
    {
        if threads > 1 {
            trace!("Running median 3D multithreaded mode with {threads} threads");

            let dims = output.extent().dimensions();
            #[allow(clippy::cast_precision_loss)]
            let lines = (dims[1] * dims[2]) as f32;

            // lines finished by every worker, and the callback they share
            let shared = std::sync::Mutex::new((0_usize, progress));
            let (input, shared) = (&input, &shared);

            std::thread::scope(|s| {
                for mut piece in output.split(threads) {
                    s.spawn(move || {
                        let mut report = |_: f32| {
                            if let Ok(mut guard) = shared.lock() {
                                guard.0 += 1;
                                #[allow(clippy::cast_precision_loss)]
                                let done = guard.0 as f32 / lines;
                                (guard.1)(done);
                            }
                        };
                        scanner::scan(input, &mut piece, kernel, &mut report);
                    });
                }
            });
            return Ok(());
        }
    }
    #[cfg(not(feature = "threads"))]
    {
        let _ = threads;
    }
    trace!("Running median 3D single threaded mode");

    scanner::scan(&input, &mut output, kernel, progress);
    Ok(())
}

impl OperationsTrait for Median3D {
    fn name(&self) -> &'static str {
        "Median 3D"
    }

    fn execute_impl(&self, volume: &mut Volume) -> Result<(), VolumeErrors> {
        self.filter(volume, &mut |_: f32| ())
    }

    fn supported_types(&self) -> &'static [ElementType] {
        &ElementType::ALL
    }
}
