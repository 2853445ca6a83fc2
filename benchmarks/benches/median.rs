use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use zune_volume::traits::OperationsTrait;
use zune_volume::volume::Volume;
use zune_volume_benches::noise_volume;
use zune_volume_core::options::MedianOptions;
use zune_volumeprocs::median::Median3D;

fn zune_median_bench(input: &Volume, options: MedianOptions) {
    let volume = Median3D::from_options(options)
        .clone_and_execute(input)
        .unwrap();
    black_box(volume);
}

fn bench_median_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("median-3d: kernel size");
    let volume = noise_volume([64, 64, 32], 42);

    group.throughput(Throughput::Elements(volume.extent().len() as u64));

    for size in [3, 5, 7] {
        let options = MedianOptions::new([size, size, size]).set_threads(1);

        group.bench_function(format!("{size}x{size}x{size}"), |b| {
            b.iter(|| zune_median_bench(&volume, options));
        });
    }
}

fn bench_median_threads(c: &mut Criterion) {
    let mut group = c.benchmark_group("median-3d: threads");
    let volume = noise_volume([128, 128, 32], 7);

    group.throughput(Throughput::Elements(volume.extent().len() as u64));

    for threads in [1, 2, 4, 0] {
        let options = MedianOptions::new([3, 3, 3]).set_threads(threads);

        group.bench_function(format!("threads={threads}"), |b| {
            b.iter(|| zune_median_bench(&volume, options));
        });
    }
}

fn bench_median_slices(c: &mut Criterion) {
    let mut group = c.benchmark_group("median-3d: per slice");
    let volume = noise_volume([256, 256, 4], 3);

    group.throughput(Throughput::Elements(volume.extent().len() as u64));

    let options = MedianOptions::new([5, 5, 1]).set_threads(1);

    group.bench_function("5x5x1", |b| {
        b.iter(|| zune_median_bench(&volume, options));
    });
}

criterion_group!(
    name=benches;
    config={
      let c = Criterion::default();
        c.measurement_time(std::time::Duration::from_secs(20))
      };
    targets=bench_median_kernels,bench_median_threads,bench_median_slices);

criterion_main!(benches);
