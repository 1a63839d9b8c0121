//! Benchmarks for the block codec hot paths and the image tiler.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use imgref::{Img, ImgVec};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rgb::RGBA8;
use zentex::{
    copy_tile, decode16_rgba, encode16, tile_count, BorderMode, DctKernel, ImageTile,
    KernelTables, TilerConfig,
};

fn textured_block(seed: u64) -> [u8; 1024] {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rgba = [0u8; 1024];
    for p in 0..256 {
        let base = ((p % 16) * 8 + (p / 16) * 4) as i32;
        rgba[p * 4] = (base + rng.gen_range(-16..16)).clamp(0, 255) as u8;
        rgba[p * 4 + 1] = (base / 2 + rng.gen_range(-16..16)).clamp(0, 255) as u8;
        rgba[p * 4 + 2] = (160 - base / 3 + rng.gen_range(-16..16)).clamp(0, 255) as u8;
        rgba[p * 4 + 3] = 255;
    }
    rgba
}

fn bench_block_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("block16");
    group.throughput(Throughput::Bytes(1024));

    let rgba = textured_block(7);
    for (name, kernel) in [
        ("float", DctKernel::FloatAan),
        ("int", DctKernel::IntegerBink2),
    ] {
        let enc_tables = KernelTables::encode(kernel, 85);
        let dec_tables = KernelTables::decode(kernel, 85);

        group.bench_with_input(BenchmarkId::new("encode", name), &rgba, |b, input| {
            let mut y = [0i16; 256];
            let mut co = [0i16; 64];
            let mut cg = [0i16; 64];
            let mut alpha = [0u8; 256];
            b.iter(|| {
                encode16(
                    &mut y,
                    &mut co,
                    &mut cg,
                    &mut alpha,
                    &enc_tables,
                    black_box(input),
                );
                black_box(y[0])
            });
        });

        let mut y = [0i16; 256];
        let mut co = [0i16; 64];
        let mut cg = [0i16; 64];
        let mut alpha = [0u8; 256];
        encode16(&mut y, &mut co, &mut cg, &mut alpha, &enc_tables, &rgba);

        group.bench_function(BenchmarkId::new("decode", name), |b| {
            let mut out = [0u8; 1024];
            b.iter(|| {
                decode16_rgba(
                    &mut out,
                    black_box(&y),
                    black_box(&co),
                    black_box(&cg),
                    &alpha,
                    &dec_tables,
                );
                black_box(out[0])
            });
        });
    }
    group.finish();
}

fn bench_tiler(c: &mut Criterion) {
    let (w, h) = (1024usize, 1024usize);
    let mut rng = StdRng::seed_from_u64(99);
    let buf: Vec<RGBA8> = (0..w * h)
        .map(|_| RGBA8::new(rng.gen(), rng.gen(), rng.gen(), 255))
        .collect();
    let img: ImgVec<RGBA8> = Img::new(buf, w, h);

    let mut group = c.benchmark_group("tiler");
    group.throughput(Throughput::Bytes((w * h * 4) as u64));
    group.bench_function("copy_all_tiles_1024", |b| {
        let cfg = TilerConfig::new(img.as_ref(), 16, 16, 0, BorderMode::ClampToEdge).unwrap();
        let (_, _, count) = tile_count(&cfg);
        let mut tile = ImageTile::alloc(&cfg);
        b.iter(|| {
            for index in 0..count {
                copy_tile(&mut tile, &cfg, index).unwrap();
            }
            black_box(tile.source_x)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_block_codec, bench_tiler);
criterion_main!(benches);
