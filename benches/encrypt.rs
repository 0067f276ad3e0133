// benches/encrypt.rs
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use notecrypt::aliases::Note16;
use notecrypt::encryptor::encrypt_stream;
use notecrypt::{derive_key, encrypt_buffer};
use std::hint::black_box;
use std::io::Cursor;

const SIGNATURE: &str = "0x1111111111111111111111111111111111111111111111111111111111111111";

fn bench_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("encrypt");
    let note = Note16::new([0x42; 16]);
    let key = derive_key(SIGNATURE).unwrap();

    let sizes = [1, 1024, 64 * 1024, 1024 * 1024, 10 * 1024 * 1024];

    for &size in &sizes {
        let input = vec![0x41u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("buffer", format_size(size)), &size, |b, _| {
            b.iter(|| black_box(encrypt_buffer(black_box(&input), &note, SIGNATURE).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("stream", format_size(size)), &size, |b, _| {
            b.iter(|| {
                let mut dst = Vec::with_capacity(size + 16);
                encrypt_stream(
                    Cursor::new(black_box(&input)),
                    &mut dst,
                    &note,
                    &key,
                    notecrypt::consts::STREAM_CHUNK_SIZE,
                )
                .unwrap();
                black_box(dst)
            });
        });
    }

    group.finish();
}

fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

criterion_group!(benches, bench_encrypt);
criterion_main!(benches);
