use criterion::{criterion_group, criterion_main, Criterion};

use lzma_rc::{Prob, RangeDecoder, RangeEncoder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NUM_BITS: usize = 1 << 20;
const NUM_CONTEXTS: usize = 16;

fn make_bits() -> Vec<(usize, u32)> {
    let mut rng = StdRng::seed_from_u64(0xc0de);
    (0..NUM_BITS)
        .map(|_| {
            let ctx = rng.gen_range(0, NUM_CONTEXTS);
            let bit = rng.gen_bool(0.05 + 0.05 * ctx as f64) as u32;
            (ctx, bit)
        })
        .collect()
}

fn encode_bits(bits: &[(usize, u32)]) -> Vec<u8> {
    let mut probs = vec![Prob::default(); NUM_CONTEXTS];
    let mut buf = Vec::new();
    {
        let mut enc = RangeEncoder::new(&mut buf);
        for &(ctx, bit) in bits {
            enc.encode_bit(bit, &mut probs[ctx]).unwrap();
        }
        enc.flush().unwrap();
    }
    buf
}

fn decode_bits(coded: &[u8], bits: &[(usize, u32)]) {
    let mut probs = vec![Prob::default(); NUM_CONTEXTS];
    let mut dec = RangeDecoder::new(coded).unwrap();
    for &(ctx, _) in bits {
        dec.decode_bit(&mut probs[ctx]).unwrap();
    }
}

pub fn run_benchmark(c: &mut Criterion) {
    let bits = make_bits();
    let coded = encode_bits(&bits);

    c.bench_function("encode 1Mbit", |b| b.iter(|| encode_bits(&bits)));
    c.bench_function("decode 1Mbit", |b| b.iter(|| decode_bits(&coded, &bits)));
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = run_benchmark
}
criterion_main!(benches);
