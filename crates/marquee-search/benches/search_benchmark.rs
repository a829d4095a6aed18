// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use marquee_model::grid::{SeatBlock, SeatGrid};
use marquee_model::index::{ColIndex, RowIndex};
use marquee_model::policy::{SeatingPolicy, VenueDimensions};
use marquee_model::prefix::PrefixSums;
use marquee_model::weights::WeightMatrix;
use marquee_search::decomposition::RangeDecomposer;
use marquee_search::window::find_best_window;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

const VENUES: [(usize, usize); 3] = [(10, 20), (26, 60), (26, 400)];

/// A venue with roughly a third of its rows scattered with small parties.
fn fragmented_venue(rows: usize, cols: usize, seed: u64) -> (SeatGrid, PrefixSums<u64>) {
    let dims = VenueDimensions::new(rows, cols);
    let weights = WeightMatrix::compute(dims, &SeatingPolicy::default())
        .expect("benchmark venue must have valid weights");
    let prefix = PrefixSums::build(&weights).expect("benchmark venue must have valid sums");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = SeatGrid::new(dims, 1);
    for _ in 0..rows * cols / 12 {
        let row = RowIndex::new(rng.gen_range(0..rows));
        let start = rng.gen_range(0..cols);
        let len = rng.gen_range(1..=(cols - start).min(3));
        let block = SeatBlock::with_len(row, ColIndex::new(start), len);
        if block
            .columns()
            .iter()
            .all(|col| grid.is_empty_seat(row, ColIndex::new(col)))
        {
            grid.mark_assigned(block);
        }
    }
    (grid, prefix)
}

fn bench_single_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_window");
    for (rows, cols) in VENUES {
        let (grid, prefix) = fragmented_venue(rows, cols, 7);
        group.throughput(Throughput::Elements((rows * cols) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", rows, cols)),
            &(grid, prefix),
            |b, (grid, prefix)| b.iter(|| black_box(find_best_window(grid, prefix, black_box(4)))),
        );
    }
    group.finish();
}

fn bench_multi_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_range");
    for (rows, cols) in VENUES {
        let (grid, prefix) = fragmented_venue(rows, cols, 11);
        let n = (grid.empty_seats() / 2).max(1);
        let mut decomposer = RangeDecomposer::preallocated(rows * cols / 2);
        group.throughput(Throughput::Elements((rows * cols) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", rows, cols)),
            &(grid, prefix),
            |b, (grid, prefix)| b.iter(|| black_box(decomposer.decompose(grid, prefix, black_box(n)))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_single_window, bench_multi_range);
criterion_main!(benches);
