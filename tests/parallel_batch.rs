#![cfg(feature = "parallel")]

use runrepair::{solve, solve_batch, Instance};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn parallel_batch_matches_serial_solves() {
    let mut rng = StdRng::seed_from_u64(11);
    let instances: Vec<Instance> = (0..200)
        .map(|_| {
            let n = rng.gen_range(1..80);
            let k = rng.gen_range(1..8);
            let pattern: String = (0..n)
                .map(|_| ['0', '1', '?', '?'][rng.gen_range(0..4)])
                .collect();
            let reference: String = (0..n)
                .map(|_| if rng.gen_bool(0.5) { '1' } else { '0' })
                .collect();
            Instance::parse(n, k, &pattern, &reference).unwrap()
        })
        .collect();
    let batch = solve_batch(&instances);
    let serial: Vec<_> = instances.iter().map(solve).collect();
    assert_eq!(batch, serial);
}
