// Randomized comparisons of every engine against direct recomputation.

use std::collections::HashSet;

use rand::prelude::*;

use mo_engine::config::{EngineConfig, Order};
use mo_engine::mo::{self, query::from_ranges, Aggregate, PathQuery, Query, TimedQuery};
use mo_engine::problems::{self, distinct::DistinctCount, frequency::WeightedMaxFrequency};
use mo_engine::tree::EulerTour;

fn configs() -> Vec<EngineConfig> {
    let mut configs = vec![];
    for order in [Order::Snake, Order::Hilbert] {
        for block_len in [None, Some(1), Some(2), Some(7), Some(1000)] {
            configs.push(EngineConfig { order, block_len });
        }
    }
    configs
}

fn random_ranges(rng: &mut StdRng, n: usize, m: usize) -> Vec<(usize, usize)> {
    (0..m)
        .map(|_| {
            let l = rng.random_range(1..=n);
            let r = rng.random_range(l..=n);
            (l, r)
        })
        .collect()
}

fn distinct_naive(xs: &[u32]) -> u32 {
    xs.iter().collect::<HashSet<_>>().len() as u32
}

#[test]
fn distinct_is_independent_of_order_and_blocks() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0001);
    for _ in 0..20 {
        let n = rng.random_range(1..60);
        let k = rng.random_range(1..8);
        let xs: Vec<u32> = (0..n).map(|_| rng.random_range(0..k)).collect();
        let ranges = random_ranges(&mut rng, n, 50);
        let expected: Vec<u32> = ranges
            .iter()
            .map(|&(l, r)| distinct_naive(&xs[l - 1..r]))
            .collect();

        for config in configs() {
            let mut queries = from_ranges(ranges.iter().copied());
            queries.shuffle(&mut rng);
            let got = mo::solve(&xs, &queries, DistinctCount::new(k as usize), &config).unwrap();
            assert_eq!(got, expected, "{config:?}");
        }
    }
}

#[test]
fn window_agrees_with_rebuild_on_random_walks() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0002);
    let n = 40;
    let xs: Vec<u32> = (0..n).map(|_| rng.random_range(0..5)).collect();
    let mut window = mo::Window::new(DistinctCount::new(5));
    for (l, r) in random_ranges(&mut rng, n, 200) {
        window.move_to(&xs, l, r);
        let fresh = window.rebuild(&xs, DistinctCount::new(5));
        assert_eq!(window.answer(&()), fresh.answer(&()));
        assert_eq!(window.answer(&()), distinct_naive(&xs[l - 1..r]));
    }
}

#[test]
fn rollback_matches_naive_max_frequency() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0003);
    for _ in 0..20 {
        let n = rng.random_range(1..80);
        let k = rng.random_range(1..6);
        let xs: Vec<u32> = (0..n).map(|_| rng.random_range(0..k)).collect();
        let ranges = random_ranges(&mut rng, n, 60);
        let expected: Vec<i64> = ranges
            .iter()
            .map(|&(l, r)| {
                (0..k)
                    .map(|v| xs[l - 1..r].iter().filter(|&&x| x == v).count() as i64)
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for config in configs() {
            let mut queries = from_ranges(ranges.iter().copied());
            queries.shuffle(&mut rng);
            let agg = WeightedMaxFrequency::frequency(k as usize);
            let got = mo::solve_rollback(&xs, &queries, agg, &config).unwrap();
            assert_eq!(got, expected, "{config:?}");
        }
    }
}

#[test]
fn timeline_matches_replayed_arrays() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0004);
    for _ in 0..20 {
        let n = rng.random_range(1..40);
        let k = 6;
        let base: Vec<u32> = (0..n).map(|_| rng.random_range(0..k)).collect();

        let mut updates = vec![];
        let mut queries = vec![];
        let mut expected = vec![];
        let mut current = base.clone();
        for _ in 0..80 {
            if rng.random_bool(0.4) {
                let p = rng.random_range(1..=n);
                let v = rng.random_range(0..k);
                current[p - 1] = v;
                updates.push((p, v));
            } else {
                let l = rng.random_range(1..=n);
                let r = rng.random_range(l..=n);
                let query = Query::new(queries.len(), l, r);
                queries.push(TimedQuery {
                    query,
                    time: updates.len(),
                });
                expected.push(distinct_naive(&current[l - 1..r]));
            }
        }
        let mods = mo::modifications(&base, &updates).unwrap();

        for config in configs() {
            let agg = DistinctCount::new(k as usize);
            let got = mo::solve_timeline(&base, &mods, &queries, agg, &config).unwrap();
            assert_eq!(got, expected, "{config:?}");
        }
    }
}

fn path_nodes(tour: &EulerTour, mut u: u32, mut v: u32) -> Vec<u32> {
    let mut nodes = vec![];
    while !tour.is_ancestor(u, v) {
        nodes.push(u);
        u = tour.parent[u as usize];
    }
    while v != u {
        nodes.push(v);
        v = tour.parent[v as usize];
    }
    nodes.push(u);
    nodes
}

#[test]
fn tree_paths_match_naive_and_are_symmetric() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0005);
    for _ in 0..20 {
        let n = rng.random_range(1..40);
        let k = rng.random_range(1..6);
        let values: Vec<u32> = (0..n).map(|_| rng.random_range(0..k)).collect();

        // random labels on a random recursive tree
        let mut label: Vec<u32> = (0..n as u32).collect();
        label.shuffle(&mut rng);
        let mut edges: Vec<(u32, u32)> = (1..n)
            .map(|v| (label[rng.random_range(0..v)], label[v]))
            .collect();
        edges.shuffle(&mut rng);
        let tour = EulerTour::new(n, &edges, 0).unwrap();

        let mut queries = vec![];
        for _ in 0..60 {
            let u = rng.random_range(0..n as u32);
            let v = rng.random_range(0..n as u32);
            queries.push(PathQuery::new(queries.len(), u, v));
            queries.push(PathQuery::new(queries.len(), v, u));
        }

        for config in configs() {
            let agg = DistinctCount::new(k as usize);
            let got = mo::solve_tree_path(tour.clone(), values.clone(), &queries, agg, &config)
                .unwrap();
            for pair in got.chunks(2) {
                assert_eq!(pair[0], pair[1]);
            }
            for q in &queries {
                let on_path: Vec<u32> = path_nodes(&tour, q.u, q.v)
                    .into_iter()
                    .map(|u| values[u as usize])
                    .collect();
                assert_eq!(got[q.id], distinct_naive(&on_path), "path {} {}", q.u, q.v);
            }
        }
    }
}

#[test]
fn cross_pairs_driver_matches_naive() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0006);
    let n = 30;
    let xs: Vec<i64> = (0..n).map(|_| rng.random_range(-3..3)).collect();

    let mut input = format!("{n}\n");
    for x in &xs {
        input += &format!("{x} ");
    }
    let mut quads = vec![];
    for _ in 0..40 {
        let mut cut: Vec<usize> = (0..4).map(|_| rng.random_range(1..=n)).collect();
        cut.sort_unstable();
        // force r1 < l2
        if cut[1] == cut[2] {
            continue;
        }
        quads.push((cut[0], cut[1], cut[2], cut[3]));
    }
    input += &format!("\n{}\n", quads.len());
    for &(l1, r1, l2, r2) in &quads {
        input += &format!("{l1} {r1} {l2} {r2}\n");
    }

    let mut out = vec![];
    problems::pairs::run_cross(input.as_bytes(), &mut out, &EngineConfig::default()).unwrap();
    let got: Vec<i64> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| line.parse().unwrap())
        .collect();

    let expected: Vec<i64> = quads
        .iter()
        .map(|&(l1, r1, l2, r2)| {
            let mut c = 0;
            for i in l1..=r1 {
                for j in l2..=r2 {
                    c += (xs[i - 1] == xs[j - 1]) as i64;
                }
            }
            c
        })
        .collect();
    assert_eq!(got, expected);
}

#[test]
fn socks_driver_matches_naive() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0007);
    let n = 25;
    let xs: Vec<i64> = (0..n).map(|_| rng.random_range(0..4)).collect();
    let ranges = random_ranges(&mut rng, n, 30);

    let mut input = format!("{n}\n");
    for x in &xs {
        input += &format!("{x} ");
    }
    input += &format!("\n{}\n", ranges.len());
    for &(l, r) in &ranges {
        input += &format!("{l} {r}\n");
    }

    let config = EngineConfig {
        order: Order::Hilbert,
        block_len: None,
    };
    let mut out = vec![];
    problems::pairs::run_socks(input.as_bytes(), &mut out, &config).unwrap();
    let out = String::from_utf8(out).unwrap();

    for (line, &(l, r)) in out.lines().zip(&ranges) {
        let w = &xs[l - 1..r];
        let mut equal = 0;
        for i in 0..w.len() {
            for j in i + 1..w.len() {
                equal += (w[i] == w[j]) as u64;
            }
        }
        let total = (w.len() * w.len().saturating_sub(1) / 2) as u64;
        let expected = if equal == 0 {
            "0/1".to_owned()
        } else {
            let g = (1..=equal).rev().find(|g| equal % g == 0 && total % g == 0).unwrap();
            format!("{}/{}", equal / g, total / g)
        };
        assert_eq!(line, expected, "[{l}, {r}]");
    }
    assert_eq!(out.lines().count(), ranges.len());
}
