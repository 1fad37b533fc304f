//! Bit-string variation operators.
//!
//! # Crossover
//!
//! - [`one_point_crossover`]: with probability `rate`, splice two parents at a
//!   single interior cut point; otherwise copy them.
//! - [`splice`]: the deterministic splice itself.
//!
//! # Mutation
//!
//! - [`bit_flip_mutation`]: flip each bit independently with probability `rate`.
//!
//! All operators return new individuals and leave their inputs untouched.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::types::Individual;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// One-point crossover.
///
/// With probability `rate`, draws a cut uniformly from `1..len` and returns
/// `splice(parent1, parent2, cut)`. Because the cut is never `0` or `len`,
/// each child inherits at least one bit from each parent. Otherwise returns
/// copies of the parents in order.
///
/// Exactly one uniform number is drawn for the rate check, at every rate,
/// followed by the cut draw when recombining. Individuals of length 1 have no
/// interior cut and are always copied.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn one_point_crossover<R: Rng>(
    parent1: &Individual,
    parent2: &Individual,
    rate: f64,
    rng: &mut R,
) -> (Individual, Individual) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if rng.random::<f64>() < rate && n >= 2 {
        let cut = rng.random_range(1..n);
        splice(parent1, parent2, cut)
    } else {
        (parent1.clone(), parent2.clone())
    }
}

/// Exchanges the tails of two parents at `cut`.
///
/// `child1 = parent1[..cut] ++ parent2[cut..]` and
/// `child2 = parent2[..cut] ++ parent1[cut..]`.
///
/// # Panics
/// Panics if parents have different lengths or `cut > len`.
pub fn splice(parent1: &Individual, parent2: &Individual, cut: usize) -> (Individual, Individual) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(cut <= n, "cut point {cut} exceeds length {n}");

    let (a, b) = (parent1.genes(), parent2.genes());
    let mut c1 = Vec::with_capacity(n);
    c1.extend_from_slice(&a[..cut]);
    c1.extend_from_slice(&b[cut..]);
    let mut c2 = Vec::with_capacity(n);
    c2.extend_from_slice(&b[..cut]);
    c2.extend_from_slice(&a[cut..]);

    (Individual::new(c1), Individual::new(c2))
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Bit-flip mutation.
///
/// Draws one uniform number per position, in order, and flips the bit when
/// it falls below `rate`. Unflipped positions are copied unchanged.
///
/// # Complexity
/// O(n)
pub fn bit_flip_mutation<R: Rng>(individual: &Individual, rate: f64, rng: &mut R) -> Individual {
    let genes: Vec<bool> = individual
        .genes()
        .iter()
        .map(|&bit| if rng.random::<f64>() < rate { !bit } else { bit })
        .collect();
    Individual::new(genes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ind(bits: &str) -> Individual {
        Individual::new(bits.chars().map(|c| c == '1').collect::<Vec<_>>())
    }

    #[test]
    fn test_splice_exchanges_tails() {
        let (c1, c2) = splice(&ind("11111"), &ind("00000"), 2);
        assert_eq!(c1.to_string(), "11000");
        assert_eq!(c2.to_string(), "00111");
    }

    #[test]
    fn test_crossover_rate_zero_copies_parents() {
        let (p1, p2) = (ind("1010"), ind("0101"));
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let (c1, c2) = one_point_crossover(&p1, &p2, 0.0, &mut rng);
            assert_eq!(c1, p1);
            assert_eq!(c2, p2);
        }
    }

    #[test]
    fn test_crossover_rate_one_always_mixes() {
        let (p1, p2) = (ind("111111"), ind("000000"));
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let (c1, c2) = one_point_crossover(&p1, &p2, 1.0, &mut rng);
            // Interior cut: each child has bits from both parents.
            assert!(c1.genes()[0] && !c1.genes()[5]);
            assert!(!c2.genes()[0] && c2.genes()[5]);
        }
    }

    #[test]
    fn test_crossover_single_bit_copies() {
        let (p1, p2) = (ind("1"), ind("0"));
        let mut rng = StdRng::seed_from_u64(42);
        let (c1, c2) = one_point_crossover(&p1, &p2, 1.0, &mut rng);
        assert_eq!((c1, c2), (p1, p2));
    }

    #[test]
    fn test_crossover_consumes_one_draw_at_any_rate() {
        for rate in [0.0, 0.5, 1.0] {
            let mut rng = StdRng::seed_from_u64(5);
            let mut reference = rng.clone();
            one_point_crossover(&ind("1"), &ind("0"), rate, &mut rng);
            let _: f64 = reference.random();
            assert_eq!(
                rng.random::<u64>(),
                reference.random::<u64>(),
                "rate {rate} left the stream misaligned"
            );
        }
    }

    #[test]
    fn test_mutation_rate_bounds() {
        let p = ind("110010");
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(bit_flip_mutation(&p, 0.0, &mut rng), p);
        assert_eq!(bit_flip_mutation(&p, 1.0, &mut rng).to_string(), "001101");
    }

    #[test]
    fn test_mutation_flips_exactly_drawn_positions() {
        let p = ind("1100101011");
        let rate = 0.3;
        let mut draws = StdRng::seed_from_u64(17);
        let expected_flips: Vec<bool> = (0..p.len())
            .map(|_| draws.random::<f64>() < rate)
            .collect();

        let mut rng = StdRng::seed_from_u64(17);
        let child = bit_flip_mutation(&p, rate, &mut rng);
        for i in 0..p.len() {
            assert_eq!(child.genes()[i] != p.genes()[i], expected_flips[i]);
        }
    }

    proptest! {
        #[test]
        fn prop_splice_is_valid((a, b, cut) in (1usize..32).prop_flat_map(|n| (
            prop::collection::vec(any::<bool>(), n),
            prop::collection::vec(any::<bool>(), n),
            0..=n,
        ))) {
            let n = a.len();
            let (p1, p2) = (Individual::new(a), Individual::new(b));
            let (c1, c2) = splice(&p1, &p2, cut);
            prop_assert_eq!(c1.len(), n);
            prop_assert_eq!(c2.len(), n);
            for i in 0..n {
                let (from1, from2) = if i < cut { (&p1, &p2) } else { (&p2, &p1) };
                prop_assert_eq!(c1.genes()[i], from1.genes()[i]);
                prop_assert_eq!(c2.genes()[i], from2.genes()[i]);
            }
        }

        #[test]
        fn prop_crossover_children_are_splices(
            (a, b) in (1usize..32).prop_flat_map(|n| (
                prop::collection::vec(any::<bool>(), n),
                prop::collection::vec(any::<bool>(), n),
            )),
            seed in any::<u64>(),
        ) {
            let (p1, p2) = (Individual::new(a), Individual::new(b));
            let mut rng = StdRng::seed_from_u64(seed);
            let children = one_point_crossover(&p1, &p2, 0.9, &mut rng);
            let n = p1.len();
            prop_assert!((0..=n).any(|cut| splice(&p1, &p2, cut) == children));
        }

        #[test]
        fn prop_mutation_preserves_length(
            bits in prop::collection::vec(any::<bool>(), 0..64),
            rate in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let p = Individual::new(bits);
            let mut rng = StdRng::seed_from_u64(seed);
            prop_assert_eq!(bit_flip_mutation(&p, rate, &mut rng).len(), p.len());
        }
    }
}
