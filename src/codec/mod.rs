//! # Permutation Codec
//!
//! Tours are permutations of `{0..n-1}`. Crossing over or mutating permutations
//! directly tends to produce duplicates, so every individual also carries a rank
//! encoding in which each position is independent of the others:
//!
//! `encoded[i]` is the number of earlier entries `chromosome[j]` (`j < i`) that are
//! smaller than `chromosome[i]`, hence always within `[0, i]`.
//!
//! Any sequence satisfying that bound decodes to exactly one permutation and every
//! permutation encodes to exactly one such sequence, so operators that keep each
//! `encoded[i]` within `[0, i]` can never produce an invalid tour.
//!
//! ```rust
//! use genalg_tsp::codec::{encode, Decoder};
//!
//! let tour = vec![2, 0, 3, 1];
//! let encoded = encode(&tour);
//! assert_eq!(encoded, vec![0, 0, 2, 1]);
//!
//! let mut decoder = Decoder::new();
//! assert_eq!(decoder.decode(&encoded), tour);
//! ```

pub mod order_statistics;

pub use order_statistics::OrderStatisticsTree;

/// Encodes a permutation into its rank form.
///
/// Runs in `O(n^2)`; encoding is rare compared to decoding.
pub fn encode(chromosome: &[usize]) -> Vec<usize> {
    chromosome
        .iter()
        .enumerate()
        .map(|(i, &value)| chromosome[..i].iter().filter(|&&v| v < value).count())
        .collect()
}

/// Decodes a rank sequence with a linear scan per position, in `O(n^2)`.
///
/// Kept as the reference the accelerated [`Decoder`] is checked against.
/// Every `encoded[i]` must lie within `[0, i]`.
pub fn decode_reference(encoded: &[usize]) -> Vec<usize> {
    let n = encoded.len();
    let mut chromosome = vec![0; n];
    let mut used = vec![false; n];

    for i in (0..n).rev() {
        let mut remaining = encoded[i];
        let mut t = 0;
        loop {
            if !used[t] {
                if remaining == 0 {
                    break;
                }
                remaining -= 1;
            }
            t += 1;
        }
        chromosome[i] = t;
        used[t] = true;
    }

    chromosome
}

/// Reusable decoding context backed by an [`OrderStatisticsTree`].
///
/// Decoding runs in `O(n log n)`. The tree is scratch space valid for one call at a
/// time, so concurrent decoders need separate instances.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    index: OrderStatisticsTree,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a rank sequence into a freshly allocated permutation.
    pub fn decode(&mut self, encoded: &[usize]) -> Vec<usize> {
        let mut chromosome = vec![0; encoded.len()];
        self.decode_into(encoded, &mut chromosome);
        chromosome
    }

    /// Decodes a rank sequence into `chromosome`, which must have the same length.
    ///
    /// Positions are filled from last to first: position `i` receives the
    /// `encoded[i]`-th smallest value not yet placed.
    pub fn decode_into(&mut self, encoded: &[usize], chromosome: &mut [usize]) {
        debug_assert_eq!(encoded.len(), chromosome.len());

        self.index.reset(encoded.len());
        for i in (0..encoded.len()).rev() {
            debug_assert!(encoded[i] <= i, "encoded[{}] = {} out of range", i, encoded[i]);
            let value = self.index.select(encoded[i]);
            chromosome[i] = value;
            self.index.consume(value);
        }
    }
}

/// Returns `true` when `chromosome` contains every value of `{0..n-1}` exactly once.
pub fn is_permutation(chromosome: &[usize]) -> bool {
    let mut seen = vec![false; chromosome.len()];
    chromosome.iter().all(|&v| {
        if v >= seen.len() || seen[v] {
            false
        } else {
            seen[v] = true;
            true
        }
    })
}
