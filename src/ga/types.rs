//! Individual encoding.
//!
//! An [`Individual`] is a fixed-length bit vector over the graph's vertices:
//! bit `i` set means vertex `i` belongs to the candidate clique. Once formed,
//! an individual is never modified; operators build new ones.

use rand::Rng;
use std::fmt;

/// Clique size of a valid selection, or `0` for an invalid one.
pub type Fitness = usize;

/// A candidate clique encoded as one bit per vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    genes: Box<[bool]>,
}

impl Individual {
    /// Wraps an existing bit buffer.
    pub fn new(genes: impl Into<Box<[bool]>>) -> Self {
        Self {
            genes: genes.into(),
        }
    }

    /// Draws each of `len` bits independently and uniformly from `{0, 1}`.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self::new((0..len).map(|_| rng.random_bool(0.5)).collect::<Vec<_>>())
    }

    /// Builds an individual of length `len` with exactly `vertices` selected.
    ///
    /// # Panics
    /// Panics if a vertex is `>= len`.
    pub fn from_vertices(len: usize, vertices: &[usize]) -> Self {
        let mut genes = vec![false; len];
        for &v in vertices {
            genes[v] = true;
        }
        Self::new(genes)
    }

    /// Number of bits, always equal to the graph's vertex count.
    #[inline]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` for a zero-length individual.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The raw bit buffer.
    #[inline]
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Indices of the selected vertices, ascending.
    pub fn selected_vertices(&self) -> Vec<usize> {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &bit)| bit.then_some(i))
            .collect()
    }

    /// Number of selected vertices.
    pub fn selected_count(&self) -> usize {
        self.genes.iter().filter(|&&bit| bit).count()
    }
}

impl fmt::Display for Individual {
    /// Renders as a bit string, e.g. `1110`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in self.genes.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl From<Vec<bool>> for Individual {
    fn from(genes: Vec<bool>) -> Self {
        Self::new(genes)
    }
}

/// Builds a population of `size` random individuals of length `len`.
///
/// Every bit of every individual is an independent fair coin flip drawn from
/// `rng`, in population order. No clique validation happens here; the
/// all-zero individual is a legitimate member.
pub fn random_population<R: Rng>(size: usize, len: usize, rng: &mut R) -> Vec<Individual> {
    (0..size).map(|_| Individual::random(len, rng)).collect()
}
