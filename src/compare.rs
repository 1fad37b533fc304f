//! Cross-checking a GA result against exact maximum cliques.
//!
//! The comparison is diagnostic only and never fails: disagreement is a
//! reported outcome. It checks the size of the selected set first, then
//! compares it element-wise against the first exact clique in enumeration
//! order. A selection of maximum size agrees when it is any of the listed
//! maximum cliques; the element-wise position is kept as a diagnostic.

use crate::ga::Individual;
use crate::oracle::ExactCliques;
use std::fmt;
use tracing::warn;

/// Outcome of comparing a GA result with the exact answer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// The selected set is one of the maximum cliques.
    Agree {
        /// First position (in ascending vertex order) where the set differs
        /// from the first exact clique; `None` when it is that clique.
        first_mismatch: Option<usize>,
    },

    /// The selected set's size differs from the maximum clique size.
    SizeMismatch {
        /// Number of vertices the GA selected.
        found: usize,
        /// Maximum clique size.
        expected: usize,
    },

    /// Sizes match but the selected set is not any of the maximum cliques.
    MemberMismatch {
        /// First position (in ascending vertex order) where the set differs
        /// from the first exact clique.
        position: usize,
    },
}

impl Verdict {
    /// Returns `true` only for [`Verdict::Agree`].
    pub fn is_agreement(&self) -> bool {
        matches!(self, Verdict::Agree { .. })
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Agree {
                first_mismatch: None,
            } => f.write_str("cliques match"),
            Verdict::Agree {
                first_mismatch: Some(position),
            } => write!(
                f,
                "cliques match: another maximum clique, differing from the first \
                 exact clique at position {position}"
            ),
            Verdict::SizeMismatch { found, expected } => {
                write!(f, "clique size does not match: found {found}, expected {expected}")
            }
            Verdict::MemberMismatch { position } => write!(
                f,
                "clique differs from every maximum clique; first difference at position {position}"
            ),
        }
    }
}

/// Full comparison report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    /// Vertices selected by the GA, ascending.
    pub found: Vec<usize>,

    /// The exact clique compared against.
    pub reference: Vec<usize>,

    /// Agreement verdict.
    pub verdict: Verdict,
}

/// Compares the GA's best individual with the exact maximum cliques.
///
/// # Examples
///
/// ```
/// use clique_ga::compare::compare;
/// use clique_ga::ga::Individual;
/// use clique_ga::oracle::ExactCliques;
///
/// let exact = ExactCliques::new(vec![vec![0, 1, 2]], 3).unwrap();
/// let best = Individual::from_vertices(4, &[0, 1, 2]);
/// assert!(compare(&best, &exact).verdict.is_agreement());
/// ```
pub fn compare(best: &Individual, exact: &ExactCliques) -> Comparison {
    let found = best.selected_vertices();
    let reference = exact.first().to_vec();
    let expected = exact.max_size();

    let verdict = if found.len() != expected {
        Verdict::SizeMismatch {
            found: found.len(),
            expected,
        }
    } else {
        let first_mismatch = found.iter().zip(&reference).position(|(a, b)| a != b);
        match first_mismatch {
            None => Verdict::Agree {
                first_mismatch: None,
            },
            Some(_) if exact.contains(&found) => Verdict::Agree { first_mismatch },
            Some(position) => Verdict::MemberMismatch { position },
        }
    };

    if !verdict.is_agreement() {
        warn!(?found, ?reference, %verdict, "ga result disagrees with exact cliques");
    }

    Comparison {
        found,
        reference,
        verdict,
    }
}
