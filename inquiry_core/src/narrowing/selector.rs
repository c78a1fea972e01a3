//! Entropy-based attribute selection.

use word_bank::Item;

/// Entropies closer than this are treated as equal and coverage breaks
/// the tie; floating-point entropy rarely matches exactly.
pub const ENTROPY_TOLERANCE: f64 = 1e-9;

/// Binary entropy of a split probability in bits.
pub fn binary_entropy(p: f64) -> f64 {
    -(p * p.log2() + (1.0 - p) * (1.0 - p).log2())
}

/// Whether a candidate split beats the incumbent best.
///
/// Maximum entropy wins. Within the tolerance the larger coverage (the
/// smaller branch of the split) wins, which bounds worst-case remaining
/// depth when several attributes split equally well.
fn better_split(entropy: f64, coverage: usize, best_entropy: f64, best_coverage: usize) -> bool {
    if (entropy - best_entropy).abs() <= ENTROPY_TOLERANCE {
        coverage > best_coverage
    } else {
        entropy > best_entropy
    }
}

/// Pick the most informative next attribute to ask about.
///
/// Attributes that hold for all candidates or none are skipped: asking
/// them cannot split the set. Returns `None` when the candidate set
/// cannot be narrowed further or nothing eligible splits it, signalling
/// that no further discriminating question is available.
pub fn pick_next_attribute<'a>(items: &[Item], eligible: &'a [String]) -> Option<&'a str> {
    if items.len() <= 1 {
        return None;
    }

    let n = items.len();
    let mut best: Option<(&str, f64, usize)> = None;

    for attribute in eligible {
        let t = items.iter().filter(|item| item.attribute(attribute)).count();
        if t == 0 || t == n {
            continue;
        }

        let entropy = binary_entropy(t as f64 / n as f64);
        let coverage = t.min(n - t);

        let take = match best {
            None => true,
            Some((_, best_entropy, best_coverage)) => {
                better_split(entropy, coverage, best_entropy, best_coverage)
            }
        };
        if take {
            best = Some((attribute, entropy, coverage));
        }
    }

    best.map(|(attribute, _, _)| attribute)
}
