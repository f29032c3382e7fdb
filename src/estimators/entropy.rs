use crate::estimators::probabilities::Probabilities;

/// Below this distance from 1, the generalised entropies fall back to the
/// Shannon limit instead of dividing by `1 - q`.
const Q_LIMIT_TOLERANCE: f64 = 1e-12;

/// Shannon entropy H = -Σ p ln p (natural log base).
///
/// Zero-probability outcomes contribute nothing.
pub fn shannon(probs: &Probabilities) -> f64 {
    let mut h = 0.0_f64;
    for p in probs.iter() {
        if p > 0.0 {
            h -= p * p.ln();
        }
    }
    h
}

/// Rényi entropy H_q = ln(Σ p^q) / (1 - q).
///
/// For q numerically indistinguishable from 1, returns the Shannon entropy.
pub fn renyi(probs: &Probabilities, q: f64) -> f64 {
    if (q - 1.0).abs() < Q_LIMIT_TOLERANCE {
        return shannon(probs);
    }
    let sum_pq: f64 = probs.iter().filter(|&p| p > 0.0).map(|p| p.powf(q)).sum();
    sum_pq.ln() / (1.0 - q)
}

/// Tsallis entropy S_q = (1 - Σ p^q) / (q - 1).
///
/// For q numerically indistinguishable from 1, returns the Shannon entropy.
pub fn tsallis(probs: &Probabilities, q: f64) -> f64 {
    if (q - 1.0).abs() < Q_LIMIT_TOLERANCE {
        return shannon(probs);
    }
    let sum_pq: f64 = probs.iter().filter(|&p| p > 0.0).map(|p| p.powf(q)).sum();
    (1.0 - sum_pq) / (q - 1.0)
}
