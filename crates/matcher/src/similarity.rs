use crate::vectorizer::SparseVector;

/// Euclidean magnitude of a sequence of components.
pub(crate) fn l2_norm(components: impl Iterator<Item = f32>) -> f32 {
    components.map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity: dot product over the product of magnitudes.
///
/// Defined as 0 when either vector has zero magnitude. Term weights are
/// non-negative, so the result lies in [0, 1]; it is clamped to absorb
/// floating-point overshoot on identical vectors.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f32 {
    if a.is_zero() || b.is_zero() {
        return 0.0;
    }
    (a.dot(b) / (a.norm() * b.norm())).clamp(0.0, 1.0)
}
