use ndarray::{Array1, Array2, Axis};
use tracing::debug;

use super::error::{Result, VectorizerError};

/// Round to three decimal places, ties to even.
#[inline]
fn round3(value: f64) -> f64 {
    (value * 1000.0).round_ties_even() / 1000.0
}

fn check_features(counts: &Array2<usize>, expected: usize) -> Result<()> {
    if counts.ncols() == expected {
        Ok(())
    } else {
        Err(VectorizerError::ShapeMismatch {
            expected,
            actual: counts.ncols(),
        })
    }
}

/// Turns count matrices into TF-IDF weights using an IDF vector learned from
/// a reference count matrix.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct TfidfTransformer {
    idf: Array1<f64>,
}

impl TfidfTransformer {
    /// Learn IDF weights from `counts`, whose columns must line up with
    /// `feature_names`.
    pub fn fit(counts: &Array2<usize>, feature_names: &[String]) -> Result<Self> {
        check_features(counts, feature_names.len())?;
        debug!(
            num_texts = counts.nrows(),
            num_features = counts.ncols(),
            "Calculating IDF values"
        );
        let idf = Self::idf_transform(counts);
        debug!("IDF calculation complete");
        Ok(Self { idf })
    }

    /// `round(tf * idf, 3)` for every cell of `counts`.
    pub fn transform(&self, counts: &Array2<usize>) -> Result<Array2<f64>> {
        check_features(counts, self.idf.len())?;
        debug!(num_texts = counts.nrows(), "Applying TF-IDF weights");

        let mut weights = Self::tf_transform(counts)?;
        for mut row in weights.outer_iter_mut() {
            for (cell, idf) in row.iter_mut().zip(&self.idf) {
                *cell = round3(*cell * idf);
            }
        }
        Ok(weights)
    }

    pub fn fit_transform(
        counts: &Array2<usize>,
        feature_names: &[String],
    ) -> Result<(Self, Array2<f64>)> {
        let transformer = Self::fit(counts, feature_names)?;
        let weights = transformer.transform(counts)?;
        Ok((transformer, weights))
    }

    /// Per-row relative frequency, `round(count / row_total, 3)`.
    ///
    /// A row whose total is zero has no defined frequency and is reported as
    /// [`VectorizerError::EmptyDocument`].
    pub fn tf_transform(counts: &Array2<usize>) -> Result<Array2<f64>> {
        let mut tf = Array2::zeros(counts.dim());

        for (row_idx, (count_row, mut tf_row)) in
            counts.outer_iter().zip(tf.outer_iter_mut()).enumerate()
        {
            let total = count_row.sum();
            if total == 0 {
                return Err(VectorizerError::EmptyDocument { row: row_idx });
            }
            let total = total as f64;
            for (cell, &count) in tf_row.iter_mut().zip(&count_row) {
                *cell = round3(count as f64 / total);
            }
        }
        Ok(tf)
    }

    /// Smoothed inverse document frequency per column:
    /// `round(ln((n_docs + 1) / (df + 1)) + 1, 3)`.
    pub fn idf_transform(counts: &Array2<usize>) -> Array1<f64> {
        let n_docs = counts.nrows() as f64;

        counts
            .axis_iter(Axis(1))
            .map(|column| {
                let doc_freq = column.iter().filter(|&&count| count > 0).count();
                round3(((n_docs + 1.0) / (doc_freq as f64 + 1.0)).ln() + 1.0)
            })
            .collect()
    }

    #[must_use]
    pub fn idf(&self) -> &Array1<f64> {
        &self.idf
    }

    #[must_use]
    pub fn num_features(&self) -> usize {
        self.idf.len()
    }
}
