use crate::math::matrix::Matrix;

/// A Gaussian Process mean function.
///
/// Implementors map a batch of N input points (an N×d matrix, one point per
/// row) to per-point mean values. Leaf means return an N×1 column; composite
/// means such as `MultitaskMean` return one column per task. Evaluation is
/// pure: it reads the current parameters and writes nothing.
pub trait Mean {
    /// Evaluates the mean on every row of `inputs`.
    fn forward(&self, inputs: &Matrix) -> Matrix;

    /// Deep-copies this mean into a fully independent instance.
    ///
    /// The clone starts with equal parameter values but shares no mutable
    /// state with the original: training one must never move the other.
    fn clone_box(&self) -> Box<dyn Mean>;

    /// Learnable parameters, flat. Composite means own no parameters of
    /// their own; reach sub-mean parameters through their task accessors.
    fn params(&self) -> &[f64];

    /// Mutable view of the learnable parameters, for external training.
    fn params_mut(&mut self) -> &mut [f64];
}

impl Clone for Box<dyn Mean> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
