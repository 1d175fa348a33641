use serde::{Serialize, Deserialize};
use crate::math::matrix::Matrix;
use crate::means::mean::Mean;

/// A learnable constant prior mean: every input point maps to the same
/// scalar. The constant is the single entry of `params()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantMean {
    constant: f64,
}

impl ConstantMean {
    /// Starts at 0.0, the usual initialization before training.
    pub fn new() -> ConstantMean {
        ConstantMean { constant: 0.0 }
    }

    pub fn with_constant(constant: f64) -> ConstantMean {
        ConstantMean { constant }
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }
}

impl Default for ConstantMean {
    fn default() -> Self {
        ConstantMean::new()
    }
}

impl Mean for ConstantMean {
    fn forward(&self, inputs: &Matrix) -> Matrix {
        Matrix::from_columns(&[vec![self.constant; inputs.rows]])
    }

    fn clone_box(&self) -> Box<dyn Mean> {
        Box::new(self.clone())
    }

    fn params(&self) -> &[f64] {
        std::slice::from_ref(&self.constant)
    }

    fn params_mut(&mut self) -> &mut [f64] {
        std::slice::from_mut(&mut self.constant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_repeats_the_constant() {
        let inputs = Matrix::from_data(vec![vec![0.0], vec![10.0], vec![-5.0]]);
        let out = ConstantMean::with_constant(2.5).forward(&inputs);
        assert_eq!(out.column(0), vec![2.5, 2.5, 2.5]);
    }

    #[test]
    fn params_mut_writes_through_to_forward() {
        let mut mean = ConstantMean::new();
        mean.params_mut()[0] = -1.0;
        let inputs = Matrix::from_data(vec![vec![0.0]]);
        assert_eq!(mean.forward(&inputs).column(0), vec![-1.0]);
    }
}
