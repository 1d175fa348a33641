use serde::{Serialize, Deserialize};
use crate::math::matrix::Matrix;
use crate::means::mean::Mean;

/// A linear prior mean: `w · x + b` per input point.
///
/// Parameters are stored flat as `[w_0, ..., w_{d-1}, b]`, so `params()`
/// has `input_dim + 1` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearMean {
    input_dim: usize,
    params: Vec<f64>,
}

impl LinearMean {
    /// Xavier-initialized weights, zero bias.
    pub fn new(input_dim: usize) -> LinearMean {
        let mut params = Matrix::xavier(1, input_dim).data.remove(0);
        params.push(0.0);
        LinearMean { input_dim, params }
    }

    /// Builds from explicit weights and bias.
    pub fn with_params(weights: Vec<f64>, bias: f64) -> LinearMean {
        let input_dim = weights.len();
        let mut params = weights;
        params.push(bias);
        LinearMean { input_dim, params }
    }

    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    fn weights(&self) -> &[f64] {
        &self.params[..self.input_dim]
    }

    fn bias(&self) -> f64 {
        self.params[self.input_dim]
    }
}

impl Mean for LinearMean {
    fn forward(&self, inputs: &Matrix) -> Matrix {
        let column = inputs.data.iter()
            .map(|point| {
                self.weights().iter().zip(point.iter())
                    .map(|(w, x)| w * x)
                    .sum::<f64>() + self.bias()
            })
            .collect();
        Matrix::from_columns(&[column])
    }

    fn clone_box(&self) -> Box<dyn Mean> {
        Box::new(self.clone())
    }

    fn params(&self) -> &[f64] {
        &self.params
    }

    fn params_mut(&mut self) -> &mut [f64] {
        &mut self.params
    }
}
