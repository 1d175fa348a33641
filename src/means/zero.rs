use serde::{Serialize, Deserialize};
use crate::math::matrix::Matrix;
use crate::means::mean::Mean;

/// The trivial prior mean: zero everywhere. Has no parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZeroMean;

impl ZeroMean {
    pub fn new() -> ZeroMean {
        ZeroMean
    }
}

impl Mean for ZeroMean {
    fn forward(&self, inputs: &Matrix) -> Matrix {
        Matrix::zeros(inputs.rows, 1)
    }

    fn clone_box(&self) -> Box<dyn Mean> {
        Box::new(self.clone())
    }

    fn params(&self) -> &[f64] {
        &[]
    }

    fn params_mut(&mut self) -> &mut [f64] {
        &mut []
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_is_a_zero_column() {
        let inputs = Matrix::from_data(vec![vec![1.0, 2.0], vec![-3.0, 4.0]]);
        let out = ZeroMean::new().forward(&inputs);
        assert_eq!(out.rows, 2);
        assert_eq!(out.cols, 1);
        assert_eq!(out.column(0), vec![0.0, 0.0]);
    }
}
