use serde::{Serialize, Deserialize};
use crate::means::mean::Mean;
use crate::means::zero::ZeroMean;
use crate::means::constant::ConstantMean;
use crate::means::linear::LinearMean;
use crate::means::multitask::MultitaskMean;
use crate::{MeanError, Result};

/// A fully serializable description of a mean-function configuration.
///
/// `MeanSpec` can be saved to / loaded from JSON independently of any
/// model state, then `build()` into a live mean. For `Multitask`, a
/// one-element `base` list describes a prototype cloned into every task
/// slot, a full-length list one mean per task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MeanSpec {
    Zero,
    Constant {
        constant: f64,
    },
    Linear {
        input_dim: usize,
        /// Explicit weights; omitted means random Xavier initialization.
        #[serde(default)]
        weights: Option<Vec<f64>>,
        #[serde(default)]
        bias: f64,
    },
    Multitask {
        n_tasks: usize,
        base: Vec<MeanSpec>,
    },
}

impl MeanSpec {
    /// Instantiates the described mean.
    pub fn build(&self) -> Result<Box<dyn Mean>> {
        match self {
            MeanSpec::Zero => Ok(Box::new(ZeroMean::new())),
            MeanSpec::Constant { constant } => {
                Ok(Box::new(ConstantMean::with_constant(*constant)))
            }
            MeanSpec::Linear { input_dim, weights, bias } => match weights {
                Some(weights) => {
                    if weights.len() != *input_dim {
                        return Err(MeanError::InvalidConfiguration(format!(
                            "linear mean expects {} weights, got {}",
                            input_dim,
                            weights.len()
                        )));
                    }
                    Ok(Box::new(LinearMean::with_params(weights.clone(), *bias)))
                }
                None => Ok(Box::new(LinearMean::new(*input_dim))),
            },
            MeanSpec::Multitask { n_tasks, base } => {
                let base_means = base.iter()
                    .map(|spec| spec.build())
                    .collect::<Result<Vec<_>>>()?;
                Ok(Box::new(MultitaskMean::new(base_means, *n_tasks)?))
            }
        }
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `MeanSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<MeanSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;

    #[test]
    fn multitask_spec_round_trips_through_json() {
        let spec = MeanSpec::Multitask {
            n_tasks: 2,
            base: vec![
                MeanSpec::Constant { constant: 1.0 },
                MeanSpec::Linear { input_dim: 2, weights: Some(vec![0.5, 0.5]), bias: 0.0 },
            ],
        };
        let json = serde_json::to_string_pretty(&spec).unwrap();
        let restored: MeanSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, restored);
    }

    #[test]
    fn built_multitask_evaluates_its_base_specs() {
        let spec = MeanSpec::Multitask {
            n_tasks: 2,
            base: vec![
                MeanSpec::Constant { constant: 1.0 },
                MeanSpec::Constant { constant: 2.0 },
            ],
        };
        let mean = spec.build().unwrap();
        let out = mean.forward(&Matrix::from_data(vec![vec![0.0]; 3]));
        assert_eq!(out.rows, 3);
        assert_eq!(out.data[0], vec![1.0, 2.0]);
    }

    #[test]
    fn prototype_spec_expands_across_tasks() {
        let spec = MeanSpec::Multitask {
            n_tasks: 3,
            base: vec![MeanSpec::Zero],
        };
        let mean = spec.build().unwrap();
        let out = mean.forward(&Matrix::from_data(vec![vec![1.0]]));
        assert_eq!(out.data[0], vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn mismatched_base_count_fails_to_build() {
        let spec = MeanSpec::Multitask {
            n_tasks: 3,
            base: vec![MeanSpec::Zero, MeanSpec::Zero],
        };
        assert!(spec.build().is_err());
    }

    #[test]
    fn mismatched_linear_weights_fail_to_build() {
        let spec = MeanSpec::Linear { input_dim: 3, weights: Some(vec![1.0]), bias: 0.0 };
        assert!(spec.build().is_err());
    }

    #[test]
    fn linear_without_weights_builds_randomly_initialized() {
        let spec = MeanSpec::Linear { input_dim: 4, weights: None, bias: 0.0 };
        let mean = spec.build().unwrap();
        assert_eq!(mean.params().len(), 5);
    }
}
