use crate::math::matrix::Matrix;
use crate::means::mean::Mean;
use crate::{MeanError, Result};

/// How the per-task means of a `MultitaskMean` are supplied.
///
/// `Single` hands over one prototype that is deep-copied into every task
/// slot; `PerTask` hands over one mean per task (a one-element list is
/// treated like `Single`).
pub enum BaseMeans {
    Single(Box<dyn Mean>),
    PerTask(Vec<Box<dyn Mean>>),
}

impl From<Box<dyn Mean>> for BaseMeans {
    fn from(mean: Box<dyn Mean>) -> BaseMeans {
        BaseMeans::Single(mean)
    }
}

impl From<Vec<Box<dyn Mean>>> for BaseMeans {
    fn from(means: Vec<Box<dyn Mean>>) -> BaseMeans {
        BaseMeans::PerTask(means)
    }
}

/// A different mean for each task in a multitask GP model.
///
/// Holds `n_tasks` sub-means; `forward` applies each of them to the same
/// input batch and stacks the results into an N×`n_tasks` matrix, one
/// column per task. Column `t` always comes from sub-mean `t`.
///
/// The sub-mean list is fixed at construction; only the sub-means' own
/// parameters change afterwards (via external training through
/// `task_mean_mut`).
#[derive(Clone)]
pub struct MultitaskMean {
    base_means: Vec<Box<dyn Mean>>,
    n_tasks: usize,
}

impl MultitaskMean {
    /// Builds a multitask mean from either a single prototype or a
    /// per-task list (anything convertible into `BaseMeans`).
    ///
    /// A single prototype (or one-element list) is expanded to `n_tasks`
    /// sub-means: the original fills slot 0 and `n_tasks - 1` independent
    /// deep copies fill the rest. A longer list must have exactly
    /// `n_tasks` entries and is stored as given, in order, uncopied.
    ///
    /// Fails with `MeanError::InvalidConfiguration` when `n_tasks` is 0
    /// or the list length is neither 1 nor `n_tasks`.
    pub fn new(base_means: impl Into<BaseMeans>, n_tasks: usize) -> Result<MultitaskMean> {
        if n_tasks == 0 {
            return Err(MeanError::InvalidConfiguration(
                "n_tasks must be at least 1".to_string(),
            ));
        }

        let base_means = match base_means.into() {
            BaseMeans::Single(prototype) => expand(prototype, n_tasks),
            BaseMeans::PerTask(mut means) if means.len() == 1 => {
                let prototype = means.remove(0);
                expand(prototype, n_tasks)
            }
            BaseMeans::PerTask(means) if means.len() == n_tasks => means,
            BaseMeans::PerTask(means) => {
                return Err(MeanError::InvalidConfiguration(format!(
                    "base_means should have length 1 or n_tasks ({}), got {}",
                    n_tasks,
                    means.len()
                )));
            }
        };

        Ok(MultitaskMean { base_means, n_tasks })
    }

    pub fn n_tasks(&self) -> usize {
        self.n_tasks
    }

    /// The sub-mean driving output column `t`.
    pub fn task_mean(&self, t: usize) -> &dyn Mean {
        self.base_means[t].as_ref()
    }

    /// Mutable access to one task's sub-mean, for external training.
    pub fn task_mean_mut(&mut self, t: usize) -> &mut dyn Mean {
        self.base_means[t].as_mut()
    }
}

/// Slot 0 keeps the original; slots 1..n_tasks get independent clones.
fn expand(prototype: Box<dyn Mean>, n_tasks: usize) -> Vec<Box<dyn Mean>> {
    let mut means = Vec::with_capacity(n_tasks);
    for _ in 1..n_tasks {
        means.push(prototype.clone_box());
    }
    means.insert(0, prototype);
    means
}

impl Mean for MultitaskMean {
    /// Evaluates every sub-mean on `inputs` and stacks the resulting
    /// columns, in task order, into one N×`n_tasks` matrix.
    fn forward(&self, inputs: &Matrix) -> Matrix {
        let mut columns = Vec::with_capacity(self.n_tasks);
        for mean in &self.base_means {
            let out = mean.forward(inputs);
            for j in 0..out.cols {
                columns.push(out.column(j));
            }
        }
        Matrix::from_columns(&columns)
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
