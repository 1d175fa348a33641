use gp_means::{ConstantMean, LinearMean, Matrix, Mean, MeanSpec, MultitaskMean};

fn main() -> gp_means::Result<()> {
    // Task 0: a flat prior at 1.0. Task 1: a linear trend 0.5·x - 0.25.
    let base: Vec<Box<dyn Mean>> = vec![
        Box::new(ConstantMean::with_constant(1.0)),
        Box::new(LinearMean::with_params(vec![0.5], -0.25)),
    ];
    let mean = MultitaskMean::new(base, 2)?;

    let inputs = Matrix::from_data(
        (0..5).map(|i| vec![i as f64]).collect(),
    );
    let out = mean.forward(&inputs);

    println!("input -> [task 0, task 1]");
    for (point, row) in inputs.data.iter().zip(out.data.iter()) {
        println!("{:?} -> [{:.4}, {:.4}]", point, row[0], row[1]);
    }

    // The same configuration as a serializable spec: one prototype,
    // cloned into each of three task slots.
    let spec = MeanSpec::Multitask {
        n_tasks: 3,
        base: vec![MeanSpec::Constant { constant: 0.5 }],
    };
    let prototype_mean = spec.build()?;
    let expanded = prototype_mean.forward(&inputs);
    println!(
        "prototype spec expanded to {} tasks over {} points",
        expanded.cols, expanded.rows
    );

    Ok(())
}
