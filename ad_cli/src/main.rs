//! CLI for the scalar operator set.
//!
//! Checks backward rules against finite differences, and evaluates operators
//! and folds over values given on the command line.

use clap::Parser;

use ad_functional::{map_op, map_op_back, product_seq, sum_seq};
use ad_ops::{check_rule, OpError, UnaryOp};

#[derive(Parser)]
#[command(
    name = "ad_cli",
    about = "Scalar operators and their backward rules",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Compare backward rules against central finite differences
    Check {
        /// Operator to check (id, neg, sigmoid, relu, log, exp, inv); all if omitted
        #[arg(long)]
        op: Option<UnaryOp>,
        /// Finite difference step size
        #[arg(long, default_value = "1e-6")]
        eps: f64,
        /// Maximum allowed error, relative once |derivative| exceeds 1
        #[arg(long, default_value = "1e-5")]
        tol: f64,
        /// Points to check at (comma-separated)
        #[arg(
            long,
            value_delimiter = ',',
            allow_hyphen_values = true,
            default_values_t = [-2.0, -0.5, 0.5, 1.5, 3.0]
        )]
        points: Vec<f64>,
    },
    /// Apply an operator to each value
    Map {
        /// Operator name
        #[arg(long)]
        op: UnaryOp,
        /// Also print the backward rule at each value (upstream gradient 1)
        #[arg(long)]
        grad: bool,
        #[arg(allow_hyphen_values = true, required = true)]
        values: Vec<f64>,
    },
    /// Fold values into a single number
    #[command(group(clap::ArgGroup::new("mode").required(true).args(["sum", "product"])))]
    Fold {
        /// Sum the values
        #[arg(long)]
        sum: bool,
        /// Multiply the values
        #[arg(long)]
        product: bool,
        #[arg(allow_hyphen_values = true)]
        values: Vec<f64>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { op, eps, tol, points } => cmd_check(op, eps, tol, &points),
        Commands::Map { op, grad, values } => cmd_map(op, grad, &values),
        Commands::Fold { sum, product, values } => {
            // the "mode" group guarantees exactly one flag
            debug_assert_ne!(sum, product);
            cmd_fold(sum, &values);
            Ok(true)
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` if any rule exceeds the tolerance.
fn cmd_check(op: Option<UnaryOp>, eps: f64, tol: f64, points: &[f64]) -> Result<bool, OpError> {
    let ops = match op {
        Some(op) => vec![op],
        None => UnaryOp::ALL.to_vec(),
    };

    println!("=== Backward Rule Check (eps={:e}, tol={:e}) ===\n", eps, tol);

    let mut failures = 0;
    let mut max_err: f64 = 0.0;

    for op in ops {
        println!("{}:", op);
        for &x in points {
            if !op.is_smooth_at(x) {
                println!("  x = {:>11.4e}  skipped (not differentiable)", x);
                continue;
            }
            let check = match check_rule(op, x, eps) {
                Ok(check) => check,
                Err(e) if e.is_domain_error() => {
                    println!("  x = {:>11.4e}  undefined ({})", x, e);
                    continue;
                }
                Err(e) => return Err(e),
            };

            let err = check.abs_error();
            max_err = max_err.max(err);
            let status = if check.passes(tol) {
                "ok"
            } else {
                failures += 1;
                log::warn!("{} backward rule disagrees at x={}: error {:.2e}", op, x, err);
                "FAIL"
            };
            println!(
                "  x = {:>11.4e}  analytic = {:>14.10}  fd = {:>14.10}  err = {:.2e}  {}",
                x, check.analytic, check.numeric, err, status
            );
        }
    }

    println!("\nMax absolute error: {:.2e}", max_err);
    if failures == 0 {
        println!("PASS: all rules within tolerance ({:.2e})", tol);
        Ok(true)
    } else {
        println!("FAIL: {} check(s) exceeded tolerance ({:.2e})", failures, tol);
        Ok(false)
    }
}

fn cmd_map(op: UnaryOp, grad: bool, values: &[f64]) -> Result<bool, OpError> {
    let outputs = map_op(op, values)?;
    println!("{}({:?}) = {:?}", op, values, outputs);

    if grad {
        let ones = vec![1.0; values.len()];
        let grads = map_op_back(op, values, &ones)?;
        println!("d{}/dx = {:?}", op, grads);
    }
    Ok(true)
}

fn cmd_fold(sum: bool, values: &[f64]) {
    if sum {
        println!("sum({:?}) = {}", values, sum_seq(values));
    } else {
        println!("product({:?}) = {}", values, product_seq(values));
    }
}
