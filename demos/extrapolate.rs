//! # Correlation-energy extrapolation, end to end
//!
//! Builds a small synthetic result table (the shape the log scraper emits),
//! derives the reciprocal orbital-count parameters, and runs both
//! extrapolation policies against the same observations.
//!
//! Run with: `cargo run --example extrapolate`

use extrap::expansion;
use extrap::prelude::*;
use faer::{Col, Mat};

fn main() {
    let table = synthetic_table();

    let parameters = table
        .design(&["n_orbs_var_inv", "eps_var", "n_orbs_pt_inv", "eps_pt"])
        .expect("parameter columns exist");
    let response = table.column("energy_corr").expect("response column exists");

    variance_weighted(&parameters, &response);
    backward_elimination(&parameters, &response);
}

/// A result table in the scraper's CSV shape: energies follow a known
/// linear law in the four truncation parameters, plus mild noise.
fn synthetic_table() -> ObservationTable {
    let mut text = String::from("n_orbs_var,eps_var,n_orbs_pt,eps_pt,energy_corr\n");

    for i in 0..18 {
        let i = i as f64;
        let n_orbs_var = 20.0 + 5.0 * i;
        let eps_var = 2e-4 * (1.0 + 0.3 * i + 0.1 * i.sin());
        let n_orbs_pt = 150.0 + 13.0 * i;
        let eps_pt = 2e-5 * (1.0 + 0.2 * i + 0.05 * i.cos());

        let energy_corr = -0.5928
            - 0.12 / n_orbs_var
            - 0.4 * eps_var
            - 0.8 / n_orbs_pt
            - 1.5 * eps_pt
            + 1e-7 * (1.7 * i).sin();

        text.push_str(&format!(
            "{n_orbs_var},{eps_var:e},{n_orbs_pt},{eps_pt:e},{energy_corr:.10}\n"
        ));
    }

    ObservationTable::from_delimited(&text, ',')
        .expect("table parses")
        .with_reciprocal("n_orbs_var")
        .expect("orbital counts are non-zero")
        .with_reciprocal("n_orbs_pt")
        .expect("orbital counts are non-zero")
}

fn variance_weighted(parameters: &Mat<f64>, response: &Col<f64>) {
    println!("=== Two-pass variance-weighted fit ===\n");

    let options = RegressionOptions::builder()
        .polynomial_order(PolynomialOrder::Linear)
        .build()
        .expect("options are valid");

    let run = VarianceWeighted::new(options.clone())
        .run(parameters, response)
        .expect("fit should succeed");

    if let Some((value, _)) = run.initial.intercept_with_error() {
        println!("Intercept estimation: {value:.10}");
    }

    let names = base_names();
    println!(
        "{}",
        FitSummary::new(&run.fit, &names, options.report_precision)
    );
}

fn backward_elimination(parameters: &Mat<f64>, response: &Col<f64>) {
    println!("=== Backward elimination + weighted refit ===\n");

    let options = RegressionOptions::builder()
        .polynomial_order(PolynomialOrder::Quadratic)
        .cross_term(false)
        .strategy(ExtrapolationStrategy::BackwardElimination)
        .trim_passes(1)
        .build()
        .expect("options are valid");

    let all_names = expansion::polynomial_names(
        &base_names(),
        options.polynomial_order,
        options.cross_term,
    );

    match extrapolate(parameters, response, &options) {
        Ok(ExtrapolationOutcome::BackwardElimination(reports)) => {
            for (pass, report) in reports.iter().enumerate() {
                let surviving: Vec<String> = report
                    .active
                    .iter()
                    .map(|&j| all_names[j].clone())
                    .collect();
                println!(
                    "--- pass {pass}: {} observations, surviving terms: {} ---",
                    report.fit.n_observations,
                    surviving.join(", ")
                );
                println!(
                    "{}",
                    FitSummary::new(&report.fit, &surviving, options.report_precision)
                );
            }
        }
        Ok(_) => unreachable!("strategy selects backward elimination"),
        Err(err) => println!("extrapolation failed: {err}"),
    }
}

fn base_names() -> Vec<String> {
    ["n_orbs_var_inv", "eps_var", "n_orbs_pt_inv", "eps_pt"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
