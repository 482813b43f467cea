//! End-to-end resampling flows through the public API.
//!
//! Exercises plan generation, evaluation, and aggregation together, the
//! way a caller would use the crate.

use resample::prelude::*;

/// Least squares through the origin on a single predictor column.
struct SlopeEstimator {
    predictor: &'static str,
}

impl Estimator<f64> for SlopeEstimator {
    type Model = f64;

    fn fit(&self, analysis: &Dataset<f64>, outcome: &str) -> Result<f64, String> {
        let x = analysis.numeric(self.predictor).map_err(|e| e.to_string())?;
        let y = analysis.numeric(outcome).map_err(|e| e.to_string())?;
        let sxy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();
        let sxx: f64 = x.iter().map(|a| a * a).sum();
        if sxx == 0.0 {
            return Err("predictor has no variance".to_string());
        }
        Ok(sxy / sxx)
    }

    fn predict(&self, model: &f64, assessment: &Dataset<f64>) -> Result<Vec<f64>, String> {
        let x = assessment.numeric(self.predictor).map_err(|e| e.to_string())?;
        Ok(x.iter().map(|a| a * model).collect())
    }
}

/// Fails whenever the analysis set has an odd number of rows.
struct OddRowsFail;

impl Estimator<f64> for OddRowsFail {
    type Model = ();

    fn fit(&self, analysis: &Dataset<f64>, _: &str) -> Result<(), String> {
        if analysis.n_rows() % 2 == 1 {
            Err("odd analysis size".to_string())
        } else {
            Ok(())
        }
    }

    fn predict(&self, _: &(), assessment: &Dataset<f64>) -> Result<Vec<f64>, String> {
        Ok(vec![0.0; assessment.n_rows()])
    }
}

fn linear_data(n: usize) -> Dataset<f64> {
    let x: Vec<f64> = (1..=n).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|v| 2.0 * v).collect();
    Dataset::builder().numeric("x", x).numeric("y", y).build().unwrap()
}

#[test]
fn vfold_evaluation_recovers_a_perfect_linear_fit() {
    let data = linear_data(20);
    let plan = Resample::vfold(5).seed(7).generate(&data).unwrap();

    let result = Evaluator::new(SlopeEstimator { predictor: "x" })
        .outcome("y")
        .metric(Rmse)
        .metric(RSquared)
        .run(&data, &plan)
        .unwrap();

    let summary = result.summarize().unwrap();
    let rmse = summary.get("rmse").unwrap();
    assert!(rmse.mean.abs() < 1e-9);
    assert_eq!(rmse.n, 5);
    assert_eq!(rmse.n_failed, 0);

    let rsq = summary.get("rsq").unwrap();
    assert!((rsq.mean - 1.0).abs() < 1e-9);
}

#[test]
fn bootstrap_flow_scores_out_of_bag_rows() {
    let data = linear_data(30);
    let plan = Resample::bootstrap(10).seed(11).generate(&data).unwrap();
    assert_eq!(plan.len(), 10);
    assert!(plan.warnings().is_empty());

    for partition in &plan {
        // Every draw keeps the original sample size.
        assert_eq!(partition.n_analysis(), 30);
        assert!(partition.n_assessment() > 0);
    }

    let result = Evaluator::new(SlopeEstimator { predictor: "x" })
        .outcome("y")
        .metric(Mae)
        .run(&data, &plan)
        .unwrap();
    let summary = result.summarize().unwrap();
    assert!(summary.get("mae").unwrap().mean.abs() < 1e-9);
}

#[test]
fn repeated_stratified_vfold_keeps_class_balance_end_to_end() {
    let labels: Vec<&str> = (0..24).map(|i| if i % 3 == 0 { "a" } else { "b" }).collect();
    let data = Dataset::<f64>::builder()
        .numeric("x", (1..=24).map(|i| i as f64).collect())
        .numeric("y", (1..=24).map(|i| 2.0 * i as f64).collect())
        .categorical("class", &labels)
        .build()
        .unwrap();

    let plan = Resample::vfold(4)
        .repeats(2)
        .stratify("class")
        .seed(13)
        .generate(&data)
        .unwrap();
    assert_eq!(plan.len(), 8);

    let codes = data.codes("class").unwrap();
    for partition in &plan {
        // 8 "a" rows over 4 folds, 16 "b" rows over 4 folds.
        let a = partition.assessment.iter().filter(|&&r| codes[r] == 0).count();
        assert_eq!(a, 2);
        assert_eq!(partition.n_assessment(), 6);
    }
}

#[test]
fn partition_failures_surface_in_the_summary() {
    // 4 folds on 10 rows: analysis sizes are 7, 7, 8, 8.
    let data = linear_data(10);
    let plan = Resample::vfold(4).seed(3).generate(&data).unwrap();

    let result = Evaluator::new(OddRowsFail)
        .outcome("y")
        .metric(Mae)
        .run(&data, &plan)
        .unwrap();

    assert_eq!(result.failed_partitions().len(), 2);
    let summary = result.summarize().unwrap();
    let mae = summary.get("mae").unwrap();
    assert_eq!(mae.n, 2);
    assert_eq!(mae.n_failed, 2);
}

#[test]
fn rolling_origin_requires_ordered_keys() {
    let data = Dataset::<f64>::builder()
        .numeric("t", vec![1.0, 3.0, 2.0, 4.0, 5.0, 6.0])
        .numeric("y", vec![1.0; 6])
        .build()
        .unwrap();

    let err = Resample::rolling_origin(3, 1)
        .order_by("t")
        .generate(&data)
        .unwrap_err();
    assert!(matches!(err, ResampleError::UnorderedInput { row: 2, .. }));
}

#[test]
fn validation_split_feeds_a_single_holdout_evaluation() {
    let data = linear_data(10);
    let plan = Resample::validation_split(0.8).seed(21).generate(&data).unwrap();

    let result = Evaluator::new(SlopeEstimator { predictor: "x" })
        .outcome("y")
        .metric(Rmse)
        .run(&data, &plan)
        .unwrap();

    let summary = result.summarize().unwrap();
    let rmse = summary.get("rmse").unwrap();
    assert_eq!(rmse.n, 1);
    // A single partition has no spread to estimate.
    assert_eq!(rmse.std_error, None);
}
