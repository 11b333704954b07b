//! Example: Robust line fitting using RANSAC
//!
//! Generates a noisy line with outliers inside a 640×480 image and recovers
//! it with the line estimator. Set `RUST_LOG=debug` to see the search log.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rtl::estimators::LineEstimator;
use rtl::evaluation::{GroundTruthEvaluator, Stopwatch};
use rtl::synthetic::LineObserver;
use rtl::{estimate_line, Line, RansacSettings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Robust Line Fitting Example ===\n");

    let truth = Line::new(0.6, -0.8, 1.0);
    let mut rng = StdRng::seed_from_u64(42);
    let scene = LineObserver::default().generate(&truth, 100, 0.5, 0.5, &mut rng)?;
    println!("True line: {truth}");
    println!(
        "Generated {} points, {} of them inliers\n",
        scene.data.len(),
        scene.inliers.len()
    );

    let settings = RansacSettings {
        max_iterations: 100,
        inlier_threshold: 2.0,
        final_refinement: true,
        ..RansacSettings::default()
    };

    let watch = Stopwatch::start();
    let Some(result) = estimate_line(&scene.data, settings)? else {
        println!("No line found.");
        return Ok(());
    };
    let elapsed = watch.elapsed_secs();

    println!("RANSAC Results:");
    println!("  Estimated line: {}", result.model);
    println!(
        "  Found {} inliers out of {} points",
        result.inliers.len(),
        scene.data.len()
    );
    println!("  Cost: {}", result.cost);
    println!("  Iterations: {}", result.iterations);
    println!("  Time: {:.6} s", elapsed);

    if let (Some((slope, intercept)), Some((true_slope, true_intercept))) =
        (result.model.to_slope_intercept(), truth.to_slope_intercept())
    {
        println!("\n  Estimated: y = {slope:.4}x + {intercept:.4}");
        println!("  True:      y = {true_slope:.4}x + {true_intercept:.4}");
    }

    let estimator = LineEstimator::new();
    let evaluator = GroundTruthEvaluator::new(&estimator, &scene.data, truth, &scene.inliers)?;
    if let Some(nsse) = evaluator.evaluate_model(&result.model) {
        println!("\nNormalized SSE: {nsse:.4}");
    }
    let score = evaluator.evaluate_inliers(&result.inliers);
    println!(
        "Correctly identified {} out of {} true inliers ({} false positives)",
        score.true_positives,
        scene.inliers.len(),
        score.false_positives
    );

    Ok(())
}
