//! Example: Benchmark of the four scoring strategies on line fitting
//!
//! Sweeps the inlier rate from 0.1 to 0.9 on 200 points with noise 0.6 and
//! prints one CSV row per (inlier rate, trial, strategy) to stdout:
//!
//! ```text
//! data_num, noise_level, inlier_rate, trial, scoring, time_s, nsse, tp, fp, fn
//! ```
//!
//! The number of trials per setting is the first command-line argument
//! (default 20).

use rand::rngs::StdRng;
use rand::SeedableRng;
use rtl::core::Ransac;
use rtl::estimators::LineEstimator;
use rtl::evaluation::{GroundTruthEvaluator, Stopwatch};
use rtl::synthetic::LineObserver;
use rtl::{Line, RansacSettings, ScoringType};

const DATA_NUM: usize = 200;
const NOISE_LEVEL: f64 = 0.6;
const INLIER_RATES: [f64; 9] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
const STRATEGIES: [ScoringType; 4] = [
    ScoringType::ConsensusCount,
    ScoringType::LeastMedian,
    ScoringType::TruncatedQuadratic,
    ScoringType::EmLikelihood,
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let trials: usize = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 20,
    };

    let truth = Line::new(0.6, 0.8, -300.0);
    let observer = LineObserver::default();
    let estimator = LineEstimator::new();
    let mut rng = StdRng::seed_from_u64(0);

    let mut engines = STRATEGIES
        .iter()
        .map(|&scoring| {
            let settings = RansacSettings {
                seed: Some(1),
                ..RansacSettings::with_scoring(scoring)
            };
            Ransac::new(&estimator, settings)
        })
        .collect::<Result<Vec<_>, _>>()?;

    println!("data_num, noise_level, inlier_rate, trial, scoring, time_s, nsse, tp, fp, fn");
    for inlier_rate in INLIER_RATES {
        for trial in 0..trials {
            let scene = observer.generate(&truth, DATA_NUM, NOISE_LEVEL, inlier_rate, &mut rng)?;
            let evaluator =
                GroundTruthEvaluator::new(&estimator, &scene.data, truth, &scene.inliers)?;

            for (scoring, ransac) in STRATEGIES.iter().zip(engines.iter_mut()) {
                let watch = Stopwatch::start();
                let best = ransac.find_best(&scene.data)?;
                let time = watch.elapsed_secs();

                let Some(model) = best.model else {
                    println!(
                        "{DATA_NUM}, {NOISE_LEVEL}, {inlier_rate}, {trial}, {scoring:?}, {time}, NaN, 0, 0, {}",
                        scene.inliers.len()
                    );
                    continue;
                };
                let inliers =
                    ransac.find_inliers(&model, &scene.data, ransac.settings().inlier_threshold);
                let nsse = evaluator.evaluate_model(&model).unwrap_or(f64::NAN);
                let score = evaluator.evaluate_inliers(&inliers);
                println!(
                    "{DATA_NUM}, {NOISE_LEVEL}, {inlier_rate}, {trial}, {scoring:?}, {time}, {nsse}, {}, {}, {}",
                    score.true_positives, score.false_positives, score.false_negatives
                );
            }
        }
        tracing::info!(inlier_rate, trials, "setting done");
    }

    Ok(())
}
