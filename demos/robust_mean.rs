//! Example: Outlier-robust mean
//!
//! One wild value among a dozen readings drags the plain average far off;
//! the sampling-consensus mean ignores it.

use rtl::core::Ransac;
use rtl::estimators::MeanEstimator;
use rtl::{RansacSettings, ScoringType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let data = [2.5, 2.6, 2.7, 2.8, 2.9, 3.0, 3.1, 3.2, 100.0, 3.3, 3.4, 3.5];
    let average = data.iter().sum::<f64>() / data.len() as f64;
    println!("Data: {data:?}");
    println!("Plain average: {average:.4}\n");

    let estimator = MeanEstimator::new();
    for scoring in [
        ScoringType::ConsensusCount,
        ScoringType::LeastMedian,
        ScoringType::TruncatedQuadratic,
        ScoringType::EmLikelihood,
    ] {
        let settings = RansacSettings {
            final_refinement: true,
            ..RansacSettings::with_scoring(scoring)
        };
        let mut ransac = Ransac::new(&estimator, settings)?;
        let best = ransac.find_best(&data)?;
        match best.model {
            Some(mean) => {
                let inliers = ransac.find_inliers(&mean, &data, ransac.settings().inlier_threshold);
                println!("{scoring:?}: mean {mean:.4} (cost {:.4}), inliers {inliers:?}", best.cost);
            }
            None => println!("{scoring:?}: no model"),
        }
    }

    Ok(())
}
