//! Solves the general-purpose preset with a handful of common salts.
//!
//! Run with `RUST_LOG=hydrofeed_nutrients=debug` to see the search phases.

use hydrofeed_nutrients::{
    Element, NutrientTargets, Preset, SolutionVolume, Solver, Substance, VolumeUnit,
    chemistry::Oxide,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn salts() -> Vec<Substance> {
    vec![
        Substance::new(
            "cano3",
            "Calcium nitrate",
            "Ca(NO3)2·4H2O",
            vec![Element::new("Ca", 17.0), Element::ionic("NO3-", 52.5)],
        ),
        Substance::new(
            "kno3",
            "Potassium nitrate",
            "KNO3",
            vec![Element::new("K", 38.67), Element::ionic("NO3-", 61.3)],
        ),
        Substance::new(
            "mkp",
            "Monopotassium phosphate",
            "KH2PO4",
            vec![
                Element::from_oxide(Oxide::P2O5, 52.0),
                Element::from_oxide(Oxide::K2O, 34.0),
            ],
        ),
        Substance::new(
            "epsom",
            "Magnesium sulfate",
            "MgSO4·7H2O",
            vec![Element::new("Mg", 9.86), Element::ionic("SO4 2-", 38.97)],
        ),
        Substance::new(
            "chelate",
            "Iron chelate",
            "Fe-EDTA",
            vec![Element::new("Fe", 13.0)],
        ),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hydrofeed_nutrients=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let substances = salts();
    for substance in &substances {
        substance.validate()?;
    }

    let targets = NutrientTargets::preset(Preset::General);
    let volume = SolutionVolume::new(10.0, VolumeUnit::Liter);
    let result = Solver::default().solve(&substances, &targets, volume, &mut rand::thread_rng())?;

    println!("Weights for {volume}:");
    for (substance, weight) in substances.iter().zip(&result.weights) {
        println!("  {:<28} {:>8.2} g", substance.name, weight.grams);
    }
    println!("  {:<28} {:>8.2} g", "Total", result.total_weight);

    println!();
    println!("{:<6} {:>10} {:>10} {:>10}", "", "target", "achieved", "dev %");
    for row in result.rows(&targets) {
        let deviation = row
            .deviation
            .map_or_else(|| "-".to_owned(), |d| format!("{d:.1}"));
        println!(
            "{:<6} {:>10.2} {:>10.2} {:>10}",
            row.nutrient, row.target, row.achieved, deviation
        );
    }

    println!();
    println!(
        "Average deviation {:.2} % ({:?})",
        result.deviation,
        result.precision()
    );
    if let Some(ec) = result.ec {
        println!("Estimated EC {ec:.3} mS/cm");
    }

    Ok(())
}
