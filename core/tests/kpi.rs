use oceansynth_core::{
    kpi_generator::{generate_kpi_comparison, KPI_METRICS},
    rng::{SeedBank, SeededStream},
};

#[test]
fn comparison_region_tracks_declared_delta_on_average() {
    let oxygen = KPI_METRICS
        .iter()
        .position(|k| k.sea_diff == -0.3)
        .expect("oxygen metric");
    let seeds = SeedBank::new(1_000).seeds(1_000);

    let mean_diff: f64 = seeds
        .iter()
        .map(|&seed| {
            let rows = generate_kpi_comparison(&mut SeededStream::new(seed));
            rows[oxygen].bar.bay_of_bengal - rows[oxygen].bar.arabian_sea
        })
        .sum::<f64>()
        / seeds.len() as f64;

    assert!(mean_diff < 0.0, "comparison should be lower, got {mean_diff}");
    assert!(
        (0.24..=0.36).contains(&mean_diff.abs()),
        "mean |delta| {} outside ±20% of 0.3",
        mean_diff.abs()
    );
}

#[test]
fn every_metric_moves_in_its_declared_direction() {
    for seed in SeedBank::new(3).seeds(200) {
        for (c, kpi) in generate_kpi_comparison(&mut SeededStream::new(seed))
            .iter()
            .zip(KPI_METRICS.iter())
        {
            assert_eq!(c.raw_delta.signum(), kpi.sea_diff.signum(), "seed {seed}: {}", kpi.name);
        }
    }
}
