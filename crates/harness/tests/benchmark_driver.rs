use distance::Variant;
use harness::{run_benchmark, BenchmarkConfig, BenchmarkStage};

#[test]
fn small_plan_times_every_listed_variant() {
    let config = BenchmarkConfig {
        stages: vec![
            BenchmarkStage {
                num_spheres: 100,
                variants: vec![Variant::FullLoop, Variant::TriangularLoop, Variant::RowFull],
            },
            BenchmarkStage {
                num_spheres: 300,
                variants: vec![
                    Variant::RowFull,
                    Variant::RowDeferredSqrt,
                    Variant::RowTriangular,
                    Variant::RowTriangularPowf,
                ],
            },
        ],
        ..BenchmarkConfig::default()
    };

    let records = run_benchmark(&config).unwrap();
    let summary: Vec<_> = records.iter().map(|r| (r.num_spheres, r.variant)).collect();
    assert_eq!(
        summary,
        vec![
            (100, Variant::FullLoop),
            (100, Variant::TriangularLoop),
            (100, Variant::RowFull),
            (300, Variant::RowFull),
            (300, Variant::RowDeferredSqrt),
            (300, Variant::RowTriangular),
            (300, Variant::RowTriangularPowf),
        ]
    );
}
