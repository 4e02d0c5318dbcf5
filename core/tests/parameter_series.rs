use oceansynth_core::{
    catalog::Parameter,
    error::SynthError,
    parameter_series::{generate_parameter_series, parameter_series, FloatSite, SERIES_LENGTH},
};

#[test]
fn degenerate_pressure_series_is_constant() {
    let series = parameter_series("pressure", 2902300).expect("series");
    assert_eq!(series.len(), 50);
    assert!(series.iter().all(|p| p.value == 20.0), "{series:?}");
}

#[test]
fn same_float_and_parameter_reproduce() {
    let a = generate_parameter_series(Parameter::Temperature, 2902300);
    let b = generate_parameter_series(Parameter::Temperature, 2902300);
    assert_eq!(a, b);
}

#[test]
fn different_parameters_for_one_float_differ() {
    let temp = generate_parameter_series(Parameter::Temperature, 2902300);
    let oxy = generate_parameter_series(Parameter::Oxygen, 2902300);
    let temp_band = Parameter::Temperature.band();
    let oxy_band = Parameter::Oxygen.band();
    let norm = |v: f64, lo: f64, w: f64| (v - lo) / w;
    let same_shape = temp.iter().zip(oxy.iter()).all(|(a, b)| {
        (norm(a.value, temp_band.min, temp_band.width())
            - norm(b.value, oxy_band.min, oxy_band.width()))
        .abs()
            < 1e-3
    });
    assert!(!same_shape, "temperature and oxygen share one stream");
}

#[test]
fn every_parameter_stays_in_band_with_cycles_one_to_fifty() {
    for platform in [2902300, 2902301, 1, -5, i32::MAX] {
        for p in Parameter::ALL {
            let series = generate_parameter_series(p, platform);
            assert_eq!(series.len(), SERIES_LENGTH as usize);
            let band = p.band();
            for (i, pt) in series.iter().enumerate() {
                assert_eq!(pt.cycle, i as u32 + 1);
                assert!(band.contains(pt.value), "{p} float {platform}: {}", pt.value);
            }
        }
    }
}

#[test]
fn float_site_drives_the_series() {
    let site = FloatSite {
        id: "ARGO2902300".into(),
        location: "Bay of Bengal".into(),
        lat: 13.5,
        lng: 87.2,
    };
    assert_eq!(
        site.parameter_series(Parameter::Nitrate).expect("series"),
        generate_parameter_series(Parameter::Nitrate, 2902300)
    );
}

#[test]
fn typo_is_not_an_empty_series() {
    match parameter_series("oxygn", 2902300) {
        Err(SynthError::UnknownParameter { id }) => assert_eq!(id, "oxygn"),
        other => panic!("expected UnknownParameter, got {other:?}"),
    }
}
