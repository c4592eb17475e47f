use approx::assert_relative_eq;
use ndarray::{s, Array1, Array3};
use receptive_field_mapper::{
    compute_correlation_map, estimate_receptive_field, pixelwise_correlation, tensor_contraction, CorrelationMethod,
    ReceptiveFieldError, Recording, SyntheticConfig,
};

fn synthetic(seed: u64) -> Recording {
    SyntheticConfig {
        seed,
        ..SyntheticConfig::default()
    }
    .generate()
    .expect("Failed to generate synthetic recording")
}

#[test]
fn test_injected_signal_is_found_by_both_methods() {
    let recording = synthetic(42);
    assert_eq!(recording.stimulus.dim(), (100, 10, 10));

    let pixelwise = estimate_receptive_field(CorrelationMethod::Pixelwise, &recording).unwrap();
    let contraction = estimate_receptive_field(CorrelationMethod::TensorContraction, &recording).unwrap();

    assert_eq!(pixelwise.peaks.coordinates, vec![(3, 7)]);
    assert_eq!(contraction.peaks.coordinates, vec![(3, 7)]);
    assert!(
        pixelwise.peaks.value > 0.95,
        "peak correlation too weak: {}",
        pixelwise.peaks.value
    );
}

#[test]
fn test_contraction_is_pixelwise_scaled_by_sample_count() {
    for seed in [1, 2, 3] {
        let recording = synthetic(seed);
        let samples = recording.num_samples() as f64;

        let pixelwise = pixelwise_correlation(recording.stimulus.view(), recording.response.view()).unwrap();
        let contraction = tensor_contraction(recording.stimulus.view(), recording.response.view()).unwrap();

        for (r, c) in pixelwise.iter().zip(contraction.iter()) {
            assert_relative_eq!(*c, *r * samples, epsilon = 1e-9, max_relative = 1e-9);
        }
    }
}

#[test]
fn test_pixelwise_values_stay_in_unit_range() {
    for seed in [5, 6, 7, 8] {
        let recording = synthetic(seed);
        let map = pixelwise_correlation(recording.stimulus.view(), recording.response.view()).unwrap();
        assert!(map.iter().all(|r| (-1.0..=1.0).contains(r)));
    }
}

#[test]
fn test_maps_have_frame_shape() {
    let recording = SyntheticConfig {
        samples: 50,
        height: 4,
        width: 7,
        signal_row: 2,
        signal_col: 6,
        ..SyntheticConfig::default()
    }
    .generate()
    .unwrap();

    for method in CorrelationMethod::ALL {
        let map = compute_correlation_map(method, recording.stimulus.view(), recording.response.view()).unwrap();
        assert_eq!(map.dim(), (4, 7), "{} produced the wrong shape", method);
    }
}

#[test]
fn test_repeated_runs_are_bit_identical() {
    let recording = synthetic(11);

    for method in CorrelationMethod::ALL {
        let first = compute_correlation_map(method, recording.stimulus.view(), recording.response.view()).unwrap();
        let second = compute_correlation_map(method, recording.stimulus.view(), recording.response.view()).unwrap();

        let first_bits: Vec<u64> = first.iter().map(|v| v.to_bits()).collect();
        let second_bits: Vec<u64> = second.iter().map(|v| v.to_bits()).collect();
        assert_eq!(first_bits, second_bits);
    }
}

#[test]
fn test_tied_pixels_are_all_reported() {
    let mut recording = synthetic(3);
    let driver = recording.stimulus.slice(s![.., 3, 7]).to_owned();
    recording.stimulus.slice_mut(s![.., 8, 1]).assign(&driver);

    for method in CorrelationMethod::ALL {
        let estimate = estimate_receptive_field(method, &recording).unwrap();
        assert_eq!(estimate.peaks.coordinates, vec![(3, 7), (8, 1)], "{} broke a tie", method);
    }
}

#[test]
fn test_constant_response_gives_nan_map_and_no_peak() {
    let recording = synthetic(42);

    // 0.25 is exact in binary, 0.1 is not and leaves rounding error in the mean
    for level in [0.25, 0.1] {
        let constant = Recording::new(recording.stimulus.clone(), Array1::from_elem(100, level)).unwrap();

        for method in CorrelationMethod::ALL {
            let estimate = estimate_receptive_field(method, &constant).unwrap();

            assert!(
                estimate.map.iter().all(|v| v.is_nan()),
                "{} produced finite values for a constant {} response",
                method,
                level
            );
            // the maximum propagates NaN, and NaN matches no pixel
            assert!(estimate.peaks.value.is_nan());
            assert!(estimate.peaks.coordinates.is_empty());
        }
    }
}

#[test]
fn test_constant_stimulus_pixel_is_nan_in_both_methods() {
    let mut recording = synthetic(42);
    recording.stimulus.slice_mut(s![.., 0, 0]).fill(0.1);

    for method in CorrelationMethod::ALL {
        let estimate = estimate_receptive_field(method, &recording).unwrap();

        assert!(estimate.map[[0, 0]].is_nan(), "{} gave {} for a constant pixel", method, estimate.map[[0, 0]]);
        assert_eq!(estimate.map.iter().filter(|v| v.is_nan()).count(), 1);
    }
}

#[test]
fn test_mismatched_lengths_fail_for_both_methods() {
    let stimulus = Array3::<f64>::zeros((20, 3, 3));
    let response = Array1::<f64>::zeros(19);

    assert!(matches!(
        pixelwise_correlation(stimulus.view(), response.view()),
        Err(ReceptiveFieldError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        tensor_contraction(stimulus.view(), response.view()),
        Err(ReceptiveFieldError::ShapeMismatch { .. })
    ));
}
