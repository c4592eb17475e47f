use log::warn;
use ndarray::Array2;

/// Global maximum of a correlation map and every pixel attaining it.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakLocation {
    /// The maximum value. NaN if any map entry is NaN.
    pub value: f64,
    /// `(row, column)` pairs equal to `value`, in row-major order.
    pub coordinates: Vec<(usize, usize)>,
}

impl PeakLocation {
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Row indices of all peaks (the `y` axis of the heatmap).
    pub fn rows(&self) -> Vec<usize> {
        self.coordinates.iter().map(|&(row, _)| row).collect()
    }

    /// Column indices of all peaks (the `x` axis of the heatmap).
    pub fn columns(&self) -> Vec<usize> {
        self.coordinates.iter().map(|&(_, col)| col).collect()
    }
}

/// Find every position holding the global maximum of `map`.
///
/// Ties are never broken: all tied pixels are returned. NaN propagates through
/// the maximum, and because NaN compares unequal to everything, a map holding any
/// NaN yields a NaN `value` with no coordinates. An empty map yields `-inf` and no
/// coordinates.
pub fn find_peaks(map: &Array2<f64>) -> PeakLocation {
    let max_value = map.iter().fold(f64::NEG_INFINITY, |acc, &value| {
        if acc.is_nan() || value.is_nan() {
            f64::NAN
        } else {
            acc.max(value)
        }
    });

    let coordinates: Vec<(usize, usize)> = map
        .indexed_iter()
        .filter(|&(_, &value)| value == max_value)
        .map(|(position, _)| position)
        .collect();

    if max_value.is_nan() {
        warn!("Correlation map contains NaN (constant input series); no peak location can be reported");
    }

    PeakLocation {
        value: max_value,
        coordinates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_single_peak() {
        let map = array![[0.1, 0.2, -0.3], [0.05, 0.9, 0.4]];
        let peaks = find_peaks(&map);

        assert_eq!(peaks.value, 0.9);
        assert_eq!(peaks.coordinates, vec![(1, 1)]);
    }

    #[test]
    fn test_ties_are_all_reported() {
        let map = array![[0.7, 0.1], [0.2, 0.7], [0.7, -0.5]];
        let peaks = find_peaks(&map);

        assert_eq!(peaks.coordinates, vec![(0, 0), (1, 1), (2, 0)]);
        assert_eq!(peaks.rows(), vec![0, 1, 2]);
        assert_eq!(peaks.columns(), vec![0, 1, 0]);
    }

    #[test]
    fn test_nan_propagates_and_empties_coordinates() {
        let map = array![[0.3, f64::NAN], [0.8, 0.1]];
        let peaks = find_peaks(&map);

        assert!(peaks.value.is_nan());
        assert!(peaks.is_empty());
    }

    #[test]
    fn test_empty_map() {
        let map = Array2::<f64>::zeros((0, 4));
        let peaks = find_peaks(&map);

        assert_eq!(peaks.value, f64::NEG_INFINITY);
        assert!(peaks.is_empty());
    }
}
