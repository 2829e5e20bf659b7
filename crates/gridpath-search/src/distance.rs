use gridpath_core::{Coord, GridSize};

/// Distance metrics for building goal-distance heuristics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// L1 distance; admissible for 4-connected unit-cost kernels.
    Manhattan,
    /// L∞ distance; admissible for 8-connected unit-cost kernels.
    Chebyshev,
    /// Straight-line distance.
    Euclidean,
    /// Diagonal moves cost √2, straight moves 1.
    Octile,
}

impl Metric {
    /// Distance between `a` and `b` under this metric.
    pub fn distance(self, a: Coord, b: Coord) -> f32 {
        let dr = (a.row as f64 - b.row as f64).abs();
        let dc = (a.col as f64 - b.col as f64).abs();
        let d = match self {
            Self::Manhattan => a.manhattan(b) as f64,
            Self::Chebyshev => a.chebyshev(b) as f64,
            Self::Euclidean => dr.hypot(dc),
            Self::Octile => {
                let lo = dr.min(dc);
                let hi = dr.max(dc);
                lo * std::f64::consts::SQRT_2 + (hi - lo)
            }
        };
        d as f32
    }
}

/// Heuristic rows giving each cell's distance to `target`, in the nested
/// shape expected by [`GridCache::cache_heuristics`](crate::GridCache::cache_heuristics).
pub fn heuristic_table(size: GridSize, target: Coord, metric: Metric) -> Vec<Vec<f32>> {
    (0..size.rows)
        .map(|r| {
            (0..size.cols)
                .map(|c| metric.distance(Coord::new(r as i32, c as i32), target))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics() {
        let a = Coord::new(0, 0);
        let b = Coord::new(3, 4);
        assert_eq!(Metric::Manhattan.distance(a, b), 7.0);
        assert_eq!(Metric::Chebyshev.distance(a, b), 4.0);
        assert_eq!(Metric::Euclidean.distance(a, b), 5.0);
        let oct = Metric::Octile.distance(a, b);
        assert!((oct - (3.0 * std::f32::consts::SQRT_2 + 1.0)).abs() < 1e-5);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coord::new(-2, 7);
        let b = Coord::new(5, 1);
        for m in [Metric::Manhattan, Metric::Chebyshev, Metric::Euclidean, Metric::Octile] {
            assert_eq!(m.distance(a, b), m.distance(b, a));
            assert_eq!(m.distance(a, a), 0.0);
        }
    }

    #[test]
    fn table_shape_and_values() {
        let t = heuristic_table(GridSize::new(8, 6), Coord::new(7, 5), Metric::Manhattan);
        assert_eq!(t.len(), 8);
        assert!(t.iter().all(|row| row.len() == 6));
        assert_eq!(t[0][0], 12.0);
        assert_eq!(t[7][5], 0.0);
        assert_eq!(t[3][5], 4.0);
    }
}
