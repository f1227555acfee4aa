//! Jenks natural-breaks dynamic program
//!
//! Finds the partition of sorted, weighted points into `k` contiguous
//! classes minimizing the summed within-class squared deviation.
//! Exact classification passes every observation with weight 1; the
//! histogram variant passes bucket midpoints weighted by bucket count.
//!
//! Cost is `O(m^2 * k)` time and `O((m + 1) * (k + 1))` memory for `m`
//! points.

/// Fixed-size row-major table indexed `[row][col]`
struct Grid<T> {
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.cols + col] = value;
    }
}

/// Optimal partition found by [`jenks_partition`]
#[derive(Debug, Clone, PartialEq)]
pub struct JenksPartition {
    /// For each inner boundary, in increasing order, the index of the
    /// last point of the lower class
    pub last_of_class: Vec<usize>,
    /// Summed within-class squared deviation of the partition
    pub total_variance: f64,
}

/// Run the dynamic program over `points` (`(value, weight)`, sorted by
/// value, weights > 0) for `k` classes.
///
/// Callers must ensure `1 <= k` and `k` is smaller than the number of
/// points; with fewer points than classes some classes come back empty
/// and are dropped from `last_of_class`.
pub fn jenks_partition(points: &[(f64, f64)], k: usize) -> JenksPartition {
    let m = points.len();
    if m == 0 || k == 0 {
        return JenksPartition {
            last_of_class: Vec::new(),
            total_variance: 0.0,
        };
    }

    // work[i][j]: best cost for the first i points in j classes
    // iwork[i][j]: 1-based index of the first point of class j in that split
    let mut work = Grid::new(m + 1, k + 1, 0.0f64);
    let mut iwork = Grid::new(m + 1, k + 1, 0usize);
    for j in 1..=k {
        iwork.set(0, j, 1);
        iwork.set(1, j, 1);
        work.set(1, j, 0.0);
        for i in 2..=m {
            work.set(i, j, f64::INFINITY);
        }
    }

    for i in 1..=m {
        let (mut s1, mut s2, mut w) = (0.0f64, 0.0f64, 0.0f64);
        let mut var = 0.0f64;
        for ii in 1..=i {
            // Candidate last class spans points i3..=i (1-based)
            let i3 = i - ii + 1;
            let (value, weight) = points[i3 - 1];
            s1 += value * weight;
            s2 += value * value * weight;
            w += weight;
            var = s2 - (s1 * s1) / w;
            let ik = i3 - 1;
            if ik != 0 {
                for j in 2..=k {
                    let candidate = var + work.get(ik, j - 1);
                    if candidate <= work.get(i, j) {
                        iwork.set(i, j, i3);
                        work.set(i, j, candidate);
                    }
                }
            }
        }
        iwork.set(i, 1, 1);
        work.set(i, 1, var);
    }

    let mut last_of_class = Vec::with_capacity(k.saturating_sub(1));
    let mut i = m;
    for j in (2..=k).rev() {
        let first = iwork.get(i, j);
        if first < 2 {
            break;
        }
        // 1-based first of class j => 0-based last of class j - 1
        last_of_class.push(first - 2);
        i = first - 1;
    }
    last_of_class.reverse();

    JenksPartition {
        last_of_class,
        total_variance: work.get(m, k),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(values: &[f64]) -> Vec<(f64, f64)> {
        values.iter().map(|&v| (v, 1.0)).collect()
    }

    #[test]
    fn test_two_clusters() {
        let points = unit(&[1.0, 2.0, 3.0, 4.0, 5.0, 10.0, 11.0, 12.0, 13.0, 14.0]);
        let p = jenks_partition(&points, 2);
        assert_eq!(p.last_of_class, vec![4]);
        // Each cluster has squared deviation 10
        assert!((p.total_variance - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_three_clusters() {
        let points = unit(&[0.0, 0.5, 1.0, 20.0, 21.0, 40.0, 40.5, 41.0]);
        let p = jenks_partition(&points, 3);
        assert_eq!(p.last_of_class, vec![2, 4]);
    }

    #[test]
    fn test_single_class() {
        let points = unit(&[1.0, 2.0, 3.0]);
        let p = jenks_partition(&points, 1);
        assert!(p.last_of_class.is_empty());
        assert!((p.total_variance - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_weights_pull_boundary() {
        // Heavy point at 0 and the light one at 4 go together; 10 stays alone
        let p = jenks_partition(&[(0.0, 100.0), (4.0, 1.0), (10.0, 1.0)], 2);
        assert_eq!(p.last_of_class, vec![1]);
    }

    #[test]
    fn test_variance_non_increasing_in_k() {
        let points = unit(&[1.0, 1.5, 3.0, 7.0, 7.2, 8.0, 15.0, 16.0, 30.0, 31.0, 33.0]);
        let mut previous = f64::INFINITY;
        for k in 1..=6 {
            let v = jenks_partition(&points, k).total_variance;
            assert!(v <= previous + 1e-9, "k={} variance {} > {}", k, v, previous);
            previous = v;
        }
    }

    #[test]
    fn test_empty_input() {
        let p = jenks_partition(&[], 3);
        assert!(p.last_of_class.is_empty());
        assert_eq!(p.total_variance, 0.0);
    }
}
