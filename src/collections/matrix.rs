//! `WeightMatrix` — a dense, symmetric adjacency matrix of optional weights.
//!
//! Storage is a single contiguous row-major `Vec`, so a full row scan (the inner
//! loop of Prim's algorithm) is cache-friendly. Each cell is `Option<W>`: `None`
//! means "no edge", which keeps a genuine zero-weight edge distinguishable from
//! an absent one.

use core::fmt;

/// A square `order × order` matrix of optional edge weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightMatrix<W> {
    data: Vec<Option<W>>,
    order: usize,
}

impl<W: Copy> WeightMatrix<W> {
    /// Creates an `order × order` matrix with no edges.
    ///
    /// # Panics
    /// Panics if `order * order` cells cannot be allocated. See [`Self::try_new`].
    pub fn new(order: usize) -> Self {
        match Self::try_new(order) {
            Some(matrix) => matrix,
            None => panic!("cannot allocate a {order} × {order} weight matrix"),
        }
    }

    /// Creates an `order × order` matrix with no edges, or `None` if the cell
    /// count overflows `usize` or the allocation is refused.
    pub fn try_new(order: usize) -> Option<Self> {
        let cells = order.checked_mul(order)?;
        let mut data = Vec::new();
        data.try_reserve_exact(cells).ok()?;
        data.resize(cells, None);
        Some(Self { data, order })
    }

    /// Returns the number of rows (equal to the number of columns).
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the weight stored at (row, col), or `None` if there is no edge
    /// or the position is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<W> {
        if row < self.order && col < self.order {
            self.data[row * self.order + col]
        } else {
            None
        }
    }

    /// Stores `weight` at both (a, b) and (b, a).
    ///
    /// # Panics
    /// Panics if `a` or `b` is out of bounds.
    pub fn set_symmetric(&mut self, a: usize, b: usize, weight: W) {
        assert!(
            a < self.order && b < self.order,
            "cell ({a}, {b}) out of bounds for order {}",
            self.order
        );
        self.data[a * self.order + b] = Some(weight);
        self.data[b * self.order + a] = Some(weight);
    }

    /// Returns row `row` as a slice.
    ///
    /// # Panics
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn row(&self, row: usize) -> &[Option<W>] {
        assert!(row < self.order, "row {row} out of bounds");
        let start = row * self.order;
        &self.data[start..start + self.order]
    }

    /// Iterates over the present entries of `row` as `(column, weight)`.
    pub fn row_entries(&self, row: usize) -> impl Iterator<Item = (usize, W)> + '_ {
        self.row(row)
            .iter()
            .enumerate()
            .filter_map(|(col, cell)| cell.map(|w| (col, w)))
    }

    /// Returns `true` if `matrix[i][j] == matrix[j][i]` for every cell.
    pub fn is_symmetric(&self) -> bool
    where
        W: PartialEq,
    {
        (0..self.order).all(|i| (i + 1..self.order).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

/// Renders one row per line, cells separated by a space. Absent edges print as `0`.
impl<W: Copy + fmt::Display> fmt::Display for WeightMatrix<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.order {
            for cell in self.row(row) {
                match cell {
                    Some(w) => write!(f, "{w} ")?,
                    None => f.write_str("0 ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_is_symmetric() {
        let mut m = WeightMatrix::new(3);
        m.set_symmetric(0, 2, 5);
        assert_eq!(m.get(0, 2), Some(5));
        assert_eq!(m.get(2, 0), Some(5));
        assert_eq!(m.get(1, 1), None);
        assert!(m.is_symmetric());
    }

    #[test]
    fn zero_weight_is_not_absence() {
        let mut m = WeightMatrix::new(2);
        m.set_symmetric(0, 1, 0);
        assert_eq!(m.get(0, 1), Some(0));
        assert_eq!(m.row_entries(0).collect::<Vec<_>>(), vec![(1, 0)]);
    }

    #[test]
    fn later_insert_overwrites() {
        let mut m = WeightMatrix::new(2);
        m.set_symmetric(0, 1, 9);
        m.set_symmetric(1, 0, 4);
        assert_eq!(m.get(0, 1), Some(4));
        assert_eq!(m.get(1, 0), Some(4));
    }

    #[test]
    fn out_of_bounds_get_is_none() {
        let m = WeightMatrix::<i32>::new(2);
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn oversized_order_is_refused() {
        assert!(WeightMatrix::<i64>::try_new(usize::MAX).is_none());
        // Cell count overflows usize.
        assert!(WeightMatrix::<i64>::try_new(1 << (usize::BITS / 2)).is_none());
        // Cell count fits, byte size does not.
        assert!(WeightMatrix::<i64>::try_new(1 << (usize::BITS / 2 - 1)).is_none());
        assert_eq!(WeightMatrix::<i64>::try_new(0).map(|m| m.order()), Some(0));
    }

    #[test]
    #[should_panic(expected = "cannot allocate")]
    fn new_panics_on_oversized_order() {
        let _ = WeightMatrix::<i64>::new(usize::MAX);
    }

    #[test]
    fn display_matches_row_layout() {
        let mut m = WeightMatrix::new(2);
        m.set_symmetric(0, 1, 3);
        assert_eq!(m.to_string(), "0 3 \n3 0 \n");
    }
}
