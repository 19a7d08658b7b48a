use std::ops;

use crate::dims::Dims;

/// Row-major 2D buffer indexed by `Dims(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    /// Size as `Dims(rows, cols)`.
    pub fn size(&self) -> Dims {
        Dims(self.height as i32, self.width as i32)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        let Dims(row, col) = pos;
        if row < 0 || col < 0 {
            return None;
        }

        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }

        Some(row * self.width + col)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        let row = idx / self.width;
        let col = idx % self.width;

        Some(Dims(row as i32, col as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    /// Iterates over rows, each one a slice of `width` items.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.buf.chunks(self.width.max(1))
    }

    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Array2D<U> {
        Array2D {
            buf: self.buf.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, width: usize, height: usize) -> Self {
        Self {
            buf: vec![item; width * height],
            width,
            height,
        }
    }

    pub fn fill(&mut self, item: T) {
        self.buf.fill(item);
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        let arr = Array2D::new(0u8, 4, 3);
        assert_eq!(arr.size(), Dims(3, 4));
        assert_eq!(arr.dim_to_idx(Dims(2, 3)), Some(11));
        assert_eq!(arr.idx_to_dim(11), Some(Dims(2, 3)));
        assert_eq!(arr.idx_to_dim(12), None);
    }

    #[test]
    fn out_of_bounds_is_none() {
        let arr = Array2D::new(false, 2, 2);
        assert_eq!(arr.get(Dims(-1, 0)), None);
        assert_eq!(arr.get(Dims(0, -1)), None);
        assert_eq!(arr.get(Dims(2, 0)), None);
        assert_eq!(arr.get(Dims(0, 2)), None);
        assert_eq!(arr.get(Dims(1, 1)), Some(&false));
    }

    #[test]
    fn rows_are_width_long() {
        let mut arr = Array2D::new(0, 3, 2);
        arr[Dims(1, 2)] = 7;
        let rows: Vec<_> = arr.rows().collect();
        assert_eq!(rows, vec![&[0, 0, 0][..], &[0, 0, 7][..]]);

        arr.fill(1);
        assert!(arr.iter().all(|&x| x == 1));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let arr = Array2D::new(0, 1, 1);
        let _ = arr[Dims(1, 0)];
    }
}
