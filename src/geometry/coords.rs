use crate::error::{Gml2Error, Result};

/// A flat buffer of interleaved `x y z` coordinates.
///
/// Every point carries three components; parsing a two-dimensional source
/// synthesizes `z = 0`. The buffer is owned by exactly one geometry and is
/// never shared.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoordBuffer {
    coords: Vec<f64>,
}

fn check(coords: &[f64]) -> Result<()> {
    if coords.len() % 3 != 0 {
        return Err(Gml2Error::General(
            "coordinate buffer length must be a multiple of 3".to_string(),
        ));
    }
    Ok(())
}

impl CoordBuffer {
    /// Construct a new CoordBuffer
    ///
    /// # Panics
    ///
    /// - if the buffer length is not a multiple of 3
    pub fn new(coords: Vec<f64>) -> Self {
        check(&coords).unwrap();
        Self { coords }
    }

    /// Construct a new CoordBuffer
    ///
    /// # Errors
    ///
    /// - if the buffer length is not a multiple of 3
    pub fn try_new(coords: Vec<f64>) -> Result<Self> {
        check(&coords)?;
        Ok(Self { coords })
    }

    pub fn with_capacity(num_coords: usize) -> Self {
        Self {
            coords: Vec::with_capacity(num_coords * 3),
        }
    }

    /// Number of points in the buffer.
    pub fn num_coords(&self) -> usize {
        self.coords.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn push_coord(&mut self, x: f64, y: f64, z: f64) {
        self.coords.extend_from_slice(&[x, y, z]);
    }

    pub fn get_x(&self, i: usize) -> f64 {
        self.coords[i * 3]
    }

    pub fn get_y(&self, i: usize) -> f64 {
        self.coords[i * 3 + 1]
    }

    pub fn get_z(&self, i: usize) -> f64 {
        self.coords[i * 3 + 2]
    }

    /// Iterate points as `(x, y, z)` triples.
    pub fn iter_coords(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.coords.chunks_exact(3).map(|c| (c[0], c[1], c[2]))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.coords
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stride_invariant() {
        assert!(CoordBuffer::try_new(vec![0., 1.]).is_err());
        let buffer = CoordBuffer::try_new(vec![0., 1., 2.]).unwrap();
        assert_eq!(buffer.num_coords(), 1);
        assert_eq!(buffer.get_z(0), 2.);
    }

    #[test]
    fn iter_coords_yields_triples() {
        let mut buffer = CoordBuffer::default();
        buffer.push_coord(1., 2., 0.);
        buffer.push_coord(3., 4., 5.);
        let coords: Vec<_> = buffer.iter_coords().collect();
        assert_eq!(coords, vec![(1., 2., 0.), (3., 4., 5.)]);
    }
}
