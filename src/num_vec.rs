use core::ops::{Add, Div, Index, IndexMut, Mul, Sub};




/**
 * A statically-sized numeric vector over a generic scalar data type T, which
 * supports arithmetic operations also supported by T.
 */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T, const DIM: usize> {
    data: [T; DIM],
}




// ============================================================================
impl<T: Copy, const DIM: usize> Vector<T, DIM> {

    pub fn new(data: [T; DIM]) -> Self {
        Self { data }
    }

    pub fn as_array(&self) -> [T; DIM] {
        self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /**
     * Apply a function to each component, returning a new vector.
     */
    pub fn map<F, V>(&self, f: F) -> Vector<V, DIM>
    where
        F: Fn(T) -> V,
        V: Copy + Default,
    {
        let mut data = [V::default(); DIM];

        for (x, y) in data.iter_mut().zip(self.data.iter()) {
            *x = f(*y)
        }
        Vector { data }
    }
}

impl<const DIM: usize> Vector<f64, DIM> {

    pub fn zeros() -> Self {
        Self { data: [0.0; DIM] }
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.data.iter().zip(other.data.iter()).map(|(a, b)| a * b).sum()
    }

    /**
     * Return the largest absolute value among the components (the max-norm).
     */
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0, |m: f64, x| m.max(x.abs()))
    }
}

impl<T: Copy + Default, const DIM: usize> Default for Vector<T, DIM> {
    fn default() -> Self {
        Self { data: [T::default(); DIM] }
    }
}

impl<T, const DIM: usize> From<[T; DIM]> for Vector<T, DIM> {
    fn from(data: [T; DIM]) -> Self {
        Self { data }
    }
}




// ============================================================================
impl<T, U, V, const DIM: usize> Add<Vector<U, DIM>> for Vector<T, DIM>
where
    T: Copy + Add<U, Output = V>,
    U: Copy,
    V: Copy + Default
{
    type Output = Vector<V, DIM>;

    fn add(self, other: Vector<U, DIM>) -> Self::Output {
        let mut data = [V::default(); DIM];

        for (i, x) in data.iter_mut().enumerate() {
            *x = self[i].add(other[i])
        }
        Self::Output { data }
    }
}

impl<T, U, V, const DIM: usize> Sub<Vector<U, DIM>> for Vector<T, DIM>
where
    T: Copy + Sub<U, Output = V>,
    U: Copy,
    V: Copy + Default
{
    type Output = Vector<V, DIM>;

    fn sub(self, other: Vector<U, DIM>) -> Self::Output {
        let mut data = [V::default(); DIM];

        for (i, x) in data.iter_mut().enumerate() {
            *x = self[i].sub(other[i])
        }
        Self::Output { data }
    }
}

impl<T, V, const DIM: usize> Mul<f64> for Vector<T, DIM>
where
    T: Copy + Mul<f64, Output = V>,
    V: Copy + Default
{
    type Output = Vector<V, DIM>;

    fn mul(self, other: f64) -> Self::Output {
        let mut data = [V::default(); DIM];

        for (i, x) in data.iter_mut().enumerate() {
            *x = self[i].mul(other)
        }
        Self::Output { data }
    }
}

impl<T, V, const DIM: usize> Div<f64> for Vector<T, DIM>
where
    T: Copy + Div<f64, Output = V>,
    V: Copy + Default
{
    type Output = Vector<V, DIM>;

    fn div(self, other: f64) -> Self::Output {
        let mut data = [V::default(); DIM];

        for (i, x) in data.iter_mut().enumerate() {
            *x = self[i].div(other)
        }
        Self::Output { data }
    }
}




// ============================================================================
impl<T, const DIM: usize> Index<usize> for Vector<T, DIM> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, const DIM: usize> IndexMut<usize> for Vector<T, DIM> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}




/**
 * A statically-sized square matrix of `f64`, stored row-major. Used for the
 * left and right eigenvector bases of the flux Jacobian.
 */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<const DIM: usize> {
    rows: [[f64; DIM]; DIM],
}




// ============================================================================
impl<const DIM: usize> Matrix<DIM> {

    pub fn from_rows(rows: [[f64; DIM]; DIM]) -> Self {
        Self { rows }
    }

    pub fn zeros() -> Self {
        Self { rows: [[0.0; DIM]; DIM] }
    }

    pub fn identity() -> Self {
        let mut m = Self::zeros();

        for i in 0..DIM {
            m.rows[i][i] = 1.0;
        }
        m
    }

    /**
     * Return the largest absolute entry-wise difference from another matrix.
     */
    pub fn max_abs_difference(&self, other: &Self) -> f64 {
        let mut m: f64 = 0.0;

        for i in 0..DIM {
            for j in 0..DIM {
                m = m.max((self.rows[i][j] - other.rows[i][j]).abs());
            }
        }
        m
    }
}




// ============================================================================
impl<const DIM: usize> Mul<Vector<f64, DIM>> for Matrix<DIM> {
    type Output = Vector<f64, DIM>;

    fn mul(self, x: Vector<f64, DIM>) -> Self::Output {
        let mut data = [0.0; DIM];

        for (row, y) in self.rows.iter().zip(data.iter_mut()) {
            for (a, b) in row.iter().zip(x.data.iter()) {
                *y += a * b;
            }
        }
        Vector::new(data)
    }
}

impl<const DIM: usize> Mul<Matrix<DIM>> for Matrix<DIM> {
    type Output = Matrix<DIM>;

    fn mul(self, other: Matrix<DIM>) -> Self::Output {
        let mut m = Self::zeros();

        for i in 0..DIM {
            for j in 0..DIM {
                for k in 0..DIM {
                    m.rows[i][j] += self.rows[i][k] * other.rows[k][j];
                }
            }
        }
        m
    }
}

impl<const DIM: usize> Index<(usize, usize)> for Matrix<DIM> {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.rows[index.0][index.1]
    }
}

impl<const DIM: usize> IndexMut<(usize, usize)> for Matrix<DIM> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.rows[index.0][index.1]
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::{Matrix, Vector};

    #[test]
    fn vector_arithmetic_is_componentwise() {
        let x = Vector::new([1.0, 2.0, 3.0]);
        let y = Vector::new([0.5, 0.5, 0.5]);
        assert_eq!((x + y).as_array(), [1.5, 2.5, 3.5]);
        assert_eq!((x - y).as_array(), [0.5, 1.5, 2.5]);
        assert_eq!((x * 2.0).as_array(), [2.0, 4.0, 6.0]);
        assert_eq!((x / 2.0).as_array(), [0.5, 1.0, 1.5]);
        assert_eq!(x.dot(&y), 3.0);
        assert_eq!((y - x).max_abs(), 2.5);
    }

    #[test]
    fn identity_is_neutral_for_products() {
        let a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let x = Vector::new([5.0, 6.0]);
        assert_eq!(Matrix::<2>::identity() * a, a);
        assert_eq!(a * Matrix::<2>::identity(), a);
        assert_eq!((Matrix::<2>::identity() * x).as_array(), x.as_array());
    }

    #[test]
    fn matrix_vector_product_uses_rows() {
        let a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let x = Vector::new([1.0, 1.0]);
        assert_eq!((a * x).as_array(), [3.0, 7.0]);
        assert_eq!(a[(1, 0)], 3.0);
        assert_eq!(a.max_abs_difference(&Matrix::<2>::identity()), 3.0);
    }
}
