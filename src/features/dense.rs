use ndarray::{Array1, Array2, ArrayBase, ArrayView1, Axis, Data, Ix2};
use super::{check_row_scalars, check_weights, FeatureMatrix};
use crate::error::Result;

impl<S> FeatureMatrix for ArrayBase<S, Ix2>
where
    S: Data<Elem = f64>,
{
    type Scaled = Array2<f64>;

    fn num_edges(&self) -> usize {
        self.nrows()
    }

    fn num_features(&self) -> usize {
        self.ncols()
    }

    fn dot_weights(&self, weights: ArrayView1<f64>) -> Result<Array1<f64>> {
        check_weights(self.dim(), weights.len())?;
        Ok(self.dot(&weights))
    }

    fn scale_rows(&self, scalars: ArrayView1<f64>) -> Result<Array2<f64>> {
        check_row_scalars(self.dim(), scalars.len())?;
        let column = scalars.insert_axis(Axis(1));
        Ok(self * &column)
    }
}
