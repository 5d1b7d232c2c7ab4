use serde::{Deserialize, Serialize};
use crate::index_space::{Index3d, IndexMap, IndexSpace};




/**
 * A patch is a mapping from a rectangular 3D index space to a fixed number
 * of field values per node. The backing array is row-major over the index
 * space, with the field index running fastest; a patch holding conserved
 * variables is therefore laid out exactly as the kernel functions in
 * `hydro` expect their state buffer.
 */
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    space: IndexSpace,
    num_fields: usize,
    data: Vec<f64>,
}




// ============================================================================
impl Patch {




    /**
     * Generate a patch of zeros over the given index space.
     */
    pub fn zeros<I: Into<IndexSpace>>(num_fields: usize, space: I) -> Self {
        let space = space.into();
        let data = vec![0.0; space.len() * num_fields];
        Self {
            space,
            num_fields,
            data,
        }
    }




    /**
     * Generate a patch covering the given space, with values defined from a
     * closure which writes the fields at each index into a mutable slice.
     */
    pub fn from_slice_function<I, F>(space: I, num_fields: usize, f: F) -> Self
    where
        I: Into<IndexSpace>,
        F: Fn(Index3d, &mut [f64]),
    {
        let mut patch = Self::zeros(num_fields, space);
        let space = patch.space.clone();

        for (index, slice) in space.iter().zip(patch.data.chunks_exact_mut(num_fields)) {
            f(index, slice)
        }
        patch
    }




    /**
     * Return the index space covered by this patch.
     */
    pub fn index_space(&self) -> IndexSpace {
        self.space.clone()
    }

    /**
     * Return the number of fields stored at each node.
     */
    pub fn num_fields(&self) -> usize {
        self.num_fields
    }

    /**
     * Return the whole backing array.
     */
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /**
     * Return the whole backing array, mutably.
     */
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /**
     * Return the fields at the given index. Panics if the index is outside
     * the patch.
     */
    pub fn get_slice(&self, index: Index3d) -> &[f64] {
        let s = self.node_offset(index);
        &self.data[s..s + self.num_fields]
    }

    /**
     * Return the fields at the given index, mutably. Panics if the index is
     * outside the patch.
     */
    pub fn get_slice_mut(&mut self, index: Index3d) -> &mut [f64] {
        let s = self.node_offset(index);
        &mut self.data[s..s + self.num_fields]
    }




    /**
     * Map the fields at each node through a function, producing a new patch
     * over the same space with `num_fields` fields per node.
     */
    pub fn map<F>(&self, num_fields: usize, f: F) -> Self
    where
        F: Fn(&[f64], &mut [f64]),
    {
        let mut result = Self::zeros(num_fields, self.space.clone());

        for (a, b) in self.data.chunks_exact(self.num_fields).zip(result.data.chunks_exact_mut(num_fields)) {
            f(a, b)
        }
        result
    }

    fn node_offset(&self, index: Index3d) -> usize {
        if !self.space.contains(index) {
            let (k, j, i) = index;
            let (k0, j0, i0) = self.space.start();
            let (k1, j1, i1) = self.space.end();
            panic!("index ({} {} {}) out of range on patch ({}..{} {}..{} {}..{})",
                k, j, i, k0, k1, j0, j1, i0, i1);
        }
        self.space.offset(index) * self.num_fields
    }
}
