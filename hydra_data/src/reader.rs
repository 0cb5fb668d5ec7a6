/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! the array access abstraction used by adapters. Concrete NetCDF/HDF readers are provided by the host
//! application, this module only defines the contract plus an in-memory implementation.

use std::{collections::HashMap, io::{Error as IOError, ErrorKind}, path::{Path,PathBuf}, sync::Arc};
use tracing::debug;

use crate::{op_failed, errors::{Result,HydraDataError,no_array}, fs::filename};

/// read access to the named multi-dimensional arrays of a data file (or of an aggregation of files)
pub trait ArrayReader: Send + Sync {
    fn variable_names (&self)->Vec<String>;

    fn has_array (&self, name: &str)->bool;

    fn dimension_names (&self, array: &str)->Result<Vec<String>>;

    fn dimension_lengths (&self, array: &str)->Result<Vec<usize>>;

    /// read a strided hyperslab of `array` as f32 values in row-major order
    fn float_array (&self, array: &str, start: &[usize], count: &[usize], stride: &[usize])->Result<Vec<f32>>;

    fn attribute (&self, array: &str, key: &str)->Option<String>;

    /// read the complete array
    fn all_floats (&self, array: &str)->Result<Vec<f32>> {
        let shape = self.dimension_lengths(array)?;
        let start = vec![0; shape.len()];
        let stride = vec![1; shape.len()];
        self.float_array( array, &start, &shape, &stride)
    }
}

/// the host side factory for readers
pub trait ReaderProvider {
    fn open (&self, path: &Path)->Result<Arc<dyn ArrayReader>>;

    /// open a time ordered sequence of granules as one reader that concatenates arrays along dimension `along`
    fn aggregate (&self, paths: &[PathBuf], along: &str)->Result<Arc<dyn ArrayReader>> {
        let mut granules: Vec<Arc<dyn ArrayReader>> = Vec::with_capacity( paths.len());
        for p in paths {
            granules.push( self.open(p)?);
        }
        Ok( Arc::new( GranuleAggregation::new( granules, along)?) )
    }
}

/* #region hyperslab support ********************************************************************/

pub fn check_hyperslab (shape: &[usize], start: &[usize], count: &[usize], stride: &[usize])->Result<()> {
    if start.len() != shape.len() || count.len() != shape.len() || stride.len() != shape.len() {
        return Err( HydraDataError::SubsetError( format!("rank mismatch, array has rank {}", shape.len())))
    }

    for d in 0..shape.len() {
        if stride[d] == 0 {
            return Err( HydraDataError::SubsetError( format!("zero stride in dimension {d}")))
        }
        if count[d] > 0 && start[d] + (count[d]-1) * stride[d] >= shape[d] {
            return Err( HydraDataError::SubsetError(
                format!("dimension {d} out of bounds: start={} count={} stride={} len={}", start[d], count[d], stride[d], shape[d])))
        }
    }
    Ok(())
}

/// extract a strided hyperslab from a dense row-major array
pub fn extract_hyperslab (values: &[f32], shape: &[usize], start: &[usize], count: &[usize], stride: &[usize])->Result<Vec<f32>> {
    check_hyperslab( shape, start, count, stride)?;

    let rank = shape.len();
    let n: usize = count.iter().product();
    let mut result = Vec::with_capacity(n);
    if n == 0 { return Ok(result) }

    // element offsets of each dimension in the source array
    let mut dim_offsets = vec![1usize; rank];
    for d in (0..rank.saturating_sub(1)).rev() {
        dim_offsets[d] = dim_offsets[d+1] * shape[d+1];
    }

    let mut idx = vec![0usize; rank];
    for _ in 0..n {
        let off: usize = (0..rank).map( |d| (start[d] + idx[d]*stride[d]) * dim_offsets[d]).sum();
        result.push( values[off]);

        for d in (0..rank).rev() { // increment multi-index, last dimension fastest
            idx[d] += 1;
            if idx[d] < count[d] { break }
            idx[d] = 0;
        }
    }

    Ok(result)
}

/* #endregion hyperslab support */

/* #region in-memory reader *********************************************************************/

#[derive(Debug,Clone)]
pub struct MemArray {
    pub dim_names: Vec<String>,
    pub shape: Vec<usize>,
    pub values: Vec<f32>,
    pub attributes: HashMap<String,String>,
}

/// a reader that keeps its arrays in memory
#[derive(Debug,Clone,Default)]
pub struct MemReader {
    arrays: HashMap<String,MemArray>
}

impl MemReader {
    pub fn new ()->Self { MemReader { arrays: HashMap::new() } }

    pub fn add_array (&mut self, name: &str, dim_names: &[&str], shape: &[usize], values: Vec<f32>)->Result<()> {
        let n: usize = shape.iter().product();
        if dim_names.len() != shape.len() || values.len() != n {
            return Err( op_failed!("inconsistent array {name}: {} dims, shape {:?}, {} values", dim_names.len(), shape, values.len()))
        }

        let dim_names = dim_names.iter().map( |s| s.to_string()).collect();
        self.arrays.insert( name.to_string(), MemArray { dim_names, shape: shape.to_vec(), values, attributes: HashMap::new() });
        Ok(())
    }

    pub fn with_array (mut self, name: &str, dim_names: &[&str], shape: &[usize], values: Vec<f32>)->Result<Self> {
        self.add_array( name, dim_names, shape, values)?;
        Ok(self)
    }

    pub fn set_attribute (&mut self, array: &str, key: &str, value: &str)->Result<()> {
        let a = self.arrays.get_mut(array).ok_or_else( || no_array(array))?;
        a.attributes.insert( key.to_string(), value.to_string());
        Ok(())
    }

    fn array (&self, name: &str)->Result<&MemArray> {
        self.arrays.get(name).ok_or_else( || no_array(name))
    }
}

impl ArrayReader for MemReader {
    fn variable_names (&self)->Vec<String> {
        let mut names: Vec<String> = self.arrays.keys().cloned().collect();
        names.sort();
        names
    }

    fn has_array (&self, name: &str)->bool { self.arrays.contains_key(name) }

    fn dimension_names (&self, array: &str)->Result<Vec<String>> {
        Ok( self.array(array)?.dim_names.clone() )
    }

    fn dimension_lengths (&self, array: &str)->Result<Vec<usize>> {
        Ok( self.array(array)?.shape.clone() )
    }

    fn float_array (&self, array: &str, start: &[usize], count: &[usize], stride: &[usize])->Result<Vec<f32>> {
        let a = self.array(array)?;
        extract_hyperslab( &a.values, &a.shape, start, count, stride)
    }

    fn attribute (&self, array: &str, key: &str)->Option<String> {
        self.arrays.get(array).and_then( |a| a.attributes.get(key).cloned())
    }
}

/// provider for MemReaders, keyed by file name (not path)
#[derive(Default)]
pub struct MemReaderProvider {
    readers: HashMap<String,Arc<MemReader>>
}

impl MemReaderProvider {
    pub fn new ()->Self { MemReaderProvider { readers: HashMap::new() } }

    pub fn add (&mut self, filename: &str, reader: MemReader) {
        self.readers.insert( filename.to_string(), Arc::new(reader));
    }

    pub fn with (mut self, filename: &str, reader: MemReader)->Self {
        self.add( filename, reader);
        self
    }
}

impl ReaderProvider for MemReaderProvider {
    fn open (&self, path: &Path)->Result<Arc<dyn ArrayReader>> {
        let name = filename(&path).ok_or_else( || op_failed!("not a valid filename {path:?}"))?;
        match self.readers.get(name) {
            Some(r) => {
                debug!("opened in-memory reader for {name}");
                Ok( r.clone() )
            }
            None => Err( HydraDataError::IOError( IOError::new( ErrorKind::NotFound, format!("no reader for {path:?}"))))
        }
    }
}

/* #endregion in-memory reader */

/* #region granule aggregation ******************************************************************/

/// a reader that concatenates the arrays of consecutive granules along one named dimension.
/// Arrays that do not have the aggregation dimension are taken from the first granule
pub struct GranuleAggregation {
    granules: Vec<Arc<dyn ArrayReader>>,
    along: String,
}

impl GranuleAggregation {
    pub fn new (granules: Vec<Arc<dyn ArrayReader>>, along: &str)->Result<Self> {
        if granules.is_empty() {
            return Err( op_failed!("no granules to aggregate"))
        }
        Ok( GranuleAggregation { granules, along: along.to_string() } )
    }

    pub fn num_granules (&self)->usize { self.granules.len() }

    fn agg_dim (&self, array: &str)->Result<Option<usize>> {
        let names = self.granules[0].dimension_names(array)?;
        Ok( names.iter().position( |n| *n == self.along) )
    }
}

impl ArrayReader for GranuleAggregation {
    fn variable_names (&self)->Vec<String> { self.granules[0].variable_names() }

    fn has_array (&self, name: &str)->bool {
        self.granules.iter().all( |g| g.has_array(name))
    }

    fn dimension_names (&self, array: &str)->Result<Vec<String>> {
        self.granules[0].dimension_names(array)
    }

    fn dimension_lengths (&self, array: &str)->Result<Vec<usize>> {
        let mut shape = self.granules[0].dimension_lengths(array)?;
        if let Some(d) = self.agg_dim(array)? {
            for g in &self.granules[1..] {
                shape[d] += g.dimension_lengths(array)?.get(d).copied()
                    .ok_or_else( || op_failed!("granule array {array} has no dimension {}", self.along))?;
            }
        }
        Ok(shape)
    }

    fn float_array (&self, array: &str, start: &[usize], count: &[usize], stride: &[usize])->Result<Vec<f32>> {
        match self.agg_dim(array)? {
            Some(0) => {
                // granules are stacked along the slowest varying dimension so we can just append
                let mut values: Vec<f32> = Vec::new();
                for g in &self.granules {
                    values.extend( g.all_floats(array)?);
                }
                let shape = self.dimension_lengths(array)?;
                extract_hyperslab( &values, &shape, start, count, stride)
            }
            Some(d) => Err( op_failed!("aggregation along inner dimension {d} of {array} not supported")),
            None => self.granules[0].float_array( array, start, count, stride)
        }
    }

    fn attribute (&self, array: &str, key: &str)->Option<String> {
        self.granules[0].attribute( array, key)
    }
}

/* #endregion granule aggregation */
