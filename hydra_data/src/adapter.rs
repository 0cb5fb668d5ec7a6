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

//! adapters map the array structure of a data file into `RangeData` values for a given subset

use std::{fmt, sync::Arc};
use serde::Serialize;

use crate::{
    op_failed,
    choice::{DimRange,MultiDimensionSubset},
    errors::{Result,no_array},
    reader::ArrayReader,
};

/// the numeric data abstraction handed to post-processing and display. Values are row-major
#[derive(Debug,Clone,PartialEq)]
pub struct RangeData {
    pub shape: Vec<usize>,
    pub values: Vec<f32>,
}

impl RangeData {
    pub fn new (shape: Vec<usize>, values: Vec<f32>)->Self { RangeData { shape, values } }

    /// in-place access to the samples
    pub fn floats_mut (&mut self)->&mut [f32] { &mut self.values }

    pub fn floats (&self)->&[f32] { &self.values }

    pub fn len (&self)->usize { self.values.len() }

    pub fn is_empty (&self)->bool { self.values.is_empty() }

    pub fn count_nan (&self)->usize { self.values.iter().filter( |v| v.is_nan()).count() }
}

/// converts raw array values into physical values after they are read
pub trait RangeProcessor: Send + Sync {
    fn process_range (&self, values: &mut [f32]);

    /// process the row-major values of the hyperslab `start/count/stride` of an array with dimensions
    /// `dim_names`. Processors that depend on the position of a value override this
    fn process_hyperslab (&self, _dim_names: &[String], _start: &[usize], _count: &[usize], _stride: &[usize], values: &mut [f32]) {
        self.process_range( values)
    }
}

pub trait DataAdapter: Send + Sync {
    fn array_name (&self)->&str;

    /// the subset that covers the whole array with the adapter's default stride
    fn default_subset (&self)->MultiDimensionSubset;

    fn read (&self, subset: &MultiDimensionSubset)->Result<RangeData>;
}

fn read_subset (reader: &dyn ArrayReader, array: &str, dim_names: &[String], subset: &MultiDimensionSubset)->Result<RangeData> {
    let (start,count,stride) = subset.to_hyperslab( dim_names)?;
    let values = reader.float_array( array, &start, &count, &stride)?;
    Ok( RangeData::new( count, values) )
}

/* #region swath adapter ************************************************************************/

/// the metadata table that describes how to map a swath array and its geolocation
#[derive(Debug,Clone,PartialEq,Default,Serialize)]
pub struct SwathMetadata {
    pub xtrack: String,
    pub track: String,
    pub geo_xtrack: String,
    pub geo_track: String,
    pub array_name: String,
    pub range_name: String,
    pub lon_array: String,
    pub lat_array: String,
    pub array_dims: Option<Vec<String>>,
    pub lon_array_dims: Option<Vec<String>>,
    pub lat_array_dims: Option<Vec<String>>,
    pub fill_value_name: Option<String>,
    pub unsigned: bool,
    pub bt_lut_name: Option<String>,  // only set for emissive bands
}

impl SwathMetadata {
    pub fn new (xtrack: &str, track: &str, array: &str, range: &str, geo_xtrack: &str, geo_track: &str, lon_array: &str, lat_array: &str)->Self {
        SwathMetadata {
            xtrack: xtrack.to_string(),
            track: track.to_string(),
            geo_xtrack: geo_xtrack.to_string(),
            geo_track: geo_track.to_string(),
            array_name: array.to_string(),
            range_name: range.to_string(),
            lon_array: lon_array.to_string(),
            lat_array: lat_array.to_string(),
            unsigned: true,
            ..Default::default()
        }
    }

    pub fn with_fill_value_name (mut self, fill_value_name: Option<&str>)->Self {
        self.fill_value_name = fill_value_name.map( |s| s.to_string());
        self
    }
}

pub struct SwathAdapter {
    reader: Arc<dyn ArrayReader>,
    geo_reader: Option<Arc<dyn ArrayReader>>,
    metadata: SwathMetadata,
    dim_names: Vec<String>,
    shape: Vec<usize>,
    range_processor: Option<Arc<dyn RangeProcessor>>,
}

impl fmt::Debug for SwathAdapter {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        f.debug_struct("SwathAdapter").field("metadata", &self.metadata).field("shape", &self.shape).finish()
    }
}

impl SwathAdapter {
    pub fn new (reader: Arc<dyn ArrayReader>, metadata: SwathMetadata, geo_reader: Option<Arc<dyn ArrayReader>>)->Result<Self> {
        let array = metadata.array_name.as_str();
        if !reader.has_array(array) {
            return Err( no_array(array))
        }

        let dim_names = match &metadata.array_dims {
            Some(dims) => dims.clone(),
            None => reader.dimension_names(array)?
        };
        let shape = reader.dimension_lengths(array)?;
        if dim_names.len() != shape.len() {
            return Err( op_failed!("dimension names {:?} do not match rank of {array}", dim_names))
        }
        for d in [&metadata.track, &metadata.xtrack] {
            if !dim_names.contains(d) {
                return Err( op_failed!("array {array} has no dimension {d}"))
            }
        }

        if let Some(geo) = &geo_reader {
            for a in [&metadata.lon_array, &metadata.lat_array] {
                if !geo.has_array(a) { return Err( no_array(a)) }
            }
        }

        Ok( SwathAdapter { reader, geo_reader, metadata, dim_names, shape, range_processor: None } )
    }

    pub fn with_range_processor (mut self, rp: Arc<dyn RangeProcessor>)->Self {
        self.range_processor = Some(rp);
        self
    }

    pub fn metadata (&self)->&SwathMetadata { &self.metadata }

    pub fn shape (&self)->&[usize] { &self.shape }

    pub fn has_geolocation (&self)->bool { self.geo_reader.is_some() }

    pub fn geo_reader (&self)->Option<&Arc<dyn ArrayReader>> { self.geo_reader.as_ref() }

    /// read the longitude and latitude arrays for the given subset
    pub fn read_geolocation (&self, subset: &MultiDimensionSubset)->Result<(RangeData,RangeData)> {
        let geo = self.geo_reader.as_ref().ok_or_else( || op_failed!("no geolocation for {}", self.metadata.array_name))?;
        let geo_subset = self.geo_subset( subset)?;
        let lon_dims = self.geo_dims( geo.as_ref(), &self.metadata.lon_array, &self.metadata.lon_array_dims)?;
        let lat_dims = self.geo_dims( geo.as_ref(), &self.metadata.lat_array, &self.metadata.lat_array_dims)?;

        let lons = read_subset( geo.as_ref(), &self.metadata.lon_array, &lon_dims, &geo_subset)?;
        let lats = read_subset( geo.as_ref(), &self.metadata.lat_array, &lat_dims, &geo_subset)?;
        Ok( (lons,lats) )
    }

    fn geo_dims (&self, geo: &dyn ArrayReader, array: &str, dims: &Option<Vec<String>>)->Result<Vec<String>> {
        match dims {
            Some(dims) => Ok(dims.clone()),
            None => geo.dimension_names(array)
        }
    }

    // the geolocation arrays use their own track/xtrack dimension names
    fn geo_subset (&self, subset: &MultiDimensionSubset)->Result<MultiDimensionSubset> {
        let md = &self.metadata;
        let track = subset.get(&md.track).ok_or_else( || op_failed!("subset has no {} range", md.track))?;
        let xtrack = subset.get(&md.xtrack).ok_or_else( || op_failed!("subset has no {} range", md.xtrack))?;
        Ok( MultiDimensionSubset::new().with( md.geo_track.clone(), *track).with( md.geo_xtrack.clone(), *xtrack) )
    }
}

impl DataAdapter for SwathAdapter {
    fn array_name (&self)->&str { &self.metadata.array_name }

    fn default_subset (&self)->MultiDimensionSubset {
        let mut subset = MultiDimensionSubset::new();
        for (name,len) in self.dim_names.iter().zip( self.shape.iter()) {
            subset.set( name.clone(), DimRange::full( *len, 1));
        }
        subset
    }

    fn read (&self, subset: &MultiDimensionSubset)->Result<RangeData> {
        let (start,count,stride) = subset.to_hyperslab( &self.dim_names)?;
        let values = self.reader.float_array( &self.metadata.array_name, &start, &count, &stride)?;
        let mut data = RangeData::new( count.clone(), values);

        if let Some(rp) = &self.range_processor {
            rp.process_hyperslab( &self.dim_names, &start, &count, &stride, data.floats_mut());
        }
        Ok(data)
    }
}

/* #endregion swath adapter */

/* #region grid adapter *************************************************************************/

pub const GRID_X: &str = "GridX";
pub const GRID_Y: &str = "GridY";

/// adapter for the fixed 2D grids of geostationary imagers (y is the slow dimension)
pub struct GridAdapter {
    reader: Arc<dyn ArrayReader>,
    array_name: String,
    y_dim: String,
    x_dim: String,
    y_len: usize,
    x_len: usize,
    default_stride: usize,
}

impl fmt::Debug for GridAdapter {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        f.debug_struct("GridAdapter")
            .field("array_name", &self.array_name)
            .field("shape", &[self.y_len, self.x_len])
            .field("default_stride", &self.default_stride)
            .finish()
    }
}

impl GridAdapter {
    pub fn new (reader: Arc<dyn ArrayReader>, array_name: &str, default_stride: usize)->Result<Self> {
        if !reader.has_array(array_name) {
            return Err( no_array(array_name))
        }

        let dims = reader.dimension_names(array_name)?;
        let shape = reader.dimension_lengths(array_name)?;
        if dims.len() != 2 || shape.len() != 2 {
            return Err( op_failed!("grid array {array_name} is not two dimensional: {dims:?}"))
        }

        Ok( GridAdapter {
            reader,
            array_name: array_name.to_string(),
            y_dim: dims[0].clone(),
            x_dim: dims[1].clone(),
            y_len: shape[0],
            x_len: shape[1],
            default_stride: default_stride.max(1),
        })
    }

    pub fn default_stride (&self)->usize { self.default_stride }

    pub fn grid_size (&self)->(usize,usize) { (self.x_len, self.y_len) }
}

impl DataAdapter for GridAdapter {
    fn array_name (&self)->&str { &self.array_name }

    /// zero based full extent in both grid dimensions, using the default stride
    fn default_subset (&self)->MultiDimensionSubset {
        MultiDimensionSubset::new()
            .with( GRID_Y, DimRange::full( self.y_len, self.default_stride))
            .with( GRID_X, DimRange::full( self.x_len, self.default_stride))
    }

    fn read (&self, subset: &MultiDimensionSubset)->Result<RangeData> {
        let y = subset.get(GRID_Y).ok_or_else( || op_failed!("subset has no {GRID_Y} range"))?;
        let x = subset.get(GRID_X).ok_or_else( || op_failed!("subset has no {GRID_X} range"))?;

        // map the generic grid dimension names onto the ones used in the file
        let file_subset = MultiDimensionSubset::new().with( self.y_dim.clone(), *y).with( self.x_dim.clone(), *x);
        let dim_names = [self.y_dim.clone(), self.x_dim.clone()];
        read_subset( self.reader.as_ref(), &self.array_name, &dim_names, &file_subset)
    }
}

/* #endregion grid adapter */
