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

use std::{collections::BTreeMap, fmt::{self,Display}, sync::Arc};
use serde::{Serialize,Deserialize};

use crate::errors::{Result,HydraDataError};

/* #region data groups and selections ***********************************************************/

/// classification tag for data choices, e.g. "HKMrefl" or "DNB-Band". Groups are equal if their names are
#[derive(Debug,Clone,PartialEq,Eq,Hash,PartialOrd,Ord,Serialize,Deserialize)]
pub struct DataGroup(Arc<str>);

impl DataGroup {
    pub fn new (name: &str)->Self { DataGroup( Arc::from(name)) }
    pub fn name (&self)->&str { &self.0 }
}

impl Display for DataGroup {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result { write!(f, "{}", self.0) }
}

/// index range of one array dimension. `stop` is inclusive
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub struct DimRange {
    pub start: usize,
    pub stop: usize,
    pub stride: usize,
}

impl DimRange {
    pub fn new (start: usize, stop: usize, stride: usize)->Self { DimRange{ start, stop, stride } }

    /// the full extent of a dimension with given length
    pub fn full (len: usize, stride: usize)->Self {
        DimRange{ start: 0, stop: len.saturating_sub(1), stride: stride.max(1) }
    }

    /// number of indices covered by this range
    pub fn len (&self)->usize {
        if self.stop < self.start || self.stride == 0 { 0 } else { (self.stop - self.start) / self.stride + 1 }
    }

    pub fn is_empty (&self)->bool { self.len() == 0 }
}

/// the current subset request for a data choice: dimension name -> index range.
/// Dimensions are kept in the order in which they were added (which is the array order)
#[derive(Debug,Clone,PartialEq,Default,Serialize,Deserialize)]
pub struct MultiDimensionSubset {
    dims: Vec<(String,DimRange)>
}

pub type DataSelection = MultiDimensionSubset;

impl MultiDimensionSubset {
    pub fn new ()->Self { MultiDimensionSubset{ dims: Vec::new() } }

    /// add or replace the range for dimension `name`
    pub fn set (&mut self, name: impl Into<String>, range: DimRange) {
        let name = name.into();
        if let Some(e) = self.dims.iter_mut().find( |(n,_)| *n == name) {
            e.1 = range;
        } else {
            self.dims.push( (name, range))
        }
    }

    pub fn with (mut self, name: impl Into<String>, range: DimRange)->Self {
        self.set( name, range);
        self
    }

    pub fn get (&self, name: &str)->Option<&DimRange> {
        self.dims.iter().find( |(n,_)| n == name).map( |(_,r)| r)
    }

    pub fn dimension_names (&self)->impl Iterator<Item=&str> {
        self.dims.iter().map( |(n,_)| n.as_str())
    }

    pub fn shape (&self)->Vec<usize> {
        self.dims.iter().map( |(_,r)| r.len()).collect()
    }

    pub fn num_elements (&self)->usize {
        self.dims.iter().map( |(_,r)| r.len()).product()
    }

    pub fn is_empty (&self)->bool { self.dims.is_empty() }

    /// turn this subset into (start,count,stride) vectors in the order of the given dimension names
    pub fn to_hyperslab (&self, dim_names: &[String])->Result<(Vec<usize>,Vec<usize>,Vec<usize>)> {
        let mut start = Vec::with_capacity( dim_names.len());
        let mut count = Vec::with_capacity( dim_names.len());
        let mut stride = Vec::with_capacity( dim_names.len());

        for name in dim_names {
            let r = self.get(name).ok_or_else( || HydraDataError::SubsetError( format!("no range for dimension {name}")))?;
            start.push( r.start);
            count.push( r.len());
            stride.push( r.stride);
        }

        Ok( (start,count,stride) )
    }
}

/* #endregion data groups and selections */

/* #region data choice **************************************************************************/

/// lightweight handle that names the data source a choice belongs to. Choices do not own their source
#[derive(Debug,Clone,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub struct SourceId(Arc<str>);

impl SourceId {
    pub fn new (id: &str)->Self { SourceId( Arc::from(id)) }
    pub fn as_str (&self)->&str { &self.0 }
}

impl Display for SourceId {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result { write!(f, "{}", self.0) }
}

/// a named, selectable variable of a data source.
/// source, name and group are fixed at construction, the selection can be replaced any number of times
#[derive(Debug,Clone,PartialEq)]
pub struct DataChoice {
    source: SourceId,
    name: String,
    group: DataGroup,
    selection: Option<DataSelection>,
}

impl DataChoice {
    pub fn new (source: SourceId, name: impl Into<String>, group: DataGroup)->Self {
        DataChoice { source, name: name.into(), group, selection: None }
    }

    pub fn data_source (&self)->&SourceId { &self.source }
    pub fn name (&self)->&str { &self.name }
    pub fn group (&self)->&DataGroup { &self.group }

    pub fn data_selection (&self)->Option<&DataSelection> { self.selection.as_ref() }

    /// replaces (not merges) the current selection
    pub fn set_data_selection (&mut self, selection: DataSelection) {
        self.selection = Some(selection)
    }

    pub fn clear_data_selection (&mut self) {
        self.selection = None
    }
}

/* #endregion data choice */
