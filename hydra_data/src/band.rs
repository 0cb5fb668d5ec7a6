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

use serde::Serialize;
use crate::choice::DataGroup;

/// static description of one spectral band of an instrument
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct BandInfo {
    pub id: String,              // token used in file names, e.g. "B07"
    pub name: String,            // displayed name, e.g. "C07"
    pub nadir_resolution: f32,   // meters
    pub center_wavelength: f32,  // micrometers, 0 if unknown
    pub category: DataGroup,
    pub sensor_name: String,
    pub default_stride: usize,
}

impl BandInfo {
    pub fn new (id: &str, name: &str, nadir_resolution: f32, center_wavelength: f32, category: &DataGroup, sensor_name: &str, default_stride: usize)->Self {
        BandInfo {
            id: id.to_string(),
            name: name.to_string(),
            nadir_resolution,
            center_wavelength,
            category: category.clone(),
            sensor_name: sensor_name.to_string(),
            default_stride,
        }
    }

    /// band whose file id and display name are the same
    pub fn named (name: &str, nadir_resolution: f32, center_wavelength: f32, category: &DataGroup, sensor_name: &str, default_stride: usize)->Self {
        BandInfo::new( name, name, nadir_resolution, center_wavelength, category, sensor_name, default_stride)
    }

    /// the "(<wavelength>)" label shown next to the band name, None if the wavelength is not known
    pub fn wavelength_label (&self)->Option<String> {
        if self.center_wavelength == 0.0 { None } else { Some( format!("({})", self.center_wavelength)) }
    }
}

/// ordered band metadata of one instrument. Immutable once built
#[derive(Debug,Clone,Default,Serialize)]
pub struct BandTable {
    bands: Vec<BandInfo>
}

impl BandTable {
    pub fn new (bands: Vec<BandInfo>)->Self { BandTable{ bands } }

    pub fn len (&self)->usize { self.bands.len() }
    pub fn is_empty (&self)->bool { self.bands.is_empty() }

    pub fn get (&self, idx: usize)->Option<&BandInfo> { self.bands.get(idx) }

    pub fn by_name (&self, name: &str)->Option<&BandInfo> {
        self.bands.iter().find( |b| b.name == name)
    }

    pub fn by_id (&self, id: &str)->Option<&BandInfo> {
        self.bands.iter().find( |b| b.id == id)
    }

    pub fn index_of (&self, name: &str)->Option<usize> {
        self.bands.iter().position( |b| b.name == name)
    }

    pub fn iter (&self)->impl Iterator<Item=&BandInfo> { self.bands.iter() }

    pub fn names (&self)->Vec<&str> {
        self.bands.iter().map( |b| b.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a BandTable {
    type Item = &'a BandInfo;
    type IntoIter = std::slice::Iter<'a,BandInfo>;

    fn into_iter (self)->Self::IntoIter { self.bands.iter() }
}
