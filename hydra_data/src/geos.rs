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

//! generic directory of geostationary imager files with one file per band and time step

use std::{collections::HashMap, path::PathBuf};
use chrono::{DateTime,Utc};
use tracing::{debug,warn};

use crate::{
    op_failed,
    adapter::{DataAdapter,GridAdapter,RangeData},
    band::{BandInfo,BandTable},
    choice::{DataChoice,DataGroup,SourceId},
    color::{ColorTable,gray_table},
    errors::{Result,no_choice,not_understood},
    filename::datetime_from_path,
    fs::filename_or_empty,
    reader::ReaderProvider,
    source::DataSource,
};

pub const BRIGHTNESS_TEMP: &str = "brightness_temp";
pub const ALBEDO: &str = "albedo";

/// the instrument specific part of a GeosDirectory
pub trait GeosInstrument: Send + Sync {
    fn bands (&self)->&BandTable;

    fn description (&self)->&str;

    /// batch acceptance predicate
    fn can_understand (&self, files: &[PathBuf])->bool;

    /// per-file filter applied when assigning files of an accepted batch to bands
    fn file_belongs_to_this (&self, _filename: &str)->bool { true }

    /// names of the per-band file variables we expose, first match wins
    fn target_variables (&self)->&[&'static str] { &[BRIGHTNESS_TEMP, ALBEDO] }

    fn default_color_table (&self, _choice: &DataChoice)->&'static ColorTable { gray_table() }

    /// `choice` is the per-band file variable (e.g. "brightness_temp"), not the band choice
    fn post_process (&self, _choice: &DataChoice, _data: &mut RangeData)->Result<()> { Ok(()) }
}

/// the per-band part of a GeosDirectory
struct GeosBand {
    band_idx: usize,
    file: PathBuf,
    adapter: GridAdapter,
    target: DataChoice,   // the file variable this band choice maps to
}

pub struct GeosDirectory<I: GeosInstrument> {
    id: SourceId,
    instrument: I,
    band_files: HashMap<String,Vec<PathBuf>>, // band id -> files
    bands: Vec<GeosBand>,
    choices: Vec<DataChoice>,
    date_time: Option<DateTime<Utc>>,
}

impl<I: GeosInstrument> GeosDirectory<I> {

    pub fn new (instrument: I, files: &[PathBuf], provider: &dyn ReaderProvider)->Result<Self> {
        if !instrument.can_understand(files) {
            return Err( not_understood( instrument.description()))
        }

        let first = files.first().ok_or_else( || not_understood( instrument.description()))?;
        let band_files = assign_band_files( &instrument, files);
        let id = SourceId::new( &format!("{}:{}", instrument.description(), filename_or_empty(first)));

        let mut bands: Vec<GeosBand> = Vec::new();
        let mut choices: Vec<DataChoice> = Vec::new();
        let mut date_time: Option<DateTime<Utc>> = None;

        for (band_idx, band) in instrument.bands().iter().enumerate() {
            let Some(file) = band_files.get( &band.id).and_then( |fl| fl.first()) else {
                debug!("no file for band {}", band.id);
                continue
            };

            if date_time.is_none() {
                date_time = datetime_from_path(file);
            }

            let geos_band = open_band( &instrument, &id, band_idx, band, file, provider)?;

            let mut choice = DataChoice::new( id.clone(), band.name.as_str(), band.category.clone());
            if let Some(sel) = geos_band.target.data_selection() {
                choice.set_data_selection( sel.clone());
            }

            choices.push( choice);
            bands.push( geos_band);
        }

        if bands.is_empty() {
            return Err( op_failed!("no band files found for {}", instrument.description()))
        }

        Ok( GeosDirectory { id, instrument, band_files, bands, choices, date_time } )
    }

    pub fn instrument (&self)->&I { &self.instrument }

    /// files assigned to the band with the given file id
    pub fn band_files (&self, band_id: &str)->&[PathBuf] {
        self.band_files.get(band_id).map( |v| v.as_slice()).unwrap_or(&[])
    }

    /// the file variable that is read for the band choice `name`
    pub fn target_choice (&self, name: &str)->Option<&DataChoice> {
        self.geos_band(name).map( |b| &b.target)
    }

    pub fn band_file (&self, name: &str)->Option<&PathBuf> {
        self.geos_band(name).map( |b| &b.file)
    }

    fn geos_band (&self, name: &str)->Option<&GeosBand> {
        let bands = self.instrument.bands();
        self.bands.iter().find( |b| bands.get(b.band_idx).is_some_and( |bi| bi.name == name))
    }

    /// the categories of the available bands, in band order and without duplicates
    pub fn groups (&self)->Vec<DataGroup> {
        let mut groups: Vec<DataGroup> = Vec::new();
        for c in &self.choices {
            if !groups.contains( c.group()) { groups.push( c.group().clone()) }
        }
        groups
    }
}

/// each file is used for at most one band, in band order
fn assign_band_files<I: GeosInstrument> (instrument: &I, files: &[PathBuf])->HashMap<String,Vec<PathBuf>> {
    let mut used = vec![false; files.len()];
    let mut band_files: HashMap<String,Vec<PathBuf>> = HashMap::new();

    for band in instrument.bands() {
        let mut list: Vec<PathBuf> = Vec::new();
        for (i,file) in files.iter().enumerate() {
            if !used[i] {
                let name = filename_or_empty(file);
                if instrument.file_belongs_to_this(name) && name.contains( band.id.as_str()) {
                    list.push( file.clone());
                    used[i] = true;
                }
            }
        }
        band_files.insert( band.id.clone(), list);
    }

    band_files
}

fn open_band<I: GeosInstrument> (instrument: &I, id: &SourceId, band_idx: usize, band: &BandInfo, file: &PathBuf, provider: &dyn ReaderProvider)->Result<GeosBand> {
    let reader = provider.open(file)?;

    let var = instrument.target_variables().iter()
        .find( |v| reader.has_array(v))
        .ok_or_else( || op_failed!("no target variable in {:?}", file))?;

    let adapter = GridAdapter::new( reader.clone(), var, band.default_stride)?;
    let mut target = DataChoice::new( id.clone(), *var, band.category.clone());
    target.set_data_selection( adapter.default_subset());

    Ok( GeosBand { band_idx, file: file.clone(), adapter, target } )
}

impl<I: GeosInstrument> DataSource for GeosDirectory<I> {
    fn id (&self)->&SourceId { &self.id }

    fn description (&self)->&str { self.instrument.description() }

    fn date_time (&self)->Option<DateTime<Utc>> { self.date_time }

    fn data_choices (&self)->&[DataChoice] { &self.choices }

    fn data_choice_by_name_mut (&mut self, name: &str)->Option<&mut DataChoice> {
        self.choices.iter_mut().find( |c| c.name() == name)
    }

    fn band_table (&self)->&BandTable { self.instrument.bands() }

    fn nadir_resolution (&self, choice: &DataChoice)->Result<f32> {
        match self.instrument.bands().by_name( choice.name()) {
            Some(b) if b.nadir_resolution != 0.0 => Ok( b.nadir_resolution ),
            _ => Err( op_failed!("item {} not found so can't get resolution", choice.name()))
        }
    }

    fn default_color_table (&self, choice: &DataChoice)->&'static ColorTable {
        self.instrument.default_color_table( choice)
    }

    fn post_process (&self, choice: &DataChoice, data: &mut RangeData)->Result<()> {
        self.instrument.post_process( choice, data)
    }

    fn get_data (&self, choice: &DataChoice)->Result<RangeData> {
        let band = self.geos_band( choice.name()).ok_or_else( || no_choice( choice.name()))?;

        // the band choice's selection drives the read, the default subset is the fallback
        let subset = match choice.data_selection() {
            Some(sel) => sel.clone(),
            None => {
                warn!("no selection for {}, using default subset", choice.name());
                band.adapter.default_subset()
            }
        };

        let mut data = band.adapter.read( &subset)?;
        self.post_process( &band.target, &mut data)?;
        Ok(data)
    }

    fn do_reproject (&self, _choice: &DataChoice)->bool { false }
}
