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

use std::path::PathBuf;
use chrono::{DateTime,Utc};

use crate::{
    adapter::RangeData,
    band::BandTable,
    choice::{DataChoice,SourceId},
    color::{ColorTable,gray_table},
    errors::{Result,no_choice},
    reader::ReaderProvider,
};

/// the capabilities the host framework uses to display the variables of a recognized file set
pub trait DataSource: Send + Sync {
    fn id (&self)->&SourceId;

    /// short display label, e.g. "H08 AHI"
    fn description (&self)->&str;

    fn date_time (&self)->Option<DateTime<Utc>>;

    fn data_choices (&self)->&[DataChoice];

    fn band_table (&self)->&BandTable;

    fn nadir_resolution (&self, choice: &DataChoice)->Result<f32>;

    fn default_color_table (&self, _choice: &DataChoice)->&'static ColorTable {
        gray_table()
    }

    /// quality control applied to freshly read data of `choice`, in place
    fn post_process (&self, _choice: &DataChoice, _data: &mut RangeData)->Result<()> {
        Ok(())
    }

    /// read the data of `choice` for its current selection
    fn get_data (&self, choice: &DataChoice)->Result<RangeData>;

    fn data_choice_by_name (&self, name: &str)->Option<&DataChoice> {
        self.data_choices().iter().find( |c| c.name() == name)
    }

    fn data_choice_by_name_mut (&mut self, name: &str)->Option<&mut DataChoice>;

    /// "(<center wavelength>)" for known bands
    fn band_description (&self, choice: &DataChoice)->Option<String> {
        self.band_table().by_name( choice.name()).and_then( |b| b.wavelength_label())
    }

    fn do_filter (&self, _choice: &DataChoice)->bool { true }

    fn do_reproject (&self, _choice: &DataChoice)->bool { true }

    fn overlay_as_mask (&self, _choice: &DataChoice)->bool { false }

    fn default_choice (&self)->usize { 0 }

    /// convenience to read by choice name
    fn get_data_by_name (&self, name: &str)->Result<RangeData> {
        let choice = self.data_choice_by_name(name).ok_or_else( || no_choice(name))?;
        self.get_data( choice)
    }
}

/// the registration side of a data source: recognizes file sets and constructs sources for them
pub trait DataSourceHandler: Send + Sync {
    /// unique name used in configs, e.g. "AHIDirectory"
    fn name (&self)->&'static str;

    /// never fails. Empty or unrecognized input is non-matching
    fn can_understand (&self, files: &[PathBuf])->bool;

    /// construct the data source. Fails with NotUnderstoodError if `can_understand` is false, and with any error
    /// raised while opening readers or building adapters (there are no partially constructed sources)
    fn create (&self, files: &[PathBuf], provider: &dyn ReaderProvider)->Result<Box<dyn DataSource>>;
}
