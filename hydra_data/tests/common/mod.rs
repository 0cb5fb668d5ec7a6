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

#![allow(unused)]

//! a minimal band-per-file imager used by the GEOS directory and factory tests

use std::path::PathBuf;
use hydra_data::prelude::*;
use hydra_data::{fs::filename_or_empty, geos::{GeosDirectory,GeosInstrument,BRIGHTNESS_TEMP}};

pub struct TestImager {
    bands: BandTable,
}

impl TestImager {
    pub fn new ()->Self {
        let refl = DataGroup::new("refl");
        let emis = DataGroup::new("emis");
        TestImager {
            bands: BandTable::new( vec![
                BandInfo::named( "B01", 1000.0, 0.64, &refl, "TI_1KM", 2),
                BandInfo::new( "B02", "C02", 2000.0, 10.4, &emis, "TI_2KM", 1),
                BandInfo::named( "B03", 2000.0, 12.4, &emis, "TI_2KM", 1),
            ])
        }
    }
}

impl GeosInstrument for TestImager {
    fn bands (&self)->&BandTable { &self.bands }

    fn description (&self)->&str { "test imager" }

    fn can_understand (&self, files: &[PathBuf])->bool {
        !files.is_empty() && files.iter().all( |f| filename_or_empty(f).starts_with("TI_"))
    }

    fn file_belongs_to_this (&self, filename: &str)->bool { filename.ends_with(".nc") }

    fn post_process (&self, choice: &DataChoice, data: &mut RangeData)->Result<()> {
        if choice.name() == BRIGHTNESS_TEMP {
            for v in data.floats_mut() {
                if *v < 0.0 { *v = f32::NAN }
            }
        }
        Ok(())
    }
}

pub struct TestImagerHandler;

impl DataSourceHandler for TestImagerHandler {
    fn name (&self)->&'static str { "TestImager" }

    fn can_understand (&self, files: &[PathBuf])->bool { TestImager::new().can_understand(files) }

    fn create (&self, files: &[PathBuf], provider: &dyn ReaderProvider)->Result<Box<dyn DataSource>> {
        Ok( Box::new( GeosDirectory::new( TestImager::new(), files, provider)?) )
    }
}

/// accepts everything but never manages to create a data source
pub struct BrokenHandler;

impl DataSourceHandler for BrokenHandler {
    fn name (&self)->&'static str { "Broken" }

    fn can_understand (&self, files: &[PathBuf])->bool { !files.is_empty() }

    fn create (&self, _files: &[PathBuf], _provider: &dyn ReaderProvider)->Result<Box<dyn DataSource>> {
        Err( HydraDataError::OpFailedError("broken".to_string()))
    }
}

pub fn test_files ()->Vec<PathBuf> {
    ["TI_B01.nc", "TI_B02.nc", "TI_B01_notes.txt"].iter().map( PathBuf::from).collect()
}

pub fn test_provider ()->Result<MemReaderProvider> {
    let albedo: Vec<f32> = (0..16).map( |i| i as f32).collect();
    Ok( MemReaderProvider::new()
        .with( "TI_B01.nc", MemReader::new().with_array( "albedo", &["y","x"], &[4,4], albedo)?)
        .with( "TI_B02.nc", MemReader::new().with_array( "brightness_temp", &["y","x"], &[2,2], vec![-1.0, 250.0, 260.0, -5.0])?)
    )
}
