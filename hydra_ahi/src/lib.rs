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

//! data source for directories of Himawari AHI full disk files (one NetCDF file per band)

use std::path::PathBuf;
use lazy_static::lazy_static;
use tracing::debug;

use hydra_data::{
    adapter::RangeData,
    band::{BandInfo,BandTable},
    choice::{DataChoice,DataGroup},
    color::{ColorTable,gray_table,inv_gray_table},
    errors::Result,
    fs::filename_or_empty,
    geos::{GeosDirectory,GeosInstrument,BRIGHTNESS_TEMP},
    reader::ReaderProvider,
    source::{DataSource,DataSourceHandler},
};

pub const AHI_HANDLER: &str = "AHIDirectory";
pub const AHI_DESCRIPTION: &str = "H08 AHI";

/// every file of a batch has to start with this prefix or contain PRODUCT_FAMILY
pub const INSTRUMENT_PREFIX: &str = "HS_H08";
pub const PRODUCT_FAMILY: &str = "_FLDK_";

/// brightness temperatures outside of [MIN_VALID_BT, MAX_VALID_BT) Kelvin are masked
pub const MIN_VALID_BT: f32 = 150.0;
pub const MAX_VALID_BT: f32 = 340.0;

/// band names that get the inverted gray color table
pub const EMISSIVE_BANDS: [&str;10] = ["C07", "C08", "C09", "C10", "C11", "C12", "C13", "C14", "C15", "B16"];

lazy_static! {
    pub static ref CAT_HKM_REFL: DataGroup = DataGroup::new("HKMrefl");
    pub static ref CAT_1KM_REFL: DataGroup = DataGroup::new("1KMrefl");
    pub static ref CAT_2KM_REFL: DataGroup = DataGroup::new("2KMrefl");
    pub static ref CAT_2KM_EMIS: DataGroup = DataGroup::new("2KMemis");

    static ref AHI_BANDS: BandTable = ahi_band_table();
}

fn ahi_band_table ()->BandTable {
    let hkm = |id: &str, wl: f32| BandInfo::named( id, 500.0, wl, &CAT_HKM_REFL, "AHI_HKM", 20);
    let km1 = |id: &str, wl: f32| BandInfo::named( id, 1000.0, wl, &CAT_1KM_REFL, "AHI_1KM", 10);
    let km2r = |id: &str, wl: f32| BandInfo::named( id, 2000.0, wl, &CAT_2KM_REFL, "AHI_2KM", 5);
    // the thermal bands are displayed as Cnn but their files use the Bnn band id
    let km2e = |id: &str, name: &str, wl: f32| BandInfo::new( id, name, 2000.0, wl, &CAT_2KM_EMIS, "AHI_2KM", 5);

    BandTable::new( vec![
        km1( "B01", 0.47),
        km1( "B02", 0.51),
        hkm( "B03", 0.64),
        km1( "B04", 0.86),
        km2r( "B05", 1.6),
        km2r( "B06", 2.3),
        km2e( "B07", "C07", 3.9),
        km2e( "B08", "C08", 6.2),
        km2e( "B09", "C09", 6.9),
        km2e( "B10", "C10", 7.3),
        km2e( "B11", "C11", 8.6),
        km2e( "B12", "C12", 9.6),
        km2e( "B13", "C13", 10.4),
        km2e( "B14", "C14", 11.2),
        km2e( "B15", "C15", 12.4),
        km2e( "B16", "B16", 13.3),
    ])
}

/// the 16 band metadata table of the Advanced Himawari Imager
pub fn ahi_bands ()->&'static BandTable { &AHI_BANDS }

/// Himawari AHI specifics of a geostationary band-per-file directory
#[derive(Debug,Clone,Copy,Default)]
pub struct AhiDirectory;

impl AhiDirectory {
    pub fn new ()->Self { AhiDirectory }

    /// all-or-nothing: a single file that is not an AHI file disqualifies the whole batch
    pub fn can_understand (&self, files: &[PathBuf])->bool {
        !files.is_empty() && files.iter().all( |f| {
            let name = filename_or_empty(f);
            name.starts_with(INSTRUMENT_PREFIX) || name.contains(PRODUCT_FAMILY)
        })
    }

    pub fn file_belongs_to_this (&self, filename: &str)->bool {
        filename.contains(INSTRUMENT_PREFIX) && filename.ends_with(".nc")
    }

    pub fn default_color_table (&self, choice: &DataChoice)->&'static ColorTable {
        if EMISSIVE_BANDS.contains( &choice.name()) { inv_gray_table() } else { gray_table() }
    }

    /// mask brightness temperatures outside of the physical range. Idempotent, other variables are not touched
    pub fn post_process (&self, choice: &DataChoice, data: &mut RangeData) {
        if choice.name() == BRIGHTNESS_TEMP {
            mask_brightness_temps( data.floats_mut());
        }
    }
}

pub fn mask_brightness_temps (values: &mut [f32]) {
    for v in values.iter_mut() {
        if !(*v >= MIN_VALID_BT && *v < MAX_VALID_BT) {
            *v = f32::NAN;
        }
    }
}

impl GeosInstrument for AhiDirectory {
    fn bands (&self)->&BandTable { ahi_bands() }

    fn description (&self)->&str { AHI_DESCRIPTION }

    fn can_understand (&self, files: &[PathBuf])->bool { AhiDirectory::can_understand( self, files) }

    fn file_belongs_to_this (&self, filename: &str)->bool { AhiDirectory::file_belongs_to_this( self, filename) }

    fn default_color_table (&self, choice: &DataChoice)->&'static ColorTable { AhiDirectory::default_color_table( self, choice) }

    fn post_process (&self, choice: &DataChoice, data: &mut RangeData)->Result<()> {
        AhiDirectory::post_process( self, choice, data);
        Ok(())
    }
}

pub type AhiDataSource = GeosDirectory<AhiDirectory>;

/// registry entry for AHI directories
#[derive(Debug,Clone,Copy,Default)]
pub struct AhiDirectoryHandler;

impl AhiDirectoryHandler {
    pub fn create_ahi (&self, files: &[PathBuf], provider: &dyn ReaderProvider)->Result<AhiDataSource> {
        debug!("creating AHI directory from {} files", files.len());
        GeosDirectory::new( AhiDirectory::new(), files, provider)
    }
}

impl DataSourceHandler for AhiDirectoryHandler {
    fn name (&self)->&'static str { AHI_HANDLER }

    fn can_understand (&self, files: &[PathBuf])->bool { AhiDirectory.can_understand(files) }

    fn create (&self, files: &[PathBuf], provider: &dyn ReaderProvider)->Result<Box<dyn DataSource>> {
        Ok( Box::new( self.create_ahi( files, provider)?) )
    }
}
