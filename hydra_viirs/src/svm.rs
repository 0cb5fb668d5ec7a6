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


//! the SIPS VIIRS moderate resolution band product (VNP02MOD, VJ102MOD, VJ202MOD)

use std::path::PathBuf;
use lazy_static::lazy_static;
use tracing::debug;

use hydra_data::{
    band::{BandInfo,BandTable},
    choice::{DataChoice,DataGroup},
    color::{ColorTable,gray_table,inv_gray_table},
    errors::Result,
    reader::ReaderProvider,
    source::{DataSource,DataSourceHandler},
};
use crate::sips::{SipsInit,SipsProduct,SipsViirsDataSource,FILL_VALUE,GROUP_NAME,VIIRS_NADIR_RESOLUTION};

pub const SVM_HANDLER: &str = "SIPS_VIIRS_SVM";
pub const SVM_PREFIXES: [&str;3] = ["VNP02MOD", "VJ102MOD", "VJ202MOD"];

pub const M_REFL_BANDS: [&str;11] = ["M01", "M02", "M03", "M04", "M05", "M06", "M07", "M08", "M09", "M10", "M11"];
pub const M_EMIS_BANDS: [&str;5] = ["M12", "M13", "M14", "M15", "M16"];

const M_WAVELENGTHS: [f32;16] = [
    0.412, 0.445, 0.488, 0.555, 0.672, 0.746, 0.865, 1.240, 1.378, 1.61, 2.250,
    3.700, 4.050, 8.550, 10.763, 12.013
];

lazy_static! {
    pub static ref CAT_M: DataGroup = DataGroup::new("M-Band");

    static ref SVM_BANDS: BandTable = BandTable::new(
        M_REFL_BANDS.iter().chain( M_EMIS_BANDS.iter()).zip( M_WAVELENGTHS.iter())
            .map( |(name,wl)| m_band( name, *wl))
            .collect()
    );
}

pub(crate) fn m_band (name: &str, wavelength: f32)->BandInfo {
    BandInfo::named( name, VIIRS_NADIR_RESOLUTION, wavelength, &CAT_M, "VIIRS-M", 1)
}

pub fn svm_bands ()->&'static BandTable { &SVM_BANDS }

/// reflective bands that are not in the granules are skipped, emissive bands are required
pub(crate) fn init_m_bands (ctx: &mut SipsInit, emis_bands: &[&str])->Result<()> {
    for band in M_REFL_BANDS {
        let array = format!("{GROUP_NAME}{band}");
        if !ctx.has_array( &array) {
            debug!("no reflective band {band}");
            continue
        }
        let adapter = ctx.build_refl_adapter( &array, band, Some(FILL_VALUE))?;
        ctx.set_data_choice( adapter, band);
    }

    for band in emis_bands {
        let array = format!("{GROUP_NAME}{band}");
        let bt_lut = format!("{GROUP_NAME}{band}_brightness_temperature_lut");
        let adapter = ctx.build_emis_adapter( &array, band, Some(FILL_VALUE), &bt_lut)?;
        ctx.set_data_choice( adapter, band);
    }

    Ok(())
}

#[derive(Debug,Clone,Copy,Default)]
pub struct SipsViirsSvm;

impl SipsProduct for SipsViirsSvm {
    fn handler_name (&self)->&'static str { SVM_HANDLER }

    fn product_prefixes (&self)->&[&'static str] { &SVM_PREFIXES }

    fn bands (&self)->&BandTable { svm_bands() }

    fn group (&self)->&DataGroup { &CAT_M }

    fn init (&self, ctx: &mut SipsInit)->Result<()> { init_m_bands( ctx, &M_EMIS_BANDS) }

    fn default_color_table (&self, choice: &DataChoice)->&'static ColorTable {
        if M_EMIS_BANDS.contains( &choice.name()) { inv_gray_table() } else { gray_table() }
    }
}

pub type SvmDataSource = SipsViirsDataSource<SipsViirsSvm>;

#[derive(Debug,Clone,Copy,Default)]
pub struct SipsViirsSvmHandler;

impl DataSourceHandler for SipsViirsSvmHandler {
    fn name (&self)->&'static str { SVM_HANDLER }

    fn can_understand (&self, files: &[PathBuf])->bool { SipsViirsSvm.can_understand(files) }

    fn create (&self, files: &[PathBuf], provider: &dyn ReaderProvider)->Result<Box<dyn DataSource>> {
        Ok( Box::new( SipsViirsDataSource::new( SipsViirsSvm, files, provider)?) )
    }
}
