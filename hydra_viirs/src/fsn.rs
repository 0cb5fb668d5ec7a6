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


//! the SIPS VIIRS/MODIS fusion product (VNP02FSN, VJ102FSN, VJ202FSN). M-bands plus the fused
//! MODIS infrared bands, all on the M-band swath

use std::path::PathBuf;
use lazy_static::lazy_static;

use hydra_data::{
    band::BandTable,
    choice::{DataChoice,DataGroup},
    color::{ColorTable,gray_table,inv_gray_table},
    errors::Result,
    reader::ReaderProvider,
    source::{DataSource,DataSourceHandler},
};
use crate::{
    sips::{SipsInit,SipsProduct,SipsViirsDataSource},
    svm::{CAT_M,init_m_bands,m_band,svm_bands},
};

pub const FSN_HANDLER: &str = "SIPS_VIIRS_FSN";
pub const FSN_PREFIXES: [&str;3] = ["VNP02FSN", "VJ102FSN", "VJ202FSN"];

pub const FSN_EMIS_BANDS: [&str;20] = [
    "M12", "M13", "M14", "M15", "M16", "Fusion15", "Fusion16",
    "MODIS23", "MODIS24", "MODIS25", "MODIS27", "MODIS28", "MODIS29", "MODIS30",
    "MODIS31", "MODIS32", "MODIS33", "MODIS34", "MODIS35", "MODIS36"
];

lazy_static! {
    static ref FSN_BANDS: BandTable = fsn_band_table();
}

fn fsn_band_table ()->BandTable {
    let mut bands: Vec<_> = svm_bands().iter().cloned().collect();
    bands.push( m_band( "Fusion15", 10.763));
    bands.push( m_band( "Fusion16", 12.013));
    // no nominal wavelength for the fused MODIS bands
    for name in &FSN_EMIS_BANDS[7..] {
        bands.push( m_band( name, 0.0));
    }
    BandTable::new( bands)
}

pub fn fsn_bands ()->&'static BandTable { &FSN_BANDS }

#[derive(Debug,Clone,Copy,Default)]
pub struct SipsViirsFsn;

impl SipsProduct for SipsViirsFsn {
    fn handler_name (&self)->&'static str { FSN_HANDLER }

    fn product_prefixes (&self)->&[&'static str] { &FSN_PREFIXES }

    fn bands (&self)->&BandTable { fsn_bands() }

    fn group (&self)->&DataGroup { &CAT_M }

    fn init (&self, ctx: &mut SipsInit)->Result<()> { init_m_bands( ctx, &FSN_EMIS_BANDS) }

    fn default_color_table (&self, choice: &DataChoice)->&'static ColorTable {
        if FSN_EMIS_BANDS.contains( &choice.name()) { inv_gray_table() } else { gray_table() }
    }
}

pub type FsnDataSource = SipsViirsDataSource<SipsViirsFsn>;

#[derive(Debug,Clone,Copy,Default)]
pub struct SipsViirsFsnHandler;

impl DataSourceHandler for SipsViirsFsnHandler {
    fn name (&self)->&'static str { FSN_HANDLER }

    fn can_understand (&self, files: &[PathBuf])->bool { SipsViirsFsn.can_understand(files) }

    fn create (&self, files: &[PathBuf], provider: &dyn ReaderProvider)->Result<Box<dyn DataSource>> {
        Ok( Box::new( SipsViirsDataSource::new( SipsViirsFsn, files, provider)?) )
    }
}
