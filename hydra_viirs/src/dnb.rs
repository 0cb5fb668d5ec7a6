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


//! the SIPS VIIRS Day/Night band product (VNP02DNB, VJ102DNB, VJ202DNB)

use std::path::PathBuf;
use lazy_static::lazy_static;
use tracing::debug;

use hydra_data::{
    band::{BandInfo,BandTable},
    choice::{DataChoice,DataGroup},
    errors::Result,
    reader::ReaderProvider,
    source::{DataSource,DataSourceHandler},
};
use crate::sips::{SipsInit,SipsProduct,SipsViirsDataSource,DNB_RANGE,FILL_VALUE,VIIRS_NADIR_RESOLUTION};

pub const DNB_HANDLER: &str = "SIPS_VIIRS_DNB";
pub const DNB_PREFIXES: [&str;3] = ["VNP02DNB", "VJ102DNB", "VJ202DNB"];
pub const DNB_ARRAY: &str = "observation_data/DNB_observations";
pub const DNB_WAVELENGTH: f32 = 0.7;

lazy_static! {
    pub static ref CAT_DNB: DataGroup = DataGroup::new("DNB-Band");

    static ref DNB_BANDS: BandTable = BandTable::new( vec![
        BandInfo::named( DNB_RANGE, VIIRS_NADIR_RESOLUTION, DNB_WAVELENGTH, &CAT_DNB, "VIIRS-DNB", 1)
    ]);
}

pub fn dnb_bands ()->&'static BandTable { &DNB_BANDS }

#[derive(Debug,Clone,Copy,Default)]
pub struct SipsViirsDnb;

impl SipsProduct for SipsViirsDnb {
    fn handler_name (&self)->&'static str { DNB_HANDLER }

    fn product_prefixes (&self)->&[&'static str] { &DNB_PREFIXES }

    fn bands (&self)->&BandTable { dnb_bands() }

    fn group (&self)->&DataGroup { &CAT_DNB }

    fn init (&self, ctx: &mut SipsInit)->Result<()> {
        let adapter = ctx.build_adapter( DNB_ARRAY, DNB_RANGE, Some(FILL_VALUE))?;
        ctx.set_data_choice( adapter, DNB_RANGE);
        Ok(())
    }

    fn nadir_resolution (&self, _choice: &DataChoice)->f32 { VIIRS_NADIR_RESOLUTION }
}

pub type DnbDataSource = SipsViirsDataSource<SipsViirsDnb>;

#[derive(Debug,Clone,Copy,Default)]
pub struct SipsViirsDnbHandler;

impl SipsViirsDnbHandler {
    pub fn create_dnb (&self, files: &[PathBuf], provider: &dyn ReaderProvider)->Result<DnbDataSource> {
        debug!("creating VIIRS DNB source from {} files", files.len());
        SipsViirsDataSource::new( SipsViirsDnb, files, provider)
    }
}

impl DataSourceHandler for SipsViirsDnbHandler {
    fn name (&self)->&'static str { DNB_HANDLER }

    fn can_understand (&self, files: &[PathBuf])->bool { SipsViirsDnb.can_understand(files) }

    fn create (&self, files: &[PathBuf], provider: &dyn ReaderProvider)->Result<Box<dyn DataSource>> {
        Ok( Box::new( self.create_dnb( files, provider)?) )
    }
}
