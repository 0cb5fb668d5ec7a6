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

mod common;

use std::path::PathBuf;
use hydra_data::prelude::*;
use hydra_data::geos::{GeosDirectory,GeosInstrument,BRIGHTNESS_TEMP,ALBEDO};
use common::*;

/// an instrument that accepts any file set, including an empty one
struct PermissiveImager(TestImager);

impl GeosInstrument for PermissiveImager {
    fn bands (&self)->&BandTable { self.0.bands() }
    fn description (&self)->&str { "permissive imager" }
    fn can_understand (&self, _files: &[PathBuf])->bool { true }
}

#[test]
fn test_band_assignment () -> Result<()> {
    let provider = test_provider()?;
    let ds = GeosDirectory::new( TestImager::new(), &test_files(), &provider)?;

    // the .txt file contains the band id but does not belong to the instrument
    assert_eq!( ds.band_files("B01"), &[PathBuf::from("TI_B01.nc")]);
    assert_eq!( ds.band_files("B02"), &[PathBuf::from("TI_B02.nc")]);
    assert!( ds.band_files("B03").is_empty());

    // bands without files do not get a choice
    let names: Vec<&str> = ds.data_choices().iter().map( |c| c.name()).collect();
    assert_eq!( names, vec!["B01", "C02"]);
    assert_eq!( ds.groups(), vec![DataGroup::new("refl"), DataGroup::new("emis")]);

    assert_eq!( ds.target_choice("B01").map( |c| c.name()), Some(ALBEDO));
    assert_eq!( ds.target_choice("C02").map( |c| c.name()), Some(BRIGHTNESS_TEMP));
    assert_eq!( ds.band_file("C02"), Some(&PathBuf::from("TI_B02.nc")));
    Ok(())
}

#[test]
fn test_geos_data () -> Result<()> {
    let provider = test_provider()?;
    let mut ds = GeosDirectory::new( TestImager::new(), &test_files(), &provider)?;

    // default selection uses the band stride
    let b01 = ds.data_choice_by_name("B01").cloned().ok_or_else( || HydraDataError::NoChoiceError("B01".into()))?;
    assert_eq!( b01.data_selection().map( |s| s.shape()), Some(vec![2,2]));
    let data = ds.get_data( &b01)?;
    assert_eq!( data.floats(), &[0.0, 2.0, 8.0, 10.0]);

    // a new selection replaces the old one
    if let Some(c) = ds.data_choice_by_name_mut("B01") {
        c.set_data_selection( MultiDimensionSubset::new()
            .with( "GridY", DimRange::new(1, 1, 1))
            .with( "GridX", DimRange::new(0, 3, 1)));
    }
    let data = ds.get_data_by_name("B01")?;
    assert_eq!( data.floats(), &[4.0, 5.0, 6.0, 7.0]);

    // post processing keyed by the file variable
    let data = ds.get_data_by_name("C02")?;
    assert_eq!( data.count_nan(), 2);
    assert_eq!( data.floats()[1], 250.0);
    Ok(())
}

#[test]
fn test_geos_metadata () -> Result<()> {
    let provider = test_provider()?;
    let ds = GeosDirectory::new( TestImager::new(), &test_files(), &provider)?;

    let c02 = &ds.data_choices()[1];
    assert_eq!( ds.nadir_resolution( c02)?, 2000.0);
    assert_eq!( ds.band_description( c02).as_deref(), Some("(10.4)"));
    assert!( !ds.do_reproject( c02));
    assert!( ds.do_filter( c02));
    assert_eq!( ds.description(), "test imager");
    assert_eq!( ds.default_color_table( c02).name, "gray");

    let unknown = DataChoice::new( ds.id().clone(), "B99", DataGroup::new("refl"));
    assert!( ds.nadir_resolution( &unknown).is_err());
    assert!( ds.get_data( &unknown).is_err());
    Ok(())
}

#[test]
fn test_geos_rejects () -> Result<()> {
    let provider = test_provider()?;

    let foreign = vec![ PathBuf::from("TI_B01.nc"), PathBuf::from("other.nc")];
    assert!( matches!( GeosDirectory::new( TestImager::new(), &foreign, &provider), Err(HydraDataError::NotUnderstoodError(_))));

    let empty: Vec<PathBuf> = Vec::new();
    assert!( GeosDirectory::new( TestImager::new(), &empty, &provider).is_err());

    // an empty batch is rejected even if the instrument claims it
    let res = GeosDirectory::new( PermissiveImager( TestImager::new()), &empty, &provider);
    assert!( matches!( res, Err(HydraDataError::NotUnderstoodError(_))));

    // understood, but no file matches any band
    let no_bands = vec![ PathBuf::from("TI_readme.nc")];
    assert!( GeosDirectory::new( TestImager::new(), &no_bands, &provider).is_err());

    // a band file the provider can't open aborts construction
    let unreadable = vec![ PathBuf::from("TI_B03.nc")];
    assert!( GeosDirectory::new( TestImager::new(), &unreadable, &provider).is_err());
    Ok(())
}
