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

use std::path::PathBuf;
use hydra_data::prelude::*;
use hydra_viirs::{*, dnb::{CAT_DNB,DNB_ARRAY}, sips::{LATITUDE,LONGITUDE,VIIRS_NADIR_RESOLUTION}};

const LINES: &str = "number_of_lines";
const PIXELS: &str = "number_of_pixels";

const G1: &str = "VNP02DNB.A2020001.1200.002.2020001183012.nc";
const G2: &str = "VNP02DNB.A2020001.1206.002.2020001183512.nc";
const GEO1: &str = "VNP03DNB.A2020001.1200.002.2020001180211.nc";
const GEO2: &str = "VNP03DNB.A2020001.1206.002.2020001180733.nc";

fn approx (a: f32, b: f32)->bool { (a - b).abs() < 1e-5 }

fn paths (names: &[&str])->Vec<PathBuf> { names.iter().map( PathBuf::from).collect() }

fn geo_reader (lat: f32)->Result<MemReader> {
    MemReader::new()
        .with_array( LONGITUDE, &[LINES,PIXELS], &[2,3], vec![-120.0; 6])?
        .with_array( LATITUDE, &[LINES,PIXELS], &[2,3], vec![lat; 6])
}

fn dnb_provider ()->Result<MemReaderProvider> {
    Ok( MemReaderProvider::new()
        .with( G1, MemReader::new().with_array( DNB_ARRAY, &[LINES,PIXELS], &[2,3], vec![1.0, 10.0, 100.0, 0.0, -1.0, 1000.0])?)
        .with( G2, MemReader::new().with_array( DNB_ARRAY, &[LINES,PIXELS], &[2,3], vec![1e-3, 1.0, 1.0, 1.0, 1.0, 1.0])?)
        .with( GEO1, geo_reader( 30.0)?)
        .with( GEO2, geo_reader( 31.0)?)
    )
}

#[test]
fn test_dnb_can_understand () {
    let dnb = SipsViirsDnbHandler;

    assert!( dnb.can_understand( &paths(&["VNP02DNB_A2020001.nc", "garbage"])));
    assert!( dnb.can_understand( &paths(&["VJ102DNB.A2020001.1200.021.nc"])));
    assert!( dnb.can_understand( &paths(&["VJ202DNB.A2020001.1200.021.nc"])));
    assert!( !dnb.can_understand( &paths(&["garbage", "VNP02DNB_A2020001.nc"])));
    assert!( !dnb.can_understand( &paths(&["VNP03DNB.A2020001.1200.002.nc"])));
    assert!( !dnb.can_understand( &paths(&["VNP02MOD.A2020001.1200.002.nc"])));
    assert!( !dnb.can_understand( &[]));
}

#[test]
fn test_dnb_source () -> Result<()> {
    let provider = dnb_provider()?;
    // unordered, with the geolocation files in the batch
    let files = paths(&[G2, GEO1, G1, GEO2]);
    let ds = SipsViirsDnbHandler.create_dnb( &files, &provider)?;

    assert_eq!( ds.num_adapters(), 1);
    assert_eq!( ds.files(), paths(&[G1, G2]).as_slice());
    assert_eq!( ds.geo_files(), paths(&[GEO1, GEO2]).as_slice());
    assert_eq!( ds.description(), "SNPP VIIRS");
    assert_eq!( ds.date_time().map( |d| d.to_rfc3339()).as_deref(), Some("2020-01-01T12:00:00+00:00"));

    let choices = ds.data_choices();
    assert_eq!( choices.len(), 1);
    let dnb = &choices[0];
    assert_eq!( dnb.name(), "DNB");
    assert_eq!( dnb.group(), &*CAT_DNB);
    assert_eq!( dnb.data_source(), ds.id());
    assert_eq!( ds.nadir_resolution( dnb)?, VIIRS_NADIR_RESOLUTION);
    assert_eq!( ds.band_description( dnb).as_deref(), Some("(0.7)"));
    assert_eq!( ds.default_color_table( dnb).name, "gray");

    // default selection covers both granules
    let sel = dnb.data_selection().unwrap();
    assert_eq!( sel.get(LINES), Some(&DimRange::new(0, 3, 1)));
    assert_eq!( sel.get(PIXELS), Some(&DimRange::new(0, 2, 1)));

    let adapter = ds.swath_adapter( dnb).unwrap();
    assert_eq!( adapter.metadata().fill_value_name.as_deref(), Some("_FillValue"));
    assert_eq!( adapter.shape(), &[4,3]);
    let (_lons,lats) = adapter.read_geolocation( sel)?;
    assert_eq!( lats.floats()[5], 30.0);
    assert_eq!( lats.floats()[6], 31.0);
    Ok(())
}

#[test]
fn test_dnb_log_scale () -> Result<()> {
    let provider = dnb_provider()?;
    let mut ds = SipsViirsDnbHandler.create_dnb( &paths(&[G1, G2, GEO1, GEO2]), &provider)?;

    let data = ds.get_data_by_name("DNB")?;
    let v = data.floats();
    assert_eq!( data.shape, vec![4,3]);
    assert!( approx( v[0], 0.0) && approx( v[1], 1.0) && approx( v[2], 2.0));
    assert!( v[3].is_nan()); // 0
    assert!( v[4].is_nan()); // negative
    assert!( approx( v[5], 3.0));
    assert!( approx( v[6], -3.0));

    // a new selection replaces the default one
    if let Some(c) = ds.data_choice_by_name_mut("DNB") {
        c.set_data_selection( MultiDimensionSubset::new()
            .with( LINES, DimRange::new(0, 0, 1))
            .with( PIXELS, DimRange::new(1, 2, 1)));
    }
    let data = ds.get_data_by_name("DNB")?;
    assert_eq!( data.len(), 2);
    assert!( approx( data.floats()[0], 1.0) && approx( data.floats()[1], 2.0));
    Ok(())
}

#[test]
fn test_dnb_missing_geolocation () -> Result<()> {
    let provider = dnb_provider()?;

    // no geolocation for the second granule
    let res = SipsViirsDnbHandler.create_dnb( &paths(&[G1, G2, GEO1]), &provider);
    assert!( res.is_err());

    // recognized, but no DNB array in the granule
    let provider = MemReaderProvider::new()
        .with( G1, MemReader::new().with_array( "observation_data/other", &[LINES,PIXELS], &[2,3], vec![0.0; 6])?)
        .with( GEO1, geo_reader( 30.0)?);
    assert!( matches!( SipsViirsDnbHandler.create_dnb( &paths(&[G1, GEO1]), &provider), Err(HydraDataError::NoArrayError(_))));

    assert!( matches!( SipsViirsDnbHandler.create_dnb( &paths(&["garbage.nc"]), &provider), Err(HydraDataError::NotUnderstoodError(_))));
    Ok(())
}

#[test]
fn test_dnb_bands () {
    let bands = dnb_bands();
    assert_eq!( bands.len(), 1);
    let b = bands.get(0).unwrap();
    assert_eq!( b.name, "DNB");
    assert_eq!( b.center_wavelength, 0.7);
    assert_eq!( b.nadir_resolution, 770.0);
}
