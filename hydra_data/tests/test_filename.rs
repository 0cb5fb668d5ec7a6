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
use chrono::{TimeZone,Utc};
use hydra_data::{errors::Result, filename::*};

#[test]
fn test_ahi_datetime () {
    let dt = datetime_from_filename("HS_H08_20150727_0400_B01_FLDK_R10.nc");
    assert_eq!( dt, Some( Utc.with_ymd_and_hms( 2015, 7, 27, 4, 0, 0).unwrap()));

    // not a NetCDF file
    assert_eq!( datetime_from_filename("HS_H08_20150727_0400_B01_FLDK_R10_S0110.DAT"), None);
}

#[test]
fn test_viirs_datetime () {
    let dt = datetime_from_filename("VNP02DNB.A2020001.1200.002.2020001183012.nc");
    assert_eq!( dt, Some( Utc.with_ymd_and_hms( 2020, 1, 1, 12, 0, 0).unwrap()));

    let dt = datetime_from_filename("VJ102MOD.A2021060.0418.021.2021060102231.nc");
    assert_eq!( dt, Some( Utc.with_ymd_and_hms( 2021, 3, 1, 4, 18, 0).unwrap()));

    assert_eq!( datetime_stamp_from_filename("VNP02DNB.A2020001.1200.002.nc").as_deref(), Some("2020-01-01 12:00"));
    assert_eq!( datetime_from_filename("VNP02DNB_A2020001.nc"), None);
}

#[test]
fn test_cmip_datetime () {
    // yyyyDDDHHmm, day 081 of the leap year 2020
    let dt = datetime_from_filename("OR_AHI-L2-CMIPF-M1C14_H8_s202008112300000_e202008112309000_c202008112320000.nc");
    assert_eq!( dt, Some( Utc.with_ymd_and_hms( 2020, 3, 21, 12, 30, 0).unwrap()));
}

#[test]
fn test_description () {
    assert_eq!( description_from_filename("VNP02DNB.A2020001.1200.002.nc"), Some("VIIRS"));
    assert_eq!( description_from_filename("VJ102FSN.A2020001.1200.002.nc"), Some("VIIRS+MODIS"));
    assert_eq!( description_from_filename("HS_H08_20150727_0400_B01_FLDK_R10.nc"), Some("AHI"));
    assert_eq!( description_from_filename("readme.txt"), None);
}

#[test]
fn test_time_sorted () -> Result<()> {
    let files: Vec<PathBuf> = [
        "VNP02DNB.A2020001.1212.002.nc",
        "VNP02DNB.A2020001.1200.002.nc",
        "VNP02DNB.A2020001.1206.002.nc",
    ].iter().map( PathBuf::from).collect();

    let sorted = time_sorted_files( &files)?;
    assert_eq!( sorted, vec![ files[1].clone(), files[2].clone(), files[0].clone() ]);

    let with_garbage = vec![ files[0].clone(), PathBuf::from("garbage")];
    assert!( time_sorted_files( &with_garbage).is_err());
    Ok(())
}
