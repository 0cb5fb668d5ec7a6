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

//! observation times and descriptions encoded in product file names

use std::path::{Path,PathBuf};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use crate::{op_failed, errors::Result, fs::filename_or_empty};

lazy_static! {
    // HS_H08_20150727_0400_B01_FLDK_R10.nc
    static ref AHI_HS_RE: Regex = Regex::new(r#"^HS_H0\d_(\d{4})(\d{2})(\d{2})_(\d{2})(\d{2}).*\.nc$"#).unwrap();

    // VNP02DNB.A2020001.1200.002.2020001183012.nc  (yyyyDDD.HHmm at offset 10)
    static ref SIPS_VIIRS_RE: Regex = Regex::new(r#"^(?:VNP|VJ1|VJ2)\w{5}\.A(\d{4})(\d{3})\.(\d{2})(\d{2})"#).unwrap();

    // OR_AHI-L2-CMIPF-M1C14_H8_s202001010000000_e..
    static ref AHI_CMIP_RE: Regex = Regex::new(r#"AHI-L2-CMIP.*_H[89]_s(\d{4})(\d{3})(\d{2})(\d{2})"#).unwrap();
}

fn ymd_hm (year: &str, month: &str, day: &str, hour: &str, min: &str)->Option<DateTime<Utc>> {
    let nd = NaiveDate::from_ymd_opt( year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)?;
    let nt = NaiveTime::from_hms_opt( hour.parse().ok()?, min.parse().ok()?, 0)?;
    Some( NaiveDateTime::new( nd, nt).and_utc() )
}

fn yo_hm (year: &str, doy: &str, hour: &str, min: &str)->Option<DateTime<Utc>> {
    let nd = NaiveDate::from_yo_opt( year.parse().ok()?, doy.parse().ok()?)?;
    let nt = NaiveTime::from_hms_opt( hour.parse().ok()?, min.parse().ok()?, 0)?;
    Some( NaiveDateTime::new( nd, nt).and_utc() )
}

/// the nominal observation time encoded in a product file name, None for unknown conventions
pub fn datetime_from_filename (filename: &str)->Option<DateTime<Utc>> {
    if let Some(cap) = AHI_HS_RE.captures(filename) {
        ymd_hm( &cap[1], &cap[2], &cap[3], &cap[4], &cap[5])

    } else if let Some(cap) = SIPS_VIIRS_RE.captures(filename) {
        yo_hm( &cap[1], &cap[2], &cap[3], &cap[4])

    } else if let Some(cap) = AHI_CMIP_RE.captures(filename) {
        yo_hm( &cap[1], &cap[2], &cap[3], &cap[4])

    } else {
        None
    }
}

pub fn datetime_from_path<P: AsRef<Path>> (path: &P)->Option<DateTime<Utc>> {
    datetime_from_filename( filename_or_empty(path))
}

/// "yyyy-MM-dd HH:mm" label for a file's observation time
pub fn datetime_stamp_from_filename (filename: &str)->Option<String> {
    datetime_from_filename(filename).map( |dt| dt.format("%Y-%m-%d %H:%M").to_string())
}

/// short sensor description derived from the file name convention
pub fn description_from_filename (filename: &str)->Option<&'static str> {
    if filename.starts_with("VNP") || filename.starts_with("VJ1") || filename.starts_with("VJ2") {
        if filename.contains("02FSN") { Some("VIIRS+MODIS") } else { Some("VIIRS") }
    } else if filename.starts_with("HS_H08") || filename.starts_with("HS_H09") || filename.contains("AHI-L2-CMIP") {
        Some("AHI")
    } else {
        None
    }
}

/// sort files by the observation time in their names. Files without a recognized time stamp are an error
pub fn time_sorted_files (files: &[PathBuf])->Result<Vec<PathBuf>> {
    let mut dated: Vec<(DateTime<Utc>,&PathBuf)> = Vec::with_capacity( files.len());
    for f in files {
        let dt = datetime_from_path(f).ok_or_else( || op_failed!("no date in filename {:?}", f))?;
        dated.push( (dt,f));
    }

    // stable, files with the same time keep their order
    Ok( dated.into_iter().sorted_by_key( |(dt,_)| *dt).map( |(_,f)| f.clone()).collect() )
}
