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

//! tool to print the AHI band table, and optionally which of the given files are accepted as AHI files

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use hydra_data::fs::filename_or_empty;
use hydra_ahi::{AhiDirectory, ahi_bands};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "show the Himawari AHI band table")]
pub struct Args {
    /// print as JSON
    #[arg(short,long)]
    pub json: bool,

    /// files to check against the AHI naming conventions
    #[arg(num_args=0..)]
    pub files: Vec<PathBuf>
}

fn main()->Result<()> {
    let args = Args::parse();
    let bands = ahi_bands();

    if args.json {
        println!("{}", serde_json::to_string_pretty(bands)?);
    } else {
        println!("{:>3} {:>4} {:>5} {:>8} {:>7} {:>8} {:>6}", "idx", "id", "name", "wl[µm]", "res[m]", "category", "stride");
        for (i,b) in bands.iter().enumerate() {
            println!("{:>3} {:>4} {:>5} {:>8} {:>7} {:>8} {:>6}", i, b.id, b.name, b.center_wavelength, b.nadir_resolution, b.category, b.default_stride);
        }
    }

    if !args.files.is_empty() {
        let ahi = AhiDirectory::new();
        println!("batch accepted: {}", ahi.can_understand( &args.files));
        for f in &args.files {
            let name = filename_or_empty(f);
            println!("  {name}: belongs to AHI directory = {}", ahi.file_belongs_to_this(name));
        }
    }

    Ok(())
}
