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


//! tool to print the band tables of the SIPS VIIRS products, and which product a file batch would be read as

use std::path::PathBuf;
use anyhow::Result;
use clap::{Parser,ValueEnum};
use hydra_data::{band::BandTable, filename::datetime_from_path};
use hydra_viirs::{SipsProduct,SipsViirsDnb,SipsViirsFsn,SipsViirsSvm, sips::geo_prefix_for};

#[derive(ValueEnum,Clone,Copy,Debug)]
enum Product { Dnb, Svm, Fsn }

#[derive(Parser, Debug)]
#[command(version, about, long_about = "show SIPS VIIRS band tables")]
struct Args {
    /// product to show
    #[arg(short,long,value_enum,default_value="svm")]
    product: Product,

    /// files to check against the SIPS VIIRS naming conventions
    #[arg(num_args=0..)]
    files: Vec<PathBuf>
}

fn print_bands (bands: &BandTable) {
    println!("{:>3} {:>9} {:>8} {:>7} {:>9}", "idx", "name", "wl[µm]", "res[m]", "category");
    for (i,b) in bands.iter().enumerate() {
        let wl = b.wavelength_label().unwrap_or_else( || "-".to_string());
        println!("{:>3} {:>9} {:>8} {:>7} {:>9}", i, b.name, wl, b.nadir_resolution, b.category);
    }
}

fn main()->Result<()> {
    let args = Args::parse();

    match args.product {
        Product::Dnb => print_bands( SipsViirsDnb.bands()),
        Product::Svm => print_bands( SipsViirsSvm.bands()),
        Product::Fsn => print_bands( SipsViirsFsn.bands()),
    }

    if !args.files.is_empty() {
        let products: [&dyn SipsProduct;3] = [&SipsViirsDnb, &SipsViirsSvm, &SipsViirsFsn];
        match products.iter().find( |p| p.can_understand( &args.files)) {
            Some(p) => println!("batch accepted by {}", p.handler_name()),
            None => println!("batch not accepted by any SIPS VIIRS product")
        }

        for f in &args.files {
            let name = hydra_data::fs::filename_or_empty(f);
            let geo = geo_prefix_for(name).unwrap_or("?");
            let date = datetime_from_path(f).map( |d| d.to_rfc3339()).unwrap_or_else( || "?".to_string());
            println!("  {name}: geolocation prefix {geo}, time {date}");
        }
    }

    Ok(())
}
