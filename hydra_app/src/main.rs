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


//! `hydra` - find out which data source handler reads a set of satellite files

use std::path::PathBuf;
use anyhow::{Result,anyhow};
use clap::{Parser,Subcommand};
use tracing_subscriber::EnvFilter;

use hydra_data::{
    factory::DataSourceFactory,
    filename::{datetime_from_path,description_from_filename,time_sorted_files},
    fs::{filename_or_empty,files_in_dir},
};
use hydra_app::{band_table,default_factory,factory_from_config_path};

#[derive(Parser,Debug)]
#[command(version, about, long_about = "identify and inspect satellite instrument files")]
struct Args {
    /// RON config file with the enabled handlers
    #[arg(short,long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand,Debug)]
enum Command {
    /// show the handler that understands the given files (or all files of a given directory)
    Identify {
        files: Vec<PathBuf>
    },
    /// show the band table of a handler
    Bands {
        handler: String
    },
    /// list the enabled handlers in the order they are tried
    Handlers,
}

fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .init();

    let args = Args::parse();
    let factory = match &args.config {
        Some(path) => factory_from_config_path(path)?,
        None => default_factory()
    };

    match args.command {
        Command::Identify { files } => identify( &factory, files),
        Command::Bands { handler } => show_bands( &handler),
        Command::Handlers => {
            for name in factory.handler_names() { println!("{name}") }
            Ok(())
        }
    }
}

fn identify (factory: &DataSourceFactory, files: Vec<PathBuf>)->Result<()> {
    let files = if files.len() == 1 && files[0].is_dir() { files_in_dir( &files[0])? } else { files };

    match factory.identify( &files) {
        Some(handler) => println!("handler: {}", handler.name()),
        None => println!("no suitable handler")
    }

    for f in &files {
        let name = filename_or_empty(f);
        let instrument = description_from_filename(name).unwrap_or("?");
        let date = datetime_from_path(f).map( |d| d.to_rfc3339()).unwrap_or_else( || "?".to_string());
        println!("  {name}: {instrument} {date}");
    }

    if let Ok(sorted) = time_sorted_files( &files) && sorted != files {
        println!("time order:");
        for f in &sorted { println!("  {}", filename_or_empty(f)) }
    }

    Ok(())
}

fn show_bands (handler: &str)->Result<()> {
    let bands = band_table(handler).ok_or_else( || anyhow!("unknown handler {handler}"))?;

    println!("{:>3} {:>9} {:>5} {:>9} {:>7} {:>9}", "idx", "name", "id", "wl", "res[m]", "category");
    for (i,b) in bands.iter().enumerate() {
        let wl = b.wavelength_label().unwrap_or_default();
        println!("{:>3} {:>9} {:>5} {:>9} {:>7} {:>9}", i, b.name, b.id, wl, b.nadir_resolution, b.category);
    }
    Ok(())
}
