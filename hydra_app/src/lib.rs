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


//! the default data source registry of all instrument crates

use std::path::Path;
use tracing::debug;

use hydra_data::{
    band::BandTable,
    config::load_config,
    errors::Result,
    factory::{DataSourceFactory,FactoryConfig},
    source::DataSourceHandler,
};
use hydra_ahi::{AhiDirectoryHandler,ahi_bands,AHI_HANDLER};
use hydra_viirs::{
    SipsViirsDnbHandler,SipsViirsFsnHandler,SipsViirsSvmHandler,
    dnb_bands,fsn_bands,svm_bands,DNB_HANDLER,FSN_HANDLER,SVM_HANDLER
};

/// all known handlers, in the order they are tried if there is no config
pub fn all_handlers ()->Vec<Box<dyn DataSourceHandler>> {
    vec![
        Box::new( AhiDirectoryHandler),
        Box::new( SipsViirsSvmHandler),
        Box::new( SipsViirsDnbHandler),
        Box::new( SipsViirsFsnHandler),
    ]
}

pub fn default_factory ()->DataSourceFactory {
    DataSourceFactory::from_handlers( all_handlers())
}

pub fn factory_from_config (config: &FactoryConfig)->Result<DataSourceFactory> {
    DataSourceFactory::from_config( all_handlers(), config)
}

pub fn factory_from_config_path<P: AsRef<Path>> (path: P)->Result<DataSourceFactory> {
    debug!("loading factory config {:?}", path.as_ref());
    let config: FactoryConfig = load_config( path)?;
    factory_from_config( &config)
}

/// the band table of a registered handler
pub fn band_table (handler: &str)->Option<&'static BandTable> {
    match handler {
        AHI_HANDLER => Some( ahi_bands()),
        SVM_HANDLER => Some( svm_bands()),
        DNB_HANDLER => Some( dnb_bands()),
        FSN_HANDLER => Some( fsn_bands()),
        _ => None
    }
}
