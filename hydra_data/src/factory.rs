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

use std::{path::{Path,PathBuf}, sync::Arc};
use serde::Deserialize;
use tracing::{debug,info,warn};

use crate::{
    errors::{Result,HydraDataError},
    fs::files_in_dir,
    reader::ReaderProvider,
    choice::SourceId,
    source::{DataSource,DataSourceHandler},
};

/// which handlers are enabled, and in which order they are tried. All registered handlers if `handlers` is None
#[derive(Debug,Clone,Default,Deserialize)]
pub struct FactoryConfig {
    pub handlers: Option<Vec<String>>,
}

/// ordered lookup table of data source handlers, plus the registry of the data sources created through it
pub struct DataSourceFactory {
    handlers: Vec<Box<dyn DataSourceHandler>>,
    sources: Vec<Arc<dyn DataSource>>,
}

impl DataSourceFactory {
    pub fn new ()->Self { Self::from_handlers( Vec::new()) }

    pub fn from_handlers (handlers: Vec<Box<dyn DataSourceHandler>>)->Self { DataSourceFactory { handlers, sources: Vec::new() } }

    /// build a factory from the available handlers, filtered and ordered by config
    pub fn from_config (available: Vec<Box<dyn DataSourceHandler>>, config: &FactoryConfig)->Result<Self> {
        match &config.handlers {
            None => Ok( Self::from_handlers( available) ),
            Some(names) => {
                let mut available: Vec<Option<Box<dyn DataSourceHandler>>> = available.into_iter().map(Some).collect();
                let mut handlers = Vec::with_capacity( names.len());

                for name in names {
                    let idx = available.iter().position( |h| h.as_ref().is_some_and( |h| h.name() == name))
                        .ok_or_else( || HydraDataError::UnknownHandlerError( name.clone()))?;
                    if let Some(h) = available[idx].take() {
                        handlers.push(h)
                    }
                }
                Ok( Self::from_handlers( handlers) )
            }
        }
    }

    pub fn register (&mut self, handler: Box<dyn DataSourceHandler>) {
        self.handlers.push( handler)
    }

    pub fn with (mut self, handler: Box<dyn DataSourceHandler>)->Self {
        self.register( handler);
        self
    }

    pub fn handler_names (&self)->Vec<&'static str> {
        self.handlers.iter().map( |h| h.name()).collect()
    }

    pub fn handler (&self, name: &str)->Option<&dyn DataSourceHandler> {
        self.handlers.iter().find( |h| h.name() == name).map( |h| h.as_ref())
    }

    /// the first handler that recognizes the file set
    pub fn identify (&self, files: &[PathBuf])->Option<&dyn DataSourceHandler> {
        if files.is_empty() { return None }
        self.handlers.iter().find( |h| h.can_understand(files)).map( |h| h.as_ref())
    }

    /// try handlers in order, the first successful construction wins and is added to the registry
    pub fn create_data_source (&mut self, files: &[PathBuf], provider: &dyn ReaderProvider)->Result<Arc<dyn DataSource>> {
        let first = files.first().ok_or_else( || HydraDataError::NoSuitableSourceError( "empty file set".to_string()))?;

        for h in &self.handlers {
            if !h.can_understand(files) {
                continue
            }
            debug!("trying {} for {} file(s)", h.name(), files.len());
            match h.create( files, provider) {
                Ok(ds) => {
                    info!("created {} data source for {:?}", h.name(), first);
                    let ds: Arc<dyn DataSource> = Arc::from(ds);
                    self.sources.push( ds.clone());
                    return Ok(ds)
                }
                Err(e) => warn!("{} failed to create data source: {e}", h.name())
            }
        }

        Err( HydraDataError::NoSuitableSourceError( format!("{:?}", first)) )
    }

    /// create a data source from all regular files in dir
    pub fn create_from_dir (&mut self, dir: &Path, provider: &dyn ReaderProvider)->Result<Arc<dyn DataSource>> {
        let files = files_in_dir(&dir)?;
        if files.is_empty() {
            return Err( HydraDataError::NoSuitableSourceError( format!("no files in {:?}", dir)) )
        }
        self.create_data_source( &files, provider)
    }

    /// all data sources created so far, in creation order
    pub fn data_sources (&self)->&[Arc<dyn DataSource>] { &self.sources }

    pub fn data_sources_by_description (&self, description: &str)->Vec<Arc<dyn DataSource>> {
        self.sources.iter().filter( |ds| ds.description() == description).cloned().collect()
    }

    pub fn data_source (&self, id: &SourceId)->Option<&Arc<dyn DataSource>> {
        self.sources.iter().find( |ds| ds.id() == id)
    }

    /// drop the data source with the given id from the registry, returning it if it was registered
    pub fn remove_data_source (&mut self, id: &SourceId)->Option<Arc<dyn DataSource>> {
        let idx = self.sources.iter().position( |ds| ds.id() == id)?;
        debug!("removing data source {}", id.as_str());
        Some( self.sources.remove(idx))
    }
}

impl Default for DataSourceFactory {
    fn default ()->Self { Self::new() }
}
