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

use std::{path::PathBuf, sync::Arc};
use hydra_data::prelude::*;
use hydra_data::config::config_from_str;
use common::*;

fn handlers ()->Vec<Box<dyn DataSourceHandler>> {
    vec![ Box::new(BrokenHandler), Box::new(TestImagerHandler) ]
}

#[test]
fn test_identify () {
    let factory = DataSourceFactory::new().with( Box::new(TestImagerHandler));

    assert_eq!( factory.identify( &test_files()).map( |h| h.name()), Some("TestImager"));
    assert!( factory.identify( &[PathBuf::from("foo.nc")]).is_none());
    assert!( factory.identify( &[]).is_none());
    assert_eq!( factory.handler_names(), vec!["TestImager"]);
    assert!( factory.handler("TestImager").is_some());
}

#[test]
fn test_create_falls_through () -> Result<()> {
    let provider = test_provider()?;
    let mut factory = DataSourceFactory::from_handlers( handlers());

    // Broken claims the files first but fails, the next handler wins
    let ds = factory.create_data_source( &test_files(), &provider)?;
    assert_eq!( ds.description(), "test imager");
    assert_eq!( ds.data_choices().len(), 2);
    Ok(())
}

#[test]
fn test_no_suitable_source () -> Result<()> {
    let provider = test_provider()?;
    let mut factory = DataSourceFactory::new().with( Box::new(BrokenHandler));

    let res = factory.create_data_source( &test_files(), &provider);
    assert!( matches!( res, Err(HydraDataError::NoSuitableSourceError(_))));

    let res = factory.create_data_source( &[], &provider);
    assert!( matches!( res, Err(HydraDataError::NoSuitableSourceError(_))));
    assert!( factory.data_sources().is_empty());
    Ok(())
}

#[test]
fn test_source_registry () -> Result<()> {
    let provider = test_provider()?;
    let mut factory = DataSourceFactory::from_handlers( handlers());
    assert!( factory.data_sources().is_empty());

    let ds1 = factory.create_data_source( &[PathBuf::from("TI_B01.nc")], &provider)?;
    let ds2 = factory.create_data_source( &[PathBuf::from("TI_B02.nc")], &provider)?;
    assert_ne!( ds1.id(), ds2.id());

    let ids: Vec<&SourceId> = factory.data_sources().iter().map( |ds| ds.id()).collect();
    assert_eq!( ids, vec![ds1.id(), ds2.id()]);
    assert_eq!( factory.data_sources_by_description("test imager").len(), 2);
    assert!( factory.data_sources_by_description("H08 AHI").is_empty());
    assert!( factory.data_source( ds2.id()).is_some());

    // the registry shares the source with the caller
    let removed = factory.remove_data_source( ds1.id()).unwrap();
    assert!( Arc::ptr_eq( &removed, &ds1));
    assert_eq!( factory.data_sources().len(), 1);
    assert!( factory.data_source( ds1.id()).is_none());
    assert!( factory.remove_data_source( ds1.id()).is_none());

    // still usable after removal
    assert_eq!( ds1.data_choices().len(), 1);
    Ok(())
}

#[test]
fn test_factory_config () -> Result<()> {
    let config: FactoryConfig = config_from_str( r#"FactoryConfig( handlers: Some(["TestImager"]) )"#)?;
    let factory = DataSourceFactory::from_config( handlers(), &config)?;
    assert_eq!( factory.handler_names(), vec!["TestImager"]);

    let config: FactoryConfig = config_from_str( "FactoryConfig( handlers: None )")?;
    let factory = DataSourceFactory::from_config( handlers(), &config)?;
    assert_eq!( factory.handler_names(), vec!["Broken", "TestImager"]);

    let config: FactoryConfig = config_from_str( r#"(handlers: Some(["TestImager", "Broken"]))"#)?;
    let factory = DataSourceFactory::from_config( handlers(), &config)?;
    assert_eq!( factory.handler_names(), vec!["TestImager", "Broken"]);

    let config: FactoryConfig = config_from_str( r#"(handlers: Some(["Unknown"]))"#)?;
    assert!( matches!( DataSourceFactory::from_config( handlers(), &config), Err(HydraDataError::UnknownHandlerError(_))));

    let res: Result<FactoryConfig> = config_from_str( "FactoryConfig( handlers: 42 )");
    assert!( matches!( res, Err(HydraDataError::ConfigParseError(_))));
    Ok(())
}
