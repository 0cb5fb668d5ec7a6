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

//! the data source abstraction instrument handlers plug into: data choices, band tables, color tables,
//! array readers and adapters, the handler registry and file name conventions

pub mod errors;
pub use errors::*;

pub mod fs;
pub mod config;
pub mod choice;
pub mod band;
pub mod color;
pub mod reader;
pub mod adapter;
pub mod filename;
pub mod source;
pub mod factory;
pub mod geos;

pub mod prelude {
    pub use crate::adapter::{DataAdapter,GridAdapter,RangeData,RangeProcessor,SwathAdapter,SwathMetadata};
    pub use crate::band::{BandInfo,BandTable};
    pub use crate::choice::{DataChoice,DataGroup,DataSelection,DimRange,MultiDimensionSubset,SourceId};
    pub use crate::color::{ColorTable,gray_table,inv_gray_table};
    pub use crate::errors::{HydraDataError,Result};
    pub use crate::factory::{DataSourceFactory,FactoryConfig};
    pub use crate::reader::{ArrayReader,MemReader,MemReaderProvider,ReaderProvider};
    pub use crate::source::{DataSource,DataSourceHandler};
}
