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


//! data sources for VIIRS L1B granules in the NASA SIPS NetCDF format. All products share the
//! granule aggregation and geolocation pairing of the `sips` module

pub mod sips;
pub mod dnb;
pub mod svm;
pub mod fsn;

pub use sips::{SipsProduct,SipsViirsDataSource,BtLut,GranuleBtLut};
pub use dnb::{SipsViirsDnb,SipsViirsDnbHandler,DnbDataSource,dnb_bands,DNB_HANDLER};
pub use svm::{SipsViirsSvm,SipsViirsSvmHandler,SvmDataSource,svm_bands,SVM_HANDLER};
pub use fsn::{SipsViirsFsn,SipsViirsFsnHandler,FsnDataSource,fsn_bands,FSN_HANDLER};
