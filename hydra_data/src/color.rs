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

use lazy_static::lazy_static;

pub const GRAY: &str = "gray";
pub const INV_GRAY: &str = "invGray";

/// named rgb palette with color components in [0..1]
#[derive(Debug,Clone,PartialEq)]
pub struct ColorTable {
    pub name: String,
    pub rgb: [Vec<f32>;3],
}

impl ColorTable {
    pub fn new (name: &str, rgb: [Vec<f32>;3])->Self {
        ColorTable { name: name.to_string(), rgb }
    }

    pub fn num_colors (&self)->usize { self.rgb[0].len() }

    pub fn is_inverted_gray (&self)->bool { self.name == INV_GRAY }
}

lazy_static! {
    static ref GRAY_TABLE: ColorTable = ColorTable::new( GRAY, gray_components( 256, false));
    static ref INV_GRAY_TABLE: ColorTable = ColorTable::new( INV_GRAY, gray_components( 256, true));
}

/// the standard 256 level grayscale palette
pub fn gray_table ()->&'static ColorTable { &GRAY_TABLE }

/// the inverted 256 level grayscale palette we use for emissive (thermal) bands
pub fn inv_gray_table ()->&'static ColorTable { &INV_GRAY_TABLE }

pub fn gray_components (num_colors: usize, inverse: bool)->[Vec<f32>;3] {
    let scale = 1.0 / (num_colors.max(2) - 1) as f32;
    let levels: Vec<f32> = (0..num_colors).map( |i| {
        let a = if inverse { (num_colors - i) as f32 } else { i as f32 };
        a * scale
    }).collect();

    [levels.clone(), levels.clone(), levels]
}
