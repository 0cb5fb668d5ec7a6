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

use hydra_data::prelude::*;
use hydra_data::color::{GRAY,INV_GRAY};

#[test]
fn test_dim_range () {
    assert_eq!( DimRange::new(0, 9, 1).len(), 10);
    assert_eq!( DimRange::new(0, 9, 5).len(), 2);
    assert_eq!( DimRange::new(2, 2, 1).len(), 1);
    assert!( DimRange::new(5, 2, 1).is_empty());

    let r = DimRange::full( 100, 5);
    assert_eq!( r.stop, 99);
    assert_eq!( r.len(), 20);
    assert_eq!( DimRange::full( 10, 0).stride, 1);
}

#[test]
fn test_subset () -> Result<()> {
    let mut sub = MultiDimensionSubset::new()
        .with( "y", DimRange::new(0, 9, 1))
        .with( "x", DimRange::new(0, 19, 2));
    assert_eq!( sub.shape(), vec![10, 10]);
    assert_eq!( sub.num_elements(), 100);

    sub.set( "y", DimRange::new(2, 3, 1)); // replaces, keeps position
    assert_eq!( sub.dimension_names().collect::<Vec<_>>(), vec!["y", "x"]);
    assert_eq!( sub.shape(), vec![2, 10]);

    let (start,count,stride) = sub.to_hyperslab( &["x".to_string(), "y".to_string()])?;
    assert_eq!( start, vec![0, 2]);
    assert_eq!( count, vec![10, 2]);
    assert_eq!( stride, vec![2, 1]);

    assert!( matches!( sub.to_hyperslab( &["z".to_string()]), Err(HydraDataError::SubsetError(_))));
    Ok(())
}

#[test]
fn test_data_choice_selection () {
    let src = SourceId::new("test:file.nc");
    let grp = DataGroup::new("M-Band");
    let mut choice = DataChoice::new( src.clone(), "M01", grp.clone());

    assert_eq!( choice.name(), "M01");
    assert_eq!( choice.group(), &grp);
    assert_eq!( choice.data_source(), &src);
    assert!( choice.data_selection().is_none());

    let a = MultiDimensionSubset::new().with( "y", DimRange::new(0, 9, 1));
    let b = MultiDimensionSubset::new().with( "x", DimRange::new(0, 4, 1));
    choice.set_data_selection( a);
    choice.set_data_selection( b.clone());
    assert_eq!( choice.data_selection(), Some(&b)); // replaced, not merged

    choice.clear_data_selection();
    assert!( choice.data_selection().is_none());
}

#[test]
fn test_gray_tables () {
    let gray = gray_table();
    let inv = inv_gray_table();

    assert_eq!( gray.name, GRAY);
    assert_eq!( inv.name, INV_GRAY);
    assert_eq!( gray.num_colors(), 256);
    assert_eq!( inv.num_colors(), 256);
    assert!( inv.is_inverted_gray());
    assert!( !gray.is_inverted_gray());

    assert_eq!( gray.rgb[0][0], 0.0);
    assert!( (gray.rgb[0][255] - 1.0).abs() < 1e-6);
    assert!( inv.rgb[2][0] > inv.rgb[2][255]);
    assert_eq!( gray.rgb[0], gray.rgb[1]);
}

#[test]
fn test_band_table () {
    let grp = DataGroup::new("2KMemis");
    let bands = BandTable::new( vec![
        BandInfo::named( "B01", 1000.0, 0.47, &grp, "TEST", 10),
        BandInfo::new( "B07", "C07", 2000.0, 3.9, &grp, "TEST", 5),
        BandInfo::named( "X", 2000.0, 0.0, &grp, "TEST", 5),
    ]);

    assert_eq!( bands.len(), 3);
    assert_eq!( bands.index_of("C07"), Some(1));
    assert_eq!( bands.by_id("B07").map( |b| b.name.as_str()), Some("C07"));
    assert!( bands.by_name("B07").is_none());
    assert_eq!( bands.get(0).and_then( |b| b.wavelength_label()), Some("(0.47)".to_string()));
    assert_eq!( bands.by_name("X").and_then( |b| b.wavelength_label()), None);
}
