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

//! the common part of the SIPS VIIRS L1B products: granule/geolocation file pairing, granule
//! aggregation, the adapter factory and the per-band range corrections

use std::{path::{Path,PathBuf}, sync::Arc};
use chrono::{DateTime,Utc};
use regex::Regex;
use tracing::{debug,warn};

use hydra_data::{
    op_failed,
    adapter::{DataAdapter,RangeData,RangeProcessor,SwathAdapter,SwathMetadata},
    band::BandTable,
    choice::{DataChoice,DataGroup,MultiDimensionSubset,SourceId},
    color::{ColorTable,gray_table},
    errors::{Result,no_choice,not_understood},
    filename::{datetime_from_path,time_sorted_files},
    fs::{filename_or_empty,matching_siblings},
    reader::{ArrayReader,ReaderProvider},
    source::DataSource,
};

pub const SIPS_DESCRIPTION: &str = "SNPP VIIRS";

pub const GROUP_NAME: &str = "observation_data/";
pub const GEO_GROUP_NAME: &str = "geolocation_data/";

pub const TRACK_DIM: &str = "number_of_lines";
pub const XTRACK_DIM: &str = "number_of_pixels";

pub const LONGITUDE: &str = "geolocation_data/longitude";
pub const LATITUDE: &str = "geolocation_data/latitude";
pub const SOLAR_ZENITH: &str = "geolocation_data/solar_zenith";

pub const FILL_VALUE: &str = "_FillValue";

/// meters, the same for all SIPS VIIRS bands we expose
pub const VIIRS_NADIR_RESOLUTION: f32 = 770.0;

/// reflectances are only normalized by the solar zenith angle below this (degrees)
pub const MAX_SOLAR_ZENITH: f32 = 80.0;

/// LUT entries with this value are not valid brightness temperatures
pub const BT_LUT_MISSING: f32 = -999.9;

pub const DNB_RANGE: &str = "DNB";

/// bands whose values get normalized by cos(solar_zenith)
pub const REFLECTIVE_BANDS: [&str;14] = [
    "I01", "I02", "I03",
    "M01", "M02", "M03", "M04", "M05", "M06", "M07", "M08", "M09", "M10", "M11"
];

/// product file prefix -> geolocation file prefix
const GEO_PREFIXES: [(&str,&str);12] = [
    ("VNP02MOD", "VNP03MOD"),
    ("VJ102MOD", "VJ103MOD"),
    ("VJ202MOD", "VJ203MOD"),
    ("VNP02DNB", "VNP03DNB"),
    ("VJ102DNB", "VJ103DNB"),
    ("VJ202DNB", "VJ203DNB"),
    ("VNP02IMG", "VNP03IMG"),
    ("VJ102IMG", "VJ103IMG"),
    ("VJ202IMG", "VJ203IMG"),
    ("VNP02FSN", "VNP03MOD"), // fusion products use the M-band geolocation
    ("VJ102FSN", "VJ103MOD"),
    ("VJ202FSN", "VJ203MOD"),
];

/// the geolocation file prefix for a SIPS VIIRS product file name
pub fn geo_prefix_for (filename: &str)->Option<&'static str> {
    GEO_PREFIXES.iter().find( |(p,_)| filename.starts_with(p)).map( |(_,g)| *g)
}

/// true if the first file name starts with one of the prefixes. Only the first file is checked
pub fn first_file_has_prefix (files: &[PathBuf], prefixes: &[&str])->bool {
    match files.first() {
        Some(f) => {
            let name = filename_or_empty(f);
            prefixes.iter().any( |p| name.starts_with(p))
        }
        None => false
    }
}

/// find the geolocation file for each granule. A granule `<prod>.<f1>.<f2>.…` is paired with the
/// first candidate whose name starts with `<geo_prefix>.<f1>.<f2>`
pub fn pair_geolocation_files (granules: &[PathBuf], candidates: &[PathBuf], geo_prefix: &str)->Result<Vec<PathBuf>> {
    let mut geo_files: Vec<PathBuf> = Vec::with_capacity( granules.len());

    for granule in granules {
        let name = filename_or_empty(granule);
        let fields: Vec<&str> = name.split('.').collect();
        if fields.len() < 3 {
            return Err( op_failed!("malformed SIPS VIIRS file name {name}"))
        }
        let key = format!("{}.{}.{}", geo_prefix, fields[1], fields[2]);

        let geo = candidates.iter()
            .find( |c| filename_or_empty(c).starts_with( key.as_str()))
            .ok_or_else( || op_failed!("no geolocation file {key}* for {name}"))?;
        geo_files.push( geo.clone());
    }

    Ok(geo_files)
}

// the geolocation candidates are the given files plus the files next to the first granule
fn geolocation_candidates (files: &[PathBuf], first: &Path, geo_prefix: &str)->Result<Vec<PathBuf>> {
    let mut candidates: Vec<PathBuf> = files.iter()
        .filter( |f| filename_or_empty(f).starts_with(geo_prefix))
        .cloned()
        .collect();

    let re = Regex::new( &format!("^{}", regex::escape(geo_prefix))).map_err( |e| op_failed!("{e}"))?;
    match matching_siblings( &first, &re) {
        Ok(siblings) => {
            for s in siblings {
                if !candidates.iter().any( |c| filename_or_empty(c) == filename_or_empty(&s)) {
                    candidates.push(s);
                }
            }
        }
        Err(e) => debug!("cannot list directory of {:?}: {e}", first)
    }

    Ok(candidates)
}

/* #region range processing *********************************************************************/

/// converts unsigned 16 bit counts into brightness temperatures through a lookup table
#[derive(Debug,Clone)]
pub struct BtLut {
    lut: Vec<f32>,
}

impl BtLut {
    pub fn new (lut: Vec<f32>)->Self { BtLut { lut } }

    pub fn from_reader (reader: &dyn ArrayReader, lut_name: &str)->Result<Self> {
        Ok( BtLut::new( reader.all_floats(lut_name)?) )
    }

    pub fn len (&self)->usize { self.lut.len() }
    pub fn is_empty (&self)->bool { self.lut.is_empty() }

    pub fn brightness_temp (&self, count: f32)->f32 {
        if count.is_nan() { return f32::NAN }

        let mut idx = count as i64;
        if idx < 0 { idx += 65536 } // counts stored as signed shorts

        match self.lut.get( idx as usize) {
            Some(bt) if idx < 65536 && *bt != BT_LUT_MISSING => *bt,
            _ => f32::NAN
        }
    }
}

impl RangeProcessor for BtLut {
    fn process_range (&self, values: &mut [f32]) {
        for v in values.iter_mut() {
            *v = self.brightness_temp(*v);
        }
    }
}

/// brightness temperature conversion for aggregated granules. Each granule has its own LUT, which
/// applies to the span of rows the granule occupies along the aggregation dimension
#[derive(Debug,Clone)]
pub struct GranuleBtLut {
    along: String,
    luts: Vec<BtLut>,
    row_ends: Vec<usize>, // exclusive, cumulative
}

impl GranuleBtLut {
    /// `granules` are (number of rows, LUT) pairs in aggregation order
    pub fn new (along: &str, granules: Vec<(usize,BtLut)>)->Result<Self> {
        if granules.is_empty() {
            return Err( op_failed!("no granule brightness temperature LUTs"))
        }

        let mut luts = Vec::with_capacity( granules.len());
        let mut row_ends = Vec::with_capacity( granules.len());
        let mut end = 0;
        for (rows,lut) in granules {
            end += rows;
            row_ends.push( end);
            luts.push( lut);
        }

        Ok( GranuleBtLut { along: along.to_string(), luts, row_ends } )
    }

    /// read the LUT and the number of `along` rows of `array` from each granule
    pub fn from_granules (granules: &[Arc<dyn ArrayReader>], array: &str, lut_name: &str, along: &str)->Result<Self> {
        let mut list: Vec<(usize,BtLut)> = Vec::with_capacity( granules.len());

        for g in granules {
            let d = g.dimension_names(array)?.iter().position( |n| n == along)
                .ok_or_else( || op_failed!("array {array} has no dimension {along}"))?;
            let rows = g.dimension_lengths(array)?.get(d).copied()
                .ok_or_else( || op_failed!("array {array} has no dimension {along}"))?;
            list.push( (rows, BtLut::from_reader( g.as_ref(), lut_name)?) );
        }

        GranuleBtLut::new( along, list)
    }

    pub fn num_granules (&self)->usize { self.luts.len() }

    /// the LUT of the granule that contains `row` of the aggregated array
    pub fn lut_for_row (&self, row: usize)->&BtLut {
        let i = self.row_ends.partition_point( |end| *end <= row);
        &self.luts[ i.min( self.luts.len() - 1)]
    }
}

impl RangeProcessor for GranuleBtLut {
    // no row information, all values are taken to be in the first granule
    fn process_range (&self, values: &mut [f32]) {
        self.luts[0].process_range( values)
    }

    fn process_hyperslab (&self, dim_names: &[String], start: &[usize], count: &[usize], stride: &[usize], values: &mut [f32]) {
        let Some(d) = dim_names.iter().position( |n| *n == self.along) else {
            return self.process_range( values)
        };
        let (Some(row0), Some(n_rows), Some(step)) = (start.get(d), count.get(d), stride.get(d)) else {
            return self.process_range( values)
        };

        // values are row-major, each chunk of `inner` values shares one row of the aggregation dimension
        let inner: usize = count[d+1..].iter().product();
        if *n_rows == 0 || inner == 0 { return }

        for (i,chunk) in values.chunks_mut( inner).enumerate() {
            let row = row0 + (i % n_rows) * step;
            self.lut_for_row( row).process_range( chunk);
        }
    }
}

/// DNB radiances are shown on a log scale, non-positive values are not valid
pub fn log_scale_radiances (values: &mut [f32]) {
    for v in values.iter_mut() {
        *v = if *v <= 0.0 { f32::NAN } else { v.log10() };
    }
}

/// normalize reflectances by the cosine of the solar zenith angle (degrees) where the sun is high enough
pub fn normalize_reflectances (refls: &mut [f32], solar_zenith: &[f32])->Result<()> {
    if refls.len() != solar_zenith.len() {
        return Err( op_failed!("reflectance and solar zenith sizes differ: {} vs {}", refls.len(), solar_zenith.len()))
    }
    for (r,sz) in refls.iter_mut().zip( solar_zenith.iter()) {
        if *sz < MAX_SOLAR_ZENITH {
            *r /= sz.to_radians().cos();
        }
    }
    Ok(())
}

pub fn is_reflective_band (name: &str)->bool { REFLECTIVE_BANDS.contains(&name) }

/* #endregion range processing */

/* #region product init *************************************************************************/

/// the product specific part of a SIPS VIIRS data source
pub trait SipsProduct: Send + Sync {
    fn handler_name (&self)->&'static str;

    /// the file name prefixes of the product files we accept
    fn product_prefixes (&self)->&[&'static str];

    fn bands (&self)->&BandTable;

    fn group (&self)->&DataGroup;

    fn can_understand (&self, files: &[PathBuf])->bool {
        first_file_has_prefix( files, self.product_prefixes())
    }

    /// build the adapters and register the data choices
    fn init (&self, ctx: &mut SipsInit)->Result<()>;

    fn default_color_table (&self, _choice: &DataChoice)->&'static ColorTable { gray_table() }

    fn nadir_resolution (&self, _choice: &DataChoice)->f32 { VIIRS_NADIR_RESOLUTION }
}

/// the adapter factory products use during init
pub struct SipsInit {
    id: SourceId,
    group: DataGroup,
    granules: Vec<Arc<dyn ArrayReader>>,
    reader: Arc<dyn ArrayReader>,
    geo_reader: Arc<dyn ArrayReader>,
    adapters: Vec<SwathAdapter>,
    choices: Vec<DataChoice>,
    solar_zenith: bool,
}

impl SipsInit {
    fn new (id: SourceId, group: DataGroup, granules: Vec<Arc<dyn ArrayReader>>, reader: Arc<dyn ArrayReader>, geo_reader: Arc<dyn ArrayReader>)->Self {
        SipsInit { id, group, granules, reader, geo_reader, adapters: Vec::new(), choices: Vec::new(), solar_zenith: false }
    }

    pub fn reader (&self)->&dyn ArrayReader { self.reader.as_ref() }

    pub fn has_array (&self, name: &str)->bool { self.reader.has_array(name) }

    /// the swath metadata table for a VIIRS observation array with the standard dimension and geolocation names
    pub fn fill_swath_metadata (&self, array: &str, range: &str, fill_value_name: Option<&str>)->SwathMetadata {
        SwathMetadata::new( XTRACK_DIM, TRACK_DIM, array, range, XTRACK_DIM, TRACK_DIM, LONGITUDE, LATITUDE)
            .with_fill_value_name( fill_value_name)
    }

    pub fn build_adapter (&self, array: &str, range: &str, fill_value_name: Option<&str>)->Result<SwathAdapter> {
        let metadata = self.fill_swath_metadata( array, range, fill_value_name);
        SwathAdapter::new( self.reader.clone(), metadata, Some(self.geo_reader.clone()))
    }

    /// like build_adapter but also enables the solar zenith normalization of the data source
    pub fn build_refl_adapter (&mut self, array: &str, range: &str, fill_value_name: Option<&str>)->Result<SwathAdapter> {
        if self.geo_reader.has_array(SOLAR_ZENITH) {
            self.solar_zenith = true;
        } else {
            warn!("no {SOLAR_ZENITH} in geolocation, {range} reflectances are not normalized");
        }
        self.build_adapter( array, range, fill_value_name)
    }

    /// the number of aggregated granules
    pub fn num_granules (&self)->usize { self.granules.len() }

    /// adapter that converts counts to brightness temperatures through the LUT of the granule each row comes from
    pub fn build_emis_adapter (&self, array: &str, range: &str, fill_value_name: Option<&str>, bt_lut_name: &str)->Result<SwathAdapter> {
        let mut metadata = self.fill_swath_metadata( array, range, fill_value_name);
        metadata.bt_lut_name = Some( bt_lut_name.to_string());

        let bt_lut = GranuleBtLut::from_granules( &self.granules, array, bt_lut_name, TRACK_DIM)?;
        let adapter = SwathAdapter::new( self.reader.clone(), metadata, Some(self.geo_reader.clone()))?;
        Ok( adapter.with_range_processor( Arc::new(bt_lut)) )
    }

    /// register the adapter under `name`, with the adapter's default subset as the initial selection
    pub fn set_data_choice (&mut self, adapter: SwathAdapter, name: &str) {
        let mut choice = DataChoice::new( self.id.clone(), name, self.group.clone());
        choice.set_data_selection( adapter.default_subset());
        self.choices.push( choice);
        self.adapters.push( adapter);
    }

    pub fn num_adapters (&self)->usize { self.adapters.len() }
}

/* #endregion product init */

/* #region data source **************************************************************************/

pub struct SipsViirsDataSource<P: SipsProduct> {
    id: SourceId,
    product: P,
    files: Vec<PathBuf>,
    geo_files: Vec<PathBuf>,
    geo_reader: Arc<dyn ArrayReader>,
    adapters: Vec<SwathAdapter>,
    choices: Vec<DataChoice>,
    solar_zenith: bool,
    date_time: Option<DateTime<Utc>>,
}

impl<P: SipsProduct> SipsViirsDataSource<P> {

    pub fn new (product: P, files: &[PathBuf], provider: &dyn ReaderProvider)->Result<Self> {
        if !product.can_understand(files) {
            return Err( not_understood( product.handler_name()))
        }

        let first = filename_or_empty( files.first().ok_or_else( || not_understood( product.handler_name()))?);
        let product_prefix = product.product_prefixes().iter().copied()
            .find( |p| first.starts_with(p))
            .ok_or_else( || op_failed!("unknown VIIRS filename prefix: {first}"))?;
        let geo_prefix = geo_prefix_for(first).ok_or_else( || op_failed!("unknown VIIRS filename prefix: {first}"))?;

        // a batch can contain other files (e.g. a directory listing), only keep the granules of our product
        let granules: Vec<PathBuf> = files.iter().filter( |f| filename_or_empty(f).starts_with(product_prefix)).cloned().collect();
        let granules = time_sorted_files( &granules)?;

        let candidates = geolocation_candidates( files, &granules[0], geo_prefix)?;
        let geo_files = pair_geolocation_files( &granules, &candidates, geo_prefix)?;
        debug!("{} granules paired with {:?}", granules.len(), geo_files);

        let granule_readers = granules.iter().map( |g| provider.open(g)).collect::<Result<Vec<_>>>()?;
        let reader = provider.aggregate( &granules, TRACK_DIM)?;
        let geo_reader = provider.aggregate( &geo_files, TRACK_DIM)?;

        let id = SourceId::new( &format!("{}:{}", product.handler_name(), filename_or_empty(&granules[0])));
        let mut ctx = SipsInit::new( id.clone(), product.group().clone(), granule_readers, reader, geo_reader.clone());
        product.init( &mut ctx)?;

        if ctx.adapters.is_empty() {
            return Err( op_failed!("no observation arrays found for {}", product.handler_name()))
        }

        let date_time = datetime_from_path( &granules[0]);
        let SipsInit { adapters, choices, solar_zenith, .. } = ctx;

        Ok( SipsViirsDataSource { id, product, files: granules, geo_files, geo_reader, adapters, choices, solar_zenith, date_time } )
    }

    pub fn product (&self)->&P { &self.product }

    /// the time sorted granule files
    pub fn files (&self)->&[PathBuf] { &self.files }

    /// the geolocation files, in the same order as the granules
    pub fn geo_files (&self)->&[PathBuf] { &self.geo_files }

    pub fn num_adapters (&self)->usize { self.adapters.len() }

    pub fn swath_adapter (&self, choice: &DataChoice)->Option<&SwathAdapter> {
        self.choices.iter().position( |c| c.name() == choice.name()).and_then( |i| self.adapters.get(i))
    }

    pub fn group (&self)->&DataGroup { self.product.group() }

    fn read_solar_zenith (&self, adapter: &SwathAdapter, subset: &MultiDimensionSubset)->Result<Vec<f32>> {
        let md = adapter.metadata();
        let track = subset.get(&md.track).ok_or_else( || op_failed!("subset has no {} range", md.track))?;
        let xtrack = subset.get(&md.xtrack).ok_or_else( || op_failed!("subset has no {} range", md.xtrack))?;
        let sz_subset = MultiDimensionSubset::new().with( md.geo_track.clone(), *track).with( md.geo_xtrack.clone(), *xtrack);

        let dims = self.geo_reader.dimension_names(SOLAR_ZENITH)?;
        let (start,count,stride) = sz_subset.to_hyperslab( &dims)?;
        self.geo_reader.float_array( SOLAR_ZENITH, &start, &count, &stride)
    }
}

impl<P: SipsProduct> DataSource for SipsViirsDataSource<P> {
    fn id (&self)->&SourceId { &self.id }

    fn description (&self)->&str { SIPS_DESCRIPTION }

    fn date_time (&self)->Option<DateTime<Utc>> { self.date_time }

    fn data_choices (&self)->&[DataChoice] { &self.choices }

    fn data_choice_by_name_mut (&mut self, name: &str)->Option<&mut DataChoice> {
        self.choices.iter_mut().find( |c| c.name() == name)
    }

    fn band_table (&self)->&BandTable { self.product.bands() }

    fn nadir_resolution (&self, choice: &DataChoice)->Result<f32> {
        Ok( self.product.nadir_resolution(choice) )
    }

    fn default_color_table (&self, choice: &DataChoice)->&'static ColorTable {
        self.product.default_color_table(choice)
    }

    fn post_process (&self, choice: &DataChoice, data: &mut RangeData)->Result<()> {
        if choice.name() == DNB_RANGE {
            log_scale_radiances( data.floats_mut());
        }
        Ok(())
    }

    fn get_data (&self, choice: &DataChoice)->Result<RangeData> {
        let adapter = self.swath_adapter(choice).ok_or_else( || no_choice( choice.name()))?;
        let subset = match choice.data_selection() {
            Some(sel) => sel.clone(),
            None => {
                warn!("no selection for {}, using default subset", choice.name());
                adapter.default_subset()
            }
        };

        let mut data = adapter.read( &subset)?;

        if is_reflective_band( choice.name()) && self.solar_zenith {
            let solzen = self.read_solar_zenith( adapter, &subset)?;
            normalize_reflectances( data.floats_mut(), &solzen)?;
        }

        self.post_process( choice, &mut data)?;
        Ok(data)
    }
}

/* #endregion data source */
