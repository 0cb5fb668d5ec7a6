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

use std::{fs, io, path::{Path,PathBuf}};
use regex::Regex;

pub fn filename<'a,T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().file_name().and_then(|ostr| ostr.to_str())
}

/// file name of path or empty string if it has none. Recognition predicates treat "" as non-matching
pub fn filename_or_empty<T: AsRef<Path>> (path: &T)->&str {
    filename(path).unwrap_or("")
}

/// all regular files in dir, sorted by path
pub fn files_in_dir<P: AsRef<Path>> (dir: &P)->io::Result<Vec<PathBuf>> {
    let mut list: Vec<PathBuf> = Vec::new();

    for entry in fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            list.push( entry.path())
        }
    }

    list.sort();
    Ok(list)
}

/// regular files in the same directory as `path` whose name matches the regex
pub fn matching_siblings<P: AsRef<Path>> (path: &P, fname_regex: &Regex)->io::Result<Vec<PathBuf>> {
    let dir = match path.as_ref().parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok( files_in_dir(&dir)?.into_iter()
        .filter( |p| fname_regex.is_match( filename_or_empty(p)))
        .collect() )
}
