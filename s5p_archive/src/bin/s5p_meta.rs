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

//! tool to identify Sentinel-5P product files and print their extracted archive metadata

use std::path::PathBuf;
use std::process::exit;

use lazy_static::lazy_static;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use s5p_archive::{product_type_plugin, product_types, S5pProduct};

#[derive(StructOpt)]
#[structopt(about = "tool to extract archive metadata from Sentinel-5P product files")]
struct CliOpts {
    /// product type to check (tries the whole catalog if omitted)
    #[structopt(short,long)]
    product_type: Option<String>,

    /// also extract the footprint polygon from file contents
    #[structopt(long)]
    footprint: bool,

    /// list all registered product types and exit
    #[structopt(long)]
    list: bool,

    /// pathname of the product file to analyze
    pathname: Option<String>,
}

lazy_static! { static ref ARGS: CliOpts = CliOpts::from_args(); }

fn main() {
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    if ARGS.list {
        for product_type in product_types() { println!("{product_type}") }
        return
    }

    let Some(pathname) = &ARGS.pathname else {
        eprintln!("no product file given (use --list to show registered product types)");
        exit(1)
    };
    let paths = vec![ PathBuf::from( pathname)];

    match &ARGS.product_type {
        Some(product_type) => {
            match product_type_plugin( product_type) {
                Some(plugin) => {
                    if !plugin.identify( &paths) {
                        println!("not a {} product", plugin.product_type());
                        exit(1)
                    }
                    report( &plugin, &paths)
                }
                None => {
                    eprintln!("unknown product type {product_type}");
                    exit(1)
                }
            }
        }
        None => {
            // the registry decides which grammar is tried - just walk the catalog
            for product_type in product_types() {
                if let Some(plugin) = product_type_plugin( &product_type) {
                    if plugin.identify( &paths) {
                        println!("product type: {}", plugin.product_type());
                        report( &plugin, &paths);
                        return
                    }
                }
            }
            println!("no registered product type matches {pathname}");
            exit(1)
        }
    }
}

fn report (plugin: &S5pProduct, paths: &[PathBuf]) {
    match plugin.analyze( paths, ARGS.footprint) {
        Ok(metadata) => {
            match serde_json::to_string_pretty( &metadata) {
                Ok(json) => println!("{json}"),
                Err(e) => { eprintln!("failed to serialize metadata: {e}"); exit(1) }
            }
            println!("archive path: {}", plugin.archive_path( &metadata).display());
        }
        Err(e) => {
            eprintln!("analysis failed: {e}");
            exit(1)
        }
    }
}
