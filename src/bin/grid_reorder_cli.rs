//! CLI tool for grid-reorder - applies a column move offline and outputs the
//! resulting order mutations as JSON
//!
//! Usage:
//!   grid_reorder_cli <columns.json> <source> [target]             # JSON to stdout
//!   grid_reorder_cli <columns.json> <source> [target] -o out.json # JSON to file
//!
//! `columns.json` is an array of `{"name", "width", "order", "visible"}`
//! objects. Without a target the source column moves to the front.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::cell::RefCell;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::rc::Rc;

use futures::future::{self, LocalBoxFuture};
use grid_reorder::reorder::{CommitEngine, SchemaSink};
use grid_reorder::{Column, GridLayout, GridState, SchemaMutations, Viewport};

/// Collects mutations instead of persisting them
#[derive(Default)]
struct CollectingSink {
    pending: RefCell<SchemaMutations>,
}

impl SchemaSink for CollectingSink {
    fn add_schema_mutations(&self, mutations: SchemaMutations) {
        self.pending.borrow_mut().extend(mutations);
    }

    fn save_schema_mutations(&self) -> LocalBoxFuture<'static, grid_reorder::Result<()>> {
        Box::pin(future::ready(Ok(())))
    }
}

fn main() {
    let mut args: Vec<String> = env::args().collect();

    let output_path = match args.iter().position(|a| a == "-o") {
        Some(idx) if idx + 1 < args.len() => {
            let path = args.remove(idx + 1);
            args.remove(idx);
            Some(path)
        }
        _ => None,
    };

    if args.len() < 3 {
        eprintln!("Usage: grid_reorder_cli <columns.json> <source> [target] [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let source = &args[2];
    let target = args.get(3).map(String::as_str);

    // Read input file
    let data = match fs::read_to_string(input_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let columns: Vec<Column> = match serde_json::from_str(&data) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error parsing columns: {}", e);
            std::process::exit(1);
        }
    };

    let layout = match GridLayout::from_persisted(columns) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Apply the move
    let grid = Rc::new(RefCell::new(GridState::new(layout, Viewport::default())));
    let sink = Rc::new(CollectingSink::default());
    let engine = CommitEngine::new(Rc::clone(&grid), Rc::clone(&sink) as Rc<dyn SchemaSink>);
    if let Err(e) = futures::executor::block_on(engine.move_column(source, target)) {
        eprintln!("Error moving column: {}", e);
        std::process::exit(1);
    }

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&*sink.pending.borrow()) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
