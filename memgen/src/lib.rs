//! Memgen: generates 8B/10B encoder and decoder lookup memories from a textual code-group table.

// # Tries to deny all lints (`rustc -W help`).
#![deny(absolute_paths_not_starting_with_crate)]
#![deny(anonymous_parameters)]
#![deny(deprecated_in_future)]
#![deny(explicit_outlives_requirements)]
#![deny(keyword_idents)]
#![deny(macro_use_extern_crate)]
#![deny(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(rust_2018_idioms)]
#![deny(trivial_numeric_casts)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(unused_extern_crates)]
#![deny(unused_import_braces)]
//
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![deny(rustdoc::invalid_html_tags)]
#![deny(rustdoc::bare_urls)]
#![deny(unreachable_pub)]
//
#![allow(elided_lifetimes_in_paths)]

#[macro_use]
pub mod utils;
pub mod bits;
pub mod code_group;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod mem;
pub mod num;
pub mod package;
pub mod parser;
pub mod pipeline;
pub mod table;

pub use bits::{Bits, BitsError};
pub use code_group::*;
pub use config::*;
pub use decoder::*;
pub use encoder::*;
pub use mem::*;
pub use num::*;
pub use package::*;
pub use parser::*;
pub use pipeline::*;
pub use table::*;
pub use utils::*;
