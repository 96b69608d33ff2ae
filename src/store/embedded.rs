//! Embedded word table
//!
//! Compiled into the binary at build time from `data/words.tsv`.

// Include generated word table from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
