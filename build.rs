//! Build script to generate the embedded word store
//!
//! Reads the tab-separated word table and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_table(
        "data/words.tsv",
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "German Christmas present vocabulary (word, gender, translation, plural, hint)",
    );

    // Rebuild if the word table changes
    println!("cargo:rerun-if-changed=data/words.tsv");
}

fn generate_word_table(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<Vec<&str>> = content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|line| line.split('\t').map(str::trim).collect())
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(
        output,
        "pub const {const_name}: &[(&str, &str, &str, &str, &str)] = &["
    )
    .unwrap();

    for (line_no, fields) in rows.iter().enumerate() {
        assert!(
            fields.len() == 5,
            "{input_path}: row {} has {} fields, expected 5",
            line_no + 1,
            fields.len()
        );
        writeln!(
            output,
            "    ({:?}, {:?}, {:?}, {:?}, {:?}),",
            fields[0], fields[1], fields[2], fields[3], fields[4]
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", rows.len()).unwrap();
}
