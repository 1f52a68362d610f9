//! Source generators for benchmarks and large-scale tests.
use std::fmt::Write;

/// A file of `count` functions whose doc comments are already clean.
#[allow(dead_code)]
pub fn generate_documented(count: usize) -> String {
    let mut source = String::from("<?php\n");
    for i in 0..count {
        writeln!(
            source,
            "/**\n * Computes value {i}.\n *\n * @param int    $count How many.\n * @param string $label Shown to users.\n *\n * @return int\n */\nfunction compute_{i}(int $count, string $label)\n{{\n    return $count + {i};\n}}\n"
        )
        .unwrap();
    }
    source
}

/// The same functions with fixable layout problems: content on the opening
/// line, long type names, and misaligned parameter columns.
#[allow(dead_code)]
pub fn generate_messy(count: usize) -> String {
    let mut source = String::from("<?php\n");
    for i in 0..count {
        writeln!(
            source,
            "/** Computes value {i}.\n * @param integer $count  How many.\n * @param string   $label Shown to users.\n *\n * @return integer\n */\nfunction compute_{i}(int $count, string $label)\n{{\n    return $count + {i};\n}}\n"
        )
        .unwrap();
    }
    source
}
