//! Dump output
//!
//! One value per line: integers in base 10, doubles via [`format_double`].

use crate::app::split_tree::{Value, walk_split_tree};
use crate::domain::mix::{Jdk8, MixKind, Mixer, Murmur3};
use crate::domain::splittable::SplittableRng;
use crate::infra::format::format_double;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write one value as a line
pub fn write_value<W: Write>(writer: &mut W, value: Value) -> io::Result<()> {
    match value {
        Value::Long(v) => writeln!(writer, "{}", v),
        Value::Int(v) => writeln!(writer, "{}", v),
        Value::Double(v) => writeln!(writer, "{}", format_double(v)),
    }
}

/// Write the split-tree dump for `seed` to `writer`
///
/// Output is buffered and flushed before returning.
pub fn write_split_tree<M: Mixer, W: Write>(writer: W, seed: i64, count: usize) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    let root = SplittableRng::<M>::from_signed_seed(seed);
    walk_split_tree(root, count, |_, value| write_value(&mut writer, value))?;
    writer.flush()
}

/// [`write_split_tree`] with the mixer chosen at runtime
pub fn write_split_tree_with<W: Write>(
    kind: MixKind,
    writer: W,
    seed: i64,
    count: usize,
) -> io::Result<()> {
    match kind {
        MixKind::Jdk8 => write_split_tree::<Jdk8, W>(writer, seed, count),
        MixKind::Murmur3 => write_split_tree::<Murmur3, W>(writer, seed, count),
    }
}

/// Save the split-tree dump to a file
pub fn save_split_tree(
    path: impl AsRef<Path>,
    kind: MixKind,
    seed: i64,
    count: usize,
) -> io::Result<()> {
    let file = File::create(path)?;
    write_split_tree_with(kind, file, seed, count)
}

/// Render the split-tree dump into a string
pub fn render_split_tree(kind: MixKind, seed: i64, count: usize) -> io::Result<String> {
    let mut buf = Vec::new();
    write_split_tree_with(kind, &mut buf, seed, count)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
