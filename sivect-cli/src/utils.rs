use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

///
/// Parse a comma separated list of indices, e.g. `1,2,2,7`.
///
/// Whitespace around entries and empty entries are ignored.
pub fn parse_index_list(list: &str) -> Result<Vec<isize>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<isize>()
                .with_context(|| format!("Invalid index: {s:?}"))
        })
        .collect()
}

///
/// Get a reader for either a gzip'd or a non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Read whitespace separated indices from a file, one or many per line.
///
pub fn read_indices(path: &Path) -> Result<Vec<isize>> {
    let reader = get_dynamic_reader(path)?;

    let mut indices = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let index = token.parse::<isize>().with_context(|| {
                format!("Invalid index {token:?} on line {} of {:?}", line_no + 1, path)
            })?;
            indices.push(index);
        }
    }

    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::NamedTempFile;

    #[rstest]
    #[case("1,2,2,7", vec![1, 2, 2, 7])]
    #[case(" 3 , 4 ", vec![3, 4])]
    #[case("", vec![])]
    #[case("5,,6,", vec![5, 6])]
    #[case("-1", vec![-1])]
    fn test_parse_index_list(#[case] list: &str, #[case] expected: Vec<isize>) {
        assert_eq!(parse_index_list(list).unwrap(), expected);
    }

    #[rstest]
    fn test_parse_index_list_rejects_garbage() {
        assert!(parse_index_list("1,two").is_err());
    }

    #[rstest]
    fn test_read_indices_plain() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1 2\n\n7").unwrap();
        assert_eq!(read_indices(file.path()).unwrap(), vec![1, 2, 7]);
    }

    #[rstest]
    fn test_read_indices_missing_file() {
        assert!(read_indices(Path::new("does/not/exist.txt")).is_err());
    }
}
