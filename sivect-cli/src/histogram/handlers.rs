use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;
use log::debug;

use sivect_core::SparseIntVect;

use crate::utils::{parse_index_list, read_indices};

pub fn run_histogram(matches: &ArgMatches) -> Result<()> {
    let vect = histogram_from_matches(matches)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_histogram(&vect, &mut writer)?;
    writer.flush()?;

    Ok(())
}

fn histogram_from_matches(matches: &ArgMatches) -> Result<SparseIntVect> {
    let length = *matches
        .get_one::<usize>("length")
        .expect("A vector length is required.");

    let indices = match matches.get_one::<String>("sequence") {
        Some(sequence) => parse_index_list(sequence)?,
        None => {
            let file = matches
                .get_one::<String>("file")
                .expect("Either a sequence or a file is required.");
            read_indices(Path::new(file))?
        }
    };

    debug!("counting {} indices into a vector of length {length}", indices.len());

    Ok(SparseIntVect::from_sequence(length, indices)?)
}

///
/// Write one `index<TAB>count` line per populated entry.
///
pub fn write_histogram<W: Write>(vect: &SparseIntVect, writer: &mut W) -> Result<()> {
    for (index, count) in vect {
        writeln!(writer, "{index}\t{count}")?;
    }
    Ok(())
}
