use anyhow::{Context, Result};
use clap::ArgMatches;
use log::debug;

use sivect_core::SparseIntVect;
use sivect_similarity::dice_similarity;

use crate::utils::parse_index_list;

pub fn run_dice(matches: &ArgMatches) -> Result<()> {
    let score = dice_from_matches(matches)?;
    println!("{score}");
    Ok(())
}

fn dice_from_matches(matches: &ArgMatches) -> Result<f64> {
    let length = *matches
        .get_one::<usize>("length")
        .expect("A vector length is required.");

    let a = matches
        .get_one::<String>("a")
        .expect("Indices for the first vector are required.");

    let b = matches
        .get_one::<String>("b")
        .expect("Indices for the second vector are required.");

    let bound = matches.get_one::<f64>("bound").copied();

    let v1: SparseIntVect = SparseIntVect::from_sequence(length, parse_index_list(a)?)
        .context("Failed to build the first vector")?;
    let v2: SparseIntVect = SparseIntVect::from_sequence(length, parse_index_list(b)?)
        .context("Failed to build the second vector")?;

    debug!("comparing {v1} with {v2}");

    Ok(dice_similarity(&v1, &v2, bound)?)
}
