/*! Sampling

Filters the raw dump down to the factions and period of interest,
then keeps a seeded random fraction of what remains.

Sampled speeches keep their original relative order.
!*/
use log::info;
use rand::{rngs::StdRng, seq::index, SeedableRng};

use crate::config::SamplingParams;
use crate::error::Error;
use crate::filtering::{self, RecordFilter};
use crate::speech::Dataset;

/// Keep `floor(len * fraction)` speeches picked at random, in dataset order.
///
/// `fraction` has to be within `[0, 1]`.
pub fn sample_fraction(dataset: Dataset, fraction: f64, seed: u64) -> Result<Dataset, Error> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(Error::InvalidArgument(format!(
            "sample fraction must be within [0, 1], got {fraction}"
        )));
    }

    let len = dataset.len();
    let amount = (len as f64 * fraction).floor() as usize;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut picked = index::sample(&mut rng, len, amount).into_vec();
    picked.sort_unstable();

    // walk the dataset once, keeping picked positions
    let mut picked = picked.into_iter().peekable();
    let sampled = dataset
        .into_iter()
        .enumerate()
        .filter_map(|(idx, speech)| {
            if picked.peek() == Some(&idx) {
                picked.next();
                Some(speech)
            } else {
                None
            }
        })
        .collect();

    Ok(sampled)
}

/// Filter then sample, following `params`.
pub fn sample(dataset: Dataset, params: &SamplingParams) -> Result<Dataset, Error> {
    let total = dataset.len();
    let filter = RecordFilter::from_params(params);
    let filtered = filtering::apply(&filter, dataset);
    info!(
        "Filtered speeches (factions {:?}, from {}): {}/{}",
        params.faction_ids,
        params.min_date,
        filtered.len(),
        total
    );

    let sampled = sample_fraction(filtered, params.fraction, params.seed)?;
    info!(
        "After {}% sampling: {}",
        params.fraction * 100.0,
        sampled.len()
    );
    Ok(sampled)
}
