use crate::core::{Assignment, Result};
use crate::utils::error::RaffleError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Pairs every identifier, in input order, with a distinct number from `1..=N`.
///
/// The numbers are a uniform shuffle of the full range, so each identifier is
/// equally likely to receive any number. Duplicate identifiers are not merged;
/// each occurrence gets its own number.
pub fn assign_numbers<R: Rng + ?Sized>(identifiers: &[String], rng: &mut R) -> Result<Vec<Assignment>> {
    if identifiers.is_empty() {
        return Err(RaffleError::EmptyInput {
            origin: "the participant list".to_string(),
        });
    }

    let count = u32::try_from(identifiers.len()).map_err(|_| RaffleError::ConfigError {
        message: format!("Too many identifiers: {}", identifiers.len()),
    })?;

    let mut numbers: Vec<u32> = (1..=count).collect();
    numbers.shuffle(rng);

    Ok(identifiers
        .iter()
        .cloned()
        .zip(numbers)
        .map(|(identifier, number)| Assignment { identifier, number })
        .collect())
}

/// Same as [`assign_numbers`] with the OS-seeded thread RNG.
pub fn assign_numbers_randomly(identifiers: &[String]) -> Result<Vec<Assignment>> {
    let mut rng = rand::rng();
    assign_numbers(identifiers, &mut rng)
}
