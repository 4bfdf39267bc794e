use rand::rngs::StdRng;
use rand::Rng;
use rover::Command;

/// A batch of `len` commands drawn uniformly from the command alphabet.
pub fn random_batch(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| Command::ALL[rng.gen_range(0..Command::ALL.len())].as_char())
        .collect()
}
