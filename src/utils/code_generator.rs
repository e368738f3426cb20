//! Short code generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Generates a random short code of the given length.
///
/// Characters are drawn uniformly from the 62-symbol alphanumeric alphabet
/// (`a-z`, `A-Z`, `0-9`). Uniqueness is not checked here; callers insert the
/// candidate through an atomic check-and-insert and redraw on collision.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length).map(|_| rng.sample(Alphanumeric) as char).collect()
}
