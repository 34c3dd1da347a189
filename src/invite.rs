use crate::errors::RegistryError;
use rand::Rng;

pub const INVITE_CODE_LEN: usize = 6;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const MAX_ATTEMPTS: usize = 32;

pub fn generate_invite_code<R: Rng>(rng: &mut R) -> String {
    (0..INVITE_CODE_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Draws codes until one is not taken, giving up after `MAX_ATTEMPTS`
/// collisions.
pub fn generate_unique_invite_code<R, F>(rng: &mut R, is_taken: F) -> Result<String, RegistryError>
where
    R: Rng,
    F: Fn(&str) -> bool,
{
    for _ in 0..MAX_ATTEMPTS {
        let code = generate_invite_code(rng);
        if !is_taken(&code) {
            return Ok(code);
        }
    }

    Err(RegistryError::InviteCodeExhausted)
}

pub fn normalize_invite_code(input: &str) -> String {
    input.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn invite_code_uses_base36_uppercase() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let code = generate_invite_code(&mut rng);
            assert_eq!(code.len(), INVITE_CODE_LEN);
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn unique_code_skips_taken_codes() {
        let mut probe = StdRng::seed_from_u64(42);
        let first = generate_invite_code(&mut probe);

        let mut rng = StdRng::seed_from_u64(42);
        let code = generate_unique_invite_code(&mut rng, |candidate| candidate == first).unwrap();
        assert_ne!(code, first);
    }

    #[test]
    fn unique_code_gives_up_when_everything_is_taken() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate_unique_invite_code(&mut rng, |_| true);
        assert!(matches!(result, Err(RegistryError::InviteCodeExhausted)));
    }

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(normalize_invite_code("  manha123 "), "MANHA123");
    }
}
