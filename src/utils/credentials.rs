use rand::seq::{IndexedRandom, SliceRandom};
use uuid::Uuid;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const PASSWORD_LENGTH: usize = 12;
pub const CIN_PREFIX: &str = "EL";
pub const CIN_SUFFIX_LENGTH: usize = 6;

/// Generates a random password containing at least one uppercase letter, one
/// lowercase letter, one digit and one symbol, padded to `PASSWORD_LENGTH`
/// and shuffled.
pub fn generate_password() -> String {
    let mut rng = rand::rng();

    let mut chars: Vec<u8> = vec![
        *UPPERCASE.choose(&mut rng).unwrap(),
        *LOWERCASE.choose(&mut rng).unwrap(),
        *DIGITS.choose(&mut rng).unwrap(),
        *SYMBOLS.choose(&mut rng).unwrap(),
    ];

    let all: Vec<u8> = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS].concat();
    while chars.len() < PASSWORD_LENGTH {
        chars.push(*all.choose(&mut rng).unwrap());
    }

    chars.shuffle(&mut rng);
    chars.into_iter().map(char::from).collect()
}

/// Derives the login username for a freshly provisioned student.
pub fn derive_username(prenom: &str, nom: &str) -> String {
    format!(
        "{}.{}",
        prenom.trim().to_lowercase(),
        nom.trim().to_lowercase()
    )
}

/// Generates the personal-ID string for a provisioned account. Derived from a
/// random UUID instead of a truncated timestamp, which collides under
/// concurrent creations.
pub fn generate_cin() -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(CIN_SUFFIX_LENGTH)
        .collect();
    format!("{}{}", CIN_PREFIX, suffix.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_satisfies_complexity_policy() {
        for _ in 0..50 {
            let password = generate_password();
            assert_eq!(password.len(), PASSWORD_LENGTH);
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| c.is_ascii_lowercase()));
            assert!(password.chars().any(|c| c.is_ascii_digit()));
            assert!(password.chars().any(|c| SYMBOLS.contains(&(c as u8))));
        }
    }

    #[test]
    fn test_generated_password_verifies_against_hash() {
        let password = generate_password();
        let hash = bcrypt::hash(&password, 4).unwrap();
        assert!(bcrypt::verify(&password, &hash).unwrap());
    }

    #[test]
    fn test_derive_username_lowercases_and_joins() {
        assert_eq!(derive_username("Aminata", "Diallo"), "aminata.diallo");
        assert_eq!(derive_username(" Jean ", " Dupont "), "jean.dupont");
    }

    #[test]
    fn test_cin_format() {
        let cin = generate_cin();
        assert!(cin.starts_with(CIN_PREFIX));
        assert_eq!(cin.len(), CIN_PREFIX.len() + CIN_SUFFIX_LENGTH);
    }

    #[test]
    fn test_cin_does_not_repeat() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            assert!(seen.insert(generate_cin()));
        }
    }
}
