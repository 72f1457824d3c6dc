//! Nickname pool used to give unnamed accounts a default display name.

use rand::{seq::SliceRandom, Rng};

const EMBEDDED_NAMES: &str = include_str!("../../assets/txt/names.txt");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicknamePool {
    names: Vec<String>,
}

impl NicknamePool {
    /// Pool built from the word list compiled into the binary.
    pub fn embedded() -> Self {
        Self::parse(EMBEDDED_NAMES)
    }

    /// One nickname per line; surrounding whitespace and blank lines are dropped.
    pub fn parse(content: &str) -> Self {
        let names = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToOwned::to_owned)
            .collect();

        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn random(&self) -> Option<&str> {
        self.random_with(&mut rand::thread_rng())
    }

    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.names.choose(rng).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn parse_drops_blank_lines_and_surrounding_whitespace() {
        let pool = NicknamePool::parse("\n  Amber Fox \r\n\n\nPaper Moon\n   \n");

        assert_eq!(pool.len(), 2);
        assert_eq!(
            pool.names,
            vec!["Amber Fox".to_owned(), "Paper Moon".to_owned()]
        );
    }

    #[test]
    fn embedded_list_is_not_empty() {
        let pool = NicknamePool::embedded();

        assert!(!pool.is_empty());
        assert!(pool.names.iter().all(|name| !name.trim().is_empty()));
    }

    #[test]
    fn draws_come_from_the_pool() {
        let pool = NicknamePool::parse("a\nb\nc\n");
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let name = pool.random_with(&mut rng).expect("pool is not empty");
            assert!(["a", "b", "c"].contains(&name));
        }
    }

    #[test]
    fn empty_pool_draws_nothing() {
        let pool = NicknamePool::parse("\n\n");

        assert_eq!(pool.random(), None);
    }
}
