use async_trait::async_trait;

use crate::shared::errors::WhispererError;

/// Yes/no question put to the user.
#[async_trait]
pub trait Confirm: Send + Sync {
    /// Returns true only for an affirmative answer.
    async fn confirm(&self, prompt: &str) -> Result<bool, WhispererError>;
}

/// Affirmative answers are `y` in any case, surrounding whitespace ignored.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::is_affirmative;

    #[test]
    fn only_y_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y\n"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("n"));
    }
}
