//! Formatting utilities shared by the terminal front ends

use crate::core::{GameState, MAX_WRONG_GUESSES, Status};

/// Masked word with a space between characters, e.g. `_ t e r n`
#[must_use]
pub fn spaced_mask(state: &GameState) -> String {
    let masked = state.masked();
    let mut result = String::with_capacity(masked.len() * 2);
    for (i, c) in masked.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c);
    }
    result
}

/// The line under the puzzle: progress while playing, verdict once finished
#[must_use]
pub fn status_message(state: &GameState) -> String {
    match state.status() {
        Status::Lost => format!("Das Spiel ist aus! Das Wort war {}.", state.target().word()),
        Status::Won => "Gratulation! Sie haben das Wort erraten.".to_string(),
        Status::Playing => format!(
            "Falsche Vermutungen: {} / {MAX_WRONG_GUESSES}",
            state.wrong_count()
        ),
    }
}

/// Hint line, while the hint is visible and not blank
#[must_use]
pub fn hint_message(state: &GameState) -> Option<String> {
    state
        .visible_hint()
        .filter(|hint| !hint.trim().is_empty())
        .map(|hint| format!("Tipp: {hint}"))
}

/// Gallows figure drawn as text, one body part per wrong guess
///
/// Parts appear in the order rope, head, body, right arm, left arm,
/// right leg, left leg.
#[must_use]
pub fn gallows(wrong_count: u8) -> [String; 7] {
    let part = |n: u8, c: char| if wrong_count >= n { c } else { ' ' };

    [
        " ┌─────┐".to_string(),
        format!(" │     {}", part(1, '│')),
        format!(" │     {}", part(2, 'O')),
        format!(" │    {}{}{}", part(5, '/'), part(3, '|'), part(4, '\\')),
        format!(" │    {} {}", part(7, '/'), part(6, '\\')),
        " │".to_string(),
        "─┴──────".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, WordEntry};

    fn state(word: &str, guesses: &str) -> GameState {
        let entry = WordEntry::new(word, "der", "star", "Sterne", "Er leuchtet oben.").unwrap();
        let mut state = GameState::new(entry);
        for c in guesses.chars() {
            state.apply_guess(Letter::from_char(c).unwrap());
        }
        state
    }

    #[test]
    fn spaced_mask_separates_characters() {
        assert_eq!(spaced_mask(&state("Stern", "txyern")), "_ t e r n");
        assert_eq!(spaced_mask(&state("Uhr", "")), "_ _ _");
    }

    #[test]
    fn status_message_while_playing() {
        assert_eq!(
            status_message(&state("Stern", "txy")),
            "Falsche Vermutungen: 2 / 7"
        );
    }

    #[test]
    fn status_message_reveals_word_on_loss() {
        let lost = state("Stern", "abcdfgh");
        assert!(lost.is_lost());
        assert_eq!(status_message(&lost), "Das Spiel ist aus! Das Wort war Stern.");
    }

    #[test]
    fn status_message_on_win() {
        assert_eq!(
            status_message(&state("Stern", "stern")),
            "Gratulation! Sie haben das Wort erraten."
        );
    }

    #[test]
    fn hint_message_after_five_misses() {
        assert_eq!(hint_message(&state("Stern", "abcd")), None);
        assert_eq!(
            hint_message(&state("Stern", "abcdf")).as_deref(),
            Some("Tipp: Er leuchtet oben.")
        );
    }

    #[test]
    fn hint_message_skips_blank_hint() {
        let entry = WordEntry::new("Uhr", "die", "watch", "Uhren", "  ").unwrap();
        let mut state = GameState::new(entry);
        for c in "abcdf".chars() {
            state.apply_guess(Letter::from_char(c).unwrap());
        }
        assert!(state.hint_visible());
        assert_eq!(hint_message(&state), None);
    }

    #[test]
    fn gallows_grows_with_wrong_count() {
        let empty = gallows(0).concat();
        assert!(!empty.contains('O'));

        let head = gallows(2).concat();
        assert!(head.contains('O'));
        assert!(!head.contains('|'));

        let full = gallows(7);
        assert_eq!(full[3].trim_start_matches([' ', '│']), "/|\\");
        assert_eq!(full[4].trim_start_matches([' ', '│']), "/ \\");
    }

    #[test]
    fn gallows_parts_are_monotonic() {
        for n in 0..7 {
            let drawn = |lines: [String; 7]| {
                lines
                    .iter()
                    .flat_map(|l| l.chars())
                    .filter(|c| !c.is_whitespace())
                    .count()
            };
            let (fewer, more) = (drawn(gallows(n)), drawn(gallows(n + 1)));
            assert!(more > fewer, "part {} did not add anything", n + 1);
        }
    }
}
