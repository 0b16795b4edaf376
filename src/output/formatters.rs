//! Formatting utilities for terminal output

use crate::core::{Code, Color, Score};
use colored::{ColoredString, Colorize};

/// Color letter painted in (roughly) its own terminal color
#[must_use]
pub fn paint(color: Color) -> ColoredString {
    let letter = color.letter().to_string();
    match color {
        Color::Beige => letter.truecolor(0xf5, 0xf5, 0xdc),
        Color::DarkBlue => letter.blue(),
        Color::Green => letter.green(),
        Color::Orange => letter.truecolor(0xff, 0xa5, 0x00),
        Color::Red => letter.red(),
        Color::Black => letter.bright_black(),
        Color::Violet => letter.magenta(),
        Color::White => letter.white(),
    }
    .bold()
}

/// A code as its five painted letters
#[must_use]
pub fn colored_code(code: Code) -> String {
    code.colors().into_iter().map(|c| paint(c).to_string()).collect()
}

/// Bytes as a bit string, most significant bit of each byte first
///
/// Bytes appear in wire order.
#[must_use]
pub fn wire_bits(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:08b}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Key pegs for a score: `●` per red, `○` per white, `·` for the rest
#[must_use]
pub fn pegs(score: Score) -> String {
    let red = usize::from(score.red.min(5));
    let white = usize::from(score.white).min(5 - red);
    format!("{}{}{}", "●".repeat(red), "○".repeat(white), "·".repeat(5 - red - white))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_bits_in_wire_order() {
        assert_eq!(wire_bits(&[0x01, 0x80]), "00000001 10000000");
        assert_eq!(wire_bits(&[]), "");
    }

    #[test]
    fn pegs_fill_five_slots() {
        assert_eq!(pegs(Score::new(2, 1)), "●●○··");
        assert_eq!(pegs(Score::PERFECT), "●●●●●");
        assert_eq!(pegs(Score::default()), "·····");
    }

    #[test]
    fn pegs_clamp_garbage() {
        assert_eq!(pegs(Score { red: 7, white: 7 }).chars().count(), 5);
    }

    #[test]
    fn colored_code_keeps_letters() {
        colored::control::set_override(false);
        let code: Code = "bdgrw".parse().unwrap();
        assert_eq!(colored_code(code), "bdgrw");
    }
}
