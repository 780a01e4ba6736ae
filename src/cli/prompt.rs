//! Interactive prompts
//!
//! Generic over the reader and writer so the prompts can be driven from
//! tests with in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::error::DrawError;

/// The seed a draw will use, and whether it was typed or defaulted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedChoice {
    /// The user entered an integer, reduced to its low 64 bits
    Entered(i64),
    /// The input was not an integer, so the default was used
    Defaulted {
        /// What the user typed
        input: String,
        /// The configured default seed
        seed: i64,
    },
}

impl SeedChoice {
    /// The seed to draw with
    #[must_use]
    pub const fn seed(&self) -> i64 {
        match self {
            Self::Entered(seed) | Self::Defaulted { seed, .. } => *seed,
        }
    }
}

/// Parse a seed, falling back to `default` for non-integer input.
///
/// Integers of any length are accepted. Values outside `i64` wrap modulo
/// 2^64, so values inside the range keep their bit pattern.
#[must_use]
pub fn parse_seed(input: &str, default: i64) -> SeedChoice {
    let trimmed = input.trim();
    wrap_integer(trimmed).map_or_else(
        || SeedChoice::Defaulted {
            input: trimmed.to_string(),
            seed: default,
        },
        SeedChoice::Entered,
    )
}

/// Decimal integer of arbitrary length, modulo 2^64
fn wrap_integer(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude = digits.bytes().fold(0_i64, |acc, b| {
        acc.wrapping_mul(10).wrapping_add(i64::from(b - b'0'))
    });
    Some(if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    })
}

/// Parse a 1-based administrator choice into an index into `admins`
pub fn parse_admin_choice(input: &str, admins: &[String]) -> Result<usize, DrawError> {
    let trimmed = input.trim();
    let invalid = || DrawError::InvalidAdminSelection {
        input: trimmed.to_string(),
        count: admins.len(),
    };

    let choice: usize = trimmed.parse().map_err(|_| invalid())?;
    if choice == 0 || choice > admins.len() {
        return Err(invalid());
    }
    Ok(choice - 1)
}

/// Print `prompt` and read one line of input
fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{prompt}").context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line)
}

/// Ask for the seed
pub fn ask_seed<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default: i64,
) -> Result<SeedChoice> {
    let line = read_line(input, output, "Enter seed number: ")?;
    Ok(parse_seed(&line, default))
}

/// List the administrators and ask which one is running the program
pub fn ask_admin<'a, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    admins: &'a [String],
) -> Result<&'a str> {
    writeln!(output, "\nWho are you?").context("Failed to write prompt")?;
    for (i, admin) in admins.iter().enumerate() {
        writeln!(output, "{}. {admin}", i + 1).context("Failed to write prompt")?;
    }

    let line = read_line(input, output, "\nEnter your number: ")?;
    let index = parse_admin_choice(&line, admins)?;
    Ok(admins[index].as_str())
}
