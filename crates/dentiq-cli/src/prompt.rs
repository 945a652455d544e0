//! Line-based choice prompts for the interactive walks.

use std::io::{self, BufRead, Write};

/// A selectable entry: (id, label).
pub type Choice<'a> = (&'a str, &'a str);

/// Print numbered choices and read until a valid one is entered.
///
/// Accepts either the 1-based number or the id. Returns `None` on EOF.
pub fn choose<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    choices: &[Choice<'_>],
) -> io::Result<Option<String>> {
    for (i, (_, label)) in choices.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, label)?;
    }

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match resolve(line.trim(), choices) {
            Some(id) => return Ok(Some(id.to_string())),
            None => writeln!(out, "Выберите вариант от 1 до {}", choices.len())?,
        }
    }
}

/// Wait for Enter. Returns `false` on EOF.
pub fn pause<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<bool> {
    write!(out, "[{label}] ")?;
    out.flush()?;
    let mut line = String::new();
    Ok(input.read_line(&mut line)? > 0)
}

fn resolve<'a>(answer: &str, choices: &[Choice<'a>]) -> Option<&'a str> {
    if let Ok(n) = answer.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| choices.get(i))
            .map(|(id, _)| *id);
    }
    choices.iter().find(|(id, _)| *id == answer).map(|(id, _)| *id)
}

/// Split `item=option` pairs given on the command line.
pub fn parse_answer(raw: &str) -> Result<(String, String), String> {
    let (item, option) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ITEM=OPTION, got '{raw}'"))?;
    if item.is_empty() || option.is_empty() {
        return Err(format!("expected ITEM=OPTION, got '{raw}'"));
    }
    Ok((item.to_string(), option.to_string()))
}
