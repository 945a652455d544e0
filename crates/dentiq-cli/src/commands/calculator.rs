//! Dental health calculator command.

use clap::Subcommand;
use std::io::{self, BufRead, Write};

use dentiq_core::{Config, HealthCalculator, ResultView, WalkError};

use crate::prompt::{self, parse_answer};

#[derive(Subcommand)]
pub enum CalculatorAction {
    /// Answer the questions interactively
    Run,
    /// Score answers given on the command line
    Score {
        /// Answer as QUESTION=OPTION (e.g. brushing=twice); repeat for each question
        #[arg(long = "answer", value_parser = parse_answer)]
        answers: Vec<(String, String)>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CalculatorAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut calc = HealthCalculator::builtin()?.with_config(config);

    match action {
        CalculatorAction::Run => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout().lock();
            if let Some(view) = run_interactive(&mut calc, &mut input, &mut out)? {
                write!(out, "\n{}", view.to_text())?;
            }
        }
        CalculatorAction::Score { answers, json } => {
            let view = score_answers(&mut calc, answers)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", view.to_text());
            }
        }
    }
    Ok(())
}

/// Walk the questions over `input`. Returns `None` if input ends early.
pub fn run_interactive<R: BufRead, W: Write>(
    calc: &mut HealthCalculator,
    input: &mut R,
    out: &mut W,
) -> Result<Option<ResultView>, Box<dyn std::error::Error>> {
    writeln!(out, "{}", HealthCalculator::TITLE)?;

    while let Some(question) = calc.current_question() {
        writeln!(out, "\n{}\n{}", calc.header(), question.prompt)?;
        let choices: Vec<(&str, &str)> = question
            .options
            .iter()
            .map(|o| (o.id.as_str(), o.label.as_str()))
            .collect();

        let Some(option) = prompt::choose(input, out, &choices)? else {
            return Ok(None);
        };
        calc.answer(&option)?;

        if let Some(view) = calc.next()? {
            return Ok(Some(view.clone()));
        }
    }

    Ok(calc.result().cloned())
}

/// Walk the questions in order using pre-supplied answers.
pub fn score_answers(
    calc: &mut HealthCalculator,
    answers: Vec<(String, String)>,
) -> Result<ResultView, Box<dyn std::error::Error>> {
    let answers = super::answers_by_item(calc.walk().catalog(), answers)?;

    while let Some(question) = calc.current_question() {
        let id = question.id.clone();
        let option = answers.get(&id).ok_or(WalkError::MustAnswer(id))?;
        calc.answer(option)?;
        calc.next()?;
    }

    Ok(calc.result().cloned().ok_or(WalkError::Completed)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(a, b)| (a.to_string(), b.to_string())).collect()
    }

    #[test]
    fn interactive_walk_reaches_result() {
        let mut calc = HealthCalculator::builtin().unwrap();
        let mut input = "1\ndaily\n1\n1\n4\n".as_bytes();
        let mut out = Vec::new();

        let view = run_interactive(&mut calc, &mut input, &mut out).unwrap().unwrap();
        assert_eq!(view.score.total, 40);
        assert_eq!(view.label, "Отличное здоровье зубов");

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Вопрос 1 из 5"));
        assert!(text.contains("Вопрос 5 из 5"));
    }

    #[test]
    fn interactive_walk_stops_on_eof() {
        let mut calc = HealthCalculator::builtin().unwrap();
        let mut input = "1\n".as_bytes();
        let mut out = Vec::new();
        assert!(run_interactive(&mut calc, &mut input, &mut out).unwrap().is_none());
        assert_eq!(calc.header(), "Вопрос 2 из 5");
    }

    #[test]
    fn score_needs_every_question() {
        let mut calc = HealthCalculator::builtin().unwrap();
        let err = score_answers(&mut calc, pairs(&[("brushing", "twice")])).unwrap_err();
        assert!(err.to_string().contains("flossing"));
    }

    #[test]
    fn score_rejects_unknown_question() {
        let mut calc = HealthCalculator::builtin().unwrap();
        let err = score_answers(&mut calc, pairs(&[("teeth", "many")])).unwrap_err();
        assert!(err.to_string().contains("Unknown item: teeth"));
    }

    #[test]
    fn score_accepts_any_order() {
        let mut calc = HealthCalculator::builtin().unwrap();
        let view = score_answers(
            &mut calc,
            pairs(&[
                ("diet", "rarely"),
                ("symptoms", "none"),
                ("dentist", "recent"),
                ("flossing", "daily"),
                ("brushing", "twice"),
            ]),
        )
        .unwrap();
        assert_eq!(view.score.total, 50);
    }
}
