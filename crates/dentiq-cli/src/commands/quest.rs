//! Dental quest command.

use clap::Subcommand;
use std::io::{self, BufRead, Write};

use dentiq_core::widgets::StageMarker;
use dentiq_core::{Config, DentalQuest, ResultView, WalkError};

use crate::prompt::{self, parse_answer};

#[derive(Subcommand)]
pub enum QuestAction {
    /// Play the quest interactively
    Run,
    /// Score answers given on the command line
    Score {
        /// Answer as STAGE=OPTION (e.g. brushing-time=2min); repeat for each stage
        #[arg(long = "answer", value_parser = parse_answer)]
        answers: Vec<(String, String)>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: QuestAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut quest = DentalQuest::builtin()?.with_config(config);

    match action {
        QuestAction::Run => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout().lock();
            if let Some(view) = run_interactive(&mut quest, &mut input, &mut out)? {
                write!(out, "\n{}", view.to_text())?;
            }
        }
        QuestAction::Score { answers, json } => {
            let view = score_answers(&mut quest, answers)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", view.to_text());
            }
        }
    }
    Ok(())
}

fn marker_line(markers: &[StageMarker]) -> String {
    markers
        .iter()
        .map(|m| match m {
            StageMarker::Done => '●',
            StageMarker::Current => '◉',
            StageMarker::Pending => '○',
        })
        .collect()
}

/// Play the quest over `input`. Returns `None` if input ends early.
pub fn run_interactive<R: BufRead, W: Write>(
    quest: &mut DentalQuest,
    input: &mut R,
    out: &mut W,
) -> Result<Option<ResultView>, Box<dyn std::error::Error>> {
    while let Some(stage) = quest.current_stage() {
        writeln!(
            out,
            "\n{}  {}\n{}\n{}\n\n{}",
            quest.header(),
            marker_line(&quest.markers()),
            stage.title,
            stage.description,
            stage.question
        )?;
        let choices: Vec<(&str, &str)> = stage
            .options
            .iter()
            .map(|o| (o.id.as_str(), o.text.as_str()))
            .collect();

        let Some(option) = prompt::choose(input, out, &choices)? else {
            return Ok(None);
        };
        quest.select(&option)?;

        let feedback = quest.submit()?;
        writeln!(out, "\n{}", feedback.verdict)?;
        if !feedback.explanation.is_empty() {
            writeln!(out, "{}", feedback.explanation)?;
        }
        if !feedback.tip.is_empty() {
            writeln!(out, "Совет: {}", feedback.tip)?;
        }

        if !prompt::pause(input, out, quest.next_label())? {
            return Ok(None);
        }
        if let Some(view) = quest.next()? {
            return Ok(Some(view.clone()));
        }
    }

    Ok(quest.result().cloned())
}

/// Play every stage in order using pre-supplied answers.
pub fn score_answers(
    quest: &mut DentalQuest,
    answers: Vec<(String, String)>,
) -> Result<ResultView, Box<dyn std::error::Error>> {
    let answers = super::answers_by_item(quest.walk().catalog(), answers)?;

    while let Some(stage) = quest.current_stage() {
        let id = stage.id.clone();
        let option = answers.get(&id).ok_or(WalkError::MustAnswer(id))?;
        quest.select(option)?;
        quest.submit()?;
        quest.next()?;
    }

    Ok(quest.result().cloned().ok_or(WalkError::Completed)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interactive_quest_shows_feedback() {
        let mut quest = DentalQuest::builtin().unwrap();
        let mut input = "3\n\ndaily\n\n2\n\n2\n\n".as_bytes();
        let mut out = Vec::new();

        let view = run_interactive(&mut quest, &mut input, &mut out).unwrap().unwrap();
        assert_eq!(view.score.total, 4);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Этап 1 из 4  ◉○○○"));
        assert!(text.contains("Этап 4 из 4  ●●●◉"));
        assert!(text.contains("Правильно!"));
        assert!(text.contains("Совет: "));
        assert!(text.contains("[Завершить квест]"));
    }

    #[test]
    fn score_counts_correct_answers() {
        let mut quest = DentalQuest::builtin().unwrap();
        let answers = [
            ("brushing-time", "1min"),
            ("flossing-frequency", "daily"),
            ("sugar-impact", "acid-attack"),
            ("dentist-visits", "twice-yearly"),
        ]
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();

        let view = score_answers(&mut quest, answers).unwrap();
        assert_eq!(view.score.total, 3);
        assert!(view.label.starts_with("Отлично!"));
    }
}
