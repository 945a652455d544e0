//! Integration tests for the built-in widgets.

use dentiq_core::{
    Config, DentalQuest, HealthCalculator, Icon, TipCategory, TipsBrowser, WalkState,
};

fn run_calculator(answers: &[&str]) -> HealthCalculator {
    let mut calc = HealthCalculator::builtin().unwrap();
    for option in answers {
        calc.answer(option).unwrap();
        calc.next().unwrap();
    }
    calc
}

#[test]
fn test_calculator_best_answers() {
    let calc = run_calculator(&["twice", "daily", "recent", "none", "rarely"]);
    let view = calc.result().expect("calculator should be complete");

    assert_eq!(view.score.total, 50);
    assert_eq!(view.score.max_possible, 50);
    assert_eq!(view.label, "Отличное здоровье зубов");
    assert_eq!(view.icon, Icon::Shield);
    assert_eq!(view.summary, "Ваш результат: 50 из 50 баллов");
    assert_eq!(
        view.recommendations[0],
        "Продолжайте отличную гигиену полости рта!"
    );
    assert!((view.progress - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_calculator_worst_answers() {
    let calc = run_calculator(&["rarely", "never", "long", "severe", "multiple"]);
    let view = calc.result().unwrap();

    assert_eq!(view.score.total, 0);
    assert_eq!(view.label, "Требует внимания здоровье зубов");
    assert_eq!(view.recommendations[0], "Срочно обратитесь к стоматологу!");
    assert_eq!(view.progress, 0.0);
}

#[test]
fn test_calculator_satisfactory_band() {
    // 2 + 3 + 3 + 6 + 6 = 20
    let calc = run_calculator(&["sometimes", "monthly", "years", "mild", "weekly"]);
    let view = calc.result().unwrap();
    assert_eq!(view.score.total, 20);
    assert_eq!(view.label, "Удовлетворительное здоровье зубов");
}

#[test]
fn test_calculator_restart_reproduces_initial_state() {
    let mut calc = run_calculator(&["twice", "daily", "recent", "none", "rarely"]);
    assert_eq!(calc.walk().state(), WalkState::Completed);

    calc.reset();
    let fresh = HealthCalculator::builtin().unwrap();
    assert_eq!(calc.walk().state(), fresh.walk().state());
    assert!(calc.walk().responses().is_empty());
    assert_eq!(calc.header(), fresh.header());
}

#[test]
fn test_quest_all_correct() {
    let mut quest = DentalQuest::builtin().unwrap();
    for option in ["2min", "daily", "acid-attack", "twice-yearly"] {
        quest.select(option).unwrap();
        assert!(quest.submit().unwrap().correct);
        quest.next().unwrap();
    }

    let view = quest.result().expect("quest should be complete");
    assert_eq!(view.score.total, 4);
    assert_eq!(view.score.max_possible, 4);
    assert!(view.label.starts_with("Превосходно"));
    assert_eq!(view.icon, Icon::Trophy);
    assert_eq!(view.summary, "Ваш результат: 4 из 4 правильных ответов");
    assert_eq!(
        view.recommendations,
        vec![
            "Правильное время чистки зубов",
            "Важность зубной нити",
            "Влияние сахара на зубы",
            "Регулярность визитов к стоматологу",
        ]
    );
}

#[test]
fn test_quest_three_of_four() {
    let mut quest = DentalQuest::builtin().unwrap();
    for option in ["2min", "daily", "acid-attack", "when-hurts"] {
        quest.select(option).unwrap();
        quest.submit().unwrap();
        quest.next().unwrap();
    }
    let view = quest.result().unwrap();
    assert_eq!(view.score.total, 3);
    assert!(view.label.starts_with("Отлично!"));
}

#[test]
fn test_quest_none_correct() {
    let mut quest = DentalQuest::builtin().unwrap();
    for option in ["30sec", "never", "whiter", "monthly"] {
        quest.select(option).unwrap();
        quest.submit().unwrap();
        quest.next().unwrap();
    }
    assert_eq!(quest.correct_count(), 0);
    assert_eq!(
        quest.result().unwrap().label,
        "Стоит больше узнать о здоровье зубов!"
    );
}

#[test]
fn test_tips_daily_category() {
    let mut browser = TipsBrowser::builtin().unwrap();
    browser.select_category(TipCategory::Nutrition);
    browser.select_category(TipCategory::Problems);
    browser.select_category(TipCategory::Daily);

    let ids: Vec<String> = browser.visible_tips().into_iter().map(|c| c.id).collect();
    assert_eq!(
        ids,
        vec![
            "brushing-technique",
            "flossing-guide",
            "night-routine",
            "whitening-natural"
        ]
    );
}

#[test]
fn test_tips_category_sizes() {
    let browser = TipsBrowser::builtin().unwrap();
    assert_eq!(browser.tips_in(TipCategory::Daily).len(), 4);
    assert_eq!(browser.tips_in(TipCategory::Nutrition).len(), 2);
    assert_eq!(browser.tips_in(TipCategory::Problems).len(), 2);
    assert_eq!(browser.tips_in(TipCategory::Children).len(), 1);
}

#[test]
fn test_tips_mark_read_is_idempotent() {
    let mut browser = TipsBrowser::builtin().unwrap();
    assert!(browser.mark_read("bad-breath").unwrap());
    let once = browser.read_set().clone();

    assert!(!browser.mark_read("bad-breath").unwrap());
    assert_eq!(browser.read_set(), &once);
    assert_eq!(browser.read_count(), 1);
    assert_eq!(browser.total_count(), 9);
}

#[test]
fn test_widgets_follow_config() {
    let mut config = Config::default();
    config.set("clinic.call_to_action", "Позвоните нам").unwrap();
    config.set("tips.default_category", "children").unwrap();

    let mut calc = HealthCalculator::builtin().unwrap().with_config(&config);
    for option in ["twice", "daily", "recent", "none", "rarely"] {
        calc.answer(option).unwrap();
        calc.next().unwrap();
    }
    assert_eq!(calc.result().unwrap().call_to_action, "Позвоните нам");

    let browser = TipsBrowser::builtin().unwrap().with_config(&config);
    assert_eq!(browser.visible_tips().len(), 1);
}
