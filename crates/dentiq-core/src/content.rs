//! Built-in clinic content: calculator questions, quest stages, tips and the
//! bucket tables that turn scores into result text.

use crate::catalog::{
    Catalog, Difficulty, Icon, QuestOption, QuestStage, Question, ScoredOption, Tip, TipCategory,
};
use crate::error::Result;
use crate::scoring::{BucketMetric, BucketTable, ResultBucket};

fn question(id: &str, prompt: &str, options: &[(&str, &str, u32)]) -> Question {
    Question::new(
        id,
        prompt,
        options
            .iter()
            .map(|(oid, label, points)| ScoredOption::new(*oid, *label, *points))
            .collect(),
    )
}

/// The five questions of the dental health calculator (maximum 50 points).
pub fn calculator_questions() -> Result<Catalog<Question>> {
    Ok(Catalog::new(vec![
        question(
            "brushing",
            "Как часто вы чистите зубы?",
            &[
                ("twice", "Два раза в день", 10),
                ("once", "Один раз в день", 5),
                ("sometimes", "Нерегулярно", 2),
                ("rarely", "Редко", 0),
            ],
        ),
        question(
            "flossing",
            "Используете ли вы зубную нить?",
            &[
                ("daily", "Ежедневно", 10),
                ("weekly", "Несколько раз в неделю", 7),
                ("monthly", "Иногда", 3),
                ("never", "Никогда", 0),
            ],
        ),
        question(
            "dentist",
            "Когда вы последний раз посещали стоматолога?",
            &[
                ("recent", "Менее 6 месяцев назад", 10),
                ("year", "В течение года", 7),
                ("years", "1-2 года назад", 3),
                ("long", "Более 2 лет назад", 0),
            ],
        ),
        question(
            "symptoms",
            "Есть ли у вас зубная боль или дискомфорт?",
            &[
                ("none", "Нет симптомов", 10),
                ("mild", "Легкий дискомфорт", 6),
                ("occasional", "Периодическая боль", 3),
                ("severe", "Сильная боль", 0),
            ],
        ),
        question(
            "diet",
            "Как часто вы употребляете сладкие напитки и еду?",
            &[
                ("rarely", "Редко", 10),
                ("weekly", "Несколько раз в неделю", 6),
                ("daily", "Ежедневно", 3),
                ("multiple", "Несколько раз в день", 0),
            ],
        ),
    ])?)
}

/// Health levels keyed on the raw calculator total.
pub fn calculator_buckets() -> Result<BucketTable> {
    Ok(BucketTable::new(
        BucketMetric::Total,
        vec![
            ResultBucket::new(
                40,
                "Отличное",
                Icon::Shield,
                &[
                    "Продолжайте отличную гигиену полости рта!",
                    "Регулярно посещайте стоматолога для профилактики",
                    "Поделитесь своим опытом с друзьями",
                ],
            ),
            ResultBucket::new(
                30,
                "Хорошее",
                Icon::Heart,
                &[
                    "Улучшите регулярность чистки зубов",
                    "Добавьте использование зубной нити",
                    "Запишитесь на профилактический осмотр",
                ],
            ),
            ResultBucket::new(
                20,
                "Удовлетворительное",
                Icon::AlertTriangle,
                &[
                    "Обязательно посетите стоматолога в ближайшее время",
                    "Пересмотрите диету - ограничьте сладкое",
                    "Начните использовать зубную нить ежедневно",
                ],
            ),
            ResultBucket::new(
                0,
                "Требует внимания",
                Icon::AlertTriangle,
                &[
                    "Срочно обратитесь к стоматологу!",
                    "Начните ежедневную гигиену полости рта",
                    "Исключите сладкие напитки из рациона",
                ],
            ),
        ],
    )?)
}

struct StageText<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    question: &'a str,
    tip: &'a str,
    takeaway: &'a str,
}

fn stage(text: StageText<'_>, options: &[(&str, &str, bool, &str)]) -> QuestStage {
    QuestStage {
        id: text.id.to_string(),
        title: text.title.to_string(),
        description: text.description.to_string(),
        question: text.question.to_string(),
        options: options
            .iter()
            .map(|(id, label, correct, explanation)| {
                QuestOption::new(*id, *label, *correct, *explanation)
            })
            .collect(),
        tip: text.tip.to_string(),
        takeaway: text.takeaway.to_string(),
    }
}

/// The four stages of the dental quest.
pub fn quest_stages() -> Result<Catalog<QuestStage>> {
    Ok(Catalog::new(vec![
        stage(
            StageText {
                id: "brushing-time",
                title: "Время чистки зубов",
                description: "Узнайте правильное время для чистки зубов",
                question: "Сколько времени должна длиться чистка зубов?",
                tip: "Используйте таймер на телефоне или электрическую зубную щетку с встроенным таймером!",
                takeaway: "Правильное время чистки зубов",
            },
            &[
                ("30sec", "30 секунд", false, "Слишком мало! За 30 секунд невозможно качественно очистить все зубы."),
                ("1min", "1 минута", false, "Недостаточно времени для тщательной очистки всех поверхностей зубов."),
                ("2min", "2 минуты", true, "Правильно! 2 минуты - оптимальное время для качественной чистки зубов."),
                ("5min", "5 минут", false, "Слишком долго! Избыточная чистка может повредить эмаль."),
            ],
        ),
        stage(
            StageText {
                id: "flossing-frequency",
                title: "Зубная нить",
                description: "Важность использования зубной нити",
                question: "Как часто следует использовать зубную нить?",
                tip: "Лучше всего использовать зубную нить перед сном, чтобы удалить весь накопившийся налет.",
                takeaway: "Важность зубной нити",
            },
            &[
                ("weekly", "Раз в неделю", false, "Недостаточно! Налет между зубами образуется ежедневно."),
                ("daily", "Каждый день", true, "Отлично! Ежедневное использование зубной нити предотвращает кариес между зубами."),
                ("after-meals", "После каждого приема пищи", false, "Слишком часто! Достаточно одного раза в день."),
                ("never", "Не обязательно", false, "Неправильно! Зубная щетка не может очистить межзубные промежутки."),
            ],
        ),
        stage(
            StageText {
                id: "sugar-impact",
                title: "Сахар и зубы",
                description: "Влияние сахара на здоровье зубов",
                question: "Что происходит с зубами при частом употреблении сладкого?",
                tip: "Если едите сладкое, прополощите рот водой и почистите зубы через 30-60 минут.",
                takeaway: "Влияние сахара на зубы",
            },
            &[
                ("nothing", "Ничего особенного", false, "Неверно! Сахар серьезно влияет на здоровье зубов."),
                ("acid-attack", "Бактерии вырабатывают кислоту, разрушающую эмаль", true, "Правильно! Бактерии питаются сахаром и выделяют кислоту, которая разрушает зубную эмаль."),
                ("stronger", "Зубы становятся крепче", false, "Наоборот! Сахар ослабляет зубы."),
                ("whiter", "Зубы становятся белее", false, "Неправильно! Сахар способствует образованию налета и потемнению зубов."),
            ],
        ),
        stage(
            StageText {
                id: "dentist-visits",
                title: "Визиты к стоматологу",
                description: "Регулярность профилактических осмотров",
                question: "Как часто здоровому человеку нужно посещать стоматолога?",
                tip: "Регулярные осмотры позволяют выявить проблемы на ранней стадии, когда лечение проще и дешевле.",
                takeaway: "Регулярность визитов к стоматологу",
            },
            &[
                ("yearly", "Раз в год", false, "Слишком редко! За год могут развиться серьезные проблемы."),
                ("twice-yearly", "Два раза в год", true, "Правильно! Профилактические осмотры каждые 6 месяцев помогают предотвратить проблемы."),
                ("monthly", "Каждый месяц", false, "Слишком часто для здорового человека!"),
                ("when-hurts", "Только когда болит", false, "Неправильно! Профилактика лучше лечения."),
            ],
        ),
    ])?)
}

/// Quest messages keyed on the percentage of correct answers.
pub fn quest_buckets() -> Result<BucketTable> {
    Ok(BucketTable::new(
        BucketMetric::Percent,
        vec![
            ResultBucket::new(100, "Превосходно! Вы эксперт по здоровью зубов!", Icon::Trophy, &[]),
            ResultBucket::new(75, "Отлично! У вас хорошие знания о здоровье зубов!", Icon::Smile, &[]),
            ResultBucket::new(50, "Хорошо! Есть что изучить дополнительно.", Icon::Meh, &[]),
            ResultBucket::new(0, "Стоит больше узнать о здоровье зубов!", Icon::Frown, &[]),
        ],
    )?)
}

fn tip(
    id: &str,
    title: &str,
    content: &str,
    category: TipCategory,
    icon: Icon,
    difficulty: Difficulty,
    read_minutes: u32,
) -> Tip {
    Tip {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        category,
        icon,
        difficulty,
        read_minutes,
    }
}

/// The nine tip cards of the tips browser.
pub fn tips() -> Result<Catalog<Tip>> {
    use Difficulty::{Easy, Medium};
    use TipCategory::{Children, Daily, Nutrition, Problems};

    Ok(Catalog::of_cards(vec![
        tip(
            "brushing-technique",
            "Правильная техника чистки зубов",
            "Держите зубную щетку под углом 45° к деснам. Делайте небольшие круговые движения, уделяя каждому зубу 2-3 секунды. Не забывайте чистить язык - на нем скапливается много бактерий!",
            Daily,
            Icon::Smile,
            Easy,
            2,
        ),
        tip(
            "flossing-guide",
            "Как правильно использовать зубную нить",
            "Отрежьте 45-50 см нити, намотайте на средние пальцы. Аккуратно введите нить между зубами и делайте движения вверх-вниз. Для каждого промежутка используйте чистый участок нити.",
            Daily,
            Icon::Shield,
            Medium,
            3,
        ),
        tip(
            "foods-for-teeth",
            "Продукты для здоровых зубов",
            "Молочные продукты богаты кальцием, морковь и яблоки естественно очищают зубы, зеленый чай содержит фтор. Избегайте липких сладостей и кислых напитков.",
            Nutrition,
            Icon::Apple,
            Easy,
            2,
        ),
        tip(
            "coffee-stains",
            "Как предотвратить пятна от кофе",
            "Пейте кофе через трубочку, полощите рот водой после кофе, добавляйте молоко - оно нейтрализует кислоты. Чистите зубы через 30-60 минут после кофе, не сразу!",
            Nutrition,
            Icon::Coffee,
            Easy,
            2,
        ),
        tip(
            "night-routine",
            "Вечерняя гигиена полости рта",
            "Вечером очистка должна быть более тщательной. Последовательность: зубная нить, полоскание, чистка зубов фторсодержащей пастой. Не ешьте после вечерней чистки!",
            Daily,
            Icon::Moon,
            Medium,
            3,
        ),
        tip(
            "sensitivity",
            "Что делать при чувствительности зубов",
            "Используйте пасту для чувствительных зубов, избегайте очень горячей и холодной пищи, не чистите зубы слишком жестко. При сильной чувствительности обратитесь к стоматологу.",
            Problems,
            Icon::AlertCircle,
            Medium,
            2,
        ),
        tip(
            "bad-breath",
            "Борьба с неприятным запахом изо рта",
            "Основная причина - бактерии на языке и между зубами. Чистите язык, используйте зубную нить, пейте больше воды. Жевательная резинка без сахара стимулирует слюноотделение.",
            Problems,
            Icon::XCircle,
            Easy,
            2,
        ),
        tip(
            "children-teeth",
            "Уход за детскими зубами",
            "Начинайте чистить зубы с появления первого зуба. До 2 лет - без пасты или с минимальным количеством. Делайте чистку зубов игрой, используйте детские песенки!",
            Children,
            Icon::Baby,
            Medium,
            3,
        ),
        tip(
            "whitening-natural",
            "Естественное отбеливание зубов",
            "Ешьте клубнику (содержит яблочную кислоту), полощите рот водой с содой 1-2 раза в неделю, избегайте красящих продуктов. Помните: здоровые зубы важнее белых!",
            Daily,
            Icon::CheckCircle,
            Easy,
            2,
        ),
    ])?)
}
