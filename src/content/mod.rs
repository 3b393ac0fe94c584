//! Bot content: survey questions, the diet profile and all user-facing texts
//!
//! Everything here is static data defined at startup. The bot currently
//! speaks Russian only; multi-language support is out of scope.

/// A single survey question
///
/// Empty `options` means a free-text reply is expected; otherwise the answer
/// must come from one of the listed choices, rendered as inline buttons in
/// list order, one per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
}

impl Question {
    fn with_options(text: &str, options: &[&str]) -> Self {
        Self {
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    fn free_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            options: Vec::new(),
        }
    }

    /// Whether this question must be answered via a button choice
    pub fn expects_choice(&self) -> bool {
        !self.options.is_empty()
    }
}

/// A diet profile: prescriptive text returned on survey completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub title: String,
    pub body: String,
}

/// The fixed eight-question diet survey, in presentation order
pub fn survey_questions() -> Vec<Question> {
    vec![
        Question::with_options(
            "Как вы оцениваете своё самочувствие в последние 7 дней?",
            &["Отличное", "Хорошее", "Удовлетворительное", "Плохое"],
        ),
        Question::free_text(
            "Есть ли у вас хронические заболевания или особые диетические ограничения?",
        ),
        Question::with_options(
            "Сколько времени в день вы проводите в сидячем положении?",
            &["Менее 4 ч", "4–6 ч", "Более 6 ч"],
        ),
        Question::with_options(
            "Занимаетесь ли вы спортом? Если да, то каким и как часто?",
            &["Нет", "Да, 1–2 раза", "Да, 3–5 раз", "Профессионально"],
        ),
        Question::with_options(
            "Хватает ли вам энергии на весь день?",
            &["Да, хватает", "Иногда не хватает", "Часто чувствую усталость"],
        ),
        Question::with_options(
            "Как вы обычно оцениваете своё настроение?",
            &[
                "Стабильное и позитивное",
                "Периодически снижается",
                "Часто подавленное",
            ],
        ),
        Question::with_options(
            "Наедаетесь ли вы средней порцией (250–300 г основного блюда)?",
            &["Да", "Нет, хочется больше", "Нет, достаточно меньше"],
        ),
        Question::free_text("Есть ли продукты, которые вы категорически не едите?"),
    ]
}

/// The single profile the bot knows; selection is a constant, answers are
/// collected but do not influence it.
pub fn default_profile() -> Profile {
    Profile {
        title: "Для поддержки энергии и настроения".to_string(),
        body: "Акцент: сложные углеводы, омега‑3, витамины группы B, магний.\n\
               Рекомендации:\n\
               - Добавьте в рацион гречку, бананы, миндаль.\n\
               - Пейте зелёный чай вместо кофе.\n\
               - Ужинайте за 3 часа до сна.\n\n\
               Пример меню:\n\
               Завтрак: овсянка с черникой.\n\
               Ужин: лосось на гриле."
            .to_string(),
    }
}

/// The completion message: profile title plus body
pub fn profile_message(profile: &Profile) -> String {
    format!("Готово! Ваш профиль: «{}».\n\n{}", profile.title, profile.body)
}

// Main menu reply-keyboard labels
pub const MENU_START_SURVEY: &str = "Начать подбор рациона";
pub const MENU_TIPS: &str = "Полезные советы";
pub const MENU_ABOUT: &str = "О приложении";
pub const MENU_CONTACTS: &str = "Контакты";

/// The 2x2 main menu, row by row
pub fn main_menu_rows() -> Vec<Vec<String>> {
    vec![
        vec![MENU_START_SURVEY.to_string(), MENU_TIPS.to_string()],
        vec![MENU_ABOUT.to_string(), MENU_CONTACTS.to_string()],
    ]
}

/// Greeting shown for /start, together with the main menu
pub const GREETING: &str = "Приветствую! Я ЭкоШеф-бот. Выберите действие в меню.";

/// Reply to a message containing a greeting word
pub const GREETING_REPLY: &str = "Привет! Готов подобрать рацион?";

/// Menu prompt re-shown after the survey completes
pub const MENU_AGAIN: &str = "Что делаем дальше?";

/// Words that trigger the friendly acknowledgment (matched on lower-cased text)
pub const GREETING_WORDS: [&str; 3] = ["привет", "хай", "здравствуйте"];

/// Substring that triggers a random joke reply
pub const HOW_ARE_YOU: &str = "как дела";

/// Joke/status replies for "как дела", picked uniformly at random
pub const JOKES: [&str; 4] = [
    "Как у апельсина — новогоднее настроение!",
    "Как у сыра в масле — катаюсь!",
    "Все в шоколаде!",
    "Дела идут, контора пишет, а касса деньги выдает (на еду).",
];

/// Static tips block
pub const TIPS: &str = "Список советов по улучшению питания:\n\n\
    ✅ Откажитесь от переработанного мяса (колбасы, сосиски).\n\
    ✅ Замените газировку на воду с лимоном.\n\
    ✅ Выбирайте цельнозерновые крупы (гречка, киноа).\n\
    ✅ Ешьте рыбу 2–3 раза в неделю (источник омега‑3).\n\
    ✅ Пейте воду за 20 мин до еды.";

/// Static about string
pub const ABOUT: &str = "ЭкоШеф v1.0.";

/// Static contact string
pub const CONTACTS: &str = "Связь: @YourDevAccount";

/// Fallback for unrecognized menu input
pub const NOT_UNDERSTOOD: &str = "Я не понимаю. Используйте кнопки меню.";

/// Corrective prompt when text arrives for a button question
pub const USE_BUTTONS: &str = "Пожалуйста, нажмите на одну из кнопок выше 👆";

/// Instruction appended to free-text questions
pub const FREE_TEXT_HINT: &str = "(Напишите ответ сообщением)";
