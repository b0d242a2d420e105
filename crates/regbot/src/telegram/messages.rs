//! User-facing texts (HTML parse mode)

use indoc::{formatdoc, indoc};
use teloxide::utils::html;

use crate::core::config::limits::{MAX_FIELD_LEN, MAX_PHOTOS};
use crate::registration::{CompletionKeywords, Field, Reply};

const WELCOME: &str = indoc! {"
    🚗 <b>Добро пожаловать!</b>

    Этот бот собирает заявки на участие в <b>автомобильной выставке</b>.

    📋 Сейчас мы последовательно соберём ваши данные.
    <i>В любой момент можно отменить командой /cancel</i>"};

/// Short field name used inside validation messages
fn field_label(field: Field) -> &'static str {
    match field {
        Field::FullName => "ФИО",
        Field::Phone => "Номер телефона",
        Field::Vehicle => "Марка и год",
    }
}

fn ask(field: Field) -> &'static str {
    match field {
        Field::FullName => "👤 Введите ваши <b>ФИО</b>:",
        Field::Phone => "📞 Введите ваш <b>номер телефона</b>:",
        Field::Vehicle => "🚘 Введите <b>марку и год</b> авто/мото:",
    }
}

/// Renders a reply for the user's chat
pub fn render(reply: &Reply, keywords: &CompletionKeywords) -> String {
    let keyword = html::escape(keywords.primary());

    match reply {
        Reply::Welcome => WELCOME.to_string(),
        Reply::Ask(field) => ask(*field).to_string(),
        Reply::AskPhotos => formatdoc! {"
            📸 Отправьте <b>до {max} фото</b> вашего авто/мото.

            Когда закончите — напишите <code>{keyword}</code>.",
            max = MAX_PHOTOS,
            keyword = keyword,
        },
        Reply::EmptyField(field) => format!("❗ Поле «{}» не может быть пустым.", field_label(*field)),
        Reply::FieldTooLong(field) => format!(
            "❗ Поле «{}» слишком длинное: максимум {} символов.",
            field_label(*field),
            MAX_FIELD_LEN
        ),
        Reply::CommandNotAccepted(field) => format!(
            "❗ Команды не принимаются в качестве значения поля «{}».",
            field_label(*field)
        ),
        Reply::TextExpected(field) => format!("❗ Для поля «{}» нужен текстовый ответ.", field_label(*field)),
        Reply::PhotoAccepted { count } => format!("✅ Принято фото {} из {}.", count, MAX_PHOTOS),
        Reply::PhotoLimitReached => format!("❗ Лимит — {} фото. Напишите <code>{}</code>.", MAX_PHOTOS, keyword),
        Reply::NoPhotos => "❗ Не получено ни одного фото. Отправьте хотя бы одно.".to_string(),
        Reply::FinishHint => format!("ℹ️ Напишите <code>{}</code>, когда закончите с фото.", keyword),
        Reply::PhotosExpected => format!(
            "📸 Сейчас ожидаются фото. Когда закончите — напишите <code>{}</code>.",
            keyword
        ),
        Reply::Submitted => "✅ Заявка отправлена! Спасибо за участие.".to_string(),
        Reply::Cancelled => "❌ Заявка отменена. Вы можете начать заново командой /start.".to_string(),
        Reply::NotStarted => "Чтобы подать заявку, отправьте команду /start.".to_string(),
        Reply::NothingToCancel => "Активной заявки нет. Чтобы начать, отправьте /start.".to_string(),
    }
}
