//! Localized client-facing messages
//!
//! Every message the API returns in an error or status body lives here so the
//! wording stays consistent between handlers.

pub const SERVER_ERROR: &str = "На сервере произошла ошибка.";
pub const PAGE_NOT_FOUND: &str = "Страница не найдена";
pub const AUTH_REQUIRED: &str = "Необходима авторизация";
pub const WRONG_CREDENTIALS: &str = "Неправильные почта или пароль";
pub const SIGNED_OUT: &str = "Успешно";
pub const MALFORMED_BODY: &str = "Переданы некорректные данные";

pub const USER_NOT_FOUND: &str = "Пользователь с указанным _id не найден.";
pub const USER_CREATE_INVALID: &str = "Переданы некорректные данные при создании профиля.";
pub const USER_UPDATE_INVALID: &str = "Переданы некорректные данные при обновлении профиля.";
pub const USER_EMAIL_TAKEN: &str = "Пользователь с таким email существует";

pub const MOVIE_NOT_FOUND: &str = "Передан несуществующий _id карточки.";
pub const MOVIE_FORBIDDEN: &str = "Карточку создал другой пользователь.";
pub const MOVIE_DELETE_INVALID: &str = "Переданы некорректные данные для удаления карточки.";
pub const MOVIE_CREATE_INVALID: &str = "Переданы некорректные данные при создании карточки.";

pub const INVALID_EMAIL: &str = "Некорректный email";
pub const INVALID_URL: &str = "Некорректная ссылка";
pub const INVALID_NAME: &str = "Имя должно содержать от 2 до 30 символов";
pub const EMPTY_FIELD: &str = "Поле не может быть пустым";
