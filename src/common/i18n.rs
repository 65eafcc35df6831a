// src/common/i18n.rs

use std::collections::HashMap;
use std::sync::Arc;

pub const DEFAULT_LOCALE: &str = "en";

type Dictionary = HashMap<&'static str, &'static str>;

// Dicionários embutidos: rótulos da interface + mensagens de erro.
// Clonar é barato (Arc), então pode ir direto no AppState.
#[derive(Clone)]
pub struct I18nStore {
    dictionaries: Arc<HashMap<&'static str, Dictionary>>,
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}

impl I18nStore {
    pub fn new() -> Self {
        let mut dictionaries = HashMap::new();

        dictionaries.insert("en", Dictionary::from([
            ("dashboard", "Dashboard"),
            ("orders", "Orders"),
            ("customers", "Customers"),
            ("theme", "Theme"),
            ("language", "Language"),
            ("errors.validation", "One or more fields are invalid."),
            ("errors.data_load", "Failed to load data. Try refreshing the page."),
            ("errors.order_not_found", "Order not found."),
            ("errors.customer_not_found", "Customer not found."),
            ("errors.preference_not_found", "Preference not found."),
            ("errors.invalid_preference_key", "Invalid preference key."),
            ("errors.internal", "An unexpected error occurred."),
        ]));

        dictionaries.insert("ru", Dictionary::from([
            ("dashboard", "Дашборд"),
            ("orders", "Заказы"),
            ("customers", "Клиенты"),
            ("theme", "Тема"),
            ("language", "Язык"),
            ("errors.validation", "Одно или несколько полей заполнены неверно."),
            ("errors.data_load", "Ошибка загрузки данных. Попробуйте обновить страницу."),
            ("errors.order_not_found", "Данные заказа не найдены."),
            ("errors.customer_not_found", "Клиент не найден."),
            ("errors.preference_not_found", "Настройка не найдена."),
            ("errors.invalid_preference_key", "Недопустимый ключ настройки."),
            ("errors.internal", "Произошла непредвиденная ошибка."),
        ]));

        dictionaries.insert("pt", Dictionary::from([
            ("dashboard", "Painel"),
            ("orders", "Pedidos"),
            ("customers", "Clientes"),
            ("theme", "Tema"),
            ("language", "Idioma"),
            ("errors.validation", "Um ou mais campos são inválidos."),
            ("errors.data_load", "Falha ao carregar os dados. Tente atualizar a página."),
            ("errors.order_not_found", "Pedido não encontrado."),
            ("errors.customer_not_found", "Cliente não encontrado."),
            ("errors.preference_not_found", "Preferência não encontrada."),
            ("errors.invalid_preference_key", "Chave de preferência inválida."),
            ("errors.internal", "Ocorreu um erro inesperado."),
        ]));

        Self { dictionaries: Arc::new(dictionaries) }
    }

    // Idioma pedido -> inglês -> a própria chave
    pub fn translate(&self, locale: &str, key: &str) -> String {
        self.dictionaries
            .get(locale)
            .and_then(|dict| dict.get(key))
            .or_else(|| {
                self.dictionaries
                    .get(DEFAULT_LOCALE)
                    .and_then(|dict| dict.get(key))
            })
            .map(|msg| msg.to_string())
            .unwrap_or_else(|| key.to_string())
    }

    // Só os rótulos da interface (sem as mensagens de erro), para o front
    pub fn ui_dictionary(&self, locale: &str) -> Option<HashMap<String, String>> {
        self.dictionaries.get(locale).map(|dict| {
            dict.iter()
                .filter(|(key, _)| !key.starts_with("errors."))
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_keys() {
        let i18n = I18nStore::new();
        assert_eq!(i18n.translate("ru", "orders"), "Заказы");
        assert_eq!(i18n.translate("pt", "dashboard"), "Painel");
    }

    #[test]
    fn falls_back_to_english_then_to_key() {
        let i18n = I18nStore::new();
        assert_eq!(i18n.translate("de", "customers"), "Customers");
        assert_eq!(i18n.translate("ru", "nao.existe"), "nao.existe");
    }

    #[test]
    fn ui_dictionary_excludes_error_messages() {
        let i18n = I18nStore::new();
        let dict = i18n.ui_dictionary("en").unwrap();

        assert_eq!(dict.get("language").map(String::as_str), Some("Language"));
        assert!(dict.keys().all(|k| !k.starts_with("errors.")));
        assert!(i18n.ui_dictionary("de").is_none());
    }

    #[test]
    fn every_locale_has_the_same_keys() {
        let i18n = I18nStore::new();
        let mut en: Vec<_> = i18n.dictionaries["en"].keys().collect();
        en.sort();
        for locale in ["ru", "pt"] {
            let mut keys: Vec<_> = i18n.dictionaries[locale].keys().collect();
            keys.sort();
            assert_eq!(keys, en, "{locale}");
        }
    }
}
