/// Display names for the country-of-residence flags that appear in the data set.
pub const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("🇦🇱", "Албания (Albania)"),
    ("🇧🇾", "Беларусь (Belarus)"),
    ("🇩🇪", "Германия (Germany)"),
    ("🇩🇰", "Дания (Danmark)"),
    ("🇬🇧", "Великобритания (Great Britain)"),
    ("🇬🇪", "Грузия (Georgia)"),
    ("🇰🇿", "Казахстан (Kazakhstan)"),
    ("🇱🇹", "Литва (Lithuania)"),
    ("🇷🇺", "Россия (Russian Federation)"),
    ("🇹🇷", "Турция (Turkey)"),
    ("🇺🇦", "Украина (Ukraine)"),
    ("🇺🇸", "США (United States of America)"),
    ("🇺🇿", "Узбекистан (Uzbekistan)"),
    ("🇮🇱", "Израиль (Israel)"),
    ("🇪🇸", "Испания (Spain)"),
];

pub fn country_name(flag: &str) -> Option<&'static str> {
    let flag = flag.trim();
    if flag.is_empty() {
        return None;
    }
    COUNTRY_NAMES
        .iter()
        .find(|(known, _)| *known == flag)
        .map(|(_, name)| *name)
}

/// `"🇩🇪 Германия (Germany)"`, or the bare flag when it is not in the table.
pub fn country_label(flag: &str) -> String {
    match country_name(flag) {
        Some(name) => format!("{} {name}", flag.trim()),
        None => flag.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{country_label, country_name};

    #[test]
    fn known_flags_have_names() {
        assert_eq!(country_name("🇩🇪"), Some("Германия (Germany)"));
        assert_eq!(country_name(" 🇺🇦 "), Some("Украина (Ukraine)"));
    }

    #[test]
    fn unknown_or_blank_flags_have_no_name() {
        assert_eq!(country_name(""), None);
        assert_eq!(country_name("🇫🇷"), None);
        assert_eq!(country_label("🇫🇷"), "🇫🇷");
        assert_eq!(country_label("🇷🇺"), "🇷🇺 Россия (Russian Federation)");
    }
}
