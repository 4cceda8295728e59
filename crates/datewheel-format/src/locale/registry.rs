/// Calendar names and markers used when rendering date patterns for a locale.
///
/// This is intentionally lightweight: it only carries what the picker wheels display (month and
/// weekday names plus the AM/PM markers). Digits are always rendered as ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLocale {
    pub id: &'static str,
    pub month_names: [&'static str; 12],
    pub month_abbrevs: [&'static str; 12],
    /// Weekday names, Monday first.
    pub weekday_names: [&'static str; 7],
    /// Abbreviated weekday names, Monday first.
    pub weekday_abbrevs: [&'static str; 7],
    pub am: &'static str,
    pub pm: &'static str,
}

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const EN_MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const EN_WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const EN_WEEKDAY_ABBREVS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// CJK locales share numeric month names (`1月` .. `12月`).
const CJK_MONTHS: [&str; 12] = [
    "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
];

pub static EN_US: DateLocale = DateLocale {
    id: "en-US",
    month_names: EN_MONTHS,
    month_abbrevs: EN_MONTH_ABBREVS,
    weekday_names: EN_WEEKDAYS,
    weekday_abbrevs: EN_WEEKDAY_ABBREVS,
    am: "AM",
    pm: "PM",
};

/// British English shares names with `en-US` but uses lowercase day-period markers.
pub static EN_GB: DateLocale = DateLocale {
    id: "en-GB",
    month_names: EN_MONTHS,
    month_abbrevs: EN_MONTH_ABBREVS,
    weekday_names: EN_WEEKDAYS,
    weekday_abbrevs: EN_WEEKDAY_ABBREVS,
    am: "am",
    pm: "pm",
};

pub static DE_DE: DateLocale = DateLocale {
    id: "de-DE",
    month_names: [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    month_abbrevs: [
        "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
    ],
    weekday_names: [
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
        "Sonntag",
    ],
    weekday_abbrevs: ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"],
    am: "AM",
    pm: "PM",
};

pub static FR_FR: DateLocale = DateLocale {
    id: "fr-FR",
    month_names: [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ],
    month_abbrevs: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
    weekday_names: [
        "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
    ],
    weekday_abbrevs: ["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."],
    am: "AM",
    pm: "PM",
};

pub static ES_ES: DateLocale = DateLocale {
    id: "es-ES",
    month_names: [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
    month_abbrevs: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ],
    weekday_names: [
        "lunes",
        "martes",
        "miércoles",
        "jueves",
        "viernes",
        "sábado",
        "domingo",
    ],
    weekday_abbrevs: ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"],
    am: "a. m.",
    pm: "p. m.",
};

pub static IT_IT: DateLocale = DateLocale {
    id: "it-IT",
    month_names: [
        "gennaio",
        "febbraio",
        "marzo",
        "aprile",
        "maggio",
        "giugno",
        "luglio",
        "agosto",
        "settembre",
        "ottobre",
        "novembre",
        "dicembre",
    ],
    month_abbrevs: [
        "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
    ],
    weekday_names: [
        "lunedì",
        "martedì",
        "mercoledì",
        "giovedì",
        "venerdì",
        "sabato",
        "domenica",
    ],
    weekday_abbrevs: ["lun", "mar", "mer", "gio", "ven", "sab", "dom"],
    am: "AM",
    pm: "PM",
};

/// Traditional Chinese (Taiwan). This is the locale that typically pairs with the Minguo
/// (`1911`-offset) year display.
pub static ZH_TW: DateLocale = DateLocale {
    id: "zh-TW",
    month_names: CJK_MONTHS,
    month_abbrevs: CJK_MONTHS,
    weekday_names: [
        "星期一", "星期二", "星期三", "星期四", "星期五", "星期六", "星期日",
    ],
    weekday_abbrevs: ["週一", "週二", "週三", "週四", "週五", "週六", "週日"],
    am: "上午",
    pm: "下午",
};

pub static JA_JP: DateLocale = DateLocale {
    id: "ja-JP",
    month_names: CJK_MONTHS,
    month_abbrevs: CJK_MONTHS,
    weekday_names: [
        "月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日", "日曜日",
    ],
    weekday_abbrevs: ["月", "火", "水", "木", "金", "土", "日"],
    am: "午前",
    pm: "午後",
};

fn normalize_locale_id(id: &str) -> Option<&'static str> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Treat `-` and `_` as equivalent and match case-insensitively.
    let mut key = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        let ch = match ch {
            '_' => '-',
            other => other,
        };
        key.push(ch.to_ascii_lowercase());
    }

    // POSIX tags like `de_DE.UTF-8` or `de_DE@euro`.
    if let Some(idx) = key.find('.') {
        key.truncate(idx);
    }
    if let Some(idx) = key.find('@') {
        key.truncate(idx);
    }

    // BCP-47 extensions (`zh-TW-u-ca-roc`, `en-US-x-private`, ...).
    if let Some(idx) = key.find("-u-") {
        key.truncate(idx);
    }
    if let Some(idx) = key.find("-x-") {
        key.truncate(idx);
    }

    match key.as_str() {
        "en-us" | "en" => Some("en-US"),
        "en-gb" | "en-uk" => Some("en-GB"),
        "de-de" | "de" => Some("de-DE"),
        "fr-fr" | "fr" => Some("fr-FR"),
        "es-es" | "es" => Some("es-ES"),
        "it-it" | "it" => Some("it-IT"),
        "zh-tw" | "zh-hant" | "zh-hant-tw" => Some("zh-TW"),
        "ja-jp" | "ja" => Some("ja-JP"),
        _ => {
            // Region-specific variants we don't list explicitly (`fr-CA`, `de-AT`, `zh-HK`).
            let lang = key.split('-').next().unwrap_or("");
            match lang {
                "en" => Some("en-US"),
                "de" => Some("de-DE"),
                "fr" => Some("fr-FR"),
                "es" => Some("es-ES"),
                "it" => Some("it-IT"),
                "zh" => Some("zh-TW"),
                "ja" => Some("ja-JP"),
                _ => None,
            }
        }
    }
}

pub fn get_locale(id: &str) -> Option<&'static DateLocale> {
    match normalize_locale_id(id)? {
        "en-US" => Some(&EN_US),
        "en-GB" => Some(&EN_GB),
        "de-DE" => Some(&DE_DE),
        "fr-FR" => Some(&FR_FR),
        "es-ES" => Some(&ES_ES),
        "it-IT" => Some(&IT_IT),
        "zh-TW" => Some(&ZH_TW),
        "ja-JP" => Some(&JA_JP),
        _ => None,
    }
}

/// Like [`get_locale`], but falls back to `en-US` for tags the registry doesn't know.
pub fn resolve_locale(id: &str) -> &'static DateLocale {
    match get_locale(id) {
        Some(locale) => locale,
        None => {
            log::warn!("unknown locale tag {id:?}; rendering dates with en-US names");
            &EN_US
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_locale_ids() {
        assert_eq!(normalize_locale_id("en-us"), Some("en-US"));
        assert_eq!(normalize_locale_id("en_US"), Some("en-US"));
        assert_eq!(normalize_locale_id("en_US.UTF-8"), Some("en-US"));
        assert_eq!(normalize_locale_id("de_DE@euro"), Some("de-DE"));
        assert_eq!(normalize_locale_id("en_uk"), Some("en-GB"));
        assert_eq!(normalize_locale_id("en-AU"), Some("en-US"));
        assert_eq!(normalize_locale_id("fr-CA"), Some("fr-FR"));
        assert_eq!(normalize_locale_id("zh_TW"), Some("zh-TW"));
        assert_eq!(normalize_locale_id("zh-Hant-TW"), Some("zh-TW"));
        assert_eq!(normalize_locale_id("zh-TW-u-ca-roc"), Some("zh-TW"));
        assert_eq!(normalize_locale_id("zh-HK"), Some("zh-TW"));
        assert_eq!(normalize_locale_id("ja"), Some("ja-JP"));
        assert_eq!(normalize_locale_id("ko-KR"), None);
        assert_eq!(normalize_locale_id("  "), None);
    }

    #[test]
    fn unknown_tags_resolve_to_en_us() {
        assert_eq!(resolve_locale("ko-KR").id, "en-US");
        assert_eq!(resolve_locale("it_IT").id, "it-IT");
    }

    #[test]
    fn every_registered_id_round_trips_through_lookup() {
        for locale in [&EN_US, &EN_GB, &DE_DE, &FR_FR, &ES_ES, &IT_IT, &ZH_TW, &JA_JP] {
            assert_eq!(get_locale(locale.id).map(|l| l.id), Some(locale.id));
        }
    }
}
