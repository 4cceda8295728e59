mod registry;

pub use registry::{
    get_locale, resolve_locale, DateLocale, DE_DE, EN_GB, EN_US, ES_ES, FR_FR, IT_IT, JA_JP, ZH_TW,
};
