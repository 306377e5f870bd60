/*!
 * Language identity for the feed pipeline.
 *
 * Three naming schemes coexist here: two-letter short codes ("es"), English
 * display names ("Spanish"), and the script-qualified codes the translation
 * model expects ("spa_Latn"). Callers hand the pipeline either of the first
 * two; the translation layer speaks the third.
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// A language the pipeline accepts as source or target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSpec {
    /// English display name, e.g. "Spanish"
    pub display_name: &'static str,
    /// Two-letter short code, e.g. "es"
    pub short_code: &'static str,
    /// Script-qualified code the translation model expects, e.g. "spa_Latn"
    pub script_code: &'static str,
}

/// Display name of the pivot language every summary passes through.
pub const PIVOT_LANGUAGE: &str = "English";

/// Languages exposed to callers end to end. The translation model itself
/// covers roughly two hundred; this is the set the product supports.
pub const SUPPORTED_LANGUAGES: &[LanguageSpec] = &[
    LanguageSpec { display_name: "Greek", short_code: "el", script_code: "ell_Grek" },
    LanguageSpec { display_name: "English", short_code: "en", script_code: "eng_Latn" },
    LanguageSpec { display_name: "Spanish", short_code: "es", script_code: "spa_Latn" },
    LanguageSpec { display_name: "French", short_code: "fr", script_code: "fra_Latn" },
    LanguageSpec { display_name: "German", short_code: "de", script_code: "deu_Latn" },
    LanguageSpec { display_name: "Italian", short_code: "it", script_code: "ita_Latn" },
];

/// Script-qualified model codes for languages beyond the supported set,
/// keyed by English display name. Lets registry users address languages the
/// product does not expose end to end.
static EXTENDED_SCRIPT_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Arabic", "arb_Arab"),
        ("Bulgarian", "bul_Cyrl"),
        ("Chinese", "zho_Hans"),
        ("Czech", "ces_Latn"),
        ("Danish", "dan_Latn"),
        ("Dutch", "nld_Latn"),
        ("Finnish", "fin_Latn"),
        ("Hebrew", "heb_Hebr"),
        ("Hindi", "hin_Deva"),
        ("Hungarian", "hun_Latn"),
        ("Indonesian", "ind_Latn"),
        ("Japanese", "jpn_Jpan"),
        ("Korean", "kor_Hang"),
        ("Malay", "zsm_Latn"),
        ("Norwegian", "nob_Latn"),
        ("Polish", "pol_Latn"),
        ("Portuguese", "por_Latn"),
        ("Romanian", "ron_Latn"),
        ("Russian", "rus_Cyrl"),
        ("Swedish", "swe_Latn"),
        ("Tamil", "tam_Taml"),
        ("Telugu", "tel_Telu"),
        ("Thai", "tha_Thai"),
        ("Turkish", "tur_Latn"),
        ("Ukrainian", "ukr_Cyrl"),
        ("Urdu", "urd_Arab"),
        ("Vietnamese", "vie_Latn"),
    ])
});

/// Look up a supported language by display name or short code.
///
/// Display names are tried first so that inputs already in canonical form
/// resolve to themselves.
pub fn lookup(name_or_code: &str) -> Option<&'static LanguageSpec> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|lang| lang.display_name == name_or_code)
        .or_else(|| {
            SUPPORTED_LANGUAGES
                .iter()
                .find(|lang| lang.short_code == name_or_code)
        })
}

/// Resolve a display name or short code to the canonical display name.
///
/// Unresolvable input passes through unchanged rather than erroring, so
/// callers can hand identifiers the registry does not know straight to the
/// layers below.
pub fn resolve_display(name_or_code: &str) -> String {
    match lookup(name_or_code) {
        Some(lang) => lang.display_name.to_string(),
        None => name_or_code.to_string(),
    }
}

/// Resolve an English display name to the translation model's
/// script-qualified code.
///
/// Unresolvable input passes through unchanged, so a caller that already
/// holds a script code can use it directly.
pub fn resolve_script_code(language: &str) -> String {
    if let Some(lang) = SUPPORTED_LANGUAGES
        .iter()
        .find(|lang| lang.display_name == language)
    {
        return lang.script_code.to_string();
    }
    match EXTENDED_SCRIPT_CODES.get(language) {
        Some(code) => (*code).to_string(),
        None => language.to_string(),
    }
}

/// Whether a display name belongs to the supported set.
pub fn is_supported(display_name: &str) -> bool {
    SUPPORTED_LANGUAGES
        .iter()
        .any(|lang| lang.display_name == display_name)
}

/// Display names of all supported languages, in registry order.
pub fn supported_display_names() -> Vec<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|lang| lang.display_name)
        .collect()
}
