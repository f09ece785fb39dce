use crate::gtfs_rt::{TranslatedString, translated_string::Translation};
use crate::source::Text;

/// Collects `TEXT` blocks that have both a language and a body.
///
/// Upstream data often lacks one of the two; such blocks are dropped. Returns
/// `None` when nothing usable remains.
pub fn translate_description(texts: &[Text]) -> Option<TranslatedString> {
    let translation: Vec<Translation> = texts
        .iter()
        .filter_map(|t| {
            let language = t.lang.as_deref().filter(|l| !l.is_empty())?;
            let text = t.body.as_deref().filter(|b| !b.is_empty())?;
            Some(Translation {
                text: text.to_string(),
                language: Some(language.to_string()),
            })
        })
        .collect();

    (!translation.is_empty()).then_some(TranslatedString { translation })
}
