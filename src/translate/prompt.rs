use crate::error::TranslateError;

/// Sentinels the delimited dialect asks models to wrap their output in.
/// The delimiter-scan extractor looks for these exact markers.
pub const CODE_START: &str = "<CODE START>";
pub const CODE_END: &str = "<CODE END>";

/// How the instruction prompt is phrased, chosen per backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptDialect {
    /// Ask for output strictly between the sentinel markers. Works for
    /// models that reliably follow formatting instructions.
    Delimited,
    /// Code only, no markdown, terse phrasing. For models that ignore
    /// delimiter instructions.
    Plain,
}

/// Split a "from-to" translation pair into its two language names.
/// Anything other than exactly two non-empty tokens is malformed.
pub fn split_pair(pair: &str) -> Result<(&str, &str), TranslateError> {
    let mut parts = pair.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(from), Some(to), None) if !from.is_empty() && !to.is_empty() => Ok((from, to)),
        _ => Err(TranslateError::MalformedPair(pair.to_string())),
    }
}

/// Build the instruction prompt for one translation. The source code is
/// embedded verbatim; both language names appear in the instructions.
pub fn build_prompt(
    dialect: PromptDialect,
    pair: &str,
    code: &str,
) -> Result<String, TranslateError> {
    let (from, to) = split_pair(pair)?;

    let prompt = match dialect {
        PromptDialect::Delimited => format!(
            "You are an AI that only responds with translated code wrapped between the following delimiters:\n\
             {CODE_START}\n...translated code here...\n{CODE_END}\n\
             Only return the code block. Do NOT include any extra text, markdown, or commentary.\n\
             Please translate the following {from} code to the same equivalent in {to}:\n{code}\n"
        ),
        PromptDialect::Plain => format!(
            "Please translate the following {from} code to {to}. \
             Only return the translated code and no other text. Thank you\n\
             CODE TO TRANSLATE:\n{code}\n"
        ),
    };

    Ok(prompt)
}
