use plumb_core::config::PlumbConfig;
use plumb_core::token::TokenStream;
use plumb_core::version::LanguageVersion;

/// Read-only inputs shared by every validator during one pass.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub stream: &'a TokenStream,
    /// Line ending used when a fix inserts a line.
    pub eol: &'static str,
    pub min_version: LanguageVersion,
    pub type_hints: bool,
}

impl<'a> Context<'a> {
    pub fn new(stream: &'a TokenStream, config: &PlumbConfig) -> Self {
        Self {
            stream,
            eol: detect_eol(stream),
            min_version: config.min_language_version,
            type_hints: config.enforce.type_hints,
        }
    }
}

/// The first line ending in the stream wins; `\n` when there is none.
fn detect_eol(stream: &TokenStream) -> &'static str {
    stream
        .tokens()
        .iter()
        .find_map(|t| {
            t.text
                .find('\n')
                .map(|i| if t.text[..i].ends_with('\r') { "\r\n" } else { "\n" })
        })
        .unwrap_or("\n")
}
