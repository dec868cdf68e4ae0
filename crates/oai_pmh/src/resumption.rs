use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};

use crate::XmlParseError;

/// Element path, from the document root, of the token in a `ListIdentifiers` response.
const TOKEN_PATH: [&[u8]; 3] = [b"OAI-PMH", b"ListIdentifiers", b"resumptionToken"];

/// A `resumptionToken` element as found in a list response.
///
/// An empty `value` is how a repository marks the last page of an incomplete list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumptionToken {
    pub value: String,
    pub cursor: Option<u64>,
    pub complete_list_size: Option<u64>,
    pub expiration_date: Option<String>,
}

impl ResumptionToken {
    pub fn is_list_complete(&self) -> bool {
        self.value.is_empty()
    }
}

/// Outcome of looking for the resumption token in a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumptionTokenLookup {
    Found(ResumptionToken),
    NotFound,
    ParseError(XmlParseError),
}

impl ResumptionTokenLookup {
    /// Token text, or `""` when there is none.
    pub fn token(&self) -> &str {
        match self {
            ResumptionTokenLookup::Found(token) => &token.value,
            ResumptionTokenLookup::NotFound | ResumptionTokenLookup::ParseError(_) => "",
        }
    }
}

/// Finds `OAI-PMH/ListIdentifiers/resumptionToken` in `xml`.
///
/// Element names are matched on their local part, so a default or prefixed namespace does
/// not matter. The first match wins, but the whole document is still read so that a
/// malformed tail is reported. A document without any markup has no token.
pub fn extract_resumption_token(xml: &str) -> ResumptionTokenLookup {
    match scan(xml) {
        Ok(Some(token)) => ResumptionTokenLookup::Found(token),
        Ok(None) => ResumptionTokenLookup::NotFound,
        Err(err) => ResumptionTokenLookup::ParseError(err),
    }
}

fn scan(xml: &str) -> Result<Option<ResumptionToken>, XmlParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = true;

    let mut depth = 0usize;
    // Leading elements of TOKEN_PATH matched by the currently open ancestors.
    let mut matched = 0usize;
    let mut capture: Option<ResumptionToken> = None;
    let mut found: Option<ResumptionToken> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|err| reader_error(&reader, err.to_string()))?;
        match event {
            Event::Start(start) => {
                let attributes = decode_attributes(&reader, &start)?;
                if depth == matched
                    && matched < TOKEN_PATH.len()
                    && start.local_name().as_ref() == TOKEN_PATH[matched]
                {
                    matched += 1;
                    if matched == TOKEN_PATH.len() && found.is_none() && capture.is_none() {
                        capture = Some(token_from_attributes(attributes));
                    }
                }
                depth += 1;
            }
            Event::Empty(start) => {
                let attributes = decode_attributes(&reader, &start)?;
                if depth == matched
                    && matched == TOKEN_PATH.len() - 1
                    && start.local_name().as_ref() == TOKEN_PATH[matched]
                    && found.is_none()
                {
                    found = Some(token_from_attributes(attributes));
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if matched > depth {
                    if matched == TOKEN_PATH.len() && depth == matched - 1 {
                        if let Some(token) = capture.take() {
                            found = Some(token);
                        }
                    }
                    matched = depth;
                }
            }
            Event::Text(text) => {
                // Decoded everywhere, not only inside the token: a bad entity anywhere is malformed.
                let text = text
                    .unescape()
                    .map_err(|err| content_error(&reader, err.to_string()))?;
                if let Some(token) = capture.as_mut() {
                    token.value.push_str(&text);
                }
            }
            Event::CData(cdata) => {
                if let Some(token) = capture.as_mut() {
                    token.value.push_str(&String::from_utf8_lossy(&cdata));
                }
            }
            Event::Eof => {
                if depth != 0 {
                    return Err(content_error(
                        &reader,
                        format!("document ended with {depth} unclosed element(s)"),
                    ));
                }
                break;
            }
            _ => {}
        }
    }

    Ok(found)
}

/// Decodes every attribute of `start` as `(local name, value)`.
///
/// Fails on unquoted or duplicated attributes, unknown entities, and a raw `<` in a value.
fn decode_attributes(
    reader: &Reader<&[u8]>,
    start: &BytesStart<'_>,
) -> Result<Vec<(Vec<u8>, String)>, XmlParseError> {
    let mut decoded = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|err| content_error(reader, err.to_string()))?;
        let name = attr.key.local_name().as_ref().to_vec();
        if attr.value.contains(&b'<') {
            return Err(content_error(
                reader,
                format!(
                    "unescaped `<` in value of attribute `{}`",
                    String::from_utf8_lossy(attr.key.as_ref())
                ),
            ));
        }
        let value = attr
            .unescape_value()
            .map_err(|err| content_error(reader, err.to_string()))?
            .into_owned();
        decoded.push((name, value));
    }
    Ok(decoded)
}

fn token_from_attributes(attributes: Vec<(Vec<u8>, String)>) -> ResumptionToken {
    let mut token = ResumptionToken::default();
    for (name, value) in attributes {
        match name.as_slice() {
            b"cursor" => token.cursor = value.trim().parse().ok(),
            b"completeListSize" => token.complete_list_size = value.trim().parse().ok(),
            b"expirationDate" => token.expiration_date = Some(value),
            _ => {}
        }
    }
    token
}

/// Error raised by the reader itself, positioned where it stopped.
fn reader_error(reader: &Reader<&[u8]>, message: String) -> XmlParseError {
    XmlParseError {
        position: reader.error_position() as u64,
        message,
    }
}

/// Error found while decoding an event the reader accepted, positioned after that event.
fn content_error(reader: &Reader<&[u8]>, message: String) -> XmlParseError {
    XmlParseError {
        position: reader.buffer_position() as u64,
        message,
    }
}
