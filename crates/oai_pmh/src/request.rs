use std::{collections::BTreeMap, fmt};

use url::Url;

pub(crate) const VERB: &str = "verb";
pub(crate) const IDENTIFIER: &str = "identifier";
pub(crate) const METADATA_PREFIX: &str = "metadataPrefix";
pub(crate) const FROM: &str = "from";
pub(crate) const UNTIL: &str = "until";
pub(crate) const SET: &str = "set";
pub(crate) const RESUMPTION_TOKEN: &str = "resumptionToken";

/// OAI-PMH request types supported by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    GetRecord,
    Identify,
    ListIdentifiers,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::GetRecord => "GetRecord",
            Verb::Identify => "Identify",
            Verb::ListIdentifiers => "ListIdentifiers",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully assembled verb plus its query parameters.
///
/// Parameters are kept sorted by name, so the rendered query string is stable
/// (`identifier=…&metadataPrefix=…&verb=GetRecord`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OaiRequest {
    verb: Verb,
    params: BTreeMap<&'static str, String>,
}

impl OaiRequest {
    pub fn new(verb: Verb) -> Self {
        let mut params = BTreeMap::new();
        params.insert(VERB, verb.as_str().to_string());
        Self { verb, params }
    }

    pub(crate) fn param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.insert(key, value.into());
        self
    }

    /// Adds the parameter only when `value` is non-empty.
    pub(crate) fn optional_param(self, key: &'static str, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.param(key, value)
        }
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Name/value pairs in the order they are encoded, `verb` included.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.params
            .iter()
            .map(|(key, value)| (*key, value.clone()))
            .collect()
    }

    /// Clones `base`, drops whatever query it carried, and attaches this request's parameters.
    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_query(None);
        url.query_pairs_mut()
            .extend_pairs(self.params.iter().map(|(key, value)| (*key, value.as_str())));
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_params_skip_empty_values() {
        let request = OaiRequest::new(Verb::ListIdentifiers)
            .optional_param(FROM, "")
            .optional_param(SET, "physics");

        assert_eq!(
            request.query_pairs(),
            vec![
                (SET, "physics".to_string()),
                (VERB, "ListIdentifiers".to_string())
            ]
        );
    }

    #[test]
    fn to_url_replaces_existing_query() {
        let base = Url::parse("http://example.org/oai2?verb=Stale&x=1").unwrap();
        let url = OaiRequest::new(Verb::Identify).to_url(&base);
        assert_eq!(url.as_str(), "http://example.org/oai2?verb=Identify");
        assert_eq!(base.query(), Some("verb=Stale&x=1"));
    }

    #[test]
    fn values_are_form_encoded() {
        let base = Url::parse("http://example.org/oai2").unwrap();
        let url = OaiRequest::new(Verb::GetRecord)
            .param(IDENTIFIER, "oai:example:a b")
            .to_url(&base);
        assert_eq!(
            url.query(),
            Some("identifier=oai%3Aexample%3Aa+b&verb=GetRecord")
        );
    }

    #[test]
    fn tilde_is_escaped_and_asterisk_is_not() {
        let base = Url::parse("http://example.org/oai2").unwrap();
        let url = OaiRequest::new(Verb::ListIdentifiers)
            .param(SET, "a~b*c")
            .to_url(&base);
        assert_eq!(url.query(), Some("set=a%7Eb*c&verb=ListIdentifiers"));
    }
}
