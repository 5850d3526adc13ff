//! Minimal CSV rendering: RFC 4180 quoting, `\n` line endings.

use std::borrow::Cow;

/// Quote a field when it contains a delimiter, quote, or newline.
pub(crate) fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Row-at-a-time CSV builder.
#[derive(Default)]
pub(crate) struct CsvBuilder {
    out: String,
}

impl CsvBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn row<'a>(&mut self, fields: impl IntoIterator<Item = &'a str>) {
        let mut first = true;
        for field in fields {
            if !first {
                self.out.push(',');
            }
            self.out.push_str(&escape(field));
            first = false;
        }
        self.out.push('\n');
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}
