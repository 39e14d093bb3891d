use std::sync::LazyLock;

use indexmap::IndexMap;
use percent_encoding::percent_decode_str;
use regex::Regex;
use tracing::warn;

/// Regular expression for matching path parameters in the format `{param_name}`.
static RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>\w+)}").expect("a valid regex"));

/// Binds the variables of a path template like `/users/{id}` against a concrete path.
///
/// Variables are returned in template order with percent-decoded values.
/// Returns `None` when the path does not match the template.
pub(super) fn match_template(template: &str, path: &str) -> Option<IndexMap<String, String>> {
    let mut pattern = String::from("^");
    let mut names = Vec::new();
    let mut last = 0;

    for captures in RE.captures_iter(template) {
        let (Some(whole), Some(name)) = (captures.get(0), captures.name("name")) else {
            continue;
        };
        pattern.push_str(&regex::escape(template.get(last..whole.start())?));
        pattern.push_str("([^/]+)");
        names.push(name.as_str());
        last = whole.end();
    }
    pattern.push_str(&regex::escape(template.get(last..)?));
    pattern.push('$');

    let matcher = match Regex::new(&pattern) {
        Ok(matcher) => matcher,
        Err(error) => {
            warn!(template, %error, "invalid path template");
            return None;
        }
    };

    let captures = matcher.captures(path)?;
    let variables = names
        .into_iter()
        .zip(captures.iter().skip(1))
        .filter_map(|(name, value)| {
            let value = percent_decode_str(value?.as_str())
                .decode_utf8_lossy()
                .into_owned();
            Some((name.to_string(), value))
        })
        .collect();

    Some(variables)
}
