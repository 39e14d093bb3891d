use indexmap::IndexMap;

/// Groups the values of a `application/x-www-form-urlencoded` query by key.
///
/// Keys keep their first-seen order, values their order of appearance.
pub(super) fn parse_query(query: &str) -> IndexMap<String, Vec<String>> {
    let mut result = IndexMap::<String, Vec<String>>::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        result
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    result
}
