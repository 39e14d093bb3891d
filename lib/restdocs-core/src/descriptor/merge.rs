use std::collections::HashSet;

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::trace;

use super::{FieldDescriptor, FieldType, Keyed};

/// Combines hand-written descriptors with derived ones.
///
/// The result lists every custom entry in the given order, followed by the derived
/// entries whose key (path or name) matches no custom entry. Keys are compared with
/// exact string equality. A custom key given twice keeps its first entry only.
///
/// # Example
///
/// ```rust
/// use restdocs_core::{FieldDescriptor, merge};
///
/// let customs = vec![FieldDescriptor::new("name", "override")];
/// let derived = vec![
///     FieldDescriptor::new("name", "john"),
///     FieldDescriptor::new("age", "42"),
/// ];
///
/// let merged = merge(customs, derived);
///
/// assert_eq!(merged[0].description(), "override");
/// assert_eq!(merged[1].path(), "age");
/// assert_eq!(merged.len(), 2);
/// ```
pub fn merge<T>(
    customs: impl IntoIterator<Item = T>,
    derived: impl IntoIterator<Item = T>,
) -> Vec<T>
where
    T: Keyed,
{
    let mut result = Vec::new();
    let mut custom_keys = HashSet::new();

    for custom in customs {
        if custom_keys.insert(custom.key().to_string()) {
            result.push(custom);
        } else {
            trace!(key = custom.key(), "duplicated custom descriptor ignored");
        }
    }

    for entry in derived {
        if custom_keys.contains(entry.key()) {
            trace!(key = entry.key(), "derived descriptor overridden by custom one");
        } else {
            result.push(entry);
        }
    }

    result
}

/// Collapses derived fields sharing a path into the first occurrence.
///
/// Array elements produce one entry per element; the collapsed entry is optional
/// when any occurrence was. When the first occurrence carries no sample (a `null` or
/// an empty array), the first later occurrence with a concrete value replaces it.
pub fn collapse_repeated(fields: impl IntoIterator<Item = FieldDescriptor>) -> Vec<FieldDescriptor> {
    let mut by_path = IndexMap::<String, FieldDescriptor>::new();

    for field in fields {
        match by_path.entry(field.path().to_string()) {
            Entry::Occupied(mut entry) => {
                let kept = entry.get_mut();
                if lacks_sample(kept) && !lacks_sample(&field) {
                    trace!(path = field.path(), "sample taken from a later element");
                    *kept = field;
                    kept.mark_optional();
                } else if field.is_optional() {
                    kept.mark_optional();
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(field);
            }
        }
    }

    by_path.into_values().collect()
}

// only `null` values and empty array placeholders derive these types
fn lacks_sample(field: &FieldDescriptor) -> bool {
    matches!(
        field.field_type(),
        Some(FieldType::Null | FieldType::Array)
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::descriptor::{ParameterDescriptor, walk};

    fn derived() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::derived("name", "john", FieldType::String, false),
            FieldDescriptor::derived("age", "42", FieldType::Number, false),
        ]
    }

    #[test]
    fn should_keep_derived_when_no_customs() {
        let merged = merge(Vec::new(), derived());

        assert_eq!(merged, derived());
    }

    #[test]
    fn should_let_custom_win_on_collision() {
        let customs = vec![FieldDescriptor::new("name", "override")];

        let merged = merge(customs, derived());

        assert_eq!(
            merged,
            vec![
                FieldDescriptor::new("name", "override"),
                FieldDescriptor::derived("age", "42", FieldType::Number, false),
            ]
        );
    }

    #[test]
    fn should_list_customs_first_in_caller_order() {
        let customs = vec![
            FieldDescriptor::new("zip", "postal code"),
            FieldDescriptor::new("age", "age in years"),
        ];

        let merged = merge(customs, derived());

        let paths = merged.iter().map(FieldDescriptor::path).collect::<Vec<_>>();
        assert_eq!(paths, ["zip", "age", "name"]);
    }

    #[test]
    fn should_drop_every_derived_entry_sharing_a_custom_path() {
        let customs = vec![FieldDescriptor::new("tags[]", "a tag")];
        let derived = vec![
            FieldDescriptor::derived("tags[]", "a", FieldType::String, false),
            FieldDescriptor::derived("tags[]", "b", FieldType::String, false),
        ];

        let merged = merge(customs, derived);

        assert_eq!(merged, vec![FieldDescriptor::new("tags[]", "a tag")]);
    }

    #[test]
    fn should_compare_keys_exactly() {
        let customs = vec![FieldDescriptor::new("Name", "upper case")];

        let merged = merge(customs, derived());

        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn should_merge_parameters_by_name() {
        let customs = vec![ParameterDescriptor::new("q", "search terms")];
        let derived = vec![
            ParameterDescriptor::new("page", "2"),
            ParameterDescriptor::new("q", "xy"),
        ];

        let merged = merge(customs, derived);

        assert_eq!(
            merged,
            vec![
                ParameterDescriptor::new("q", "search terms"),
                ParameterDescriptor::new("page", "2"),
            ]
        );
    }

    #[test]
    fn should_collapse_repeated_paths_keeping_first() {
        let fields = vec![
            FieldDescriptor::derived("[].id", "1", FieldType::Number, false),
            FieldDescriptor::derived("[].nickname", "jo", FieldType::String, false),
            FieldDescriptor::derived("[].id", "2", FieldType::Number, false),
            FieldDescriptor::derived("[].nickname", "", FieldType::String, true),
        ];

        let collapsed = collapse_repeated(fields);

        assert_eq!(
            collapsed,
            vec![
                FieldDescriptor::derived("[].id", "1", FieldType::Number, false),
                FieldDescriptor::derived("[].nickname", "jo", FieldType::String, true),
            ]
        );
    }

    #[test]
    fn should_keep_first_of_duplicated_custom_keys() {
        let customs = vec![
            FieldDescriptor::new("name", "first"),
            FieldDescriptor::new("name", "second"),
        ];

        let merged = merge(customs, derived());

        assert_eq!(
            merged,
            vec![
                FieldDescriptor::new("name", "first"),
                FieldDescriptor::derived("age", "42", FieldType::Number, false),
            ]
        );
    }

    #[test]
    fn should_take_sample_from_later_element_when_first_is_null() {
        let fields = walk(&json!([{"nickname": null}, {"nickname": "jo"}]), "");

        let collapsed = collapse_repeated(fields);

        assert_eq!(
            collapsed,
            vec![FieldDescriptor::derived("[].nickname", "jo", FieldType::String, true)]
        );
    }

    #[test]
    fn should_take_sample_from_later_element_when_first_is_empty_array() {
        let fields = walk(&json!([{"tags": []}, {"tags": ["admin"]}]), "");

        let collapsed = collapse_repeated(fields);

        assert_eq!(
            collapsed,
            vec![FieldDescriptor::derived("[].tags[]", "admin", FieldType::String, true)]
        );
    }

    #[test]
    fn should_keep_null_when_no_element_has_a_sample() {
        let fields = walk(&json!([{"nickname": null}, {"nickname": null}]), "");

        let collapsed = collapse_repeated(fields);

        assert_eq!(
            collapsed,
            vec![FieldDescriptor::derived("[].nickname", "", FieldType::Null, true)]
        );
    }
}
