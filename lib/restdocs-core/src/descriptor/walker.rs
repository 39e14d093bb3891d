use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::{FieldDescriptor, FieldType};
use crate::DocsError;

/// How the walker treats JSON `null` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullValues {
    /// A `null` is a blank scalar: documented with type `NULL` and marked optional.
    #[default]
    Optional,
    /// A `null` fails the walk with [`DocsError::UnsupportedNodeType`].
    Reject,
}

/// Flattens a JSON tree into field descriptors, one per leaf and per empty array.
///
/// Members are visited depth-first in document order:
/// - object members extend the path with `.key` (or just `key` at the root),
/// - array elements share the array path suffixed with `[]`,
/// - an empty array yields a single optional `ARRAY` entry,
/// - a scalar yields an entry described by its text, optional when that text is blank.
///
/// A bare scalar at the root has no field path and yields nothing.
///
/// # Example
///
/// ```rust
/// use restdocs_core::walk;
/// use serde_json::json;
///
/// let fields = walk(&json!({"name": "john", "tags": ["a", "b"]}), "");
/// let paths = fields.iter().map(|it| it.path()).collect::<Vec<_>>();
///
/// assert_eq!(paths, ["name", "tags[]", "tags[]"]);
/// ```
pub fn walk(tree: &Value, base_path: &str) -> Vec<FieldDescriptor> {
    let mut fields = Vec::new();
    match tree {
        Value::Object(_) | Value::Array(_) => visit(tree, base_path, &mut fields),
        _ if base_path.is_empty() => debug!("root scalar has no field path, nothing to document"),
        scalar => fields.push(scalar_field(scalar, base_path)),
    }
    fields
}

fn visit(value: &Value, path: &str, fields: &mut Vec<FieldDescriptor>) {
    match value {
        Value::Object(members) => visit_object(members, path, fields),
        Value::Array(items) => visit_array(items, &array_path(path), fields),
        scalar => fields.push(scalar_field(scalar, path)),
    }
}

fn visit_object(members: &Map<String, Value>, path: &str, fields: &mut Vec<FieldDescriptor>) {
    for (key, value) in members {
        visit(value, &child_path(path, key), fields);
    }
}

fn visit_array(items: &[Value], array_path: &str, fields: &mut Vec<FieldDescriptor>) {
    if items.is_empty() {
        // no element to describe
        fields.push(FieldDescriptor::derived(
            array_path,
            "",
            FieldType::Array,
            true,
        ));
        return;
    }

    for item in items {
        visit(item, array_path, fields);
    }
}

fn scalar_field(value: &Value, path: &str) -> FieldDescriptor {
    let text = match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Object(_) | Value::Array(_) => String::new(),
    };
    let optional = text.trim().is_empty();
    FieldDescriptor::derived(path, text, FieldType::of(value), optional)
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        [path, ".", key].concat()
    }
}

fn array_path(path: &str) -> String {
    [path, "[]"].concat()
}

/// A configured tree walker.
///
/// Same traversal as [`walk`], with a policy for `null` values.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldWalker {
    null_values: NullValues,
}

impl FieldWalker {
    /// Creates a walker with the given `null` policy.
    pub fn new(null_values: NullValues) -> Self {
        Self { null_values }
    }

    /// Walks the tree, see [`walk`].
    ///
    /// # Errors
    ///
    /// Fails with [`DocsError::UnsupportedNodeType`] on the first `null` value
    /// when configured with [`NullValues::Reject`].
    pub fn walk(&self, tree: &Value, base_path: &str) -> Result<Vec<FieldDescriptor>, DocsError> {
        let fields = walk(tree, base_path);

        if self.null_values == NullValues::Reject
            && let Some(field) = fields
                .iter()
                .find(|field| field.field_type() == Some(FieldType::Null))
        {
            warn!(path = field.path(), "null values are rejected");
            return Err(DocsError::UnsupportedNodeType {
                path: field.path().to_string(),
                kind: FieldType::Null,
            });
        }

        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn summary(fields: &[FieldDescriptor]) -> Vec<(&str, Option<FieldType>, bool)> {
        fields
            .iter()
            .map(|field| (field.path(), field.field_type(), field.is_optional()))
            .collect()
    }

    fn paths(fields: &[FieldDescriptor]) -> Vec<&str> {
        fields.iter().map(FieldDescriptor::path).collect()
    }

    #[test]
    fn should_walk_scalars_and_arrays_in_document_order() {
        let tree = json!({"name": "john", "tags": ["a", "b"]});

        let fields = walk(&tree, "");

        assert_eq!(
            summary(&fields),
            vec![
                ("name", Some(FieldType::String), false),
                ("tags[]", Some(FieldType::String), false),
                ("tags[]", Some(FieldType::String), false),
            ]
        );
        assert_eq!(fields[1].description(), "a");
        assert_eq!(fields[2].description(), "b");
    }

    #[test]
    fn should_emit_one_optional_entry_for_empty_array() {
        let tree = json!({"items": []});

        let fields = walk(&tree, "");

        insta::assert_debug_snapshot!(fields, @r#"
        [
            FieldDescriptor {
                path: "items[]",
                description: "",
                field_type: Some(
                    Array,
                ),
                optional: true,
            },
        ]
        "#);
    }

    #[test]
    fn should_keep_insertion_order_of_members() {
        let tree: Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": {"b": 3, "a": 4}}"#)
                .expect("valid json");

        let fields = walk(&tree, "");

        assert_eq!(paths(&fields), ["zeta", "alpha", "mid.b", "mid.a"]);
    }

    #[test]
    fn should_walk_objects_inside_arrays() {
        let tree = json!({
            "first": "first",
            "second": "second",
            "third": [{
                "first": "first",
                "second": [{
                    "first": "first",
                    "second": [],
                    "third": ["third"]
                }]
            }]
        });

        let fields = walk(&tree, "");

        assert_eq!(
            paths(&fields),
            [
                "first",
                "second",
                "third[].first",
                "third[].second[].first",
                "third[].second[].second[]",
                "third[].second[].third[]",
            ]
        );
    }

    #[test]
    fn should_prefix_root_array_elements() {
        let tree = json!([
            {"id": 1, "name": "john"},
            {"id": 2, "name": "mike"}
        ]);

        let fields = walk(&tree, "");

        assert_eq!(paths(&fields), ["[].id", "[].name", "[].id", "[].name"]);
    }

    #[test]
    fn should_nest_arrays_of_arrays() {
        let tree = json!({"matrix": [[1, 2], []]});

        let fields = walk(&tree, "");

        assert_eq!(
            summary(&fields),
            vec![
                ("matrix[][]", Some(FieldType::Number), false),
                ("matrix[][]", Some(FieldType::Number), false),
                ("matrix[][]", Some(FieldType::Array), true),
            ]
        );
    }

    #[test]
    fn should_continue_from_base_path() {
        let tree = json!({"city": "Paris"});

        let fields = walk(&tree, "user.address");

        assert_eq!(paths(&fields), ["user.address.city"]);
    }

    #[test]
    fn should_ignore_root_scalar() {
        assert!(walk(&json!("plain"), "").is_empty());
    }

    #[test]
    fn should_ignore_empty_object() {
        assert!(walk(&json!({"meta": {}}), "").is_empty());
    }

    #[rstest]
    #[case(json!({"value": "john"}), "john", FieldType::String, false)]
    #[case(json!({"value": ""}), "", FieldType::String, true)]
    #[case(json!({"value": "   "}), "   ", FieldType::String, true)]
    #[case(json!({"value": 42}), "42", FieldType::Number, false)]
    #[case(json!({"value": 0.5}), "0.5", FieldType::Number, false)]
    #[case(json!({"value": true}), "true", FieldType::Boolean, false)]
    #[case(json!({"value": null}), "", FieldType::Null, true)]
    fn should_describe_scalar_by_text(
        #[case] tree: Value,
        #[case] description: &str,
        #[case] field_type: FieldType,
        #[case] optional: bool,
    ) {
        let fields = walk(&tree, "");

        assert_eq!(
            fields,
            vec![FieldDescriptor::derived(
                "value",
                description,
                field_type,
                optional
            )]
        );
    }

    #[test]
    fn should_reject_null_when_configured() {
        let walker = FieldWalker::new(NullValues::Reject);
        let tree = json!({"user": {"name": "john", "nickname": null}});

        let err = walker.walk(&tree, "").expect_err("null is rejected");

        assert!(matches!(
            err,
            DocsError::UnsupportedNodeType { ref path, kind: FieldType::Null } if path == "user.nickname"
        ));
    }

    #[test]
    fn should_accept_null_by_default() {
        let walker = FieldWalker::default();
        let tree = json!({"nickname": null});

        let fields = walker.walk(&tree, "").expect("null is accepted");

        assert_eq!(
            summary(&fields),
            vec![("nickname", Some(FieldType::Null), true)]
        );
    }
}
