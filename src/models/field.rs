use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LinkedValue {
    pub text: String,
    pub url: String,
}

/// Value cell of a side-info row.
///
/// Rows whose value cell holds anchors keep them as `Links`; everything else is `Text`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Links(Vec<LinkedValue>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text.as_str()),
            FieldValue::Links(_) => None,
        }
    }

    pub fn as_links(&self) -> Option<&[LinkedValue]> {
        match self {
            FieldValue::Links(links) => Some(links.as_slice()),
            FieldValue::Text(_) => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MetadataField {
    pub name: String,
    pub value: FieldValue,
}

impl MetadataField {
    pub fn text(name: &str, value: &str) -> MetadataField {
        MetadataField {
            name: name.to_string(),
            value: FieldValue::Text(value.to_string()),
        }
    }

    pub fn links(name: &str, links: Vec<LinkedValue>) -> MetadataField {
        MetadataField {
            name: name.to_string(),
            value: FieldValue::Links(links),
        }
    }
}

/// First field named `name`, optionally also requiring its text value to equal `value`.
///
/// Linked values never satisfy a `value` filter.
pub fn find_field<'a>(
    fields: &'a [MetadataField],
    name: &str,
    value: Option<&str>,
) -> Option<&'a MetadataField> {
    fields.iter().find(|field| {
        if field.name != name {
            return false;
        }

        match value {
            Some(value) => field.value.as_text() == Some(value),
            None => true,
        }
    })
}

/// Text value of the first field named `name`.
pub fn field_text<'a>(fields: &'a [MetadataField], name: &str) -> Option<&'a str> {
    find_field(fields, name, None).and_then(|field| field.value.as_text())
}

#[cfg(test)]
mod tests {
    use super::{field_text, find_field, FieldValue, LinkedValue, MetadataField};

    fn fields() -> Vec<MetadataField> {
        vec![
            MetadataField::text("Volume", "3"),
            MetadataField::text("Volume Title", "The Sea"),
            MetadataField::text("Volume", "4"),
            MetadataField::links(
                "Author",
                vec![LinkedValue {
                    text: "Jane Doe".to_string(),
                    url: "/author/jane".to_string(),
                }],
            ),
        ]
    }

    #[test]
    fn find_by_name() {
        let fields = fields();

        let found = find_field(&fields, "Volume", None);

        assert_eq!(Some(&MetadataField::text("Volume", "3")), found);
    }

    #[test]
    fn find_by_name_and_value() {
        let fields = fields();

        let found = find_field(&fields, "Volume", Some("4"));

        assert_eq!(Some(&fields[2]), found);
    }

    #[test]
    fn find_unmatched_name_is_none() {
        let fields = fields();

        assert_eq!(None, find_field(&fields, "ISBN-13", None));
        assert_eq!(None, find_field(&fields, "Volume", Some("5")));
    }

    #[test]
    fn value_filter_ignores_links() {
        let fields = fields();

        assert_eq!(None, find_field(&fields, "Author", Some("Jane Doe")));
        assert_eq!(None, field_text(&fields, "Author"));
    }

    #[test]
    fn field_value_serializes_untagged() -> anyhow::Result<()> {
        let text = serde_json::to_string(&MetadataField::text("Volume", "1"))?;
        assert_eq!(r#"{"name":"Volume","value":"1"}"#, text);

        let parsed: MetadataField =
            serde_json::from_str(r#"{"name":"Author","value":[{"text":"A","url":"/a"}]}"#)?;
        assert_eq!(
            FieldValue::Links(vec![LinkedValue {
                text: "A".to_string(),
                url: "/a".to_string()
            }]),
            parsed.value
        );

        Ok(())
    }
}
