//! Offer extraction from raw offer documents.

use serde_json::Value;

use crate::domain::Offer;

use super::path::JsonPath;

/// Error extracting offers from a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OfferError {
    /// An offer node has no name
    #[error("offer #{index} has no name")]
    MissingName { index: usize },

    /// A field holds a different JSON type than expected
    #[error("offer #{index}: expected {field} to be a string, found {found}")]
    UnexpectedType {
        index: usize,
        field: &'static str,
        found: &'static str,
    },
}

/// Projects offer documents into flat [`Offer`] lists.
///
/// The document's shape depends on the query, so offers and their
/// compartments are located by path rather than by fixed position.
#[derive(Debug, Clone)]
pub struct OfferExtractor {
    offers: JsonPath,
    compartment_names: JsonPath,
}

impl OfferExtractor {
    pub fn new() -> Self {
        Self {
            offers: JsonPath::root().descendant("offers").each(),
            compartment_names: JsonPath::root()
                .descendant("compartments")
                .each()
                .key("name")
                .key("de"),
        }
    }

    /// Extract every offer in the document, in document order.
    pub fn extract(&self, document: &Value) -> Result<Vec<Offer>, OfferError> {
        self.offers
            .find(document)
            .into_iter()
            .enumerate()
            .map(|(index, node)| self.extract_offer(index, node))
            .collect()
    }

    fn extract_offer(&self, index: usize, node: &Value) -> Result<Offer, OfferError> {
        let name = match node.get("name") {
            None | Some(Value::Null) => return Err(OfferError::MissingName { index }),
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                return Err(OfferError::UnexpectedType {
                    index,
                    field: "name",
                    found: type_name(other),
                });
            }
        };

        let details = self
            .compartment_names
            .find(node)
            .into_iter()
            .map(|value| match value {
                Value::String(s) => Ok(s.clone()),
                other => Err(OfferError::UnexpectedType {
                    index,
                    field: "compartments[*].name.de",
                    found: type_name(other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Offer { name, details })
    }
}

impl Default for OfferExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract offers with the default paths.
pub fn extract_offers(document: &Value) -> Result<Vec<Offer>, OfferError> {
    OfferExtractor::new().extract(document)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn compartment(de: &str) -> Value {
        json!({"name": {"de": de, "en": format!("{de} (en)")}, "price": 1})
    }

    #[test]
    fn extracts_offers_with_compartments() {
        let doc = json!({
            "result": [{
                "connections": [{
                    "offers": [
                        {
                            "name": "Sparschiene",
                            "reservation": {
                                "reservationSegments": [{
                                    "compartments": [compartment("Liegewagen 6er"), compartment("Sitzwagen")]
                                }]
                            }
                        },
                        {"name": "Komfortschiene", "compartments": [compartment("Schlafwagen Single")]}
                    ]
                }]
            }]
        });

        let offers = extract_offers(&doc).unwrap();
        assert_eq!(
            offers,
            vec![
                Offer::new(
                    "Sparschiene",
                    vec!["Liegewagen 6er".to_string(), "Sitzwagen".to_string()]
                ),
                Offer::new("Komfortschiene", vec!["Schlafwagen Single".to_string()]),
            ]
        );
    }

    #[test]
    fn offers_at_mixed_depths_keep_document_order() {
        let doc = json!({
            "a": {"deep": {"offers": [{"name": "first"}]}},
            "offers": [{"name": "second"}],
            "b": [{"offers": [{"name": "third"}, {"name": "fourth"}]}]
        });

        let names: Vec<String> = extract_offers(&doc)
            .unwrap()
            .into_iter()
            .map(|o| o.name)
            .collect();
        assert_eq!(names, ["first", "second", "third", "fourth"]);
    }

    #[test]
    fn details_only_come_from_the_offers_own_subtree() {
        let doc = json!({
            "offers": [
                {"name": "A", "compartments": [compartment("one")]},
                {"name": "B"}
            ],
            "compartments": [compartment("unrelated")]
        });

        let offers = extract_offers(&doc).unwrap();
        assert_eq!(offers[0].details, ["one"]);
        assert!(offers[1].details.is_empty());
    }

    #[test]
    fn compartments_without_german_name_are_skipped() {
        let doc = json!({"offers": [{
            "name": "A",
            "compartments": [{"name": {"en": "Couchette"}}, compartment("Liegewagen")]
        }]});

        assert_eq!(extract_offers(&doc).unwrap()[0].details, ["Liegewagen"]);
    }

    #[test]
    fn no_offers_is_an_empty_list() {
        assert!(extract_offers(&json!({"result": []})).unwrap().is_empty());
        assert!(extract_offers(&json!({"offers": []})).unwrap().is_empty());
        assert!(extract_offers(&json!(null)).unwrap().is_empty());
    }

    #[test]
    fn offer_without_name_fails() {
        let doc = json!({"offers": [{"name": "ok"}, {"price": 10}]});
        assert_eq!(
            extract_offers(&doc),
            Err(OfferError::MissingName { index: 1 })
        );

        let doc = json!({"offers": [{"name": null}]});
        assert_eq!(
            extract_offers(&doc),
            Err(OfferError::MissingName { index: 0 })
        );
    }

    #[test]
    fn non_string_fields_fail() {
        let doc = json!({"offers": [{"name": 5}]});
        assert_eq!(
            extract_offers(&doc),
            Err(OfferError::UnexpectedType {
                index: 0,
                field: "name",
                found: "a number"
            })
        );

        let doc = json!({"offers": [{"name": "A", "compartments": [{"name": {"de": ["x"]}}]}]});
        assert!(matches!(
            extract_offers(&doc),
            Err(OfferError::UnexpectedType { found: "an array", .. })
        ));
    }

    #[test]
    fn error_display() {
        assert_eq!(
            OfferError::MissingName { index: 2 }.to_string(),
            "offer #2 has no name"
        );
        assert_eq!(
            OfferError::UnexpectedType {
                index: 0,
                field: "name",
                found: "a number"
            }
            .to_string(),
            "offer #0: expected name to be a string, found a number"
        );
    }
}
