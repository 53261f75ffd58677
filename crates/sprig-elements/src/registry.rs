//! Element factory registry
//!
//! Maps a record's `type` tag to a constructor. A registry instance is
//! injected per build; callers extend it by registering additional
//! entries rather than mutating shared process state. Re-registering a
//! tag replaces the builtin.

use std::collections::HashMap;

use sprig_document::Record;

use crate::button::{ButtonElement, MaskElement};
use crate::element::Element;
use crate::error::{ElementError, ElementErrorKind};
use crate::group::{GroupElement, NullElement, RootElement};
use crate::image::ImageElement;
use crate::list::ListElement;
use crate::prefab::PrefabElement;
use crate::text::TextElement;
use crate::widgets::{ScrollbarElement, SliderElement, ToggleElement};

type Constructor = Box<
    dyn for<'a> Fn(Record<'a>, &ElementRegistry) -> Result<Box<dyn Element>, ElementError>
        + Send
        + Sync,
>;

pub struct ElementRegistry {
    constructors: HashMap<String, Constructor>,
}

impl ElementRegistry {
    /// Registry with no entries. Mostly useful in tests.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Registry with the builtin element set.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register("Root", RootElement::construct);
        registry.register("Group", GroupElement::construct);
        registry.register("Image", ImageElement::construct);
        registry.register("Text", TextElement::construct);
        registry.register("Button", ButtonElement::construct);
        registry.register("Mask", MaskElement::construct);
        registry.register("List", ListElement::construct);
        registry.register("Slider", SliderElement::construct);
        registry.register("Scrollbar", ScrollbarElement::construct);
        registry.register("Toggle", ToggleElement::construct);
        registry.register("Prefab", PrefabElement::construct);
        registry.register("Null", NullElement::construct);
        registry
    }

    pub fn register<F>(&mut self, tag: impl Into<String>, constructor: F)
    where
        F: for<'a> Fn(Record<'a>, &ElementRegistry) -> Result<Box<dyn Element>, ElementError>
            + Send
            + Sync
            + 'static,
    {
        self.constructors.insert(tag.into(), Box::new(constructor));
    }

    /// Construct the element for one record, dispatching on its type
    /// tag.
    pub fn generate(&self, record: Record<'_>) -> Result<Box<dyn Element>, ElementError> {
        let tag = record.str("type");
        let constructor = self.constructors.get(tag).ok_or_else(|| {
            ElementError::new(ElementErrorKind::UnknownElementType(tag.to_string()))
                .at(record.str("name"))
        })?;
        constructor(record, self)
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_rejected() {
        let registry = ElementRegistry::with_builtins();
        let value = serde_json::json!({ "type": "Blob", "name": "Thing" });
        let record = Record::from_value(&value).unwrap();

        let Err(err) = registry.generate(record) else {
            panic!("expected an unknown-type error");
        };
        assert!(matches!(
            err.kind,
            ElementErrorKind::UnknownElementType(ref tag) if tag == "Blob"
        ));
        assert_eq!(err.path.to_string(), "Thing");
    }

    #[test]
    fn test_caller_extension_overrides_builtin() {
        let mut registry = ElementRegistry::with_builtins();
        registry.register("Group", NullElement::construct);

        let value = serde_json::json!({ "type": "Group", "name": "G" });
        let record = Record::from_value(&value).unwrap();
        let element = registry.generate(record).unwrap();
        assert!(!element.is_group());
    }
}
