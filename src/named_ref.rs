use crate::loc;
use std::marker::PhantomData;
use thiserror::Error;

/// A strongly-typed, `String`-named reference to a resource stored within
/// some other data-store, held without a real reference to that store.
/// De-referencing a [`NamedRef`] is done via [`NamedRef::deref()`] by
/// providing the store explicitly.
///
/// Concretely: [`crate::types::ObjectType`] stores the interfaces it
/// implements as a `Vec` of [`crate::types::NamedTypeRef`] rather than as
/// `&InterfaceType` borrows, which lets [`crate::Schema`] own every named
/// type without self-references.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedRef<TResource: DerefByName> {
    name: String,
    phantom: PhantomData<TResource>,
    ref_location: Option<loc::SourceLocation>,
}
impl<TResource: DerefByName> NamedRef<TResource> {
    pub fn new(
        name: impl AsRef<str>,
        ref_location: Option<loc::SourceLocation>,
    ) -> NamedRef<TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
            ref_location,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The position of the reference itself (not of the referenced
    /// resource), when the reference came from a source document.
    pub fn ref_location(&self) -> Option<&loc::SourceLocation> {
        self.ref_location.as_ref()
    }

    pub fn deref<'a>(
        &self,
        source: &'a TResource::Source,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}

/// Implement this trait for any type that can be looked up by name within
/// some source store. This enables usage of [`NamedRef`] for that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(
        name: impl AsRef<str>,
        ref_location: Option<loc::SourceLocation>,
    ) -> NamedRef<Self> {
        NamedRef::new(name, ref_location)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DerefByNameError {
    #[error("No resource found with the name \"{0}\"")]
    DanglingReference(String),
}
