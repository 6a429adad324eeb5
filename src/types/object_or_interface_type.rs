use crate::loc;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// A borrowed view over the two fielded output kinds, used where object and
/// interface types share validation logic.
#[derive(Clone, Copy)]
pub(crate) enum ObjectOrInterfaceType<'schema> {
    Interface(&'schema InterfaceType),
    Object(&'schema ObjectType),
}
impl<'schema> ObjectOrInterfaceType<'schema> {
    pub fn def_location(&self) -> Option<&'schema loc::SourceLocation> {
        match self {
            Self::Interface(iface_type) => iface_type.def_location.as_ref(),
            Self::Object(obj_type) => obj_type.def_location.as_ref(),
        }
    }

    pub fn fields(&self) -> &'schema IndexMap<String, Field> {
        match self {
            Self::Interface(iface_type) => &iface_type.fields,
            Self::Object(obj_type) => &obj_type.fields,
        }
    }

    pub fn name(&self) -> &'schema str {
        match self {
            Self::Interface(iface_type) => iface_type.name.as_str(),
            Self::Object(obj_type) => obj_type.name.as_str(),
        }
    }
}
