//! Recognizing `Field<T>` slot types.

use syn::{GenericArgument, PathArguments, Type};

/// Returns `T` when `ty` is written as `Field<T>` (with any path prefix,
/// such as `fnpipe::record::Field<T>`).
pub fn field_slot_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Field" {
        return None;
    }
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return None;
    };
    match arguments.args.iter().collect::<Vec<_>>().as_slice() {
        [GenericArgument::Type(inner)] => Some(inner),
        _ => None,
    }
}
