//! The Type resolver (§4.2): a structurally simpler sibling of Type lookup
//! used only for an enum's own declared shape. It never fails — it's a pure
//! structural copy from `NamedType` to `ShapeType`, leaving `Ref` untouched
//! so the written form survives for diagnostics.

use pylon_ast::NamedType;
use pylon_hir::ShapeType;

/// Maps a Named Type to its `ShapeType` mirror (§4.2).
#[must_use]
pub fn resolve_type_shape(ty: &NamedType) -> ShapeType {
    match ty {
        NamedType::Var(tv) => ShapeType::Var(*tv),
        NamedType::Unit => ShapeType::Unit,
        NamedType::Ref(qname) => ShapeType::Ref(qname.clone()),
        NamedType::Enum(sym) => ShapeType::Enum(*sym),
        NamedType::Tuple(elements) => ShapeType::Tuple(elements.iter().map(resolve_type_shape).collect()),
        NamedType::Arrow(parameters, return_type) => ShapeType::Arrow(
            parameters.iter().map(resolve_type_shape).collect(),
            Box::new(resolve_type_shape(return_type)),
        ),
        NamedType::Apply(base, arguments) => {
            ShapeType::Apply(Box::new(resolve_type_shape(base)), arguments.iter().map(resolve_type_shape).collect())
        }
    }
}
