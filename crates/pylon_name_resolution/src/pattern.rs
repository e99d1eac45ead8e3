//! The Pattern resolver (§4.3).

use pylon_ast::{NName, NamedPattern};
use pylon_diagnostics::Diagnostics;
use pylon_hir::ResolvedPattern;

use crate::{context::Resolver, util::collect_all};

impl Resolver<'_> {
    /// Walks a Named Pattern. Literals, wildcard, and variable patterns pass
    /// through unchanged; tuple patterns recurse on their elements; tag
    /// patterns invoke Tag lookup. Sub-walk and lookup failures accumulate
    /// independently before the final `Option` collapses them (§4.3).
    pub fn resolve_pattern(
        &self,
        current_ns: &NName,
        pattern: &NamedPattern,
        diagnostics: &mut Diagnostics,
    ) -> Option<ResolvedPattern> {
        match pattern {
            NamedPattern::Literal(literal) => Some(ResolvedPattern::Literal(literal.clone())),

            NamedPattern::Wild { location } => Some(ResolvedPattern::Wild(*location)),

            NamedPattern::Var { symbol, name, location } => {
                Some(ResolvedPattern::Var { symbol: *symbol, name: *name, location: *location })
            }

            NamedPattern::Tag { enum_qualifier, tag, inner, location } => {
                let enum_symbol = self.lookup_tag(current_ns, enum_qualifier.as_ref(), tag, *location, diagnostics);
                let inner = self.resolve_pattern(current_ns, inner, diagnostics);

                Some(ResolvedPattern::Tag {
                    enum_symbol: enum_symbol?,
                    tag: *tag,
                    inner: Box::new(inner?),
                    location: *location,
                })
            }

            NamedPattern::Tuple { elements, location } => {
                let elements = collect_all(elements.iter().map(|element| self.resolve_pattern(current_ns, element, diagnostics)));

                Some(ResolvedPattern::Tuple { elements: elements?, location: *location })
            }
        }
    }
}
