//! The four lookup primitives (§4.1): Reference, Table, Tag, and Type
//! lookup. Pure functions over the Named Program — the only side effect is
//! pushing to the `Diagnostics` accumulator on failure.

use pylon_ast::{DefinitionSymbol, EnumSymbol, HookKey, Identifier, NName, QName, TableSymbol};
use pylon_diagnostics::Diagnostics;
use pylon_filesystem::location::{source_order_key, Location};
use pylon_hir::{Kind, Type};

use crate::{context::Resolver, diagnostics::ResolutionError, util::collect_all};

/// The target a Reference lookup resolves to: a user-defined definition, or
/// a host-provided hook (§4.1 "Reference lookup").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceTarget {
    Defn(DefinitionSymbol),
    Hook(HookKey),
}

/// Maps an unqualified primitive type name to its `Type`, collapsing the
/// unsized aliases (§4.1: "`Float` and `Int` map to `Float64` and `Int32`
/// respectively").
#[must_use]
pub fn primitive_type_from_name(name: &str) -> Option<Type> {
    Some(match name {
        "Unit" => Type::Unit,
        "Bool" => Type::Bool,
        "Char" => Type::Char,
        "Float" | "Float64" => Type::Float64,
        "Float32" => Type::Float32,
        "Int" | "Int32" => Type::Int32,
        "Int8" => Type::Int8,
        "Int16" => Type::Int16,
        "Int64" => Type::Int64,
        "BigInt" => Type::BigInt,
        "Str" => Type::Str,
        "Native" => Type::Native,
        _ => return None,
    })
}

impl Resolver<'_> {
    /// Reference lookup (§4.1).
    pub fn lookup_reference(
        &self,
        current_ns: &NName,
        qname: &QName,
        diagnostics: &mut Diagnostics,
    ) -> Option<ReferenceTarget> {
        let name = qname.ident.symbol;
        let search_ns = if qname.is_qualified() { &qname.namespace } else { current_ns };

        let defn = self.program.definitions.get(search_ns).and_then(|by_name| by_name.get(&name));
        let hook_key = HookKey { namespace: search_ns.clone(), name };
        let hook = self.program.hooks.get(&hook_key);

        match (defn, hook) {
            (Some(definition), None) => return Some(ReferenceTarget::Defn(definition.symbol)),
            (None, Some(_)) => return Some(ReferenceTarget::Hook(hook_key)),
            (Some(_), Some(_)) => {
                diagnostics.add_diagnostic(ResolutionError::AmbiguousRef {
                    qname: qname.clone(),
                    current_ns: current_ns.clone(),
                });
                return None;
            }
            (None, None) => {}
        }

        // Root fallback applies only to unqualified references, and only
        // against root *definitions* — a hook is never consulted at root
        // (§4.1: "If neither is found, consult the root namespace
        // definitions").
        if !qname.is_qualified() {
            if let Some(definition) = self.program.definitions.get(&NName::root()).and_then(|by_name| by_name.get(&name)) {
                return Some(ReferenceTarget::Defn(definition.symbol));
            }
        }

        diagnostics.add_diagnostic(ResolutionError::UndefinedRef {
            qname: qname.clone(),
            current_ns: current_ns.clone(),
        });
        None
    }

    /// Table lookup (§4.1): no hook shadowing, no root fallback.
    pub fn lookup_table(
        &self,
        current_ns: &NName,
        qname: &QName,
        diagnostics: &mut Diagnostics,
    ) -> Option<TableSymbol> {
        let search_ns = if qname.is_qualified() { &qname.namespace } else { current_ns };

        if let Some(table) = self.program.tables.get(search_ns).and_then(|by_name| by_name.get(&qname.ident.symbol)) {
            return Some(table.symbol());
        }

        diagnostics.add_diagnostic(ResolutionError::UndefinedTable {
            qname: qname.clone(),
            current_ns: current_ns.clone(),
        });
        None
    }

    /// Tag lookup (§4.1): the hardest of the four. `enum_qualifier` is the
    /// optional enum name a tag was written with, e.g. the `E` in `E.A`.
    pub fn lookup_tag(
        &self,
        current_ns: &NName,
        enum_qualifier: Option<&QName>,
        tag: &Identifier,
        use_location: Location,
        diagnostics: &mut Diagnostics,
    ) -> Option<EnumSymbol> {
        let tag_name = tag.symbol;
        let owns_tag = |enum_decl: &&pylon_ast::NamedEnum| enum_decl.cases.iter().any(|case| case.tag.symbol == tag_name);

        // Step 1: a program-wide unique match needs no qualifier at all.
        let global_matches: Vec<_> = self
            .program
            .enums
            .values()
            .flat_map(|by_name| by_name.values())
            .filter(owns_tag)
            .collect();

        if let [only] = global_matches.as_slice() {
            return Some(only.symbol);
        }

        // Step 2: narrow to the qualifier's namespace, or the current one.
        let scope_ns = match enum_qualifier {
            Some(qname) if qname.is_qualified() => qname.namespace.clone(),
            _ => current_ns.clone(),
        };

        let mut scoped_matches: Vec<_> = self
            .program
            .enums
            .get(&scope_ns)
            .into_iter()
            .flat_map(|by_name| by_name.values())
            .filter(owns_tag)
            .collect();

        if let [only] = scoped_matches.as_slice() {
            return Some(only.symbol);
        }

        if scoped_matches.is_empty() {
            diagnostics.add_diagnostic(ResolutionError::UndefinedTag {
                tag: *tag,
                current_ns: current_ns.clone(),
                location: use_location,
            });
            return None;
        }

        match enum_qualifier {
            None => {
                let mut candidates: Vec<Location> = scoped_matches.iter().map(|e| e.location).collect();
                candidates.sort_by_key(|&location| source_order_key(location));
                diagnostics.add_diagnostic(ResolutionError::AmbiguousTag {
                    tag: *tag,
                    current_ns: current_ns.clone(),
                    candidates,
                    location: use_location,
                });
                None
            }
            Some(qname) => {
                scoped_matches.retain(|e| e.name.symbol == qname.ident.symbol);
                if let [only] = scoped_matches.as_slice() {
                    Some(only.symbol)
                } else {
                    diagnostics.add_diagnostic(ResolutionError::UndefinedTag {
                        tag: *tag,
                        current_ns: current_ns.clone(),
                        location: use_location,
                    });
                    None
                }
            }
        }
    }

    /// Type lookup (§4.1): recursively resolves a Named Type to a canonical
    /// [`Type`].
    pub fn lookup_type(
        &self,
        current_ns: &NName,
        ty: &pylon_ast::NamedType,
        diagnostics: &mut Diagnostics,
    ) -> Option<Type> {
        use pylon_ast::NamedType;

        match ty {
            NamedType::Var(tv) => Some(Type::Var(*tv)),
            NamedType::Unit => Some(Type::Unit),
            NamedType::Enum(sym) => Some(Type::Enum(*sym, Kind::Star)),

            NamedType::Ref(qname) => self.lookup_type_ref(current_ns, qname, diagnostics),

            NamedType::Tuple(elements) => {
                let resolved = collect_all(elements.iter().map(|element| self.lookup_type(current_ns, element, diagnostics)));
                resolved.map(Type::Tuple)
            }

            NamedType::Arrow(parameters, return_type) => {
                let parameters_resolved =
                    collect_all(parameters.iter().map(|parameter| self.lookup_type(current_ns, parameter, diagnostics)));
                let return_resolved = self.lookup_type(current_ns, return_type, diagnostics);

                match (parameters_resolved, return_resolved) {
                    (Some(parameters), Some(return_type)) => Some(Type::Arrow(parameters, Box::new(return_type))),
                    _ => None,
                }
            }

            NamedType::Apply(base, arguments) => {
                let base_resolved = self.lookup_type(current_ns, base, diagnostics);
                let arguments_resolved =
                    collect_all(arguments.iter().map(|argument| self.lookup_type(current_ns, argument, diagnostics)));

                match (base_resolved, arguments_resolved) {
                    (Some(base), Some(arguments)) => Some(Type::Apply(Box::new(base), arguments)),
                    _ => None,
                }
            }
        }
    }

    fn lookup_type_ref(&self, current_ns: &NName, qname: &QName, diagnostics: &mut Diagnostics) -> Option<Type> {
        if !qname.is_qualified() {
            if let Some(name) = self.identifiers.resolve(qname.ident.symbol) {
                if let Some(primitive) = primitive_type_from_name(name) {
                    return Some(primitive);
                }
            }
        }

        let search_ns = if qname.is_qualified() { &qname.namespace } else { current_ns };
        if let Some(enum_decl) = self.program.enums.get(search_ns).and_then(|by_name| by_name.get(&qname.ident.symbol)) {
            return Some(Type::Enum(enum_decl.symbol, Kind::Star));
        }

        if !qname.is_qualified() {
            if let Some(enum_decl) = self.program.enums.get(&NName::root()).and_then(|by_name| by_name.get(&qname.ident.symbol)) {
                return Some(Type::Enum(enum_decl.symbol, Kind::Star));
            }
        }

        diagnostics.add_diagnostic(ResolutionError::UndefinedType {
            qname: qname.clone(),
            current_ns: current_ns.clone(),
        });
        None
    }
}
