use pylon_ast::{
    DefinitionSymbol, EnumSymbol, Identifier, Literal, NName, NamedAttribute, NamedBodyAtom,
    NamedBoundedLattice, NamedConstraint, NamedDefinition, NamedEnum, NamedEnumCase,
    NamedExpression, NamedHeadAtom, NamedPattern, NamedProgram, NamedTable, NamedType, QName,
    TableSymbol,
};
use pylon_filesystem::location::DUMMY_LOCATION;
use pylon_fx_hash::FxHashMap;
use pylon_hir::{ResolvedBodyAtom, ResolvedExpression, ResolvedPattern};
use pylon_interner::IdentifierInterner;
use pylon_name_resolution::resolve;

fn ident(interner: &mut IdentifierInterner, name: &str) -> Identifier {
    Identifier { location: DUMMY_LOCATION, symbol: interner.get_or_intern(name) }
}

fn qname(namespace: NName, interner: &mut IdentifierInterner, name: &str) -> QName {
    QName { namespace, ident: ident(interner, name), location: DUMMY_LOCATION }
}

/// S1: `N::f` exists, but `g` at the root refers to `f` unqualified. Root
/// fallback only ever reaches root *definitions*, and `N` is neither the
/// current namespace nor the root, so this is `UndefinedRef`.
#[test]
fn unqualified_reference_to_a_sibling_namespace_is_undefined() {
    let mut interner = IdentifierInterner::new();
    let n = NName(vec![interner.get_or_intern("N")]);
    let f_name = ident(&mut interner, "f");
    let g_name = ident(&mut interner, "g");
    let int_ty = NamedType::Ref(qname(NName::root(), &mut interner, "Int"));

    let f = NamedDefinition {
        symbol: DefinitionSymbol(0),
        name: f_name,
        type_parameters: Vec::new(),
        parameters: Vec::new(),
        return_type: int_ty.clone(),
        body: NamedExpression::Literal(Literal::Int32 { value: 42, location: DUMMY_LOCATION }),
        location: DUMMY_LOCATION,
    };

    let g = NamedDefinition {
        symbol: DefinitionSymbol(1),
        name: g_name,
        type_parameters: Vec::new(),
        parameters: Vec::new(),
        return_type: int_ty,
        body: NamedExpression::Ref(qname(NName::root(), &mut interner, "f")),
        location: DUMMY_LOCATION,
    };

    let mut program = NamedProgram::new();
    let mut n_defs = FxHashMap::default();
    n_defs.insert(f_name.symbol, f);
    program.definitions.insert(n.clone(), n_defs);

    let mut root_defs = FxHashMap::default();
    root_defs.insert(g_name.symbol, g);
    program.definitions.insert(NName::root(), root_defs);

    let validation = resolve(&program, &interner);

    assert!(!validation.is_success());
    assert_eq!(validation.diagnostics.diagnostics.len(), 1);
    assert_eq!(validation.diagnostics.diagnostics[0].code.as_deref(), Some("E101"));
}

/// S2: a tag name unique across the whole program resolves with no
/// qualifier at all, via the global-uniqueness shortcut (§4.1 step 1).
#[test]
fn globally_unique_tag_resolves_without_a_qualifier() {
    let mut interner = IdentifierInterner::new();
    let n = NName(vec![interner.get_or_intern("N")]);
    let e_name = ident(&mut interner, "E");
    let a_tag = ident(&mut interner, "A");
    let b_tag = ident(&mut interner, "B");
    let f_name = ident(&mut interner, "f");

    let e = NamedEnum {
        symbol: EnumSymbol(0),
        name: e_name,
        type_parameters: Vec::new(),
        cases: vec![
            NamedEnumCase { tag: a_tag, payload: NamedType::Unit },
            NamedEnumCase { tag: b_tag, payload: NamedType::Unit },
        ],
        declared_shape: NamedType::Enum(EnumSymbol(0)),
        location: DUMMY_LOCATION,
    };

    let f = NamedDefinition {
        symbol: DefinitionSymbol(0),
        name: f_name,
        type_parameters: Vec::new(),
        parameters: Vec::new(),
        return_type: NamedType::Enum(EnumSymbol(0)),
        body: NamedExpression::Tag {
            enum_qualifier: None,
            tag: a_tag,
            inner: Box::new(NamedExpression::Literal(Literal::Unit { location: DUMMY_LOCATION })),
            location: DUMMY_LOCATION,
        },
        location: DUMMY_LOCATION,
    };

    let mut program = NamedProgram::new();
    let mut enums = FxHashMap::default();
    enums.insert(e_name.symbol, e);
    program.enums.insert(n.clone(), enums);

    let mut defs = FxHashMap::default();
    defs.insert(f_name.symbol, f);
    program.definitions.insert(n.clone(), defs);

    let validation = resolve(&program, &interner);

    assert!(validation.is_success());
    assert_eq!(validation.diagnostics.diagnostics.len(), 0);

    let resolved_f = &validation.program.definitions[&n][&f_name.symbol];
    match &resolved_f.body {
        ResolvedExpression::Tag { enum_symbol, tag, .. } => {
            assert_eq!(*enum_symbol, EnumSymbol(0));
            assert_eq!(tag.symbol, a_tag.symbol);
        }
        other => panic!("expected a resolved Tag expression, got {other:?}"),
    }
}

/// S3: two sibling enums in the same namespace both own a tag `A`. With no
/// qualifier to disambiguate, this is `AmbiguousTag`, and the candidate
/// locations are attached as secondary labels.
#[test]
fn tag_shared_by_two_enums_in_the_same_namespace_is_ambiguous() {
    let mut interner = IdentifierInterner::new();
    let n = NName(vec![interner.get_or_intern("N")]);
    let e1_name = ident(&mut interner, "E1");
    let e2_name = ident(&mut interner, "E2");
    let a_tag = ident(&mut interner, "A");
    let f_name = ident(&mut interner, "f");

    let e1 = NamedEnum {
        symbol: EnumSymbol(0),
        name: e1_name,
        type_parameters: Vec::new(),
        cases: vec![NamedEnumCase { tag: a_tag, payload: NamedType::Unit }],
        declared_shape: NamedType::Enum(EnumSymbol(0)),
        location: DUMMY_LOCATION,
    };
    let e2 = NamedEnum {
        symbol: EnumSymbol(1),
        name: e2_name,
        type_parameters: Vec::new(),
        cases: vec![NamedEnumCase { tag: a_tag, payload: NamedType::Unit }],
        declared_shape: NamedType::Enum(EnumSymbol(1)),
        location: DUMMY_LOCATION,
    };

    let f = NamedDefinition {
        symbol: DefinitionSymbol(0),
        name: f_name,
        type_parameters: Vec::new(),
        parameters: Vec::new(),
        return_type: NamedType::Enum(EnumSymbol(0)),
        body: NamedExpression::Tag {
            enum_qualifier: None,
            tag: a_tag,
            inner: Box::new(NamedExpression::Literal(Literal::Unit { location: DUMMY_LOCATION })),
            location: DUMMY_LOCATION,
        },
        location: DUMMY_LOCATION,
    };

    let mut program = NamedProgram::new();
    let mut enums = FxHashMap::default();
    enums.insert(e1_name.symbol, e1);
    enums.insert(e2_name.symbol, e2);
    program.enums.insert(n.clone(), enums);

    let mut defs = FxHashMap::default();
    defs.insert(f_name.symbol, f);
    program.definitions.insert(n.clone(), defs);

    let validation = resolve(&program, &interner);

    assert!(!validation.is_success());
    assert_eq!(validation.diagnostics.diagnostics.len(), 1);
    let diagnostic = &validation.diagnostics.diagnostics[0];
    assert_eq!(diagnostic.code.as_deref(), Some("E106"));
    // One primary label at the use site, plus one secondary per candidate enum.
    assert_eq!(diagnostic.labels.len(), 3);
}

/// S4: the same ambiguous setup as above, but the use site spells out the
/// enum qualifier (`E1.A`), which disambiguates cleanly.
#[test]
fn qualified_tag_disambiguates_between_two_enums() {
    let mut interner = IdentifierInterner::new();
    let n = NName(vec![interner.get_or_intern("N")]);
    let e1_name = ident(&mut interner, "E1");
    let e2_name = ident(&mut interner, "E2");
    let a_tag = ident(&mut interner, "A");
    let f_name = ident(&mut interner, "f");

    let e1 = NamedEnum {
        symbol: EnumSymbol(0),
        name: e1_name,
        type_parameters: Vec::new(),
        cases: vec![NamedEnumCase { tag: a_tag, payload: NamedType::Unit }],
        declared_shape: NamedType::Enum(EnumSymbol(0)),
        location: DUMMY_LOCATION,
    };
    let e2 = NamedEnum {
        symbol: EnumSymbol(1),
        name: e2_name,
        type_parameters: Vec::new(),
        cases: vec![NamedEnumCase { tag: a_tag, payload: NamedType::Unit }],
        declared_shape: NamedType::Enum(EnumSymbol(1)),
        location: DUMMY_LOCATION,
    };

    let qualifier = QName { namespace: n.clone(), ident: e1_name, location: DUMMY_LOCATION };
    let f = NamedDefinition {
        symbol: DefinitionSymbol(0),
        name: f_name,
        type_parameters: Vec::new(),
        parameters: Vec::new(),
        return_type: NamedType::Enum(EnumSymbol(0)),
        body: NamedExpression::Tag {
            enum_qualifier: Some(qualifier),
            tag: a_tag,
            inner: Box::new(NamedExpression::Literal(Literal::Unit { location: DUMMY_LOCATION })),
            location: DUMMY_LOCATION,
        },
        location: DUMMY_LOCATION,
    };

    let mut program = NamedProgram::new();
    let mut enums = FxHashMap::default();
    enums.insert(e1_name.symbol, e1);
    enums.insert(e2_name.symbol, e2);
    program.enums.insert(n.clone(), enums);

    let mut defs = FxHashMap::default();
    defs.insert(f_name.symbol, f);
    program.definitions.insert(n.clone(), defs);

    let validation = resolve(&program, &interner);

    assert!(validation.is_success());
    assert_eq!(validation.diagnostics.diagnostics.len(), 0);

    let resolved_f = &validation.program.definitions[&n][&f_name.symbol];
    match &resolved_f.body {
        ResolvedExpression::Tag { enum_symbol, .. } => assert_eq!(*enum_symbol, EnumSymbol(0)),
        other => panic!("expected a resolved Tag expression, got {other:?}"),
    }
}

/// S5: `rel R(x: Int). R(1).` — the body atom's table symbol matches `R`'s
/// own symbol, and its one term is a plain `Int32` literal pattern.
#[test]
fn relation_fact_resolves_table_and_carries_its_literal_term() {
    let mut interner = IdentifierInterner::new();
    let r_name = ident(&mut interner, "R");
    let x_name = ident(&mut interner, "x");
    let int_ty = NamedType::Ref(qname(NName::root(), &mut interner, "Int"));

    let r = NamedTable::Relation {
        symbol: TableSymbol(0),
        name: r_name,
        attributes: vec![NamedAttribute { name: x_name, ty: int_ty }],
        location: DUMMY_LOCATION,
    };

    let fact = NamedConstraint {
        head: NamedHeadAtom::True,
        body: vec![NamedBodyAtom::Positive {
            table: qname(NName::root(), &mut interner, "R"),
            terms: vec![NamedPattern::Literal(Literal::Int32 { value: 1, location: DUMMY_LOCATION })],
            location: DUMMY_LOCATION,
        }],
        location: DUMMY_LOCATION,
    };

    let mut program = NamedProgram::new();
    let mut tables = FxHashMap::default();
    tables.insert(r_name.symbol, r);
    program.tables.insert(NName::root(), tables);
    program.constraints.insert(NName::root(), vec![fact]);

    let validation = resolve(&program, &interner);

    assert!(validation.is_success());
    assert_eq!(validation.diagnostics.diagnostics.len(), 0);

    let resolved_constraint = &validation.program.constraints[&NName::root()][0];
    match &resolved_constraint.body[0] {
        ResolvedBodyAtom::Positive { table, terms, .. } => {
            assert_eq!(*table, TableSymbol(0));
            assert_eq!(terms.len(), 1);
            assert!(matches!(terms[0], ResolvedPattern::Literal(Literal::Int32 { value: 1, .. })));
        }
        other => panic!("expected a resolved Positive body atom, got {other:?}"),
    }
}

/// S6: a lattice's carrier `L` names no primitive and no enum anywhere —
/// `UndefinedType` is reported for the lattice, but a sibling table `A`
/// still resolves independently (the driver walks each category
/// separately, per §5).
#[test]
fn undefined_lattice_carrier_does_not_block_a_sibling_table() {
    let mut interner = IdentifierInterner::new();
    let a_name = ident(&mut interner, "A");
    let carrier = NamedType::Ref(qname(NName::root(), &mut interner, "L"));

    let unit = || NamedExpression::Literal(Literal::Unit { location: DUMMY_LOCATION });
    let lattice = NamedBoundedLattice {
        carrier: carrier.clone(),
        bottom: unit(),
        top: unit(),
        leq: unit(),
        lub: unit(),
        glb: unit(),
        location: DUMMY_LOCATION,
    };

    let a = NamedTable::Relation {
        symbol: TableSymbol(0),
        name: a_name,
        attributes: Vec::new(),
        location: DUMMY_LOCATION,
    };

    let mut program = NamedProgram::new();
    program.lattices.insert(carrier, lattice);
    let mut tables = FxHashMap::default();
    tables.insert(a_name.symbol, a);
    program.tables.insert(NName::root(), tables);

    let validation = resolve(&program, &interner);

    assert!(!validation.is_success());
    assert_eq!(validation.diagnostics.diagnostics.len(), 1);
    assert_eq!(validation.diagnostics.diagnostics[0].code.as_deref(), Some("E104"));
    assert!(validation.program.lattices.is_empty());
    assert!(validation.program.tables_by_symbol.contains_key(&TableSymbol(0)));
}

/// Two sibling arguments in the same `Apply` each reference an undefined
/// name. Both must be reported — a sibling-list resolver that stops at the
/// first failure would silently drop the second (§5: "the multiset of
/// errors produced must be identical regardless of traversal order").
#[test]
fn two_undefined_arguments_in_one_apply_both_report_diagnostics() {
    let mut interner = IdentifierInterner::new();
    let f_name = ident(&mut interner, "f");
    let callee = qname(NName::root(), &mut interner, "callee");

    let f = NamedDefinition {
        symbol: DefinitionSymbol(0),
        name: f_name,
        type_parameters: Vec::new(),
        parameters: Vec::new(),
        return_type: NamedType::Unit,
        body: NamedExpression::Apply {
            function: Box::new(NamedExpression::Ref(callee)),
            arguments: vec![
                NamedExpression::Ref(qname(NName::root(), &mut interner, "missing_one")),
                NamedExpression::Ref(qname(NName::root(), &mut interner, "missing_two")),
            ],
            location: DUMMY_LOCATION,
        },
        location: DUMMY_LOCATION,
    };

    let mut program = NamedProgram::new();
    let mut defs = FxHashMap::default();
    defs.insert(f_name.symbol, f);
    program.definitions.insert(NName::root(), defs);

    let validation = resolve(&program, &interner);

    assert!(!validation.is_success());
    // The callee itself is also undefined, so three `UndefinedRef`
    // diagnostics in total: the callee, plus both arguments.
    assert_eq!(validation.diagnostics.diagnostics.len(), 3);
    assert!(validation.diagnostics.diagnostics.iter().all(|d| d.code.as_deref() == Some("E101")));
}
