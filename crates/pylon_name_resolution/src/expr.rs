//! The Expression resolver (§4.4) — the largest single resolver by the
//! component-share table (§2).

use pylon_ast::{NName, NamedExpression};
use pylon_diagnostics::Diagnostics;
use pylon_hir::{ResolvedExpression, ResolvedMatchRule, ResolvedSwitchRule};

use crate::{context::Resolver, lookup::ReferenceTarget, util::collect_all};

impl Resolver<'_> {
    /// Walks a Named Expression (§4.4). Cases not mentioned in the spec's
    /// table (`Apply`, `Lambda`, `Unary`, `Binary`, `IfThenElse`, `Let`,
    /// `Tuple`) are structural recursion; literals, `Wild`, `Var`, and
    /// `UserError` pass through.
    pub fn resolve_expression(
        &self,
        current_ns: &NName,
        expression: &NamedExpression,
        diagnostics: &mut Diagnostics,
    ) -> Option<ResolvedExpression> {
        match expression {
            NamedExpression::Literal(literal) => Some(ResolvedExpression::Literal(literal.clone())),
            NamedExpression::Wild(location) => Some(ResolvedExpression::Wild(*location)),
            NamedExpression::UserError(location) => Some(ResolvedExpression::UserError(*location)),

            NamedExpression::Var { symbol, name, location } => {
                Some(ResolvedExpression::Var { symbol: *symbol, name: *name, location: *location })
            }

            NamedExpression::Ref(qname) => {
                match self.lookup_reference(current_ns, qname, diagnostics)? {
                    ReferenceTarget::Defn(symbol) => Some(ResolvedExpression::Ref(symbol, qname.location)),
                    ReferenceTarget::Hook(key) => Some(ResolvedExpression::Hook(key, qname.location)),
                }
            }

            NamedExpression::Tag { enum_qualifier, tag, inner, location } => {
                let enum_symbol = self.lookup_tag(current_ns, enum_qualifier.as_ref(), tag, *location, diagnostics);
                let inner = self.resolve_expression(current_ns, inner, diagnostics);

                Some(ResolvedExpression::Tag {
                    enum_symbol: enum_symbol?,
                    tag: *tag,
                    inner: Box::new(inner?),
                    location: *location,
                })
            }

            NamedExpression::Apply { function, arguments, location } => {
                let function = self.resolve_expression(current_ns, function, diagnostics);
                let arguments = self.resolve_expression_list(current_ns, arguments, diagnostics);

                Some(ResolvedExpression::Apply { function: Box::new(function?), arguments: arguments?, location: *location })
            }

            NamedExpression::Lambda { parameters, body, location } => {
                let parameters = self.resolve_parameter_list(current_ns, parameters, diagnostics);
                let body = self.resolve_expression(current_ns, body, diagnostics);

                Some(ResolvedExpression::Lambda { parameters: parameters?, body: Box::new(body?), location: *location })
            }

            NamedExpression::Unary { operator, operand, location } => {
                let operand = self.resolve_expression(current_ns, operand, diagnostics)?;
                Some(ResolvedExpression::Unary { operator: *operator, operand: Box::new(operand), location: *location })
            }

            NamedExpression::Binary { operator, lhs, rhs, location } => {
                let lhs = self.resolve_expression(current_ns, lhs, diagnostics);
                let rhs = self.resolve_expression(current_ns, rhs, diagnostics);

                Some(ResolvedExpression::Binary {
                    operator: *operator,
                    lhs: Box::new(lhs?),
                    rhs: Box::new(rhs?),
                    location: *location,
                })
            }

            NamedExpression::IfThenElse { condition, then_branch, else_branch, location } => {
                let condition = self.resolve_expression(current_ns, condition, diagnostics);
                let then_branch = self.resolve_expression(current_ns, then_branch, diagnostics);
                let else_branch = self.resolve_expression(current_ns, else_branch, diagnostics);

                Some(ResolvedExpression::IfThenElse {
                    condition: Box::new(condition?),
                    then_branch: Box::new(then_branch?),
                    else_branch: Box::new(else_branch?),
                    location: *location,
                })
            }

            NamedExpression::Let { pattern, value, body, location } => {
                let pattern = self.resolve_pattern(current_ns, pattern, diagnostics);
                let value = self.resolve_expression(current_ns, value, diagnostics);
                let body = self.resolve_expression(current_ns, body, diagnostics);

                Some(ResolvedExpression::Let {
                    pattern: pattern?,
                    value: Box::new(value?),
                    body: Box::new(body?),
                    location: *location,
                })
            }

            NamedExpression::Tuple { elements, location } => {
                let elements = self.resolve_expression_list(current_ns, elements, diagnostics)?;
                Some(ResolvedExpression::Tuple { elements, location: *location })
            }

            NamedExpression::Match { scrutinee, rules, location } => {
                let scrutinee = self.resolve_expression(current_ns, scrutinee, diagnostics);

                let rules = collect_all(rules.iter().map(|rule| {
                    let pattern = self.resolve_pattern(current_ns, &rule.pattern, diagnostics);
                    // `Some(None)` stands for "no guard, not a failure"; a guard
                    // that fails to resolve collapses to `None` here, same as
                    // any other failed sub-result, rather than short-circuiting
                    // before `body` below gets a chance to run.
                    let guard = match &rule.guard {
                        Some(guard) => self.resolve_expression(current_ns, guard, diagnostics).map(Some),
                        None => Some(None),
                    };
                    let body = self.resolve_expression(current_ns, &rule.body, diagnostics);
                    Some(ResolvedMatchRule { pattern: pattern?, guard: guard?, body: body? })
                }));

                Some(ResolvedExpression::Match { scrutinee: Box::new(scrutinee?), rules: rules?, location: *location })
            }

            NamedExpression::Switch { rules, location } => {
                let rules = collect_all(rules.iter().map(|rule| {
                    let condition = self.resolve_expression(current_ns, &rule.condition, diagnostics);
                    let body = self.resolve_expression(current_ns, &rule.body, diagnostics);
                    Some(ResolvedSwitchRule { condition: condition?, body: body? })
                }));

                Some(ResolvedExpression::Switch { rules: rules?, location: *location })
            }

            NamedExpression::Ascribe { expression, ty, location } => {
                let expression = self.resolve_expression(current_ns, expression, diagnostics);
                let ty = self.lookup_type(current_ns, ty, diagnostics);

                Some(ResolvedExpression::Ascribe { expression: Box::new(expression?), ty: ty?, location: *location })
            }

            NamedExpression::Existential { parameter, body, location } => {
                let parameter = self.resolve_formal_parameter(current_ns, parameter, diagnostics);
                let body = self.resolve_expression(current_ns, body, diagnostics);

                Some(ResolvedExpression::Existential { parameter: parameter?, body: Box::new(body?), location: *location })
            }

            NamedExpression::Universal { parameter, body, location } => {
                let parameter = self.resolve_formal_parameter(current_ns, parameter, diagnostics);
                let body = self.resolve_expression(current_ns, body, diagnostics);

                Some(ResolvedExpression::Universal { parameter: parameter?, body: Box::new(body?), location: *location })
            }

            NamedExpression::NativeConstructor { member, arguments, location } => {
                let arguments = self.resolve_expression_list(current_ns, arguments, diagnostics)?;
                Some(ResolvedExpression::NativeConstructor { member: member.clone(), arguments, location: *location })
            }

            NamedExpression::NativeMethod { member, arguments, location } => {
                let arguments = self.resolve_expression_list(current_ns, arguments, diagnostics)?;
                Some(ResolvedExpression::NativeMethod { member: member.clone(), arguments, location: *location })
            }
        }
    }

    /// Resolves every expression in `expressions`, accumulating failures
    /// from each independently before collapsing to a single `Option`.
    pub(crate) fn resolve_expression_list(
        &self,
        current_ns: &NName,
        expressions: &[NamedExpression],
        diagnostics: &mut Diagnostics,
    ) -> Option<Vec<ResolvedExpression>> {
        collect_all(expressions.iter().map(|expression| self.resolve_expression(current_ns, expression, diagnostics)))
    }
}
