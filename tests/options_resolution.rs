//! Behaviour-driven tests for options resolution against the bundled data.

use std::cell::RefCell;

mod support;

use concord::{
    ErrorKind, IntlResult, IntlService, Negotiator, OptionsObject, PropertyBag, ResolvedOptions,
    SpecialBehaviors, Value,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use support::tags::{StepTag, StepTags};

#[derive(Default)]
struct OptionsWorld {
    requested: RefCell<Vec<String>>,
    options: RefCell<Option<OptionsObject>>,
    special: RefCell<SpecialBehaviors>,
    outcome: RefCell<Option<IntlResult<ResolvedOptions>>>,
    filtered: RefCell<Option<IntlResult<Vec<String>>>>,
}

#[fixture]
fn world() -> OptionsWorld {
    OptionsWorld::default()
}

fn requested(world: &OptionsWorld) -> Value {
    Value::from(
        world
            .requested
            .borrow()
            .iter()
            .cloned()
            .map(Value::from)
            .collect::<Vec<_>>(),
    )
}

fn resolved(world: &OptionsWorld) -> ResolvedOptions {
    let borrow = world.outcome.borrow();
    match borrow.as_ref() {
        Some(Ok(resolved)) => resolved.clone(),
        Some(Err(error)) => panic!("resolution should succeed, got: {error}"),
        None => panic!("options should have been resolved"),
    }
}

#[given("the requested locales are {locales}")]
fn set_requested(world: &OptionsWorld, locales: StepTags) {
    *world.requested.borrow_mut() = locales.into_inner();
}

#[given("the {property} option is set to {value}")]
fn set_option(world: &OptionsWorld, property: StepTag, value: StepTag) {
    let mut options = world.options.borrow_mut();
    let object = options.get_or_insert_with(OptionsObject::new);
    object.set(&property.into_inner(), Value::from(value.into_inner()));
}

#[given("options are required but omitted")]
fn require_options(world: &OptionsWorld) {
    world.options.borrow_mut().take();
    *world.special.borrow_mut() = SpecialBehaviors::REQUIRE_OPTIONS;
}

#[when("{service} options are resolved")]
#[expect(clippy::expect_used, reason = "step input is fixed by the feature file")]
fn resolve(world: &OptionsWorld, service: StepTag) {
    let parsed: IntlService = service
        .into_inner()
        .parse()
        .expect("the step should name an Intl service");
    let options = world
        .options
        .borrow()
        .clone()
        .map_or(Value::Undefined, Value::from);

    let outcome = Negotiator::bundled().resolve_options(
        parsed,
        &requested(world),
        options,
        *world.special.borrow(),
        |_| {},
    );
    world.outcome.borrow_mut().replace(outcome);
}

#[when("the bundled data filters the request")]
fn filter(world: &OptionsWorld) {
    let outcome = Negotiator::bundled().filter_locales(&requested(world), Value::Undefined);
    world.filtered.borrow_mut().replace(outcome);
}

#[then("the resolved locale is {locale}")]
fn assert_locale(world: &OptionsWorld, locale: StepTag) {
    assert_eq!(resolved(world).resolved_locale.locale, locale.into_inner());
}

#[then("the option {property} is {value}")]
fn assert_option(world: &OptionsWorld, property: StepTag, value: StepTag) {
    let options = resolved(world).options;

    assert_eq!(
        options.get(&property.into_inner()),
        Value::from(value.into_inner())
    );
}

#[then("resolution fails with a {kind} error")]
fn assert_failure(world: &OptionsWorld, kind: StepTag) {
    let expected = match kind.into_inner().as_str() {
        "range" => ErrorKind::Range,
        "type" => ErrorKind::Type,
        other => panic!("unknown error kind '{other}'"),
    };
    let borrow = world.outcome.borrow();
    let actual = match borrow.as_ref() {
        Some(Err(error)) => error.kind(),
        Some(Ok(resolved)) => panic!(
            "resolution should fail, resolved `{}`",
            resolved.resolved_locale.locale
        ),
        None => panic!("options should have been resolved"),
    };

    assert_eq!(actual, expected);
}

#[then("the filtered locales are {locales}")]
fn assert_filtered(world: &OptionsWorld, locales: StepTags) {
    let borrow = world.filtered.borrow();

    assert_eq!(borrow.as_ref(), Some(&Ok(locales.into_inner())));
}

#[scenario("tests/features/options_resolution.feature", index = 0)]
fn scenario_thai_calendar(world: OptionsWorld) {
    let _ = world;
}

#[scenario("tests/features/options_resolution.feature", index = 1)]
fn scenario_numbering_extension(world: OptionsWorld) {
    let _ = world;
}

#[scenario("tests/features/options_resolution.feature", index = 2)]
fn scenario_lookup_collation(world: OptionsWorld) {
    let _ = world;
}

#[scenario("tests/features/options_resolution.feature", index = 3)]
fn scenario_deprecated_language(world: OptionsWorld) {
    let _ = world;
}

#[scenario("tests/features/options_resolution.feature", index = 4)]
fn scenario_required_options(world: OptionsWorld) {
    let _ = world;
}

#[scenario("tests/features/options_resolution.feature", index = 5)]
fn scenario_malformed_calendar(world: OptionsWorld) {
    let _ = world;
}

#[scenario("tests/features/options_resolution.feature", index = 6)]
fn scenario_filtering(world: OptionsWorld) {
    let _ = world;
}
