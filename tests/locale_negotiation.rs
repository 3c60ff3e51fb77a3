//! Behaviour-driven tests covering locale matching and extension negotiation.

use std::cell::RefCell;

mod support;

use concord::{
    ExtensionKey, LocaleKey, LocaleMatcher, LocaleOptions, Negotiator, NegotiatorConfig,
    ResolvedLocale, Value,
};
use concord_common::test_support::FakeLocaleData;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use support::tags::{StepTag, StepTags};

#[derive(Default)]
struct NegotiationWorld {
    data: RefCell<FakeLocaleData>,
    config: RefCell<NegotiatorConfig>,
    options: RefCell<LocaleOptions>,
    resolution: RefCell<Option<ResolvedLocale>>,
}

#[fixture]
fn world() -> NegotiationWorld {
    NegotiationWorld::default()
}

#[expect(clippy::expect_used, reason = "step input is fixed by the feature file")]
fn extension_key(value: &str) -> ExtensionKey {
    value
        .parse()
        .expect("the step should name a known extension key")
}

fn resolved(world: &NegotiationWorld) -> ResolvedLocale {
    let borrow = world.resolution.borrow();
    borrow.as_ref().map_or_else(
        || panic!("the locale should have been resolved"),
        ResolvedLocale::clone,
    )
}

#[given("the supported locales are {locales}")]
fn set_supported(world: &NegotiationWorld, locales: StepTags) {
    let tags = locales.as_strs();
    let default = tags.first().copied().unwrap_or("und");
    *world.data.borrow_mut() = FakeLocaleData::new(&tags, default);
}

#[given("every locale supports {key} values {values} defaulting to {default}")]
fn set_keyword(world: &NegotiationWorld, key: StepTag, values: StepTags, default: StepTag) {
    let extension = extension_key(&key.into_inner());
    let default_value = default.into_inner();
    let data = world.data.take().with_keyword_everywhere(
        extension,
        Some(default_value.as_str()),
        &values.as_strs(),
    );
    *world.data.borrow_mut() = data;
}

#[given("the locale matcher is {matcher}")]
#[expect(clippy::expect_used, reason = "step input is fixed by the feature file")]
fn set_matcher(world: &NegotiationWorld, matcher: StepTag) {
    let parsed: LocaleMatcher = matcher
        .into_inner()
        .parse()
        .expect("the step should name a locale matcher");
    world.options.borrow_mut().locale_matcher = parsed;
}

#[given("the {key} option is {value}")]
fn set_option(world: &NegotiationWorld, key: StepTag, value: StepTag) {
    let extension = extension_key(&key.into_inner());
    *world.options.borrow_mut().key_mut(extension) = Some(LocaleKey::Value(value.into_inner()));
}

#[given("the configuration sets the default locale to {locale}")]
#[expect(clippy::expect_used, reason = "the configuration text is built by the step")]
fn set_configured_default(world: &NegotiationWorld, locale: StepTag) {
    let source = format!("default_locale = \"{}\"\n", locale.into_inner());
    let config = NegotiatorConfig::load_with("concord", |namespace| {
        assert_eq!(namespace, "concord");
        NegotiatorConfig::parse(&source).expect("configuration should parse")
    });
    *world.config.borrow_mut() = config;
}

#[when("{locales} is resolved for keys {keys}")]
#[expect(clippy::expect_used, reason = "scenarios only request valid tags")]
fn resolve(world: &NegotiationWorld, locales: StepTags, keys: StepTags) {
    let data = world.data.borrow();
    let negotiator = Negotiator::with_config(&*data, world.config.borrow().clone());
    let requested = negotiator
        .canonicalize_locale_list(&Value::from(
            locales.into_inner().into_iter().map(Value::from).collect::<Vec<_>>(),
        ))
        .expect("requested locales should canonicalise");
    let relevant: Vec<ExtensionKey> = keys
        .into_inner()
        .into_iter()
        .map(|key| extension_key(&key))
        .collect();

    let resolution = negotiator.resolve_locale(&requested, &world.options.borrow(), &relevant);
    world.resolution.borrow_mut().replace(resolution);
}

#[then("the resolved locale is {locale}")]
fn assert_locale(world: &NegotiationWorld, locale: StepTag) {
    assert_eq!(resolved(world).locale, locale.into_inner());
}

#[then("the resolved value for {key} is {value}")]
fn assert_key(world: &NegotiationWorld, key: StepTag, value: StepTag) {
    let extension = extension_key(&key.into_inner());

    assert_eq!(
        resolved(world).key(extension),
        &LocaleKey::Value(value.into_inner())
    );
}

#[then("the internal identifier is {identifier}")]
fn assert_internal_identifier(world: &NegotiationWorld, identifier: StepTag) {
    assert_eq!(resolved(world).icu_locale, identifier.into_inner());
}

#[scenario("tests/features/locale_negotiation.feature", index = 0)]
fn scenario_lookup_prefix(world: NegotiationWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_negotiation.feature", index = 1)]
fn scenario_extension_precedence(world: NegotiationWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_negotiation.feature", index = 2)]
fn scenario_locale_defaults(world: NegotiationWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_negotiation.feature", index = 3)]
fn scenario_provider_default(world: NegotiationWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_negotiation.feature", index = 4)]
fn scenario_best_fit(world: NegotiationWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_negotiation.feature", index = 5)]
fn scenario_unsupported_configured_default(world: NegotiationWorld) {
    let _ = world;
}

#[scenario("tests/features/locale_negotiation.feature", index = 6)]
fn scenario_configured_default(world: NegotiationWorld) {
    let _ = world;
}
