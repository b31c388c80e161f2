use super::*;

#[test]
fn parse_defaults_to_dark() {
    assert_eq!(Theme::parse("light"), Theme::Light);
    assert_eq!(Theme::parse(" LIGHT "), Theme::Light);
    assert_eq!(Theme::parse("dark"), Theme::Dark);
    assert_eq!(Theme::parse(""), Theme::Dark);
    assert_eq!(Theme::parse("sepia"), Theme::Dark);
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn toggled_flips_and_round_trips() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn as_str_matches_persisted_values() {
    assert_eq!(Theme::parse(Theme::Light.as_str()), Theme::Light);
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Theme::Dark);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
