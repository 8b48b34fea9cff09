use super::*;

// =============================================================
// format_money_input
// =============================================================

#[test]
fn input_digits_are_read_as_cents() {
    assert_eq!(format_money_input("123456", EmptyAmount::Zero), "1234.56");
    assert_eq!(format_money_input("100", EmptyAmount::Zero), "1.00");
}

#[test]
fn input_short_digit_strings_pad_to_two_decimals() {
    assert_eq!(format_money_input("5", EmptyAmount::Zero), "0.05");
    assert_eq!(format_money_input("42", EmptyAmount::Zero), "0.42");
}

#[test]
fn input_strips_everything_but_ascii_digits() {
    assert_eq!(format_money_input("R$ 1.234,56", EmptyAmount::Zero), "1234.56");
    assert_eq!(format_money_input("-12a3", EmptyAmount::Zero), "1.23");
    assert_eq!(format_money_input("١٢٣", EmptyAmount::Zero), "0.00");
}

#[test]
fn input_leading_zeros_do_not_survive() {
    assert_eq!(format_money_input("0001", EmptyAmount::Zero), "0.01");
    assert_eq!(format_money_input("000", EmptyAmount::Zero), "0.00");
    assert_eq!(format_money_input("01.50", EmptyAmount::Zero), "1.50");
}

#[test]
fn input_retyping_the_formatted_value_is_stable_after_one_more_digit() {
    let first = format_money_input("12", EmptyAmount::Zero);
    assert_eq!(first, "0.12");
    let second = format_money_input(&format!("{first}3"), EmptyAmount::Zero);
    assert_eq!(second, "1.23");
}

#[test]
fn input_long_digit_strings_stay_exact() {
    assert_eq!(
        format_money_input("123456789012345678901", EmptyAmount::Zero),
        "1234567890123456789.01"
    );
}

#[test]
fn input_empty_follows_policy() {
    assert_eq!(format_money_input("", EmptyAmount::Zero), "0.00");
    assert_eq!(format_money_input("abc", EmptyAmount::Zero), "0.00");
    assert_eq!(format_money_input("", EmptyAmount::Nan), "NaN");
    assert_eq!(format_money_input("R$", EmptyAmount::Nan), "NaN");
}

#[test]
fn field_kind_accepts_inputs_and_textareas() {
    assert_eq!(FieldKind::from_tag("INPUT"), Some(FieldKind::Input));
    assert_eq!(FieldKind::from_tag("input"), Some(FieldKind::Input));
    assert_eq!(FieldKind::from_tag("TEXTAREA"), Some(FieldKind::TextArea));
    assert_eq!(FieldKind::from_tag("SPAN"), None);
    assert_eq!(FieldKind::from_tag("SELECT"), None);
}

#[test]
fn empty_amount_defaults_to_zero() {
    assert_eq!(EmptyAmount::default(), EmptyAmount::Zero);
}

// =============================================================
// format_money
// =============================================================

#[test]
fn money_brl_uses_pt_br_grouping_and_decimal_comma() {
    assert_eq!(format_money(1234.5, "BRL").as_deref(), Ok("R$\u{a0}1.234,50"));
}

#[test]
fn money_small_and_zero_amounts() {
    assert_eq!(format_money(0.0, "BRL").as_deref(), Ok("R$\u{a0}0,00"));
    assert_eq!(format_money(0.07, "BRL").as_deref(), Ok("R$\u{a0}0,07"));
    assert_eq!(format_money(999.999, "BRL").as_deref(), Ok("R$\u{a0}1.000,00"));
}

#[test]
fn money_groups_every_three_digits() {
    assert_eq!(format_money(1_234_567.89, "BRL").as_deref(), Ok("R$\u{a0}1.234.567,89"));
    assert_eq!(format_money(100_000.0, "BRL").as_deref(), Ok("R$\u{a0}100.000,00"));
}

#[test]
fn money_negative_sign_precedes_symbol() {
    assert_eq!(format_money(-10.0, "BRL").as_deref(), Ok("-R$\u{a0}10,00"));
}

#[test]
fn money_rounds_half_away_from_zero() {
    assert_eq!(format_money(0.125, "BRL").as_deref(), Ok("R$\u{a0}0,13"));
    assert_eq!(format_money(-0.125, "BRL").as_deref(), Ok("-R$\u{a0}0,13"));
}

#[test]
fn money_rounds_the_shortest_decimal_form() {
    assert_eq!(format_money(1.005, "BRL").as_deref(), Ok("R$\u{a0}1,01"));
    assert_eq!(format_money(0.285, "BRL").as_deref(), Ok("R$\u{a0}0,29"));
    assert_eq!(format_money(2.675, "BRL").as_deref(), Ok("R$\u{a0}2,68"));
    assert_eq!(format_money(-1.005, "BRL").as_deref(), Ok("-R$\u{a0}1,01"));
}

#[test]
fn money_rounding_carries_into_new_digit() {
    assert_eq!(format_money(9.995, "BRL").as_deref(), Ok("R$\u{a0}10,00"));
    assert_eq!(format_money(999_999.999, "BRL").as_deref(), Ok("R$\u{a0}1.000.000,00"));
}

#[test]
fn money_large_and_tiny_values_avoid_exponent_form() {
    assert_eq!(format_money(1e21, "BRL").as_deref(), Ok("R$\u{a0}1.000.000.000.000.000.000.000,00"));
    assert_eq!(format_money(1e-7, "BRL").as_deref(), Ok("R$\u{a0}0,00"));
}

#[test]
fn money_zero_decimal_currencies() {
    assert_eq!(format_money(1234.5, "CLP").as_deref(), Ok("CLP\u{a0}1.235"));
    assert_eq!(format_money(1234.5, "KRW").as_deref(), Ok("₩\u{a0}1.235"));
    assert_eq!(format_money(1234.4, "ISK").as_deref(), Ok("ISK\u{a0}1.234"));
}

#[test]
fn money_three_decimal_currencies() {
    assert_eq!(format_money(1234.5, "KWD").as_deref(), Ok("KWD\u{a0}1.234,500"));
    assert_eq!(format_money(0.0125, "BHD").as_deref(), Ok("BHD\u{a0}0,013"));
}

#[test]
fn money_known_foreign_symbols() {
    assert_eq!(format_money(5.0, "USD").as_deref(), Ok("US$\u{a0}5,00"));
    assert_eq!(format_money(5.0, "EUR").as_deref(), Ok("€\u{a0}5,00"));
    assert_eq!(format_money(5.0, "GBP").as_deref(), Ok("£\u{a0}5,00"));
}

#[test]
fn money_yen_has_no_fraction_digits() {
    assert_eq!(format_money(1234.5, "JPY").as_deref(), Ok("JP¥\u{a0}1.235"));
}

#[test]
fn money_code_is_case_insensitive() {
    assert_eq!(format_money(1.0, "brl"), format_money(1.0, "BRL"));
}

#[test]
fn money_unknown_code_displays_as_itself() {
    assert_eq!(format_money(2.5, "chf").as_deref(), Ok("CHF\u{a0}2,50"));
}

#[test]
fn money_rejects_malformed_codes() {
    for bad in ["", "BR", "REAL", "B1L", "R$ "] {
        assert_eq!(format_money(1.0, bad), Err(MoneyError::InvalidCurrency(bad.to_owned())));
    }
}

#[test]
fn money_non_finite_values() {
    assert_eq!(format_money(f64::NAN, "BRL").as_deref(), Ok("R$\u{a0}NaN"));
    assert_eq!(format_money(f64::INFINITY, "BRL").as_deref(), Ok("R$\u{a0}∞"));
    assert_eq!(format_money(f64::NEG_INFINITY, "BRL").as_deref(), Ok("-R$\u{a0}∞"));
}

#[test]
fn currency_shorthand_matches_brl() {
    assert_eq!(Ok(format_currency(1234.5)), format_money(1234.5, DEFAULT_CURRENCY));
}
