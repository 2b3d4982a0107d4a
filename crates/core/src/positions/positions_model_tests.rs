//! Tests for the position record: derived values, validation and parsing.

#[cfg(test)]
mod tests {
    use crate::errors::{Error, ValidationError};
    use crate::positions::{
        parse_positions, validate_positions, InMemoryPositionProvider, Position,
        PositionPerformance, PositionProviderTrait,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    // ==================== Derived Values ====================

    #[test]
    fn test_derived_values() {
        let position = Position::new("AAPL", dec!(100), dec!(150), dec!(175));
        assert_eq!(position.total_value(), dec!(17500));
        assert_eq!(position.total_cost(), dec!(15000));
        assert_eq!(position.gain_loss(), dec!(2500));
        assert_eq!(position.gain_loss_percent().round_dp(2), dec!(16.67));
    }

    #[test]
    fn test_zero_cost_gain_percent_is_zero() {
        let position = Position::new("GIFT", dec!(10), Decimal::ZERO, dec!(5));
        assert_eq!(position.total_cost(), Decimal::ZERO);
        assert_eq!(position.gain_loss(), dec!(50));
        assert_eq!(position.gain_loss_percent(), Decimal::ZERO);
    }

    #[test]
    fn test_annual_income_defaults_to_zero_without_dividend() {
        let plain = Position::new("BRK.B", dec!(10), dec!(300), dec!(400));
        assert_eq!(plain.annual_income(), Decimal::ZERO);

        let payer = Position::new("KO", dec!(40), dec!(55), dec!(60)).with_dividend(dec!(1.84));
        assert_eq!(payer.annual_income(), dec!(73.6));
    }

    #[test]
    fn test_sector_or_unknown() {
        let missing = Position::new("X", dec!(1), dec!(1), dec!(1));
        assert_eq!(missing.sector_or_unknown(), "Unknown");

        let blank = Position::new("X", dec!(1), dec!(1), dec!(1)).with_sector("   ");
        assert_eq!(blank.sector_or_unknown(), "Unknown");

        let tech = Position::new("X", dec!(1), dec!(1), dec!(1)).with_sector("Technology");
        assert_eq!(tech.sector_or_unknown(), "Technology");
    }

    #[test]
    fn test_position_performance_view() {
        let position = Position::new("MSFT", dec!(50), dec!(280), dec!(320)).with_sector("Tech");
        let view = PositionPerformance::from(&position);
        assert_eq!(view.symbol, "MSFT");
        assert_eq!(view.sector, "Tech");
        assert_eq!(view.total_value, dec!(16000));
        assert_eq!(view.total_cost, dec!(14000));
        assert_eq!(view.gain_loss, dec!(2000));
    }

    // ==================== Validation ====================

    #[test]
    fn test_validate_rejects_empty_symbol() {
        let position = Position::new("  ", dec!(1), dec!(1), dec!(1));
        match position.validate() {
            Err(Error::Validation(ValidationError::MissingField(field))) => {
                assert_eq!(field, "symbol")
            }
            other => panic!("expected missing symbol, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_shares() {
        let position = Position::new("T", dec!(-3), dec!(20), dec!(18));
        match position.validate() {
            Err(Error::Validation(ValidationError::NegativeValue { field, symbol, .. })) => {
                assert_eq!(field, "shares");
                assert_eq!(symbol, "T");
            }
            other => panic!("expected negative value error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_dividend() {
        let position = Position::new("T", dec!(3), dec!(20), dec!(18)).with_dividend(dec!(-1));
        assert!(position.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_zero_values() {
        let position = Position::new("CASH", Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);
        assert!(position.validate().is_ok());
        assert!(validate_positions(&[]).is_ok());
    }

    // ==================== Parsing ====================

    #[test]
    fn test_parse_positions_defaults_missing_fields() {
        let json = r#"[
            {"symbol": "AAPL", "shares": 100, "averageCost": 150, "currentPrice": 175},
            {"symbol": "O", "shares": 20, "currentPrice": 55.5, "annualDividend": 3.08, "sector": "Real Estate"}
        ]"#;
        let positions = parse_positions(json).unwrap();
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].sector, None);
        assert_eq!(positions[0].currency, "USD");
        assert_eq!(positions[0].annual_dividend, None);
        assert_eq!(positions[1].average_cost, Decimal::ZERO);
        assert_eq!(positions[1].annual_dividend, Some(dec!(3.08)));
        assert_eq!(positions[1].sector.as_deref(), Some("Real Estate"));
    }

    #[test]
    fn test_parse_positions_rejects_non_array() {
        let err = parse_positions(r#"{"symbol": "AAPL"}"#).unwrap_err();
        match err {
            Error::Validation(ValidationError::Malformed(msg)) => {
                assert!(msg.contains("an object"), "message was {}", msg)
            }
            other => panic!("expected malformed error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_positions_rejects_wrong_shape() {
        let err = parse_positions(r#"[{"symbol": "AAPL", "shares": "lots"}]"#).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::Malformed(_))
        ));

        let err = parse_positions("not json").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_positions_rejects_invalid_entry() {
        let json = r#"[{"symbol": "AAPL", "shares": -1, "averageCost": 1, "currentPrice": 1}]"#;
        assert!(matches!(
            parse_positions(json),
            Err(Error::Validation(ValidationError::NegativeValue { .. }))
        ));
    }

    #[test]
    fn test_parse_positions_rejects_value_beyond_decimal_range() {
        let json = r#"[{"symbol":"BIG","shares":1e15,"averageCost":1,"currentPrice":1e15}]"#;
        let err = parse_positions(json).unwrap_err();
        assert!(matches!(err, Error::Calculation(_)));
        assert!(err.to_string().contains("BIG"));
    }

    #[test]
    fn test_validate_positions_rejects_overflowing_totals() {
        // Each value fits on its own, the portfolio total does not
        let half = vec![
            Position::new("A", dec!(100000000000000), dec!(1), dec!(500000000000000)),
            Position::new("B", dec!(100000000000000), dec!(1), dec!(500000000000000)),
        ];
        assert!(validate_positions(&half[..1]).is_ok());
        assert!(matches!(
            validate_positions(&half),
            Err(Error::Calculation(_))
        ));

        let income = vec![Position::new("DIV", dec!(1000000000000000), dec!(1), dec!(1))
            .with_dividend(dec!(1000000000000000))];
        assert!(matches!(
            validate_positions(&income),
            Err(Error::Calculation(_))
        ));
    }

    // ==================== In-memory Provider ====================

    #[tokio::test]
    async fn test_in_memory_provider_replace_keeps_old_list_on_error() {
        let provider =
            InMemoryPositionProvider::new(vec![Position::new("VZ", dec!(10), dec!(40), dec!(38))])
                .unwrap();

        let bad = vec![Position::new("", dec!(1), dec!(1), dec!(1))];
        assert!(provider.replace_positions(bad).is_err());
        let stored = provider.get_positions().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].symbol, "VZ");

        let count = provider
            .replace_positions(vec![
                Position::new("PEP", dec!(5), dec!(150), dec!(170)),
                Position::new("JNJ", dec!(8), dec!(160), dec!(155)),
            ])
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(provider.get_positions().await.unwrap()[1].symbol, "JNJ");
    }
}
