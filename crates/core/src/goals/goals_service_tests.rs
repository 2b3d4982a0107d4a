#[cfg(test)]
mod tests {
    use crate::errors::{Error, ValidationError};
    use crate::goals::{goal_progress, parse_goals, Goal, GoalKind, GoalService, GoalServiceTrait};
    use crate::portfolio::PortfolioService;
    use crate::positions::{InMemoryPositionProvider, Position};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn goal(id: &str, kind: GoalKind, target: Decimal) -> Goal {
        Goal {
            id: id.to_string(),
            title: format!("Goal {}", id),
            description: None,
            kind,
            target_amount: target,
        }
    }

    fn positions() -> Vec<Position> {
        vec![
            Position::new("SCHD", dec!(200), dec!(70), dec!(80)).with_dividend(dec!(2.70)),
            Position::new("NVDA", dec!(10), dec!(400), dec!(900)),
        ]
    }

    #[test]
    fn test_value_goal_in_progress() {
        // value = 16000 + 9000
        let progress = goal_progress(&goal("1", GoalKind::PortfolioValue, dec!(100000)), &positions());
        assert_eq!(progress.current_amount, dec!(25000));
        assert_eq!(progress.remaining_amount, dec!(75000));
        assert_eq!(progress.percent_complete, dec!(25));
        assert!(!progress.is_achieved);
    }

    #[test]
    fn test_income_goal_achieved_is_capped() {
        // income = 540
        let progress = goal_progress(&goal("2", GoalKind::AnnualIncome, dec!(500)), &positions());
        assert_eq!(progress.current_amount, dec!(540));
        assert_eq!(progress.remaining_amount, Decimal::ZERO);
        assert_eq!(progress.percent_complete, dec!(100));
        assert!(progress.is_achieved);
    }

    #[test]
    fn test_zero_target_goal() {
        let progress = goal_progress(&goal("3", GoalKind::PortfolioValue, Decimal::ZERO), &[]);
        assert_eq!(progress.percent_complete, Decimal::ZERO);
        assert!(progress.is_achieved);
    }

    #[test]
    fn test_goal_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&GoalKind::AnnualIncome).unwrap(),
            "\"ANNUAL_INCOME\""
        );
        let parsed: Goal =
            serde_json::from_str(r#"{"id":"g","title":"Retire","description":null,"targetAmount":1000}"#)
                .unwrap();
        assert_eq!(parsed.kind, GoalKind::PortfolioValue);
        assert_eq!(parsed.target_amount, dec!(1000));
    }

    #[tokio::test]
    async fn test_service_evaluates_in_order() {
        let provider = Arc::new(InMemoryPositionProvider::new(positions()).unwrap());
        let portfolio_service = Arc::new(PortfolioService::new(provider));
        let service = GoalService::new(portfolio_service);

        let goals = vec![
            goal("income", GoalKind::AnnualIncome, dec!(1080)),
            goal("value", GoalKind::PortfolioValue, dec!(50000)),
        ];
        let results = service.evaluate_goals(&goals).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].goal_id, "income");
        assert_eq!(results[0].percent_complete, dec!(50));
        assert_eq!(results[1].goal_id, "value");
        assert_eq!(results[1].percent_complete, dec!(50));
    }

    #[tokio::test]
    async fn test_service_rejects_invalid_goal() {
        let provider = Arc::new(InMemoryPositionProvider::default());
        let service = GoalService::new(Arc::new(PortfolioService::new(provider)));

        let mut bad = goal("neg", GoalKind::PortfolioValue, dec!(-1));
        let err = service.evaluate_goals(&[bad.clone()]).await.unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::InvalidInput(_))));

        bad.target_amount = dec!(10);
        bad.title = "  ".to_string();
        let err = service.evaluate_goals(&[bad]).await.unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::MissingField(_))));
    }

    #[test]
    fn test_parse_goals_reads_array() {
        let goals = parse_goals(
            r#"[{"id":"g1","title":"Income","kind":"ANNUAL_INCOME","targetAmount":1200}]"#,
        )
        .unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].kind, GoalKind::AnnualIncome);
        assert_eq!(goals[0].target_amount, dec!(1200));
    }

    #[test]
    fn test_parse_goals_rejects_malformed_body() {
        let missing_target = parse_goals(r#"[{"id":"g1","title":"Value"}]"#).unwrap_err();
        assert!(matches!(
            missing_target,
            Error::Validation(ValidationError::Malformed(_))
        ));

        let not_array = parse_goals(r#"{"id":"g1"}"#).unwrap_err();
        assert!(matches!(
            not_array,
            Error::Validation(ValidationError::Malformed(_))
        ));

        let negative =
            parse_goals(r#"[{"id":"g1","title":"Value","targetAmount":-5}]"#).unwrap_err();
        assert!(matches!(
            negative,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
    }
}
