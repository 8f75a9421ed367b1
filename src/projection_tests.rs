#[cfg(test)]
mod tests {
    use crate::clause::Clause;
    use crate::error::BuildError;
    use crate::join::{Join, JoinKind};
    use crate::projection::{Projection, SelectClause};
    use pretty_assertions::assert_eq;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn joins() -> Vec<Join> {
        vec![
            Join::new(JoinKind::Left, "Notes", "Id", "OrderId"),
            Join::new(JoinKind::Inner, "Customers", "CustomerId", "Id"),
        ]
    }

    #[test]
    fn all_without_joins() {
        let p = Projection::All;
        assert_eq!(SelectClause::new("Orders", &p).build().unwrap(), "SELECT o.*");
    }

    #[test]
    fn all_appends_join_aliases_in_join_order() {
        let p = Projection::All;
        let joins = joins();
        assert_eq!(
            SelectClause::new("Orders", &p)
                .with_joins(&joins)
                .build()
                .unwrap(),
            "SELECT o.*, c0.*, n1.*"
        );
    }

    #[test]
    fn count_is_alias_independent() {
        let p = Projection::Count;
        let joins = joins();
        assert_eq!(
            SelectClause::new("Orders", &p)
                .with_joins(&joins)
                .build()
                .unwrap(),
            "SELECT COUNT(*)"
        );
    }

    #[test]
    fn specific_qualifies_each_column() {
        let p = Projection::Specific(cols(&["Id", "Total", "CreatedAt"]));
        assert_eq!(
            SelectClause::new("Orders", &p).build().unwrap(),
            "SELECT o.Id,o.Total,o.CreatedAt"
        );
    }

    #[test]
    fn specific_ignores_joins() {
        let p = Projection::Specific(cols(&["Id"]));
        let joins = joins();
        assert_eq!(
            SelectClause::new("Orders", &p)
                .with_joins(&joins)
                .build()
                .unwrap(),
            "SELECT o.Id"
        );
    }

    #[test]
    fn specific_requires_columns() {
        let p = Projection::Specific(Vec::new());
        assert_eq!(
            SelectClause::new("Orders", &p).build(),
            Err(BuildError::MissingArgument("columns"))
        );
    }

    #[test]
    fn custom_without_columns_follows_all() {
        let p = Projection::Custom {
            expr: "1 AS One".to_string(),
            columns: Vec::new(),
        };
        let joins = joins();
        assert_eq!(
            SelectClause::new("Orders", &p).build().unwrap(),
            "SELECT 1 AS One, o.*"
        );
        assert_eq!(
            SelectClause::new("Orders", &p)
                .with_joins(&joins)
                .build()
                .unwrap(),
            "SELECT 1 AS One, o.*, c0.*, n1.*"
        );
    }

    #[test]
    fn custom_with_columns_follows_specific() {
        let p = Projection::Custom {
            expr: "1 AS One".to_string(),
            columns: cols(&["Id", "Total"]),
        };
        let joins = joins();
        assert_eq!(
            SelectClause::new("Orders", &p)
                .with_joins(&joins)
                .build()
                .unwrap(),
            "SELECT 1 AS One, o.Id,o.Total"
        );
    }

    #[test]
    fn custom_requires_expression() {
        let p = Projection::Custom {
            expr: "  ".to_string(),
            columns: Vec::new(),
        };
        assert_eq!(
            SelectClause::new("Orders", &p).build(),
            Err(BuildError::MissingArgument("custom expression"))
        );
    }

    #[test]
    fn select_requires_table() {
        let p = Projection::Count;
        assert_eq!(
            SelectClause::new("", &p).build(),
            Err(BuildError::MissingArgument("table"))
        );
    }
}
