#[cfg(test)]
mod tests {
    use crate::clause::Clause;
    use crate::error::BuildError;
    use crate::filter::{Filter, Filters, WhereClause};
    use crate::value::SqlValue;
    use crate::valuer::{SqlValuer, ValuerError};
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    #[derive(Debug, Clone)]
    struct Fixed(i64);

    impl SqlValuer for Fixed {
        fn value(&self) -> Result<SqlValue, ValuerError> {
            Ok(SqlValue::I64(self.0))
        }
    }

    #[derive(Debug, Clone)]
    struct Broken;

    impl SqlValuer for Broken {
        fn value(&self) -> Result<SqlValue, ValuerError> {
            Err(ValuerError("boom".to_string()))
        }
    }

    fn build(table: &str, filters: &Filters) -> Result<String, BuildError> {
        WhereClause::new(table, filters).build()
    }

    #[test]
    fn placeholder_filters() {
        let filters = Filters {
            primary: Some(Filter::placeholder("TestCol")),
            secondary: vec![
                Filter::placeholder("TestCol2"),
                Filter::placeholder("TestCol3"),
            ],
        };
        assert_eq!(
            build("TestTable", &filters).unwrap(),
            " WHERE t.TestCol = @TestCol AND t.TestCol2 = @TestCol2 AND t.TestCol3 = @TestCol3"
        );
    }

    #[test]
    fn literal_filters_are_inlined_verbatim() {
        let filters = Filters {
            primary: Some(Filter::literal("Id", 7_u32)),
            secondary: vec![
                Filter::literal("Name", "'alice'"),
                Filter::literal("Active", true),
                Filter::literal("DeletedAt", None::<i64>),
                Filter::literal("CreatedAt", datetime!(2024-05-06 07:08:09 UTC)),
            ],
        };
        assert_eq!(
            build("Users", &filters).unwrap(),
            " WHERE u.Id = 7 AND u.Name = 'alice' AND u.Active = TRUE AND u.DeletedAt = NULL AND u.CreatedAt = '2024-05-06 07:08:09.000000'"
        );
    }

    #[test]
    fn duplicate_secondary_filters_are_kept() {
        let filters = Filters {
            primary: Some(Filter::literal("Kind", 1)),
            secondary: vec![Filter::literal("Flag", 2), Filter::literal("Flag", 3)],
        };
        assert_eq!(
            build("Items", &filters).unwrap(),
            " WHERE i.Kind = 1 AND i.Flag = 2 AND i.Flag = 3"
        );
    }

    #[test]
    fn secondary_without_primary_renders_empty() {
        let filters = Filters {
            primary: None,
            secondary: vec![Filter::placeholder("TestCol2")],
        };
        assert_eq!(build("TestTable", &filters).unwrap(), "");

        let blank = Filters {
            primary: Some(Filter::placeholder(" ")),
            secondary: vec![Filter::placeholder("TestCol2")],
        };
        assert_eq!(build("TestTable", &blank).unwrap(), "");
    }

    #[test]
    fn where_requires_table() {
        let filters = Filters {
            primary: Some(Filter::placeholder("TestCol")),
            secondary: Vec::new(),
        };
        assert_eq!(
            build("", &filters),
            Err(BuildError::MissingArgument("table"))
        );
        assert_eq!(
            build("", &Filters::default()),
            Err(BuildError::MissingArgument("table"))
        );
    }

    #[test]
    fn valuer_supplies_value_at_build_time() {
        let filters = Filters {
            primary: Some(Filter::valuer("Id", Fixed(99))),
            secondary: Vec::new(),
        };
        assert_eq!(build("Users", &filters).unwrap(), " WHERE u.Id = 99");
    }

    #[test]
    fn valuer_error_propagates() {
        let filters = Filters {
            primary: Some(Filter::placeholder("Id")),
            secondary: vec![Filter::valuer("Score", Broken)],
        };
        assert_eq!(
            build("Users", &filters),
            Err(BuildError::Valuer(ValuerError("boom".to_string())))
        );
    }

    #[test]
    fn filters_clone_with_boxed_valuer() {
        let filters = Filters {
            primary: Some(Filter::valuer("Id", Fixed(1))),
            secondary: Vec::new(),
        };
        let copy = filters.clone();
        assert_eq!(
            build("Users", &filters).unwrap(),
            build("Users", &copy).unwrap()
        );
    }
}
