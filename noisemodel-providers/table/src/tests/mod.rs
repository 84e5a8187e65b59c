use crate::{Column, ColumnType, LabeledTable, TableError};
use noisemodel_core::{Cell, Dataset, DatasetError};
use rstest::{fixture, rstest};


#[fixture]
fn people() -> LabeledTable {
    LabeledTable::try_new(
        "people",
        vec!["r0".into(), "r1".into(), "r2".into(), "r3".into()],
        vec![
            Column::utf8("name", [Some("Ann"), Some("Bob"), None, Some("Dee")]),
            Column::int64("age", [Some(31), Some(47), Some(22), None]),
            Column::float64("score", [Some(0.5), None, Some(2.25), Some(9.0)]),
        ],
    )
    .expect("valid table")
}

#[rstest]
fn construction_records_shape_and_types(people: LabeledTable) {
    assert_eq!(people.dimensions(), (4, 3));
    let types: Vec<ColumnType> = people.columns().iter().map(Column::column_type).collect();
    assert_eq!(
        types,
        [ColumnType::Utf8, ColumnType::Int64, ColumnType::Float64]
    );
    assert_eq!(people.row_position("r2"), Some(2));
    assert!(people.column("age").is_some());
    assert!(people.column("height").is_none());
}

#[rstest]
fn construction_rejects_ragged_columns() {
    let err = LabeledTable::try_new(
        "ragged",
        vec!["a".into(), "b".into()],
        vec![Column::int64("x", [Some(1)])],
    )
    .expect_err("column too short");
    assert!(matches!(
        err,
        TableError::ColumnLength { ref column, expected: 2, actual: 1 } if column == "x"
    ));
}

#[rstest]
fn construction_rejects_duplicate_names() {
    let err = LabeledTable::with_positional_labels(
        "dupes",
        vec![
            Column::int64("x", [Some(1)]),
            Column::float64("x", [Some(1.0)]),
        ],
    )
    .expect_err("duplicate column");
    assert!(matches!(err, TableError::DuplicateColumn { ref column } if column == "x"));
}

#[rstest]
#[case::no_rows(vec![Column::int64("x", [])], DatasetError::EmptyData)]
#[case::no_columns(vec![], DatasetError::EmptyData)]
fn construction_rejects_empty_tables(
    #[case] columns: Vec<Column>,
    #[case] expected: DatasetError,
) {
    let err = LabeledTable::with_positional_labels("empty", columns).expect_err("empty table");
    assert!(matches!(err, TableError::Dataset(ref error) if *error == expected));
}

#[rstest]
fn construction_rejects_labels_without_columns() {
    let err = LabeledTable::try_new("bare", vec!["a".into()], Vec::new())
        .expect_err("labels alone are not a table");
    assert!(matches!(
        err,
        TableError::Dataset(DatasetError::ZeroDimension)
    ));
}

#[rstest]
fn select_rows_carries_labels_and_values(people: LabeledTable) {
    let picked = people.select_rows(&[3, 1]).expect("rows in range");
    assert_eq!(picked.row_labels(), ["r3", "r1"]);
    assert_eq!(picked.cell(0, 0), Ok(Cell::Text("Dee".to_owned())));
    assert_eq!(picked.cell(0, 1), Ok(Cell::Missing));
    assert_eq!(picked.cell(1, 2), Ok(Cell::Missing));
    assert_eq!(
        people.select_rows(&[4]),
        Err(DatasetError::OutOfBounds { index: 4 })
    );
}

#[rstest]
fn write_rows_updates_values_and_keeps_labels(mut people: LabeledTable) {
    let mut patch = people.select_rows(&[0, 2]).expect("rows in range");
    patch.set_cell(0, 1, Cell::Int(99)).expect("int column");
    patch.set_cell(1, 0, Cell::Text("Cy".to_owned())).expect("text column");

    people.write_rows(&[0, 2], &patch).expect("compatible rows");

    assert_eq!(people.cell(0, 1), Ok(Cell::Int(99)));
    assert_eq!(people.cell(2, 0), Ok(Cell::Text("Cy".to_owned())));
    assert_eq!(people.cell(1, 1), Ok(Cell::Int(47)));
    assert_eq!(people.row_labels(), ["r0", "r1", "r2", "r3"]);
}

#[rstest]
fn write_rows_rejects_renamed_columns(mut people: LabeledTable) {
    let before = people.clone();
    let patch = LabeledTable::with_positional_labels(
        "patch",
        vec![
            Column::utf8("name", [Some("Zed")]),
            Column::int64("years", [Some(1)]),
            Column::float64("score", [Some(1.0)]),
        ],
    )
    .expect("valid patch");
    let err = people
        .write_rows(&[1], &patch)
        .expect_err("column names differ");
    assert_eq!(
        err,
        DatasetError::ColumnLabelMismatch {
            column: 1,
            expected: "age".to_owned(),
            actual: "years".to_owned(),
        }
    );
    assert_eq!(people, before);
}

#[rstest]
fn write_rows_rejects_retyped_columns(mut people: LabeledTable) {
    let patch = LabeledTable::with_positional_labels(
        "patch",
        vec![
            Column::utf8("name", [Some("Zed")]),
            Column::float64("age", [Some(1.5)]),
            Column::float64("score", [Some(1.0)]),
        ],
    )
    .expect("valid patch");
    let err = people
        .write_rows(&[1], &patch)
        .expect_err("column types differ");
    assert_eq!(
        err,
        DatasetError::TypeMismatch {
            column: 1,
            expected: "int64",
            actual: "float64",
        }
    );
}

#[rstest]
#[case::text_into_int(1, Cell::Text("old".to_owned()), "int64", "text")]
#[case::float_into_int(1, Cell::Float(1.5), "int64", "float")]
#[case::number_into_text(0, Cell::Int(3), "utf8", "int")]
#[case::text_into_float(2, Cell::Text("high".to_owned()), "float64", "text")]
fn set_cell_enforces_column_types(
    mut people: LabeledTable,
    #[case] column: usize,
    #[case] value: Cell,
    #[case] expected: &'static str,
    #[case] actual: &'static str,
) {
    let err = people
        .set_cell(0, column, value)
        .expect_err("type must be rejected");
    assert_eq!(
        err,
        DatasetError::TypeMismatch {
            column,
            expected,
            actual,
        }
    );
}

#[rstest]
fn set_cell_accepts_missing_and_widened_values(mut people: LabeledTable) {
    people.set_cell(0, 0, Cell::Missing).expect("nullable");
    people.set_cell(1, 2, Cell::Int(4)).expect("ints widen to floats");
    assert_eq!(people.cell(0, 0), Ok(Cell::Missing));
    assert_eq!(people.cell(1, 2), Ok(Cell::Float(4.0)));
    assert_eq!(
        people.set_cell(0, 5, Cell::Missing),
        Err(DatasetError::ColumnOutOfBounds { column: 5 })
    );
    assert_eq!(
        people.set_cell(9, 0, Cell::Missing),
        Err(DatasetError::OutOfBounds { index: 9 })
    );
}

#[rstest]
fn tables_refuse_integer_casts(mut people: LabeledTable) {
    assert!(!people.supports_int_cast());
    let err = people.cast_to_int().expect_err("tables cannot be cast");
    assert!(matches!(
        err,
        DatasetError::IntCastUnsupported { ref dataset } if &**dataset == "people"
    ));
}
