use rowbind::node::RepositoryNode;
use rowbind::range::RangeIterator;
use rowbind::result::QueryResult;
use rowbind::settings::AdapterConfig;
use rowbind::RowbindError;

fn setup() -> QueryResult {
    QueryResult::new(
        vec!["A".into(), "B".into(), "C".into()],
        vec![RepositoryNode::shared("n1", Some("/content/n1".into()))],
        vec![vec![Some("x".into()), Some(5i64.into()), None]],
        &AdapterConfig::default(),
    )
    .expect("valid result")
}

#[test]
fn values_by_name() {
    let result = setup();
    let mut rows = result.rows();
    assert_eq!(rows.size(), 1);
    let row = rows.next_row().expect("one row");
    assert_eq!(row.value("A").unwrap().unwrap().string(), "x");
    assert_eq!(row.value("B").unwrap().unwrap().long().unwrap(), 5);
    let err = row.value("B").unwrap().unwrap().boolean().unwrap_err();
    assert!(matches!(err, RowbindError::ValueFormat { .. }));
    assert!(format!("{}", err).contains("Boolean"));
    assert!(row.value("C").unwrap().is_none(), "null cell is a null value, not an error");
    assert!(matches!(row.value("Z"), Err(RowbindError::ItemNotFound(_))));
}

#[test]
fn node_and_path_without_selector() {
    let result = setup();
    let row = result.rows().next_row().unwrap();
    assert_eq!(row.node().unwrap().name(), "n1");
    assert_eq!(row.path().unwrap(), "/content/n1");
    assert_eq!(row.node_for("n1").unwrap().name(), "n1");
    assert!(row.node_for("n2").is_none());
}

#[test]
fn string_form_of_every_cell() {
    let result = setup();
    let row = result.rows().next_row().unwrap();
    let rendered: Vec<Option<String>> = row.values().iter().map(|v| v.map(|v| v.string())).collect();
    assert_eq!(rendered, vec![Some("x".to_owned()), Some("5".to_owned()), None]);
}
