//! Round trips through the public API: query -> URL -> query.

use data_query::{
    DataQuery, DataQueryOptions, DataQueryRecord, DataQueryUrlParams, FilterGroup, FilterNode,
    FilterNodeOrGroup, FilterOperator, SortEntry, ToSqlOptions, parse_sorting_url_param,
};
use serde_json::json;

fn sample_filter() -> FilterNodeOrGroup {
    FilterNodeOrGroup::Group(FilterGroup::or(vec![
        FilterNode::new("status", FilterOperator::In, json!(["active", "trial"])).into(),
        FilterGroup::and(vec![
            FilterNode::new("score", FilterOperator::GreaterThan, 90).into(),
            FilterNode::new("note", FilterOperator::Equals, "50% off, 'today' & more").into(),
        ])
        .into(),
    ]))
}

#[test]
fn sort_param_roundtrip() {
    let sorting = vec![
        SortEntry::desc("created_at"),
        SortEntry::asc("last_name"),
        SortEntry::asc("first_name"),
    ];
    let query: DataQuery =
        DataQuery::new(DataQueryOptions::default().with_sorting(sorting.clone()));
    let params = query.to_url_params().unwrap();

    assert_eq!(parse_sorting_url_param(params.sort.as_deref()), sorting);
}

#[test]
fn record_roundtrip_through_query_string() {
    let record = DataQueryRecord {
        page: Some(3),
        page_size: Some(50),
        sorting: Some(vec![SortEntry::desc("score")]),
        filter: Some(sample_filter()),
    };
    let mut original: DataQuery = DataQuery::default();
    original.update(record.clone());

    let query_string = original.to_url_params_string().unwrap();
    let params = DataQueryUrlParams::from_query_string(&query_string).unwrap();
    let restored = DataQuery::<data_query::FilterTree>::record_from_url_params(&params).unwrap();

    assert_eq!(restored, record);
}

#[test]
fn rehydrated_query_renders_same_sql() {
    let original: DataQuery = DataQuery::new(
        DataQueryOptions::default()
            .with_page(2)
            .with_page_size(25)
            .with_sorting(vec![SortEntry::asc("name")])
            .with_filter(sample_filter()),
    );
    let mut restored: DataQuery = DataQuery::default();
    restored
        .from_url_params_string(&original.to_url_params_string().unwrap())
        .unwrap();

    let sql = restored.to_sql(&ToSqlOptions::default());
    assert_eq!(
        sql.where_order_by_limit_offset.as_deref(),
        Some(
            "where (status in ('active', 'trial') or \
             (score > 90 and note = '50% off, ''today'' & more')) \
             order by name asc limit 25 offset 25"
        )
    );
    assert_eq!(sql, original.to_sql(&ToSqlOptions::default()));
}

#[test]
fn query_without_anything_has_no_params_and_no_sql() {
    let query: DataQuery = DataQuery::default();
    assert_eq!(query.to_url_params_string().unwrap(), "");
    assert_eq!(
        query.to_sql(&ToSqlOptions::default()).where_order_by_limit_offset,
        None
    );
}
