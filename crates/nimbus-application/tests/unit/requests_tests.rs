//! Tests for typed requests: wire building and response interpretation

use nimbus_application::CacheRequest;
use nimbus_application::requests::*;
use nimbus_domain::responses::{
    DictionaryGetFieldResponse, DictionaryGetFieldsResponse, GetBatchResponse, GetResponse,
    SortedSetGetScoreResponse, SortedSetGetScoresResponse,
};
use nimbus_domain::wire::{
    DataRequest, DataResponse, SetCondition, SortedSetRange, WireCollectionTtl,
};
use nimbus_domain::{CollectionTtl, ErrorCode, SortedSetOrder, Value};
use std::time::Duration;

const CONTEXT: RequestContext = RequestContext {
    default_ttl: Duration::from_secs(60),
};

#[test]
fn test_set_uses_default_ttl() {
    let wire = SetRequest::new("c", "k", "v").to_wire(&CONTEXT).unwrap();
    assert_eq!(
        wire,
        DataRequest::Set {
            key: b"k".to_vec(),
            value: b"v".to_vec(),
            ttl_milliseconds: 60_000,
        }
    );

    let wire = SetRequest::new("c", "k", "v")
        .with_ttl(Duration::from_secs(3))
        .to_wire(&CONTEXT)
        .unwrap();
    assert!(matches!(
        wire,
        DataRequest::Set {
            ttl_milliseconds: 3000,
            ..
        }
    ));
}

#[test]
fn test_set_rejects_zero_ttl_and_empty_key() {
    let err = SetRequest::new("c", "k", "v")
        .with_ttl(Duration::ZERO)
        .to_wire(&CONTEXT)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidArgument);

    let err = GetRequest::new("c", "").to_wire(&CONTEXT).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidArgument);
}

#[test]
fn test_set_if_condition_on_the_wire() {
    let wire = SetIfRequest::new("c", "k", "v", SetIfCondition::Equal(Value::from("old")))
        .to_wire(&CONTEXT)
        .unwrap();
    assert!(matches!(
        wire,
        DataRequest::SetIf {
            condition: SetCondition::Equal(ref expected),
            ..
        } if expected == b"old"
    ));

    let err = SetIfRequest::new("c", "k", "v", SetIfCondition::NotEqual(Value::from("")))
        .to_wire(&CONTEXT)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidArgument);
}

#[test]
fn test_increment_allows_zero_but_dictionary_does_not() {
    assert!(IncrementRequest::new("c", "k", 0).to_wire(&CONTEXT).is_ok());

    let err = DictionaryIncrementRequest::new("c", "d", "f", 0)
        .to_wire(&CONTEXT)
        .unwrap_err();
    assert!(err.message().contains("Amount must be given and cannot be 0"));

    assert!(
        SortedSetIncrementScoreRequest::new("c", "s", "v", 0.0)
            .to_wire(&CONTEXT)
            .is_err()
    );
}

#[test]
fn test_collection_ttl_on_the_wire() {
    let wire = ListPushFrontRequest::new("c", "l", "v")
        .with_truncate_back_to_size(10)
        .with_ttl(CollectionTtl::of(Duration::from_secs(5)).with_no_refresh_ttl_on_updates())
        .to_wire(&CONTEXT)
        .unwrap();
    assert_eq!(
        wire,
        DataRequest::ListPushFront {
            list_name: b"l".to_vec(),
            value: b"v".to_vec(),
            truncate_back_to_size: Some(10),
            ttl: WireCollectionTtl {
                ttl_milliseconds: 5000,
                refresh_ttl: false,
            },
        }
    );
}

#[test]
fn test_collection_names_are_validated() {
    let err = SetFetchRequest::new("c", " ").to_wire(&CONTEXT).unwrap_err();
    assert!(err.message().contains("Set name cannot be empty"));

    let err = ListLengthRequest::new("c", "").to_wire(&CONTEXT).unwrap_err();
    assert!(err.message().contains("List name cannot be empty"));

    let err = DictionaryFetchRequest::new("c", "").to_wire(&CONTEXT).unwrap_err();
    assert!(err.message().contains("Dictionary name cannot be empty"));

    let err = SortedSetLengthRequest::new("c", "").to_wire(&CONTEXT).unwrap_err();
    assert!(err.message().contains("Sorted set name cannot be empty"));
}

#[test]
fn test_sorted_set_fetch_ranges() {
    let wire = SortedSetFetchByRankRequest::new("c", "s")
        .with_order(SortedSetOrder::Descending)
        .with_start_rank(0)
        .with_end_rank(5)
        .to_wire(&CONTEXT)
        .unwrap();
    assert_eq!(
        wire,
        DataRequest::SortedSetFetch {
            set_name: b"s".to_vec(),
            order: SortedSetOrder::Descending,
            range: SortedSetRange::ByIndex {
                start: Some(0),
                end: Some(5),
            },
        }
    );

    let wire = SortedSetFetchByScoreRequest::new("c", "s")
        .with_min_score(1.0)
        .to_wire(&CONTEXT)
        .unwrap();
    assert_eq!(
        wire,
        DataRequest::SortedSetFetch {
            set_name: b"s".to_vec(),
            order: SortedSetOrder::Ascending,
            range: SortedSetRange::ByScore {
                min: Some(1.0),
                max: None,
                offset: 0,
                count: None,
            },
        }
    );

    assert!(
        SortedSetFetchByRankRequest::new("c", "s")
            .with_start_rank(4)
            .with_end_rank(2)
            .to_wire(&CONTEXT)
            .is_err()
    );
    assert!(
        SortedSetFetchByScoreRequest::new("c", "s")
            .with_min_score(3.0)
            .with_max_score(1.0)
            .to_wire(&CONTEXT)
            .is_err()
    );
}

#[test]
fn test_set_pop_rejects_zero_count() {
    let err = SetPopRequest::new("c", "s")
        .with_count(0)
        .to_wire(&CONTEXT)
        .unwrap_err();
    assert!(err.message().contains("count must be greater than 0"));
}

#[test]
fn test_get_batch_pairs_results_with_keys() {
    let request = GetBatchRequest::new("c", ["a", "b"]);
    let response = request
        .interpret(DataResponse::GetBatch(vec![Some(b"1".to_vec()), None]))
        .unwrap();
    assert_eq!(
        response,
        GetBatchResponse {
            results: vec![
                (
                    Value::from("a"),
                    GetResponse::Hit {
                        value: Value::from("1")
                    }
                ),
                (Value::from("b"), GetResponse::Miss),
            ],
        }
    );

    let err = request
        .interpret(DataResponse::GetBatch(vec![None]))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InternalServer);
}

#[test]
fn test_dictionary_get_fields_pairs_fields() {
    let request = DictionaryGetFieldsRequest::new("c", "d", ["f1", "f2"]);
    let response = request
        .interpret(DataResponse::DictionaryGet(Some(vec![None, Some(b"v".to_vec())])))
        .unwrap();
    assert_eq!(
        response,
        DictionaryGetFieldsResponse::Hit {
            responses: vec![
                DictionaryGetFieldResponse::Miss {
                    field: Value::from("f1")
                },
                DictionaryGetFieldResponse::Hit {
                    field: Value::from("f2"),
                    value: Value::from("v")
                },
            ],
        }
    );
    assert_eq!(
        request.interpret(DataResponse::DictionaryGet(None)).unwrap(),
        DictionaryGetFieldsResponse::Miss
    );
}

#[test]
fn test_sorted_set_get_scores_pairs_values() {
    let request = SortedSetGetScoresRequest::new("c", "s", ["a", "b"]);
    let response = request
        .interpret(DataResponse::SortedSetGetScore(Some(vec![Some(1.5), None])))
        .unwrap();
    assert_eq!(
        response,
        SortedSetGetScoresResponse::Hit {
            responses: vec![
                SortedSetGetScoreResponse::Hit {
                    value: Value::from("a"),
                    score: 1.5
                },
                SortedSetGetScoreResponse::Miss {
                    value: Value::from("b")
                },
            ],
        }
    );
}

#[test]
fn test_unexpected_response_is_internal_error() {
    let err = GetRequest::new("c", "k")
        .interpret(DataResponse::Set)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InternalServer);
    assert!(err.message().contains("Get request got an unexpected response Set"));
}
