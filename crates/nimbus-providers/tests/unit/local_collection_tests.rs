//! Unit tests for collection items on the local transport

use crate::common::{CACHE, local_client};
use nimbus_application::requests::{
    ListConcatenateBackRequest, ListFetchRequest, ListPushFrontRequest, SetAddElementsRequest,
    SetPopRequest, SortedSetFetchByRankRequest, SortedSetFetchByScoreRequest,
    SortedSetGetRankRequest,
};
use nimbus_domain::responses::{
    DictionaryGetFieldResponse, DictionaryLengthResponse, ListLengthResponse, ListPopBackResponse,
    ListPopFrontResponse, SetContainsElementsResponse, SetLengthResponse, SetPopResponse,
    SortedSetFetchResponse, SortedSetGetRankResponse, SortedSetGetScoreResponse,
    SortedSetLengthByScoreResponse, SortedSetLengthResponse,
};
use nimbus_domain::{CollectionTtl, ErrorCode, SortedSetElement, SortedSetOrder, Value};
use std::time::Duration;

fn fetched_values(response: &SortedSetFetchResponse) -> Vec<String> {
    response
        .elements()
        .unwrap_or_default()
        .iter()
        .map(|e| e.value.to_string_lossy())
        .collect()
}

// ============================================================================
// Sets
// ============================================================================

#[tokio::test]
async fn test_set_operations() {
    let (client, _) = local_client().await;

    client
        .set_add_elements(CACHE, "s", ["b", "a", "c", "a"])
        .await
        .unwrap();
    let fetched = client.set_fetch(CACHE, "s").await.unwrap();
    assert_eq!(
        fetched.value_strings(),
        Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    );
    assert_eq!(
        client.set_length(CACHE, "s").await.unwrap(),
        SetLengthResponse::Hit { length: 3 }
    );
    assert_eq!(
        client
            .set_contains_elements(CACHE, "s", ["a", "z"])
            .await
            .unwrap(),
        SetContainsElementsResponse::Hit {
            contains: vec![true, false]
        }
    );

    client.set_remove_element(CACHE, "s", "b").await.unwrap();
    assert_eq!(
        client.set_length(CACHE, "s").await.unwrap(),
        SetLengthResponse::Hit { length: 2 }
    );
}

#[tokio::test]
async fn test_set_pop_deletes_empty_set() {
    let (client, transport) = local_client().await;
    client.set_add_elements(CACHE, "s", ["x", "y"]).await.unwrap();

    let popped = client
        .send(SetPopRequest::new(CACHE, "s").with_count(5))
        .await
        .unwrap();
    match popped {
        SetPopResponse::Hit { elements } => assert_eq!(elements.len(), 2),
        SetPopResponse::Miss => panic!("expected popped elements"),
    }

    assert_eq!(client.set_pop(CACHE, "s").await.unwrap(), SetPopResponse::Miss);
    assert_eq!(transport.item_count(CACHE), Some(0));
}

#[tokio::test]
async fn test_missing_collections_miss() {
    let (client, _) = local_client().await;
    assert_eq!(client.set_length(CACHE, "none").await.unwrap(), SetLengthResponse::Miss);
    assert_eq!(client.list_length(CACHE, "none").await.unwrap(), ListLengthResponse::Miss);
    assert_eq!(
        client.dictionary_length(CACHE, "none").await.unwrap(),
        DictionaryLengthResponse::Miss
    );
    assert_eq!(
        client.sorted_set_length(CACHE, "none").await.unwrap(),
        SortedSetLengthResponse::Miss
    );
    assert_eq!(
        client.sorted_set_get_score(CACHE, "none", "v").await.unwrap(),
        SortedSetGetScoreResponse::Miss {
            value: Value::from("v")
        }
    );
}

// ============================================================================
// Lists
// ============================================================================

#[tokio::test]
async fn test_list_push_and_pop() {
    let (client, _) = local_client().await;

    assert_eq!(client.list_push_back(CACHE, "l", "b").await.unwrap().list_length, 1);
    assert_eq!(client.list_push_front(CACHE, "l", "a").await.unwrap().list_length, 2);
    assert_eq!(
        client
            .list_concatenate_back(CACHE, "l", ["c", "d"])
            .await
            .unwrap()
            .list_length,
        4
    );
    assert_eq!(
        client
            .list_concatenate_front(CACHE, "l", ["y", "z"])
            .await
            .unwrap()
            .list_length,
        6
    );

    let fetched = client.list_fetch(CACHE, "l").await.unwrap();
    assert_eq!(
        fetched.value_strings(),
        Some(["y", "z", "a", "b", "c", "d"].map(String::from).to_vec())
    );

    assert_eq!(
        client.list_pop_front(CACHE, "l").await.unwrap(),
        ListPopFrontResponse::Hit {
            value: Value::from("y")
        }
    );
    assert_eq!(
        client.list_pop_back(CACHE, "l").await.unwrap(),
        ListPopBackResponse::Hit {
            value: Value::from("d")
        }
    );
}

#[tokio::test]
async fn test_list_truncation() {
    let (client, _) = local_client().await;
    client
        .list_concatenate_back(CACHE, "l", ["a", "b", "c"])
        .await
        .unwrap();

    let pushed = client
        .send(ListPushFrontRequest::new(CACHE, "l", "z").with_truncate_back_to_size(2))
        .await
        .unwrap();
    assert_eq!(pushed.list_length, 2);

    let appended = client
        .send(
            ListConcatenateBackRequest::new(CACHE, "l", ["x", "y"]).with_truncate_front_to_size(3),
        )
        .await
        .unwrap();
    assert_eq!(appended.list_length, 3);

    let fetched = client.list_fetch(CACHE, "l").await.unwrap();
    assert_eq!(
        fetched.value_strings(),
        Some(["a", "x", "y"].map(String::from).to_vec())
    );
}

#[tokio::test]
async fn test_list_fetch_ranges() {
    let (client, _) = local_client().await;
    client
        .list_concatenate_back(CACHE, "l", ["0", "1", "2", "3", "4"])
        .await
        .unwrap();

    let middle = client
        .send(ListFetchRequest::new(CACHE, "l").with_start_index(1).with_end_index(3))
        .await
        .unwrap();
    assert_eq!(middle.value_strings(), Some(vec!["1".into(), "2".into()]));

    let tail = client
        .send(ListFetchRequest::new(CACHE, "l").with_start_index(-2))
        .await
        .unwrap();
    assert_eq!(tail.value_strings(), Some(vec!["3".into(), "4".into()]));

    let clamped = client
        .send(ListFetchRequest::new(CACHE, "l").with_start_index(-100).with_end_index(-4))
        .await
        .unwrap();
    assert_eq!(clamped.value_strings(), Some(vec!["0".into()]));

    let inverted = client
        .send(ListFetchRequest::new(CACHE, "l").with_start_index(-1).with_end_index(-1))
        .await;
    assert_eq!(inverted.unwrap_err().code(), ErrorCode::InvalidArgument);
}

#[tokio::test]
async fn test_list_remove_value_deletes_empty_list() {
    let (client, transport) = local_client().await;
    client
        .list_concatenate_back(CACHE, "l", ["a", "b", "a"])
        .await
        .unwrap();

    client.list_remove_value(CACHE, "l", "a").await.unwrap();
    assert_eq!(
        client.list_length(CACHE, "l").await.unwrap(),
        ListLengthResponse::Hit { length: 1 }
    );

    client.list_remove_value(CACHE, "l", "b").await.unwrap();
    assert_eq!(client.list_length(CACHE, "l").await.unwrap(), ListLengthResponse::Miss);
    assert_eq!(transport.item_count(CACHE), Some(0));
}

// ============================================================================
// Dictionaries
// ============================================================================

#[tokio::test]
async fn test_dictionary_operations() {
    let (client, _) = local_client().await;
    client
        .dictionary_set_fields(CACHE, "d", [("f1", "v1"), ("f2", "v2")])
        .await
        .unwrap();
    client.dictionary_set_field(CACHE, "d", "f3", "v3").await.unwrap();

    assert_eq!(
        client.dictionary_get_field(CACHE, "d", "f2").await.unwrap(),
        DictionaryGetFieldResponse::Hit {
            field: Value::from("f2"),
            value: Value::from("v2")
        }
    );
    assert_eq!(
        client.dictionary_get_field(CACHE, "d", "nope").await.unwrap(),
        DictionaryGetFieldResponse::Miss {
            field: Value::from("nope")
        }
    );
    assert_eq!(
        client.dictionary_get_field(CACHE, "missing", "f").await.unwrap(),
        DictionaryGetFieldResponse::Miss {
            field: Value::from("f")
        }
    );

    let fields = client
        .dictionary_get_fields(CACHE, "d", ["f1", "zz"])
        .await
        .unwrap();
    let map = fields.value_map();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("f1").map(String::as_str), Some("v1"));

    client.dictionary_remove_field(CACHE, "d", "f1").await.unwrap();
    let all = client.dictionary_fetch(CACHE, "d").await.unwrap();
    let all = all.value_map().unwrap_or_default();
    assert_eq!(all.len(), 2);
    assert!(!all.contains_key("f1"));
}

#[tokio::test]
async fn test_dictionary_increment() {
    let (client, _) = local_client().await;

    assert_eq!(
        client.dictionary_increment(CACHE, "d", "n", 4).await.unwrap().value,
        4
    );
    assert_eq!(
        client.dictionary_increment(CACHE, "d", "n", -10).await.unwrap().value,
        -6
    );

    client.dictionary_set_field(CACHE, "d", "text", "abc").await.unwrap();
    let error = client
        .dictionary_increment(CACHE, "d", "text", 1)
        .await
        .unwrap_err();
    assert_eq!(error.code(), ErrorCode::InvalidArgument);
}

// ============================================================================
// Sorted sets
// ============================================================================

async fn seed_scores(client: &nimbus_application::CacheClient) {
    client
        .sorted_set_put_elements(
            CACHE,
            "z",
            [
                SortedSetElement::new("c", 3.0),
                SortedSetElement::new("a", 1.0),
                SortedSetElement::new("b", 2.0),
                SortedSetElement::new("b2", 2.0),
                SortedSetElement::new("d", 4.0),
            ],
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_sorted_set_fetch_by_rank() {
    let (client, _) = local_client().await;
    seed_scores(&client).await;

    let ascending = client
        .sorted_set_fetch_by_rank(CACHE, "z", SortedSetOrder::Ascending)
        .await
        .unwrap();
    assert_eq!(fetched_values(&ascending), ["a", "b", "b2", "c", "d"]);

    let descending = client
        .sorted_set_fetch_by_rank(CACHE, "z", SortedSetOrder::Descending)
        .await
        .unwrap();
    assert_eq!(fetched_values(&descending), ["d", "c", "b2", "b", "a"]);

    let top_two = client
        .send(
            SortedSetFetchByRankRequest::new(CACHE, "z")
                .with_order(SortedSetOrder::Descending)
                .with_end_rank(2),
        )
        .await
        .unwrap();
    assert_eq!(fetched_values(&top_two), ["d", "c"]);

    let last = client
        .send(SortedSetFetchByRankRequest::new(CACHE, "z").with_start_rank(-1))
        .await
        .unwrap();
    assert_eq!(fetched_values(&last), ["d"]);
}

#[tokio::test]
async fn test_sorted_set_fetch_by_score() {
    let (client, _) = local_client().await;
    seed_scores(&client).await;

    let bounded = client
        .sorted_set_fetch_by_score(CACHE, "z", Some(2.0), Some(3.0), SortedSetOrder::Ascending)
        .await
        .unwrap();
    assert_eq!(fetched_values(&bounded), ["b", "b2", "c"]);

    let paged = client
        .send(
            SortedSetFetchByScoreRequest::new(CACHE, "z")
                .with_order(SortedSetOrder::Descending)
                .with_offset(1)
                .with_count(2),
        )
        .await
        .unwrap();
    assert_eq!(fetched_values(&paged), ["c", "b2"]);

    let zero_count = client
        .send(SortedSetFetchByScoreRequest::new(CACHE, "z").with_count(0))
        .await;
    assert_eq!(zero_count.unwrap_err().code(), ErrorCode::InvalidArgument);
}

#[tokio::test]
async fn test_sorted_set_scores_and_ranks() {
    let (client, _) = local_client().await;
    seed_scores(&client).await;

    assert_eq!(
        client.sorted_set_get_score(CACHE, "z", "c").await.unwrap().score(),
        Some(3.0)
    );
    assert_eq!(
        client.sorted_set_get_score(CACHE, "z", "q").await.unwrap(),
        SortedSetGetScoreResponse::Miss {
            value: Value::from("q")
        }
    );

    assert_eq!(
        client.sorted_set_get_rank(CACHE, "z", "c").await.unwrap(),
        SortedSetGetRankResponse::Hit { rank: 3 }
    );
    assert_eq!(
        client
            .send(SortedSetGetRankRequest::new(CACHE, "z", "c").with_order(SortedSetOrder::Descending))
            .await
            .unwrap(),
        SortedSetGetRankResponse::Hit { rank: 1 }
    );
    assert_eq!(
        client.sorted_set_get_rank(CACHE, "z", "q").await.unwrap(),
        SortedSetGetRankResponse::Miss
    );

    assert_eq!(
        client
            .sorted_set_length_by_score(CACHE, "z", Some(2.0), None)
            .await
            .unwrap(),
        SortedSetLengthByScoreResponse::Hit { length: 4 }
    );
}

#[tokio::test]
async fn test_sorted_set_increment_and_remove() {
    let (client, _) = local_client().await;

    let score = client
        .sorted_set_increment_score(CACHE, "z", "v", 2.5)
        .await
        .unwrap()
        .score;
    assert!((score - 2.5).abs() < f64::EPSILON);
    let score = client
        .sorted_set_increment_score(CACHE, "z", "v", -1.0)
        .await
        .unwrap()
        .score;
    assert!((score - 1.5).abs() < f64::EPSILON);

    client.sorted_set_put_element(CACHE, "z", "w", 9.0).await.unwrap();
    client.sorted_set_remove_elements(CACHE, "z", ["v", "w"]).await.unwrap();
    assert_eq!(
        client.sorted_set_length(CACHE, "z").await.unwrap(),
        SortedSetLengthResponse::Miss
    );
}

// ============================================================================
// Collection TTL
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_collection_ttl_refresh() {
    let (client, _) = local_client().await;
    let ttl = CollectionTtl::of(Duration::from_secs(10));

    client
        .send(SetAddElementsRequest::new(CACHE, "refreshed", ["a"]).with_ttl(ttl))
        .await
        .unwrap();
    client
        .send(
            SetAddElementsRequest::new(CACHE, "fixed", ["a"])
                .with_ttl(ttl.with_no_refresh_ttl_on_updates()),
        )
        .await
        .unwrap();

    tokio::time::advance(Duration::from_secs(8)).await;

    client
        .send(SetAddElementsRequest::new(CACHE, "refreshed", ["b"]).with_ttl(ttl))
        .await
        .unwrap();
    client
        .send(
            SetAddElementsRequest::new(CACHE, "fixed", ["b"])
                .with_ttl(ttl.with_no_refresh_ttl_on_updates()),
        )
        .await
        .unwrap();

    tokio::time::advance(Duration::from_secs(4)).await;

    assert_eq!(
        client.set_length(CACHE, "refreshed").await.unwrap(),
        SetLengthResponse::Hit { length: 2 }
    );
    assert_eq!(
        client.set_length(CACHE, "fixed").await.unwrap(),
        SetLengthResponse::Miss
    );
}
