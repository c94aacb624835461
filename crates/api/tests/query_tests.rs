mod common;

use std::collections::HashSet;

use async_graphql::{Value, Variables};
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_user_with_posts_and_profile() {
    let app_state = setup_test_db().await;
    let schema = test_schema(&app_state);

    let user_id = create_test_user(&app_state, "Ada", 120.5).await;
    create_test_post(&app_state, &user_id, "First post").await;
    create_test_post(&app_state, &user_id, "Second post").await;
    create_test_profile(&app_state, &user_id, "basic").await;

    // Posts by someone else must not leak into the result
    let other_id = create_test_user(&app_state, "Grace", 10.0).await;
    create_test_post(&app_state, &other_id, "Unrelated post").await;

    let query = r#"
        query GetUser($id: UUID!) {
            user(id: $id) {
                id
                name
                posts {
                    title
                }
                profile {
                    memberType {
                        discount
                    }
                }
            }
        }
    "#;

    let variables = Variables::from_json(json!({ "id": user_id }));

    let response = execute_graphql(&schema, &app_state, query, Some(variables)).await;

    assert!(
        response.errors.is_empty(),
        "User query should succeed: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    let user = &data["user"];

    assert_eq!(user["id"], user_id);
    assert_eq!(user["name"], "Ada");

    let titles: HashSet<&str> = user["posts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, HashSet::from(["First post", "Second post"]));

    let expected_discount = stored_discount(&app_state, "basic").await;
    assert_eq!(
        user["profile"]["memberType"]["discount"].as_f64().unwrap(),
        expected_discount
    );
}

#[tokio::test]
async fn test_user_without_profile_or_posts() {
    let app_state = setup_test_db().await;
    let schema = test_schema(&app_state);

    let user_id = create_test_user(&app_state, "Lonely", 0.0).await;

    let query = format!(r#"{{ user(id: "{user_id}") {{ id posts {{ id }} profile {{ id }} }} }}"#);

    let response = execute_graphql(&schema, &app_state, &query, None).await;

    assert!(
        response.errors.is_empty(),
        "User query should succeed: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    assert_eq!(data["user"]["posts"], json!([]));
    assert!(data["user"]["profile"].is_null());
}

#[tokio::test]
async fn test_point_lookups_return_null_when_missing() {
    let app_state = setup_test_db().await;
    let schema = test_schema(&app_state);

    let missing = uuid::Uuid::new_v4().to_string();

    for field in ["user", "post", "profile"] {
        let query = format!(r#"{{ {field}(id: "{missing}") {{ id }} }}"#);

        let response = execute_graphql(&schema, &app_state, &query, None).await;

        assert!(
            response.errors.is_empty(),
            "Missing {field} must not be an error: {:?}",
            response.errors
        );

        let data = response.data.into_json().unwrap();
        assert!(data[field].is_null(), "Missing {field} should be null");
    }
}

#[tokio::test]
async fn test_malformed_id_is_just_not_found() {
    let app_state = setup_test_db().await;
    let schema = test_schema(&app_state);

    let response =
        execute_graphql(&schema, &app_state, r#"{ post(id: "not-a-uuid") { id } }"#, None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(response.data.into_json().unwrap()["post"], json!(null));
}

#[tokio::test]
async fn test_users_returns_every_stored_user() {
    let app_state = setup_test_db().await;
    let schema = test_schema(&app_state);

    let user_id = create_test_user(&app_state, "Counted", 1.0).await;

    // Other tests insert concurrently, so bracket the query between two counts
    let before = count_users(&app_state).await;
    let response = execute_graphql(&schema, &app_state, "{ users { id } }", None).await;
    let after = count_users(&app_state).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let users = data["users"].as_array().unwrap();
    let len = users.len() as i64;

    assert!(before <= len && len <= after, "{before} <= {len} <= {after}");
    assert!(users.iter().any(|u| u["id"] == user_id));
}

#[tokio::test]
async fn test_nested_member_type_matches_profile_lookup() {
    let app_state = setup_test_db().await;
    let schema = test_schema(&app_state);

    let user_id = create_test_user(&app_state, "Round Trip", 5.0).await;
    let profile_id = create_test_profile(&app_state, &user_id, "business").await;

    let query = r#"
        query RoundTrip($userId: UUID!, $profileId: UUID!) {
            user(id: $userId) {
                profile {
                    id
                    memberType {
                        id
                    }
                }
            }
            profile(id: $profileId) {
                memberTypeId
                memberType {
                    id
                }
            }
        }
    "#;

    let variables = Variables::from_json(json!({
        "userId": user_id,
        "profileId": profile_id,
    }));

    let response = execute_graphql(&schema, &app_state, query, Some(variables)).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert_eq!(data["user"]["profile"]["id"], profile_id);
    assert_eq!(data["user"]["profile"]["memberType"]["id"], "business");
    assert_eq!(
        data["user"]["profile"]["memberType"]["id"],
        data["profile"]["memberType"]["id"]
    );
    assert_eq!(data["profile"]["memberTypeId"], "business");
}

#[tokio::test]
async fn test_relationships_resolve_without_eager_includes() {
    let app_state = setup_test_db().await;
    let schema = test_schema(&app_state);

    let user_id = create_test_user(&app_state, "Lazy", 3.0).await;
    let post_id = create_test_post(&app_state, &user_id, "Lazy post").await;
    let profile_id = create_test_profile(&app_state, &user_id, "basic").await;

    let query = r#"
        query Lazy($postId: UUID!) {
            users {
                id
                posts {
                    id
                }
                profile {
                    id
                    memberType {
                        id
                    }
                }
            }
            post(id: $postId) {
                authorId
                author {
                    id
                    name
                }
            }
            profiles {
                id
                user {
                    id
                }
            }
        }
    "#;

    let variables = Variables::from_json(json!({ "postId": post_id }));

    let response = execute_graphql(&schema, &app_state, query, Some(variables)).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();

    let user = data["users"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["id"] == user_id)
        .expect("User should be listed");
    assert_eq!(user["posts"], json!([{ "id": post_id }]));
    assert_eq!(user["profile"]["id"], profile_id);
    assert_eq!(user["profile"]["memberType"]["id"], "basic");

    assert_eq!(data["post"]["authorId"], user_id);
    assert_eq!(data["post"]["author"]["id"], user_id);
    assert_eq!(data["post"]["author"]["name"], "Lazy");

    let profile = data["profiles"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == profile_id)
        .expect("Profile should be listed");
    assert_eq!(profile["user"]["id"], user_id);
}

#[tokio::test]
async fn test_subscription_relationships() {
    let app_state = setup_test_db().await;
    let schema = test_schema(&app_state);

    let author = create_test_user(&app_state, "Author", 0.0).await;
    let first = create_test_user(&app_state, "Subscriber One", 0.0).await;
    let second = create_test_user(&app_state, "Subscriber Two", 0.0).await;
    create_test_subscription(&app_state, &first, &author).await;
    create_test_subscription(&app_state, &second, &author).await;

    let query = r#"
        query Subscriptions($author: UUID!, $first: UUID!) {
            userSubscribedTo(id: $author) {
                id
            }
            author: user(id: $author) {
                subscribedToUser {
                    id
                }
                userSubscribedTo {
                    id
                }
            }
            first: user(id: $first) {
                userSubscribedTo {
                    id
                    subscribedToUser {
                        id
                    }
                }
            }
        }
    "#;

    let variables = Variables::from_json(json!({ "author": author, "first": first }));

    let response = execute_graphql(&schema, &app_state, query, Some(variables)).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();

    let ids = |value: &serde_json::Value| -> HashSet<String> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["id"].as_str().unwrap().to_string())
            .collect()
    };

    let subscribers = HashSet::from([first.clone(), second.clone()]);

    assert_eq!(ids(&data["userSubscribedTo"]), subscribers);
    assert_eq!(ids(&data["author"]["subscribedToUser"]), subscribers);
    assert!(ids(&data["author"]["userSubscribedTo"]).is_empty());

    let followed = &data["first"]["userSubscribedTo"];
    assert_eq!(ids(followed), HashSet::from([author.clone()]));
    assert_eq!(ids(&followed[0]["subscribedToUser"]), subscribers);
}

#[tokio::test]
async fn test_member_types_and_their_profiles() {
    let app_state = setup_test_db().await;
    let schema = test_schema(&app_state);

    let user_id = create_test_user(&app_state, "Business Owner", 99.0).await;
    let profile_id = create_test_profile(&app_state, &user_id, "business").await;

    let query = r#"
        query {
            memberTypes {
                id
                discount
                postsLimitPerMonth
            }
            memberType(id: business) {
                id
                postsLimitPerMonth
                profiles {
                    id
                    memberTypeId
                }
            }
        }
    "#;

    let response = execute_graphql(&schema, &app_state, query, None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();

    let ids: HashSet<&str> = data["memberTypes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, HashSet::from(["basic", "business"]));

    let business = &data["memberType"];
    assert_eq!(business["id"], "business");
    assert_eq!(business["postsLimitPerMonth"], 100);

    let profiles = business["profiles"].as_array().unwrap();
    assert!(profiles.iter().any(|p| p["id"] == profile_id));
    assert!(profiles.iter().all(|p| p["memberTypeId"] == "business"));
}

#[tokio::test]
async fn test_closed_pool_surfaces_resolver_error() {
    let app_state = setup_test_db().await;
    let schema = test_schema(&app_state);

    app_state.db.close().await;

    let response = execute_graphql(&schema, &app_state, "{ posts { id } }", None).await;

    assert!(
        !response.errors.is_empty(),
        "A closed pool must surface as an error, not an empty list"
    );
    assert_eq!(response.data, Value::Null);
}

#[tokio::test]
async fn test_non_finite_balance_fails_only_that_user() {
    let app_state = setup_test_db().await;
    let schema = test_schema(&app_state);

    let broken = create_test_user(&app_state, "Overflow", f64::INFINITY).await;
    let healthy = create_test_user(&app_state, "Solvent", 42.5).await;

    let query = r#"
        query Balances($broken: UUID!, $healthy: UUID!) {
            broken: user(id: $broken) {
                id
                balance
            }
            healthy: user(id: $healthy) {
                id
                balance
            }
            memberTypes {
                id
            }
        }
    "#;

    let variables = Variables::from_json(json!({ "broken": broken, "healthy": healthy }));

    let response = execute_graphql(&schema, &app_state, query, Some(variables)).await;

    assert_eq!(response.errors.len(), 1, "{:?}", response.errors);
    assert!(response.errors[0].message.contains("non-finite balance"));

    let path = serde_json::to_value(&response.errors[0].path).unwrap();
    assert_eq!(path, json!(["broken", "balance"]));

    // The non-null `balance` nulls out its parent; siblings keep their data.
    let data = response.data.into_json().unwrap();
    assert!(data["broken"].is_null());
    assert_eq!(data["healthy"]["id"], healthy);
    assert_eq!(data["healthy"]["balance"].as_f64().unwrap(), 42.5);
    assert_eq!(data["memberTypes"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_each_request_sees_current_data() {
    let app_state = setup_test_db().await;
    let schema = test_schema(&app_state);

    let user_id = create_test_user(&app_state, "Before", 1.0).await;
    let post_id = create_test_post(&app_state, &user_id, "Original").await;

    // Both aliases resolve the author and their posts through the loaders
    let query = r#"
        query Author($postId: UUID!) {
            first: post(id: $postId) {
                author {
                    name
                    posts {
                        id
                    }
                }
            }
            second: post(id: $postId) {
                author {
                    name
                }
            }
        }
    "#;

    let variables = || Variables::from_json(json!({ "postId": post_id }));

    let response = execute_graphql(&schema, &app_state, query, Some(variables())).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert_eq!(data["first"]["author"]["name"], "Before");
    assert_eq!(data["second"]["author"]["name"], "Before");
    assert_eq!(data["first"]["author"]["posts"].as_array().unwrap().len(), 1);

    rename_test_user(&app_state, &user_id, "After").await;
    create_test_post(&app_state, &user_id, "Follow-up").await;

    // Same schema, new request: nothing from the first request is reused
    let response = execute_graphql(&schema, &app_state, query, Some(variables())).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert_eq!(data["first"]["author"]["name"], "After");
    assert_eq!(data["second"]["author"]["name"], "After");
    assert_eq!(data["first"]["author"]["posts"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_profiles_grouped_under_each_member_type() {
    let app_state = setup_test_db().await;
    let schema = test_schema(&app_state);

    let basic_user = create_test_user(&app_state, "Basic Member", 1.0).await;
    let business_user = create_test_user(&app_state, "Business Member", 1.0).await;
    let basic_profile = create_test_profile(&app_state, &basic_user, "basic").await;
    let business_profile = create_test_profile(&app_state, &business_user, "business").await;

    let query = r#"
        query {
            memberTypes {
                id
                profiles {
                    id
                    memberTypeId
                }
            }
        }
    "#;

    let response = execute_graphql(&schema, &app_state, query, None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();

    for member_type in data["memberTypes"].as_array().unwrap() {
        let tier = member_type["id"].as_str().unwrap();
        let profiles = member_type["profiles"].as_array().unwrap();

        assert!(profiles.iter().all(|p| p["memberTypeId"] == tier));

        let (own, other) = match tier {
            "basic" => (&basic_profile, &business_profile),
            _ => (&business_profile, &basic_profile),
        };
        assert!(profiles.iter().any(|p| &p["id"] == own));
        assert!(!profiles.iter().any(|p| &p["id"] == other));
    }
}
