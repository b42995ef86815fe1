use std::sync::Arc;

use campus_jobs::build_rocket;
use campus_jobs::models::Database;
use campus_jobs::presentation::StaticPresenter;
use campus_jobs::store::{JsonStore, SharedStore};
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use serde_json::{json, Value};

fn fixture() -> Database {
    let companies: Vec<Value> = (1..=7)
        .map(|n| {
            let skill = if n % 2 == 0 { "Java" } else { "Go" };
            json!({
                "id": n,
                "name": format!("Company {}", n),
                "rating": 4.5,
                "ratingCount": 12,
                "recruitment": {
                    "jobs": [{
                        "technical_skills": [skill],
                        "soft_skills": ["Teamwork"],
                        "personal_traits": [],
                        "language_requirement": "Tiếng Anh B1",
                        "student_target": { "university": "HUST", "majors": "CNTT, KHMT" }
                    }]
                },
                "reviews": [{ "id": "r1", "user": "Đại diện công ty", "content": "Welcome" }]
            })
        })
        .collect();

    serde_json::from_value(json!({
        "companies": companies,
        "users": [
            {
                "id": "s1",
                "name": "Lan",
                "skills": ["Java"],
                "majors": ["CNTT"],
                "university": "HUST",
                "language_level": "Tiếng Anh B2"
            }
        ],
        "posts": [{ "id": "p1", "userId": "s1", "title": "Hello", "content": "First", "createdAt": "2025-01-03T02:05:00.000Z" }],
        "postComments": [{ "id": "c1", "postId": "p1", "userId": "s1", "content": "Hi", "createdAt": "2025-01-03T02:05:00.000Z" }],
        "votes": [{ "id": "v1", "postId": "p1", "userId": "s1", "type": "upvote" }]
    }))
    .expect("valid fixture")
}

async fn client() -> Client {
    let store: SharedStore = Arc::new(JsonStore::in_memory(fixture()));
    let rocket = build_rocket(rocket::build(), store, Arc::new(StaticPresenter));
    Client::tracked(rocket).await.expect("valid rocket instance")
}

async fn post_json(client: &Client, uri: &str, body: Value) -> (Status, Value) {
    let response = client
        .post(uri.to_string())
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch()
        .await;
    let status = response.status();
    (status, response.into_json::<Value>().await.unwrap_or(Value::Null))
}

async fn get_json(client: &Client, uri: &str) -> (Status, Value) {
    let response = client.get(uri.to_string()).dispatch().await;
    let status = response.status();
    (status, response.into_json::<Value>().await.unwrap_or(Value::Null))
}

#[rocket::async_test]
async fn unknown_company_is_404() {
    let client = client().await;

    let (status, body) = get_json(&client, "/companies/999").await;

    assert_eq!(status, Status::NotFound);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Không tìm thấy công ty"));
}

#[rocket::async_test]
async fn numeric_ids_are_looked_up_as_strings() {
    let client = client().await;

    let (status, body) = get_json(&client, "/companies/3").await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body["name"], json!("Company 3"));
}

#[rocket::async_test]
async fn api_prefix_serves_the_same_routes() {
    let client = client().await;

    let (plain, plain_body) = get_json(&client, "/companies").await;
    let (prefixed, prefixed_body) = get_json(&client, "/api/companies").await;

    assert_eq!(plain, Status::Ok);
    assert_eq!(prefixed, Status::Ok);
    assert_eq!(plain_body, prefixed_body);
    assert_eq!(plain_body.as_array().map(Vec::len), Some(7));
}

#[rocket::async_test]
async fn match_returns_top_five_best_first() {
    let client = client().await;

    let (status, body) = get_json(&client, "/match-companies/s1").await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body["success"], json!(true));
    let data = body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 5);
    // even ids want Java: language, skills, majors and university all match
    assert_eq!(data[0]["id"], json!("2"));
    assert_eq!(data[0]["matchScore"], json!(4));
    let scores: Vec<u64> = data
        .iter()
        .filter_map(|c| c["matchScore"].as_u64())
        .collect();
    assert_eq!(scores, vec![4, 4, 4, 3, 3]);
}

#[rocket::async_test]
async fn match_for_unknown_student_is_404() {
    let client = client().await;

    let (status, body) = get_json(&client, "/match-companies/nobody").await;

    assert_eq!(status, Status::NotFound);
    assert_eq!(body["message"], json!("Không tìm thấy thông tin sinh viên"));
}

#[rocket::async_test]
async fn review_lifecycle() {
    let client = client().await;

    let (status, body) = post_json(&client, "/companies/1/reviews", json!({ "user": "Lan" })).await;
    assert_eq!(status, Status::BadRequest);
    assert_eq!(body["message"], json!("Thiếu thông tin đánh giá"));

    let (status, body) = post_json(
        &client,
        "/companies/1/reviews",
        json!({ "user": "Lan", "content": "Good mentors", "rating": 5 }),
    )
    .await;
    assert_eq!(status, Status::Created);
    assert_eq!(body["reviews"].as_array().map(Vec::len), Some(2));
    let review_id = body["reviews"][1]["id"].as_str().expect("generated id").to_string();

    let (status, _) = post_json(
        &client,
        &format!("/companies/1/reviews/{}/replies", review_id),
        json!({ "user": "Hoàng Phong", "content": "Agreed" }),
    )
    .await;
    assert_eq!(status, Status::Created);

    let (status, body) = get_json(&client, "/companies/1/reviews").await;
    assert_eq!(status, Status::Ok);
    assert_eq!(body["count"], json!(2));
    assert_eq!(body["avgRating"], json!(4.5));
    assert_eq!(body["data"][0]["isCompanyMember"], json!(true));
    assert_eq!(body["data"][1]["rating"], json!(5));
    assert_eq!(body["data"][1]["replies"][0]["location"], json!("Hà Nội"));
}

#[rocket::async_test]
async fn review_vote_is_validated() {
    let client = client().await;

    let (status, body) = post_json(
        &client,
        "/companies/1/reviews/r1/vote",
        json!({ "voteType": "sideways" }),
    )
    .await;
    assert_eq!(status, Status::BadRequest);
    assert_eq!(body["message"], json!("Loại vote không hợp lệ"));

    let (status, _) = post_json(
        &client,
        "/companies/1/reviews/missing/vote",
        json!({ "voteType": "upvote" }),
    )
    .await;
    assert_eq!(status, Status::NotFound);

    let (status, body) = post_json(
        &client,
        "/companies/1/reviews/r1/vote",
        json!({ "voteType": "downvote" }),
    )
    .await;
    assert_eq!(status, Status::Ok);
    assert_eq!(body["reviewId"], json!("r1"));
}

#[rocket::async_test]
async fn forum_comments_require_post_id() {
    let client = client().await;

    let (status, body) = get_json(&client, "/forum/comments").await;
    assert_eq!(status, Status::BadRequest);
    assert_eq!(body["success"], json!(false));

    let (status, body) = get_json(&client, "/forum/comments?postId=p1").await;
    assert_eq!(status, Status::Ok);
    assert_eq!(body[0]["author"], json!("Lan"));
    assert_eq!(body[0]["time"], json!("9:05 3/1/2025"));
}

#[rocket::async_test]
async fn forum_posts_carry_counts() {
    let client = client().await;

    let (status, created) = post_json(&client, "/forum/posts", json!({ "title": "New", "content": "Body" })).await;
    assert_eq!(status, Status::Created);
    assert_eq!(created["userId"], json!("1"));

    let (status, body) = get_json(&client, "/forum/posts").await;
    assert_eq!(status, Status::Ok);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[0]["voteCount"], json!(1));
    assert_eq!(body[0]["commentCount"], json!(1));
}

#[rocket::async_test]
async fn votes_can_be_listed_and_changed() {
    let client = client().await;

    let (status, body) = post_json(
        &client,
        "/votes",
        json!({ "postId": "p1", "userId": 7, "type": "downvote" }),
    )
    .await;
    assert_eq!(status, Status::Created);
    assert_eq!(body["data"]["userId"], json!("7"));

    let (_, body) = get_json(&client, "/votes?postId=p1&userId=s1").await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let response = client
        .patch("/votes/v1")
        .header(ContentType::JSON)
        .body(json!({ "type": "downvote" }).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.expect("json body");
    assert_eq!(body["data"]["type"], json!("downvote"));

    let response = client
        .patch("/votes/nope")
        .header(ContentType::JSON)
        .body(json!({ "type": "upvote" }).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn unknown_route_and_cors() {
    let client = client().await;

    let response = client.get("/nowhere").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
    let body: Value = response.into_json().await.expect("json body");
    assert_eq!(body["message"], json!("Route not found"));

    let response = client.options("/api/forum/posts").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
}

#[rocket::async_test]
async fn health_check() {
    let client = client().await;

    let (status, body) = get_json(&client, "/health").await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body, json!("OK"));
}

#[rocket::async_test]
async fn preflight_answers_with_and_without_prefix() {
    let client = client().await;

    for uri in ["/companies/1/reviews", "/api/companies/1/reviews", "/api/votes/v1"] {
        let response = client.options(uri).dispatch().await;
        assert_eq!(response.status(), Status::Ok, "{}", uri);
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Methods"),
            Some("GET, POST, PUT, DELETE, PATCH, OPTIONS")
        );
    }
}

#[rocket::async_test]
async fn empty_body_reaches_field_validation() {
    let client = client().await;

    let cases = [
        ("/companies/1/reviews", "Thiếu thông tin đánh giá"),
        ("/companies/1/reviews/r1/vote", "Loại vote không hợp lệ"),
        ("/companies/1/reviews/r1/replies", "Thiếu thông tin trả lời"),
        ("/votes", "Thiếu thông tin vote"),
        ("/api/postComments", "Thiếu thông tin comment"),
    ];
    for (uri, message) in cases {
        let response = client.post(uri).dispatch().await;
        assert_eq!(response.status(), Status::BadRequest, "{}", uri);
        let body: Value = response.into_json().await.expect("json body");
        assert_eq!(body["message"], json!(message), "{}", uri);
    }

    let response = client.patch("/votes/v1").dispatch().await;
    assert_eq!(response.status(), Status::BadRequest);
    let body: Value = response.into_json().await.expect("json body");
    assert_eq!(body["message"], json!("Thiếu thông tin type"));
}

#[rocket::async_test]
async fn collections_can_be_read_by_id() {
    let client = client().await;

    let (status, users) = get_json(&client, "/users").await;
    assert_eq!(status, Status::Ok);
    assert_eq!(users[0]["name"], json!("Lan"));

    let (status, post) = get_json(&client, "/api/posts/p1").await;
    assert_eq!(status, Status::Ok);
    assert_eq!(post["title"], json!("Hello"));

    let (status, body) = get_json(&client, "/posts/nope").await;
    assert_eq!(status, Status::NotFound);
    assert_eq!(body["message"], json!("Không tìm thấy bài viết"));

    let (_, comments) = get_json(&client, "/postComments?postId=p1").await;
    assert_eq!(comments.as_array().map(Vec::len), Some(1));
    let (_, comments) = get_json(&client, "/postComments?postId=other").await;
    assert_eq!(comments.as_array().map(Vec::len), Some(0));

    let (status, comment) = get_json(&client, "/postComments/c1").await;
    assert_eq!(status, Status::Ok);
    assert_eq!(comment["content"], json!("Hi"));

    let (status, vote) = get_json(&client, "/votes/v1").await;
    assert_eq!(status, Status::Ok);
    assert_eq!(vote["type"], json!("upvote"));
}

#[rocket::async_test]
async fn deletes_remove_records() {
    let client = client().await;

    let response = client.delete("/votes/v1").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.expect("json body");
    assert_eq!(body["data"]["id"], json!("v1"));
    let (status, _) = get_json(&client, "/votes/v1").await;
    assert_eq!(status, Status::NotFound);

    let (status, _) = post_json(
        &client,
        "/postComments",
        json!({ "postId": "p1", "userId": "s1", "content": "Another" }),
    )
    .await;
    assert_eq!(status, Status::Created);

    let response = client.delete("/api/posts/p1").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let (_, posts) = get_json(&client, "/posts").await;
    assert_eq!(posts.as_array().map(Vec::len), Some(0));
    let (_, comments) = get_json(&client, "/postComments").await;
    assert_eq!(comments.as_array().map(Vec::len), Some(0));

    let response = client.delete("/postComments/c1").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let body: Value = response.into_json().await.expect("json body");
    assert_eq!(body["message"], json!("Không tìm thấy comment"));
}

#[rocket::async_test]
async fn forum_comment_time_is_set_by_the_server() {
    let client = client().await;
    let client_time = "2020-01-01T00:00:00.000Z";

    let (status, comment) = post_json(
        &client,
        "/forum/comments",
        json!({ "postId": "p1", "userId": "s1", "content": "Hi", "createdAt": client_time }),
    )
    .await;
    assert_eq!(status, Status::Created);
    assert_ne!(comment["createdAt"], json!(client_time));
    assert!(comment["createdAt"].as_str().is_some_and(|t| t.ends_with('Z')));

    let (status, body) = post_json(
        &client,
        "/postComments",
        json!({ "postId": "p1", "userId": "s1", "content": "Hi", "createdAt": client_time }),
    )
    .await;
    assert_eq!(status, Status::Created);
    assert_eq!(body["data"]["createdAt"], json!(client_time));
}
