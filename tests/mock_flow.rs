//! End-to-end flow against the mock transport, driven through the bound
//! client exactly as application code would.

use userdir::{ApiClient, ClientConfig, NewUser, RoleProfile};

fn mock_client() -> ApiClient {
    // Default config is mock mode with a fresh empty store per client.
    ApiClient::from_config(&ClientConfig::default()).expect("client builds")
}

fn new_student(name: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        age: 24,
        post_code: "000-1111".to_string(),
        phone: "090-0000-1111".to_string(),
        hobbies: vec!["reading".to_string()],
        url: format!("https://example.com/{}", name.to_lowercase()),
        profile: RoleProfile::Student {
            study_minutes: 60,
            task_code: 100,
            score: 50,
            study_langs: vec!["Rust".to_string()],
        },
    }
}

#[tokio::test]
async fn empty_directory_reports_not_found() {
    let client = mock_client();
    let err = client.user().get_users().await.unwrap_err();
    assert_eq!(err.status, 404);
    assert!(!err.message.is_empty());
}

#[tokio::test]
async fn create_then_list_round_trip() {
    let client = mock_client();

    let created = client.user().create_user(new_student("A")).await.unwrap();
    assert_eq!(created.status, Some(201));
    assert_eq!(created.data.id, 1);
    assert_eq!(created.data.name, "A");

    let listed = client.user().get_users().await.unwrap();
    assert_eq!(listed.status, Some(200));
    assert_eq!(listed.data, vec![created.data]);
}

#[tokio::test]
async fn ids_grow_from_current_maximum() {
    let client = mock_client();

    let first = client.user().create_user(new_student("A")).await.unwrap();
    let second = client.user().create_user(new_student("B")).await.unwrap();
    assert_eq!(first.data.id, 1);
    assert_eq!(second.data.id, 2);

    let listed = client.user().get_users().await.unwrap();
    assert_eq!(
        listed.data.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[tokio::test]
async fn generic_and_typed_surfaces_share_one_path() {
    let client = mock_client();
    client.user().create_user(new_student("A")).await.unwrap();

    // The generic entry point sees the record the typed surface created.
    let response = client
        .invoke("user", "getUsers", serde_json::Value::Null)
        .await
        .unwrap();
    assert_eq!(response.status, Some(200));
    assert_eq!(response.data[0]["name"], "A");
    assert_eq!(response.data[0]["role"], "student");
}
