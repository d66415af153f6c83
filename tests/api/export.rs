use serde::Deserialize;

use crate::helpers::TestApp;

#[derive(Deserialize, Debug)]
struct ExportBody{
    message: String,
    file: String
}

#[actix_web::test]
async fn export_writes_every_user_to_csv(){
    let app = TestApp::spawn_app().await;
    let ann = app.create_user("Ann", "a@x.com").await;
    let bob = app.post_user(serde_json::json!({
        "name": "Bob",
        "email": "b@x.com",
        "address": "2 Rd, Springfield"
    })).await;
    assert_eq!(bob.status().as_u16(), 201);

    let response = app.get("/users/export").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: ExportBody = response.json().await.unwrap();
    assert_eq!(body.message, "Users exported successfully");
    assert!(body.file.starts_with("users_"));
    assert!(body.file.ends_with(".csv"));

    let contents = std::fs::read_to_string(app.export_dir.join(&body.file))
                    .expect("Failed to read exported file");

    assert_eq!(
        contents,
        format!(
            "id,name,email,address\n{},Ann,a@x.com,1 Rd\n{},Bob,b@x.com,\"2 Rd, Springfield\"\n",
            ann.id,
            ann.id + 1
        )
    );
}

#[actix_web::test]
async fn export_without_users_writes_only_the_header(){
    let app = TestApp::spawn_app().await;

    let response = app.get("/users/export").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: ExportBody = response.json().await.unwrap();
    let contents = std::fs::read_to_string(app.export_dir.join(&body.file)).unwrap();

    assert_eq!(contents, "id,name,email,address\n");
}
