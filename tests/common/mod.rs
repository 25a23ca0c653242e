#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use user_directory::infrastructure::cache::InMemoryPageCache;
use user_directory::infrastructure::directory::{DirectoryClient, DirectoryService, HttpTransport};

pub const API_PATH: &str = "/api/";

pub fn user_json(first: &str, last: &str, email: &str, username: &str) -> Value {
    json!({
        "gender": "female",
        "name": { "title": "Ms", "first": first, "last": last },
        "location": {
            "street": { "number": 42, "name": "Harbour Rd" },
            "city": "Auckland",
            "state": "Auckland",
            "country": "New Zealand",
            "postcode": "1010",
            "coordinates": { "latitude": "-36.8485", "longitude": "174.7633" },
            "timezone": { "offset": "+12:00", "description": "Auckland, Wellington" }
        },
        "email": email,
        "login": {
            "uuid": format!("uuid-{}", username),
            "username": username,
            "password": "secret",
            "salt": "salt",
            "md5": "md5",
            "sha1": "sha1",
            "sha256": "sha256"
        },
        "dob": { "date": "1990-05-05T00:00:00.000Z", "age": 36 },
        "registered": { "date": "2015-05-05T00:00:00.000Z", "age": 11 },
        "phone": "(021) 555-0100",
        "cell": "(021) 555-0101",
        "id": { "name": "", "value": null },
        "picture": {
            "large": "https://randomuser.me/api/portraits/women/2.jpg",
            "medium": "https://randomuser.me/api/portraits/med/women/2.jpg",
            "thumbnail": "https://randomuser.me/api/portraits/thumb/women/2.jpg"
        },
        "nat": "NZ"
    })
}

pub fn page_json(users: Vec<Value>, page: u32, seed: &str) -> Value {
    let count = users.len();
    json!({
        "results": users,
        "info": { "seed": seed, "results": count, "page": page, "version": "1.4" }
    })
}

/// `count` users named `{prefix}{n}`, all matching `prefix` when searched
pub fn tagged_users(prefix: &str, count: usize) -> Vec<Value> {
    (1..=count)
        .map(|i| {
            let tag = format!("{}{}", prefix, i);
            let lower = tag.to_lowercase();
            user_json(&tag, "Example", &format!("{}@example.com", lower), &lower)
        })
        .collect()
}

pub fn client(server_uri: &str) -> DirectoryClient<HttpTransport> {
    DirectoryClient::with_base_url(
        HttpTransport::new(),
        Arc::new(InMemoryPageCache::new()),
        format!("{}{}", server_uri, API_PATH),
    )
}

pub fn service(server_uri: &str) -> DirectoryService<HttpTransport> {
    DirectoryService::new(client(server_uri))
}
