//! Decode a PATCH body and apply only the fields it actually carried.

use json_partial::Field;
use serde::Deserialize;

#[derive(Debug, Default)]
struct User {
    name: String,
    nickname: String,
    age: i64,
}

#[derive(Debug, Default, Deserialize)]
struct UserPatch {
    #[serde(default)]
    name: Field<String>,
    #[serde(default)]
    nickname: Field<String>,
    #[serde(default)]
    age: Field<i64>,
}

fn apply(user: &mut User, patch: UserPatch) {
    if patch.name.valid {
        user.name = patch.name.value;
    }
    if patch.nickname.valid {
        user.nickname = patch.nickname.value;
    }
    if patch.age.valid {
        user.age = patch.age.value;
    }
}

fn main() {
    let mut user = User {
        name: "Ann".into(),
        nickname: "annie".into(),
        age: 30,
    };

    // "nickname": "" clears the nickname; "age" stays untouched because its
    // key is missing, not because its value is zero.
    let body = r#"{"name": "Anna", "nickname": ""}"#;
    let patch: UserPatch = serde_json::from_str(body).expect("valid patch body");
    apply(&mut user, patch);

    println!("{user:?}");
}
