//! User record types for the directory service.
//!
//! Field names serialize in camelCase to match the wire contract of the
//! backing service. Role-specific fields are an internally tagged enum
//! flattened into the record, so `{"role": "student", "studyMinutes": ...}`
//! round-trips without a wrapper object.

use serde::{Deserialize, Serialize};

/// Role-specific profile fields, tagged by the `role` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleProfile {
    #[serde(rename_all = "camelCase")]
    Student {
        study_minutes: u32,
        task_code: u32,
        score: u32,
        study_langs: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Mentor {
        experience_days: u32,
        available_start_code: u32,
        available_end_code: u32,
        use_langs: Vec<String>,
    },
}

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub post_code: String,
    pub phone: String,
    pub hobbies: Vec<String>,
    pub url: String,
    #[serde(flatten)]
    pub profile: RoleProfile,
}

/// Creation payload: every `User` field except the server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub post_code: String,
    pub phone: String,
    pub hobbies: Vec<String>,
    pub url: String,
    #[serde(flatten)]
    pub profile: RoleProfile,
}

impl NewUser {
    /// Attach a server-assigned id, producing the stored record.
    pub fn into_user(self, id: u64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
            post_code: self.post_code,
            phone: self.phone,
            hobbies: self.hobbies,
            url: self.url,
            profile: self.profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_student_serializes_with_camel_case_and_role_tag() {
        let user = User {
            id: 1,
            name: "Sato".to_string(),
            email: "sato@example.com".to_string(),
            age: 26,
            post_code: "123-4567".to_string(),
            phone: "012-3456-7890".to_string(),
            hobbies: vec!["running".to_string()],
            url: "https://example.com/sato".to_string(),
            profile: RoleProfile::Student {
                study_minutes: 120,
                task_code: 101,
                score: 68,
                study_langs: vec!["Rust".to_string()],
            },
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["role"], "student");
        assert_eq!(value["postCode"], "123-4567");
        assert_eq!(value["studyMinutes"], 120);
        assert_eq!(value["taskCode"], 101);
        assert!(value.get("study_minutes").is_none());
    }

    #[test]
    fn test_mentor_deserializes_from_wire_shape() {
        let user: User = serde_json::from_value(json!({
            "id": 2,
            "name": "Suzuki",
            "email": "suzuki@example.com",
            "age": 31,
            "postCode": "765-4321",
            "phone": "098-7654-3210",
            "hobbies": ["climbing"],
            "url": "https://example.com/suzuki",
            "role": "mentor",
            "experienceDays": 1850,
            "availableStartCode": 201,
            "availableEndCode": 302,
            "useLangs": ["Rust", "Go"]
        }))
        .unwrap();

        assert_eq!(user.id, 2);
        match user.profile {
            RoleProfile::Mentor { experience_days, ref use_langs, .. } => {
                assert_eq!(experience_days, 1850);
                assert_eq!(use_langs, &["Rust", "Go"]);
            }
            RoleProfile::Student { .. } => panic!("expected mentor profile"),
        }
    }

    #[test]
    fn test_into_user_keeps_payload_fields() {
        let payload = NewUser {
            name: "Tanaka".to_string(),
            email: "tanaka@example.com".to_string(),
            age: 22,
            post_code: "111-2222".to_string(),
            phone: "011-2233-4455".to_string(),
            hobbies: vec![],
            url: "https://example.com/tanaka".to_string(),
            profile: RoleProfile::Student {
                study_minutes: 45,
                task_code: 204,
                score: 91,
                study_langs: vec!["TypeScript".to_string()],
            },
        };

        let user = payload.clone().into_user(7);
        assert_eq!(user.id, 7);
        assert_eq!(user.name, payload.name);
        assert_eq!(user.profile, payload.profile);
    }
}
