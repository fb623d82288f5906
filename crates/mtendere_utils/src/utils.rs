use chrono::NaiveDateTime;
use mtendere_error::error::UtilError;
use uuid::Uuid;

/// Check if a string is a valid UUIDv4
///
/// # Arguments
///
/// * `uid` - A string slice that holds the UUID
///
/// # Returns
///
/// * `bool` - A boolean indicating if the UUID is valid
pub fn is_valid_uuid4(uid: &str) -> Result<bool, UtilError> {
    match Uuid::parse_str(uid) {
        Ok(uuid) => Ok(uuid.get_version_num() == 4),
        Err(_) => Err(UtilError::UuidError),
    }
}

pub fn get_utc_datetime() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

pub fn get_utc_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Derive a URL slug from a post title: lowercase alphanumerics joined
/// by single hyphens, everything else dropped.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_hyphen = true;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_hyphen = false;
        } else if !last_hyphen {
            slug.push('-');
            last_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_uuid4() {
        let uid = Uuid::new_v4().to_string();
        assert!(is_valid_uuid4(&uid).unwrap());

        assert!(is_valid_uuid4("not-a-uuid").is_err());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  2025 Scholarship   Guide  "), "2025-scholarship-guide");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
    }
}
