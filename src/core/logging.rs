//! Logging utilities with request context support.
//!
//! The upstream `requestId` of a generation call is kept in task-local
//! storage so every log line emitted while serving that call can carry it
//! without threading it through each function.

use chrono::Utc;
use rand::Rng;

tokio::task_local! {
    /// Task-local storage for the current request ID.
    pub static REQUEST_ID: String;
}

const BASE36_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random suffix of a request ID.
pub const REQUEST_ID_SUFFIX_LEN: usize = 9;

/// Get the current request ID from context, if set.
///
/// Returns an empty string if no request ID is set.
pub fn get_request_id() -> String {
    REQUEST_ID.try_with(|id| id.clone()).unwrap_or_default()
}

/// Generate a request ID of the form `req-<epoch-millis>-<9 base36 chars>`.
///
/// The ID is informational only; it is not used for deduplication.
pub fn generate_request_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..REQUEST_ID_SUFFIX_LEN)
        .map(|_| BASE36_ALPHABET[rng.gen_range(0..BASE36_ALPHABET.len())] as char)
        .collect();

    format!("req-{}-{}", Utc::now().timestamp_millis(), suffix)
}

/// Generate a correlation ID for an inbound HTTP request.
pub fn generate_correlation_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_request_id_get() {
        let request_id = "req-1-abcdefghi".to_string();
        REQUEST_ID
            .scope(request_id.clone(), async {
                assert_eq!(get_request_id(), "req-1-abcdefghi");
            })
            .await;
    }

    #[tokio::test]
    async fn test_request_id_isolation() {
        let task1 = tokio::spawn(async {
            REQUEST_ID
                .scope("request-1".to_string(), async {
                    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
                    get_request_id()
                })
                .await
        });

        let task2 = tokio::spawn(async {
            REQUEST_ID
                .scope("request-2".to_string(), async {
                    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
                    get_request_id()
                })
                .await
        });

        assert_eq!(task1.await.unwrap(), "request-1");
        assert_eq!(task2.await.unwrap(), "request-2");
    }

    #[tokio::test]
    async fn test_request_id_default() {
        assert_eq!(get_request_id(), "");
    }

    #[test]
    fn test_generate_request_id_format() {
        let id = generate_request_id();
        let parts: Vec<&str> = id.splitn(3, '-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "req");
        assert!(parts[1].parse::<i64>().unwrap() > 0);
        assert_eq!(parts[2].len(), REQUEST_ID_SUFFIX_LEN);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_request_id_unique() {
        let id1 = generate_request_id();
        let id2 = generate_request_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_generate_correlation_id() {
        let id = generate_correlation_id();
        assert_eq!(id.len(), 36);
        assert_eq!(id.split('-').count(), 5);
    }
}
