//! Contact form: per-field validation and the one-shot submission to the
//! mail relay. The relay replies with JSON `{"success": bool, "message"?}`;
//! exactly one attempt is made per submit, with no retry.

use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use regex_lite::Regex;
use serde::Deserialize;

pub const SUBMIT_LABEL_SENDING: &str = "Sending...";
pub const SUCCESS_TEXT: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_TEXT: &str =
    "Sorry, there was an error sending your message. Please try again or email me directly.";
pub const FIX_ERRORS_TEXT: &str = "Please fix the errors in the form.";

const SUBMIT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Wire name of the field, as posted to the relay.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Validate one field. Leading/trailing whitespace never counts toward the
/// length rules. Returns the inline error message on failure.
pub fn validate(field: Field, raw: &str) -> Result<(), &'static str> {
    let value = raw.trim();
    match field {
        Field::Name if value.chars().count() < 2 => {
            Err("Name must be at least 2 characters long")
        }
        Field::Email if !email_regex().is_match(value) => {
            Err("Please enter a valid email address")
        }
        Field::Subject if value.chars().count() < 5 => {
            Err("Subject must be at least 5 characters long")
        }
        Field::Message if value.chars().count() < 10 => {
            Err("Message must be at least 10 characters long")
        }
        _ => Ok(()),
    }
}

/// A snapshot of the form's raw values, taken at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormData {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Validate every field, collecting all failures.
    pub fn validate_all(&self) -> Vec<(Field, &'static str)> {
        Field::ALL
            .iter()
            .filter_map(|&field| validate(field, self.value(field)).err().map(|e| (field, e)))
            .collect()
    }

    fn wire_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
    }
}

#[derive(Debug, Default, Deserialize)]
struct RelayResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Encode fields as a multipart/form-data body.
pub fn encode_multipart(fields: &[(&str, &str)], boundary: &str) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}

fn make_boundary() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("----CrabFolioForm{nanos:x}")
}

/// POST the form to the relay and interpret its JSON reply. Success requires
/// both an ok status and `success: true`; every other outcome is an `Err`
/// carrying the text to show the user. Blocking - run on a worker thread.
pub fn submit_message(endpoint: &str, form: &FormData) -> Result<(), String> {
    let boundary = make_boundary();
    let body = encode_multipart(&form.wire_fields(), &boundary);

    let response = minreq::post(endpoint)
        .with_header(
            "Content-Type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .with_timeout(SUBMIT_TIMEOUT_SECS)
        .with_body(body)
        .send()
        .map_err(|e| {
            log::error!("Contact form submission failed: {}", e);
            FAILURE_TEXT.to_string()
        })?;

    let ok = (200..300).contains(&response.status_code);
    let reply: RelayResponse = match response.json() {
        Ok(reply) => reply,
        Err(e) => {
            log::error!(
                "Mail relay returned unparseable body (status {}): {}",
                response.status_code,
                e
            );
            return Err(FAILURE_TEXT.to_string());
        }
    };

    if ok && reply.success {
        Ok(())
    } else {
        let text = reply
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| FAILURE_TEXT.to_string());
        log::error!(
            "Mail relay rejected submission (status {}): {}",
            response.status_code,
            text
        );
        Err(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::sync::mpsc;

    #[test]
    fn test_validate_name() {
        assert!(validate(Field::Name, "Al").is_ok());
        assert!(validate(Field::Name, "A").is_err());
        assert!(validate(Field::Name, "").is_err());
        // Whitespace does not count
        assert!(validate(Field::Name, "  B  ").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate(Field::Email, "a@b.com").is_ok());
        assert!(validate(Field::Email, "a@b").is_err());
        assert!(validate(Field::Email, "a b@c.com").is_err());
        assert!(validate(Field::Email, "@b.com").is_err());
        assert!(validate(Field::Email, " a@b.com ").is_ok());
    }

    #[test]
    fn test_validate_subject_and_message() {
        assert!(validate(Field::Subject, "Hello").is_ok());
        assert!(validate(Field::Subject, "Hi").is_err());
        assert!(validate(Field::Message, "This is long enough.").is_ok());
        assert!(validate(Field::Message, "too short").is_err());
    }

    #[test]
    fn test_validate_all_collects_every_failure() {
        let form = FormData {
            name: "A".to_string(),
            email: "bad".to_string(),
            subject: "ok subject".to_string(),
            message: "a message that is long enough".to_string(),
        };
        let errors = form.validate_all();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|(f, _)| *f == Field::Name));
        assert!(errors.iter().any(|(f, _)| *f == Field::Email));
    }

    #[test]
    fn test_multipart_encoding_shape() {
        let body = encode_multipart(&[("name", "Ada"), ("email", "ada@lovelace.dev")], "XYZ");
        let text = String::from_utf8(body).unwrap();
        assert!(text.starts_with("--XYZ\r\n"));
        assert!(text.contains("Content-Disposition: form-data; name=\"name\"\r\n\r\nAda\r\n"));
        assert!(text.contains("name=\"email\"\r\n\r\nada@lovelace.dev\r\n"));
        assert!(text.ends_with("--XYZ--\r\n"));
    }

    fn valid_form() -> FormData {
        FormData {
            name: "Ada Lovelace".to_string(),
            email: "ada@lovelace.dev".to_string(),
            subject: "Analytical engines".to_string(),
            message: "I have a proposal for a collaboration.".to_string(),
        }
    }

    /// Serve exactly one request, sending `status`/`body` back and pushing
    /// the request's payload into the returned channel.
    fn serve_once(status: u16, body: &'static str) -> (String, mpsc::Receiver<String>) {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            if let Ok(mut request) = server.recv() {
                let mut payload = String::new();
                let _ = request.as_reader().read_to_string(&mut payload);
                let _ = tx.send(payload);
                let header =
                    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                        .unwrap();
                let response = tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(header);
                let _ = request.respond(response);
            }
        });
        (format!("http://127.0.0.1:{port}"), rx)
    }

    #[test]
    fn test_submit_success() {
        let (endpoint, rx) = serve_once(200, r#"{"success": true}"#);
        let result = submit_message(&endpoint, &valid_form());
        assert!(result.is_ok());

        // The relay saw a multipart body with all four fields
        let payload = rx.recv().unwrap();
        assert!(payload.contains("name=\"name\""));
        assert!(payload.contains("Ada Lovelace"));
        assert!(payload.contains("name=\"message\""));
    }

    #[test]
    fn test_submit_relay_says_no() {
        let (endpoint, _rx) =
            serve_once(200, r#"{"success": false, "message": "Mailbox over quota"}"#);
        let result = submit_message(&endpoint, &valid_form());
        assert_eq!(result.unwrap_err(), "Mailbox over quota");
    }

    #[test]
    fn test_submit_non_ok_status_falls_back() {
        let (endpoint, _rx) = serve_once(500, r#"{"success": true}"#);
        let result = submit_message(&endpoint, &valid_form());
        // success:true with a failed status is still a failure
        assert_eq!(result.unwrap_err(), FAILURE_TEXT);
    }

    #[test]
    fn test_submit_malformed_json() {
        let (endpoint, _rx) = serve_once(200, "<html>not json</html>");
        let result = submit_message(&endpoint, &valid_form());
        assert_eq!(result.unwrap_err(), FAILURE_TEXT);
    }

    #[test]
    fn test_submit_connection_refused() {
        // Nothing listens on port 9; the transport error maps to the fallback
        let result = submit_message("http://127.0.0.1:9", &valid_form());
        assert_eq!(result.unwrap_err(), FAILURE_TEXT);
    }
}
