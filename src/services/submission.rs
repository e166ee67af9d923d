//! Recording claimed payments
//!
//! A claimed payment is sent to a hosted form as URL-encoded query
//! parameters on a POST with no body. The response is not inspected: the
//! form endpoint answers every request the same way, so the only failure
//! the caller can observe is a transport error.

use chrono::{DateTime, Utc};
use serde::Serialize;
use urlencoding::encode;
use uuid::Uuid;

use crate::config::settings::{FormEndpoint, Settings};
use crate::error::{CheckoutError, CheckoutResult};
use crate::models::OrderForm;

/// One claimed payment, ready to be recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Local correlation ID, only used in logs
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Calling code and local number
    pub phone: String,
    pub course: String,
    pub txn_id: String,
    pub created_at: DateTime<Utc>,
}

impl Submission {
    /// Capture the fields of an order
    pub fn from_order(order: &OrderForm) -> Self {
        Self::new(
            &order.name,
            &order.email,
            order.full_phone(),
            &order.course,
            &order.txn_id,
        )
    }

    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        course: impl Into<String>,
        txn_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            course: course.into(),
            txn_id: txn_id.into(),
            created_at: Utc::now(),
        }
    }

    /// Prefilled form-response URL carrying every field
    pub fn form_url(&self, endpoint: &FormEndpoint) -> String {
        format!(
            "{}?usp=pp_url&{}={}&{}={}&{}={}&{}={}&{}={}",
            endpoint.url,
            endpoint.name_entry,
            encode(&self.name),
            endpoint.email_entry,
            encode(&self.email),
            endpoint.phone_entry,
            encode(&self.phone),
            endpoint.course_entry,
            encode(&self.course),
            endpoint.txn_id_entry,
            encode(&self.txn_id),
        )
    }
}

/// Destination for claimed payments
pub trait FormSink: Send + Sync {
    /// Record a submission
    ///
    /// `Ok` means the request went out; it says nothing about whether the
    /// form accepted it.
    fn submit(&self, submission: &Submission) -> CheckoutResult<()>;
}

/// Posts submissions to a Google Forms `formResponse` endpoint
pub struct HttpFormSink {
    client: reqwest::blocking::Client,
    endpoint: FormEndpoint,
}

impl HttpFormSink {
    pub fn new(endpoint: FormEndpoint, timeout: Option<std::time::Duration>) -> CheckoutResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CheckoutError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    pub fn from_settings(settings: &Settings) -> CheckoutResult<Self> {
        Self::new(settings.form.clone(), settings.request_timeout())
    }
}

impl FormSink for HttpFormSink {
    fn submit(&self, submission: &Submission) -> CheckoutResult<()> {
        let url = submission.form_url(&self.endpoint);
        tracing::info!(submission = %submission.id, "recording payment");

        let response = self.client.post(&url).send().map_err(|e| {
            tracing::warn!(submission = %submission.id, error = %e, "recording payment failed");
            CheckoutError::Network(e.to_string())
        })?;

        // Any answer counts as delivered
        let status = response.status();
        if status.is_success() {
            tracing::debug!(submission = %submission.id, %status, "form endpoint answered");
        } else {
            tracing::warn!(submission = %submission.id, %status, "form endpoint answered with an error status");
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Sink that keeps submissions in memory and can be told to fail
    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub submissions: Mutex<Vec<Submission>>,
        pub fail_with: Mutex<Option<String>>,
    }

    impl RecordingSink {
        pub fn failing(message: &str) -> Self {
            Self {
                submissions: Mutex::new(Vec::new()),
                fail_with: Mutex::new(Some(message.to_string())),
            }
        }

        pub fn count(&self) -> usize {
            self.submissions.lock().unwrap().len()
        }

        pub fn last(&self) -> Option<Submission> {
            self.submissions.lock().unwrap().last().cloned()
        }

        pub fn recover(&self) {
            *self.fail_with.lock().unwrap() = None;
        }
    }

    impl FormSink for RecordingSink {
        fn submit(&self, submission: &Submission) -> CheckoutResult<()> {
            if let Some(message) = self.fail_with.lock().unwrap().clone() {
                return Err(CheckoutError::Network(message));
            }
            self.submissions.lock().unwrap().push(submission.clone());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    use super::*;
    use crate::models::Money;

    fn submission() -> Submission {
        Submission::new(
            "Asha Rao",
            "asha@x.com",
            "+919876543210",
            "Android Security & Hacking",
            "UPI12345678",
        )
    }

    #[test]
    fn test_form_url_encodes_every_field() {
        let url = submission().form_url(&FormEndpoint::default());
        assert_eq!(
            url,
            "https://docs.google.com/forms/d/e/1FAIpQLSdT90vozennnozOGeGeJ0TgfKNnRnnvwBVfiEQTzKpPn-f87w/formResponse\
             ?usp=pp_url&entry.913204754=Asha%20Rao&entry.1327490220=asha%40x.com\
             &entry.1829641072=%2B919876543210&entry.1953753319=Android%20Security%20%26%20Hacking\
             &entry.1832110819=UPI12345678"
        );
    }

    #[test]
    fn test_from_order_uses_full_phone() {
        let mut order = OrderForm::new("Course", Money::from_rupees(1));
        order.phone = "9876543210".into();
        order.country = crate::models::CountrySelection::from_code("+44").unwrap();
        order.txn_id = "T1234567890".into();

        let s = Submission::from_order(&order);
        assert_eq!(s.phone, "+449876543210");
        assert_eq!(s.txn_id, "T1234567890");
    }

    #[test]
    fn test_http_sink_posts_to_endpoint() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let (tx, rx) = mpsc::channel();

        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .unwrap();
            let text = String::from_utf8_lossy(&request).to_string();
            tx.send(text.lines().next().unwrap_or_default().to_string())
                .unwrap();
        });

        let endpoint = FormEndpoint {
            url: format!("http://127.0.0.1:{}/formResponse", port),
            ..FormEndpoint::default()
        };
        let sink = HttpFormSink::new(endpoint, Some(Duration::from_secs(5))).unwrap();
        sink.submit(&submission()).unwrap();

        let request_line = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        server.join().unwrap();
        assert!(request_line.starts_with(
            "POST /formResponse?usp=pp_url&entry.913204754=Asha%20Rao&entry.1327490220=asha%40x.com"
        ));
        assert!(request_line.contains("&entry.1832110819=UPI12345678 HTTP/1.1"));
    }

    #[test]
    fn test_http_sink_reports_network_failure() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let endpoint = FormEndpoint {
            url: format!("http://127.0.0.1:{}/formResponse", port),
            ..FormEndpoint::default()
        };
        let sink = HttpFormSink::new(endpoint, Some(Duration::from_secs(5))).unwrap();

        let err = sink.submit(&submission()).unwrap_err();
        assert!(err.is_network());
    }
}
