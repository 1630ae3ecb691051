use std::io::Read;
use std::sync::mpsc::{self, Receiver};

pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub authorization: Option<String>,
    pub kaonavi_token: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

pub struct MockApi {
    pub endpoint: String,
    requests: Receiver<RecordedRequest>,
}

impl MockApi {
    /// Serve the scripted responses in order on a local port, recording every
    /// request; responses the client never asks for stay unserved
    pub fn serve(responses: Vec<MockResponse>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock server");
        let port = server
            .server_addr()
            .to_ip()
            .expect("ip listen address")
            .port();
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            for response in responses {
                let Ok(mut request) = server.recv() else {
                    return;
                };

                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);

                let header = |name: &'static str| {
                    request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv(name))
                        .map(|h| h.value.as_str().to_string())
                };
                let recorded = RecordedRequest {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    authorization: header("Authorization"),
                    kaonavi_token: header("Kaonavi-Token"),
                    content_type: header("Content-Type"),
                    body,
                };

                if tx.send(recorded).is_err() {
                    return;
                }
                let _ = request.respond(
                    tiny_http::Response::from_string(response.body)
                        .with_status_code(response.status),
                );
            }
        });

        Self {
            endpoint: format!("http://127.0.0.1:{}/", port),
            requests: rx,
        }
    }

    /// Requests received so far, in arrival order; call after the client
    /// process has exited
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.try_iter().collect()
    }
}
