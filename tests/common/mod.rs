//! Iron server standing in for the launcher CDN.
//!
//! Serves fixed bodies by request path and answers 404 for anything else.

use std::collections::HashMap;

use iron::{status, Handler, Iron, IronResult, Listening, Request, Response};

#[derive(Clone)]
pub struct MockCdn {
    routes: HashMap<String, (status::Status, String)>,
}

impl MockCdn {
    pub fn new() -> MockCdn {
        MockCdn {
            routes: HashMap::new(),
        }
    }

    pub fn serve(mut self, path: &str, body: &str) -> MockCdn {
        self.routes
            .insert(path.to_string(), (status::Ok, body.to_string()));
        self
    }

    pub fn fail(mut self, path: &str, code: status::Status) -> MockCdn {
        self.routes
            .insert(path.to_string(), (code, String::new()));
        self
    }

    /// Returns the running server and its base url, e.g. `http://127.0.0.1:8000`.
    pub fn start(self) -> (Listening, String) {
        for port in 8000..9000 {
            if let Ok(listener) = Iron::new(self.clone()).http(("127.0.0.1", port)) {
                return (listener, format!("http://127.0.0.1:{}", port));
            }
        }
        panic!("No available port found");
    }
}

impl Handler for MockCdn {
    fn handle(&self, req: &mut Request) -> IronResult<Response> {
        let path = format!("/{}", req.url.path().join("/"));
        match self.routes.get(&path) {
            Some((code, body)) => Ok(Response::with((code.clone(), body.clone()))),
            None => Ok(Response::with((status::NotFound, "not found"))),
        }
    }
}
